/// 支払い管理機能モジュール
///
/// このモジュールは支払い管理画面に関連するすべての機能を提供します：
/// - 支払いデータモデルとステータス遷移の部分更新
/// - テキスト・ステータスによるクライアント側フィルタリングと件数集計
/// - 一括操作の対象選択（単一トグル・全選択トグル）
/// - 一括操作チェックリストと固定順序の実行エンジン
/// - 支払い管理画面の状態管理（詳細表示を含む）
// サブモジュールの宣言
pub mod bulk_actions;
pub mod filters;
pub mod models;
pub mod repository;
pub mod screen;
pub mod selection;

// 公開インターフェース：外部から使用可能な型と関数をエクスポート

// モデル
pub use models::{MarkPaidPatch, Payment, PaymentStatus, StatusCounts};

// フィルター
pub use filters::{status_counts, PaymentFilter, StatusFilter};

// 選択状態
pub use selection::SelectionTracker;

// 一括操作
pub use bulk_actions::{ActionChecklist, BulkActionExecutor, BulkActionKind, ChecklistState};

// リポジトリ（ストア操作）
pub use repository::PaymentStore;

// 画面状態
pub use screen::PaymentsScreen;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        // モジュールが正しくエクスポートされていることを確認

        // モデルのエクスポート確認
        let _payment: Option<Payment> = None;
        let _status: Option<PaymentStatus> = None;
        let _filter: Option<PaymentFilter> = None;
        let _selection: Option<SelectionTracker> = None;
        let _checklist: Option<ActionChecklist> = None;

        // この時点でコンパイルが通れば、エクスポートは正しく機能している
    }
}
