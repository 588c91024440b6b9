/// 領収書機能モジュール
///
/// 領収書生成の外部コラボレーターインターフェースとスタブ実装を提供します。
/// 実際の生成処理は外部システムの責務です。
// サブモジュールの宣言
pub mod service;

// 公開インターフェース：外部から使用可能な型と関数をエクスポート
pub use service::{ReceiptService, ReceiptServiceStub};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        // モジュールが正しくエクスポートされていることを確認
        let _stub: Option<ReceiptServiceStub> = None;
    }
}
