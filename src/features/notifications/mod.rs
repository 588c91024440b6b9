/// 通知機能モジュール
///
/// 支払い通知送信の外部コラボレーターインターフェースとスタブ実装を提供します。
/// 実際の送信処理は外部システムの責務です。
// サブモジュールの宣言
pub mod service;

// 公開インターフェース：外部から使用可能な型と関数をエクスポート
pub use service::{NotificationService, NotificationServiceStub};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        // モジュールが正しくエクスポートされていることを確認
        let _stub: Option<NotificationServiceStub> = None;
    }
}
