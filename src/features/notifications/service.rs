use crate::shared::errors::AppResult;
use async_trait::async_trait;
use log::info;

/// 通知送信サービスの外部コラボレーターインターフェース
///
/// 通知の実送信（メール・プッシュ等）はこのシステムの外部にある副作用であり、
/// ここでは契約（インターフェース）のみを定義する。
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// 単一の支払いに対する通知送信を要求する
    async fn send_notification(&self, payment_id: &str) -> AppResult<()>;

    /// 複数の支払いに対する通知送信を要求する
    async fn send_notifications(&self, payment_ids: &[String]) -> AppResult<()>;
}

/// 未接続の通知サービスに対するスタブ実装
///
/// 要求を受け付けた事実をログに残すだけで、実際の送信は行わない。
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationServiceStub;

#[async_trait]
impl NotificationService for NotificationServiceStub {
    async fn send_notification(&self, payment_id: &str) -> AppResult<()> {
        info!("通知送信リクエスト（スタブ）: payment_id={payment_id}");
        Ok(())
    }

    async fn send_notifications(&self, payment_ids: &[String]) -> AppResult<()> {
        info!(
            "通知一括送信リクエスト（スタブ）: count={}",
            payment_ids.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_acknowledges_requests() {
        // スタブは常に成功を返す
        let stub = NotificationServiceStub;
        assert!(stub.send_notification("pay-1").await.is_ok());
        assert!(stub
            .send_notifications(&["pay-1".to_string(), "pay-2".to_string()])
            .await
            .is_ok());
    }
}
