use crate::shared::errors::AppResult;
use async_trait::async_trait;
use log::info;

/// 領収書生成サービスの外部コラボレーターインターフェース
///
/// 実際の領収書生成はこのシステムの外部にある副作用であり、ここでは
/// 契約（インターフェース）のみを定義する。
#[async_trait]
pub trait ReceiptService: Send + Sync {
    /// 単一の支払いに対する領収書生成を要求する
    async fn generate_receipt(&self, payment_id: &str) -> AppResult<()>;

    /// 複数の支払いに対する領収書生成を要求する
    async fn generate_receipts(&self, payment_ids: &[String]) -> AppResult<()>;
}

/// 未接続の領収書サービスに対するスタブ実装
///
/// 要求を受け付けた事実をログに残すだけで、実際の生成は行わない。
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptServiceStub;

#[async_trait]
impl ReceiptService for ReceiptServiceStub {
    async fn generate_receipt(&self, payment_id: &str) -> AppResult<()> {
        info!("領収書生成リクエスト（スタブ）: payment_id={payment_id}");
        Ok(())
    }

    async fn generate_receipts(&self, payment_ids: &[String]) -> AppResult<()> {
        info!(
            "領収書一括生成リクエスト（スタブ）: count={}",
            payment_ids.len()
        );
        Ok(())
    }
}
