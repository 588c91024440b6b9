use super::models::{MarkPaidPatch, Payment};
use crate::shared::api_client::{OrderBy, StoreClient};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// 支払いストアへのアクセスインターフェース
///
/// 画面状態はこのトレイト経由でストアと通信する。テストではインメモリの
/// 実装に差し替える。
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// 支払いを全件取得する（作成日時の降順）
    ///
    /// # 戻り値
    /// 新しい順に並んだ支払いのリスト
    async fn fetch_payments(&self) -> AppResult<Vec<Payment>>;

    /// 指定の支払いを支払い済みへ遷移させる
    ///
    /// 送信される更新は部分更新（3フィールドのみ）。
    ///
    /// # 引数
    /// * `id` - 支払いID
    /// * `patch` - 支払い済み遷移の部分更新フィールドマップ
    async fn mark_as_paid(&self, id: &str, patch: &MarkPaidPatch) -> AppResult<()>;
}

#[async_trait]
impl PaymentStore for StoreClient {
    async fn fetch_payments(&self) -> AppResult<Vec<Payment>> {
        self.fetch_all("payments", OrderBy::desc("created_at"))
            .await
    }

    async fn mark_as_paid(&self, id: &str, patch: &MarkPaidPatch) -> AppResult<()> {
        self.patch_by_id("payments", id, patch).await
    }
}
