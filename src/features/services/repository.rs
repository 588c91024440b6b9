use super::models::Service;
use crate::shared::api_client::{OrderBy, StoreClient};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// サービスコレクションの読み取りインターフェース
///
/// 画面層はHTTPに直接依存せず、このトレイト越しにストアへアクセスする。
#[async_trait]
pub trait ServiceStore: Send + Sync {
    /// サービス一覧を名前昇順で全件取得する
    async fn fetch_services(&self) -> AppResult<Vec<Service>>;
}

#[async_trait]
impl ServiceStore for StoreClient {
    async fn fetch_services(&self) -> AppResult<Vec<Service>> {
        self.fetch_all("services", OrderBy::asc("name")).await
    }
}
