/// 汎用ストアAPIクライアント
///
/// ホスト型リレーショナルストアのテーブル指向REST API（PostgREST互換）と
/// 通信する汎用的なクライアント。サービス・支払いの各コレクションで使用可能。
use crate::shared::config::environment::StoreConfig;
use crate::shared::errors::{AppError, AppResult};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

/// プロセス全体で共有するHTTPクライアント
static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// ストアAPIクライアント設定
#[derive(Debug, Clone)]
pub struct StoreClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_seconds: u64,
}

impl StoreClientConfig {
    /// 環境設定からクライアント設定を作成
    pub fn from_env() -> AppResult<Self> {
        let store_config = StoreConfig::from_env()
            .map_err(|e| AppError::configuration(format!("ストア設定の読み込みに失敗: {e}")))?;
        store_config.validate().map_err(AppError::configuration)?;

        Ok(Self {
            base_url: store_config.base_url,
            api_key: store_config.api_key,
            timeout_seconds: store_config.timeout_seconds,
        })
    }
}

/// コレクション取得時の並び順指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub ascending: bool,
}

impl OrderBy {
    /// 昇順の並び順を作成
    pub fn asc(column: &'static str) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    /// 降順の並び順を作成
    pub fn desc(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }

    /// クエリパラメータ形式（`column.asc` / `column.desc`）に変換
    fn to_query(self) -> String {
        let direction = if self.ascending { "asc" } else { "desc" };
        format!("{}.{}", self.column, direction)
    }
}

/// ストアAPIからのエラーレスポンス（PostgREST形式）
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
}

/// 汎用ストアAPIクライアント
///
/// 読み取りはコレクション全件取得のみ（ページネーションなし、フィルタは
/// 全てクライアント側で実施）。書き込みはID指定の部分更新のみ。
/// リトライは行わない（失敗した操作はユーザーが再実行する設計）。
pub struct StoreClient {
    client: Client,
    config: StoreClientConfig,
}

impl StoreClient {
    /// 環境変数から設定を読み込んでクライアントを作成
    pub fn new() -> AppResult<Self> {
        let config = StoreClientConfig::from_env()?;
        Ok(Self::with_config(config))
    }

    /// 設定を指定してクライアントを作成
    pub fn with_config(config: StoreClientConfig) -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
            config,
        }
    }

    /// テーブルのRESTエンドポイントURLを構築
    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            table
        )
    }

    /// コレクションの全行を指定の並び順で取得する
    ///
    /// # 引数
    /// * `table` - コレクション名（例: "services", "payments"）
    /// * `order` - 並び順指定
    ///
    /// # 戻り値
    /// コレクションの全行、または失敗時はエラー
    pub async fn fetch_all<T>(&self, table: &str, order: OrderBy) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}?select=*&order={}", self.table_url(table), order.to_query());
        info!("コレクション全件取得: table={table}, order={}", order.to_query());

        let response = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalService(format!("ストアAPIへの接続に失敗しました: {e}"))
            })?;

        if response.status().is_success() {
            let rows: Vec<T> = response
                .json()
                .await
                .map_err(|e| AppError::ExternalService(format!("レスポンス解析エラー: {e}")))?;
            info!("コレクション全件取得成功: table={table}, count={}", rows.len());
            Ok(rows)
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    /// ID指定で部分更新を適用する
    ///
    /// # 引数
    /// * `table` - コレクション名
    /// * `id` - 更新対象のレコードID
    /// * `patch` - 部分フィールドマップ
    ///
    /// # 戻り値
    /// 成功時はOk(())、失敗時はエラー
    pub async fn patch_by_id<B>(&self, table: &str, id: &str, patch: &B) -> AppResult<()>
    where
        B: Serialize + ?Sized,
    {
        let url = format!(
            "{}?id=eq.{}",
            self.table_url(table),
            urlencoding::encode(id)
        );
        info!("部分更新リクエスト送信: table={table}, id={id}");

        let response = self
            .authorized(self.client.patch(&url))
            .header("Prefer", "return=minimal")
            .json(patch)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalService(format!("ストアAPIへの接続に失敗しました: {e}"))
            })?;

        if response.status().is_success() {
            info!("部分更新成功: table={table}, id={id}");
            Ok(())
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    /// 認証ヘッダーとタイムアウトを付与する
    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .timeout(Duration::from_secs(self.config.timeout_seconds))
    }

    /// エラーレスポンスを処理し、詳細なエラー情報を提供
    async fn error_from_response(&self, response: Response) -> AppError {
        let status = response.status();
        let status_code = status.as_u16();

        let response_text = response
            .text()
            .await
            .unwrap_or_else(|_| "レスポンス読み取り失敗".to_string());

        // 構造化エラーレスポンスの解析を試行
        if let Ok(body) = serde_json::from_str::<StoreErrorBody>(&response_text) {
            if body.message.is_some() || body.code.is_some() {
                let code = body.code.unwrap_or_else(|| status_code.to_string());
                let message = body.message.unwrap_or_default();
                debug!(
                    "ストアAPIから構造化エラーレスポンスを受信: code={code}, message={message}"
                );
                return AppError::ExternalService(format!(
                    "ストアAPIエラー: {code} - {message}"
                ));
            }
        }

        // JSONでない場合はステータスコードから概要を作成
        let summary = match status_code {
            400 => "リクエストの形式が正しくありません",
            401 => "APIキーによる認証に失敗しました",
            403 => "この操作を実行する権限がありません",
            404 => "指定されたリソースが見つかりません",
            429 => "リクエストが多すぎます",
            500 => "サーバー内部エラーが発生しました",
            502 => "ストアAPIとの通信でエラーが発生しました",
            503 => "ストアAPIが一時的に利用できません",
            504 => "ストアAPIからの応答がタイムアウトしました",
            _ => "不明なエラーが発生しました",
        };

        warn!("ストアAPIから非構造化エラーレスポンス: status={status_code}, body={response_text}");

        AppError::ExternalService(format!("ストアAPIエラー: {status_code} - {summary}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> StoreClientConfig {
        StoreClientConfig {
            base_url: "https://example.supabase.co".to_string(),
            api_key: "anon-key".to_string(),
            timeout_seconds: 30,
        }
    }

    #[test]
    fn test_order_by_to_query() {
        // 並び順のクエリパラメータ変換テスト
        assert_eq!(OrderBy::asc("name").to_query(), "name.asc");
        assert_eq!(OrderBy::desc("created_at").to_query(), "created_at.desc");
    }

    #[test]
    fn test_table_url_construction() {
        // テーブルURLの構築テスト（末尾スラッシュの正規化を含む）
        let client = StoreClient::with_config(test_config());
        assert_eq!(
            client.table_url("payments"),
            "https://example.supabase.co/rest/v1/payments"
        );

        let mut config = test_config();
        config.base_url = "https://example.supabase.co/".to_string();
        let client = StoreClient::with_config(config);
        assert_eq!(
            client.table_url("services"),
            "https://example.supabase.co/rest/v1/services"
        );
    }

    #[test]
    fn test_store_error_body_parse() {
        // PostgREST形式エラーレスポンスの解析テスト
        let json = r#"{
            "code": "PGRST301",
            "message": "JWT expired",
            "details": null,
            "hint": null
        }"#;

        let body: StoreErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.code.as_deref(), Some("PGRST301"));
        assert_eq!(body.message.as_deref(), Some("JWT expired"));
        assert!(body.details.is_none());
    }
}
