/// 共有エラー型とエラーハンドリング
pub mod errors;

/// 共有設定管理
pub mod config;

/// リモートストア（テーブル指向API）クライアント
pub mod api_client;

/// 共有ユーティリティ関数
pub mod utils;

// 便利な再エクスポート
pub use api_client::{OrderBy, StoreClient, StoreClientConfig};
pub use config::{
    get_environment, initialize_application, initialize_logging_system,
    load_environment_variables, Environment, EnvironmentConfig, InitializationResult, StoreConfig,
};
pub use errors::{AppError, AppResult, ErrorSeverity};
