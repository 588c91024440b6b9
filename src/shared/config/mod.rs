/// 環境変数と実行環境の管理
pub mod environment;

/// アプリケーション初期化処理
pub mod initialization;

// 便利な再エクスポート
pub use environment::{
    get_environment, initialize_logging_system, load_environment_variables, Environment,
    EnvironmentConfig, EnvVarError, StoreConfig,
};
pub use initialization::{initialize_application, log_initialization_complete, InitializationResult};
