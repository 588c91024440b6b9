// 機能モジュール構造
pub mod features;
pub mod shared;

// 画面状態（UIシェルから直接利用されるエントリポイント）
pub use features::payments::PaymentsScreen;
pub use features::services::ServiceSearchScreen;
pub use shared::errors::{AppError, AppResult};
