/// サービス検索機能モジュール
///
/// このモジュールは医療サービス一覧の検索に関連するすべての機能を提供します：
/// - サービスデータモデル（施設型・遠隔診療型、州コード）
/// - テキスト・形態・州によるクライアント側フィルタリング
/// - ストアからの全件取得（名前昇順）
/// - 検索画面の状態管理
// サブモジュールの宣言
pub mod filters;
pub mod models;
pub mod repository;
pub mod screen;

// 公開インターフェース：外部から使用可能な型と関数をエクスポート

// モデル
pub use models::{BrazilianState, Service, ServiceType};

// フィルター
pub use filters::{ServiceFilter, TypeFilter};

// リポジトリ（ストア操作）
pub use repository::ServiceStore;

// 画面状態
pub use screen::ServiceSearchScreen;
