/// 機能別モジュール
///
/// このモジュールは、管理画面の機能を機能別に整理したモジュール群を提供します。
/// 各機能モジュールは、その機能に関連するすべてのコード（モデル、フィルタ、
/// リポジトリ、画面状態）を含む自己完結型のユニットです。
// 機能モジュールの宣言
pub mod notifications;
pub mod payments;
pub mod receipts;
pub mod services;
