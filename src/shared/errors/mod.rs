use thiserror::Error;

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// バリデーション関連のエラー
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// リソースが見つからない場合のエラー
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 外部サービス連携でのエラー
    #[error("外部サービスエラー: {0}")]
    ExternalService(String),

    /// 設定関連のエラー
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// JSON解析エラー
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
}

/// エラーの重要度を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// 低重要度（ユーザー入力エラーなど）
    Low,
    /// 中重要度（外部サービス一時的エラーなど）
    Medium,
    /// 高重要度（設定エラーなど）
    High,
}

impl AppError {
    /// ユーザーに表示するためのメッセージを取得
    ///
    /// 利用者向けの文言はポルトガル語（管理画面の表示言語）
    ///
    /// # 戻り値
    /// ユーザーに表示可能なエラーメッセージ
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Validation(msg) => msg,
            AppError::NotFound(msg) => msg,
            AppError::ExternalService(_) => "Erro na comunicação com o servidor",
            AppError::Configuration(_) => "Erro de configuração do sistema",
            AppError::Json(_) => "Erro ao interpretar os dados recebidos",
        }
    }

    /// エラーの詳細情報を取得
    ///
    /// # 戻り値
    /// エラーの詳細情報（ログ出力用）
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// エラーの重要度を取得
    ///
    /// # 戻り値
    /// エラーの重要度レベル
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::NotFound(_) => ErrorSeverity::Low,
            AppError::ExternalService(_) => ErrorSeverity::Medium,
            AppError::Configuration(_) => ErrorSeverity::High,
            AppError::Json(_) => ErrorSeverity::Medium,
        }
    }

    /// バリデーションエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - バリデーションエラーメッセージ（ユーザー向け）
    ///
    /// # 戻り値
    /// バリデーションエラー
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// リソース未発見エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - 見つからなかったリソースの説明（ユーザー向け）
    ///
    /// # 戻り値
    /// リソース未発見エラー
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        AppError::NotFound(message.into())
    }

    /// 外部サービスエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `service` - サービス名
    /// * `message` - エラーメッセージ
    ///
    /// # 戻り値
    /// 外部サービスエラー
    pub fn external_service<S: Into<String>>(service: S, message: S) -> Self {
        AppError::ExternalService(format!("{}: {}", service.into(), message.into()))
    }

    /// 設定エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - 設定エラーメッセージ
    ///
    /// # 戻り値
    /// 設定エラー
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// AppErrorからStringへの変換（UI境界での使用のため）
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message().to_string()
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        // 各エラータイプの重要度をテスト
        assert_eq!(
            AppError::validation("teste").severity(),
            ErrorSeverity::Low
        );
        assert_eq!(
            AppError::not_found("Pagamento não encontrado").severity(),
            ErrorSeverity::Low
        );
        assert_eq!(
            AppError::external_service("store", "conexão recusada").severity(),
            ErrorSeverity::Medium
        );
        assert_eq!(
            AppError::configuration("STORE_API_URL ausente").severity(),
            ErrorSeverity::High
        );
    }

    #[test]
    fn test_user_message() {
        // ユーザーメッセージのテスト
        let validation_error = AppError::validation("Selecione pelo menos um pagamento");
        assert_eq!(
            validation_error.user_message(),
            "Selecione pelo menos um pagamento"
        );

        let not_found_error = AppError::not_found("Pagamento não encontrado");
        assert_eq!(not_found_error.user_message(), "Pagamento não encontrado");

        let external_error = AppError::external_service("store", "timeout");
        assert_eq!(
            external_error.user_message(),
            "Erro na comunicação com o servidor"
        );
    }

    #[test]
    fn test_helper_functions() {
        // ヘルパー関数のテスト
        let validation_error = AppError::validation("mensagem de teste");
        assert!(matches!(validation_error, AppError::Validation(_)));

        let not_found_error = AppError::not_found("recurso de teste");
        assert!(matches!(not_found_error, AppError::NotFound(_)));

        let external_error = AppError::external_service("store", "erro de teste");
        assert!(matches!(external_error, AppError::ExternalService(_)));
    }

    #[test]
    fn test_string_conversion() {
        // String変換のテスト
        let error = AppError::validation("erro de teste");
        let error_string: String = error.into();
        assert_eq!(error_string, "erro de teste");
    }

    #[test]
    fn test_error_details() {
        // エラー詳細のテスト（内部向けの詳細は日本語プレフィックス付き）
        let error = AppError::external_service("store", "conexão recusada");
        let details = error.details();
        assert!(details.contains("store"));
        assert!(details.contains("conexão recusada"));
    }
}
