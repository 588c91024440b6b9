use serde::{Deserialize, Serialize};

/// サービスの提供形態
///
/// ストア上は小文字の文字列（`physical` / `teleconsultation`）で表現される。
/// この値はレコード作成後に変更されることはない（管理画面に変更手段はない）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// 施設型（住所・電話・診療時間を持つ）
    Physical,
    /// 遠隔診療型（接続リンクを持つ）
    Teleconsultation,
}

/// ブラジルの州コード（連邦単位）
///
/// ストア上は2文字の大文字コード（例: `SP`）で表現される閉じた列挙。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[allow(clippy::upper_case_acronyms)]
pub enum BrazilianState {
    AC,
    AL,
    AP,
    AM,
    BA,
    CE,
    DF,
    ES,
    GO,
    MA,
    MT,
    MS,
    MG,
    PA,
    PB,
    PR,
    PE,
    PI,
    RJ,
    RN,
    RS,
    RO,
    RR,
    SC,
    SP,
    SE,
    TO,
}

impl BrazilianState {
    /// 全州のリスト（フィルタ選択肢の表示順）
    pub const ALL: [BrazilianState; 27] = [
        BrazilianState::AC,
        BrazilianState::AL,
        BrazilianState::AP,
        BrazilianState::AM,
        BrazilianState::BA,
        BrazilianState::CE,
        BrazilianState::DF,
        BrazilianState::ES,
        BrazilianState::GO,
        BrazilianState::MA,
        BrazilianState::MT,
        BrazilianState::MS,
        BrazilianState::MG,
        BrazilianState::PA,
        BrazilianState::PB,
        BrazilianState::PR,
        BrazilianState::PE,
        BrazilianState::PI,
        BrazilianState::RJ,
        BrazilianState::RN,
        BrazilianState::RS,
        BrazilianState::RO,
        BrazilianState::RR,
        BrazilianState::SC,
        BrazilianState::SP,
        BrazilianState::SE,
        BrazilianState::TO,
    ];

    /// 2文字の州コードを取得
    pub fn code(&self) -> &'static str {
        match self {
            BrazilianState::AC => "AC",
            BrazilianState::AL => "AL",
            BrazilianState::AP => "AP",
            BrazilianState::AM => "AM",
            BrazilianState::BA => "BA",
            BrazilianState::CE => "CE",
            BrazilianState::DF => "DF",
            BrazilianState::ES => "ES",
            BrazilianState::GO => "GO",
            BrazilianState::MA => "MA",
            BrazilianState::MT => "MT",
            BrazilianState::MS => "MS",
            BrazilianState::MG => "MG",
            BrazilianState::PA => "PA",
            BrazilianState::PB => "PB",
            BrazilianState::PR => "PR",
            BrazilianState::PE => "PE",
            BrazilianState::PI => "PI",
            BrazilianState::RJ => "RJ",
            BrazilianState::RN => "RN",
            BrazilianState::RS => "RS",
            BrazilianState::RO => "RO",
            BrazilianState::RR => "RR",
            BrazilianState::SC => "SC",
            BrazilianState::SP => "SP",
            BrazilianState::SE => "SE",
            BrazilianState::TO => "TO",
        }
    }

    /// 州の表示名（pt-BR）を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            BrazilianState::AC => "Acre",
            BrazilianState::AL => "Alagoas",
            BrazilianState::AP => "Amapá",
            BrazilianState::AM => "Amazonas",
            BrazilianState::BA => "Bahia",
            BrazilianState::CE => "Ceará",
            BrazilianState::DF => "Distrito Federal",
            BrazilianState::ES => "Espírito Santo",
            BrazilianState::GO => "Goiás",
            BrazilianState::MA => "Maranhão",
            BrazilianState::MT => "Mato Grosso",
            BrazilianState::MS => "Mato Grosso do Sul",
            BrazilianState::MG => "Minas Gerais",
            BrazilianState::PA => "Pará",
            BrazilianState::PB => "Paraíba",
            BrazilianState::PR => "Paraná",
            BrazilianState::PE => "Pernambuco",
            BrazilianState::PI => "Piauí",
            BrazilianState::RJ => "Rio de Janeiro",
            BrazilianState::RN => "Rio Grande do Norte",
            BrazilianState::RS => "Rio Grande do Sul",
            BrazilianState::RO => "Rondônia",
            BrazilianState::RR => "Roraima",
            BrazilianState::SC => "Santa Catarina",
            BrazilianState::SP => "São Paulo",
            BrazilianState::SE => "Sergipe",
            BrazilianState::TO => "Tocantins",
        }
    }

    /// 州コードから列挙値を取得
    ///
    /// # 引数
    /// * `code` - 2文字の州コード（大文字）
    ///
    /// # 戻り値
    /// 該当する州、または未知のコードの場合はNone
    pub fn from_code(code: &str) -> Option<Self> {
        BrazilianState::ALL.iter().find(|s| s.code() == code).copied()
    }
}

impl std::fmt::Display for BrazilianState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 医療サービス（施設または遠隔診療）のデータモデル
///
/// タイムスタンプはストアが管理するRFC3339文字列。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: BrazilianState,
    pub phone: Option<String>,
    pub teleconsult_link: Option<String>,
    pub schedule: Option<String>,
    /// 地理座標（ジオコーディング済みの施設型のみ）
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}
