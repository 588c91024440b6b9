use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 支払いステータス
///
/// ストア上は小文字の文字列（`paid` / `pending` / `cancelled`）で表現される
/// 閉じた列挙。利用可能な操作はこの値によって決まる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// 支払い済み
    Paid,
    /// 支払い待ち
    Pending,
    /// キャンセル済み
    Cancelled,
}

impl PaymentStatus {
    /// ステータスの表示名（pt-BR）を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Pago",
            PaymentStatus::Pending => "Pendente",
            PaymentStatus::Cancelled => "Cancelado",
        }
    }
}

/// 支払いデータモデル
///
/// `user_name`と`service_name`は表示用の非正規化文字列（UI層では外部キー結合を
/// 行わない）。金額は非負、通貨はブラジルレアル固定。
/// 不変条件: `status = paid` のレコードは `payment_date` を持つ
/// （支払い済みへの遷移操作が必ず両方を書き込む）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub user_name: String,
    pub service_name: String,
    pub amount: f64,
    pub status: PaymentStatus,
    /// 支払い済みへの遷移時のみ設定される
    pub payment_date: Option<String>,
    /// ステータスとは独立した支払期限（情報提供のみ）
    pub due_date: Option<String>,
    pub notes: Option<String>,
    /// 領収書生成の外部副作用によって設定される
    pub receipt_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Payment {
    /// 金額のpt-BR表示（例: `R$ 1.234,56`）
    pub fn formatted_amount(&self) -> String {
        crate::shared::utils::format_currency_brl(self.amount)
    }

    /// 支払い日時のpt-BR表示（未設定・解析不能は `-`）
    pub fn formatted_payment_date(&self) -> String {
        crate::shared::utils::format_datetime_br(self.payment_date.as_deref())
    }

    /// 作成日時のpt-BR表示
    pub fn formatted_created_at(&self) -> String {
        crate::shared::utils::format_datetime_br(Some(&self.created_at))
    }
}

/// ステータス別の件数（フィルター選択肢のラベル表示用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub paid: usize,
    pub pending: usize,
    pub cancelled: usize,
}

/// 支払い済みへの遷移で送信する部分更新フィールドマップ
///
/// ストアへ送る更新はこの3フィールドのみ（`status` / `payment_date` /
/// `updated_at`）。構築時に必ず支払い日時を設定するため、
/// 「支払い済みなのに支払い日時がない」状態は作れない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkPaidPatch {
    pub status: PaymentStatus,
    pub payment_date: String,
    pub updated_at: String,
}

impl MarkPaidPatch {
    /// 指定時刻で支払い済み遷移の部分更新を作成する
    ///
    /// # 引数
    /// * `now` - 遷移時刻（UTC）
    ///
    /// # 戻り値
    /// 部分更新フィールドマップ
    pub fn at(now: DateTime<Utc>) -> Self {
        let timestamp = now.to_rfc3339();
        Self {
            status: PaymentStatus::Paid,
            payment_date: timestamp.clone(),
            updated_at: timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_serde() {
        // ステータスは小文字でシリアライズされる
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Paid).unwrap(),
            "\"paid\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );

        let status: PaymentStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, PaymentStatus::Pending);

        // 未知のステータスは黙って無視せずエラーになる
        assert!(serde_json::from_str::<PaymentStatus>("\"refunded\"").is_err());
    }

    #[test]
    fn test_payment_status_display_name() {
        assert_eq!(PaymentStatus::Paid.display_name(), "Pago");
        assert_eq!(PaymentStatus::Pending.display_name(), "Pendente");
        assert_eq!(PaymentStatus::Cancelled.display_name(), "Cancelado");
    }

    #[test]
    fn test_payment_deserialization_with_missing_optionals() {
        // 任意フィールドなしの支払いレコード
        let json = r#"{
            "id": "pay-1",
            "user_name": "Maria Silva",
            "service_name": "Consulta Clínica Geral",
            "amount": 150.0,
            "status": "pending",
            "created_at": "2024-01-01T00:00:00+00:00",
            "updated_at": "2024-01-01T00:00:00+00:00"
        }"#;

        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert_eq!(payment.amount, 150.0);
        assert_eq!(payment.payment_date, None);
        assert_eq!(payment.due_date, None);
        assert_eq!(payment.notes, None);
        assert_eq!(payment.receipt_url, None);
    }

    #[test]
    fn test_payment_display_formatting() {
        let json = r#"{
            "id": "pay-1",
            "user_name": "Maria Silva",
            "service_name": "Consulta Clínica Geral",
            "amount": 1234.56,
            "status": "paid",
            "payment_date": "2024-06-15T12:00:00+00:00",
            "created_at": "2024-01-01T12:00:00+00:00",
            "updated_at": "2024-06-15T12:00:00+00:00"
        }"#;
        let payment: Payment = serde_json::from_str(json).unwrap();

        assert_eq!(payment.formatted_amount(), "R$ 1.234,56");
        // サンパウロ時間（UTC-3）で表示される
        assert_eq!(payment.formatted_payment_date(), "15/06/2024 09:00");
        assert_eq!(payment.formatted_created_at(), "01/01/2024 09:00");
    }

    #[test]
    fn test_mark_paid_patch_sets_both_timestamps() {
        // 支払い済み遷移は支払い日時と更新日時を同時に設定する
        let now = Utc::now();
        let patch = MarkPaidPatch::at(now);

        assert_eq!(patch.status, PaymentStatus::Paid);
        assert!(!patch.payment_date.is_empty());
        assert_eq!(patch.payment_date, patch.updated_at);

        // シリアライズ結果は3フィールドのみ
        let json = serde_json::to_value(&patch).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["status"], "paid");
    }
}
