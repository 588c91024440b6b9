use super::models::{Payment, PaymentStatus, StatusCounts};

/// ステータスフィルター（`all` または特定のステータス）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// すべてのステータスを対象とする
    #[default]
    All,
    /// 指定のステータスのみを対象とする
    Only(PaymentStatus),
}

/// 支払い管理画面のフィルター条件
///
/// 条件はAND結合。テキスト検索は利用者名・サービス名のOR部分一致で、
/// 空文字列のクエリは制約を課さない。
#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    /// テキスト検索クエリ（大文字小文字を区別しない部分一致）
    pub query: String,
    /// ステータスフィルター
    pub status: StatusFilter,
}

impl PaymentFilter {
    /// 正準コレクションからフィルター済みビューを導出する
    ///
    /// 純粋関数: 入力コレクションは変更せず、出力は正準の並び順を保持する。
    ///
    /// # 引数
    /// * `payments` - 正準コレクション
    ///
    /// # 戻り値
    /// フィルター済みビュー
    pub fn apply(&self, payments: &[Payment]) -> Vec<Payment> {
        payments
            .iter()
            .filter(|payment| self.matches(payment))
            .cloned()
            .collect()
    }

    fn matches(&self, payment: &Payment) -> bool {
        self.matches_query(payment) && self.matches_status(payment)
    }

    fn matches_query(&self, payment: &Payment) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let query = self.query.to_lowercase();
        payment.user_name.to_lowercase().contains(&query)
            || payment.service_name.to_lowercase().contains(&query)
    }

    fn matches_status(&self, payment: &Payment) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => payment.status == status,
        }
    }
}

/// 正準コレクションからステータス別件数を導出する
///
/// フィルター選択肢のラベル（例: "Pago (12)"）に使用される。
/// フィルター済みビューではなく正準コレクション全体を集計するため、
/// フィルターの切り替えが他の選択肢の件数表示に影響しない。
///
/// # 引数
/// * `payments` - 正準コレクション
///
/// # 戻り値
/// ステータス別件数と合計
pub fn status_counts(payments: &[Payment]) -> StatusCounts {
    let mut counts = StatusCounts {
        all: payments.len(),
        ..Default::default()
    };
    for payment in payments {
        match payment.status {
            PaymentStatus::Paid => counts.paid += 1,
            PaymentStatus::Pending => counts.pending += 1,
            PaymentStatus::Cancelled => counts.cancelled += 1,
        }
    }
    counts
}
