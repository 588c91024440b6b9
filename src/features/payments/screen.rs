use std::sync::Arc;

use log::{error, info};

use super::bulk_actions::{ActionChecklist, BulkActionExecutor, BulkActionKind, ChecklistState};
use super::filters::{status_counts, PaymentFilter, StatusFilter};
use super::models::{MarkPaidPatch, Payment, StatusCounts};
use super::repository::PaymentStore;
use super::selection::SelectionTracker;
use crate::features::notifications::NotificationService;
use crate::features::receipts::ReceiptService;

/// 支払い管理画面の状態
///
/// 正準コレクションはローダー（`load`）だけが全置換で書き込む。
/// フィルター済みビューは条件またはコレクションの変更時に同期的に再計算され、
/// 選択状態・チェックリスト・詳細表示はそれぞれ独立に管理される。
pub struct PaymentsScreen {
    store: Arc<dyn PaymentStore>,
    receipts: Arc<dyn ReceiptService>,
    notifications: Arc<dyn NotificationService>,
    /// 正準コレクション（ストアから取得した全件、作成日時の降順）
    payments: Vec<Payment>,
    /// フィルター済みビュー（正準順を保持）
    filtered: Vec<Payment>,
    filter: PaymentFilter,
    selection: SelectionTracker,
    checklist: ActionChecklist,
    /// 詳細表示中の支払い（正準コレクションからのスナップショット）
    detail: Option<Payment>,
    loading: bool,
}

impl PaymentsScreen {
    /// 画面状態を作成する（コレクションは空、`load`で取得する）
    pub fn new(
        store: Arc<dyn PaymentStore>,
        receipts: Arc<dyn ReceiptService>,
        notifications: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            store,
            receipts,
            notifications,
            payments: Vec::new(),
            filtered: Vec::new(),
            filter: PaymentFilter::default(),
            selection: SelectionTracker::new(),
            checklist: ActionChecklist::new(),
            detail: None,
            loading: true,
        }
    }

    /// 支払い一覧をストアから再取得する
    ///
    /// 取得失敗時はログのみ出力し、コレクションは直前の値を保持する。
    pub async fn load(&mut self) {
        self.loading = true;
        match self.store.fetch_payments().await {
            Ok(payments) => {
                info!("支払い一覧を取得しました: count={}", payments.len());
                self.payments = payments;
                self.apply_filters();
            }
            Err(e) => {
                error!("支払い一覧の取得に失敗しました: {}", e.details());
            }
        }
        self.loading = false;
    }

    /// テキスト検索クエリを設定する
    pub fn set_query<S: Into<String>>(&mut self, query: S) {
        self.filter.query = query.into();
        self.apply_filters();
    }

    /// ステータスフィルターを設定する
    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.apply_filters();
    }

    /// 単一の支払いの選択状態を切り替える
    pub fn toggle_selection(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// フィルター済みビューに対する全選択／全解除トグル
    pub fn toggle_select_all(&mut self) {
        let filtered_ids: Vec<String> = self.filtered.iter().map(|p| p.id.clone()).collect();
        self.selection.toggle_select_all(&filtered_ids);
    }

    /// 一括操作チェックリストのフラグを切り替える（実行中は無視される）
    pub fn toggle_action(&mut self, kind: BulkActionKind) {
        self.checklist.toggle(kind);
    }

    /// チェック済みの一括操作を選択中の支払いに対して実行する
    ///
    /// 対象IDは正準コレクションの並び順で処理される。成功時は選択と
    /// チェックリストをクリアしてコレクションを再取得する。失敗時は
    /// 選択を保持したままチェックリストのみリセットし、再取得は行わない。
    ///
    /// # 戻り値
    /// 操作ごとの結果メッセージ（pt-BR）、または検証・実行エラー
    pub async fn execute_actions(&mut self) -> Result<Vec<String>, String> {
        if self.checklist.state() == ChecklistState::Executing {
            return Err("Aguarde a operação em andamento".to_string());
        }
        if self.selection.is_empty() {
            return Err("Selecione pelo menos um pagamento".to_string());
        }
        let kinds = self.checklist.checked_kinds();
        if kinds.is_empty() {
            return Err("Selecione pelo menos uma ação".to_string());
        }

        // 対象IDは正準コレクションの並び順で確定させる
        let ids: Vec<String> = self
            .payments
            .iter()
            .filter(|p| self.selection.contains(&p.id))
            .map(|p| p.id.clone())
            .collect();

        self.checklist.begin_execution();
        let executor = BulkActionExecutor::new(
            Arc::clone(&self.store),
            Arc::clone(&self.receipts),
            Arc::clone(&self.notifications),
        );
        let result = executor.execute(&kinds, &ids).await;
        self.checklist.finish_execution();

        match result {
            Ok(messages) => {
                self.selection.clear();
                self.load().await;
                Ok(messages)
            }
            Err(e) => {
                error!("一括操作に失敗しました: {}", e.details());
                Err("Erro ao atualizar pagamentos".to_string())
            }
        }
    }

    /// 単一の支払いを支払い済みへ遷移させてコレクションを再取得する
    pub async fn mark_as_paid(&mut self, id: &str) -> Result<String, String> {
        let patch = MarkPaidPatch::at(chrono::Utc::now());
        match self.store.mark_as_paid(id, &patch).await {
            Ok(()) => {
                self.load().await;
                Ok("Pagamento marcado como pago com sucesso!".to_string())
            }
            Err(e) => {
                error!("支払い済み遷移に失敗しました: id={id}, error={}", e.details());
                Err("Erro ao atualizar pagamento".to_string())
            }
        }
    }

    /// 単一の支払いの領収書生成を要求する
    pub async fn generate_receipt(&mut self, id: &str) -> Result<String, String> {
        self.receipts
            .generate_receipt(id)
            .await
            .map_err(String::from)?;
        Ok(format!("Gerando recibo para pagamento {id}..."))
    }

    /// 単一の支払いの通知送信を要求する
    pub async fn send_notification(&mut self, id: &str) -> Result<String, String> {
        self.notifications
            .send_notification(id)
            .await
            .map_err(String::from)?;
        Ok(format!("Enviando notificação para pagamento {id}..."))
    }

    /// 指定の支払いの詳細表示を開く
    ///
    /// 詳細は正準コレクションからのスナップショットで、以降の再取得では
    /// 自動更新されない。
    pub fn view_details(&mut self, id: &str) -> Result<(), String> {
        match self.payments.iter().find(|p| p.id == id) {
            Some(payment) => {
                self.detail = Some(payment.clone());
                Ok(())
            }
            None => Err("Pagamento não encontrado".to_string()),
        }
    }

    /// 詳細表示を閉じる
    pub fn close_details(&mut self) {
        self.detail = None;
    }

    /// フィルター済みビューを正準コレクションから再導出する
    fn apply_filters(&mut self) {
        self.filtered = self.filter.apply(&self.payments);
    }

    /// 正準コレクション
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// フィルター済みビュー
    pub fn filtered(&self) -> &[Payment] {
        &self.filtered
    }

    /// 現在のフィルター条件
    pub fn filter(&self) -> &PaymentFilter {
        &self.filter
    }

    /// ステータス別件数（常に正準コレクションから導出）
    pub fn counts(&self) -> StatusCounts {
        status_counts(&self.payments)
    }

    /// 選択状態
    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// 一括操作チェックリスト
    pub fn checklist(&self) -> &ActionChecklist {
        &self.checklist
    }

    /// 詳細表示中の支払い
    pub fn detail(&self) -> Option<&Payment> {
        self.detail.as_ref()
    }

    /// 読み込み中かどうか
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
