use std::sync::Arc;

use chrono::Utc;
use log::{error, info};

use super::models::MarkPaidPatch;
use super::repository::PaymentStore;
use crate::features::notifications::NotificationService;
use crate::features::receipts::ReceiptService;
use crate::shared::errors::AppResult;

/// 一括操作の種別
///
/// 実行順序はこの列挙の宣言順に固定される：
/// 支払い済みへの遷移 → 領収書生成 → 通知送信。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkActionKind {
    /// 選択された支払いを支払い済みへ遷移させる
    MarkAsPaid,
    /// 選択された支払いの領収書生成を要求する
    GenerateReceipts,
    /// 選択された支払いの通知送信を要求する
    SendNotifications,
}

/// 操作チェックリストの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecklistState {
    /// チェックなし（実行不可）
    #[default]
    Idle,
    /// 1つ以上チェック済み（実行可能）
    Armed,
    /// 実行中（チェック変更・再実行を受け付けない）
    Executing,
}

/// 一括操作のチェックリスト
///
/// 3種の操作フラグと実行状態を保持する。実行中のトグルは黙って無視される。
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionChecklist {
    mark_as_paid: bool,
    generate_receipts: bool,
    send_notifications: bool,
    state: ChecklistState,
}

impl ActionChecklist {
    /// 空のチェックリストを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在の状態を取得
    pub fn state(&self) -> ChecklistState {
        self.state
    }

    /// 指定の操作フラグが立っているかを判定
    pub fn is_checked(&self, kind: BulkActionKind) -> bool {
        match kind {
            BulkActionKind::MarkAsPaid => self.mark_as_paid,
            BulkActionKind::GenerateReceipts => self.generate_receipts,
            BulkActionKind::SendNotifications => self.send_notifications,
        }
    }

    /// 操作フラグを切り替える
    ///
    /// 実行中は変更を受け付けない。切り替え後、1つ以上のフラグが立っていれば
    /// Armed、すべて落ちていればIdleへ遷移する。
    pub fn toggle(&mut self, kind: BulkActionKind) {
        if self.state == ChecklistState::Executing {
            return;
        }
        match kind {
            BulkActionKind::MarkAsPaid => self.mark_as_paid = !self.mark_as_paid,
            BulkActionKind::GenerateReceipts => self.generate_receipts = !self.generate_receipts,
            BulkActionKind::SendNotifications => {
                self.send_notifications = !self.send_notifications
            }
        }
        self.state = if self.any_checked() {
            ChecklistState::Armed
        } else {
            ChecklistState::Idle
        };
    }

    /// チェック済みの操作を固定の実行順序で列挙する
    pub fn checked_kinds(&self) -> Vec<BulkActionKind> {
        let mut kinds = Vec::new();
        if self.mark_as_paid {
            kinds.push(BulkActionKind::MarkAsPaid);
        }
        if self.generate_receipts {
            kinds.push(BulkActionKind::GenerateReceipts);
        }
        if self.send_notifications {
            kinds.push(BulkActionKind::SendNotifications);
        }
        kinds
    }

    fn any_checked(&self) -> bool {
        self.mark_as_paid || self.generate_receipts || self.send_notifications
    }

    /// 実行開始をマークする（以降のトグルは無視される）
    pub(crate) fn begin_execution(&mut self) {
        self.state = ChecklistState::Executing;
    }

    /// 実行完了をマークする
    ///
    /// 成否にかかわらずフラグをすべて落としてIdleへ戻す。
    pub(crate) fn finish_execution(&mut self) {
        *self = Self::default();
    }
}

/// 一括操作の実行エンジン
///
/// ストア更新と外部コラボレーターへの要求を固定の順序で直列に実行する。
/// ストア更新が完了するまで領収書・通知の要求は開始されない。
pub struct BulkActionExecutor {
    store: Arc<dyn PaymentStore>,
    receipts: Arc<dyn ReceiptService>,
    notifications: Arc<dyn NotificationService>,
}

impl BulkActionExecutor {
    /// 実行エンジンを作成する
    pub fn new(
        store: Arc<dyn PaymentStore>,
        receipts: Arc<dyn ReceiptService>,
        notifications: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            store,
            receipts,
            notifications,
        }
    }

    /// チェック済みの操作を選択中の支払いに対して実行する
    ///
    /// 支払い済みへの遷移は1件ずつ直列に行い、最初の失敗で打ち切る
    /// （成功済みの更新はロールバックされない）。
    ///
    /// # 引数
    /// * `kinds` - 実行する操作（固定順）
    /// * `ids` - 対象の支払いID列
    ///
    /// # 戻り値
    /// 操作ごとの結果メッセージ（pt-BR）
    pub async fn execute(&self, kinds: &[BulkActionKind], ids: &[String]) -> AppResult<Vec<String>> {
        let mut messages = Vec::new();
        for kind in kinds {
            match kind {
                BulkActionKind::MarkAsPaid => {
                    let patch = MarkPaidPatch::at(Utc::now());
                    for id in ids {
                        self.store.mark_as_paid(id, &patch).await.map_err(|e| {
                            error!("支払い済み遷移に失敗しました: id={id}, error={e}");
                            e
                        })?;
                    }
                    info!("支払い済み遷移が完了しました: count={}", ids.len());
                    messages.push(format!("{} pagamento(s) marcado(s) como pago!", ids.len()));
                }
                BulkActionKind::GenerateReceipts => {
                    self.receipts.generate_receipts(ids).await?;
                    messages.push(format!(
                        "Gerando recibos para {} pagamento(s)...",
                        ids.len()
                    ));
                }
                BulkActionKind::SendNotifications => {
                    self.notifications.send_notifications(ids).await?;
                    messages.push(format!(
                        "Enviando notificações para {} pagamento(s)...",
                        ids.len()
                    ));
                }
            }
        }
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_toggle_transitions() {
        let mut checklist = ActionChecklist::new();
        assert_eq!(checklist.state(), ChecklistState::Idle);

        checklist.toggle(BulkActionKind::MarkAsPaid);
        assert_eq!(checklist.state(), ChecklistState::Armed);
        assert!(checklist.is_checked(BulkActionKind::MarkAsPaid));

        // 最後のフラグを落とすとIdleへ戻る
        checklist.toggle(BulkActionKind::MarkAsPaid);
        assert_eq!(checklist.state(), ChecklistState::Idle);
        assert!(!checklist.is_checked(BulkActionKind::MarkAsPaid));
    }

    #[test]
    fn test_checklist_ignores_toggle_while_executing() {
        let mut checklist = ActionChecklist::new();
        checklist.toggle(BulkActionKind::GenerateReceipts);
        checklist.begin_execution();
        assert_eq!(checklist.state(), ChecklistState::Executing);

        // 実行中のトグルは黙って無視される
        checklist.toggle(BulkActionKind::SendNotifications);
        assert!(!checklist.is_checked(BulkActionKind::SendNotifications));
        assert_eq!(checklist.state(), ChecklistState::Executing);
    }

    #[test]
    fn test_checklist_finish_resets_unconditionally() {
        let mut checklist = ActionChecklist::new();
        checklist.toggle(BulkActionKind::MarkAsPaid);
        checklist.toggle(BulkActionKind::SendNotifications);
        checklist.begin_execution();

        checklist.finish_execution();
        assert_eq!(checklist.state(), ChecklistState::Idle);
        assert!(checklist.checked_kinds().is_empty());
    }

    #[test]
    fn test_checked_kinds_follow_fixed_order() {
        let mut checklist = ActionChecklist::new();

        // チェックした順序に関係なく、実行順序は固定
        checklist.toggle(BulkActionKind::SendNotifications);
        checklist.toggle(BulkActionKind::MarkAsPaid);
        checklist.toggle(BulkActionKind::GenerateReceipts);

        assert_eq!(
            checklist.checked_kinds(),
            vec![
                BulkActionKind::MarkAsPaid,
                BulkActionKind::GenerateReceipts,
                BulkActionKind::SendNotifications,
            ]
        );
    }
}
