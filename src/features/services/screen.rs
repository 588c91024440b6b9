use super::filters::{ServiceFilter, TypeFilter};
use super::models::{BrazilianState, Service};
use super::repository::ServiceStore;
use log::{error, info};
use std::sync::Arc;

/// サービス検索画面の状態
///
/// 正準コレクションはローダー（`load`）だけが全置換で書き込む。
/// フィルター済みビューは正準コレクションまたは条件が変わるたびに
/// 同期的に再計算される（差分更新は行わない）。
pub struct ServiceSearchScreen {
    store: Arc<dyn ServiceStore>,
    /// 正準コレクション（ストアから取得した全件、名前昇順）
    services: Vec<Service>,
    /// フィルター済みビュー（正準順を保持）
    filtered: Vec<Service>,
    filter: ServiceFilter,
    loading: bool,
}

impl ServiceSearchScreen {
    /// 画面状態を作成する（コレクションは空、`load`で取得する）
    pub fn new(store: Arc<dyn ServiceStore>) -> Self {
        Self {
            store,
            services: Vec::new(),
            filtered: Vec::new(),
            filter: ServiceFilter::default(),
            loading: true,
        }
    }

    /// サービス一覧をストアから再取得する
    ///
    /// 取得失敗時はログのみ出力し、コレクションは直前の値を保持する
    /// （ユーザー向けメッセージは表示しない）。
    pub async fn load(&mut self) {
        self.loading = true;
        match self.store.fetch_services().await {
            Ok(services) => {
                info!("サービス一覧を取得しました: count={}", services.len());
                self.services = services;
                self.apply_filters();
            }
            Err(e) => {
                error!("サービス一覧の取得に失敗しました: {}", e.details());
            }
        }
        self.loading = false;
    }

    /// テキスト検索クエリを設定する
    pub fn set_query<S: Into<String>>(&mut self, query: S) {
        self.filter.query = query.into();
        self.apply_filters();
    }

    /// 提供形態フィルターを設定する
    pub fn set_type_filter(&mut self, type_filter: TypeFilter) {
        self.filter.service_type = type_filter;
        self.apply_filters();
    }

    /// 州フィルターの選択状態を切り替える
    pub fn toggle_state(&mut self, state: BrazilianState) {
        if !self.filter.states.remove(&state) {
            self.filter.states.insert(state);
        }
        self.apply_filters();
    }

    /// 形態・州フィルターをクリアする（テキスト検索は保持）
    pub fn clear_filters(&mut self) {
        self.filter.service_type = TypeFilter::All;
        self.filter.states.clear();
        self.apply_filters();
    }

    /// フィルター済みビューを正準コレクションから再導出する
    fn apply_filters(&mut self) {
        self.filtered = self.filter.apply(&self.services);
    }

    /// 正準コレクション
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// フィルター済みビュー
    pub fn filtered(&self) -> &[Service] {
        &self.filtered
    }

    /// 現在のフィルター条件
    pub fn filter(&self) -> &ServiceFilter {
        &self.filter
    }

    /// 読み込み中かどうか
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
