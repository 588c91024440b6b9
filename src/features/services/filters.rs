use super::models::{BrazilianState, Service, ServiceType};
use std::collections::BTreeSet;

/// 提供形態フィルター（`all` または特定の形態）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// すべての形態を対象とする
    #[default]
    All,
    /// 指定の形態のみを対象とする
    Only(ServiceType),
}

/// サービス検索画面のフィルター条件
///
/// 条件はすべてAND結合。テキスト検索内の候補フィールド（名称・市・住所）は
/// OR結合で、空文字列のクエリは制約を課さない。
#[derive(Debug, Clone, Default)]
pub struct ServiceFilter {
    /// テキスト検索クエリ（大文字小文字を区別しない部分一致）
    pub query: String,
    /// 提供形態フィルター
    pub service_type: TypeFilter,
    /// 州フィルター（空集合は制約なし）
    pub states: BTreeSet<BrazilianState>,
}

impl ServiceFilter {
    /// テキスト検索以外のフィルターが有効かどうか（「フィルターをクリア」の表示条件）
    pub fn has_active_filters(&self) -> bool {
        self.service_type != TypeFilter::All || !self.states.is_empty()
    }

    /// 正準コレクションからフィルター済みビューを導出する
    ///
    /// 純粋関数: 入力コレクションは変更せず、出力は正準の並び順を保持する。
    ///
    /// # 引数
    /// * `services` - 正準コレクション
    ///
    /// # 戻り値
    /// フィルター済みビュー
    pub fn apply(&self, services: &[Service]) -> Vec<Service> {
        services
            .iter()
            .filter(|service| self.matches(service))
            .cloned()
            .collect()
    }

    /// 単一のサービスがすべての有効な条件を満たすかを判定
    fn matches(&self, service: &Service) -> bool {
        self.matches_query(service) && self.matches_type(service) && self.matches_state(service)
    }

    fn matches_query(&self, service: &Service) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let query = self.query.to_lowercase();
        let contains = |field: Option<&str>| {
            field
                .map(|value| value.to_lowercase().contains(&query))
                .unwrap_or(false)
        };
        service.name.to_lowercase().contains(&query)
            || contains(service.city.as_deref())
            || contains(service.address.as_deref())
    }

    fn matches_type(&self, service: &Service) -> bool {
        match self.service_type {
            TypeFilter::All => true,
            TypeFilter::Only(service_type) => service.service_type == service_type,
        }
    }

    fn matches_state(&self, service: &Service) -> bool {
        self.states.is_empty() || self.states.contains(&service.state)
    }
}
