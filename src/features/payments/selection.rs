use std::collections::HashSet;

/// 一括操作の対象となる支払いIDの選択状態
///
/// 不透明なIDの集合（順序保証なし、重複は構造上あり得ない）。
/// フィルターの変更で選択は自動的には落とされない：フィルター済みビューから
/// 外れたレコードの選択も、明示的にクリアされるまで保持される。
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selected: HashSet<String>,
}

impl SelectionTracker {
    /// 空の選択状態を作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 単一IDの選択状態を切り替える
    ///
    /// 選択済みなら外し、未選択なら追加する。フィルター状態による制約はない。
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// 全選択／全解除を単一のトグルとして実行する
    ///
    /// 選択数がフィルター済みビューの件数と等しくかつ非ゼロの場合は全解除、
    /// それ以外の場合は選択をフィルター済みビューのID集合でちょうど置き換える
    /// （以前の選択は破棄される）。
    ///
    /// # 引数
    /// * `filtered_ids` - 現在のフィルター済みビューのID列
    pub fn toggle_select_all(&mut self, filtered_ids: &[String]) {
        if !filtered_ids.is_empty() && self.selected.len() == filtered_ids.len() {
            self.clear();
        } else {
            self.selected = filtered_ids.iter().cloned().collect();
        }
    }

    /// 選択をすべて解除する（一括操作の完了後に自動的に呼ばれる）
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// 指定IDが選択されているかを判定
    pub fn contains(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// 選択件数
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// 選択が空かどうか
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// 選択中のIDを走査する（順序保証なし）
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut selection = SelectionTracker::new();

        selection.toggle("a");
        assert!(selection.contains("a"));
        assert_eq!(selection.len(), 1);

        selection.toggle("a");
        assert!(!selection.contains("a"));
        assert!(selection.is_empty());
    }

    #[quickcheck]
    fn prop_toggle_twice_restores_selection(initial: Vec<String>, id: String) -> bool {
        let mut selection = SelectionTracker::new();
        for value in &initial {
            selection.toggle(value);
        }
        let before: HashSet<String> = selection.iter().map(str::to_string).collect();

        selection.toggle(&id);
        selection.toggle(&id);

        let after: HashSet<String> = selection.iter().map(str::to_string).collect();
        before == after
    }

    #[test]
    fn test_select_all_then_deselect_all() {
        let mut selection = SelectionTracker::new();
        let filtered = ids(&["1", "2", "3"]);

        // 選択がビューと一致しない場合はビュー全体を選択する
        selection.toggle_select_all(&filtered);
        assert_eq!(selection.len(), 3);
        assert!(selection.contains("1"));
        assert!(selection.contains("3"));

        // 選択数がビューの件数と等しくかつ非ゼロの場合は全解除する
        selection.toggle_select_all(&filtered);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_replaces_partial_selection() {
        let mut selection = SelectionTracker::new();
        selection.toggle("fora-da-vista");

        let filtered = ids(&["1", "2"]);
        selection.toggle_select_all(&filtered);

        // 以前の選択は破棄され、ビューのID集合でちょうど置き換えられる
        assert_eq!(selection.len(), 2);
        assert!(!selection.contains("fora-da-vista"));
        assert!(selection.contains("1"));
        assert!(selection.contains("2"));
    }

    #[test]
    fn test_select_all_with_empty_view() {
        let mut selection = SelectionTracker::new();

        // ビューが空の場合、全選択は空集合への置き換えになる
        selection.toggle_select_all(&[]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_survives_view_changes() {
        // ビューから外れたIDの選択は保持される（明示的なクリアまで）
        let mut selection = SelectionTracker::new();
        selection.toggle("1");
        selection.toggle("2");

        // フィルター変更そのものは選択に影響しない（呼び出しが存在しない）
        assert_eq!(selection.len(), 2);

        selection.clear();
        assert!(selection.is_empty());
    }
}
