//! Interaction state behind [`MultiSelect`](super::MultiSelect).
//!
//! No DOM types in here: the component forwards events to these transitions
//! and renders whatever the state derives, so everything below can be tested
//! without a browser.

use crate::types::Entry;

/// Two-stage backspace removal of the last chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RemovalState {
    #[default]
    Idle,
    /// Last chip is highlighted; the next Backspace removes it
    Armed,
}

/// Outcome of clicking a dropdown row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectState {
    query: String,
    selected: Vec<Entry>,
    dropdown_open: bool,
    removal: RemovalState,
}

impl SelectState {
    /// Fresh state with `initial` preselected. Duplicate names keep their
    /// first occurrence.
    pub fn new(initial: Vec<Entry>) -> Self {
        let mut selected: Vec<Entry> = Vec::with_capacity(initial.len());
        for entry in initial {
            if !selected.iter().any(|s| s.name == entry.name) {
                selected.push(entry);
            }
        }
        Self {
            selected,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> &[Entry] {
        &self.selected
    }

    pub fn is_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn removal(&self) -> RemovalState {
        self.removal
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|s| s.name == name)
    }

    /// Index of the chip currently highlighted for removal.
    pub fn highlighted(&self) -> Option<usize> {
        match self.removal {
            RemovalState::Armed => self.selected.len().checked_sub(1),
            RemovalState::Idle => None,
        }
    }

    /// Dropdown rows for the current query and selection.
    pub fn visible(&self, entries: &[Entry]) -> Vec<Entry> {
        filter_entries(entries, &self.query, &self.selected)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Text field gained focus.
    pub fn open(&mut self) {
        self.dropdown_open = true;
    }

    /// Pointer went down outside the widget.
    pub fn dismiss(&mut self) {
        self.dropdown_open = false;
        self.removal = RemovalState::Idle;
    }

    /// Dropdown row clicked. Clears the query and any pending removal.
    pub fn toggle(&mut self, entry: &Entry) -> Toggle {
        let outcome = if self.is_selected(&entry.name) {
            self.selected.retain(|s| s.name != entry.name);
            Toggle::Removed
        } else {
            self.selected.push(entry.clone());
            Toggle::Added
        };
        self.query.clear();
        self.removal = RemovalState::Idle;
        outcome
    }

    /// Chip close icon clicked: removes by name, wherever the chip sits.
    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        self.removal = RemovalState::Idle;
        let idx = self.selected.iter().position(|s| s.name == name)?;
        Some(self.selected.remove(idx))
    }

    /// Backspace anywhere on the page. The first press arms, the second
    /// removes the most recently added entry.
    pub fn backspace(&mut self) -> Option<Entry> {
        match self.removal {
            RemovalState::Idle => {
                self.removal = RemovalState::Armed;
                None
            }
            RemovalState::Armed => {
                self.removal = RemovalState::Idle;
                let name = self.selected.last()?.name.clone();
                self.remove(&name)
            }
        }
    }
}

/// Entries whose name contains `query` (case-insensitive) and that are not
/// already selected, in dataset order.
pub fn filter_entries(entries: &[Entry], query: &str, selected: &[Entry]) -> Vec<Entry> {
    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&query))
        .filter(|entry| !selected.iter().any(|s| s.name == entry.name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> Entry {
        Entry {
            name: name.to_string(),
            image_url: format!("https://example.com/{}.png", name.to_lowercase()),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn dataset() -> Vec<Entry> {
        vec![entry("Alice"), entry("Bob"), entry("Carol")]
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = SelectState::new(vec![]);
        assert_eq!(state.query(), "");
        assert!(state.selected().is_empty());
        assert!(!state.is_open());
        assert_eq!(state.removal(), RemovalState::Idle);
        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn test_initial_selection_dedups_by_name() {
        let state = SelectState::new(vec![entry("Bob"), entry("Alice"), entry("Bob")]);
        assert_eq!(names(state.selected()), vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_empty_query_shows_all_unselected() {
        let mut state = SelectState::new(vec![]);
        assert_eq!(names(&state.visible(&dataset())), vec!["Alice", "Bob", "Carol"]);

        state.toggle(&entry("Bob"));
        assert_eq!(names(&state.visible(&dataset())), vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let data = dataset();
        assert_eq!(names(&filter_entries(&data, "A", &[])), vec!["Alice", "Carol"]);
        assert_eq!(names(&filter_entries(&data, "ro", &[])), vec!["Carol"]);
        assert_eq!(names(&filter_entries(&data, "OB", &[])), vec!["Bob"]);
        assert!(filter_entries(&data, "zed", &[]).is_empty());
    }

    #[test]
    fn test_filter_keeps_dataset_order() {
        let data = vec![entry("Zoe"), entry("Amy"), entry("Mia")];
        assert_eq!(names(&filter_entries(&data, "", &[])), vec!["Zoe", "Amy", "Mia"]);
    }

    #[test]
    fn test_dropdown_and_chips_are_disjoint() {
        let data = dataset();
        let mut state = SelectState::new(vec![]);
        state.toggle(&entry("Carol"));
        state.toggle(&entry("Alice"));

        for query in ["", "a", "o", "xyz"] {
            state.set_query(query);
            let visible = state.visible(&data);
            assert!(visible.iter().all(|e| !state.is_selected(&e.name)));

            let expected: Vec<&str> = data
                .iter()
                .filter(|e| e.name.to_lowercase().contains(query))
                .filter(|e| !state.is_selected(&e.name))
                .map(|e| e.name.as_str())
                .collect();
            assert_eq!(names(&visible), expected);
        }
    }

    #[test]
    fn test_select_scenario() {
        let data = dataset();
        let mut state = SelectState::new(vec![]);

        state.set_query("a");
        assert_eq!(names(&state.visible(&data)), vec!["Alice", "Carol"]);

        assert_eq!(state.toggle(&entry("Alice")), Toggle::Added);
        assert_eq!(names(state.selected()), vec!["Alice"]);
        assert_eq!(state.query(), "");
        assert_eq!(names(&state.visible(&data)), vec!["Bob", "Carol"]);

        state.set_query("a");
        assert_eq!(names(&state.visible(&data)), vec!["Carol"]);
    }

    #[test]
    fn test_toggle_appends_in_click_order() {
        let mut state = SelectState::new(vec![]);
        state.toggle(&entry("Carol"));
        state.toggle(&entry("Alice"));
        state.toggle(&entry("Bob"));
        assert_eq!(names(state.selected()), vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_toggle_selected_entry_removes_it() {
        let mut state = SelectState::new(vec![entry("Alice"), entry("Bob")]);
        state.set_query("bo");
        assert_eq!(state.toggle(&entry("Alice")), Toggle::Removed);
        assert_eq!(names(state.selected()), vec!["Bob"]);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_toggle_clears_pending_removal() {
        let mut state = SelectState::new(vec![entry("Alice")]);
        state.backspace();
        assert_eq!(state.removal(), RemovalState::Armed);

        state.toggle(&entry("Bob"));
        assert_eq!(state.removal(), RemovalState::Idle);
        assert_eq!(names(state.selected()), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_backspace_scenario() {
        let mut state = SelectState::new(vec![]);
        state.toggle(&entry("Alice"));
        state.toggle(&entry("Bob"));

        assert_eq!(state.backspace(), None);
        assert_eq!(state.highlighted(), Some(1));
        assert_eq!(names(state.selected()), vec!["Alice", "Bob"]);

        assert_eq!(state.backspace(), Some(entry("Bob")));
        assert_eq!(names(state.selected()), vec!["Alice"]);
        assert_eq!(state.removal(), RemovalState::Idle);

        assert_eq!(state.backspace(), None);
        assert_eq!(state.highlighted(), Some(0));

        assert_eq!(state.backspace(), Some(entry("Alice")));
        assert!(state.selected().is_empty());
        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn test_single_backspace_never_removes() {
        let mut state = SelectState::new(vec![entry("Alice"), entry("Bob"), entry("Carol")]);
        for presses in 1..=5 {
            state.backspace();
            let expected_len = 3 - presses / 2;
            assert_eq!(state.selected().len(), expected_len);
        }
        assert_eq!(state.removal(), RemovalState::Armed);
    }

    #[test]
    fn test_backspace_removes_most_recent_not_last_in_dataset() {
        let mut state = SelectState::new(vec![]);
        state.toggle(&entry("Carol"));
        state.toggle(&entry("Alice"));

        state.backspace();
        assert_eq!(state.backspace(), Some(entry("Alice")));
        assert_eq!(names(state.selected()), vec!["Carol"]);
    }

    #[test]
    fn test_backspace_arms_regardless_of_query() {
        let mut state = SelectState::new(vec![entry("Alice")]);
        state.set_query("bo");

        state.backspace();
        assert_eq!(state.removal(), RemovalState::Armed);
        assert_eq!(state.backspace(), Some(entry("Alice")));
    }

    #[test]
    fn test_backspace_on_empty_selection_is_noop() {
        let mut state = SelectState::new(vec![]);
        assert_eq!(state.backspace(), None);
        assert_eq!(state.removal(), RemovalState::Armed);
        assert_eq!(state.highlighted(), None);

        assert_eq!(state.backspace(), None);
        assert_eq!(state.removal(), RemovalState::Idle);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_close_icon_removes_by_name_at_any_position() {
        let mut state = SelectState::new(vec![entry("Alice"), entry("Bob"), entry("Carol")]);
        state.backspace();

        assert_eq!(state.remove("Alice"), Some(entry("Alice")));
        assert_eq!(names(state.selected()), vec!["Bob", "Carol"]);
        assert_eq!(state.removal(), RemovalState::Idle);
    }

    #[test]
    fn test_close_icon_unknown_name_still_resets_highlight() {
        let mut state = SelectState::new(vec![entry("Alice")]);
        state.backspace();

        assert_eq!(state.remove("Nobody"), None);
        assert_eq!(names(state.selected()), vec!["Alice"]);
        assert_eq!(state.removal(), RemovalState::Idle);
    }

    #[test]
    fn test_outside_click_clears_highlight_without_removing() {
        let mut state = SelectState::new(vec![]);
        state.open();
        state.toggle(&entry("Alice"));
        state.toggle(&entry("Bob"));
        state.backspace();
        assert_eq!(state.highlighted(), Some(1));

        state.dismiss();
        assert!(!state.is_open());
        assert_eq!(state.highlighted(), None);
        assert_eq!(names(state.selected()), vec!["Alice", "Bob"]);

        // Next Backspace only arms again
        assert_eq!(state.backspace(), None);
        assert_eq!(names(state.selected()), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_open_keeps_query_and_selection() {
        let mut state = SelectState::new(vec![entry("Bob")]);
        state.set_query("al");
        state.open();
        assert!(state.is_open());
        assert_eq!(state.query(), "al");
        assert_eq!(names(state.selected()), vec!["Bob"]);
    }
}
