use contracts::domain::a001_expense_type::aggregate::SimpleItem;
use leptos::prelude::*;

/// Rows as fetched plus the subset matching the current search
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseTypeListState {
    pub unfiltered: Vec<SimpleItem>,
    pub filtered: Vec<SimpleItem>,
    pub query: String,
}

impl ExpenseTypeListState {
    pub fn set_items(&mut self, items: Vec<SimpleItem>) {
        self.unfiltered = items;
        self.refilter();
    }

    /// Case-insensitive substring match on `name`; empty query shows everything
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        self.refilter();
    }

    /// Merges a record saved by the dialog into both copies.
    ///
    /// `edited` renames the matching row in place; otherwise the record is
    /// prepended. The visible rows are patched directly, so a saved record
    /// stays on screen even when it does not match the current search.
    pub fn apply_completion(&mut self, record: SimpleItem, edited: bool) {
        if edited {
            for row in self.unfiltered.iter_mut().chain(self.filtered.iter_mut()) {
                if row.id == record.id {
                    row.name = record.name.clone();
                }
            }
        } else {
            self.unfiltered.insert(0, record.clone());
            self.filtered.insert(0, record);
        }
    }

    fn refilter(&mut self) {
        let needle = self.query.to_lowercase();
        self.filtered = if needle.is_empty() {
            self.unfiltered.clone()
        } else {
            self.unfiltered
                .iter()
                .filter(|row| row.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };
    }
}

pub fn create_state() -> RwSignal<ExpenseTypeListState> {
    RwSignal::new(ExpenseTypeListState::default())
}
