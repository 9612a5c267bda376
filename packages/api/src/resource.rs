//! Client-side copy of one page of a list endpoint.
//!
//! Views keep the loaded page in a [`ResourceList`] and patch it after their
//! own mutations (prepend a created row, splice out a deleted one) instead of
//! refetching.

use crate::models::Page;
use crate::ApiError;

/// Anything addressable by its server uid.
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceList<T> {
    items: Vec<T>,
    page: u32,
    total_pages: u32,
    state: LoadState,
}

impl<T> Default for ResourceList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            state: LoadState::Idle,
        }
    }
}

impl<T: Identified> ResourceList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Current 1-based page.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded and nothing in it.
    pub fn is_empty(&self) -> bool {
        self.state == LoadState::Ready && self.items.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn begin_load(&mut self, page: u32) {
        self.page = page.max(1);
        self.state = LoadState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Page<T>, ApiError>) {
        match result {
            Ok(page) => self.apply_page(page),
            Err(e) => self.fail(&e),
        }
    }

    pub fn apply_page(&mut self, page: Page<T>) {
        if let Some(number) = page.page_number {
            self.page = number.max(1);
        }
        self.total_pages = page.total_pages;
        self.items = page.content;
        self.state = LoadState::Ready;
    }

    /// Leave the loading state with an error. Already loaded rows are kept.
    pub fn fail(&mut self, error: &ApiError) {
        self.state = LoadState::Failed(error.display_lines().join("\n"));
    }

    /// Insert a freshly created row at the top (most recent first).
    ///
    /// Only the first page of a successful load is patched. Returns `false`
    /// when the row was not inserted and the caller has to refetch page 1.
    pub fn prepend(&mut self, item: T) -> bool {
        if self.page != 1 || self.error().is_some() {
            return false;
        }
        self.items.insert(0, item);
        if self.state == LoadState::Idle {
            self.state = LoadState::Ready;
        }
        true
    }

    /// Remove the row with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let idx = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(idx))
    }

    /// Sum a numeric field over the loaded rows.
    pub fn sum_by(&self, f: impl Fn(&T) -> i64) -> i64 {
        self.items.iter().map(f).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseType};

    fn expense(uid: &str, amount: i64) -> Expense {
        Expense {
            uid: uid.to_string(),
            car_uid: Some("c1".to_string()),
            kind: ExpenseType::Parts,
            name: format!("part {uid}"),
            exp_summ: amount,
            created_at: None,
            user: None,
        }
    }

    fn loaded(items: Vec<Expense>) -> ResourceList<Expense> {
        let mut list = ResourceList::new();
        list.begin_load(1);
        list.finish_load(Ok(Page {
            content: items,
            total_pages: 1,
            ..Page::default()
        }));
        list
    }

    #[test]
    fn test_delete_middle_keeps_order_and_total() {
        let mut list = loaded(vec![expense("a", 100), expense("b", 250), expense("c", 40)]);
        assert_eq!(list.sum_by(|e| e.exp_summ), 390);

        let removed = list.remove("b").unwrap();

        assert_eq!(removed.exp_summ, 250);
        let ids: Vec<&str> = list.items().iter().map(|e| e.uid.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(list.sum_by(|e| e.exp_summ), 140);
        assert!(list.remove("b").is_none());
    }

    #[test]
    fn test_prepend_goes_first() {
        let mut list = loaded(vec![expense("a", 1)]);
        assert!(list.prepend(expense("z", 2)));
        assert_eq!(list.items()[0].uid, "z");
        assert_eq!(list.sum_by(|e| e.exp_summ), 3);
    }

    #[test]
    fn test_prepend_off_first_page_asks_for_refetch() {
        let mut list: ResourceList<Expense> = ResourceList::new();
        list.begin_load(2);
        list.apply_page(Page {
            content: vec![expense("old1", 4), expense("old2", 25)],
            total_pages: 2,
            page_number: Some(2),
            ..Page::default()
        });

        assert!(!list.prepend(expense("brand_new", 1000)));

        let ids: Vec<&str> = list.items().iter().map(|e| e.uid.as_str()).collect();
        assert_eq!(ids, vec!["old1", "old2"]);
        assert_eq!(list.sum_by(|e| e.exp_summ), 29);
    }

    #[test]
    fn test_prepend_after_failed_load_keeps_error() {
        let mut list: ResourceList<Expense> = ResourceList::new();
        list.begin_load(1);
        list.finish_load(Err(ApiError::Network("offline".to_string())));

        assert!(!list.prepend(expense("n", 5)));

        assert_eq!(list.error(), Some("Network error: offline"));
        assert!(list.items().is_empty());
    }

    #[test]
    fn test_failure_leaves_loading_state() {
        let mut list: ResourceList<Expense> = ResourceList::new();
        list.begin_load(2);
        assert!(list.is_loading());

        list.finish_load(Err(ApiError::Network("offline".to_string())));

        assert!(!list.is_loading());
        assert_eq!(list.error(), Some("Network error: offline"));
        assert!(!list.is_empty());
        assert_eq!(list.page(), 2);
    }

    #[test]
    fn test_paging_bounds() {
        let mut list: ResourceList<Expense> = ResourceList::new();
        list.begin_load(1);
        list.apply_page(Page {
            content: Vec::new(),
            total_pages: 3,
            page_number: Some(2),
            ..Page::default()
        });
        assert!(list.has_prev());
        assert!(list.has_next());
        assert!(list.is_empty());

        list.begin_load(3);
        list.apply_page(Page {
            content: vec![expense("x", 5)],
            total_pages: 3,
            ..Page::default()
        });
        assert!(!list.has_next());
        assert_eq!(list.sum_by(|e| e.exp_summ), 5);
    }
}
