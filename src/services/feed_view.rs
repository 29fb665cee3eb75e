//! Category filtering and fixed-size paging over an aggregated feed.
//!
//! View state is a plain value; every transition takes the current state and
//! returns the next one, leaving the articles untouched.

use serde::Serialize;
use tracing::debug;

use crate::domain::{Article, CategoryFilter};
use crate::errors::{GamePulseError, GamePulseResult};

pub const DEFAULT_PAGE_SIZE: usize = 9;
pub const DEFAULT_PAGE_CAP: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    page_size: usize,
    page_cap: usize,
}

impl PageLayout {
    pub fn new(page_size: usize, page_cap: usize) -> GamePulseResult<Self> {
        if page_size == 0 || page_cap == 0 {
            return Err(GamePulseError::Config(format!(
                "page size and page cap must be at least 1 (got {} and {})",
                page_size, page_cap
            )));
        }
        Ok(Self { page_size, page_cap })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_cap(&self) -> usize {
        self.page_cap
    }

    /// `max(1, min(cap, ceil(count / page_size)))`
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size).clamp(1, self.page_cap)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_cap: DEFAULT_PAGE_CAP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub selected: CategoryFilter,
    /// 1-indexed
    pub current_page: usize,
}

impl ViewState {
    pub fn initial() -> Self {
        Self {
            selected: CategoryFilter::All,
            current_page: 1,
        }
    }
}

/// One page of the feed as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    pub category: String,
    pub items: Vec<&'a Article>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Set when the selected category has no articles at all
    pub empty: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Paginator {
    layout: PageLayout,
}

impl Paginator {
    pub fn new(layout: PageLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> PageLayout {
        self.layout
    }

    /// Articles matching `filter`, in aggregate order
    pub fn filter<'a>(&self, articles: &'a [Article], filter: &CategoryFilter) -> Vec<&'a Article> {
        articles
            .iter()
            .filter(|article| filter.matches(&article.category))
            .collect()
    }

    pub fn total_pages(&self, articles: &[Article], filter: &CategoryFilter) -> usize {
        let count = articles
            .iter()
            .filter(|article| filter.matches(&article.category))
            .count();
        self.layout.total_pages(count)
    }

    pub fn select_category(&self, state: &ViewState, filter: CategoryFilter) -> ViewState {
        debug!(from = %state.selected, to = %filter, "category selected");
        ViewState {
            selected: filter,
            current_page: 1,
        }
    }

    /// Move to `page`, or keep `state` when the page is out of range
    pub fn go_to_page(&self, articles: &[Article], state: &ViewState, page: usize) -> ViewState {
        let total = self.total_pages(articles, &state.selected);

        if page < 1 || page > total {
            debug!(page, total, "page request rejected");
            return state.clone();
        }

        ViewState {
            selected: state.selected.clone(),
            current_page: page,
        }
    }

    pub fn page<'a>(&self, articles: &'a [Article], state: &ViewState) -> Page<'a> {
        let filtered = self.filter(articles, &state.selected);
        let total_pages = self.layout.total_pages(filtered.len());
        let empty = filtered.is_empty();

        let start = state
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.layout.page_size)
            .min(filtered.len());
        let end = start.saturating_add(self.layout.page_size).min(filtered.len());

        Page {
            category: state.selected.to_string(),
            items: filtered[start..end].to_vec(),
            current_page: state.current_page,
            total_pages,
            empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn articles(category: &str, count: usize) -> Vec<Article> {
        (1..=count)
            .map(|i| {
                Article::new(
                    format!("{}-{}", category, i),
                    Category::new(category),
                    format!("{} story {}", category, i),
                )
            })
            .collect()
    }

    fn only(name: &str) -> CategoryFilter {
        CategoryFilter::Only(Category::new(name))
    }

    #[test]
    fn test_layout_rejects_zero() {
        assert!(PageLayout::new(0, 4).is_err());
        assert!(PageLayout::new(9, 0).is_err());
    }

    #[test]
    fn test_total_pages_formula() {
        let layout = PageLayout::default();
        assert_eq!(layout.total_pages(0), 1);
        assert_eq!(layout.total_pages(1), 1);
        assert_eq!(layout.total_pages(9), 1);
        assert_eq!(layout.total_pages(10), 2);
        assert_eq!(layout.total_pages(21), 3);
        assert_eq!(layout.total_pages(36), 4);
        assert_eq!(layout.total_pages(100), 4);
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::initial();
        assert_eq!(state.selected, CategoryFilter::All);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_twenty_one_cricket_articles() {
        let feed = articles("Cricket", 21);
        let paginator = Paginator::default();

        let state = paginator.select_category(&ViewState::initial(), only("Cricket"));
        let first = paginator.page(&feed, &state);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 9);
        assert_eq!(first.items[0].id, "Cricket-1");
        assert_eq!(first.items[8].id, "Cricket-9");

        let state = paginator.go_to_page(&feed, &state, 3);
        let third = paginator.page(&feed, &state);
        let ids: Vec<&str> = third.items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["Cricket-19", "Cricket-20", "Cricket-21"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut feed = Vec::new();
        for i in 0..4 {
            feed.extend(articles("Cricket", 1).into_iter().map(|mut a| {
                a.id = format!("c{}", i);
                a
            }));
            feed.extend(articles("Tennis", 1).into_iter().map(|mut a| {
                a.id = format!("t{}", i);
                a
            }));
        }

        let paginator = Paginator::default();
        let ids: Vec<&str> = paginator
            .filter(&feed, &only("tennis"))
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["t0", "t1", "t2", "t3"]);
    }

    #[test]
    fn test_out_of_range_pages_rejected() {
        let feed = articles("Football", 12);
        let paginator = Paginator::default();
        let state = ViewState::initial();

        assert_eq!(paginator.go_to_page(&feed, &state, 0), state);
        assert_eq!(paginator.go_to_page(&feed, &state, 3), state);
        assert_eq!(paginator.go_to_page(&feed, &state, 2).current_page, 2);
    }

    #[test]
    fn test_select_category_resets_page() {
        let feed = articles("Football", 12);
        let paginator = Paginator::default();

        let state = paginator.go_to_page(&feed, &ViewState::initial(), 2);
        assert_eq!(state.current_page, 2);

        let state = paginator.select_category(&state, CategoryFilter::All);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_select_category_idempotent() {
        let feed = articles("Football", 12);
        let paginator = Paginator::default();

        let once = paginator.select_category(&ViewState::initial(), only("Football"));
        let twice = paginator.select_category(&once, only("Football"));

        assert_eq!(once, twice);
        assert_eq!(paginator.page(&feed, &once), paginator.page(&feed, &twice));
    }

    #[test]
    fn test_empty_category() {
        let feed = articles("Football", 5);
        let paginator = Paginator::default();

        let state = paginator.select_category(&ViewState::initial(), only("F1"));
        let page = paginator.page(&feed, &state);

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert!(page.empty);
        assert_eq!(paginator.go_to_page(&feed, &state, 2), state);
    }

    #[test]
    fn test_results_beyond_cap_unreachable() {
        let feed = articles("Cricket", 50);
        let paginator = Paginator::default();
        let state = ViewState::initial();

        assert_eq!(paginator.total_pages(&feed, &state.selected), 4);
        assert_eq!(paginator.go_to_page(&feed, &state, 5), state);

        let last = paginator.page(&feed, &paginator.go_to_page(&feed, &state, 4));
        assert_eq!(last.items.last().unwrap().id, "Cricket-36");
    }

    #[test]
    fn test_page_label() {
        let feed = articles("Cricket", 1);
        let paginator = Paginator::default();

        assert_eq!(paginator.page(&feed, &ViewState::initial()).category, "All");
        let state = paginator.select_category(&ViewState::initial(), only("Cricket"));
        assert_eq!(paginator.page(&feed, &state).category, "Cricket");
    }
}
