//! Listing pipeline.
//!
//! Recomputes the visible page from scratch on every input change:
//! 1. Predicate filtering
//! 2. Sorting (when a sort key is selected)
//! 3. Page slicing

use crate::error::QueryError;
use crate::logging::structured::LogContext;
use crate::query::filter::{apply_filters, ActiveFilterSet, Constraint};
use crate::query::pager::Pager;
use crate::query::sort::{sort_records, SortState};
use crate::records::fields::{Record, RecordField};

use super::collection::Collection;
use super::context::ScreenContext;

/// Everything the user has selected on a listing screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery<F: RecordField> {
    pub filters: ActiveFilterSet<F>,
    pub sort: Option<SortState<F>>,
    pub page: usize,
}

impl<F: RecordField> Default for ListingQuery<F> {
    fn default() -> Self {
        Self {
            filters: ActiveFilterSet::default(),
            sort: None,
            page: 1,
        }
    }
}

impl<F: RecordField> ListingQuery<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(mut self, filters: ActiveFilterSet<F>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: SortState<F>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Selecting a sort column. First selection sorts ascending.
    pub fn toggle_sort(&mut self, field: F) {
        match &mut self.sort {
            Some(state) => state.toggle(field),
            None => self.sort = Some(SortState::ascending(field)),
        }
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingResult<'a, R> {
    pub items: Vec<&'a R>,
    pub page: usize,
    pub total_pages: usize,
    /// Records passing the filters.
    pub matched_count: usize,
    /// Records in the collection.
    pub total_count: usize,
}

impl<R: Record> ListingResult<'_, R> {
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().copied().map(|r| r.id()).collect()
    }
}

/// Run filter, sort and page over `records`.
pub fn run_listing<'a, R: Record>(
    records: &'a [R],
    query: &ListingQuery<R::Field>,
    pager: &Pager,
    ctx: &LogContext,
) -> ListingResult<'a, R> {
    let mut matched = apply_filters(records, &query.filters);

    if let Some(sort) = &query.sort {
        sort_records(&mut matched, sort);
    }

    let page = pager.paginate(&matched, query.page);

    log::debug!(
        "{} LISTING_COMPUTED total={} matched={} filters={} sort={:?} page={}/{}",
        ctx,
        records.len(),
        matched.len(),
        query.filters.active_count(),
        query.sort.map(|s| (s.field.name(), s.direction.as_str())),
        page.page,
        page.total_pages
    );

    ListingResult {
        items: page.items.to_vec(),
        page: page.page,
        total_pages: page.total_pages,
        matched_count: matched.len(),
        total_count: records.len(),
    }
}

/// State of one listing screen: its collection, the user's query and the
/// page size.
#[derive(Debug, Clone)]
pub struct ListingScreen<R: Record> {
    collection: Collection<R>,
    query: ListingQuery<R::Field>,
    pager: Pager,
    ctx: LogContext,
}

impl<R: Record> ListingScreen<R> {
    pub fn new(records: Vec<R>, page_size: usize, ctx: &ScreenContext) -> Result<Self, QueryError> {
        let screen = Self {
            collection: Collection::new(records),
            query: ListingQuery::default(),
            pager: Pager::new(page_size)?,
            ctx: ctx.log_context(),
        };
        log::info!(
            "{} LISTING_MOUNTED records={} page_size={}",
            screen.ctx,
            screen.collection.len(),
            page_size
        );
        Ok(screen)
    }

    pub fn collection(&self) -> &Collection<R> {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut Collection<R> {
        &mut self.collection
    }

    pub fn query(&self) -> &ListingQuery<R::Field> {
        &self.query
    }

    /// The page currently on screen.
    pub fn current(&self) -> ListingResult<'_, R> {
        run_listing(self.collection.records(), &self.query, &self.pager, &self.ctx)
    }

    /// New search text; returns to the first page.
    pub fn search(&mut self, text: &str) {
        self.query.filters.set_query(text);
        self.query.page = 1;
    }

    pub fn set_filter(&mut self, field: R::Field, constraint: Constraint) {
        log::debug!("{} FILTER_SET field={} constraint={:?}", self.ctx, field.name(), constraint);
        self.query.filters.set(field, constraint);
        self.query.page = 1;
    }

    pub fn clear_filter(&mut self, field: R::Field) {
        self.query.filters.clear(field);
        self.query.page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.query.filters.reset();
        self.query.page = 1;
    }

    pub fn toggle_sort(&mut self, field: R::Field) {
        self.query.toggle_sort(field);
    }

    pub fn set_sort(&mut self, sort: SortState<R::Field>) {
        self.query.sort = Some(sort);
    }

    /// Jump to a page; the stored page is clamped against the current
    /// result so later navigation starts from a real page.
    pub fn goto_page(&mut self, page: usize) {
        let matched = apply_filters(self.collection.records(), &self.query.filters).len();
        self.query.page = self.pager.clamp_page(matched, page);
    }

    pub fn next_page(&mut self) {
        self.goto_page(self.query.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.goto_page(self.query.page.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::context::ViewContext;
    use crate::query::filter::NumericRange;
    use crate::query::sort::SortDirection;
    use crate::records::catalog::{sample_treks, sample_users};
    use crate::records::trek::TrekField;
    use crate::records::user::UserField;

    fn names<'a>(result: &ListingResult<'a, crate::records::trek::Trek>) -> Vec<&'a str> {
        result.items.iter().copied().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_moderate_treks_by_popularity() {
        let treks = sample_treks();
        let ctx = LogContext::new("test-view");
        let query = ListingQuery::new()
            .with_filters(
                ActiveFilterSet::new()
                    .with_exact(TrekField::Difficulty, "Moderate")
                    .with_range(TrekField::Duration, 1.0, 30.0)
                    .unwrap(),
            )
            .with_sort(SortState::descending(TrekField::Popularity));

        let result = run_listing(&treks, &query, &Pager::new(12).unwrap(), &ctx);
        assert_eq!(
            names(&result),
            vec!["Annapurna Circuit", "Gokyo Lakes", "Langtang Valley", "Upper Mustang"]
        );
        assert_eq!(result.page, 1);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.matched_count, 4);
        assert_eq!(result.total_count, 8);
    }

    #[test]
    fn test_unsorted_keeps_collection_order() {
        let treks = sample_treks();
        let ctx = LogContext::new("test-view");
        let result = run_listing(&treks, &ListingQuery::new(), &Pager::new(3).unwrap(), &ctx);
        assert_eq!(result.ids(), vec!["everest-base-camp", "annapurna-circuit", "langtang-valley"]);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn test_toggle_sort_from_unsorted() {
        let mut query = ListingQuery::<TrekField>::new();
        query.toggle_sort(TrekField::Price);
        assert_eq!(query.sort, Some(SortState::ascending(TrekField::Price)));
        query.toggle_sort(TrekField::Price);
        assert_eq!(query.sort.map(|s| s.direction), Some(SortDirection::Descending));
    }

    #[test]
    fn test_screen_filters_reset_page() {
        let view = ViewContext::new();
        let mut screen = ListingScreen::new(sample_treks(), 3, &view.screen("treks")).unwrap();
        screen.goto_page(3);
        assert_eq!(screen.current().page, 3);
        assert_eq!(screen.current().items.len(), 2);

        screen.set_filter(
            TrekField::Price,
            Constraint::Range(NumericRange::at_most(1200.0)),
        );
        assert_eq!(screen.query().page, 1);
        assert_eq!(screen.current().matched_count, 4);
    }

    #[test]
    fn test_screen_page_navigation_clamps() {
        let view = ViewContext::new();
        let mut screen = ListingScreen::new(sample_users(), 4, &view.screen("users")).unwrap();
        screen.previous_page();
        assert_eq!(screen.query().page, 1);
        screen.next_page();
        screen.next_page();
        assert_eq!(screen.query().page, 2);

        screen.search("maya");
        assert_eq!(screen.current().ids(), vec!["u1"]);
        screen.goto_page(5);
        assert_eq!(screen.query().page, 1);
    }

    #[test]
    fn test_screen_sort_by_treks_completed() {
        let view = ViewContext::new();
        let mut screen = ListingScreen::new(sample_users(), 12, &view.screen("users")).unwrap();
        screen.toggle_sort(UserField::TreksCompleted);
        screen.toggle_sort(UserField::TreksCompleted);
        assert_eq!(screen.current().ids().first().copied(), Some("u6"));
        screen.reset_filters();
        screen.clear_filter(UserField::Status);
        assert_eq!(screen.current().matched_count, 6);
    }

    #[test]
    fn test_zero_page_size() {
        let view = ViewContext::new();
        assert!(matches!(
            ListingScreen::new(sample_users(), 0, &view.screen("users")),
            Err(QueryError::ZeroPageSize)
        ));
    }
}
