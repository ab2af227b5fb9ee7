//! Gallery View-Model
//!
//! Holds the fetched project list plus the user's filter choices and derives
//! the visible subset on demand. Nothing derived is stored.

use async_trait::async_trait;

use crate::api::FetchError;
use crate::models::RawProject;
use super::transform::{transform, CategoryBucket, DisplayProject};

/// Cards shown before "Show More"
pub const COLLAPSED_LIMIT: usize = 3;

/// Where the project list comes from
#[async_trait(?Send)]
pub trait ProjectSource {
    async fn fetch_projects(&self) -> Result<Vec<RawProject>, FetchError>;
}

/// Category filter tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryBucket),
}

impl CategoryFilter {
    /// Tabs in display order
    pub const TABS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(CategoryBucket::Web),
        CategoryFilter::Only(CategoryBucket::Mobile),
        CategoryFilter::Only(CategoryBucket::Design),
    ];

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "all" => Some(CategoryFilter::All),
            "web" => Some(CategoryFilter::Only(CategoryBucket::Web)),
            "mobile" => Some(CategoryFilter::Only(CategoryBucket::Mobile)),
            "design" => Some(CategoryFilter::Only(CategoryBucket::Design)),
            _ => None,
        }
    }

    pub fn matches(self, bucket: CategoryBucket) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == bucket,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(bucket) => bucket.label(),
        }
    }
}

/// Outcome of the most recent load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Loaded(usize),
    Failed(FetchError),
}

/// Identifies one `begin_load` call; only the latest one may complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    raw_projects: Vec<RawProject>,
    selected_category: CategoryFilter,
    show_all: bool,
    status: LoadStatus,
    /// Last ticket handed out
    issued: u64,
    asset_origin: String,
}

impl GalleryState {
    /// Empty gallery in the loading state, as on mount
    pub fn new(asset_origin: impl Into<String>) -> Self {
        Self {
            raw_projects: Vec::new(),
            selected_category: CategoryFilter::All,
            show_all: false,
            status: LoadStatus::Loading,
            issued: 0,
            asset_origin: asset_origin.into(),
        }
    }

    // ========================
    // Loading
    // ========================

    /// Mark a load as in flight. Any earlier ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        self.status = LoadStatus::Loading;
        LoadTicket(self.issued)
    }

    /// Apply a fetch result. Returns false if a newer load superseded it.
    ///
    /// Failures replace the list with an empty one; they never propagate.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<RawProject>, FetchError>) -> bool {
        if ticket.0 != self.issued {
            log::debug!("discarding stale project load #{} (latest #{})", ticket.0, self.issued);
            return false;
        }

        match result {
            Ok(projects) => {
                log::info!("loaded {} projects", projects.len());
                self.status = LoadStatus::Loaded(projects.len());
                self.raw_projects = projects;
            }
            Err(e) => {
                log::error!("Error fetching projects: {}", e);
                self.raw_projects = Vec::new();
                self.status = LoadStatus::Failed(e);
            }
        }
        true
    }

    /// Fetch and apply in one step
    pub async fn load<S: ProjectSource + ?Sized>(&mut self, source: &S) {
        let ticket = self.begin_load();
        let result = source.fetch_projects().await;
        self.finish_load(ticket, result);
    }

    // ========================
    // User Interaction
    // ========================

    /// Select a category; always collapses back to the first few cards
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.selected_category = category;
        self.show_all = false;
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    // ========================
    // Accessors / Derivations
    // ========================

    pub fn loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Why the last load failed, if it did
    pub fn failure(&self) -> Option<&FetchError> {
        match &self.status {
            LoadStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn selected_category(&self) -> CategoryFilter {
        self.selected_category
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn raw_projects(&self) -> &[RawProject] {
        &self.raw_projects
    }

    /// All projects matching the selected category, in source order
    pub fn filtered_projects(&self) -> Vec<DisplayProject> {
        self.raw_projects
            .iter()
            .map(|raw| transform(raw, &self.asset_origin))
            .filter(|p| self.selected_category.matches(p.category))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.raw_projects
            .iter()
            .filter(|raw| self.selected_category.matches(CategoryBucket::from_raw(&raw.category)))
            .count()
    }

    /// Whether the "Show More / Show Less" control should be rendered
    pub fn has_more(&self) -> bool {
        self.filtered_count() > COLLAPSED_LIMIT
    }

    pub fn visible_projects(&self) -> Vec<DisplayProject> {
        let mut filtered = self.filtered_projects();
        if !self.show_all {
            filtered.truncate(COLLAPSED_LIMIT);
        }
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const ORIGIN: &str = "https://cdn.example.com";

    fn make_raw(id: &str, category: &str, images: &[&str]) -> RawProject {
        RawProject {
            id: id.to_string(),
            name: format!("Project {}", id),
            description: String::new(),
            images: images.iter().map(|s| s.to_string()).collect(),
            category: category.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn loaded(projects: Vec<RawProject>) -> GalleryState {
        let mut state = GalleryState::new(ORIGIN);
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(projects));
        state
    }

    fn mixed(count: usize) -> Vec<RawProject> {
        let categories = ["web_development", "mobile_development", "design_&_ui/ux"];
        (0..count)
            .map(|i| make_raw(&i.to_string(), categories[i % 3], &[]))
            .collect()
    }

    struct StubSource {
        result: Result<Vec<RawProject>, FetchError>,
        calls: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl ProjectSource for StubSource {
        async fn fetch_projects(&self) -> Result<Vec<RawProject>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GalleryState::new(ORIGIN);
        assert!(state.loading());
        assert!(state.raw_projects().is_empty());
        assert_eq!(state.selected_category(), CategoryFilter::All);
        assert!(!state.show_all());
    }

    #[test]
    fn test_filter_mobile_scenario() {
        let mut state = loaded(vec![
            make_raw("1", "mobile_development", &["a.png", "b.png"]),
            make_raw("2", "web_development", &[]),
        ]);

        state.set_category(CategoryFilter::parse("mobile").unwrap());
        let visible = state.visible_projects();

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
        assert_eq!(visible[0].cover_image_url, "https://cdn.example.com/a.png");
        assert_eq!(visible[0].image_urls.len(), 2);
    }

    #[test]
    fn test_visible_length_respects_show_all() {
        for count in 0..8 {
            let mut state = loaded(mixed(count));
            for tab in CategoryFilter::TABS {
                state.set_category(tab);
                let filtered = state.filtered_count();
                assert_eq!(state.filtered_projects().len(), filtered);
                assert_eq!(state.visible_projects().len(), filtered.min(COLLAPSED_LIMIT));
                assert_eq!(state.has_more(), filtered > COLLAPSED_LIMIT);

                state.toggle_show_all();
                assert_eq!(state.visible_projects().len(), filtered);
                state.toggle_show_all();
            }
        }
    }

    #[test]
    fn test_set_category_resets_show_all() {
        let mut state = loaded(mixed(9));
        for tab in CategoryFilter::TABS {
            state.toggle_show_all();
            assert!(state.show_all());
            state.set_category(tab);
            assert!(!state.show_all());

            // same category again still collapses
            state.set_category(tab);
            assert!(!state.show_all());
        }
    }

    #[test]
    fn test_source_order_preserved() {
        let mut state = loaded(mixed(7));
        state.toggle_show_all();
        let ids: Vec<String> = state.visible_projects().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4", "5", "6"]);

        state.set_category(CategoryFilter::Only(CategoryBucket::Web));
        state.toggle_show_all();
        let ids: Vec<String> = state.visible_projects().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["0", "3", "6"]);
    }

    #[test]
    fn test_unknown_category_counts_as_web() {
        let mut state = loaded(vec![make_raw("x", "3d_printing", &[])]);
        state.set_category(CategoryFilter::Only(CategoryBucket::Web));
        assert_eq!(state.visible_projects().len(), 1);
        state.set_category(CategoryFilter::Only(CategoryBucket::Design));
        assert!(state.visible_projects().is_empty());
    }

    #[tokio::test]
    async fn test_http_500_yields_empty_list() {
        let mut state = loaded(mixed(4));
        let source = StubSource {
            result: Err(FetchError::Status(500)),
            calls: Cell::new(0),
        };

        state.load(&source).await;

        assert!(state.raw_projects().is_empty());
        assert!(!state.loading());
        assert!(state.visible_projects().is_empty());
        assert_eq!(state.status(), &LoadStatus::Failed(FetchError::Status(500)));
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_load_replaces_wholesale() {
        let mut state = loaded(mixed(5));
        let source = StubSource {
            result: Ok(vec![make_raw("new", "design_&_ui/ux", &["/x.png"])]),
            calls: Cell::new(0),
        };

        state.load(&source).await;

        assert_eq!(state.raw_projects().len(), 1);
        assert_eq!(state.status(), &LoadStatus::Loaded(1));
        assert_eq!(state.visible_projects()[0].cover_image_url, "https://cdn.example.com/x.png");
    }

    #[test]
    fn test_empty_success_distinct_from_failure() {
        let empty = loaded(Vec::new());
        assert_eq!(empty.status(), &LoadStatus::Loaded(0));

        let mut failed = GalleryState::new(ORIGIN);
        let ticket = failed.begin_load();
        failed.finish_load(ticket, Err(FetchError::Rejected("nope".to_string())));
        assert!(matches!(failed.status(), LoadStatus::Failed(_)));
        assert_eq!(empty.visible_projects(), failed.visible_projects());

        assert_eq!(empty.failure(), None);
        assert_eq!(failed.failure(), Some(&FetchError::Rejected("nope".to_string())));
    }

    #[test]
    fn test_latest_load_wins() {
        let mut state = GalleryState::new(ORIGIN);
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.finish_load(second, Ok(mixed(2))));
        assert!(!state.finish_load(first, Err(FetchError::Transport("timeout".to_string()))));

        assert_eq!(state.raw_projects().len(), 2);
        assert_eq!(state.status(), &LoadStatus::Loaded(2));
    }

    #[test]
    fn test_stale_result_keeps_loading() {
        let mut state = GalleryState::new(ORIGIN);
        let first = state.begin_load();
        let _second = state.begin_load();

        assert!(!state.finish_load(first, Ok(mixed(3))));
        assert!(state.loading());
        assert!(state.raw_projects().is_empty());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(CategoryFilter::parse("all"), Some(CategoryFilter::All));
        assert_eq!(CategoryFilter::parse("design"), Some(CategoryFilter::Only(CategoryBucket::Design)));
        assert_eq!(CategoryFilter::parse("games"), None);
    }
}
