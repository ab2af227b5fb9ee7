//! Carousel Navigator
//!
//! Image-by-image navigation for the project modal.
//! The page scroll lock is held as a guard for exactly as long as a project
//! is open; closing or dropping the navigator releases it.

use super::transform::DisplayProject;

/// Thumbnail width in px
pub const THUMB_WIDTH: f64 = 80.0;
/// Gap between thumbnails in px
pub const THUMB_GAP: f64 = 8.0;

/// Which way the last navigation moved (drives the slide animation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    Left,
    #[default]
    Right,
}

impl SlideDirection {
    pub fn animation_class(self) -> &'static str {
        match self {
            SlideDirection::Left => "animate-slideInLeft",
            SlideDirection::Right => "animate-slideInRight",
        }
    }
}

/// Modal image navigator.
///
/// `G` is whatever guard keeps background scrolling suppressed.
pub struct Carousel<G = ()> {
    active: Option<DisplayProject>,
    current_index: usize,
    direction: SlideDirection,
    guard: Option<G>,
}

impl<G> Default for Carousel<G> {
    fn default() -> Self {
        Self {
            active: None,
            current_index: 0,
            direction: SlideDirection::default(),
            guard: None,
        }
    }
}

impl<G> Carousel<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `project` at its first image.
    ///
    /// A previously open project is closed (and its guard released) before
    /// `acquire` runs, so at most one guard is ever alive.
    pub fn open_with(&mut self, project: DisplayProject, acquire: impl FnOnce() -> G) {
        self.close();
        self.active = Some(project);
        self.current_index = 0;
        self.guard = Some(acquire());
    }

    /// Back to the unopened state; releases the guard
    pub fn close(&mut self) {
        self.active = None;
        self.current_index = 0;
        self.direction = SlideDirection::default();
        self.guard = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&DisplayProject> {
        self.active.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// Image count of the open project
    pub fn len(&self) -> usize {
        self.active.as_ref().map_or(0, |p| p.image_urls.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current_image(&self) -> Option<&str> {
        self.active
            .as_ref()
            .and_then(|p| p.image_urls.get(self.current_index))
            .map(String::as_str)
    }

    pub fn next(&mut self) {
        let n = self.len();
        if n == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % n;
        self.direction = SlideDirection::Right;
    }

    pub fn prev(&mut self) {
        let n = self.len();
        if n == 0 {
            return;
        }
        self.current_index = (self.current_index + n - 1) % n;
        self.direction = SlideDirection::Left;
    }

    /// Jump to image `index`. Out of range indices are ignored (returns false).
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        if index > self.current_index {
            self.direction = SlideDirection::Right;
        } else if index < self.current_index {
            self.direction = SlideDirection::Left;
        }
        self.current_index = index;
        true
    }

    /// Strip scroll offset that centers the current thumbnail
    pub fn thumbnail_offset(&self, strip_width: f64) -> f64 {
        thumbnail_scroll_offset(self.current_index, strip_width, THUMB_WIDTH, THUMB_GAP)
    }
}

/// Left scroll offset centering thumbnail `index` in a strip `strip_width` wide
pub fn thumbnail_scroll_offset(index: usize, strip_width: f64, thumb_width: f64, gap: f64) -> f64 {
    let center = index as f64 * (thumb_width + gap) + thumb_width / 2.0;
    (center - strip_width / 2.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::CategoryBucket;
    use std::cell::Cell;
    use std::rc::Rc;

    fn project(images: usize) -> DisplayProject {
        let image_urls: Vec<String> = (0..images).map(|i| format!("https://img/{}.png", i)).collect();
        DisplayProject {
            id: "p".to_string(),
            title: "Gallery".to_string(),
            description: String::new(),
            cover_image_url: image_urls.first().cloned().unwrap_or_default(),
            image_urls,
            category: CategoryBucket::Web,
            gradient: CategoryBucket::Web.gradient(),
        }
    }

    /// Counts live guards
    struct CountingGuard(Rc<Cell<i32>>);

    impl CountingGuard {
        fn acquire(live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 1);
            Self(live.clone())
        }
    }

    impl Drop for CountingGuard {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn test_next_wraps_after_last() {
        let mut carousel = Carousel::<()>::new();
        carousel.open_with(project(5), || ());

        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.current_index(), 4);

        carousel.next();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction(), SlideDirection::Right);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = Carousel::<()>::new();
        carousel.open_with(project(3), || ());

        carousel.prev();
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.direction(), SlideDirection::Left);
    }

    #[test]
    fn test_next_then_prev_returns() {
        for n in 1..6 {
            for start in 0..n {
                let mut carousel = Carousel::<()>::new();
                carousel.open_with(project(n), || ());
                assert!(carousel.go_to(start));

                carousel.next();
                carousel.prev();
                assert_eq!(carousel.current_index(), start, "n={} start={}", n, start);
            }
        }
    }

    #[test]
    fn test_go_to_direction_and_idempotence() {
        let mut carousel = Carousel::<()>::new();
        carousel.open_with(project(5), || ());

        assert!(carousel.go_to(3));
        assert_eq!(carousel.direction(), SlideDirection::Right);

        assert!(carousel.go_to(1));
        assert_eq!(carousel.direction(), SlideDirection::Left);

        assert!(carousel.go_to(1));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.direction(), SlideDirection::Left);
    }

    #[test]
    fn test_go_to_out_of_range_ignored() {
        let mut carousel = Carousel::<()>::new();
        carousel.open_with(project(2), || ());
        carousel.next();

        assert!(!carousel.go_to(2));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_empty_project_navigation_is_noop() {
        let mut carousel = Carousel::<()>::new();
        carousel.open_with(project(0), || ());

        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.current_image(), None);
    }

    #[test]
    fn test_close_resets_and_releases() {
        let live = Rc::new(Cell::new(0));
        let mut carousel = Carousel::new();

        carousel.open_with(project(4), || CountingGuard::acquire(&live));
        carousel.next();
        assert_eq!(live.get(), 1);
        assert_eq!(carousel.current_image(), Some("https://img/1.png"));

        carousel.close();
        assert_eq!(live.get(), 0);
        assert!(!carousel.is_open());
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.len(), 0);
    }

    #[test]
    fn test_reopen_never_holds_two_guards() {
        let live = Rc::new(Cell::new(0));
        let mut carousel = Carousel::new();

        carousel.open_with(project(2), || CountingGuard::acquire(&live));
        carousel.go_to(1);
        carousel.open_with(project(3), || {
            assert_eq!(live.get(), 0, "previous guard must be released first");
            CountingGuard::acquire(&live)
        });

        assert_eq!(live.get(), 1);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.len(), 3);
    }

    #[test]
    fn test_drop_releases_guard() {
        let live = Rc::new(Cell::new(0));
        {
            let mut carousel = Carousel::new();
            carousel.open_with(project(1), || CountingGuard::acquire(&live));
            assert_eq!(live.get(), 1);
        }
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_thumbnail_offset() {
        // first thumbnails fit without scrolling
        assert_eq!(thumbnail_scroll_offset(0, 400.0, 80.0, 8.0), 0.0);
        assert_eq!(thumbnail_scroll_offset(1, 400.0, 80.0, 8.0), 0.0);
        // index 5: center at 5 * 88 + 40 = 480, minus half the strip
        assert_eq!(thumbnail_scroll_offset(5, 400.0, 80.0, 8.0), 280.0);

        let mut carousel = Carousel::<()>::new();
        carousel.open_with(project(10), || ());
        carousel.go_to(5);
        assert_eq!(carousel.thumbnail_offset(400.0), 280.0);
    }
}
