//! Project Gallery
//!
//! View-model for the projects section: raw-to-display transform,
//! category filtering with "show more", and the modal image carousel.

mod transform;
mod state;
mod carousel;

pub use transform::{transform, CategoryBucket, DisplayProject};
pub use state::{CategoryFilter, GalleryState, LoadStatus, LoadTicket, ProjectSource, COLLAPSED_LIMIT};
pub use carousel::{thumbnail_scroll_offset, Carousel, SlideDirection, THUMB_GAP, THUMB_WIDTH};
