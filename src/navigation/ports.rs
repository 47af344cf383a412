//! Widget ports driven by the [`Synchronizer`](super::Synchronizer).
//!
//! All indices on these traits are 0-based; positions in fragments are 1-based.
//! Implementations report their own selection changes back by dispatching
//! [`NavEvent::PrimarySelectionChanged`](super::NavEvent) once the current
//! handler has returned; they must never call back into the synchronizer
//! re-entrantly.

/// The main large-image carousel.
pub trait PrimaryCarousel {
    /// Jump to an absolute 0-based index.
    fn select(&mut self, index: usize);
    /// Move one slide forward.
    fn next(&mut self);
    /// Move one slide back.
    fn prev(&mut self);
    /// Currently selected 0-based index.
    fn selected(&self) -> usize;
}

/// The thumbnail/label strip under the carousel.
pub trait NavStrip {
    /// Scroll the strip so the 0-based index is selected.
    fn select(&mut self, index: usize);
    /// Flag the entry at the 0-based index as current and clear all others.
    fn mark_current(&mut self, index: usize);
}

/// The page URL fragment.
pub trait Location {
    /// Current fragment including the leading `#`, if any.
    fn fragment(&self) -> Option<String>;
    fn set_fragment(&mut self, fragment: &str);
}
