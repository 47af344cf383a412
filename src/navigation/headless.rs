//! In-memory widgets and an event pump for running the synchronizer without a
//! browser. The server uses it to work out which slide to mark current on a
//! no-script first paint; tests use it to drive whole interaction sequences.

use std::collections::VecDeque;

use super::ports::{Location, NavStrip, PrimaryCarousel};
use super::synchronizer::{NavEvent, Synchronizer};

/// Carousel that queues a selection notification whenever its index changes.
#[derive(Debug, Default)]
pub struct HeadlessCarousel {
    len: usize,
    index: usize,
    notifications: VecDeque<usize>,
}

impl HeadlessCarousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0, notifications: VecDeque::new() }
    }

    /// Announce the initial selection, as the real widget does when mounted.
    pub fn mount(&mut self) {
        self.notifications.push_back(self.index);
    }

    pub fn take_notification(&mut self) -> Option<usize> {
        self.notifications.pop_front()
    }

    fn move_to(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        let index = index.min(self.len - 1);
        if index != self.index {
            self.index = index;
            self.notifications.push_back(index);
        }
    }
}

impl PrimaryCarousel for HeadlessCarousel {
    fn select(&mut self, index: usize) {
        self.move_to(index);
    }

    fn next(&mut self) {
        self.move_to(self.index + 1);
    }

    fn prev(&mut self) {
        self.move_to(self.index.saturating_sub(1));
    }

    fn selected(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Default)]
pub struct HeadlessNavStrip {
    index: usize,
    current: Option<usize>,
}

impl HeadlessNavStrip {
    pub fn selected(&self) -> usize {
        self.index
    }

    /// 0-based index of the entry flagged current, once any has been.
    pub fn current(&self) -> Option<usize> {
        self.current
    }
}

impl NavStrip for HeadlessNavStrip {
    fn select(&mut self, index: usize) {
        self.index = index;
    }

    fn mark_current(&mut self, index: usize) {
        self.current = Some(index);
    }
}

#[derive(Debug, Default)]
pub struct HeadlessLocation {
    fragment: Option<String>,
}

impl HeadlessLocation {
    pub fn new(fragment: Option<&str>) -> Self {
        Self { fragment: fragment.filter(|f| !f.is_empty()).map(String::from) }
    }
}

impl Location for HeadlessLocation {
    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.fragment = Some(fragment.to_string());
    }
}

/// A synchronizer wired to headless widgets, with every widget notification
/// dispatched before control returns to the caller.
pub struct HeadlessSlider {
    sync: Synchronizer<HeadlessCarousel, HeadlessNavStrip, HeadlessLocation>,
    queue: VecDeque<NavEvent>,
}

impl HeadlessSlider {
    /// Mount the widgets and run the page-load sequence for a URL carrying
    /// `fragment`.
    pub fn load(len: usize, prefix: &str, fragment: Option<&str>) -> Self {
        let mut carousel = HeadlessCarousel::new(len);
        carousel.mount();
        let sync = Synchronizer::new(
            len,
            prefix,
            carousel,
            HeadlessNavStrip::default(),
            HeadlessLocation::new(fragment),
        );
        let mut slider = Self { sync, queue: VecDeque::new() };
        slider.collect_notifications();
        slider.send(NavEvent::Load);
        slider
    }

    pub fn click(&mut self, position: usize) {
        self.send(NavEvent::NavActivated(position));
    }

    pub fn previous(&mut self) {
        self.send(NavEvent::Previous);
    }

    pub fn next(&mut self) {
        self.send(NavEvent::Next);
    }

    /// Swipe the primary carousel directly, bypassing the synchronizer.
    pub fn swipe_to(&mut self, index: usize) {
        self.sync.primary_mut().select(index);
        self.collect_notifications();
        self.drain();
    }

    pub fn position(&self) -> usize {
        self.sync.current_position()
    }

    pub fn primary_index(&self) -> usize {
        self.sync.primary().selected()
    }

    pub fn nav_index(&self) -> usize {
        self.sync.nav_strip().selected()
    }

    pub fn current_entry(&self) -> Option<usize> {
        self.sync.nav_strip().current()
    }

    pub fn fragment(&self) -> Option<String> {
        self.sync.location().fragment()
    }

    fn send(&mut self, event: NavEvent) {
        self.queue.push_back(event);
        self.drain();
    }

    fn drain(&mut self) {
        while let Some(event) = self.queue.pop_front() {
            self.sync.dispatch(event);
            self.collect_notifications();
        }
    }

    fn collect_notifications(&mut self) {
        while let Some(index) = self.sync.primary_mut().take_notification() {
            self.queue.push_back(NavEvent::PrimarySelectionChanged(index));
        }
    }
}
