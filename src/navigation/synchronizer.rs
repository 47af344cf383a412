use super::fragment;
use super::ports::{Location, NavStrip, PrimaryCarousel};

/// A discrete input to the synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The page finished loading; run the direct fragment sync pass.
    Load,
    /// The primary carousel settled on a 0-based index, whether from a swipe
    /// or from one of our own `select`/`next`/`prev` commands.
    PrimarySelectionChanged(usize),
    /// A nav-strip entry for the 1-based position was clicked.
    NavActivated(usize),
    Previous,
    Next,
}

/// Keeps the primary carousel, the nav strip and the URL fragment pointing at
/// the same slide.
///
/// One instance exists per embedded slider. Handlers run to completion; any
/// selection change they cause in the primary carousel comes back later as a
/// separate [`NavEvent::PrimarySelectionChanged`].
pub struct Synchronizer<P, S, L> {
    len: usize,
    prefix: String,
    current: usize,
    // Set until the first selection notification after load has been consumed.
    awaiting_first_selection: bool,
    primary: P,
    nav: S,
    location: L,
}

impl<P, S, L> Synchronizer<P, S, L>
where
    P: PrimaryCarousel,
    S: NavStrip,
    L: Location,
{
    pub fn new(len: usize, prefix: impl Into<String>, primary: P, nav: S, location: L) -> Self {
        Self {
            len,
            prefix: prefix.into(),
            current: 1,
            awaiting_first_selection: true,
            primary,
            nav,
            location,
        }
    }

    pub fn dispatch(&mut self, event: NavEvent) {
        match event {
            NavEvent::Load => self.on_load(),
            NavEvent::PrimarySelectionChanged(index) => self.on_primary_selection_changed(index),
            NavEvent::NavActivated(position) => self.on_nav_activated(position),
            NavEvent::Previous => self.on_previous(),
            NavEvent::Next => self.on_next(),
        }
    }

    /// Direct sync pass at load: if the URL already names a slide, point both
    /// widgets at it before any widget notification arrives.
    pub fn on_load(&mut self) {
        if self.len == 0 {
            return;
        }
        let Some(parsed) = self.recognized_fragment_position() else {
            return;
        };
        let position = fragment::clamp_position(parsed, self.len);
        self.current = position;
        self.primary.select(position - 1);
        self.nav.select(position - 1);
    }

    pub fn on_primary_selection_changed(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        if self.awaiting_first_selection {
            self.awaiting_first_selection = false;
            let position = self.fragment_position();
            log::debug!("slider {}: initial position {position}", self.prefix);
            self.primary.select(position - 1);
            self.mirror(position);
            return;
        }
        let position = fragment::clamp_position(index + 1, self.len);
        self.mirror(position);
    }

    pub fn on_nav_activated(&mut self, position: usize) {
        if self.len == 0 {
            return;
        }
        let position = fragment::clamp_position(position, self.len);
        self.primary.select(position - 1);
    }

    pub fn on_previous(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.wrap_position() == 1 {
            self.primary.select(self.len - 1);
        } else {
            self.primary.prev();
        }
    }

    pub fn on_next(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.wrap_position() == self.len {
            self.primary.select(0);
        } else {
            self.primary.next();
        }
    }

    /// Last position mirrored into the widgets, 1-based.
    pub fn current_position(&self) -> usize {
        self.current
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn primary_mut(&mut self) -> &mut P {
        &mut self.primary
    }

    pub fn nav_strip(&self) -> &S {
        &self.nav
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Point the nav strip at `position` and publish it in the fragment.
    ///
    /// A fragment addressed to another slider on the same page is left alone
    /// until this slider actually moves, so a deep link into a sibling
    /// survives page load.
    fn mirror(&mut self, position: usize) {
        let moved = position != self.current;
        self.current = position;
        self.nav.mark_current(position - 1);
        self.nav.select(position - 1);
        if moved || !self.fragment_is_foreign() {
            self.location
                .set_fragment(&fragment::format(&self.prefix, position));
        }
    }

    fn fragment_is_foreign(&self) -> bool {
        self.location
            .fragment()
            .is_some_and(|f| !fragment::belongs_to(&f, &self.prefix))
    }

    /// Position Previous/Next wrap from: the fragment's when it is ours
    /// (1 if malformed), otherwise the last mirrored position.
    fn wrap_position(&self) -> usize {
        if self.fragment_is_foreign() {
            self.current
        } else {
            self.fragment_position()
        }
    }

    fn recognized_fragment_position(&self) -> Option<usize> {
        self.location
            .fragment()
            .and_then(|f| fragment::parse_position(&f, &self.prefix))
    }

    fn fragment_position(&self) -> usize {
        fragment::resolve_position(self.location.fragment().as_deref(), &self.prefix, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Primary {
        index: usize,
        commands: Vec<String>,
    }

    impl PrimaryCarousel for Primary {
        fn select(&mut self, index: usize) {
            self.index = index;
            self.commands.push(format!("select {index}"));
        }
        fn next(&mut self) {
            self.index += 1;
            self.commands.push("next".to_string());
        }
        fn prev(&mut self) {
            self.index -= 1;
            self.commands.push("prev".to_string());
        }
        fn selected(&self) -> usize {
            self.index
        }
    }

    #[derive(Default)]
    struct Strip {
        index: usize,
        current: Option<usize>,
    }

    impl NavStrip for Strip {
        fn select(&mut self, index: usize) {
            self.index = index;
        }
        fn mark_current(&mut self, index: usize) {
            self.current = Some(index);
        }
    }

    #[derive(Default)]
    struct Url(Option<String>);

    impl Location for Url {
        fn fragment(&self) -> Option<String> {
            self.0.clone()
        }
        fn set_fragment(&mut self, fragment: &str) {
            self.0 = Some(fragment.to_string());
        }
    }

    fn sync(len: usize, fragment: Option<&str>) -> Synchronizer<Primary, Strip, Url> {
        Synchronizer::new(
            len,
            "truth",
            Primary::default(),
            Strip::default(),
            Url(fragment.map(String::from)),
        )
    }

    #[test]
    fn first_selection_resolves_fragment_once() {
        let mut s = sync(5, Some("#truth3"));
        s.on_primary_selection_changed(0);
        assert_eq!(s.primary().commands, vec!["select 2"]);
        assert_eq!(s.current_position(), 3);
        assert_eq!(s.nav_strip().index, 2);
        assert_eq!(s.nav_strip().current, Some(2));
        assert_eq!(s.location().0.as_deref(), Some("#truth3"));

        // Later notifications are ordinary moves, not another jump.
        s.on_primary_selection_changed(4);
        assert_eq!(s.primary().commands, vec!["select 2"]);
        assert_eq!(s.location().0.as_deref(), Some("#truth5"));
        assert_eq!(s.nav_strip().index, 4);
    }

    #[test]
    fn load_pass_ignores_missing_or_foreign_fragment() {
        let mut s = sync(5, None);
        s.on_load();
        assert!(s.primary().commands.is_empty());

        let mut s = sync(5, Some("#elsewhere"));
        s.on_load();
        assert!(s.primary().commands.is_empty());
    }

    #[test]
    fn load_pass_points_both_widgets_at_fragment() {
        let mut s = sync(5, Some("#truth4"));
        s.on_load();
        assert_eq!(s.primary().selected(), 3);
        assert_eq!(s.nav_strip().index, 3);
    }

    #[test]
    fn load_pass_clamps_out_of_range() {
        let mut s = sync(3, Some("#truth9"));
        s.on_load();
        assert_eq!(s.primary().selected(), 2);

        let mut s = sync(3, Some("#truth0"));
        s.on_load();
        assert_eq!(s.primary().selected(), 0);
    }

    #[test]
    fn nav_click_commands_primary_with_zero_based_index() {
        let mut s = sync(5, None);
        s.on_nav_activated(4);
        assert_eq!(s.primary().commands, vec!["select 3"]);
    }

    #[test]
    fn previous_wraps_from_first() {
        let mut s = sync(5, Some("#truth1"));
        s.on_previous();
        assert_eq!(s.primary().commands, vec!["select 4"]);

        let mut s = sync(5, Some("#truth3"));
        s.primary_mut().index = 2;
        s.on_previous();
        assert_eq!(s.primary().commands, vec!["prev"]);
    }

    #[test]
    fn next_wraps_from_last() {
        let mut s = sync(5, Some("#truth5"));
        s.on_next();
        assert_eq!(s.primary().commands, vec!["select 0"]);

        let mut s = sync(5, Some("#truth2"));
        s.on_next();
        assert_eq!(s.primary().commands, vec!["next"]);
    }

    #[test]
    fn arrows_treat_malformed_fragment_as_first() {
        let mut s = sync(5, Some("#truthabc"));
        s.on_previous();
        assert_eq!(s.primary().commands, vec!["select 4"]);
    }

    #[derive(Clone, Default)]
    struct SharedUrl(Rc<RefCell<Option<String>>>);

    impl Location for SharedUrl {
        fn fragment(&self) -> Option<String> {
            self.0.borrow().clone()
        }
        fn set_fragment(&mut self, fragment: &str) {
            *self.0.borrow_mut() = Some(fragment.to_string());
        }
    }

    fn sibling(prefix: &str, url: &SharedUrl) -> Synchronizer<Primary, Strip, SharedUrl> {
        Synchronizer::new(5, prefix, Primary::default(), Strip::default(), url.clone())
    }

    #[test]
    fn sibling_slider_keeps_deep_link_of_another() {
        for hero_first in [true, false] {
            let url = SharedUrl(Rc::new(RefCell::new(Some("#hero-3".to_string()))));
            let mut hero = sibling("hero-", &url);
            let mut other = sibling("other-", &url);

            if hero_first {
                hero.on_primary_selection_changed(0);
                other.on_primary_selection_changed(0);
            } else {
                other.on_primary_selection_changed(0);
                hero.on_primary_selection_changed(0);
            }

            assert_eq!(url.fragment().as_deref(), Some("#hero-3"));
            assert_eq!(hero.current_position(), 3);
            assert_eq!(hero.nav_strip().index, 2);
            assert_eq!(other.current_position(), 1);
            assert_eq!(other.nav_strip().current, Some(0));
        }
    }

    #[test]
    fn sibling_claims_fragment_once_it_moves() {
        let url = SharedUrl(Rc::new(RefCell::new(Some("#hero-3".to_string()))));
        let mut other = sibling("other-", &url);
        other.on_primary_selection_changed(0);
        other.on_primary_selection_changed(1);
        assert_eq!(url.fragment().as_deref(), Some("#other-2"));
    }

    #[test]
    fn arrows_wrap_from_own_position_under_foreign_fragment() {
        let url = SharedUrl(Rc::new(RefCell::new(Some("#hero-3".to_string()))));
        let mut other = sibling("other-", &url);
        other.on_primary_selection_changed(0);
        other.primary_mut().commands.clear();

        other.on_next();
        assert_eq!(other.primary().commands, vec!["next"]);
        other.on_previous();
        assert_eq!(other.primary().commands, vec!["next", "select 4"]);
    }

    #[test]
    fn empty_slider_ignores_everything() {
        let mut s = sync(0, Some("#truth2"));
        for event in [
            NavEvent::Load,
            NavEvent::PrimarySelectionChanged(0),
            NavEvent::NavActivated(1),
            NavEvent::Previous,
            NavEvent::Next,
        ] {
            s.dispatch(event);
        }
        assert!(s.primary().commands.is_empty());
        assert_eq!(s.location().0.as_deref(), Some("#truth2"));
    }
}
