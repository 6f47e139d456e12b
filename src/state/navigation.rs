// Navigation state - active section and mobile menu
use crate::model::Section;
use crate::subscription::{EventKind, Subscription, ViewportEvent, ViewportEvents};
use tracing::{debug, warn};

pub const DEFAULT_BREAKPOINT: f32 = 768.0;
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section: Section,
    pub menu_open: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            active_section: Section::Home,
            menu_open: false,
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the navigation state and the viewport listeners that drive it.
///
/// Listener registrations are released by `detach` or when the controller
/// is dropped.
pub struct NavigationController {
    state: NavigationState,
    breakpoint: f32,
    visibility_threshold: f32,
    resize: Option<Subscription>,
    visibility: Option<Subscription>,
}

impl NavigationController {
    pub fn new(breakpoint: f32, visibility_threshold: f32) -> Self {
        Self {
            state: NavigationState::new(),
            breakpoint,
            visibility_threshold,
            resize: None,
            visibility: None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn active_section(&self) -> Section {
        self.state.active_section
    }

    pub fn menu_open(&self) -> bool {
        self.state.menu_open
    }

    pub fn breakpoint(&self) -> f32 {
        self.breakpoint
    }

    /// Register resize and visibility listeners on `events`.
    pub fn attach(&mut self, events: &ViewportEvents) {
        self.detach();
        self.resize = events.subscribe(EventKind::Resize);
        self.visibility = events.subscribe(EventKind::Visibility);
        if self.visibility.is_none() {
            warn!("Section visibility observation unavailable, active section will stay fixed");
        }
    }

    pub fn detach(&mut self) {
        self.resize = None;
        self.visibility = None;
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.resize.is_some() || self.visibility.is_some()
    }

    /// Apply every event queued on the listeners, oldest first per listener.
    pub fn pump(&mut self) {
        let events: Vec<ViewportEvent> = self
            .resize
            .iter()
            .chain(self.visibility.iter())
            .flat_map(|sub| sub.drain())
            .collect();

        for event in events {
            match event {
                ViewportEvent::Resized { width } => self.on_window_resize(width),
                ViewportEvent::Intersection {
                    section,
                    is_intersecting,
                    ratio,
                } => self.on_viewport_intersection(section, is_intersecting, ratio),
            }
        }
    }

    pub fn on_viewport_intersection(&mut self, section: Section, is_intersecting: bool, ratio: f32) {
        if is_intersecting && ratio >= self.visibility_threshold {
            if self.state.active_section != section {
                debug!(from = %self.state.active_section, to = %section, ratio, "Active section changed");
            }
            self.state.active_section = section;
        }
    }

    /// Same as `on_viewport_intersection`, keyed by anchor. Unknown keys are ignored.
    #[allow(dead_code)]
    pub fn on_viewport_intersection_key(&mut self, key: &str, is_intersecting: bool, ratio: f32) {
        match Section::from_key(key) {
            Some(section) => self.on_viewport_intersection(section, is_intersecting, ratio),
            None => debug!(key, "Ignoring visibility event for unknown section"),
        }
    }

    pub fn on_window_resize(&mut self, width: f32) {
        if width > self.breakpoint && self.state.menu_open {
            debug!(width, "Window widened past breakpoint, closing menu");
            self.state.menu_open = false;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
        debug!(menu_open = self.state.menu_open, "Menu toggled");
    }

    pub fn close_menu(&mut self) {
        self.state.menu_open = false;
    }

    /// A navigation link was activated: dismiss the menu and return the
    /// section to scroll into view.
    pub fn navigate_to(&mut self, section: Section) -> Section {
        self.close_menu();
        debug!(%section, "Navigating");
        section
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT, DEFAULT_VISIBILITY_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = NavigationController::default();
        assert_eq!(
            nav.state(),
            NavigationState {
                active_section: Section::Home,
                menu_open: false
            }
        );
    }

    #[test]
    fn test_projects_scrolled_into_view() {
        let mut nav = NavigationController::default();
        nav.on_viewport_intersection(Section::Projects, true, 0.75);
        assert_eq!(nav.active_section(), Section::Projects);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_single_visible_section_wins_each_step() {
        let mut nav = NavigationController::default();
        for section in Section::ALL.into_iter().rev() {
            for other in Section::ALL {
                if other != section {
                    nav.on_viewport_intersection(other, false, 0.1);
                }
            }
            nav.on_viewport_intersection(section, true, 0.9);
            assert_eq!(nav.active_section(), section);
        }
    }

    #[test]
    fn test_below_threshold_ignored() {
        let mut nav = NavigationController::default();
        nav.on_viewport_intersection(Section::About, true, 0.59);
        nav.on_viewport_intersection(Section::Skills, false, 0.9);
        assert_eq!(nav.active_section(), Section::Home);
    }

    #[test]
    fn test_threshold_inclusive() {
        let mut nav = NavigationController::default();
        nav.on_viewport_intersection(Section::About, true, 0.6);
        assert_eq!(nav.active_section(), Section::About);
    }

    #[test]
    fn test_unknown_key_keeps_section() {
        let mut nav = NavigationController::default();
        nav.on_viewport_intersection_key("blog", true, 1.0);
        assert_eq!(nav.active_section(), Section::Home);
        nav.on_viewport_intersection_key("education", true, 1.0);
        assert_eq!(nav.active_section(), Section::Education);
    }

    #[test]
    fn test_wide_resize_closes_menu() {
        let mut nav = NavigationController::default();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.on_window_resize(1024.0);
        assert!(!nav.menu_open());

        // Already closed stays closed
        nav.on_window_resize(2000.0);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_narrow_resize_leaves_menu() {
        let mut nav = NavigationController::default();
        nav.toggle_menu();
        nav.on_window_resize(768.0);
        assert!(nav.menu_open());
        nav.on_window_resize(320.0);
        assert!(nav.menu_open());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut nav = NavigationController::default();
        for _ in 0..2 {
            let before = nav.menu_open();
            nav.toggle_menu();
            nav.toggle_menu();
            assert_eq!(nav.menu_open(), before);
            nav.toggle_menu();
        }
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut nav = NavigationController::default();
        nav.toggle_menu();
        assert!(nav.menu_open());

        assert_eq!(nav.navigate_to(Section::Projects), Section::Projects);
        assert!(!nav.menu_open());
        // The active entry still follows visibility, not the click
        assert_eq!(nav.active_section(), Section::Home);

        // Closed menu stays closed
        nav.navigate_to(Section::About);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_close_menu_idempotent() {
        let mut nav = NavigationController::default();
        nav.close_menu();
        assert!(!nav.menu_open());
        nav.toggle_menu();
        nav.close_menu();
        nav.close_menu();
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_resize_and_visibility_commute() {
        let mut a = NavigationController::default();
        let mut b = NavigationController::default();
        a.toggle_menu();
        b.toggle_menu();

        a.on_window_resize(1024.0);
        a.on_viewport_intersection(Section::Contact, true, 0.8);

        b.on_viewport_intersection(Section::Contact, true, 0.8);
        b.on_window_resize(1024.0);

        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_pump_applies_hub_events() {
        let events = ViewportEvents::new();
        let mut nav = NavigationController::default();
        nav.attach(&events);
        nav.toggle_menu();

        events.emit(ViewportEvent::Intersection {
            section: Section::Skills,
            is_intersecting: true,
            ratio: 0.7,
        });
        events.emit(ViewportEvent::Resized { width: 900.0 });
        nav.pump();

        assert_eq!(nav.active_section(), Section::Skills);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_drop_releases_listeners() {
        let events = ViewportEvents::new();
        {
            let mut nav = NavigationController::default();
            nav.attach(&events);
            assert_eq!(events.listener_count(), 2);
        }
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_detach_and_reattach() {
        let events = ViewportEvents::new();
        let mut nav = NavigationController::default();
        nav.attach(&events);
        nav.attach(&events);
        assert_eq!(events.listener_count(), 2);
        nav.detach();
        assert!(!nav.is_attached());
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_without_visibility_degrades() {
        let events = ViewportEvents::without_visibility();
        let mut nav = NavigationController::default();
        nav.attach(&events);
        nav.toggle_menu();

        events.emit(ViewportEvent::Intersection {
            section: Section::Contact,
            is_intersecting: true,
            ratio: 1.0,
        });
        events.emit(ViewportEvent::Resized { width: 1200.0 });
        nav.pump();

        assert_eq!(nav.active_section(), Section::Home);
        assert!(!nav.menu_open());
    }
}
