use std::rc::Rc;

use yew::prelude::*;

use crate::content::site::NavItem;

/// Header switches to its compact style once the page has scrolled
/// strictly further than this many pixels.
pub const SCROLL_THRESHOLD: f64 = 20.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Sections stay highlighted while any page below them is open; leaf
/// links only light up on their own page.
pub fn is_active(item: &NavItem, path: &str) -> bool {
    if item.has_children() {
        path.starts_with(item.href)
    } else {
        path == item.href
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub scrolled: bool,
    pub mobile_menu_open: bool,
    pub open_dropdown: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    RouteChanged,
    OpenDropdown(&'static str),
    CloseDropdown,
    ToggleDropdown(&'static str),
    OpenMobileMenu,
    CloseMobileMenu,
    ToggleMobileMenu,
}

impl NavigationState {
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Scrolled(offset) => self.scrolled = is_scrolled(offset),
            NavAction::RouteChanged => {
                self.mobile_menu_open = false;
                self.open_dropdown = None;
            }
            NavAction::OpenDropdown(label) => self.open_dropdown = Some(label),
            NavAction::CloseDropdown => self.open_dropdown = None,
            NavAction::ToggleDropdown(label) => {
                self.open_dropdown = if self.open_dropdown == Some(label) {
                    None
                } else {
                    Some(label)
                };
            }
            NavAction::OpenMobileMenu => self.mobile_menu_open = true,
            NavAction::CloseMobileMenu => self.mobile_menu_open = false,
            NavAction::ToggleMobileMenu => self.mobile_menu_open = !self.mobile_menu_open,
        }
    }

    /// Page scrolling stays locked exactly while the mobile menu is open.
    pub fn scroll_locked(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn is_dropdown_open(&self, label: &str) -> bool {
        self.open_dropdown == Some(label)
    }
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::dom::tests::MemoryStyle;
    use crate::components::dom::{ScrollLock, StyleSink};
    use crate::content::site::NAVIGATION;

    fn services_item() -> &'static NavItem {
        NAVIGATION.iter().find(|i| i.label == "Services").unwrap()
    }

    #[test]
    fn scrolled_is_strictly_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SCROLL_THRESHOLD));
        assert!(is_scrolled(SCROLL_THRESHOLD + 0.5));
        assert!(is_scrolled(4000.0));
    }

    #[test]
    fn scroll_only_touches_scrolled_flag() {
        let mut state = NavigationState {
            scrolled: false,
            mobile_menu_open: true,
            open_dropdown: Some("Services"),
        };
        state.apply(NavAction::Scrolled(100.0));
        assert!(state.scrolled);
        assert!(state.mobile_menu_open);
        assert_eq!(state.open_dropdown, Some("Services"));
        state.apply(NavAction::Scrolled(3.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn route_change_resets_disclosures_from_any_state() {
        for menu in [false, true] {
            for dropdown in [None, Some("Services")] {
                let mut state = NavigationState {
                    scrolled: true,
                    mobile_menu_open: menu,
                    open_dropdown: dropdown,
                };
                state.apply(NavAction::RouteChanged);
                assert!(!state.mobile_menu_open);
                assert_eq!(state.open_dropdown, None);
                assert!(state.scrolled);
                state.apply(NavAction::RouteChanged);
                assert!(!state.mobile_menu_open);
                assert_eq!(state.open_dropdown, None);
            }
        }
    }

    #[test]
    fn only_one_dropdown_open_at_a_time() {
        let mut state = NavigationState::default();
        state.apply(NavAction::OpenDropdown("Services"));
        state.apply(NavAction::OpenDropdown("Company"));
        assert_eq!(state.open_dropdown, Some("Company"));
        assert!(!state.is_dropdown_open("Services"));
    }

    #[test]
    fn toggle_dropdown_closes_same_and_switches_other() {
        let mut state = NavigationState::default();
        state.apply(NavAction::ToggleDropdown("Services"));
        assert!(state.is_dropdown_open("Services"));
        state.apply(NavAction::ToggleDropdown("Company"));
        assert!(state.is_dropdown_open("Company"));
        state.apply(NavAction::ToggleDropdown("Company"));
        assert_eq!(state.open_dropdown, None);
    }

    #[test]
    fn mobile_menu_toggles() {
        let mut state = NavigationState::default();
        state.apply(NavAction::ToggleMobileMenu);
        assert!(state.mobile_menu_open);
        state.apply(NavAction::ToggleMobileMenu);
        assert!(!state.mobile_menu_open);
        state.apply(NavAction::OpenMobileMenu);
        state.apply(NavAction::CloseMobileMenu);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn scroll_lock_follows_the_mobile_menu() {
        let style = MemoryStyle::default();
        let mut state = NavigationState::default();
        state.apply(NavAction::OpenMobileMenu);
        let lock = ScrollLock::hold_while(state.scroll_locked(), style.clone());
        assert_eq!(style.overflow().as_deref(), Some("hidden"));

        state.apply(NavAction::CloseMobileMenu);
        drop(lock);
        let lock = ScrollLock::hold_while(state.scroll_locked(), style.clone());
        assert!(lock.is_none());
        assert_eq!(style.overflow(), None);
    }

    #[test]
    fn navigating_with_the_menu_open_releases_the_lock() {
        let style = MemoryStyle::default();
        style.set_property("overflow", "auto");
        let mut state = NavigationState::default();
        state.apply(NavAction::ToggleMobileMenu);
        let lock = ScrollLock::hold_while(state.scroll_locked(), style.clone());
        assert_eq!(style.overflow().as_deref(), Some("hidden"));

        state.apply(NavAction::RouteChanged);
        assert!(!state.scroll_locked());
        drop(lock);
        assert!(ScrollLock::hold_while(state.scroll_locked(), style.clone()).is_none());
        assert_eq!(style.overflow().as_deref(), Some("auto"));
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let state = Rc::new(NavigationState::default());
        let next = state.clone().reduce(NavAction::RouteChanged);
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(NavAction::Scrolled(50.0));
        assert!(next.scrolled);
    }

    #[test]
    fn parent_items_match_by_prefix() {
        let services = services_item();
        assert!(is_active(services, "/services"));
        assert!(is_active(services, "/services/x"));
        assert!(is_active(services, "/services/x/y"));
        assert!(!is_active(services, "/service"));
        assert!(!is_active(services, "/"));
    }

    #[test]
    fn leaf_items_match_exactly() {
        let about = NAVIGATION.iter().find(|i| i.label == "About").unwrap();
        assert!(is_active(about, "/about"));
        assert!(!is_active(about, "/about/team"));
        let home = NAVIGATION.iter().find(|i| i.label == "Home").unwrap();
        assert!(is_active(home, "/"));
        assert!(!is_active(home, "/blog"));
    }
}
