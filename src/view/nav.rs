//! Navigation shell: the routing table and nav-bar state.

use crate::models::Resource;

/// Scroll offset (px) past which the nav bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// The four navigable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Characters,
    BreathingTechniques,
    StoryArcs,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::Characters,
        Route::BreathingTechniques,
        Route::StoryArcs,
    ];

    /// Exact-match routing table. No prefix matches, no parameters, no
    /// guards; an unknown path maps to nothing.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Characters => "/characters",
            Self::BreathingTechniques => "/breathing-techniques",
            Self::StoryArcs => "/story-arcs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Characters => "Characters",
            Self::BreathingTechniques => "Breathing Techniques",
            Self::StoryArcs => "Story Arcs",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::Characters => "⚔️",
            Self::BreathingTechniques => "🌪️",
            Self::StoryArcs => "📖",
        }
    }

    /// The collection a catalog page mounts; `None` for the landing page.
    pub fn resource(self) -> Option<Resource> {
        match self {
            Self::Home => None,
            Self::Characters => Some(Resource::Characters),
            Self::BreathingTechniques => Some(Resource::BreathingTechniques),
            Self::StoryArcs => Some(Resource::StoryArcs),
        }
    }
}

/// Nav-bar state: the current route, the scroll-dependent style flag, and
/// the mobile menu toggle. All local, none of it persisted.
#[derive(Debug, Clone)]
pub struct NavBar {
    current: Route,
    scrolled: bool,
    menu_open: bool,
}

impl NavBar {
    pub fn new() -> Self {
        Self {
            current: Route::Home,
            scrolled: false,
            menu_open: false,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Switch pages. Navigating always closes the mobile menu.
    pub fn navigate(&mut self, route: Route) {
        self.current = route;
        self.menu_open = false;
    }

    /// Highlight test for a nav item: exact route equality only.
    pub fn is_active(&self, route: Route) -> bool {
        self.current == route
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_table_is_exact_match() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/characters"), Some(Route::Characters));
        assert_eq!(
            Route::from_path("/breathing-techniques"),
            Some(Route::BreathingTechniques)
        );
        assert_eq!(Route::from_path("/story-arcs"), Some(Route::StoryArcs));

        assert_eq!(Route::from_path("/characters/"), None);
        assert_eq!(Route::from_path("/characterss"), None);
        assert_eq!(Route::from_path("/characters/1"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn catalog_routes_bind_their_resource() {
        assert_eq!(Route::Home.resource(), None);
        assert_eq!(Route::Characters.resource(), Some(Resource::Characters));
        assert_eq!(
            Route::StoryArcs.resource(),
            Some(Resource::StoryArcs)
        );
    }

    #[test]
    fn active_item_follows_current_route_exactly() {
        let mut nav = NavBar::new();
        assert!(nav.is_active(Route::Home));

        nav.navigate(Route::Characters);
        assert!(nav.is_active(Route::Characters));
        assert!(!nav.is_active(Route::Home));
        assert!(!nav.is_active(Route::BreathingTechniques));
    }

    #[test]
    fn scroll_style_flips_past_threshold() {
        let mut nav = NavBar::new();
        nav.on_scroll(SCROLL_THRESHOLD);
        assert!(!nav.scrolled());

        nav.on_scroll(SCROLL_THRESHOLD + 1.0);
        assert!(nav.scrolled());

        nav.on_scroll(0.0);
        assert!(!nav.scrolled());
    }

    #[test]
    fn menu_toggles_and_closes_on_navigation() {
        let mut nav = NavBar::new();
        nav.toggle_menu();
        assert!(nav.menu_open());

        nav.toggle_menu();
        assert!(!nav.menu_open());

        nav.toggle_menu();
        nav.navigate(Route::StoryArcs);
        assert!(!nav.menu_open());
    }
}
