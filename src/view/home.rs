//! Landing page content and scroll effects.

use super::nav::Route;

pub const HERO_TITLE: &str = "鬼滅の刃";
pub const HERO_SUBTITLE: &str = "Demon Slayer";
pub const HERO_TAGLINE: &str =
    "Enter the world of demon slayers, where courage meets steel and determination conquers darkness";

pub const CLOSING_QUOTE: &str =
    "No matter how many people you may lose, you have no choice but to go on living.";
pub const QUOTE_ATTRIBUTION: &str = "Tanjiro Kamado";

/// A tile in the "Explore the World" section, linking into a catalog page.
#[derive(Debug, Clone)]
pub struct FeatureTile {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

pub fn feature_tiles() -> [FeatureTile; 3] {
    [
        FeatureTile {
            title: "Characters",
            description: "Meet the brave demon slayers and their unique abilities",
            icon: "⚔️",
            route: Route::Characters,
        },
        FeatureTile {
            title: "Breathing Techniques",
            description: "Discover the powerful sword forms and breathing styles",
            icon: "🌪️",
            route: Route::BreathingTechniques,
        },
        FeatureTile {
            title: "Story Arcs",
            description: "Follow Tanjiro's journey through epic adventures",
            icon: "📖",
            route: Route::StoryArcs,
        },
    ]
}

/// Background offset for the hero section: scrolls at half speed.
pub fn parallax_offset(scroll: f64) -> f64 {
    scroll * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_moves_at_half_scroll_speed() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(300.0), 150.0);
    }

    #[test]
    fn tiles_link_to_the_three_catalog_pages() {
        let routes: Vec<_> = feature_tiles().iter().map(|t| t.route).collect();
        assert_eq!(
            routes,
            [Route::Characters, Route::BreathingTechniques, Route::StoryArcs]
        );
    }
}
