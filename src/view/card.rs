//! Summary-card truncation policy.
//!
//! Cards abbreviate long text and lists and flag what was elided with a
//! "+K more" indicator; the detail modal always shows the full record.

use std::borrow::Cow;

use crate::models::{BreathingTechnique, Character, PaletteColor, Rank, StoryArc};

/// Character blurbs are cut at this many characters on cards.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 120;
/// Abilities shown on a character card before eliding.
pub const ABILITY_PREVIEW_COUNT: usize = 3;
/// Known users shown on a technique card.
pub const USER_PREVIEW_COUNT: usize = 2;
/// Signature forms shown on a technique card.
pub const FORM_PREVIEW_COUNT: usize = 2;
/// Key events shown on an arc card.
pub const EVENT_PREVIEW_COUNT: usize = 3;

/// The leading items of a list plus a count of what was elided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl ListPreview<'_> {
    /// "+K more" indicator, or `None` when nothing was elided.
    pub fn indicator(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }

    /// "+K more forms" style indicator with a trailing noun.
    pub fn indicator_with(&self, noun: &str) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more {}", self.hidden, noun))
    }
}

/// Take the first `limit` items for card display.
pub fn preview_list(items: &[String], limit: usize) -> ListPreview<'_> {
    let shown = &items[..items.len().min(limit)];
    ListPreview {
        shown,
        hidden: items.len() - shown.len(),
    }
}

/// Cut text for card display, appending an ellipsis when shortened.
pub fn preview_text(text: &str, limit: usize) -> Cow<'_, str> {
    if text.chars().count() <= limit {
        Cow::Borrowed(text)
    } else {
        let cut: String = text.chars().take(limit).collect();
        Cow::Owned(format!("{}...", cut))
    }
}

/// Card-facing slice of a character record.
#[derive(Debug)]
pub struct CharacterCard<'a> {
    pub name: &'a str,
    pub rank: Rank,
    pub image: &'a str,
    pub description: Cow<'a, str>,
    pub breathing: &'a str,
    pub personality: &'a str,
    pub abilities: ListPreview<'a>,
}

pub fn character_card(character: &Character) -> CharacterCard<'_> {
    CharacterCard {
        name: &character.name,
        rank: character.rank,
        image: &character.image,
        description: preview_text(&character.description, DESCRIPTION_PREVIEW_CHARS),
        breathing: &character.breathing,
        personality: &character.personality,
        abilities: preview_list(&character.abilities, ABILITY_PREVIEW_COUNT),
    }
}

/// Card-facing slice of a breathing technique record.
#[derive(Debug)]
pub struct TechniqueCard<'a> {
    pub name: &'a str,
    pub element: &'a str,
    pub color: PaletteColor,
    pub description: &'a str,
    /// Badge text, e.g. "5 Forms".
    pub form_count: String,
    pub users: ListPreview<'a>,
    pub forms: ListPreview<'a>,
}

pub fn technique_card(technique: &BreathingTechnique) -> TechniqueCard<'_> {
    TechniqueCard {
        name: &technique.name,
        element: &technique.element,
        color: technique.color,
        description: &technique.description,
        form_count: format!("{} Forms", technique.forms.len()),
        users: preview_list(&technique.users, USER_PREVIEW_COUNT),
        forms: preview_list(&technique.forms, FORM_PREVIEW_COUNT),
    }
}

/// Card-facing slice of a story arc record.
#[derive(Debug)]
pub struct ArcCard<'a> {
    pub title: &'a str,
    pub episodes: &'a str,
    pub image: &'a str,
    /// Zero-padded timeline position, e.g. "03".
    pub order_badge: String,
    pub description: &'a str,
    pub key_events: ListPreview<'a>,
}

pub fn arc_card(arc: &StoryArc) -> ArcCard<'_> {
    ArcCard {
        title: &arc.title,
        episodes: &arc.episodes,
        image: &arc.image,
        order_badge: format!("{:02}", arc.order),
        description: &arc.description,
        key_events: preview_list(&arc.key_events, EVENT_PREVIEW_COUNT),
    }
}
