use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CatalogRecord, Resource};

/// A member of the cast.
///
/// A character names its breathing style and its abilities as plain labels.
/// Nothing joins these against [`super::BreathingTechnique`] records; the
/// duplication is intentional and mirrors the source material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Breathing style label, e.g. "Water Breathing & Sun Breathing".
    pub breathing: String,
    pub rank: Rank,
    /// Portrait image URL.
    pub image: String,
    pub abilities: Vec<String>,
    pub personality: String,
    pub created_at: DateTime<Utc>,
}

/// Standing within (or outside) the demon slayer corps.
///
/// Unknown labels fold into `Other` on the way in rather than rejecting the
/// record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Rank {
    Hashira,
    #[serde(rename = "Demon Slayer")]
    DemonSlayer,
    Demon,
    Other,
}

impl From<String> for Rank {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hashira => "Hashira",
            Self::DemonSlayer => "Demon Slayer",
            Self::Demon => "Demon",
            Self::Other => "Other",
        }
    }

    /// Parse a rank label. Unknown labels fold into `Other`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "Hashira" => Self::Hashira,
            "Demon Slayer" => Self::DemonSlayer,
            "Demon" => Self::Demon,
            _ => Self::Other,
        }
    }
}

/// Input for creating a new character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCharacterInput {
    pub name: String,
    pub description: String,
    pub breathing: String,
    pub rank: Rank,
    pub image: String,
    pub abilities: Vec<String>,
    pub personality: String,
}

impl CatalogRecord for Character {
    type CreateInput = CreateCharacterInput;

    const RESOURCE: Resource = Resource::Characters;

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_uses_display_labels_on_the_wire() {
        assert_eq!(
            serde_json::to_value(Rank::DemonSlayer).unwrap(),
            "Demon Slayer"
        );
        assert_eq!(serde_json::to_value(Rank::Hashira).unwrap(), "Hashira");
    }

    #[test]
    fn unknown_rank_folds_into_other() {
        let rank: Rank = serde_json::from_value("Lower Moon One".into()).unwrap();
        assert_eq!(rank, Rank::Other);
    }
}
