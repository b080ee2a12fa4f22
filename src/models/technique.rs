use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CatalogRecord, Resource};

/// A breathing style and its sword forms.
///
/// `forms` is an ordered list; form order is part of the technique. `users`
/// are character names as plain strings, not references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingTechnique {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub forms: Vec<String>,
    pub users: Vec<String>,
    pub color: PaletteColor,
    /// Symbolic icon shown with the technique, e.g. "💧".
    pub element: String,
    pub created_at: DateTime<Utc>,
}

/// Accent palette key for a technique.
///
/// The palette is closed; unknown keys fold into `Blue`, the presentation
/// default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum PaletteColor {
    Blue,
    Yellow,
    Brown,
    Purple,
    Red,
}

impl From<String> for PaletteColor {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

impl PaletteColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Brown => "brown",
            Self::Purple => "purple",
            Self::Red => "red",
        }
    }

    /// Parse a palette key. Unknown keys fold into `Blue`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "yellow" => Self::Yellow,
            "brown" => Self::Brown,
            "purple" => Self::Purple,
            "red" => Self::Red,
            _ => Self::Blue,
        }
    }
}

/// Input for creating a new breathing technique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTechniqueInput {
    pub name: String,
    pub description: String,
    pub forms: Vec<String>,
    pub users: Vec<String>,
    pub color: PaletteColor,
    pub element: String,
}

impl CatalogRecord for BreathingTechnique {
    type CreateInput = CreateTechniqueInput;

    const RESOURCE: Resource = Resource::BreathingTechniques;

    fn id(&self) -> i64 {
        self.id
    }
}
