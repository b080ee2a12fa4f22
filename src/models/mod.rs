//! Domain models for the catalog.
//!
//! # Core Concepts
//!
//! The catalog holds three independent collections with a uniform shape:
//!
//! - [`Character`]: the cast, slayers and demons alike.
//! - [`BreathingTechnique`]: sword styles with their ordered forms.
//! - [`StoryArc`]: the narrative timeline, carrying an explicit display order.
//!
//! Records never reference each other by id. Relationships ("technique used
//! by character") exist only as duplicated name strings, matching the source
//! material. Identifiers are assigned by the store and stable across
//! requests; insertion order is display order.

mod arc;
mod character;
mod technique;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use arc::*;
pub use character::*;
pub use technique::*;

/// One of the three catalog collections served under `/api`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    Characters,
    BreathingTechniques,
    StoryArcs,
}

impl Resource {
    /// URL path segment for this collection.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::BreathingTechniques => "breathing-techniques",
            Self::StoryArcs => "story-arcs",
        }
    }

    /// Human-readable plural, used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::BreathingTechniques => "breathing techniques",
            Self::StoryArcs => "story arcs",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Binds a record type to the collection it lives in.
///
/// Implemented by the three catalog entities so the client and the view
/// layer can be written once and parametrized by record type.
pub trait CatalogRecord: Serialize + DeserializeOwned {
    /// Payload accepted by the collection's create endpoint.
    type CreateInput: Serialize;

    const RESOURCE: Resource;

    fn id(&self) -> i64;
}
