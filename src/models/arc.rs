use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CatalogRecord, Resource};

/// A chapter of the story timeline.
///
/// Arcs carry an explicit `order` index; listings sort by it rather than by
/// insertion order, so arcs can be registered out of sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryArc {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Episode range label, e.g. "Episodes 1-5".
    pub episodes: String,
    pub key_events: Vec<String>,
    /// Banner image URL.
    pub image: String,
    /// Position on the timeline, 1-based.
    pub order: i64,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new story arc.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStoryArcInput {
    pub title: String,
    pub description: String,
    pub episodes: String,
    pub key_events: Vec<String>,
    pub image: String,
    pub order: i64,
}

impl CatalogRecord for StoryArc {
    type CreateInput = CreateStoryArcInput;

    const RESOURCE: Resource = Resource::StoryArcs;

    fn id(&self) -> i64 {
        self.id
    }
}
