//! Demon Slayer fan-content catalog.
//!
//! Three reference collections (characters, breathing techniques, story
//! arcs) served over REST, fetched through a typed client, and presented
//! through per-page view state machines.

pub mod api;
pub mod client;
pub mod db;
pub mod models;
pub mod view;
