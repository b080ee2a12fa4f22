mod schema;
mod seed;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

use crate::models::*;

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "slayer-catalog")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("catalog.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&conn)
    }

    /// Insert the shipped sample data into any collection that is empty.
    /// Safe to call on every startup.
    pub fn seed(&self) -> Result<()> {
        if self.count("characters")? == 0 {
            for input in seed::sample_characters() {
                self.create_character(input)?;
            }
            tracing::info!("Seeded characters collection with sample data");
        }

        if self.count("breathing_techniques")? == 0 {
            for input in seed::sample_techniques() {
                self.create_technique(input)?;
            }
            tracing::info!("Seeded breathing techniques collection with sample data");
        }

        if self.count("story_arcs")? == 0 {
            for input in seed::sample_story_arcs() {
                self.create_story_arc(input)?;
            }
            tracing::info!("Seeded story arcs collection with sample data");
        }

        Ok(())
    }

    /// Cheap liveness check used by the health endpoint.
    pub fn probe(&self) -> Result<()> {
        self.count("characters").map(|_| ())
    }

    fn count(&self, table: &str) -> Result<i64> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let count =
            conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }

    // ============================================================
    // Character operations
    // ============================================================

    pub fn get_all_characters(&self) -> Result<Vec<Character>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, name, description, breathing, rank, image, abilities, personality, created_at
             FROM characters ORDER BY id",
        )?;

        let characters = stmt
            .query_map([], |row| {
                Ok(Character {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    breathing: row.get(3)?,
                    rank: Rank::from_str(&row.get::<_, String>(4)?),
                    image: row.get(5)?,
                    abilities: parse_list(row.get::<_, String>(6)?),
                    personality: row.get(7)?,
                    created_at: parse_datetime(row.get::<_, String>(8)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(characters)
    }

    pub fn get_character(&self, id: i64) -> Result<Option<Character>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, name, description, breathing, rank, image, abilities, personality, created_at
             FROM characters WHERE id = ?",
        )?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Character {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                breathing: row.get(3)?,
                rank: Rank::from_str(&row.get::<_, String>(4)?),
                image: row.get(5)?,
                abilities: parse_list(row.get::<_, String>(6)?),
                personality: row.get(7)?,
                created_at: parse_datetime(row.get::<_, String>(8)?),
            }))
        } else {
            Ok(None)
        }
    }

    pub fn create_character(&self, input: CreateCharacterInput) -> Result<Character> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let now = Utc::now();

        conn.execute(
            "INSERT INTO characters (name, description, breathing, rank, image, abilities, personality, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            (
                &input.name,
                &input.description,
                &input.breathing,
                input.rank.as_str(),
                &input.image,
                serde_json::to_string(&input.abilities)?,
                &input.personality,
                now.to_rfc3339(),
            ),
        )?;

        Ok(Character {
            id: conn.last_insert_rowid(),
            name: input.name,
            description: input.description,
            breathing: input.breathing,
            rank: input.rank,
            image: input.image,
            abilities: input.abilities,
            personality: input.personality,
            created_at: now,
        })
    }

    // ============================================================
    // Breathing technique operations
    // ============================================================

    pub fn get_all_techniques(&self) -> Result<Vec<BreathingTechnique>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, name, description, forms, users, color, element, created_at
             FROM breathing_techniques ORDER BY id",
        )?;

        let techniques = stmt
            .query_map([], |row| {
                Ok(BreathingTechnique {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    forms: parse_list(row.get::<_, String>(3)?),
                    users: parse_list(row.get::<_, String>(4)?),
                    color: PaletteColor::from_str(&row.get::<_, String>(5)?),
                    element: row.get(6)?,
                    created_at: parse_datetime(row.get::<_, String>(7)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(techniques)
    }

    pub fn get_technique(&self, id: i64) -> Result<Option<BreathingTechnique>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, name, description, forms, users, color, element, created_at
             FROM breathing_techniques WHERE id = ?",
        )?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(BreathingTechnique {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                forms: parse_list(row.get::<_, String>(3)?),
                users: parse_list(row.get::<_, String>(4)?),
                color: PaletteColor::from_str(&row.get::<_, String>(5)?),
                element: row.get(6)?,
                created_at: parse_datetime(row.get::<_, String>(7)?),
            }))
        } else {
            Ok(None)
        }
    }

    pub fn create_technique(&self, input: CreateTechniqueInput) -> Result<BreathingTechnique> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let now = Utc::now();

        conn.execute(
            "INSERT INTO breathing_techniques (name, description, forms, users, color, element, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            (
                &input.name,
                &input.description,
                serde_json::to_string(&input.forms)?,
                serde_json::to_string(&input.users)?,
                input.color.as_str(),
                &input.element,
                now.to_rfc3339(),
            ),
        )?;

        Ok(BreathingTechnique {
            id: conn.last_insert_rowid(),
            name: input.name,
            description: input.description,
            forms: input.forms,
            users: input.users,
            color: input.color,
            element: input.element,
            created_at: now,
        })
    }

    // ============================================================
    // Story arc operations
    // ============================================================

    pub fn get_all_story_arcs(&self) -> Result<Vec<StoryArc>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, title, description, episodes, key_events, image, display_order, created_at
             FROM story_arcs ORDER BY display_order, id",
        )?;

        let arcs = stmt
            .query_map([], |row| {
                Ok(StoryArc {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    episodes: row.get(3)?,
                    key_events: parse_list(row.get::<_, String>(4)?),
                    image: row.get(5)?,
                    order: row.get(6)?,
                    created_at: parse_datetime(row.get::<_, String>(7)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(arcs)
    }

    pub fn get_story_arc(&self, id: i64) -> Result<Option<StoryArc>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, title, description, episodes, key_events, image, display_order, created_at
             FROM story_arcs WHERE id = ?",
        )?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(StoryArc {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                episodes: row.get(3)?,
                key_events: parse_list(row.get::<_, String>(4)?),
                image: row.get(5)?,
                order: row.get(6)?,
                created_at: parse_datetime(row.get::<_, String>(7)?),
            }))
        } else {
            Ok(None)
        }
    }

    pub fn create_story_arc(&self, input: CreateStoryArcInput) -> Result<StoryArc> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let now = Utc::now();

        conn.execute(
            "INSERT INTO story_arcs (title, description, episodes, key_events, image, display_order, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            (
                &input.title,
                &input.description,
                &input.episodes,
                serde_json::to_string(&input.key_events)?,
                &input.image,
                input.order,
                now.to_rfc3339(),
            ),
        )?;

        Ok(StoryArc {
            id: conn.last_insert_rowid(),
            title: input.title,
            description: input.description,
            episodes: input.episodes,
            key_events: input.key_events,
            image: input.image,
            order: input.order,
            created_at: now,
        })
    }
}

fn parse_list(s: String) -> Vec<String> {
    serde_json::from_str(&s).unwrap_or_default()
}

fn parse_datetime(s: String) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
