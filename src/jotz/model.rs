use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which app-private directory a jot's name resolves into.
///
/// The two areas are fully independent: the same name may exist in both, and
/// every operation names the area it works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    /// Durable storage; files survive until explicitly deleted.
    Persistent,
    /// The OS cache tier; files may be reclaimed under disk pressure.
    Cache,
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Area::Persistent => write!(f, "persistent"),
            Area::Cache => write!(f, "cache"),
        }
    }
}

/// One named text file managed by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jot {
    pub name: String,
    pub area: Area,
    pub content: String,
}

impl Jot {
    pub fn new(name: String, area: Area, content: String) -> Self {
        Self {
            name,
            area,
            content,
        }
    }
}

/// One entry of the tracked list: a name, the area it was created under, and
/// when. Eviction deletes the backing file in `area`, regardless of which
/// area the create that triggered it targeted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedEntry {
    pub name: String,
    pub area: Area,
    pub created_at: DateTime<Utc>,
}

impl TrackedEntry {
    pub fn new(name: String, area: Area) -> Self {
        Self {
            name,
            area,
            created_at: Utc::now(),
        }
    }
}
