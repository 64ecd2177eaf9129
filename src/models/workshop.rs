//! Bicycle workshops.

use serde::{Deserialize, Serialize};

use super::HasId;

/// A repair workshop. Coordinates are consumed by the host app's map widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workshop {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

impl HasId for Workshop {
    fn id(&self) -> i64 {
        self.id
    }
}
