//! Bicycles and their wear-tracked components.

use serde::{Deserialize, Serialize};

use super::HasId;

/// A bicycle in the user's garage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bicycle {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub total_km: f64,
}

impl HasId for Bicycle {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A maintenance component (chain, brake pads, tires) mounted on a bicycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BicycleComponent {
    pub id: i64,
    pub bicycle_id: i64,
    pub name: String,
    pub current_kilometers: f64,
    pub max_kilometers: f64,
}

impl BicycleComponent {
    /// Wear as current/max, clamped to [0, 1].
    ///
    /// The clamp is display-only; the server does not enforce the bound and
    /// `current_kilometers` may legitimately exceed `max_kilometers`.
    pub fn wear_ratio(&self) -> f64 {
        if self.max_kilometers <= 0.0 {
            return 1.0;
        }
        (self.current_kilometers / self.max_kilometers).clamp(0.0, 1.0)
    }

    /// True once the component has reached its service interval.
    pub fn is_worn_out(&self) -> bool {
        self.wear_ratio() >= 1.0
    }
}

impl HasId for BicycleComponent {
    fn id(&self) -> i64 {
        self.id
    }
}
