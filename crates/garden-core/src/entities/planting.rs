use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One act of planting.
///
/// All four references are weak: deleting the referenced record clears the
/// field instead of deleting the planting.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Planting {
    pub id: String,
    pub plant_id: Option<String>,
    /// Seed lot, if planted from seed.
    pub seed_id: Option<String>,
    /// Pot, if planted into a container.
    pub pot_id: Option<String>,
    pub location_id: Option<String>,
    pub brand: Option<String>,
    pub source: Option<String>,
    /// Cost if purchased retail.
    pub price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub seeding_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Planting {
    /// True when the planting references neither a plant, seed, pot, nor location.
    ///
    /// Such plantings are allowed but almost certainly unintended.
    #[must_use]
    pub const fn is_unanchored(&self) -> bool {
        self.plant_id.is_none()
            && self.seed_id.is_none()
            && self.pot_id.is_none()
            && self.location_id.is_none()
    }
}
