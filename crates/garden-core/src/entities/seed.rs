use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A seed lot. Always owned by exactly one plant; deleted with it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Seed {
    pub id: String,
    pub plant_id: String,
    pub brand: Option<String>,
    /// Where the seed came from, e.g. a nursery or `Home`.
    pub source: Option<String>,
    pub quantity: Option<i16>,
    pub days_to_germination: Option<i16>,
    pub days_to_harvest: Option<i16>,
    pub purchase_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub disposed_of: bool,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Seed {
    /// Whether the lot's expiration date lies strictly before `on`.
    ///
    /// Lots without an expiration date never expire.
    #[must_use]
    pub fn is_expired(&self, on: NaiveDate) -> bool {
        self.expiration_date.is_some_and(|exp| exp < on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(expiration_date: Option<NaiveDate>) -> Seed {
        let now = Utc::now();
        Seed {
            id: "sed-00000001".into(),
            plant_id: "plt-00000001".into(),
            brand: None,
            source: None,
            quantity: None,
            days_to_germination: None,
            days_to_harvest: None,
            purchase_date: None,
            expiration_date,
            disposed_of: false,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn expiry_is_strictly_before() {
        let exp = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let lot = seed(Some(exp));
        assert!(!lot.is_expired(exp));
        assert!(lot.is_expired(exp.succ_opt().unwrap()));
        assert!(!lot.is_expired(exp.pred_opt().unwrap()));
    }

    #[test]
    fn lot_without_expiration_never_expires() {
        let lot = seed(None);
        assert!(!lot.is_expired(NaiveDate::MAX));
    }
}
