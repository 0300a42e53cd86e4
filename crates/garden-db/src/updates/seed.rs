//! Seed update builder.

use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct SeedUpdate {
    /// Move the lot to another plant. Never empty: a seed always has a plant.
    pub plant_id: Option<String>,
    pub brand: Option<Option<String>>,
    pub source: Option<Option<String>>,
    pub quantity: Option<Option<i16>>,
    pub days_to_germination: Option<Option<i16>>,
    pub days_to_harvest: Option<Option<i16>>,
    pub purchase_date: Option<Option<NaiveDate>>,
    pub expiration_date: Option<Option<NaiveDate>>,
    pub disposed_of: Option<bool>,
    pub description: Option<Option<String>>,
}

#[derive(Debug, Default)]
pub struct SeedUpdateBuilder(SeedUpdate);

impl SeedUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn plant_id(mut self, plant_id: impl Into<String>) -> Self {
        self.0.plant_id = Some(plant_id.into());
        self
    }

    #[must_use]
    pub fn brand(mut self, brand: Option<String>) -> Self {
        self.0.brand = Some(brand);
        self
    }

    #[must_use]
    pub fn source(mut self, source: Option<String>) -> Self {
        self.0.source = Some(source);
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: Option<i16>) -> Self {
        self.0.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn days_to_germination(mut self, days: Option<i16>) -> Self {
        self.0.days_to_germination = Some(days);
        self
    }

    #[must_use]
    pub fn days_to_harvest(mut self, days: Option<i16>) -> Self {
        self.0.days_to_harvest = Some(days);
        self
    }

    #[must_use]
    pub fn purchase_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.purchase_date = Some(date);
        self
    }

    #[must_use]
    pub fn expiration_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.expiration_date = Some(date);
        self
    }

    #[must_use]
    pub fn disposed_of(mut self, disposed_of: bool) -> Self {
        self.0.disposed_of = Some(disposed_of);
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn build(self) -> SeedUpdate {
        self.0
    }
}
