//! Planting update builder.

use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct PlantingUpdate {
    pub plant_id: Option<Option<String>>,
    pub seed_id: Option<Option<String>>,
    pub pot_id: Option<Option<String>>,
    pub location_id: Option<Option<String>>,
    pub brand: Option<Option<String>>,
    pub source: Option<Option<String>>,
    pub price: Option<Option<f64>>,
    pub purchase_date: Option<Option<NaiveDate>>,
    pub seeding_date: Option<Option<NaiveDate>>,
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Default)]
pub struct PlantingUpdateBuilder(PlantingUpdate);

impl PlantingUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn plant_id(mut self, plant_id: Option<String>) -> Self {
        self.0.plant_id = Some(plant_id);
        self
    }

    #[must_use]
    pub fn seed_id(mut self, seed_id: Option<String>) -> Self {
        self.0.seed_id = Some(seed_id);
        self
    }

    #[must_use]
    pub fn pot_id(mut self, pot_id: Option<String>) -> Self {
        self.0.pot_id = Some(pot_id);
        self
    }

    #[must_use]
    pub fn location_id(mut self, location_id: Option<String>) -> Self {
        self.0.location_id = Some(location_id);
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
    pub fn price(mut self, price: Option<f64>) -> Self {
        self.0.price = Some(price);
        self
    }

    #[must_use]
    pub fn purchase_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.purchase_date = Some(date);
        self
    }

    #[must_use]
    pub fn seeding_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.seeding_date = Some(date);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn build(self) -> PlantingUpdate {
        self.0
    }
}
