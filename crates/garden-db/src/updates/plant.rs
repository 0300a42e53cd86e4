//! Plant update builder.

#[derive(Debug, Clone, Default)]
pub struct PlantUpdate {
    pub common_name: Option<String>,
    pub variety: Option<Option<String>>,
    pub species: Option<Option<String>>,
}

#[derive(Debug, Default)]
pub struct PlantUpdateBuilder(PlantUpdate);

impl PlantUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn common_name(mut self, common_name: impl Into<String>) -> Self {
        self.0.common_name = Some(common_name.into());
        self
    }

    #[must_use]
    pub fn variety(mut self, variety: Option<String>) -> Self {
        self.0.variety = Some(variety);
        self
    }

    #[must_use]
    pub fn species(mut self, species: Option<String>) -> Self {
        self.0.species = Some(species);
        self
    }

    #[must_use]
    pub fn build(self) -> PlantUpdate {
        self.0
    }
}
