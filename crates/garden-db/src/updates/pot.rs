//! Pot update builder.

#[derive(Debug, Clone, Default)]
pub struct PotUpdate {
    pub name: Option<String>,
}

#[derive(Debug, Default)]
pub struct PotUpdateBuilder(PotUpdate);

impl PotUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn build(self) -> PotUpdate {
        self.0
    }
}
