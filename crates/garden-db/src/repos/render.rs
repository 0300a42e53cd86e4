//! Resolve related records and produce one-line summaries.

use garden_core::enums::EntityKind;
use garden_core::render::{self, PlantingRelations};
use garden_core::responses::RenderResponse;

use crate::error::DatabaseError;
use crate::service::GardenService;

impl GardenService {
    pub async fn render_location(&self, id: &str) -> Result<String, DatabaseError> {
        Ok(render::location(&self.get_location(id).await?))
    }

    pub async fn render_pot(&self, id: &str) -> Result<String, DatabaseError> {
        Ok(render::pot(&self.get_pot(id).await?))
    }

    pub async fn render_plant(&self, id: &str) -> Result<String, DatabaseError> {
        Ok(render::plant(&self.get_plant(id).await?))
    }

    pub async fn render_seed(&self, id: &str) -> Result<String, DatabaseError> {
        let seed = self.get_seed(id).await?;
        let plant = self.get_plant(&seed.plant_id).await?;
        Ok(render::seed(&seed, &plant))
    }

    /// Only the relations the summary uses are loaded: the seed is skipped
    /// when a plant is set, the location when a pot is set.
    pub async fn render_planting(&self, id: &str) -> Result<String, DatabaseError> {
        let planting = self.get_planting(id).await?;

        let plant = match planting.plant_id.as_deref() {
            Some(plant_id) => Some(self.get_plant(plant_id).await?),
            None => None,
        };
        let seed = match (&plant, planting.seed_id.as_deref()) {
            (None, Some(seed_id)) => {
                let seed = self.get_seed(seed_id).await?;
                let owner = self.get_plant(&seed.plant_id).await?;
                Some((seed, owner))
            }
            _ => None,
        };
        let pot = match planting.pot_id.as_deref() {
            Some(pot_id) => Some(self.get_pot(pot_id).await?),
            None => None,
        };
        let location = match (&pot, planting.location_id.as_deref()) {
            (None, Some(location_id)) => Some(self.get_location(location_id).await?),
            _ => None,
        };

        Ok(render::planting(&PlantingRelations {
            plant: plant.as_ref(),
            seed: seed.as_ref().map(|(s, p)| (s, p)),
            pot: pot.as_ref(),
            location: location.as_ref(),
        }))
    }

    /// Render any record by kind.
    pub async fn render(&self, kind: EntityKind, id: &str) -> Result<RenderResponse, DatabaseError> {
        let summary = match kind {
            EntityKind::Location => self.render_location(id).await?,
            EntityKind::Pot => self.render_pot(id).await?,
            EntityKind::Plant => self.render_plant(id).await?,
            EntityKind::Seed => self.render_seed(id).await?,
            EntityKind::Planting => self.render_planting(id).await?,
        };
        Ok(RenderResponse {
            entity: kind,
            id: id.to_string(),
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::planting::NewPlanting;
    use crate::repos::seed::NewSeed;
    use crate::test_support::helpers::{test_location, test_pot, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn planting_prefers_plant_over_seed() {
        let svc = test_service().await;
        let tomato = svc
            .create_plant("Tomato", Some("Brandywine"), Some("Solanum lycopersicum"))
            .await
            .unwrap();
        let pepper = svc.create_plant("Pepper", None, None).await.unwrap();
        let seed = svc
            .create_seed(&NewSeed {
                plant_id: pepper.id,
                ..Default::default()
            })
            .await
            .unwrap();
        let pot = test_pot(&svc, "Grow bag").await;
        let planting = svc
            .create_planting(&NewPlanting {
                plant_id: Some(tomato.id),
                seed_id: Some(seed.id),
                pot_id: Some(pot.id),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(
            svc.render_planting(&planting.id).await.unwrap(),
            "plant=common_name=Tomato, variety=Brandywine, species=Solanum lycopersicum, pot=name=Grow bag"
        );
    }

    #[tokio::test]
    async fn planting_without_pot_uses_location() {
        let svc = test_service().await;
        let plant = svc.create_plant("Sunflower", None, None).await.unwrap();
        let seed = svc
            .create_seed(&NewSeed {
                plant_id: plant.id,
                ..Default::default()
            })
            .await
            .unwrap();
        let border = test_location(&svc, "South border").await;
        let planting = svc
            .create_planting(&NewPlanting {
                seed_id: Some(seed.id),
                location_id: Some(border.id),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(
            svc.render_planting(&planting.id).await.unwrap(),
            "seed=plant=Sunflower, variety=-, species=-, location=name=South border"
        );
    }

    #[tokio::test]
    async fn unanchored_planting_renders_placeholders() {
        let svc = test_service().await;
        let planting = svc.create_planting(&NewPlanting::default()).await.unwrap();
        assert_eq!(
            svc.render_planting(&planting.id).await.unwrap(),
            "seed=-, location=-"
        );
    }

    #[tokio::test]
    async fn render_by_kind() {
        let svc = test_service().await;
        let shed = test_location(&svc, "Shed").await;
        let response = svc.render(EntityKind::Location, &shed.id).await.unwrap();
        assert_eq!(response.summary, "name=Shed");
        assert_eq!(response.entity, EntityKind::Location);

        assert!(matches!(
            svc.render(EntityKind::Seed, "sed-00000000").await,
            Err(DatabaseError::NotFound { .. })
        ));
    }
}
