//! Shared test utilities for garden-db unit tests.

pub(crate) mod helpers {
    use garden_core::entities::{Location, Plant, Pot, Seed};

    use crate::GardenDb;
    use crate::repos::seed::NewSeed;
    use crate::service::GardenService;

    /// Create an in-memory GardenService.
    pub async fn test_service() -> GardenService {
        let db = GardenDb::open_local(":memory:").await.unwrap();
        GardenService::from_db(db)
    }

    pub async fn test_plant(svc: &GardenService, common_name: &str) -> Plant {
        svc.create_plant(common_name, None, None).await.unwrap()
    }

    pub async fn test_seed(svc: &GardenService, plant_id: &str) -> Seed {
        svc.create_seed(&NewSeed {
            plant_id: plant_id.to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
    }

    pub async fn test_pot(svc: &GardenService, name: &str) -> Pot {
        svc.create_pot(name).await.unwrap()
    }

    pub async fn test_location(svc: &GardenService, name: &str) -> Location {
        svc.create_location(name).await.unwrap()
    }
}
