//! Record lifecycle integration tests.
//!
//! Create → update → delete across every entity, exercised through the public
//! `GardenService` API:
//! - Unique names and validation reporting
//! - Cascade and clear on delete
//! - Rendering of plantings
//! - Timestamp handling
//! - File-backed persistence

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use garden_core::enums::EntityKind;
use garden_core::errors::ViolationKind;
use garden_db::error::DatabaseError;
use garden_db::repos::planting::NewPlanting;
use garden_db::repos::seed::NewSeed;
use garden_db::service::GardenService;
use garden_db::updates::location::LocationUpdateBuilder;
use garden_db::updates::plant::PlantUpdateBuilder;
use garden_db::updates::seed::SeedUpdateBuilder;

async fn test_service() -> GardenService {
    GardenService::new_local(":memory:").await.unwrap()
}

fn seed_of(plant_id: &str) -> NewSeed {
    NewSeed {
        plant_id: plant_id.to_string(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_location_name_rejected_unique_name_retrievable() {
    let svc = test_service().await;
    let greenhouse = svc.create_location("Greenhouse").await.unwrap();

    match svc.create_location("Greenhouse").await {
        Err(DatabaseError::Validation(errors)) => {
            assert_eq!(errors.violations().len(), 1);
            assert_eq!(
                errors.violations()[0].kind,
                ViolationKind::Duplicate {
                    value: "Greenhouse".into()
                }
            );
        }
        other => panic!("expected duplicate violation, got {other:?}"),
    }

    let fetched = svc.get_location(&greenhouse.id).await.unwrap();
    assert_eq!(fetched.name, "Greenhouse");
}

#[tokio::test]
async fn several_violations_reported_together() {
    let svc = test_service().await;
    let plant = svc.create_plant("Okra", None, None).await.unwrap();

    let result = svc
        .create_seed(&NewSeed {
            plant_id: plant.id,
            brand: Some("b".repeat(21)),
            source: Some("s".repeat(21)),
            description: Some("d".repeat(257)),
            ..Default::default()
        })
        .await;

    match result {
        Err(DatabaseError::Validation(errors)) => {
            let fields: Vec<_> = errors.violations().iter().map(|v| v.field.as_str()).collect();
            assert_eq!(fields, vec!["brand", "source", "description"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn seed_description_boundary() {
    let svc = test_service().await;
    let plant = svc.create_plant("Leek", None, None).await.unwrap();

    let ok = svc
        .create_seed(&NewSeed {
            description: Some("x".repeat(256)),
            ..seed_of(&plant.id)
        })
        .await
        .unwrap();
    assert_eq!(ok.description.map(|d| d.chars().count()), Some(256));

    let too_long = svc
        .create_seed(&NewSeed {
            description: Some("x".repeat(257)),
            ..seed_of(&plant.id)
        })
        .await;
    assert!(matches!(too_long, Err(DatabaseError::Validation(_))));
}

#[tokio::test]
async fn seed_with_unknown_plant_is_constraint_violation() {
    let svc = test_service().await;
    assert!(matches!(
        svc.create_seed(&seed_of("plt-deadbeef")).await,
        Err(DatabaseError::ConstraintViolation(_))
    ));
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let svc = test_service().await;
    assert!(matches!(
        svc.get_plant("plt-00000000").await,
        Err(DatabaseError::NotFound {
            entity: EntityKind::Plant,
            ..
        })
    ));
    assert!(matches!(
        svc.update_seed("sed-00000000", SeedUpdateBuilder::new().disposed_of(true).build())
            .await,
        Err(DatabaseError::NotFound { .. })
    ));
    assert!(matches!(
        svc.delete_location("loc-00000000").await,
        Err(DatabaseError::NotFound { .. })
    ));
}

// ---------------------------------------------------------------------------
// Delete semantics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deleting_plant_deletes_both_seeds() {
    let svc = test_service().await;
    let plant = svc.create_plant("Cucumber", Some("Marketmore"), None).await.unwrap();
    let first = svc.create_seed(&seed_of(&plant.id)).await.unwrap();
    let second = svc.create_seed(&seed_of(&plant.id)).await.unwrap();

    let response = svc.delete_plant(&plant.id).await.unwrap();
    assert_eq!(response.cascaded.len(), 2);

    for id in [&first.id, &second.id] {
        assert!(matches!(
            svc.get_seed(id).await,
            Err(DatabaseError::NotFound { .. })
        ));
    }
    assert!(svc.seeds_for_plant(&plant.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_pot_keeps_planting_with_location() {
    let svc = test_service().await;
    let pot = svc.create_pot("Clay 12in").await.unwrap();
    let porch = svc.create_location("Porch").await.unwrap();
    let planting = svc
        .create_planting(&NewPlanting {
            pot_id: Some(pot.id.clone()),
            location_id: Some(porch.id.clone()),
            ..Default::default()
        })
        .await
        .unwrap();

    svc.delete_pot(&pot.id).await.unwrap();

    let survivor = svc.get_planting(&planting.id).await.unwrap();
    assert_eq!(survivor.pot_id, None);
    assert_eq!(survivor.location_id.as_deref(), Some(porch.id.as_str()));
    assert!(svc.get_location(&porch.id).await.is_ok());
}

#[tokio::test]
async fn deleting_plant_clears_plantings_of_cascaded_seeds() {
    let svc = test_service().await;
    let plant = svc.create_plant("Melon", None, None).await.unwrap();
    let seed = svc.create_seed(&seed_of(&plant.id)).await.unwrap();
    let bed = svc.create_location("Bed 3").await.unwrap();
    let planting = svc
        .create_planting(&NewPlanting {
            seed_id: Some(seed.id.clone()),
            location_id: Some(bed.id.clone()),
            ..Default::default()
        })
        .await
        .unwrap();

    let response = svc.delete_plant(&plant.id).await.unwrap();
    assert_eq!(response.cleared_references, 1);

    let survivor = svc.get_planting(&planting.id).await.unwrap();
    assert_eq!(survivor.seed_id, None);
    assert_eq!(survivor.location_id, Some(bed.id));
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn render_planting_with_plant_and_seed_uses_plant() {
    let svc = test_service().await;
    let plant = svc.create_plant("Bean", Some("Kentucky Wonder"), None).await.unwrap();
    let seed = svc.create_seed(&seed_of(&plant.id)).await.unwrap();
    let planting = svc
        .create_planting(&NewPlanting {
            plant_id: Some(plant.id.clone()),
            seed_id: Some(seed.id),
            ..Default::default()
        })
        .await
        .unwrap();

    let response = svc.render(EntityKind::Planting, &planting.id).await.unwrap();
    assert_eq!(
        response.summary,
        "plant=common_name=Bean, variety=Kentucky Wonder, species=-, location=-"
    );
}

#[tokio::test]
async fn render_planting_without_pot_uses_location() {
    let svc = test_service().await;
    let plant = svc.create_plant("Corn", None, None).await.unwrap();
    let field = svc.create_location("Back field").await.unwrap();
    let planting = svc
        .create_planting(&NewPlanting {
            plant_id: Some(plant.id),
            location_id: Some(field.id),
            ..Default::default()
        })
        .await
        .unwrap();

    let summary = svc.render_planting(&planting.id).await.unwrap();
    assert!(summary.ends_with(", location=name=Back field"), "{summary}");
}

#[tokio::test]
async fn render_seed_uses_owning_plant() {
    let svc = test_service().await;
    let plant = svc
        .create_plant("Pepper", Some("Jalapeño"), Some("Capsicum annuum"))
        .await
        .unwrap();
    let seed = svc.create_seed(&seed_of(&plant.id)).await.unwrap();
    assert_eq!(
        svc.render_seed(&seed.id).await.unwrap(),
        "plant=Pepper, variety=Jalapeño, species=Capsicum annuum"
    );
}

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_moves_updated_at_forward_only() {
    let svc = test_service().await;
    let plant = svc.create_plant("Kale", None, None).await.unwrap();

    let renamed = svc
        .update_plant(&plant.id, PlantUpdateBuilder::new().variety(Some("Lacinato".into())).build())
        .await
        .unwrap();
    assert!(renamed.updated_at > plant.updated_at);
    assert_eq!(renamed.created_at, plant.created_at);

    let again = svc
        .update_plant(&plant.id, PlantUpdateBuilder::new().common_name("Tuscan kale").build())
        .await
        .unwrap();
    assert!(again.updated_at > renamed.updated_at);
    assert_eq!(again.created_at, plant.created_at);
}

#[tokio::test]
async fn seed_expiry_and_disposal() {
    let svc = test_service().await;
    let plant = svc.create_plant("Parsnip", None, None).await.unwrap();
    let seed = svc
        .create_seed(&NewSeed {
            expiration_date: NaiveDate::from_ymd_opt(2025, 12, 31),
            ..seed_of(&plant.id)
        })
        .await
        .unwrap();

    let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert!(seed.is_expired(today));

    svc.update_seed(&seed.id, SeedUpdateBuilder::new().disposed_of(true).build())
        .await
        .unwrap();
    assert!(svc.list_seeds(false, 20).await.unwrap().is_empty());
    assert_eq!(svc.list_seeds(true, 20).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn file_backed_database_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garden.db");
    let path = path.to_str().unwrap();

    let id = {
        let svc = GardenService::new_local(path).await.unwrap();
        let shed = svc.create_location("Shed").await.unwrap();
        svc.update_location(&shed.id, LocationUpdateBuilder::new().name("Tool shed").build())
            .await
            .unwrap();
        shed.id
    };

    let svc = GardenService::new_local(path).await.unwrap();
    let reopened = svc.get_location(&id).await.unwrap();
    assert_eq!(reopened.name, "Tool shed");
    assert!(reopened.updated_at > reopened.created_at);
}
