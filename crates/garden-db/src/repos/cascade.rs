//! Schema-driven delete: cascades to owned records and clears weak references.
//!
//! The plan is derived from `garden_core::schema::references_to`, so adding a
//! reference field to a schema is enough to have deletes honour it. All work
//! for one delete runs in a single transaction.

use garden_core::enums::EntityKind;
use garden_core::responses::{DeleteResponse, DeletedRecord};
use garden_core::schema::{self, OnDelete};

use crate::error::DatabaseError;
use crate::helpers::{next_timestamp, parse_datetime};
use crate::repos::common::{not_found, row_exists};
use crate::service::GardenService;

/// Every record removed by deleting `(kind, id)`, parents before children.
async fn plan_deletion(
    conn: &libsql::Connection,
    kind: EntityKind,
    id: &str,
) -> Result<Vec<DeletedRecord>, DatabaseError> {
    let mut plan = Vec::new();
    let mut pending = vec![DeletedRecord {
        entity: kind,
        id: id.to_string(),
    }];

    while let Some(record) = pending.pop() {
        for (owner, field, on_delete) in schema::references_to(record.entity) {
            if on_delete != OnDelete::Cascade {
                continue;
            }
            let mut rows = conn
                .query(
                    &format!("SELECT id FROM {} WHERE {} = ?1", owner.table, field.name),
                    [record.id.as_str()],
                )
                .await?;
            while let Some(row) = rows.next().await? {
                pending.push(DeletedRecord {
                    entity: owner.kind,
                    id: row.get(0)?,
                });
            }
        }
        plan.push(record);
    }
    Ok(plan)
}

/// Clear weak references to `record`, then delete it. Returns references cleared.
///
/// Each cleared row gets its own `next_timestamp`, so a row whose stored
/// `updated_at` is ahead of the clock still moves forward.
async fn remove_record(
    conn: &libsql::Connection,
    record: &DeletedRecord,
) -> Result<u64, DatabaseError> {
    let mut cleared = 0;
    for (owner, field, on_delete) in schema::references_to(record.entity) {
        if on_delete != OnDelete::Clear {
            continue;
        }
        let mut touched = Vec::new();
        {
            let mut rows = conn
                .query(
                    &format!(
                        "SELECT id, updated_at FROM {} WHERE {} = ?1",
                        owner.table, field.name
                    ),
                    [record.id.as_str()],
                )
                .await?;
            while let Some(row) = rows.next().await? {
                let previous = parse_datetime(&row.get::<String>(1)?)?;
                touched.push((row.get::<String>(0)?, next_timestamp(previous)));
            }
        }

        for (owner_id, stamp) in touched {
            cleared += conn
                .execute(
                    &format!(
                        "UPDATE {} SET {} = NULL, updated_at = ?1 WHERE id = ?2",
                        owner.table, field.name
                    ),
                    libsql::params![stamp.to_rfc3339(), owner_id],
                )
                .await?;
        }
    }

    conn.execute(
        &format!("DELETE FROM {} WHERE id = ?1", schema::for_kind(record.entity).table),
        [record.id.as_str()],
    )
    .await?;
    Ok(cleared)
}

async fn delete_planned(
    conn: &libsql::Connection,
    kind: EntityKind,
    id: &str,
) -> Result<(Vec<DeletedRecord>, u64), DatabaseError> {
    let plan = plan_deletion(conn, kind, id).await?;
    let mut cleared = 0;
    for record in plan.iter().rev() {
        cleared += remove_record(conn, record).await?;
    }
    Ok((plan, cleared))
}

impl GardenService {
    /// Delete a record of any kind along with everything that depends on it.
    pub(crate) async fn delete_record(
        &self,
        kind: EntityKind,
        id: &str,
    ) -> Result<DeleteResponse, DatabaseError> {
        let conn = self.db().conn();
        if !row_exists(conn, schema::for_kind(kind).table, id).await? {
            return Err(not_found(kind, id));
        }

        let tx = conn.transaction().await?;
        let (plan, cleared) = match delete_planned(&tx, kind, id).await {
            Ok(done) => done,
            Err(e) => {
                tx.rollback().await?;
                return Err(e);
            }
        };
        tx.commit().await?;

        let cascaded: Vec<DeletedRecord> = plan.into_iter().skip(1).rev().collect();
        tracing::debug!(
            entity = %kind,
            %id,
            cascaded = cascaded.len(),
            cleared,
            "deleted record"
        );
        Ok(DeleteResponse {
            entity: kind,
            id: id.to_string(),
            cascaded,
            cleared_references: cleared,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, Utc};
    use crate::repos::planting::NewPlanting;
    use crate::test_support::helpers::{
        test_location, test_plant, test_pot, test_seed, test_service,
    };
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn deleting_plant_cascades_to_its_seeds() {
        let svc = test_service().await;
        let plant = test_plant(&svc, "Radish").await;
        let a = test_seed(&svc, &plant.id).await;
        let b = test_seed(&svc, &plant.id).await;
        let other = test_plant(&svc, "Beet").await;
        let kept = test_seed(&svc, &other.id).await;

        let response = svc.delete_plant(&plant.id).await.unwrap();

        let mut cascaded: Vec<_> = response.cascaded.iter().map(|r| r.id.clone()).collect();
        cascaded.sort();
        let mut expected = vec![a.id.clone(), b.id.clone()];
        expected.sort();
        assert_eq!(cascaded, expected);
        assert!(response.cascaded.iter().all(|r| r.entity == EntityKind::Seed));

        for id in [&plant.id, &a.id, &b.id] {
            assert!(!row_exists(svc.db().conn(), "plants", id).await.unwrap());
            assert!(!row_exists(svc.db().conn(), "seeds", id).await.unwrap());
        }
        assert!(svc.get_seed(&kept.id).await.is_ok());
    }

    #[tokio::test]
    async fn deleting_pot_clears_planting_but_keeps_location() {
        let svc = test_service().await;
        let pot = test_pot(&svc, "Half barrel").await;
        let deck = test_location(&svc, "Deck").await;
        let planting = svc
            .create_planting(&NewPlanting {
                pot_id: Some(pot.id.clone()),
                location_id: Some(deck.id.clone()),
                ..Default::default()
            })
            .await
            .unwrap();

        let response = svc.delete_pot(&pot.id).await.unwrap();
        assert_eq!(response.cleared_references, 1);
        assert!(response.cascaded.is_empty());

        let survivor = svc.get_planting(&planting.id).await.unwrap();
        assert_eq!(survivor.pot_id, None);
        assert_eq!(survivor.location_id, Some(deck.id));
        assert!(survivor.updated_at > planting.updated_at);
        assert_eq!(survivor.created_at, planting.created_at);
    }

    #[tokio::test]
    async fn clearing_reference_moves_future_updated_at_forward() {
        let svc = test_service().await;
        let pot = test_pot(&svc, "Window box").await;
        let planting = svc
            .create_planting(&NewPlanting {
                pot_id: Some(pot.id.clone()),
                ..Default::default()
            })
            .await
            .unwrap();

        // A burst of updates inside one clock tick leaves updated_at ahead of now.
        let ahead = Utc::now() + TimeDelta::milliseconds(50);
        svc.db()
            .conn()
            .execute(
                "UPDATE plantings SET updated_at = ?1 WHERE id = ?2",
                libsql::params![ahead.to_rfc3339(), planting.id.as_str()],
            )
            .await
            .unwrap();

        svc.delete_pot(&pot.id).await.unwrap();

        let survivor = svc.get_planting(&planting.id).await.unwrap();
        assert_eq!(survivor.pot_id, None);
        assert!(survivor.updated_at > ahead);
    }

    #[tokio::test]
    async fn deleting_plant_clears_seed_of_cascaded_lots() {
        let svc = test_service().await;
        let plant = test_plant(&svc, "Lettuce").await;
        let seed = test_seed(&svc, &plant.id).await;
        let planting = svc
            .create_planting(&NewPlanting {
                plant_id: Some(plant.id.clone()),
                seed_id: Some(seed.id.clone()),
                ..Default::default()
            })
            .await
            .unwrap();

        let response = svc.delete_plant(&plant.id).await.unwrap();
        assert_eq!(response.cleared_references, 2);

        let survivor = svc.get_planting(&planting.id).await.unwrap();
        assert!(survivor.is_unanchored());
    }

    #[tokio::test]
    async fn deleting_seed_leaves_plant() {
        let svc = test_service().await;
        let plant = test_plant(&svc, "Spinach").await;
        let seed = test_seed(&svc, &plant.id).await;

        let response = svc.delete_seed(&seed.id).await.unwrap();
        assert_eq!(response.entity, EntityKind::Seed);
        assert!(response.cascaded.is_empty());
        assert!(svc.get_plant(&plant.id).await.is_ok());
    }

    #[tokio::test]
    async fn deleting_missing_record_is_not_found() {
        let svc = test_service().await;
        for (kind, id) in [
            (EntityKind::Location, "loc-00000000"),
            (EntityKind::Pot, "pot-00000000"),
            (EntityKind::Plant, "plt-00000000"),
            (EntityKind::Seed, "sed-00000000"),
            (EntityKind::Planting, "pnt-00000000"),
        ] {
            match svc.delete_record(kind, id).await {
                Err(DatabaseError::NotFound { entity, .. }) => assert_eq!(entity, kind),
                other => panic!("expected not found for {kind}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn plan_lists_parent_first() {
        let svc = test_service().await;
        let plant = test_plant(&svc, "Garlic").await;
        let seed = test_seed(&svc, &plant.id).await;

        let plan = plan_deletion(svc.db().conn(), EntityKind::Plant, &plant.id)
            .await
            .unwrap();
        assert_eq!(
            plan,
            vec![
                DeletedRecord {
                    entity: EntityKind::Plant,
                    id: plant.id,
                },
                DeletedRecord {
                    entity: EntityKind::Seed,
                    id: seed.id,
                },
            ]
        );
    }
}
