//! Plant repository — CRUD.

use chrono::Utc;

use garden_core::entities::Plant;
use garden_core::enums::EntityKind;
use garden_core::errors::ValidationErrors;
use garden_core::ids::PREFIX_PLANT;
use garden_core::responses::DeleteResponse;
use garden_core::schema::{PLANT, normalize_optional};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, next_timestamp, parse_datetime, text_value};
use crate::repos::common::{Assignments, not_found};
use crate::service::GardenService;
use crate::updates::plant::PlantUpdate;

const SELECT_COLS: &str = "id, common_name, variety, species, created_at, updated_at";

fn row_to_plant(row: &libsql::Row) -> Result<Plant, DatabaseError> {
    Ok(Plant {
        id: row.get(0)?,
        common_name: row.get(1)?,
        variety: get_opt_string(row, 2)?,
        species: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl GardenService {
    pub async fn create_plant(
        &self,
        common_name: &str,
        variety: Option<&str>,
        species: Option<&str>,
    ) -> Result<Plant, DatabaseError> {
        let mut errors = ValidationErrors::new();
        PLANT.check_text("common_name", Some(common_name), &mut errors);
        PLANT.check_text("variety", variety, &mut errors);
        PLANT.check_text("species", species, &mut errors);
        errors.into_result()?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_PLANT).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO plants ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
                libsql::params![
                    id.as_str(),
                    text_value(Some(common_name)),
                    text_value(variety),
                    text_value(species),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        tracing::debug!(%id, common_name, "created plant");
        Ok(Plant {
            id,
            common_name: common_name.trim().to_string(),
            variety: normalize_optional(variety).map(String::from),
            species: normalize_optional(species).map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_plant(&self, id: &str) -> Result<Plant, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM plants WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| not_found(EntityKind::Plant, id))?;
        row_to_plant(&row)
    }

    pub async fn list_plants(&self, limit: u32) -> Result<Vec<Plant>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM plants ORDER BY created_at DESC LIMIT ?1"),
                [limit],
            )
            .await?;

        let mut plants = Vec::new();
        while let Some(row) = rows.next().await? {
            plants.push(row_to_plant(&row)?);
        }
        Ok(plants)
    }

    pub async fn update_plant(&self, id: &str, update: PlantUpdate) -> Result<Plant, DatabaseError> {
        let current = self.get_plant(id).await?;

        let mut errors = ValidationErrors::new();
        if let Some(ref common_name) = update.common_name {
            PLANT.check_text("common_name", Some(common_name), &mut errors);
        }
        if let Some(ref variety) = update.variety {
            PLANT.check_text("variety", variety.as_deref(), &mut errors);
        }
        if let Some(ref species) = update.species {
            PLANT.check_text("species", species.as_deref(), &mut errors);
        }
        errors.into_result()?;

        let mut assignments = Assignments::new();
        if let Some(ref common_name) = update.common_name {
            assignments.set("common_name", text_value(Some(common_name)));
        }
        if let Some(ref variety) = update.variety {
            assignments.set("variety", text_value(variety.as_deref()));
        }
        if let Some(ref species) = update.species {
            assignments.set("species", text_value(species.as_deref()));
        }
        if assignments.is_empty() {
            return Ok(current);
        }

        let now = next_timestamp(current.updated_at);
        assignments.apply(self.db().conn(), &PLANT, id, now).await?;
        tracing::debug!(%id, ?update, "updated plant");
        self.get_plant(id).await
    }

    /// Delete a plant together with all of its seed lots.
    ///
    /// Plantings of the plant, or of any of its seed lots, survive with those
    /// references cleared.
    pub async fn delete_plant(&self, id: &str) -> Result<DeleteResponse, DatabaseError> {
        self.delete_record(EntityKind::Plant, id).await
    }
}
