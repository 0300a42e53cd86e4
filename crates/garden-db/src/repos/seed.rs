//! Seed lot repository — CRUD + plant ownership.

use chrono::{NaiveDate, Utc};

use garden_core::entities::Seed;
use garden_core::enums::EntityKind;
use garden_core::errors::ValidationErrors;
use garden_core::ids::PREFIX_SEED;
use garden_core::responses::DeleteResponse;
use garden_core::schema::{SEED, normalize_optional};

use crate::error::DatabaseError;
use crate::helpers::{
    bool_value, date_value, get_opt_date, get_opt_i16, get_opt_string, i16_value,
    next_timestamp, parse_datetime, text_value,
};
use crate::repos::common::{Assignments, not_found};
use crate::service::GardenService;
use crate::updates::seed::SeedUpdate;

const SELECT_COLS: &str = "id, plant_id, brand, source, quantity, days_to_germination, \
     days_to_harvest, purchase_date, expiration_date, disposed_of, description, \
     created_at, updated_at";

/// Fields of a seed lot to create.
#[derive(Debug, Clone, Default)]
pub struct NewSeed {
    pub plant_id: String,
    pub brand: Option<String>,
    pub source: Option<String>,
    pub quantity: Option<i16>,
    pub days_to_germination: Option<i16>,
    pub days_to_harvest: Option<i16>,
    pub purchase_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub disposed_of: bool,
    pub description: Option<String>,
}

fn row_to_seed(row: &libsql::Row) -> Result<Seed, DatabaseError> {
    Ok(Seed {
        id: row.get(0)?,
        plant_id: row.get(1)?,
        brand: get_opt_string(row, 2)?,
        source: get_opt_string(row, 3)?,
        quantity: get_opt_i16(row, 4)?,
        days_to_germination: get_opt_i16(row, 5)?,
        days_to_harvest: get_opt_i16(row, 6)?,
        purchase_date: get_opt_date(row, 7)?,
        expiration_date: get_opt_date(row, 8)?,
        disposed_of: row.get::<i64>(9)? != 0,
        description: get_opt_string(row, 10)?,
        created_at: parse_datetime(&row.get::<String>(11)?)?,
        updated_at: parse_datetime(&row.get::<String>(12)?)?,
    })
}

fn check_seed_text(
    brand: Option<&str>,
    source: Option<&str>,
    description: Option<&str>,
    errors: &mut ValidationErrors,
) {
    SEED.check_text("brand", brand, errors);
    SEED.check_text("source", source, errors);
    SEED.check_text("description", description, errors);
}

impl GardenService {
    pub async fn create_seed(&self, new: &NewSeed) -> Result<Seed, DatabaseError> {
        let mut errors = ValidationErrors::new();
        SEED.check_text("plant_id", Some(&new.plant_id), &mut errors);
        check_seed_text(
            new.brand.as_deref(),
            new.source.as_deref(),
            new.description.as_deref(),
            &mut errors,
        );
        errors.into_result()?;

        let plant_id = new.plant_id.trim();
        self.ensure_reference(EntityKind::Seed, "plant_id", EntityKind::Plant, plant_id)
            .await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_SEED).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO seeds ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"
                ),
                libsql::params![
                    id.as_str(),
                    plant_id,
                    text_value(new.brand.as_deref()),
                    text_value(new.source.as_deref()),
                    i16_value(new.quantity),
                    i16_value(new.days_to_germination),
                    i16_value(new.days_to_harvest),
                    date_value(new.purchase_date),
                    date_value(new.expiration_date),
                    bool_value(new.disposed_of),
                    text_value(new.description.as_deref()),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await
            .map_err(|e| DatabaseError::from_write(EntityKind::Seed, &[], e))?;

        tracing::debug!(%id, plant_id, "created seed lot");
        Ok(Seed {
            id,
            plant_id: plant_id.to_string(),
            brand: normalize_optional(new.brand.as_deref()).map(String::from),
            source: normalize_optional(new.source.as_deref()).map(String::from),
            quantity: new.quantity,
            days_to_germination: new.days_to_germination,
            days_to_harvest: new.days_to_harvest,
            purchase_date: new.purchase_date,
            expiration_date: new.expiration_date,
            disposed_of: new.disposed_of,
            description: normalize_optional(new.description.as_deref()).map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_seed(&self, id: &str) -> Result<Seed, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM seeds WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| not_found(EntityKind::Seed, id))?;
        row_to_seed(&row)
    }

    /// List seed lots, newest first. Disposed lots are skipped unless asked for.
    pub async fn list_seeds(
        &self,
        include_disposed: bool,
        limit: u32,
    ) -> Result<Vec<Seed>, DatabaseError> {
        let filter = if include_disposed {
            ""
        } else {
            "WHERE disposed_of = 0"
        };
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM seeds {filter} ORDER BY created_at DESC LIMIT ?1"
                ),
                [limit],
            )
            .await?;

        let mut seeds = Vec::new();
        while let Some(row) = rows.next().await? {
            seeds.push(row_to_seed(&row)?);
        }
        Ok(seeds)
    }

    /// Every seed lot owned by a plant, oldest first.
    pub async fn seeds_for_plant(&self, plant_id: &str) -> Result<Vec<Seed>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM seeds WHERE plant_id = ?1 ORDER BY created_at"),
                [plant_id],
            )
            .await?;

        let mut seeds = Vec::new();
        while let Some(row) = rows.next().await? {
            seeds.push(row_to_seed(&row)?);
        }
        Ok(seeds)
    }

    pub async fn update_seed(&self, id: &str, update: SeedUpdate) -> Result<Seed, DatabaseError> {
        let current = self.get_seed(id).await?;

        let mut errors = ValidationErrors::new();
        if let Some(ref plant_id) = update.plant_id {
            SEED.check_text("plant_id", Some(plant_id), &mut errors);
        }
        if let Some(ref brand) = update.brand {
            SEED.check_text("brand", brand.as_deref(), &mut errors);
        }
        if let Some(ref source) = update.source {
            SEED.check_text("source", source.as_deref(), &mut errors);
        }
        if let Some(ref description) = update.description {
            SEED.check_text("description", description.as_deref(), &mut errors);
        }
        errors.into_result()?;

        if let Some(ref plant_id) = update.plant_id {
            self.ensure_reference(EntityKind::Seed, "plant_id", EntityKind::Plant, plant_id.trim())
                .await?;
        }

        let mut assignments = Assignments::new();
        if let Some(ref plant_id) = update.plant_id {
            assignments.set("plant_id", text_value(Some(plant_id)));
        }
        if let Some(ref brand) = update.brand {
            assignments.set("brand", text_value(brand.as_deref()));
        }
        if let Some(ref source) = update.source {
            assignments.set("source", text_value(source.as_deref()));
        }
        if let Some(quantity) = update.quantity {
            assignments.set("quantity", i16_value(quantity));
        }
        if let Some(days) = update.days_to_germination {
            assignments.set("days_to_germination", i16_value(days));
        }
        if let Some(days) = update.days_to_harvest {
            assignments.set("days_to_harvest", i16_value(days));
        }
        if let Some(date) = update.purchase_date {
            assignments.set("purchase_date", date_value(date));
        }
        if let Some(date) = update.expiration_date {
            assignments.set("expiration_date", date_value(date));
        }
        if let Some(disposed_of) = update.disposed_of {
            assignments.set("disposed_of", bool_value(disposed_of));
        }
        if let Some(ref description) = update.description {
            assignments.set("description", text_value(description.as_deref()));
        }
        if assignments.is_empty() {
            return Ok(current);
        }

        let now = next_timestamp(current.updated_at);
        assignments.apply(self.db().conn(), &SEED, id, now).await?;
        tracing::debug!(%id, ?update, "updated seed lot");
        self.get_seed(id).await
    }

    /// Delete a seed lot, clearing it from every planting sown from it.
    pub async fn delete_seed(&self, id: &str) -> Result<DeleteResponse, DatabaseError> {
        self.delete_record(EntityKind::Seed, id).await
    }
}
