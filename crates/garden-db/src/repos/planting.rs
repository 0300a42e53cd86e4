//! Planting repository — CRUD + relationship navigation.

use chrono::{NaiveDate, Utc};

use garden_core::entities::Planting;
use garden_core::enums::EntityKind;
use garden_core::errors::ValidationErrors;
use garden_core::ids::PREFIX_PLANTING;
use garden_core::responses::DeleteResponse;
use garden_core::schema::{PLANTING, normalize_optional};

use crate::error::DatabaseError;
use crate::helpers::{
    date_value, f64_value, get_opt_date, get_opt_string, id_value, next_timestamp,
    parse_datetime, text_value,
};
use crate::repos::common::{Assignments, not_found};
use crate::service::GardenService;
use crate::updates::planting::PlantingUpdate;

const SELECT_COLS: &str = "id, plant_id, seed_id, pot_id, location_id, brand, source, price, \
     purchase_date, seeding_date, notes, created_at, updated_at";

/// Fields of a planting to create. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct NewPlanting {
    pub plant_id: Option<String>,
    pub seed_id: Option<String>,
    pub pot_id: Option<String>,
    pub location_id: Option<String>,
    pub brand: Option<String>,
    pub source: Option<String>,
    pub price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub seeding_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Reference columns of a planting with the kind each one points at.
const REFERENCES: [(&str, EntityKind); 4] = [
    ("plant_id", EntityKind::Plant),
    ("seed_id", EntityKind::Seed),
    ("pot_id", EntityKind::Pot),
    ("location_id", EntityKind::Location),
];

fn row_to_planting(row: &libsql::Row) -> Result<Planting, DatabaseError> {
    Ok(Planting {
        id: row.get(0)?,
        plant_id: get_opt_string(row, 1)?,
        seed_id: get_opt_string(row, 2)?,
        pot_id: get_opt_string(row, 3)?,
        location_id: get_opt_string(row, 4)?,
        brand: get_opt_string(row, 5)?,
        source: get_opt_string(row, 6)?,
        price: row.get::<Option<f64>>(7)?,
        purchase_date: get_opt_date(row, 8)?,
        seeding_date: get_opt_date(row, 9)?,
        notes: get_opt_string(row, 10)?,
        created_at: parse_datetime(&row.get::<String>(11)?)?,
        updated_at: parse_datetime(&row.get::<String>(12)?)?,
    })
}

fn owned(value: Option<&str>) -> Option<String> {
    normalize_optional(value).map(String::from)
}

impl GardenService {
    pub async fn create_planting(&self, new: &NewPlanting) -> Result<Planting, DatabaseError> {
        let mut errors = ValidationErrors::new();
        PLANTING.check_text("brand", new.brand.as_deref(), &mut errors);
        PLANTING.check_text("source", new.source.as_deref(), &mut errors);
        PLANTING.check_text("notes", new.notes.as_deref(), &mut errors);
        PLANTING.check_real("price", new.price, &mut errors);
        errors.into_result()?;

        let refs = [
            owned(new.plant_id.as_deref()),
            owned(new.seed_id.as_deref()),
            owned(new.pot_id.as_deref()),
            owned(new.location_id.as_deref()),
        ];
        for ((field, target), value) in REFERENCES.iter().zip(&refs) {
            if let Some(id) = value {
                self.ensure_reference(EntityKind::Planting, field, *target, id)
                    .await?;
            }
        }
        let [plant_id, seed_id, pot_id, location_id] = refs;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_PLANTING).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO plantings ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"
                ),
                libsql::params![
                    id.as_str(),
                    id_value(plant_id.as_deref()),
                    id_value(seed_id.as_deref()),
                    id_value(pot_id.as_deref()),
                    id_value(location_id.as_deref()),
                    text_value(new.brand.as_deref()),
                    text_value(new.source.as_deref()),
                    f64_value(new.price),
                    date_value(new.purchase_date),
                    date_value(new.seeding_date),
                    text_value(new.notes.as_deref()),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await
            .map_err(|e| DatabaseError::from_write(EntityKind::Planting, &[], e))?;

        let planting = Planting {
            id,
            plant_id,
            seed_id,
            pot_id,
            location_id,
            brand: owned(new.brand.as_deref()),
            source: owned(new.source.as_deref()),
            price: new.price,
            purchase_date: new.purchase_date,
            seeding_date: new.seeding_date,
            notes: owned(new.notes.as_deref()),
            created_at: now,
            updated_at: now,
        };
        if planting.is_unanchored() {
            tracing::warn!(id = %planting.id, "planting references no plant, seed, pot, or location");
        }
        tracing::debug!(id = %planting.id, "created planting");
        Ok(planting)
    }

    pub async fn get_planting(&self, id: &str) -> Result<Planting, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM plantings WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| not_found(EntityKind::Planting, id))?;
        row_to_planting(&row)
    }

    pub async fn list_plantings(&self, limit: u32) -> Result<Vec<Planting>, DatabaseError> {
        self.query_plantings(
            &format!("SELECT {SELECT_COLS} FROM plantings ORDER BY created_at DESC LIMIT ?1"),
            libsql::params![limit],
        )
        .await
    }

    /// Plantings whose four references are all empty.
    pub async fn list_unanchored_plantings(&self) -> Result<Vec<Planting>, DatabaseError> {
        self.query_plantings(
            &format!(
                "SELECT {SELECT_COLS} FROM plantings
                 WHERE plant_id IS NULL AND seed_id IS NULL
                   AND pot_id IS NULL AND location_id IS NULL
                 ORDER BY created_at DESC"
            ),
            (),
        )
        .await
    }

    pub async fn plantings_for_plant(&self, plant_id: &str) -> Result<Vec<Planting>, DatabaseError> {
        self.plantings_by("plant_id", plant_id).await
    }

    pub async fn plantings_from_seed(&self, seed_id: &str) -> Result<Vec<Planting>, DatabaseError> {
        self.plantings_by("seed_id", seed_id).await
    }

    pub async fn plantings_in_pot(&self, pot_id: &str) -> Result<Vec<Planting>, DatabaseError> {
        self.plantings_by("pot_id", pot_id).await
    }

    pub async fn plantings_at_location(
        &self,
        location_id: &str,
    ) -> Result<Vec<Planting>, DatabaseError> {
        self.plantings_by("location_id", location_id).await
    }

    async fn plantings_by(&self, column: &str, id: &str) -> Result<Vec<Planting>, DatabaseError> {
        self.query_plantings(
            &format!("SELECT {SELECT_COLS} FROM plantings WHERE {column} = ?1 ORDER BY created_at"),
            libsql::params![id],
        )
        .await
    }

    async fn query_plantings(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<Planting>, DatabaseError> {
        let mut rows = self.db().conn().query(sql, params).await?;
        let mut plantings = Vec::new();
        while let Some(row) = rows.next().await? {
            plantings.push(row_to_planting(&row)?);
        }
        Ok(plantings)
    }

    pub async fn update_planting(
        &self,
        id: &str,
        update: PlantingUpdate,
    ) -> Result<Planting, DatabaseError> {
        let current = self.get_planting(id).await?;

        let mut errors = ValidationErrors::new();
        if let Some(ref brand) = update.brand {
            PLANTING.check_text("brand", brand.as_deref(), &mut errors);
        }
        if let Some(ref source) = update.source {
            PLANTING.check_text("source", source.as_deref(), &mut errors);
        }
        if let Some(ref notes) = update.notes {
            PLANTING.check_text("notes", notes.as_deref(), &mut errors);
        }
        if let Some(price) = update.price {
            PLANTING.check_real("price", price, &mut errors);
        }
        errors.into_result()?;

        let ref_updates = [
            &update.plant_id,
            &update.seed_id,
            &update.pot_id,
            &update.location_id,
        ];
        let mut assignments = Assignments::new();
        for ((field, target), value) in REFERENCES.iter().zip(ref_updates) {
            let Some(value) = value else { continue };
            let value = normalize_optional(value.as_deref());
            if let Some(ref_id) = value {
                self.ensure_reference(EntityKind::Planting, field, *target, ref_id)
                    .await?;
            }
            assignments.set(field, id_value(value));
        }
        if let Some(ref brand) = update.brand {
            assignments.set("brand", text_value(brand.as_deref()));
        }
        if let Some(ref source) = update.source {
            assignments.set("source", text_value(source.as_deref()));
        }
        if let Some(price) = update.price {
            assignments.set("price", f64_value(price));
        }
        if let Some(date) = update.purchase_date {
            assignments.set("purchase_date", date_value(date));
        }
        if let Some(date) = update.seeding_date {
            assignments.set("seeding_date", date_value(date));
        }
        if let Some(ref notes) = update.notes {
            assignments.set("notes", text_value(notes.as_deref()));
        }
        if assignments.is_empty() {
            return Ok(current);
        }

        let now = next_timestamp(current.updated_at);
        assignments.apply(self.db().conn(), &PLANTING, id, now).await?;
        tracing::debug!(%id, ?update, "updated planting");

        let updated = self.get_planting(id).await?;
        if updated.is_unanchored() && !current.is_unanchored() {
            tracing::warn!(%id, "planting no longer references anything");
        }
        Ok(updated)
    }

    pub async fn delete_planting(&self, id: &str) -> Result<DeleteResponse, DatabaseError> {
        self.delete_record(EntityKind::Planting, id).await
    }
}
