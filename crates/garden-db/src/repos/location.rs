//! Location repository — CRUD + name uniqueness.

use chrono::Utc;

use garden_core::entities::Location;
use garden_core::enums::EntityKind;
use garden_core::errors::ValidationErrors;
use garden_core::ids::PREFIX_LOCATION;
use garden_core::responses::DeleteResponse;
use garden_core::schema::LOCATION;

use crate::error::DatabaseError;
use crate::helpers::{next_timestamp, parse_datetime, text_value};
use crate::repos::common::{Assignments, not_found};
use crate::service::GardenService;
use crate::updates::location::LocationUpdate;

const SELECT_COLS: &str = "id, name, created_at, updated_at";

fn row_to_location(row: &libsql::Row) -> Result<Location, DatabaseError> {
    Ok(Location {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
        updated_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl GardenService {
    pub async fn create_location(&self, name: &str) -> Result<Location, DatabaseError> {
        let mut errors = ValidationErrors::new();
        LOCATION.check_text("name", Some(name), &mut errors);
        self.check_unique(&LOCATION, "name", name, None, &mut errors)
            .await?;
        errors.into_result()?;

        let name = name.trim();
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_LOCATION).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO locations ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                libsql::params![id.as_str(), name, now.to_rfc3339(), now.to_rfc3339()],
            )
            .await
            .map_err(|e| DatabaseError::from_write(EntityKind::Location, &[("name", name)], e))?;

        tracing::debug!(%id, name, "created location");
        Ok(Location {
            id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_location(&self, id: &str) -> Result<Location, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM locations WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| not_found(EntityKind::Location, id))?;
        row_to_location(&row)
    }

    pub async fn find_location_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Location>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM locations WHERE name = ?1"),
                [name.trim()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_location(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_locations(&self, limit: u32) -> Result<Vec<Location>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM locations ORDER BY created_at DESC LIMIT ?1"),
                [limit],
            )
            .await?;

        let mut locations = Vec::new();
        while let Some(row) = rows.next().await? {
            locations.push(row_to_location(&row)?);
        }
        Ok(locations)
    }

    pub async fn update_location(
        &self,
        id: &str,
        update: LocationUpdate,
    ) -> Result<Location, DatabaseError> {
        let current = self.get_location(id).await?;

        let mut errors = ValidationErrors::new();
        if let Some(ref name) = update.name {
            LOCATION.check_text("name", Some(name), &mut errors);
            self.check_unique(&LOCATION, "name", name, Some(id), &mut errors)
                .await?;
        }
        errors.into_result()?;

        let mut assignments = Assignments::new();
        if let Some(ref name) = update.name {
            assignments.set("name", text_value(Some(name)));
        }
        if assignments.is_empty() {
            return Ok(current);
        }

        let now = next_timestamp(current.updated_at);
        assignments
            .apply(self.db().conn(), &LOCATION, id, now)
            .await?;
        tracing::debug!(%id, ?update, "updated location");
        self.get_location(id).await
    }

    /// Delete a location, clearing it from every planting that referenced it.
    pub async fn delete_location(&self, id: &str) -> Result<DeleteResponse, DatabaseError> {
        self.delete_record(EntityKind::Location, id).await
    }
}
