//! Pot repository — CRUD + name uniqueness.

use chrono::Utc;

use garden_core::entities::Pot;
use garden_core::enums::EntityKind;
use garden_core::errors::ValidationErrors;
use garden_core::ids::PREFIX_POT;
use garden_core::responses::DeleteResponse;
use garden_core::schema::POT;

use crate::error::DatabaseError;
use crate::helpers::{next_timestamp, parse_datetime, text_value};
use crate::repos::common::{Assignments, not_found};
use crate::service::GardenService;
use crate::updates::pot::PotUpdate;

const SELECT_COLS: &str = "id, name, created_at, updated_at";

fn row_to_pot(row: &libsql::Row) -> Result<Pot, DatabaseError> {
    Ok(Pot {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
        updated_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl GardenService {
    pub async fn create_pot(&self, name: &str) -> Result<Pot, DatabaseError> {
        let mut errors = ValidationErrors::new();
        POT.check_text("name", Some(name), &mut errors);
        self.check_unique(&POT, "name", name, None, &mut errors)
            .await?;
        errors.into_result()?;

        let name = name.trim();
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_POT).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO pots ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                libsql::params![id.as_str(), name, now.to_rfc3339(), now.to_rfc3339()],
            )
            .await
            .map_err(|e| DatabaseError::from_write(EntityKind::Pot, &[("name", name)], e))?;

        tracing::debug!(%id, name, "created pot");
        Ok(Pot {
            id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_pot(&self, id: &str) -> Result<Pot, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM pots WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| not_found(EntityKind::Pot, id))?;
        row_to_pot(&row)
    }

    pub async fn find_pot_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Pot>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM pots WHERE name = ?1"),
                [name.trim()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_pot(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_pots(&self, limit: u32) -> Result<Vec<Pot>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM pots ORDER BY created_at DESC LIMIT ?1"),
                [limit],
            )
            .await?;

        let mut pots = Vec::new();
        while let Some(row) = rows.next().await? {
            pots.push(row_to_pot(&row)?);
        }
        Ok(pots)
    }

    pub async fn update_pot(
        &self,
        id: &str,
        update: PotUpdate,
    ) -> Result<Pot, DatabaseError> {
        let current = self.get_pot(id).await?;

        let mut errors = ValidationErrors::new();
        if let Some(ref name) = update.name {
            POT.check_text("name", Some(name), &mut errors);
            self.check_unique(&POT, "name", name, Some(id), &mut errors)
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
            .apply(self.db().conn(), &POT, id, now)
            .await?;
        tracing::debug!(%id, ?update, "updated pot");
        self.get_pot(id).await
    }

    /// Delete a pot, clearing it from every planting potted in it.
    pub async fn delete_pot(&self, id: &str) -> Result<DeleteResponse, DatabaseError> {
        self.delete_record(EntityKind::Pot, id).await
    }
}
