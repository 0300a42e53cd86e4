//! Explicit schema declarations for every garden entity.
//!
//! Each entity's columns, length limits, uniqueness, and relations are
//! declared once here as static data. The storage layer receives [`ALL`] when
//! it opens a database and checks the migrated tables against it; delete
//! handlers walk [`references_to`] to decide what to cascade and what to clear.
//! Nothing is registered at runtime.

use crate::enums::EntityKind;
use crate::errors::{FieldViolation, ValidationErrors, ViolationKind};

/// What happens to a referencing record when its target is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    /// Delete the referencing record too.
    Cascade,
    /// Set the reference to empty and keep the record.
    Clear,
}

impl OnDelete {
    /// SQL `ON DELETE` action for the foreign key.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Cascade => "CASCADE",
            Self::Clear => "SET NULL",
        }
    }
}

/// Column type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text { max_len: usize },
    SmallInt,
    Real,
    Date,
    Bool,
    Reference { target: EntityKind, on_delete: OnDelete },
}

/// One declared column. `name` is the column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
    pub unique: bool,
}

impl FieldSpec {
    const fn text(name: &'static str, max_len: usize) -> Self {
        Self {
            name,
            ty: FieldType::Text { max_len },
            required: false,
            unique: false,
        }
    }

    const fn of(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: false,
            unique: false,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Maximum text length, if this is a text column.
    #[must_use]
    pub const fn max_len(&self) -> Option<usize> {
        match self.ty {
            FieldType::Text { max_len } => Some(max_len),
            _ => None,
        }
    }
}

/// Declared shape of one entity's table.
///
/// `id`, `created_at`, and `updated_at` are implied for every entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    pub kind: EntityKind,
    pub table: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Columns every table carries in addition to its declared fields.
pub const SYSTEM_COLUMNS: &[&str] = &["id", "created_at", "updated_at"];

pub const LOCATION: EntitySchema = EntitySchema {
    kind: EntityKind::Location,
    table: "locations",
    fields: &[FieldSpec::text("name", 20).required().unique()],
};

pub const POT: EntitySchema = EntitySchema {
    kind: EntityKind::Pot,
    table: "pots",
    fields: &[FieldSpec::text("name", 30).required().unique()],
};

pub const PLANT: EntitySchema = EntitySchema {
    kind: EntityKind::Plant,
    table: "plants",
    fields: &[
        FieldSpec::text("common_name", 30).required(),
        FieldSpec::text("variety", 30),
        FieldSpec::text("species", 50),
    ],
};

pub const SEED: EntitySchema = EntitySchema {
    kind: EntityKind::Seed,
    table: "seeds",
    fields: &[
        FieldSpec::of(
            "plant_id",
            FieldType::Reference {
                target: EntityKind::Plant,
                on_delete: OnDelete::Cascade,
            },
        )
        .required(),
        FieldSpec::text("brand", 20),
        FieldSpec::text("source", 20),
        FieldSpec::of("quantity", FieldType::SmallInt),
        FieldSpec::of("days_to_germination", FieldType::SmallInt),
        FieldSpec::of("days_to_harvest", FieldType::SmallInt),
        FieldSpec::of("purchase_date", FieldType::Date),
        FieldSpec::of("expiration_date", FieldType::Date),
        FieldSpec::of("disposed_of", FieldType::Bool).required(),
        FieldSpec::text("description", 256),
    ],
};

const fn weak_ref(name: &'static str, target: EntityKind) -> FieldSpec {
    FieldSpec::of(
        name,
        FieldType::Reference {
            target,
            on_delete: OnDelete::Clear,
        },
    )
}

pub const PLANTING: EntitySchema = EntitySchema {
    kind: EntityKind::Planting,
    table: "plantings",
    fields: &[
        weak_ref("plant_id", EntityKind::Plant),
        weak_ref("seed_id", EntityKind::Seed),
        weak_ref("pot_id", EntityKind::Pot),
        weak_ref("location_id", EntityKind::Location),
        FieldSpec::text("brand", 20),
        FieldSpec::text("source", 20),
        FieldSpec::of("price", FieldType::Real),
        FieldSpec::of("purchase_date", FieldType::Date),
        FieldSpec::of("seeding_date", FieldType::Date),
        FieldSpec::text("notes", 256),
    ],
};

/// Every entity schema, parents before children.
pub const ALL: &[EntitySchema] = &[LOCATION, POT, PLANT, SEED, PLANTING];

/// Schema for an entity kind.
#[must_use]
pub const fn for_kind(kind: EntityKind) -> &'static EntitySchema {
    match kind {
        EntityKind::Location => &LOCATION,
        EntityKind::Pot => &POT,
        EntityKind::Plant => &PLANT,
        EntityKind::Seed => &SEED,
        EntityKind::Planting => &PLANTING,
    }
}

/// Every field, across all schemas, that references `target`.
pub fn references_to(
    target: EntityKind,
) -> impl Iterator<Item = (&'static EntitySchema, &'static FieldSpec, OnDelete)> {
    ALL.iter().flat_map(move |schema| {
        schema.fields.iter().filter_map(move |field| match field.ty {
            FieldType::Reference {
                target: t,
                on_delete,
            } if t == target => Some((schema, field, on_delete)),
            _ => None,
        })
    })
}

/// Normalize text for storage: surrounding whitespace is trimmed and an
/// empty result becomes `None`.
#[must_use]
pub fn normalize_optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl EntitySchema {
    /// Look up a declared field by column name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Every column the table must have, system columns first.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> {
        SYSTEM_COLUMNS
            .iter()
            .copied()
            .chain(self.fields.iter().map(|f| f.name))
    }

    /// Check a text value against its field's required-ness and length limit,
    /// recording violations.
    ///
    /// Panics in debug builds if `field` is not declared on this schema.
    pub fn check_text(&self, field: &str, value: Option<&str>, errors: &mut ValidationErrors) {
        let Some(spec) = self.field(field) else {
            debug_assert!(false, "undeclared field {}.{field}", self.kind);
            return;
        };
        match normalize_optional(value) {
            None if spec.required => {
                errors.push(FieldViolation::new(self.kind, field, ViolationKind::Required));
            }
            None => {}
            Some(text) => {
                if let Some(max) = spec.max_len() {
                    let actual = text.chars().count();
                    if actual > max {
                        errors.push(FieldViolation::new(
                            self.kind,
                            field,
                            ViolationKind::TooLong { max, actual },
                        ));
                    }
                }
            }
        }
    }

    /// Reject NaN and infinities, which `SQLite` would store as NULL or
    /// as an out-of-range sentinel.
    pub fn check_real(&self, field: &str, value: Option<f64>, errors: &mut ValidationErrors) {
        debug_assert!(self.field(field).is_some(), "undeclared field {}.{field}", self.kind);
        if value.is_some_and(|v| !v.is_finite()) {
            errors.push(FieldViolation::new(self.kind, field, ViolationKind::NotFinite));
        }
    }
}
