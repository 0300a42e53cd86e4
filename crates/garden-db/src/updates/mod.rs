//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some` fields
//! generate SET clauses in the dynamic UPDATE SQL. For nullable columns the
//! inner `Option` distinguishes "set to empty" (`Some(None)`) from "leave as is" (`None`).

pub mod location;
pub mod plant;
pub mod planting;
pub mod pot;
pub mod seed;
