//! Repository modules implementing CRUD operations for all garden entities.
//!
//! Each module adds methods to `GardenService` via `impl GardenService` blocks.

mod cascade;
mod common;
pub mod location;
pub mod plant;
pub mod planting;
pub mod pot;
pub mod render;
pub mod seed;
