pub mod dispatch;
pub mod location;
pub mod plant;
pub mod planting;
pub mod pot;
pub mod schema;
pub mod seed;
pub mod shared;
