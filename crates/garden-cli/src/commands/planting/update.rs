use garden_db::updates::planting::PlantingUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_nullable, parse_nullable_date};
use crate::commands::shared::update::{nullable, require_any};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub plant: Option<String>,
    pub seed: Option<String>,
    pub pot: Option<String>,
    pub location: Option<String>,
    pub brand: Option<String>,
    pub source: Option<String>,
    pub price: Option<String>,
    pub purchase_date: Option<String>,
    pub seeding_date: Option<String>,
    pub notes: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = PlantingUpdateBuilder::new();
    if let Some(plant) = nullable(params.plant.as_ref()) {
        builder = builder.plant_id(plant);
    }
    if let Some(seed) = nullable(params.seed.as_ref()) {
        builder = builder.seed_id(seed);
    }
    if let Some(pot) = nullable(params.pot.as_ref()) {
        builder = builder.pot_id(pot);
    }
    if let Some(location) = nullable(params.location.as_ref()) {
        builder = builder.location_id(location);
    }
    if let Some(brand) = nullable(params.brand.as_ref()) {
        builder = builder.brand(brand);
    }
    if let Some(source) = nullable(params.source.as_ref()) {
        builder = builder.source(source);
    }
    if let Some(price) = parse_nullable(params.price.as_deref(), "price")? {
        builder = builder.price(price);
    }
    if let Some(date) = parse_nullable_date(params.purchase_date.as_deref(), "purchase_date")? {
        builder = builder.purchase_date(date);
    }
    if let Some(date) = parse_nullable_date(params.seeding_date.as_deref(), "seeding_date")? {
        builder = builder.seeding_date(date);
    }
    if let Some(notes) = nullable(params.notes.as_ref()) {
        builder = builder.notes(notes);
    }

    let planting = ctx
        .service
        .update_planting(&params.id, builder.build())
        .await?;
    output(&planting, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    require_any(&[
        ("plant", params.plant.is_some()),
        ("seed", params.seed.is_some()),
        ("pot", params.pot.is_some()),
        ("location", params.location.is_some()),
        ("brand", params.brand.is_some()),
        ("source", params.source.is_some()),
        ("price", params.price.is_some()),
        ("purchase-date", params.purchase_date.is_some()),
        ("seeding-date", params.seeding_date.is_some()),
        ("notes", params.notes.is_some()),
    ])
}
