use garden_db::updates::seed::SeedUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_nullable, parse_nullable_date};
use crate::commands::shared::update::{nullable, require_any};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub plant: Option<String>,
    pub brand: Option<String>,
    pub source: Option<String>,
    pub quantity: Option<String>,
    pub days_to_germination: Option<String>,
    pub days_to_harvest: Option<String>,
    pub purchase_date: Option<String>,
    pub expiration_date: Option<String>,
    pub disposed: Option<bool>,
    pub description: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = SeedUpdateBuilder::new();
    if let Some(plant) = params.plant.as_deref() {
        builder = builder.plant_id(plant);
    }
    if let Some(brand) = nullable(params.brand.as_ref()) {
        builder = builder.brand(brand);
    }
    if let Some(source) = nullable(params.source.as_ref()) {
        builder = builder.source(source);
    }
    if let Some(quantity) = parse_nullable(params.quantity.as_deref(), "quantity")? {
        builder = builder.quantity(quantity);
    }
    if let Some(days) = parse_nullable(params.days_to_germination.as_deref(), "days_to_germination")? {
        builder = builder.days_to_germination(days);
    }
    if let Some(days) = parse_nullable(params.days_to_harvest.as_deref(), "days_to_harvest")? {
        builder = builder.days_to_harvest(days);
    }
    if let Some(date) = parse_nullable_date(params.purchase_date.as_deref(), "purchase_date")? {
        builder = builder.purchase_date(date);
    }
    if let Some(date) = parse_nullable_date(params.expiration_date.as_deref(), "expiration_date")? {
        builder = builder.expiration_date(date);
    }
    if let Some(disposed) = params.disposed {
        builder = builder.disposed_of(disposed);
    }
    if let Some(description) = nullable(params.description.as_ref()) {
        builder = builder.description(description);
    }

    let seed = ctx.service.update_seed(&params.id, builder.build()).await?;
    output(&seed, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    require_any(&[
        ("plant", params.plant.is_some()),
        ("brand", params.brand.is_some()),
        ("source", params.source.is_some()),
        ("quantity", params.quantity.is_some()),
        ("days-to-germination", params.days_to_germination.is_some()),
        ("days-to-harvest", params.days_to_harvest.is_some()),
        ("purchase-date", params.purchase_date.is_some()),
        ("expiration-date", params.expiration_date.is_some()),
        ("disposed", params.disposed.is_some()),
        ("description", params.description.is_some()),
    ])
}
