use garden_db::repos::seed::NewSeed;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_opt_date;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub plant: String,
    pub brand: Option<String>,
    pub source: Option<String>,
    pub quantity: Option<i16>,
    pub days_to_germination: Option<i16>,
    pub days_to_harvest: Option<i16>,
    pub purchase_date: Option<String>,
    pub expiration_date: Option<String>,
    pub disposed: bool,
    pub description: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let new = NewSeed {
        purchase_date: parse_opt_date(params.purchase_date.as_deref(), "purchase_date")?,
        expiration_date: parse_opt_date(params.expiration_date.as_deref(), "expiration_date")?,
        plant_id: params.plant,
        brand: params.brand,
        source: params.source,
        quantity: params.quantity,
        days_to_germination: params.days_to_germination,
        days_to_harvest: params.days_to_harvest,
        disposed_of: params.disposed,
        description: params.description,
    };
    let seed = ctx.service.create_seed(&new).await?;
    output(&seed, flags.format)
}
