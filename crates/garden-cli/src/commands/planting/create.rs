use garden_db::repos::planting::NewPlanting;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_opt_date;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub plant: Option<String>,
    pub seed: Option<String>,
    pub pot: Option<String>,
    pub location: Option<String>,
    pub brand: Option<String>,
    pub source: Option<String>,
    pub price: Option<f64>,
    pub purchase_date: Option<String>,
    pub seeding_date: Option<String>,
    pub notes: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let new = NewPlanting {
        purchase_date: parse_opt_date(params.purchase_date.as_deref(), "purchase_date")?,
        seeding_date: parse_opt_date(params.seeding_date.as_deref(), "seeding_date")?,
        plant_id: params.plant,
        seed_id: params.seed,
        pot_id: params.pot,
        location_id: params.location,
        brand: params.brand,
        source: params.source,
        price: params.price,
        notes: params.notes,
    };

    let planting = ctx.service.create_planting(&new).await?;
    if planting.is_unanchored() && flags.show_notes() {
        eprintln!(
            "note: planting {} has no plant, seed, pot, or location",
            planting.id
        );
    }
    output(&planting, flags.format)
}
