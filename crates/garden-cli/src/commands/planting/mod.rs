mod create;
mod update;

use garden_core::enums::EntityKind;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlantingCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grdn planting`.
pub async fn handle(
    action: &PlantingCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PlantingCommands::Create {
            plant,
            seed,
            pot,
            location,
            brand,
            source,
            price,
            purchase_date,
            seeding_date,
            notes,
        } => {
            let params = create::Params {
                plant: plant.clone(),
                seed: seed.clone(),
                pot: pot.clone(),
                location: location.clone(),
                brand: brand.clone(),
                source: source.clone(),
                price: *price,
                purchase_date: purchase_date.clone(),
                seeding_date: seeding_date.clone(),
                notes: notes.clone(),
            };
            create::run(params, ctx, flags).await
        }
        PlantingCommands::Update {
            id,
            plant,
            seed,
            pot,
            location,
            brand,
            source,
            price,
            purchase_date,
            seeding_date,
            notes,
        } => {
            let params = update::Params {
                id: id.clone(),
                plant: plant.clone(),
                seed: seed.clone(),
                pot: pot.clone(),
                location: location.clone(),
                brand: brand.clone(),
                source: source.clone(),
                price: price.clone(),
                purchase_date: purchase_date.clone(),
                seeding_date: seeding_date.clone(),
                notes: notes.clone(),
            };
            update::run(params, ctx, flags).await
        }
        PlantingCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.default_limit());
            output(&ctx.service.list_plantings(limit).await?, flags.format)
        }
        PlantingCommands::Get { id } => output(&ctx.service.get_planting(id).await?, flags.format),
        PlantingCommands::Delete { id } => {
            output(&ctx.service.delete_planting(id).await?, flags.format)
        }
        PlantingCommands::Render { id } => output(
            &ctx.service.render(EntityKind::Planting, id).await?,
            flags.format,
        ),
        PlantingCommands::Unanchored => {
            output(&ctx.service.list_unanchored_plantings().await?, flags.format)
        }
    }
}
