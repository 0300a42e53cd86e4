mod create;
mod list;
mod update;

use garden_core::enums::EntityKind;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SeedCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grdn seed`.
pub async fn handle(
    action: &SeedCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SeedCommands::Create {
            plant,
            brand,
            source,
            quantity,
            days_to_germination,
            days_to_harvest,
            purchase_date,
            expiration_date,
            disposed,
            description,
        } => {
            let params = create::Params {
                plant: plant.clone(),
                brand: brand.clone(),
                source: source.clone(),
                quantity: *quantity,
                days_to_germination: *days_to_germination,
                days_to_harvest: *days_to_harvest,
                purchase_date: purchase_date.clone(),
                expiration_date: expiration_date.clone(),
                disposed: *disposed,
                description: description.clone(),
            };
            create::run(params, ctx, flags).await
        }
        SeedCommands::Update {
            id,
            plant,
            brand,
            source,
            quantity,
            days_to_germination,
            days_to_harvest,
            purchase_date,
            expiration_date,
            disposed,
            description,
        } => {
            let params = update::Params {
                id: id.clone(),
                plant: plant.clone(),
                brand: brand.clone(),
                source: source.clone(),
                quantity: quantity.clone(),
                days_to_germination: days_to_germination.clone(),
                days_to_harvest: days_to_harvest.clone(),
                purchase_date: purchase_date.clone(),
                expiration_date: expiration_date.clone(),
                disposed: *disposed,
                description: description.clone(),
            };
            update::run(params, ctx, flags).await
        }
        SeedCommands::List {
            all,
            expired,
            limit,
        } => list::run(*all, *expired, *limit, ctx, flags).await,
        SeedCommands::Get { id } => output(&ctx.service.get_seed(id).await?, flags.format),
        SeedCommands::Delete { id } => output(&ctx.service.delete_seed(id).await?, flags.format),
        SeedCommands::Render { id } => output(
            &ctx.service.render(EntityKind::Seed, id).await?,
            flags.format,
        ),
        SeedCommands::Plantings { id } => {
            ctx.service.get_seed(id).await?;
            output(&ctx.service.plantings_from_seed(id).await?, flags.format)
        }
    }
}
