use garden_core::enums::EntityKind;
use garden_db::updates::plant::PlantUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlantCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::update::{nullable, require_any};
use crate::context::AppContext;
use crate::output::output;

/// Handle `grdn plant`.
pub async fn handle(
    action: &PlantCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        PlantCommands::Create {
            common_name,
            variety,
            species,
        } => {
            let plant = service
                .create_plant(common_name, variety.as_deref(), species.as_deref())
                .await?;
            output(&plant, flags.format)
        }
        PlantCommands::Update {
            id,
            common_name,
            variety,
            species,
        } => {
            require_any(&[
                ("common-name", common_name.is_some()),
                ("variety", variety.is_some()),
                ("species", species.is_some()),
            ])?;
            let mut builder = PlantUpdateBuilder::new();
            if let Some(common_name) = common_name {
                builder = builder.common_name(common_name);
            }
            if let Some(variety) = nullable(variety.as_ref()) {
                builder = builder.variety(variety);
            }
            if let Some(species) = nullable(species.as_ref()) {
                builder = builder.species(species);
            }
            output(&service.update_plant(id, builder.build()).await?, flags.format)
        }
        PlantCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.default_limit());
            output(&service.list_plants(limit).await?, flags.format)
        }
        PlantCommands::Get { id } => output(&service.get_plant(id).await?, flags.format),
        PlantCommands::Delete { id } => output(&service.delete_plant(id).await?, flags.format),
        PlantCommands::Render { id } => {
            output(&service.render(EntityKind::Plant, id).await?, flags.format)
        }
        PlantCommands::Seeds { id } => {
            service.get_plant(id).await?;
            output(&service.seeds_for_plant(id).await?, flags.format)
        }
        PlantCommands::Plantings { id } => {
            service.get_plant(id).await?;
            output(&service.plantings_for_plant(id).await?, flags.format)
        }
    }
}
