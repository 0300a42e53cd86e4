use garden_core::enums::EntityKind;
use garden_db::updates::location::LocationUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LocationCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::update::require_any;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grdn location`.
pub async fn handle(
    action: &LocationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        LocationCommands::Create { name } => {
            output(&service.create_location(name).await?, flags.format)
        }
        LocationCommands::Update { id, name } => {
            require_any(&[("name", name.is_some())])?;
            let mut builder = LocationUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            output(
                &service.update_location(id, builder.build()).await?,
                flags.format,
            )
        }
        LocationCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.default_limit());
            output(&service.list_locations(limit).await?, flags.format)
        }
        LocationCommands::Get { id } => output(&service.get_location(id).await?, flags.format),
        LocationCommands::Delete { id } => {
            output(&service.delete_location(id).await?, flags.format)
        }
        LocationCommands::Render { id } => {
            output(&service.render(EntityKind::Location, id).await?, flags.format)
        }
        LocationCommands::Plantings { id } => {
            service.get_location(id).await?;
            output(&service.plantings_at_location(id).await?, flags.format)
        }
    }
}
