use garden_core::enums::EntityKind;
use garden_db::updates::pot::PotUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PotCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::update::require_any;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grdn pot`.
pub async fn handle(
    action: &PotCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        PotCommands::Create { name } => {
            output(&service.create_pot(name).await?, flags.format)
        }
        PotCommands::Update { id, name } => {
            require_any(&[("name", name.is_some())])?;
            let mut builder = PotUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            output(
                &service.update_pot(id, builder.build()).await?,
                flags.format,
            )
        }
        PotCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.default_limit());
            output(&service.list_pots(limit).await?, flags.format)
        }
        PotCommands::Get { id } => output(&service.get_pot(id).await?, flags.format),
        PotCommands::Delete { id } => {
            output(&service.delete_pot(id).await?, flags.format)
        }
        PotCommands::Render { id } => {
            output(&service.render(EntityKind::Pot, id).await?, flags.format)
        }
        PotCommands::Plantings { id } => {
            service.get_pot(id).await?;
            output(&service.plantings_in_pot(id).await?, flags.format)
        }
    }
}
