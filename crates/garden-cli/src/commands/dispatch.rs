use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Location { action } => commands::location::handle(&action, ctx, flags).await,
        Commands::Pot { action } => commands::pot::handle(&action, ctx, flags).await,
        Commands::Plant { action } => commands::plant::handle(&action, ctx, flags).await,
        Commands::Seed { action } => commands::seed::handle(&action, ctx, flags).await,
        Commands::Planting { action } => commands::planting::handle(&action, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
