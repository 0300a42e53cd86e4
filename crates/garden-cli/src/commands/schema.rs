use garden_core::entities::{Location, Plant, Planting, Pot, Seed};
use garden_core::enums::EntityKind;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

/// Handle `grdn schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_enum::<EntityKind>(&args.entity, "entity")?;
    output(&entity_schema(kind)?, flags.format)
}

fn entity_schema(kind: EntityKind) -> anyhow::Result<serde_json::Value> {
    let schema = match kind {
        EntityKind::Location => schema_for!(Location),
        EntityKind::Pot => schema_for!(Pot),
        EntityKind::Plant => schema_for!(Plant),
        EntityKind::Seed => schema_for!(Seed),
        EntityKind::Planting => schema_for!(Planting),
    };
    Ok(serde_json::to_value(schema)?)
}
