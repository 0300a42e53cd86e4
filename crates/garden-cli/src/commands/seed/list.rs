use chrono::Utc;
use garden_core::entities::Seed;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    include_disposed: bool,
    expired: bool,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.default_limit());
    let fetch_limit = if expired {
        limit.saturating_mul(5).min(500)
    } else {
        limit
    };

    let mut seeds: Vec<Seed> = ctx.service.list_seeds(include_disposed, fetch_limit).await?;
    if expired {
        let today = Utc::now().date_naive();
        seeds.retain(|seed| seed.is_expired(today));
    }
    seeds.truncate(usize::try_from(limit)?);

    output(&seeds, flags.format)
}
