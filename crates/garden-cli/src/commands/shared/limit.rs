/// Row cap for a list command: the subcommand's own `--limit`, then the
/// global `--limit`, then `general.default_limit` from config.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn precedence_runs_local_global_config() {
        let cases = [
            (Some(3), Some(8), 3),
            (None, Some(8), 8),
            (None, None, 20),
        ];
        for (local, global, expected) in cases {
            assert_eq!(effective_limit(local, global, 20), expected, "{local:?}/{global:?}");
        }
    }
}
