/// Fail unless at least one update flag was given.
///
/// `flags` pairs each flag name with whether it was provided.
pub fn require_any(flags: &[(&str, bool)]) -> anyhow::Result<()> {
    if flags.iter().any(|(_, given)| *given) {
        return Ok(());
    }
    let names = flags
        .iter()
        .map(|(name, _)| format!("--{name}"))
        .collect::<Vec<_>>()
        .join(", ");
    anyhow::bail!("At least one of {names} must be provided")
}

/// Map a text flag to a nullable update: an empty value clears the field.
pub fn nullable(value: Option<&String>) -> Option<Option<String>> {
    value.map(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::{nullable, require_any};

    #[test]
    fn rejects_noop_update() {
        let err = require_any(&[("name", false)]).expect_err("should fail");
        assert!(err.to_string().contains("--name"));
    }

    #[test]
    fn accepts_update_with_any_field() {
        assert!(require_any(&[("brand", false), ("notes", true)]).is_ok());
    }

    #[test]
    fn empty_value_clears() {
        assert_eq!(nullable(Some(&String::from("  "))), Some(None));
        assert_eq!(
            nullable(Some(&String::from("Roma"))),
            Some(Some(String::from("Roma")))
        );
        assert_eq!(nullable(None), None);
    }
}
