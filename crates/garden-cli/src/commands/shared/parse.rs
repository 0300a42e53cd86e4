use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value using serde deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

/// Parse an optional date argument.
pub fn parse_opt_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| parse_date(value, field)).transpose()
}

/// Parse an update flag for a nullable number: an empty value clears it.
pub fn parse_nullable<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<Option<T>>>
where
    T: FromStr,
    T::Err: Display,
{
    raw.map(|value| {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        value
            .parse::<T>()
            .map(Some)
            .map_err(|error| anyhow::anyhow!("invalid {field} '{value}': {error}"))
    })
    .transpose()
}

/// Parse an update flag for a nullable date: an empty value clears it.
pub fn parse_nullable_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<Option<NaiveDate>>> {
    raw.map(|value| {
        if value.trim().is_empty() {
            Ok(None)
        } else {
            parse_date(value, field).map(Some)
        }
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use garden_core::enums::EntityKind;
    use pretty_assertions::assert_eq;

    use super::{parse_date, parse_enum, parse_nullable, parse_nullable_date, parse_opt_date};

    #[test]
    fn parses_snake_case_enum() {
        let kind: EntityKind = parse_enum("planting", "entity").expect("entity should parse");
        assert_eq!(kind, EntityKind::Planting);
    }

    #[test]
    fn enum_parse_ignores_case() {
        let kind: EntityKind = parse_enum("Seed", "entity").expect("entity should parse");
        assert_eq!(kind, EntityKind::Seed);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<EntityKind>("shrub", "entity").expect_err("should fail");
        assert!(err.to_string().contains("invalid entity 'shrub'"));
    }

    #[test]
    fn parses_iso_date() {
        let date = parse_date("2026-04-15", "seeding_date").expect("date should parse");
        assert_eq!(date.to_string(), "2026-04-15");
    }

    #[test]
    fn rejects_other_date_formats() {
        let err = parse_date("04/15/2026", "seeding_date").expect_err("should fail");
        assert!(err.to_string().contains("expected YYYY-MM-DD"));
    }

    #[test]
    fn optional_date_passes_none_through() {
        assert_eq!(parse_opt_date(None, "purchase_date").expect("none is fine"), None);
    }

    #[test]
    fn nullable_number_empty_clears() {
        assert_eq!(parse_nullable::<f64>(Some(""), "price").expect("empty clears"), Some(None));
        assert_eq!(parse_nullable::<f64>(Some("2.5"), "price").expect("parses"), Some(Some(2.5)));
        assert_eq!(parse_nullable::<i16>(None, "quantity").expect("absent"), None);
    }

    #[test]
    fn nullable_small_int_keeps_range_check() {
        let err = parse_nullable::<i16>(Some("40000"), "quantity").expect_err("out of range");
        assert!(err.to_string().contains("invalid quantity '40000'"));
    }

    #[test]
    fn nullable_date_empty_clears() {
        assert_eq!(
            parse_nullable_date(Some(" "), "seeding_date").expect("blank clears"),
            Some(None)
        );
        assert!(parse_nullable_date(Some("15/04/2026"), "seeding_date").is_err());
    }
}
