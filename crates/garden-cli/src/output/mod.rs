use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Placeholder cell for absent values, matching record summaries.
const ABSENT: &str = "-";

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Lists become one row per record; a single record becomes key/value rows.
fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) => match items.iter().map(Value::as_object).collect::<Option<Vec<_>>>() {
            Some(records) => record_table(&records),
            None => {
                let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
                table::render_entity_table(&["value"], &rows, table_options())
            }
        },
        Value::Object(map) => {
            let rows = column_order(map.keys())
                .into_iter()
                .map(|key| vec![key.clone(), map.get(&key).map_or_else(|| ABSENT.to_string(), cell)])
                .collect::<Vec<_>>();
            table::render_entity_table(&["field", "value"], &rows, table_options())
        }
        scalar => table::render_entity_table(&["value"], &[vec![cell(scalar)]], table_options()),
    }
}

fn record_table(records: &[&Map<String, Value>]) -> String {
    let columns = column_order(records.iter().copied().flat_map(|record| record.keys()));
    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| record.get(column).map_or_else(|| ABSENT.to_string(), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let headers = columns.iter().map(String::as_str).collect::<Vec<_>>();
    table::render_entity_table(&headers, &rows, table_options())
}

/// `id` leads, the two timestamps trail, everything else keeps key order.
fn column_order<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<String> {
    const TRAILING: [&str; 2] = ["created_at", "updated_at"];
    let mut columns: Vec<String> = Vec::new();
    for key in keys {
        if !columns.contains(key) {
            columns.push(key.clone());
        }
    }
    columns.sort_by_key(|column| match column.as_str() {
        "id" => 0,
        c if TRAILING.contains(&c) => 2,
        _ => 1,
    });
    columns
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => ABSENT.to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
