use anyhow::{Context, Result};
use initiative_wizard::wizard::{FieldId, FormPatch};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Build a single-field patch from a command-line value.
pub fn patch_for_field(field: FieldId, raw: &str) -> Result<FormPatch> {
    let value = match field {
        FieldId::Title
        | FieldId::Motto
        | FieldId::MainVisual
        | FieldId::Description
        | FieldId::Problem
        | FieldId::Solution => Value::String(raw.to_string()),
        FieldId::Tags | FieldId::CoFounderEmails => comma_list(raw),
        _ => serde_json::from_str(raw)
            .with_context(|| format!("{} expects a JSON value", field.label()))?,
    };

    let mut object = serde_json::Map::new();
    object.insert(camel_key(field), value);
    serde_json::from_value(Value::Object(object))
        .with_context(|| format!("invalid value for {}", field.label()))
}

/// Read a partial form from a JSON file.
pub fn patch_from_file(path: &Path) -> Result<FormPatch> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed parsing {}", path.display()))
}

fn comma_list(raw: &str) -> Value {
    if let Ok(list @ Value::Array(_)) = serde_json::from_str::<Value>(raw) {
        return list;
    }
    Value::Array(
        raw.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| Value::String(item.to_string()))
            .collect(),
    )
}

fn camel_key(field: FieldId) -> String {
    let snake = field.to_string();
    let mut key = String::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            key.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            key.push(c);
        }
    }
    key
}
