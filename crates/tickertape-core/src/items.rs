//! Loading ticker items from JSON or TOML files.
//!
//! Each entry may be a bare string, an object with `text` or `markup` (plus
//! optional `id`, `color`, `icon`), or anything else, which is kept as an
//! opaque payload and shown through its JSON form.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::marquee::{DisplayItem, IdAllocator, ItemContent, ItemId, SequentialIds};
use crate::{Error, Result};

#[derive(Deserialize)]
struct TomlItems {
    #[serde(default)]
    items: Vec<toml::Value>,
}

/// Load items from `path`, picking the format from its extension
pub fn load_items(path: &Path) -> Result<Vec<DisplayItem>> {
    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let values = match extension.as_deref() {
        Some("toml") => parse_toml(&content).map_err(|message| Error::ItemsFile {
            path: path.to_path_buf(),
            message,
        })?,
        Some("json") | None => parse_json(&content).map_err(|message| Error::ItemsFile {
            path: path.to_path_buf(),
            message,
        })?,
        Some(other) => {
            return Err(Error::ItemsFile {
                path: path.to_path_buf(),
                message: format!("unsupported extension '{}', expected .json or .toml", other),
            })
        }
    };

    let items = items_from_values(values, &mut SequentialIds::default());
    debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

fn parse_json(content: &str) -> std::result::Result<Vec<Value>, String> {
    match serde_json::from_str::<Value>(content).map_err(|e| e.to_string())? {
        Value::Array(values) => Ok(values),
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(values)) => Ok(values),
            _ => Err("expected an array or an object with an 'items' array".to_string()),
        },
        _ => Err("expected an array of items".to_string()),
    }
}

fn parse_toml(content: &str) -> std::result::Result<Vec<Value>, String> {
    let doc: TomlItems = toml::from_str(content).map_err(|e| e.to_string())?;
    doc.items
        .into_iter()
        .map(|v| serde_json::to_value(v).map_err(|e| e.to_string()))
        .collect()
}

/// Turn loosely shaped values into display items with unique ids
///
/// Missing ids, duplicates and ids equal to the filler sentinel are replaced
/// with fresh ones from `ids`.
pub fn items_from_values(values: Vec<Value>, ids: &mut SequentialIds) -> Vec<DisplayItem> {
    // Reserve every numeric id up front so generated ones never collide
    for value in &values {
        if let Some(id) = value.get("id").and_then(parse_id) {
            ids.reserve(&id);
        }
    }

    let mut seen = HashSet::new();
    values
        .into_iter()
        .map(|value| {
            let (mut item, id) = item_from_value(value);
            let id = match id.filter(|id| !id.is_filler()) {
                Some(id) if !seen.contains(&id) => id,
                Some(id) => {
                    warn!("Duplicate item id '{}', assigning a new one", id);
                    ids.allocate()
                }
                None => ids.allocate(),
            };
            seen.insert(id.clone());
            item.id = id;
            item
        })
        .collect()
}

fn parse_id(value: &Value) -> Option<ItemId> {
    match value {
        Value::Number(n) => n.as_u64().map(ItemId::Num),
        Value::String(s) if !s.is_empty() => Some(ItemId::Text(s.clone())),
        _ => None,
    }
}

/// Build an item with a placeholder id, returning the id it asked for
fn item_from_value(value: Value) -> (DisplayItem, Option<ItemId>) {
    let placeholder = ItemId::Num(0);
    let requested = value.get("id").and_then(parse_id);

    let item = match value {
        Value::String(text) => DisplayItem::text(placeholder, text),
        Value::Object(ref map) if map.contains_key("text") || map.contains_key("markup") => {
            let content = match (map.get("markup"), map.get("text")) {
                (Some(Value::String(markup)), _) => ItemContent::Markup(markup.clone()),
                (_, Some(Value::String(text))) => ItemContent::Text(text.clone()),
                (Some(other), _) | (_, Some(other)) => ItemContent::Text(other.to_string()),
                (None, None) => ItemContent::Text(String::new()),
            };
            DisplayItem {
                id: placeholder,
                content,
                color: map
                    .get("color")
                    .and_then(Value::as_u64)
                    .and_then(|c| u8::try_from(c).ok()),
                icon: map.get("icon").and_then(Value::as_str).map(str::to_string),
            }
        }
        other => DisplayItem {
            id: placeholder,
            content: ItemContent::Payload(other),
            color: None,
            icon: None,
        },
    };
    (item, requested)
}

/// Items shown when no item file is configured
pub fn demo_items() -> Vec<DisplayItem> {
    vec![
        DisplayItem::markup(1, "**Tickertape** scrolling in your terminal").with_icon("◆"),
        DisplayItem::text(2, "Hover an item to pause it").with_color(1),
        DisplayItem::markup(3, "Press `space` to pause, `+`/`-` to change speed").with_color(2),
        DisplayItem::text(4, "Arrow keys switch direction").with_color(3).with_icon("↻"),
        DisplayItem::markup(5, "Press `f` to cycle the _fade mask_").with_color(4),
        DisplayItem::text(6, "Items come from a JSON or TOML file").with_color(5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_shapes() {
        let values = vec![
            json!("plain"),
            json!({"id": 10, "text": "with id", "color": 2, "icon": "★"}),
            json!({"markup": "**bold**"}),
            json!(42),
        ];
        let items = items_from_values(values, &mut SequentialIds::default());

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].content, ItemContent::Text("plain".into()));
        assert_eq!(items[1].id, ItemId::Num(10));
        assert_eq!(items[1].color, Some(2));
        assert_eq!(items[1].icon.as_deref(), Some("★"));
        assert_eq!(items[2].content, ItemContent::Markup("**bold**".into()));
        assert_eq!(items[3].content, ItemContent::Payload(json!(42)));
        assert_eq!(items[3].raw_text(), "42");
    }

    #[test]
    fn test_generated_ids_avoid_reserved() {
        let values = vec![json!("a"), json!({"id": 0, "text": "b"}), json!("c")];
        let items = items_from_values(values, &mut SequentialIds::default());
        let ids: Vec<ItemId> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec![ItemId::Num(1), ItemId::Num(0), ItemId::Num(2)]);
    }

    #[test]
    fn test_duplicate_and_sentinel_ids_are_replaced() {
        let values = vec![
            json!({"id": "x", "text": "one"}),
            json!({"id": "x", "text": "two"}),
            json!({"id": crate::marquee::FILLER_ID, "text": "three"}),
        ];
        let items = items_from_values(values, &mut SequentialIds::default());
        assert_eq!(items[0].id, ItemId::from("x"));
        assert_eq!(items[1].id, ItemId::Num(0));
        assert_eq!(items[2].id, ItemId::Num(1));
    }

    #[test]
    fn test_parse_json_wrapped_object() {
        let values = parse_json(r#"{"items": ["a", "b"]}"#).unwrap();
        assert_eq!(values.len(), 2);
        assert!(parse_json(r#"{"nope": 1}"#).is_err());
    }

    #[test]
    fn test_parse_toml_items() {
        let values = parse_toml(
            r#"
            items = [
                "first",
                { id = 3, text = "second", color = 1 },
            ]
            "#,
        )
        .unwrap();
        let items = items_from_values(values, &mut SequentialIds::default());
        assert_eq!(items[0].raw_text(), "first");
        assert_eq!(items[1].id, ItemId::Num(3));
        assert_eq!(items[1].color, Some(1));
    }

    #[test]
    fn test_load_items_rejects_unknown_extension() {
        let dir = std::env::temp_dir().join(format!("tickertape-items-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("items.yaml");
        std::fs::write(&path, "- a").unwrap();
        assert!(matches!(load_items(&path), Err(Error::ItemsFile { .. })));

        let path = dir.join("items.json");
        std::fs::write(&path, r#"["a", "b", "c"]"#).unwrap();
        assert_eq!(load_items(&path).unwrap().len(), 3);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_demo_items_have_unique_ids() {
        let items = demo_items();
        let ids: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), items.len());
    }
}
