use serde::{Deserialize, Serialize};
use tracing::warn;

/// Sentinel id carried by the filler entry
pub const FILLER_ID: &str = "__tickertape_filler__";

/// Stable identity of a display item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Num(u64),
    Text(String),
}

impl ItemId {
    pub fn filler() -> Self {
        ItemId::Text(FILLER_ID.to_string())
    }

    pub fn is_filler(&self) -> bool {
        matches!(self, ItemId::Text(s) if s == FILLER_ID)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::Num(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId::Num(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

/// What an item shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemContent {
    /// Plain text
    Text(String),
    /// Inline markup (`**bold**`, `_italic_`, `` `code` ``)
    Markup(String),
    /// Any other value, rendered through its JSON form
    Payload(serde_json::Value),
}

/// One ticker entry supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub id: ItemId,
    pub content: ItemContent,
    /// Discrete style category, mapped to a palette slot by the renderer
    #[serde(default)]
    pub color: Option<u8>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl DisplayItem {
    pub fn text(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: ItemContent::Text(text.into()),
            color: None,
            icon: None,
        }
    }

    pub fn markup(id: impl Into<ItemId>, markup: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: ItemContent::Markup(markup.into()),
            color: None,
            icon: None,
        }
    }

    pub fn with_color(mut self, color: u8) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Text with any markup delimiters left in place
    pub fn raw_text(&self) -> String {
        match &self.content {
            ItemContent::Text(text) | ItemContent::Markup(text) => text.clone(),
            ItemContent::Payload(serde_json::Value::String(s)) => s.clone(),
            ItemContent::Payload(value) => value.to_string(),
        }
    }
}

/// Synthetic spacer entry with no visible content
#[derive(Debug, Clone, PartialEq)]
pub struct Filler {
    /// Extent along the scroll axis; the cross-axis extent is always zero
    pub size: f32,
}

impl Filler {
    pub fn id(&self) -> ItemId {
        ItemId::filler()
    }
}

/// A slot on the conveyor belt
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Item(DisplayItem),
    Filler(Filler),
}

impl Entry {
    pub fn id(&self) -> ItemId {
        match self {
            Entry::Item(item) => item.id.clone(),
            Entry::Filler(filler) => filler.id(),
        }
    }

    #[inline]
    pub fn is_filler(&self) -> bool {
        matches!(self, Entry::Filler(_))
    }

    pub fn as_item(&self) -> Option<&DisplayItem> {
        match self {
            Entry::Item(item) => Some(item),
            Entry::Filler(_) => None,
        }
    }
}

/// Source of ids for items that arrive without one
pub trait IdAllocator {
    fn allocate(&mut self) -> ItemId;
}

/// Hands out increasing numeric ids, owned per loader instead of shared globally
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Make sure future ids never collide with `id`
    pub fn reserve(&mut self, id: &ItemId) {
        if let ItemId::Num(n) = id {
            self.next = self.next.max(n.saturating_add(1));
        }
    }
}

impl IdAllocator for SequentialIds {
    fn allocate(&mut self) -> ItemId {
        let id = ItemId::Num(self.next);
        self.next += 1;
        id
    }
}

/// Give every item that claims the filler's id a fresh numeric id
///
/// New ids continue after the largest numeric id in `items`, so the result is
/// the same each time for the same list.
pub fn reassign_filler_ids(items: &mut [DisplayItem]) {
    if !items.iter().any(|item| item.id.is_filler()) {
        return;
    }
    let mut ids = SequentialIds::default();
    for item in items.iter() {
        ids.reserve(&item.id);
    }
    for item in items.iter_mut().filter(|item| item.id.is_filler()) {
        let id = ids.allocate();
        warn!(%id, "Item uses the reserved filler id, reassigning");
        item.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filler_id_is_sentinel() {
        let entry = Entry::Filler(Filler { size: 0.0 });
        assert!(entry.id().is_filler());
        assert!(!ItemId::from("news").is_filler());
    }

    #[test]
    fn test_reassign_filler_ids() {
        let mut items = vec![
            DisplayItem::text(4, "a"),
            DisplayItem::text(FILLER_ID, "b"),
            DisplayItem::text("c", "c"),
            DisplayItem::text(FILLER_ID, "d"),
        ];
        reassign_filler_ids(&mut items);
        let ids: Vec<ItemId> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(
            ids,
            vec![ItemId::Num(4), ItemId::Num(5), ItemId::from("c"), ItemId::Num(6)]
        );
    }

    #[test]
    fn test_sequential_ids_skip_reserved() {
        let mut ids = SequentialIds::default();
        ids.reserve(&ItemId::Num(7));
        assert_eq!(ids.allocate(), ItemId::Num(8));
        assert_eq!(ids.allocate(), ItemId::Num(9));
    }

    #[test]
    fn test_raw_text_of_payload() {
        let item = DisplayItem {
            id: ItemId::Num(1),
            content: ItemContent::Payload(serde_json::json!({"price": 42})),
            color: None,
            icon: None,
        };
        assert_eq!(item.raw_text(), r#"{"price":42}"#);
    }
}
