//! Maps a marquee snapshot onto something a renderer can draw.

use super::direction::{Direction, Edge, FadeMaskColor, Orientation};
use super::engine::MarqueeState;
use super::item::{DisplayItem, Entry, ItemContent, ItemId};
use super::markup::{self, Segment};
use super::measure::Measurements;
use super::options::{ExtraClasses, MarqueeOptions};

/// Which edge carries the live offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionStyle {
    pub edge: Edge,
    pub offset: f32,
}

impl PositionStyle {
    /// Value for `edge`; every edge but the live one rests at zero
    pub fn value(&self, edge: Edge) -> f32 {
        if edge == self.edge {
            self.offset
        } else {
            0.0
        }
    }
}

/// Resolved item content
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedContent {
    Plain(String),
    Rich(Vec<Segment>),
}

impl ResolvedContent {
    pub fn from_content(content: &ItemContent) -> Self {
        match content {
            ItemContent::Text(text) => ResolvedContent::Plain(text.clone()),
            ItemContent::Markup(text) => ResolvedContent::Rich(markup::parse(text)),
            ItemContent::Payload(serde_json::Value::String(s)) => ResolvedContent::Plain(s.clone()),
            ItemContent::Payload(value) => ResolvedContent::Plain(value.to_string()),
        }
    }

    /// Visible text without styling
    pub fn text(&self) -> String {
        match self {
            ResolvedContent::Plain(text) => text.clone(),
            ResolvedContent::Rich(segments) => segments.iter().map(|s| s.text.as_str()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemViewKind {
    Item {
        content: ResolvedContent,
        color: Option<u8>,
        icon: Option<String>,
    },
    Filler {
        size: f32,
    },
}

/// View model of one belt entry, keyed by its stable id
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub key: ItemId,
    pub index: usize,
    pub kind: ItemViewKind,
}

impl ItemView {
    pub fn from_entry(index: usize, entry: &Entry) -> Self {
        let kind = match entry {
            Entry::Item(item) => Self::item_kind(item),
            Entry::Filler(filler) => ItemViewKind::Filler { size: filler.size },
        };
        Self {
            key: entry.id(),
            index,
            kind,
        }
    }

    fn item_kind(item: &DisplayItem) -> ItemViewKind {
        ItemViewKind::Item {
            content: ResolvedContent::from_content(&item.content),
            color: item.color,
            icon: item.icon.clone(),
        }
    }

    pub fn is_filler(&self) -> bool {
        matches!(self.kind, ItemViewKind::Filler { .. })
    }

    /// Fillers are drawn fully transparent
    pub fn opacity(&self) -> f32 {
        if self.is_filler() {
            0.0
        } else {
            1.0
        }
    }

    pub fn is_interactive(&self) -> bool {
        !self.is_filler()
    }

    /// Width and height of a filler: only the scroll axis is non-zero
    pub fn filler_extent(&self, orientation: Orientation) -> Option<(f32, f32)> {
        match self.kind {
            ItemViewKind::Filler { size } => Some(match orientation {
                Orientation::Horizontal => (size, 0.0),
                Orientation::Vertical => (0.0, size),
            }),
            ItemViewKind::Item { .. } => None,
        }
    }
}

/// Sizing rule for the viewport's height
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportSizing {
    Fixed(f32),
    Min(f32),
    Auto,
}

/// Container description: orientation, fade overlay, sizing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerClass {
    pub orientation: Orientation,
    /// Active fade color, `None` when no overlay is drawn
    pub fade: Option<FadeMaskColor>,
    pub sizing: ViewportSizing,
}

impl ContainerClass {
    pub fn from_options(options: &MarqueeOptions) -> Self {
        let fade = if options.apply_fade_mask && options.fade_mask_color != FadeMaskColor::None {
            Some(options.fade_mask_color)
        } else {
            None
        };
        let sizing = match (options.viewport_height, options.min_viewport_height) {
            (Some(height), _) => ViewportSizing::Fixed(height),
            (None, Some(min)) => ViewportSizing::Min(min),
            (None, None) => ViewportSizing::Auto,
        };
        Self {
            orientation: options.direction.orientation(),
            fade,
            sizing,
        }
    }

    /// Space separated class list, e.g. `marquee-container horizontal fade-mask-white`
    pub fn class_name(&self) -> String {
        let mut classes = vec!["marquee-container".to_string()];
        if self.orientation == Orientation::Horizontal {
            classes.push("horizontal".to_string());
        }
        if let Some(fade) = self.fade {
            classes.push(format!("fade-mask-{}", fade.name()));
        }
        classes.join(" ")
    }
}

fn with_extra(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|e| !e.is_empty()) {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

/// Where an entry sits along the scroll axis, relative to the viewport's top/left
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub key: ItemId,
    pub start: f32,
    pub size: f32,
    pub is_filler: bool,
}

impl Placement {
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.size
    }

    /// Whether any part overlaps a viewport of `viewport` units
    pub fn is_visible(&self, viewport: f32) -> bool {
        self.size > 0.0 && self.end() > 0.0 && self.start < viewport
    }

    pub fn contains(&self, position: f32) -> bool {
        position >= self.start && position < self.end()
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub direction: Direction,
    pub position: PositionStyle,
    pub container: ContainerClass,
    pub items: Vec<ItemView>,
    pub placements: Vec<Placement>,
    pub viewport: f32,
    pub classes: ExtraClasses,
}

impl Presentation {
    /// Real item under `position` along the scroll axis
    pub fn hit_test(&self, position: f32) -> Option<usize> {
        self.placements
            .iter()
            .find(|p| !p.is_filler && p.contains(position))
            .map(|p| p.index)
    }

    /// Placements that overlap the viewport
    pub fn visible(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter().filter(|p| p.is_visible(self.viewport))
    }

    pub fn item(&self, index: usize) -> Option<&ItemView> {
        self.items.get(index)
    }

    /// Container classes followed by the caller's container class
    pub fn container_class_name(&self) -> String {
        with_extra(&self.container.class_name(), self.classes.container.as_deref())
    }

    /// Classes of the strip that carries the offset
    pub fn marquee_class_name(&self) -> String {
        with_extra("marquee", self.classes.marquee.as_deref())
    }

    /// Classes of one entry; the filler adds `marquee-dummy-item`
    pub fn item_class_name(&self, view: &ItemView) -> String {
        let base = if view.is_filler() {
            "marquee-item marquee-dummy-item"
        } else {
            "marquee-item"
        };
        with_extra(base, self.classes.item.as_deref())
    }
}

/// Lay out the belt for the current snapshot
pub fn present(state: &MarqueeState, options: &MarqueeOptions, measurements: &Measurements) -> Presentation {
    let direction = options.direction;
    let offset = state.scroll.live(direction);
    let viewport = measurements.viewport_size();

    let items: Vec<ItemView> = state
        .sequence
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| ItemView::from_entry(index, entry))
        .collect();

    let sizes: Vec<f32> = state
        .sequence
        .entries()
        .iter()
        .map(|entry| measurements.entry_size(entry))
        .collect();
    let total: f32 = sizes.iter().sum();

    // Back-anchored content hangs from the bottom/right edge
    let origin = if direction.recycles_from_front() {
        offset
    } else {
        viewport - offset - total
    };

    let mut cursor = origin;
    let placements = state
        .sequence
        .entries()
        .iter()
        .zip(sizes)
        .enumerate()
        .map(|(index, (entry, size))| {
            let placement = Placement {
                index,
                key: entry.id(),
                start: cursor,
                size,
                is_filler: entry.is_filler(),
            };
            cursor += size;
            placement
        })
        .collect();

    Presentation {
        direction,
        position: PositionStyle {
            edge: direction.edge(),
            offset,
        },
        container: ContainerClass::from_options(options),
        items,
        placements,
        viewport,
        classes: options.classes.clone(),
    }
}
