//! Terminal-cell sizes for the marquee engine.
//!
//! Horizontal items are as wide as their icon, text and trailing gap. Vertical
//! items take one row plus a blank row when a gap is configured.

use ratatui::layout::Rect;
use tickertape_core::marquee::{Measurements, Orientation, ResolvedContent};
use tickertape_core::DisplayItem;
use unicode_width::UnicodeWidthStr;

/// Visible text of an item, markup removed
pub fn item_text(item: &DisplayItem) -> String {
    ResolvedContent::from_content(&item.content).text()
}

/// Display width of icon, separator and text
pub fn label_width(item: &DisplayItem) -> u16 {
    let icon = item
        .icon
        .as_deref()
        .map(|icon| icon.width() + 1)
        .unwrap_or(0);
    let width = icon + item_text(item).width();
    width.min(u16::MAX as usize) as u16
}

/// Size of an item along the scroll axis, never zero
pub fn item_extent(item: &DisplayItem, orientation: Orientation, gap: u16) -> f32 {
    match orientation {
        Orientation::Horizontal => label_width(item).saturating_add(gap).max(1) as f32,
        Orientation::Vertical => {
            if gap > 0 {
                2.0
            } else {
                1.0
            }
        }
    }
}

/// Length of `area` along the scroll axis
pub fn viewport_extent(area: Rect, orientation: Orientation) -> f32 {
    match orientation {
        Orientation::Horizontal => area.width as f32,
        Orientation::Vertical => area.height as f32,
    }
}

/// Measurements for `items` in a viewport of `viewport` cells
pub fn measure_items(
    items: &[DisplayItem],
    orientation: Orientation,
    gap: u16,
    viewport: f32,
) -> Measurements {
    items.iter().fold(Measurements::new(viewport), |m, item| {
        m.with_size(item.id.clone(), item_extent(item, orientation, gap))
    })
}
