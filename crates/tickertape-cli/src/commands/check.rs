use std::path::Path;

use anyhow::Result;

use tickertape_core::items::load_items;
use tickertape_tui::measure::item_text;

pub fn run(file: &Path) -> Result<()> {
    let items = load_items(file)?;

    if items.is_empty() {
        println!("{}: no items", file.display());
        return Ok(());
    }

    println!("{}: {} items\n", file.display(), items.len());

    for item in &items {
        let icon = item
            .icon
            .as_deref()
            .map(|icon| format!("{} ", icon))
            .unwrap_or_default();
        let color = item
            .color
            .map(|color| format!(" [color {}]", color))
            .unwrap_or_default();

        println!("  {:>4}  {}{}{}", item.id.to_string(), icon, item_text(item), color);
    }

    Ok(())
}
