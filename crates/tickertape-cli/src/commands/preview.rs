use anyhow::Result;

use tickertape_core::{items, AppConfig, Marquee};
use tickertape_tui::{
    load_theme,
    measure::{label_width, measure_items},
    widgets::{render_lines, MarqueeView},
};

/// Print `ticks` frames of the ticker as plain text
pub fn run(config: &AppConfig, ticks: usize, size: u16) -> Result<()> {
    let items = match config.items_path() {
        Some(path) => items::load_items(&path)?,
        None => items::demo_items(),
    };
    let theme = load_theme(&config.ui.theme);

    let direction = config.marquee.direction;
    let orientation = direction.orientation();
    let size = size.max(1);
    let (width, height) = if direction.is_horizontal() {
        (size, 1)
    } else {
        // One cell of padding on both sides of the widest label
        let widest = items.iter().map(label_width).max().unwrap_or(0);
        (widest.saturating_add(2).max(3), size)
    };

    let measurements = measure_items(&items, orientation, config.ui.item_gap, size as f32);
    let mut marquee = Marquee::new(items, config.marquee.clone());
    marquee.measure(measurements);

    let rule = "-".repeat(width as usize);
    for tick in 0..ticks {
        let presentation = marquee.present();
        let lines = render_lines(MarqueeView::new(&presentation, &theme), width, height);

        if direction.is_horizontal() {
            println!("{:>4} |{}|", tick, lines.concat());
        } else {
            println!("tick {}", tick);
            println!("+{}+", rule);
            for line in lines {
                println!("|{}|", line);
            }
            println!("+{}+", rule);
        }

        marquee.tick();
    }

    Ok(())
}
