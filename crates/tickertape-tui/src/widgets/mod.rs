mod marquee;
mod status_bar;

pub use marquee::{hit_test_cell, render_lines, MarqueeView, MarqueeWidget};
pub use status_bar::StatusBarWidget;
