pub mod config;
pub mod error;
pub mod items;
pub mod marquee;
pub mod scheduler;

pub use config::{AppConfig, KeymapConfig, ThemeConfig, UiConfig};
pub use error::{Error, Result};
pub use marquee::{Direction, DisplayItem, FadeMaskColor, ItemId, Marquee, MarqueeEvent, MarqueeOptions};
pub use scheduler::TickScheduler;
