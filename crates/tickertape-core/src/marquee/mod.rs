//! Scrolling ticker engine
//!
//! Takes an ordered list of [`DisplayItem`]s and scrolls them through a
//! fixed viewport in one of four directions, recycling each entry to the far
//! end of the belt once it has fully left the view.
//!
//! # Layers
//! - `direction`, `item`, `scroll`, `markup` - plain data
//! - `sequence` - the conveyor belt with its single filler entry
//! - `measure` - sizes reported by the renderer, filler sizing, resize debounce
//! - `engine` - the per-tick transition
//! - `interaction` - hover/pause flags and events
//! - `presentation` - what a renderer draws
//! - `controller` - [`Marquee`], the component a host talks to
//!
//! # Usage
//!
//! ```ignore
//! use tickertape_core::marquee::{DisplayItem, Marquee, MarqueeOptions, Measurements};
//!
//! let mut marquee = Marquee::new(
//!     vec![DisplayItem::text(1, "first"), DisplayItem::text(2, "second")],
//!     MarqueeOptions::default(),
//! );
//! marquee.measure(Measurements::new(20.0).with_size(1, 6.0).with_size(2, 7.0));
//!
//! // Once per tick from the scheduler
//! marquee.tick();
//! let frame = marquee.present();
//! ```

pub mod controller;
pub mod direction;
pub mod engine;
pub mod interaction;
pub mod item;
pub mod markup;
pub mod measure;
pub mod options;
pub mod presentation;
pub mod scroll;
pub mod sequence;

pub use controller::Marquee;
pub use direction::{Direction, Edge, FadeMaskColor, Orientation};
pub use engine::{MarqueeState, Phase};
pub use interaction::{InteractionState, MarqueeEvent};
pub use item::{DisplayItem, Entry, Filler, IdAllocator, ItemContent, ItemId, SequentialIds, FILLER_ID};
pub use measure::{Measurements, ResizeDebouncer};
pub use options::{ExtraClasses, MarqueeOptions};
pub use presentation::{ContainerClass, ItemView, ItemViewKind, Placement, Presentation, ResolvedContent};
pub use scroll::ScrollState;
pub use sequence::Sequence;
