mod ticker;

pub use ticker::TickScheduler;
