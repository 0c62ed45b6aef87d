//! File-persisted timers: one 8 byte start instant per timer name.

pub mod clock;
pub mod format;
pub mod path;
pub mod store;

pub use self::format::Elapsed;
pub use self::store::TimerStore;
