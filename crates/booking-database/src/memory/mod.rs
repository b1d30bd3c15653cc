//! Process-local booking store.

pub mod store;

pub use store::MemoryBookingStore;
