// --- File: crates/roomly_store/src/lib.rs ---
// Declare modules within this crate
pub mod error;
pub mod memory;
#[cfg(test)]
mod memory_test;
pub mod repository;
pub mod seed;
pub mod stats;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use repository::{
    BookingFilter, BookingRepository, RoomFilter, RoomRepository, UserRecord, UserRepository,
};
pub use stats::{AdminStats, DashboardStats};
