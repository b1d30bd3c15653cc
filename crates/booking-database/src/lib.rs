//! # booking-database
//!
//! PostgreSQL connection management, the [`BookingStore`] data-access
//! seam, and its two implementations: the sqlx-backed
//! [`BookingRepository`] and the process-local [`MemoryBookingStore`].

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

use std::sync::Arc;

use booking_core::config::{DatabaseConfig, StoreProvider};
use booking_core::result::AppResult;
use tracing::{info, warn};

pub use connection::DatabasePool;
pub use memory::MemoryBookingStore;
pub use repositories::BookingRepository;
pub use store::BookingStore;

/// Build the store selected by `config.provider`.
///
/// For PostgreSQL this connects the pool and, when enabled, applies
/// pending migrations.
pub async fn build_store(config: &DatabaseConfig) -> AppResult<Arc<dyn BookingStore>> {
    match config.provider {
        StoreProvider::Postgres => {
            let pool = DatabasePool::connect(config).await?;
            if config.run_migrations {
                migration::run_migrations(pool.pool()).await?;
            }
            Ok(Arc::new(BookingRepository::new(pool.into_pool())))
        }
        StoreProvider::Memory => {
            warn!("Using in-memory booking store; data will not survive a restart");
            let store = MemoryBookingStore::new();
            info!("In-memory booking store ready");
            Ok(Arc::new(store))
        }
    }
}
