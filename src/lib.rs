// House Rental Registry - Core Library
// Houses and tenants kept in flat comma-delimited files, with a simple search

pub mod config;
pub mod entities;
pub mod query;
pub mod records;
pub mod store;

// Re-export commonly used types
pub use config::StoreConfig;
pub use entities::{House, RentalAgreement, Tenant};
pub use query::HouseQuery;
pub use records::{format_price, FlatRecord};
pub use store::RentalStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
