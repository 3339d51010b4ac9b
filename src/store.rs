// 🗄️ Rental Store - in-memory collections synced to flat files
//
// Two ordered sequences (houses, tenants), each backed by its own file.
// - open() loads both; a file that cannot be read leaves its sequence as-is
// - every add/register appends, then rewrites the whole backing file
// - no dedup, no uniqueness check on ids, no delete/update

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::entities::{House, Tenant};
use crate::query::HouseQuery;
use crate::records::{read_records, write_records, FlatRecord};

/// Owned store of houses and tenants. Pass by reference; not thread-safe.
#[derive(Debug)]
pub struct RentalStore {
    config: StoreConfig,
    houses: Vec<House>,
    tenants: Vec<Tenant>,
}

impl RentalStore {
    /// Open a store and load both files. Never fails: a missing or
    /// unreadable file leaves that collection empty.
    pub fn open(config: StoreConfig) -> Self {
        let mut store = RentalStore {
            config,
            houses: Vec::new(),
            tenants: Vec::new(),
        };

        store.load_houses();
        store.load_tenants();
        store
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    pub fn tenants(&self) -> &[Tenant] {
        &self.tenants
    }

    // ========================================================================
    // WRITES
    // ========================================================================

    /// Append a house and rewrite the houses file.
    ///
    /// On error the house stays in memory but the file may be stale.
    pub fn add_house(&mut self, house: House) -> Result<()> {
        self.houses.push(house);
        save(&self.config.houses_path, &self.houses)
    }

    /// Append a tenant and rewrite the tenants file.
    ///
    /// On error the tenant stays in memory but the file may be stale.
    pub fn register_tenant(&mut self, tenant: Tenant) -> Result<()> {
        self.tenants.push(tenant);
        save(&self.config.tenants_path, &self.tenants)
    }

    // ========================================================================
    // LOADS
    // ========================================================================

    /// Replace the in-memory houses with the contents of the houses file.
    /// Keeps the current houses if the file cannot be read.
    pub fn load_houses(&mut self) {
        if let Some(houses) = load(&self.config.houses_path) {
            self.houses = houses;
        }
    }

    /// Replace the in-memory tenants with the contents of the tenants file.
    /// Keeps the current tenants if the file cannot be read.
    pub fn load_tenants(&mut self) {
        if let Some(tenants) = load(&self.config.tenants_path) {
            self.tenants = tenants;
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Houses at exactly `location` priced at or below `max_price`, in
    /// insertion order
    pub fn search_houses(&self, location: &str, max_price: f64) -> Vec<&House> {
        self.search(&HouseQuery::new(location, max_price))
    }

    pub fn search(&self, query: &HouseQuery) -> Vec<&House> {
        query.apply(&self.houses)
    }
}

fn load<T: FlatRecord>(path: &Path) -> Option<Vec<T>> {
    match read_records::<T>(path) {
        Ok(outcome) => {
            info!(
                kind = T::KIND,
                path = %path.display(),
                loaded = outcome.records.len(),
                skipped = outcome.skipped,
                "Loaded records"
            );
            Some(outcome.records)
        }
        Err(err) => {
            warn!(kind = T::KIND, path = %path.display(), "Error loading records: {:#}", err);
            None
        }
    }
}

fn save<T: FlatRecord>(path: &Path, records: &[T]) -> Result<()> {
    write_records(path, records)?;
    debug!(kind = T::KIND, path = %path.display(), count = records.len(), "Rewrote file");
    Ok(())
}
