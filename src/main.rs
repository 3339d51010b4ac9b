use anyhow::Result;
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

use house_rental::{House, RentalAgreement, RentalStore, StoreConfig, Tenant};

fn main() -> Result<()> {
    // Logs go to stderr so search output stays on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = house_rental::VERSION, "Starting house rental demo");

    let mut store = RentalStore::open(StoreConfig::default());

    store.add_house(House::new("H3", "Chennai", 40000.0, 2, "KUMUTHA"))?;
    store.add_house(House::new("H4", "Chennai", 30000.0, 2, "KUMAR"))?;

    store.register_tenant(Tenant::new("T1", "REENA", "123-456-7890", "Chennai"))?;
    store.register_tenant(Tenant::new("T2", "DIYA", "987-654-3210", "Mumbai"))?;

    let search_location = "Chennai";
    let max_price = 50000.0;

    let found = store.search_houses(search_location, max_price);
    println!("Found {} house(s):", found.len());
    for house in &found {
        println!("{}", house);
    }

    // Agreements are only built for display; they are never persisted
    if let (Some(tenant), Some(house)) = (store.tenants().first(), found.first()) {
        if let (Some(start), Some(end)) = (
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 12, 31),
        ) {
            let agreement = RentalAgreement::new(tenant, house, house.price() * 2.0, start, end);
            println!("{}", agreement);
        }
    }

    Ok(())
}
