//! datagen: headless dataset runner for the aseguradora tables.
//!
//! Usage:
//!   datagen --seed 42 --clients 500 --policies 800 --claims 250 --data-dir ./datos
//!   datagen --load --data-dir ./datos
//!
//! Without --load, a fresh dataset is generated and saved. With
//! --load, the persisted layout is used when readable; otherwise a
//! fresh dataset is generated (and saved) as a reported fallback.

use anyhow::Result;
use aseguradora_core::{
    config::GeneratorConfig,
    csv_store::CsvStore,
    generator::Dataset,
    provider::{DataSource, DatasetProvider},
    summary::DatasetSummary,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let clients = parse_arg(&args, "--clients", 500usize);
    let policies = parse_arg(&args, "--policies", 800usize);
    let claims = parse_arg(&args, "--claims", 250usize);
    let load = args.iter().any(|a| a == "--load");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./datos");

    println!("Aseguradora — datagen");
    println!("  seed:      {seed}");
    println!("  clients:   {clients}");
    println!("  policies:  {policies}");
    println!("  claims:    {claims}");
    println!("  data_dir:  {data_dir}");
    println!();

    let config = GeneratorConfig {
        clients,
        policies,
        claims,
        seed,
        ..GeneratorConfig::default()
    };

    let store = CsvStore::new(data_dir);
    let dataset = if load {
        let mut provider = DatasetProvider::new(CsvStore::new(data_dir), config);
        let (dataset, source) = provider.provide()?;
        let dataset = dataset.clone();
        match source {
            DataSource::LoadedFromDisk => println!("Loaded persisted dataset from {data_dir}"),
            DataSource::GeneratedFallback => {
                println!("Persisted layout unusable — generated a fresh dataset instead");
                store.save(&dataset)?;
            }
        }
        dataset
    } else {
        let dataset = Dataset::generate(&config)?;
        store.save(&dataset)?;
        dataset
    };

    print_summary(&DatasetSummary::from_dataset(&dataset), data_dir);
    Ok(())
}

fn print_summary(summary: &DatasetSummary, data_dir: &str) {
    println!("=== DATASET SUMMARY ===");
    println!("  clients:   {}", summary.clients);
    println!("  policies:  {}", summary.policies);
    println!("  claims:    {}", summary.claims);
    println!("  payments:  {}", summary.payments);
    println!();
    println!(
        "  total monthly premium: ${:.2}",
        summary.total_monthly_premium
    );
    println!("  total claims paid:     ${:.2}", summary.total_claims_paid);
    println!();
    println!("  clients by department:");
    for (department, count) in &summary.top_departments {
        println!("    {department:<14} {count}");
    }
    println!();
    println!("Files written to: {data_dir}/");
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
