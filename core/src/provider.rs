//! Load-or-generate boundary for dataset consumers.
//!
//! A presentation front end never talks to the CSV store or the
//! generator directly; it asks the provider for the four tables.
//! Missing or corrupt files degrade to a full fresh generation —
//! never a partial mix of loaded and generated tables — and the
//! caller is told which path was taken. Configuration errors from
//! the generator still propagate: they mean the requested dataset
//! cannot exist at all.

use crate::{
    config::GeneratorConfig,
    csv_store::CsvStore,
    error::DatasetResult,
    generator::Dataset,
};

/// How the provider obtained the tables it handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    LoadedFromDisk,
    GeneratedFallback,
}

pub struct DatasetProvider {
    store: CsvStore,
    config: GeneratorConfig,
    cached: Option<(Dataset, DataSource)>,
}

impl DatasetProvider {
    pub fn new(store: CsvStore, config: GeneratorConfig) -> Self {
        Self {
            store,
            config,
            cached: None,
        }
    }

    /// Produce or load the four tables. Idempotent per provider:
    /// the first call resolves the dataset, later calls return the
    /// cached tables without re-deriving them.
    pub fn provide(&mut self) -> DatasetResult<(&Dataset, DataSource)> {
        if self.cached.is_none() {
            let entry = match self.store.load() {
                Ok(dataset) => {
                    log::info!("loaded dataset from {}", self.store.dir().display());
                    (dataset, DataSource::LoadedFromDisk)
                }
                Err(err) => {
                    log::warn!(
                        "could not load dataset from {} ({}); generating fresh data",
                        self.store.dir().display(),
                        err
                    );
                    (Dataset::generate(&self.config)?, DataSource::GeneratedFallback)
                }
            };
            self.cached = Some(entry);
        }
        let (dataset, source) = self.cached.as_ref().expect("cache populated above");
        Ok((dataset, *source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_store::CLAIMS_FILE;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir =
            std::env::temp_dir().join(format!("aseguradora-prov-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            clients: 25,
            policies: 50,
            claims: 15,
            today: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn loads_a_complete_persisted_layout() {
        let dir = scratch_dir("load");
        let config = small_config();
        let dataset = Dataset::generate(&config).unwrap();
        CsvStore::new(&dir).save(&dataset).unwrap();

        let mut provider = DatasetProvider::new(CsvStore::new(&dir), config);
        let (provided, source) = provider.provide().unwrap();
        assert_eq!(source, DataSource::LoadedFromDisk);
        assert_eq!(provided, &dataset);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_claims_file_regenerates_all_four_tables() {
        let dir = scratch_dir("fallback");
        let config = small_config();
        let dataset = Dataset::generate(&config).unwrap();
        CsvStore::new(&dir).save(&dataset).unwrap();
        fs::remove_file(dir.join(CLAIMS_FILE)).unwrap();

        let mut provider = DatasetProvider::new(CsvStore::new(&dir), config.clone());
        let (provided, source) = provider.provide().unwrap();
        assert_eq!(source, DataSource::GeneratedFallback);
        // Fallback is a full fresh run, not a patch of the one gap.
        assert_eq!(provided, &Dataset::generate(&config).unwrap());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn repeated_calls_hit_the_cache() {
        let dir = scratch_dir("cache");
        let config = small_config();
        // Nothing persisted: first call falls back to generation.
        let mut provider = DatasetProvider::new(CsvStore::new(&dir), config);

        let (first, source) = provider.provide().unwrap();
        assert_eq!(source, DataSource::GeneratedFallback);
        let first = first.clone();

        let (second, source) = provider.provide().unwrap();
        assert_eq!(source, DataSource::GeneratedFallback);
        assert_eq!(second, &first);
        let _ = fs::remove_dir_all(&dir);
    }
}
