//! CSV persistence layer.
//!
//! RULE: Only csv_store.rs touches the data directory.
//! Everything else works on in-memory tables.
//!
//! The layout is four UTF-8 files, one per table, each with a header
//! row naming every record field and dates serialized as ISO-8601
//! calendar dates.

use crate::{error::DatasetResult, generator::Dataset};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CLIENTS_FILE: &str = "clientes.csv";
pub const POLICIES_FILE: &str = "polizas.csv";
pub const CLAIMS_FILE: &str = "siniestros.csv";
pub const PAYMENTS_FILE: &str = "pagos.csv";

pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    /// A store rooted at `dir`. The directory is created on save,
    /// not here, so a missing directory reads as a load failure.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write all four tables. Overwrites any previous layout.
    pub fn save(&self, dataset: &Dataset) -> DatasetResult<()> {
        fs::create_dir_all(&self.dir)?;
        self.write_table(CLIENTS_FILE, &dataset.clients)?;
        self.write_table(POLICIES_FILE, &dataset.policies)?;
        self.write_table(CLAIMS_FILE, &dataset.claims)?;
        self.write_table(PAYMENTS_FILE, &dataset.payments)?;
        log::info!("saved dataset to {}", self.dir.display());
        Ok(())
    }

    /// Read all four tables. Fails on the first missing or corrupt
    /// file; recovery (regeneration) is the provider's job, not ours.
    pub fn load(&self) -> DatasetResult<Dataset> {
        Ok(Dataset {
            clients: self.read_table(CLIENTS_FILE)?,
            policies: self.read_table(POLICIES_FILE)?,
            claims: self.read_table(CLAIMS_FILE)?,
            payments: self.read_table(PAYMENTS_FILE)?,
        })
    }

    fn write_table<T: Serialize>(&self, file: &str, rows: &[T]) -> DatasetResult<()> {
        let mut writer = csv::Writer::from_path(self.dir.join(file))?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn read_table<T: DeserializeOwned>(&self, file: &str) -> DatasetResult<Vec<T>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(self.dir.join(file))?;
        let rows = reader.deserialize().collect::<Result<Vec<T>, _>>()?;
        Ok(rows)
    }
}
