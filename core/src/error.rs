use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("client table is empty; policies cannot be assigned an owner")]
    EmptyClientTable,

    #[error("no active policies exist; claims require at least one")]
    NoActivePolicies,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DatasetResult<T> = Result<T, DatasetError>;
