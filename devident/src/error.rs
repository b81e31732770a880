//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Device table error: {0}")]
    Table(#[from] devident_core::Error),

    #[error("Host source error: {0}")]
    Host(#[from] devident_host::Error),
}
