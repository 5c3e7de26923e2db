use mr_core::{CoreError, Floor, ItemId};
use mr_pool::AllocError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{item} is addressed to {floor}, building has floors 1..={floors}")]
    FloorOutOfRange {
        item:   ItemId,
        floor:  Floor,
        floors: u32,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("allocation failed: {0}")]
    Allocation(#[from] AllocError),
}

pub type SimResult<T> = Result<T, SimError>;
