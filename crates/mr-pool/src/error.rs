use mr_core::ItemId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AllocError {
    /// No carrier configuration can lift the item.  The item stays in the
    /// backlog; retrying without removing it will fail again.
    #[error("{item} weighs {weight} g, above the {max} g a full group can carry")]
    OverCapacity {
        item:   ItemId,
        weight: u32,
        max:    u32,
    },
}

pub type AllocResult<T> = Result<T, AllocError>;
