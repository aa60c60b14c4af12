use thiserror::Error;

/// Result type for generation and storage operations.
pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Debug, Error)]
pub enum GenError {
    /// Rejected before any entity is created: bad complexity, malformed
    /// rarity weight table, empty catalogue.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A phase referenced an entity that does not exist in this run.
    /// Call sites log and skip the attachment rather than propagating.
    #[error("{entity} {id} not found in this world")]
    MissingReference { entity: &'static str, id: u64 },

    /// An item factory was asked for a type outside its catalogue.
    #[error("unknown {family} item type {type_name:?}")]
    UnknownItemType {
        family: &'static str,
        type_name: String,
    },

    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}
