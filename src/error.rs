use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarpoolError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type CarpoolResult<T> = Result<T, CarpoolError>;

/// Fatal outcome of an organize run. No groups are produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrganizeError {
    #[error("Pick at least one driver!")]
    NoDriversAvailable,
}

/// Advisory raised by an organize run that still produced groups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrganizeWarning {
    #[error("Not enough seats! {passengers} people but only {seats} seats available.")]
    InsufficientSeats { passengers: usize, seats: u64 },
}
