use thiserror::Error;

pub type Result<T> = std::result::Result<T, CarouselError>;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid style value: {0}")]
    InvalidStyle(String),
}

/// Problems with a slide catalog, caught before a carousel exists
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("catalog has no slides")]
    Empty,

    #[error("slide {id} has invalid duration {duration}")]
    InvalidDuration { id: u32, duration: f64 },

    #[error("duplicate slide id {0}")]
    DuplicateId(u32),
}

/// A trigger whose precondition does not hold in the current state
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("carousel already entered the viewport")]
    AlreadyEntered,

    #[error("carousel has not entered the viewport")]
    NotEntered,

    #[error("replay is only available once the last clip has ended")]
    ResetUnavailable,

    #[error("play/pause is unavailable while replay is offered")]
    ReplayMode,

    #[error("clip {index} out of range ({len} clips)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("clip {0} is already active")]
    AlreadyActive(usize),

    #[error("clip {index} ended but clip {active} is active")]
    StaleClip { index: usize, active: usize },
}
