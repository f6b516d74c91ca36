use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BackdropError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("visibility threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f32),

    #[error("section registry is empty")]
    EmptyRegistry,

    #[error("duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("render loop already stopped")]
    LoopStopped,
}

pub type Result<T> = std::result::Result<T, BackdropError>;
