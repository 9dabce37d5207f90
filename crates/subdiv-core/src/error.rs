use crate::rect::Rect;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: usize, height: usize },

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("cell ({row}, {col}) is outside a {width}x{height} grid")]
    OutOfBounds { row: usize, col: usize, width: usize, height: usize },

    #[error("cell ({row}, {col}) has not been set")]
    UnsetCell { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already set")]
    AlreadySet { row: usize, col: usize },

    #[error("corner ({row}, {col}) is not seeded")]
    UnseededCorner { row: usize, col: usize },

    #[error("subdivision failed in {rect} at depth {depth}")]
    Subdivision {
        rect: Rect,
        depth: u32,
        source: Box<Error>,
    },
}

impl Error {
    /// The invariant violation underneath any `Subdivision` wrapping.
    pub fn innermost(&self) -> &Error {
        match self {
            Error::Subdivision { source, .. } => source.innermost(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
