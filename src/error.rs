#![warn(clippy::all, clippy::pedantic)]

use std::error;
use std::fmt;

/// Everything that can go wrong inside the physics core.
///
/// `OutOfBorder` and `Intersection` are expected outcomes of a move attempt and
/// are resolved by the movement manager. The remaining variants are caller
/// mistakes and are always surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    /// Zero width or height requested for a grid.
    Dimension { width: usize, height: usize },
    /// Rows supplied for a grid are empty, ragged or hold non-binary cells.
    Shape(String),
    /// State was read before it was set.
    NotReady(&'static str),
    /// An opaque figure cell landed outside the field.
    OutOfBorder { col: i32, row: i32 },
    /// An opaque figure cell landed on an occupied field cell.
    Intersection { col: i32, row: i32 },
    /// Row index outside `[0, height)`.
    RowOutOfRange { idx: usize, height: usize },
    /// The game was started without any figure to spawn.
    EmptyCatalog,
    /// Falling speed or frame rate of zero.
    InvalidRate { name: &'static str, value: u32 },
}

impl PhysicsError {
    /// True for the two placement failures used as movement signals.
    #[must_use]
    pub fn is_collision(&self) -> bool {
        matches!(
            self,
            PhysicsError::OutOfBorder { .. } | PhysicsError::Intersection { .. }
        )
    }
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::Dimension { width, height } => write!(
                f,
                "dimensions have to be positive integers, got {width}x{height}"
            ),
            PhysicsError::Shape(reason) => write!(f, "invalid grid shape: {reason}"),
            PhysicsError::NotReady(what) => write!(f, "{what} is not set"),
            PhysicsError::OutOfBorder { col, row } => {
                write!(f, "figure point is out of field at ({col}, {row})")
            }
            PhysicsError::Intersection { col, row } => {
                write!(f, "figure and field intersect at ({col}, {row})")
            }
            PhysicsError::RowOutOfRange { idx, height } => {
                write!(f, "row {idx} is outside a field of height {height}")
            }
            PhysicsError::EmptyCatalog => write!(f, "no figures are available to spawn"),
            PhysicsError::InvalidRate { name, value } => {
                write!(f, "{name} has to be positive, got {value}")
            }
        }
    }
}

impl error::Error for PhysicsError {}

pub type PhysicsResult<T> = Result<T, PhysicsError>;
