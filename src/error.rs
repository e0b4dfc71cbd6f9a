//! The single error type returned by every fallible operation.

/// Why an operation on an [`Array`], a provider or an access pattern failed.
///
/// Shapes and indices are carried as plain `Vec<usize>` so that operands of
/// different rank can be reported by the same variant.
///
/// [`Array`]: super::Array
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{operation}: shape {left:?} does not match shape {right:?}")]
    ShapeMismatch {
        operation: &'static str,
        left: Vec<usize>,
        right: Vec<usize>,
    },

    #[error("shape {shape:?} has volume {volume} but the storage holds {size} elements")]
    VolumeMismatch {
        shape: Vec<usize>,
        volume: usize,
        size: usize,
    },

    #[error("{operation}: axis {axis} out of range for rank {rank}")]
    AxisOutOfRange {
        operation: &'static str,
        axis: usize,
        rank: usize,
    },

    #[error("out-of-bounds selection {region} from shape {shape:?}")]
    OutOfBoundsSelection { region: String, shape: Vec<usize> },

    #[error("cannot shift by {delta} along axis {axis} of extent {extent}")]
    ShiftOutOfRange {
        delta: isize,
        axis: usize,
        extent: usize,
    },

    #[error("invalid range {start}..{end} with step {step}")]
    InvalidRange { start: String, end: String, step: String },

    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds { index: Vec<usize>, shape: Vec<usize> },

    #[error("expected {expected} elements, found {found}")]
    WrongLength { expected: usize, found: usize },
}

impl Error {
    pub(crate) fn axis(operation: &'static str, axis: usize, rank: usize) -> Result<(), Self> {
        if axis < rank {
            Ok(())
        } else {
            Err(Error::AxisOutOfRange { operation, axis, rank })
        }
    }
}
