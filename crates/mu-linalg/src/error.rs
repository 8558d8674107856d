use std::fmt;

/// Error returned by the checked conversions [`Vector::try_cast`] and [`Matrix::try_cast`].
///
/// [`Vector::try_cast`]: crate::Vector::try_cast
/// [`Matrix::try_cast`]: crate::Matrix::try_cast
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CastError {
    /// An element does not survive the conversion unchanged (it is out of range, has a fractional
    /// part, or loses precision).
    #[error("element {index} ({value}) cannot be represented as `{target}`")]
    Lossy {
        /// Position of the element in row-major order.
        index: usize,
        /// The offending value, formatted with [`fmt::Display`].
        value: String,
        /// Name of the target element type.
        target: &'static str,
    },
}

impl CastError {
    pub(crate) fn lossy<T: fmt::Display, U>(index: usize, value: T) -> Self {
        Self::Lossy {
            index,
            value: value.to_string(),
            target: std::any::type_name::<U>(),
        }
    }
}
