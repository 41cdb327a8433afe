use std::fmt;

#[derive(Debug, PartialEq)]
pub enum TensorError {
    ShapeOverflow,
    ShapeMismatch { expected: usize, got: usize },
}

impl fmt::Display for TensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorError::ShapeOverflow => write!(f, "shape dimensions overflow when multiplied"),
            TensorError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected} elements, got {got}")
            }
        }
    }
}

impl std::error::Error for TensorError {}

/// Dense n-dimensional array in row-major order.
///
/// The shape is validated against the data length at construction, so a
/// `Tensor` can never silently carry fewer or more elements than its shape
/// claims.
#[derive(Clone, PartialEq)]
pub struct Tensor<T> {
    pub shape: Vec<usize>,
    pub data: Vec<T>,
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .finish()
    }
}

// Shape product with overflow detection
fn element_count(shape: &[usize]) -> Result<usize, TensorError> {
    let mut product: usize = 1;
    for &dim in shape {
        product = product
            .checked_mul(dim)
            .ok_or(TensorError::ShapeOverflow)?;
    }
    Ok(product)
}

impl<T> Tensor<T> {
    pub fn new(shape: Vec<usize>, data: Vec<T>) -> Result<Self, TensorError> {
        let expected = element_count(&shape)?;
        if expected != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Reinterprets the data under a new shape with the same element count.
    ///
    /// Fails with `ShapeMismatch` when the new shape's product differs from
    /// the current element count; the data is never truncated or padded.
    pub fn reshape(self, shape: Vec<usize>) -> Result<Self, TensorError> {
        let expected = element_count(&shape)?;
        if expected != self.data.len() {
            return Err(TensorError::ShapeMismatch {
                expected,
                got: self.data.len(),
            });
        }
        Ok(Self {
            shape,
            data: self.data,
        })
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Default + Clone> Tensor<T> {
    pub fn zeros(shape: Vec<usize>) -> Result<Self, TensorError> {
        let count = element_count(&shape)?;
        Ok(Self {
            shape,
            data: vec![T::default(); count],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_length() {
        let t = Tensor::new(vec![2, 3], vec![0u8; 6]).unwrap();
        assert_eq!(t.shape, vec![2, 3]);
        assert_eq!(t.len(), 6);

        let err = Tensor::<u8>::new(vec![2, 3], vec![0u8; 5]).unwrap_err();
        assert_eq!(err, TensorError::ShapeMismatch { expected: 6, got: 5 });
    }

    #[test]
    fn test_new_detects_overflow() {
        let err = Tensor::<u8>::new(vec![usize::MAX, 2], vec![]).unwrap_err();
        assert_eq!(err, TensorError::ShapeOverflow);
    }

    #[test]
    fn test_zeros() {
        let t = Tensor::<f32>::zeros(vec![2, 2, 3]).unwrap();
        assert_eq!(t.len(), 12);
        assert!(t.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_reshape_preserves_data() {
        let t = Tensor::new(vec![6], (0u8..6).collect()).unwrap();
        let t = t.reshape(vec![2, 3]).unwrap();
        assert_eq!(t.shape, vec![2, 3]);
        assert_eq!(t.data, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reshape_rejects_wrong_count() {
        let t = Tensor::new(vec![6], vec![0u8; 6]).unwrap();
        let err = t.reshape(vec![2, 2]).unwrap_err();
        assert_eq!(err, TensorError::ShapeMismatch { expected: 4, got: 6 });
    }
}
