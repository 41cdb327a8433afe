use base::TensorError;
use std::fmt;

#[derive(Debug)]
pub enum VizError {
    Tensor(TensorError),
    TooManyClusters { k: usize, max: usize },
    LabelOutOfRange { label: usize, k: usize },
    LengthMismatch { expected: usize, got: usize },
    FrameOutOfRange { frame: usize, frames: usize },
    BadImageShape { shape: Vec<usize> },
    EmptyAnimation,
    Encode(String),
    Decode(String),
    Io(std::io::Error),
    Display(String),
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizError::Tensor(err) => write!(f, "tensor error: {err}"),
            VizError::TooManyClusters { k, max } => {
                write!(f, "{k} clusters exceed the {max}-color palette")
            }
            VizError::LabelOutOfRange { label, k } => {
                write!(f, "label {label} out of range for {k} clusters")
            }
            VizError::LengthMismatch { expected, got } => {
                write!(f, "length mismatch: expected {expected} elements, got {got}")
            }
            VizError::FrameOutOfRange { frame, frames } => {
                write!(f, "frame index {frame} out of range for {frames} frames")
            }
            VizError::BadImageShape { shape } => {
                write!(f, "expected [frames, height, width, 3] tensor, got shape {shape:?}")
            }
            VizError::EmptyAnimation => write!(f, "animation has no frames"),
            VizError::Encode(msg) => write!(f, "encode error: {msg}"),
            VizError::Decode(msg) => write!(f, "decode error: {msg}"),
            VizError::Io(err) => write!(f, "io error: {err}"),
            VizError::Display(msg) => write!(f, "display error: {msg}"),
        }
    }
}

impl std::error::Error for VizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VizError::Tensor(err) => Some(err),
            VizError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TensorError> for VizError {
    fn from(err: TensorError) -> Self {
        VizError::Tensor(err)
    }
}

impl From<image::ImageError> for VizError {
    fn from(err: image::ImageError) -> Self {
        VizError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for VizError {
    fn from(err: std::io::Error) -> Self {
        VizError::Io(err)
    }
}

impl From<minifb::Error> for VizError {
    fn from(err: minifb::Error) -> Self {
        VizError::Display(err.to_string())
    }
}
