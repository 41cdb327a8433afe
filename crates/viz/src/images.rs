use base::{Tensor, TensorError};

use crate::error::VizError;
use crate::palette;

/// Expands per-pixel cluster labels into a pseudo-colored image tensor.
///
/// `labels` holds one flat frame per entry, each of length `height * width`,
/// with values in `[0, k)`. The result has shape `[frames, height, width, 3]`
/// and colors every pixel by its label's palette entry, so the same label
/// maps to the identical RGB triple in every frame.
///
/// # Errors
///
/// - `TooManyClusters` when `k` exceeds the palette size.
/// - `LengthMismatch` when any frame's length differs from `height * width`.
/// - `LabelOutOfRange` when any label is `>= k`.
pub fn labels_to_images(
    labels: &[Vec<usize>],
    k: usize,
    height: usize,
    width: usize,
) -> Result<Tensor<f32>, VizError> {
    palette::check_cluster_count(k)?;

    let pixels = height
        .checked_mul(width)
        .ok_or(TensorError::ShapeOverflow)?;

    let frames = labels.len();
    let mut data = Vec::with_capacity(frames.saturating_mul(pixels).saturating_mul(3));

    for frame in labels {
        if frame.len() != pixels {
            return Err(VizError::LengthMismatch {
                expected: pixels,
                got: frame.len(),
            });
        }
        for &label in frame {
            if label >= k {
                return Err(VizError::LabelOutOfRange { label, k });
            }
            data.extend_from_slice(&palette::color_f32(label));
        }
    }

    Ok(Tensor::new(vec![frames, height, width, 3], data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::color_f32;

    // RGB triple at (frame, row, col) of a [f, h, w, 3] tensor
    fn pixel(t: &Tensor<f32>, frame: usize, row: usize, col: usize) -> [f32; 3] {
        let (h, w) = (t.shape[1], t.shape[2]);
        let idx = ((frame * h + row) * w + col) * 3;
        [t.data[idx], t.data[idx + 1], t.data[idx + 2]]
    }

    #[test]
    fn test_output_shape_and_range() {
        let labels = vec![vec![0usize; 12], vec![1usize; 12]];
        let t = labels_to_images(&labels, 2, 3, 4).unwrap();
        assert_eq!(t.shape, vec![2, 3, 4, 3]);
        assert!(t.data.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_two_by_two_end_to_end() {
        let labels = vec![vec![0usize, 1, 1, 0]];
        let t = labels_to_images(&labels, 2, 2, 2).unwrap();
        assert_eq!(t.shape, vec![1, 2, 2, 3]);
        assert_eq!(pixel(&t, 0, 0, 0), color_f32(0));
        assert_eq!(pixel(&t, 0, 1, 1), color_f32(0));
        assert_eq!(pixel(&t, 0, 0, 1), color_f32(1));
        assert_eq!(pixel(&t, 0, 1, 0), color_f32(1));
    }

    #[test]
    fn test_same_label_identical_across_frames() {
        let labels = vec![vec![2usize, 0, 1, 2], vec![1usize, 2, 2, 0]];
        let t = labels_to_images(&labels, 3, 2, 2).unwrap();
        // label 2 appears at (0,0,0), (0,1,1), (1,0,1), (1,1,0)
        let expected = color_f32(2);
        assert_eq!(pixel(&t, 0, 0, 0), expected);
        assert_eq!(pixel(&t, 0, 1, 1), expected);
        assert_eq!(pixel(&t, 1, 0, 1), expected);
        assert_eq!(pixel(&t, 1, 1, 0), expected);
    }

    #[test]
    fn test_distinct_labels_distinct_colors() {
        let labels = vec![(0usize..10).collect::<Vec<_>>()];
        let t = labels_to_images(&labels, 10, 2, 5).unwrap();
        for i in 0..10 {
            for j in i + 1..10 {
                assert_ne!(pixel(&t, 0, i / 5, i % 5), pixel(&t, 0, j / 5, j % 5));
            }
        }
    }

    #[test]
    fn test_wrong_frame_length_fails() {
        let labels = vec![vec![0usize; 5]];
        let err = labels_to_images(&labels, 2, 2, 2).unwrap_err();
        assert!(matches!(err, VizError::LengthMismatch { expected: 4, got: 5 }));
    }

    #[test]
    fn test_label_out_of_range_fails() {
        let labels = vec![vec![0usize, 2, 0, 0]];
        let err = labels_to_images(&labels, 2, 2, 2).unwrap_err();
        assert!(matches!(err, VizError::LabelOutOfRange { label: 2, k: 2 }));
    }

    #[test]
    fn test_too_many_clusters_fails() {
        let err = labels_to_images(&[], 11, 2, 2).unwrap_err();
        assert!(matches!(err, VizError::TooManyClusters { k: 11, max: 10 }));
    }

    #[test]
    fn test_no_frames_gives_empty_tensor() {
        let t = labels_to_images(&[], 3, 4, 4).unwrap();
        assert_eq!(t.shape, vec![0, 4, 4, 3]);
        assert!(t.is_empty());
    }
}
