use base::{Tensor, Vec2};

use crate::error::VizError;
use crate::palette;

/// Side length of the square scatter canvas in pixels.
pub const CANVAS_SIZE: usize = 1000;

const MARKER_RADIUS: i32 = 2;
const MARGIN: f32 = 0.05;

/// Renders 2D eigenspace points as a cluster-colored scatter plot.
///
/// `points` and `labels` are paired 1:1 by index; each point is drawn as a
/// filled disc in its cluster's palette color on a white `CANVAS_SIZE` square
/// canvas, with bounds fit to the data plus a 5% margin. Clusters with no
/// points are simply absent from the plot. The canvas is returned as a
/// `[CANVAS_SIZE, CANVAS_SIZE, 3]` tensor for a `DisplayWindow`.
///
/// # Errors
///
/// - `TooManyClusters` when `k` exceeds the palette size.
/// - `LengthMismatch` when `points` and `labels` differ in length.
/// - `LabelOutOfRange` when any label is `>= k`.
pub fn plot_eigenspace(
    points: &[Vec2<f32>],
    k: usize,
    labels: &[usize],
) -> Result<Tensor<f32>, VizError> {
    palette::check_cluster_count(k)?;
    if points.len() != labels.len() {
        return Err(VizError::LengthMismatch {
            expected: points.len(),
            got: labels.len(),
        });
    }
    for &label in labels {
        if label >= k {
            return Err(VizError::LabelOutOfRange { label, k });
        }
    }

    let mut canvas = vec![1.0f32; CANVAS_SIZE * CANVAS_SIZE * 3];

    if !points.is_empty() {
        let (min, max) = bounds(points);
        let span = expand_span(max - min);
        let side = (CANVAS_SIZE - 1) as f32;
        let margin_px = MARGIN * side;
        let inner = side - 2.0 * margin_px;

        for (point, &label) in points.iter().zip(labels) {
            let px = (margin_px + (point.x - min.x) / span.x * inner) as i32;
            // canvas row 0 is the top, plot y axis points up
            let py = (side - (margin_px + (point.y - min.y) / span.y * inner)) as i32;
            draw_filled_disc(
                &mut canvas,
                CANVAS_SIZE,
                CANVAS_SIZE,
                px,
                py,
                MARKER_RADIUS,
                palette::color_f32(label),
            );
        }
    }

    Ok(Tensor::new(
        vec![CANVAS_SIZE, CANVAS_SIZE, 3],
        canvas,
    )?)
}

fn bounds(points: &[Vec2<f32>]) -> (Vec2<f32>, Vec2<f32>) {
    let mut min = points[0];
    let mut max = points[0];
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (min, max)
}

// Degenerate axes (all points on one line) still need a nonzero span
fn expand_span(span: Vec2<f32>) -> Vec2<f32> {
    Vec2::new(
        if span.x > 0.0 { span.x } else { 1.0 },
        if span.y > 0.0 { span.y } else { 1.0 },
    )
}

/// Draw a filled disc with clipping
fn draw_filled_disc(
    buf: &mut [f32],
    width: usize,
    height: usize,
    cx: i32,
    cy: i32,
    radius: i32,
    color: [f32; 3],
) {
    let r2 = radius * radius;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                let x = cx + dx;
                let y = cy + dy;

                if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 {
                    let idx = (y as usize * width + x as usize) * 3;
                    buf[idx..idx + 3].copy_from_slice(&color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::color_f32;

    fn pixel(t: &Tensor<f32>, row: usize, col: usize) -> [f32; 3] {
        let idx = (row * t.shape[1] + col) * 3;
        [t.data[idx], t.data[idx + 1], t.data[idx + 2]]
    }

    #[test]
    fn test_canvas_square_and_white() {
        let t = plot_eigenspace(&[], 3, &[]).unwrap();
        assert_eq!(t.shape, vec![CANVAS_SIZE, CANVAS_SIZE, 3]);
        assert!(t.data.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_single_point_drawn_in_cluster_color() {
        let t = plot_eigenspace(&[Vec2::new(0.0, 0.0)], 2, &[1]).unwrap();
        // degenerate bounds put the point at the margin offset corner
        let hits: Vec<_> = (0..CANVAS_SIZE)
            .flat_map(|r| (0..CANVAS_SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| pixel(&t, r, c) == color_f32(1))
            .collect();
        assert!(!hits.is_empty(), "marker not drawn");
        // radius-2 disc covers 13 pixels when fully inside the canvas
        assert!(hits.len() <= 13);
    }

    #[test]
    fn test_two_clusters_use_distinct_colors() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
        ];
        let t = plot_eigenspace(&points, 2, &[0, 1]).unwrap();
        let mut seen = [false, false];
        for r in 0..CANVAS_SIZE {
            for c in 0..CANVAS_SIZE {
                let px = pixel(&t, r, c);
                if px == color_f32(0) {
                    seen[0] = true;
                } else if px == color_f32(1) {
                    seen[1] = true;
                }
            }
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn test_empty_cluster_omitted() {
        // k = 3 but only labels 0 and 1 occur; cluster 2's color never appears
        let points = [Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)];
        let t = plot_eigenspace(&points, 3, &[0, 1]).unwrap();
        for r in 0..CANVAS_SIZE {
            for c in 0..CANVAS_SIZE {
                assert_ne!(pixel(&t, r, c), color_f32(2));
            }
        }
    }

    #[test]
    fn test_length_mismatch_fails() {
        let err = plot_eigenspace(&[Vec2::new(0.0, 0.0)], 2, &[0, 1]).unwrap_err();
        assert!(matches!(err, VizError::LengthMismatch { expected: 1, got: 2 }));
    }

    #[test]
    fn test_label_out_of_range_fails() {
        let err = plot_eigenspace(&[Vec2::new(0.0, 0.0)], 1, &[1]).unwrap_err();
        assert!(matches!(err, VizError::LabelOutOfRange { label: 1, k: 1 }));
    }
}
