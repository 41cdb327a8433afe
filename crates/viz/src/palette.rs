use crate::error::VizError;

/// Qualitative 10-color palette (matplotlib's "tab10" colors).
///
/// One entry per cluster index. Cluster counts above the palette size are
/// rejected rather than cycled: two clusters sharing a color would be
/// indistinguishable in the rendered output.
pub const PALETTE: [[u8; 3]; 10] = [
    [31, 119, 180],  // blue
    [255, 127, 14],  // orange
    [44, 160, 44],   // green
    [214, 39, 40],   // red
    [148, 103, 189], // purple
    [140, 86, 75],   // brown
    [227, 119, 194], // pink
    [127, 127, 127], // gray
    [188, 189, 34],  // olive
    [23, 190, 207],  // cyan
];

/// Palette entry for cluster `index` as float RGB in [0, 1].
pub fn color_f32(index: usize) -> [f32; 3] {
    let [r, g, b] = PALETTE[index];
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

pub fn check_cluster_count(k: usize) -> Result<(), VizError> {
    if k > PALETTE.len() {
        return Err(VizError::TooManyClusters {
            k,
            max: PALETTE.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors_distinct() {
        for i in 0..PALETTE.len() {
            for j in i + 1..PALETTE.len() {
                assert_ne!(PALETTE[i], PALETTE[j], "palette entries {i} and {j} collide");
            }
        }
    }

    #[test]
    fn test_color_f32_in_unit_range() {
        for i in 0..PALETTE.len() {
            for c in color_f32(i) {
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_cluster_count_limit() {
        assert!(check_cluster_count(10).is_ok());
        assert!(matches!(
            check_cluster_count(11),
            Err(VizError::TooManyClusters { k: 11, max: 10 })
        ));
    }
}
