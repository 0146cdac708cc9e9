/// Color math for the composite pass
///
/// This module holds the per-pixel color operations applied after the
/// gaussian blur:
/// - Sepia tone mixing (matrix interpolation between identity and full sepia)
/// - Brightness scaling (the "flash" slider)

/// Full sepia color matrix (row-major, applied to [R, G, B])
/// This is the industry-standard matrix used by CSS/SVG filter effects
/// Source: W3C Filter Effects Module Level 1, sepia()
const SEPIA_FULL: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Identity matrix (no color change)
const IDENTITY: [[f32; 3]; 3] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Build the sepia matrix for a given mix amount
///
/// `amount` is 0.0..=1.0 where 0.0 leaves colors untouched and 1.0 applies
/// the full sepia matrix. Intermediate values interpolate linearly between
/// identity and full sepia, matching how CSS `sepia(N%)` is defined.
///
/// At amount 0.0 the result is bit-exact identity (each entry is
/// `identity + diff * 0.0`), which the zero-slider tests rely on.
pub fn sepia_matrix(amount: f32) -> [[f32; 3]; 3] {
    let t = amount.clamp(0.0, 1.0);

    let mut matrix = IDENTITY;
    for row in 0..3 {
        for col in 0..3 {
            matrix[row][col] += (SEPIA_FULL[row][col] - IDENTITY[row][col]) * t;
        }
    }
    matrix
}

/// Apply a 3x3 color matrix to an [R, G, B] triple
pub fn apply_matrix(matrix: &[[f32; 3]; 3], rgb: [f32; 3]) -> [f32; 3] {
    [
        matrix[0][0] * rgb[0] + matrix[0][1] * rgb[1] + matrix[0][2] * rgb[2],
        matrix[1][0] * rgb[0] + matrix[1][1] * rgb[1] + matrix[1][2] * rgb[2],
        matrix[2][0] * rgb[0] + matrix[2][1] * rgb[1] + matrix[2][2] * rgb[2],
    ]
}

/// Scale all three channels by a brightness factor
///
/// The flash slider maps to `factor = 1.0 + flash / 100.0`, so flash 0
/// is a factor of exactly 1.0 (no change).
pub fn scale_brightness(rgb: [f32; 3], factor: f32) -> [f32; 3] {
    [rgb[0] * factor, rgb[1] * factor, rgb[2] * factor]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sepia_zero_is_exact_identity() {
        let matrix = sepia_matrix(0.0);
        let rgb = [137.0, 42.0, 250.0];
        assert_eq!(apply_matrix(&matrix, rgb), rgb);
    }

    #[test]
    fn test_sepia_full_on_pure_red() {
        let matrix = sepia_matrix(1.0);
        let [r, g, b] = apply_matrix(&matrix, [255.0, 0.0, 0.0]);

        // First column of the full sepia matrix scaled by 255
        assert!((r - 0.393 * 255.0).abs() < 1e-3);
        assert!((g - 0.349 * 255.0).abs() < 1e-3);
        assert!((b - 0.272 * 255.0).abs() < 1e-3);
    }

    #[test]
    fn test_sepia_amount_is_clamped() {
        assert_eq!(sepia_matrix(-1.0), sepia_matrix(0.0));
        assert_eq!(sepia_matrix(2.0), sepia_matrix(1.0));
    }

    #[test]
    fn test_brightness_factor_one_is_identity() {
        let rgb = [10.0, 200.0, 99.0];
        assert_eq!(scale_brightness(rgb, 1.0), rgb);
    }

    #[test]
    fn test_brightness_doubles() {
        assert_eq!(scale_brightness([10.0, 20.0, 30.0], 2.0), [20.0, 40.0, 60.0]);
    }
}
