//! Spatial prediction for 8-bit grayscale
//!
//! Neighbours outside the image read as 0.

use crate::core::ImagePredictor;

impl ImagePredictor {
    /// predicted value at (row, col) from already known pixels
    #[inline]
    pub fn predict(self, pixels: &[u8], width: usize, row: usize, col: usize) -> i32 {
        let at = |r: usize, c: usize| pixels[r * width + c] as i32;

        let left = if col == 0 { 0 } else { at(row, col - 1) };
        match self {
            ImagePredictor::Left => left,
            ImagePredictor::Median => {
                let top = if row == 0 { 0 } else { at(row - 1, col) };
                let top_left = if row == 0 || col == 0 {
                    0
                } else {
                    at(row - 1, col - 1)
                };
                median_predict(left, top, top_left)
            }
        }
    }
}

/// median-of-three gradient predictor
///
/// With `p = a + b - c`, returns whichever of `a`, `b` is strictly between
/// the max and min of `{a, b, p}`, else `p`.
#[inline]
pub fn median_predict(a: i32, b: i32, c: i32) -> i32 {
    let p = a + b - c;
    let mx = a.max(b).max(p);
    let mn = a.min(b).min(p);

    if a != mx && a != mn {
        a
    } else if b != mx && b != mn {
        b
    } else {
        p
    }
}

/// pixel value from prediction + residual, clamped to a byte
#[inline]
pub fn reconstruct_pixel(prediction: i32, residual: i64) -> u8 {
    (prediction as i64 + residual).clamp(0, 255) as u8
}

/// residual for every pixel, row-major
pub fn residuals(predictor: ImagePredictor, pixels: &[u8], width: usize) -> Vec<i64> {
    let mut out = Vec::with_capacity(pixels.len());
    if width == 0 {
        return out;
    }
    for (i, &px) in pixels.iter().enumerate() {
        let (row, col) = (i / width, i % width);
        out.push(px as i64 - predictor.predict(pixels, width, row, col) as i64);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_ties_fall_through_to_gradient() {
        // a == b == p
        assert_eq!(median_predict(5, 5, 5), 5);
        // a is max, b is min -> p
        assert_eq!(median_predict(10, 2, 6), 6);
        // a strictly between
        assert_eq!(median_predict(5, 10, 12), 5);
        // b strictly between
        assert_eq!(median_predict(10, 5, 12), 5);
    }
}
