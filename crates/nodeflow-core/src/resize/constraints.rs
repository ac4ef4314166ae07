//! Size and scale values with their clamping bounds.

use serde::{Deserialize, Serialize};

/// A node size in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Collapse to a square using the larger dimension.
    pub fn uniform(self) -> Self {
        let side = self.width.max(self.height);
        Self::new(side, side)
    }
}

/// Bounds for width/height resizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeConstraints {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self {
            min_width: 20.0,
            max_width: 300.0,
            min_height: 16.0,
            max_height: 200.0,
        }
    }
}

impl SizeConstraints {
    /// Clamp a size into bounds and round to whole pixels.
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width).round(),
            size.height.clamp(self.min_height, self.max_height).round(),
        )
    }
}

/// Bounds for uniform-scale resizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleConstraints {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleConstraints {
    fn default() -> Self {
        Self { min: 0.2, max: 3.0 }
    }
}

impl ScaleConstraints {
    /// The tighter profile for hosts with limited layout room.
    pub fn compact() -> Self {
        Self { min: 0.5, max: 2.0 }
    }

    /// Clamp a scale factor into bounds and round to two decimals.
    pub fn clamp(&self, scale: f64) -> f64 {
        (scale.clamp(self.min, self.max) * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_within_bounds() {
        let constraints = SizeConstraints::default();
        let size = constraints.clamp(Size::new(100.0, 80.0));
        assert!((size.width - 100.0).abs() < f64::EPSILON);
        assert!((size.height - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_at_bounds() {
        let constraints = SizeConstraints::default();

        let too_small = constraints.clamp(Size::new(-500.0, 1.0));
        assert!((too_small.width - 20.0).abs() < f64::EPSILON);
        assert!((too_small.height - 16.0).abs() < f64::EPSILON);

        let too_big = constraints.clamp(Size::new(1e6, 1e6));
        assert!((too_big.width - 300.0).abs() < f64::EPSILON);
        assert!((too_big.height - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_rounds_to_whole_pixels() {
        let constraints = SizeConstraints::default();
        let size = constraints.clamp(Size::new(100.4, 80.6));
        assert!((size.width - 100.0).abs() < f64::EPSILON);
        assert!((size.height - 81.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scale_clamp() {
        let constraints = ScaleConstraints::default();
        assert!((constraints.clamp(10.0) - 3.0).abs() < f64::EPSILON);
        assert!((constraints.clamp(0.01) - 0.2).abs() < f64::EPSILON);
        assert!((constraints.clamp(1.333_33) - 1.33).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scale_compact_profile() {
        let constraints = ScaleConstraints::compact();
        assert!((constraints.clamp(3.0) - 2.0).abs() < f64::EPSILON);
        assert!((constraints.clamp(0.2) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_uniform_size() {
        let size = Size::new(40.0, 30.0).uniform();
        assert!((size.width - 40.0).abs() < f64::EPSILON);
        assert!((size.height - 40.0).abs() < f64::EPSILON);
    }
}
