//! Fade envelope shapes.
//!
//! A shape maps a normalized position `r` in `[0, 1]` through the fade window
//! to a gain in `[0, 1]`. Fade-ins multiply by the shape directly; fade-outs
//! multiply by its complement.

use crate::error::DspError;

/// Curve of a fade envelope.
///
/// Host code that still speaks the integer tags of the C interface can convert
/// with `FadeShape::try_from(tag)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeShape {
    /// Constant rate of change
    #[default]
    Linear,

    /// Square-root curve: fast rise, slow finish
    EqualPower,

    /// Cubic curve: slow start, fast finish
    SShape,
}

impl FadeShape {
    /// Integer tag used by the C interface for [`FadeShape::Linear`].
    pub const LINEAR_TAG: i16 = 10;
    /// Integer tag used by the C interface for [`FadeShape::EqualPower`].
    pub const EQUAL_POWER_TAG: i16 = 11;
    /// Integer tag used by the C interface for [`FadeShape::SShape`].
    pub const S_SHAPE_TAG: i16 = 12;

    /// Envelope value at normalized position `r`.
    ///
    /// `r` is clamped to `[0, 1]`, so positions past the fade window saturate at 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use monodsp::FadeShape;
    ///
    /// assert_eq!(FadeShape::Linear.apply(0.5), 0.5);
    /// assert_eq!(FadeShape::EqualPower.apply(0.25), 0.5);
    /// assert_eq!(FadeShape::SShape.apply(0.5), 0.125);
    /// ```
    pub fn apply(&self, r: f32) -> f32 {
        let r = r.clamp(0.0, 1.0);
        match self {
            FadeShape::Linear => r,
            FadeShape::EqualPower => r.sqrt(),
            FadeShape::SShape => r * r * r,
        }
    }

    /// Integer tag used for this shape at the C ABI.
    pub fn tag(&self) -> i16 {
        match self {
            FadeShape::Linear => Self::LINEAR_TAG,
            FadeShape::EqualPower => Self::EQUAL_POWER_TAG,
            FadeShape::SShape => Self::S_SHAPE_TAG,
        }
    }
}

impl TryFrom<i16> for FadeShape {
    type Error = DspError;

    fn try_from(tag: i16) -> Result<Self, Self::Error> {
        match tag {
            Self::LINEAR_TAG => Ok(FadeShape::Linear),
            Self::EQUAL_POWER_TAG => Ok(FadeShape::EqualPower),
            Self::S_SHAPE_TAG => Ok(FadeShape::SShape),
            other => Err(DspError::invalid(format!("unknown fade shape tag {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPES: [FadeShape; 3] = [FadeShape::Linear, FadeShape::EqualPower, FadeShape::SShape];

    #[test]
    fn test_endpoints() {
        for shape in SHAPES {
            assert_eq!(shape.apply(0.0), 0.0);
            assert_eq!(shape.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_clamping() {
        for shape in SHAPES {
            assert_eq!(shape.apply(-0.5), 0.0);
            assert_eq!(shape.apply(1.5), 1.0);
        }
    }

    #[test]
    fn test_ordering_against_linear() {
        // sqrt sits above the diagonal, the cube below it
        for r in [0.1, 0.25, 0.5, 0.9] {
            assert!(FadeShape::EqualPower.apply(r) > r);
            assert!(FadeShape::SShape.apply(r) < r);
        }
    }

    #[test]
    fn test_tags() {
        for shape in SHAPES {
            assert_eq!(FadeShape::try_from(shape.tag()), Ok(shape));
        }
        assert!(matches!(
            FadeShape::try_from(13),
            Err(DspError::InvalidParameter(_))
        ));
        assert!(FadeShape::try_from(0).is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(FadeShape::default(), FadeShape::Linear);
    }
}
