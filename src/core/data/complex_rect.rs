use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned rectangle in the complex plane, held as its bottom-left and
/// top-right corners. The imaginary axis grows upwards, so `bottom < top`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    bottom_left: Complex,
    top_right: Complex,
}

impl ComplexRect {
    pub fn new(bottom_left: Complex, top_right: Complex) -> Result<Self, ComplexRectError> {
        let width = top_right.real() - bottom_left.real();
        let height = top_right.imag() - bottom_left.imag();

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            bottom_left,
            top_right,
        })
    }

    pub fn from_bounds(
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(Complex::new(left, bottom), Complex::new(right, top))
    }

    #[must_use]
    pub fn bottom_left(&self) -> Complex {
        self.bottom_left
    }

    #[must_use]
    pub fn top_right(&self) -> Complex {
        self.top_right
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.bottom_left.real()
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.top_right.real()
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom_left.imag()
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top_right.imag()
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right() - self.left()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.top() - self.bottom()
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.left() <= point.real()
            && self.bottom() <= point.imag()
            && self.right() >= point.real()
            && self.top() >= point.imag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_new_valid() {
        let bottom_left = Complex::new(-2.0, -2.0);
        let top_right = Complex::new(2.0, 2.0);

        let rect = ComplexRect::new(bottom_left, top_right).unwrap();

        assert_eq!(rect.bottom_left(), bottom_left);
        assert_eq!(rect.top_right(), top_right);
    }

    #[test]
    fn test_complex_rect_from_bounds() {
        let rect = ComplexRect::from_bounds(-2.0, 2.0, 2.0, -2.0).unwrap();

        assert_eq!(rect.left(), -2.0);
        assert_eq!(rect.top(), 2.0);
        assert_eq!(rect.right(), 2.0);
        assert_eq!(rect.bottom(), -2.0);
    }

    #[test]
    fn test_complex_rect_dimensions() {
        let rect =
            ComplexRect::new(Complex::new(-2.5, -1.0), Complex::new(1.0, 1.0)).unwrap();

        assert_eq!(rect.width(), 3.5);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        let zero_width =
            ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(0.0, 100.0));
        let negative_width =
            ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(-100.0, 10.0));
        let zero_height =
            ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(100.0, 0.0));
        let negative_height =
            ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(100.0, -10.0));

        assert_eq!(
            zero_width,
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            negative_width,
            Err(ComplexRectError::InvalidSize {
                width: -100.0,
                height: 10.0
            })
        );
        assert_eq!(
            zero_height,
            Err(ComplexRectError::InvalidSize {
                width: 100.0,
                height: 0.0
            })
        );
        assert_eq!(
            negative_height,
            Err(ComplexRectError::InvalidSize {
                width: 100.0,
                height: -10.0
            })
        );
    }

    #[test]
    fn test_complex_rect_contains_point() {
        let rect =
            ComplexRect::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap();

        assert!(rect.contains_point(Complex::new(0.0, 0.0)));
        assert!(rect.contains_point(Complex::new(-2.0, -1.0)));
        assert!(rect.contains_point(Complex::new(1.0, 1.0)));
        assert!(!rect.contains_point(Complex::new(1.5, 0.0)));
        assert!(!rect.contains_point(Complex::new(0.0, -1.5)));
    }
}
