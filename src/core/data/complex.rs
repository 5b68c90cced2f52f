use std::error::Error;
use std::fmt;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComplexError {
    DivisionByZero,
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => {
                write!(f, "division by a complex number with zero magnitude")
            }
        }
    }
}

impl Error for ComplexError {}

// Hand-rolled instead of num-complex: divide must surface DivisionByZero
// through a Result, and the Display format is load-bearing for callers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    real: f64,
    imag: f64,
}

impl Complex {
    #[must_use]
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn real(&self) -> f64 {
        self.real
    }

    #[must_use]
    pub fn imag(&self) -> f64 {
        self.imag
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn absolute_value(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.real, -self.imag)
    }

    pub fn divide(&self, other: Self) -> Result<Self, ComplexError> {
        let denom = other.magnitude_squared();

        if denom == 0.0 {
            return Err(ComplexError::DivisionByZero);
        }

        Ok(Self::new(
            (self.real * other.real + self.imag * other.imag) / denom,
            (other.real * self.imag - self.real * other.imag) / denom,
        ))
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.real + other.real, self.imag + other.imag)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.real - other.real, self.imag - other.imag)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(
            self.real * other.real - self.imag * other.imag,
            self.real * other.imag + self.imag * other.real,
        )
    }
}

/// Renders `a+bi` with the compatibility quirks intact: the real part is
/// omitted when zero, `i`/`-i` stand alone for a unit imaginary part, and
/// a complex zero renders as the empty string rather than "0".
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.real != 0.0 {
            write!(f, "{}", self.real)?;
            if self.imag > 0.0 {
                write!(f, "+")?;
            }
        }

        if self.imag == 1.0 {
            write!(f, "i")
        } else if self.imag == -1.0 {
            write!(f, "-i")
        } else if self.imag != 0.0 {
            write!(f, "{}i", self.imag)
        } else {
            Ok(())
        }
    }
}
