use crate::Utils::parsers::parse_float;
use itertools::{EitherOrBoth, Itertools};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Dense univariate polynomial with real coefficients stored lowest degree
/// first: `[c0, c1, ..., cn]` represents c0 + c1*x + ... + cn*x^n.
///
/// An empty coefficient vector is the zero polynomial. Trailing zero
/// coefficients are kept as given - the fitting routines rely on the slot of
/// the leading coefficient being present explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Build a polynomial from coefficients, lowest degree first.
    /// Every coefficient must be a finite real number.
    pub fn new(coefficients: Vec<f64>) -> Result<Polynomial, String> {
        for (i, c) in coefficients.iter().enumerate() {
            parse_float(*c).map_err(|e| format!("coefficient {}: {}", i, e))?;
        }
        Ok(Polynomial { coefficients })
    }

    pub fn zero() -> Polynomial {
        Polynomial {
            coefficients: Vec::new(),
        }
    }

    // internal constructor for coefficients produced by the solvers,
    // which are already plain finite floats
    pub(crate) fn from_coefficients(coefficients: Vec<f64>) -> Polynomial {
        Polynomial { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficient at the given power; zero past the stored length.
    pub fn coefficient(&self, index: usize) -> f64 {
        self.coefficients.get(index).copied().unwrap_or(0.0)
    }

    /// Index of the highest nonzero coefficient, 0 for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .rposition(|&c| c != 0.0)
            .unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|&c| c == 0.0)
    }

    /// Evaluate at `x` by Horner's scheme.
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// First derivative.
    pub fn derivative(&self) -> Polynomial {
        if self.coefficients.len() <= 1 {
            return Polynomial::zero();
        }
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, &c)| power as f64 * c)
            .collect();
        Polynomial { coefficients }
    }

    pub fn scale(&self, factor: f64) -> Polynomial {
        Polynomial {
            coefficients: self.coefficients.iter().map(|&c| factor * c).collect(),
        }
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let coefficients = self
            .coefficients
            .iter()
            .zip_longest(rhs.coefficients.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => a + b,
                EitherOrBoth::Left(a) => *a,
                EitherOrBoth::Right(b) => *b,
            })
            .collect();
        Polynomial { coefficients }
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let coefficients = self
            .coefficients
            .iter()
            .zip_longest(rhs.coefficients.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => a - b,
                EitherOrBoth::Left(a) => *a,
                EitherOrBoth::Right(b) => -b,
            })
            .collect();
        Polynomial { coefficients }
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    // coefficient convolution
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        if self.coefficients.is_empty() || rhs.coefficients.is_empty() {
            return Polynomial::zero();
        }
        let mut coefficients = vec![0.0; self.coefficients.len() + rhs.coefficients.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in rhs.coefficients.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }
        Polynomial { coefficients }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (power, &c) in self.coefficients.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            if first {
                first = false;
            } else {
                write!(f, " + ")?;
            }
            match power {
                0 => write!(f, "{}", c)?,
                1 => write!(f, "{}*x", c)?,
                _ => write!(f, "{}*x^{}", c, power)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_eval_horner() {
        // 1 - 2x + 3x^2
        let p = Polynomial::new(vec![1.0, -2.0, 3.0]).unwrap();
        assert_relative_eq!(p.eval(0.0), 1.0);
        assert_relative_eq!(p.eval(1.0), 2.0);
        assert_relative_eq!(p.eval(2.0), 9.0);
        assert_relative_eq!(p.eval(-1.0), 6.0);
    }

    #[test]
    fn test_zero_polynomial() {
        let z = Polynomial::zero();
        assert!(z.is_zero());
        assert_eq!(z.eval(3.7), 0.0);
        assert_eq!(z.degree(), 0);
        assert_eq!(z.coefficient(5), 0.0);
        assert_eq!(format!("{}", z), "0");
    }

    #[test]
    fn test_rejects_non_finite_coefficients() {
        assert!(Polynomial::new(vec![1.0, f64::NAN]).is_err());
        assert!(Polynomial::new(vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn test_derivative() {
        // 5 + x + 4x^3 -> 1 + 12x^2
        let p = Polynomial::new(vec![5.0, 1.0, 0.0, 4.0]).unwrap();
        let dp = p.derivative();
        assert_eq!(dp.coefficients(), &[1.0, 0.0, 12.0]);
        // second derivative: 24x
        let ddp = dp.derivative();
        assert_eq!(ddp.coefficients(), &[0.0, 24.0]);
        assert!(Polynomial::new(vec![42.0]).unwrap().derivative().is_zero());
    }

    #[test]
    fn test_degree_ignores_trailing_zeros() {
        let p = Polynomial::new(vec![1.0, 2.0, 0.0, 0.0]).unwrap();
        assert_eq!(p.degree(), 1);
        assert_eq!(p.coefficients().len(), 4);
    }

    #[test]
    fn test_add_sub_different_lengths() {
        let p = Polynomial::new(vec![1.0, 2.0]).unwrap();
        let q = Polynomial::new(vec![3.0, 0.0, 1.0]).unwrap();
        assert_eq!((&p + &q).coefficients(), &[4.0, 2.0, 1.0]);
        assert_eq!((&p - &q).coefficients(), &[-2.0, 2.0, -1.0]);
    }

    #[test]
    fn test_mul_convolution() {
        // (1 + x)*(1 - x) = 1 - x^2
        let p = Polynomial::new(vec![1.0, 1.0]).unwrap();
        let q = Polynomial::new(vec![1.0, -1.0]).unwrap();
        assert_eq!((&p * &q).coefficients(), &[1.0, 0.0, -1.0]);
        assert!((&p * &Polynomial::zero()).is_zero());
    }

    #[test]
    fn test_scale() {
        let p = Polynomial::new(vec![1.0, -2.0]).unwrap();
        assert_eq!(p.scale(3.0).coefficients(), &[3.0, -6.0]);
    }

    #[test]
    fn test_display() {
        let p = Polynomial::new(vec![1.0, 0.0, -2.0]).unwrap();
        assert_eq!(format!("{}", p), "1 + -2*x^2");
    }
}
