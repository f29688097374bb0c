use crate::Utils::parsers::parse_float;
use crate::numerical::BVP_Galerkin::polynomial::Polynomial;
use gauss_quad::GaussLegendre;
use std::fmt;

/// Closed interval of the independent variable, `[infimum, supremum]`, with a
/// definite-integral operator over polynomials. The Galerkin assembly uses
/// this operator for its inner products.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    infimum: f64,
    supremum: f64,
}

impl Domain {
    pub fn new(infimum: f64, supremum: f64) -> Result<Domain, String> {
        let infimum = parse_float(infimum)?;
        let supremum = parse_float(supremum)?;
        if !(infimum < supremum) {
            return Err(format!(
                "Expected infimum < supremum but {} >= {}",
                infimum, supremum
            ));
        }
        Ok(Domain { infimum, supremum })
    }

    pub fn infimum(&self) -> f64 {
        self.infimum
    }

    pub fn supremum(&self) -> f64 {
        self.supremum
    }

    pub fn length(&self) -> f64 {
        self.supremum - self.infimum
    }

    pub fn contains(&self, x: f64) -> bool {
        self.infimum <= x && x <= self.supremum
    }

    /// Definite integral of a polynomial over the domain by Gauss-Legendre
    /// quadrature. A rule with k nodes is exact up to degree 2k - 1, so the
    /// node count is derived from the polynomial degree and the result is
    /// exact up to rounding.
    pub fn integrate_polynomial(&self, poly: &Polynomial) -> Result<f64, String> {
        let nodes = (poly.degree() / 2 + 1).max(2);
        let quad = GaussLegendre::new(nodes)
            .map_err(|e| format!("Failed to create Gauss-Legendre quadrature: {:?}", e))?;
        Ok(quad.integrate(self.infimum, self.supremum, |x| poly.eval(x)))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.infimum, self.supremum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_construction_validation() {
        assert!(Domain::new(0.0, 1.0).is_ok());
        assert!(Domain::new(1.0, 0.0).is_err());
        assert!(Domain::new(1.0, 1.0).is_err());
        assert!(Domain::new(f64::NAN, 1.0).is_err());
        assert!(Domain::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_accessors() {
        let domain = Domain::new(-1.0, 3.0).unwrap();
        assert_eq!(domain.infimum(), -1.0);
        assert_eq!(domain.supremum(), 3.0);
        assert_eq!(domain.length(), 4.0);
        assert!(domain.contains(0.0));
        assert!(domain.contains(3.0));
        assert!(!domain.contains(3.5));
        assert_eq!(format!("{}", domain), "[-1, 3]");
    }

    #[test]
    fn test_integrate_monomials_exactly() {
        // integral of x^k over [a, b] is (b^(k+1) - a^(k+1)) / (k + 1)
        let domain = Domain::new(-1.0, 2.0).unwrap();
        for k in 0..=6usize {
            let mut coefficients = vec![0.0; k + 1];
            coefficients[k] = 1.0;
            let poly = Polynomial::new(coefficients).unwrap();
            let expected = (2.0f64.powi(k as i32 + 1) - (-1.0f64).powi(k as i32 + 1))
                / (k as f64 + 1.0);
            let result = domain.integrate_polynomial(&poly).unwrap();
            assert_relative_eq!(result, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_integrate_zero_polynomial() {
        let domain = Domain::new(0.0, 1.0).unwrap();
        let result = domain.integrate_polynomial(&Polynomial::zero()).unwrap();
        assert_relative_eq!(result, 0.0);
    }
}
