use crate::numerical::BVP_Galerkin::polynomial::Polynomial;

/// Second order linear differential operator with polynomial coefficients,
///
/// L[y] = p*y'' + r*y' + q*y
///
/// applied to polynomials. On a polynomial argument the result is again a
/// polynomial, which keeps the Galerkin inner products inside the polynomial
/// algebra.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondOrderOperator {
    p: Polynomial,
    r: Polynomial,
    q: Polynomial,
}

impl SecondOrderOperator {
    /// Coefficient polynomials are given lowest degree first, like every
    /// polynomial in this module.
    pub fn new(p: &[f64], r: &[f64], q: &[f64]) -> Result<SecondOrderOperator, String> {
        Ok(SecondOrderOperator {
            p: Polynomial::new(p.to_vec())?,
            r: Polynomial::new(r.to_vec())?,
            q: Polynomial::new(q.to_vec())?,
        })
    }

    pub fn apply(&self, poly: &Polynomial) -> Polynomial {
        let dp = poly.derivative();
        let ddp = dp.derivative();
        &(&(&self.p * &ddp) + &(&self.r * &dp)) + &(&self.q * poly)
    }

    pub fn p(&self) -> &Polynomial {
        &self.p
    }

    pub fn r(&self) -> &Polynomial {
        &self.r
    }

    pub fn q(&self) -> &Polynomial {
        &self.q
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_non_finite_coefficients() {
        assert!(SecondOrderOperator::new(&[f64::NAN], &[0.0], &[1.0]).is_err());
    }

    #[test]
    fn test_helmholtz_like_operator() {
        // L[y] = y'' + y on y = x^2 gives 2 + x^2
        let op = SecondOrderOperator::new(&[1.0], &[0.0], &[1.0]).unwrap();
        let y = Polynomial::new(vec![0.0, 0.0, 1.0]).unwrap();
        let result = op.apply(&y);
        assert_relative_eq!(result.coefficient(0), 2.0);
        assert_relative_eq!(result.coefficient(1), 0.0);
        assert_relative_eq!(result.coefficient(2), 1.0);
    }

    #[test]
    fn test_variable_coefficients() {
        // L[y] = x*y'' + 2*y' on y = x^3: x*(6x) + 2*(3x^2) = 12x^2
        let op = SecondOrderOperator::new(&[0.0, 1.0], &[2.0], &[]).unwrap();
        let y = Polynomial::new(vec![0.0, 0.0, 0.0, 1.0]).unwrap();
        let result = op.apply(&y);
        assert_eq!(result.degree(), 2);
        assert_relative_eq!(result.coefficient(2), 12.0);
    }

    #[test]
    fn test_pure_multiplication_operator() {
        // p = r = 0 reduces L to multiplication by q
        let op = SecondOrderOperator::new(&[], &[], &[2.0]).unwrap();
        let y = Polynomial::new(vec![1.0, 1.0]).unwrap();
        let result = op.apply(&y);
        assert_eq!(result.coefficients(), &[2.0, 2.0]);
    }
}
