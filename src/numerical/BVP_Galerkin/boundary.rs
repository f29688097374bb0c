//! Abstraction for two-point boundary conditions of the form
//!
//! a*y(x) + b*y'(x) = c
//!
//! where a, b and c are real numbers. Every condition is normalized at
//! construction to the canonical form
//!
//! cos(theta)*y(x) + sin(theta)*y'(x) = c
//!
//! with theta in (-pi/2, pi/2], so Dirichlet (theta = 0), Neumann
//! (theta = pi/2) and mixed conditions are all handled by the same formulas
//! downstream. The module also contains the fitting procedures that produce
//! the lowest-degree polynomial satisfying a pair of conditions, one at each
//! endpoint of the interval.
use crate::Utils::parsers::parse_float;
use crate::numerical::BVP_Galerkin::polynomial::Polynomial;
use log::{debug, warn};
use nalgebra::{DMatrix, DVector};
use std::f64::consts::FRAC_PI_2;
use std::fmt;

/// Threshold below which a determinant or residual counts as zero. Every
/// "equals zero" decision of the fitting procedures goes through this single
/// constant.
pub const ZERO_TOL: f64 = 1e-15;

pub fn equals_zero(value: f64) -> bool {
    value.abs() < ZERO_TOL
}

#[derive(Debug, Clone)]
pub struct BoundaryCondition {
    x: f64,
    theta: f64,
    c: f64,
    cos_theta: f64,
    sin_theta: f64,
    tan_theta: f64,
}

// a boundary condition is its (x, theta, c) triple; the trigonometric fields
// are functions of theta and cannot disagree
impl PartialEq for BoundaryCondition {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.theta == other.theta && self.c == other.c
    }
}

impl BoundaryCondition {
    ////////////////////////////////////////////////////////////////////////////////
    //                              CONSTRUCTORS
    ////////////////////////////////////////////////////////////////////////////////

    /// Build a condition from the raw coefficients of a*y(x) + b*y'(x) = c.
    ///
    /// 'a' and 'b' must not both be zero (the condition would constrain
    /// nothing); all inputs must be finite reals.
    pub fn new(x: f64, a: f64, b: f64, c: f64) -> Result<BoundaryCondition, String> {
        let x = parse_float(x)?;
        let a = parse_float(a)?;
        let b = parse_float(b)?;
        let c = parse_float(c)?;

        if a == 0.0 {
            if b == 0.0 {
                return Err("'a' and 'b' can not be both zero".to_string());
            }
            Ok(Self::from_canonical(x, FRAC_PI_2, c / b))
        } else {
            let theta = (b / a).atan();
            Ok(Self::from_canonical(x, theta, (theta.cos() / a) * c))
        }
    }

    /// Build a condition directly from the canonical angle form.
    pub fn from_theta(x: f64, theta: f64, c: f64) -> Result<BoundaryCondition, String> {
        let x = parse_float(x)?;
        let theta = parse_float(theta)?;
        let c = parse_float(c)?;

        if !(-FRAC_PI_2 < theta && theta <= FRAC_PI_2) {
            return Err(format!(
                "Expected -pi/2 < theta <= pi/2. Given {}",
                theta
            ));
        }
        Ok(Self::from_canonical(x, theta, c))
    }

    /// Dirichlet condition y(x) = c.
    pub fn dirichlet(x: f64, c: f64) -> Result<BoundaryCondition, String> {
        Self::new(x, 1.0, 0.0, c)
    }

    /// Neumann condition y'(x) = c.
    pub fn neumann(x: f64, c: f64) -> Result<BoundaryCondition, String> {
        Self::new(x, 0.0, 1.0, c)
    }

    // the trigonometric values are derived once here and stored as plain
    // fields; cos(pi/2) carries ~6e-17 of floating residue, so the Neumann
    // angle gets the exact values
    fn from_canonical(x: f64, theta: f64, c: f64) -> BoundaryCondition {
        let cos_theta = if theta == FRAC_PI_2 { 0.0 } else { theta.cos() };
        let sin_theta = theta.sin();
        let tan_theta = if theta == FRAC_PI_2 {
            f64::INFINITY
        } else {
            theta.tan()
        };
        BoundaryCondition {
            x,
            theta,
            c,
            cos_theta,
            sin_theta,
            tan_theta,
        }
    }

    /// Same point and angle, right-hand side set to zero.
    pub fn homogeneous_copy(&self) -> BoundaryCondition {
        BoundaryCondition {
            c: 0.0,
            ..self.clone()
        }
    }

    /// Same point and angle, new right-hand side.
    pub fn nonhomogeneous_copy(&self, c: f64) -> Result<BoundaryCondition, String> {
        let c = parse_float(c)?;
        Ok(BoundaryCondition { c, ..self.clone() })
    }

    ////////////////////////////////////////////////////////////////////////////////
    //                              CLASSIFICATION
    ////////////////////////////////////////////////////////////////////////////////

    pub fn is_homogeneous(&self) -> bool {
        self.c == 0.0
    }

    pub fn is_dirichlet(&self) -> bool {
        self.theta == 0.0
    }

    pub fn is_neumann(&self) -> bool {
        self.theta == FRAC_PI_2
    }

    pub fn is_mixed(&self) -> bool {
        !self.is_dirichlet() && !self.is_neumann()
    }

    ////////////////////////////////////////////////////////////////////////////////
    //                              ACCESSORS
    ////////////////////////////////////////////////////////////////////////////////

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn cos_theta(&self) -> f64 {
        self.cos_theta
    }

    pub fn sin_theta(&self) -> f64 {
        self.sin_theta
    }

    /// +inf for a Neumann condition.
    pub fn tan_theta(&self) -> f64 {
        self.tan_theta
    }

    ////////////////////////////////////////////////////////////////////////////////
    //                              REGRESSOR AND RESIDUAL
    ////////////////////////////////////////////////////////////////////////////////

    /// Value this condition's operator produces on the monomial x^degree,
    /// evaluated at the condition's own point:
    ///
    /// cos(theta)*x^d + sin(theta)*d*x^(d-1)
    ///
    /// These numbers are the matrix entries of every linear system assembled
    /// by the fitting procedures.
    pub fn polynomial_regressor(&self, degree: usize) -> f64 {
        if degree == 0 {
            return self.cos_theta;
        }
        self.x.powi(degree as i32 - 1) * (self.x * self.cos_theta + degree as f64 * self.sin_theta)
    }

    /// Signed residual cos(theta)*P(x) + sin(theta)*P'(x) - c.
    pub fn get_polynomial_error(&self, poly: &Polynomial) -> f64 {
        self.cos_theta * poly.eval(self.x) + self.sin_theta * poly.derivative().eval(self.x)
            - self.c
    }

    pub fn is_satisfied_by_polynomial(&self, poly: &Polynomial) -> bool {
        equals_zero(self.get_polynomial_error(poly))
    }

    ////////////////////////////////////////////////////////////////////////////////
    //                              POLYNOMIAL FITTING
    ////////////////////////////////////////////////////////////////////////////////

    /// Fit the lowest-degree polynomial satisfying both conditions.
    ///
    /// `lbc` and `ubc` are the conditions at the lower and upper endpoint,
    /// `lbc.x() < ubc.x()` is required. When both conditions are homogeneous
    /// the fitted polynomial would be identically zero without a degree
    /// target, so `degree` (>= 2) must be given and the leading coefficient is
    /// normalized to 1; for a pair with a nonzero right-hand side the minimal
    /// sufficient degree (1, 2 or 3) is derived and `degree` is ignored.
    pub fn fit_polynomial(
        lbc: &BoundaryCondition,
        ubc: &BoundaryCondition,
        degree: Option<usize>,
    ) -> Result<Polynomial, String> {
        if !(lbc.x < ubc.x) {
            return Err(format!(
                "Expected lbc.x < ubc.x but {} >= {}",
                lbc.x, ubc.x
            ));
        }

        if lbc.is_homogeneous() && ubc.is_homogeneous() {
            let degree = degree
                .ok_or_else(|| "degree must be given for a pair of homogeneous conditions".to_string())?;
            if degree < 2 {
                return Err(format!("Expected degree >= 2. Given {}", degree));
            }
            fit_polynomial_for_homogeneous_bcs(lbc, ubc, degree)
        } else {
            fit_polynomial_for_nonhomogeneous_bcs(lbc, ubc)
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sin_theta == 0.0 {
            write!(f, "Boundary Condition: y({}) = {}", self.x, self.c)
        } else if self.sin_theta == 1.0 {
            write!(f, "Boundary Condition: y'({}) = {}", self.x, self.c)
        } else if self.sin_theta > 0.0 {
            write!(
                f,
                "Boundary Condition: {}*y({}) + {}*y'({}) = {}",
                self.cos_theta, self.x, self.sin_theta, self.x, self.c
            )
        } else {
            write!(
                f,
                "Boundary Condition: {}*y({}) - {}*y'({}) = {}",
                self.cos_theta, self.x, -self.sin_theta, self.x, self.c
            )
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
//                        NON-HOMOGENEOUS PROCEDURE
////////////////////////////////////////////////////////////////////////////////

// A*[c0, c1]^T = [lbc.c, ubc.c]^T with degree escalation 1 -> 2 -> 3. Two
// independent point conditions on a 4-parameter family always admit a
// solution, so degree 3 is guaranteed sufficient.
fn fit_polynomial_for_nonhomogeneous_bcs(
    lbc: &BoundaryCondition,
    ubc: &BoundaryCondition,
) -> Result<Polynomial, String> {
    let b = DVector::from_vec(vec![lbc.c(), ubc.c()]);

    let a = DMatrix::from_row_slice(
        2,
        2,
        &[
            lbc.polynomial_regressor(0),
            lbc.polynomial_regressor(1),
            ubc.polynomial_regressor(0),
            ubc.polynomial_regressor(1),
        ],
    );

    if !equals_zero(a.determinant()) {
        // hence, a polynomial of degree 1 is enough
        debug!("boundary pair is regular at degree 1");
        let solution = a
            .lu()
            .solve(&b)
            .ok_or_else(|| "failed to solve the 2x2 boundary condition system".to_string())?;
        return Ok(Polynomial::from_coefficients(solution.iter().copied().collect()));
    }

    // the degree-1 system is rank deficient; the quadratic column resolves it
    // unless the conditions are mirror images whose slope matches half the
    // interval length, in which case that column is collinear too
    let quadratic_still_collinear = equals_zero(lbc.theta() + ubc.theta())
        && equals_zero(lbc.tan_theta() - (ubc.x() - lbc.x()) / 2.0);

    if !quadratic_still_collinear {
        // hence, a polynomial of degree 2 is enough
        debug!("degree 1 system is singular, escalating to degree 2");
        let a = DMatrix::from_row_slice(
            2,
            3,
            &[
                lbc.polynomial_regressor(0),
                lbc.polynomial_regressor(1),
                lbc.polynomial_regressor(2),
                ubc.polynomial_regressor(0),
                ubc.polynomial_regressor(1),
                ubc.polynomial_regressor(2),
            ],
        );
        let solution = least_squares(&a, &b)?;
        return Ok(Polynomial::from_coefficients(solution));
    }

    // hence, a polynomial of degree 3 is necessary
    debug!("degree 2 extension is collinear as well, escalating to degree 3");
    let a = DMatrix::from_row_slice(
        2,
        4,
        &[
            lbc.polynomial_regressor(0),
            lbc.polynomial_regressor(1),
            lbc.polynomial_regressor(2),
            lbc.polynomial_regressor(3),
            ubc.polynomial_regressor(0),
            ubc.polynomial_regressor(1),
            ubc.polynomial_regressor(2),
            ubc.polynomial_regressor(3),
        ],
    );
    let solution = least_squares(&a, &b)?;
    Ok(Polynomial::from_coefficients(solution))
}

////////////////////////////////////////////////////////////////////////////////
//                        HOMOGENEOUS PROCEDURE
////////////////////////////////////////////////////////////////////////////////

// Seek c0 + c1*x + x^n satisfying both homogeneous conditions: a 2x3 matrix M
// with columns R(0), R(1), R(n) is split into its three 2x2 minors and the
// (c0, c1) pair is recovered by Cramer's rule, with the leading coefficient
// pinned to 1.
fn fit_polynomial_for_homogeneous_bcs(
    lbc: &BoundaryCondition,
    ubc: &BoundaryCondition,
    degree: usize,
) -> Result<Polynomial, String> {
    let m = DMatrix::from_row_slice(
        2,
        3,
        &[
            lbc.polynomial_regressor(0),
            lbc.polynomial_regressor(1),
            lbc.polynomial_regressor(degree),
            ubc.polynomial_regressor(0),
            ubc.polynomial_regressor(1),
            ubc.polynomial_regressor(degree),
        ],
    );

    let d_a = dropped_column_determinant(&m, 0, 1);
    let d_b = dropped_column_determinant(&m, 0, 2);
    let d_c = dropped_column_determinant(&m, 1, 2);

    if !equals_zero(d_a) {
        // no problem! planes are not the same and the (c0, c1) system is regular
        let mut coefficients = vec![0.0; degree + 1];
        coefficients[0] = d_c / d_a;
        coefficients[1] = -d_b / d_a;
        coefficients[degree] = 1.0;
        return Ok(Polynomial::from_coefficients(coefficients));
    }

    if equals_zero(d_b) && equals_zero(d_c) {
        // no problem! planes are the same, one of c0, c1 stays free and is set
        // to zero
        debug!("condition planes coincide at degree {}", degree);
        let mut coefficients = vec![0.0; degree + 1];
        if equals_zero(m[(0, 0)]) {
            coefficients[1] = -m[(0, 2)] / m[(0, 1)];
        } else {
            coefficients[0] = -m[(0, 2)] / m[(0, 0)];
        }
        coefficients[degree] = 1.0;
        return Ok(Polynomial::from_coefficients(coefficients));
    }

    // problem!! planes are not the same, but the leading coefficient column
    // cannot resolve them
    if degree == 2 {
        // accepted approximation: fit a polynomial of degree < 2 to the upper
        // condition row alone
        warn!(
            "homogeneous conditions are inconsistent at degree 2, \
             falling back to a least-squares fit of the upper condition alone"
        );
        let a = DMatrix::from_row_slice(
            1,
            2,
            &[ubc.polynomial_regressor(0), ubc.polynomial_regressor(1)],
        );
        let b = DVector::from_vec(vec![0.0]);
        let solution = least_squares(&a, &b)?;
        return Ok(Polynomial::from_coefficients(solution));
    }

    fit_polynomial_for_homogeneous_bcs_alternative(lbc, ubc, degree)
}

// Same construction one level higher: basis columns R(0), R(2), R(n), free
// coefficients (c0, c2, cn). Reached only for degree > 2 when the primary
// basis is inconsistent.
fn fit_polynomial_for_homogeneous_bcs_alternative(
    lbc: &BoundaryCondition,
    ubc: &BoundaryCondition,
    degree: usize,
) -> Result<Polynomial, String> {
    debug!(
        "primary homogeneous basis is inconsistent at degree {}, widening to (1, x^2, x^{})",
        degree, degree
    );
    let m = DMatrix::from_row_slice(
        2,
        3,
        &[
            lbc.polynomial_regressor(0),
            lbc.polynomial_regressor(2),
            lbc.polynomial_regressor(degree),
            ubc.polynomial_regressor(0),
            ubc.polynomial_regressor(2),
            ubc.polynomial_regressor(degree),
        ],
    );

    let d_a = dropped_column_determinant(&m, 0, 1);
    let d_b = dropped_column_determinant(&m, 0, 2);
    let d_c = dropped_column_determinant(&m, 1, 2);

    if !equals_zero(d_a) {
        // no problem! planes are not the same and the (c0, c2) system is regular
        let mut coefficients = vec![0.0; degree + 1];
        coefficients[0] = d_c / d_a;
        coefficients[2] = -d_b / d_a;
        coefficients[degree] = 1.0;
        return Ok(Polynomial::from_coefficients(coefficients));
    }

    if equals_zero(d_b) && equals_zero(d_c) {
        // no problem! planes are the same. A Neumann condition at x = 0 makes
        // its whole row vanish, so the constraint is read from the first row
        // with a usable pivot
        let row = if !equals_zero(m[(0, 0)]) || !equals_zero(m[(0, 1)]) {
            0
        } else {
            1
        };
        let mut coefficients = vec![0.0; degree + 1];
        if equals_zero(m[(row, 0)]) {
            coefficients[2] = -m[(row, 2)] / m[(row, 1)];
        } else {
            coefficients[0] = -m[(row, 2)] / m[(row, 0)];
        }
        coefficients[degree] = 1.0;
        return Ok(Polynomial::from_coefficients(coefficients));
    }

    // recognized degeneracy with no handling: both bases are inconsistent
    // with a nonzero leading coefficient. Fail loudly rather than return an
    // approximation the caller did not ask for.
    Err(format!(
        "fitting a homogeneous polynomial of degree {} to this pair of boundary conditions \
         is not implemented: both condition planes are inconsistent with a nonzero leading \
         coefficient",
        degree
    ))
}

////////////////////////////////////////////////////////////////////////////////
//                        SHARED LINEAR ALGEBRA HELPERS
////////////////////////////////////////////////////////////////////////////////

// determinant of the 2x2 minor keeping the two given columns
fn dropped_column_determinant(m: &DMatrix<f64>, col_left: usize, col_right: usize) -> f64 {
    DMatrix::from_row_slice(
        2,
        2,
        &[
            m[(0, col_left)],
            m[(0, col_right)],
            m[(1, col_left)],
            m[(1, col_right)],
        ],
    )
    .determinant()
}

// minimal-norm least-squares solution via SVD, the nalgebra counterpart of a
// lstsq call
fn least_squares(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<Vec<f64>, String> {
    let svd = a.clone().svd(true, true);
    let solution = svd
        .solve(b, ZERO_TOL)
        .map_err(|e| format!("least-squares solve failed: {}", e))?;
    Ok(solution.iter().copied().collect())
}
