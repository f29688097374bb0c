//!
//! # BVP_Galerkin - Boundary Conditions and Polynomial Fitting Module
//!
//! This module provides the building blocks a Galerkin-type solver needs to
//! handle general two-point boundary conditions of a second order linear ODE:
//! conditions of the form a*y(x) + b*y'(x) = c at each endpoint of an interval,
//! and the lowest-degree polynomial that satisfies a given pair of them.
//!
//! ## Key Features
//! - **Uniform Robin representation**: Dirichlet, Neumann and mixed conditions
//!   are all normalized to cos(theta)*y(x) + sin(theta)*y'(x) = c, so every
//!   downstream formula works with only (x, theta, c)
//! - **Minimal-degree fitting**: degree escalation 1 -> 2 -> 3 for pairs with a
//!   nonzero right-hand side, caller-requested degree with leading coefficient
//!   normalized to 1 for homogeneous pairs
//! - **Degenerate configurations**: parallel constraint planes, rank-deficient
//!   systems and coincident conditions are classified and resolved case by case
//! - **Polynomial arithmetic**: dense polynomials with evaluation, derivative,
//!   addition and multiplication
//! - **Interval integration**: definite integrals of polynomials over a domain
//!   by Gauss-Legendre quadrature, exact for the polynomial degree at hand
//!
//! ## Module Structure
//! - `boundary`: `BoundaryCondition` value type and the fitting algorithms
//! - `polynomial`: dense polynomial value type, coefficients lowest degree first
//! - `domain`: interval `[infimum, supremum]` with a polynomial integral operator
//! - `operator`: second order differential operator with polynomial coefficients
//!
/// boundary condition abstraction and polynomial fitting for condition pairs
pub mod boundary;
/// interval of the independent variable with a definite-integral operator
pub mod domain;
/// second order linear differential operator with polynomial coefficients
pub mod operator;
/// dense univariate polynomial value type
pub mod polynomial;
