//! examples of usage of RustedODEBVP
/// boundary condition construction and polynomial fitting examples
pub mod bvp_fitting_examples;
