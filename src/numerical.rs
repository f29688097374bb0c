/// Two-point boundary conditions and polynomial machinery for Galerkin-type
/// BVP solvers: a boundary condition pair at the interval endpoints is turned
/// into the minimal-degree polynomial satisfying both conditions exactly,
/// which downstream solvers use as a basis shift / particular solution.
pub mod BVP_Galerkin;
