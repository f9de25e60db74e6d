//! Contains route construction heuristics.

mod jittered_sampling;
pub use self::jittered_sampling::*;

mod nearest_neighbor;
pub use self::nearest_neighbor::*;

use crate::models::problem::VrpProblem;
use crate::models::solution::Route;
use crate::utils::GenericResult;

/// Builds a set of feasible routes for the given problem.
///
/// This is the seam between the solver entry points and a concrete construction
/// strategy: a future backend which actually optimizes the `xᵗQx` form can be
/// substituted here without touching the encoder/decoder contract.
pub trait RouteConstructor {
    /// Constructs routes which together visit every non-depot node at most once.
    fn construct(&self, problem: &VrpProblem) -> GenericResult<Vec<Route>>;
}
