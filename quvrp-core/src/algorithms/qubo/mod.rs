//! Contains the VRP ⇄ QUBO reformulation layer.
//!
//! A routing decision is modelled by a binary variable `x[i,j,k]` which is set to 1
//! iff vehicle `k` travels directly from node `i` to node `j`. The linear index of
//! such variable is `i*n*v + j*v + k` where `n` is node count and `v` is vehicle
//! count. This convention is shared bit-for-bit by the encoder, the sampling
//! heuristic and the decoder.

mod encoding;
pub use self::encoding::*;

mod decoding;
pub use self::decoding::*;

use crate::utils::Float;

/// A binary assignment vector over `x[i,j,k]` variables.
pub type BinaryVector = Vec<u8>;

/// Maps `(from, to, vehicle)` triples to linear variable indices and back.
#[derive(Clone, Copy, Debug)]
pub struct VariableLayout {
    nodes: usize,
    vehicles: usize,
}

impl VariableLayout {
    /// Creates a new instance of `VariableLayout` for the given problem dimensions.
    pub fn new(nodes: usize, vehicles: usize) -> Self {
        Self { nodes, vehicles }
    }

    /// Returns a linear index of the `x[from,to,vehicle]` variable.
    pub fn index(&self, from: usize, to: usize, vehicle: usize) -> usize {
        from * self.nodes * self.vehicles + to * self.vehicles + vehicle
    }

    /// Returns total amount of binary variables.
    pub fn len(&self) -> usize {
        self.nodes * self.nodes * self.vehicles
    }

    /// Returns true if the layout has no variables.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A square matrix over binary routing variables where diagonal entries keep linear
/// objective/penalty coefficients and off-diagonal entries keep quadratic penalty
/// coefficients.
///
/// The matrix is upper-accumulating: quadratic contributions are added once per
/// variable pair rather than mirrored, so it is not strictly symmetric.
pub struct QuboMatrix {
    data: Vec<Float>,
    dimension: usize,
}

impl QuboMatrix {
    /// Creates a new zero matrix for the given variable layout.
    pub fn new(layout: VariableLayout) -> Self {
        let dimension = layout.len();
        Self { data: vec![0.; dimension * dimension], dimension }
    }

    /// Adds the given value to the matrix entry, accumulating with previous contributions.
    pub fn add(&mut self, row: usize, col: usize, value: Float) {
        self.data[row * self.dimension + col] += value;
    }

    /// Returns the matrix entry.
    pub fn get(&self, row: usize, col: usize) -> Float {
        self.data[row * self.dimension + col]
    }

    /// Returns the matrix dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Evaluates the quadratic form `xᵗQx` for the given binary assignment.
    pub fn evaluate(&self, assignment: &[u8]) -> Float {
        assert_eq!(assignment.len(), self.dimension);

        (0..self.dimension)
            .filter(|&row| assignment[row] == 1)
            .map(|row| (0..self.dimension).filter(|&col| assignment[col] == 1).map(|col| self.get(row, col)).sum::<Float>())
            .sum()
    }
}
