use crate::combinations::update_distances_with_params;
use crate::{TreespaceError, TriangularPacking, UpdateParams};
use num_traits::Float;

/// Packed length and topological root distances for every pair of leaves of one tree.
/// Generic over floating point numeric types.
#[derive(Debug, Clone, PartialEq)]
pub struct RootDistances<T> {
    packing: TriangularPacking,
    length_root_distances: Vec<T>,
    topological_root_distances: Vec<T>,
    params: UpdateParams,
}

impl<T: Float> RootDistances<T> {
    /// Creates zero-filled distance tables for a tree with `n_leaves` leaves, using the
    /// default update parameters.
    ///
    /// # Examples
    /// ```
    ///use treespace_distances::RootDistances;
    ///
    ///let mut distances = RootDistances::<f64>::new(4).unwrap();
    ///distances.record_split(&[1], &[2, 3], 2.5, 4).unwrap();
    ///assert_eq!(distances.length_distance(3, 1).unwrap(), 2.5);
    ///assert_eq!(distances.topological_distance(1, 2).unwrap(), 4.0);
    ///assert_eq!(distances.length_distance(2, 3).unwrap(), 0.0);
    /// ```
    pub fn new(n_leaves: usize) -> Result<Self, TreespaceError> {
        Self::with_params(n_leaves, UpdateParams::default())
    }

    /// Creates zero-filled distance tables for a tree with `n_leaves` leaves.
    ///
    /// # Parameters
    /// * `n_leaves` - the number of leaves, numbered `1..=n_leaves`.
    /// * `params` - the checks applied on every recorded split.
    pub fn with_params(n_leaves: usize, params: UpdateParams) -> Result<Self, TreespaceError> {
        let packing = TriangularPacking::new(n_leaves)?;
        let n_pairs = packing.n_pairs();
        Ok(RootDistances {
            packing,
            length_root_distances: vec![T::zero(); n_pairs],
            topological_root_distances: vec![T::zero(); n_pairs],
            params,
        })
    }

    /// Records the root distances of one split: every pair with one leaf in `left_partition`
    /// and the other in `right_partition` receives `distance_to_root` and `edges_to_root`.
    /// On error no pair is updated.
    pub fn record_split(
        &mut self,
        left_partition: &[i32],
        right_partition: &[i32],
        distance_to_root: T,
        edges_to_root: i32,
    ) -> Result<(), TreespaceError> {
        update_distances_with_params(
            &mut self.length_root_distances,
            &mut self.topological_root_distances,
            left_partition,
            right_partition,
            self.packing.index_offsets(),
            distance_to_root,
            edges_to_root,
            &self.params,
        )
    }

    pub fn length_distance(&self, a: i32, b: i32) -> Result<T, TreespaceError> {
        let idx = self.packing.pair_index(a, b)?;
        Ok(self.length_root_distances[idx])
    }

    pub fn topological_distance(&self, a: i32, b: i32) -> Result<T, TreespaceError> {
        let idx = self.packing.pair_index(a, b)?;
        Ok(self.topological_root_distances[idx])
    }

    pub fn n_leaves(&self) -> usize {
        self.packing.n_leaves()
    }

    pub fn index_offsets(&self) -> &[i32] {
        self.packing.index_offsets()
    }

    pub fn length_distances(&self) -> &[T] {
        &self.length_root_distances
    }

    pub fn topological_distances(&self) -> &[T] {
        &self.topological_root_distances
    }

    /// Consumes the tables, returning `(length_root_distances, topological_root_distances)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.length_root_distances, self.topological_root_distances)
    }
}
