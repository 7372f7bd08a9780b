use crate::TreespaceError;

/// The upper triangular packing of a symmetric leaf-by-leaf table. The diagonal and the
/// redundant lower triangle are not stored, so `n` leaves occupy `n(n-1)/2` slots. Leaf `a`'s
/// row starts at `index_offsets[a-1]` and pair `(a, b)` with `a < b` sits `b - a - 1` slots
/// further along.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangularPacking {
    n_leaves: usize,
    n_pairs: usize,
    index_offsets: Vec<i32>,
}

impl TriangularPacking {
    /// Creates the packing for a tree with `n_leaves` leaves.
    ///
    /// # Parameters
    /// * `n_leaves` - the number of leaves, numbered `1..=n_leaves`.
    ///
    /// # Returns
    /// * A result that, if successful, contains the packing. An error is returned if the
    ///   number of pairs would not fit in a 32 bit signed offset.
    ///
    /// # Examples
    /// ```
    ///use treespace_distances::TriangularPacking;
    ///
    ///let packing = TriangularPacking::new(4).unwrap();
    ///assert_eq!(packing.index_offsets(), &[0, 3, 5, 6]);
    ///assert_eq!(packing.n_pairs(), 6);
    /// ```
    pub fn new(n_leaves: usize) -> Result<Self, TreespaceError> {
        let n_pairs = n_pairs(n_leaves).ok_or_else(|| {
            TreespaceError::TooManyLeaves(format!(
                "{n_leaves} leaves need more slots than can be counted"
            ))
        })?;
        if n_pairs > i32::MAX as usize {
            return Err(TreespaceError::TooManyLeaves(format!(
                "{n_leaves} leaves need {n_pairs} slots, more than {} can be addressed",
                i32::MAX
            )));
        }
        let index_offsets = (0..n_leaves)
            .map(|row| (row * n_leaves - row * (row + 1) / 2) as i32)
            .collect();
        Ok(TriangularPacking { n_leaves, n_pairs, index_offsets })
    }

    pub fn n_leaves(&self) -> usize {
        self.n_leaves
    }

    /// The number of unordered pairs of distinct leaves, i.e. the length of a packed table.
    pub fn n_pairs(&self) -> usize {
        self.n_pairs
    }

    /// The per-leaf base offsets, in the form expected by
    /// [`update_distances_with_combinations`](crate::update_distances_with_combinations).
    pub fn index_offsets(&self) -> &[i32] {
        &self.index_offsets
    }

    /// Finds the packed slot of the unordered pair `(a, b)`. Symmetric in `a` and `b`.
    ///
    /// # Examples
    /// ```
    ///use treespace_distances::TriangularPacking;
    ///
    ///let packing = TriangularPacking::new(4).unwrap();
    ///assert_eq!(packing.pair_index(1, 3).unwrap(), 1);
    ///assert_eq!(packing.pair_index(4, 3).unwrap(), 5);
    /// ```
    pub fn pair_index(&self, a: i32, b: i32) -> Result<usize, TreespaceError> {
        if a == b {
            return Err(TreespaceError::DuplicateLeaf(format!(
                "pair ({a}, {b}) lies on the diagonal, which is not stored"
            )));
        }
        let idx = flat_index(&self.index_offsets, a, b)?;
        let n_pairs = self.n_pairs();
        if idx >= n_pairs {
            return Err(TreespaceError::IndexOutOfRange(format!(
                "pair ({a}, {b}) maps to slot {idx}, but only {n_pairs} slots exist"
            )));
        }
        Ok(idx)
    }
}

/// `n(n-1)/2`, or `None` if the product overflows.
fn n_pairs(n_leaves: usize) -> Option<usize> {
    n_leaves
        .checked_mul(n_leaves.saturating_sub(1))
        .map(|product| product / 2)
}

/// Rolls the unordered pair `(a, b)` into a 0-based flat index using the caller's offsets.
/// Both ids must be 1-based and address an entry of `index_offsets`. The upper bound of the
/// resulting index is left for the caller to check against its own table.
pub(crate) fn flat_index(index_offsets: &[i32], a: i32, b: i32) -> Result<usize, TreespaceError> {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let n_leaves = index_offsets.len();
    for leaf in [first, second] {
        if leaf < 1 || leaf as usize > n_leaves {
            return Err(TreespaceError::IndexOutOfRange(format!(
                "leaf {leaf} of pair ({a}, {b}) is outside 1..={n_leaves}"
            )));
        }
    }
    let offset = i64::from(index_offsets[(first - 1) as usize]);
    let idx = offset + i64::from(second) - i64::from(first) - 1;
    if idx < 0 {
        return Err(TreespaceError::IndexOutOfRange(format!(
            "pair ({a}, {b}) maps to negative slot {idx}"
        )));
    }
    Ok(idx as usize)
}
