use crate::packing::flat_index;
use crate::validation::PartitionValidator;
use crate::{TreespaceError, UpdateParams};
use num_traits::Float;

/// Stamps a split's root distances into every (left, right) leaf pair of two packed tables,
/// using the default [`UpdateParams`].
///
/// For each `i` in `left_partition` and `j` in `right_partition` the pair is normalised so
/// that `first = min(i, j)` and `second = max(i, j)`, then rolled into the flat index
/// `index_offsets[first - 1] + (second - first) - 1`. That slot of `length_root_distances`
/// receives `distance_to_root` and the same slot of `topological_root_distances` receives
/// `edges_to_root`.
///
/// # Parameters
/// * `length_root_distances` - packed table of path length distances, updated in place.
/// * `topological_root_distances` - packed table of edge count distances, updated in place.
/// * `left_partition` - 1-based ids of the leaves on one side of the split.
/// * `right_partition` - 1-based ids of the leaves on the other side.
/// * `index_offsets` - base offset of each leaf's row in the packed tables.
/// * `distance_to_root` - the value stamped into the length table.
/// * `edges_to_root` - the value stamped into the topological table.
///
/// # Returns
/// * A result that is empty on success. An error is returned if a leaf id falls outside
///   `1..=index_offsets.len()`, if a pair maps outside the tables, or if the tables have
///   different lengths. On error neither table is modified.
///
/// # Examples
/// ```
///use treespace_distances::update_distances_with_combinations;
///
///let mut lengths = vec![0.0; 6];
///let mut edges = vec![0.0; 6];
///update_distances_with_combinations(
///    &mut lengths, &mut edges, &[1], &[2, 3], &[0, 3, 5, 6], 2.5, 4,
///).unwrap();
///assert_eq!(lengths, vec![2.5, 2.5, 0.0, 0.0, 0.0, 0.0]);
///assert_eq!(edges, vec![4.0, 4.0, 0.0, 0.0, 0.0, 0.0]);
/// ```
pub fn update_distances_with_combinations<T: Float>(
    length_root_distances: &mut [T],
    topological_root_distances: &mut [T],
    left_partition: &[i32],
    right_partition: &[i32],
    index_offsets: &[i32],
    distance_to_root: T,
    edges_to_root: i32,
) -> Result<(), TreespaceError> {
    update_distances_with_params(
        length_root_distances,
        topological_root_distances,
        left_partition,
        right_partition,
        index_offsets,
        distance_to_root,
        edges_to_root,
        &UpdateParams::default(),
    )
}

/// Same as [`update_distances_with_combinations`], with the checks configured by `params`.
///
/// # Examples
/// ```
///use treespace_distances::{update_distances_with_params, TreespaceError, UpdateParams};
///
///let params = UpdateParams::builder().check_disjoint(true).build();
///let mut lengths = vec![0.0_f32; 6];
///let mut edges = vec![0.0_f32; 6];
///let result = update_distances_with_params(
///    &mut lengths, &mut edges, &[1, 2], &[2, 3], &[0, 3, 5, 6], 1.0, 1, &params,
///);
///assert!(matches!(result, Err(TreespaceError::OverlappingPartitions(..))));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn update_distances_with_params<T: Float>(
    length_root_distances: &mut [T],
    topological_root_distances: &mut [T],
    left_partition: &[i32],
    right_partition: &[i32],
    index_offsets: &[i32],
    distance_to_root: T,
    edges_to_root: i32,
    params: &UpdateParams,
) -> Result<(), TreespaceError> {
    let n_slots = length_root_distances.len();
    if params.check_lengths && topological_root_distances.len() != n_slots {
        return Err(TreespaceError::MismatchedLengths(format!(
            "length table has {n_slots} slots, but topological table has {}",
            topological_root_distances.len()
        )));
    }
    if params.check_disjoint {
        PartitionValidator::new(left_partition, right_partition, index_offsets)
            .validate_partitions()?;
    }
    let edges = T::from(edges_to_root).ok_or_else(|| {
        TreespaceError::UnrepresentableValue(format!(
            "edge count {edges_to_root} cannot be stored in the topological table"
        ))
    })?;

    // Every pair is checked before anything is written, so a bad pair leaves both tables as
    // they were.
    let n_writable = n_slots.min(topological_root_distances.len());
    for_each_pair_index(left_partition, right_partition, index_offsets, |idx, i, j| {
        if idx >= n_writable {
            return Err(TreespaceError::IndexOutOfRange(format!(
                "pair ({i}, {j}) maps to slot {idx}, but the tables hold {n_writable}"
            )));
        }
        Ok(())
    })?;
    for_each_pair_index(left_partition, right_partition, index_offsets, |idx, _, _| {
        length_root_distances[idx] = distance_to_root;
        topological_root_distances[idx] = edges;
        Ok(())
    })?;

    log::debug!(
        "Recorded {} leaf pairs for split of {} x {} leaves",
        left_partition.len() * right_partition.len(),
        left_partition.len(),
        right_partition.len()
    );
    Ok(())
}

fn for_each_pair_index<F>(
    left_partition: &[i32],
    right_partition: &[i32],
    index_offsets: &[i32],
    mut visit: F,
) -> Result<(), TreespaceError>
where
    F: FnMut(usize, i32, i32) -> Result<(), TreespaceError>,
{
    for &i in left_partition {
        for &j in right_partition {
            let idx = flat_index(index_offsets, i, j)?;
            visit(idx, i, j)?;
        }
    }
    Ok(())
}
