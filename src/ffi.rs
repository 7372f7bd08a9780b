//! C-compatible Foreign Function Interface (FFI) for treespace-distances
//!
//! Exposes the root distance update to hosts that call into native code through a C ABI.
//! The host passes each array as a pointer plus a length; the two distance tables are
//! updated in place.
//!
//! # Error Handling
//!
//! The function returns a TreespaceResult code:
//! - 0: Success
//! - 1: Null pointer for a non-empty array
//! - 2: Index out of range
//! - 3: Invalid input (mismatched table lengths, unrepresentable edge count)

use std::slice;

/// Result codes for C FFI
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TreespaceResult {
    Success = 0,
    NullPointer = 1,
    IndexOutOfRange = 2,
    InvalidInput = 3,
}

fn convert_error(result: Result<(), crate::TreespaceError>) -> TreespaceResult {
    match result {
        Ok(()) => TreespaceResult::Success,
        Err(crate::TreespaceError::IndexOutOfRange(_)) => TreespaceResult::IndexOutOfRange,
        Err(err) => {
            log::warn!("Rejected root distance update: {err}");
            TreespaceResult::InvalidInput
        }
    }
}

unsafe fn as_slice<'a, E>(ptr: *const E, len: usize) -> Option<&'a [E]> {
    match (ptr.is_null(), len) {
        (_, 0) => Some(&[]),
        (true, _) => None,
        (false, _) => Some(slice::from_raw_parts(ptr, len)),
    }
}

unsafe fn as_slice_mut<'a, E>(ptr: *mut E, len: usize) -> Option<&'a mut [E]> {
    match (ptr.is_null(), len) {
        (_, 0) => Some(&mut []),
        (true, _) => None,
        (false, _) => Some(slice::from_raw_parts_mut(ptr, len)),
    }
}

/// Stamp a split's root distances into every (left, right) leaf pair
///
/// # Parameters
/// - `length_root_distances`, `n_length`: packed length table, updated in place
/// - `topological_root_distances`, `n_topological`: packed edge count table, updated in place
/// - `left_partition`, `n_left`: 1-based leaf ids on one side of the split
/// - `right_partition`, `n_right`: 1-based leaf ids on the other side
/// - `index_offsets`, `n_offsets`: base offset of each leaf's row
/// - `distance_to_root`: value stamped into the length table
/// - `edges_to_root`: value stamped into the topological table
///
/// # Returns
/// TreespaceResult code. Neither table is modified unless the code is `Success`.
///
/// # Safety
/// Each non-null pointer must be valid for its length. The two tables must not overlap each
/// other or any of the input arrays. A pointer may be null only when its length is zero.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn treespace_update_distances_with_combinations(
    length_root_distances: *mut f64,
    n_length: usize,
    topological_root_distances: *mut f64,
    n_topological: usize,
    left_partition: *const i32,
    n_left: usize,
    right_partition: *const i32,
    n_right: usize,
    index_offsets: *const i32,
    n_offsets: usize,
    distance_to_root: f64,
    edges_to_root: i32,
) -> TreespaceResult {
    let (Some(lengths), Some(edges), Some(left), Some(right), Some(offsets)) = (
        as_slice_mut(length_root_distances, n_length),
        as_slice_mut(topological_root_distances, n_topological),
        as_slice(left_partition, n_left),
        as_slice(right_partition, n_right),
        as_slice(index_offsets, n_offsets),
    ) else {
        return TreespaceResult::NullPointer;
    };

    convert_error(crate::update_distances_with_combinations(
        lengths,
        edges,
        left,
        right,
        offsets,
        distance_to_root,
        edges_to_root,
    ))
}
