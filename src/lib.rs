//! Pairwise root distance updates for tree comparison in Rust. Generic over floating point
//! numeric types.
//!
//! Comparing trees by the distance from each pair of leaves to their most recent common
//! ancestor requires, for every split of a tree, stamping that ancestor's distance to the root
//! into the slot of every leaf pair the split separates. This crate performs that update on two
//! parallel tables:
//!  1. a length table, holding the path length from the common ancestor to the root; and
//!  2. a topological table, holding the number of edges from the common ancestor to the root.
//!
//! Both tables store the upper triangle of a symmetric leaf-by-leaf matrix, without the
//! diagonal. Leaf `a`'s row starts at `index_offsets[a-1]`, so the pair `(a, b)` with `a < b`
//! lives at `index_offsets[a-1] + (b - a) - 1`. Leaves are numbered from 1.
//!
//! Every lookup is bounds-checked. A split that would read or write outside the offsets or the
//! tables is rejected with [`TreespaceError::IndexOutOfRange`] before anything is written.
//!
//! The C ABI export lives in the `ffi` module behind the `c-bindings` feature. Its tests only
//! build with the feature on: `cargo test --features c-bindings`.
//!
//! # Examples
//! ```
//!use treespace_distances::{update_distances_with_combinations, TriangularPacking};
//!
//!let packing = TriangularPacking::new(4).unwrap();
//!let mut lengths = vec![0.0; packing.n_pairs()];
//!let mut edges = vec![0.0; packing.n_pairs()];
//!
//! // The root separates {1, 2} from {3, 4}
//!update_distances_with_combinations(
//!    &mut lengths, &mut edges, &[1, 2], &[3, 4], packing.index_offsets(), 0.0, 0,
//!).unwrap();
//! // An internal node at distance 1.5 separates 1 from 2
//!update_distances_with_combinations(
//!    &mut lengths, &mut edges, &[1], &[2], packing.index_offsets(), 1.5, 1,
//!).unwrap();
//!
//!assert_eq!(lengths, vec![1.5, 0.0, 0.0, 0.0, 0.0, 0.0]);
//!assert_eq!(edges, vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
//! ```

pub use crate::combinations::{update_distances_with_combinations, update_distances_with_params};
pub use crate::error::TreespaceError;
pub use crate::packing::TriangularPacking;
pub use crate::root_distances::RootDistances;
pub use crate::update_params::{UpdateParamBuilder, UpdateParams};

mod combinations;
mod error;
mod packing;
mod root_distances;
mod update_params;
mod validation;

// C-compatible FFI bindings (optional)
#[cfg(feature = "c-bindings")]
pub mod ffi;
