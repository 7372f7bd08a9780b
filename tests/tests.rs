use treespace_distances::{
    update_distances_with_combinations, update_distances_with_params, RootDistances,
    TreespaceError, TriangularPacking, UpdateParams,
};

const UNSET: f64 = -1.0;

fn blank_tables(n_leaves: usize) -> (TriangularPacking, Vec<f64>, Vec<f64>) {
    let packing = TriangularPacking::new(n_leaves).unwrap();
    let n_pairs = packing.n_pairs();
    (packing, vec![UNSET; n_pairs], vec![UNSET; n_pairs])
}

fn apply(
    packing: &TriangularPacking,
    lengths: &mut [f64],
    edges: &mut [f64],
    left: &[i32],
    right: &[i32],
    distance: f64,
    n_edges: i32,
) {
    update_distances_with_combinations(
        lengths, edges, left, right, packing.index_offsets(), distance, n_edges,
    )
    .unwrap();
}

#[test]
fn test_example_split() {
    let mut lengths = vec![UNSET; 6];
    let mut edges = vec![UNSET; 6];
    update_distances_with_combinations(
        &mut lengths, &mut edges, &[1], &[2, 3], &[0, 3, 5, 6], 2.5, 4,
    )
    .unwrap();
    assert_eq!(lengths[0], 2.5);
    assert_eq!(lengths[1], 2.5);
    assert_eq!(edges[0], 4.0);
    assert_eq!(edges[1], 4.0);
    assert!(lengths[2..].iter().chain(edges[2..].iter()).all(|&d| d == UNSET));
}

#[test]
fn test_every_crossing_pair_is_stamped() {
    let (packing, mut lengths, mut edges) = blank_tables(6);
    let left = [5, 1, 3];
    let right = [2, 6];
    apply(&packing, &mut lengths, &mut edges, &left, &right, 0.75, 3);

    for a in 1..=6 {
        for b in (a + 1)..=6 {
            let idx = packing.pair_index(a, b).unwrap();
            let crosses = (left.contains(&a) && right.contains(&b))
                || (left.contains(&b) && right.contains(&a));
            if crosses {
                assert_eq!(lengths[idx], 0.75, "pair ({a}, {b})");
                assert_eq!(edges[idx], 3.0, "pair ({a}, {b})");
            } else {
                assert_eq!(lengths[idx], UNSET, "pair ({a}, {b})");
                assert_eq!(edges[idx], UNSET, "pair ({a}, {b})");
            }
        }
    }
}

#[test]
fn test_order_invariance() {
    let (packing, mut lengths_a, mut edges_a) = blank_tables(7);
    let (_, mut lengths_b, mut edges_b) = blank_tables(7);
    apply(&packing, &mut lengths_a, &mut edges_a, &[1, 4, 7], &[2, 3, 6], 1.25, 2);
    apply(&packing, &mut lengths_b, &mut edges_b, &[7, 1, 4], &[6, 2, 3], 1.25, 2);
    assert_eq!(lengths_a, lengths_b);
    assert_eq!(edges_a, edges_b);
}

#[test]
fn test_swapping_sides_is_symmetric() {
    let (packing, mut lengths_a, mut edges_a) = blank_tables(5);
    let (_, mut lengths_b, mut edges_b) = blank_tables(5);
    apply(&packing, &mut lengths_a, &mut edges_a, &[2, 5], &[1, 3], 4.0, 5);
    apply(&packing, &mut lengths_b, &mut edges_b, &[1, 3], &[2, 5], 4.0, 5);
    assert_eq!(lengths_a, lengths_b);
    assert_eq!(edges_a, edges_b);
}

#[test]
fn test_non_interfering_splits_commute() {
    // {1,2}x{3} and {4}x{5,6} share no leaf pair
    let (packing, mut lengths_a, mut edges_a) = blank_tables(6);
    let (_, mut lengths_b, mut edges_b) = blank_tables(6);
    apply(&packing, &mut lengths_a, &mut edges_a, &[1, 2], &[3], 2.0, 2);
    apply(&packing, &mut lengths_a, &mut edges_a, &[4], &[5, 6], 3.0, 1);
    apply(&packing, &mut lengths_b, &mut edges_b, &[4], &[5, 6], 3.0, 1);
    apply(&packing, &mut lengths_b, &mut edges_b, &[1, 2], &[3], 2.0, 2);
    assert_eq!(lengths_a, lengths_b);
    assert_eq!(edges_a, edges_b);
}

#[test]
fn test_rerun_is_idempotent() {
    let (packing, mut lengths, mut edges) = blank_tables(4);
    apply(&packing, &mut lengths, &mut edges, &[1, 2], &[3, 4], 0.5, 1);
    let snapshot = (lengths.clone(), edges.clone());
    apply(&packing, &mut lengths, &mut edges, &[1, 2], &[3, 4], 0.5, 1);
    assert_eq!((lengths, edges), snapshot);
}

#[test]
fn test_empty_partitions() {
    let (packing, mut lengths, mut edges) = blank_tables(4);
    apply(&packing, &mut lengths, &mut edges, &[], &[1, 2, 3], 9.0, 9);
    apply(&packing, &mut lengths, &mut edges, &[4], &[], 9.0, 9);
    apply(&packing, &mut lengths, &mut edges, &[], &[], 9.0, 9);
    assert!(lengths.iter().chain(edges.iter()).all(|&d| d == UNSET));
}

#[test]
fn test_index_out_of_range() {
    let (packing, mut lengths, mut edges) = blank_tables(4);
    let result = update_distances_with_combinations(
        &mut lengths, &mut edges, &[1, 2], &[3, 0], packing.index_offsets(), 1.0, 1,
    );
    assert!(matches!(result, Err(TreespaceError::IndexOutOfRange(..))));
    assert!(lengths.iter().chain(edges.iter()).all(|&d| d == UNSET));
}

#[test]
fn test_corrupt_offsets_are_caught() {
    let mut lengths = vec![UNSET; 6];
    let mut edges = vec![UNSET; 6];
    let offsets = [0, 3, 50, 6];
    let result =
        update_distances_with_combinations(&mut lengths, &mut edges, &[3], &[4], &offsets, 1.0, 1);
    assert!(matches!(result, Err(TreespaceError::IndexOutOfRange(..))));
    let offsets = [0, -4, 5, 6];
    let result =
        update_distances_with_combinations(&mut lengths, &mut edges, &[2], &[3], &offsets, 1.0, 1);
    assert!(matches!(result, Err(TreespaceError::IndexOutOfRange(..))));
}

#[test]
fn test_disjoint_check() {
    let (packing, mut lengths, mut edges) = blank_tables(4);
    let params = UpdateParams::builder().check_disjoint(true).build();
    let result = update_distances_with_params(
        &mut lengths, &mut edges, &[1, 3], &[3, 4], packing.index_offsets(), 1.0, 1, &params,
    );
    assert!(matches!(result, Err(TreespaceError::OverlappingPartitions(..))));
    update_distances_with_params(
        &mut lengths, &mut edges, &[1, 2], &[3, 4], packing.index_offsets(), 1.0, 1, &params,
    )
    .unwrap();
}

#[test]
fn test_error_messages() {
    let err = TreespaceError::IndexOutOfRange(String::from("pair (1, 9)"));
    assert_eq!(err.to_string(), "Index out of range: pair (1, 9)");
}

#[test]
fn test_root_distances_for_caterpillar_tree() {
    // ((((1,2):1,3):1,4):1,5) with unit branch lengths, rooted at the outermost node
    let mut distances = RootDistances::<f64>::new(5).unwrap();
    distances.record_split(&[1, 2, 3, 4], &[5], 0.0, 0).unwrap();
    distances.record_split(&[1, 2, 3], &[4], 1.0, 1).unwrap();
    distances.record_split(&[1, 2], &[3], 2.0, 2).unwrap();
    distances.record_split(&[1], &[2], 3.0, 3).unwrap();

    assert_eq!(distances.length_distance(1, 2).unwrap(), 3.0);
    assert_eq!(distances.length_distance(3, 1).unwrap(), 2.0);
    assert_eq!(distances.topological_distance(2, 4).unwrap(), 1.0);
    assert_eq!(distances.topological_distance(5, 4).unwrap(), 0.0);
    assert_eq!(distances.n_leaves(), 5);
    assert_eq!(distances.index_offsets(), &[0, 4, 7, 9, 10]);
}
