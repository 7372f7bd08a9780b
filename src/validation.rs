use crate::TreespaceError;
use std::collections::HashSet;

/// Structural checks on the two sides of a split.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PartitionValidator<'a> {
    left_partition: &'a [i32],
    right_partition: &'a [i32],
    n_leaves: usize,
}

impl<'a> PartitionValidator<'a> {
    pub(crate) fn new(
        left_partition: &'a [i32],
        right_partition: &'a [i32],
        index_offsets: &[i32],
    ) -> Self {
        Self {
            left_partition,
            right_partition,
            n_leaves: index_offsets.len(),
        }
    }

    pub(crate) fn validate_partitions(&self) -> Result<(), TreespaceError> {
        let left = self.collect_side(self.left_partition, "left")?;
        let right = self.collect_side(self.right_partition, "right")?;
        if let Some(shared) = left.intersection(&right).min() {
            return Err(TreespaceError::OverlappingPartitions(format!(
                "leaf {shared} appears in both the left and right partition"
            )));
        }
        Ok(())
    }

    fn collect_side(&self, partition: &[i32], side: &str) -> Result<HashSet<i32>, TreespaceError> {
        let mut leaves = HashSet::with_capacity(partition.len());
        for (n, &leaf) in partition.iter().enumerate() {
            if leaf < 1 || leaf as usize > self.n_leaves {
                return Err(TreespaceError::IndexOutOfRange(format!(
                    "{n}th leaf of the {side} partition is {leaf}, outside 1..={}",
                    self.n_leaves
                )));
            }
            if !leaves.insert(leaf) {
                return Err(TreespaceError::DuplicateLeaf(format!(
                    "leaf {leaf} appears more than once in the {side} partition"
                )));
            }
        }
        Ok(leaves)
    }
}
