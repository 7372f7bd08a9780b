// Defaults for parameters
const CHECK_LENGTHS_DEFAULT: bool = true;
const CHECK_DISJOINT_DEFAULT: bool = false;

/// A wrapper around the checks performed before root distances are written.
/// Only use if you want to change which checks run. Otherwise use
/// `update_distances_with_combinations`, which uses the defaults.
///
/// Bounds checks on offsets and flat indices always run and cannot be turned off.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateParams {
    pub(crate) check_lengths: bool,
    pub(crate) check_disjoint: bool,
}

/// Builder object to set custom update parameters.
#[derive(Debug, Clone)]
pub struct UpdateParamBuilder {
    check_lengths: Option<bool>,
    check_disjoint: Option<bool>,
}

impl Default for UpdateParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl UpdateParams {
    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the update parameter builder
    pub fn builder() -> UpdateParamBuilder {
        UpdateParamBuilder {
            check_lengths: None,
            check_disjoint: None,
        }
    }
}

impl UpdateParamBuilder {
    /// Sets whether the length and topological tables must be of equal length.
    /// Disabling this only makes sense when one table is deliberately shorter and every
    /// pair written is known to fit both. Defaults to true.
    ///
    /// # Parameters
    /// * check_lengths - whether to require equal table lengths
    ///
    /// # Returns
    /// * the update parameter builder
    pub fn check_lengths(mut self, check_lengths: bool) -> UpdateParamBuilder {
        if !check_lengths {
            log::warn!("check_lengths disabled: tables of unequal length will be accepted");
        }
        self.check_lengths = Some(check_lengths);
        self
    }

    /// Sets whether the partitions are validated before writing: every leaf must appear at
    /// most once across both partitions. Without this, a leaf present on both sides produces
    /// a diagonal pair whose slot belongs to another pair. Defaults to false.
    ///
    /// # Parameters
    /// * check_disjoint - whether to validate partitions
    ///
    /// # Returns
    /// * the update parameter builder
    pub fn check_disjoint(mut self, check_disjoint: bool) -> UpdateParamBuilder {
        self.check_disjoint = Some(check_disjoint);
        self
    }

    /// Finishes the building of the parameters.
    ///
    /// # Returns
    /// * The completed update parameters.
    pub fn build(self) -> UpdateParams {
        UpdateParams {
            check_lengths: self.check_lengths.unwrap_or(CHECK_LENGTHS_DEFAULT),
            check_disjoint: self.check_disjoint.unwrap_or(CHECK_DISJOINT_DEFAULT),
        }
    }
}
