use crate::error::{QueryError, Result};
use cutsel_catalog::QueryInput;

/// Minimum-input-cardinality policy guarding whether a search may run.
///
/// The threshold and the counted field set are injectable because two
/// variants shipped over the reference system's life and neither is
/// authoritative; callers pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletenessPolicy {
    required: usize,
    count_process_type: bool,
    label: &'static str,
}

impl CompletenessPolicy {
    /// Policy A: at least 2 of the 3 numeric fields; process type is
    /// optional and uncounted.
    pub fn numeric_two_of_three() -> Self {
        Self {
            required: 2,
            count_process_type: false,
            label: "2 of the 3 numeric fields",
        }
    }

    /// Policy B: at least 3 of all 4 fields, process type included.
    pub fn any_three_of_four() -> Self {
        Self {
            required: 3,
            count_process_type: true,
            label: "3 of the 4 fields",
        }
    }

    /// Pass, or report the unmet threshold. A failed gate aborts the
    /// search; no best-effort query is run on the fields that are present.
    pub fn check(&self, input: &QueryInput) -> Result<()> {
        let present = if self.count_process_type {
            input.present_total()
        } else {
            input.present_numeric()
        };
        if present >= self.required {
            Ok(())
        } else {
            log::debug!(
                "Completeness gate rejected input: {present} present, {} required",
                self.required
            );
            Err(QueryError::IncompleteInput {
                present,
                required: self.required,
                policy: self.label,
            })
        }
    }
}
