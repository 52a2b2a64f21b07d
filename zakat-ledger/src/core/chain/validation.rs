use serde::{Deserialize, Serialize};
use zakat_common::error::InvalidReason;

use super::block::Block;

/// One failed check found while walking the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub index: usize,
    pub reason: InvalidReason,
}

/// Outcome of a full walk over the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub length: usize,
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn first_failure(&self) -> Option<ValidationFailure> {
        self.failures.first().copied()
    }
}

/// Lazily yields every failed check, in chain order.
///
/// Index 0 is never checked: genesis has no predecessor to link to. For every
/// later index the linkage check comes before the integrity check.
pub(crate) fn failures(blocks: &[Block]) -> impl Iterator<Item = ValidationFailure> + '_ {
    blocks.windows(2).enumerate().flat_map(|(offset, pair)| {
        let index = offset + 1;
        let (prev, current) = (&pair[0], &pair[1]);

        let link = (current.prior_hash != prev.hash).then_some(ValidationFailure {
            index,
            reason: InvalidReason::BrokenLink,
        });
        let integrity = (current.hash != current.compute_hash()).then_some(ValidationFailure {
            index,
            reason: InvalidReason::HashMismatch,
        });

        link.into_iter().chain(integrity)
    })
}
