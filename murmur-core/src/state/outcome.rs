//! Results reported by activity state machines

/// How an activity finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Activity ran to its natural end (sent, drained, committed)
    Completed,
    /// Advance-mode touch seen; the activity's action was abandoned
    AdvanceMode,
}

/// Result of feeding one input sample to an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Still waiting for input
    Pending,
    /// Activity finished
    Done(Outcome),
}

impl Step {
    /// Check if the activity finished
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }
}
