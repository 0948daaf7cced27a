//! Recording errors.

use thiserror::Error;

/// Errors surfaced when a recording is finished.
///
/// Recording itself is infallible (ops are just appended); structural
/// defects in the save/restore pairing are reported once, by
/// [`PictureRecorder::end_recording`](crate::PictureRecorder::end_recording).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// The recording finished with saves that were never restored.
    #[error("recording ended with {open_saves} unmatched save(s)")]
    UnbalancedSave {
        /// How many saves were still open.
        open_saves: usize,
    },

    /// A restore was issued with no save open.
    #[error("recording issued a restore with no matching save")]
    UnmatchedRestore,
}
