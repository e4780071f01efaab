// ********* Identity structures ***********

use serde::{Deserialize, Serialize};
use snafu::Snafu;

/// Numeric handle of a registered candidate.
///
/// The raw value is meant for the host's per-element associated data storage:
/// the page stores it on the draggable element and echoes it back inside drop
/// events. Handles are assigned in registration order, starting at 1.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct CandidateId(pub u32);

/// Rank value carried by candidates that are not in the ranked list.
pub const UNRANKED: u32 = 0;

/// One position of the ranked list.
///
/// A slot holds at most one candidate; empty slots are the drop boundaries
/// the widget keeps around occupied ones.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Slot {
    /// 1-based rank value, as written into the slot element.
    pub value: u32,
    pub occupant: Option<CandidateId>,
    // Drag handler marker. Arming is set-like: an armed slot is never armed
    // again.
    pub(crate) armed: bool,
}

impl Slot {
    pub(crate) fn empty(value: u32) -> Slot {
        Slot {
            value,
            occupant: None,
            armed: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

// ********* Drop events ***********

/// A drop destination: a ranked slot (by current 0-based position) or the
/// unranked pool container.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum DropTarget {
    Slot(usize),
    Pool,
}

/// One successful drag-and-drop transfer, as reported by the drag host.
///
/// `origin` is the slot the candidate was dragged out of, `None` when it came
/// from the unranked pool. It may equal the target when a candidate is
/// dropped back onto its own slot.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct DropEvent {
    pub candidate: CandidateId,
    pub target: DropTarget,
    pub origin: Option<usize>,
}

/// What the synchronizer did with a drop.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum DropOutcome {
    /// The slot structure changed; the whole list was renumbered and
    /// re-armed.
    Refilled,
    /// Pure reorder: only the moved (and, after a displacement, the
    /// displaced) candidate's rank value was rewritten.
    Reordered,
}

// ********* Read-out structures ***********

/// One ranked candidate inside a [`RankingSnapshot`].
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub rank: u32,
}

/// The widget state handed back to the embedding page, in the shape the page
/// submits as a ballot.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct RankingSnapshot {
    /// Ranked candidates, best preference first.
    pub ranked: Vec<RankedEntry>,
    /// Pool candidates, in pool order.
    pub unranked: Vec<String>,
}

// ********* Errors ***********

/// Errors surfaced by construction, drop handling and the consistency check.
///
/// Drop-time variants are caller contract violations (the drag host reported
/// an element the model does not know about); they have no user-visible
/// path.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RankingErrors {
    #[snafu(display("candidate {candidate:?} is not registered"))]
    UnknownCandidate { candidate: CandidateId },

    #[snafu(display("slot index {index} is out of range (list has {len} slots)"))]
    SlotOutOfRange { index: usize, len: usize },

    #[snafu(display("candidate {candidate:?} is not at the stated origin"))]
    OriginMismatch { candidate: CandidateId },

    #[snafu(display("candidate name {name:?} registered twice"))]
    DuplicateCandidate { name: String },

    #[snafu(display("slots {index} and {} are both empty", index + 1))]
    ConsecutiveEmptySlots { index: usize },

    #[snafu(display("slot {index} carries value {value}, expected {}", index + 1))]
    MisnumberedSlot { index: usize, value: u32 },

    #[snafu(display("candidate {candidate:?} has rank {rank}, its slot value is {value}"))]
    StaleRank {
        candidate: CandidateId,
        rank: u32,
        value: u32,
    },

    #[snafu(display("pool candidate {candidate:?} carries nonzero rank {rank}"))]
    RankedPoolCandidate { candidate: CandidateId, rank: u32 },
}

pub type RankingResult<T> = Result<T, RankingErrors>;
