use crate::config::{CandidateId, DropTarget};

/// Rendering-side collaborator of the synchronizer.
///
/// The embedding page implements this against its DOM and drag-and-drop
/// library; the model calls it synchronously, in mutation order, from inside
/// [`RankList::apply_drop`](crate::RankList::apply_drop) and
/// [`RankList::enable`](crate::RankList::enable). Each method maps to one
/// rendering concern: slot elements come and go, numeric values are written
/// as per-element associated data, displaced candidate elements are
/// relocated, and drop handlers are attached.
///
/// Arming calls are set-like: the model never arms the same element twice,
/// so an implementation may attach handlers unconditionally.
pub trait SlotHost {
    /// A new empty slot element exists at `index`, carrying `value`.
    fn insert_slot(&mut self, index: usize, value: u32);

    /// The slot element at `index` was removed.
    fn remove_slot(&mut self, index: usize);

    /// Write `value` into the slot element at `index`.
    fn write_slot_value(&mut self, index: usize, value: u32);

    /// Write `rank` on the candidate element.
    fn write_candidate_rank(&mut self, candidate: CandidateId, rank: u32);

    /// Relocate a displaced candidate element into `to`. Only issued for the
    /// occupant pushed out by a drop onto an occupied slot; the dragged
    /// element itself was already placed by the drag host.
    fn move_candidate(&mut self, candidate: CandidateId, to: DropTarget);

    /// Attach the drop handler to the slot element at `index`.
    fn arm_slot(&mut self, index: usize);

    /// Attach the drop handler to the unranked pool container.
    fn arm_pool(&mut self);
}

/// Host that renders nothing, for headless use of the model (e.g. replaying
/// a recorded drop sequence outside the page).
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl SlotHost for NoopHost {
    fn insert_slot(&mut self, _index: usize, _value: u32) {}
    fn remove_slot(&mut self, _index: usize) {}
    fn write_slot_value(&mut self, _index: usize, _value: u32) {}
    fn write_candidate_rank(&mut self, _candidate: CandidateId, _rank: u32) {}
    fn move_candidate(&mut self, _candidate: CandidateId, _to: DropTarget) {}
    fn arm_slot(&mut self, _index: usize) {}
    fn arm_pool(&mut self) {}
}
