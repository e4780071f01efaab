mod config;

pub mod builder;
pub mod host;
pub mod manual;

use log::{debug, info};
use snafu::prelude::*;

pub use crate::builder::Builder;
pub use crate::config::*;
use crate::host::SlotHost;

// **** Private structures ****

// Registry entry for a candidate. Candidates are created at build time and
// never destroyed; only the rank value is mutated.
#[derive(Eq, PartialEq, Debug, Clone)]
struct CandidateState {
    name: String,
    rank: u32,
}

/// The rank-list model: the ranked slot column, the unranked pool, and the
/// candidate registry.
///
/// The model is the source of truth for the widget; the page mirrors it
/// through a [`SlotHost`]. All operations run synchronously inside the drop
/// event that triggered them.
#[derive(Debug, Clone)]
pub struct RankList {
    slots: Vec<Slot>,
    pool: Vec<CandidateId>,
    // Indexed by CandidateId - 1.
    candidates: Vec<CandidateState>,
    pool_armed: bool,
}

fn register(
    candidates: &mut Vec<CandidateState>,
    name: &str,
    rank: u32,
) -> RankingResult<CandidateId> {
    ensure!(
        !candidates.iter().any(|c| c.name == name),
        DuplicateCandidateSnafu { name }
    );
    candidates.push(CandidateState {
        name: name.to_string(),
        rank,
    });
    Ok(CandidateId(candidates.len() as u32))
}

impl RankList {
    /// Fresh widget: every candidate in the unranked pool, a single empty
    /// slot to drop the first preference into.
    pub fn from_candidates(names: &[String]) -> RankingResult<RankList> {
        Builder::new().empty_slot().unranked(names)?.build()
    }

    pub(crate) fn from_builder(b: Builder) -> RankingResult<RankList> {
        let mut candidates: Vec<CandidateState> = Vec::new();
        let mut slots: Vec<Slot> = Vec::new();
        let mut pool: Vec<CandidateId> = Vec::new();
        for entry in b._layout.iter() {
            let value = (slots.len() + 1) as u32;
            match entry {
                Some(name) => {
                    let cid = register(&mut candidates, name, value)?;
                    slots.push(Slot {
                        value,
                        occupant: Some(cid),
                        armed: false,
                    });
                }
                None => slots.push(Slot::empty(value)),
            }
        }
        for name in b._pool.iter() {
            let cid = register(&mut candidates, name, UNRANKED)?;
            pool.push(cid);
        }
        debug!(
            "from_builder: {:?} slots, {:?} pool candidates",
            slots.len(),
            pool.len()
        );
        Ok(RankList {
            slots,
            pool,
            candidates,
            pool_armed: false,
        })
    }

    // **** Read surface ****

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Pool candidates, in pool order.
    pub fn pool(&self) -> &[CandidateId] {
        &self.pool
    }

    pub fn candidate_id(&self, name: &str) -> Option<CandidateId> {
        self.candidates
            .iter()
            .position(|c| c.name == name)
            .map(|idx| CandidateId((idx + 1) as u32))
    }

    pub fn candidate_name(&self, candidate: CandidateId) -> Option<&str> {
        self.state(candidate).map(|c| c.name.as_str())
    }

    /// Current rank value of a candidate, [`UNRANKED`] while it sits in the
    /// pool. `None` for unregistered handles.
    pub fn rank_of(&self, candidate: CandidateId) -> Option<u32> {
        self.state(candidate).map(|c| c.rank)
    }

    /// Candidates currently ranked, best preference first.
    pub fn ranking(&self) -> Vec<CandidateId> {
        self.slots.iter().filter_map(|s| s.occupant).collect()
    }

    /// One rank value per registered candidate, in registration order, 0 for
    /// unranked. This is the shape the embedding page submits as a ballot.
    pub fn rank_values(&self) -> Vec<u32> {
        self.candidates.iter().map(|c| c.rank).collect()
    }

    /// Snapshot of the whole widget state for the embedding page.
    pub fn snapshot(&self) -> RankingSnapshot {
        let ranked = self
            .slots
            .iter()
            .filter_map(|s| s.occupant)
            .filter_map(|cid| self.state(cid))
            .map(|c| RankedEntry {
                name: c.name.clone(),
                rank: c.rank,
            })
            .collect();
        let unranked = self
            .pool
            .iter()
            .filter_map(|&cid| self.state(cid))
            .map(|c| c.name.clone())
            .collect();
        RankingSnapshot { ranked, unranked }
    }

    fn state(&self, candidate: CandidateId) -> Option<&CandidateState> {
        (candidate.0 as usize)
            .checked_sub(1)
            .and_then(|idx| self.candidates.get(idx))
    }

    fn state_mut(&mut self, candidate: CandidateId) -> Option<&mut CandidateState> {
        (candidate.0 as usize)
            .checked_sub(1)
            .and_then(|idx| self.candidates.get_mut(idx))
    }

    // **** Arming ****

    /// Arms drag-and-drop behavior on every slot element and on the pool
    /// container.
    ///
    /// Idempotent: armed elements are marked and never armed again, so the
    /// page may call this any number of times. The synchronizer re-runs the
    /// slot pass itself after every structural change.
    pub fn enable<H: SlotHost>(&mut self, host: &mut H) {
        let newly = self.rearm(host);
        if !self.pool_armed {
            host.arm_pool();
            self.pool_armed = true;
        }
        info!(
            "enable: {:?} slots armed ({:?} new), pool armed",
            self.slots.len(),
            newly
        );
    }

    fn rearm<H: SlotHost>(&mut self, host: &mut H) -> usize {
        let mut newly = 0;
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if !slot.armed {
                host.arm_slot(idx);
                slot.armed = true;
                newly += 1;
            }
        }
        newly
    }

    // **** Synchronizer ****

    /// Synchronizes the slot list after one drag-and-drop transfer.
    ///
    /// Arguments:
    /// * `event` the transfer as reported by the drag host: the candidate
    ///   moved, the drop target, and the origin slot (`None` for the pool).
    /// * `host` the rendering adapter receiving the resulting mutations.
    ///
    /// Dropping onto an occupied slot displaces its occupant back to the
    /// origin of the drop; a displacement changes no slot between occupied
    /// and empty, so it is always a pure reorder. Contract violations
    /// (unknown candidate, out-of-range index, candidate not at the stated
    /// origin) are rejected before any mutation.
    pub fn apply_drop<H: SlotHost>(
        &mut self,
        event: &DropEvent,
        host: &mut H,
    ) -> RankingResult<DropOutcome> {
        debug!("apply_drop: {:?}", event);
        self.validate(event)?;
        match event.target {
            DropTarget::Pool => self.drop_to_pool(event, host),
            DropTarget::Slot(target) => self.drop_to_slot(event, target, host),
        }
    }

    fn validate(&self, event: &DropEvent) -> RankingResult<()> {
        let c = event.candidate;
        ensure!(self.state(c).is_some(), UnknownCandidateSnafu { candidate: c });
        if let DropTarget::Slot(t) = event.target {
            ensure!(
                t < self.slots.len(),
                SlotOutOfRangeSnafu {
                    index: t,
                    len: self.slots.len()
                }
            );
        }
        match event.origin {
            Some(s) => {
                ensure!(
                    s < self.slots.len(),
                    SlotOutOfRangeSnafu {
                        index: s,
                        len: self.slots.len()
                    }
                );
                ensure!(
                    self.slots[s].occupant == Some(c),
                    OriginMismatchSnafu { candidate: c }
                );
            }
            None => {
                ensure!(self.pool.contains(&c), OriginMismatchSnafu { candidate: c });
            }
        }
        Ok(())
    }

    // Pool drops assign the unranked sentinel and only run the removal
    // phase.
    fn drop_to_pool<H: SlotHost>(
        &mut self,
        event: &DropEvent,
        host: &mut H,
    ) -> RankingResult<DropOutcome> {
        let c = event.candidate;
        let sender = match event.origin {
            None => {
                // Reordering inside the pool leaves the model unchanged.
                debug!("drop_to_pool: {:?} reordered within the pool", c);
                return Ok(DropOutcome::Reordered);
            }
            Some(s) => s,
        };
        self.slots[sender].occupant = None;
        self.pool.push(c);
        self.set_rank(c, UNRANKED, host);

        let mut refilled = false;
        if sender + 1 < self.slots.len() && self.slots[sender + 1].occupant.is_none() {
            self.drop_slot(sender + 1, host);
            refilled = true;
        }
        if sender > 0 && self.slots[sender - 1].occupant.is_none() {
            self.drop_slot(sender - 1, host);
            refilled = true;
        }

        if refilled {
            self.renumber(host);
            self.rearm(host);
            Ok(DropOutcome::Refilled)
        } else {
            Ok(DropOutcome::Reordered)
        }
    }

    fn drop_to_slot<H: SlotHost>(
        &mut self,
        event: &DropEvent,
        mut target: usize,
        host: &mut H,
    ) -> RankingResult<DropOutcome> {
        let c = event.candidate;

        // Dropped back onto its own slot: rewrite the rank from the slot
        // value.
        if event.origin == Some(target) {
            let value = self.slots[target].value;
            self.set_rank(c, value, host);
            return Ok(DropOutcome::Reordered);
        }

        if let Some(displaced) = self.slots[target].occupant {
            return self.swap_into(event, target, displaced, host);
        }

        // Transfer: the drag host already moved the element, mirror it.
        match event.origin {
            Some(sender) => self.slots[sender].occupant = None,
            None => self.pool.retain(|&p| p != c),
        }
        self.slots[target].occupant = Some(c);

        let mut sender = event.origin;
        let mut refilled = false;

        // Insertion phase: the target keeps an empty boundary slot after it,
        // and one before it when it is the head of the list.
        if target + 1 == self.slots.len() || self.slots[target + 1].occupant.is_some() {
            let value = self.slots[target].value + 1;
            self.insert_empty(target + 1, value, host);
            if let Some(s) = sender.as_mut() {
                if *s > target {
                    *s += 1;
                }
            }
            refilled = true;
        }
        if target == 0 {
            let value = self.slots[target].value.saturating_sub(1);
            self.insert_empty(0, value, host);
            target += 1;
            // The origin can only sit ahead of a head target.
            if let Some(s) = sender.as_mut() {
                *s += 1;
            }
            refilled = true;
        }

        // Removal phase: collapse the empties left around the vacated
        // sender.
        if let Some(s) = sender {
            if s + 1 < self.slots.len() && self.slots[s + 1].occupant.is_none() {
                self.drop_slot(s + 1, host);
                if target > s + 1 {
                    target -= 1;
                }
                refilled = true;
            }
            if s > 0 && self.slots[s - 1].occupant.is_none() {
                self.drop_slot(s - 1, host);
                if target > s - 1 {
                    target -= 1;
                }
                refilled = true;
            }
        }

        if refilled {
            self.renumber(host);
            self.rearm(host);
            debug!("drop_to_slot: refilled, {:?} slots", self.slots.len());
            Ok(DropOutcome::Refilled)
        } else {
            let value = self.slots[target].value;
            self.set_rank(c, value, host);
            Ok(DropOutcome::Reordered)
        }
    }

    // A drop onto an occupied slot pushes the occupant back to the origin of
    // the drop. Both slots stay occupied, so the structure is untouched and
    // only the two rank values move.
    fn swap_into<H: SlotHost>(
        &mut self,
        event: &DropEvent,
        target: usize,
        displaced: CandidateId,
        host: &mut H,
    ) -> RankingResult<DropOutcome> {
        let c = event.candidate;
        match event.origin {
            Some(sender) => {
                self.slots[sender].occupant = Some(displaced);
                self.slots[target].occupant = Some(c);
                host.move_candidate(displaced, DropTarget::Slot(sender));
                let sender_value = self.slots[sender].value;
                self.set_rank(displaced, sender_value, host);
            }
            None => {
                self.pool.retain(|&p| p != c);
                self.pool.push(displaced);
                self.slots[target].occupant = Some(c);
                host.move_candidate(displaced, DropTarget::Pool);
                self.set_rank(displaced, UNRANKED, host);
            }
        }
        let value = self.slots[target].value;
        self.set_rank(c, value, host);
        debug!(
            "swap_into: {:?} displaced {:?} at slot {:?}",
            c, displaced, target
        );
        Ok(DropOutcome::Reordered)
    }

    fn insert_empty<H: SlotHost>(&mut self, index: usize, value: u32, host: &mut H) {
        debug!(
            "insert_empty: boundary slot at {:?} (provisional value {:?})",
            index, value
        );
        self.slots.insert(index, Slot::empty(value));
        host.insert_slot(index, value);
    }

    fn drop_slot<H: SlotHost>(&mut self, index: usize, host: &mut H) {
        debug!("drop_slot: redundant empty slot at {:?}", index);
        self.slots.remove(index);
        host.remove_slot(index);
    }

    fn set_rank<H: SlotHost>(&mut self, candidate: CandidateId, rank: u32, host: &mut H) {
        if let Some(state) = self.state_mut(candidate) {
            state.rank = rank;
        }
        host.write_candidate_rank(candidate, rank);
    }

    // Renumbers every slot by ordinal position and mirrors the value into
    // the occupants. Runs after every structural change.
    fn renumber<H: SlotHost>(&mut self, host: &mut H) {
        for idx in 0..self.slots.len() {
            let value = (idx + 1) as u32;
            self.slots[idx].value = value;
            host.write_slot_value(idx, value);
            if let Some(c) = self.slots[idx].occupant {
                self.set_rank(c, value, host);
            }
        }
        assert!(
            self.slots.windows(2).all(|w| w[0].value < w[1].value),
            "renumbering did not produce increasing values: {:?}",
            self.slots
        );
        debug!("renumber: {:?} slots renumbered", self.slots.len());
    }

    // **** Consistency ****

    /// Defensive check of the structural invariants: no two consecutive
    /// empty slots, ordinal slot values, occupant ranks mirroring slot
    /// values, pool candidates unranked.
    ///
    /// Never called implicitly: externally seeded layouts are accepted
    /// as-is.
    pub fn check_consistency(&self) -> RankingResult<()> {
        for (idx, pair) in self.slots.windows(2).enumerate() {
            ensure!(
                pair[0].occupant.is_some() || pair[1].occupant.is_some(),
                ConsecutiveEmptySlotsSnafu { index: idx }
            );
        }
        for (idx, slot) in self.slots.iter().enumerate() {
            ensure!(
                slot.value == (idx + 1) as u32,
                MisnumberedSlotSnafu {
                    index: idx,
                    value: slot.value
                }
            );
            if let Some(c) = slot.occupant {
                let rank = self.rank_of(c).unwrap_or(UNRANKED);
                ensure!(
                    rank == slot.value,
                    StaleRankSnafu {
                        candidate: c,
                        rank,
                        value: slot.value
                    }
                );
            }
        }
        for &c in self.pool.iter() {
            let rank = self.rank_of(c).unwrap_or(UNRANKED);
            ensure!(
                rank == UNRANKED,
                RankedPoolCandidateSnafu { candidate: c, rank }
            );
        }
        Ok(())
    }
}
