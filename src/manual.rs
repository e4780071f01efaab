/*!

This is the long-form manual for `rank_list`.

## Widget anatomy

The widget is one vertical column of rank slots, plus an optional unranked
pool. Every slot holds at most one candidate and carries a numeric rank
value; empty slots are the drop boundaries the widget keeps around occupied
ones so a candidate can always be dropped after the last preference (and
before the first one, once a drop has landed on the head slot). Candidates in
the pool carry the rank value 0.

The crate owns none of the rendering. The page supplies:

* a drag-and-drop capability over the two container kinds (rank slots and
  the pool) that reports a `received` event with the drop target, the moved
  item, and the origin container;
* per-element associated data storage for two numbers: the candidate handle
  ([`CandidateId`](crate::CandidateId)) on draggable elements and the rank
  value on slot elements.

## Wiring a host

Implement [`SlotHost`](crate::host::SlotHost) against the page:

| method                 | rendering duty                                   |
|------------------------|--------------------------------------------------|
| `insert_slot`          | materialize a new empty slot element at an index |
| `remove_slot`          | delete the slot element at an index              |
| `write_slot_value`     | store the rank value on a slot element           |
| `write_candidate_rank` | store the rank value on a candidate element      |
| `move_candidate`       | relocate a displaced candidate element           |
| `arm_slot`, `arm_pool` | attach the drop handler to an element            |

Then, once the model mirrors the rendered layout, call
[`RankList::enable`](crate::RankList::enable) and forward every `received`
event as a [`DropEvent`](crate::DropEvent) to
[`RankList::apply_drop`](crate::RankList::apply_drop). Both calls are
synchronous and complete before the next user interaction is processed, so
no re-entrancy has to be considered.

`enable` is idempotent. The model tracks which elements are armed and never
arms one twice, so the page is free to call it again after re-rendering, and
the synchronizer re-runs the arming pass itself whenever it inserts slots.

## The drop contract

A [`DropEvent`](crate::DropEvent) names the moved candidate, the target
(`Slot(index)` or `Pool`), and the origin slot (`None` when the candidate
came from the pool). The synchronizer mirrors the transfer, then:

1. keeps an empty boundary slot after the target (and before it when the
   target is the head of the list), inserting one if the neighbor is missing
   or occupied;
2. collapses empty slots left next to the vacated origin;
3. renumbers the whole column when the structure changed
   ([`DropOutcome::Refilled`](crate::DropOutcome)), or rewrites only the
   moved candidate's rank when it did not
   ([`DropOutcome::Reordered`](crate::DropOutcome)).

Dropping onto an occupied slot exchanges the two candidates: the previous
occupant is pushed back to wherever the drop came from, and the host is told
to relocate its element via `move_candidate`.

## Seeding and reading back

Seed the model from existing markup with the [`Builder`](crate::Builder)
(occupied slots, empty slots, pool candidates, in rendered order), or start
fresh with [`RankList::from_candidates`](crate::RankList::from_candidates).
Seeded layouts are trusted as-is;
[`RankList::check_consistency`](crate::RankList::check_consistency) is
available where a page wants to verify one defensively.

When the ballot is submitted, read the state back with
[`RankList::rank_values`](crate::RankList::rank_values) (one number per
candidate in registration order, 0 for unranked) or
[`RankList::snapshot`](crate::RankList::snapshot) for a serializable form.

*/
