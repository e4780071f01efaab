pub use crate::config::*;

use crate::RankList;

/// A builder for seeding the widget model from an observed page layout.
///
/// The embedding page renders its slot column and pool first (or inherits
/// them from a previous session) and mirrors them into the model before
/// calling [`RankList::enable`].
///
/// ```
/// use rank_list::Builder;
/// # use rank_list::RankingErrors;
///
/// let list = Builder::new()
///     .ranked(&["Anna".to_string(), "Bob".to_string()])?
///     .empty_slot()
///     .unranked(&["Clara".to_string()])?
///     .build()?;
///
/// assert_eq!(list.slots().len(), 3);
/// assert_eq!(list.pool().len(), 1);
/// # Ok::<(), RankingErrors>(())
/// ```
#[derive(Default)]
pub struct Builder {
    pub(crate) _layout: Vec<Option<String>>,
    pub(crate) _pool: Vec<String>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Appends one occupied slot per name, in rank order.
    pub fn ranked(mut self, names: &[String]) -> RankingResult<Builder> {
        for name in names {
            self._layout.push(Some(name.clone()));
        }
        Ok(self)
    }

    /// Appends one empty slot.
    pub fn empty_slot(mut self) -> Builder {
        self._layout.push(None);
        self
    }

    /// Registers candidates that start in the unranked pool.
    pub fn unranked(mut self, names: &[String]) -> RankingResult<Builder> {
        for name in names {
            self._pool.push(name.clone());
        }
        Ok(self)
    }

    /// Validates the layout and produces the model.
    ///
    /// Slot values are assigned by ordinal position. Duplicate candidate
    /// names are rejected; the structural invariants of the seeded layout
    /// are not checked here (see
    /// [`RankList::check_consistency`](crate::RankList::check_consistency)).
    pub fn build(self) -> RankingResult<RankList> {
        RankList::from_builder(self)
    }
}
