// Draft state: the ordered sequence of picked team ids and the operations
// that mutate it.
//
// Invariants, enforced by every operation:
// - at most SLOT_COUNT picks
// - no team id appears twice
// - every picked id is a catalog member
//
// Operations never fail: calls that would break an invariant are rejected
// as silent no-ops (logged), matching the board's forgiving interaction
// model.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::catalog::{Catalog, SLOT_COUNT};

/// Result of a `pick` call. Only `Picked` mutates the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// The team was appended to the order.
    Picked,
    /// All slots are already filled; the call was ignored.
    Saturated,
    /// The team is already on the board; the call was ignored.
    AlreadyPicked,
    /// The id is not in the catalog; the call was ignored.
    UnknownTeam,
}

/// The ordered draft picks, position i holding pick #(i+1).
///
/// The pick list is private so the invariants can only be touched through
/// the operations below; persistence goes through the raw id slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftState {
    picks: Vec<String>,
}

impl DraftState {
    pub fn new() -> Self {
        DraftState { picks: Vec::new() }
    }

    /// The picked team ids in draft order.
    pub fn picks(&self) -> &[String] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// True when all twelve slots are filled.
    pub fn is_complete(&self) -> bool {
        self.picks.len() == SLOT_COUNT
    }

    pub fn contains(&self, team_id: &str) -> bool {
        self.picks.iter().any(|id| id == team_id)
    }

    /// Catalog ids not yet picked, in catalog order.
    pub fn remaining<'a>(&self, catalog: &'a Catalog) -> Vec<&'a str> {
        catalog.ids().filter(|id| !self.contains(id)).collect()
    }

    /// Assign `team_id` to the next open slot.
    ///
    /// A saturated board, a repeated id, and an id outside the catalog are
    /// all rejected without touching the state. The UI removes picked teams
    /// from its list, so the latter two paths are normally unreachable, but
    /// the state must stay consistent if they are hit anyway.
    pub fn pick(&mut self, catalog: &Catalog, team_id: &str) -> PickOutcome {
        if self.picks.len() >= SLOT_COUNT {
            debug!("Pick '{team_id}' ignored: board is saturated");
            return PickOutcome::Saturated;
        }
        if !catalog.contains(team_id) {
            warn!("Pick '{team_id}' ignored: not a catalog team");
            return PickOutcome::UnknownTeam;
        }
        if self.contains(team_id) {
            warn!("Pick '{team_id}' ignored: already on the board");
            return PickOutcome::AlreadyPicked;
        }

        self.picks.push(team_id.to_string());
        debug!("Picked '{team_id}' as pick #{}", self.picks.len());
        PickOutcome::Picked
    }

    /// Remove the most recent pick. Returns `false` (no-op) when the board
    /// is empty.
    pub fn undo(&mut self) -> bool {
        match self.picks.pop() {
            Some(id) => {
                debug!("Undid pick '{id}'");
                true
            }
            None => false,
        }
    }

    /// Clear all picks unconditionally.
    pub fn reset(&mut self) {
        self.picks.clear();
    }

    /// Fill every open slot with the remaining teams in uniformly shuffled
    /// order. Returns the number of slots filled; 0 when already complete.
    ///
    /// The result is truncated to SLOT_COUNT as a safety bound. With the
    /// no-duplicate invariant and a twelve-team catalog the bound can't be
    /// exceeded, but the operation enforces it anyway.
    pub fn randomize_fill<R: Rng + ?Sized>(&mut self, catalog: &Catalog, rng: &mut R) -> usize {
        let mut remaining: Vec<String> = self
            .remaining(catalog)
            .into_iter()
            .map(String::from)
            .collect();
        remaining.shuffle(rng);

        let before = self.picks.len();
        self.picks.extend(remaining);
        self.picks.truncate(SLOT_COUNT);

        let filled = self.picks.len() - before;
        if filled > 0 {
            debug!("Randomize filled {filled} slots");
        }
        filled
    }

    /// Install a previously persisted order.
    ///
    /// The sequence is accepted only when it fully satisfies the state
    /// invariants (length, membership, uniqueness); anything else resets to
    /// the empty order so a corrupted blob can never poison a session.
    /// Returns whether the sequence was accepted.
    pub fn restore(&mut self, picks: Vec<String>, catalog: &Catalog) -> bool {
        if picks.len() > SLOT_COUNT {
            warn!(
                "Rejecting persisted order: {} entries exceeds the {SLOT_COUNT} slots",
                picks.len()
            );
            self.picks.clear();
            return false;
        }

        let mut seen = HashSet::new();
        for id in &picks {
            if !catalog.contains(id) {
                warn!("Rejecting persisted order: unknown team '{id}'");
                self.picks.clear();
                return false;
            }
            if !seen.insert(id.as_str()) {
                warn!("Rejecting persisted order: duplicate team '{id}'");
                self.picks.clear();
                return false;
            }
        }

        self.picks = picks;
        true
    }
}
