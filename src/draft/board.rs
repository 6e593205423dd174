// Board projection: derive the renderable view from catalog + draft state.

use crate::catalog::{Catalog, TeamRecord, SLOT_COUNT};
use crate::draft::state::DraftState;

/// One of the twelve fixed slots, 1-indexed for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    /// Display number ("Pick #3" has number 3).
    pub number: u32,
    /// The assigned team, or `None` for an open slot.
    pub team: Option<TeamRecord>,
}

/// A full snapshot of the board, recomputed from scratch on every state
/// change. Nothing here is stored; the draft state is the single source
/// of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    /// Teams still draftable, in catalog order.
    pub available: Vec<TeamRecord>,
    /// Exactly twelve slots, open ones marked with `team: None`.
    pub slots: Vec<SlotView>,
    /// True iff every slot is filled.
    pub is_complete: bool,
    pub pick_count: usize,
}

/// Project `(catalog, state)` into a `BoardView`.
pub fn project(catalog: &Catalog, state: &DraftState) -> BoardView {
    let available: Vec<TeamRecord> = catalog
        .teams()
        .iter()
        .filter(|t| !state.contains(&t.id))
        .cloned()
        .collect();

    let slots: Vec<SlotView> = (0..SLOT_COUNT)
        .map(|i| SlotView {
            number: (i + 1) as u32,
            team: state
                .picks()
                .get(i)
                .and_then(|id| catalog.get(id))
                .cloned(),
        })
        .collect();

    BoardView {
        available,
        slots,
        is_complete: state.is_complete(),
        pick_count: state.len(),
    }
}
