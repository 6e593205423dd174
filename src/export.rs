// Plain-text rendering of the draft order for export.

use crate::catalog::Catalog;
use crate::draft::state::DraftState;

/// Render the current order as newline-joined `Pick #N: <name>` lines,
/// 1-indexed, one line per actual pick (open slots are omitted), with no
/// trailing newline. An empty board renders as an empty string.
pub fn render_order(catalog: &Catalog, state: &DraftState) -> String {
    state
        .picks()
        .iter()
        .enumerate()
        .map(|(i, id)| {
            // Picked ids are catalog members by invariant; fall back to the
            // raw id rather than dropping a line if that ever fails to hold.
            let name = catalog.get(id).map(|t| t.name.as_str()).unwrap_or(id);
            format!("Pick #{}: {}", i + 1, name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
