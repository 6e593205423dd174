// Audio cue device: the pick sound, rendered as the terminal bell.

/// Sound the pick cue. Callers gate this on the mute flag; output errors
/// are swallowed since a missed beep is of no consequence.
pub fn pick_cue() {
    let _ = crossterm::execute!(std::io::stdout(), crossterm::style::Print('\u{0007}'));
}
