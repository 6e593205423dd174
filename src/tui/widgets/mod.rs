// TUI widget modules for each board panel.

pub mod available;
pub mod order;
pub mod status_bar;
