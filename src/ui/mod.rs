// Mon Oct 19 2026 - Alex

pub mod cli;
pub mod shell;
pub mod theme;

pub use cli::{run, Args};
pub use shell::{Shell, ShellExit};
pub use theme::Theme;
