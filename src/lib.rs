// Mon Oct 19 2026 - Alex

pub mod commands;
pub mod config;
pub mod contacts;
pub mod ui;

pub use commands::{Dispatcher, Reply};
pub use config::Config;
pub use contacts::{normalize, Contact, ContactStore};
pub use ui::Shell;
