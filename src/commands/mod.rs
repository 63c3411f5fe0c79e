// Mon Oct 19 2026 - Alex

pub mod args;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod registry;
pub mod reply;

pub use args::ArgList;
pub use dispatcher::Dispatcher;
pub use error::{CommandError, CommandResult};
pub use parser::{parse_line, parse_with, ParsedLine};
pub use registry::{find_command, CommandKind, CommandSpec, REGISTRY};
pub use reply::{Reply, ReplyKind};

/// Hard cap on arguments after any known command.
pub const MAX_ARGS: usize = 2;

pub const GOOD_BYE: &str = "Good bye!";
