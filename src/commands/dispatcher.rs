// Mon Oct 19 2026 - Alex

use super::args::ArgList;
use super::error::CommandError;
use super::handlers;
use super::parser::{parse_line, ParsedLine};
use super::registry::{CommandKind, CommandSpec};
use super::reply::{Reply, EXTRA_ARGS_WARNING};
use super::MAX_ARGS;
use crate::contacts::ContactStore;

/// Owns the contact book and turns input lines into replies.
#[derive(Debug, Default)]
pub struct Dispatcher {
    store: ContactStore,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Parses and executes one raw line. Blank lines produce no reply.
    pub fn dispatch(&mut self, line: &str) -> Option<Reply> {
        parse_line(line).map(|parsed| self.execute(parsed))
    }

    pub fn execute(&mut self, parsed: ParsedLine<'_, '_>) -> Reply {
        match parsed {
            ParsedLine::Known { spec, args } => self.invoke(spec, &args),
            ParsedLine::Unknown(line) => {
                log::warn!("Unknown command: {:?}", line);
                Reply::failure(CommandError::UnknownCommand.to_string())
            }
        }
    }

    fn invoke(&mut self, spec: &CommandSpec, args: &ArgList<'_>) -> Reply {
        if args.len() > MAX_ARGS {
            log::warn!("{} got {} arguments, at most {} accepted", spec.name, args.len(), MAX_ARGS);
            return Reply::failure(CommandError::TooManyArguments.to_string());
        }

        let warning = if args.len() > spec.expected_args {
            log::warn!(
                "Discarding {} extra argument(s) to {}",
                args.len() - spec.expected_args,
                spec.name
            );
            Some(EXTRA_ARGS_WARNING)
        } else {
            None
        };

        log::debug!("Running {}", spec.kind);
        let reply = match handlers::run(spec.kind, &mut self.store, args) {
            // Only a bare good-bye ends the session; a warning in front keeps it going.
            Ok(body) if spec.kind.is_exit() && warning.is_none() => Reply::farewell(body),
            Ok(body) => Reply::answer(body),
            Err(err) => Reply::failure(explain(spec.kind, args, err).to_string()),
        };

        reply.with_warning(warning)
    }
}

/// Turns a bare missing-argument error into the message for that command.
pub fn explain(kind: CommandKind, args: &ArgList<'_>, err: CommandError) -> CommandError {
    match err {
        CommandError::MissingArgument { .. } => match kind {
            CommandKind::Add | CommandKind::Change if args.is_empty() => CommandError::MissingNameAndPhone,
            CommandKind::Add | CommandKind::Change => CommandError::MissingPhone,
            CommandKind::Phone => CommandError::MissingName,
            _ => err,
        },
        other => other,
    }
}
