// Mon Oct 19 2026 - Alex

use crate::contacts::ContactError;
use thiserror::Error;

/// Every variant renders as the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command.")]
    UnknownCommand,
    #[error("Too many arguments.")]
    TooManyArguments,
    #[error("Argument {index} is missing.")]
    MissingArgument { index: usize },
    #[error("Specify a name and a phone please.")]
    MissingNameAndPhone,
    #[error("Phone number is not specified.")]
    MissingPhone,
    #[error("Specify a name please.")]
    MissingName,
    #[error(transparent)]
    Contact(#[from] ContactError),
}

pub type CommandResult<T> = Result<T, CommandError>;
