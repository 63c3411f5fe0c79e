// Mon Oct 19 2026 - Alex

use super::error::{CommandError, CommandResult};

/// Positional arguments following a command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgList<'a> {
    args: Vec<&'a str>,
}

impl<'a> ArgList<'a> {
    pub fn new(args: Vec<&'a str>) -> Self {
        Self { args }
    }

    /// Fetch a required positional argument.
    pub fn get(&self, index: usize) -> CommandResult<&'a str> {
        self.args
            .get(index)
            .copied()
            .ok_or(CommandError::MissingArgument { index })
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.args.iter().copied()
    }
}

impl<'a> From<Vec<&'a str>> for ArgList<'a> {
    fn from(args: Vec<&'a str>) -> Self {
        Self::new(args)
    }
}
