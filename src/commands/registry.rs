// Mon Oct 19 2026 - Alex

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Hello,
    Add,
    Change,
    Phone,
    ShowAll,
    Exit,
}

impl CommandKind {
    pub fn is_exit(&self) -> bool {
        matches!(self, CommandKind::Exit)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::Hello => "hello",
            CommandKind::Add => "add",
            CommandKind::Change => "change",
            CommandKind::Phone => "phone",
            CommandKind::ShowAll => "show all",
            CommandKind::Exit => "exit",
        };
        write!(f, "{}", name)
    }
}

/// Binds the literal command text typed by the user to a handler kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub kind: CommandKind,
    pub expected_args: usize,
}

impl CommandSpec {
    pub const fn new(name: &'static str, kind: CommandKind, expected_args: usize) -> Self {
        Self {
            name,
            kind,
            expected_args,
        }
    }
}

/// All commands understood by the assistant. Keys may contain a space.
pub static REGISTRY: &[CommandSpec] = &[
    CommandSpec::new("hello", CommandKind::Hello, 0),
    CommandSpec::new("add", CommandKind::Add, 2),
    CommandSpec::new("change", CommandKind::Change, 2),
    CommandSpec::new("phone", CommandKind::Phone, 1),
    CommandSpec::new("show all", CommandKind::ShowAll, 0),
    CommandSpec::new("good bye", CommandKind::Exit, 0),
    CommandSpec::new("goodbye", CommandKind::Exit, 0),
    CommandSpec::new("close", CommandKind::Exit, 0),
    CommandSpec::new("exit", CommandKind::Exit, 0),
];

pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    find_in(REGISTRY, name)
}

pub fn find_in<'t>(table: &'t [CommandSpec], name: &str) -> Option<&'t CommandSpec> {
    table.iter().find(|spec| spec.name == name)
}
