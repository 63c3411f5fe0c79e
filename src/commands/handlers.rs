// Mon Oct 19 2026 - Alex

use super::args::ArgList;
use super::error::{CommandError, CommandResult};
use super::registry::CommandKind;
use super::GOOD_BYE;
use crate::contacts::{normalize, Contact, ContactError, ContactStore};
use itertools::Itertools;

pub const GREETING: &str = "How can I help you?";
pub const ADDED: &str = "Contact successfully added.";
pub const CHANGED: &str = "Contact successfully changed.";
pub const NO_CONTACTS: &str = "I do not have any contacts yet.";

pub fn run(kind: CommandKind, store: &mut ContactStore, args: &ArgList<'_>) -> CommandResult<String> {
    match kind {
        CommandKind::Hello => hello(),
        CommandKind::Add => add(store, args),
        CommandKind::Change => change(store, args),
        CommandKind::Phone => phone(store, args),
        CommandKind::ShowAll => show_all(store),
        CommandKind::Exit => exit(),
    }
}

fn hello() -> CommandResult<String> {
    Ok(GREETING.to_string())
}

// A phone that strips down to nothing counts as not given.
fn phone_arg(args: &ArgList<'_>) -> CommandResult<String> {
    let phone = normalize(args.get(1)?);
    if phone.is_empty() {
        return Err(CommandError::MissingArgument { index: 1 });
    }
    Ok(phone)
}

fn add(store: &mut ContactStore, args: &ArgList<'_>) -> CommandResult<String> {
    let name = args.get(0)?;
    if store.contains(name) {
        return Err(ContactError::Duplicate(name.to_string()).into());
    }

    let phone = phone_arg(args)?;
    store.add(Contact {
        name: name.to_string(),
        phone,
    })?;
    Ok(ADDED.to_string())
}

fn change(store: &mut ContactStore, args: &ArgList<'_>) -> CommandResult<String> {
    let name = args.get(0)?;
    if !store.contains(name) {
        return Err(ContactError::NotFound(name.to_string()).into());
    }

    let phone = phone_arg(args)?;
    store.update_phone(name, phone)?;
    Ok(CHANGED.to_string())
}

fn phone(store: &mut ContactStore, args: &ArgList<'_>) -> CommandResult<String> {
    let name = args.get(0)?;
    Ok(store.get(name)?.phone.clone())
}

fn show_all(store: &ContactStore) -> CommandResult<String> {
    if store.is_empty() {
        return Ok(NO_CONTACTS.to_string());
    }
    Ok(store.iter().join("\n"))
}

fn exit() -> CommandResult<String> {
    Ok(GOOD_BYE.to_string())
}
