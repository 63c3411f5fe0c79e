// Mon Oct 19 2026 - Alex

use super::error::{ContactError, ContactResult};
use super::phone::normalize;
use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, raw_phone: &str) -> Self {
        Self {
            name: name.into(),
            phone: normalize(raw_phone),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phone)
    }
}

/// In-memory contact book keyed by exact name, listed in insertion order.
#[derive(Debug, Default, Clone)]
pub struct ContactStore {
    contacts: IndexMap<String, Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    pub fn get(&self, name: &str) -> ContactResult<&Contact> {
        self.contacts
            .get(name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()))
    }

    pub fn add(&mut self, contact: Contact) -> ContactResult<&Contact> {
        if self.contains(&contact.name) {
            return Err(ContactError::Duplicate(contact.name));
        }

        log::info!("Adding contact {}", contact.name);
        let (index, _) = self.contacts.insert_full(contact.name.clone(), contact);
        Ok(&self.contacts[index])
    }

    /// Replaces the phone of an existing contact, keeping its list position.
    pub fn update_phone(&mut self, name: &str, phone: String) -> ContactResult<&Contact> {
        let contact = self
            .contacts
            .get_mut(name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()))?;

        log::info!("Changing phone of {}", name);
        contact.phone = phone;
        Ok(contact)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }
}
