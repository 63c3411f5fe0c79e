// Mon Oct 19 2026 - Alex

pub mod error;
pub mod phone;
pub mod store;

pub use error::{ContactError, ContactResult};
pub use phone::normalize;
pub use store::{Contact, ContactStore};
