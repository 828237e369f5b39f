//! Error types for `phonebook-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// The single domain error: `add_contact` found an existing contact whose
  /// name matches case-insensitively. Recovered at the call site by showing
  /// a notice; never fatal.
  #[error("contact named {name:?} already exists")]
  DuplicateName { name: String },

  /// The `Display` text doubles as the form guidance shown to the user.
  #[error("Name may contain only letters, apostrophe, dash and spaces")]
  InvalidName,

  #[error(
    "Phone number must be digits and can contain spaces, dashes, parentheses \
     and can start with +"
  )]
  InvalidNumber,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
