//! The in-memory contact store — the single owner of the contact list and
//! the active name filter.
//!
//! The presentation layer holds only read-only borrows for rendering and
//! routes every mutation through the methods here. All operations are
//! synchronous and run to completion before the next is accepted; there is
//! no interior mutability and no locking.

use uuid::Uuid;

use crate::{Error, Result, contact::Contact};

/// Owns the ordered contact list and the case-insensitive name filter.
///
/// Invariant: no two contacts share a case-insensitive `name`. This is
/// checked at insertion time only; no other operation can introduce a
/// duplicate, so no background reconciliation exists.
#[derive(Debug, Default)]
pub struct ContactStore {
  /// Insertion order preserved; unique by `id` and by lowercased `name`.
  contacts: Vec<Contact>,
  /// Ephemeral per-session filter, replaced verbatim on every change.
  filter:   String,
}

impl ContactStore {
  pub fn new() -> Self { Self::default() }

  // ── Writes ────────────────────────────────────────────────────────────

  /// Append a new contact with a fresh id, rejecting case-insensitive name
  /// duplicates.
  ///
  /// On [`Error::DuplicateName`] the store is left untouched and the caller
  /// is expected to surface a notice to the user. Inputs are stored
  /// verbatim; pattern validation is the presentation layer's job
  /// ([`crate::validate`]), so it is not repeated here.
  ///
  /// Comparison uses `str::to_lowercase`, which folds Cyrillic as well as
  /// Latin letters.
  pub fn add_contact(
    &mut self,
    name: impl Into<String>,
    number: impl Into<String>,
  ) -> Result<Contact> {
    let name = name.into();
    let lowered = name.to_lowercase();
    if self
      .contacts
      .iter()
      .any(|c| c.name.to_lowercase() == lowered)
    {
      return Err(Error::DuplicateName { name });
    }

    let contact = Contact::new(name, number.into());
    self.contacts.push(contact.clone());
    Ok(contact)
  }

  /// Remove the contact with `id`, returning the removed entry.
  ///
  /// Returns `None` when no such contact exists — deletion is idempotent,
  /// never an error. Relative order of the remaining contacts is preserved.
  pub fn delete_contact(&mut self, id: Uuid) -> Option<Contact> {
    let pos = self.contacts.iter().position(|c| c.id == id)?;
    Some(self.contacts.remove(pos))
  }

  /// Replace the filter verbatim. Any string is accepted, including empty;
  /// no trimming or normalisation is applied.
  pub fn set_filter(&mut self, text: impl Into<String>) {
    self.filter = text.into();
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  pub fn filter(&self) -> &str { &self.filter }

  /// All contacts in insertion order, ignoring the filter.
  pub fn contacts(&self) -> &[Contact] { &self.contacts }

  /// The contacts whose name contains the filter as a case-insensitive
  /// substring, in insertion order. An empty filter matches everything.
  /// A pure projection: neither `contacts` nor `filter` is touched.
  pub fn visible_contacts(&self) -> Vec<&Contact> {
    let needle = self.filter.to_lowercase();
    self
      .contacts
      .iter()
      .filter(|c| c.name.to_lowercase().contains(&needle))
      .collect()
  }

  pub fn len(&self) -> usize { self.contacts.len() }

  pub fn is_empty(&self) -> bool { self.contacts.is_empty() }
}
