//! Input validation for the add-contact form.
//!
//! These rules run in the presentation layer before
//! [`ContactStore::add_contact`](crate::store::ContactStore::add_contact) is
//! called; the store itself does not re-check them. The phone rule follows
//! the prose description of the upstream form (digits, optional leading `+`,
//! optional separators, bounded length) — the upstream HTML pattern itself
//! is malformed and is not reproduced.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Result};

/// Runs of Latin/Cyrillic letters joined by single spaces, apostrophes or
/// hyphens. Accepts "Adrian", "Jacob Mercer",
/// "Charles de Batz de Castelmore d'Artagnan".
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[A-Za-zА-Яа-я]+([' -][A-Za-zА-Яа-я]+)*$")
    .expect("name pattern compiles")
});

/// Optional leading `+`, then digits and separator characters only. Length
/// and digit-presence are checked separately in [`validate_number`].
static NUMBER_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^\+?[0-9 .\-()]+$").expect("number pattern compiles"));

/// Inclusive bounds on the total character length of a phone number.
const NUMBER_LEN: std::ops::RangeInclusive<usize> = 7..=16;

/// Check a contact name against the form rule. Empty input is rejected.
pub fn validate_name(name: &str) -> Result<()> {
  if !NAME_RE.is_match(name) {
    return Err(Error::InvalidName);
  }
  Ok(())
}

/// Check a phone number against the form rule: permitted characters only,
/// at least one digit, 7 to 16 characters in total.
pub fn validate_number(number: &str) -> Result<()> {
  if !NUMBER_LEN.contains(&number.chars().count())
    || !NUMBER_RE.is_match(number)
    || !number.bytes().any(|b| b.is_ascii_digit())
  {
    return Err(Error::InvalidNumber);
  }
  Ok(())
}
