//! Contact — one phonebook entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single phonebook entry. `name` and `number` are stored exactly as the
/// user entered them; pattern validation happens before construction (see
/// [`crate::validate`]) and nothing is re-normalised here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
  /// Assigned once at creation, never reused. A v4 UUID so rapid successive
  /// additions cannot collide the way millisecond timestamps can.
  pub id:       Uuid,
  pub name:     String,
  pub number:   String,
  /// Informational only; never used for identity or ordering.
  pub added_at: DateTime<Utc>,
}

impl Contact {
  pub(crate) fn new(name: String, number: String) -> Self {
    Self {
      id: Uuid::new_v4(),
      name,
      number,
      added_at: Utc::now(),
    }
  }
}
