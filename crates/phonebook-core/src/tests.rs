//! Unit tests for the contact store and the form validation rules.

use uuid::Uuid;

use crate::{
  Error,
  store::ContactStore,
  validate::{validate_name, validate_number},
};

fn names(store: &ContactStore) -> Vec<&str> {
  store.contacts().iter().map(|c| c.name.as_str()).collect()
}

fn visible_names(store: &ContactStore) -> Vec<&str> {
  store
    .visible_contacts()
    .into_iter()
    .map(|c| c.name.as_str())
    .collect()
}

// ─── Adding ──────────────────────────────────────────────────────────────────

#[test]
fn distinct_adds_preserve_call_order() {
  let mut store = ContactStore::new();
  store.add_contact("Anna", "111-11-11").unwrap();
  store.add_contact("Diana", "222-22-22").unwrap();
  store.add_contact("Bob", "333-33-33").unwrap();

  assert_eq!(store.len(), 3);
  assert_eq!(names(&store), ["Anna", "Diana", "Bob"]);
}

#[test]
fn add_assigns_unique_ids() {
  let mut store = ContactStore::new();
  let a = store.add_contact("Anna", "111-11-11").unwrap();
  let b = store.add_contact("Bob", "222-22-22").unwrap();
  assert_ne!(a.id, b.id);
}

#[test]
fn add_stores_inputs_verbatim() {
  let mut store = ContactStore::new();
  let c = store.add_contact("  odd name  ", " 123-456 ").unwrap();
  assert_eq!(c.name, "  odd name  ");
  assert_eq!(c.number, " 123-456 ");
}

#[test]
fn duplicate_name_is_rejected_case_insensitively() {
  let mut store = ContactStore::new();
  store.add_contact("Alice", "123-456").unwrap();

  let err = store.add_contact("ALICE", "999").unwrap_err();
  assert_eq!(err, Error::DuplicateName { name: "ALICE".into() });

  // State untouched.
  assert_eq!(names(&store), ["Alice"]);
  assert_eq!(store.contacts()[0].number, "123-456");
}

#[test]
fn duplicate_check_folds_cyrillic() {
  let mut store = ContactStore::new();
  store.add_contact("Анна", "111-11-11").unwrap();
  assert!(matches!(
    store.add_contact("анна", "222-22-22"),
    Err(Error::DuplicateName { .. })
  ));
}

// ─── Deleting ────────────────────────────────────────────────────────────────

#[test]
fn delete_missing_id_is_a_noop() {
  let mut store = ContactStore::new();
  store.add_contact("Anna", "111-11-11").unwrap();

  assert!(store.delete_contact(Uuid::new_v4()).is_none());
  assert_eq!(store.len(), 1);
}

#[test]
fn delete_removes_exactly_one_and_keeps_order() {
  let mut store = ContactStore::new();
  store.add_contact("Anna", "111-11-11").unwrap();
  let diana = store.add_contact("Diana", "222-22-22").unwrap();
  store.add_contact("Bob", "333-33-33").unwrap();

  let removed = store.delete_contact(diana.id).unwrap();
  assert_eq!(removed.name, "Diana");
  assert_eq!(names(&store), ["Anna", "Bob"]);
}

#[test]
fn delete_is_idempotent() {
  let mut store = ContactStore::new();
  let anna = store.add_contact("Anna", "111-11-11").unwrap();

  assert!(store.delete_contact(anna.id).is_some());
  assert!(store.delete_contact(anna.id).is_none());
  assert!(store.is_empty());
}

#[test]
fn deleted_name_can_be_added_again() {
  let mut store = ContactStore::new();
  let anna = store.add_contact("Anna", "111-11-11").unwrap();
  store.delete_contact(anna.id);

  let again = store.add_contact("anna", "222-22-22").unwrap();
  assert_ne!(again.id, anna.id);
  assert_eq!(names(&store), ["anna"]);
}

// ─── Filtering ───────────────────────────────────────────────────────────────

#[test]
fn empty_filter_shows_everything_in_insertion_order() {
  let mut store = ContactStore::new();
  store.add_contact("Anna", "111-11-11").unwrap();
  store.add_contact("Diana", "222-22-22").unwrap();
  store.add_contact("Bob", "333-33-33").unwrap();

  assert_eq!(visible_names(&store), ["Anna", "Diana", "Bob"]);
}

#[test]
fn filter_matches_case_insensitive_substring() {
  let mut store = ContactStore::new();
  store.add_contact("Anna", "111-11-11").unwrap();
  store.add_contact("Diana", "222-22-22").unwrap();
  store.add_contact("Bob", "333-33-33").unwrap();

  store.set_filter("an");
  assert_eq!(visible_names(&store), ["Anna", "Diana"]);
}

#[test]
fn filter_is_stored_verbatim_and_is_not_trimmed() {
  let mut store = ContactStore::new();
  store.add_contact("Anna", "111-11-11").unwrap();

  store.set_filter(" an");
  assert_eq!(store.filter(), " an");
  assert!(visible_names(&store).is_empty());
}

#[test]
fn visible_contacts_does_not_mutate_state() {
  let mut store = ContactStore::new();
  store.add_contact("Anna", "111-11-11").unwrap();
  store.set_filter("zz");

  assert!(store.visible_contacts().is_empty());
  assert_eq!(store.filter(), "zz");
  assert_eq!(store.len(), 1);
}

// ─── End-to-end scenario ─────────────────────────────────────────────────────

#[test]
fn add_reject_filter_delete_scenario() {
  let mut store = ContactStore::new();
  assert!(store.is_empty());

  let alice = store.add_contact("Alice", "123-456").unwrap();
  assert_eq!(names(&store), ["Alice"]);
  assert_eq!(store.contacts()[0].number, "123-456");

  assert!(matches!(
    store.add_contact("alice", "999"),
    Err(Error::DuplicateName { .. })
  ));
  assert_eq!(names(&store), ["Alice"]);

  store.set_filter("ali");
  assert_eq!(visible_names(&store), ["Alice"]);

  store.delete_contact(alice.id);
  assert!(store.is_empty());
}

// ─── Name validation ─────────────────────────────────────────────────────────

#[test]
fn name_rule_accepts_the_documented_examples() {
  for name in [
    "Adrian",
    "Jacob Mercer",
    "Charles de Batz de Castelmore d'Artagnan",
    "Anna-Maria",
    "Анна",
    "Вера Павловна",
  ] {
    assert!(validate_name(name).is_ok(), "expected valid: {name:?}");
  }
}

#[test]
fn name_rule_accepts_single_letter_word_between_separators() {
  // The particle "d'" puts a one-letter word between a space and an
  // apostrophe; both separators must be allowed around it.
  assert!(validate_name("Castelmore d'Artagnan").is_ok());
  assert!(validate_name("d'Artagnan").is_ok());
}

#[test]
fn name_rule_rejects_non_letters_and_stray_separators() {
  for name in [
    "",
    " ",
    "Anna1",
    "123",
    " Anna",
    "Anna-",
    "O''Hara",
    "Anna_Maria",
    "Anna!",
  ] {
    assert_eq!(
      validate_name(name),
      Err(Error::InvalidName),
      "expected invalid: {name:?}"
    );
  }
}

// ─── Number validation ───────────────────────────────────────────────────────

#[test]
fn number_rule_accepts_digits_with_separators() {
  for number in [
    "123-456-7",
    "1234567",
    "+380441234567",
    "(044) 123-4567",
    "044.123.4567",
    "123 456 78",
  ] {
    assert!(validate_number(number).is_ok(), "expected valid: {number:?}");
  }
}

#[test]
fn number_rule_rejects_bad_characters_and_lengths() {
  for number in [
    "",
    "123456",            // one short of the lower bound
    "12345678901234567", // one past the upper bound
    "123-45a-7",
    "++3801234567",
    "380 123 456 x",
    "-------",           // separators only, no digit
  ] {
    assert_eq!(
      validate_number(number),
      Err(Error::InvalidNumber),
      "expected invalid: {number:?}"
    );
  }
}
