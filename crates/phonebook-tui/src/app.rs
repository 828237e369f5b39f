//! Application state machine and event dispatcher.
//!
//! This is the presentation layer for the contact store: it owns the
//! transient form inputs, applies the validation rules before every submit,
//! and forwards each user intent into exactly one store operation. Events
//! are handled one at a time, to completion, in the order they arrive.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use phonebook_core::{Error, contact::Contact, store::ContactStore, validate};

/// The blocking notice shown when the store rejects a duplicate name.
const DUPLICATE_NOTICE: &str = "This contact already exists!";

// ─── Focus ────────────────────────────────────────────────────────────────────

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  NameInput,
  NumberInput,
  Filter,
  List,
}

impl Focus {
  fn next(self) -> Self {
    match self {
      Self::NameInput => Self::NumberInput,
      Self::NumberInput => Self::Filter,
      Self::Filter => Self::List,
      Self::List => Self::NameInput,
    }
  }

  fn prev(self) -> Self {
    match self {
      Self::NameInput => Self::List,
      Self::NumberInput => Self::NameInput,
      Self::Filter => Self::NumberInput,
      Self::List => Self::Filter,
    }
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state. The store is the single owner of contact
/// data; everything else here is view state.
pub struct App {
  pub store: ContactStore,

  /// Current keyboard focus.
  pub focus: Focus,

  /// Pending form inputs, cleared on successful add.
  pub name_input:   String,
  pub number_input: String,

  /// Cursor position within the *visible* (filtered) contact list.
  pub list_cursor: usize,

  /// Blocking notice (duplicate name or validation guidance). While set,
  /// all other input is ignored until the user dismisses it.
  pub notice: Option<String>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,
}

impl App {
  pub fn new() -> Self {
    Self {
      store: ContactStore::new(),
      focus: Focus::NameInput,
      name_input: String::new(),
      number_input: String::new(),
      list_cursor: 0,
      notice: None,
      status_msg: String::new(),
    }
  }

  /// The contact under the list cursor in the visible list, if any.
  pub fn selected_contact(&self) -> Option<&Contact> {
    self.store.visible_contacts().get(self.list_cursor).copied()
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    // A notice is modal: it must be dismissed before another attempt.
    if self.notice.is_some() {
      if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        self.notice = None;
      }
      return true;
    }

    match key.code {
      KeyCode::Tab => {
        self.focus = self.focus.next();
        return true;
      }
      KeyCode::BackTab => {
        self.focus = self.focus.prev();
        return true;
      }
      _ => {}
    }

    match self.focus {
      Focus::NameInput | Focus::NumberInput => self.handle_input_key(key),
      Focus::Filter => self.handle_filter_key(key),
      Focus::List => self.handle_list_key(key),
    }
  }

  /// The form field that currently has focus, if focus is on the form.
  fn focused_input(&mut self) -> Option<&mut String> {
    match self.focus {
      Focus::NameInput => Some(&mut self.name_input),
      Focus::NumberInput => Some(&mut self.number_input),
      Focus::Filter | Focus::List => None,
    }
  }

  fn handle_input_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char(c) => {
        if let Some(field) = self.focused_input() {
          field.push(c);
        }
      }
      KeyCode::Backspace => {
        if let Some(field) = self.focused_input() {
          field.pop();
        }
      }
      KeyCode::Enter => self.submit(),
      KeyCode::Esc => {
        if let Some(field) = self.focused_input() {
          field.clear();
        }
      }
      _ => {}
    }
    true
  }

  fn handle_filter_key(&mut self, key: KeyEvent) -> bool {
    // Every edit goes to the store immediately; the filter lives there, not
    // in the view.
    match key.code {
      KeyCode::Char(c) => {
        let mut text = self.store.filter().to_owned();
        text.push(c);
        self.store.set_filter(text);
        self.list_cursor = 0;
      }
      KeyCode::Backspace => {
        let mut text = self.store.filter().to_owned();
        text.pop();
        self.store.set_filter(text);
        self.list_cursor = 0;
      }
      KeyCode::Esc => {
        self.store.set_filter(String::new());
        self.list_cursor = 0;
      }
      KeyCode::Enter => self.focus = Focus::List,
      _ => {}
    }
    true
  }

  fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      // Quit
      KeyCode::Char('q') => return false,

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.store.visible_contacts().len();
        if len > 0 && self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if self.list_cursor > 0 {
          self.list_cursor -= 1;
        }
      }

      // Delete the selected contact
      KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),

      // Jump to the filter / the form
      KeyCode::Char('/') => self.focus = Focus::Filter,
      KeyCode::Char('a') => self.focus = Focus::NameInput,

      _ => {}
    }
    true
  }

  // ── Intents ───────────────────────────────────────────────────────────────

  /// Validate the pending inputs and forward them to the store. On any
  /// rejection a blocking notice is raised and the inputs are kept so the
  /// user can correct them; on success the form is cleared.
  fn submit(&mut self) {
    if self.name_input.is_empty() || self.number_input.is_empty() {
      self.notice = Some("Both name and number are required.".into());
      return;
    }
    if let Err(e) = validate::validate_name(&self.name_input) {
      self.notice = Some(e.to_string());
      return;
    }
    if let Err(e) = validate::validate_number(&self.number_input) {
      self.notice = Some(e.to_string());
      return;
    }

    match self
      .store
      .add_contact(self.name_input.clone(), self.number_input.clone())
    {
      Ok(contact) => {
        tracing::info!(id = %contact.id, name = %contact.name, "contact added");
        self.name_input.clear();
        self.number_input.clear();
        self.focus = Focus::NameInput;
        self.status_msg = format!("Added {}", contact.name);
      }
      Err(Error::DuplicateName { name }) => {
        tracing::warn!(%name, "duplicate contact rejected");
        self.notice = Some(DUPLICATE_NOTICE.into());
      }
      Err(e) => self.notice = Some(e.to_string()),
    }
  }

  /// Delete the contact under the cursor, clamping the cursor afterwards.
  /// Deleting with an empty visible list does nothing.
  fn delete_selected(&mut self) {
    let Some(id) = self.selected_contact().map(|c| c.id) else {
      return;
    };
    if let Some(removed) = self.store.delete_contact(id) {
      tracing::info!(id = %removed.id, name = %removed.name, "contact deleted");
      self.status_msg = format!("Deleted {}", removed.name);
    }
    let len = self.store.visible_contacts().len();
    if self.list_cursor >= len {
      self.list_cursor = len.saturating_sub(1);
    }
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
