//! Add-contact form pane — left panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};

/// Render the add-contact form into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Add contact ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let lines = vec![
    field_label("Name"),
    field_value(&app.name_input, app.focus == Focus::NameInput),
    Line::default(),
    field_label("Number"),
    field_value(&app.number_input, app.focus == Focus::NumberInput),
    Line::default(),
    Line::from(Span::styled(
      "Enter adds the contact.",
      Style::default().fg(Color::DarkGray),
    )),
  ];

  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(lines), inner);
}

fn field_label(label: &str) -> Line<'_> {
  Line::from(Span::styled(
    label,
    Style::default().add_modifier(Modifier::BOLD),
  ))
}

fn field_value(value: &str, focused: bool) -> Line<'_> {
  if focused {
    // Trailing underscore stands in for the cursor.
    Line::from(Span::styled(
      format!("{value}_"),
      Style::default().fg(Color::Yellow),
    ))
  } else if value.is_empty() {
    Line::from(Span::styled("—", Style::default().fg(Color::DarkGray)))
  } else {
    Line::from(value.to_string())
  }
}
