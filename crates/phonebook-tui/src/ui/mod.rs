//! TUI rendering — orchestrates all panes.

pub mod contact_form;
pub mod contact_list;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, Focus};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);

  if let Some(notice) = &app.notice {
    draw_notice(f, area, notice);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " phonebook  [Tab] switch pane  [q] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{date} "),
    Style::default().fg(Color::DarkGray),
  );

  // Simple left-right header: pad the middle.
  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  // Split into the add-contact form (left) and the contact list (right).
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
    .split(area);

  contact_form::draw(f, cols[0], app);
  contact_list::draw(f, cols[1], app);
}

// ─── Notice popup ─────────────────────────────────────────────────────────────

/// A centered modal over everything else. Input is blocked until dismissed.
fn draw_notice(f: &mut Frame, area: Rect, notice: &str) {
  let width = area.width.clamp(20, 60).min(area.width);
  let height = 5.min(area.height);
  let popup = Rect {
    x:      area.x + (area.width.saturating_sub(width)) / 2,
    y:      area.y + (area.height.saturating_sub(height)) / 2,
    width,
    height,
  };

  let block = Block::default()
    .title(" Notice ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Yellow));
  let inner = block.inner(popup);

  f.render_widget(Clear, popup);
  f.render_widget(block, popup);
  f.render_widget(
    Paragraph::new(vec![
      Line::from(notice.to_string()),
      Line::from(Span::styled(
        "Enter/Esc to dismiss",
        Style::default().fg(Color::DarkGray),
      )),
    ])
    .wrap(Wrap { trim: true }),
    inner,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = if app.notice.is_some() {
    ("NOTICE", "Enter/Esc dismiss")
  } else {
    match app.focus {
      Focus::NameInput => ("NAME", "Type the name  Tab next field  Enter add  Esc clear"),
      Focus::NumberInput => ("NUMBER", "Type the number  Tab next pane  Enter add  Esc clear"),
      Focus::Filter => ("FILTER", "Type to filter by name  Esc clear  Enter to list"),
      Focus::List => ("LIST", "↑↓/jk navigate  d delete  / filter  a add form  q quit"),
    }
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
