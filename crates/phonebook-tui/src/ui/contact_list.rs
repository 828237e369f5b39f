//! Contact list pane — right panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, Focus};

/// Render the filtered contact list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let visible = app.store.visible_contacts();
  let total = app.store.len();

  // Title with count; shows the filtered/total split when a filter is set.
  let title = if app.store.filter().is_empty() {
    format!(" Contacts ({total}) ")
  } else {
    format!(" Contacts ({}/{total}) ", visible.len())
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let items: Vec<ListItem> = visible
    .iter()
    .map(|contact| {
      ListItem::new(Line::from(vec![
        Span::raw(contact.name.clone()),
        Span::styled(
          format!(" - {}", contact.number),
          Style::default().fg(Color::DarkGray),
        ),
      ]))
    })
    .collect();

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  // Filter bar at the top of the inner area.
  let filter_focused = app.focus == Focus::Filter;
  if (filter_focused || !app.store.filter().is_empty()) && inner_area.height > 2 {
    let filter_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.y += 1;
    inner_area.height = inner_area.height.saturating_sub(1);

    let filter_text = if filter_focused {
      format!("/{}_", app.store.filter())
    } else {
      format!("/{}", app.store.filter())
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  // Scrollable list with cursor tracking.
  let mut state = ListState::default();
  state.select(if visible.is_empty() {
    None
  } else {
    Some(app.list_cursor)
  });

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    inner_area,
    &mut state,
  );
}
