//! Layout components (content area, status bar)

use crate::app::{App, StatusKind};
use profile_form::state::{Control, InputKind};
use profile_form::SubmitHandler;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar<S: SubmitHandler>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Error indicator
    let indicator = if app.form.snapshot().errors.is_empty() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Red))
    };
    spans.push(indicator);

    let hints = control_hints(app.form.store().active_control());
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    if let Some((kind, msg)) = &app.status_message {
        let color = match kind {
            StatusKind::Success => Color::Green,
            StatusKind::Error => Color::Red,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}

/// Key hints for the focused control
fn control_hints(control: Control) -> String {
    let submit = crate::platform::SUBMIT_SHORTCUT;
    match control {
        Control::Field(field) if field.kind() == InputKind::Select => {
            format!("←/→: change | Tab: next | {submit}: submit | Esc: quit")
        }
        Control::Field(_) => format!("type to edit | Tab: next | {submit}: submit | Esc: quit"),
        Control::Submit => "Enter: submit | Shift+Tab: back | Esc: quit".to_string(),
    }
}
