//! Profile form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use profile_form::state::{Control, Field};
use profile_form::SubmitHandler;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the profile form: seven bound controls and the submit button
pub fn draw_profile_form<S: SubmitHandler>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let block = Block::default()
        .title(" User Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = Field::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .chain([Constraint::Length(BUTTON_HEIGHT), Constraint::Min(0)])
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let store = app.form.store();
    let active = store.active_control();

    for field in Field::ALL {
        let error = app.form.error_text(field);
        draw_field(
            frame,
            chunks[field.index()],
            field,
            &store.raw_value(field),
            error.as_deref(),
            active == Control::Field(field),
        );
    }

    let button_area = Rect {
        width: chunks[Field::ALL.len()].width.min(14),
        ..chunks[Field::ALL.len()]
    };
    render_button(
        frame,
        button_area,
        "Submit",
        active == Control::Submit,
        Color::Green,
    );
}
