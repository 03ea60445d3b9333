//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use profile_form::SubmitHandler;
use ratatui::Frame;

/// Main draw function
pub fn draw<S: SubmitHandler>(frame: &mut Frame, app: &App<S>) {
    let main_area = layout::create_layout(frame.area());

    forms::draw_profile_form(frame, main_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
