//! Application state and key handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use profile_form::state::{Control, Field, Form};
use profile_form::{ProfileForm, StdoutSubmitter, SubmitHandler, SubmitOutcome};

/// Severity of the status bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Main application struct
pub struct App<S = StdoutSubmitter> {
    /// The form being edited
    pub form: ProfileForm<S>,
    /// Last submit feedback shown in the status bar
    pub status_message: Option<(StatusKind, String)>,
    /// Whether the app should quit
    quit: bool,
}

impl App<StdoutSubmitter> {
    pub fn new() -> Self {
        Self::with_submitter(StdoutSubmitter::new())
    }
}

impl Default for App<StdoutSubmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SubmitHandler> App<S> {
    pub fn with_submitter(submitter: S) -> Self {
        Self {
            form: ProfileForm::new(submitter),
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn into_submitter(self) -> S {
        self.form.into_submitter()
    }

    /// Handle a key press on the form
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let control = self.form.store().active_control();
        let on_select = control == Control::Field(Field::Gender);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true
            }
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit().await
            }
            // Enter submits from any control, like a native form
            KeyCode::Enter => self.submit().await,
            KeyCode::Tab | KeyCode::Down => self.form.store_mut().next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.store_mut().prev_field(),
            KeyCode::Left if on_select => self.form.store_mut().cycle_gender(false),
            KeyCode::Right | KeyCode::Char(' ') if on_select => {
                self.form.store_mut().cycle_gender(true)
            }
            KeyCode::Char(c) => self.form.store_mut().input_char(c),
            KeyCode::Backspace => self.form.store_mut().backspace(),
            _ => {}
        }
        Ok(())
    }

    async fn submit(&mut self) {
        self.status_message = Some(match self.form.submit().await {
            SubmitOutcome::Submitted => (StatusKind::Success, "Profile submitted!".to_string()),
            SubmitOutcome::Invalid { error_count } => (
                StatusKind::Error,
                format!(
                    "Please fix {error_count} error{}",
                    if error_count == 1 { "" } else { "s" }
                ),
            ),
            SubmitOutcome::Rejected(reason) => {
                (StatusKind::Error, format!("Submission failed: {reason}"))
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    async fn fill_valid(app: &mut App) {
        type_str(app, "Ada").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_str(app, "ada@example.com").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_str(app, "36").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_str(app, "Analytical1").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_str(app, "Analytical1").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_str(app, "5551234567").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Right)).await.unwrap();
    }

    #[tokio::test]
    async fn test_typing_fills_fields() {
        let mut app = App::new();
        fill_valid(&mut app).await;

        let data = app.form.snapshot().data.clone();
        assert_eq!(data.name, "Ada");
        assert_eq!(data.age, 36);
        assert_eq!(data.phone, "5551234567");
        assert_eq!(data.gender, "female");
    }

    #[tokio::test]
    async fn test_enter_submits_valid_form() {
        let mut app = App::new();
        fill_valid(&mut app).await;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert_eq!(
            app.status_message,
            Some((StatusKind::Success, "Profile submitted!".to_string()))
        );
        let submitter = app.into_submitter();
        assert_eq!(submitter.accepted().len(), 1);
        assert_eq!(submitter.accepted()[0].email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_ctrl_s_on_empty_form_reports_errors() {
        let mut app = App::new();
        app.handle_key(ctrl('s')).await.unwrap();

        assert!(matches!(app.status_message, Some((StatusKind::Error, _))));
        assert!(app.form.error_text(Field::Name).is_some());
        assert!(app.into_submitter().accepted().is_empty());
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(app.should_quit());

        let mut app = App::new();
        app.handle_key(ctrl('c')).await.unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_space_is_text_outside_select() {
        let mut app = App::new();
        type_str(&mut app, "Ada L").await;
        assert_eq!(app.form.snapshot().data.name, "Ada L");
    }

    #[tokio::test]
    async fn test_up_from_first_field_lands_on_submit() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Up)).await.unwrap();
        assert!(app.form.store().is_submit_active());
    }
}
