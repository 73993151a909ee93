//! The signup app: focus handling and key dispatch around a `FormController`.

use log::{debug, info};
use signup_form::render::{FieldEvent, FieldKind, FieldProps, Key, Modifiers};
use signup_form::{FieldName, FormController, LANGUAGES, Language, SubmitError, SubmitHandler};

use crate::config::Config;

/// Something that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    Language,
    Submit,
}

/// Outcome of the last submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Rejected(SubmitError),
    Submitted,
}

impl Status {
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Rejected(SubmitError::Pristine) => {
                Some("Fill in the form before submitting.".to_string())
            }
            Self::Rejected(SubmitError::Invalid { fields }) => Some(format!(
                "Please fix {} field{} before submitting.",
                fields.len(),
                if fields.len() == 1 { "" } else { "s" }
            )),
            Self::Submitted => Some("Thanks! You're on the list.".to_string()),
        }
    }
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct SignupApp {
    form: FormController,
    focus_order: Vec<Focus>,
    focus: usize,
    language: usize,
    twitter_prefix: String,
    status: Status,
}

impl SignupApp {
    pub fn new(config: &Config) -> Self {
        let mut focus_order: Vec<Focus> = FieldName::ALL.into_iter().map(Focus::Field).collect();
        if config.show_language {
            focus_order.push(Focus::Language);
        }
        focus_order.push(Focus::Submit);

        Self {
            form: FormController::new(),
            focus_order,
            focus: 0,
            language: 0,
            twitter_prefix: config.twitter_prefix.clone(),
            status: Status::Idle,
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn focused(&self) -> Focus {
        self.focus_order[self.focus]
    }

    pub fn focus_order(&self) -> &[Focus] {
        &self.focus_order
    }

    pub fn shows_language(&self) -> bool {
        self.focus_order.contains(&Focus::Language)
    }

    pub fn language(&self) -> Language {
        LANGUAGES[self.language]
    }

    /// Renderer props for `field`, including focus and the configured prefix.
    pub fn field_props(&self, field: FieldName) -> FieldProps<'_> {
        let props = self
            .form
            .field_props(field)
            .focused(self.focused() == Focus::Field(field));
        match props.kind {
            FieldKind::Url { .. } => props.kind(FieldKind::Url {
                prefix: &self.twitter_prefix,
            }),
            _ => props,
        }
    }

    pub fn handle_key<H>(&mut self, key: Key, modifiers: Modifiers, handler: &mut H) -> Control
    where
        H: SubmitHandler + ?Sized,
    {
        if modifiers.ctrl {
            match key {
                Key::Char('c') => return Control::Quit,
                Key::Char('s') => self.submit(handler),
                Key::Char('r') => self.reset(),
                _ => {}
            }
            return Control::Continue;
        }

        match key {
            Key::Escape => return Control::Quit,
            Key::Tab | Key::Down => self.move_focus(true),
            Key::BackTab | Key::Up => self.move_focus(false),
            _ => match self.focused() {
                Focus::Field(field) => self.handle_field_key(field, key, modifiers),
                Focus::Language => self.handle_language_key(key),
                Focus::Submit => {
                    if matches!(key, Key::Enter | Key::Char(' ')) {
                        self.submit(handler);
                    }
                }
            },
        }
        Control::Continue
    }

    fn handle_field_key(&mut self, field: FieldName, key: Key, modifiers: Modifiers) {
        let Some(event) = self.field_props(field).handle_key(key, modifiers) else {
            return;
        };
        match event {
            // Enter leaves the field like Tab does.
            FieldEvent::Blur => self.move_focus(true),
            change => self.form.apply(field, change),
        }
    }

    fn handle_language_key(&mut self, key: Key) {
        let count = LANGUAGES.len();
        match key {
            Key::Right | Key::Char(' ') => self.language = (self.language + 1) % count,
            Key::Left => self.language = (self.language + count - 1) % count,
            Key::Home => self.language = 0,
            Key::End => self.language = count - 1,
            Key::Enter => self.move_focus(true),
            _ => return,
        }
        debug!("Language: {}", self.language().name);
    }

    /// Move focus, blurring the field being left.
    fn move_focus(&mut self, forward: bool) {
        if let Focus::Field(field) = self.focused() {
            self.form.apply(field, FieldEvent::Blur);
        }
        let count = self.focus_order.len();
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
    }

    fn set_focus(&mut self, target: Focus) {
        if let Some(index) = self.focus_order.iter().position(|f| *f == target) {
            self.focus = index;
        }
    }

    fn submit<H>(&mut self, handler: &mut H)
    where
        H: SubmitHandler + ?Sized,
    {
        match self.form.submit(handler) {
            Ok(()) => {
                if self.shows_language() {
                    info!("Selected language: {}", self.language().name);
                }
                self.status = Status::Submitted;
            }
            Err(err) => {
                info!("Submit rejected: {}", err);
                self.form.touch_all();
                let first_invalid = self.form.errors().first().map(|(field, _)| field);
                if let Some(field) = first_invalid {
                    self.set_focus(Focus::Field(field));
                }
                self.status = Status::Rejected(err);
            }
        }
    }

    fn reset(&mut self) {
        self.form.reset();
        self.focus = 0;
        self.language = 0;
        self.status = Status::Idle;
    }
}
