//! Labeled input with inline error decoration.

use super::buffer::{Buffer, char_width, display_width};
use super::event::{Key, Modifiers};
use super::rect::Rect;
use super::style::{Palette, TextStyle};
use crate::field::FieldName;

/// Prefix shown in front of the Twitter handle input.
pub const DEFAULT_TWITTER_PREFIX: &str = "https://twitter.com/";

/// Icon drawn at the right edge of an input whose error is visible.
pub const ERROR_ICON: char = '!';

/// Character used to mask password input.
pub const MASK_CHAR: char = '•';

/// How the input row presents its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind<'a> {
    Text,
    Email,
    /// Value is masked.
    Password,
    /// Value follows a fixed, dimmed prefix.
    Url { prefix: &'a str },
}

impl FieldKind<'_> {
    /// Default presentation for a signup field.
    pub fn for_field(field: FieldName) -> Self {
        match field {
            FieldName::Email => Self::Email,
            FieldName::Password => Self::Password,
            FieldName::TwitterHandle => Self::Url {
                prefix: DEFAULT_TWITTER_PREFIX,
            },
            FieldName::FirstName | FieldName::LastName => Self::Text,
        }
    }
}

/// Notification produced by a field in response to input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The value changed; carries the complete new value.
    Change(String),
    /// The field lost focus.
    Blur,
}

/// Everything the renderer needs to draw one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldProps<'a> {
    pub name: FieldName,
    pub label: &'a str,
    pub kind: FieldKind<'a>,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub touched: bool,
    pub focused: bool,
}

impl<'a> FieldProps<'a> {
    /// Rows occupied by a rendered field: label, input, message.
    pub const HEIGHT: u16 = 3;

    pub fn new(name: FieldName, value: &'a str) -> Self {
        Self {
            name,
            label: name.label(),
            kind: FieldKind::for_field(name),
            value,
            error: None,
            touched: false,
            focused: false,
        }
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn touched(mut self, touched: bool) -> Self {
        self.touched = touched;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn kind(mut self, kind: FieldKind<'a>) -> Self {
        self.kind = kind;
        self
    }

    /// The error decoration is shown only after the field was left once.
    pub fn error_visible(&self) -> bool {
        self.touched && self.error.is_some()
    }

    /// Translate a key press into a change or blur notification.
    pub fn handle_key(&self, key: Key, modifiers: Modifiers) -> Option<FieldEvent> {
        match key {
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt => {
                let mut value = self.value.to_string();
                value.push(c);
                Some(FieldEvent::Change(value))
            }
            Key::Backspace => {
                let mut chars = self.value.chars();
                chars.next_back()?;
                Some(FieldEvent::Change(chars.as_str().to_string()))
            }
            Key::Tab | Key::BackTab | Key::Enter => Some(FieldEvent::Blur),
            _ => None,
        }
    }

    /// The value as displayed in the input row.
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Password => self.value.chars().map(|_| MASK_CHAR).collect(),
            _ => self.value.to_string(),
        }
    }
}

/// Draw `props` into the first [`FieldProps::HEIGHT`] rows of `area`.
pub fn render_field(props: &FieldProps<'_>, area: Rect, buf: &mut Buffer, palette: &Palette) {
    if area.is_empty() {
        return;
    }
    let error_visible = props.error_visible();
    let (label_row, rest) = area.take_rows(1);
    let (input_row, message_row) = rest.take_rows(1);
    let (message_row, _) = message_row.take_rows(1);

    buf.put_str(
        label_row.x,
        label_row.y,
        props.label,
        label_row.right(),
        palette.foreground,
        TextStyle::new().bold(),
    );

    if !input_row.is_empty() {
        render_input(props, input_row, buf, palette, error_visible);
    }

    if error_visible
        && !message_row.is_empty()
        && let Some(message) = props.error
    {
        buf.put_str(
            message_row.x,
            message_row.y,
            message,
            message_row.right(),
            palette.error,
            TextStyle::new(),
        );
    }
}

fn render_input(
    props: &FieldProps<'_>,
    row: Rect,
    buf: &mut Buffer,
    palette: &Palette,
    error_visible: bool,
) {
    buf.fill(row, palette.surface);

    let bar_color = if error_visible {
        Some(palette.error)
    } else if props.focused {
        Some(palette.primary)
    } else {
        None
    };
    if let Some(color) = bar_color {
        buf.put_str(row.x, row.y, "▌", row.right(), color, TextStyle::new());
    }

    // Leave room for the icon column when the error is shown.
    let text_end = if error_visible {
        row.right().saturating_sub(3)
    } else {
        row.right().saturating_sub(1)
    };
    let mut x = row.x + 1;

    if let FieldKind::Url { prefix } = props.kind {
        x = buf.put_str(x, row.y, prefix, text_end, palette.muted, TextStyle::new().dim());
    }

    // Keep the tail (and the cursor) visible when the value overflows.
    let cursor_width = u16::from(props.focused);
    let available = text_end.saturating_sub(x).saturating_sub(cursor_width) as usize;
    let shown = tail_to_width(&props.display_value(), available);
    x = buf.put_str(x, row.y, &shown, text_end, palette.foreground, TextStyle::new());

    if props.focused && x < text_end {
        buf.put_str(
            x,
            row.y,
            " ",
            text_end,
            palette.foreground,
            TextStyle::new().reversed(),
        );
    }

    if error_visible {
        let icon_x = row.right().saturating_sub(2);
        if icon_x > row.x {
            buf.put_str(
                icon_x,
                row.y,
                &ERROR_ICON.to_string(),
                row.right(),
                palette.error,
                TextStyle::new().bold(),
            );
        }
    }
}

/// The longest suffix of `s` that fits in `max_width` columns.
fn tail_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let mut width = 0;
    let mut start = s.len();
    for (idx, ch) in s.char_indices().rev() {
        let w = char_width(ch);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    s[start..].to_string()
}
