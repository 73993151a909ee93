//! Lays out the whole form into a buffer.

use signup_form::FieldName;
use signup_form::render::{Buffer, FieldProps, Palette, Rect, TextStyle, render_field};

use crate::app::{Focus, SignupApp, Status};

pub const TITLE: &str = "Join the List";
pub const SUBTITLE: &str =
    "We have a long queue of excited folks like you, but we want you onboard as well.";
pub const HELP: &str = "Tab/Shift+Tab move  ←/→ language  Ctrl+S submit  Ctrl+R reset  Esc quit";
pub const SUBMIT_LABEL: &str = " Submit ";

const MAX_CONTENT_WIDTH: u16 = 64;
const FIELD_GAP: u16 = 1;

pub fn render(app: &SignupApp, buf: &mut Buffer, palette: &Palette) {
    let area = buf.area();
    buf.fill(area, palette.background);

    let mut content = area.shrink(1, 2, 1, 2);
    content.width = content.width.min(MAX_CONTENT_WIDTH);
    if content.is_empty() {
        return;
    }

    let mut y = content.y;
    buf.put_str(
        content.x,
        y,
        TITLE,
        content.right(),
        palette.foreground,
        TextStyle::new().bold(),
    );
    y += 1;
    buf.put_str(content.x, y, SUBTITLE, content.right(), palette.muted, TextStyle::new());
    y += 2;

    for field in FieldName::ALL {
        let props = app.field_props(field);
        let row = Rect::new(content.x, y, content.width, FieldProps::HEIGHT);
        render_field(&props, row, buf, palette);
        y += FieldProps::HEIGHT + FIELD_GAP;
    }

    if app.shows_language() {
        render_language(app, content, y, buf, palette);
        y += 3;
    }

    render_submit(app, content, y, buf, palette);
    y += 2;

    if let Some(message) = app.status().message() {
        let color = match app.status() {
            Status::Submitted => palette.success,
            _ => palette.error,
        };
        buf.put_str(content.x, y, &message, content.right(), color, TextStyle::new());
    }

    let help_y = area.bottom().saturating_sub(1);
    if help_y > y {
        buf.put_str(content.x, help_y, HELP, content.right(), palette.muted, TextStyle::new().dim());
    }
}

fn render_language(app: &SignupApp, content: Rect, y: u16, buf: &mut Buffer, palette: &Palette) {
    buf.put_str(
        content.x,
        y,
        "Language",
        content.right(),
        palette.foreground,
        TextStyle::new().bold(),
    );
    let row = Rect::new(content.x, y + 1, content.width, 1);
    buf.fill(row, palette.surface);
    let focused = app.focused() == Focus::Language;
    if focused {
        buf.put_str(row.x, row.y, "▌", row.right(), palette.primary, TextStyle::new());
    }
    let choice = format!("‹ {} ›", app.language().name);
    buf.put_str(row.x + 1, row.y, &choice, row.right(), palette.foreground, TextStyle::new());
}

fn render_submit(app: &SignupApp, content: Rect, y: u16, buf: &mut Buffer, palette: &Palette) {
    let width = SUBMIT_LABEL.len() as u16;
    let x = content.right().saturating_sub(width).max(content.x);
    let focused = app.focused() == Focus::Submit;
    let enabled = app.form().can_submit();

    let (fg, bg, style) = if focused {
        (palette.background, palette.primary, TextStyle::new().bold())
    } else if enabled {
        (palette.foreground, palette.surface, TextStyle::new().bold())
    } else {
        (palette.muted, palette.surface, TextStyle::new().dim())
    };
    buf.fill(Rect::new(x, y, width, 1), bg);
    buf.put_str(x, y, SUBMIT_LABEL, content.right(), fg, style);
}
