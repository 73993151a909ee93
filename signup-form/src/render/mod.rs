//! Presentation: the field renderer and the cell buffer it draws into.
//!
//! Rendering is a pure function of [`FieldProps`]; identical props always
//! produce identical cells.

mod buffer;
mod event;
mod field;
mod rect;
mod style;

pub use buffer::{Buffer, Cell, char_width, display_width};
pub use event::{Key, Modifiers};
pub use field::{
    DEFAULT_TWITTER_PREFIX, ERROR_ICON, FieldEvent, FieldKind, FieldProps, MASK_CHAR,
    render_field,
};
pub use rect::Rect;
pub use style::{Palette, Rgb, TextStyle};
