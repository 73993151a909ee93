//! Event loop: draw, wait for input, dispatch.

use std::io;

use log::{debug, info};
use signup_form::SubmitHandler;
use signup_form::render::Palette;

use crate::app::{Control, SignupApp};
use crate::config::Config;
use crate::event::{Event, convert_event};
use crate::terminal::Terminal;
use crate::view;

/// Run the form until the user quits.
pub fn run<H>(config: &Config, handler: &mut H) -> io::Result<()>
where
    H: SubmitHandler + ?Sized,
{
    let mut terminal = Terminal::new()?;
    let mut app = SignupApp::new(config);
    let palette = Palette::default();
    let (width, height) = terminal.size();
    info!("Terminal ready ({}x{})", width, height);

    loop {
        terminal.draw(|buf| view::render(&app, buf, &palette))?;

        for raw in terminal.poll(config.poll_interval())? {
            match convert_event(raw) {
                Some(Event::Key(key, modifiers)) => {
                    if app.handle_key(key, modifiers, handler) == Control::Quit {
                        info!("Quit requested");
                        return Ok(());
                    }
                }
                Some(Event::Resize { width, height }) => {
                    debug!("Resized to {}x{}", width, height);
                }
                None => {}
            }
        }
    }
}
