//! Terminal styling helpers.
//!
//! Colors are only applied when stdout supports them.

use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::Display;

fn styled<T: Display>(text: T, style: Style) -> String {
    let text = text.to_string();
    text.if_supports_color(Stream::Stdout, |s| s.style(style)).to_string()
}

pub fn success<T: Display>(text: T) -> String {
    styled(text, Style::new().bold().green())
}

pub fn warning<T: Display>(text: T) -> String {
    styled(text, Style::new().yellow())
}

pub fn error<T: Display>(text: T) -> String {
    styled(text, Style::new().bold().red())
}

pub fn muted<T: Display>(text: T) -> String {
    styled(text, Style::new().dimmed())
}

pub fn code<T: Display>(text: T) -> String {
    styled(text, Style::new().magenta())
}

pub fn link<T: Display>(text: T) -> String {
    styled(text, Style::new().blue())
}

pub fn version<T: Display>(text: T) -> String {
    styled(text, Style::new().magenta())
}
