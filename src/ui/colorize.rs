//! Renders the `{color:NAME}text{color}` markup used in log messages.

use crossterm::style::{Color, Stylize};
use regex::Regex;

const MARKER_PATTERN: &str = r"(?i)\{color(?::(red|yellow|cyan|blue|magenta|green|white))?\}";

/// Render colour markup as terminal colours, or strip it when `plain` is set.
///
/// `{color:NAME}` starts a coloured run that lasts until the next marker; a
/// bare `{color}` resets. An opening marker without a closing one colours the
/// rest of the text.
pub fn colorize(text: &str, plain: bool) -> String {
    let Ok(marker) = Regex::new(MARKER_PATTERN) else {
        return text.to_string();
    };

    let mut rendered = String::with_capacity(text.len());
    let mut active: Option<Color> = None;
    let mut last = 0;

    for caps in marker.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_segment(&mut rendered, &text[last..whole.start()], active, plain);
        active = caps.get(1).and_then(|name| color_by_name(name.as_str()));
        last = whole.end();
    }
    push_segment(&mut rendered, &text[last..], active, plain);

    rendered
}

/// Remove all colour markup.
pub fn strip(text: &str) -> String {
    colorize(text, true)
}

fn push_segment(out: &mut String, segment: &str, color: Option<Color>, plain: bool) {
    if segment.is_empty() {
        return;
    }
    match color {
        Some(color) if !plain => out.push_str(&segment.with(color).to_string()),
        _ => out.push_str(segment),
    }
}

fn color_by_name(name: &str) -> Option<Color> {
    match name.to_ascii_lowercase().as_str() {
        "red" => Some(Color::DarkRed),
        "green" => Some(Color::DarkGreen),
        "yellow" => Some(Color::DarkYellow),
        "blue" => Some(Color::DarkBlue),
        "magenta" => Some(Color::DarkMagenta),
        "cyan" => Some(Color::DarkCyan),
        "white" => Some(Color::Grey),
        _ => None,
    }
}
