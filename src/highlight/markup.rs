//! Rendering of highlighted text for display.

use super::segments::HighlightedText;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opening tag used for highlighted HTML runs.
pub const HTML_HIGHLIGHT_OPEN: &str = r#"<span style="background-color: green; font-weight: bold">"#;

/// Closing tag used for highlighted HTML runs.
pub const HTML_HIGHLIGHT_CLOSE: &str = "</span>";

/// Output flavour for rendered highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    /// HTML with escaped text and styled `<span>` highlights
    Html,
    /// Markdown with `**bold**` highlights
    #[default]
    Markdown,
    /// The text without any highlight markers
    Plain,
}

impl Markup {
    /// Render `text` in this flavour.
    pub fn render(&self, text: &HighlightedText) -> String {
        match self {
            Self::Html => render_html(text),
            Self::Markdown => render_markdown(text),
            Self::Plain => text.plain_text(),
        }
    }
}

fn render_html(text: &HighlightedText) -> String {
    let mut out = String::new();
    for segment in text.segments() {
        let escaped = escape_html(&segment.text);
        if segment.highlighted {
            out.push_str(HTML_HIGHLIGHT_OPEN);
            out.push_str(&escaped);
            out.push_str(HTML_HIGHLIGHT_CLOSE);
        } else {
            out.push_str(&escaped);
        }
    }
    out
}

/// Adjacent highlighted segments share one `**…**` pair, and whitespace at
/// the edges of a highlight stays outside the markers.
fn render_markdown(text: &HighlightedText) -> String {
    let mut out = String::new();
    let mut run = String::new();

    for segment in text.segments() {
        if segment.highlighted {
            run.push_str(&segment.text);
        } else {
            push_strong(&mut out, &run);
            run.clear();
            out.push_str(&escape_markdown(&segment.text));
        }
    }
    push_strong(&mut out, &run);

    out
}

fn push_strong(out: &mut String, run: &str) {
    let core = run.trim();
    if core.is_empty() {
        out.push_str(run);
        return;
    }

    let start = run.len() - run.trim_start().len();
    let end = start + core.len();

    out.push_str(&run[..start]);
    out.push_str("**");
    out.push_str(&escape_markdown(core));
    out.push_str("**");
    out.push_str(&run[end..]);
}

impl FromStr for Markup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "markdown" | "md" => Ok(Self::Markdown),
            "plain" | "text" | "none" => Ok(Self::Plain),
            other => Err(format!("Unknown markup: {}", other)),
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// Escape the characters that are significant in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Backslash-escape characters that would change Markdown emphasis.
fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
