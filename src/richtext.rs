//! Inline markup for authored paragraph text.
//!
//! Paragraphs in the content model are authored as plain strings with a
//! markdown-inspired inline syntax (`**bold**`, `*italic*`).  This module
//! parses that syntax into [`Span`] values which map directly onto
//! [`genpdf::style::StyledString`] fragments.

use std::fmt;

use genpdf::style::{Style, StyledString};

/// A slice of text together with its inline style attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
    italic: bool,
}

impl Span {
    /// Creates a new span with the provided text and no styles applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text contained in this span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the span should be rendered in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns whether the span should be rendered in italic.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Marks the span as bold and returns it.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Marks the span as italic and returns it.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    fn to_style(&self) -> Style {
        let mut style = Style::new();
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        style
    }

    /// Converts the span into a [`StyledString`] fragment.
    ///
    /// The fragment carries only the inline attributes; size, color and the
    /// font family are inherited from the enclosing block style at render
    /// time.
    pub fn to_styled_string(&self) -> StyledString {
        StyledString::new(self.text.clone(), self.to_style())
    }
}

impl From<&Span> for StyledString {
    fn from(span: &Span) -> Self {
        span.to_styled_string()
    }
}

impl From<Span> for StyledString {
    fn from(span: Span) -> Self {
        span.to_styled_string()
    }
}

/// Parse errors produced by [`parse_markup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    index: usize,
    message: String,
}

impl ParseError {
    fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
        }
    }

    /// Byte index in the original input string where the error was detected.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Human-readable description of the parsing error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.message, self.index)
    }
}

impl std::error::Error for ParseError {}

#[derive(Clone, Copy, Debug, Default)]
struct StyleState {
    bold: bool,
    italic: bool,
}

impl StyleState {
    fn to_span(self, text: impl Into<String>) -> Span {
        Span {
            text: text.into(),
            bold: self.bold,
            italic: self.italic,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Bold,
    Italic,
}

impl Marker {
    fn closing_token(self) -> &'static str {
        match self {
            Marker::Bold => "**",
            Marker::Italic => "*",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Marker::Bold => "bold span",
            Marker::Italic => "italic span",
        }
    }
}

/// Parses inline markup into a list of [`Span`]s.
///
/// The supported constructs are `**bold**` and `*italic*`; markers may nest.
/// Malformed input (an unterminated marker) yields a [`ParseError`] with the
/// byte position of the failure.
pub fn parse_markup(input: &str) -> Result<Vec<Span>, ParseError> {
    let (spans, idx) = parse_inner(input, 0, StyleState::default(), None)?;
    debug_assert_eq!(idx, input.len());
    Ok(spans)
}

fn parse_inner(
    input: &str,
    mut index: usize,
    state: StyleState,
    closing_marker: Option<Marker>,
) -> Result<(Vec<Span>, usize), ParseError> {
    let mut spans = Vec::new();
    let mut buffer = String::new();

    while index < input.len() {
        if let Some(marker) = closing_marker {
            if input[index..].starts_with(marker.closing_token()) {
                flush_buffer(&mut buffer, &mut spans, state);
                index += marker.closing_token().len();
                return Ok((spans, index));
            }
        }

        if input[index..].starts_with("**") {
            flush_buffer(&mut buffer, &mut spans, state);
            index += 2;
            let mut nested_state = state;
            nested_state.bold = true;
            let (nested, new_index) = parse_inner(input, index, nested_state, Some(Marker::Bold))?;
            spans.extend(nested);
            index = new_index;
            continue;
        }

        if input[index..].starts_with('*') {
            flush_buffer(&mut buffer, &mut spans, state);
            index += 1;
            let mut nested_state = state;
            nested_state.italic = true;
            let (nested, new_index) =
                parse_inner(input, index, nested_state, Some(Marker::Italic))?;
            spans.extend(nested);
            index = new_index;
            continue;
        }

        let ch = input[index..]
            .chars()
            .next()
            .expect("character extraction succeeded");
        buffer.push(ch);
        index += ch.len_utf8();
    }

    if let Some(marker) = closing_marker {
        Err(ParseError::new(
            index,
            format!("unterminated {}", marker.description()),
        ))
    } else {
        flush_buffer(&mut buffer, &mut spans, state);
        Ok((spans, index))
    }
}

fn flush_buffer(buffer: &mut String, spans: &mut Vec<Span>, state: StyleState) {
    if buffer.is_empty() {
        return;
    }
    spans.push(state.to_span(std::mem::take(buffer)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_to_style_reflects_flags() {
        let span = Span::new("Start").bold();
        let styled = span.to_styled_string();
        assert_eq!(styled.s, "Start");
        assert!(styled.style.is_bold());
        assert!(!styled.style.is_italic());
    }

    #[test]
    fn parse_plain_text() {
        let spans = parse_markup("Откройте Telegram на телефоне.").expect("parse succeeds");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(), "Откройте Telegram на телефоне.");
        assert!(!spans[0].is_bold());
    }

    #[test]
    fn parse_bold_run() {
        let spans =
            parse_markup("В поиске введите **@userinfobot** и перейдите в чат с ботом.")
                .expect("parse succeeds");
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].text(), "В поиске введите ");
        assert!(spans[1].is_bold());
        assert_eq!(spans[1].text(), "@userinfobot");
        assert_eq!(spans[2].text(), " и перейдите в чат с ботом.");
        assert!(!spans[2].is_bold());
    }

    #[test]
    fn parse_nested_styles() {
        let spans = parse_markup("This is **very *cool***!").expect("parse succeeds");
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].text(), "This is ");
        assert!(!spans[0].is_bold());
        assert!(spans[1].is_bold());
        assert_eq!(spans[1].text(), "very ");
        assert!(spans[2].is_bold());
        assert!(spans[2].is_italic());
        assert_eq!(spans[2].text(), "cool");
        assert_eq!(spans[3].text(), "!");
        assert!(!spans[3].is_bold());
    }

    #[test]
    fn multiple_bold_runs_in_one_line() {
        let spans = parse_markup("Нажмите кнопку **Start** (или отправьте команду **/start**).")
            .expect("parse succeeds");
        let bold: Vec<_> = spans.iter().filter(|s| s.is_bold()).collect();
        assert_eq!(bold.len(), 2);
        assert_eq!(bold[0].text(), "Start");
        assert_eq!(bold[1].text(), "/start");
    }

    #[test]
    fn error_on_unterminated_bold() {
        let err = parse_markup("**oops").unwrap_err();
        assert!(err.message().contains("unterminated bold"));
    }
}
