//! Contact Form View
//!
//! Editing state for the "Get in Touch" form and the lines that draw it
//! inside the page. Validation and delivery live in `folio_core::contact`.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_core::ContactForm;

use super::text_block::wrap_lines;
use crate::theme::Palette;

/// Rows reserved for the message box
const MESSAGE_ROWS: usize = 4;

/// Focusable parts of the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    /// Sender name input
    Name,
    /// Sender email input
    Email,
    /// Message textarea
    Message,
    /// Submit button
    Send,
}

impl FormField {
    /// Next field, wrapping
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Send,
            Self::Send => Self::Name,
        }
    }

    /// Previous field, wrapping
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Send,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
            Self::Send => Self::Message,
        }
    }

    /// Placeholder shown in an empty input
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
            Self::Send => "Send Message",
        }
    }
}

/// The form plus which field has keyboard focus
#[derive(Clone, Debug, Default)]
pub struct ContactFormState {
    /// Field contents
    pub form: ContactForm,
    focus: Option<FormField>,
}

impl ContactFormState {
    /// Start editing at the name field
    pub fn begin_editing(&mut self) {
        self.focus = Some(FormField::Name);
    }

    /// Leave the form (contents are kept)
    pub fn stop_editing(&mut self) {
        self.focus = None;
    }

    /// Whether keys go to the form
    pub fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    /// Focused field
    pub fn focus(&self) -> Option<FormField> {
        self.focus
    }

    /// Move focus forward
    pub fn focus_next(&mut self) {
        self.focus = self.focus.map(FormField::next);
    }

    /// Move focus backward
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.map(FormField::prev);
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus? {
            FormField::Name => Some(&mut self.form.name),
            FormField::Email => Some(&mut self.form.email),
            FormField::Message => Some(&mut self.form.message),
            FormField::Send => None,
        }
    }

    /// Type a character into the focused field
    pub fn insert(&mut self, c: char) {
        if let Some(text) = self.focused_text() {
            text.push(c);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    /// Clear the fields after a successful send and leave the form
    pub fn reset(&mut self) {
        self.form.clear();
        self.focus = None;
    }
}

/// Draws the form as page lines
pub struct ContactFormView<'a> {
    state: &'a ContactFormState,
    palette: Palette,
}

impl<'a> ContactFormView<'a> {
    /// View over a form state
    pub fn new(state: &'a ContactFormState, palette: Palette) -> Self {
        Self { state, palette }
    }

    fn field_style(&self, field: FormField) -> Style {
        if self.state.focus == Some(field) {
            self.palette.accent_style()
        } else {
            self.palette.muted_style()
        }
    }

    /// One bracketed input row, e.g. `[ Ana_        ]`
    fn input_row(&self, field: FormField, value: &str, width: usize) -> Line<'static> {
        let inner = width.saturating_sub(4).max(1);
        let focused = self.state.focus == Some(field);

        let (text, text_style) = if value.is_empty() && !focused {
            (field.placeholder().to_string(), self.palette.muted_style())
        } else if focused {
            (format!("{value}_"), self.palette.text_style())
        } else {
            (value.to_string(), self.palette.text_style())
        };

        // keep the tail visible while typing past the edge
        let shown = tail_fitting(&text, inner);
        let pad = inner.saturating_sub(shown.width());

        let border = self.field_style(field);
        Line::from(vec![
            Span::styled("[ ", border),
            Span::styled(shown.to_string(), text_style),
            Span::raw(" ".repeat(pad)),
            Span::styled(" ]", border),
        ])
    }

    fn message_rows(&self, width: usize) -> Vec<Line<'static>> {
        let inner = width.saturating_sub(4).max(1);
        let focused = self.state.focus == Some(FormField::Message);
        let message = &self.state.form.message;

        let (mut rows, text_style) = if message.is_empty() && !focused {
            (
                vec![FormField::Message.placeholder().to_string()],
                self.palette.muted_style(),
            )
        } else {
            let body = if focused {
                format!("{message}_")
            } else {
                message.clone()
            };
            (wrap_lines(&body, inner), self.palette.text_style())
        };

        // newest rows stay visible once the message outgrows the box
        if rows.len() > MESSAGE_ROWS {
            rows.drain(..rows.len() - MESSAGE_ROWS);
        }
        rows.resize(MESSAGE_ROWS, String::new());

        let border = self.field_style(FormField::Message);
        rows.into_iter()
            .map(|row| {
                let pad = inner.saturating_sub(row.width());
                Line::from(vec![
                    Span::styled("│ ", border),
                    Span::styled(row, text_style),
                    Span::raw(" ".repeat(pad)),
                    Span::styled(" │", border),
                ])
            })
            .collect()
    }

    fn send_button(&self) -> Line<'static> {
        let style = if self.state.focus == Some(FormField::Send) {
            Style::default()
                .fg(self.palette.background)
                .bg(self.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            self.palette.accent_style().add_modifier(Modifier::BOLD)
        };
        Line::from(Span::styled(
            format!(" {} ", FormField::Send.placeholder()),
            style,
        ))
    }

    /// Every row of the form for a column `width` cells wide
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width);
        let form = &self.state.form;

        let mut lines = vec![
            self.input_row(FormField::Name, &form.name, width),
            self.input_row(FormField::Email, &form.email, width),
        ];
        lines.extend(self.message_rows(width));
        lines.push(self.send_button());

        let hint = if self.state.is_editing() {
            "Tab next field · Enter on Send or Ctrl-S submits · Esc leave form"
        } else {
            "Press c to write a message"
        };
        lines.push(Line::from(Span::styled(hint, self.palette.muted_style())));
        lines
    }
}

/// Longest suffix of `text` that fits in `width` cells
fn tail_fitting(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        used += unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used > width {
            break;
        }
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Theme;
    use pretty_assertions::assert_eq;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn view_lines(state: &ContactFormState, width: u16) -> Vec<String> {
        ContactFormView::new(state, Palette::for_theme(Theme::Dark))
            .lines(width)
            .iter()
            .map(text)
            .collect()
    }

    #[test]
    fn test_focus_cycles() {
        let mut state = ContactFormState::default();
        state.focus_next();
        assert_eq!(state.focus(), None);

        state.begin_editing();
        state.focus_next();
        state.focus_next();
        state.focus_next();
        assert_eq!(state.focus(), Some(FormField::Send));
        state.focus_next();
        assert_eq!(state.focus(), Some(FormField::Name));
        state.focus_prev();
        assert_eq!(state.focus(), Some(FormField::Send));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut state = ContactFormState::default();
        state.begin_editing();
        state.insert('A');
        state.insert('n');
        state.focus_next();
        state.insert('x');
        state.backspace();
        state.insert('a');
        state.focus_next();
        state.focus_next();
        state.insert('!');

        assert_eq!(state.form.name, "An");
        assert_eq!(state.form.email, "a");
        assert_eq!(state.form.message, "");
    }

    #[test]
    fn test_placeholders_when_idle() {
        let lines = view_lines(&ContactFormState::default(), 24);
        assert_eq!(lines[0], "[ Your Name            ]");
        assert_eq!(lines[1], "[ Your Email           ]");
        assert!(lines[2].contains("Your Message"));
        assert_eq!(lines[2 + MESSAGE_ROWS], " Send Message ");
        assert_eq!(lines.last().unwrap(), "Press c to write a message");
    }

    #[test]
    fn test_focused_field_shows_cursor() {
        let mut state = ContactFormState::default();
        state.begin_editing();
        state.insert('B');
        state.insert('o');

        let lines = view_lines(&state, 12);
        assert_eq!(lines[0], "[ Bo_      ]");
    }

    #[test]
    fn test_long_input_keeps_tail_visible() {
        assert_eq!(tail_fitting("abcdefgh", 3), "fgh");
        assert_eq!(tail_fitting("ab", 3), "ab");
    }

    #[test]
    fn test_reset_clears_and_leaves_form() {
        let mut state = ContactFormState::default();
        state.begin_editing();
        state.insert('x');
        state.reset();
        assert!(!state.is_editing());
        assert_eq!(state.form, ContactForm::default());
    }
}
