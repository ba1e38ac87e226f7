//! TextBlock Widget
//!
//! A borderless, scrollable region of wrapped text. Used for the project
//! modal's long description.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::StatefulWidget;
use textwrap::wrap;

/// State for a scrollable text block
#[derive(Clone, Debug, Default)]
pub struct TextBlockState {
    /// Scroll offset (lines from top)
    pub scroll_offset: usize,
    /// Total wrapped lines at the last render
    pub total_lines: usize,
    /// Visible height at the last render
    pub viewport: usize,
}

impl TextBlockState {
    /// Scroll by delta (positive = down), clamped to the content
    pub fn scroll(&mut self, delta: isize) {
        let target = if delta.is_negative() {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta.unsigned_abs())
        };
        self.scroll_offset = target.min(self.max_scroll());
    }

    /// Back to the first line
    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }

    /// Whether there is more text below the viewport
    pub fn has_more(&self) -> bool {
        self.scroll_offset < self.max_scroll()
    }

    fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport)
    }
}

/// Wrap text to a width, keeping blank lines as paragraph breaks
pub fn wrap_lines(content: &str, width: usize) -> Vec<String> {
    content
        .lines()
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                wrap(line, width.max(1))
                    .into_iter()
                    .map(|cow| cow.into_owned())
                    .collect()
            }
        })
        .collect()
}

/// A borderless, scrollable text block
pub struct TextBlock<'a> {
    content: &'a str,
    style: Style,
}

impl<'a> TextBlock<'a> {
    /// Text block with the default style
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            style: Style::default(),
        }
    }

    /// Style for every line
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl StatefulWidget for TextBlock<'_> {
    type State = TextBlockState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let wrapped = wrap_lines(self.content, usize::from(area.width));

        state.total_lines = wrapped.len();
        state.viewport = usize::from(area.height);
        state.scroll_offset = state.scroll_offset.min(state.max_scroll());

        for (row, line) in (0..area.height).zip(wrapped.iter().skip(state.scroll_offset)) {
            buf.set_stringn(
                area.x,
                area.y + row,
                line,
                usize::from(area.width),
                self.style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_wraps_to_width() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        let mut state = TextBlockState::default();

        TextBlock::new("one two three four").render(area, &mut buf, &mut state);

        assert_eq!(state.total_lines, 2);
        assert_eq!(rows(&buf), vec!["one two", "three four", ""]);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let area = Rect::new(0, 0, 5, 2);
        let mut buf = Buffer::empty(area);
        let mut state = TextBlockState::default();
        TextBlock::new("a\nb\nc\nd").render(area, &mut buf, &mut state);

        assert!(state.has_more());
        state.scroll(10);
        assert_eq!(state.scroll_offset, 2);
        assert!(!state.has_more());
        state.scroll(-1);
        assert_eq!(state.scroll_offset, 1);

        let mut buf = Buffer::empty(area);
        TextBlock::new("a\nb\nc\nd").render(area, &mut buf, &mut state);
        assert_eq!(rows(&buf), vec!["b", "c"]);
    }

    #[test]
    fn test_blank_lines_preserved() {
        assert_eq!(wrap_lines("a\n\nb", 10), vec!["a", "", "b"]);
    }
}
