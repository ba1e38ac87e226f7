//! Toast Notifications
//!
//! Short-lived messages stacked in the bottom-right corner, newest at the
//! bottom. Each toast expires on its own after [`TOAST_TTL`].

use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::theme::{Palette, ERROR_RED, SUCCESS_GREEN};

/// How long a toast stays up
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Most toasts shown at once; older ones are dropped first
const MAX_TOASTS: usize = 3;

/// Toast flavor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Something worked
    Success,
    /// Something went wrong
    Error,
}

/// One notification
#[derive(Clone, Debug)]
pub struct Toast {
    /// Text shown
    pub message: String,
    /// Flavor
    pub kind: ToastKind,
    shown_at: Instant,
}

/// Active notifications
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    /// Empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast starting now
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.push_at(message, kind, Instant::now());
    }

    /// Show a toast that appeared at `shown_at`
    pub fn push_at(&mut self, message: impl Into<String>, kind: ToastKind, shown_at: Instant) {
        self.toasts.push(Toast {
            message: message.into(),
            kind,
            shown_at,
        });
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
    }

    /// Drop expired toasts; returns whether anything changed
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts
            .retain(|t| now.saturating_duration_since(t.shown_at) < TOAST_TTL);
        self.toasts.len() != before
    }

    /// Whether nothing is showing
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Active toasts, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Size needed to show every toast, capped at `max_width`
    pub fn size(&self, max_width: u16) -> (u16, u16) {
        let widest = self
            .toasts
            .iter()
            .map(|t| t.message.width() + 4)
            .max()
            .unwrap_or(0);
        let width = u16::try_from(widest).unwrap_or(u16::MAX).min(max_width);
        let height = u16::try_from(self.toasts.len()).unwrap_or(u16::MAX);
        (width, height)
    }

    /// Widget drawing the stack with a palette
    pub fn view(&self, palette: Palette) -> ToastView<'_> {
        ToastView {
            stack: self,
            palette,
        }
    }
}

/// Renders a [`ToastStack`], one toast per row
pub struct ToastView<'a> {
    stack: &'a ToastStack,
    palette: Palette,
}

impl Widget for ToastView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, toast) in (0..area.height).zip(self.stack.iter()) {
            let (marker, color) = match toast.kind {
                ToastKind::Success => ("✓", SUCCESS_GREEN),
                ToastKind::Error => ("✗", ERROR_RED),
            };
            let style = Style::default()
                .fg(color)
                .bg(self.palette.surface)
                .add_modifier(Modifier::BOLD);

            let y = area.y + row;
            buf.set_style(Rect::new(area.x, y, area.width, 1), style);
            buf.set_stringn(
                area.x,
                y,
                format!(" {marker} {}", toast.message),
                usize::from(area.width),
                style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire() {
        let start = Instant::now();
        let mut stack = ToastStack::new();
        stack.push_at("saved", ToastKind::Success, start);
        stack.push_at("later", ToastKind::Error, start + Duration::from_secs(2));

        assert!(!stack.prune(start + Duration::from_secs(1)));
        assert!(stack.prune(start + TOAST_TTL));
        assert_eq!(stack.iter().map(|t| t.message.as_str()).collect::<Vec<_>>(), ["later"]);
        assert!(stack.prune(start + Duration::from_secs(7)));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut stack = ToastStack::new();
        for i in 0..5 {
            stack.push(format!("toast {i}"), ToastKind::Success);
        }
        let messages: Vec<&str> = stack.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["toast 2", "toast 3", "toast 4"]);
    }

    #[test]
    fn test_size_fits_longest_message() {
        let mut stack = ToastStack::new();
        stack.push("hi", ToastKind::Success);
        stack.push("a longer one", ToastKind::Error);
        assert_eq!(stack.size(80), (16, 2));
        assert_eq!(stack.size(10), (10, 2));
    }
}
