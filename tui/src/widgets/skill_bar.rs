//! SkillBar Widget
//!
//! Two rows: the skill name with its percentage, then a bar that fills to
//! the skill level. `progress` (0.0 to 1.0, already eased) scales the fill
//! so the bar can grow in.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use folio_core::Skill;

use crate::theme::Palette;

const FILLED: char = '█';
const EMPTY: char = '░';

/// A labelled proficiency bar
pub struct SkillBar<'a> {
    skill: &'a Skill,
    progress: f32,
    palette: Palette,
}

impl<'a> SkillBar<'a> {
    /// Bar for a skill, fully grown
    pub fn new(skill: &'a Skill, palette: Palette) -> Self {
        Self {
            skill,
            progress: 1.0,
            palette,
        }
    }

    /// Growth progress, clamped to 0.0..=1.0
    #[must_use]
    pub fn progress(mut self, progress: f32) -> Self {
        self.progress = progress.clamp(0.0, 1.0);
        self
    }

    /// Number of filled cells for a bar `width` cells wide
    pub fn filled_cells(&self, width: u16) -> u16 {
        let fill = f32::from(width) * self.skill.fraction() * self.progress;
        // fill is within 0..=width, so the cast cannot truncate meaningfully
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cells = fill.round() as u16;
        cells.min(width)
    }

    /// Name on the left, percentage on the right
    pub fn label_line(&self, width: u16) -> Line<'static> {
        let percent = format!("{}%", self.skill.level.min(100));
        let used = self.skill.name.width() + percent.width();
        let gap = usize::from(width).saturating_sub(used).max(1);

        Line::from(vec![
            Span::styled(self.skill.name.clone(), self.palette.text_style()),
            Span::raw(" ".repeat(gap)),
            Span::styled(percent, self.palette.muted_style()),
        ])
    }

    /// The bar itself
    pub fn bar_line(&self, width: u16) -> Line<'static> {
        let filled = self.filled_cells(width);
        let empty = width - filled;

        Line::from(vec![
            Span::styled(
                FILLED.to_string().repeat(usize::from(filled)),
                Style::default().fg(self.palette.accent),
            ),
            Span::styled(
                EMPTY.to_string().repeat(usize::from(empty)),
                Style::default().fg(self.palette.track),
            ),
        ])
    }

    /// Both rows, for embedding in a longer page
    pub fn lines(&self, width: u16) -> [Line<'static>; 2] {
        [self.label_line(width), self.bar_line(width)]
    }
}

impl Widget for SkillBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, line) in (0..area.height).zip(self.lines(area.width)) {
            buf.set_line(area.x, area.y + row, &line, area.width);
        }
    }
}
