//! Project Detail Modal
//!
//! Bordered panel over the page with the project's long description (a
//! scrollable [`TextBlock`]), its technology badges, the external link, and
//! the close hint.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, StatefulWidget, Widget};

use folio_core::Project;

use super::text_block::{TextBlock, TextBlockState};
use crate::theme::Palette;

const MAX_WIDTH: u16 = 72;
const MAX_HEIGHT: u16 = 20;

/// Centered rectangle for the modal inside `area`
pub fn modal_area(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(MAX_WIDTH);
    let height = area.height.saturating_sub(2).min(MAX_HEIGHT);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Detail view for one project
pub struct ProjectModal<'a> {
    project: &'a Project,
    palette: Palette,
}

impl<'a> ProjectModal<'a> {
    /// Modal for a project
    pub fn new(project: &'a Project, palette: Palette) -> Self {
        Self { project, palette }
    }

    fn badges(&self) -> Line<'static> {
        let badge = Style::default()
            .fg(self.palette.background)
            .bg(self.palette.accent);

        let mut spans = Vec::with_capacity(self.project.technologies.len() * 2);
        for tech in &self.project.technologies {
            spans.push(Span::styled(format!(" {tech} "), badge));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl StatefulWidget for ProjectModal<'_> {
    type State = TextBlockState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        Clear.render(area, buf);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.accent_style())
            .title(Span::styled(
                format!(" {} ", self.project.title),
                self.palette.heading_style(),
            ))
            .style(self.palette.surface_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let [body, _, badges, link, footer] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .horizontal_margin(1)
        .areas(inner);

        TextBlock::new(&self.project.full_description)
            .style(self.palette.text_style().bg(self.palette.surface))
            .render(body, buf, state);

        buf.set_line(badges.x, badges.y, &self.badges(), badges.width);

        let link_line = Line::from(vec![
            Span::styled("View Project: ", self.palette.muted_style()),
            Span::styled(
                self.project.link.clone(),
                self.palette
                    .accent_style()
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]);
        buf.set_line(link.x, link.y, &link_line, link.width);

        let hint = if state.has_more() {
            "[↑/↓] Scroll  [Esc] Close"
        } else {
            "[Esc] Close"
        };
        buf.set_stringn(
            footer.x,
            footer.y,
            hint,
            usize::from(footer.width),
            self.palette.muted_style(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Portfolio, Theme};

    fn screen(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_modal_area_is_centered() {
        let area = modal_area(Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(14, 10, 72, 20));

        let small = modal_area(Rect::new(0, 0, 30, 10));
        assert_eq!(small, Rect::new(2, 1, 26, 8));
    }

    #[test]
    fn test_renders_project_details() {
        let portfolio = Portfolio::default();
        let project = &portfolio.projects[1];
        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);
        let mut state = TextBlockState::default();

        ProjectModal::new(project, Palette::for_theme(Theme::Dark)).render(area, &mut buf, &mut state);

        let text = screen(&buf);
        assert!(text.contains("Task Management App"));
        assert!(text.contains("React Native"));
        assert!(text.contains("View Project: https://example.com/taskapp"));
        assert!(text.contains("[Esc] Close"));
        assert!(state.total_lines > 0);
    }
}
