//! Page Layout
//!
//! Builds the scrollable body of the portfolio as styled lines and records
//! where each section starts, so navigation can jump to it and the status
//! line can name the section in view.
//!
//! The layout is rebuilt every frame from current state: the typed hero
//! text, skill bar growth, project focus, and form contents all change it.

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_core::{PageState, Portfolio, Section, SkillTab};

use crate::theme::Palette;
use crate::widgets::text_block::wrap_lines;
use crate::widgets::{ContactFormState, ContactFormView, SkillBar};

/// Left margin of the page body
const INDENT: usize = 2;

/// Widest a skill bar grows on large terminals
const MAX_BAR_WIDTH: u16 = 60;

/// Contact section blurb
const CONTACT_BLURB: &str = "I'm always open to new opportunities and collaborations. \
                             Whether you have a project in mind or just want to connect, \
                             feel free to reach out!";

/// Everything the page body depends on
pub struct PageContext<'a> {
    /// Content
    pub portfolio: &'a Portfolio,
    /// Tab, focus, and theme
    pub page: &'a PageState,
    /// Current typed hero text
    pub hero_text: &'a str,
    /// Eased skill bar growth, 0.0 to 1.0
    pub skill_progress: f32,
    /// Contact form contents and focus
    pub contact: &'a ContactFormState,
    /// Colors
    pub palette: Palette,
}

/// Built page body
#[derive(Debug, Default)]
pub struct PageLayout {
    lines: Vec<Line<'static>>,
    anchors: Vec<(Section, usize)>,
    project_rows: Vec<Range<usize>>,
}

impl PageLayout {
    /// Lay out the page for a body `width` cells wide
    pub fn build(ctx: &PageContext<'_>, width: u16) -> Self {
        let mut builder = Builder {
            layout: Self::default(),
            palette: ctx.palette,
            text_width: usize::from(width).saturating_sub(INDENT * 2).max(1),
        };

        builder.about(ctx);
        builder.skills(ctx);
        builder.projects(ctx);
        builder.experience(ctx);
        builder.contact(ctx);

        builder.layout
    }

    /// All lines, top to bottom
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Total height in lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing was laid out
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// First line of a section
    pub fn anchor(&self, section: Section) -> usize {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map_or(0, |(_, line)| *line)
    }

    /// Section containing a line
    pub fn section_at(&self, line: usize) -> Section {
        self.anchors
            .iter()
            .rev()
            .find(|(_, start)| *start <= line)
            .map_or(Section::About, |(s, _)| *s)
    }

    /// Project card covering a line, if any
    pub fn project_at(&self, line: usize) -> Option<usize> {
        self.project_rows.iter().position(|rows| rows.contains(&line))
    }

    /// Largest useful scroll offset for a viewport `height` lines tall
    pub fn max_scroll(&self, height: u16) -> usize {
        self.lines.len().saturating_sub(usize::from(height))
    }

    /// Draw the visible slice starting at `offset`
    pub fn render(&self, area: Rect, buf: &mut Buffer, offset: usize) {
        for (row, line) in (0..area.height).zip(self.lines.iter().skip(offset)) {
            buf.set_line(area.x, area.y + row, line, area.width);
        }
    }
}

struct Builder {
    layout: PageLayout,
    palette: Palette,
    text_width: usize,
}

impl Builder {
    fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut all = Vec::with_capacity(spans.len() + 1);
        all.push(Span::raw(" ".repeat(INDENT)));
        all.extend(spans);
        self.layout.lines.push(Line::from(all));
    }

    fn blank(&mut self) {
        self.layout.lines.push(Line::default());
    }

    fn paragraph(&mut self, text: &str, style: Style, indent: usize) {
        let width = self.text_width.saturating_sub(indent).max(1);
        for row in wrap_lines(text, width) {
            self.push(vec![Span::raw(" ".repeat(indent)), Span::styled(row, style)]);
        }
    }

    fn heading(&mut self, section: Section) {
        self.layout.anchors.push((section, self.layout.lines.len()));
        self.blank();
        self.push(vec![Span::styled(
            section.title().to_string(),
            self.palette.heading_style().add_modifier(Modifier::UNDERLINED),
        )]);
        self.blank();
    }

    fn about(&mut self, ctx: &PageContext<'_>) {
        let hero = &ctx.portfolio.hero;
        self.layout.anchors.push((Section::About, 0));

        self.blank();
        self.push(vec![Span::styled(
            format!("Hi, I'm {}", hero.name),
            self.palette.heading_style(),
        )]);
        self.push(vec![
            Span::styled(format!("{} ", hero.greeting), self.palette.text_style()),
            Span::styled(
                ctx.hero_text.to_string(),
                self.palette.accent_style().add_modifier(Modifier::BOLD),
            ),
        ]);
        self.blank();
        self.paragraph(&hero.bio, self.palette.muted_style(), 0);
        self.blank();
        self.push(vec![
            Span::styled("[5] Contact Me", self.palette.accent_style()),
            Span::raw("   "),
            Span::styled("[3] View Projects", self.palette.muted_style()),
        ]);
    }

    fn skills(&mut self, ctx: &PageContext<'_>) {
        self.heading(Section::Skills);

        let active = ctx.page.skill_tab();
        let tab = |which: SkillTab| {
            let label = format!(" {} ", which.label());
            if which == active {
                Span::styled(
                    label,
                    Style::default()
                        .fg(self.palette.background)
                        .bg(self.palette.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, self.palette.muted_style())
            }
        };
        let tabs = vec![
            tab(SkillTab::Technical),
            Span::raw(" "),
            tab(SkillTab::Soft),
            Span::styled("   (Tab to switch)", self.palette.muted_style()),
        ];
        self.push(tabs);
        self.blank();

        let bar_width = u16::try_from(self.text_width)
            .unwrap_or(MAX_BAR_WIDTH)
            .min(MAX_BAR_WIDTH);
        for skill in ctx.portfolio.skills.for_tab(active) {
            let bar = SkillBar::new(skill, self.palette).progress(ctx.skill_progress);
            let [label, fill] = bar.lines(bar_width);
            self.push(label.spans);
            self.push(fill.spans);
        }
    }

    fn projects(&mut self, ctx: &PageContext<'_>) {
        self.heading(Section::Projects);

        let focused = ctx.page.focused_project();
        for (index, project) in ctx.portfolio.projects.iter().enumerate() {
            let start = self.layout.lines.len();
            let is_focused = index == focused;

            let (marker, title_style) = if is_focused {
                ("▶ ", self.palette.accent_style().add_modifier(Modifier::BOLD))
            } else {
                ("  ", self.palette.heading_style())
            };
            self.push(vec![
                Span::styled(marker, self.palette.accent_style()),
                Span::styled(project.title.clone(), title_style),
            ]);
            self.paragraph(&project.description, self.palette.muted_style(), 2);

            let badges = project.technologies.join(" · ");
            self.paragraph(&badges, self.palette.accent_style(), 2);

            self.layout.project_rows.push(start..self.layout.lines.len());
            self.blank();
        }

        self.push(vec![Span::styled(
            "←/→ select · Enter view details",
            self.palette.muted_style(),
        )]);
    }

    fn experience(&mut self, ctx: &PageContext<'_>) {
        self.heading(Section::Experience);

        let year_width = ctx
            .portfolio
            .experience
            .iter()
            .map(|e| e.year.chars().count())
            .max()
            .unwrap_or(4);
        let rail = self.palette.accent_style();

        for entry in &ctx.portfolio.experience {
            self.push(vec![
                Span::styled(
                    format!("{:>year_width$} ", entry.year),
                    self.palette.accent_style().add_modifier(Modifier::BOLD),
                ),
                Span::styled("┃ ", rail),
                Span::styled(entry.title.clone(), self.palette.heading_style()),
            ]);

            let pad = " ".repeat(year_width + 1);
            let width = self.text_width.saturating_sub(year_width + 3).max(1);
            for row in wrap_lines(&entry.description, width) {
                self.push(vec![
                    Span::raw(pad.clone()),
                    Span::styled("┃ ", rail),
                    Span::styled(row, self.palette.muted_style()),
                ]);
            }
            self.push(vec![Span::raw(pad), Span::styled("┃", rail)]);
        }
    }

    fn contact(&mut self, ctx: &PageContext<'_>) {
        self.heading(Section::Contact);

        self.paragraph(CONTACT_BLURB, self.palette.muted_style(), 0);
        self.blank();

        let label_width = ctx
            .portfolio
            .links
            .iter()
            .map(|l| l.label.chars().count())
            .max()
            .unwrap_or(0);
        for link in &ctx.portfolio.links {
            self.push(vec![
                Span::styled(
                    format!("{:<label_width$}  ", link.label),
                    self.palette.text_style(),
                ),
                Span::styled(
                    link.url.clone(),
                    self.palette.accent_style().add_modifier(Modifier::UNDERLINED),
                ),
            ]);
        }
        self.blank();

        let form_width = u16::try_from(self.text_width).unwrap_or(u16::MAX).min(64);
        for line in ContactFormView::new(ctx.contact, self.palette).lines(form_width) {
            self.push(line.spans);
        }

        self.blank();
        self.push(vec![Span::styled(
            format!("Built by {}.", ctx.portfolio.hero.name),
            self.palette.muted_style(),
        )]);
        self.blank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Theme;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn build(page: &PageState, hero_text: &str) -> PageLayout {
        let portfolio = Portfolio::default();
        let contact = ContactFormState::default();
        let ctx = PageContext {
            portfolio: &portfolio,
            page,
            hero_text,
            skill_progress: 1.0,
            contact: &contact,
            palette: Palette::for_theme(Theme::Dark),
        };
        PageLayout::build(&ctx, 80)
    }

    fn find(layout: &PageLayout, needle: &str) -> Option<usize> {
        layout.lines().iter().position(|l| text(l).contains(needle))
    }

    #[test]
    fn test_sections_in_order() {
        let layout = build(&PageState::default(), "");
        let anchors: Vec<usize> = Section::ALL.iter().map(|s| layout.anchor(*s)).collect();

        assert_eq!(anchors[0], 0);
        assert!(anchors.windows(2).all(|w| w[0] < w[1]), "{anchors:?}");
    }

    #[test]
    fn test_heading_follows_anchor() {
        let layout = build(&PageState::default(), "");
        for section in &Section::ALL[1..] {
            let heading = find(&layout, section.title()).unwrap();
            assert!(heading > layout.anchor(*section));
            assert_eq!(layout.section_at(heading), *section);
        }
    }

    #[test]
    fn test_hero_shows_typed_text() {
        let layout = build(&PageState::default(), "Problem So");
        assert!(find(&layout, "I'm a Problem So").is_some());
        assert!(find(&layout, "Hi, I'm Nishant").is_some());
    }

    #[test]
    fn test_skill_tab_switches_bars() {
        let mut page = PageState::default();
        let technical = build(&page, "");
        assert!(find(&technical, "JavaScript/TypeScript").is_some());
        assert!(find(&technical, "Mentoring").is_none());

        page.toggle_skill_tab();
        let soft = build(&page, "");
        assert!(find(&soft, "Mentoring").is_some());
    }

    #[test]
    fn test_project_rows_map_to_cards() {
        let mut page = PageState::default();
        page.focus_next_project(4);
        let layout = build(&page, "");

        let title = find(&layout, "Task Management App").unwrap();
        assert_eq!(layout.project_at(title), Some(1));
        assert!(text(&layout.lines()[title]).contains('▶'));
        assert_eq!(layout.project_at(0), None);
    }

    #[test]
    fn test_render_slices_from_offset() {
        let layout = build(&PageState::default(), "");
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        layout.render(area, &mut buf, 1);

        let first: String = (0..80)
            .map(|x| buf.cell((x, 0)).map_or(" ", |c| c.symbol()))
            .collect();
        assert!(first.contains("Hi, I'm Nishant"));
    }

    #[test]
    fn test_max_scroll() {
        let layout = build(&PageState::default(), "");
        assert_eq!(layout.max_scroll(10), layout.len() - 10);
        assert_eq!(layout.max_scroll(u16::MAX), 0);
    }
}
