//! Main Application
//!
//! The App struct manages the TUI lifecycle:
//! - Event loop (keyboard, mouse, resize)
//! - Hero ticker wake-ups and a frame tick for eased animations
//! - Page state from `folio_core` driving what gets drawn
//! - Layered rendering through the compositor
//!
//! # Input Routing
//!
//! Keys go to the first of these that is active: the project modal, the
//! navigation menu, the contact form while editing, then the page itself.
//! `Esc` backs out of them in the same order.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, StatefulWidget, Widget};
use ratatui::Terminal;

use folio_core::{
    ContactOutcome, ContactSink, Easing, FolioConfig, PageState, Portfolio, Section,
};

use crate::compositor::{Compositor, LayerId};
use crate::hero::HeroTicker;
use crate::page::{PageContext, PageLayout};
use crate::theme::Palette;
use crate::widgets::{
    modal_area, ContactFormState, FormField, ProjectModal, TextBlockState, ToastKind, ToastStack,
};

/// Frame tick for eased animations (~30 FPS)
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Skill bars grow to their level over this long
const SKILL_FILL_DURATION: Duration = Duration::from_secs(1);

/// Menu panel slide-in time
const MENU_SLIDE_DURATION: Duration = Duration::from_millis(400);

/// Menu panel width when fully open
const MENU_WIDTH: u16 = 30;

/// Lines moved per mouse wheel notch
const WHEEL_STEP: isize = 3;

/// Scroll-to-top badge text
const SCROLL_TOP_BADGE: &str = " ↑ Top [g] ";

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// Page content
    portfolio: Portfolio,
    /// Scroll, menu, modal, tab, and theme
    page: PageState,
    /// Contact form contents and focus
    contact: ContactFormState,
    /// Where submitted messages go
    sink: Arc<dyn ContactSink>,

    // === Animation ===
    /// Typed hero line
    hero: HeroTicker,
    /// When the skill bars started growing (None until first seen)
    skills_revealed_at: Option<Instant>,
    /// When the menu opened (for the slide-in)
    menu_opened_at: Option<Instant>,

    // === UI Components ===
    /// The layered compositor
    compositor: Compositor,
    /// Layer assignments
    layers: AppLayers,
    /// Page body from the last frame
    layout: PageLayout,
    /// Notifications
    toasts: ToastStack,
    /// Scroll state of the modal description
    modal_text: TextBlockState,

    /// Terminal size
    size: (u16, u16),
}

/// Layer IDs for UI regions
struct AppLayers {
    page: LayerId,
    header: LayerId,
    status: LayerId,
    scroll_top: LayerId,
    menu: LayerId,
    toast: LayerId,
    modal: LayerId,
}

impl App {
    /// Create an App sized to the current terminal
    ///
    /// # Errors
    ///
    /// Fails when the terminal size cannot be read, the configured phrases
    /// are invalid, or there is no tokio runtime for the hero animation.
    pub fn new(config: &FolioConfig, sink: Arc<dyn ContactSink>) -> anyhow::Result<Self> {
        let (width, height) = crossterm::terminal::size().context("reading terminal size")?;
        Self::with_area(config, sink, Rect::new(0, 0, width, height))
    }

    /// Create an App for a fixed area (headless rendering and tests)
    ///
    /// # Errors
    ///
    /// Fails when the configured phrases are invalid or there is no tokio
    /// runtime for the hero animation.
    pub fn with_area(
        config: &FolioConfig,
        sink: Arc<dyn ContactSink>,
        area: Rect,
    ) -> anyhow::Result<Self> {
        let phrases = config.phrase_list()?;
        let hero =
            HeroTicker::start(phrases, config.cadence).context("starting hero animation")?;

        let mut compositor = Compositor::new(area);
        let layers = AppLayers {
            page: compositor.create_layer(Rect::default(), 0),
            header: compositor.create_layer(Rect::default(), 10),
            status: compositor.create_layer(Rect::default(), 10),
            scroll_top: compositor.create_layer(Rect::default(), 40),
            menu: compositor.create_layer(Rect::default(), 60),
            toast: compositor.create_layer(Rect::default(), 80),
            modal: compositor.create_layer(Rect::default(), 100),
        };
        compositor.set_opaque(layers.page, true);
        compositor.set_opaque(layers.header, true);
        compositor.set_opaque(layers.status, true);
        compositor.set_opaque(layers.menu, true);
        compositor.set_opaque(layers.modal, true);

        let mut app = Self {
            running: true,
            portfolio: config.portfolio.clone(),
            page: PageState::new(config.scroll_top_threshold),
            contact: ContactFormState::default(),
            sink,
            hero,
            skills_revealed_at: None,
            menu_opened_at: None,
            compositor,
            layers,
            layout: PageLayout::default(),
            toasts: ToastStack::new(),
            modal_text: TextBlockState::default(),
            size: (area.width, area.height),
        };
        app.place_layers();
        app.rebuild_layout(Instant::now());

        tracing::debug!(
            width = area.width,
            height = area.height,
            projects = app.portfolio.projects.len(),
            "App initialized"
        );
        Ok(app)
    }

    /// Main event loop
    ///
    /// # Errors
    ///
    /// Returns terminal I/O errors from drawing.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();
        let mut frame_tick = tokio::time::interval(FRAME_INTERVAL);
        frame_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut hero_alive = true;

        // Render initial frame immediately so user sees UI
        self.render(terminal)?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event).await,
                        Some(Err(e)) => {
                            tracing::warn!(error = %e, "Terminal event error");
                        }
                        None => self.running = false,
                    }
                }

                // New typed hero text
                alive = self.hero.changed(), if hero_alive => {
                    if !alive {
                        tracing::debug!("Hero animation ended");
                        hero_alive = false;
                    }
                }

                // Eased animations and toast expiry
                _ = frame_tick.tick() => {}
            }

            self.render(terminal)?;
        }

        self.hero.stop();
        Ok(())
    }

    /// Is the app still running?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Page state (scroll, menu, modal, tab, theme)
    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Contact form state
    pub fn contact(&self) -> &ContactFormState {
        &self.contact
    }

    /// Active notifications
    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    /// Page body from the last frame
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Dispatch one terminal event
    pub async fn handle_event(&mut self, event: Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key).await,
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(w, h) => self.handle_resize(w, h),
            _ => {}
        }
    }

    /// Handle keyboard input
    pub async fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.page.is_modal_open() {
            self.handle_modal_key(key);
        } else if self.page.is_menu_open() {
            self.handle_menu_key(key);
        } else if self.contact.is_editing() {
            self.handle_form_key(key, ctrl).await;
        } else {
            self.handle_page_key(key);
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Char('s') if ctrl => self.submit_contact().await,
            KeyCode::Esc => self.contact.stop_editing(),
            KeyCode::Tab | KeyCode::Down => self.contact.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.contact.focus_prev(),
            KeyCode::Enter => match self.contact.focus() {
                Some(FormField::Send) => self.submit_contact().await,
                Some(FormField::Message) => self.contact.insert('\n'),
                _ => self.contact.focus_next(),
            },
            KeyCode::Backspace => self.contact.backspace(),
            KeyCode::Char(c) if !ctrl => self.contact.insert(c),
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let page_step = self.modal_page_step();
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.close_project(),
            KeyCode::Char('q') => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.modal_text.scroll(-1),
            KeyCode::Down | KeyCode::Char('j') => self.modal_text.scroll(1),
            KeyCode::PageUp => self.modal_text.scroll(-page_step),
            KeyCode::PageDown => self.modal_text.scroll(page_step),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.toggle_menu(),
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('t') => self.page.toggle_theme(),
            KeyCode::Char(c) => {
                if let Some(section) = Section::from_hotkey(c) {
                    self.navigate(section);
                }
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        let max = self.max_scroll();
        let page_step = self.page_area().height.max(1) as isize;

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('m') => self.toggle_menu(),
            KeyCode::Char('t') => self.page.toggle_theme(),
            KeyCode::Char('c') => {
                self.navigate(Section::Contact);
                self.contact.begin_editing();
            }
            KeyCode::Char('g') | KeyCode::Home => self.page.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.page.scroll_to(max, max),
            KeyCode::Up | KeyCode::Char('k') => self.page.scroll_by(-1, max),
            KeyCode::Down | KeyCode::Char('j') => self.page.scroll_by(1, max),
            KeyCode::PageUp => self.page.scroll_by(-page_step, max),
            KeyCode::PageDown | KeyCode::Char(' ') => self.page.scroll_by(page_step, max),
            KeyCode::Tab => {
                self.page.toggle_skill_tab();
                // the new tab's bars grow in again
                self.skills_revealed_at = Some(Instant::now());
            }
            KeyCode::Left => self.page.focus_prev_project(self.portfolio.projects.len()),
            KeyCode::Right => self.page.focus_next_project(self.portfolio.projects.len()),
            KeyCode::Enter => self.open_project(self.page.focused_project()),
            KeyCode::Char(c) => {
                if let Some(section) = Section::from_hotkey(c) {
                    self.navigate(section);
                }
            }
            _ => {}
        }
    }

    /// Handle mouse input
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let max = self.max_scroll();
        match mouse.kind {
            MouseEventKind::ScrollUp if self.page.is_modal_open() => {
                self.modal_text.scroll(-WHEEL_STEP);
            }
            MouseEventKind::ScrollDown if self.page.is_modal_open() => {
                self.modal_text.scroll(WHEEL_STEP);
            }
            MouseEventKind::ScrollUp => self.page.scroll_by(-WHEEL_STEP, max),
            MouseEventKind::ScrollDown => self.page.scroll_by(WHEEL_STEP, max),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let hit = self.compositor.layer_at(column, row);

        if self.page.is_modal_open() {
            // clicking outside the dialog dismisses it
            if hit != Some(self.layers.modal) {
                self.close_project();
            }
            return;
        }

        if hit == Some(self.layers.scroll_top) {
            self.page.scroll_to_top();
        } else if hit == Some(self.layers.menu) {
            let Some(menu) = self.compositor.layer(self.layers.menu).map(|l| l.bounds) else {
                return;
            };
            // the top row is padding above the first item
            if row <= menu.y {
                return;
            }
            let item = usize::from(row - menu.y - 1);
            if let Some(section) = Section::ALL.get(item) {
                self.navigate(*section);
            }
        } else if hit == Some(self.layers.page) {
            let line = self.page.scroll_offset() + usize::from(row - self.page_area().y);
            if let Some(index) = self.layout.project_at(line) {
                self.open_project(index);
            }
        }
    }

    /// Handle terminal resize
    fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.compositor.resize(Rect::new(0, 0, width, height));
        self.place_layers();
        self.rebuild_layout(Instant::now());
        tracing::debug!(width, height, "Terminal resized");
    }

    // ========================================================================
    // Actions
    // ========================================================================

    fn quit(&mut self) {
        self.running = false;
    }

    fn toggle_menu(&mut self) {
        self.page.toggle_menu();
        self.menu_opened_at = self.page.is_menu_open().then(Instant::now);
    }

    fn navigate(&mut self, section: Section) {
        let anchor = self.layout.anchor(section);
        self.page.navigate(anchor, self.max_scroll());
        self.menu_opened_at = None;
        tracing::debug!(section = section.label(), anchor, "Navigated");
    }

    fn open_project(&mut self, index: usize) {
        self.page.open_project(index, self.portfolio.projects.len());
        self.modal_text.reset();
    }

    fn close_project(&mut self) {
        self.page.close_project();
        self.modal_text.reset();
    }

    async fn submit_contact(&mut self) {
        let outcome = ContactOutcome::submit(&self.contact.form, self.sink.as_ref()).await;
        let kind = if outcome.is_success() {
            ToastKind::Success
        } else {
            ToastKind::Error
        };
        self.toasts.push(outcome.message(), kind);

        if outcome.is_success() {
            self.contact.reset();
        }
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    fn full_area(&self) -> Rect {
        Rect::new(0, 0, self.size.0, self.size.1)
    }

    /// Page body: everything between the header and status rows
    fn page_area(&self) -> Rect {
        Rect::new(0, 1, self.size.0, self.size.1.saturating_sub(2))
    }

    fn max_scroll(&self) -> usize {
        self.layout.max_scroll(self.page_area().height)
    }

    fn modal_page_step(&self) -> isize {
        modal_area(self.full_area()).height.saturating_sub(6).max(1) as isize
    }

    fn palette(&self) -> Palette {
        Palette::for_theme(self.page.theme())
    }

    /// Position the layers whose bounds depend only on the terminal size
    fn place_layers(&mut self) {
        let (width, height) = self.size;
        let badge_width = u16::try_from(unicode_width::UnicodeWidthStr::width(SCROLL_TOP_BADGE))
            .unwrap_or(u16::MAX);

        self.compositor.set_bounds(self.layers.page, self.page_area());
        self.compositor
            .set_bounds(self.layers.header, Rect::new(0, 0, width, 1.min(height)));
        self.compositor.set_bounds(
            self.layers.status,
            Rect::new(0, height.saturating_sub(1), width, 1.min(height)),
        );
        self.compositor.set_bounds(
            self.layers.scroll_top,
            Rect::new(
                width.saturating_sub(badge_width + 1),
                height.saturating_sub(3),
                badge_width.min(width),
                1.min(height),
            ),
        );
        self.compositor
            .set_bounds(self.layers.modal, modal_area(self.full_area()));
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Advance time-based state and rebuild the page body
    fn rebuild_layout(&mut self, now: Instant) {
        self.toasts.prune(now);

        // Skill bars start growing the first time their section is in view
        if self.skills_revealed_at.is_none() {
            let top = self.page.scroll_offset();
            let bottom = top + usize::from(self.page_area().height);
            let skills = self.layout.anchor(Section::Skills)..self.layout.anchor(Section::Projects);
            if !self.layout.is_empty() && skills.start < bottom && skills.end > top {
                self.skills_revealed_at = Some(now);
            }
        }
        let skill_progress = self.skills_revealed_at.map_or(0.0, |start| {
            Easing::EaseOut.at(now.saturating_duration_since(start), SKILL_FILL_DURATION)
        });

        let hero_text = self.hero.text();
        let ctx = PageContext {
            portfolio: &self.portfolio,
            page: &self.page,
            hero_text: &hero_text,
            skill_progress,
            contact: &self.contact,
            palette: self.palette(),
        };
        self.layout = PageLayout::build(&ctx, self.size.0);

        let max = self.max_scroll();
        self.page.clamp_scroll(max);
    }

    /// Draw every layer and return the composited frame
    pub fn draw(&mut self, now: Instant) -> &Buffer {
        self.draw_layers(now);
        self.compositor.composite()
    }

    /// Render the UI
    fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        self.draw_layers(Instant::now());

        terminal.draw(|frame| {
            let output = self.compositor.composite();
            let area = frame.area();
            let buf = frame.buffer_mut();

            for y in 0..area.height.min(output.area.height) {
                for x in 0..area.width.min(output.area.width) {
                    if let Some(cell) = output.cell((x, y)) {
                        buf[(x, y)] = cell.clone();
                    }
                }
            }
        })?;

        Ok(())
    }

    fn draw_layers(&mut self, now: Instant) {
        self.rebuild_layout(now);

        self.render_page();
        self.render_header();
        self.render_status();
        self.render_scroll_top();
        self.render_menu(now);
        self.render_toasts();
        self.render_modal();
    }

    /// Render the scrollable page body
    fn render_page(&mut self) {
        let palette = self.palette();
        let offset = self.page.scroll_offset();
        let Some(buf) = self.compositor.layer_buffer_mut(self.layers.page) else {
            return;
        };
        buf.reset();
        let area = buf.area;
        buf.set_style(area, Style::default().bg(palette.background));
        self.layout.render(area, buf, offset);
    }

    /// Render the header row: name, menu and theme hints
    fn render_header(&mut self) {
        let palette = self.palette();
        let name = self.portfolio.hero.name.clone();
        let hint = format!("[m] Menu  [t] {} ", self.page.theme().switch_label());
        let Some(buf) = self.compositor.layer_buffer_mut(self.layers.header) else {
            return;
        };
        buf.reset();
        let area = buf.area;
        buf.set_style(area, palette.surface_style());
        buf.set_stringn(
            1,
            0,
            &name,
            usize::from(area.width),
            palette.accent_style().add_modifier(Modifier::BOLD),
        );

        let hint_width = u16::try_from(unicode_width::UnicodeWidthStr::width(hint.as_str()))
            .unwrap_or(u16::MAX);
        let name_width =
            u16::try_from(unicode_width::UnicodeWidthStr::width(name.as_str())).unwrap_or(u16::MAX);
        if hint_width.saturating_add(name_width).saturating_add(2) <= area.width {
            buf.set_string(area.width - hint_width, 0, &hint, palette.muted_style());
        }
    }

    /// Render the status line: section, key hints, scroll position
    fn render_status(&mut self) {
        let palette = self.palette();
        let offset = self.page.scroll_offset();
        let max = self.max_scroll();
        let section = self.layout.section_at(offset);

        let hints = if self.contact.is_editing() {
            "Editing message · Tab next · Ctrl-S send · Esc leave"
        } else if self.page.is_modal_open() {
            "↑/↓ scroll · Esc close"
        } else if self.page.is_menu_open() {
            "1-5 jump · t theme · Esc close"
        } else {
            "↑/↓ scroll · 1-5 jump · Tab skills · ←/→ projects · Enter open · c contact · q quit"
        };
        let position = match (offset, max) {
            (_, 0) => "All".to_string(),
            (0, _) => "Top".to_string(),
            (o, m) if o >= m => "Bot".to_string(),
            (o, m) => format!("{}%", o * 100 / m),
        };

        let Some(buf) = self.compositor.layer_buffer_mut(self.layers.status) else {
            return;
        };
        buf.reset();
        let area = buf.area;
        buf.set_style(area, palette.surface_style());

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", section.label()),
                palette.accent_style().add_modifier(Modifier::BOLD),
            ),
            Span::styled(hints, palette.muted_style()),
        ]);
        buf.set_line(0, 0, &line, area.width.saturating_sub(5));

        let pos_x = area.width.saturating_sub(4);
        buf.set_stringn(pos_x, 0, &position, 4, palette.text_style());
    }

    /// Render the scroll-to-top badge when scrolled far enough
    fn render_scroll_top(&mut self) {
        let visible = self.page.show_scroll_top() && !self.page.is_modal_open();
        self.compositor.set_visible(self.layers.scroll_top, visible);
        if !visible {
            return;
        }

        let palette = self.palette();
        let Some(buf) = self.compositor.layer_buffer_mut(self.layers.scroll_top) else {
            return;
        };
        buf.reset();
        let style = Style::default()
            .fg(palette.background)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD);
        buf.set_string(0, 0, SCROLL_TOP_BADGE, style);
    }

    /// Render the navigation menu, sliding in from the right
    fn render_menu(&mut self, now: Instant) {
        let Some(opened_at) = self.menu_opened_at.filter(|_| self.page.is_menu_open()) else {
            self.compositor.set_visible(self.layers.menu, false);
            return;
        };

        let body = self.page_area();
        let slide =
            Easing::EaseOutCubic.at(now.saturating_duration_since(opened_at), MENU_SLIDE_DURATION);
        let full = MENU_WIDTH.min(body.width);
        // slide is within 0..=1, so the product fits in u16
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let shown = ((f32::from(full) * slide).round() as u16).clamp(1, full.max(1));

        let bounds = Rect::new(body.width.saturating_sub(shown), body.y, shown, body.height);
        self.compositor.set_bounds(self.layers.menu, bounds);
        self.compositor.set_visible(self.layers.menu, true);

        let palette = self.palette();
        let current = self.layout.section_at(self.page.scroll_offset());
        let theme_label = self.page.theme().switch_label();
        let Some(buf) = self.compositor.layer_buffer_mut(self.layers.menu) else {
            return;
        };
        buf.reset();
        let area = buf.area;

        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(palette.accent_style())
            .style(palette.surface_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let mut rows: Vec<Line<'static>> = Section::ALL
            .iter()
            .map(|section| {
                let style = if *section == current {
                    palette.accent_style().add_modifier(Modifier::BOLD)
                } else {
                    palette.text_style()
                };
                Line::from(vec![
                    Span::styled(format!(" [{}] ", section.hotkey()), palette.muted_style()),
                    Span::styled(section.label(), style),
                ])
            })
            .collect();
        rows.push(Line::default());
        rows.push(Line::from(vec![
            Span::styled(" [t] ", palette.muted_style()),
            Span::styled(theme_label, palette.text_style()),
        ]));
        rows.push(Line::from(Span::styled(" [Esc] Close", palette.muted_style())));

        // one blank row on top so item rows line up with click handling
        for (row, line) in (1..inner.height).zip(rows.iter()) {
            buf.set_line(inner.x, inner.y + row, line, inner.width);
        }
    }

    /// Render toasts above the status line
    fn render_toasts(&mut self) {
        if self.toasts.is_empty() {
            self.compositor.set_visible(self.layers.toast, false);
            return;
        }

        let (width, height) = self.size;
        let (toast_w, toast_h) = self.toasts.size(width.saturating_sub(2).min(48));
        let bounds = Rect::new(
            width.saturating_sub(toast_w + 1),
            height.saturating_sub(4 + toast_h),
            toast_w,
            toast_h,
        );
        self.compositor.set_bounds(self.layers.toast, bounds);
        self.compositor.set_visible(self.layers.toast, true);

        let palette = self.palette();
        let Some(buf) = self.compositor.layer_buffer_mut(self.layers.toast) else {
            return;
        };
        buf.reset();
        let area = buf.area;
        self.toasts.view(palette).render(area, buf);
    }

    /// Render the project modal when one is selected
    fn render_modal(&mut self) {
        let Some(index) = self.page.selected_project() else {
            self.compositor.set_visible(self.layers.modal, false);
            return;
        };
        self.compositor.set_visible(self.layers.modal, true);

        let palette = self.palette();
        let Some(buf) = self.compositor.layer_buffer_mut(self.layers.modal) else {
            return;
        };
        buf.reset();
        let area = buf.area;
        if let Some(project) = self.portfolio.projects.get(index) {
            ProjectModal::new(project, palette).render(area, buf, &mut self.modal_text);
        }
    }
}
