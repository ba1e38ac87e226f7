//! Page UI State
//!
//! Coordination between the pieces of the page that react to the user:
//! scroll position (and the scroll-to-top badge it drives), the navigation
//! menu, the project detail modal, the skills tab, and the theme.
//!
//! Nothing here draws. Surfaces translate input into these calls and render
//! from the resulting state.

use crate::content::SkillTab;

/// Scroll offset (in lines) past which the scroll-to-top badge appears
pub const DEFAULT_SCROLL_TOP_THRESHOLD: usize = 12;

/// Page sections in document order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Hero and bio
    About,
    /// Skill bars
    Skills,
    /// Project cards
    Projects,
    /// Experience timeline
    Experience,
    /// Links and contact form
    Contact,
}

impl Section {
    /// All sections in page order
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Navigation label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }

    /// Heading shown at the top of the section
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills & Expertise",
            Self::Projects => "Featured Projects",
            Self::Experience => "Professional Experience",
            Self::Contact => "Get in Touch",
        }
    }

    /// Number key that jumps to the section (1-5)
    #[must_use]
    pub fn hotkey(self) -> char {
        match self {
            Self::About => '1',
            Self::Skills => '2',
            Self::Projects => '3',
            Self::Experience => '4',
            Self::Contact => '5',
        }
    }

    /// Section for a number key
    #[must_use]
    pub fn from_hotkey(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.hotkey() == key)
    }
}

/// Color theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light text on dark background
    #[default]
    Dark,
    /// Dark text on light background
    Light,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Menu label for switching away from this theme
    #[must_use]
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Dark => "Light Mode",
            Self::Light => "Dark Mode",
        }
    }
}

/// Interactive page state
#[derive(Clone, Debug)]
pub struct PageState {
    menu_open: bool,
    selected_project: Option<usize>,
    focused_project: usize,
    scroll_offset: usize,
    skill_tab: SkillTab,
    theme: Theme,
    scroll_top_threshold: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_TOP_THRESHOLD)
    }
}

impl PageState {
    /// Create page state with a scroll-to-top threshold (in lines)
    #[must_use]
    pub fn new(scroll_top_threshold: usize) -> Self {
        Self {
            menu_open: false,
            selected_project: None,
            focused_project: 0,
            scroll_offset: 0,
            skill_tab: SkillTab::default(),
            theme: Theme::default(),
            scroll_top_threshold,
        }
    }

    // === Menu ===

    /// Open or close the navigation menu
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the navigation menu
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Whether the navigation menu is open
    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    // === Project modal ===

    /// Open the detail modal for a project (ignored when out of range)
    pub fn open_project(&mut self, index: usize, project_count: usize) {
        if index < project_count {
            self.selected_project = Some(index);
            self.focused_project = index;
        }
    }

    /// Open the detail modal for the focused project
    pub fn open_focused_project(&mut self, project_count: usize) {
        self.open_project(self.focused_project, project_count);
    }

    /// Close the detail modal
    pub fn close_project(&mut self) {
        self.selected_project = None;
    }

    /// Project shown in the modal, if any
    #[must_use]
    pub fn selected_project(&self) -> Option<usize> {
        self.selected_project
    }

    /// Whether the modal is open
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.selected_project.is_some()
    }

    /// Project card with keyboard focus
    #[must_use]
    pub fn focused_project(&self) -> usize {
        self.focused_project
    }

    /// Move card focus forward, wrapping
    pub fn focus_next_project(&mut self, project_count: usize) {
        if project_count > 0 {
            self.focused_project = (self.focused_project + 1) % project_count;
        }
    }

    /// Move card focus backward, wrapping
    pub fn focus_prev_project(&mut self, project_count: usize) {
        if project_count > 0 {
            self.focused_project = (self.focused_project + project_count - 1) % project_count;
        }
    }

    // === Scrolling ===

    /// Current scroll offset (lines from the top)
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Scroll by `delta` lines, clamped to `0..=max`
    ///
    /// Ignored while the modal is open: the modal captures input.
    pub fn scroll_by(&mut self, delta: isize, max: usize) {
        if self.is_modal_open() {
            return;
        }
        let target = if delta.is_negative() {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta.unsigned_abs())
        };
        self.scroll_offset = target.min(max);
    }

    /// Scroll to an absolute offset, clamped to `max`
    pub fn scroll_to(&mut self, offset: usize, max: usize) {
        self.scroll_offset = offset.min(max);
    }

    /// Jump to a section's anchor line and close the menu
    pub fn navigate(&mut self, anchor: usize, max: usize) {
        self.close_project();
        self.scroll_to(anchor, max);
        self.close_menu();
    }

    /// Back to the top of the page
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Whether the scroll-to-top badge should be shown
    #[must_use]
    pub fn show_scroll_top(&self) -> bool {
        self.scroll_offset > self.scroll_top_threshold
    }

    /// Re-clamp after the page got shorter (e.g. on resize)
    pub fn clamp_scroll(&mut self, max: usize) {
        self.scroll_offset = self.scroll_offset.min(max);
    }

    // === Tabs and theme ===

    /// Active skills tab
    #[must_use]
    pub fn skill_tab(&self) -> SkillTab {
        self.skill_tab
    }

    /// Switch skills tab
    pub fn toggle_skill_tab(&mut self) {
        self.skill_tab = self.skill_tab.toggle();
    }

    /// Active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch theme
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageState::default();
        assert!(!page.is_menu_open());
        assert!(!page.is_modal_open());
        assert_eq!(page.scroll_offset(), 0);
        assert_eq!(page.theme(), Theme::Dark);
        assert_eq!(page.skill_tab(), SkillTab::Technical);
        assert!(!page.show_scroll_top());
    }

    #[test]
    fn test_menu_toggle() {
        let mut page = PageState::default();
        page.toggle_menu();
        assert!(page.is_menu_open());
        page.toggle_menu();
        assert!(!page.is_menu_open());
    }

    #[test]
    fn test_open_and_close_project() {
        let mut page = PageState::default();
        page.open_project(2, 4);
        assert_eq!(page.selected_project(), Some(2));
        assert_eq!(page.focused_project(), 2);

        page.close_project();
        assert_eq!(page.selected_project(), None);
    }

    #[test]
    fn test_open_project_out_of_range_ignored() {
        let mut page = PageState::default();
        page.open_project(4, 4);
        assert!(!page.is_modal_open());
        page.open_focused_project(0);
        assert!(!page.is_modal_open());
    }

    #[test]
    fn test_scroll_clamps() {
        let mut page = PageState::default();
        page.scroll_by(-5, 100);
        assert_eq!(page.scroll_offset(), 0);
        page.scroll_by(30, 100);
        assert_eq!(page.scroll_offset(), 30);
        page.scroll_by(500, 100);
        assert_eq!(page.scroll_offset(), 100);
        page.clamp_scroll(40);
        assert_eq!(page.scroll_offset(), 40);
    }

    #[test]
    fn test_scroll_ignored_while_modal_open() {
        let mut page = PageState::default();
        page.open_project(0, 1);
        page.scroll_by(10, 100);
        assert_eq!(page.scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_top_badge_threshold() {
        let mut page = PageState::new(10);
        page.scroll_to(10, 100);
        assert!(!page.show_scroll_top());
        page.scroll_by(1, 100);
        assert!(page.show_scroll_top());
        page.scroll_to_top();
        assert!(!page.show_scroll_top());
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut page = PageState::default();
        page.toggle_menu();
        page.navigate(42, 200);
        assert_eq!(page.scroll_offset(), 42);
        assert!(!page.is_menu_open());
    }

    #[test]
    fn test_project_focus_wraps() {
        let mut page = PageState::default();
        page.focus_prev_project(3);
        assert_eq!(page.focused_project(), 2);
        page.focus_next_project(3);
        assert_eq!(page.focused_project(), 0);
        page.focus_next_project(0);
        assert_eq!(page.focused_project(), 0);
    }

    #[test]
    fn test_theme_and_tab_toggle() {
        let mut page = PageState::default();
        page.toggle_theme();
        assert_eq!(page.theme(), Theme::Light);
        assert_eq!(page.theme().switch_label(), "Dark Mode");
        page.toggle_skill_tab();
        assert_eq!(page.skill_tab(), SkillTab::Soft);
    }

    #[test]
    fn test_section_hotkeys() {
        for section in Section::ALL {
            assert_eq!(Section::from_hotkey(section.hotkey()), Some(section));
        }
        assert_eq!(Section::from_hotkey('9'), None);
    }
}
