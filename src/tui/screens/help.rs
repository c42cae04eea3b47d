//! Help screen: keybinding reference for the screen that opened it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::WizardStep;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

static ONBOARDING_KEYS: &[(&str, &str)] = &[
    ("Enter", "start account set up"),
    ("q / Esc", "quit"),
    ("F1", "help"),
];

static PROFILE_SETUP_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("↑/↓ on text", "next / prev field"),
    ("↑/↓ ←/→ on list", "choose nationality or visa type"),
    ("type on list", "search the list"),
    ("Backspace", "delete character / search"),
    ("Enter", "continue to current address"),
    ("Esc", "back to onboarding (entries are discarded)"),
    ("F1", "help"),
];

static CURRENT_ADDRESS_KEYS: &[(&str, &str)] = &[
    ("Esc", "back to account set up"),
    ("q", "quit"),
    ("F1", "help"),
];

/// Global keys, shown under every section.
static GLOBAL_KEYS: &[(&str, &str)] = &[("Ctrl-C", "quit from anywhere")];

/// State for the help screen. Help is only ever opened from a wizard step.
#[derive(Debug, Clone)]
pub struct HelpState {
    scroll: u16,
    origin: WizardStep,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Creates a new [`HelpState`] scrolled to the top with origin [`WizardStep::ProfileSetup`].
    pub fn new() -> Self {
        Self {
            scroll: 0,
            origin: WizardStep::ProfileSetup,
        }
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the wizard step that opened help.
    pub fn origin(&self) -> WizardStep {
        self.origin
    }

    /// Sets the wizard step to return to when help is dismissed.
    pub fn set_origin(&mut self, step: WizardStep) {
        self.origin = step;
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(self.origin.into()),
            _ => Action::None,
        }
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys.iter().chain(GLOBAL_KEYS) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

fn help_content(origin: WizardStep) -> Vec<Line<'static>> {
    let keys = match origin {
        WizardStep::Onboarding => ONBOARDING_KEYS,
        WizardStep::ProfileSetup => PROFILE_SETUP_KEYS,
        WizardStep::CurrentAddress => CURRENT_ADDRESS_KEYS,
    };
    build_section(Screen::from(origin).label(), keys)
}

/// Renders the help screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let title = format!(" Help – {} ", Screen::from(state.origin()).label());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content_lines = help_content(state.origin());
    let total = content_lines.len() as u16;
    let height = content_area.height;
    let capped_scroll = state.scroll().min(total.saturating_sub(height));

    let paragraph = Paragraph::new(content_lines).scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
