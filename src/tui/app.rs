use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};
use tracing::info;

use crate::config::Config;
use crate::model::WizardStep;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{HelpState, ProfileSetupState, draw_help, draw_profile_setup};
use super::widgets::{StepHeaderContext, draw_step_header};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Wizard step 1, owned elsewhere; shown as a placeholder.
    Onboarding,
    /// Wizard step 2: account set up.
    ProfileSetup,
    /// Wizard step 3, owned elsewhere; shown as a placeholder.
    CurrentAddress,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Onboarding => "Onboarding",
            Self::ProfileSetup => "Account Set Up",
            Self::CurrentAddress => "Current Address",
            Self::Help => "Help",
        }
    }

    /// The wizard step this screen shows, if any.
    pub fn wizard_step(self) -> Option<WizardStep> {
        match self {
            Self::Onboarding => Some(WizardStep::Onboarding),
            Self::ProfileSetup => Some(WizardStep::ProfileSetup),
            Self::CurrentAddress => Some(WizardStep::CurrentAddress),
            Self::Help => None,
        }
    }
}

impl From<WizardStep> for Screen {
    fn from(step: WizardStep) -> Self {
        match step {
            WizardStep::Onboarding => Self::Onboarding,
            WizardStep::ProfileSetup => Self::ProfileSetup,
            WizardStep::CurrentAddress => Self::CurrentAddress,
        }
    }
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    profile_setup: ProfileSetupState,
    help: HelpState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::ProfileSetup`] screen.
    pub fn new(config: &Config) -> Self {
        Self {
            screen: Screen::ProfileSetup,
            profile_setup: ProfileSetupState::with_strict_validation(config.strict_validation),
            help: HelpState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::ProfileSetup => draw_profile_setup(&self.profile_setup, frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
            Screen::Onboarding => {
                draw_placeholder(frame, area, Screen::Onboarding, "Enter: continue  q: quit")
            }
            Screen::CurrentAddress => {
                draw_placeholder(frame, area, Screen::CurrentAddress, "Esc: back  q: quit")
            }
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.apply(Action::Quit);
            return;
        }

        if key.code == KeyCode::F(1) {
            if let Some(step) = self.screen.wizard_step() {
                self.help.set_origin(step);
                self.help.reset();
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::ProfileSetup => self.profile_setup.handle_key(key),
            Screen::Help => self.help.handle_key(key),
            Screen::Onboarding => match key.code {
                KeyCode::Enter => Action::Navigate(Screen::ProfileSetup),
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                _ => Action::None,
            },
            Screen::CurrentAddress => match key.code {
                KeyCode::Esc => Action::Navigate(Screen::ProfileSetup),
                KeyCode::Char('q') => Action::Quit,
                _ => Action::None,
            },
        };
        self.apply(action);
    }

    /// Applies an [`Action`] returned by a screen.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen),
            Action::Quit => {
                info!(screen = ?self.screen, "quitting");
                self.should_quit = true;
            }
        }
    }

    /// Switches screens. Leaving the account set up step for another wizard
    /// step unmounts it and drops the collected record; opening help keeps it.
    fn navigate(&mut self, to: Screen) {
        let from = self.screen;
        if from == Screen::ProfileSetup && to != Screen::Help {
            self.profile_setup.reset();
        }
        if let (Some(a), Some(b)) = (from.wizard_step(), to.wizard_step()) {
            info!(from = a.path(), to = b.path(), "wizard navigation");
        }
        self.screen = to;
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the account set up screen state.
    pub fn profile_setup(&self) -> &ProfileSetupState {
        &self.profile_setup
    }
}

/// Renders a wizard step this application does not own.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn draw_placeholder(frame: &mut Frame, area: Rect, screen: Screen, keys: &str) {
    let block = Block::default()
        .title(" WHV Onboarding ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    if let Some(step) = screen.wizard_step() {
        draw_step_header(&StepHeaderContext::new(screen.label(), step), frame, header_area);
    }

    let lines = vec![
        Line::from(""),
        Line::from(format!("[ {} ]", screen.label())),
        Line::from(keys.to_string()),
    ];
    let [centered] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(body_area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}
