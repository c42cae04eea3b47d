//! Account set up screen (wizard step 2/5): date of birth, nationality, visa
//! type, visa expiry and phone number.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::{debug, info, warn};

use crate::model::{
    ProfileField, ProfileSetup, SelectField, TextField, ValidationError, WizardStep, check_formats,
};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::form::{Form, FormControl, FormEvent, FormField, ROW_HEIGHT, draw_form};
use crate::tui::widgets::select::SelectBox;
use crate::tui::widgets::step_header::{StepHeaderContext, draw_step_header};

/// Target of the event carrying the submitted record.
pub const DIAGNOSTICS_TARGET: &str = "whv_onboard::diagnostics";

/// Title shown in the step header.
pub const TITLE: &str = "Account Set Up";

const BUTTON_COLOR: Color = Color::Rgb(249, 115, 22);

/// Lifecycle of one mounted instance of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting edits.
    Editing,
    /// The record has been handed on; further keys are ignored until remount.
    Submitted,
}

/// State for the account set up screen.
#[derive(Debug, Clone)]
pub struct ProfileSetupState {
    form: Form,
    profile: ProfileSetup,
    phase: Phase,
    strict: bool,
}

impl Default for ProfileSetupState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileSetupState {
    /// Creates the screen with an empty record and format checks off.
    pub fn new() -> Self {
        Self::with_strict_validation(false)
    }

    /// Creates the screen, optionally blocking submission on malformed dates
    /// and phone numbers.
    pub fn with_strict_validation(strict: bool) -> Self {
        let controls = ProfileField::all()
            .iter()
            .map(|&field| build_control(field))
            .collect();
        Self {
            form: Form::new(controls),
            profile: ProfileSetup::default(),
            phase: Phase::Editing,
            strict,
        }
    }

    /// Returns the record collected so far.
    pub fn profile(&self) -> &ProfileSetup {
        &self.profile
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` if format checks gate submission.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Discards the record and returns to a freshly mounted state.
    pub fn reset(&mut self) {
        self.form.reset();
        self.profile = ProfileSetup::default();
        self.phase = Phase::Editing;
    }

    /// Replaces one text field of the record.
    pub fn on_text_field_change(&mut self, field: TextField, value: impl Into<String>) {
        self.profile.set_text(field, value);
    }

    /// Replaces one selection of the record with a label from its closed set.
    pub fn on_selection_change(
        &mut self,
        field: SelectField,
        label: &str,
    ) -> Result<(), ValidationError> {
        self.profile.apply_selection(field, label)
    }

    /// Emits the record on the diagnostics channel and moves on to the
    /// current-address step.
    ///
    /// Performs no validation. The record is only logged; the app discards it
    /// once the step is left.
    pub fn on_submit(&mut self) -> Action {
        match self.profile.to_json() {
            Ok(record) => info!(target: DIAGNOSTICS_TARGET, %record, "WHV profile setup submitted"),
            Err(error) => warn!(%error, "could not serialize WHV profile record"),
        }
        self.phase = Phase::Submitted;
        Action::Navigate(Screen::CurrentAddress)
    }

    /// Returns to the onboarding step. The record is not kept.
    pub fn on_back(&self) -> Action {
        debug!("leaving account set up for onboarding");
        Action::Navigate(Screen::Onboarding)
    }

    /// Submission as the input widgets perform it: empty required fields
    /// block it, then format errors when strict checks are on.
    fn submit(&mut self) -> Action {
        self.form.clear_errors();

        if let Some(index) = self.form.first_missing_required() {
            debug!(
                field = ProfileField::all()[index].key(),
                "submission blocked by empty required field"
            );
            self.form.set_error(index, ValidationError::Required.to_string());
            self.form.set_focus(index);
            return Action::None;
        }

        if self.strict {
            let errors = check_formats(&self.profile);
            if let Some((first, _)) = errors.first() {
                let first = control_index(*first);
                for (field, error) in &errors {
                    self.form.set_error(control_index(*field), error.to_string());
                }
                self.form.set_focus(first);
                debug!(count = errors.len(), "submission blocked by format errors");
                return Action::None;
            }
        }

        self.on_submit()
    }

    /// Routes a widget change event to the matching record update.
    fn dispatch(&mut self, event: Option<FormEvent>) {
        let Some(FormEvent::Changed { index, value }) = event else {
            return;
        };
        let Some(&field) = ProfileField::all().get(index) else {
            return;
        };
        if let Some(text) = field.as_text() {
            self.on_text_field_change(text, value);
        } else if let Some(select) = field.as_select()
            && let Err(error) = self.on_selection_change(select, &value)
        {
            warn!(%error, "selection widget emitted a label outside its options");
        }
    }
}

impl ScreenState for ProfileSetupState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.phase == Phase::Submitted {
            return Action::None;
        }

        let on_select = self.form.focused_is_select();
        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Up | KeyCode::Left if on_select => {
                let event = self.form.cycle(false);
                self.dispatch(event);
                Action::None
            }
            KeyCode::Down | KeyCode::Right if on_select => {
                let event = self.form.cycle(true);
                self.dispatch(event);
                Action::None
            }
            KeyCode::Up => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Down => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let event = self.form.insert_char(ch);
                self.dispatch(event);
                Action::None
            }
            KeyCode::Backspace => {
                let event = self.form.delete_char();
                self.dispatch(event);
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.on_back(),
            _ => Action::None,
        }
    }
}

fn build_control(field: ProfileField) -> FormControl {
    match field.as_select() {
        Some(select) => SelectBox::new(field.label(), select.options())
            .with_placeholder(field.placeholder())
            .into(),
        None => FormField::new(field.label(), field.required())
            .with_placeholder(field.placeholder())
            .into(),
    }
}

fn control_index(field: ProfileField) -> usize {
    ProfileField::all()
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default()
}

/// Renders the account set up screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_profile_setup(state: &ProfileSetupState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" WHV Onboarding ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form_height = ROW_HEIGHT * state.form().controls().len() as u16;
    let [header_area, _gap, form_area, _spacer, button_area, _rest, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(form_height),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    draw_step_header(
        &StepHeaderContext::new(TITLE, WizardStep::ProfileSetup),
        frame,
        header_area,
    );

    draw_form(state.form(), frame, form_area);

    let button = Paragraph::new(Line::from("Continue \u{2192}"))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(BUTTON_COLOR)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, button_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  \u{2191}/\u{2193}: choose  Enter: continue  Esc: back  F1: help",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
