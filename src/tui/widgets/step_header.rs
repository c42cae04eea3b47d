//! Wizard step header: back affordance, screen title and progress badge.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::WizardStep;

/// Data passed to the step header widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepHeaderContext {
    /// Screen title, centred.
    pub title: String,
    /// Which wizard step is showing.
    pub step: WizardStep,
    /// Whether a previous step exists to go back to.
    pub can_go_back: bool,
}

impl StepHeaderContext {
    /// Creates a header for `step` with the given title.
    pub fn new(title: impl Into<String>, step: WizardStep) -> Self {
        Self {
            title: title.into(),
            step,
            can_go_back: step != WizardStep::Onboarding,
        }
    }
}

/// Renders a one-line header:
///
/// `← Esc            Account Set Up            2/5`
#[mutants::skip]
pub fn draw_step_header(ctx: &StepHeaderContext, frame: &mut Frame, area: Rect) {
    let [back_area, title_area, badge_area] = Layout::horizontal([
        Constraint::Length(8),
        Constraint::Min(0),
        Constraint::Length(8),
    ])
    .areas(area);

    if ctx.can_go_back {
        let back = Paragraph::new(Line::from(vec![
            Span::styled("\u{2190} ", Style::default().fg(Color::Gray)),
            Span::styled("Esc", Style::default().fg(Color::DarkGray)),
        ]));
        frame.render_widget(back, back_area);
    }

    let title = Paragraph::new(Span::styled(
        ctx.title.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let badge = Paragraph::new(Span::styled(
        format!("[{}]", ctx.step.progress()),
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(badge, badge_area);
}
