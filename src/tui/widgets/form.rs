//! Form widget: an ordered set of text inputs and selections with focus management.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::select::SelectBox;

/// A single free-text input within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown above the input.
    pub label: String,
    /// Current text value.
    pub value: String,
    /// Hint shown while the value is empty.
    pub placeholder: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the form refuses to submit while this field is empty.
    pub required: bool,
}

impl FormField {
    /// Creates a new, empty form field.
    pub fn new(label: impl Into<String>, required: bool) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            placeholder: String::new(),
            error: None,
            required,
        }
    }

    /// Sets the hint shown while the value is empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// One control in a [`Form`].
#[derive(Debug, Clone)]
pub enum FormControl {
    Input(FormField),
    Select(SelectBox),
}

impl FormControl {
    /// Display label of the control.
    pub fn label(&self) -> &str {
        match self {
            Self::Input(f) => &f.label,
            Self::Select(s) => &s.label,
        }
    }

    /// Current value: typed text, or the selected label.
    pub fn value(&self) -> &str {
        match self {
            Self::Input(f) => &f.value,
            Self::Select(s) => s.value(),
        }
    }

    /// Current error message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Input(f) => f.error.as_deref(),
            Self::Select(s) => s.error.as_deref(),
        }
    }

    /// Whether an empty value blocks submission. Selections are never required.
    pub fn required(&self) -> bool {
        matches!(self, Self::Input(f) if f.required)
    }

    fn error_mut(&mut self) -> &mut Option<String> {
        match self {
            Self::Input(f) => &mut f.error,
            Self::Select(s) => &mut s.error,
        }
    }
}

impl From<FormField> for FormControl {
    fn from(field: FormField) -> Self {
        Self::Input(field)
    }
}

impl From<SelectBox> for FormControl {
    fn from(select: SelectBox) -> Self {
        Self::Select(select)
    }
}

/// Emitted when a control's value changes, carrying the new raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Changed { index: usize, value: String },
}

/// A multi-control form with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    controls: Vec<FormControl>,
    focus: usize,
}

impl Form {
    /// Creates a new form with the given controls. Focus starts on the first control.
    pub fn new(controls: Vec<FormControl>) -> Self {
        Self { controls, focus: 0 }
    }

    /// Returns the index of the currently focused control.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to `index` if it is in bounds.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.controls.len() {
            self.leave_focused();
            self.focus = index;
        }
    }

    /// Moves focus to the next control, wrapping around.
    pub fn focus_next(&mut self) {
        if self.controls.is_empty() {
            return;
        }
        self.leave_focused();
        self.focus = (self.focus + 1) % self.controls.len();
    }

    /// Moves focus to the previous control, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.controls.is_empty() {
            return;
        }
        self.leave_focused();
        self.focus = (self.focus + self.controls.len() - 1) % self.controls.len();
    }

    /// Returns `true` if the focused control is a selection.
    pub fn focused_is_select(&self) -> bool {
        matches!(self.controls.get(self.focus), Some(FormControl::Select(_)))
    }

    /// Types a character into the focused control.
    ///
    /// Text inputs append it; selections treat it as a search keystroke.
    pub fn insert_char(&mut self, ch: char) -> Option<FormEvent> {
        let changed = match self.controls.get_mut(self.focus)? {
            FormControl::Input(field) => {
                field.value.push(ch);
                true
            }
            FormControl::Select(select) => select.search_push(ch),
        };
        self.changed_event(changed)
    }

    /// Deletes the last character of the focused input, or of a selection's search query.
    pub fn delete_char(&mut self) -> Option<FormEvent> {
        let changed = match self.controls.get_mut(self.focus)? {
            FormControl::Input(field) => field.value.pop().is_some(),
            FormControl::Select(select) => select.search_pop(),
        };
        self.changed_event(changed)
    }

    /// Steps the focused selection forward or backward. No-op on text inputs.
    pub fn cycle(&mut self, forward: bool) -> Option<FormEvent> {
        let changed = match self.controls.get_mut(self.focus)? {
            FormControl::Input(_) => false,
            FormControl::Select(select) if forward => select.select_next(),
            FormControl::Select(select) => select.select_prev(),
        };
        self.changed_event(changed)
    }

    /// Sets an error message on a control by index.
    pub fn set_error(&mut self, index: usize, error: String) {
        if let Some(control) = self.controls.get_mut(index) {
            *control.error_mut() = Some(error);
        }
    }

    /// Clears all control errors.
    pub fn clear_errors(&mut self) {
        for control in &mut self.controls {
            *control.error_mut() = None;
        }
    }

    /// Returns `true` if any control has an error set.
    pub fn has_errors(&self) -> bool {
        self.controls.iter().any(|c| c.error().is_some())
    }

    /// Returns the value of the control at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.controls.get(index).map(FormControl::value).unwrap_or("")
    }

    /// Returns all control values in order.
    pub fn values(&self) -> Vec<&str> {
        self.controls.iter().map(FormControl::value).collect()
    }

    /// Returns the index of the first required control that is still empty.
    pub fn first_missing_required(&self) -> Option<usize> {
        self.controls
            .iter()
            .position(|c| c.required() && c.value().is_empty())
    }

    /// Resets all values, selections and errors, and focuses the first control.
    pub fn reset(&mut self) {
        for control in &mut self.controls {
            match control {
                FormControl::Input(field) => {
                    field.value.clear();
                    field.error = None;
                }
                FormControl::Select(select) => select.reset(),
            }
        }
        self.focus = 0;
    }

    /// Returns a reference to the controls.
    pub fn controls(&self) -> &[FormControl] {
        &self.controls
    }

    fn leave_focused(&mut self) {
        if let Some(FormControl::Select(select)) = self.controls.get_mut(self.focus) {
            select.clear_query();
        }
    }

    fn changed_event(&self, changed: bool) -> Option<FormEvent> {
        changed.then(|| FormEvent::Changed {
            index: self.focus,
            value: self.value(self.focus).to_string(),
        })
    }
}

/// Height of one control row, borders included.
pub const ROW_HEIGHT: u16 = 3;

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = form
        .controls
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();

    let rows = Layout::vertical(constraints).split(area);
    let hint = Style::default().fg(Color::DarkGray);

    for (i, control) in form.controls.iter().enumerate() {
        let is_focused = i == form.focus;

        let border_color = if control.error().is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if control.required() {
            format!("{} *", control.label())
        } else {
            control.label().to_string()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let spans = match control {
            FormControl::Input(field) => {
                let mut spans = if field.value.is_empty() && !is_focused {
                    vec![Span::styled(field.placeholder.as_str(), hint)]
                } else {
                    vec![Span::raw(field.value.as_str())]
                };
                if is_focused {
                    spans.push(Span::styled(
                        "\u{2588}",
                        Style::default().add_modifier(Modifier::SLOW_BLINK),
                    ));
                }
                spans
            }
            FormControl::Select(select) => {
                let shown = match select.value() {
                    "" => Span::styled(select.placeholder.as_str(), hint),
                    v => Span::raw(v),
                };
                let mut spans = if is_focused {
                    vec![Span::raw("\u{25c2} "), shown, Span::raw(" \u{25b8}")]
                } else {
                    vec![shown, Span::styled(" \u{25be}", hint)]
                };
                if is_focused && !select.query().is_empty() {
                    spans.push(Span::styled(format!("  /{}", select.query()), hint));
                }
                spans
            }
        };

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        // Error overlaps the bottom border of its row.
        if let Some(err) = control.error() {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + ROW_HEIGHT.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}
