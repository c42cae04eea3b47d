//! Single-choice selection over a fixed list of labels.

/// A closed-set selection control with type-ahead search.
///
/// Typed characters accumulate into a query; the first option starting with
/// the query (case-insensitive) is selected, falling back to the first option
/// containing it. Characters that would leave nothing matching are dropped.
#[derive(Debug, Clone)]
pub struct SelectBox {
    /// Display label shown above the control.
    pub label: String,
    /// Hint shown while nothing is selected.
    pub placeholder: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    options: &'static [&'static str],
    selected: Option<usize>,
    query: String,
}

impl SelectBox {
    /// Creates a selection over `options` with nothing selected.
    pub fn new(label: impl Into<String>, options: &'static [&'static str]) -> Self {
        Self {
            label: label.into(),
            placeholder: String::new(),
            error: None,
            options,
            selected: None,
            query: String::new(),
        }
    }

    /// Sets the hint shown while nothing is selected.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Returns the selectable labels.
    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    /// Returns the index of the selected option.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the selected label, or an empty string if nothing is selected.
    pub fn value(&self) -> &'static str {
        self.selected
            .and_then(|i| self.options.get(i).copied())
            .unwrap_or("")
    }

    /// Returns the pending type-ahead query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Selects the next option, wrapping. Returns `true` if the selection changed.
    pub fn select_next(&mut self) -> bool {
        self.query.clear();
        if self.options.is_empty() {
            return false;
        }
        let next = match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        };
        self.set_selected(next)
    }

    /// Selects the previous option, wrapping. Returns `true` if the selection changed.
    pub fn select_prev(&mut self) -> bool {
        self.query.clear();
        if self.options.is_empty() {
            return false;
        }
        let len = self.options.len();
        let prev = match self.selected {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.set_selected(prev)
    }

    /// Extends the query with `ch` and jumps to the best match.
    ///
    /// Returns `true` if the selection changed.
    pub fn search_push(&mut self, ch: char) -> bool {
        self.query.push(ch);
        match self.best_match() {
            Some(i) => self.set_selected(i),
            None => {
                self.query.pop();
                false
            }
        }
    }

    /// Removes the last query character and re-matches on what remains.
    ///
    /// Returns `true` if the selection changed.
    pub fn search_pop(&mut self) -> bool {
        if self.query.pop().is_none() || self.query.is_empty() {
            return false;
        }
        self.best_match().is_some_and(|i| self.set_selected(i))
    }

    /// Discards the pending query without touching the selection.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Clears the selection, query and error.
    pub fn reset(&mut self) {
        self.selected = None;
        self.query.clear();
        self.error = None;
    }

    fn set_selected(&mut self, index: usize) -> bool {
        let changed = self.selected != Some(index);
        self.selected = Some(index);
        changed
    }

    fn best_match(&self) -> Option<usize> {
        let query = self.query.to_lowercase();
        let lowered: Vec<String> = self.options.iter().map(|o| o.to_lowercase()).collect();
        lowered
            .iter()
            .position(|o| o.starts_with(&query))
            .or_else(|| lowered.iter().position(|o| o.contains(&query)))
    }
}
