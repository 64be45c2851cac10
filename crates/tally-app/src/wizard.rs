// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;

use crate::{Key, ListCursor, Project, TextField, timerange};

const PROJECT_PAGE_ROWS: usize = 10;

/// Screens of the time-entry flow, in order. The step only ever advances
/// forward via explicit confirmation; `Complete` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    DateSelect,
    ProjectSelect,
    TimeInput,
    TaskInput,
    Confirm,
    Complete,
}

/// What the wizard asks of its host after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    None,
    Submit,
    RequestQuit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: WizardStep,
    pub date: Date,
    today: Date,
    pub projects: Vec<Project>,
    pub selected: Option<Project>,
    pub search: TextField,
    pub time_range: TextField,
    pub task: TextField,
    pub suggestions: Vec<String>,
    pub cursor: ListCursor,
    pub loading: bool,
    /// Set once the project/description loads have been issued for this
    /// wizard; reopening the form must not refetch.
    pub loaded: bool,
    pub error: Option<String>,
    pub submitted: bool,
}

impl WizardState {
    pub fn new(today: Date) -> Self {
        Self {
            step: WizardStep::DateSelect,
            date: today,
            today,
            projects: Vec::new(),
            selected: None,
            search: TextField::default(),
            time_range: TextField::default(),
            task: TextField::default(),
            suggestions: Vec::new(),
            cursor: ListCursor::new(PROJECT_PAGE_ROWS),
            loading: false,
            loaded: false,
            error: None,
            submitted: false,
        }
    }

    /// Projects whose name contains the search query, case-insensitively.
    /// An empty query returns the full list in its original order.
    pub fn filtered_projects(&self) -> Vec<&Project> {
        let query = self.search.value().trim().to_lowercase();
        if query.is_empty() {
            return self.projects.iter().collect();
        }
        self.projects
            .iter()
            .filter(|project| project.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.loaded = true;
    }

    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        self.loading = false;
        self.cursor.clamp(self.filtered_projects().len());
    }

    pub fn set_suggestions(&mut self, descriptions: Vec<String>) {
        self.suggestions = descriptions;
    }

    pub fn complete_submission(&mut self) {
        self.step = WizardStep::Complete;
        self.submitted = true;
    }

    /// True while the project search owns `Esc` (clear and blur instead of
    /// letting the host close the dialog).
    pub fn consumes_esc(&self) -> bool {
        self.step == WizardStep::ProjectSelect && self.search.focused()
    }

    /// True while a text field owns the keyboard, which also captures `q`.
    pub fn capturing_text(&self) -> bool {
        match self.step {
            WizardStep::TimeInput => true,
            WizardStep::TaskInput => true,
            WizardStep::ProjectSelect => self.search.focused(),
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: Key) -> WizardAction {
        if self.step == WizardStep::Complete {
            return WizardAction::None;
        }

        if self.capturing_text() {
            return self.handle_text_key(key);
        }

        match key {
            Key::Char('q') => WizardAction::RequestQuit,
            Key::Char('t') => {
                if self.step == WizardStep::DateSelect {
                    self.date = self.today;
                }
                WizardAction::None
            }
            Key::Left | Key::Char('h') => {
                if self.step == WizardStep::DateSelect {
                    self.date = self.date.previous_day().unwrap_or(self.date);
                }
                WizardAction::None
            }
            Key::Right | Key::Char('l') => {
                if self.step == WizardStep::DateSelect {
                    self.date = self.date.next_day().unwrap_or(self.date);
                }
                WizardAction::None
            }
            Key::Up | Key::Char('k') => {
                if self.step == WizardStep::ProjectSelect {
                    self.cursor.move_up();
                }
                WizardAction::None
            }
            Key::Down | Key::Char('j') => {
                if self.step == WizardStep::ProjectSelect {
                    let len = self.filtered_projects().len();
                    self.cursor.move_down(len);
                }
                WizardAction::None
            }
            Key::Char('/') => {
                if self.step == WizardStep::ProjectSelect {
                    self.search.focus();
                }
                WizardAction::None
            }
            Key::Enter => self.confirm_step(),
            _ => WizardAction::None,
        }
    }

    fn handle_text_key(&mut self, key: Key) -> WizardAction {
        match key {
            Key::Enter => return self.confirm_step(),
            Key::Esc => {
                if self.step == WizardStep::ProjectSelect && self.search.focused() {
                    self.search.blur();
                    self.search.clear();
                    self.cursor.reset();
                }
                return WizardAction::None;
            }
            _ => {}
        }

        let changed = match self.step {
            WizardStep::TimeInput => self.time_range.handle_key(key),
            WizardStep::TaskInput => self.task.handle_key(key),
            WizardStep::ProjectSelect => {
                let changed = self.search.handle_key(key);
                if changed {
                    self.cursor.reset();
                }
                changed
            }
            _ => false,
        };
        if changed {
            self.error = None;
        }
        WizardAction::None
    }

    fn confirm_step(&mut self) -> WizardAction {
        self.error = None;
        match self.step {
            WizardStep::DateSelect => {
                self.step = WizardStep::ProjectSelect;
                self.cursor.reset();
                WizardAction::None
            }
            WizardStep::ProjectSelect => {
                if self.search.focused() {
                    self.search.blur();
                    return WizardAction::None;
                }
                let filtered = self.filtered_projects();
                if let Some(project) = filtered.get(self.cursor.cursor()) {
                    self.selected = Some((*project).clone());
                    self.step = WizardStep::TimeInput;
                    self.time_range.focus();
                }
                WizardAction::None
            }
            WizardStep::TimeInput => {
                if self.time_range.is_empty() {
                    self.error = Some("enter a time range like 9a - 5p".to_owned());
                    return WizardAction::None;
                }
                if let Err(error) = timerange::parse_time_range(self.time_range.value(), self.date)
                {
                    self.error = Some(error.to_string());
                    return WizardAction::None;
                }
                self.step = WizardStep::TaskInput;
                self.time_range.blur();
                self.task.focus();
                WizardAction::None
            }
            WizardStep::TaskInput => {
                if self.task.is_empty() {
                    self.error = Some("enter a task description".to_owned());
                    return WizardAction::None;
                }
                self.step = WizardStep::Confirm;
                self.task.blur();
                WizardAction::None
            }
            WizardStep::Confirm => WizardAction::Submit,
            WizardStep::Complete => WizardAction::None,
        }
    }
}
