// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;

use crate::{
    Command, EntrySummary, FocusPane, Identity, Key, ListCursor, LoadedData, Message, Project,
    ViewId, WizardAction, WizardState,
};

pub const ENTRY_MODAL_WIDTH: usize = 60;
pub const ENTRY_MODAL_HEIGHT: usize = 20;
const ENTRY_PAGE_ROWS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Help,
    EntryForm,
}

/// A dialog box layered over the active view. The top of `App.modal_stack`
/// receives input; the entry form's body is produced from wizard state every
/// frame, so only the help dialog carries static body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub body: Vec<String>,
    pub width: usize,
    pub height: usize,
    pub kind: ModalKind,
}

impl Modal {
    pub fn help() -> Self {
        let body: Vec<String> = [
            "tab        switch focus sidebar/content",
            "esc        focus the sidebar, close dialogs",
            "enter      open the highlighted item",
            "j/k, ↓/↑   move within lists",
            "n          new time entry (in Time Entries)",
            "?          toggle this help",
            "q, ctrl+c  quit",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect();
        let height = body.len() + 4;
        Self {
            title: "Help".to_owned(),
            body,
            width: 48,
            height,
            kind: ModalKind::Help,
        }
    }

    pub fn entry_form() -> Self {
        Self {
            title: "New Time Entry".to_owned(),
            body: Vec::new(),
            width: ENTRY_MODAL_WIDTH,
            height: ENTRY_MODAL_HEIGHT,
            kind: ModalKind::EntryForm,
        }
    }
}

/// Fixed navigation list on the left edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub cursor: ListCursor,
}

impl Sidebar {
    pub fn new(rows: usize) -> Self {
        Self {
            cursor: ListCursor::new(rows),
        }
    }

    pub fn items(&self) -> &'static [ViewId] {
        &ViewId::ALL
    }

    pub fn selected_item(&self) -> Option<ViewId> {
        self.items().get(self.cursor.cursor()).copied()
    }

    fn handle_key(&mut self, key: Key) -> Vec<Command> {
        match key {
            Key::Up | Key::Char('k') => self.cursor.move_up(),
            Key::Down | Key::Char('j') => self.cursor.move_down(self.items().len()),
            Key::Enter => {
                if let Some(view) = self.selected_item() {
                    return vec![Command::Emit(Message::Navigate(view))];
                }
            }
            _ => {}
        }
        Vec::new()
    }
}

/// Owns the active view and its one-time initialization flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    pub active: ViewId,
    initialized: [bool; ViewId::ALL.len()],
}

impl Router {
    fn new() -> Self {
        let mut initialized = [false; ViewId::ALL.len()];
        initialized[Self::index(ViewId::Dashboard)] = true;
        Self {
            active: ViewId::Dashboard,
            initialized,
        }
    }

    fn index(view: ViewId) -> usize {
        match view {
            ViewId::Dashboard => 0,
            ViewId::TimeList => 1,
            ViewId::Reports => 2,
        }
    }

    /// Switches the active view. Returns true on the view's first entry.
    fn activate(&mut self, view: ViewId) -> bool {
        self.active = view;
        let first = !self.initialized[Self::index(view)];
        self.initialized[Self::index(view)] = true;
        first
    }
}

/// State behind the recent-entries view: the fetched summaries plus the
/// projects needed to resolve their names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeListState {
    pub entries: Vec<EntrySummary>,
    pub projects: Vec<Project>,
    pub cursor: ListCursor,
    pub loading: bool,
}

impl TimeListState {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            projects: Vec::new(),
            cursor: ListCursor::new(ENTRY_PAGE_ROWS),
            loading: false,
        }
    }

    pub fn project_name(&self, project_id: &str) -> Option<&str> {
        self.projects
            .iter()
            .find(|project| project.id == project_id)
            .map(|project| project.name.as_str())
    }

    fn handle_key(&mut self, key: Key) -> Vec<Command> {
        match key {
            Key::Up | Key::Char('k') => self.cursor.move_up(),
            Key::Down | Key::Char('j') => self.cursor.move_down(self.entries.len()),
            Key::Char('n') => return vec![Command::Emit(Message::OpenEntryForm)],
            _ => {}
        }
        Vec::new()
    }
}

/// The single application state. Mutated only inside [`App::update`]; the
/// renderer reads it immutably between messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub focus: FocusPane,
    pub sidebar: Sidebar,
    pub router: Router,
    pub time_list: TimeListState,
    pub wizard: Option<WizardState>,
    pub modal_stack: Vec<Modal>,
    pub identity: Option<Identity>,
    pub width: u16,
    pub height: u16,
    pub today: Date,
    pub quitting: bool,
    pub fatal_error: Option<String>,
    generation: u64,
}

impl App {
    pub fn new(today: Date, sidebar_rows: usize) -> Self {
        Self {
            focus: FocusPane::Sidebar,
            sidebar: Sidebar::new(sidebar_rows),
            router: Router::new(),
            time_list: TimeListState::new(),
            wizard: None,
            modal_stack: Vec::new(),
            identity: None,
            width: 80,
            height: 24,
            today,
            quitting: false,
            fatal_error: None,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn top_modal(&self) -> Option<&Modal> {
        self.modal_stack.last()
    }

    pub fn update(&mut self, message: Message) -> Vec<Command> {
        match message {
            Message::Key(key) => self.handle_key(key),
            Message::Resize { width, height } => {
                self.width = width;
                self.height = height;
                Vec::new()
            }
            Message::Navigate(view) => self.navigate(view),
            Message::OpenEntryForm => self.open_entry_form(),
            Message::DataLoaded { generation, data } => {
                // Results from an abandoned loading context are dropped.
                if generation != self.generation {
                    return Vec::new();
                }
                self.apply_loaded(data)
            }
            Message::OperationFailed { error } => {
                self.fatal_error = Some(error);
                self.quitting = true;
                Vec::new()
            }
            Message::Quit => {
                self.quitting = true;
                Vec::new()
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> Vec<Command> {
        if key == Key::CtrlC {
            self.quitting = true;
            return Vec::new();
        }

        if let Some(modal) = self.modal_stack.last() {
            return self.handle_modal_key(modal.kind, key);
        }

        match key {
            Key::Char('?') => {
                self.modal_stack.push(Modal::help());
                Vec::new()
            }
            Key::Char('q') => {
                self.quitting = true;
                Vec::new()
            }
            Key::Tab => {
                self.focus = match self.focus {
                    FocusPane::Sidebar => FocusPane::Content,
                    FocusPane::Content => FocusPane::Sidebar,
                };
                Vec::new()
            }
            Key::Esc => {
                self.focus = FocusPane::Sidebar;
                Vec::new()
            }
            key => match self.focus {
                FocusPane::Sidebar => self.sidebar.handle_key(key),
                FocusPane::Content => match self.router.active {
                    ViewId::TimeList => self.time_list.handle_key(key),
                    ViewId::Dashboard | ViewId::Reports => Vec::new(),
                },
            },
        }
    }

    fn handle_modal_key(&mut self, kind: ModalKind, key: Key) -> Vec<Command> {
        match kind {
            ModalKind::Help => {
                if matches!(key, Key::Esc | Key::Char('?')) {
                    self.modal_stack.pop();
                }
                Vec::new()
            }
            ModalKind::EntryForm => {
                let Some(wizard) = self.wizard.as_mut() else {
                    self.modal_stack.pop();
                    return Vec::new();
                };
                if key == Key::Esc && !wizard.consumes_esc() {
                    return self.close_entry_form();
                }
                match wizard.handle_key(key) {
                    WizardAction::None => Vec::new(),
                    WizardAction::RequestQuit => {
                        self.quitting = true;
                        Vec::new()
                    }
                    WizardAction::Submit => self.submit_entry(),
                }
            }
        }
    }

    fn navigate(&mut self, view: ViewId) -> Vec<Command> {
        let first = self.router.activate(view);
        if view != ViewId::TimeList {
            return Vec::new();
        }
        self.focus = FocusPane::Content;
        if first { self.begin_time_list_load() } else { Vec::new() }
    }

    fn begin_time_list_load(&mut self) -> Vec<Command> {
        self.generation += 1;
        self.time_list.loading = true;
        match &self.identity {
            Some(_) => self.time_list_fetches(),
            None => vec![Command::FetchIdentity {
                generation: self.generation,
            }],
        }
    }

    fn time_list_fetches(&self) -> Vec<Command> {
        let Some(identity) = &self.identity else {
            return Vec::new();
        };
        vec![
            Command::FetchEntries {
                generation: self.generation,
                workspace_id: identity.workspace_id.clone(),
                user_id: identity.user_id.clone(),
            },
            Command::FetchProjects {
                generation: self.generation,
                workspace_id: identity.workspace_id.clone(),
            },
        ]
    }

    fn wizard_fetches(&self) -> Vec<Command> {
        let Some(identity) = &self.identity else {
            return Vec::new();
        };
        vec![
            Command::FetchProjects {
                generation: self.generation,
                workspace_id: identity.workspace_id.clone(),
            },
            Command::FetchDescriptions {
                generation: self.generation,
                workspace_id: identity.workspace_id.clone(),
                user_id: identity.user_id.clone(),
            },
        ]
    }

    fn open_entry_form(&mut self) -> Vec<Command> {
        if self
            .modal_stack
            .iter()
            .any(|modal| modal.kind == ModalKind::EntryForm)
        {
            return Vec::new();
        }
        self.modal_stack.push(Modal::entry_form());
        let wizard = self.wizard.get_or_insert_with(|| WizardState::new(self.today));
        if wizard.loaded {
            return Vec::new();
        }
        self.generation += 1;
        wizard.begin_loading();
        if self.identity.is_some() {
            self.wizard_fetches()
        } else {
            vec![Command::FetchIdentity {
                generation: self.generation,
            }]
        }
    }

    /// Pops the entry-form dialog. If the entry list was abandoned
    /// mid-load (its results were dropped as stale while the form was
    /// open), its fetches are re-issued under a fresh token so the view
    /// cannot stay stuck on the busy line. The bump also strands any
    /// in-flight wizard loads, so those are re-issued alongside; the
    /// project fetch is shared, only the descriptions need their own.
    fn close_entry_form(&mut self) -> Vec<Command> {
        self.modal_stack.pop();
        if !self.time_list.loading {
            return Vec::new();
        }
        self.generation += 1;
        let Some(identity) = &self.identity else {
            return vec![Command::FetchIdentity {
                generation: self.generation,
            }];
        };
        let mut commands = self.time_list_fetches();
        if self.wizard.as_ref().is_some_and(|wizard| wizard.loading) {
            commands.push(Command::FetchDescriptions {
                generation: self.generation,
                workspace_id: identity.workspace_id.clone(),
                user_id: identity.user_id.clone(),
            });
        }
        commands
    }

    fn submit_entry(&mut self) -> Vec<Command> {
        let Some(wizard) = self.wizard.as_mut() else {
            return Vec::new();
        };
        let Some(identity) = &self.identity else {
            wizard.error = Some("still connecting, try again".to_owned());
            return Vec::new();
        };
        let Some(project) = &wizard.selected else {
            wizard.error = Some("no project selected".to_owned());
            return Vec::new();
        };
        vec![Command::SubmitEntry {
            generation: self.generation,
            workspace_id: identity.workspace_id.clone(),
            project_id: project.id.clone(),
            description: wizard.task.value().to_owned(),
            time_range: wizard.time_range.value().to_owned(),
            date: wizard.date,
        }]
    }

    fn apply_loaded(&mut self, data: LoadedData) -> Vec<Command> {
        match data {
            LoadedData::Identity(identity) => {
                self.identity = Some(identity);
                let mut commands = Vec::new();
                if self.wizard.as_ref().is_some_and(|wizard| wizard.loading) {
                    commands.extend(self.wizard_fetches());
                }
                if self.time_list.loading {
                    commands.extend(self.time_list_fetches());
                }
                commands
            }
            LoadedData::Projects(projects) => {
                if let Some(wizard) = self.wizard.as_mut()
                    && wizard.loading
                {
                    wizard.set_projects(projects.clone());
                }
                self.time_list.projects = projects;
                Vec::new()
            }
            LoadedData::Descriptions(descriptions) => {
                if let Some(wizard) = self.wizard.as_mut() {
                    wizard.set_suggestions(descriptions);
                }
                Vec::new()
            }
            LoadedData::Entries(entries) => {
                self.time_list.entries = entries;
                self.time_list.loading = false;
                self.time_list.cursor.clamp(self.time_list.entries.len());
                Vec::new()
            }
            LoadedData::SubmitAck => {
                if let Some(wizard) = self.wizard.as_mut() {
                    wizard.complete_submission();
                }
                self.quitting = true;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{App, ModalKind};
    use crate::{
        Command, EntrySummary, FocusPane, Identity, Key, LoadedData, Message, Project, ViewId,
        WizardStep,
    };
    use time::{Date, Month};

    fn today() -> Date {
        Date::from_calendar_date(2024, Month::January, 15).expect("valid date")
    }

    fn app() -> App {
        App::new(today(), 10)
    }

    fn identity() -> Identity {
        Identity {
            workspace_id: "ws1".to_owned(),
            user_id: "u1".to_owned(),
        }
    }

    fn press(app: &mut App, key: Key) -> Vec<Command> {
        app.update(Message::Key(key))
    }

    fn loaded(app: &mut App, data: LoadedData) -> Vec<Command> {
        app.update(Message::DataLoaded {
            generation: app.generation(),
            data,
        })
    }

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_owned(),
            name: name.to_owned(),
            client_id: String::new(),
            client_name: String::new(),
        }
    }

    #[test]
    fn tab_toggles_focus_and_esc_resets_it() {
        let mut app = app();
        assert_eq!(app.focus, FocusPane::Sidebar);

        press(&mut app, Key::Tab);
        assert_eq!(app.focus, FocusPane::Content);
        press(&mut app, Key::Tab);
        assert_eq!(app.focus, FocusPane::Sidebar);

        press(&mut app, Key::Tab);
        press(&mut app, Key::Esc);
        assert_eq!(app.focus, FocusPane::Sidebar);
        press(&mut app, Key::Esc);
        assert_eq!(app.focus, FocusPane::Sidebar);
    }

    #[test]
    fn sidebar_enter_emits_navigation_for_the_highlighted_item() {
        let mut app = app();
        press(&mut app, Key::Char('j'));
        let commands = press(&mut app, Key::Enter);
        assert_eq!(
            commands,
            vec![Command::Emit(Message::Navigate(ViewId::TimeList))]
        );
    }

    #[test]
    fn first_navigation_to_time_list_fetches_identity_then_data() {
        let mut app = app();
        let commands = app.update(Message::Navigate(ViewId::TimeList));
        assert_eq!(app.focus, FocusPane::Content);
        assert!(app.time_list.loading);
        assert_eq!(commands, vec![Command::FetchIdentity { generation: 1 }]);

        let commands = loaded(&mut app, LoadedData::Identity(identity()));
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], Command::FetchEntries { generation: 1, .. }));
        assert!(matches!(commands[1], Command::FetchProjects { generation: 1, .. }));

        // Revisiting the view does not refetch.
        app.update(Message::Navigate(ViewId::Dashboard));
        let commands = app.update(Message::Navigate(ViewId::TimeList));
        assert!(commands.is_empty());
    }

    #[test]
    fn stale_generation_results_are_dropped() {
        let mut app = app();
        app.update(Message::Navigate(ViewId::TimeList));
        loaded(&mut app, LoadedData::Identity(identity()));

        // The wizard opening starts a newer loading context.
        app.update(Message::Key(Key::Tab));
        let commands = app.update(Message::OpenEntryForm);
        assert!(!commands.is_empty());
        assert_eq!(app.generation(), 2);

        let commands = app.update(Message::DataLoaded {
            generation: 1,
            data: LoadedData::Entries(vec![EntrySummary {
                id: "e1".to_owned(),
                description: "old".to_owned(),
                project_id: "p1".to_owned(),
                start: "2024-01-15T09:00:00Z".to_owned(),
                end: None,
            }]),
        });
        assert!(commands.is_empty());
        assert!(app.time_list.entries.is_empty());
        assert!(app.time_list.loading);
    }

    #[test]
    fn closing_the_form_mid_load_reissues_the_list_fetches() {
        let mut app = app();
        app.update(Message::Navigate(ViewId::TimeList));
        loaded(&mut app, LoadedData::Identity(identity()));
        app.update(Message::OpenEntryForm);
        assert!(app.time_list.loading);

        let commands = press(&mut app, Key::Esc);
        assert!(app.modal_stack.is_empty());
        assert_eq!(app.generation(), 3);
        assert!(matches!(commands[0], Command::FetchEntries { generation: 3, .. }));
        assert!(matches!(commands[1], Command::FetchProjects { generation: 3, .. }));
    }

    #[test]
    fn closing_the_form_mid_load_keeps_the_suggestion_fetch_alive() {
        let mut app = app();
        app.update(Message::Navigate(ViewId::TimeList));
        loaded(&mut app, LoadedData::Identity(identity()));
        app.update(Message::OpenEntryForm);

        // The close bumps the generation, stranding the wizard's own
        // in-flight loads; the descriptions must be re-requested too.
        let commands = press(&mut app, Key::Esc);
        assert!(commands.iter().any(|command| matches!(
            command,
            Command::FetchDescriptions { generation: 3, .. }
        )));

        app.update(Message::DataLoaded {
            generation: 2,
            data: LoadedData::Descriptions(vec!["dropped".to_owned()]),
        });
        loaded(&mut app, LoadedData::Projects(vec![project("p1", "Website")]));
        loaded(&mut app, LoadedData::Descriptions(vec!["standup".to_owned()]));
        loaded(&mut app, LoadedData::Entries(Vec::new()));

        let commands = app.update(Message::OpenEntryForm);
        assert!(commands.is_empty());
        let wizard = app.wizard.as_ref().expect("wizard kept");
        assert_eq!(wizard.suggestions, vec!["standup"]);
    }

    #[test]
    fn question_mark_toggles_the_help_dialog_and_swallows_keys() {
        let mut app = app();
        press(&mut app, Key::Char('?'));
        assert_eq!(app.top_modal().map(|modal| modal.kind), Some(ModalKind::Help));

        // Keys other than the closers are swallowed, not routed.
        let commands = press(&mut app, Key::Tab);
        assert!(commands.is_empty());
        assert_eq!(app.focus, FocusPane::Sidebar);

        press(&mut app, Key::Char('?'));
        assert!(app.modal_stack.is_empty());

        press(&mut app, Key::Char('?'));
        press(&mut app, Key::Esc);
        assert!(app.modal_stack.is_empty());
    }

    #[test]
    fn q_and_ctrl_c_quit_outside_text_entry() {
        let mut app = app();
        press(&mut app, Key::Char('q'));
        assert!(app.quitting);

        let mut app = App::new(today(), 10);
        press(&mut app, Key::CtrlC);
        assert!(app.quitting);
    }

    #[test]
    fn ctrl_c_quits_even_inside_the_help_dialog() {
        let mut app = app();
        press(&mut app, Key::Char('?'));
        press(&mut app, Key::CtrlC);
        assert!(app.quitting);
    }

    #[test]
    fn opening_the_form_loads_once_and_reopening_does_not_refetch() {
        let mut app = app();
        app.update(Message::Navigate(ViewId::TimeList));
        loaded(&mut app, LoadedData::Identity(identity()));
        loaded(&mut app, LoadedData::Entries(Vec::new()));

        let commands = app.update(Message::OpenEntryForm);
        assert_eq!(app.generation(), 2);
        assert!(matches!(commands[0], Command::FetchProjects { generation: 2, .. }));
        assert!(matches!(
            commands[1],
            Command::FetchDescriptions { generation: 2, .. }
        ));

        loaded(&mut app, LoadedData::Projects(vec![project("p1", "Website")]));
        loaded(&mut app, LoadedData::Descriptions(vec!["standup".to_owned()]));

        press(&mut app, Key::Esc);
        let commands = app.update(Message::OpenEntryForm);
        assert!(commands.is_empty());
        let wizard = app.wizard.as_ref().expect("wizard kept");
        assert!(wizard.loaded);
        assert_eq!(wizard.projects.len(), 1);
    }

    #[test]
    fn wizard_flow_submits_and_ack_completes_and_quits() {
        let mut app = app();
        app.update(Message::Navigate(ViewId::TimeList));
        loaded(&mut app, LoadedData::Identity(identity()));
        loaded(&mut app, LoadedData::Entries(Vec::new()));
        app.update(Message::OpenEntryForm);
        loaded(&mut app, LoadedData::Projects(vec![project("p1", "Website")]));

        press(&mut app, Key::Enter); // date -> project
        press(&mut app, Key::Enter); // select project -> time
        for ch in "9a - 5p".chars() {
            press(&mut app, Key::Char(ch));
        }
        press(&mut app, Key::Enter); // time -> task
        for ch in "standup".chars() {
            press(&mut app, Key::Char(ch));
        }
        press(&mut app, Key::Enter); // task -> confirm

        let commands = press(&mut app, Key::Enter);
        match &commands[0] {
            Command::SubmitEntry {
                workspace_id,
                project_id,
                description,
                time_range,
                date,
                ..
            } => {
                assert_eq!(workspace_id, "ws1");
                assert_eq!(project_id, "p1");
                assert_eq!(description, "standup");
                assert_eq!(time_range, "9a - 5p");
                assert_eq!(*date, today());
            }
            other => panic!("expected a submit command, got {other:?}"),
        }

        loaded(&mut app, LoadedData::SubmitAck);
        let wizard = app.wizard.as_ref().expect("wizard kept");
        assert_eq!(wizard.step, WizardStep::Complete);
        assert!(wizard.submitted);
        assert!(app.quitting);
    }

    #[test]
    fn q_typed_into_a_wizard_field_does_not_quit() {
        let mut app = app();
        app.update(Message::Navigate(ViewId::TimeList));
        loaded(&mut app, LoadedData::Identity(identity()));
        app.update(Message::OpenEntryForm);
        loaded(&mut app, LoadedData::Projects(vec![project("p1", "Website")]));

        press(&mut app, Key::Enter);
        press(&mut app, Key::Enter);
        press(&mut app, Key::Char('q'));
        assert!(!app.quitting);
        let wizard = app.wizard.as_ref().expect("wizard open");
        assert_eq!(wizard.time_range.value(), "q");
    }

    #[test]
    fn esc_inside_project_search_stays_in_the_dialog() {
        let mut app = app();
        app.update(Message::Navigate(ViewId::TimeList));
        loaded(&mut app, LoadedData::Identity(identity()));
        app.update(Message::OpenEntryForm);
        loaded(&mut app, LoadedData::Projects(vec![project("p1", "Website")]));

        press(&mut app, Key::Enter);
        press(&mut app, Key::Char('/'));
        press(&mut app, Key::Char('w'));
        press(&mut app, Key::Esc);
        assert_eq!(app.top_modal().map(|modal| modal.kind), Some(ModalKind::EntryForm));

        press(&mut app, Key::Esc);
        assert!(app.modal_stack.is_empty());
    }

    #[test]
    fn n_in_the_entry_list_opens_the_form() {
        let mut app = app();
        app.update(Message::Navigate(ViewId::TimeList));
        let commands = press(&mut app, Key::Char('n'));
        assert_eq!(commands, vec![Command::Emit(Message::OpenEntryForm)]);
    }

    #[test]
    fn operation_failure_is_fatal() {
        let mut app = app();
        app.update(Message::OperationFailed {
            error: "request to https://example.invalid failed".to_owned(),
        });
        assert!(app.quitting);
        assert!(app.fatal_error.as_deref().is_some_and(|error| error.contains("failed")));
    }

    #[test]
    fn resize_updates_the_frame_bounds() {
        let mut app = app();
        app.update(Message::Resize {
            width: 120,
            height: 40,
        });
        assert_eq!((app.width, app.height), (120, 40));
    }
}
