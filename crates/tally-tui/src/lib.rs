// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, ClearType, disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, execute, queue};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;
use time::Date;

use tally_app::{
    App, Command, EntrySummary, FocusPane, Identity, Key, LoadedData, Message, Modal, ModalKind,
    Project, ViewId, WizardState, WizardStep,
};

pub mod compositor;
pub mod theme;

pub use theme::Theme;

const SIDEBAR_WIDTH: usize = 22;
const POLL_INTERVAL: Duration = Duration::from_millis(120);

/// The remote collaborator as the loop sees it. Implementations are shared
/// across concurrent command workers, so calls take `&self`.
pub trait TimeService: Send + Sync {
    fn fetch_identity(&self) -> Result<Identity>;
    fn fetch_projects(&self, workspace_id: &str) -> Result<Vec<Project>>;
    fn fetch_descriptions(&self, workspace_id: &str, user_id: &str) -> Result<Vec<String>>;
    fn fetch_entries(&self, workspace_id: &str, user_id: &str) -> Result<Vec<EntrySummary>>;
    fn submit_entry(
        &self,
        workspace_id: &str,
        project_id: &str,
        description: &str,
        time_range: &str,
        date: Date,
    ) -> Result<()>;
}

/// Runs the dashboard until the user quits or an operation fails. The
/// terminal is restored before returning either way; a fatal operation error
/// comes back as `Err` after its frame has been drawn.
pub fn run_app<S: TimeService + 'static>(
    app: &mut App,
    service: Arc<S>,
    theme: &Theme,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)
        .context("enter alternate screen")?;

    let result = event_loop(app, &service, theme, &mut stdout);

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show)
        .context("leave alternate screen")?;
    result
}

fn event_loop<S: TimeService + 'static>(
    app: &mut App,
    service: &Arc<S>,
    theme: &Theme,
    stdout: &mut io::Stdout,
) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let (width, height) = terminal::size().context("query terminal size")?;
    dispatch(app, Message::Resize { width, height }, service, &tx);

    loop {
        while let Ok(message) = rx.try_recv() {
            dispatch(app, message, service, &tx);
        }

        let frame = render(app, theme);
        draw_frame(stdout, &frame)?;

        if app.quitting {
            break;
        }

        if event::poll(POLL_INTERVAL).context("poll event")? {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if let Some(key) = translate_key(key) {
                        dispatch(app, Message::Key(key), service, &tx);
                    }
                }
                Event::Resize(width, height) => {
                    dispatch(app, Message::Resize { width, height }, service, &tx);
                }
                _ => {}
            }
        }
    }

    if let Some(error) = &app.fatal_error {
        bail!("{error}");
    }
    Ok(())
}

fn draw_frame(stdout: &mut io::Stdout, frame: &[String]) -> Result<()> {
    queue!(stdout, cursor::MoveTo(0, 0)).context("position cursor")?;
    for line in frame {
        queue!(
            stdout,
            terminal::Clear(ClearType::UntilNewLine),
            Print(line),
            cursor::MoveToNextLine(1)
        )
        .context("queue frame line")?;
    }
    stdout.flush().context("flush frame")?;
    Ok(())
}

fn dispatch<S: TimeService + 'static>(
    app: &mut App,
    message: Message,
    service: &Arc<S>,
    tx: &Sender<Message>,
) {
    for command in app.update(message) {
        execute_command(command, service, tx);
    }
}

/// Starts one worker per async command; each re-enters the loop as exactly
/// one message. `Emit` short-circuits through the same channel.
fn execute_command<S: TimeService + 'static>(
    command: Command,
    service: &Arc<S>,
    tx: &Sender<Message>,
) {
    match command {
        Command::Emit(message) => {
            let _ = tx.send(message);
        }
        Command::FetchIdentity { generation } => {
            let service = Arc::clone(service);
            spawn_fetch(tx, generation, move || {
                service.fetch_identity().map(LoadedData::Identity)
            });
        }
        Command::FetchProjects {
            generation,
            workspace_id,
        } => {
            let service = Arc::clone(service);
            spawn_fetch(tx, generation, move || {
                service.fetch_projects(&workspace_id).map(LoadedData::Projects)
            });
        }
        Command::FetchDescriptions {
            generation,
            workspace_id,
            user_id,
        } => {
            let service = Arc::clone(service);
            spawn_fetch(tx, generation, move || {
                service
                    .fetch_descriptions(&workspace_id, &user_id)
                    .map(LoadedData::Descriptions)
            });
        }
        Command::FetchEntries {
            generation,
            workspace_id,
            user_id,
        } => {
            let service = Arc::clone(service);
            spawn_fetch(tx, generation, move || {
                service
                    .fetch_entries(&workspace_id, &user_id)
                    .map(LoadedData::Entries)
            });
        }
        Command::SubmitEntry {
            generation,
            workspace_id,
            project_id,
            description,
            time_range,
            date,
        } => {
            let service = Arc::clone(service);
            spawn_fetch(tx, generation, move || {
                service
                    .submit_entry(&workspace_id, &project_id, &description, &time_range, date)
                    .map(|()| LoadedData::SubmitAck)
            });
        }
    }
}

fn spawn_fetch(
    tx: &Sender<Message>,
    generation: u64,
    work: impl FnOnce() -> Result<LoadedData> + Send + 'static,
) {
    let tx = tx.clone();
    thread::spawn(move || {
        let message = match work() {
            Ok(data) => Message::DataLoaded { generation, data },
            Err(error) => Message::OperationFailed {
                error: format!("{error:#}"),
            },
        };
        let _ = tx.send(message);
    });
}

fn translate_key(key: KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Key::CtrlC),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(ch) => Some(Key::Char(ch)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

/// Renders the whole frame from the current state. Pure: same state and
/// theme, same lines.
pub fn render(app: &App, theme: &Theme) -> Vec<String> {
    let width = app.width as usize;
    let height = app.height as usize;

    if let Some(error) = &app.fatal_error {
        return error_frame(error, theme, height);
    }

    let body_height = height.saturating_sub(1);
    let sidebar_width = SIDEBAR_WIDTH.min(width / 2);
    let content_width = width.saturating_sub(sidebar_width);

    let sidebar = sidebar_panel(app, theme, sidebar_width, body_height);
    let content = content_panel(app, theme, content_width, body_height);
    let mut frame = join_horizontal(&sidebar, &content);
    frame.push(footer_line(theme));

    for modal in &app.modal_stack {
        let dialog = modal_box(app, modal, theme);
        frame = compositor::overlay(&frame, &dialog, width, height);
    }
    frame
}

fn error_frame(error: &str, theme: &Theme, height: usize) -> Vec<String> {
    let mut frame = vec![
        String::new(),
        format!("  {}", "error".style(theme.error)),
        String::new(),
        format!("  {error}"),
    ];
    while frame.len() < height {
        frame.push(String::new());
    }
    frame
}

fn sidebar_panel(app: &App, theme: &Theme, width: usize, height: usize) -> Vec<String> {
    let focused = app.focus == FocusPane::Sidebar && app.modal_stack.is_empty();
    let mut body = Vec::new();
    let items = app.sidebar.items();
    for index in app.sidebar.cursor.visible_range(items.len()) {
        let view = items[index];
        let active_mark = if view == app.router.active { "•" } else { " " };
        let row = format!(" {active_mark} {}", view.label());
        if index == app.sidebar.cursor.cursor() && focused {
            body.push(styled(&pad_to(&row, width.saturating_sub(2)), theme.selected));
        } else {
            body.push(row);
        }
    }
    boxed("tally", &body, width, height, theme, focused)
}

fn content_panel(app: &App, theme: &Theme, width: usize, height: usize) -> Vec<String> {
    let focused = app.focus == FocusPane::Content && app.modal_stack.is_empty();
    let body = match app.router.active {
        ViewId::Dashboard => dashboard_lines(theme),
        ViewId::TimeList => time_list_lines(app, theme, width.saturating_sub(4)),
        ViewId::Reports => vec![styled("reports are not available yet", theme.dim)],
    };
    boxed(app.router.active.label(), &body, width, height, theme, focused)
}

fn dashboard_lines(theme: &Theme) -> Vec<String> {
    vec![
        "Welcome to tally.".to_owned(),
        String::new(),
        "Track your time without leaving the terminal.".to_owned(),
        String::new(),
        styled("enter  open the highlighted view", theme.dim),
        styled("tab    jump between panes", theme.dim),
        styled("?      all key bindings", theme.dim),
    ]
}

fn time_list_lines(app: &App, theme: &Theme, width: usize) -> Vec<String> {
    let list = &app.time_list;
    if list.loading {
        return vec![styled("loading entries…", theme.dim)];
    }
    if list.entries.is_empty() {
        return vec![
            "no entries yet".to_owned(),
            String::new(),
            styled("n  create the first one", theme.dim),
        ];
    }

    let mut lines = Vec::new();
    for index in list.cursor.visible_range(list.entries.len()) {
        let entry = &list.entries[index];
        let date = entry.start.get(..10).unwrap_or(&entry.start);
        let project = list.project_name(&entry.project_id).unwrap_or("(no project)");
        let state = if entry.end.is_none() { " [running]" } else { "" };
        let row = format!(" {date}  {project:<18.18}  {}{state}", entry.description);
        let row = pad_to(&row, width);
        if index == list.cursor.cursor() && app.focus == FocusPane::Content {
            lines.push(styled(&row, theme.selected));
        } else {
            lines.push(row);
        }
    }
    lines
}

fn footer_line(theme: &Theme) -> String {
    styled(
        " tab focus · enter open · n new entry · ? help · q quit",
        theme.dim,
    )
}

fn modal_box(app: &App, modal: &Modal, theme: &Theme) -> Vec<String> {
    let body = match modal.kind {
        ModalKind::Help => modal.body.clone(),
        ModalKind::EntryForm => app
            .wizard
            .as_ref()
            .map(|wizard| wizard_lines(wizard, theme))
            .unwrap_or_default(),
    };
    boxed(&modal.title, &body, modal.width, modal.height, theme, true)
}

fn step_number(step: WizardStep) -> usize {
    match step {
        WizardStep::DateSelect => 1,
        WizardStep::ProjectSelect => 2,
        WizardStep::TimeInput => 3,
        WizardStep::TaskInput => 4,
        WizardStep::Confirm => 5,
        WizardStep::Complete => 6,
    }
}

fn step_title(step: WizardStep) -> &'static str {
    match step {
        WizardStep::DateSelect => "pick a date",
        WizardStep::ProjectSelect => "pick a project",
        WizardStep::TimeInput => "when",
        WizardStep::TaskInput => "what",
        WizardStep::Confirm => "confirm",
        WizardStep::Complete => "done",
    }
}

fn wizard_lines(wizard: &WizardState, theme: &Theme) -> Vec<String> {
    let mut lines = vec![
        styled(
            &format!("step {}/6  {}", step_number(wizard.step), step_title(wizard.step)),
            theme.accent,
        ),
        String::new(),
    ];

    match wizard.step {
        WizardStep::DateSelect => {
            lines.push(format!("  {}", wizard.date));
            lines.push(String::new());
            lines.push(styled("h/l move a day · t today · enter next", theme.dim));
        }
        WizardStep::ProjectSelect => {
            if wizard.loading {
                lines.push(styled("loading projects…", theme.dim));
            } else {
                let cursor_mark = if wizard.search.focused() { "█" } else { "" };
                lines.push(format!("search: {}{cursor_mark}", wizard.search.value()));
                lines.push(String::new());
                let filtered = wizard.filtered_projects();
                if filtered.is_empty() {
                    lines.push(styled("no matching projects", theme.dim));
                } else {
                    for index in wizard.cursor.visible_range(filtered.len()) {
                        let row = format!(" {} ", filtered[index].display_name());
                        if index == wizard.cursor.cursor() && !wizard.search.focused() {
                            lines.push(styled(&row, theme.selected));
                        } else {
                            lines.push(row);
                        }
                    }
                }
                lines.push(String::new());
                lines.push(styled("/ search · j/k move · enter select", theme.dim));
            }
        }
        WizardStep::TimeInput => {
            lines.push("time range (like 9a - 5p):".to_owned());
            lines.push(format!("  {}█", wizard.time_range.value()));
        }
        WizardStep::TaskInput => {
            lines.push("what did you work on?".to_owned());
            lines.push(format!("  {}█", wizard.task.value()));
            if !wizard.suggestions.is_empty() {
                lines.push(String::new());
                lines.push(styled("recent:", theme.dim));
                for suggestion in wizard.suggestions.iter().take(5) {
                    lines.push(styled(&format!("  {suggestion}"), theme.dim));
                }
            }
        }
        WizardStep::Confirm => {
            let project = wizard
                .selected
                .as_ref()
                .map(Project::display_name)
                .unwrap_or_default();
            lines.push(format!("date     {}", wizard.date));
            lines.push(format!("project  {project}"));
            lines.push(format!("time     {}", wizard.time_range.value()));
            lines.push(format!("task     {}", wizard.task.value()));
            lines.push(String::new());
            lines.push(styled("enter to submit · esc to cancel", theme.dim));
        }
        WizardStep::Complete => {
            lines.push(styled("entry created", theme.success));
        }
    }

    if let Some(error) = &wizard.error {
        lines.push(String::new());
        lines.push(styled(error, theme.error));
    }
    lines
}

fn styled(text: &str, style: owo_colors::Style) -> String {
    format!("{}", text.style(style))
}

/// Pads or truncates to exactly `width` visual columns.
fn pad_to(line: &str, width: usize) -> String {
    let current = compositor::visual_width(line);
    if current > width {
        return compositor::truncate_columns(line, width);
    }
    format!("{line}{}", " ".repeat(width - current))
}

/// Rounded-border box, `width` x `height` total, title embedded in the top
/// border. Body lines beyond the inner height are dropped; shorter bodies
/// are padded with blanks.
fn boxed(
    title: &str,
    body: &[String],
    width: usize,
    height: usize,
    theme: &Theme,
    focused: bool,
) -> Vec<String> {
    if width < 4 || height < 2 {
        return vec![String::new(); height];
    }
    let border = if focused { theme.border_focused } else { theme.border };
    let inner_width = width - 2;
    let inner_height = height - 2;

    let title = truncate_to(title, inner_width.saturating_sub(4));
    let dashes = inner_width.saturating_sub(title.chars().count() + 3);
    let top = format!(
        "{}{}{}",
        styled("╭─ ", border),
        styled(&title, theme.title),
        styled(&format!(" {}╮", "─".repeat(dashes)), border),
    );

    let mut lines = vec![top];
    let side = styled("│", border);
    for row in 0..inner_height {
        let content = body.get(row).map(String::as_str).unwrap_or("");
        lines.push(format!("{side}{}{side}", pad_to(content, inner_width)));
    }
    lines.push(styled(&format!("╰{}╯", "─".repeat(inner_width)), border));
    lines
}

fn truncate_to(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn join_horizontal(left: &[String], right: &[String]) -> Vec<String> {
    let rows = left.len().max(right.len());
    let left_width = left
        .iter()
        .map(|line| compositor::visual_width(line))
        .max()
        .unwrap_or(0);

    (0..rows)
        .map(|row| {
            let left_line = left.get(row).map(String::as_str).unwrap_or("");
            let right_line = right.get(row).map(String::as_str).unwrap_or("");
            format!("{}{right_line}", pad_to(left_line, left_width))
        })
        .collect()
}
