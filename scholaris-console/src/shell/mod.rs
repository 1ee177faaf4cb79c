//! Sidebar-navigated terminal shell.
//!
//! Owns the update loop: crossterm input and settled network operations both
//! arrive here as messages, domain updates run synchronously, and requested
//! effects are handed to the [`EffectRuntime`]. Rendering lives in [`view`].

pub mod view;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::debug;

use scholaris_api::DirectoryService;
use scholaris_model::SchoolId;

use crate::common::messages::AppMessage;
use crate::config::Config;
use crate::domains::user_management::messages::Message;
use crate::domains::user_management::update::update_user_management;
use crate::domains::user_management::view_model::filter_users;
use crate::domains::user_management::{PageMode, UserManagementState};
use crate::runtime::EffectRuntime;

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRoute {
    Dashboard,
    Users,
    Roles,
    Schools,
    AcademicYear,
    Terms,
    Students,
    Staff,
    Database,
    Security,
    Support,
    Configuration,
}

impl PageRoute {
    pub const ALL: [PageRoute; 12] = [
        PageRoute::Dashboard,
        PageRoute::Users,
        PageRoute::Roles,
        PageRoute::Schools,
        PageRoute::AcademicYear,
        PageRoute::Terms,
        PageRoute::Students,
        PageRoute::Staff,
        PageRoute::Database,
        PageRoute::Security,
        PageRoute::Support,
        PageRoute::Configuration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PageRoute::Dashboard => "Dashboard",
            PageRoute::Users => "User Management",
            PageRoute::Roles => "Roles & Permissions",
            PageRoute::Schools => "School Management",
            PageRoute::AcademicYear => "Academic Year",
            PageRoute::Terms => "Term Management",
            PageRoute::Students => "Student Management",
            PageRoute::Staff => "Staff Management",
            PageRoute::Database => "Database Backup",
            PageRoute::Security => "Security & Access",
            PageRoute::Support => "Technical Support",
            PageRoute::Configuration => "System Configuration",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|route| route == self).unwrap_or(0)
    }

    fn next(&self) -> PageRoute {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> PageRoute {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Fields of the create/edit dialog, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    School,
    Status,
    FirstName,
    LastName,
    Email,
    Phone,
    Gender,
}

/// The status selector only appears when editing; new users always start in
/// the initial status.
pub fn form_fields(mode: PageMode) -> &'static [FormField] {
    match mode {
        PageMode::Editing(_) => &[
            FormField::School,
            FormField::Status,
            FormField::FirstName,
            FormField::LastName,
            FormField::Email,
            FormField::Phone,
            FormField::Gender,
        ],
        _ => &[
            FormField::School,
            FormField::FirstName,
            FormField::LastName,
            FormField::Email,
            FormField::Phone,
            FormField::Gender,
        ],
    }
}

/// Presentation-only shell state: navigation, focus, and cursors.
#[derive(Debug)]
pub struct ShellState {
    pub route: PageRoute,
    pub table_row: usize,
    pub search_focused: bool,
    pub form_cursor: usize,
    pub menu_cursor: usize,
    pub should_quit: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            route: PageRoute::Users,
            table_row: 0,
            search_focused: false,
            form_cursor: 0,
            menu_cursor: 0,
            should_quit: false,
        }
    }
}

/// Source of key/input events so tests can drive the shell without a tty.
pub trait EventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>>;
    fn is_scripted(&self) -> bool {
        false
    }
}

struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Scripted event source driven by a simple line-oriented DSL:
///   down|up|left|right|enter|esc|tab|slash|backspace|q|]|[|ctrl-c|type:<text>
/// Lines beginning with # are ignored. Blank lines are skipped.
/// When events are exhausted, the shell quits instead of hanging.
pub struct ScriptEventSource {
    events: Vec<Event>,
    cursor: usize,
}

impl ScriptEventSource {
    pub fn from_path(path: PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)
            .context("read scripted shell input")?;
        Self::from_str(&contents)
    }

    pub fn from_str(contents: &str) -> Result<Self> {
        let mut events = Vec::new();
        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut push_key = |code: KeyCode, modifiers: KeyModifiers| {
                events.push(Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: KeyEventKind::Press,
                    state: event::KeyEventState::NONE,
                }));
            };

            match line {
                "down" | "j" => push_key(KeyCode::Down, KeyModifiers::NONE),
                "up" | "k" => push_key(KeyCode::Up, KeyModifiers::NONE),
                "left" => push_key(KeyCode::Left, KeyModifiers::NONE),
                "right" => push_key(KeyCode::Right, KeyModifiers::NONE),
                "enter" => push_key(KeyCode::Enter, KeyModifiers::NONE),
                "esc" => push_key(KeyCode::Esc, KeyModifiers::NONE),
                "tab" => push_key(KeyCode::Tab, KeyModifiers::NONE),
                "slash" => push_key(KeyCode::Char('/'), KeyModifiers::NONE),
                "backspace" => {
                    push_key(KeyCode::Backspace, KeyModifiers::NONE)
                }
                "q" | "quit" => {
                    push_key(KeyCode::Char('q'), KeyModifiers::NONE)
                }
                "]" => push_key(KeyCode::Char(']'), KeyModifiers::NONE),
                "[" => push_key(KeyCode::Char('['), KeyModifiers::NONE),
                "ctrl-c" => push_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
                _ => {
                    if let Some(rest) = line.strip_prefix("type:") {
                        for ch in rest.chars() {
                            push_key(KeyCode::Char(ch), KeyModifiers::NONE);
                        }
                    } else {
                        return Err(anyhow!(
                            "unrecognized shell script token at line {}: {}",
                            idx + 1,
                            line
                        ));
                    }
                }
            }
        }

        Ok(Self { events, cursor: 0 })
    }
}

impl EventSource for ScriptEventSource {
    fn next(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        let event = self.events.get(self.cursor).cloned();
        self.cursor += 1;
        match event {
            Some(event) => Ok(Some(event)),
            // Out of scripted input: synthesize a quit so the loop ends.
            None => Ok(Some(Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                kind: KeyEventKind::Press,
                state: event::KeyEventState::NONE,
            }))),
        }
    }

    fn is_scripted(&self) -> bool {
        true
    }
}

fn event_source_from_env() -> Result<Box<dyn EventSource>> {
    match std::env::var("SCHOLARIS_SHELL_SCRIPT") {
        Ok(path) => Ok(Box::new(ScriptEventSource::from_path(path.into())?)),
        Err(_) => Ok(Box::new(CrosstermEventSource)),
    }
}

/// Entry point: set up the terminal and run the shell to completion.
pub fn run(
    config: &Config,
    service: Arc<dyn DirectoryService>,
    handle: tokio::runtime::Handle,
) -> Result<()> {
    let mut source = event_source_from_env()?;
    let scripted = source.is_scripted();

    let mut stdout = io::stdout();
    if !scripted {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::unbounded_channel();
    let runtime = EffectRuntime::new(handle, service, tx);

    let mut shell = ShellState::default();
    let mut users = UserManagementState::new(config.operator_id);

    let result =
        run_app(&mut terminal, &mut shell, &mut users, &runtime, rx, &mut *source);

    if !scripted {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shell: &mut ShellState,
    users: &mut UserManagementState,
    runtime: &EffectRuntime,
    mut rx: mpsc::UnboundedReceiver<AppMessage>,
    source: &mut dyn EventSource,
) -> Result<()> {
    // Initial queries; the four lookups run concurrently.
    apply(users, Message::LoadDirectory.into(), runtime);

    loop {
        // Apply any settled network operations first.
        while let Ok(message) = rx.try_recv() {
            apply(users, message, runtime);
        }
        clamp_cursors(shell, users);

        terminal.draw(|f| view::render(f, shell, users))?;

        if let Some(ev) = source.next(Duration::from_millis(100))? {
            match ev {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    for message in handle_key(key, shell, users) {
                        apply(users, message, runtime);
                    }
                    clamp_cursors(shell, users);
                }
                Event::Resize(_, _) => {
                    // redrawn on next loop automatically
                }
                _ => {}
            }
        }

        if shell.should_quit {
            return Ok(());
        }
    }
}

fn apply(
    users: &mut UserManagementState,
    message: AppMessage,
    runtime: &EffectRuntime,
) {
    debug!("Applying {}", message.name());
    match message {
        AppMessage::UserManagement(message) => {
            let result = update_user_management(users, message);
            runtime.dispatch(result.effects);
        }
        AppMessage::NoOp => {}
    }
}

/// Keep presentation cursors inside their collections as data changes.
fn clamp_cursors(shell: &mut ShellState, users: &UserManagementState) {
    let visible =
        filter_users(users.queries.users.items(), &users.search).len();
    if shell.table_row >= visible {
        shell.table_row = visible.saturating_sub(1);
    }
    let statuses = users.queries.statuses.items().len();
    if shell.menu_cursor >= statuses {
        shell.menu_cursor = statuses.saturating_sub(1);
    }
    let fields = form_fields(users.mode).len();
    if shell.form_cursor >= fields {
        shell.form_cursor = fields.saturating_sub(1);
    }
}

/// Translate a key press into domain messages, mutating presentation
/// cursors along the way.
pub fn handle_key(
    key: KeyEvent,
    shell: &mut ShellState,
    users: &UserManagementState,
) -> Vec<AppMessage> {
    // Always reachable, even while a mutation is in flight.
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && key.code == KeyCode::Char('c')
    {
        shell.should_quit = true;
        return Vec::new();
    }

    // The busy indicator is non-dismissable: swallow everything else.
    if users.busy.is_some() {
        return Vec::new();
    }

    // A notice overlays the page; errors block until dismissed.
    if let Some(notice) = &users.notice {
        let dismiss = if notice.is_blocking() {
            matches!(key.code, KeyCode::Enter | KeyCode::Esc)
        } else {
            true
        };
        return if dismiss {
            vec![Message::DismissNotice.into()]
        } else {
            Vec::new()
        };
    }

    match users.mode {
        PageMode::Creating | PageMode::Editing(_) => {
            handle_form_key(key, shell, users)
        }
        PageMode::ConfirmingDelete(_) => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                vec![Message::DeleteUserConfirm.into()]
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                vec![Message::DeleteUserCancel.into()]
            }
            _ => Vec::new(),
        },
        PageMode::Idle => handle_browse_key(key, shell, users),
    }
}

fn handle_browse_key(
    key: KeyEvent,
    shell: &mut ShellState,
    users: &UserManagementState,
) -> Vec<AppMessage> {
    // Inline status menu has its own navigation.
    if let Some(owner) = users.status_menu {
        let statuses = users.queries.statuses.items();
        match key.code {
            KeyCode::Up => {
                shell.menu_cursor = shell.menu_cursor.saturating_sub(1);
                return Vec::new();
            }
            KeyCode::Down => {
                if shell.menu_cursor + 1 < statuses.len() {
                    shell.menu_cursor += 1;
                }
                return Vec::new();
            }
            KeyCode::Enter => {
                return match statuses.get(shell.menu_cursor) {
                    Some(status) => vec![
                        Message::SelectStatus {
                            user: owner,
                            status: status.id,
                        }
                        .into(),
                    ],
                    None => Vec::new(),
                };
            }
            KeyCode::Esc | KeyCode::Char('s') => {
                return vec![Message::ToggleStatusMenu(owner).into()];
            }
            _ => return Vec::new(),
        }
    }

    if shell.search_focused {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                shell.search_focused = false;
                Vec::new()
            }
            KeyCode::Backspace => {
                let mut term = users.search.clone();
                term.pop();
                vec![Message::SearchChanged(term).into()]
            }
            KeyCode::Char(ch) => {
                let mut term = users.search.clone();
                term.push(ch);
                vec![Message::SearchChanged(term).into()]
            }
            _ => Vec::new(),
        };
    }

    match key.code {
        KeyCode::Char('q') => {
            shell.should_quit = true;
            Vec::new()
        }
        KeyCode::Char(']') => {
            shell.route = shell.route.next();
            Vec::new()
        }
        KeyCode::Char('[') => {
            shell.route = shell.route.prev();
            Vec::new()
        }
        _ if shell.route != PageRoute::Users => Vec::new(),
        KeyCode::Char('/') => {
            shell.search_focused = true;
            Vec::new()
        }
        KeyCode::Up => {
            shell.table_row = shell.table_row.saturating_sub(1);
            Vec::new()
        }
        KeyCode::Down => {
            let visible =
                filter_users(users.queries.users.items(), &users.search)
                    .len();
            if shell.table_row + 1 < visible {
                shell.table_row += 1;
            }
            Vec::new()
        }
        KeyCode::Char('n') => {
            shell.form_cursor = 0;
            vec![Message::CreateUser.into()]
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            shell.form_cursor = 0;
            selected_user(shell, users)
                .map(|id| vec![Message::UpdateUser(id).into()])
                .unwrap_or_default()
        }
        KeyCode::Char('d') | KeyCode::Delete => selected_user(shell, users)
            .map(|id| vec![Message::DeleteUser(id).into()])
            .unwrap_or_default(),
        KeyCode::Char('s') => {
            shell.menu_cursor = 0;
            selected_user(shell, users)
                .map(|id| vec![Message::ToggleStatusMenu(id).into()])
                .unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

fn handle_form_key(
    key: KeyEvent,
    shell: &mut ShellState,
    users: &UserManagementState,
) -> Vec<AppMessage> {
    let fields = form_fields(users.mode);
    let field = fields[shell.form_cursor.min(fields.len() - 1)];

    match key.code {
        KeyCode::Esc => match users.mode {
            PageMode::Creating => vec![Message::CreateUserCancel.into()],
            _ => vec![Message::UpdateUserCancel.into()],
        },
        KeyCode::Enter => match users.mode {
            PageMode::Creating => vec![Message::CreateUserFormSubmit.into()],
            _ => vec![Message::UpdateUserFormSubmit.into()],
        },
        KeyCode::Up | KeyCode::BackTab => {
            shell.form_cursor = shell.form_cursor.saturating_sub(1);
            Vec::new()
        }
        KeyCode::Down | KeyCode::Tab => {
            if shell.form_cursor + 1 < fields.len() {
                shell.form_cursor += 1;
            }
            Vec::new()
        }
        KeyCode::Left => cycle_option(field, users, -1),
        KeyCode::Right => cycle_option(field, users, 1),
        KeyCode::Backspace => edit_text(field, users, None),
        KeyCode::Char(ch) => edit_text(field, users, Some(ch)),
        _ => Vec::new(),
    }
}

/// Append or delete a character in the focused text field.
fn edit_text(
    field: FormField,
    users: &UserManagementState,
    ch: Option<char>,
) -> Vec<AppMessage> {
    let apply = |current: &str| {
        let mut value = current.to_string();
        match ch {
            Some(ch) => value.push(ch),
            None => {
                value.pop();
            }
        }
        value
    };

    let message = match field {
        FormField::FirstName => {
            Message::FormFirstNameChanged(apply(&users.form.first_name))
        }
        FormField::LastName => {
            Message::FormLastNameChanged(apply(&users.form.last_name))
        }
        FormField::Email => Message::FormEmailChanged(apply(&users.form.email)),
        FormField::Phone => Message::FormPhoneChanged(apply(&users.form.phone)),
        // Selects do not take free text.
        FormField::School | FormField::Status | FormField::Gender => {
            return Vec::new();
        }
    };
    vec![message.into()]
}

/// Step a select field through its lookup table.
fn cycle_option(
    field: FormField,
    users: &UserManagementState,
    step: i64,
) -> Vec<AppMessage> {
    fn next_index(current: Option<usize>, len: usize, step: i64) -> usize {
        let len = len as i64;
        match current {
            Some(index) => (index as i64 + step).rem_euclid(len) as usize,
            None if step >= 0 => 0,
            None => (len - 1) as usize,
        }
    }

    match field {
        FormField::School => {
            let schools = users.queries.schools.items();
            if schools.is_empty() {
                return Vec::new();
            }
            let current = users
                .form
                .school_id
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(|id| {
                    schools.iter().position(|s| s.id == SchoolId(id))
                });
            let index = next_index(current, schools.len(), step);
            vec![
                Message::FormSchoolChanged(schools[index].id.to_string())
                    .into(),
            ]
        }
        FormField::Status => {
            let statuses = users.queries.statuses.items();
            if statuses.is_empty() {
                return Vec::new();
            }
            let current = statuses
                .iter()
                .position(|s| s.id == users.form.status_id);
            let index = next_index(current, statuses.len(), step);
            vec![Message::FormStatusChanged(statuses[index].id).into()]
        }
        FormField::Gender => {
            let genders = users.queries.genders.items();
            if genders.is_empty() {
                return Vec::new();
            }
            let current = users.form.gender_id.and_then(|id| {
                genders.iter().position(|g| g.id == id)
            });
            let index = next_index(current, genders.len(), step);
            vec![Message::FormGenderChanged(genders[index].id).into()]
        }
        _ => Vec::new(),
    }
}

/// Id of the table row the cursor is on, after filtering.
fn selected_user(
    shell: &ShellState,
    users: &UserManagementState,
) -> Option<scholaris_model::UserId> {
    filter_users(users.queries.users.items(), &users.search)
        .get(shell.table_row)
        .map(|user| user.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryState;
    use scholaris_model::{GenderId, StatusId, User, UserId, UserStatus};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    fn state_with_users() -> UserManagementState {
        let mut state = UserManagementState::new(UserId(1));
        state.queries.users = QueryState::Ready(vec![User {
            id: UserId(5),
            first_name: "Amy".to_string(),
            last_name: "Lee".to_string(),
            email: "amy@x.io".to_string(),
            phone: String::new(),
            school_id: SchoolId(1),
            status_id: StatusId(1),
            gender_id: GenderId(1),
        }]);
        state.queries.statuses = QueryState::Ready(vec![UserStatus {
            id: StatusId(1),
            name: "Active".to_string(),
            is_active: true,
        }]);
        state
    }

    #[test]
    fn brackets_cycle_routes() {
        let mut shell = ShellState::default();
        let users = state_with_users();

        handle_key(key(KeyCode::Char(']')), &mut shell, &users);
        assert_eq!(shell.route, PageRoute::Roles);
        handle_key(key(KeyCode::Char('[')), &mut shell, &users);
        assert_eq!(shell.route, PageRoute::Users);
    }

    #[test]
    fn delete_key_targets_the_selected_row() {
        let mut shell = ShellState::default();
        let users = state_with_users();

        let messages = handle_key(key(KeyCode::Char('d')), &mut shell, &users);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name(), "UserManagement::DeleteUser");
    }

    #[test]
    fn input_is_swallowed_while_busy() {
        let mut shell = ShellState::default();
        let mut users = state_with_users();
        users.busy = Some(crate::domains::user_management::BusyIndicator {
            label: "Deleting user...",
        });

        let messages = handle_key(key(KeyCode::Char('d')), &mut shell, &users);
        assert!(messages.is_empty());
        assert!(!shell.should_quit);
    }

    #[test]
    fn script_source_parses_tokens_and_quits_when_exhausted() {
        let mut source =
            ScriptEventSource::from_str("down\ntype:ab\n# comment\nenter\n")
                .unwrap();
        let mut codes = Vec::new();
        for _ in 0..5 {
            if let Some(Event::Key(key)) =
                source.next(Duration::from_millis(1)).unwrap()
            {
                codes.push((key.code, key.modifiers));
            }
        }
        assert_eq!(
            codes,
            vec![
                (KeyCode::Down, KeyModifiers::NONE),
                (KeyCode::Char('a'), KeyModifiers::NONE),
                (KeyCode::Char('b'), KeyModifiers::NONE),
                (KeyCode::Enter, KeyModifiers::NONE),
                (KeyCode::Char('c'), KeyModifiers::CONTROL),
            ]
        );
    }
}
