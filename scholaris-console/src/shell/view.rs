//! Rendering for the shell and its pages.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, List, ListItem, ListState, Paragraph, Row,
        Table, TableState, Wrap,
    },
};

use scholaris_model::StatusTone;

use crate::domains::pages::{
    academic_year, dashboard, database_backup, role_permissions,
    school_management, security_access, staff_management, student_management,
    system_configuration, technical_support, term_management,
};
use crate::domains::user_management::view_model::{
    filter_users, gender_label, school_label, status_label, status_tone,
};
use crate::domains::user_management::{PageMode, UserManagementState};
use crate::notify::NoticeKind;

use super::{FormField, PageRoute, ShellState, form_fields};

const ACCENT: Color = Color::Cyan;

pub fn render(f: &mut Frame, shell: &ShellState, users: &UserManagementState) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(1)].as_ref())
        .split(f.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)].as_ref())
        .split(vertical[0]);

    render_sidebar(f, shell, columns[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)].as_ref())
        .split(columns[1]);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            shell.route.label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  Scholaris Admin"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, main[0]);

    match shell.route {
        PageRoute::Dashboard => render_dashboard(f, main[1]),
        PageRoute::Users => render_users_page(f, shell, users, main[1]),
        PageRoute::Roles => render_roles(f, main[1]),
        PageRoute::Schools => render_schools(f, main[1]),
        PageRoute::AcademicYear => render_academic_year(f, main[1]),
        PageRoute::Terms => render_terms(f, main[1]),
        PageRoute::Students => render_students(f, main[1]),
        PageRoute::Staff => render_staff(f, main[1]),
        PageRoute::Database => render_backups(f, main[1]),
        PageRoute::Security => render_security(f, main[1]),
        PageRoute::Support => render_support(f, main[1]),
        PageRoute::Configuration => render_configuration(f, main[1]),
    }

    // Overlays for the live page.
    if shell.route == PageRoute::Users {
        render_overlays(f, shell, users, vertical[0]);
    }

    let help = Paragraph::new(
        " [ / ] pages · / search · n new · e edit · d delete · s status · q quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, vertical[1]);
}

fn render_sidebar(f: &mut Frame, shell: &ShellState, area: Rect) {
    let items: Vec<ListItem> = PageRoute::ALL
        .iter()
        .map(|route| ListItem::new(route.label()))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Scholaris"))
        .highlight_style(
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(
        PageRoute::ALL.iter().position(|route| *route == shell.route),
    );
    f.render_stateful_widget(list, area, &mut state);
}

fn render_users_page(
    f: &mut Frame,
    shell: &ShellState,
    users: &UserManagementState,
    area: Rect,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)].as_ref())
        .split(area);

    let search_style = if shell.search_focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };
    let search = Paragraph::new(users.search.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search users...")
            .border_style(search_style),
    );
    f.render_widget(search, rows[0]);

    if users.queries.users.is_loading() {
        let loading = Paragraph::new("Loading users...")
            .block(Block::default().borders(Borders::ALL).title("Users"));
        f.render_widget(loading, rows[1]);
        return;
    }
    if let Some(error) = users.queries.users.failed() {
        let message = Paragraph::new(format!("Error loading users\n{error}"))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Users"));
        f.render_widget(message, rows[1]);
        return;
    }

    let statuses = users.queries.statuses.items();
    let visible = filter_users(users.queries.users.items(), &users.search);
    let table_rows: Vec<Row> = visible
        .iter()
        .map(|user| {
            let label = status_label(statuses, user.status_id);
            let tone = match status_tone(statuses, user.status_id) {
                StatusTone::Active => Color::Green,
                StatusTone::Inactive => Color::DarkGray,
                StatusTone::Suspended => Color::Red,
                StatusTone::Other => Color::Gray,
            };
            Row::new(vec![
                user.display_name(),
                user.email.clone(),
                user.phone.clone(),
                label.to_string(),
            ])
            .style(Style::default().fg(tone))
        })
        .collect();

    let table = Table::new(
        table_rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(
        Row::new(vec!["User", "Email", "Phone", "Status"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(format!(
        "Users ({})",
        visible.len()
    )))
    .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(if visible.is_empty() {
        None
    } else {
        Some(shell.table_row)
    });
    f.render_stateful_widget(table, rows[1], &mut state);
}

fn render_overlays(
    f: &mut Frame,
    shell: &ShellState,
    users: &UserManagementState,
    area: Rect,
) {
    if let Some(owner) = users.status_menu {
        render_status_menu(f, shell, users, owner, area);
    }

    match users.mode {
        PageMode::Creating => render_form(f, shell, users, "Create User", area),
        PageMode::Editing(_) => render_form(f, shell, users, "Edit User", area),
        PageMode::ConfirmingDelete(_) => {
            let popup = centered_rect(40, 20, area);
            f.render_widget(Clear, popup);
            let dialog = Paragraph::new(
                "This user will be permanently deleted.\n\n\
                 Enter: delete   Esc: cancel",
            )
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Delete User?")
                    .border_style(Style::default().fg(Color::Red)),
            );
            f.render_widget(dialog, popup);
        }
        PageMode::Idle => {}
    }

    if let Some(busy) = &users.busy {
        let popup = centered_rect(30, 14, area);
        f.render_widget(Clear, popup);
        let indicator = Paragraph::new(format!("{}\nPlease wait", busy.label))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(indicator, popup);
    }

    if let Some(notice) = &users.notice {
        let popup = centered_rect(44, 22, area);
        f.render_widget(Clear, popup);
        let (title, color) = match notice.kind {
            NoticeKind::Success => ("Success", Color::Green),
            NoticeKind::Error => ("Error", Color::Red),
        };
        let mut lines = vec![Line::from(notice.title.clone())];
        if let Some(body) = &notice.body {
            lines.push(Line::from(""));
            lines.push(Line::from(body.clone()));
        }
        let banner = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(banner, popup);
    }
}

fn render_status_menu(
    f: &mut Frame,
    shell: &ShellState,
    users: &UserManagementState,
    owner: scholaris_model::UserId,
    area: Rect,
) {
    let statuses = users.queries.statuses.items();
    let items: Vec<ListItem> = statuses
        .iter()
        .map(|status| ListItem::new(status.name.clone()))
        .collect();

    let popup = centered_rect(30, 30, area);
    f.render_widget(Clear, popup);
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Set status · user {owner}")),
        )
        .highlight_style(
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(if statuses.is_empty() {
        None
    } else {
        Some(shell.menu_cursor)
    });
    f.render_stateful_widget(list, popup, &mut state);
}

fn render_form(
    f: &mut Frame,
    shell: &ShellState,
    users: &UserManagementState,
    title: &str,
    area: Rect,
) {
    let fields = form_fields(users.mode);
    let schools = users.queries.schools.items();
    let statuses = users.queries.statuses.items();
    let genders = users.queries.genders.items();

    let lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let (label, value) = match field {
                FormField::School => {
                    let shown = users
                        .form
                        .school_id
                        .trim()
                        .parse::<i64>()
                        .map(|id| {
                            school_label(
                                schools,
                                scholaris_model::SchoolId(id),
                            )
                            .to_string()
                        })
                        .unwrap_or_else(|_| "Select School".to_string());
                    ("School", shown)
                }
                FormField::Status => (
                    "Status",
                    status_label(statuses, users.form.status_id).to_string(),
                ),
                FormField::FirstName => {
                    ("First Name", users.form.first_name.clone())
                }
                FormField::LastName => {
                    ("Last Name", users.form.last_name.clone())
                }
                FormField::Email => ("Email", users.form.email.clone()),
                FormField::Phone => ("Phone", users.form.phone.clone()),
                FormField::Gender => (
                    "Gender",
                    users
                        .form
                        .gender_id
                        .map(|id| gender_label(genders, id).to_string())
                        .unwrap_or_else(|| "Select Gender".to_string()),
                ),
            };
            let style = if index == shell.form_cursor {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{label:>11}: "), style),
                Span::styled(value, style),
            ])
        })
        .collect();

    let mut all_lines = lines;
    all_lines.push(Line::from(""));
    all_lines.push(Line::from(Span::styled(
        "Enter: submit · Esc: cancel · ←/→ change selection",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = centered_rect(50, 50, area);
    f.render_widget(Clear, popup);
    let form = Paragraph::new(all_lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(form, popup);
}

fn render_dashboard(f: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [Constraint::Percentage(50), Constraint::Percentage(50)].as_ref(),
        )
        .split(area);

    let mut stat_lines = Vec::new();
    for card in dashboard::stat_cards() {
        stat_lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16}", card.title),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{:>8}", card.value),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", card.change),
                Style::default().fg(Color::Green),
            ),
        ]));
    }
    stat_lines.push(Line::from(""));
    stat_lines.push(Line::from(Span::styled(
        "User growth",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for point in dashboard::user_growth() {
        stat_lines.push(Line::from(format!(
            "{:<4} {:>6}",
            point.label, point.value
        )));
    }

    let stats = Paragraph::new(stat_lines)
        .block(Block::default().borders(Borders::ALL).title("Overview"));
    f.render_widget(stats, columns[0]);

    let mut activity_lines = Vec::new();
    for activity in dashboard::recent_activities() {
        activity_lines.push(Line::from(vec![
            Span::styled(
                activity.user,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {}", activity.action)),
        ]));
        activity_lines.push(Line::from(Span::styled(
            format!("  {}", activity.time),
            Style::default().fg(Color::DarkGray),
        )));
    }
    activity_lines.push(Line::from(""));
    activity_lines.push(Line::from(Span::styled(
        "Attendance rate",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for point in dashboard::attendance_rate() {
        activity_lines.push(Line::from(format!(
            "{:<4} {:>3}%",
            point.label, point.value
        )));
    }

    let activity = Paragraph::new(activity_lines).block(
        Block::default().borders(Borders::ALL).title("Recent Activity"),
    );
    f.render_widget(activity, columns[1]);
}

fn render_roles(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for role in role_permissions::roles() {
        lines.push(Line::from(vec![
            Span::styled(role.name, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  ({} users)", role.user_count),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(format!("  {}", role.description)));
        lines.push(Line::from(Span::styled(
            format!("  {}", role.permissions.join(", ")),
            Style::default().fg(ACCENT),
        )));
        lines.push(Line::from(""));
    }
    let list = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Roles"));
    f.render_widget(list, area);
}

fn render_schools(f: &mut Frame, area: Rect) {
    let rows: Vec<Row> = school_management::schools()
        .into_iter()
        .map(|school| {
            Row::new(vec![
                school.name.to_string(),
                school.location.to_string(),
                school.students.to_string(),
                school.staff.to_string(),
                school.status.to_string(),
            ])
        })
        .collect();
    render_simple_table(
        f,
        area,
        "Schools",
        vec!["Name", "Location", "Students", "Staff", "Status"],
        rows,
        &[
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
        ],
    );
}

fn render_academic_year(f: &mut Frame, area: Rect) {
    let rows: Vec<Row> = academic_year::academic_years()
        .into_iter()
        .map(|year| {
            Row::new(vec![
                year.year.to_string(),
                year.start_date.to_string(),
                year.end_date.to_string(),
                year.status.to_string(),
                format!("{}%", year.progress),
            ])
        })
        .collect();
    render_simple_table(
        f,
        area,
        "Academic Years",
        vec!["Year", "Start", "End", "Status", "Progress"],
        rows,
        &[
            Constraint::Percentage(20),
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
        ],
    );
}

fn render_terms(f: &mut Frame, area: Rect) {
    let rows: Vec<Row> = term_management::terms()
        .into_iter()
        .map(|term| {
            Row::new(vec![
                term.name.to_string(),
                term.year.to_string(),
                term.start_date.to_string(),
                term.end_date.to_string(),
                term.status.to_string(),
            ])
        })
        .collect();
    render_simple_table(
        f,
        area,
        "Terms",
        vec!["Term", "Year", "Start", "End", "Status"],
        rows,
        &[
            Constraint::Percentage(24),
            Constraint::Percentage(16),
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(16),
        ],
    );
}

fn render_students(f: &mut Frame, area: Rect) {
    let rows: Vec<Row> = student_management::students()
        .into_iter()
        .map(|student| {
            Row::new(vec![
                student.name.to_string(),
                student.grade.to_string(),
                student.class.to_string(),
                student.enrollment.to_string(),
                student.status.to_string(),
            ])
        })
        .collect();
    render_simple_table(
        f,
        area,
        "Students",
        vec!["Name", "Grade", "Class", "Enrollment", "Status"],
        rows,
        &[
            Constraint::Percentage(28),
            Constraint::Percentage(16),
            Constraint::Percentage(14),
            Constraint::Percentage(24),
            Constraint::Percentage(18),
        ],
    );
}

fn render_staff(f: &mut Frame, area: Rect) {
    let rows: Vec<Row> = staff_management::staff()
        .into_iter()
        .map(|member| {
            Row::new(vec![
                member.name.to_string(),
                member.role.to_string(),
                member.department.to_string(),
                member.email.to_string(),
                member.status.to_string(),
            ])
        })
        .collect();
    render_simple_table(
        f,
        area,
        "Staff",
        vec!["Name", "Role", "Department", "Email", "Status"],
        rows,
        &[
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(18),
            Constraint::Percentage(24),
            Constraint::Percentage(14),
        ],
    );
}

fn render_backups(f: &mut Frame, area: Rect) {
    let rows: Vec<Row> = database_backup::backup_history()
        .into_iter()
        .map(|backup| {
            let style = if backup.status == "failed" {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            Row::new(vec![
                backup.date.to_string(),
                backup.size.to_string(),
                backup.kind.to_string(),
                backup.status.to_string(),
            ])
            .style(style)
        })
        .collect();
    render_simple_table(
        f,
        area,
        "Backup History",
        vec!["Date", "Size", "Type", "Status"],
        rows,
        &[
            Constraint::Percentage(34),
            Constraint::Percentage(18),
            Constraint::Percentage(24),
            Constraint::Percentage(24),
        ],
    );
}

fn render_security(f: &mut Frame, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [Constraint::Length(7), Constraint::Min(3)].as_ref(),
        )
        .split(area);

    let mut metric_lines = Vec::new();
    for metric in security_access::security_metrics() {
        let color = match metric.status {
            "alert" => Color::Red,
            "warning" => Color::Yellow,
            _ => Color::Green,
        };
        metric_lines.push(Line::from(vec![
            Span::styled(
                format!("{:<24}", metric.label),
                Style::default(),
            ),
            Span::styled(
                format!("{:>5}", metric.value),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    let metrics = Paragraph::new(metric_lines).block(
        Block::default().borders(Borders::ALL).title("Security Metrics"),
    );
    f.render_widget(metrics, halves[0]);

    let rows: Vec<Row> = security_access::ip_whitelist()
        .into_iter()
        .map(|entry| {
            Row::new(vec![
                entry.ip.to_string(),
                entry.description.to_string(),
                entry.added_date.to_string(),
            ])
        })
        .collect();
    render_simple_table(
        f,
        halves[1],
        "IP Whitelist",
        vec!["Address", "Description", "Added"],
        rows,
        &[
            Constraint::Percentage(30),
            Constraint::Percentage(44),
            Constraint::Percentage(26),
        ],
    );
}

fn render_support(f: &mut Frame, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [Constraint::Min(5), Constraint::Length(6)].as_ref(),
        )
        .split(area);

    let rows: Vec<Row> = technical_support::tickets()
        .into_iter()
        .map(|ticket| {
            let priority_color = match ticket.priority {
                "high" => Color::Red,
                "medium" => Color::Yellow,
                _ => Color::Green,
            };
            Row::new(vec![
                ticket.id.to_string(),
                ticket.title.to_string(),
                ticket.status.to_string(),
                ticket.priority.to_string(),
                ticket.assignee.to_string(),
                ticket.created.to_string(),
            ])
            .style(Style::default().fg(priority_color))
        })
        .collect();
    render_simple_table(
        f,
        halves[0],
        "Tickets",
        vec!["ID", "Title", "Status", "Priority", "Assignee", "Created"],
        rows,
        &[
            Constraint::Percentage(10),
            Constraint::Percentage(34),
            Constraint::Percentage(14),
            Constraint::Percentage(12),
            Constraint::Percentage(16),
            Constraint::Percentage(14),
        ],
    );

    let mut health_lines = Vec::new();
    for health in technical_support::service_health() {
        let color = if health.status == "operational" {
            Color::Green
        } else {
            Color::Yellow
        };
        health_lines.push(Line::from(vec![
            Span::raw(format!("{:<16}", health.service)),
            Span::styled(
                format!("{:<14}", health.status),
                Style::default().fg(color),
            ),
            Span::styled(
                health.uptime,
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    let health = Paragraph::new(health_lines).block(
        Block::default().borders(Borders::ALL).title("Service Health"),
    );
    f.render_widget(health, halves[1]);
}

fn render_configuration(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    let mut section = "";
    for entry in system_configuration::config_entries() {
        if entry.section != section {
            section = entry.section;
            lines.push(Line::from(Span::styled(
                section,
                Style::default().add_modifier(Modifier::BOLD).fg(ACCENT),
            )));
        }
        lines.push(Line::from(format!(
            "  {:<22} {}",
            entry.key, entry.value
        )));
    }
    let config = Paragraph::new(lines).block(
        Block::default().borders(Borders::ALL).title("Configuration"),
    );
    f.render_widget(config, area);
}

fn render_simple_table(
    f: &mut Frame,
    area: Rect,
    title: &str,
    header: Vec<&'static str>,
    rows: Vec<Row>,
    widths: &[Constraint],
) {
    let table = Table::new(rows, widths.to_vec())
        .header(
            Row::new(header)
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string()),
        );
    f.render_widget(table, area);
}

/// Centered sub-rectangle used for dialogs.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(vertical[1])[1]
}
