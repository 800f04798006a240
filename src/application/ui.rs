#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Tabs;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use strum::IntoEnumIterator;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AttendanceStatus;
use crate::domain::models::Level;
use crate::domain::models::ProgressStatus;
use crate::domain::models::Section;
use crate::domain::models::TextArea;
use crate::domain::services::today;
use crate::domain::services::AppState;
use crate::domain::services::Persistence;
use crate::domain::services::Views;

const NAME_TITLE: &str = "Name";
const AGE_TITLE: &str = "Age";
const TOPIC_TITLE: &str = "Topic";
const MESSAGE_TITLE: &str = "Message";

#[derive(Clone, Copy, PartialEq, Eq)]
enum FormField {
    Name,
    Age,
    Level,
}

/// Text inputs owned by the terminal loop. Their content is only handed to
/// the app state on submit.
struct Inputs<'a> {
    name: tui_textarea::TextArea<'a>,
    age: tui_textarea::TextArea<'a>,
    level: Level,
    focus: FormField,
    topic: tui_textarea::TextArea<'a>,
    message: tui_textarea::TextArea<'a>,
}

impl<'a> Inputs<'a> {
    fn new() -> Inputs<'a> {
        let mut inputs = Inputs {
            name: TextArea::new(NAME_TITLE),
            age: TextArea::new(AGE_TITLE),
            level: Level::default(),
            focus: FormField::Name,
            topic: TextArea::new(TOPIC_TITLE),
            message: TextArea::new(MESSAGE_TITLE),
        };
        inputs.refresh_focus();

        return inputs;
    }

    fn refresh_focus(&mut self) {
        TextArea::set_focus(&mut self.name, NAME_TITLE, self.focus == FormField::Name);
        TextArea::set_focus(&mut self.age, AGE_TITLE, self.focus == FormField::Age);
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Age,
            FormField::Age => FormField::Level,
            FormField::Level => FormField::Name,
        };
        self.refresh_focus();
    }

    fn reset_intake(&mut self) {
        self.name = TextArea::new(NAME_TITLE);
        self.age = TextArea::new(AGE_TITLE);
        self.level = Level::default();
        self.focus = FormField::Name;
        self.refresh_focus();
    }
}

fn popup_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    return Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1];
}

/// Resize and mouse events arrive as `Key::Null` and leave the alert open.
fn dismisses_alert(input: &Input) -> bool {
    return !matches!(input.key, Key::Null);
}

/// Scroll offset keeping the selected card within the viewport.
fn card_scroll(cursor: usize, card_height: usize, rect: Rect) -> u16 {
    let viewport = usize::from(rect.height.saturating_sub(2));
    let bottom = (cursor + 1) * card_height;
    return u16::try_from(bottom.saturating_sub(viewport)).unwrap_or(u16::MAX);
}

fn help_text(app_state: &AppState) -> &'static str {
    if app_state.alert.is_some() {
        return "Any key: Dismiss";
    }
    if app_state.ai_panel.is_some() {
        return "Left/Right: Content type | Enter: Generate | Esc: Close";
    }

    match app_state.navigation.active() {
        Section::Students => return "Tab: Next field | Enter: Register | Up/Down: Select | Ctrl+X: Remove | Ctrl+A: AI assistant | Ctrl+C: Quit",
        Section::Attendance => return "Up/Down: Select | p: Present | a: Absent | Ctrl+C: Quit",
        Section::Progress => return "Up/Down: Select | 1: Mastered | 2: In progress | 3: Needs reinforcement | Ctrl+C: Quit",
        Section::Summary | Section::Planner => return "F1..F6: Sections | Ctrl+Left/Right: Cycle | Ctrl+C: Quit",
        Section::TeacherChat => return "Enter: Send | Ctrl+L: Clear | Up/Down: Scroll | Ctrl+C: Quit",
    }
}

fn render_tabs<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let titles = Section::iter()
        .map(|e| return format!("F{} {}", e.hotkey(), e.title()))
        .collect::<Vec<String>>();
    let selected = Section::iter()
        .position(|e| return app_state.navigation.is_active(e))
        .unwrap_or(0);

    frame.render_widget(
        Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title("MathMentor"))
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Rgb(86, 156, 214))
                    .add_modifier(Modifier::BOLD),
            ),
        rect,
    );
}

fn render_lines<B: Backend>(
    frame: &mut Frame<B>,
    rect: Rect,
    title: String,
    lines: Vec<Line<'static>>,
    scroll: u16,
) {
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        rect,
    );
}

fn render_students<B: Backend>(
    frame: &mut Frame<B>,
    rect: Rect,
    app_state: &AppState,
    inputs: &Inputs,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(34), Constraint::Min(1)])
        .split(rect);
    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    frame.render_widget(inputs.name.widget(), form[0]);
    frame.render_widget(inputs.age.widget(), form[1]);

    let mut level_block = Block::default().borders(Borders::ALL).title("Level");
    let mut level_text = inputs.level.to_string();
    if inputs.focus == FormField::Level {
        level_block = level_block.border_type(BorderType::Double);
        level_text = format!("< {level_text} >");
    }
    frame.render_widget(
        Paragraph::new(format!(" {level_text}")).block(level_block),
        form[2],
    );

    let list_rect = columns[1];
    render_lines(
        frame,
        list_rect,
        format!("Students ({})", app_state.roster.len()),
        Views::roster(&app_state.roster, app_state.cursor),
        card_scroll(app_state.cursor, 4, list_rect),
    );
}

fn render_chat<B: Backend>(
    frame: &mut Frame<B>,
    rect: Rect,
    app_state: &mut AppState,
    inputs: &Inputs,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(1), Constraint::Length(3)])
        .split(rect);

    if layout[0].width != app_state.last_known_width
        || layout[0].height != app_state.last_known_height
    {
        app_state.set_rect(layout[0]);
    }

    app_state
        .bubble_list
        .render(frame, layout[0], app_state.scroll.position);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        layout[0].inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut app_state.scroll.scrollbar_state,
    );
    frame.render_widget(inputs.message.widget(), layout[1]);
}

fn render_ai_panel<B: Backend>(frame: &mut Frame<B>, app_state: &AppState, inputs: &Inputs) {
    let panel = match &app_state.ai_panel {
        Some(panel) => panel,
        None => return,
    };

    let rect = popup_rect(70, 70, frame.size());
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("AI assistant for {}", panel.student_name));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(format!(" < {} >", panel.content_type))
            .block(Block::default().borders(Borders::ALL).title("Content type")),
        layout[0],
    );
    frame.render_widget(inputs.topic.widget(), layout[1]);

    let result = panel.result.clone().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(result)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Result")),
        layout[2],
    );
}

fn render_alert<B: Backend>(frame: &mut Frame<B>, app_state: &AppState) {
    let alert = match &app_state.alert {
        Some(alert) => alert,
        None => return,
    };

    let rect = popup_rect(50, 30, frame.size());
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(alert.to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to continue",
                Style::default().add_modifier(Modifier::ITALIC),
            )),
        ])
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Notice")
                .border_style(Style::default().fg(Color::Yellow)),
        ),
        rect,
    );
}

fn draw<B: Backend>(frame: &mut Frame<B>, app_state: &mut AppState, inputs: &Inputs) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_tabs(frame, layout[0], app_state);

    let body = layout[1];
    match app_state.navigation.active() {
        Section::Students => render_students(frame, body, app_state, inputs),
        Section::Attendance => render_lines(
            frame,
            body,
            format!("Attendance for {}", today()),
            Views::attendance(&app_state.roster, app_state.cursor, today()),
            card_scroll(app_state.cursor, 3, body),
        ),
        Section::Progress => render_lines(
            frame,
            body,
            "Progress".to_string(),
            Views::progress(&app_state.roster, app_state.cursor),
            card_scroll(app_state.cursor, 3, body),
        ),
        Section::Summary => render_lines(
            frame,
            body,
            "Summary".to_string(),
            Views::summary(app_state.summary()),
            0,
        ),
        Section::Planner => render_lines(
            frame,
            body,
            "Curriculum planner".to_string(),
            Views::planner(),
            0,
        ),
        Section::TeacherChat => render_chat(frame, body, app_state, inputs),
    }

    frame.render_widget(
        Paragraph::new(help_text(app_state)).style(Style::default().fg(Color::DarkGray)),
        layout[2],
    );

    render_ai_panel(frame, app_state, inputs);
    render_alert(frame, app_state);
}

async fn handle_students(
    app_state: &mut AppState,
    inputs: &mut Inputs<'_>,
    input: Input,
) -> Result<()> {
    match input {
        Input { key: Key::Tab, .. } => {
            inputs.focus_next();
        }
        Input { key: Key::Up, .. } => {
            app_state.select_previous();
        }
        Input { key: Key::Down, .. } => {
            app_state.select_next();
        }
        Input {
            key: Key::Char('x'),
            ctrl: true,
            ..
        } => {
            let id = app_state.selected_student_id()?;
            app_state.remove_student(&id).await?;
        }
        Input {
            key: Key::Char('a'),
            ctrl: true,
            ..
        } => {
            let id = app_state.selected_student_id()?;
            app_state.open_ai_panel(&id)?;
            inputs.topic = TextArea::new(TOPIC_TITLE);
        }
        Input {
            key: Key::Enter, ..
        } => {
            let name = TextArea::text(&inputs.name);
            let age = TextArea::text(&inputs.age);
            app_state.add_student(&name, &age, inputs.level).await?;
            inputs.reset_intake();
        }
        Input { key: Key::Left, .. } if inputs.focus == FormField::Level => {
            inputs.level = inputs.level.previous();
        }
        Input {
            key: Key::Right, ..
        } if inputs.focus == FormField::Level => {
            inputs.level = inputs.level.next();
        }
        input => match inputs.focus {
            FormField::Name => {
                inputs.name.input(input);
            }
            FormField::Age => {
                inputs.age.input(input);
            }
            FormField::Level => {}
        },
    }

    return Ok(());
}

async fn handle_attendance(app_state: &mut AppState, input: Input) -> Result<()> {
    let status = match input {
        Input { key: Key::Up, .. } => {
            app_state.select_previous();
            return Ok(());
        }
        Input { key: Key::Down, .. } => {
            app_state.select_next();
            return Ok(());
        }
        Input {
            key: Key::Char('p'),
            ctrl: false,
            ..
        } => AttendanceStatus::Present,
        Input {
            key: Key::Char('a'),
            ctrl: false,
            ..
        } => AttendanceStatus::Absent,
        _ => return Ok(()),
    };

    let id = app_state.selected_student_id()?;
    app_state.record_attendance(&id, status).await?;

    return Ok(());
}

async fn handle_progress(app_state: &mut AppState, input: Input) -> Result<()> {
    let status = match input {
        Input { key: Key::Up, .. } => {
            app_state.select_previous();
            return Ok(());
        }
        Input { key: Key::Down, .. } => {
            app_state.select_next();
            return Ok(());
        }
        Input {
            key: Key::Char('1'),
            ..
        } => Some(ProgressStatus::Mastered),
        Input {
            key: Key::Char('2'),
            ..
        } => Some(ProgressStatus::InProgress),
        Input {
            key: Key::Char('3'),
            ..
        } => Some(ProgressStatus::NeedsReinforcement),
        Input {
            key: Key::Char('0'),
            ..
        } => None,
        _ => return Ok(()),
    };

    let id = app_state.selected_student_id()?;
    app_state.record_progress(&id, status).await?;

    return Ok(());
}

async fn handle_chat(app_state: &mut AppState, inputs: &mut Inputs<'_>, input: Input) -> Result<()> {
    match input {
        Input { key: Key::Up, .. } => {
            app_state.scroll.up();
        }
        Input { key: Key::Down, .. } => {
            app_state.scroll.down();
        }
        Input {
            key: Key::PageUp, ..
        } => {
            app_state.scroll.up_page();
        }
        Input {
            key: Key::PageDown,
            ..
        } => {
            app_state.scroll.down_page();
        }
        Input {
            key: Key::Char('l'),
            ctrl: true,
            ..
        } => {
            app_state.clear_chat().await?;
        }
        Input {
            key: Key::Enter, ..
        } => {
            let text = TextArea::text(&inputs.message);
            inputs.message = TextArea::new(MESSAGE_TITLE);
            app_state.send_message(&text).await?;
        }
        input => {
            inputs.message.input(input);
        }
    }

    return Ok(());
}

async fn handle_ai_panel(
    app_state: &mut AppState,
    inputs: &mut Inputs<'_>,
    input: Input,
) -> Result<()> {
    match input {
        Input { key: Key::Esc, .. } => {
            app_state.close_ai_panel();
        }
        Input { key: Key::Left, .. } => {
            app_state.cycle_ai_content_type(false);
        }
        Input {
            key: Key::Right, ..
        } => {
            app_state.cycle_ai_content_type(true);
        }
        Input {
            key: Key::Enter, ..
        } => {
            let topic = TextArea::text(&inputs.topic);
            app_state.generate_ai_content(&topic).await?;
        }
        input => {
            inputs.topic.input(input);
        }
    }

    return Ok(());
}

async fn start_loop<B: Backend>(terminal: &mut Terminal<B>, app_state: &mut AppState) -> Result<()> {
    let mut inputs = Inputs::new();

    #[cfg(feature = "dev")]
    {
        for char in "Ada Lovelace".chars() {
            inputs.name.input(Input {
                key: Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
        inputs.age.input(Input {
            key: Key::Char('9'),
            ctrl: false,
            alt: false,
        });
    }

    loop {
        terminal.draw(|frame| {
            draw(frame, app_state, &inputs);
        })?;

        let input: Input = crossterm::event::read()?.into();
        if let Input {
            key: Key::Char('c'),
            ctrl: true,
            ..
        } = input
        {
            break;
        }

        if app_state.alert.is_some() {
            if dismisses_alert(&input) {
                app_state.dismiss_alert();
            }
            continue;
        }

        if app_state.ai_panel.is_some() {
            if let Err(err) = handle_ai_panel(app_state, &mut inputs, input).await {
                app_state.alert_on_rejection(err)?;
            }
            continue;
        }

        match input {
            Input {
                key: Key::F(number),
                ..
            } => {
                if let Some(section) = Section::from_hotkey(number) {
                    app_state.switch_section(section);
                }
                continue;
            }
            Input {
                key: Key::Right,
                ctrl: true,
                ..
            } => {
                app_state.next_section();
                continue;
            }
            Input {
                key: Key::Left,
                ctrl: true,
                ..
            } => {
                app_state.previous_section();
                continue;
            }
            _ => (),
        }

        let res = match app_state.navigation.active() {
            Section::Students => handle_students(app_state, &mut inputs, input).await,
            Section::Attendance => handle_attendance(app_state, input).await,
            Section::Progress => handle_progress(app_state, input).await,
            Section::TeacherChat => handle_chat(app_state, &mut inputs, input).await,
            Section::Summary | Section::Planner => Ok(()),
        };
        if let Err(err) = res {
            app_state.alert_on_rejection(err)?;
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start() -> Result<()> {
    let section_str = Config::get(ConfigKey::Section);
    let section = Section::parse(&section_str).unwrap_or(Section::Students);
    let mut app_state = AppState::new(Persistence::from_config()?, section).await?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let res = start_loop(&mut terminal, &mut app_state).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return res;
}
