use crate::calendar::{CalendarView, Clock, GridCell, SystemClock};
use crate::data::AppSettings;
use anyhow::Result;
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs},
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

/// Navigation tabs. Only the calendar is built; the rest show "Coming Soon".
pub const TABS: [&str; 5] = ["Calendar", "Leave", "Payslips", "Directory", "Announcements"];

const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(PartialEq, Debug)]
enum Mode {
    Normal,
    /// Modal event prompt for the selected day.
    Prompt,
    /// "Coming Soon" overlay; swallows all keys except close.
    ComingSoon,
}

pub struct App<C: Clock = SystemClock> {
    calendar: CalendarView<C>,
    settings: AppSettings,
    /// Display name of the signed-in user, if any.
    signed_in: Option<String>,
    selected_day: u32,
    active_tab: usize,
    mode: Mode,
    input_buffer: String,
}

impl<C: Clock> App<C> {
    pub fn new(calendar: CalendarView<C>, settings: AppSettings, signed_in: Option<String>) -> Self {
        let mut app = App {
            calendar,
            settings,
            signed_in,
            selected_day: 1,
            active_tab: 0,
            mode: Mode::Normal,
            input_buffer: String::new(),
        };
        app.select_today();
        app
    }

    fn days_in_view(&self) -> u32 {
        self.calendar.grid().days_in_month
    }

    fn move_selection(&mut self, delta: i64) {
        let last = self.days_in_view() as i64;
        self.selected_day = (self.selected_day as i64 + delta).clamp(1, last) as u32;
    }

    fn select_today(&mut self) {
        self.selected_day = self.calendar.grid().today().map(|c| c.day).unwrap_or(1);
    }

    fn navigate(&mut self, delta: i32) {
        self.calendar.navigate(delta);
        self.selected_day = self.selected_day.min(self.days_in_view());
    }

    fn activate_tab(&mut self, index: usize) {
        if index >= TABS.len() {
            return;
        }
        self.active_tab = index;
        if index != 0 {
            self.mode = Mode::ComingSoon;
        }
    }

    fn submit_prompt(&mut self) {
        let mut answer = Some(std::mem::take(&mut self.input_buffer));
        let day = self.selected_day;
        self.calendar
            .on_cell_activate(day, &mut |_: &str| answer.take());
        self.mode = Mode::Normal;
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.mode {
            Mode::ComingSoon => {
                if matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c')) {
                    self.mode = Mode::Normal;
                }
                false
            }

            Mode::Prompt => {
                match code {
                    KeyCode::Enter => self.submit_prompt(),
                    KeyCode::Esc => {
                        self.input_buffer.clear();
                        self.mode = Mode::Normal;
                    }
                    KeyCode::Backspace => {
                        self.input_buffer.pop();
                    }
                    KeyCode::Char(c) => {
                        self.input_buffer.push(c);
                    }
                    _ => {}
                }
                false
            }

            Mode::Normal => {
                match code {
                    KeyCode::Left => self.move_selection(-1),
                    KeyCode::Right => self.move_selection(1),
                    KeyCode::Up => self.move_selection(-7),
                    KeyCode::Down => self.move_selection(7),
                    KeyCode::Char('p') | KeyCode::Char('<') | KeyCode::PageUp => self.navigate(-1),
                    KeyCode::Char('n') | KeyCode::Char('>') | KeyCode::PageDown => {
                        self.navigate(1)
                    }
                    KeyCode::Char('t') => {
                        self.calendar.go_to_today();
                        self.select_today();
                    }
                    KeyCode::Enter => {
                        self.input_buffer.clear();
                        self.mode = Mode::Prompt;
                    }
                    KeyCode::Tab => self.activate_tab((self.active_tab + 1) % TABS.len()),
                    KeyCode::BackTab => {
                        self.activate_tab((self.active_tab + TABS.len() - 1) % TABS.len())
                    }
                    KeyCode::Char(c @ '1'..='5') => {
                        self.activate_tab(c as usize - '1' as usize);
                    }
                    KeyCode::Char('q') => return true,
                    _ => {}
                }
                false
            }
        }
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // header + tabs
                Constraint::Length(10), // month grid (header + up to 6 rows + borders)
                Constraint::Length(3),  // selected day / prompt
                Constraint::Min(6),     // key bindings
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_calendar(f, chunks[1]);
        self.render_detail(f, chunks[2]);
        render_help(f, chunks[3]);

        if self.mode == Mode::ComingSoon {
            self.render_coming_soon(f, f.area());
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let user = match &self.signed_in {
            Some(name) => format!(" Signed in as {name} "),
            None => " Not signed in ".to_string(),
        };
        let tabs = Tabs::new(TABS.to_vec())
            .select(self.active_tab)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.settings.portal_name))
                    .title(Line::from(user).alignment(Alignment::Right)),
            );
        f.render_widget(tabs, area);
    }

    fn render_calendar(&self, f: &mut Frame, area: Rect) {
        let grid = self.calendar.grid();
        let header = Row::new(WEEKDAY_HEADER).style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = grid
            .rows
            .iter()
            .map(|row| {
                Row::new(row.iter().map(|cell| match cell {
                    GridCell::Blank => Cell::from(""),
                    GridCell::Day(day) => Cell::from(format!("{:>2}", day.day)).style(
                        day_cell_style(
                            day.day == self.selected_day,
                            day.is_today,
                            day.is_holiday,
                            day.has_event(),
                        ),
                    ),
                }))
            })
            .collect();

        let table = Table::new(rows, [Constraint::Length(4); 7])
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Line::from(" ◀ p ").alignment(Alignment::Left))
                    .title(
                        Line::from(Span::styled(
                            format!(" {} ", grid.label),
                            Style::default().add_modifier(Modifier::BOLD),
                        ))
                        .alignment(Alignment::Center),
                    )
                    .title(Line::from(" t today   n ▶ ").alignment(Alignment::Right)),
            );
        f.render_widget(table, area);
    }

    fn render_detail(&self, f: &mut Frame, area: Rect) {
        let line = if self.mode == Mode::Prompt {
            Line::from(vec![
                Span::styled(
                    self.calendar.prompt_message(self.selected_day),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {}_", self.input_buffer)),
            ])
        } else {
            let view = self.calendar.view_state();
            let date = format!("{}-{}-{}", self.selected_day, view.month_number(), view.year);
            let title = self
                .calendar
                .grid()
                .day(self.selected_day)
                .and_then(|c| c.title())
                .unwrap_or("(no event)");
            Line::from(format!("{date}: {title}"))
        };
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }

    fn render_coming_soon(&self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(44, 7, area);
        let lines = vec![
            Line::from(Span::styled(
                "Coming Soon",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("{} is not available yet.", TABS[self.active_tab])),
            Line::from(Span::styled(
                "Esc / Enter / c to close",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        let p = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(Clear, popup);
        f.render_widget(p, popup);
    }
}

fn render_help(f: &mut Frame, area: Rect) {
    let key_rows: Vec<Row> = vec![
        Row::new(vec!["← → ↑ ↓", "Move day", "p / n", "Prev/next month"]),
        Row::new(vec!["Enter", "Add/view event", "t", "Today"]),
        Row::new(vec!["Tab / 1-5", "Switch tab", "q", "Quit"]),
    ];
    let table = Table::new(
        key_rows,
        [
            Constraint::Length(12),
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .block(Block::default().borders(Borders::ALL).title(" Keys "));
    f.render_widget(table, area);
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app<C: Clock>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<C>,
) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Determines the ratatui `Style` for a day cell based on its state.
pub(crate) fn day_cell_style(
    is_selected: bool,
    is_today: bool,
    is_holiday: bool,
    has_event: bool,
) -> Style {
    if is_selected {
        let bg = if has_event {
            Color::Cyan
        } else if is_holiday {
            Color::Red
        } else {
            Color::White
        };
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else if has_event {
        let mut s = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED);
        if is_today {
            s = s.add_modifier(Modifier::REVERSED);
        }
        s
    } else if is_holiday {
        let mut s = Style::default().fg(Color::Red);
        if is_today {
            s = s.add_modifier(Modifier::REVERSED);
        }
        s
    } else if is_today {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default()
    }
}
