//! TUI rendering
//!
//! The phone is drawn as a rounded frame centered in the terminal: a status
//! bar, the active screen, a hint or message line, and a home indicator.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::{PhoneApp, Screen, WeatherStatus};
use super::keypad::KeypadWidget;
use crate::home::{HomeApp, GRID_COLUMNS, GRID_ROWS};
use crate::wallpaper::BUILTIN;

/// Widest the phone frame gets, in cells
pub const PHONE_COLS: u16 = 44;

/// Tallest the phone frame gets, in cells
pub const PHONE_ROWS: u16 = 32;

const HOME_INDICATOR: &str = "━━━━━━━━━━";

const TILE_ROWS: u16 = 4;

/// Renders the phone to the frame
pub fn render(app: &PhoneApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(PhoneUI::new(app), area);
}

/// Regions of the phone frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneLayout {
    /// Outer frame
    pub phone: Rect,
    /// Status bar
    pub status: Rect,
    /// Active screen
    pub body: Rect,
    /// Hint or message line
    pub message: Rect,
    /// Home indicator
    pub indicator: Rect,
}

impl PhoneLayout {
    /// Centers the phone in `area` and splits it
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let width = area.width.min(PHONE_COLS);
        let height = area.height.min(PHONE_ROWS);
        let phone = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };
        let inner = Block::default().borders(Borders::ALL).inner(phone);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        Self {
            phone,
            status: chunks[0],
            body: chunks[1],
            message: chunks[2],
            indicator: chunks[3],
        }
    }

    /// Calculator display and keypad regions
    #[must_use]
    pub fn calculator(&self) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(self.body);
        (chunks[0], chunks[1])
    }
}

/// Keypad region for a terminal of size `area`, for mouse hit tests
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    PhoneLayout::new(area).calculator().1
}

/// Phone UI widget
#[derive(Debug)]
pub struct PhoneUI<'a> {
    app: &'a PhoneApp,
}

impl<'a> PhoneUI<'a> {
    /// Creates a new phone UI widget
    #[must_use]
    pub const fn new(app: &'a PhoneApp) -> Self {
        Self { app }
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let title = self.app.screen().title();
        let clock = self.app.clock();
        let gap = usize::from(area.width).saturating_sub(clock.len() + title.chars().count() + 2);
        let line = Line::from(vec![
            Span::styled(
                format!(" {clock}"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(gap)),
            Span::styled(title, Style::default().fg(Color::Gray)),
        ]);
        Paragraph::new(line).render(area, buf);
    }

    fn render_home(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(TILE_ROWS * GRID_ROWS as u16),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(TILE_ROWS); GRID_ROWS])
            .split(chunks[1]);
        let selected = self.app.home().selected();

        for (row, row_area) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(*row_area);
            for (col, tile_area) in cols.iter().enumerate() {
                if let Some(tile) = HomeApp::at(col, row) {
                    render_tile(tile, tile == selected, *tile_area, buf);
                }
            }
        }

        let wallpaper = self
            .app
            .wallpaper()
            .map_or_else(|| "none".to_string(), ToString::to_string);
        Paragraph::new(Span::styled(
            format!("Wallpaper: {wallpaper}"),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
    }

    fn render_calculator(&self, layout: &PhoneLayout, buf: &mut Buffer) {
        let (display_area, keypad_area) = layout.calculator();
        let readout = self.app.calculator().readout();

        let style = if readout.is_error() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        Paragraph::new(Span::styled(readout.text(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(display_area, buf);

        KeypadWidget::new(self.app.keypad()).render(keypad_area, buf);
    }

    fn render_notes(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        render_input(self.app.note_input(), " New note ", chunks[0], buf);

        let selected = self.app.note_selected();
        let items: Vec<ListItem> = self
            .app
            .notes()
            .notes()
            .iter()
            .enumerate()
            .map(|(i, note)| {
                let marker_style = if i == selected {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        note.stamp().unwrap_or_default().to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(" "),
                    Span::styled(note.body().to_string(), marker_style),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(format!(" Notes ({}) ", self.app.notes().len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(chunks[1], buf);
    }

    fn render_weather(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        render_input(self.app.weather_input(), " City ", chunks[0], buf);

        let lines: Vec<Line> = match self.app.weather() {
            WeatherStatus::Idle => Vec::new(),
            WeatherStatus::Searching(_) => vec![Line::styled(
                "Searching…",
                Style::default().fg(Color::Yellow),
            )],
            WeatherStatus::Failed(msg) => {
                vec![Line::styled(msg.clone(), Style::default().fg(Color::Red))]
            }
            WeatherStatus::Ready(report) => report
                .lines()
                .into_iter()
                .enumerate()
                .map(|(i, text)| {
                    if i == 0 {
                        Line::styled(text, Style::default().add_modifier(Modifier::BOLD))
                    } else {
                        Line::raw(text)
                    }
                })
                .collect(),
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(chunks[1].inner(ratatui::layout::Margin::new(0, 1)), buf);
    }

    fn render_settings(&self, area: Rect, buf: &mut Buffer) {
        let current = self.app.wallpaper();
        let mut lines: Vec<Line> = vec![Line::styled(
            "Wallpapers",
            Style::default().add_modifier(Modifier::BOLD),
        )];

        for (i, builtin) in BUILTIN.iter().enumerate() {
            let cursor = if i == self.app.wallpaper_choice() { "▸ " } else { "  " };
            let applied = current.is_some_and(|c| c.to_string() == builtin.name);
            let mark = if applied { " ✓" } else { "" };
            let style = if i == self.app.wallpaper_choice() {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            lines.push(Line::styled(format!("{cursor}{}{mark}", builtin.name), style));
        }

        let offset = self.app.offset();
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!(
            "Offset: x {:+.0}  y {:+.0}",
            offset.x(),
            offset.y()
        )));
        let placement = self
            .app
            .placement()
            .map_or_else(|| "no image".to_string(), |p| p.to_string());
        lines.push(Line::styled(placement, Style::default().fg(Color::DarkGray)));

        Paragraph::new(lines).render(area, buf);
    }

    fn render_message(&self, area: Rect, buf: &mut Buffer) {
        let span = match self.app.message() {
            Some(msg) if msg.starts_with("Error") => {
                Span::styled(msg, Style::default().fg(Color::Red))
            }
            Some(msg) => Span::styled(msg, Style::default().fg(Color::Yellow)),
            None => Span::styled(
                hint(self.app.screen()),
                Style::default().fg(Color::DarkGray),
            ),
        };
        Paragraph::new(span)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

fn hint(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "arrows move · Enter open · q quit",
        Screen::Calculator => "type or click · Del clear · Esc home",
        Screen::Notes => "Enter add · Del remove · ^S save · Esc",
        Screen::Weather => "Enter search · Esc home",
        Screen::Settings => "Tab next · Enter apply · arrows nudge",
    }
}

fn icon(tile: HomeApp) -> &'static str {
    match tile {
        HomeApp::Calculator => "±",
        HomeApp::Notes => "✎",
        HomeApp::Clock => "◷",
        HomeApp::Weather => "☀",
        HomeApp::Music => "♫",
        HomeApp::Mail => "✉",
        HomeApp::Settings => "⚙",
        HomeApp::Photos => "▣",
    }
}

fn render_tile(tile: HomeApp, selected: bool, area: Rect, buf: &mut Buffer) {
    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if tile.is_demo_only() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let lines = vec![
        Line::raw(""),
        Line::styled(icon(tile), style),
        Line::styled(tile.label(), style),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_input(text: &str, title: &str, area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::raw(text),
        Span::styled(" ", Style::default().bg(Color::White)),
    ]);
    Paragraph::new(line)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .render(area, buf);
}

impl Widget for PhoneUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = PhoneLayout::new(area);

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::White))
            .render(layout.phone, buf);

        self.render_status(layout.status, buf);
        match self.app.screen() {
            Screen::Home => self.render_home(layout.body, buf),
            Screen::Calculator => self.render_calculator(&layout, buf),
            Screen::Notes => self.render_notes(layout.body, buf),
            Screen::Weather => self.render_weather(layout.body, buf),
            Screen::Settings => self.render_settings(layout.body, buf),
        }
        self.render_message(layout.message, buf);

        Paragraph::new(HOME_INDICATOR)
            .alignment(Alignment::Center)
            .render(layout.indicator, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CalcKey;
    use crate::config::PhoneConfig;
    use crate::tui::input::KeyAction;
    use crate::weather::WeatherError;
    use chrono::Local;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> (tempfile::TempDir, PhoneApp) {
        let dir = tempfile::tempdir().unwrap();
        let app = PhoneApp::new(PhoneConfig::new().with_data_dir(dir.path())).unwrap();
        (dir, app)
    }

    fn draw(app: &PhoneApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 34)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buf_to_string(terminal.backend().buffer())
    }

    fn buf_to_string(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== Layout tests =====

    #[test]
    fn test_layout_centers_phone() {
        let layout = PhoneLayout::new(Rect::new(0, 0, 60, 34));
        assert_eq!(layout.phone, Rect::new(8, 1, PHONE_COLS, PHONE_ROWS));
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.indicator.y, layout.phone.bottom() - 2);
    }

    #[test]
    fn test_layout_shrinks_to_terminal() {
        let layout = PhoneLayout::new(Rect::new(0, 0, 20, 10));
        assert_eq!(layout.phone, Rect::new(0, 0, 20, 10));
    }

    // ===== Screen rendering =====

    #[test]
    fn test_render_home() {
        let (_dir, app) = app();
        let content = draw(&app);
        for label in ["Calculator", "Notes", "Weather", "Photos", "Settings"] {
            assert!(content.contains(label), "missing {label}");
        }
        assert!(content.contains(app.clock()));
        assert!(content.contains("Wallpaper: none"));
        assert!(content.contains("q quit"));
    }

    #[test]
    fn test_render_demo_message() {
        let (_dir, mut app) = app();
        app.launch(HomeApp::Mail);
        assert!(draw(&app).contains("Demo only"));
    }

    #[test]
    fn test_render_calculator() {
        let (_dir, mut app) = app();
        app.launch(HomeApp::Calculator);
        for key in CalcKey::parse_sequence("12+7=").unwrap() {
            app.press_calc(key);
        }
        let content = draw(&app);
        assert!(content.contains("19"));
        assert!(content.contains("[7]"));
        assert!(content.contains("[÷]"));
    }

    #[test]
    fn test_render_calculator_error() {
        let (_dir, mut app) = app();
        app.launch(HomeApp::Calculator);
        for key in CalcKey::parse_sequence("7/0=").unwrap() {
            app.press_calc(key);
        }
        assert!(draw(&app).contains("Error"));
    }

    #[test]
    fn test_render_notes() {
        let (_dir, mut app) = app();
        app.launch(HomeApp::Notes);
        for c in "milk".chars() {
            app.handle_action(KeyAction::InsertChar(c), Local::now());
        }
        app.handle_action(KeyAction::Activate, Local::now());
        for c in "eggs".chars() {
            app.handle_action(KeyAction::InsertChar(c), Local::now());
        }

        let content = draw(&app);
        assert!(content.contains("Notes (1)"));
        assert!(content.contains("milk"));
        assert!(content.contains("eggs"));
    }

    #[test]
    fn test_render_weather_states() {
        let (_dir, mut app) = app();
        app.launch(HomeApp::Weather);
        for c in "Oslo".chars() {
            app.handle_action(KeyAction::InsertChar(c), Local::now());
        }
        app.submit_weather();
        assert!(draw(&app).contains("Searching…"));

        let request = app.take_weather_request().unwrap();
        app.finish_weather(request.id, Err(WeatherError::CityNotFound));
        assert!(draw(&app).contains("City not found."));
    }

    #[test]
    fn test_render_settings() {
        let (_dir, mut app) = app();
        app.launch(HomeApp::Settings);
        let content = draw(&app);
        assert!(content.contains("▸ Tiffy"));
        assert!(content.contains("Kitty"));
        assert!(content.contains("Homies"));
        assert!(content.contains("Offset: x +0  y +0"));
        assert!(content.contains("no image"));
    }

    #[test]
    fn test_render_tiny_terminal() {
        let (_dir, app) = app();
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    // ===== Mouse mapping =====

    #[test]
    fn test_keypad_area_matches_rendered_keypad() {
        let (_dir, mut app) = app();
        app.launch(HomeApp::Calculator);
        let terminal_area = Rect::new(0, 0, 60, 34);
        let area = keypad_area(terminal_area);

        let mut buf = Buffer::empty(terminal_area);
        PhoneUI::new(&app).render(terminal_area, &mut buf);

        // Find the rendered "[7]" and click its middle character
        let width = terminal_area.width as usize;
        let content: Vec<&str> = buf.content().iter().map(|c| c.symbol()).collect();
        let seven = content
            .windows(3)
            .position(|w| w == ["[", "7", "]"])
            .unwrap()
            + 1;
        #[allow(clippy::cast_possible_truncation)]
        let (x, y) = ((seven % width) as u16, (seven / width) as u16);

        let index = app.keypad().hit_test(area, x, y).unwrap();
        app.click_keypad(index);
        assert_eq!(app.calculator().display(), "7");
    }
}
