//! Interactive calculator TUI using ratatui.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap},
    Frame, Terminal,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sizing_calc::{CalculatorState, ComparisonAggregator, ACCOUNT_VALUE_MAX};
use sizing_core::format::{format_amount, format_eur, format_eur_signed, format_percent, format_percent_signed};
use sizing_core::{Grade, SizingError, SizingMethod};
use std::io;
use std::time::Duration;
use tracing::debug;

use crate::content::{self, Section};
use crate::Tab;

/// Account change per `+`/`-` key press.
const ACCOUNT_STEP: Decimal = dec!(10000);

/// Dashboard state.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub calculator: CalculatorState,
    pub tab: Tab,
    pub status: Option<String>,
}

impl DashboardState {
    pub fn new(calculator: CalculatorState) -> Self {
        Self {
            calculator,
            tab: Tab::default(),
            status: None,
        }
    }

    /// Apply a key press. Returns `false` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        self.status = None;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Right | KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::Left | KeyCode::BackTab => self.tab = self.tab.previous(),
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(tab) = Tab::from_index(c as usize - '1' as usize) {
                    self.tab = tab;
                }
            }
            KeyCode::Up => self.calculator.increase_risk(),
            KeyCode::Down => self.calculator.decrease_risk(),
            KeyCode::Char('m') => self.calculator.next_method(),
            KeyCode::Char('g') => self.calculator.next_grade(),
            KeyCode::Char(c @ ('a' | 'b' | 'c' | 'd')) => {
                if let Ok(grade) = c.to_string().parse::<Grade>() {
                    self.calculator.set_grade(grade);
                }
            }
            KeyCode::Char('+') => {
                if !self.calculator.adjust_account(ACCOUNT_STEP) {
                    self.status = Some(format!(
                        "Account value cannot exceed {}",
                        format_amount(ACCOUNT_VALUE_MAX)
                    ));
                }
            }
            KeyCode::Char('-') => {
                if !self.calculator.adjust_account(-ACCOUNT_STEP) {
                    self.status = Some("Account value must stay positive".to_string());
                }
            }
            _ => {}
        }
        true
    }
}

/// Tabbed calculator TUI.
pub struct Dashboard {
    aggregator: ComparisonAggregator,
    refresh_ms: u64,
}

impl Dashboard {
    /// Create a new dashboard.
    pub fn new(aggregator: ComparisonAggregator, refresh_ms: u64) -> Self {
        Self {
            aggregator,
            refresh_ms,
        }
    }

    /// Run the dashboard until the user quits; returns the final state.
    pub fn run(&self, initial: DashboardState) -> io::Result<DashboardState> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let mut state = initial;
        let res = self.run_loop(&mut terminal, &mut state);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res.map(|_| state)
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        state: &mut DashboardState,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.ui(f, state))?;

            if event::poll(Duration::from_millis(self.refresh_ms))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if !state.handle_key(key.code) {
                        return Ok(());
                    }
                    debug!(
                        tab = %state.tab,
                        account = %state.calculator.account_value(),
                        risk = %state.calculator.risk_percent(),
                        method = %state.calculator.method(),
                        grade = %state.calculator.grade(),
                        "input changed"
                    );
                }
            }
        }
    }

    fn ui(&self, frame: &mut Frame, state: &DashboardState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Tabs
                Constraint::Min(10),   // Body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);
        self.render_tabs(frame, chunks[1], state);
        match state.tab {
            Tab::Beginner => self.render_sections(frame, chunks[2], "Read this first", content::beginner()),
            Tab::Calculator => self.render_calculator(frame, chunks[2], state),
            Tab::Grades => self.render_grades(frame, chunks[2], state),
            Tab::Comparison => self.render_comparison(frame, chunks[2], state),
            Tab::Poker => self.render_sections(frame, chunks[2], "Poker analogy", content::poker()),
        }
        self.render_footer(frame, chunks[3], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                "Position Sizing Calculator",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled("bet big on your A-trades", Style::default().fg(Color::Yellow)),
            Span::raw(" | Press 'q' to quit"),
        ])])
        .block(Block::default().borders(Borders::ALL).title("System"));
        frame.render_widget(header, area);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let titles: Vec<Line> = Tab::all()
            .iter()
            .map(|t| Line::from(format!("{} {}", t.index() + 1, t.title())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(state.tab.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL).title("Pages"));
        frame.render_widget(tabs, area);
    }

    fn render_sections(&self, frame: &mut Frame, area: Rect, title: &str, sections: &[Section]) {
        let mut lines = Vec::new();
        for section in sections {
            lines.push(Line::from(Span::styled(
                section.title,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for paragraph in section.paragraphs {
                lines.push(Line::from(*paragraph));
            }
            for bullet in section.bullets {
                lines.push(Line::from(format!("  • {}", bullet)));
            }
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title.to_string()));
        frame.render_widget(paragraph, area);
    }

    fn render_calculator(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let calc = &state.calculator;
        let mut settings = vec![
            Line::from(vec![
                Span::raw("Account value:  "),
                Span::styled(
                    format_amount(calc.account_value()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("   (+/-)"),
            ]),
            Line::from(vec![
                Span::raw("Base risk per D-trade:  "),
                Span::styled(
                    format!("{}%", calc.risk_percent().normalize()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("   (up/down)"),
            ]),
            Line::from(""),
            Line::from(Span::styled("Sizing method (m)", Style::default().add_modifier(Modifier::BOLD))),
        ];
        for method in SizingMethod::all() {
            let selected = *method == calc.method();
            let marker = if selected { "(•)" } else { "( )" };
            let style = if selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            settings.push(Line::from(Span::styled(
                format!("{} {}", marker, method.display_name()),
                style,
            )));
            settings.push(Line::from(format!("      {}", method.audience())));
        }
        settings.push(Line::from(""));
        settings.push(Line::from(Span::styled(
            "Trade grade (a/b/c/d)",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        let grade_spans: Vec<Span> = self
            .aggregator
            .grades()
            .iter()
            .flat_map(|(grade, profile)| {
                let style = if grade == calc.grade() {
                    Style::default()
                        .fg(Color::Black)
                        .bg(parse_hex_color(&profile.color))
                } else {
                    Style::default()
                };
                [Span::styled(format!(" {} ", profile.name), style), Span::raw(" ")]
            })
            .collect();
        settings.push(Line::from(grade_spans));

        let settings = Paragraph::new(settings)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Your settings"));
        frame.render_widget(settings, chunks[0]);

        let rec = match self.aggregator.sizer().recommend(calc) {
            Ok(rec) => rec,
            Err(e) => return render_error(frame, chunks[1], &e),
        };
        let profile = self.aggregator.grades().profile(calc.grade());
        let color = parse_hex_color(&profile.color);
        let result = Paragraph::new(vec![
            Line::from("Recommended risk"),
            Line::from(Span::styled(
                format_eur(rec.risk_amount),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{} of account", format_percent(rec.pct_of_account))),
            Line::from(format!(
                "{} base risk x {}",
                format_eur(rec.base_risk),
                rec.multiplier.normalize()
            )),
            Line::from(""),
            Line::from(format!("Win rate:        {}%", profile.win_rate.normalize())),
            Line::from(format!("Risk/Reward:     {}", profile.risk_reward())),
            Line::from(format!("Expected value:  {:.2}", profile.ev)),
            Line::from(format!("Frequency:       {}", profile.frequency)),
            Line::from(""),
            Line::from(profile.description.as_str()),
            Line::from(format!("Examples: {}", profile.examples)),
        ])
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} position size", profile.name)),
        );
        frame.render_widget(result, chunks[1]);
    }

    fn render_grades(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let header_cells = ["Grade", "Win rate", "R:R", "EV", "Frequency", "Trades/yr"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells).height(1);

        let distribution = self.aggregator.distribution();
        let rows = self.aggregator.grades().iter().map(|(grade, profile)| {
            let mut name_style = Style::default().fg(parse_hex_color(&profile.color));
            if grade == state.calculator.grade() {
                name_style = name_style.add_modifier(Modifier::BOLD);
            }
            Row::new(vec![
                Cell::from(profile.name.clone()).style(name_style),
                Cell::from(format!("{}%", profile.win_rate.normalize())),
                Cell::from(profile.risk_reward()),
                Cell::from(format!("{:.2}", profile.ev)),
                Cell::from(profile.frequency.clone()),
                Cell::from(format!("{}", distribution.count(grade))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(15),
                Constraint::Percentage(12),
                Constraint::Percentage(10),
                Constraint::Percentage(10),
                Constraint::Percentage(35),
                Constraint::Percentage(18),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Trade grades"));

        frame.render_widget(table, area);
    }

    fn render_comparison(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let calc = &state.calculator;
        let comparison = match self
            .aggregator
            .compute(calc.account_value(), calc.risk_percent())
        {
            Ok(comparison) => comparison,
            Err(e) => return render_error(frame, area, &e),
        };
        let dist = &comparison.distribution;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(6)])
            .split(area);

        let assumptions = Paragraph::new(vec![
            Line::from(format!(
                "{} trades per year: {}x A, {}x B, {}x C, {}x D",
                dist.total(),
                dist.count(Grade::A),
                dist.count(Grade::B),
                dist.count(Grade::C),
                dist.count(Grade::D)
            )),
            Line::from(format!("Account value: {}", format_amount(calc.account_value()))),
            Line::from(format!("Base risk (D-trade): {}%", calc.risk_percent().normalize())),
        ])
        .block(Block::default().borders(Borders::ALL).title("Assumptions"));
        frame.render_widget(assumptions, chunks[0]);

        let header_cells = ["Method", "Total P&L", "Performance", "A-trade share"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells).height(1);

        let rows = comparison.iter().map(|outcome| {
            let color = if outcome.is_profitable() {
                Color::Green
            } else {
                Color::Red
            };
            let share = outcome
                .share_of_pl(Grade::A)
                .map(format_percent)
                .unwrap_or_else(|| "-".to_string());
            Row::new(vec![
                Cell::from(outcome.method.display_name()),
                Cell::from(format_eur_signed(outcome.total_pl)).style(Style::default().fg(color)),
                Cell::from(format_percent_signed(outcome.performance_pct))
                    .style(Style::default().fg(color)),
                Cell::from(share),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(25),
                Constraint::Percentage(20),
                Constraint::Percentage(25),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Power of exponential sizing"));

        frame.render_widget(table, chunks[1]);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let line = match &state.status {
            Some(status) => Line::from(Span::styled(status.as_str(), Style::default().fg(Color::Red))),
            None => Line::from(Span::styled(content::FOOTER, Style::default().fg(Color::DarkGray))),
        };
        let footer = Paragraph::new(vec![line])
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }
}

fn render_error(frame: &mut Frame, area: Rect, error: &SizingError) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        error.to_string(),
        Style::default().fg(Color::Red),
    )))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Error"));
    frame.render_widget(paragraph, area);
}

/// Parse `#rrggbb` into a terminal color.
fn parse_hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Color::White;
    }
    match u32::from_str_radix(digits, 16) {
        Ok(rgb) => Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8),
        Err(_) => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn render(state: &DashboardState) -> String {
        let dashboard = Dashboard::new(ComparisonAggregator::default(), 250);
        let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
        terminal.draw(|f| dashboard.ui(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_key_navigation() {
        let mut state = DashboardState::default();

        assert!(state.handle_key(KeyCode::Right));
        assert_eq!(state.tab, Tab::Calculator);
        assert!(state.handle_key(KeyCode::Char('4')));
        assert_eq!(state.tab, Tab::Comparison);
        assert!(state.handle_key(KeyCode::Left));
        assert_eq!(state.tab, Tab::Grades);
        assert!(!state.handle_key(KeyCode::Char('q')));
        assert!(!state.handle_key(KeyCode::Esc));
    }

    #[test]
    fn test_key_inputs() {
        let mut state = DashboardState::default();

        state.handle_key(KeyCode::Up);
        assert_eq!(state.calculator.risk_percent(), dec!(1.25));
        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Down);
        assert_eq!(state.calculator.risk_percent(), dec!(0.75));

        state.handle_key(KeyCode::Char('m'));
        assert_eq!(state.calculator.method(), SizingMethod::Wild);
        state.handle_key(KeyCode::Char('c'));
        assert_eq!(state.calculator.grade(), Grade::C);
        state.handle_key(KeyCode::Char('+'));
        assert_eq!(state.calculator.account_value(), dec!(110000));
    }

    #[test]
    fn test_account_cannot_reach_zero() {
        let calculator =
            CalculatorState::new(dec!(10000), dec!(1), SizingMethod::Equal, Grade::A).unwrap();
        let mut state = DashboardState::new(calculator);

        state.handle_key(KeyCode::Char('-'));
        assert_eq!(state.calculator.account_value(), dec!(10000));
        assert!(state.status.is_some());

        state.handle_key(KeyCode::Char('+'));
        assert!(state.status.is_none());
    }

    #[test]
    fn test_render_calculator() {
        let mut state = DashboardState::default();
        state.tab = Tab::Calculator;

        let screen = render(&state);
        assert!(screen.contains("A-Trade position size"));
        assert!(screen.contains("€8.000,00"));
        assert!(screen.contains("8.00% of account"));
        assert!(screen.contains("Exponential wild"));
    }

    #[test]
    fn test_render_comparison() {
        let mut state = DashboardState::default();
        state.tab = Tab::Comparison;

        let screen = render(&state);
        assert!(screen.contains("+€5.000,00"));
        assert!(screen.contains("+€262.200,00"));
        assert!(screen.contains("100 trades per year"));
    }

    #[test]
    fn test_render_grades_and_text_pages() {
        let mut state = DashboardState::default();

        state.tab = Tab::Grades;
        let screen = render(&state);
        assert!(screen.contains("D-Trade"));
        assert!(screen.contains("Trades/yr"));

        state.tab = Tab::Beginner;
        assert!(render(&state).contains("Read this first"));

        state.tab = Tab::Poker;
        assert!(render(&state).contains("The decisive question"));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#38a169"), Color::Rgb(0x38, 0xa1, 0x69));
        assert_eq!(parse_hex_color("bogus"), Color::White);
        assert_eq!(parse_hex_color("#zzzzzz"), Color::White);
        // six bytes but not six hex digits
        assert_eq!(parse_hex_color("#aééb"), Color::White);
        assert_eq!(parse_hex_color("+abcde"), Color::White);
    }

    #[test]
    fn test_account_cannot_exceed_maximum() {
        let calculator =
            CalculatorState::new(ACCOUNT_VALUE_MAX, dec!(1), SizingMethod::Equal, Grade::A).unwrap();
        let mut state = DashboardState::new(calculator);

        state.handle_key(KeyCode::Char('+'));
        assert_eq!(state.calculator.account_value(), ACCOUNT_VALUE_MAX);
        assert!(state.status.is_some());
    }

    #[test]
    fn test_render_overflow_shows_error() {
        let mut grades = sizing_core::GradeTable::default();
        grades.0.a.ev = dec!(100000000000000000000000000);
        let dashboard = Dashboard::new(
            ComparisonAggregator::new(
                sizing_calc::PositionSizer::default(),
                grades,
                sizing_core::TradeDistribution::default(),
            ),
            250,
        );
        let mut state = DashboardState::default();
        state.tab = Tab::Comparison;

        let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
        terminal.draw(|f| dashboard.ui(f, &state)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Arithmetic overflow"));
    }
}
