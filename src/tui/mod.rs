//! Ratatui-based terminal UI.
//!
//! One page: a header with the dataset/model summary, a form list with one
//! control per input field, a result panel, and a footer with key help and
//! the status line. Prediction happens only on an explicit trigger press.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::{run_predict, PredictOutput};
use crate::data::FieldRanges;
use crate::domain::Field;
use crate::error::AppError;
use crate::form::FormState;
use crate::io::ingest::IngestedData;
use crate::model::PriceModel;

/// Start the TUI.
pub fn run(ingest: IngestedData, ranges: FieldRanges, model: PriceModel) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(ingest, ranges, model);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    ingest: IngestedData,
    ranges: FieldRanges,
    model: PriceModel,
    form: FormState,
    selected_field: usize,
    status: String,
    prediction: Option<PredictOutput>,
}

impl App {
    fn new(ingest: IngestedData, ranges: FieldRanges, model: PriceModel) -> Self {
        let form = FormState::defaults(&ranges);
        Self {
            ingest,
            ranges,
            model,
            form,
            selected_field: 0,
            status: "Set the property attributes, then press Enter to predict.".to_string(),
            prediction: None,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field + 1 < Field::ALL.len() {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_selected(-1),
            KeyCode::Right => self.adjust_selected(1),
            KeyCode::Enter | KeyCode::Char('p') => self.predict(),
            KeyCode::Char('r') => {
                self.form = FormState::defaults(&self.ranges);
                self.prediction = None;
                self.status = "Form reset to defaults.".to_string();
            }
            _ => {}
        }
        false
    }

    fn adjust_selected(&mut self, delta: i64) {
        let field = Field::ALL[self.selected_field];
        self.form.adjust(&self.ranges, field, delta);
        self.status = format!(
            "{}: {}",
            field.label(),
            self.form.value_label(&self.ranges, field)
        );
    }

    /// The trigger: assemble the record from current control state and invoke
    /// the model exactly once. Failures land in the status line and leave the
    /// previous result on screen.
    fn predict(&mut self) {
        let record = self.form.assemble(&self.ranges);
        match run_predict(&self.model, record) {
            Ok(out) => {
                self.status = format!("Estimated house price: {}", out.display);
                self.prediction = Some(out);
            }
            Err(err) => {
                self.status = format!("Prediction failed: {err}");
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("mhp", Style::default().fg(Color::Cyan)),
            Span::raw(" — Melbourne house price prediction"),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "{} | model: {}",
                crate::report::format_ingest_summary(&self.ingest),
                self.model.tool,
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(44), Constraint::Length(40)])
            .split(area);

        self.draw_form(frame, chunks[0]);
        self.draw_result(frame, chunks[1]);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = Field::ALL
            .iter()
            .map(|&field| {
                ListItem::new(format!(
                    "{:<24} {}",
                    field.label(),
                    self.form.value_label(&self.ranges, field)
                ))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Property").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_result(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Estimated price").borders(Borders::ALL);

        let mut lines: Vec<Line> = Vec::new();
        match &self.prediction {
            Some(out) => {
                lines.push(Line::from(Span::styled(
                    out.display.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::raw(""));
                lines.push(Line::from(Span::styled(
                    format!(
                        "{} rooms, type {}, {}",
                        out.record.rooms, out.record.property_type, out.record.suburb
                    ),
                    Style::default().fg(Color::Gray),
                )));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "Press Enter to predict.",
                    Style::default().fg(Color::Yellow),
                )));
            }
        }

        let p = Paragraph::new(Text::from(lines)).block(block);
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Enter predict  r reset  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}
