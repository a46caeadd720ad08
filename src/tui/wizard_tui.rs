//! Interactive alert wizard using ratatui.
//!
//! The screen is a thin adapter over [`WizardState`]: the only text it owns
//! is the edit buffer for the current step, which is handed to the state
//! machine on every navigation.

use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::warn;

use crate::alert::{Alert, AlertReport};
use crate::error::{AlertaError, Result};
use crate::export::{ClipboardSink, SystemClipboard, save_message};
use crate::wizard::{FieldKind, Transition, WizardState};

/// Settings the wizard needs from config and flags.
#[derive(Debug, Clone)]
pub struct WizardTuiOptions {
    pub output_dir: PathBuf,
    pub clipboard_enabled: bool,
    /// Copy the message as soon as the last step is done.
    pub auto_copy: bool,
}

/// Action to take after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Continue,
}

#[derive(Debug, Clone)]
enum Screen {
    Collect,
    Result(AlertReport),
}

/// Blocking popup; any key dismisses it.
#[derive(Debug, Clone)]
struct Notice {
    title: String,
    body: String,
}

/// TUI application state.
pub struct WizardTui<C: ClipboardSink> {
    wizard: WizardState,
    /// Edit buffer for the current step
    input: String,
    screen: Screen,
    notice: Option<Notice>,
    status_message: Option<String>,
    options: WizardTuiOptions,
    clipboard: C,
}

impl<C: ClipboardSink> WizardTui<C> {
    pub fn new(options: WizardTuiOptions, clipboard: C) -> Self {
        let wizard = WizardState::for_alert();
        let input = wizard.current_value().to_string();
        Self {
            wizard,
            input,
            screen: Screen::Collect,
            notice: None,
            status_message: None,
            options,
            clipboard,
        }
    }

    /// Run the TUI main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key.code, key.modifiers)
                }
                Event::Paste(text) => {
                    self.handle_paste(&text);
                    Action::Continue
                }
                _ => Action::Continue,
            };
            if action == Action::Quit {
                return Ok(());
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Action {
        if self.notice.is_some() {
            self.notice = None;
            return Action::Continue;
        }
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        match self.screen {
            Screen::Collect => self.handle_collect_key(key, modifiers),
            Screen::Result(_) => self.handle_result_key(key),
        }
    }

    fn handle_collect_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Action {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match key {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('n') if ctrl => self.next(),
            KeyCode::Char('b') if ctrl => self.back(),
            KeyCode::Char('s') if ctrl => self.skip(),
            KeyCode::Enter => match self.wizard.field().kind {
                FieldKind::MultiLine => self.input.push('\n'),
                FieldKind::SingleLine => self.next(),
            },
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            _ => {}
        }
        Action::Continue
    }

    fn handle_result_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('c') => self.copy(),
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('n') => self.new_alert(),
            _ => {}
        }
        Action::Continue
    }

    fn handle_paste(&mut self, text: &str) {
        if self.notice.is_some() || !matches!(self.screen, Screen::Collect) {
            return;
        }
        match self.wizard.field().kind {
            FieldKind::MultiLine => self.input.push_str(&text.replace("\r\n", "\n")),
            FieldKind::SingleLine => {
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.input.push_str(&flat);
            }
        }
    }

    fn next(&mut self) {
        match self.wizard.submit(&self.input) {
            Ok(transition) => self.apply(transition),
            Err(AlertaError::Validation { .. }) => {
                self.notice = Some(Notice {
                    title: "Campo vazio".to_string(),
                    body: "Preencha o campo antes de prosseguir.".to_string(),
                });
            }
            Err(err) => {
                self.notice = Some(Notice {
                    title: "Erro".to_string(),
                    body: err.to_string(),
                });
            }
        }
    }

    fn skip(&mut self) {
        let transition = self.wizard.skip();
        self.apply(transition);
    }

    fn back(&mut self) {
        if self.wizard.back(&self.input) {
            self.load_input();
        }
    }

    fn apply(&mut self, transition: Transition) {
        self.status_message = None;
        match transition {
            Transition::Advanced(_) => self.load_input(),
            Transition::Completed(values) => self.finish(&values),
        }
    }

    fn load_input(&mut self) {
        self.input = self.wizard.current_value().to_string();
    }

    fn finish(&mut self, values: &[String]) {
        self.screen = Screen::Result(Alert::from_values(values).report());
        if self.options.auto_copy {
            self.copy();
        }
    }

    fn report(&self) -> Option<&AlertReport> {
        match &self.screen {
            Screen::Result(report) => Some(report),
            Screen::Collect => None,
        }
    }

    fn copy(&mut self) {
        if !self.options.clipboard_enabled {
            self.status_message = Some("Clipboard desativado na configuração".to_string());
            return;
        }
        let Some(message) = self.report().map(|report| report.message.clone()) else {
            return;
        };
        match self.clipboard.set_text(&message) {
            Ok(()) => self.status_message = Some("Mensagem copiada!".to_string()),
            Err(err) => {
                warn!(error = %err, "clipboard copy failed");
                self.notice = Some(Notice {
                    title: "Falha ao copiar".to_string(),
                    body: err.to_string(),
                });
            }
        }
    }

    fn save(&mut self) {
        let Some(message) = self.report().map(|report| report.message.clone()) else {
            return;
        };
        match save_message(&self.options.output_dir, &message) {
            Ok(path) => {
                self.status_message = Some(format!("Arquivo salvo como {}", path.display()));
            }
            Err(err) => {
                self.notice = Some(Notice {
                    title: "Falha ao salvar".to_string(),
                    body: err.to_string(),
                });
            }
        }
    }

    fn new_alert(&mut self) {
        self.wizard.reset();
        self.input.clear();
        self.screen = Screen::Collect;
        self.status_message = None;
    }

    fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(5),    // Main content
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Help bar
            ])
            .split(f.area());

        self.draw_title_bar(f, chunks[0]);
        match &self.screen {
            Screen::Collect => self.draw_collect(f, chunks[1]),
            Screen::Result(report) => draw_result(f, chunks[1], report),
        }
        self.draw_status(f, chunks[2]);
        self.draw_help_bar(f, chunks[3]);

        if let Some(notice) = &self.notice {
            draw_notice(f, notice);
        }
    }

    fn draw_title_bar(&self, f: &mut Frame, area: Rect) {
        let progress = match self.screen {
            Screen::Collect => format!(
                " | Passo {} de {}",
                self.wizard.step() + 1,
                self.wizard.len()
            ),
            Screen::Result(_) => " | Alerta formatado".to_string(),
        };
        let title = Line::from(vec![
            Span::styled(
                "Montador de Alertas",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(progress),
        ]);
        f.render_widget(
            Paragraph::new(title).style(Style::default().fg(Color::Cyan)),
            area,
        );
    }

    fn draw_collect(&self, f: &mut Frame, area: Rect) {
        let field = self.wizard.field();
        let input_title = match (field.kind, field.required) {
            (FieldKind::MultiLine, _) => " Texto (Enter: nova linha) ",
            (FieldKind::SingleLine, true) => " Valor ",
            (FieldKind::SingleLine, false) => " Valor (opcional) ",
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(3)])
            .split(area);

        f.render_widget(
            Paragraph::new(field.label).style(Style::default().add_modifier(Modifier::BOLD)),
            chunks[0],
        );

        let paragraph = Paragraph::new(format!("{}_", self.input))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(input_title),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, chunks[1]);
    }

    fn draw_status(&self, f: &mut Frame, area: Rect) {
        let text = self.status_message.as_deref().unwrap_or("");
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::Green)),
            area,
        );
    }

    fn draw_help_bar(&self, f: &mut Frame, area: Rect) {
        let help_text = match self.screen {
            Screen::Result(_) => "c: copiar  s: salvar  n: novo alerta  q: fechar".to_string(),
            Screen::Collect => {
                let next = if self.wizard.is_last_step() {
                    "Concluir"
                } else {
                    "Próximo"
                };
                let back = if self.wizard.can_go_back() {
                    "  Ctrl+B: Voltar"
                } else {
                    ""
                };
                format!("Ctrl+N: {next}{back}  Ctrl+S: Pular  Esc: sair")
            }
        };
        f.render_widget(
            Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

fn draw_result(f: &mut Frame, area: Rect, report: &AlertReport) {
    let reasons_height = u16::try_from(report.classification.reasons.len())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(reasons_height)])
        .split(area);

    let message = Paragraph::new(report.message.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Mensagem pronta "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(message, chunks[0]);

    let team_color = if report.classification.has_suggestion() {
        Color::Green
    } else {
        Color::Yellow
    };
    let mut lines = vec![
        Line::from(Span::styled(
            report.classification.team.clone(),
            Style::default()
                .fg(team_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for reason in &report.classification.reasons {
        lines.push(Line::from(format!("- {reason}")));
    }
    let suggestion = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Sugestão de time "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(suggestion, chunks[1]);
}

fn draw_notice(f: &mut Frame, notice: &Notice) {
    let area = f.area();
    let width = 50.min(area.width.saturating_sub(4));
    let height = 6.min(area.height.saturating_sub(2));
    let popup = Rect::new(
        area.width.saturating_sub(width) / 2,
        area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    f.render_widget(Clear, popup);
    let paragraph = Paragraph::new(vec![
        Line::from(notice.body.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "Pressione qualquer tecla",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" {} ", notice.title)),
    )
    .wrap(Wrap { trim: false });
    f.render_widget(paragraph, popup);
}

/// RAII Guard to ensure terminal state is restored even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
    }
}

/// Run the wizard TUI against the system clipboard.
pub fn run_wizard_tui(options: WizardTuiOptions) -> Result<()> {
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return Err(AlertaError::TerminalRequired(
            "the wizard needs an interactive terminal".to_string(),
        ));
    }

    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    WizardTui::new(options, SystemClipboard::new()).run(&mut terminal)
}
