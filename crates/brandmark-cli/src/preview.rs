use std::{
    io::Stdout,
    sync::{Arc, Mutex, PoisonError},
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use brandmark_engine::{
    RenderFrame, RenderSession, RenderSink, ScheduleConfig, SharedSession, TickOutcome,
    layout::Theme,
    model::{self, ColorRole, StyledSpan, TextStyle},
    progressive::SinkError,
};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Pause between simulated tokens.
const TOKEN_DELAY: Duration = Duration::from_millis(8);
const RULE_WIDTH: usize = 48;

/// What the terminal shows. Written by the sink, read by the draw loop.
#[derive(Debug, Default)]
pub struct View {
    pub lines: Vec<Line<'static>>,
    pub blocks: usize,
    pub settled: usize,
    pub version: u64,
    pub is_final: bool,
    pub aborted: bool,
}

/// Turns frames into styled terminal lines.
pub struct PreviewSink {
    theme: Theme,
    view: Arc<Mutex<View>>,
}

impl PreviewSink {
    pub fn new(theme: Theme, view: Arc<Mutex<View>>) -> Self {
        Self { theme, view }
    }
}

impl RenderSink for PreviewSink {
    fn render(&mut self, frame: &RenderFrame) -> Result<(), SinkError> {
        let mut lines = Vec::new();
        for (i, block) in frame.blocks.iter().enumerate() {
            let start = lines.len();
            block_lines(&self.theme, block, &mut lines);
            // Blocks past the settled prefix may still change; draw them dim.
            if i >= frame.settled {
                for line in &mut lines[start..] {
                    *line = std::mem::take(line).patch_style(Modifier::DIM);
                }
            }
        }

        let mut view = self.view.lock().unwrap_or_else(PoisonError::into_inner);
        view.lines = lines;
        view.blocks = frame.blocks.len();
        view.settled = frame.settled;
        view.version = frame.version;
        view.is_final = frame.is_final;
        Ok(())
    }
}

fn rgb(theme: &Theme, role: ColorRole) -> Color {
    let c = theme.color(role);
    Color::Rgb(c.r, c.g, c.b)
}

fn style(theme: &Theme, text_style: &TextStyle) -> Style {
    let mut style = Style::default().fg(rgb(theme, text_style.color));
    if text_style.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if text_style.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}

fn spans(theme: &Theme, spans: &[StyledSpan]) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|s| Span::styled(s.text.clone(), style(theme, &s.style)))
        .collect()
}

fn prefixed(prefix: Span<'static>, rest: Vec<Span<'static>>) -> Line<'static> {
    let mut all = vec![prefix];
    all.extend(rest);
    Line::from(all)
}

/// Appends the terminal rendering of one block.
pub fn block_lines(theme: &Theme, block: &model::Block, out: &mut Vec<Line<'static>>) {
    let plain = |text: &str, role: ColorRole| {
        Span::styled(text.to_string(), Style::default().fg(rgb(theme, role)))
    };

    match block {
        model::Block::Heading(h) => {
            let marks = if h.level == 1 { "█ " } else { "▍ " };
            out.push(Line::from(vec![
                plain(marks, ColorRole::Accent),
                Span::styled(h.text.clone(), style(theme, &h.style)),
            ]));
        }
        model::Block::SectionSubtitle { text, style: s }
        | model::Block::CoverSubtitle { text, style: s } => {
            out.push(Line::from(Span::styled(text.clone(), style(theme, s))));
        }
        model::Block::Paragraph { spans: s } => out.push(Line::from(spans(theme, s))),
        model::Block::BulletItem { spans: s } => {
            out.push(prefixed(plain("  • ", ColorRole::Accent), spans(theme, s)));
        }
        model::Block::NumberedItem { spans: s, ordinal } => {
            out.push(prefixed(
                plain(&format!("  {ordinal}. "), ColorRole::Heading),
                spans(theme, s),
            ));
        }
        model::Block::Rule => out.push(Line::from(plain(
            &"─".repeat(RULE_WIDTH),
            ColorRole::Accent,
        ))),
        model::Block::Table(table) => {
            let header = Style::default()
                .fg(rgb(theme, ColorRole::TableHeaderText))
                .bg(rgb(theme, table.header_fill))
                .add_modifier(Modifier::BOLD);
            out.push(Line::from(Span::styled(
                format!(" {} ", table.headers.join(" │ ")),
                header,
            )));
            for row in &table.rows {
                out.push(Line::from(format!(" {} ", row.join(" │ "))));
            }
        }
        model::Block::InfoTable { rows } => {
            for (label, value) in rows {
                out.push(Line::from(vec![
                    Span::styled(
                        format!("{label}: "),
                        Style::default()
                            .fg(rgb(theme, ColorRole::Heading))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(value.clone()),
                ]));
            }
        }
        model::Block::CalloutBox(callout) => {
            let bar = || plain("▌ ", ColorRole::Accent);
            let fill = Style::default().bg(rgb(theme, callout.background));
            if let Some(headline) = &callout.headline {
                out.push(
                    Line::from(vec![
                        bar(),
                        Span::styled(headline.clone(), style(theme, &callout.headline_style)),
                    ])
                    .patch_style(fill),
                );
            }
            for line in &callout.body {
                let mut all = vec![bar()];
                if let Some(marker) = line.marker {
                    all.push(plain(&format!("{marker} "), ColorRole::Positive));
                }
                all.extend(spans(theme, &line.spans));
                out.push(Line::from(all).patch_style(fill));
            }
        }
        model::Block::StatCallout {
            value,
            label,
            caption,
        } => {
            out.push(Line::from(vec![
                Span::styled(
                    value.clone(),
                    Style::default()
                        .fg(rgb(theme, ColorRole::StatValue))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {label}")),
            ]));
            if let Some(caption) = caption {
                out.push(Line::from(plain(caption, ColorRole::Muted)));
            }
        }
        model::Block::CoverTitle(cover) => {
            out.push(Line::from(Span::styled(
                cover.line1.clone(),
                style(theme, &cover.line1_style),
            )));
            out.push(Line::from(Span::styled(
                cover.line2.clone(),
                style(theme, &cover.line2_style),
            )));
        }
        model::Block::PageBreak => {
            out.push(Line::default());
            out.push(Line::from(plain(&"┄".repeat(RULE_WIDTH), ColorRole::Muted)));
            out.push(Line::default());
        }
        model::Block::Spacer => out.push(Line::default()),
    }
}

/// Splits text into word-sized tokens, keeping whitespace attached.
pub fn tokens(content: &str) -> Vec<String> {
    content
        .split_inclusive(char::is_whitespace)
        .map(str::to_string)
        .collect()
}

/// Replays `content` token by token into a live terminal preview.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    content: &str,
    theme: Theme,
    schedule: ScheduleConfig,
) -> Result<()> {
    let view = Arc::new(Mutex::new(View::default()));
    let sink = PreviewSink::new(theme, Arc::clone(&view));
    let session = SharedSession::new(RenderSession::new(sink, schedule));

    let producer = {
        let session = session.clone();
        let tokens = tokens(content);
        thread::spawn(move || {
            for token in &tokens {
                if session.push(token).is_err() {
                    return;
                }
                thread::sleep(TOKEN_DELAY);
            }
            if let Err(e) = session.finish() {
                log::error!("final render failed: {e}");
            }
        })
    };

    // Poll often enough that a tick is never late by more than half an interval.
    let poll = (schedule.interval / 2).max(Duration::from_millis(10));
    loop {
        {
            let view = view.lock().unwrap_or_else(PoisonError::into_inner);
            terminal.draw(|f| ui(f, &view))?;
        }

        if event::poll(poll)?
            && let Event::Key(key) = event::read()?
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        {
            if session.is_open() {
                session.abort("interrupted by user");
                view.lock().unwrap_or_else(PoisonError::into_inner).aborted = true;
            }
            break;
        }

        match session.try_tick(Instant::now())? {
            TickOutcome::Dropped => log::debug!("preview tick dropped"),
            TickOutcome::Rendered
            | TickOutcome::Idle
            | TickOutcome::Throttled
            | TickOutcome::Stopped => {}
        }
    }

    if producer.join().is_err() {
        log::error!("token producer panicked");
    }
    Ok(())
}

fn ui(f: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    // Follow the tail of the document while it grows.
    let visible = chunks[0].height.saturating_sub(2) as usize;
    let scroll = view.lines.len().saturating_sub(visible);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    let content = Paragraph::new(view.lines.clone())
        .block(Block::default().borders(Borders::ALL).title("Preview"))
        .scroll((scroll, 0));
    f.render_widget(content, chunks[0]);

    let state = if view.aborted {
        "aborted"
    } else if view.is_final {
        "done"
    } else {
        "streaming"
    };
    let status = Line::from(vec![
        Span::raw(format!(
            "{state} | blocks {} ({} settled) | v{} | ",
            view.blocks, view.settled, view.version
        )),
        Span::raw("q: Quit"),
    ]);
    f.render_widget(Paragraph::new(vec![status]), chunks[1]);
}
