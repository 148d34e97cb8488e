use crate::{
    model::{
        Block, CalloutBox, ColorRole, CoverTitle, FontRole, Heading, SizeRole, StyledLine, Table,
        TextStyle,
    },
    parsing::{
        ParsedDoc,
        inline::{LabelCategory, format, kinds::Emphasis, labels::lookup_prefixed, plain_text},
        rope::span::Span,
    },
};

use super::{
    classify::LineClass,
    kinds::{AtxHeading, Callout, StatFields, parse_table},
    open::BlockOpen,
    types::BlockNode,
};

const H1: TextStyle = TextStyle::new(ColorRole::Heading, FontRole::Heading, SizeRole::H1).bold();
const H2: TextStyle = TextStyle::new(ColorRole::Heading, FontRole::Heading, SizeRole::H2).bold();
const COVER_LINE1: TextStyle =
    TextStyle::new(ColorRole::CoverPrimary, FontRole::Display, SizeRole::Cover).bold();
const COVER_LINE2: TextStyle = TextStyle::new(
    ColorRole::CoverSecondary,
    FontRole::Display,
    SizeRole::CoverSecondary,
);
const COVER_SUBTITLE: TextStyle =
    TextStyle::new(ColorRole::Muted, FontRole::Body, SizeRole::Subtitle);
const SECTION_SUBTITLE: TextStyle =
    TextStyle::new(ColorRole::Muted, FontRole::Body, SizeRole::Subtitle).italic();
const CALLOUT_HEADLINE: TextStyle =
    TextStyle::new(ColorRole::CalloutHeadline, FontRole::Heading, SizeRole::Body).bold();

/// Flags carried from line to line. One per builder, so concurrent scans
/// never share state.
#[derive(Debug, Clone, Default)]
struct ScanState {
    /// Cover mode has ended (`[COVER_END]` or a section heading).
    cover_done: bool,
    cover_title_emitted: bool,
    cover_subtitle_emitted: bool,
    heading_seen: bool,
    /// A page break was just emitted; the next one is redundant.
    suppress_break: bool,
    last_was_blank: bool,
    /// A heading was emitted and only spacers have followed it.
    section_just_opened: bool,
    /// Ordinal of the last numbered item in the current run, 0 outside a run.
    ordinal: u32,
}

/// Multi-line runs that are only emitted once they end.
#[derive(Debug, Clone)]
enum RunState {
    None,
    Callout { span: Span, lines: Vec<String> },
    Table { span: Span, lines: Vec<String> },
}

/// Phase 2 of block parsing: the directive state machine.
///
/// Lines are pushed in order; single-line blocks are emitted immediately and
/// callout/table runs when the first line outside the run arrives (or at
/// [`finish`](Self::finish)).
pub struct BlockBuilder {
    state: ScanState,
    run: RunState,
    out: Vec<BlockNode>,
    /// Index of the first block that more input could still change.
    tail_mark: Option<usize>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: ScanState::default(),
            run: RunState::None,
            out: vec![],
            tail_mark: None,
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        // An unterminated line may still grow into something else, and so may
        // the run it continues or closes.
        if !c.terminated && self.tail_mark.is_none() {
            self.tail_mark = Some(self.out.len());
        }

        if self.extend_run(c) {
            return;
        }
        self.flush_run();

        if c.is_blank {
            self.blank(c.line);
            return;
        }
        self.state.last_was_blank = false;

        match &c.open {
            Some(BlockOpen::CoverEnd) => {
                self.page_break(c.line);
                self.state.cover_done = true;
                self.state.suppress_break = true;
            }
            Some(BlockOpen::Stat(stat)) => self.stat(stat, c.line),
            Some(BlockOpen::Quote) => {
                self.run = RunState::Callout {
                    span: c.line,
                    lines: vec![c.text.clone()],
                };
            }
            Some(BlockOpen::TableRow) => {
                self.run = RunState::Table {
                    span: c.line,
                    lines: vec![c.text.clone()],
                };
            }
            Some(BlockOpen::Heading { depth: 1, text }) => self.title_heading(text, c.line),
            Some(BlockOpen::Heading { depth: 2, text }) => {
                self.state.cover_done = true;
                self.page_break(c.line);
                self.heading(1, text, c.line);
            }
            Some(BlockOpen::Heading { text, .. }) => {
                self.state.cover_done = true;
                self.heading(2, text, c.line);
            }
            Some(BlockOpen::Bullet(text)) => self.emit(
                Block::BulletItem {
                    spans: format(text, TextStyle::BODY),
                },
                c.line,
            ),
            Some(BlockOpen::Numbered(text)) => {
                let ordinal = self.state.ordinal + 1;
                self.emit(
                    Block::NumberedItem {
                        spans: format(text, TextStyle::BODY),
                        ordinal,
                    },
                    c.line,
                );
            }
            Some(BlockOpen::Rule) => self.emit(Block::Rule, c.line),
            None => self.text(&c.text, c.line),
        }
    }

    pub fn finish(mut self) -> ParsedDoc {
        // EOF flush. An open run could still take more lines.
        if !matches!(self.run, RunState::None) {
            let mark = self.out.len();
            self.tail_mark = Some(self.tail_mark.map_or(mark, |m| m.min(mark)));
        }
        self.flush_run();

        let settled = self.tail_mark.unwrap_or(self.out.len());
        ParsedDoc {
            blocks: self.out,
            settled,
        }
    }

    fn emit(&mut self, block: Block, span: Span) {
        let s = &mut self.state;
        match &block {
            Block::Spacer => {}
            Block::PageBreak => {
                s.suppress_break = true;
                s.section_just_opened = false;
                s.ordinal = 0;
            }
            Block::Heading(_) => {
                s.suppress_break = false;
                s.section_just_opened = true;
                s.heading_seen = true;
                s.ordinal = 0;
            }
            Block::NumberedItem { ordinal, .. } => {
                s.suppress_break = false;
                s.section_just_opened = false;
                s.ordinal = *ordinal;
            }
            _ => {
                s.suppress_break = false;
                s.section_just_opened = false;
                s.ordinal = 0;
            }
        }
        self.out.push(BlockNode { block, span });
    }

    fn page_break(&mut self, span: Span) {
        if self.state.suppress_break || self.out.is_empty() {
            return;
        }
        self.emit(Block::PageBreak, span);
    }

    fn blank(&mut self, span: Span) {
        if self.out.is_empty() {
            return;
        }
        let after_spacer = matches!(self.out.last(), Some(BlockNode { block: Block::Spacer, .. }));
        if !self.state.last_was_blank && !after_spacer {
            self.emit(Block::Spacer, span);
        }
        self.state.last_was_blank = true;
    }

    fn heading(&mut self, level: u8, text: &str, span: Span) {
        let style = if level == 1 { H1 } else { H2 };
        self.emit(
            Block::Heading(Heading {
                level,
                text: plain_text(text),
                style,
            }),
            span,
        );
    }

    /// `# ` lines: the cover title while still in cover mode with no heading
    /// seen yet, otherwise a major section heading.
    fn title_heading(&mut self, text: &str, span: Span) {
        let text = plain_text(text);
        let s = &self.state;
        if !s.cover_done && !s.cover_title_emitted && !s.heading_seen
            && let Some((line1, line2)) = AtxHeading::split_cover_title(&text)
        {
            self.emit(
                Block::CoverTitle(CoverTitle {
                    line1,
                    line2,
                    line1_style: COVER_LINE1,
                    line2_style: COVER_LINE2,
                }),
                span,
            );
            self.state.cover_title_emitted = true;
            self.state.heading_seen = true;
            return;
        }

        let first_cover_heading = !self.state.cover_done && !self.state.heading_seen;
        if !first_cover_heading {
            self.page_break(span);
        }
        self.heading(1, &text, span);
    }

    fn stat(&mut self, stat: &StatFields, span: Span) {
        self.emit(
            Block::StatCallout {
                value: plain_text(&stat.value),
                label: plain_text(&stat.label),
                caption: stat.caption.as_deref().map(plain_text),
            },
            span,
        );
    }

    fn text(&mut self, text: &str, span: Span) {
        if self.state.section_just_opened
            && let Some(inner) = Emphasis::strip_lone(text)
        {
            let color = lookup_prefixed(inner)
                .map(LabelCategory::color_role)
                .unwrap_or(ColorRole::Muted);
            self.emit(
                Block::SectionSubtitle {
                    text: inner.to_string(),
                    style: SECTION_SUBTITLE.with_color(color),
                },
                span,
            );
            return;
        }

        let s = &self.state;
        if !s.cover_done && s.cover_title_emitted && !s.cover_subtitle_emitted {
            self.emit(
                Block::CoverSubtitle {
                    text: plain_text(text),
                    style: COVER_SUBTITLE,
                },
                span,
            );
            self.state.cover_subtitle_emitted = true;
            return;
        }

        self.emit(
            Block::Paragraph {
                spans: format(text, TextStyle::BODY),
            },
            span,
        );
    }

    /// Appends the line to the open run if it belongs there.
    fn extend_run(&mut self, c: &LineClass) -> bool {
        match (&mut self.run, &c.open) {
            (RunState::Callout { span, lines }, Some(BlockOpen::Quote))
            | (RunState::Table { span, lines }, Some(BlockOpen::TableRow)) => {
                *span = span.cover(c.line);
                lines.push(c.text.clone());
                true
            }
            _ => false,
        }
    }

    fn flush_run(&mut self) {
        match std::mem::replace(&mut self.run, RunState::None) {
            RunState::None => {}
            RunState::Callout { span, lines } => self.flush_callout(span, &lines),
            RunState::Table { span, lines } => self.flush_table(span, &lines),
        }
    }

    fn flush_callout(&mut self, span: Span, lines: &[String]) {
        let mut headline = None;
        let mut body = Vec::new();

        for line in lines {
            let content = Callout::content(line);
            if content.is_empty() {
                continue;
            }
            if Callout::is_status_line(content) {
                log::trace!("dropping status line {content:?}");
                continue;
            }
            if headline.is_none()
                && body.is_empty()
                && let Some(h) = Callout::headline(content)
            {
                headline = Some(plain_text(h));
                continue;
            }
            let styled = match Callout::bullet_body(content) {
                Some(item) => StyledLine {
                    marker: Some(Callout::CHECK),
                    spans: format(item, TextStyle::CALLOUT),
                },
                None => StyledLine {
                    marker: None,
                    spans: format(content, TextStyle::CALLOUT),
                },
            };
            body.push(styled);
        }

        if headline.is_none() && body.is_empty() {
            return;
        }

        let headline_color = headline
            .as_deref()
            .and_then(lookup_prefixed)
            .map(LabelCategory::color_role)
            .unwrap_or(ColorRole::CalloutHeadline);
        self.emit(
            Block::CalloutBox(CalloutBox {
                headline,
                body,
                background: ColorRole::CalloutBackground,
                headline_style: CALLOUT_HEADLINE.with_color(headline_color),
            }),
            span,
        );
    }

    fn flush_table(&mut self, span: Span, lines: &[String]) {
        let parsed = parse_table(lines);
        if parsed.headers.is_empty() {
            return;
        }

        let block = if parsed.is_info_table {
            Block::InfoTable {
                rows: parsed
                    .rows
                    .into_iter()
                    .map(|row| {
                        let mut cells = row.into_iter();
                        let label = cells.next().unwrap_or_default();
                        let value = cells.next().unwrap_or_default();
                        (label, value)
                    })
                    .collect(),
            }
        } else {
            Block::Table(Table {
                headers: parsed.headers,
                rows: parsed.rows,
                header_fill: ColorRole::TableHeaderFill,
                banded_row: ColorRole::BandedRow,
            })
        };
        self.emit(block, span);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
