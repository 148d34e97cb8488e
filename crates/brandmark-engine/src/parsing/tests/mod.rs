//! Scanner behavior tests.
//!
//! Block lists are compared through `snapshot::describe`, one line per block.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::model::{Block, ColorRole};
use crate::parsing::{
    parse_str, scan,
    snapshot::{describe, invariants},
};

fn describe_scan(md: &str) -> String {
    let doc = parse_str(md);
    invariants(md.len(), &doc);
    describe(&doc.into_blocks())
}

#[test]
fn empty_document() {
    assert!(scan("").is_empty());
}

#[test]
fn leading_blank_lines_are_void() {
    assert!(scan("\n\n\n").is_empty());
    assert_eq!(describe_scan("\n\n  \nHello"), r#"Paragraph "Hello""#);
}

#[test]
fn cover_sequence_then_section() {
    insta::assert_snapshot!(
        describe_scan("# Hello & World\nSubtitle text\n[COVER_END]\n## Section One\nBody."),
        @r###"
    CoverTitle "Hello" "& World"
    CoverSubtitle "Subtitle text"
    PageBreak
    Heading(1) "Section One"
    Paragraph "Body."
    "###
    );
}

#[test]
fn cover_end_suppresses_break_across_spacers() {
    insta::assert_snapshot!(
        describe_scan("# Audit & Plan\n[COVER_END]\n\n## Scope"),
        @r###"
    CoverTitle "Audit" "& Plan"
    PageBreak
    Spacer
    Heading(1) "Scope"
    "###
    );
}

#[test]
fn cover_end_at_start_emits_no_break() {
    assert_eq!(describe_scan("[COVER_END]\n## A"), r#"Heading(1) "A""#);
}

#[test]
fn section_headings_force_page_breaks() {
    insta::assert_snapshot!(
        describe_scan("Intro\n## A\ntext\n## B"),
        @r###"
    Paragraph "Intro"
    PageBreak
    Heading(1) "A"
    Paragraph "text"
    PageBreak
    Heading(1) "B"
    "###
    );
}

#[test]
fn first_title_heading_in_cover_mode_has_no_break() {
    insta::assert_snapshot!(
        describe_scan("Prepared for Acme\n# Report\nIntro\n# Next"),
        @r###"
    Paragraph "Prepared for Acme"
    Heading(1) "Report"
    Paragraph "Intro"
    PageBreak
    Heading(1) "Next"
    "###
    );
}

#[test]
fn cover_title_follows_leading_text() {
    insta::assert_snapshot!(
        describe_scan("Intro\n# A & B"),
        @r###"
    Paragraph "Intro"
    CoverTitle "A" "& B"
    "###
    );
}

#[test]
fn cover_title_follows_leading_callout() {
    insta::assert_snapshot!(
        describe_scan("> Phase 1: x\n\n# Hello & World\nSub"),
        @r###"
    CalloutBox headline=None body=["Phase 1: x"]
    Spacer
    CoverTitle "Hello" "& World"
    CoverSubtitle "Sub"
    "###
    );
}

#[test]
fn section_heading_ends_cover_mode() {
    insta::assert_snapshot!(
        describe_scan("# A & B\n## S\ntext"),
        @r###"
    CoverTitle "A" "& B"
    PageBreak
    Heading(1) "S"
    Paragraph "text"
    "###
    );
}

#[test]
fn only_one_cover_sequence() {
    insta::assert_snapshot!(
        describe_scan("# A & B\nSub\n# X & Y\nmore"),
        @r###"
    CoverTitle "A" "& B"
    CoverSubtitle "Sub"
    PageBreak
    Heading(1) "X & Y"
    Paragraph "more"
    "###
    );
}

#[test]
fn no_cover_title_after_a_heading() {
    insta::assert_snapshot!(
        describe_scan("# Report\n# A & B"),
        @r###"
    Heading(1) "Report"
    PageBreak
    Heading(1) "A & B"
    "###
    );
}

#[test]
fn nested_quote_prefixes_flatten_into_one_callout() {
    insta::assert_snapshot!(
        describe_scan("> **Tip**\n>> nested line\n> > - spaced bullet"),
        @r###"
    CalloutBox headline=Some("Tip") body=["nested line", "✓ spaced bullet"]
    "###
    );
}

#[test]
fn deeper_headings_are_subsections_without_breaks() {
    insta::assert_snapshot!(
        describe_scan("Text\n### Sub\n#### Deeper\n## **Bold** section"),
        @r###"
    Paragraph "Text"
    Heading(2) "Sub"
    Heading(2) "Deeper"
    PageBreak
    Heading(1) "Bold section"
    "###
    );
}

#[test]
fn numbered_ordinals_follow_runs_not_source_numbers() {
    insta::assert_snapshot!(
        describe_scan("1. a\n\n5. b\n- c\n7. d"),
        @r###"
    NumberedItem(1) "a"
    Spacer
    NumberedItem(2) "b"
    BulletItem "c"
    NumberedItem(1) "d"
    "###
    );
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(7)]
fn blank_runs_collapse_to_one_spacer(#[case] n: usize) {
    let md = format!("first{}second", "\n".repeat(n + 1));
    let blocks = scan(&md);
    let spacers = blocks.iter().filter(|b| matches!(b, Block::Spacer)).count();
    assert_eq!(spacers, 1);
    assert_eq!(blocks.len(), 3);
}

#[test]
fn italic_line_after_heading_is_section_subtitle() {
    insta::assert_snapshot!(
        describe_scan("## Findings\n*Warning: traffic fell*\n*second*"),
        @r###"
    Heading(1) "Findings"
    SectionSubtitle "Warning: traffic fell" Warning
    Paragraph "second"
    "###
    );
}

#[test]
fn section_subtitle_survives_a_spacer() {
    insta::assert_snapshot!(
        describe_scan("### Notes\n\n*Gathered in March*"),
        @r###"
    Heading(2) "Notes"
    Spacer
    SectionSubtitle "Gathered in March" Muted
    "###
    );
}

#[test]
fn callout_drops_status_lines_and_checks_bullets() {
    let blocks = scan("> **Key Insight**\n> - Thing one\n> Fetching data...\n> - Thing two");
    assert_eq!(blocks.len(), 1);
    let Block::CalloutBox(callout) = &blocks[0] else {
        panic!("expected callout, got {:?}", blocks[0]);
    };
    assert_eq!(callout.headline.as_deref(), Some("Key Insight"));
    assert_eq!(callout.headline_style.color, ColorRole::Positive);
    assert_eq!(callout.background, ColorRole::CalloutBackground);
    let body: Vec<_> = callout.body.iter().map(|l| (l.marker, l.text())).collect();
    assert_eq!(
        body,
        vec![
            (Some('✓'), "Thing one".to_string()),
            (Some('✓'), "Thing two".to_string()),
        ]
    );
}

#[test]
fn callout_of_only_status_lines_emits_nothing() {
    assert!(scan("> Pulling data\n> Analyzing results").is_empty());
    insta::assert_snapshot!(
        describe_scan("Before\n\n> Loading\n\nAfter"),
        @r###"
    Paragraph "Before"
    Spacer
    Paragraph "After"
    "###
    );
}

#[test]
fn status_verbs_match_whole_words_only() {
    insta::assert_snapshot!(
        describe_scan("> Buildings are tall\n> • Crawling: 40 pages"),
        @r###"CalloutBox headline=None body=["Buildings are tall", "✓ Crawling: 40 pages"]"###
    );
}

#[test]
fn table_run_drops_separator_row() {
    let blocks = scan("| Keyword | Volume |\n|---|---|\n| roofing | 900 |\n| gutters | 300 |\nAfter");
    let Block::Table(table) = &blocks[0] else {
        panic!("expected table, got {:?}", blocks[0]);
    };
    assert_eq!(table.headers, vec!["Keyword", "Volume"]);
    assert_eq!(
        table.rows,
        vec![vec!["roofing", "900"], vec!["gutters", "300"]]
    );
    assert!(
        table
            .rows
            .iter()
            .all(|row| row.iter().all(|cell| !cell.contains('-')))
    );
    assert!(matches!(blocks[1], Block::Paragraph { .. }));
}

#[test]
fn empty_headers_make_an_info_table() {
    insta::assert_snapshot!(
        describe_scan("| | |\n|---|---|\n| Label | Value |"),
        @r###"InfoTable [("Label", "Value")]"###
    );
}

#[test]
fn separator_only_table_emits_nothing() {
    assert!(scan("|---|---|").is_empty());
}

#[test]
fn stat_directive() {
    insta::assert_snapshot!(
        describe_scan("[STAT:87%:Mobile traffic:]\n[STAT:3x:Leads:vs. last quarter]"),
        @r###"
    StatCallout "87%" "Mobile traffic" caption=None
    StatCallout "3x" "Leads" caption=Some("vs. last quarter")
    "###
    );
}

#[rstest]
#[case("[STAT:87%")]
#[case("[COVER_END")]
#[case("----")]
#[case("#hashtag")]
#[case("1.5 million")]
fn malformed_directives_fall_back_to_paragraphs(#[case] line: &str) {
    let blocks = scan(line);
    assert_eq!(blocks.len(), 1);
    assert!(matches!(blocks[0], Block::Paragraph { .. }), "{line}");
}

#[rstest]
#[case("---", "Rule")]
#[case("[COVER_END]\nx", "Paragraph")]
#[case("[STAT:1:Pages]", "StatCallout")]
#[case("> hello", "CalloutBox")]
#[case("| a | b |", "Table")]
#[case("## Section", "Heading")]
#[case("### Sub", "Heading")]
#[case("- item", "BulletItem")]
#[case("1. item", "NumberedItem")]
#[case("# Alpha & Omega", "CoverTitle")]
fn single_directive_yields_single_block(#[case] md: &str, #[case] kind: &str) {
    let blocks = scan(md);
    assert_eq!(blocks.len(), 1, "{blocks:?}");
    assert_eq!(blocks[0].kind_name(), kind);
}

#[test]
fn scanning_is_idempotent() {
    let md = include_str!("../../../tests/fixtures/full_report.md");
    assert_eq!(scan(md), scan(md));
}

#[test]
fn spans_cover_source_lines() {
    let doc = parse_str("# T\nbody\n");
    let spans: Vec<_> = doc.blocks.iter().map(|b| (b.span.start, b.span.end)).collect();
    assert_eq!(spans, vec![(0, 4), (4, 9)]);
}

#[rstest]
#[case("Para\n", 1, 1)]
#[case("Para\nmore", 2, 1)]
#[case("> a\n> b", 1, 0)]
#[case("Para\n> a\n", 2, 1)]
#[case("Para\n> a\n  ", 3, 1)]
#[case("| a |\n|---|\n", 1, 0)]
fn settled_excludes_open_tail(#[case] md: &str, #[case] blocks: usize, #[case] settled: usize) {
    let doc = parse_str(md);
    assert_eq!(doc.blocks.len(), blocks);
    assert_eq!(doc.settled, settled);
}
