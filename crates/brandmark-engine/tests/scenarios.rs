use brandmark_engine::{
    Block, ColorRole, TextStyle,
    parsing::{
        parse_str, scan,
        snapshot::{describe, invariants},
    },
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

#[test]
fn full_report_blocks() {
    let md = fixture("full_report");
    let doc = parse_str(&md);
    invariants(md.len(), &doc);
    assert_eq!(doc.settled, doc.blocks.len());

    insta::assert_snapshot!(describe(&doc.into_blocks()), @r###"
    CoverTitle "Local SEO Audit" "& Growth Plan"
    CoverSubtitle "Prepared for Harbor Roofing Co."
    PageBreak
    Spacer
    Heading(1) "Executive Summary"
    SectionSubtitle "Bottom line: the site is invisible for its best keywords" Analysis
    Spacer
    CalloutBox headline=Some("Key Insight") body=["✓ Mobile traffic is 87% of sessions", "✓ Only 3 of 40 service pages are indexed"]
    Spacer
    StatCallout "87%" "Mobile share of sessions" caption=Some("Up from 61% last year")
    Spacer
    InfoTable [("Domain", "harborroofing.com"), ("Audit date", "March 2025")]
    Spacer
    PageBreak
    Heading(1) "Keyword Opportunities"
    Paragraph "Rankings were pulled for 12 priority terms."
    Spacer
    Table ["Keyword", "Volume", "Position"] rows=[["roof repair", "2400", "18"], ["gutter cleaning", "880", ""], ["metal roofing", "590", "41"]]
    Spacer
    Heading(2) "Quick wins"
    NumberedItem(1) "Fix the title tags on service pages"
    NumberedItem(2) "Add location schema"
    NumberedItem(3) "Claim the Google Business profile"
    Spacer
    Paragraph "Warning: two pages return 404 errors."
    Spacer
    Rule
    Spacer
    BulletItem "Publish one case study per month"
    BulletItem "Reply to every review within 48 hours"
    Spacer
    PageBreak
    Heading(1) "Next Steps"
    Paragraph "Plain closing paragraph."
    "###);
}

#[test]
fn scenario_cover_then_section() {
    let blocks = scan("# Hello & World\nSubtitle text\n[COVER_END]\n## Section One\nBody.");
    insta::assert_snapshot!(describe(&blocks), @r###"
    CoverTitle "Hello" "& World"
    CoverSubtitle "Subtitle text"
    PageBreak
    Heading(1) "Section One"
    Paragraph "Body."
    "###);
}

#[test]
fn scenario_callout_with_status_line() {
    let blocks = scan("> **Key Insight**\n> - Thing one\n> Fetching data...\n> - Thing two");
    let [Block::CalloutBox(callout)] = blocks.as_slice() else {
        panic!("expected a single callout, got {blocks:?}");
    };
    assert_eq!(callout.headline.as_deref(), Some("Key Insight"));
    let body: Vec<String> = callout.body.iter().map(|l| l.text()).collect();
    assert_eq!(body, vec!["Thing one", "Thing two"]);
    assert!(callout.body.iter().all(|l| l.marker == Some('✓')));
}

#[test]
fn scenario_table_without_separator_rows() {
    let blocks = scan("| Page | Status |\n| :--- | ---: |\n| /roofing | 200 |\n| /gutters | 404 |");
    let [Block::Table(table)] = blocks.as_slice() else {
        panic!("expected a single table, got {blocks:?}");
    };
    assert_eq!(table.rows.len(), 2);
    assert!(
        table
            .rows
            .iter()
            .flatten()
            .all(|cell| !cell.chars().all(|c| matches!(c, '-' | ':' | ' ')))
    );
}

#[rstest]
#[case("**Warning** the cache is cold", ColorRole::Warning)]
#[case("Read this **Key Takeaway:** now", ColorRole::Analysis)]
#[case("**quick win** available", ColorRole::Positive)]
#[case("**Roofing** is our focus", ColorRole::Text)]
fn bold_labels_resolve_color(#[case] md: &str, #[case] expected: ColorRole) {
    let blocks = scan(md);
    let spans = blocks[0].spans().unwrap();
    let bold = spans.iter().find(|s| s.style.bold).unwrap();
    assert_eq!(bold.style.color, expected);
    assert!(
        spans
            .iter()
            .filter(|s| !s.style.bold)
            .all(|s| s.style == TextStyle::BODY)
    );
}

#[test]
fn scan_is_idempotent() {
    let md = fixture("full_report");
    assert_eq!(scan(&md), scan(&md));
}

#[test]
fn settled_blocks_never_change_as_text_grows() {
    let md = fixture("full_report");
    let full = parse_str(&md);

    for (end, _) in md.char_indices() {
        let doc = parse_str(&md[..end]);
        invariants(end, &doc);
        assert_eq!(
            doc.settled_blocks(),
            &full.blocks[..doc.settled],
            "prefix ending at byte {end} disagrees"
        );
    }
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(10)]
fn blank_runs_collapse_anywhere(#[case] n: usize) {
    let blanks = "\n".repeat(n + 1);
    let md = format!("## A{blanks}text{blanks}- item{blanks}");
    let blocks = scan(&md);
    let spacers = blocks.iter().filter(|b| matches!(b, Block::Spacer)).count();
    assert_eq!(spacers, 3);
}

#[test]
fn blocks_serialize_with_type_tags() {
    let blocks = scan(&fixture("full_report"));
    let json = serde_json::to_value(&blocks).unwrap();
    let types: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|b| b["type"].as_str())
        .collect();
    assert_eq!(types.len(), blocks.len());
    assert_eq!(types.iter().filter(|t| **t == "page_break").count(), 2);
    assert_eq!(types[0], "cover_title");
}
