// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_report(sections: usize) -> String {
    let mut content = String::from("# Site Audit & Growth Plan\nPrepared for Example Co.\n[COVER_END]\n\n");

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n*Key Takeaway: item {section}*\n\n"));
        content.push_str("Paragraph with **bold** and *italic* text that wraps a sentence or two.\n\n");
        content.push_str("> **Key Insight**\n> - First finding\n> Fetching data...\n> - Second finding\n\n");
        content.push_str("| Keyword | Volume | Position |\n|---|---:|---:|\n");
        for row in 0..5 {
            content.push_str(&format!("| term {row} | {} | {row} |\n", row * 100));
        }
        content.push_str("\n[STAT:42%:Share of traffic:Last 90 days]\n\n");
        content.push_str("1. First step\n2. Second step\n- Bullet\n---\n\n");
    }

    content
}

/// Splits text into small chunks the way a model streams tokens.
#[allow(dead_code)]
pub fn tokenize(content: &str, chunk: usize) -> Vec<String> {
    let chars: Vec<char> = content.chars().collect();
    chars
        .chunks(chunk)
        .map(|c| c.iter().collect())
        .collect()
}
