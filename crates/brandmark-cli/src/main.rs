mod preview;

use anyhow::{Context, Result};
use brandmark_config::Config;
use brandmark_engine::{HtmlBackend, LayoutBackend, io, scan};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    io::stdout,
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "Usage:
  brandmark render <input.md> [output.html]
  brandmark blocks <input.md>
  brandmark preview <input.md>";

enum Command {
    Render {
        input: PathBuf,
        output: Option<PathBuf>,
    },
    Blocks {
        input: PathBuf,
    },
    Preview {
        input: PathBuf,
    },
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        let path = |i: usize| args.get(i).map(PathBuf::from);
        match (args.get(1).map(String::as_str), args.len()) {
            (Some("render"), 3 | 4) => Some(Command::Render {
                input: path(2)?,
                output: path(3),
            }),
            (Some("blocks"), 3) => Some(Command::Blocks { input: path(2)? }),
            (Some("preview"), 3) => Some(Command::Preview { input: path(2)? }),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(command) = Command::parse(&args) else {
        eprintln!("{USAGE}");
        process::exit(1);
    };

    // The preview owns the terminal; only errors may reach stderr there.
    let level = match command {
        Command::Preview { .. } => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Config path: {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    match command {
        Command::Render { input, output } => render(&config, &input, output),
        Command::Blocks { input } => blocks(&input),
        Command::Preview { input } => preview(&config, &input),
    }
}

fn read_input(input: &Path) -> Result<String> {
    io::read_markdown(input).with_context(|| format!("reading {}", input.display()))
}

fn render(config: &Config, input: &Path, output: Option<PathBuf>) -> Result<()> {
    let content = read_input(input)?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    let output = output.unwrap_or_else(|| config.output_dir.join(format!("{stem}.html")));

    let blocks = scan(&content);
    let html = HtmlBackend::new(config.theme.clone())
        .with_title(&stem)
        .layout(&blocks)?;
    io::write_output(&output, &html).with_context(|| format!("writing {}", output.display()))?;

    log::info!(
        "Rendered {} blocks from {} to {}",
        blocks.len(),
        input.display(),
        output.display()
    );
    Ok(())
}

fn blocks(input: &Path) -> Result<()> {
    let content = read_input(input)?;
    println!("{}", serde_json::to_string_pretty(&scan(&content))?);
    Ok(())
}

fn preview(config: &Config, input: &Path) -> Result<()> {
    let content = read_input(input)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = preview::run(
        &mut terminal,
        &content,
        config.theme.clone(),
        config.preview.schedule(),
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
