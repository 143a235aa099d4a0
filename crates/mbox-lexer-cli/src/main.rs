use anyhow::{Context, Result, bail};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use mbox_lexer_config::{Config, Theme};
use mbox_lexer_engine::{
    DocumentId, Lexer, RopeHost, Style, TextSource, io,
    parsing::{classify_document, snapshot},
};
use std::{
    collections::HashMap,
    env,
    io::{Write, stdout},
    path::PathBuf,
    str::FromStr,
};

/// Lines styled per request in render mode, roughly one screen.
const PAGE_LINES: usize = 50;

const DOC: DocumentId = DocumentId(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Render,
    Lines,
    Folds,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "render" => Ok(Mode::Render),
            "lines" => Ok(Mode::Lines),
            "folds" => Ok(Mode::Folds),
            other => bail!("unknown mode '{other}' (expected render, lines or folds)"),
        }
    }
}

struct Args {
    config: Option<PathBuf>,
    mode: Mode,
    file: PathBuf,
}

fn usage(program: &str) -> String {
    format!("Usage: {program} [--config PATH] [--mode render|lines|folds] FILE")
}

fn parse_args(args: &[String]) -> Result<Args> {
    let program = args.first().map(String::as_str).unwrap_or("mbox-lexer");
    let mut config = None;
    let mut mode = Mode::Render;
    let mut file = None;

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--config" => {
                let value = rest.next().context("--config needs a path")?;
                config = Some(PathBuf::from(value));
            }
            "--mode" => {
                let value = rest.next().context("--mode needs a value")?;
                mode = value.parse()?;
            }
            "-h" | "--help" => bail!(usage(program)),
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'\n{}", usage(program)),
            path if file.is_none() => file = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument '{extra}'\n{}", usage(program)),
        }
    }

    let Some(file) = file else {
        bail!(usage(program));
    };
    Ok(Args { config, mode, file })
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let config_path = Config::expand_path(&path).unwrap_or(path);
            log::info!("Config path: {}", config_path.display());
            Config::load_from_path(&config_path)?
        }
        None => {
            log::info!("Config path: {}", Config::config_path().display());
            Config::load()?
        }
    };

    match loaded {
        Some(config) => Ok(config),
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Resolves theme color names once; unknown names fall back to the
/// terminal default.
fn palette(theme: &Theme) -> HashMap<Style, Color> {
    Style::ALL
        .iter()
        .filter_map(|&style| {
            let name = theme.color(style)?;
            match Color::try_from(name) {
                Ok(color) => Some((style, color)),
                Err(()) => {
                    log::warn!(
                        "Unknown color '{name}' for {} ({}), using default",
                        style.name(),
                        style.description()
                    );
                    None
                }
            }
        })
        .collect()
}

/// Styles the buffer a page at a time, the way an editor restyles its
/// viewport, and writes it with ANSI colors.
fn render(lexer: &mut Lexer, host: &RopeHost, theme: &Theme) -> Result<()> {
    let colors = palette(theme);
    let mut out = stdout().lock();
    let line_count = host.line_count();

    for first in (0..line_count).step_by(PAGE_LINES) {
        let last = (first + PAGE_LINES).min(line_count) - 1;
        let start = host.line_start(first);
        let end = host.line_end(last);
        let lexed = lexer.classify(DOC, host, start, end - start, Style::Ordinary);

        for (span, style) in lexed.styled.runs() {
            let text = host.slice_to_cow(span.start..span.end);
            match colors.get(&style) {
                Some(&color) => queue!(out, SetForegroundColor(color), Print(text), ResetColor)?,
                None => queue!(out, Print(text))?,
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn print_lines(host: &RopeHost) -> Result<()> {
    let doc = classify_document(host);
    let mut out = stdout().lock();
    writeln!(out, "{}", snapshot::render(&snapshot::normalize(host, &doc)))?;
    Ok(())
}

fn print_folds(lexer: &mut Lexer, host: &RopeHost) -> Result<()> {
    let folds = lexer.fold(DOC, host, 0, host.len(), Style::Ordinary);
    let mut out = stdout().lock();
    for fold in folds {
        let marker = if fold.level.header { '+' } else { ' ' };
        let text = snapshot::normalize::preview(host, host.line_span(fold.line), 60);
        writeln!(
            out,
            "{:>5} {:#06x} {marker} {text}",
            fold.line,
            fold.level.bits()
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let args = parse_args(&args)?;
    let config = load_config(args.config)?;

    let host = io::read_mbox(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    log::info!(
        "Loaded {} ({} lines, {} bytes)",
        args.file.display(),
        host.line_count(),
        host.len()
    );

    let mut lexer = Lexer::new(config.lexer_options());
    match args.mode {
        Mode::Render => render(&mut lexer, &host, &config.theme)?,
        Mode::Lines => print_lines(&host)?,
        Mode::Folds => print_folds(&mut lexer, &host)?,
    }
    lexer.document_closed(DOC);

    Ok(())
}
