//! `songbook` - render, transpose and inspect chord-annotated songs.

use std::path::Path;

use songbook::batch::render_directory;
use songbook::chords::resolve;
use songbook::config::Config;
use songbook::error::{Error, Result};
use songbook::html::{lyrics_document, DocumentOptions};
use songbook::lyrics::RenderOptions;
use songbook::song::Song;
use songbook::types::DiagramStyle;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage:
  songbook render <file> [--pre] [--transpose N] [--no-headers] [--no-chords] [--custom-chords-only]
  songbook transpose <file> <N>
  songbook analyze <file>
  songbook chord <name> [code] [--vertical|--svg]
  songbook batch <dir> <out-dir> [--no-chords] [--custom-chords-only]";

/// Flags that take a value.
const VALUE_FLAGS: [&str; 1] = ["--transpose"];

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = Config::load()?;
    let rest = &args[1..];

    match command.as_str() {
        "render" => cmd_render(&config, rest),
        "transpose" => cmd_transpose(rest),
        "analyze" => cmd_analyze(rest),
        "chord" => cmd_chord(&config, rest),
        "batch" => cmd_batch(&config, rest),
        "-h" | "--help" | "help" => {
            println!("{USAGE}");
            Ok(())
        }
        other => Err(Error::Msg(format!("Unknown command {other:?}\n{USAGE}"))),
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("songbook=info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_render(config: &Config, args: &[String]) -> Result<()> {
    let [file] = positional(args)[..] else {
        return Err(usage("render needs exactly one file"));
    };

    let mut song = Song::from_file(file)?;
    if let Some(n) = flag_value(args, "--transpose") {
        song.adjust_tonation(parse_semitones(n)?);
    }

    let options = DocumentOptions {
        render: render_options(config, args),
        preformatted: has_flag(args, "--pre"),
        skip_headers: has_flag(args, "--no-headers"),
        fonts: config.fonts.clone(),
        ..DocumentOptions::default()
    };
    print!("{}", lyrics_document(&song, &options));
    Ok(())
}

fn cmd_transpose(args: &[String]) -> Result<()> {
    let [file, n] = positional(args)[..] else {
        return Err(usage("transpose needs a file and a number of semitones"));
    };

    let mut song = Song::from_file(file)?;
    song.adjust_tonation(parse_semitones(n)?);

    if is_json(file) {
        println!("{}", to_json(&song)?);
    } else {
        if let Some(capo) = &song.capo {
            println!("Kapodaster: {capo}");
        }
        println!("{}", song.lyrics);
    }
    Ok(())
}

fn cmd_analyze(args: &[String]) -> Result<()> {
    let [file] = positional(args)[..] else {
        return Err(usage("analyze needs exactly one file"));
    };

    let song = Song::from_file(file)?;
    match song.analyze() {
        Some(analysis) => println!("{}", to_json(&analysis)?),
        None => println!("{file}: no lyrics"),
    }
    Ok(())
}

fn cmd_chord(config: &Config, args: &[String]) -> Result<()> {
    let (name, code) = match positional(args)[..] {
        [name] => (name, None),
        [name, code] => (name, Some(code)),
        _ => return Err(usage("chord needs a name and an optional diagram code")),
    };

    let diagram = resolve(name, code).ok_or_else(|| Error::Msg(format!("No diagram for chord {name:?}")))?;
    let style = if has_flag(args, "--svg") {
        DiagramStyle::Svg
    } else if has_flag(args, "--vertical") {
        DiagramStyle::AsciiVertical
    } else {
        DiagramStyle::Ascii
    };
    println!("{}", diagram.render(style, config.diagram_color.as_deref()));
    Ok(())
}

fn cmd_batch(config: &Config, args: &[String]) -> Result<()> {
    let [input, output] = positional(args)[..] else {
        return Err(usage("batch needs an input and an output directory"));
    };

    let options = DocumentOptions {
        render: render_options(config, args),
        fonts: config.fonts.clone(),
        ..DocumentOptions::default()
    };
    let report = render_directory(Path::new(input), Path::new(output), &options)?;

    println!("Written {} pages to {output}", report.written.len());
    for (path, reason) in &report.failed {
        eprintln!("  failed: {} ({reason})", path.display());
    }
    Ok(())
}

/// Configured render options, with command line switches on top.
fn render_options(config: &Config, args: &[String]) -> RenderOptions {
    let mut options = config.render_options();
    options.skip_lyric_chords |= has_flag(args, "--no-chords");
    options.custom_chords_only |= has_flag(args, "--custom-chords-only");
    options
}

/// Arguments that are neither flags nor flag values.
fn positional(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
        } else if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
        } else if !arg.starts_with("--") {
            out.push(arg.as_str());
        }
    }
    out
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_semitones(text: &str) -> Result<i32> {
    text.parse()
        .map_err(|_| Error::Msg(format!("Expected a number of semitones, got {text:?}")))
}

fn is_json(file: &str) -> bool {
    Path::new(file)
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Msg(e.to_string()))
}

fn usage(problem: &str) -> Error {
    Error::Msg(format!("{problem}\n{USAGE}"))
}
