use std::fs;
use std::io::{self, Read, Write};

use clap::Parser;

use jscrunch::{DEFAULT_MAX_LINE_LENGTH, minify_with_limit};

#[derive(Parser)]
#[command(
    name = "jscrunch",
    about = "Strip insignificant whitespace and comments from JavaScript",
    version
)]
struct Cli {
    /// Input file; reads stdin when omitted or `-`
    file: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "file")]
    output: Option<String>,

    /// Maximum length of an output line
    #[arg(
        long = "max-line-length",
        value_name = "n",
        default_value_t = DEFAULT_MAX_LINE_LENGTH
    )]
    max_line_length: usize,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("jscrunch: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let source = match cli.file.as_deref() {
        None | Some("-") => read_stdin()?,
        Some(path) => read_source(path)?,
    };

    let minified = minify_with_limit(&source, cli.max_line_length).map_err(|err| err.to_string())?;

    match cli.output {
        Some(path) => fs::write(&path, minified.as_bytes())
            .map_err(|err| format!("failed to write {path}: {err}")),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(minified.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .map_err(|err| format!("failed to write output: {err}"))
        }
    }
}

fn read_source(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read {path}: {err}"))
}

fn read_stdin() -> Result<String, String> {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .map_err(|err| format!("failed to read stdin: {err}"))?;
    Ok(source)
}
