use std::{io::BufRead, process::ExitCode};

use clap::{Parser, ValueEnum};
use codespan_reporting::term::{
    self,
    termcolor::{ColorChoice, StandardStream},
};
use pageranges::{source::SourceFiles, Attribute, PageRanges};

/// Validate page range lists and print them in canonical form
#[derive(Debug, Parser)]
#[command(name = "pagerangesc", version)]
struct Args {
    /// Page range lists such as `1-4,7,10-12`. `-` reads one list per line from stdin
    #[arg(required = true)]
    ranges: Vec<String>,

    /// Report whether each list selects this page
    #[arg(long, value_name = "PAGE")]
    contains: Option<i32>,

    /// Report the first selected page after this one
    #[arg(long, value_name = "PAGE")]
    next: Option<i32>,

    /// List every selected page
    #[arg(long)]
    expand: bool,

    /// When to color diagnostics
    #[arg(long, value_enum, default_value_t = Color::Auto)]
    color: Color,

    /// Maximum level of log messages written to stderr
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Color {
    Auto,
    Always,
    Never,
}

impl From<Color> for ColorChoice {
    fn from(color: Color) -> Self {
        match color {
            Color::Auto => Self::Auto,
            Color::Always => Self::Always,
            Color::Never => Self::Never,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install log subscriber: {}", err);
    }

    let inputs = match read_inputs(&args.ranges) {
        Ok(inputs) => inputs,
        Err(err) => {
            eprintln!("failed to read page ranges from stdin: {}", err);
            return ExitCode::FAILURE
        },
    };

    let mut files = SourceFiles::new();
    let stderr = StandardStream::stderr(args.color.into());
    let config = term::Config::default();
    let mut failed = false;

    for (name, text) in inputs {
        let file = files.add(name, text);
        let text = files.text(file).unwrap_or_default();

        match PageRanges::parse(text) {
            Ok(ranges) => report(&args, &ranges),
            Err(err) => {
                failed = true;
                tracing::debug!(input = text, kind = ?err.kind(), "invalid page ranges");

                let diagnostic = err.to_diagnostic(file, text);
                if let Err(err) = term::emit(&mut stderr.lock(), &config, &&files, &diagnostic) {
                    tracing::error!(%err, "failed to render diagnostic");
                }
            },
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Collect `(name, text)` pairs for every input, expanding `-` into the lines of stdin. Blank
/// stdin lines are skipped
fn read_inputs(ranges: &[String]) -> std::io::Result<Vec<(String, String)>> {
    let mut inputs = Vec::with_capacity(ranges.len());

    for (idx, arg) in ranges.iter().enumerate() {
        if arg == "-" {
            for (line_no, line) in std::io::stdin().lock().lines().enumerate() {
                let line = line?;
                if !line.trim().is_empty() {
                    inputs.push((format!("<stdin:{}>", line_no + 1), line));
                }
            }
        } else {
            inputs.push((format!("<arg {}>", idx + 1), arg.clone()));
        }
    }

    Ok(inputs)
}

fn report(args: &Args, ranges: &PageRanges) {
    println!("{}: {}", ranges.name(), ranges);

    if let Some(page) = args.contains {
        println!("  contains {}: {}", page, ranges.contains(page));
    }

    if let Some(page) = args.next {
        match ranges.next(page) {
            Some(next) => println!("  next after {}: {}", page, next),
            None => println!("  next after {}: none", page),
        }
    }

    if args.expand {
        let pages = ranges
            .pages()
            .map(|page| page.to_string())
            .collect::<Vec<_>>();
        println!("  pages: {}", pages.join(" "));
    }
}
