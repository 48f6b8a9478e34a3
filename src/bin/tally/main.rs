use std::io::Read;
use std::path::PathBuf;
use std::process::exit;
use std::{fs::File, io::Write};

use clap::Parser;
use miette::NamedSource;
use owo_colors::OwoColorize;

use tally_lib::freq::FrequencyTable;
use tally_lib::lexer::Lexer;
use tally_lib::{parse, report, transform};

#[cfg(feature = "repl")]
mod repl;

#[derive(Parser)]
#[command(name = "tally")]
#[command(version = "0.1")]
#[command(about = "Counts value frequencies in sequences of numbers and text")]
struct Cli {
    /// Sequence files, counts are merged across files
    files: Vec<PathBuf>,

    /// Count whitespace separated words instead of parsing a sequence
    #[arg(long, conflicts_with = "chars")]
    words: bool,

    /// Count characters instead of parsing a sequence
    #[arg(long)]
    chars: bool,

    /// Lowercase text values before counting
    #[arg(short, long)]
    ignore_case: bool,

    /// Order the report by descending count instead of first occurrence
    #[arg(long)]
    sort: bool,

    /// Only report the N most common values
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Dump the token stream instead of counting
    #[arg(long)]
    tokens: bool,

    #[arg(short = 'C', long, default_value_t = 1)]
    context_lines: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let context_lines = cli.context_lines;

    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .color(true)
                .unicode(true)
                .context_lines(context_lines)
                .build(),
        )
    }))?;

    if cli.files.is_empty() {
        #[cfg(feature = "repl")]
        return repl::run(cli.ignore_case);

        #[cfg(not(feature = "repl"))]
        Err(anyhow::anyhow!("You must supply a filename"))?;
    }

    let mut table = FrequencyTable::new();
    for path in &cli.files {
        let mut file = File::open(path)?;
        let mut source = String::new();
        file.read_to_string(&mut source)?;

        if cli.tokens {
            dump_tokens(&source);
            continue;
        }

        let values = if cli.words {
            transform::words(&source)
        } else if cli.chars {
            transform::chars(&source)
        } else {
            match parse::parse_str(&source) {
                Ok(values) => values,
                Err(err) => {
                    let named = NamedSource::new(path.display().to_string(), source.clone());
                    let report = miette::Report::new(err).with_source_code(named);
                    eprintln!("{report:?}");
                    exit(1);
                }
            }
        };

        let values = values.into_iter();
        let file_table: FrequencyTable = if cli.ignore_case {
            values.map(transform::fold_case).collect()
        } else {
            values.collect()
        };
        table.merge(file_table);
    }

    if cli.tokens {
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    if cli.sort || cli.top.is_some() {
        let mut entries = table.most_common();
        if let Some(n) = cli.top {
            entries.truncate(n);
        }
        report::write_table(&mut stdout, &entries)?;
    } else {
        report::write_table(&mut stdout, table.entries())?;
    }
    stdout.flush()?;

    Ok(())
}

fn dump_tokens(source: &str) {
    for result in Lexer::new(source) {
        match result {
            Ok(spanned) => {
                let offset = spanned.span.offset();
                let end = offset + spanned.span.len();
                let location = format!("{offset}..{end}");
                println!("{} {}", location.dimmed(), spanned.token);
            }
            Err(err) => {
                let report = miette::Report::new(err).with_source_code(source.to_string());
                eprintln!("{report:?}");
                exit(1);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use crate::Cli;

    #[test]
    fn test_clap() {
        Cli::command().debug_assert();
    }
}
