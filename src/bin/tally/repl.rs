use miette::Report;
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use tally_lib::freq::FrequencyTable;
use tally_lib::{parse, transform};

pub fn run(ignore_case: bool) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("tally> ") {
            Ok(line) => {
                // If we can't append the history we just ignore this
                let _ = rl.add_history_entry(line.as_str());

                match parse::parse_str(&line) {
                    Ok(values) => {
                        let values = values.into_iter();
                        let table: FrequencyTable = if ignore_case {
                            values.map(transform::fold_case).collect()
                        } else {
                            values.collect()
                        };
                        println!("{table}");
                    }
                    Err(err) => {
                        let report = Report::new(err).with_source_code(line.to_string());
                        eprintln!("{report:?}");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C discards the line, keep reading
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Bye!".bold());
                break;
            }
            Err(err) => {
                eprintln!("{err}");
                break;
            }
        }
    }

    Ok(())
}
