use owo_colors::OwoColorize;
use std::fs;
use std::path::PathBuf;
use tally_lib::freq::FrequencyTable;
use tally_lib::{parse, report};

include!(concat!(env!("OUT_DIR"), "/generated_tests.rs"));

fn run_fixture(path: PathBuf) -> Result<(), std::io::Error> {
    let contents = fs::read_to_string(&path)?;

    enum Mode {
        None,
        Input,
        Expect,
        ExpectError,
    }

    let mut mode = Mode::None;
    let mut input = String::new();
    let mut expect_output = String::new();
    let mut expect_error = String::new();

    for line in contents.split_inclusive('\n') {
        match line {
            "--INPUT--\n" => mode = Mode::Input,
            "--EXPECT--\n" => mode = Mode::Expect,
            "--EXPECT-ERROR--\n" => mode = Mode::ExpectError,
            _ => match mode {
                Mode::None => panic!("unexpected line in fixture, not in a section"),
                Mode::Input => input.push_str(line),
                Mode::Expect => expect_output.push_str(line),
                Mode::ExpectError => expect_error.push_str(line),
            },
        }
    }

    print!("Running {path:?}...");

    let parse_result = parse::parse_str(&input);
    let had_error = parse_result.is_err();

    let (output, actual_error) = match parse_result {
        Ok(values) => {
            let table: FrequencyTable = values.into_iter().collect();
            let mut rendered = Vec::new();
            report::write_table(&mut rendered, table.entries())?;
            let rendered = String::from_utf8(rendered).expect("report output must be valid UTF-8");
            (rendered, String::new())
        }
        Err(err) => (String::new(), err.to_string()),
    };

    assert!(
        !expect_error.is_empty() || !had_error,
        "Unexpected error when counting fixture: {actual_error}"
    );

    if !expect_output.is_empty() && output.trim_end() != expect_output.trim_end() {
        println!(" {}", "ERR".red().bold());
        panic!(
            "\n\tThere was a problem running {path:?}\n\tActual output {}\n\tdid not match\n\tExpected output {}\n",
            output.trim_end(),
            expect_output.trim_end()
        );
    }

    if !expect_error.is_empty() && !actual_error.trim().contains(expect_error.trim()) {
        println!(" {}", "ERR".red().bold());
        panic!(
            "\n\tThere was a problem running {path:?}\n\tExpected error:\t{}\n\tActual error:\t{}\n",
            expect_error.trim_end(),
            actual_error.trim_end()
        );
    }

    println!(" {}", "OK".green().bold());

    Ok(())
}
