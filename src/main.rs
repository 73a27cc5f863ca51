use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use rstt::table_io::{write_csv, write_text};
use rstt::{ResultFilter, TruthTable};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

const DEFAULT_MAX_VARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TableFormat {
    /// Columns separated by " | "
    Text,
    /// Comma separated values with a header record
    Csv,
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Prints the truth table of a Boolean algebra expression", long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "EXPRESSION")]
    /// The expression, using ! (NOT), & (AND), ^ (XOR), | (OR) and parentheses.
    /// Read from stdin if not provided
    expression: Option<String>,

    #[clap(value_parser, short, long, value_name = "FILE")]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(short, long, value_enum, default_value_t = TableFormat::Text, env = "RSTT_FORMAT")]
    /// The output format
    format: TableFormat,

    #[clap(long, default_value = "any", env = "RSTT_FILTER", value_name = "RESULT")]
    /// Only print rows with this result (true, false or any)
    filter: ResultFilter,

    #[clap(short, long)]
    /// Evaluate the rows in parallel
    parallel: bool,

    #[clap(long, default_value_t = DEFAULT_MAX_VARS, env = "RSTT_MAX_VARS", value_name = "N")]
    /// Refuse expressions with more than N distinct variables
    max_vars: usize,

    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Increase the log level (info, debug, trace)
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse_from(argfile::expand_args_from(
        wild::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?);

    simplelog::TermLogger::init(
        log_level(args.verbose),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let expression = match args.expression {
        Some(expression) => expression,
        None => prompt_expression()?,
    };

    check_width(&expression, args.max_vars)?;

    let table = if args.parallel {
        TruthTable::build_parallel(&expression)
    } else {
        TruthTable::build(&expression)
    }
    .with_context(|| format!("cannot evaluate {expression:?}"))?;

    info!(
        "{} rows, satisfiable: {}, tautology: {}",
        table.len(),
        table.is_satisfiable(),
        table.is_tautology()
    );

    let mut writer = if let Some(output_file) = args.output {
        let file = File::create(&output_file)
            .with_context(|| format!("cannot create {}", output_file.display()))?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    match args.format {
        TableFormat::Text => write_text(&mut writer, &table, args.filter)?,
        TableFormat::Csv => write_csv(&mut writer, &table, args.filter)?,
    }

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}

/// Refuses expressions whose table would have more than `2^max_vars` rows.
fn check_width(expression: &str, max_vars: usize) -> anyhow::Result<()> {
    let num_vars = rstt::extract(expression).len();

    if num_vars > max_vars {
        anyhow::bail!(
            "{expression:?} has {num_vars} variables, at most {max_vars} are allowed (see --max-vars)"
        );
    }

    Ok(())
}

const fn log_level(verbose: u8) -> simplelog::LevelFilter {
    match verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    }
}

fn prompt_expression() -> anyhow::Result<String> {
    let stdin = io::stdin();

    if stdin.is_terminal() {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "Use & for AND, | for OR, ^ for XOR, and ! for NOT.")?;
        writeln!(stdout, "Every operand must be separated by an operator.")?;
        write!(stdout, "Enter the boolean algebra expression: ")?;
        stdout.flush()?;
    }

    read_expression(&mut stdin.lock())
}

/// Reads one line and strips its line terminator; the rest is kept as typed.
fn read_expression<R: BufRead>(reader: &mut R) -> anyhow::Result<String> {
    let mut line = String::new();

    if reader.read_line(&mut line)? == 0 {
        anyhow::bail!("no expression given on standard input");
    }

    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
