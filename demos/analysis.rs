use std::io::{self, BufRead};

use clap::Parser;
use color_eyre::eyre::bail;

use lrt_pdnf::params::{parse_probabilities, parse_probability, ParamError, Params, DEFAULT_LITERALS};
use lrt_pdnf::report::analyze;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Use the default parameters without prompting.
    #[arg(long, conflicts_with_all = ["p_s", "p_n", "p_lo"])]
    default: bool,

    /// Signal probabilities, one per observation.
    #[arg(long = "p-s", value_name = "FLOAT", num_args = 1..)]
    p_s: Option<Vec<f64>>,

    /// Noise probability, shared by all observations.
    #[arg(long = "p-n", value_name = "FLOAT")]
    p_n: Option<f64>,

    /// Cumulative false-alarm budget.
    #[arg(long = "p-lo", value_name = "FLOAT")]
    p_lo: Option<f64>,

    /// Log level.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: simplelog::LevelFilter,
}

fn prompt<T>(
    input: &mut impl BufRead,
    message: &str,
    parse: impl Fn(&str) -> Result<T, ParamError>,
) -> color_eyre::Result<T> {
    loop {
        println!("{}", message);
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("unexpected end of input");
        }
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => println!("Input error: {}. Please try again.", e),
        }
    }
}

fn prompt_use_default(input: &mut impl BufRead) -> color_eyre::Result<bool> {
    loop {
        println!("Use default data? (y/n):");
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("unexpected end of input");
        }
        match line.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => println!("Invalid input. Please enter 'y' or 'n'."),
        }
    }
}

fn prompt_params(input: &mut impl BufRead) -> color_eyre::Result<Params> {
    if prompt_use_default(input)? {
        return Ok(Params::default());
    }
    let p_s = prompt(
        input,
        &format!(
            "Enter {} p_S values separated by spaces (each in the range (0, 1), e.g., 0.29 0.53 0.04 0.04 0.53 0.29):",
            DEFAULT_LITERALS
        ),
        |s| parse_probabilities("p_S", s, DEFAULT_LITERALS),
    )?;
    let p_n = prompt(input, "Enter the p_N value (e.g., 0.09):", |s| parse_probability("p_N", s))?;
    let p_lo = prompt(input, "Enter the threshold probability P_lo:", |s| parse_probability("P_lo", s))?;
    Ok(Params::new(p_s, p_n, p_lo)?)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let params = if args.default {
        Params::default()
    } else {
        match (args.p_s, args.p_n, args.p_lo) {
            (Some(p_s), Some(p_n), Some(p_lo)) => Params::new(p_s, p_n, p_lo)?,
            (None, None, None) => prompt_params(&mut io::stdin().lock())?,
            _ => bail!("--p-s, --p-n and --p-lo must be given together"),
        }
    };
    log::info!("params: {}", params);

    let report = analyze(&params);
    println!("{}", report);

    Ok(())
}
