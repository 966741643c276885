use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use libcalc::logging::LoggingConfig;
use libcalc::{CalcError, CalculatorAction, CalculatorSession, Config};

#[derive(Parser, Debug)]
#[command(name = "calc-keys")]
#[command(version, about = "Replay calculator key presses and print the result")]
#[command(long_about = r#"Feed key presses through the calculator and print the final state.

Keys are read from the arguments, or from stdin when no argument is given.
Whitespace is ignored. Options go before the keys; everything from the first
key on is read as keys, so `calc-keys 9 -4 =` works.

KEYS:
    0-9       digit
    .         decimal point
    + - * x / operation
    =         evaluate
    c C       clear
    DEL BS    backspace (control characters)

EXAMPLES:
    # 8
    calc-keys 5+3=

    # inf
    calc-keys '1/0='

    # JSON state for scripting
    calc-keys --format json '12+' | jq '.operation'

    # From a pipe
    echo '2 x 21 =' | calc-keys

EXIT CODES:
    0 - Success
    1 - Configuration error
    3 - Invalid input (unknown key)
"#)]
struct Cli {
    /// Key sequences to replay, in order
    #[arg(value_name = "KEYS")]
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    keys: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json"])]
    format: String,

    /// Enable debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<CalcError>()
            .map(CalcError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    LoggingConfig::from_section(&config.logging, cli.verbose).init();

    let input = if cli.keys.is_empty() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read keys from stdin")?;
        buffer
    } else {
        cli.keys.concat()
    };

    let actions = parse_keys(&input)?;

    let mut session = CalculatorSession::new();
    let mut effective = 0usize;
    for action in actions {
        if session.dispatch(action) {
            effective += 1;
        }
    }
    tracing::debug!(effective, "replayed keys");

    let state = session.state();
    match cli.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(state)?),
        _ => println!("{}", state.display()),
    }

    Ok(())
}

fn parse_keys(input: &str) -> libcalc::Result<Vec<CalculatorAction>> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            CalculatorAction::from_key(c)
                .ok_or_else(|| CalcError::InvalidInput(format!("unknown key {:?}", c)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use libcalc::Operation;

    #[test]
    fn test_parse_keys_skips_whitespace() {
        let actions = parse_keys(" 1 +\t2\n=").unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(
            actions[1],
            CalculatorAction::SetOperation(Operation::Add)
        );
        assert_eq!(actions[3], CalculatorAction::Evaluate);
    }

    #[test]
    fn test_parse_keys_rejects_unknown() {
        let err = parse_keys("1+k").unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_cli_accepts_hyphen_keys() {
        let cli = Cli::parse_from(["calc-keys", "9", "-4", "="]);
        assert_eq!(cli.keys, vec!["9", "-4", "="]);
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn test_cli_parses_format() {
        let cli = Cli::parse_from(["calc-keys", "--format", "json", "5+3="]);
        assert_eq!(cli.format, "json");
        assert_eq!(cli.keys, vec!["5+3=".to_string()]);
    }
}
