//! Command-line arguments.

use clap::{Parser, Subcommand};
use randutil::Decimal;

/// Draw random values.
#[derive(Debug, Parser)]
#[command(name = "randutil", version, about)]
pub struct Cli {
    /// Number of draws; overrides RANDUTIL_COUNT.
    #[arg(long, short = 'n', global = true)]
    pub count: Option<usize>,

    /// Print one JSON object per draw.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Integer in [0, MAX).
    Int { max: i32 },

    /// Integer in [MIN, MAX).
    Range {
        #[arg(allow_negative_numbers = true)]
        min: i32,
        #[arg(allow_negative_numbers = true)]
        max: i32,
    },

    /// Float in [0, 1), or in [MIN, MAX) when both bounds are given.
    Float {
        #[arg(allow_negative_numbers = true, requires = "max")]
        min: Option<f64>,
        #[arg(allow_negative_numbers = true)]
        max: Option<f64>,
    },

    /// Integer over every i32 bit pattern.
    Int32,

    /// Uniform 28-digit decimal in [0, 1), or in [MIN, MAX) when both bounds
    /// are given.
    DecimalUniform {
        #[arg(long, allow_hyphen_values = true, requires = "max")]
        min: Option<Decimal>,
        #[arg(long, allow_hyphen_values = true, requires = "min")]
        max: Option<Decimal>,
        /// Fractional digits to round to.
        #[arg(long)]
        round: Option<u32>,
    },

    /// Float-backed decimal in [MIN, MAX).
    Decimal {
        #[arg(long, allow_hyphen_values = true)]
        min: Decimal,
        #[arg(long, allow_hyphen_values = true)]
        max: Decimal,
        /// Fractional digits to round to.
        #[arg(long)]
        round: Option<u32>,
    },

    /// Weighted pick among NAME=WEIGHT pairs.
    Pick {
        #[arg(required = true, value_parser = parse_weighted_item)]
        items: Vec<(String, f64)>,
    },

    /// Sleep for a random number of milliseconds in [MIN_MS, MAX_MS); Ctrl-C
    /// cancels.
    Delay { min_ms: i32, max_ms: i32 },
}

fn parse_weighted_item(raw: &str) -> Result<(String, f64), String> {
    let (name, weight) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=WEIGHT, got {raw:?}"))?;
    let weight = weight
        .parse::<f64>()
        .map_err(|e| format!("invalid weight in {raw:?}: {e}"))?;
    Ok((name.to_owned(), weight))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command, parse_weighted_item};

    #[test]
    fn test_parse_weighted_item() {
        assert_eq!(parse_weighted_item("B=10"), Ok(("B".to_owned(), 10.0)));
        assert_eq!(parse_weighted_item("a=b=0.5"), Ok(("a=b".to_owned(), 0.5)));
        assert!(parse_weighted_item("B").is_err());
        assert!(parse_weighted_item("B=x").is_err());
    }

    #[test]
    fn test_parses_negative_range() {
        let cli = Cli::try_parse_from(["randutil", "range", "-5", "5"]).unwrap();
        assert!(matches!(cli.command, Command::Range { min: -5, max: 5 }));
        assert_eq!(cli.count, None);
    }

    #[test]
    fn test_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["randutil", "int32", "--count", "3", "--json"]).unwrap();
        assert_eq!(cli.count, Some(3));
        assert!(cli.json);
    }

    #[test]
    fn test_parses_decimal_bounds() {
        let cli = Cli::try_parse_from([
            "randutil", "decimal", "--min", "-1.5", "--max", "2.25", "--round", "2",
        ])
        .unwrap();
        match cli.command {
            Command::Decimal { min, max, round } => {
                assert_eq!(min.to_string(), "-1.5");
                assert_eq!(max.to_string(), "2.25");
                assert_eq!(round, Some(2));
            }
            other => panic!("expected Decimal, got {other:?}"),
        }
    }

    #[test]
    fn test_float_requires_both_bounds() {
        assert!(Cli::try_parse_from(["randutil", "float", "1.0"]).is_err());
        assert!(Cli::try_parse_from(["randutil", "float"]).is_ok());
    }

    #[test]
    fn test_pick_requires_items() {
        assert!(Cli::try_parse_from(["randutil", "pick"]).is_err());
        let cli = Cli::try_parse_from(["randutil", "pick", "A=3", "B=10"]).unwrap();
        match cli.command {
            Command::Pick { items } => assert_eq!(items.len(), 2),
            other => panic!("expected Pick, got {other:?}"),
        }
    }
}
