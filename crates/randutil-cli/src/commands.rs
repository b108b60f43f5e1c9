//! Executes one draw for a parsed command.

use std::fmt;
use std::future;

use randutil::{Decimal, RandomEngine, RandomUtil};
use serde::Serialize;

use crate::cli::Command;
use crate::error::CliError;

/// One drawn value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Sample {
    Int(i32),
    Float(f64),
    Decimal(Decimal),
    Item(String),
    Millis(u64),
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Item(value) => f.write_str(value),
            Self::Millis(value) => write!(f, "{value}ms"),
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    draw: usize,
    value: &'a Sample,
}

/// Draws a single sample for `command`.
///
/// # Errors
///
/// Returns `CliError::Random` if the generator rejects the arguments or a
/// delay is cancelled.
pub async fn draw<E: RandomEngine>(
    random: &RandomUtil<E>,
    command: &Command,
) -> Result<Sample, CliError> {
    let sample = match command {
        Command::Int { max } => Sample::Int(random.next_int(*max)?),
        Command::Range { min, max } => Sample::Int(random.next_int_range(*min, *max)?),
        Command::Float {
            min: Some(min),
            max: Some(max),
        } => Sample::Float(random.next_f64_range(*min, *max)),
        Command::Float { .. } => Sample::Float(random.next_f64()),
        Command::Int32 => Sample::Int(random.next_i32()),
        Command::DecimalUniform { min, max, round } => {
            let min = min.unwrap_or(Decimal::ZERO);
            let max = max.unwrap_or(Decimal::ONE);
            Sample::Decimal(random.next_decimal_uniform_range(min, max, *round)?)
        }
        Command::Decimal { min, max, round } => {
            Sample::Decimal(random.next_decimal(*min, *max, *round)?)
        }
        Command::Pick { items } => {
            let (names, weights): (Vec<&str>, Vec<f64>) = items
                .iter()
                .map(|(name, weight)| (name.as_str(), *weight))
                .unzip();
            let picked = random.weighted_random_selection(&names, &weights)?;
            Sample::Item((*picked).to_owned())
        }
        Command::Delay { min_ms, max_ms } => {
            let interrupted = async {
                if tokio::signal::ctrl_c().await.is_err() {
                    future::pending::<()>().await;
                }
            };
            let slept = random
                .delay_until_cancelled(*min_ms, *max_ms, interrupted)
                .await?;
            Sample::Millis(u64::try_from(slept.as_millis()).unwrap_or(u64::MAX))
        }
    };
    Ok(sample)
}

/// Formats a sample as plain text or as a JSON object.
///
/// # Errors
///
/// Returns `CliError::Output` if JSON encoding fails.
pub fn render(draw: usize, sample: &Sample, json: bool) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string(&Record {
            draw,
            value: sample,
        })?)
    } else {
        Ok(sample.to_string())
    }
}
