//! Interaction controller: pointer and slider updates from the outside world.
//!
//! Producers send [`InputEvent`]s over a channel; the scheduler applies them
//! to [`InteractionState`] between ticks only.

use shoal_core::config::ParameterSet;
use shoal_data::Position;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f64, y: f64 },
    PointerLeft,
    SetBaseSpeed(f64),
    SetMaxSpeed(f64),
    SetOrbitDistance(f64),
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseInputError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` expects {expected} numeric argument(s)")]
    Arity {
        command: &'static str,
        expected: usize,
    },
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}

fn parse_numbers(
    command: &'static str,
    args: &[&str],
    expected: usize,
) -> Result<Vec<f64>, ParseInputError> {
    if args.len() != expected {
        return Err(ParseInputError::Arity { command, expected });
    }
    args.iter()
        .map(|raw| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseInputError::InvalidNumber((*raw).to_string()))
        })
        .collect()
}

/// Line protocol used by the stdin controller:
///
/// ```text
/// pointer 120 80
/// leave
/// base 0.1
/// max 1.5
/// orbit 75
/// ```
impl FromStr for InputEvent {
    type Err = ParseInputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let command = parts.next().ok_or(ParseInputError::Empty)?;
        let args: Vec<&str> = parts.collect();

        match command.to_ascii_lowercase().as_str() {
            "pointer" | "p" => {
                let v = parse_numbers("pointer", &args, 2)?;
                Ok(Self::PointerMoved { x: v[0], y: v[1] })
            }
            "leave" | "l" => {
                parse_numbers("leave", &args, 0)?;
                Ok(Self::PointerLeft)
            }
            "base" => Ok(Self::SetBaseSpeed(parse_numbers("base", &args, 1)?[0])),
            "max" => Ok(Self::SetMaxSpeed(parse_numbers("max", &args, 1)?[0])),
            "orbit" => Ok(Self::SetOrbitDistance(parse_numbers("orbit", &args, 1)?[0])),
            _ => Err(ParseInputError::UnknownCommand(command.to_string())),
        }
    }
}

/// Latest pointer and parameter values reported by the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub pointer: Option<Position>,
    pub params: ParameterSet,
}

impl InteractionState {
    #[must_use]
    pub fn new(params: ParameterSet) -> Self {
        Self {
            pointer: None,
            params,
        }
    }

    /// Slider values are clamped to their ranges here, on the UI side.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => self.pointer = Some(Position::new(x, y)),
            InputEvent::PointerLeft => self.pointer = None,
            InputEvent::SetBaseSpeed(v) => self.params.base_speed = v,
            InputEvent::SetMaxSpeed(v) => self.params.max_speed = v,
            InputEvent::SetOrbitDistance(v) => self.params.orbit_distance = v,
        }
        self.params = self.params.clamped();
        tracing::debug!(?event, "Input applied");
    }
}
