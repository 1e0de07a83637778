use thiserror::Error;

/// Errors raised when engine input fails validation.
///
/// Every variant belongs to the invalid-input class: the engine itself is
/// total over validated input and never fails mid-computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid hour: {hour}. Expected a value in 0..=23")]
    InvalidHour { hour: u32 },
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Invalid birthday: month {month}, day {day}")]
    InvalidBirthday { month: u32, day: u32 },
    #[error("Invalid time of day: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    #[error("Invalid {name}: {value}")]
    InvalidCoordinate { name: &'static str, value: f64 },
    #[error("Unknown {kind} symbol: {value}")]
    UnknownSymbol { kind: &'static str, value: String },
}

impl EngineError {
    /// Whether the error is caused by caller-supplied input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidHour { .. }
                | EngineError::InvalidDate { .. }
                | EngineError::InvalidBirthday { .. }
                | EngineError::InvalidTime { .. }
                | EngineError::InvalidCoordinate { .. }
                | EngineError::UnknownSymbol { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
