use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafetyStatus {
    Safe,
    Unsafe,
    Unsure,
}

impl SafetyStatus {
    /// Numeric code used on the wire.
    pub fn code(&self) -> u8 {
        match self {
            SafetyStatus::Safe => 0,
            SafetyStatus::Unsafe => 1,
            SafetyStatus::Unsure => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyStatus::Safe => "SAFE",
            SafetyStatus::Unsafe => "UNSAFE",
            SafetyStatus::Unsure => "UNSURE",
        }
    }
}

impl FromStr for SafetyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SAFE" => Ok(SafetyStatus::Safe),
            "UNSAFE" => Ok(SafetyStatus::Unsafe),
            "UNSURE" => Ok(SafetyStatus::Unsure),
            _ => Err(format!("Invalid safety status: {}", s)),
        }
    }
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalDecision {
    pub status: SafetyStatus,
    pub message: String,
}

impl FinalDecision {
    pub fn new(status: SafetyStatus, message: String) -> Self {
        Self { status, message }
    }

    pub fn unsure(message: String) -> Self {
        Self::new(SafetyStatus::Unsure, message)
    }
}
