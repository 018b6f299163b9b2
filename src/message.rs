// src/message.rs
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

#[derive(Debug, Clone, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    pub days: TripDays,
    pub budget: String,
    pub trip_type: String,
}

/// Trip length as written by the client. Any JSON integer is accepted, of any
/// size, as are whole-number floats (`3.0` becomes `3`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDays(String);

impl TripDays {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_number(number: &serde_json::Number) -> Option<Self> {
        let text = number.to_string();
        let digits = text.strip_prefix('-').unwrap_or(&text);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Some(Self(text));
        }

        let value: f64 = text.parse().ok()?;
        if value.is_finite() && value.fract() == 0.0 {
            Some(Self(format!("{:.0}", value)))
        } else {
            None
        }
    }
}

impl From<i64> for TripDays {
    fn from(days: i64) -> Self {
        Self(days.to_string())
    }
}

impl fmt::Display for TripDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TripDays {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = serde_json::Number::deserialize(deserializer)?;
        TripDays::from_number(&number).ok_or_else(|| {
            de::Error::custom(format!("days must be a whole number, got {}", number))
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItineraryResponse {
    pub itinerary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
