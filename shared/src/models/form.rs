//! Form input models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::FIXED_PH;

/// Raw form values exactly as read from the UI, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub location: String,
    pub month: String,
    pub n: String,
    pub p: String,
    pub k: String,
}

/// Validated input for one recommendation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    /// City name, trimmed
    pub location: String,
    /// Month exactly as selected; the service owns its vocabulary
    pub month: String,
    /// Nitrogen, string-encoded as typed
    pub n: String,
    /// Phosphorus, string-encoded as typed
    pub p: String,
    /// Potassium, string-encoded as typed
    pub k: String,
}

impl FormInput {
    /// Soil pH sent with the request
    pub fn ph(&self) -> u8 {
        FIXED_PH
    }

    /// Query parameters in the order the recommendation service expects
    pub fn query_pairs(&self) -> [(&'static str, String); 6] {
        [
            ("N", self.n.clone()),
            ("P", self.p.clone()),
            ("K", self.k.clone()),
            ("ph", self.ph().to_string()),
            ("city", self.location.clone()),
            ("month", self.month.clone()),
        ]
    }
}

/// Calendar month, used by front-ends that accept loose month input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Full English name
    pub fn as_str(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a month identifier is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMonth(pub String);

impl fmt::Display for UnknownMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown month: {}", self.0)
    }
}

impl std::error::Error for UnknownMonth {}

impl FromStr for Month {
    type Err = UnknownMonth;

    /// Accepts the full name, the three-letter abbreviation or `1`-`12`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();

        if let Ok(number) = value.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|i| Month::ALL.get(i).copied())
                .ok_or_else(|| UnknownMonth(s.to_string()));
        }

        let lower = value.to_lowercase();
        Month::ALL
            .iter()
            .copied()
            .find(|m| {
                let name = m.as_str().to_lowercase();
                name == lower || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| UnknownMonth(s.to_string()))
    }
}
