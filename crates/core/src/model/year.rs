use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum YearError {
    #[error("year must be four digits: {raw:?}")]
    NotFourDigits { raw: String },
}

/// Exam year of a question bank, always four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(u16);

impl Year {
    /// Creates a `Year` from a number in `1000..=9999`.
    ///
    /// # Errors
    ///
    /// Returns `YearError::NotFourDigits` for anything outside that range.
    pub fn new(value: u16) -> Result<Self, YearError> {
        if (1000..=9999).contains(&value) {
            Ok(Self(value))
        } else {
            Err(YearError::NotFourDigits {
                raw: value.to_string(),
            })
        }
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Debug for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year({})", self.0)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for Year {
    type Err = YearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(YearError::NotFourDigits { raw: s.to_string() });
        }
        let value: u16 = trimmed
            .parse()
            .map_err(|_| YearError::NotFourDigits { raw: s.to_string() })?;
        Self::new(value)
    }
}

impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// Banks store the year as a string, a few older ones as a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Text(String),
    Number(u16),
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match YearRepr::deserialize(deserializer)? {
            YearRepr::Text(raw) => raw.parse().map_err(serde::de::Error::custom),
            YearRepr::Number(value) => Year::new(value).map_err(serde::de::Error::custom),
        }
    }
}

/// Inclusive range of exam years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    start: Year,
    end: Year,
}

impl YearRange {
    /// Builds a range as given. An inverted range is allowed and contains nothing.
    #[must_use]
    pub fn new(start: Year, end: Year) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn single(year: Year) -> Self {
        Self::new(year, year)
    }

    #[must_use]
    pub fn start(&self) -> Year {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Year {
        self.end
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    #[must_use]
    pub fn contains(&self, year: Year) -> bool {
        self.start <= year && year <= self.end
    }

    /// Every calendar year in the range, ascending.
    #[must_use]
    pub fn years(&self) -> Vec<Year> {
        if self.is_empty() {
            return Vec::new();
        }
        (self.start.value()..=self.end.value())
            .filter_map(|v| Year::new(v).ok())
            .collect()
    }

    /// Moves the start bound, pulling the end along if it would fall behind.
    #[must_use]
    pub fn with_start(self, start: Year) -> Self {
        Self {
            start,
            end: self.end.max(start),
        }
    }

    /// Moves the end bound, pulling the start along if it would get ahead.
    #[must_use]
    pub fn with_end(self, end: Year) -> Self {
        Self {
            start: self.start.min(end),
            end,
        }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}年", self.start)
        } else {
            write!(f, "{}〜{}年", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn y(v: u16) -> Year {
        Year::new(v).unwrap()
    }

    #[test]
    fn parses_four_digit_strings_only() {
        assert_eq!("2020".parse::<Year>().unwrap(), y(2020));
        assert_eq!(" 2019 ".parse::<Year>().unwrap(), y(2019));
        assert!("20".parse::<Year>().is_err());
        assert!("20a0".parse::<Year>().is_err());
        assert!("12345".parse::<Year>().is_err());
    }

    #[test]
    fn deserializes_from_string_or_number() {
        let from_text: Year = serde_json::from_str("\"2021\"").unwrap();
        let from_number: Year = serde_json::from_str("2021").unwrap();
        assert_eq!(from_text, from_number);
        assert!(serde_json::from_str::<Year>("\"R3\"").is_err());
        assert_eq!(serde_json::to_string(&from_text).unwrap(), "\"2021\"");
    }

    #[test]
    fn range_lists_years_inclusive() {
        let range = YearRange::new(y(2018), y(2020));
        assert_eq!(range.years(), vec![y(2018), y(2019), y(2020)]);
        assert!(range.contains(y(2018)));
        assert!(range.contains(y(2020)));
        assert!(!range.contains(y(2021)));
    }

    #[test]
    fn inverted_range_is_empty() {
        let range = YearRange::new(y(2021), y(2019));
        assert!(range.is_empty());
        assert!(range.years().is_empty());
        assert!(!range.contains(y(2020)));
    }

    #[test]
    fn moving_a_bound_keeps_range_ordered() {
        let range = YearRange::new(y(2018), y(2019));
        assert_eq!(range.with_start(y(2021)), YearRange::new(y(2021), y(2021)));
        assert_eq!(range.with_end(y(2017)), YearRange::new(y(2017), y(2017)));
        assert_eq!(range.with_end(y(2022)), YearRange::new(y(2018), y(2022)));
    }

    #[test]
    fn display_collapses_single_year() {
        assert_eq!(YearRange::single(y(2020)).to_string(), "2020年");
        assert_eq!(YearRange::new(y(2018), y(2020)).to_string(), "2018〜2020年");
    }
}
