//! Request parameter sets
//!
//! Builds the query string / form body of a request. Absent values are
//! dropped, never serialized as empty strings, and multi-valued parameters
//! become repeated keys in insertion order.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rust_decimal::Decimal;

/// Conversion of a typed value into its wire representation
pub trait ToParam {
    /// Serialize the value for a query string or form body
    fn to_param(&self) -> String;
}

impl ToParam for String {
    fn to_param(&self) -> String {
        self.clone()
    }
}

impl ToParam for &str {
    fn to_param(&self) -> String {
        (*self).to_string()
    }
}

impl ToParam for bool {
    fn to_param(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }
}

macro_rules! display_param {
    ($($ty:ty),*) => {
        $(impl ToParam for $ty {
            fn to_param(&self) -> String {
                self.to_string()
            }
        })*
    };
}

display_param!(u32, u64, i32, i64, usize, Decimal);

/// ISO 8601 date (`YYYY-MM-DD`)
impl ToParam for NaiveDate {
    fn to_param(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

/// ISO 8601 date-time in UTC (`2015-07-30T20:00:00Z`)
impl ToParam for DateTime<Utc> {
    fn to_param(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Ordered set of request parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter if it has a value
    pub fn set<T: ToParam>(&mut self, key: &str, value: Option<&T>) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_param()));
        }
        self
    }

    /// Add a parameter if it has a value, builder style
    #[must_use]
    pub fn with<T: ToParam>(mut self, key: &str, value: Option<&T>) -> Self {
        self.set(key, value);
        self
    }

    /// Add one pair per list element under the same key
    pub fn set_list<T: ToParam>(&mut self, key: &str, values: Option<&[T]>) -> &mut Self {
        for value in values.unwrap_or_default() {
            self.pairs.push((key.to_string(), value.to_param()));
        }
        self
    }

    /// Append all pairs of another set
    pub fn extend(&mut self, other: Params) -> &mut Self {
        self.pairs.extend(other.pairs);
        self
    }

    /// First value stored under a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values stored under a key
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Iterate over the pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if there are no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Consume into the raw pair list
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

/// A typed parameter struct that serializes into [`Params`]
pub trait ParamSet {
    /// Serialize the set, omitting absent values
    fn to_params(&self) -> Params;
}

/// Parameter set for operations that take no parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoParams;

impl ParamSet for NoParams {
    fn to_params(&self) -> Params {
        Params::new()
    }
}

/// Required-field check run before a request is built
pub trait RequiredParams {
    /// Names of required parameters that are missing
    fn missing_required(&self) -> Vec<&'static str>;
}

/// Build the validation message for a set of missing parameters
pub fn missing_message(missing: &[&str]) -> String {
    match missing {
        [single] => format!("Required parameter \"{single}\" missing."),
        many => format!("Required parameters {} are missing.", many.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    #[test]
    fn test_absent_values_are_omitted() {
        let params = Params::new()
            .with("To", Some(&"+15558675310"))
            .with::<String>("From", None)
            .with("Record", Some(&true));

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("To"), Some("+15558675310"));
        assert_eq!(params.get("From"), None);
        assert_eq!(params.get("Record"), Some("true"));
    }

    #[test]
    fn test_list_values_repeat_key() {
        let events = vec!["initiated".to_string(), "answered".to_string()];
        let mut params = Params::new();
        params.set_list("StatusCallbackEvent", Some(events.as_slice()));
        params.set_list::<String>("Other", None);

        assert_eq!(
            params.get_all("StatusCallbackEvent"),
            vec!["initiated", "answered"]
        );
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_date_serializers() {
        let date = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
        assert_eq!(date.to_param(), "2016-01-01");

        let datetime = Utc.with_ymd_and_hms(2015, 7, 30, 20, 0, 0).unwrap();
        assert_eq!(datetime.to_param(), "2015-07-30T20:00:00Z");
    }

    #[test]
    fn test_scalar_serializers() {
        assert_eq!(false.to_param(), "false");
        assert_eq!(50u32.to_param(), "50");
        assert_eq!(Decimal::from_str("-0.0017").unwrap().to_param(), "-0.0017");
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut params = Params::new();
        params.set("B", Some(&"2")).set("A", Some(&"1"));
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["B", "A"]);
    }

    #[test]
    fn test_missing_message() {
        assert_eq!(missing_message(&["to"]), "Required parameter \"to\" missing.");
        assert_eq!(
            missing_message(&["to", "from"]),
            "Required parameters to, from are missing."
        );
    }
}
