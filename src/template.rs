//! URI templates and path solutions
//!
//! Every resource collection has a fixed URI template such as
//! `/Accounts/{accountSid}/Calls.json`. The path parameters that fill it in
//! are carried around as a [`Solution`], which is fixed when the collection is
//! constructed and shared by every page and record produced from it.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Regex for matching path parameters: {accountSid}
static TEMPLATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").unwrap());

/// Path parameters identifying a resource collection or instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    params: BTreeMap<String, String>,
}

impl Solution {
    /// Create an empty solution
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path parameter, returning the extended solution
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Get a path parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Check if the solution carries a parameter
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Number of path parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the solution has no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over parameters in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}={v}")).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// Render a URI template, failing on any parameter the solution lacks
pub fn render(template: &str, solution: &Solution) -> Result<String> {
    let missing: Vec<String> = extract_variables(template)
        .into_iter()
        .filter(|name| !solution.contains(name))
        .collect();

    if missing.is_empty() {
        Ok(render_optional(template, solution))
    } else {
        Err(Error::undefined_var(missing.join(", ")))
    }
}

/// Render a URI template, leaving undefined parameters as-is
pub fn render_optional(template: &str, solution: &Solution) -> String {
    TEMPLATE_REGEX
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            solution
                .get(name)
                .map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}

/// Extract all parameter names from a template
pub fn extract_variables(template: &str) -> Vec<String> {
    TEMPLATE_REGEX
        .captures_iter(template)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let solution = Solution::new().with("accountSid", "AC123");
        let result = render("/Accounts/{accountSid}/Calls.json", &solution).unwrap();
        assert_eq!(result, "/Accounts/AC123/Calls.json");
    }

    #[test]
    fn test_multiple_substitutions() {
        let solution = Solution::new()
            .with("accountSid", "AC123")
            .with("sid", "CA456");

        let result = render("/Accounts/{accountSid}/Calls/{sid}.json", &solution).unwrap();
        assert_eq!(result, "/Accounts/AC123/Calls/CA456.json");
    }

    #[test]
    fn test_undefined_variable() {
        let solution = Solution::new().with("accountSid", "AC123");
        let result = render("/Accounts/{accountSid}/Calls/{sid}.json", &solution);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("sid"));
    }

    #[test]
    fn test_render_optional_keeps_unknown() {
        let solution = Solution::new().with("roomSid", "RM1");
        assert_eq!(
            render_optional("/Video/Rooms/{roomSid}/Participants/{participantSid}", &solution),
            "/Video/Rooms/RM1/Participants/{participantSid}"
        );
    }

    #[test]
    fn test_no_templates() {
        let solution = Solution::new();
        assert_eq!(render("/Services", &solution).unwrap(), "/Services");
    }

    #[test]
    fn test_extract_variables() {
        let vars = extract_variables("/Accounts/{accountSid}/Calls/{sid}.json");
        assert_eq!(vars, vec!["accountSid", "sid"]);
    }

    #[test]
    fn test_solution_is_ordered_and_displayable() {
        let solution = Solution::new().with("sid", "CA1").with("accountSid", "AC1");
        assert_eq!(solution.len(), 2);
        assert_eq!(solution.to_string(), "{accountSid=AC1, sid=CA1}");
        assert!(!solution.is_empty());
    }
}
