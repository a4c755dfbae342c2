//! String attributes reflected onto the typed slider state.
//!
//! Hosts that configure components through markup hand attribute text to
//! [`RangeSlider::set_attribute`](super::RangeSlider::set_attribute). Only the
//! names in [`OBSERVED_ATTRIBUTES`] affect behaviour; other attributes are
//! stored and can be read back.

use rustc_hash::FxHashMap;

/// Attributes whose changes reconfigure the slider.
pub const OBSERVED_ATTRIBUTES: [&str; 5] = ["disabled", "list", "min", "max", "step"];

/// An observed attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedAttribute {
    /// Presence disables the slider.
    Disabled,
    /// Datalist id forwarded to both sub-controls.
    List,
    /// Interval start.
    Min,
    /// Interval end.
    Max,
    /// Step lattice, `"any"` or a positive number.
    Step,
}

impl ObservedAttribute {
    /// Looks up an attribute name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let attribute = match normalize(name).as_str() {
            "disabled" => ObservedAttribute::Disabled,
            "list" => ObservedAttribute::List,
            "min" => ObservedAttribute::Min,
            "max" => ObservedAttribute::Max,
            "step" => ObservedAttribute::Step,
            _ => return None,
        };
        Some(attribute)
    }

    /// The attribute name.
    pub fn name(self) -> &'static str {
        match self {
            ObservedAttribute::Disabled => OBSERVED_ATTRIBUTES[0],
            ObservedAttribute::List => OBSERVED_ATTRIBUTES[1],
            ObservedAttribute::Min => OBSERVED_ATTRIBUTES[2],
            ObservedAttribute::Max => OBSERVED_ATTRIBUTES[3],
            ObservedAttribute::Step => OBSERVED_ATTRIBUTES[4],
        }
    }
}

pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Parses numeric attribute text. Non-finite numbers are rejected.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Attribute storage keyed by lowercase name.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct AttributeMap {
    values: FxHashMap<String, String>,
}

impl AttributeMap {
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&normalize(name)).map(String::as_str)
    }

    /// Stores `value` and returns the previous value.
    pub(crate) fn set(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        self.values.insert(normalize(name), value.into())
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(&normalize(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observed_names_round_trip() {
        for name in OBSERVED_ATTRIBUTES {
            let attribute = ObservedAttribute::from_name(name);
            assert_eq!(attribute.map(ObservedAttribute::name), Some(name));
        }
        assert_eq!(ObservedAttribute::from_name(" STEP "), Some(ObservedAttribute::Step));
        assert_eq!(ObservedAttribute::from_name("value"), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("12px"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let mut attributes = AttributeMap::default();
        assert_eq!(attributes.set("Min", "4"), None);
        assert_eq!(attributes.get("MIN"), Some("4"));
        assert!(attributes.get("min").is_some());
        assert_eq!(attributes.remove("min").as_deref(), Some("4"));
        assert!(attributes.get("min").is_none());
    }
}
