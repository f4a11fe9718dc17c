//! Ordered attribute maps produced by shape attribute builders.

use std::fmt;

/// One attribute value: a number or free text (path data, transforms).
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Text(String),
}

impl AttrValue {
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Number(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) => write!(f, "{}", format_number(*n)),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<f32> for AttrValue {
    fn from(n: f32) -> Self {
        AttrValue::Number(n as f64)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Number(n as f64)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

/// Formats a number the way markup expects it, matching ECMAScript
/// `Number.prototype.toString`: shortest round-trip digits, integers without
/// a fraction, no negative zero, exponent form below `1e-6` and from `1e21`.
///
/// `10.0` → `"10"`, `0.5` → `"0.5"`, `-0.0` → `"0"`, `1e-7` → `"1e-7"`,
/// `1e21` → `"1e+21"`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. `1.25e-7`.
    let sci = format!("{:e}", n.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exp + 1;

    let body = if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let sign = if point - 1 < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", (point - 1).abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", (point - 1).abs())
        }
    };

    if n < 0.0 { format!("-{body}") } else { body }
}

/// Attribute name → value, in insertion order.
///
/// Setting an existing name replaces its value in place, so serialization
/// order is the order in which names were first set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    #[inline]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    #[inline]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(AttrValue::as_number)
    }

    #[inline]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_text)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── numbers ───────────────────────────────────────────────────────────

    #[test]
    fn integers_print_without_fraction() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn fractions_print_shortest() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn negative_zero_prints_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn small_magnitudes_switch_to_exponent() {
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn large_magnitudes_switch_to_exponent() {
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e300), "1.5e+300");
    }

    #[test]
    fn mixed_digits_place_the_point() {
        assert_eq!(format_number(1234.5678), "1234.5678");
        assert_eq!(format_number(-0.0125), "-0.0125");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn non_finite_values_use_script_names() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    // ── map ───────────────────────────────────────────────────────────────

    #[test]
    fn keeps_insertion_order() {
        let a = Attributes::new().with("x", 1.0).with("y", 2.0).with("width", 3.0);
        assert_eq!(a.names().collect::<Vec<_>>(), ["x", "y", "width"]);
    }

    #[test]
    fn set_replaces_in_place() {
        let a = Attributes::new().with("x", 1.0).with("y", 2.0).with("x", 5.0);
        assert_eq!(a.len(), 2);
        assert_eq!(a.number("x"), Some(5.0));
        assert_eq!(a.names().next(), Some("x"));
    }

    #[test]
    fn typed_lookups() {
        let a = Attributes::new().with("d", "M0 0").with("r", 2.0);
        assert_eq!(a.text("d"), Some("M0 0"));
        assert_eq!(a.number("d"), None);
        assert_eq!(a.number("r"), Some(2.0));
        assert_eq!(a.get("missing"), None);
    }

    #[test]
    fn collects_from_pairs() {
        let a: Attributes = [("cx", 1.0), ("cy", 2.0)].into_iter().collect();
        assert_eq!(a.number("cy"), Some(2.0));
    }
}
