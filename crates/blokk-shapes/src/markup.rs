//! SVG serialization of attribute maps.

use crate::attributes::{AttrValue, Attributes};
use crate::kind::ShapeKind;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Self-closing element, e.g. `<rect x="0" y="0" width="1" height="1" />`.
///
/// Values are escaped; names are written as given and should be checked
/// with [`validate`] first.
pub fn element(kind: ShapeKind, attrs: &Attributes) -> String {
    let mut out = String::with_capacity(16 + attrs.len() * 16);
    out.push('<');
    out.push_str(kind.as_str());
    for (name, value) in attrs.iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(&value.to_string()));
        out.push('"');
    }
    out.push_str(" />");
    out
}

/// Wraps `body` in an `<svg>` root whose user space is the unit square
/// scaled to `pixels` device units.
pub fn document(body: &str, pixels: u32) -> String {
    format!(
        r#"<svg xmlns="{SVG_NS}" width="{pixels}" height="{pixels}" viewBox="0 0 1 1">{body}</svg>"#
    )
}

/// Checks that every name is an XML name and every number is finite.
///
/// Returns a human-readable reason for the first offending attribute.
pub fn validate(attrs: &Attributes) -> Result<(), String> {
    for (name, value) in attrs.iter() {
        if !is_xml_name(name) {
            return Err(format!("attribute name `{name}` is not a valid XML name"));
        }
        if let AttrValue::Number(n) = value {
            if !n.is_finite() {
                return Err(format!("attribute `{name}` is not a finite number ({n})"));
            }
        }
    }
    Ok(())
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == ':')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}
