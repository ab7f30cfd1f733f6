//! Placeholder substitution.
//!
//! Every declared variable's `{{ key }}` markers are replaced by its trimmed
//! value. Blank or missing values leave the marker untouched so the gap stays
//! visible in every projection. Substitution is a single scan of the source,
//! so text inserted from a value is never rescanned for markers.

use crate::template::{placeholder_re, TemplateVariable};
use crate::values::ValueMap;
use regex::Captures;

/// Substitute `values` into `content`. Markers whose key is undeclared or
/// whose value is blank are copied through unchanged.
pub fn render(content: &str, variables: &[TemplateVariable], values: &ValueMap) -> String {
    placeholder_re()
        .replace_all(content, |caps: &Captures| {
            let key = &caps[1];
            variables
                .iter()
                .find(|v| v.key == key)
                .and_then(|v| values.filled(&v.key))
                .unwrap_or(&caps[0])
                .to_string()
        })
        .into_owned()
}
