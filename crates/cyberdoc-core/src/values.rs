use crate::error::{DocError, Result};
use crate::template::TemplateVariable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-supplied variable values for one template session.
///
/// Every value is free text. A key that is absent and a key holding only
/// whitespace are treated the same way by rendering and validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMap(BTreeMap<String, String>);

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The trimmed value for `key`, or `None` when absent or blank.
    pub fn filled(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a YAML (or JSON) mapping of key → value. Non-string scalars such
    /// as numbers and dates are kept as their text form.
    pub fn from_yaml_str(data: &str) -> Result<Self> {
        if data.trim().is_empty() {
            return Ok(ValueMap::new());
        }
        let raw: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(data)?;
        let mut map = ValueMap::new();
        for (k, v) in raw {
            let text = match v {
                serde_yaml::Value::Null => String::new(),
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Bool(b) => b.to_string(),
                serde_yaml::Value::Number(n) => n.to_string(),
                other => serde_yaml::to_string(&other)?.trim_end().to_string(),
            };
            map.set(k, text);
        }
        Ok(map)
    }

    /// Parse a single `key=value` assignment. The value may contain `=`.
    pub fn parse_assignment(s: &str) -> Result<(String, String)> {
        let Some((key, value)) = s.split_once('=') else {
            return Err(DocError::InvalidAssignment(s.to_string()));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(DocError::InvalidAssignment(s.to_string()));
        }
        Ok((key.to_string(), value.to_string()))
    }
}

impl FromIterator<(String, String)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        ValueMap(iter.into_iter().collect())
    }
}

/// Required variables whose value is absent or whitespace-only, in
/// declaration order. Advisory: rendering proceeds regardless.
pub fn missing_required<'a>(
    variables: &'a [TemplateVariable],
    values: &ValueMap,
) -> Vec<&'a TemplateVariable> {
    variables
        .iter()
        .filter(|v| v.required && values.filled(&v.key).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_trims_and_rejects_blank() {
        let mut values = ValueMap::new();
        values.set("a", "  ACME  ");
        values.set("b", " \t\n");
        assert_eq!(values.filled("a"), Some("ACME"));
        assert_eq!(values.filled("b"), None);
        assert_eq!(values.filled("c"), None);
    }

    #[test]
    fn missing_required_only_reports_blank_required() {
        let vars = vec![
            TemplateVariable::new("x", "X").required(),
            TemplateVariable::new("y", "Y").required(),
            TemplateVariable::new("z", "Z"),
        ];
        let mut values = ValueMap::new();
        values.set("x", "   ");
        values.set("y", "filled");
        let missing: Vec<&str> = missing_required(&vars, &values)
            .iter()
            .map(|v| v.key.as_str())
            .collect();
        assert_eq!(missing, vec!["x"]);
    }

    #[test]
    fn from_yaml_stringifies_scalars() {
        let values = ValueMap::from_yaml_str("name: ACME\nheadcount: 42\nremote: true\nnote:\n").unwrap();
        assert_eq!(values.get("name"), Some("ACME"));
        assert_eq!(values.get("headcount"), Some("42"));
        assert_eq!(values.get("remote"), Some("true"));
        assert_eq!(values.get("note"), Some(""));
    }

    #[test]
    fn parse_assignment_splits_on_first_equals() {
        let (k, v) = ValueMap::parse_assignment("url=https://x.test/?a=b").unwrap();
        assert_eq!(k, "url");
        assert_eq!(v, "https://x.test/?a=b");
        assert!(ValueMap::parse_assignment("novalue").is_err());
        assert!(ValueMap::parse_assignment("=oops").is_err());
    }
}
