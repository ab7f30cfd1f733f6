use crate::error::{DocError, Result};
use crate::markdown::{self, ParsedStructure};
use crate::projection::{RawView, ReportOptions, ReportView, VisualView};
use crate::render;
use crate::template::{CyberTemplate, TemplateVariable};
use crate::types::Locale;
use crate::values::{self, ValueMap};
use chrono::{DateTime, Utc};

/// One user's editing session over a single template.
///
/// Owns the [`ValueMap`]; every rendering method is a pure function of the
/// template and the current values.
#[derive(Debug, Clone)]
pub struct TemplateSession<'a> {
    template: &'a CyberTemplate,
    values: ValueMap,
    locale: Locale,
}

impl<'a> TemplateSession<'a> {
    pub fn new(template: &'a CyberTemplate) -> Self {
        Self {
            template,
            values: ValueMap::new(),
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn template(&self) -> &'a CyberTemplate {
        self.template
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key)
    }

    /// Replace the value of one declared variable.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        if self.template.variable(key).is_none() {
            return Err(DocError::UnknownVariable {
                template: self.template.id.clone(),
                key: key.to_string(),
            });
        }
        self.values.set(key, value);
        Ok(())
    }

    /// Apply every entry of `values`, failing on the first undeclared key.
    pub fn apply(&mut self, values: &ValueMap) -> Result<()> {
        for (k, v) in values.iter() {
            self.set(k, v)?;
        }
        Ok(())
    }

    /// Replace all values with each variable's example.
    pub fn prefill(&mut self) {
        self.values = self
            .template
            .variables
            .iter()
            .map(|v| (v.key.clone(), v.example.clone()))
            .collect();
    }

    /// Replace all values with the empty string.
    pub fn reset(&mut self) {
        self.values = self
            .template
            .variables
            .iter()
            .map(|v| (v.key.clone(), String::new()))
            .collect();
    }

    pub fn missing_required(&self) -> Vec<&'a TemplateVariable> {
        values::missing_required(&self.template.variables, &self.values)
    }

    pub fn missing_keys(&self) -> Vec<String> {
        self.missing_required()
            .into_iter()
            .map(|v| v.key.clone())
            .collect()
    }

    pub fn render(&self) -> String {
        render::render(&self.template.content, &self.template.variables, &self.values)
    }

    pub fn parse(&self) -> ParsedStructure {
        markdown::parse(&self.render(), self.locale)
    }

    pub fn raw(&self) -> RawView {
        RawView::new(self.render())
    }

    pub fn visual(&self) -> VisualView {
        VisualView::build(&self.parse())
    }

    pub fn report(&self, generated_at: DateTime<Utc>, mut opts: ReportOptions) -> ReportView {
        opts.locale = self.locale;
        ReportView::build(
            self.template,
            &self.parse(),
            &self.missing_keys(),
            generated_at,
            opts,
        )
    }
}
