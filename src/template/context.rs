// ABOUTME: Template context holding the variables available to a render
// ABOUTME: Serialises to a flat JSON object so templates reference `{{ name }}` directly

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use super::error::{Result, TemplateError};

pub const SSH_KEY: &str = "ssh_key";
pub const VMNAME: &str = "vmname";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    #[serde(flatten)]
    variables: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context from an existing variable map
    pub fn from_variables(variables: &HashMap<String, String>) -> Self {
        Self {
            variables: variables
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Add or update a variable
    pub fn set_variable(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn get_variable(&self, key: &str) -> Option<&String> {
        self.variables.get(key)
    }

    /// Add multiple variables, replacing existing values
    pub fn extend_variables(&mut self, vars: HashMap<String, String>) {
        self.variables.extend(vars);
    }

    pub fn variables(&self) -> impl Iterator<Item = (&String, &String)> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Convert context to JSON for handlebars rendering
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(TemplateError::JsonError)
    }
}
