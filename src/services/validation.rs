//! Input validation for agent file posts and list queries.
//!
//! DESIGN
//! ======
//! Every rule for a field runs, so a single response can report all of its
//! problems at once. Lengths are counted in characters, not bytes.

use std::collections::BTreeMap;

use serde::Deserialize;

pub const NAME_MAX_LENGTH: usize = 100;
pub const DESCRIPTION_MAX_LENGTH: usize = 500;
pub const CONTENT_MAX_LENGTH: usize = 50_000;
pub const SEARCH_QUERY_MAX_LENGTH: usize = 100;

/// Field name -> every message that field produced, in rule order.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Raw form input as posted by a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentFileForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Form input that passed every rule. `description` is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAgentFile {
    pub name: String,
    pub description: String,
    pub content: String,
}

/// Validate a posted form.
///
/// # Errors
///
/// Returns every failed rule keyed by field name.
pub fn validate_agent_file_form(form: AgentFileForm) -> Result<ValidAgentFile, FieldErrors> {
    let mut errors = FieldErrors::new();
    let description = form.description.unwrap_or_default();

    push_all(&mut errors, "name", name_errors(&form.name));
    push_all(&mut errors, "description", description_errors(&description));
    push_all(&mut errors, "content", content_errors(&form.content));

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ValidAgentFile { name: form.name, description, content: form.content })
}

/// Validate a search string from a list query.
///
/// # Errors
///
/// Returns the `q` field error when the query is too long.
pub fn validate_search_query(query: &str) -> Result<(), FieldErrors> {
    if query.chars().count() > SEARCH_QUERY_MAX_LENGTH {
        let mut errors = FieldErrors::new();
        errors.insert("q".into(), vec!["Search query must be 100 characters or less".into()]);
        return Err(errors);
    }
    Ok(())
}

fn name_errors(name: &str) -> Vec<&'static str> {
    let mut out = Vec::new();
    let len = name.chars().count();
    if len == 0 {
        out.push("File name is required");
    }
    if len > NAME_MAX_LENGTH {
        out.push("File name must be 100 characters or less");
    }
    if !name.ends_with(".md") {
        out.push("File name must end with .md");
    }
    if name.contains('/') || name.contains('\\') {
        out.push("File name cannot contain slashes");
    }
    out
}

fn description_errors(description: &str) -> Vec<&'static str> {
    if description.chars().count() > DESCRIPTION_MAX_LENGTH {
        vec!["Description must be 500 characters or less"]
    } else {
        Vec::new()
    }
}

fn content_errors(content: &str) -> Vec<&'static str> {
    let mut out = Vec::new();
    let len = content.chars().count();
    if len == 0 {
        out.push("Content is required");
    }
    if len > CONTENT_MAX_LENGTH {
        out.push("Content must be 50,000 characters or less");
    }
    if content.trim().is_empty() {
        out.push("Content cannot be only whitespace");
    }
    out
}

fn push_all(errors: &mut FieldErrors, field: &str, messages: Vec<&'static str>) {
    if messages.is_empty() {
        return;
    }
    errors.insert(field.to_string(), messages.into_iter().map(str::to_string).collect());
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
