//! String template rendering utilities.
//!
//! Templates use `{{key}}` placeholders. Substitution is a single pass, so a
//! value that itself contains `{{...}}` is emitted verbatim instead of being
//! expanded again.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{Error, Result};

static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}").expect("valid regex"));

/// A strongly typed parameter record for one template.
///
/// Each template owns exactly one implementor, so every placeholder it uses
/// has a single named source.
pub trait TemplateParams {
    fn vars(&self) -> Vec<(&'static str, String)>;
}

/// Render `template` with the variables of `params`.
///
/// Fails if the template references a placeholder the record does not
/// provide.
pub fn render_with<P: TemplateParams>(template: &str, params: &P) -> Result<String> {
    let vars = params.vars();
    let pairs: Vec<(&str, &str)> = vars.iter().map(|(k, v)| (*k, v.as_str())).collect();
    render(template, &pairs)
}

pub fn render(template: &str, variables: &[(&str, &str)]) -> Result<String> {
    let mut missing = BTreeSet::new();

    let rendered = PLACEHOLDER_PATTERN.replace_all(template, |caps: &Captures| {
        let key = &caps[1];
        match variables.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => (*value).to_string(),
            None => {
                missing.insert(key.to_string());
                caps[0].to_string()
            }
        }
    });

    if !missing.is_empty() {
        let keys: Vec<String> = missing.into_iter().collect();
        return Err(Error::internal_unexpected(format!(
            "Template references unknown placeholders: {}",
            keys.join(", ")
        )));
    }

    Ok(rendered.into_owned())
}

/// Placeholder names referenced by `template`, in first-use order.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for caps in PLACEHOLDER_PATTERN.captures_iter(template) {
        let key = caps[1].to_string();
        if !seen.contains(&key) {
            seen.push(key);
        }
    }
    seen
}
