//! Project and tab model for one generation run.
//!
//! A [`ProjectSpec`] is built once from user input and only read afterwards.
//! Every identifier the templates need is derived here, so the entry point
//! and the tab modules always agree on names.

use serde::Serialize;

use crate::defaults::Defaults;
use crate::error::{Error, Result};
use crate::utils::naming::{sanitize, title_case};

/// Appended to a tab's identifier to name its backing collection.
pub const DATA_SUFFIX: &str = "Data";

/// Extension of generated source files.
pub const SOURCE_EXTENSION: &str = ".go";

/// One requested tab and its derived identifier forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabSpec {
    pub display_name: String,
    pub identifier_base: String,
    pub title_case_name: String,
    pub variable_name: String,
    pub file_name: String,
}

impl TabSpec {
    /// Derive a tab from raw user text. Returns `None` for blank input.
    pub fn from_display_name(raw: &str) -> Option<Self> {
        let display_name = raw.trim();
        if display_name.is_empty() {
            return None;
        }

        let identifier_base = sanitize(display_name);
        Some(Self {
            display_name: display_name.to_string(),
            title_case_name: title_case(display_name),
            variable_name: format!("{}{}", identifier_base, DATA_SUFFIX),
            file_name: format!("{}{}", identifier_base, SOURCE_EXTENSION),
            identifier_base,
        })
    }

    /// Name of the generated accessor, e.g. `MakeShoppingListUI`.
    pub fn function_name(&self) -> String {
        format!("Make{}UI", self.title_case_name)
    }
}

/// Split comma-separated tab names, dropping blank entries.
///
/// Blank overall input yields a single `default_tab`. Input that is not blank
/// but contains only blank entries (", ,") yields nothing.
pub fn parse_tabs(input: &str, default_tab: &str) -> Vec<TabSpec> {
    let input = input.trim();
    if input.is_empty() {
        return TabSpec::from_display_name(default_tab).into_iter().collect();
    }

    input.split(',').filter_map(TabSpec::from_display_name).collect()
}

/// The complete, immutable description of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSpec {
    /// Trimmed user text, used for the window title.
    pub project_name: String,
    /// Sanitized project name: root directory, command directory and import path.
    pub module_name: String,
    pub tabs: Vec<TabSpec>,
}

impl ProjectSpec {
    pub fn new(project_name: &str, tabs: Vec<TabSpec>) -> Result<Self> {
        if tabs.is_empty() {
            return Err(Error::validation_invalid_argument(
                "tabs",
                "No valid tab names provided",
                None,
                None,
            )
            .with_hint("Separate tab names with commas, e.g. \"Ideas, To-Do, Shopping List\""));
        }

        let project_name = project_name.trim().to_string();
        Ok(Self {
            module_name: sanitize(&project_name),
            project_name,
            tabs,
        })
    }

    /// Build from raw prompt answers, substituting configured defaults for blank input.
    pub fn from_input(name_input: &str, tabs_input: &str, defaults: &Defaults) -> Result<Self> {
        let name = match name_input.trim() {
            "" => defaults.project_name.as_str(),
            trimmed => trimmed,
        };

        Self::new(name, parse_tabs(tabs_input, &defaults.default_tab))
    }

    /// Problems the generator does not fix but the user should know about.
    ///
    /// Output is unaffected: later files still overwrite earlier ones and
    /// empty name fragments are still emitted.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for (index, tab) in self.tabs.iter().enumerate() {
            if tab.title_case_name.is_empty() {
                warnings.push(format!(
                    "Tab '{}' has no word characters; its function is named {}",
                    tab.display_name,
                    tab.function_name()
                ));
            }

            let earlier = &self.tabs[..index];

            if let Some(prev) = earlier.iter().find(|t| t.file_name == tab.file_name) {
                warnings.push(format!(
                    "Tabs '{}' and '{}' both map to internal/ui/{}; '{}' overwrites '{}'",
                    prev.display_name,
                    tab.display_name,
                    tab.file_name,
                    tab.display_name,
                    prev.display_name
                ));
            } else if let Some(prev) = earlier
                .iter()
                .find(|t| t.title_case_name == tab.title_case_name)
            {
                warnings.push(format!(
                    "Tabs '{}' and '{}' both declare {}; the generated package will not build",
                    prev.display_name,
                    tab.display_name,
                    tab.function_name()
                ));
            }
        }

        warnings
    }
}
