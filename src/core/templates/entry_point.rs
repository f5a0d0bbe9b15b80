//! `cmd/<module>/main.go`: builds the window and one app tab per TabSpec.

use crate::defaults::WindowConfig;
use crate::error::{Error, Result};
use crate::project::TabSpec;
use crate::utils::template::{render_with, TemplateParams};

use super::go_string;

const TEMPLATE: &str = r#"package main

import (
	"{{module_name}}/internal/ui" // Import from our internal UI package

	"fyne.io/fyne/v2"
	"fyne.io/fyne/v2/app"
	"fyne.io/fyne/v2/container"
)

func main() {
	myApp := app.New()
	myWindow := myApp.NewWindow("{{window_title}}")

	tabs := container.NewAppTabs(
		{{tab_items}},
	)

	myWindow.SetContent(tabs)
	myWindow.Resize(fyne.NewSize({{window_width}}, {{window_height}}))
	myWindow.ShowAndRun()
}
"#;

const TAB_ITEM_TEMPLATE: &str = r#"container.NewTabItem("{{display_literal}}", ui.{{function_name}}(myWindow))"#;

const TAB_ITEM_SEPARATOR: &str = ",\n\t\t";

struct TabItemParams {
    display_literal: String,
    function_name: String,
}

impl From<&TabSpec> for TabItemParams {
    fn from(tab: &TabSpec) -> Self {
        Self {
            display_literal: go_string(&tab.display_name),
            function_name: tab.function_name(),
        }
    }
}

impl TemplateParams for TabItemParams {
    fn vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("display_literal", self.display_literal.clone()),
            ("function_name", self.function_name.clone()),
        ]
    }
}

/// Values substituted into the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPointParams {
    pub module_name: String,
    pub window_title: String,
    /// Rendered `container.NewTabItem(...)` expressions, in tab order.
    pub tab_items: Vec<String>,
    pub window: (u32, u32),
}

impl EntryPointParams {
    /// Fails when `tabs` is empty: an app with no tabs has nothing to show.
    pub fn new(
        module_name: &str,
        window_title: &str,
        tabs: &[TabSpec],
        window: WindowConfig,
    ) -> Result<Self> {
        if tabs.is_empty() {
            return Err(Error::validation_invalid_argument(
                "tabs",
                "Entry point needs at least one tab",
                Some(module_name.to_string()),
                None,
            ));
        }

        let tab_items = tabs
            .iter()
            .map(|tab| render_with(TAB_ITEM_TEMPLATE, &TabItemParams::from(tab)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            module_name: module_name.to_string(),
            window_title: go_string(window_title),
            tab_items,
            window: (window.width, window.height),
        })
    }
}

impl TemplateParams for EntryPointParams {
    fn vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("module_name", self.module_name.clone()),
            ("window_title", self.window_title.clone()),
            ("tab_items", self.tab_items.join(TAB_ITEM_SEPARATOR)),
            ("window_width", self.window.0.to_string()),
            ("window_height", self.window.1.to_string()),
        ]
    }
}

pub fn render_entry_point(
    module_name: &str,
    window_title: &str,
    tabs: &[TabSpec],
    window: WindowConfig,
) -> Result<String> {
    let params = EntryPointParams::new(module_name, window_title, tabs, window)?;
    render_with(TEMPLATE, &params)
}
