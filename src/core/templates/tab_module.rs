//! `internal/ui/<tab>.go`: one list-and-input widget per tab.
//!
//! The generated add handler trims the entry text, ignores it when empty,
//! otherwise appends it to the tab's collection, refreshes the list and
//! clears the entry.

use crate::error::Result;
use crate::project::TabSpec;
use crate::utils::naming::label_case;
use crate::utils::template::{render_with, TemplateParams};

use super::{go_comment, go_string};

const TEMPLATE: &str = r#"package ui

import (
	"strings"

	"fyne.io/fyne/v2"
	"fyne.io/fyne/v2/container"
	"fyne.io/fyne/v2/widget"
)

// {{variable_name}} holds the list of items for the "{{display_comment}}" tab.
// For a real application, you'd load/save this data.
var {{variable_name}} = []string{"Sample Item 1 for {{display_literal}}", "Sample Item 2 for {{display_literal}}"}

// {{function_name}} creates and returns the canvas object for the "{{display_comment}}" tab.
func {{function_name}}(win fyne.Window) fyne.CanvasObject {
	input := widget.NewEntry()
	input.SetPlaceHolder("Enter new {{placeholder_literal}}...")

	var itemList *widget.List

	itemList = widget.NewList(
		func() int {
			return len({{variable_name}})
		},
		func() fyne.CanvasObject {
			return widget.NewLabel("template item")
		},
		func(i widget.ListItemID, o fyne.CanvasObject) {
			o.(*widget.Label).SetText({{variable_name}}[i])
		},
	)

	addButton := widget.NewButton("Add {{button_label_literal}}", func() {
		text := strings.TrimSpace(input.Text)
		if text != "" {
			{{variable_name}} = append({{variable_name}}, text)
			itemList.Refresh()
			input.SetText("")
		}
	})

	inputBox := container.NewHBox(input, addButton)
	return container.NewBorder(inputBox, nil, nil, nil, itemList)
}
"#;

/// Values substituted into one tab module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabModuleParams {
    pub variable_name: String,
    pub function_name: String,
    pub display_comment: String,
    pub display_literal: String,
    pub placeholder_literal: String,
    pub button_label_literal: String,
}

impl From<&TabSpec> for TabModuleParams {
    fn from(tab: &TabSpec) -> Self {
        let lowered = tab.display_name.to_lowercase();
        Self {
            variable_name: tab.variable_name.clone(),
            function_name: tab.function_name(),
            display_comment: go_comment(&tab.display_name),
            display_literal: go_string(&tab.display_name),
            placeholder_literal: go_string(&lowered),
            button_label_literal: go_string(&label_case(&lowered)),
        }
    }
}

impl TemplateParams for TabModuleParams {
    fn vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("variable_name", self.variable_name.clone()),
            ("function_name", self.function_name.clone()),
            ("display_comment", self.display_comment.clone()),
            ("display_literal", self.display_literal.clone()),
            ("placeholder_literal", self.placeholder_literal.clone()),
            ("button_label_literal", self.button_label_literal.clone()),
        ]
    }
}

pub fn render_tab_module(tab: &TabSpec) -> Result<String> {
    render_with(TEMPLATE, &TabModuleParams::from(tab))
}
