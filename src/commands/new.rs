use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

use dashgen::defaults::{self, Defaults};
use dashgen::scaffold;
use dashgen::ProjectSpec;

use super::{CmdResult, TabOutput};

const NAME_PROMPT: &str =
    "Enter the name/type for your dashboard (e.g., Life Dashboard, Project Tracker): ";
const TABS_PROMPT: &str =
    "Enter the names for your initial tabs, separated by commas (e.g., Ideas, To-Do, Shopping List): ";

#[derive(Args)]
pub struct NewArgs {
    /// Project name/type (prompted for when omitted)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Comma-separated tab names (prompted for when omitted)
    #[arg(long, short = 't')]
    pub tabs: Option<String>,

    /// Directory to create the project in
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Render everything but write nothing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
pub struct NewOutput {
    pub command: &'static str,
    pub project_name: String,
    pub module_name: String,
    pub root: String,
    pub files: Vec<String>,
    pub tabs: Vec<TabOutput>,
    pub dry_run: bool,
    pub next_steps: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

pub fn run_json(args: NewArgs) -> CmdResult<NewOutput> {
    let name = crate::tty::flag_or_prompt(args.name, NAME_PROMPT)?;
    let tabs = crate::tty::flag_or_prompt(args.tabs, TABS_PROMPT)?;

    generate(
        &name,
        &tabs,
        &args.output_dir,
        args.dry_run,
        &defaults::load_defaults(),
    )
}

fn generate(
    name: &str,
    tabs: &str,
    output_dir: &Path,
    dry_run: bool,
    defaults: &Defaults,
) -> CmdResult<NewOutput> {
    let mut warnings = Vec::new();

    if name.trim().is_empty() {
        warnings.push(format!(
            "No project name entered, using default: {}",
            defaults.project_name
        ));
    }
    if tabs.trim().is_empty() {
        warnings.push(format!(
            "No tabs entered, creating a default '{}' tab.",
            defaults.default_tab
        ));
    }

    let spec = ProjectSpec::from_input(name, tabs, defaults)?;
    warnings.extend(spec.warnings());

    dashgen::log_status!(
        "new",
        "Creating project structure for: {} (Module: {})",
        spec.project_name,
        spec.module_name
    );

    let plan = scaffold::plan(&spec, defaults.window)?;

    let (root, files) = if dry_run {
        let root = output_dir.join(&spec.module_name);
        let files: Vec<PathBuf> = plan.files.iter().map(|f| root.join(&f.path)).collect();
        (root, files)
    } else {
        let report = scaffold::write(&plan, output_dir)?;
        warnings.extend(report.warnings);
        (report.root, report.written)
    };

    Ok((
        NewOutput {
            command: "new",
            project_name: spec.project_name.clone(),
            module_name: spec.module_name.clone(),
            root: root.display().to_string(),
            files: files.iter().map(|p| p.display().to_string()).collect(),
            tabs: spec.tabs.iter().map(TabOutput::from).collect(),
            dry_run,
            next_steps: scaffold::next_steps(&spec.module_name),
            warnings,
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generates_project_and_reports_files() {
        let dir = TempDir::new().unwrap();
        let (output, code) = generate(
            "Life Dashboard",
            "Ideas, To-Do List",
            dir.path(),
            false,
            &Defaults::default(),
        )
        .unwrap();

        assert_eq!(code, 0);
        assert_eq!(output.module_name, "life_dashboard");
        assert_eq!(output.files.len(), 4);
        assert!(output.warnings.is_empty());
        assert_eq!(output.tabs[1].function_name, "MakeToDoListUI");
        assert_eq!(output.tabs[1].spec.file_name, "todo_list.go");
        assert!(dir.path().join("life_dashboard/internal/ui/todo_list.go").is_file());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let (output, _) =
            generate("Life Dashboard", "Ideas", dir.path(), true, &Defaults::default()).unwrap();

        assert!(output.dry_run);
        assert_eq!(output.files.len(), 3);
        assert!(!dir.path().join("life_dashboard").exists());
    }

    #[test]
    fn blank_answers_use_defaults_with_warnings() {
        let dir = TempDir::new().unwrap();
        let (output, _) = generate("", "  ", dir.path(), true, &Defaults::default()).unwrap();

        assert_eq!(output.module_name, "mydashboard");
        assert_eq!(output.tabs.len(), 1);
        assert_eq!(output.tabs[0].spec.display_name, "Items");
        assert_eq!(output.warnings.len(), 2);
    }

    #[test]
    fn only_separators_is_a_validation_error() {
        let dir = TempDir::new().unwrap();
        let err = generate("x", ", ,", dir.path(), false, &Defaults::default()).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert!(!dir.path().join("x").exists());
    }

    #[test]
    fn serialized_tab_is_flat() {
        let dir = TempDir::new().unwrap();
        let (output, _) =
            generate("x", "Shopping List", dir.path(), true, &Defaults::default()).unwrap();
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["tabs"][0]["variable_name"], "shopping_listData");
        assert_eq!(json["tabs"][0]["function_name"], "MakeShoppingListUI");
        assert!(json.get("warnings").is_none());
    }
}
