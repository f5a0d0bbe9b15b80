//! Rendering and writing of a project tree.
//!
//! [`plan`] is pure: it renders every file into memory. [`write`] then lays
//! the tree out on disk in plan order and stops at the first I/O failure.
//!
//! ```text
//! <module>/
//!   cmd/<module>/main.go
//!   internal/ui/<tab>.go ...
//!   .gitignore
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::defaults::WindowConfig;
use crate::error::Result;
use crate::project::ProjectSpec;
use crate::templates::{render_entry_point, render_gitignore, render_tab_module};
use crate::utils::io::{self, DirStatus};

/// One rendered file, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub module_name: String,
    pub files: Vec<PlannedFile>,
}

/// `cmd/<module>`, relative to the project root.
pub fn cmd_dir(module_name: &str) -> PathBuf {
    Path::new("cmd").join(module_name)
}

/// `internal/ui`, relative to the project root.
pub fn ui_dir() -> PathBuf {
    Path::new("internal").join("ui")
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub written: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

/// Render the entry point, every tab module and the ignore-file.
pub fn plan(spec: &ProjectSpec, window: WindowConfig) -> Result<ScaffoldPlan> {
    let mut files = Vec::with_capacity(spec.tabs.len() + 2);

    files.push(PlannedFile {
        path: cmd_dir(&spec.module_name).join("main.go"),
        contents: render_entry_point(&spec.module_name, &spec.project_name, &spec.tabs, window)?,
    });

    let ui = ui_dir();
    for tab in &spec.tabs {
        files.push(PlannedFile {
            path: ui.join(&tab.file_name),
            contents: render_tab_module(tab)?,
        });
    }

    files.push(PlannedFile {
        path: PathBuf::from(".gitignore"),
        contents: render_gitignore(),
    });

    Ok(ScaffoldPlan {
        module_name: spec.module_name.clone(),
        files,
    })
}

/// Write `plan` under `output_dir/<module>`.
///
/// An existing root directory is a warning; files inside it are overwritten.
pub fn write(plan: &ScaffoldPlan, output_dir: &Path) -> Result<ScaffoldReport> {
    let root = output_dir.join(&plan.module_name);
    let mut warnings = Vec::new();

    io::create_dir_all(output_dir, &format!("create {}", output_dir.display()))?;

    if io::create_dir(&root, &format!("create root directory {}", root.display()))?
        == DirStatus::AlreadyExists
    {
        let warning = format!(
            "Directory {} already exists. Files might be overwritten.",
            root.display()
        );
        crate::log_status!("scaffold", "{}", warning);
        warnings.push(warning);
    }

    for dir in [cmd_dir(&plan.module_name), ui_dir()] {
        let path = root.join(dir);
        io::create_dir_all(&path, &format!("create directory {}", path.display()))?;
    }

    let mut written = Vec::with_capacity(plan.files.len());
    for file in &plan.files {
        let path = root.join(&file.path);
        io::write_file(&path, &file.contents, &format!("write {}", path.display()))?;
        crate::log_status!("scaffold", "Created: {}", path.display());
        written.push(path);
    }

    Ok(ScaffoldReport {
        root,
        written,
        warnings,
    })
}

/// Shell commands to build and run the generated project.
pub fn next_steps(module_name: &str) -> Vec<String> {
    vec![
        format!("cd {}", module_name),
        format!("go mod init {}", module_name),
        "go mod tidy".to_string(),
        format!("go run ./cmd/{}/main.go", module_name),
        format!("go build -o {} ./cmd/{}/main.go", module_name, module_name),
    ]
}
