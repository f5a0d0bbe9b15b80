use clap::Args;
use serde::Serialize;

use dashgen::defaults;
use dashgen::ProjectSpec;

use super::{CmdResult, TabOutput};

#[derive(Args)]
pub struct InspectArgs {
    /// Comma-separated tab names
    #[arg(long, short = 't', default_value = "")]
    pub tabs: String,

    /// Project name/type
    #[arg(long, short = 'n', default_value = "")]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub command: &'static str,
    pub project_name: String,
    pub module_name: String,
    pub tabs: Vec<TabOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Show every derived name without rendering or writing anything.
pub fn run_json(args: InspectArgs) -> CmdResult<InspectOutput> {
    let spec = ProjectSpec::from_input(&args.name, &args.tabs, &defaults::load_defaults())?;

    Ok((
        InspectOutput {
            command: "inspect",
            warnings: spec.warnings(),
            tabs: spec.tabs.iter().map(TabOutput::from).collect(),
            project_name: spec.project_name,
            module_name: spec.module_name,
        },
        0,
    ))
}
