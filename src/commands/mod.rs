use serde::Serialize;

use dashgen::TabSpec;

pub type CmdResult<T> = dashgen::Result<(T, i32)>;

/// A tab as reported back to the user.
#[derive(Debug, Serialize)]
pub struct TabOutput {
    #[serde(flatten)]
    pub spec: TabSpec,
    pub function_name: String,
}

impl From<&TabSpec> for TabOutput {
    fn from(tab: &TabSpec) -> Self {
        Self {
            spec: tab.clone(),
            function_name: tab.function_name(),
        }
    }
}

pub mod config;
pub mod inspect;
pub mod new;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (dashgen::Result<serde_json::Value>, i32) {
    crate::tty::status("dashgen is working...");

    match command {
        crate::Commands::New(args) => dispatch!(args, new),
        crate::Commands::Inspect(args) => dispatch!(args, inspect),
        crate::Commands::Config(args) => dispatch!(args, config),
    }
}
