use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base dashgen config directory (universal ~/.config/dashgen/ on all platforms)
pub fn dashgen() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("dashgen"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("dashgen"))
    }
}

/// Global dashgen.json config file path
pub fn dashgen_json() -> Result<PathBuf> {
    Ok(dashgen()?.join("dashgen.json"))
}
