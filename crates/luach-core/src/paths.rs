use crate::error::{LuachError, Result};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".config/luach";
pub const CONFIG_FILE: &str = "config.yaml";

/// `<home>/.config/luach/config.yaml`
pub fn config_path_in(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Resolve the config file.
///
/// Priority:
/// 1. `--config` flag / `LUACH_CONFIG` env var (passed in as `explicit`)
/// 2. `$HOME/.config/luach/config.yaml`
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    let home = home::home_dir().ok_or(LuachError::HomeNotFound)?;
    Ok(config_path_in(&home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("custom.yaml");
        let resolved = resolve_config_path(Some(&explicit)).unwrap();
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn config_path_under_home() {
        let home = Path::new("/home/someone");
        assert_eq!(
            config_path_in(home),
            PathBuf::from("/home/someone/.config/luach/config.yaml")
        );
    }
}
