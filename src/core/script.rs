//! Companion script export.
//!
//! The binary carries a self-contained bash version of the prepare and
//! cleanup logic. Exporting it lets a job run the same steps where the
//! binary itself is not available; the custom hooks are inlined at the
//! two marker comments.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::constants::{CLEANUP_MARKER, PREPARE_MARKER, SCRIPT_MODE};
use crate::error::{FsError, Result};

const TEMPLATE: &str = include_str!("../../templates/deploy-keys.sh");

/// Render the script with the hook commands in place of the markers.
///
/// A missing hook leaves its marker comment in place.
pub fn render(custom_prepare: Option<&str>, custom_cleanup: Option<&str>) -> String {
    let mut script = TEMPLATE.to_string();
    if let Some(cmd) = custom_prepare {
        script = script.replace(PREPARE_MARKER, cmd);
    }
    if let Some(cmd) = custom_cleanup {
        script = script.replace(CLEANUP_MARKER, cmd);
    }
    script
}

/// Write `script` to `path` and make it executable.
///
/// Creates missing parent directories and replaces an existing file.
pub fn export(path: &Path, script: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| FsError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, script).map_err(|source| FsError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(SCRIPT_MODE)).map_err(|source| {
            FsError::Permissions {
                path: path.to_path_buf(),
                source,
            }
        })?;
    }

    debug!(path = %path.display(), bytes = script.len(), "script exported");
    Ok(())
}
