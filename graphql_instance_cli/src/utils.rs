// SPDX-License-Identifier: AGPL-3.0-or-later

use std::env;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Returns the cleaned, absolute path of a config file for display.
///
/// Relative paths are resolved against the current directory. If it can't be determined the path
/// is only cleaned.
pub fn absolute_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    match env::current_dir() {
        Ok(current_dir) if !path.is_absolute() => current_dir.join(path).clean(),
        _ => path.clean(),
    }
}
