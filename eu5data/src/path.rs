use std::path::PathBuf;

/// Directory name used under the user data dir.
const APP_DIR: &str = "eu5-values-viewer";

/// Detects the viewer's data directory (the folder holding `values.json` and
/// the other tables).
///
/// Checks the working directory layouts the extraction tool writes to, then
/// the per-user data directory.
pub fn detect_data_path() -> Option<PathBuf> {
    let candidates = [PathBuf::from("data"), PathBuf::from("values-viewer/data")];

    for candidate in candidates {
        if candidate.join("values.json").exists() {
            return Some(candidate);
        }
    }

    let user = dirs::data_dir()?.join(APP_DIR).join("data");
    if user.join("values.json").exists() {
        return Some(user);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_data_path_does_not_panic() {
        // Depends on the machine running the tests; only check it is well behaved.
        if let Some(path) = detect_data_path() {
            assert!(path.join("values.json").exists());
        }
    }
}
