//! Locating configuration files and the state file.
//!
//! Configuration is layered: every `.wr.toml` between the working directory and the
//! filesystem root applies, closest first, and `~/.wr.toml` sits underneath them all.
//! A file with `root = true` ends the chain, global file included.

use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};

use crate::{ConfigError, parse::is_root_config};

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".wr.toml";

/// Application name used for the platform data directory.
const APPLICATION: &str = "wr";

/// File name of the persisted profile and history state.
const STATE_FILENAME: &str = "state.json";

/// Returns the configuration files that apply in `cwd`, highest precedence first.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut chain = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stops = is_root_config(&candidate);
        chain.push(candidate);
        if stops {
            return chain;
        }
    }

    // A home directory above cwd already contributed ~/.wr.toml.
    if let Some(global) = global_config_path().filter(|path| path.is_file())
        && !chain.contains(&global)
    {
        chain.push(global);
    }
    chain
}

/// Returns `~/.wr.toml`, or `None` without a home directory.
pub fn global_config_path() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    Some(dirs.home_dir().join(CONFIG_FILENAME))
}

/// Returns true if `path` is `~/.wr.toml`.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| global == path)
}

/// Returns the default state file location inside the platform data directory,
/// e.g. `~/.local/share/wr/state.json` on Linux.
pub fn default_state_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("", "", APPLICATION).ok_or(ConfigError::NoDataDirectory)?;
    Ok(dirs.data_dir().join(STATE_FILENAME))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::Tree;

    /// Drops `~/.wr.toml` from a chain so tests do not depend on the host.
    fn local(chain: Vec<PathBuf>) -> Vec<PathBuf> {
        chain.into_iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn nothing_found_below_empty_tree() {
        let tree = Tree::new();
        let cwd = tree.dir("notes/2024");

        assert!(local(discover_config_files(&cwd)).is_empty());
    }

    #[test]
    fn closest_file_comes_first() {
        let tree = Tree::new();
        let outer = tree.config("", "[settings]\nlanguage = \"en\"\n");
        let inner = tree.config("reading/philosophy", "[ranking]\nexploit = 0.4\n");
        let cwd = tree.dir("reading/philosophy/kant");

        assert_eq!(local(discover_config_files(&cwd)), vec![inner, outer]);
    }

    #[test]
    fn cwd_itself_is_searched() {
        let tree = Tree::new();
        let here = tree.config("reading", "");

        assert_eq!(local(discover_config_files(&tree.dir("reading"))), vec![here]);
    }

    #[test]
    fn directory_named_like_config_is_ignored() {
        let tree = Tree::new();
        fs::create_dir_all(tree.path().join(CONFIG_FILENAME)).unwrap();

        assert!(local(discover_config_files(&tree.dir("sub"))).is_empty());
    }

    #[test]
    fn root_config_ends_chain_without_global() {
        let tree = Tree::new();
        tree.config("", "[settings]\nlanguage = \"fr\"\n");
        let project = tree.config("project", "root = true\n");
        let cwd = tree.dir("project/drafts");

        assert_eq!(discover_config_files(&cwd), vec![project]);
    }

    #[test]
    fn root_false_keeps_walking() {
        let tree = Tree::new();
        let outer = tree.config("", "");
        let project = tree.config("project", "root = false\n");

        assert_eq!(
            local(discover_config_files(&tree.dir("project"))),
            vec![project, outer]
        );
    }

    #[test]
    fn unparseable_file_does_not_stop_walk() {
        let tree = Tree::new();
        let outer = tree.config("", "");
        let broken = tree.config("project", "root = [");

        assert_eq!(
            local(discover_config_files(&tree.dir("project"))),
            vec![broken, outer]
        );
    }

    #[test]
    fn global_path_is_dotfile_in_home() {
        let path = global_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), CONFIG_FILENAME);
    }

    #[test]
    fn state_path_is_in_application_data_dir() {
        let path = default_state_path().unwrap();
        assert_eq!(path.file_name().unwrap(), STATE_FILENAME);
        assert!(path.components().any(|c| c.as_os_str() == APPLICATION));
    }
}
