//! Root path auto-detection.
//!
//! Locates the application root relative to the running executable when
//! no root path was given explicitly. Three deployment shapes are
//! recognised, in this order:
//!
//! 1. A binary built in place, next to its `config/` directory
//! 2. A deploy root holding `bin/` and `config/` as siblings
//! 3. A binary inside a directory named `bin`, config or not
//!
//! Anything else (typically `cargo run` from a source tree) falls back to
//! the current working directory.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{LayaError, Result};

/// Directory whose presence marks a candidate root.
pub const CONFIG_MARKER: &str = "config";

/// Directory name that marks a conventional deploy layout.
const BIN_DIR_NAME: &str = "bin";

/// Which detection rule produced the root path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionRule {
    /// `config/` sits next to the executable.
    ExecutableDir,
    /// `config/` sits next to the executable's directory.
    ExecutableParent,
    /// The executable lives in a directory named `bin`.
    BinParent,
    /// Nothing matched; the working directory was used.
    WorkingDir,
}

impl fmt::Display for DetectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutableDir => write!(f, "config beside executable"),
            Self::ExecutableParent => write!(f, "config beside executable directory"),
            Self::BinParent => write!(f, "parent of bin directory"),
            Self::WorkingDir => write!(f, "working directory"),
        }
    }
}

/// A root path found by auto-detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedRoot {
    /// The detected root directory.
    pub path: PathBuf,
    /// The rule that matched.
    pub rule: DetectionRule,
}

/// Detects the application root from the executable location.
///
/// # Example
///
/// ```
/// use laya::environment::{DetectionRule, RootPathDetector};
/// use std::path::Path;
///
/// let detector = RootPathDetector::new();
/// let detected = detector.detect_from(
///     Path::new("/home/dev/src"),
///     Path::new("/srv/app/bin/server"),
///     |_| false,
/// );
/// assert_eq!(detected.path, Path::new("/srv/app"));
/// assert_eq!(detected.rule, DetectionRule::BinParent);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RootPathDetector;

impl RootPathDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self
    }

    /// Detect the root path for the running process.
    ///
    /// # Errors
    ///
    /// Returns [`LayaError::WorkingDirUnavailable`] when the working
    /// directory cannot be read. Callers must treat this as fatal.
    pub fn detect(&self) -> Result<DetectedRoot> {
        let cwd = std::env::current_dir().map_err(LayaError::WorkingDirUnavailable)?;
        let program = current_program();
        Ok(self.detect_from(&cwd, &program, config_present))
    }

    /// Detect with an explicit working directory, program path and
    /// filesystem probe (for testing).
    ///
    /// `exists` is asked about each `<candidate>/config` path in turn.
    pub fn detect_from<F>(&self, cwd: &Path, program: &Path, exists: F) -> DetectedRoot
    where
        F: Fn(&Path) -> bool,
    {
        let bin_dir = executable_dir(cwd, program);
        let parent = parent_dir(&bin_dir);

        // 1. Built in place: config/ next to the binary
        if exists(&bin_dir.join(CONFIG_MARKER)) {
            return Self::found(bin_dir, DetectionRule::ExecutableDir);
        }

        // 2. Standard deploy: <root>/bin + <root>/config
        if exists(&parent.join(CONFIG_MARKER)) {
            return Self::found(parent, DetectionRule::ExecutableParent);
        }

        // 3. Binary under bin/ whose config dir goes by another name
        if bin_dir.file_name() == Some(OsStr::new(BIN_DIR_NAME)) {
            return Self::found(parent, DetectionRule::BinParent);
        }

        // 4. Fallback: run from the source tree
        Self::found(cwd.to_path_buf(), DetectionRule::WorkingDir)
    }

    fn found(path: PathBuf, rule: DetectionRule) -> DetectedRoot {
        debug!(root = %path.display(), %rule, "detected root path");
        DetectedRoot { path, rule }
    }
}

/// Path the running executable was invoked by.
fn current_program() -> PathBuf {
    program_path(std::env::args_os().next(), || std::env::current_exe().ok())
}

/// `argv[0]` as given, so a symlinked binary resolves against the link's
/// directory. The OS view of the executable is used only when `argv[0]` is
/// missing or empty.
fn program_path<F>(argv0: Option<OsString>, current_exe: F) -> PathBuf
where
    F: FnOnce() -> Option<PathBuf>,
{
    match argv0.filter(|arg| !arg.is_empty()) {
        Some(arg) => PathBuf::from(arg),
        None => current_exe().unwrap_or_default(),
    }
}

/// Anything but a definite "not found" counts as present.
fn config_present(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != std::io::ErrorKind::NotFound,
    }
}

/// Absolute, lexically cleaned directory of `program`.
fn executable_dir(cwd: &Path, program: &Path) -> PathBuf {
    let dir = program.parent().unwrap_or_else(|| Path::new(""));
    if dir.is_absolute() {
        clean(dir)
    } else {
        clean(&cwd.join(dir))
    }
}

/// Parent directory, with the root being its own parent.
fn parent_dir(dir: &Path) -> PathBuf {
    dir.parent().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf())
}

/// Resolve `.` and `..` components without touching the filesystem.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !out.pop() && !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    fn make_fs(existing: &[&str]) -> impl Fn(&Path) -> bool {
        let set: HashSet<PathBuf> = existing.iter().map(PathBuf::from).collect();
        move |p: &Path| set.contains(p)
    }

    #[test]
    fn config_beside_executable() {
        let detector = RootPathDetector::new();
        let exists = make_fs(&["/srv/app/bin/config", "/srv/app/config"]);
        let detected = detector.detect_from(
            Path::new("/home/dev"),
            Path::new("/srv/app/bin/server"),
            exists,
        );
        assert_eq!(detected.path, PathBuf::from("/srv/app/bin"));
        assert_eq!(detected.rule, DetectionRule::ExecutableDir);
    }

    #[test]
    fn config_beside_executable_parent() {
        let detector = RootPathDetector::new();
        let exists = make_fs(&["/srv/app/config"]);
        let detected = detector.detect_from(
            Path::new("/home/dev"),
            Path::new("/srv/app/release/server"),
            exists,
        );
        assert_eq!(detected.path, PathBuf::from("/srv/app"));
        assert_eq!(detected.rule, DetectionRule::ExecutableParent);
    }

    #[test]
    fn bin_directory_without_config() {
        let detector = RootPathDetector::new();
        let detected = detector.detect_from(
            Path::new("/home/dev"),
            Path::new("/srv/app/bin/server"),
            make_fs(&[]),
        );
        assert_eq!(detected.path, PathBuf::from("/srv/app"));
        assert_eq!(detected.rule, DetectionRule::BinParent);
    }

    #[test]
    fn parent_config_wins_over_bin_rule() {
        let detector = RootPathDetector::new();
        let exists = make_fs(&["/srv/app/config"]);
        let detected = detector.detect_from(
            Path::new("/home/dev"),
            Path::new("/srv/app/bin/server"),
            exists,
        );
        assert_eq!(detected.path, PathBuf::from("/srv/app"));
        assert_eq!(detected.rule, DetectionRule::ExecutableParent);
    }

    #[test]
    fn falls_back_to_working_directory() {
        let detector = RootPathDetector::new();
        let detected = detector.detect_from(
            Path::new("/home/dev/project"),
            Path::new("/tmp/build/server"),
            make_fs(&[]),
        );
        assert_eq!(detected.path, PathBuf::from("/home/dev/project"));
        assert_eq!(detected.rule, DetectionRule::WorkingDir);
    }

    #[test]
    fn relative_program_is_joined_to_cwd() {
        let detector = RootPathDetector::new();
        let exists = make_fs(&["/home/dev/project/config"]);
        let detected = detector.detect_from(
            Path::new("/home/dev/project"),
            Path::new("./bin/server"),
            exists,
        );
        assert_eq!(detected.path, PathBuf::from("/home/dev/project"));
        assert_eq!(detected.rule, DetectionRule::ExecutableParent);
    }

    #[test]
    fn bare_program_name_uses_cwd_as_executable_dir() {
        let detector = RootPathDetector::new();
        let exists = make_fs(&["/home/dev/project/config"]);
        let detected = detector.detect_from(
            Path::new("/home/dev/project"),
            Path::new("server"),
            exists,
        );
        assert_eq!(detected.path, PathBuf::from("/home/dev/project"));
        assert_eq!(detected.rule, DetectionRule::ExecutableDir);
    }

    #[test]
    fn parent_components_are_cleaned() {
        let detector = RootPathDetector::new();
        let detected = detector.detect_from(
            Path::new("/home/dev/project"),
            Path::new("../deploy/bin/server"),
            make_fs(&[]),
        );
        assert_eq!(detected.path, PathBuf::from("/home/dev/deploy"));
        assert_eq!(detected.rule, DetectionRule::BinParent);
    }

    #[test]
    fn executable_at_filesystem_root() {
        let detector = RootPathDetector::new();
        let exists = make_fs(&["/config"]);
        let detected = detector.detect_from(Path::new("/home/dev"), Path::new("/server"), exists);
        assert_eq!(detected.path, PathBuf::from("/"));
        assert_eq!(detected.rule, DetectionRule::ExecutableDir);
    }

    #[test]
    fn bin_at_filesystem_root_resolves_to_root() {
        let detector = RootPathDetector::new();
        let detected =
            detector.detect_from(Path::new("/home/dev"), Path::new("/bin/server"), make_fs(&[]));
        assert_eq!(detected.path, PathBuf::from("/"));
        assert_eq!(detected.rule, DetectionRule::BinParent);
    }

    #[test]
    fn detects_on_real_directory_tree() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("deploy");
        fs::create_dir_all(root.join("bin")).unwrap();
        fs::create_dir_all(root.join("config")).unwrap();

        let detector = RootPathDetector::new();
        let detected = detector.detect_from(
            temp.path(),
            &root.join("bin").join("server"),
            config_present,
        );
        assert_eq!(detected.path, root);
        assert_eq!(detected.rule, DetectionRule::ExecutableParent);
    }

    #[test]
    fn config_file_counts_as_present() {
        // Only existence is checked, not that it is a directory
        let temp = TempDir::new().unwrap();
        let release = temp.path().join("release");
        fs::create_dir_all(&release).unwrap();
        fs::write(release.join("config"), "").unwrap();

        let detector = RootPathDetector::new();
        let detected =
            detector.detect_from(temp.path(), &release.join("server"), config_present);
        assert_eq!(detected.path, release);
        assert_eq!(detected.rule, DetectionRule::ExecutableDir);
    }

    #[test]
    fn detect_for_current_process() {
        let detected = RootPathDetector::new().detect().unwrap();
        assert!(detected.path.is_absolute());
    }

    #[test]
    fn program_path_prefers_argv0() {
        let program = program_path(Some(OsString::from("/srv/app/bin/server")), || {
            Some(PathBuf::from("/nix/store/abc/server"))
        });
        assert_eq!(program, PathBuf::from("/srv/app/bin/server"));
    }

    #[test]
    fn program_path_keeps_relative_argv0() {
        let program = program_path(Some(OsString::from("./bin/server")), || None);
        assert_eq!(program, PathBuf::from("./bin/server"));
    }

    #[test]
    fn program_path_falls_back_to_current_exe() {
        let exe = || Some(PathBuf::from("/opt/app/server"));
        assert_eq!(program_path(Some(OsString::new()), exe), PathBuf::from("/opt/app/server"));
        assert_eq!(program_path(None, exe), PathBuf::from("/opt/app/server"));
    }

    #[test]
    fn program_path_empty_when_nothing_known() {
        assert_eq!(program_path(None, || None), PathBuf::new());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_binary_detects_link_location() {
        let temp = TempDir::new().unwrap();
        let store = temp.path().join("store");
        let deploy = temp.path().join("deploy");
        fs::create_dir_all(&store).unwrap();
        fs::create_dir_all(deploy.join("bin")).unwrap();
        fs::create_dir_all(deploy.join("config")).unwrap();
        fs::write(store.join("server"), "").unwrap();
        let link = deploy.join("bin").join("server");
        std::os::unix::fs::symlink(store.join("server"), &link).unwrap();

        let program = program_path(Some(link.clone().into_os_string()), || None);
        let detected = RootPathDetector::new().detect_from(Path::new("/"), &program, config_present);

        assert_eq!(detected.path, deploy);
        assert_eq!(detected.rule, DetectionRule::ExecutableParent);
    }

    #[test]
    fn rule_display() {
        assert_eq!(DetectionRule::WorkingDir.to_string(), "working directory");
        assert_eq!(
            DetectionRule::BinParent.to_string(),
            "parent of bin directory"
        );
    }
}
