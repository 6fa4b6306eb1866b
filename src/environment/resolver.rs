//! Setting resolution.
//!
//! Resolves process-wide settings using a fixed priority chain:
//! 1. Explicit programmatic set
//! 2. Environment variable override
//! 3. Auto-detection (root path only)
//! 4. Built-in default

use std::fmt;
use std::path::{Path, PathBuf};

use super::detection::{DetectedRoot, DetectionRule};
use crate::error::Result;

/// How a setting was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Set programmatically (or via a CLI flag).
    Explicit,
    /// Read from the named environment variable.
    EnvVar(String),
    /// Found by root path auto-detection.
    Detected(DetectionRule),
    /// Built-in default.
    Default,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => write!(f, "explicit"),
            Self::EnvVar(var) => write!(f, "from {}", var),
            Self::Detected(rule) => write!(f, "detected: {}", rule),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved value together with how it was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    /// The resolved value.
    pub value: T,
    /// How this value was determined.
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    /// A value set explicitly.
    pub fn explicit(value: T) -> Self {
        Self {
            value,
            source: ValueSource::Explicit,
        }
    }
}

/// An environment variable override: variable name and its value.
pub type EnvOverride<'a> = Option<(&'a str, &'a str)>;

impl Resolved<PathBuf> {
    /// Resolve the root path.
    ///
    /// # Arguments
    ///
    /// * `explicit` - Path set programmatically
    /// * `env_override` - Root path environment variable, if set
    /// * `detect` - Auto-detection, only invoked when nothing else applies
    ///
    /// # Errors
    ///
    /// Propagates the detection error (unreadable working directory).
    ///
    /// # Example
    ///
    /// ```
    /// use laya::environment::{Resolved, ValueSource};
    /// use std::path::{Path, PathBuf};
    ///
    /// let resolved = Resolved::<PathBuf>::resolve_root(
    ///     None,
    ///     Some(("LAYA_ROOT_PATH", "/srv/app")),
    ///     || unreachable!(),
    /// )
    /// .unwrap();
    /// assert_eq!(resolved.value, Path::new("/srv/app"));
    /// assert_eq!(resolved.source, ValueSource::EnvVar("LAYA_ROOT_PATH".into()));
    /// ```
    pub fn resolve_root<F>(
        explicit: Option<&Path>,
        env_override: EnvOverride<'_>,
        detect: F,
    ) -> Result<Self>
    where
        F: FnOnce() -> Result<DetectedRoot>,
    {
        // 1. Explicit set
        if let Some(path) = explicit {
            return Ok(Self::explicit(path.to_path_buf()));
        }

        // 2. Environment override
        if let Some((var, value)) = env_override {
            return Ok(Self {
                value: PathBuf::from(value),
                source: ValueSource::EnvVar(var.to_string()),
            });
        }

        // 3. Auto-detection (always yields a path)
        let detected = detect()?;
        Ok(Self {
            value: detected.path,
            source: ValueSource::Detected(detected.rule),
        })
    }
}

impl Resolved<String> {
    /// Resolve a string label (run mode, app name, ...).
    ///
    /// # Example
    ///
    /// ```
    /// use laya::environment::{Resolved, ValueSource};
    ///
    /// let resolved = Resolved::<String>::resolve_label(None, None, "debug");
    /// assert_eq!(resolved.value, "debug");
    /// assert_eq!(resolved.source, ValueSource::Default);
    /// ```
    pub fn resolve_label(
        explicit: Option<&str>,
        env_override: EnvOverride<'_>,
        default: &str,
    ) -> Self {
        // 1. Explicit set
        if let Some(value) = explicit {
            return Self::explicit(value.to_string());
        }

        // 2. Environment override
        if let Some((var, value)) = env_override {
            return Self {
                value: value.to_string(),
                source: ValueSource::EnvVar(var.to_string()),
            };
        }

        // 3. Default
        Self {
            value: default.to_string(),
            source: ValueSource::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayaError;

    fn detected(path: &str, rule: DetectionRule) -> Result<DetectedRoot> {
        Ok(DetectedRoot {
            path: PathBuf::from(path),
            rule,
        })
    }

    #[test]
    fn explicit_root_takes_highest_priority() {
        let resolved = Resolved::<PathBuf>::resolve_root(
            Some(Path::new("/explicit")),
            Some(("LAYA_ROOT_PATH", "/from-env")),
            || detected("/detected", DetectionRule::WorkingDir),
        )
        .unwrap();
        assert_eq!(resolved.value, PathBuf::from("/explicit"));
        assert_eq!(resolved.source, ValueSource::Explicit);
    }

    #[test]
    fn env_root_second_priority() {
        let resolved = Resolved::<PathBuf>::resolve_root(
            None,
            Some(("LAYA_ROOT_PATH", "/from-env")),
            || detected("/detected", DetectionRule::WorkingDir),
        )
        .unwrap();
        assert_eq!(resolved.value, PathBuf::from("/from-env"));
        assert_eq!(
            resolved.source,
            ValueSource::EnvVar("LAYA_ROOT_PATH".to_string())
        );
    }

    #[test]
    fn detection_third_priority() {
        let resolved = Resolved::<PathBuf>::resolve_root(None, None, || {
            detected("/srv/app", DetectionRule::BinParent)
        })
        .unwrap();
        assert_eq!(resolved.value, PathBuf::from("/srv/app"));
        assert_eq!(
            resolved.source,
            ValueSource::Detected(DetectionRule::BinParent)
        );
    }

    #[test]
    fn detection_not_run_when_overridden() {
        let resolved = Resolved::<PathBuf>::resolve_root(
            None,
            Some(("LAYA_ROOT_PATH", "/from-env")),
            || panic!("detection must not run"),
        );
        assert!(resolved.is_ok());
    }

    #[test]
    fn detection_error_propagates() {
        let result = Resolved::<PathBuf>::resolve_root(None, None, || {
            Err(LayaError::WorkingDirUnavailable(std::io::Error::other(
                "gone",
            )))
        });
        assert!(matches!(result, Err(LayaError::WorkingDirUnavailable(_))));
    }

    #[test]
    fn explicit_label_takes_highest_priority() {
        let resolved = Resolved::<String>::resolve_label(
            Some("release"),
            Some(("LAYA_RUN_MODE", "test")),
            "debug",
        );
        assert_eq!(resolved.value, "release");
        assert_eq!(resolved.source, ValueSource::Explicit);
    }

    #[test]
    fn env_label_second_priority() {
        let resolved =
            Resolved::<String>::resolve_label(None, Some(("LAYA_RUN_MODE", "test")), "debug");
        assert_eq!(resolved.value, "test");
        assert_eq!(
            resolved.source,
            ValueSource::EnvVar("LAYA_RUN_MODE".to_string())
        );
    }

    #[test]
    fn label_falls_back_to_default() {
        let resolved = Resolved::<String>::resolve_label(None, None, "debug");
        assert_eq!(resolved.value, "debug");
        assert_eq!(resolved.source, ValueSource::Default);
    }

    #[test]
    fn source_display() {
        assert_eq!(ValueSource::Explicit.to_string(), "explicit");
        assert_eq!(
            ValueSource::EnvVar("LAYA_RUN_MODE".to_string()).to_string(),
            "from LAYA_RUN_MODE"
        );
        assert_eq!(
            ValueSource::Detected(DetectionRule::WorkingDir).to_string(),
            "detected: working directory"
        );
        assert_eq!(ValueSource::Default.to_string(), "default");
    }
}
