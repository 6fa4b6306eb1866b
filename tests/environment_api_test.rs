//! Integration tests for the environment module public API.

use laya::environment::{
    DetectedRoot, DetectionRule, EnvironmentSettings, RootPathDetector, ValueSource, UNKNOWN_IP,
};
use laya::LayaError;
use std::env::VarError;
use std::fs;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

fn no_env() -> EnvironmentSettings {
    EnvironmentSettings::new().with_env(|_: &str| Err(VarError::NotPresent))
}

#[test]
fn derived_paths_follow_root() {
    let settings = no_env();
    settings.set_root_path("/srv/orders").unwrap();
    settings.set_conf_dir_name("etc");

    assert_eq!(settings.conf_root_path().unwrap(), Path::new("/srv/orders/etc"));
    assert_eq!(settings.data_root_path().unwrap(), Path::new("/srv/orders/data"));
    assert_eq!(settings.log_root_path().unwrap(), Path::new("/srv/orders/log"));
}

#[test]
fn root_path_is_set_once() {
    let settings = no_env();
    settings.set_root_path("/srv/a").unwrap();
    settings.set_root_path("/srv/a").unwrap();

    let err = settings.set_root_path("/srv/b").unwrap_err();
    assert!(matches!(err, LayaError::RootPathConflict { .. }));
    assert_eq!(settings.root_path().unwrap(), Path::new("/srv/a"));
}

#[test]
fn detection_runs_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let settings = no_env().with_detector(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(DetectedRoot {
            path: PathBuf::from("/opt/app"),
            rule: DetectionRule::ExecutableDir,
        })
    });

    assert_eq!(settings.root_path().unwrap(), Path::new("/opt/app"));
    assert_eq!(settings.log_root_path().unwrap(), Path::new("/opt/app/log"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        settings.root_path_source(),
        Some(ValueSource::Detected(DetectionRule::ExecutableDir))
    );
}

#[test]
fn set_after_detection_must_match() {
    let settings = no_env().with_detector(|| {
        Ok(DetectedRoot {
            path: PathBuf::from("/opt/app"),
            rule: DetectionRule::WorkingDir,
        })
    });
    settings.root_path().unwrap();

    settings.set_root_path("/opt/app").unwrap();
    assert!(settings.set_root_path("/opt/other").is_err());
}

#[test]
fn local_ip_falls_back_to_unknown() {
    let settings = no_env().with_ip_probe(|| None);
    assert_eq!(settings.local_ip(), UNKNOWN_IP);
}

#[test]
fn local_ip_uses_probe() {
    let settings = no_env().with_ip_probe(|| Some(Ipv4Addr::new(192, 168, 1, 20)));
    assert_eq!(settings.local_ip(), "192.168.1.20");
}

#[test]
fn pid_matches_process() {
    let settings = no_env();
    assert_eq!(settings.pid(), std::process::id());
    assert_eq!(settings.pid_string(), std::process::id().to_string());
}

#[test]
fn detector_on_real_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("bin")).unwrap();
    fs::create_dir_all(root.join("config")).unwrap();

    let detected = RootPathDetector::new().detect_from(
        Path::new("/"),
        &root.join("bin").join("server"),
        |p| p.exists(),
    );

    assert_eq!(detected.path, root);
    assert_eq!(detected.rule, DetectionRule::ExecutableParent);
}

#[test]
fn detector_defaults_to_working_dir() {
    let temp = TempDir::new().unwrap();
    let cwd = temp.path().join("work");
    fs::create_dir_all(&cwd).unwrap();

    let detected = RootPathDetector::new().detect_from(
        &cwd,
        &temp.path().join("tools").join("server"),
        |p| p.exists(),
    );

    assert_eq!(detected.path, cwd);
    assert_eq!(detected.rule, DetectionRule::WorkingDir);
}
