use std::fs;
use std::path::Path;
use std::process::Command;

fn postbuild() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pwa-postbuild"));
    cmd.env_remove("PWA_BUILD_DIR").env_remove("PWA_ASSETS_DIR");
    cmd
}

fn seed(root: &Path) {
    fs::create_dir_all(root.join("pwa/icons")).unwrap();
    fs::create_dir_all(root.join("build")).unwrap();
    fs::write(root.join("pwa/manifest.json"), "{}").unwrap();
    fs::write(root.join("pwa/service-worker.js"), "").unwrap();
    fs::write(root.join("pwa/icons/icon-192.png"), "").unwrap();
    fs::write(root.join("build/index.html"), "<head></head><body></body>").unwrap();
}

#[test]
fn test_success_uses_default_pwa_dir() {
    let root = tempfile::tempdir().unwrap();
    seed(root.path());
    let out = postbuild()
        .current_dir(root.path())
        .args(["--build", "build"])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("PWA post-build complete for:"));
    assert!(root.path().join("build/icons/icon-192.png").is_file());
}

#[test]
fn test_missing_build_dir_exits_one() {
    let root = tempfile::tempdir().unwrap();
    seed(root.path());
    let out = postbuild()
        .current_dir(root.path())
        .args(["--build", "does-not-exist"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("build dir not found"));
}

#[test]
fn test_missing_pwa_dir_exits_one() {
    let root = tempfile::tempdir().unwrap();
    seed(root.path());
    let out = postbuild()
        .current_dir(root.path())
        .args(["--build", "build", "--pwa", "no-such-pwa"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("PWA dir not found"));
}

#[test]
fn test_missing_worker_is_fatal_and_build_untouched() {
    let root = tempfile::tempdir().unwrap();
    seed(root.path());
    fs::remove_file(root.path().join("pwa/service-worker.js")).unwrap();
    let out = postbuild()
        .current_dir(root.path())
        .args(["--build", "build"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("service-worker.js not found"));

    let listing: Vec<String> = fs::read_dir(root.path().join("build"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(listing, vec!["index.html"]);
    let html = fs::read_to_string(root.path().join("build/index.html")).unwrap();
    assert_eq!(html, "<head></head><body></body>");
}

#[test]
fn test_malformed_html_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    seed(root.path());
    fs::write(root.path().join("build/index.html"), "<body></body>").unwrap();
    let out = postbuild()
        .current_dir(root.path())
        .args(["--build", "build", "--pwa", "pwa"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("</head> tag not found"));
}

#[test]
fn test_json_report() {
    let root = tempfile::tempdir().unwrap();
    seed(root.path());
    let out = postbuild()
        .current_dir(root.path())
        .args(["--build", "build", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("\"manifest_linked\": true"));
    assert!(stdout.contains("icon-192.png"));
}

#[test]
fn test_build_is_required() {
    let out = postbuild().output().unwrap();
    assert!(!out.status.success());
}
