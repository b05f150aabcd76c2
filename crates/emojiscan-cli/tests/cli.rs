use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cmd() -> assert_cmd::Command {
    cargo_bin_cmd!("emojiscan")
}

#[test]
fn defaults_to_src_relative_to_cwd() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a.js"), "const x = 1;\nconsole.log(\"hi 🎉\");\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Scanning ./src...\n"))
        .stdout(predicate::str::contains("FILE: ./src/a.js\n"))
        .stdout(predicate::str::contains("LINE 2: console.log(\"hi 🎉\");\n"))
        .stdout(predicate::str::contains("CHAR: 🎉 (Base 10: 127881, Hex: 0x1f389)\n"))
        .stdout(predicate::str::contains(format!("{}\n", "-".repeat(40))));
}

#[test]
fn missing_root_is_not_an_error() {
    let dir = tempdir().unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("Scanning ./src...\n");
}

#[test]
fn unreadable_file_does_not_fail_the_run() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("d.js"), [0xffu8, 0xfe, b'\n']).unwrap();
    fs::write(dir.path().join("e.jsx"), "<p>ok ✨</p>\n").unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Error reading "))
        .stdout(predicate::str::contains("d.js: "))
        .stdout(predicate::str::contains("CHAR: ✨ (Base 10: 10024, Hex: 0x2728)"));
}

#[test]
fn ext_flag_replaces_default_extensions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), "// 🎉\n").unwrap();
    fs::write(dir.path().join("b.js"), "// 🚀\n").unwrap();

    cmd()
        .arg(dir.path())
        .args(["--ext", ".ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.ts"))
        .stdout(predicate::str::contains("b.js").not());
}

#[test]
fn config_file_sets_extensions() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("code");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.mjs"), "export const s = '🎉';\n").unwrap();
    let config = dir.path().join("emojiscan.toml");
    fs::write(&config, "extensions = [\".mjs\"]\n").unwrap();

    cmd()
        .arg(&root)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.mjs"));
}

#[test]
fn bad_config_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("emojiscan.toml");
    fs::write(&config, "extensions = []\n").unwrap();

    cmd()
        .arg(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));
}
