#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cyberdoc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cyberdoc").unwrap();
    cmd.current_dir(dir.path())
        .env("CYBERDOC_ROOT", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn write_template(dir: &TempDir, file: &str, body: &str) {
    let tdir = dir.path().join(".cyberdoc/templates");
    std::fs::create_dir_all(&tdir).unwrap();
    std::fs::write(tdir.join(file), body).unwrap();
}

const TPL_X: &str = r#"
id: tpl-X
title: Rapport d'activité
updated_at: 2030-01-01
variables:
  - key: company_name
    label: Company
    example: Contoso
    required: true
  - key: city
    label: City
    example: Lyon
content: |
  # Report
  ## Summary
  Hello {{company_name}}.
"#;

// ---------------------------------------------------------------------------
// init / config
// ---------------------------------------------------------------------------

#[test]
fn init_creates_directory_tree() {
    let dir = TempDir::new().unwrap();
    cyberdoc(&dir).arg("init").assert().success();
    assert!(dir.path().join(".cyberdoc/config.yaml").exists());
    assert!(dir.path().join(".cyberdoc/templates").is_dir());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    cyberdoc(&dir).arg("init").assert().success();
    cyberdoc(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists"));
}

#[test]
fn config_validate_reports_errors() {
    let dir = TempDir::new().unwrap();
    cyberdoc(&dir).arg("init").assert().success();
    cyberdoc(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config OK"));

    std::fs::write(
        dir.path().join(".cyberdoc/config.yaml"),
        "export:\n  filename_max_len: 0\n",
    )
    .unwrap();
    cyberdoc(&dir).args(["config", "validate"]).assert().failure();
}

// ---------------------------------------------------------------------------
// list / show
// ---------------------------------------------------------------------------

#[test]
fn list_includes_builtin_and_user_templates_newest_first() {
    let dir = TempDir::new().unwrap();
    write_template(&dir, "tpl-x.yaml", TPL_X);
    let out = cyberdoc(&dir).arg("list").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    let user = text.find("tpl-X").unwrap();
    let builtin = text.find("incident-report").unwrap();
    assert!(user < builtin, "newest template should be listed first");
}

#[test]
fn show_unknown_template_fails() {
    let dir = TempDir::new().unwrap();
    cyberdoc(&dir)
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("template 'nope' not found"));
}

#[test]
fn show_lists_variables() {
    let dir = TempDir::new().unwrap();
    cyberdoc(&dir)
        .args(["show", "phishing-notice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sender_domain"))
        .stdout(predicate::str::contains("email"));
}

// ---------------------------------------------------------------------------
// check / render
// ---------------------------------------------------------------------------

#[test]
fn check_reports_missing_then_complete() {
    let dir = TempDir::new().unwrap();
    write_template(&dir, "tpl-x.yaml", TPL_X);
    cyberdoc(&dir)
        .args(["check", "tpl-X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("company_name"));
    cyberdoc(&dir)
        .args(["check", "tpl-X", "--set", "company_name=ACME"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All required variables are filled"));
}

#[test]
fn render_raw_keeps_unfilled_marker() {
    let dir = TempDir::new().unwrap();
    write_template(&dir, "tpl-x.yaml", TPL_X);
    cyberdoc(&dir)
        .args(["render", "tpl-X", "--view", "raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello {{company_name}}."))
        .stderr(predicate::str::contains("missing required variables"));
}

#[test]
fn render_with_values_file_and_set_override() {
    let dir = TempDir::new().unwrap();
    write_template(&dir, "tpl-x.yaml", TPL_X);
    let values = dir.path().join("values.yaml");
    std::fs::write(&values, "company_name: FromFile\n").unwrap();
    cyberdoc(&dir)
        .args(["render", "tpl-X", "--view", "raw", "--values"])
        .arg(&values)
        .args(["--set", "company_name=ACME"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello ACME."));
}

#[test]
fn render_prefill_uses_examples() {
    let dir = TempDir::new().unwrap();
    write_template(&dir, "tpl-x.yaml", TPL_X);
    cyberdoc(&dir)
        .args(["render", "tpl-X", "--view", "raw", "--prefill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello Contoso."));
}

#[test]
fn render_unknown_variable_fails() {
    let dir = TempDir::new().unwrap();
    write_template(&dir, "tpl-x.yaml", TPL_X);
    cyberdoc(&dir)
        .args(["render", "tpl-X", "--set", "bogus=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn render_visual_json_has_sections() {
    let dir = TempDir::new().unwrap();
    write_template(&dir, "tpl-x.yaml", TPL_X);
    let out = cyberdoc(&dir)
        .args(["--json", "render", "tpl-X", "--set", "company_name=ACME"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["headline"], "Report");
    assert_eq!(v["sections"][0]["title"], "Summary");
    assert_eq!(v["sections"][0]["lines"][0]["kind"], "prose");
}

#[test]
fn render_report_has_counts() {
    let dir = TempDir::new().unwrap();
    cyberdoc(&dir)
        .args(["--json", "render", "incident-report", "--view", "report", "--prefill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"section_count\": 6"))
        .stdout(predicate::str::contains("\"required_count\": 4"));
}

#[test]
fn render_report_french_locale() {
    let dir = TempDir::new().unwrap();
    cyberdoc(&dir).arg("init").assert().success();
    std::fs::write(dir.path().join(".cyberdoc/config.yaml"), "locale: fr\n").unwrap();
    cyberdoc(&dir)
        .args(["render", "phishing-notice", "--view", "report", "--prefill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Généré le"))
        .stdout(predicate::str::contains("Résumé"));
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_writes_slugged_markdown_file() {
    let dir = TempDir::new().unwrap();
    write_template(&dir, "tpl-x.yaml", TPL_X);
    let out_dir = dir.path().join("out");
    cyberdoc(&dir)
        .args(["export", "tpl-X", "--set", "company_name=ACME", "--out"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("tpl-x-rapport-d-activite.md"));
    let content = std::fs::read_to_string(out_dir.join("tpl-x-rapport-d-activite.md")).unwrap();
    assert!(content.contains("Hello ACME."));
}

#[test]
fn export_defaults_to_project_exports_dir() {
    let dir = TempDir::new().unwrap();
    cyberdoc(&dir)
        .args(["export", "access-review", "--prefill"])
        .assert()
        .success();
    let path = dir
        .path()
        .join(".cyberdoc/exports/access-review-quarterly-access-review.md");
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("Finance ERP"));
}

// ---------------------------------------------------------------------------
// copy
// ---------------------------------------------------------------------------

#[test]
fn copy_without_clipboard_utility_warns_and_succeeds() {
    let dir = TempDir::new().unwrap();
    write_template(&dir, "tpl-x.yaml", TPL_X);
    cyberdoc(&dir)
        .env("PATH", dir.path().join("no-bin"))
        .args(["copy", "tpl-X", "--set", "company_name=ACME"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied").not())
        .stderr(predicate::str::contains("warning: Copy failed"));

    let out = cyberdoc(&dir)
        .env("PATH", dir.path().join("no-bin"))
        .args(["--json", "copy", "tpl-X", "--raw"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["level"], "failure");
}

/// Installs a stand-in `wl-copy` that writes its stdin to `clip.txt`.
#[cfg(target_os = "linux")]
fn fake_clipboard(dir: &TempDir) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let bin = dir.path().join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    let script = bin.join("wl-copy");
    std::fs::write(&script, "#!/bin/sh\nexec /bin/cat > \"$CLIP_OUT\"\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    bin
}

#[cfg(target_os = "linux")]
#[test]
fn copy_sends_rendered_or_raw_text() {
    let dir = TempDir::new().unwrap();
    write_template(&dir, "tpl-x.yaml", TPL_X);
    let bin = fake_clipboard(&dir);
    let clip = dir.path().join("clip.txt");

    cyberdoc(&dir)
        .env("PATH", &bin)
        .env("CLIP_OUT", &clip)
        .args(["copy", "tpl-X", "--set", "company_name=ACME"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied to clipboard"));
    assert!(std::fs::read_to_string(&clip).unwrap().contains("Hello ACME."));

    cyberdoc(&dir)
        .env("PATH", &bin)
        .env("CLIP_OUT", &clip)
        .args(["copy", "tpl-X", "--raw", "--set", "company_name=ACME"])
        .assert()
        .success();
    assert!(std::fs::read_to_string(&clip)
        .unwrap()
        .contains("Hello {{company_name}}."));
}

// ---------------------------------------------------------------------------
// logging
// ---------------------------------------------------------------------------

#[test]
fn rust_log_raises_verbosity() {
    let dir = TempDir::new().unwrap();
    cyberdoc(&dir)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved project root").not());
    cyberdoc(&dir)
        .env("RUST_LOG", "debug")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved project root"));
}
