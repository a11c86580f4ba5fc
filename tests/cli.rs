use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const FORM: &str = indoc! {r#"
    {
      "financial": {
        "investment": 100000,
        "projectedRevenue": 150000,
        "operationalCosts": 80000,
        "discountRate": 10,
        "period": 5
      }
    }
"#};

fn factibilidad(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("factibilidad").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn write_form(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("form.json");
    fs::write(&path, FORM).unwrap();
    path
}

#[test]
fn analyze_prints_parsable_json() {
    let temp = TempDir::new().unwrap();
    let form = write_form(&temp);

    let output = factibilidad(&temp)
        .args(["analyze", form.to_str().unwrap(), "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["financial"]["annualCashFlow"], 70000.0);
    assert_eq!(json["overall"]["viable"], true);
    assert_eq!(json["overall"]["color"], "green");
}

#[test]
fn analyze_writes_markdown_report() {
    let temp = TempDir::new().unwrap();
    let form = write_form(&temp);
    let report = temp.path().join("out/report.md");

    factibilidad(&temp)
        .args(["analyze", form.to_str().unwrap(), "-f", "markdown", "-o"])
        .arg(&report)
        .assert()
        .success();

    let text = fs::read_to_string(report).unwrap();
    assert!(text.contains("| Financiera |"));
}

#[test]
fn missing_form_fails_with_context() {
    let temp = TempDir::new().unwrap();
    let output = factibilidad(&temp)
        .args(["analyze", "does-not-exist.json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read form data"), "{stderr}");
}

#[test]
fn save_then_list_and_show() {
    let temp = TempDir::new().unwrap();
    let form = write_form(&temp);
    let store = temp.path().join("projects");

    factibilidad(&temp)
        .args(["save", form.to_str().unwrap(), "--name", "Cafetería", "--store"])
        .arg(&store)
        .assert()
        .success();

    let output = factibilidad(&temp)
        .args(["projects", "list", "--plain", "--store"])
        .arg(&store)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Cafetería"));

    let id = fs::read_dir(&store)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .find_map(|entry| {
            entry
                .path()
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
        })
        .unwrap();

    let output = factibilidad(&temp)
        .args(["projects", "show", &id, "-f", "json", "--store"])
        .arg(&store)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "Cafetería");
    assert_eq!(json["id"], id.as_str());
}

#[test]
fn init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();

    factibilidad(&temp).arg("init").assert().success();
    assert!(temp.path().join(".factibilidad.toml").exists());

    factibilidad(&temp).arg("init").assert().failure();
    factibilidad(&temp).args(["init", "--force"]).assert().success();
}
