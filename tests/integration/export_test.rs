//! Export command tests

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use super::qa;

fn exported_pdfs(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "pdf"))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_export_writes_pdf() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("reports");

    qa(temp.path())
        .args(["export", "--offline", "--all", "--operator", "Dana Q/A", "--firmware", "2.4.1"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported checklist to"))
        .stdout(predicate::str::contains("100.00%"));

    let pdfs = exported_pdfs(&out);
    assert_eq!(pdfs.len(), 1);
    let name = pdfs[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("EMV_Testing_Checklist_Dana_Q_A_"), "{name}");

    let bytes = fs::read(&pdfs[0]).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    let pdf = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(pdf.get_pages().len(), 1);
}

#[test]
fn test_export_json_result() {
    let temp = TempDir::new().unwrap();

    let output = qa(temp.path())
        .args(["--json", "export", "--offline", "--operator", "Dana", "--check", "1.1"])
        .args(["--policy", "always-pass"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["checked"], 1);
    assert_eq!(json["total"], 11);
    assert_eq!(json["completion"], "9.09");
    assert_eq!(json["network_address"], "Unable to fetch public IP");
    assert_eq!(exported_pdfs(temp.path()).len(), 1);
}

#[test]
fn test_export_refused_without_operator() {
    let temp = TempDir::new().unwrap();

    qa(temp.path())
        .args(["export", "--offline", "--all", "--policy", "always-pass"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("QA operator name is required"))
        .stderr(predicate::str::contains("Export refused"));
    assert!(exported_pdfs(temp.path()).is_empty());
}

#[test]
fn test_export_refused_for_unchecked_items_without_notes() {
    let temp = TempDir::new().unwrap();

    let output = qa(temp.path())
        .args(["--json", "export", "--offline", "--operator", "Dana", "--all"])
        .args(["--check", "1.1"])
        .output()
        .unwrap();
    assert!(output.status.success(), "all items checked should pass");

    let temp = TempDir::new().unwrap();
    let output = qa(temp.path())
        .args(["--json", "export", "--offline", "--operator", "Dana"])
        .args(["--check", "1.1", "--check", "1.2", "--note", "1.3=reader offline"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["policy"], "require-note-if-unchecked");
    let failing: Vec<&str> = json["failing"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(failing.len(), 8);
    assert_eq!(failing[0], "2.1");
    assert!(exported_pdfs(temp.path()).is_empty());
}

#[test]
fn test_export_rejects_unknown_item() {
    let temp = TempDir::new().unwrap();

    qa(temp.path())
        .args(["export", "--offline", "--operator", "Dana", "--check", "9.9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("9.9"));
}

#[test]
fn test_export_rejects_malformed_item_id() {
    let temp = TempDir::new().unwrap();

    qa(temp.path())
        .args(["export", "--check", "first"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid item id"));
}

#[test]
fn test_export_dry_run_prints_layout() {
    let temp = TempDir::new().unwrap();

    let output = qa(temp.path())
        .args(["export", "--dry-run", "--all", "--operator", "Dana"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["page_count"], 1);
    let lines = doc["lines"].as_array().unwrap();
    assert_eq!(lines.iter().filter(|l| l["kind"] == "item").count(), 11);
    assert_eq!(lines[0]["text"].as_str().unwrap().len(), "Date: 2024-05-01".len());
    assert!(exported_pdfs(temp.path()).is_empty());
}

#[test]
fn test_export_uses_config_policy_and_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("qa-checklist.toml"),
        "[validation]\npolicy = \"always-pass\"\n\n[network]\nenabled = false\n\n[output]\ndirectory = \"out\"\n",
    )
    .unwrap();

    qa(temp.path())
        .args(["export", "--operator", "Dana"])
        .assert()
        .success();
    assert_eq!(exported_pdfs(&temp.path().join("out")).len(), 1);
}

#[cfg(feature = "net")]
#[test]
fn test_refused_export_does_not_wait_for_address_lookup() {
    use std::net::TcpListener;
    use std::time::{Duration, Instant};

    let temp = TempDir::new().unwrap();
    // Completes the TCP handshake through the backlog but never answers
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/json", listener.local_addr().unwrap());
    fs::write(
        temp.path().join("qa-checklist.toml"),
        format!(
            "[network]\nendpoints = [\"{url}\", \"{url}\"]\nattempts = 2\ntimeout_secs = 5\nretry_delay_ms = 500\n"
        ),
    )
    .unwrap();

    let cases: [(&[&str], &str); 2] = [
        (&["export", "--operator", "   ", "--all"], "QA operator name is required"),
        (&["export", "--operator", "Dana", "--check", "1.1"], "Items rejected by policy"),
    ];
    for (args, message) in cases {
        let started = Instant::now();
        qa(temp.path())
            .args(args)
            .assert()
            .failure()
            .stdout(predicate::str::contains(message));
        let elapsed = started.elapsed();
        assert!(elapsed < Duration::from_secs(4), "refusal took {elapsed:?}");
    }
    assert!(exported_pdfs(temp.path()).is_empty());
    drop(listener);
}
