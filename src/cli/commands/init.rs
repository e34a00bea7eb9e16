//! Write a starter configuration file

use std::fs;
use std::path::Path;

use qa_checklist::config::LOCAL_CONFIG_FILE;
use qa_checklist::output::OutputMode;

const STARTER_CONFIG: &str = r#"# qa-checklist configuration

[validation]
# require-note-if-unchecked: unchecked items need a note before export
# always-pass: no per-item requirement
policy = "require-note-if-unchecked"

[network]
# Look up the public address for the PDF header
enabled = true
endpoints = [
    "https://api64.ipify.org?format=json",
    "https://api.ipify.org?format=json",
    "https://ipapi.co/json/",
]
attempts = 2
timeout_secs = 5
retry_delay_ms = 500

[output]
# directory = "reports"

# Use a custom checklist instead of the built-in EMV one:
# [checklist]
# definition = "checklist.toml"
"#;

/// Write `qa-checklist.toml` in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Path::new(LOCAL_CONFIG_FILE);

    if path.exists() && !force {
        if mode == OutputMode::Json {
            println!("{}", serde_json::json!({ "created": false, "path": LOCAL_CONFIG_FILE }));
        } else {
            println!("Already initialized ({LOCAL_CONFIG_FILE} exists).");
            println!("Use --force to overwrite.");
        }
        return Ok(());
    }

    fs::write(path, STARTER_CONFIG)?;

    if mode == OutputMode::Json {
        println!("{}", serde_json::json!({ "created": true, "path": LOCAL_CONFIG_FILE }));
    } else {
        println!("Created {LOCAL_CONFIG_FILE}");
    }
    Ok(())
}
