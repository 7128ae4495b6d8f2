use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in ["root", "includes", "extensions", "callNames", "matchOrder"] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["matchOrder"], "declaration");
    assert_eq!(parsed["extensions"], serde_json::json!(["ts"]));

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .glossrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".glossrc.json").exists());
    let content = test.read_file(".glossrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".glossrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .glossrc.json already exists
    ");
    assert_eq!(test.read_file(".glossrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/main/tray.ts", "// Initialize system tray\n")?;

    assert_cmd_snapshot!(test.translate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ changed    src/main/tray.ts

    ✓ English → Korean: 1 file processed, 1 changed, 0 unchanged

    ----- stderr -----
    ");
    assert_eq!(test.read_file("src/main/tray.ts")?, "// 시스템 트레이 초기화\n");

    Ok(())
}
