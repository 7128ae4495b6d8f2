use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const TRAY: &str = r#"/**
 * Advanced system tray management module
 */
import { Tray } from 'electron';

// Initialize system tray
export function initializeTray(iconPath: string, scheme: string): void {
  debugLog('Tray already initialized');
  console.log(`Protocol scheme registered: ${scheme}`);
  console.error('Tray initialization error:', error);
}
"#;

const TRAY_KO: &str = r#"/**
 * 고급 시스템 트레이 관리 모듈
 */
import { Tray } from 'electron';

// 시스템 트레이 초기화
export function initializeTray(iconPath: string, scheme: string): void {
  debugLog('트레이가 이미 초기화되어 있습니다');
  console.log(`프로토콜 스킴 등록됨: ${scheme}`);
  console.error('트레이 초기화 오류:', error);
}
"#;

const MATH: &str = "export const add = (a: number, b: number): number => a + b;\n";

fn sample_project() -> Result<CliTest> {
    let test = CliTest::with_file("src/main/tray.ts", TRAY)?;
    test.write_file("src/shared/math.ts", MATH)?;
    test.write_file("src/renderer/view.ts", "// Initialize system tray\n")?;
    Ok(test)
}

#[test]
fn test_translate_rewrites_sources() -> Result<()> {
    let test = sample_project()?;

    assert_cmd_snapshot!(test.translate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ changed    src/main/tray.ts
    - unchanged  src/shared/math.ts

    ✓ English → Korean: 2 files processed, 1 changed, 1 unchanged

    ----- stderr -----
    ");

    assert_eq!(test.read_file("src/main/tray.ts")?, TRAY_KO);
    assert_eq!(test.read_file("src/shared/math.ts")?, MATH);
    // Outside the default source directories.
    assert_eq!(
        test.read_file("src/renderer/view.ts")?,
        "// Initialize system tray\n"
    );

    Ok(())
}

#[test]
fn test_translate_twice_changes_nothing() -> Result<()> {
    let test = sample_project()?;

    test.translate_command().output()?;
    assert_cmd_snapshot!(test.translate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    - unchanged  src/main/tray.ts
    - unchanged  src/shared/math.ts

    ✓ English → Korean: 2 files processed, 0 changed, 2 unchanged

    ----- stderr -----
    ");
    assert_eq!(test.read_file("src/main/tray.ts")?, TRAY_KO);

    Ok(())
}

#[test]
fn test_dry_run_leaves_files_intact() -> Result<()> {
    let test = sample_project()?;

    assert_cmd_snapshot!(test.translate_command().arg("--dry-run"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ changed    src/main/tray.ts
    - unchanged  src/shared/math.ts

    ✓ English → Korean: 2 files processed, 1 changed, 1 unchanged
    Dry run: no files were written (run without --dry-run to apply)

    ----- stderr -----
    ");
    assert_eq!(test.read_file("src/main/tray.ts")?, TRAY);

    Ok(())
}

#[test]
fn test_verbose_shows_span_counts() -> Result<()> {
    let test = sample_project()?;
    let _settings = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.translate_command().arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ changed    src/main/tray.ts (2 comments, 3 messages)
    - unchanged  src/shared/math.ts

    ✓ English → Korean: 2 files processed, 1 changed, 1 unchanged

    ----- stderr -----
    Note: No .glossrc.json found, using default configuration
    warning: include [ROOT]/src/preload does not exist
    warning: include [ROOT]/src/utils does not exist
    warning: include [ROOT]/src/native-modules does not exist
    ");

    Ok(())
}

#[test]
fn test_missing_root_is_fatal() -> Result<()> {
    let test = sample_project()?;

    assert_cmd_snapshot!(test.translate_command().args(["--root", "does-not-exist"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Project root does not exist: does-not-exist
    ");

    Ok(())
}

#[test]
fn test_no_candidate_files_is_fatal() -> Result<()> {
    let test = CliTest::with_file("src/renderer/view.ts", "// Initialize system tray\n")?;
    let _settings = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.translate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: No source files found under [ROOT] (includes: src/main, src/preload, src/shared, src/utils, src/native-modules; extensions: ts)
    ");
    assert_eq!(
        test.read_file("src/renderer/view.ts")?,
        "// Initialize system tray\n"
    );

    Ok(())
}

#[test]
fn test_unreadable_file_is_reported_and_run_continues() -> Result<()> {
    let test = sample_project()?;
    std::fs::write(
        test.root().join("src/main/broken.ts"),
        [0xff, 0xfe, b'/', b'/'],
    )?;
    let _settings = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.translate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✘ failed     src/main/broken.ts: Failed to read file: [ROOT]/src/main/broken.ts: stream did not contain valid UTF-8
    ✓ changed    src/main/tray.ts
    - unchanged  src/shared/math.ts

    ✓ English → Korean: 3 files processed, 1 changed, 2 unchanged

    ----- stderr -----
    warning: 1 file could not be processed and was left unchanged
    ");
    assert_eq!(test.read_file("src/main/tray.ts")?, TRAY_KO);

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_entries_are_counted() -> Result<()> {
    let test = sample_project()?;
    std::os::unix::fs::symlink(
        test.root().join("src/main/gone.ts"),
        test.root().join("src/main/link.ts"),
    )?;

    assert_cmd_snapshot!(test.translate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ changed    src/main/tray.ts
    - unchanged  src/shared/math.ts

    ✓ English → Korean: 2 files processed, 1 changed, 1 unchanged

    ----- stderr -----
    warning: 1 path could not be read and was skipped
    ");
    assert_eq!(test.read_file("src/main/tray.ts")?, TRAY_KO);

    Ok(())
}

#[test]
fn test_root_option() -> Result<()> {
    let test = CliTest::with_file("app/src/main/tray.ts", "// Get tray status\n")?;

    assert_cmd_snapshot!(test.translate_command().args(["--root", "app"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ changed    src/main/tray.ts

    ✓ English → Korean: 1 file processed, 1 changed, 0 unchanged

    ----- stderr -----
    ");
    assert_eq!(
        test.read_file("app/src/main/tray.ts")?,
        "// 트레이 상태 가져오기\n"
    );

    Ok(())
}

#[test]
fn test_config_includes_and_call_names() -> Result<()> {
    let test = CliTest::with_file(
        ".glossrc.json",
        r#"{ "includes": ["lib"], "callNames": ["logger.info"] }"#,
    )?;
    test.write_file(
        "lib/tray.ts",
        "logger.info('Tray icon clicked');\ndebugLog('Tray icon clicked');\n",
    )?;

    assert_cmd_snapshot!(test.translate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ changed    lib/tray.ts

    ✓ English → Korean: 1 file processed, 1 changed, 0 unchanged

    ----- stderr -----
    ");
    // debugLog is not a configured call, but the whole-file pass still
    // replaces the exact phrase.
    assert_eq!(
        test.read_file("lib/tray.ts")?,
        "logger.info('트레이 아이콘이 클릭되었습니다');\ndebugLog('트레이 아이콘이 클릭되었습니다');\n"
    );

    Ok(())
}

#[test]
fn test_user_dictionary() -> Result<()> {
    let test = CliTest::with_file(
        ".glossrc.json",
        r#"{ "dictionary": "gloss-terms.json" }"#,
    )?;
    test.write_file("gloss-terms.json", r#"{ "Sync finished": "동기화 완료됨" }"#)?;
    test.write_file("src/main/sync.ts", "debugLog('Sync finished');\n")?;

    assert_cmd_snapshot!(test.translate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ changed    src/main/sync.ts

    ✓ English → Korean: 1 file processed, 1 changed, 0 unchanged

    ----- stderr -----
    ");
    assert_eq!(
        test.read_file("src/main/sync.ts")?,
        "debugLog('동기화 완료됨');\n"
    );

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_file(".glossrc.json", r#"{ "callNames": [] }"#)?;
    test.write_file("src/main/tray.ts", TRAY)?;

    assert_cmd_snapshot!(test.translate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: 'callNames' must list at least one diagnostic call
    ");
    assert_eq!(test.read_file("src/main/tray.ts")?, TRAY);

    Ok(())
}

#[test]
fn test_invalid_user_dictionary_is_fatal() -> Result<()> {
    let test = CliTest::with_file(".glossrc.json", r#"{ "dictionary": "terms.json" }"#)?;
    test.write_file("terms.json", r#"["not", "an", "object"]"#)?;
    test.write_file("src/main/tray.ts", TRAY)?;

    assert_cmd_snapshot!(test.translate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Dictionary file must contain a JSON object: ./terms.json
    ");
    assert_eq!(test.read_file("src/main/tray.ts")?, TRAY);

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    A fast CLI tool for translating comments and log messages in TypeScript sources between English and Korean

    Usage: gloss [COMMAND]

    Commands:
      translate  Translate English comments and log messages into Korean
      revert     Revert Korean comments and log messages back into English
      init       Initialize a new .glossrc.json configuration file
      help       Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    ");

    Ok(())
}
