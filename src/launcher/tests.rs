//! Tests for the launch sequence.
//!
//! The agent is replaced by `sh -c` scripts. The script runs with the output
//! directory as its working directory, so relative paths in it land there.

use super::*;
use crate::prompt::DEFAULT_PROMPT;
use crate::test_support::{DirGuard, canonical_cwd, create_site_folder, shell_agent_config};
use serial_test::serial;
use tempfile::TempDir;

const RECORD_AGENT: &str = r#"printf '%s|%s' "$0" "$1" > args.txt; pwd > pwd.txt; cat > stdin.txt"#;

fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
#[serial]
fn missing_folder_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp.path());
    let config = shell_agent_config("touch spawned.txt");

    let err = run(&config, &RunRequest::new("missing_dir", "auto")).unwrap_err();

    assert!(matches!(err, LaunchError::Configuration(_)));
    assert_eq!(err.to_string(), "Folder does not exist: missing_dir");
    assert!(std::fs::read_dir(temp.path()).unwrap().next().is_none());
}

#[test]
#[serial]
fn folder_without_data_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("site")).unwrap();
    let _guard = DirGuard::new(temp.path());
    let config = shell_agent_config("touch spawned.txt");

    let err = run(&config, &RunRequest::new("site", "sonnet-4")).unwrap_err();

    assert!(matches!(err, LaunchError::Configuration(_)));
    assert_eq!(err.to_string(), "data.json not found in site");
    assert!(!temp.path().join("site/cursor-sonnet-4").exists());
    assert!(!temp.path().join("spawned.txt").exists());
}

#[test]
#[serial]
fn file_as_folder_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("site"), "not a folder").unwrap();
    let _guard = DirGuard::new(temp.path());

    let err = validate_folder(&Config::default(), Path::new("site")).unwrap_err();
    assert!(matches!(err, LaunchError::Configuration(_)));
}

#[test]
#[serial]
fn data_file_only_needs_to_exist() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("site/data.json")).unwrap();
    let _guard = DirGuard::new(temp.path());

    validate_folder(&Config::default(), Path::new("site")).unwrap();
}

#[test]
#[serial]
fn successful_run_with_named_model() {
    let temp = TempDir::new().unwrap();
    create_site_folder(temp.path(), "barbar_ribs_lahmajoon");
    let _guard = DirGuard::new(temp.path());
    let before = canonical_cwd();

    let ok = run(
        &shell_agent_config(RECORD_AGENT),
        &RunRequest::new("barbar_ribs_lahmajoon", "sonnet-4"),
    )
    .unwrap();

    assert!(ok);
    assert_eq!(canonical_cwd(), before);

    let cursor_dir = before.join("barbar_ribs_lahmajoon/cursor-sonnet-4");
    let saved = read(cursor_dir.join("prompt_used.txt"));
    assert_eq!(saved, rewrite_for_parent_dir(DEFAULT_PROMPT));
    assert!(!saved.contains("You are inside a folder that already contains:"));

    // Agent saw the rewritten prompt, the model arguments, and ran inside the output dir.
    assert_eq!(read(cursor_dir.join("stdin.txt")), saved);
    assert_eq!(read(cursor_dir.join("args.txt")), "--model|sonnet-4");
    let agent_pwd = PathBuf::from(read(cursor_dir.join("pwd.txt")).trim());
    assert_eq!(agent_pwd.canonicalize().unwrap(), cursor_dir);
}

#[test]
#[serial]
fn auto_model_passes_no_model_arguments() {
    let temp = TempDir::new().unwrap();
    create_site_folder(temp.path(), "site");
    let _guard = DirGuard::new(temp.path());

    let ok = run(&shell_agent_config(RECORD_AGENT), &RunRequest::new("site", "auto")).unwrap();

    assert!(ok);
    let args = read(temp.path().join("site/cursor-auto/args.txt"));
    assert!(!args.contains("--model"), "unexpected model args: {}", args);
    assert!(args.ends_with('|'));
}

#[test]
#[serial]
fn local_prompt_override_is_used() {
    let temp = TempDir::new().unwrap();
    create_site_folder(temp.path(), "site");
    std::fs::write(
        temp.path().join("prompt.txt"),
        "Short brief.\n- logo image\n",
    )
    .unwrap();
    let _guard = DirGuard::new(temp.path());

    let ok = run(&shell_agent_config("cat > /dev/null"), &RunRequest::new("site", "gpt-5")).unwrap();

    assert!(ok);
    assert_eq!(
        read(temp.path().join("site/cursor-gpt-5/prompt_used.txt")),
        "Short brief.\n- ../logo.* (logo image file)\n"
    );
}

#[test]
#[serial]
fn prompt_override_in_target_folder_is_ignored() {
    let temp = TempDir::new().unwrap();
    let folder = create_site_folder(temp.path(), "site");
    std::fs::write(folder.join("prompt.txt"), "wrong place").unwrap();
    let _guard = DirGuard::new(temp.path());

    run(&shell_agent_config("exit 0"), &RunRequest::new("site", "auto")).unwrap();

    assert_eq!(
        read(temp.path().join("site/cursor-auto/prompt_used.txt")),
        rewrite_for_parent_dir(DEFAULT_PROMPT)
    );
}

#[test]
#[serial]
fn existing_output_directory_is_reused_and_prompt_overwritten() {
    let temp = TempDir::new().unwrap();
    let folder = create_site_folder(temp.path(), "site");
    let cursor_dir = folder.join("cursor-o1");
    std::fs::create_dir_all(&cursor_dir).unwrap();
    std::fs::write(cursor_dir.join("prompt_used.txt"), "stale").unwrap();
    std::fs::write(cursor_dir.join("index.html"), "<html></html>").unwrap();
    let _guard = DirGuard::new(temp.path());

    let ok = run(&shell_agent_config("exit 0"), &RunRequest::new("site", "o1")).unwrap();

    assert!(ok);
    assert_eq!(
        read(temp.path().join("site/cursor-o1/prompt_used.txt")),
        rewrite_for_parent_dir(DEFAULT_PROMPT)
    );
    assert!(temp.path().join("site/cursor-o1/index.html").exists());
}

#[test]
#[serial]
fn nonzero_exit_returns_false_and_restores_cwd() {
    let temp = TempDir::new().unwrap();
    create_site_folder(temp.path(), "site");
    let _guard = DirGuard::new(temp.path());
    let before = canonical_cwd();

    let ok = run(&shell_agent_config("exit 7"), &RunRequest::new("site", "auto")).unwrap();

    assert!(!ok);
    assert_eq!(canonical_cwd(), before);
}

#[test]
#[serial]
fn missing_agent_returns_false_and_restores_cwd() {
    let temp = TempDir::new().unwrap();
    create_site_folder(temp.path(), "site");
    let _guard = DirGuard::new(temp.path());
    let before = canonical_cwd();
    let config = Config {
        agent_command: "nonexistent_agent_xyz_123".to_string(),
        ..Config::default()
    };

    let ok = run(&config, &RunRequest::new("site", "auto")).unwrap();

    assert!(!ok);
    assert_eq!(canonical_cwd(), before);
    // The prompt is still saved before the spawn attempt.
    assert!(temp.path().join("site/cursor-auto/prompt_used.txt").exists());
}

#[test]
#[serial]
fn interrupted_run_returns_false_and_restores_cwd() {
    let temp = TempDir::new().unwrap();
    create_site_folder(temp.path(), "site");
    let _guard = DirGuard::new(temp.path());
    let before = canonical_cwd();

    let interrupter = std::thread::spawn(|| {
        std::thread::sleep(std::time::Duration::from_millis(300));
        crate::agent::dispatch::simulate_interrupt();
    });
    let ok = run(&shell_agent_config("sleep 30"), &RunRequest::new("site", "auto")).unwrap();
    interrupter.join().unwrap();

    assert!(!ok);
    assert_eq!(canonical_cwd(), before);
}

#[test]
#[serial]
fn failed_validation_leaves_cwd_unchanged() {
    let temp = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp.path());
    let before = canonical_cwd();

    let _ = run(&Config::default(), &RunRequest::new("missing_dir", "auto"));

    assert_eq!(canonical_cwd(), before);
}

#[test]
#[serial]
fn dry_run_writes_prompt_without_spawning() {
    let temp = TempDir::new().unwrap();
    create_site_folder(temp.path(), "site");
    let _guard = DirGuard::new(temp.path());
    let request = RunRequest {
        dry_run: true,
        ..RunRequest::new("site", "sonnet-4")
    };

    let ok = run(&shell_agent_config("touch spawned.txt"), &request).unwrap();

    assert!(ok);
    let cursor_dir = temp.path().join("site/cursor-sonnet-4");
    assert!(cursor_dir.join("prompt_used.txt").exists());
    assert!(!cursor_dir.join("spawned.txt").exists());
}

#[test]
#[serial]
fn output_layout_follows_config() {
    let temp = TempDir::new().unwrap();
    let folder = temp.path().join("site");
    std::fs::create_dir_all(&folder).unwrap();
    std::fs::write(folder.join("company.json"), "{}").unwrap();
    let _guard = DirGuard::new(temp.path());
    let config = Config {
        data_file: "company.json".to_string(),
        output_prefix: "agent-".to_string(),
        prompt_output: "brief.txt".to_string(),
        ..shell_agent_config("exit 0")
    };

    assert!(run(&config, &RunRequest::new("site", "auto")).unwrap());
    assert!(temp.path().join("site/agent-auto/brief.txt").exists());
}

fn render<F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>>(f: F) -> String {
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn success_report_lines() {
    let output = render(|out| report_success(out, Path::new("site/cursor-sonnet-4")));
    assert_eq!(
        output,
        "\n✓ Cursor-agent completed successfully\n✓ Output folder: site/cursor-sonnet-4\n"
    );
}

#[test]
fn nonzero_exit_report_line() {
    let err = LaunchError::SubprocessFailure { code: Some(7) };
    let output = render(|out| report_failure(out, &err));
    assert_eq!(output, "\n✗ Cursor-agent exited with code: 7\n");
}

#[test]
fn interrupt_report_line() {
    let output = render(|out| report_failure(out, &LaunchError::Interrupted));
    assert_eq!(output, "\n\n⚠ Cursor-agent interrupted by user\n");
}

#[test]
fn invocation_error_report_line() {
    let err = LaunchError::Invocation {
        program: "cursor-agent".to_string(),
        message: "No such file or directory".to_string(),
    };
    let output = render(|out| report_failure(out, &err));
    assert_eq!(
        output,
        "\n✗ Error running cursor-agent: No such file or directory\n"
    );
}
