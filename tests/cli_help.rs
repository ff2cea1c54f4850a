//! Tests for `--help` output.

use std::process::Command;

#[test]
fn test_help_mentions_interactive_mode() {
    let bin = env!("CARGO_BIN_EXE_envswitch");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Run 'envswitch' without arguments for interactive mode."),
        "help output should mention running without arguments for interactive mode; got:\n{}",
        stdout
    );
}

#[test]
fn test_help_lists_subcommands() {
    let bin = env!("CARGO_BIN_EXE_envswitch");

    let output = Command::new(bin).arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["switch", "diff", "apps", "interactive"] {
        assert!(stdout.contains(command), "missing '{command}' in help:\n{stdout}");
    }
}
