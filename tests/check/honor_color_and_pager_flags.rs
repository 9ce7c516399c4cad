use crate::common::command::{path_arg, run_checker_command, source_dir, updated_target_dir};
use assert_fs::TempDir;
use rstest::rstest;

const ESCAPE: &str = "\u{1b}[";

#[rstest]
fn highlight_rows_when_colour_is_forced(
    updated_target_dir: TempDir,
    source_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let assert = run_checker_command(
        updated_target_dir.path(),
        &["-d", "-t", &path_arg(&updated_target_dir), "-s", &path_arg(&source_dir)],
    )
    .env("CLICOLOR_FORCE", "1")
    .assert()
    .success();

    let output = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(output.contains(ESCAPE));

    Ok(())
}

#[rstest]
fn no_color_wins_over_forced_colour(
    updated_target_dir: TempDir,
    source_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let assert = run_checker_command(
        updated_target_dir.path(),
        &[
            "-d",
            "--no-color",
            "-t",
            &path_arg(&updated_target_dir),
            "-s",
            &path_arg(&source_dir),
        ],
    )
    .env("CLICOLOR_FORCE", "1")
    .assert()
    .success();

    let output = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(!output.contains(ESCAPE));
    assert!(output.contains("Files found in both projects:"));

    Ok(())
}

#[rstest]
fn no_pager_prints_the_table_directly(
    updated_target_dir: TempDir,
    source_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let assert = run_checker_command(
        updated_target_dir.path(),
        &[
            "--no-pager",
            "-t",
            &path_arg(&updated_target_dir),
            "-s",
            &path_arg(&source_dir),
        ],
    )
    .env_remove("NO_PAGER")
    .assert()
    .success();

    let output = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(output.starts_with("┌"));
    assert!(output.contains("│ a.go      │"));

    Ok(())
}
