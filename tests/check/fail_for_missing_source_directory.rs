use crate::common::command::{path_arg, run_checker_command, updated_target_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_for_missing_source_directory(
    updated_target_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let missing = updated_target_dir.path().join("no-such-project");

    run_checker_command(
        updated_target_dir.path(),
        &[
            "-t",
            &path_arg(&updated_target_dir),
            "-s",
            &missing.display().to_string(),
        ],
    )
    .assert()
    .code(1)
    .stderr(predicate::str::contains("is not a directory"));

    Ok(())
}
