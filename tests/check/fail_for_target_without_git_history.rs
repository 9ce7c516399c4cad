use crate::common::command::{path_arg, run_checker_command, source_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_for_target_without_git_history(
    source_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let not_a_repository = TempDir::new()?;

    run_checker_command(
        not_a_repository.path(),
        &["-t", &path_arg(&not_a_repository), "-s", &path_arg(&source_dir)],
    )
    .assert()
    .code(1)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("diff --name-only HEAD@{1}"));

    Ok(())
}
