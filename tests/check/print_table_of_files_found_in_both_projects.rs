use crate::common::command::{
    path_arg, run_checker_command, source_dir, stdout_of, updated_target_dir,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_table_of_files_found_in_both_projects(
    updated_target_dir: TempDir,
    source_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = stdout_of(
        run_checker_command(
            updated_target_dir.path(),
            &["-t", &path_arg(&updated_target_dir), "-s", &path_arg(&source_dir)],
        )
        .assert()
        .success(),
    );

    let row = output
        .lines()
        .find(|line| line.contains("a.go"))
        .ok_or("row for a.go is missing")?;
    assert!(row.starts_with("│ 1      │ x/        │ a.go      │ "));

    assert!(output.contains("<<<<<<OLD (line 1)>>>>>> \treturn 1\n"));
    assert!(output.contains("<<<<<<CHANGE (line 1)>>>>>> \treturn 2\n"));
    assert!(!output.contains("b.go"));
    assert!(!output.contains("c.txt"));
    assert_eq!(output.matches('┌').count(), 1);

    Ok(())
}
