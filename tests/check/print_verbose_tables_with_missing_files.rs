use crate::common::command::{
    path_arg, run_checker_command, source_dir, stdout_of, updated_target_dir,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_verbose_tables_with_missing_files(
    updated_target_dir: TempDir,
    source_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = stdout_of(
        run_checker_command(
            updated_target_dir.path(),
            &[
                "-t",
                &path_arg(&updated_target_dir),
                "-s",
                &path_arg(&source_dir),
                "--debug",
            ],
        )
        .assert()
        .success(),
    );

    let found_at = output
        .find("Files found in both projects:")
        .ok_or("found table is missing")?;
    let missing_at = output
        .find("Files not found in Updated Source Project:")
        .ok_or("missing table is missing")?;
    assert!(found_at < missing_at);

    let found_table = &output[found_at..missing_at];
    assert!(found_table.contains("a.go"));
    assert!(found_table.contains("<<<<<<CHANGE (line 1)>>>>>> \treturn 2"));

    let missing_table = &output[missing_at..];
    let row = missing_table
        .lines()
        .find(|line| line.contains("b.go"))
        .ok_or("row for b.go is missing")?;
    assert!(row.contains("│ 1      │ ./        │ b.go      │ 0       │"));
    assert!(!missing_table.contains("<<<<<<"));

    Ok(())
}

#[rstest]
fn debug_output_takes_precedence_over_export(
    updated_target_dir: TempDir,
    source_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let export_dir = TempDir::new()?;
    let export_path = export_dir.path().join("report.csv");

    run_checker_command(
        updated_target_dir.path(),
        &[
            "-t",
            &path_arg(&updated_target_dir),
            "-s",
            &path_arg(&source_dir),
            "-d",
            "-o",
            &export_path.display().to_string(),
        ],
    )
    .assert()
    .success()
    .stdout(predicates::str::contains("Files found in both projects:"));

    assert!(!export_path.exists());

    Ok(())
}
