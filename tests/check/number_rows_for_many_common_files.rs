use crate::common::command::{
    git_commit_all, path_arg, repository_dir, run_checker_command, run_git_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn number_rows_for_many_common_files(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = repository_dir.path();
    run_git_command(target, &["init", "-q"]).assert().success();
    write_file(FileSpec::new(target.join("README"), "seed".to_string()));
    git_commit_all(target, "Initial commit");

    let generated = write_generated_files(target, 12);
    git_commit_all(target, "Add generated files");

    let source = TempDir::new()?;
    for file in &generated {
        let file_name = file.path.file_name().ok_or("generated file has no name")?;
        write_file(FileSpec::new(source.path().join(file_name), file.content.clone()));
    }

    let output = stdout_of(
        run_checker_command(
            target,
            &["-t", &path_arg(&repository_dir), "-s", &path_arg(&source)],
        )
        .assert()
        .success(),
    );

    for file in &generated {
        let file_name = file
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or("generated file has no name")?;
        assert!(output.contains(file_name), "missing row for {file_name}");
    }
    assert!(output.contains("│ 1      │ ./"));
    assert!(output.contains("│ 12     │ ./"));
    assert!(!output.contains("README"));

    Ok(())
}
