//! Unit tests for `doil repo:list`.

#![allow(clippy::expect_used)]

use std::process::ExitCode;

use doil_cli::commands::repo_list;
use doil_cli::domain::Repo;
use doil_cli::output::CommandWriter;

use crate::mocks::MockManager;

#[test]
fn test_list_without_repos_points_to_repo_add() {
    let mut manager = MockManager::new();
    manager.expect_list_repos().times(1).returning(|| Ok(Vec::new()));
    let writer = CommandWriter::buffered();

    let code = repo_list::run(&manager, &writer).expect("list");

    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(
        writer.contents(),
        "No repositories registered.\nUse doil repo:add to add one.\n"
    );
}

#[test]
fn test_list_prints_one_line_per_repo_and_marks_global() {
    let mut manager = MockManager::new();
    manager.expect_list_repos().returning(|| {
        Ok(vec![
            Repo::new("doil").with_url("git@github.com:conceptsandtraining/doil.git"),
            Repo::new("ilias")
                .with_url("https://github.com/ILIAS-eLearning/ILIAS.git")
                .with_global(true),
        ])
    });
    let writer = CommandWriter::buffered();

    repo_list::run(&manager, &writer).expect("list");

    assert_eq!(
        writer.contents(),
        "Currently registered repositories:\n\
         \tdoil - git@github.com:conceptsandtraining/doil.git\n\
         \tilias - https://github.com/ILIAS-eLearning/ILIAS.git (global)\n"
    );
}
