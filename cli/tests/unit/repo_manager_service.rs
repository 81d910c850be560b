//! Unit tests for `LocalRepoManager` against in-memory port fakes.

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use doil_cli::application::ports::RepoManager;
use doil_cli::application::services::repo_manager::LocalRepoManager;
use doil_cli::domain::{CommandFault, Repo, RepoError};

use crate::mocks::{FakeFs, GitRecorder, MemoryRegistry};

const REPOS_DIR: &str = "/home/doil/.doil/repositories";

fn manager<'a>(
    registry: &'a MemoryRegistry,
    git: &'a GitRecorder,
    fs: &'a FakeFs,
) -> LocalRepoManager<&'a MemoryRegistry, &'a GitRecorder, &'a FakeFs> {
    LocalRepoManager::new(registry, git, fs, PathBuf::from(REPOS_DIR))
}

fn registered_doil() -> Repo {
    Repo::new("doil").with_url("https://github.com/conceptsandtraining/doil.git")
}

// ── repo_exists / list_repos ─────────────────────────────────────────────────

#[test]
fn test_repo_exists_matches_by_name() {
    let registry = MemoryRegistry::with(vec![registered_doil()]);
    let (git, fs) = (GitRecorder::default(), FakeFs::default());
    let mgr = manager(&registry, &git, &fs);

    assert!(mgr.repo_exists(&mgr.get_empty_repo().with_name("doil")).expect("exists"));
    assert!(!mgr.repo_exists(&Repo::new("ilias")).expect("exists"));
}

#[test]
fn test_list_repos_is_sorted_by_name() {
    let registry = MemoryRegistry::with(vec![Repo::new("zeta"), Repo::new("alpha")]);
    let (git, fs) = (GitRecorder::default(), FakeFs::default());
    let names: Vec<String> = manager(&registry, &git, &fs)
        .list_repos()
        .expect("list")
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["alpha", "zeta"]);
}

// ── update_repo ──────────────────────────────────────────────────────────────

#[test]
fn test_update_fetches_existing_checkout_and_records_time() {
    let registry = MemoryRegistry::with(vec![registered_doil()]);
    let git = GitRecorder::default();
    let fs = FakeFs::with_dirs(&["/home/doil/.doil/repositories/doil"]);

    manager(&registry, &git, &fs)
        .update_repo(&Repo::new("doil"))
        .expect("update");

    assert_eq!(
        *git.calls.borrow(),
        vec!["fetch /home/doil/.doil/repositories/doil"]
    );
    assert!(registry.repos.borrow()[0].updated_at.is_some());
    assert_eq!(registry.saves.get(), 1);
}

#[test]
fn test_update_reclones_missing_checkout_from_registered_url() {
    let registry = MemoryRegistry::with(vec![registered_doil()]);
    let git = GitRecorder::default();
    let fs = FakeFs::default();

    manager(&registry, &git, &fs)
        .update_repo(&Repo::new("doil"))
        .expect("update");

    assert_eq!(
        *git.calls.borrow(),
        vec![
            "clone https://github.com/conceptsandtraining/doil.git /home/doil/.doil/repositories/doil"
        ]
    );
}

#[test]
fn test_update_unregistered_repo_is_not_found() {
    let registry = MemoryRegistry::default();
    let (git, fs) = (GitRecorder::default(), FakeFs::default());

    let err = manager(&registry, &git, &fs)
        .update_repo(&Repo::new("doil"))
        .expect_err("not registered");

    assert!(matches!(
        err.downcast_ref::<RepoError>(),
        Some(RepoError::NotFound(name)) if name == "doil"
    ));
    assert!(git.calls.borrow().is_empty());
}

#[test]
fn test_failed_fetch_does_not_touch_registry() {
    let registry = MemoryRegistry::with(vec![registered_doil()]);
    let git = GitRecorder::failing();
    let fs = FakeFs::with_dirs(&["/home/doil/.doil/repositories/doil"]);

    manager(&registry, &git, &fs)
        .update_repo(&Repo::new("doil"))
        .expect_err("fetch fails");

    assert_eq!(registry.saves.get(), 0);
    assert!(registry.repos.borrow()[0].updated_at.is_none());
}

// ── add_repo ─────────────────────────────────────────────────────────────────

#[test]
fn test_add_clones_into_repositories_dir_and_registers() {
    let registry = MemoryRegistry::default();
    let (git, fs) = (GitRecorder::default(), FakeFs::default());

    manager(&registry, &git, &fs)
        .add_repo(&registered_doil().with_global(true))
        .expect("add");

    assert_eq!(
        *git.calls.borrow(),
        vec![
            "clone https://github.com/conceptsandtraining/doil.git /home/doil/.doil/repositories/doil"
        ]
    );
    assert!(fs.dirs.borrow().contains(&PathBuf::from(REPOS_DIR)));
    let repos = registry.repos.borrow();
    assert_eq!(repos.len(), 1);
    assert!(repos[0].global);
}

#[test]
fn test_add_existing_repo_is_rejected_before_cloning() {
    let registry = MemoryRegistry::with(vec![registered_doil()]);
    let (git, fs) = (GitRecorder::default(), FakeFs::default());

    let err = manager(&registry, &git, &fs)
        .add_repo(&registered_doil())
        .expect_err("duplicate");

    assert!(matches!(
        err.downcast_ref::<RepoError>(),
        Some(RepoError::AlreadyExists(_))
    ));
    assert!(git.calls.borrow().is_empty());
}

#[test]
fn test_add_rejects_name_that_would_escape_repositories_dir() {
    let registry = MemoryRegistry::default();
    let (git, fs) = (GitRecorder::default(), FakeFs::default());

    let err = manager(&registry, &git, &fs)
        .add_repo(&Repo::new("../outside").with_url("https://example.org/x.git"))
        .expect_err("invalid name");

    assert!(matches!(
        err.downcast_ref::<RepoError>(),
        Some(RepoError::InvalidName(_))
    ));
    assert!(git.calls.borrow().is_empty());
    assert_eq!(registry.saves.get(), 0);
}

#[test]
fn test_update_hand_edited_entry_with_bad_name_is_registry_error_not_fault() {
    let registry = MemoryRegistry::with(vec![
        Repo::new("my-repo").with_url("https://example.org/x.git"),
    ]);
    let (git, fs) = (GitRecorder::default(), FakeFs::default());

    let err = manager(&registry, &git, &fs)
        .update_repo(&Repo::new("my-repo"))
        .expect_err("invalid registered name");

    assert!(err.downcast_ref::<CommandFault>().is_none());
    assert!(matches!(
        err.downcast_ref::<RepoError>(),
        Some(RepoError::InvalidName(name)) if name == "my-repo"
    ));
    assert!(git.calls.borrow().is_empty());
    assert_eq!(registry.saves.get(), 0);
}

#[test]
fn test_failed_clone_does_not_register() {
    let registry = MemoryRegistry::default();
    let git = GitRecorder::failing();
    let fs = FakeFs::default();

    manager(&registry, &git, &fs)
        .add_repo(&registered_doil())
        .expect_err("clone fails");

    assert!(registry.repos.borrow().is_empty());
}

// ── delete_repo ──────────────────────────────────────────────────────────────

#[test]
fn test_delete_removes_checkout_and_registration() {
    let registry = MemoryRegistry::with(vec![registered_doil(), Repo::new("ilias")]);
    let git = GitRecorder::default();
    let fs = FakeFs::with_dirs(&["/home/doil/.doil/repositories/doil"]);

    manager(&registry, &git, &fs)
        .delete_repo(&Repo::new("doil"))
        .expect("delete");

    assert_eq!(
        *fs.removed.borrow(),
        vec![PathBuf::from("/home/doil/.doil/repositories/doil")]
    );
    let repos = registry.repos.borrow();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name, "ilias");
}

#[test]
fn test_delete_without_checkout_only_unregisters() {
    let registry = MemoryRegistry::with(vec![registered_doil()]);
    let (git, fs) = (GitRecorder::default(), FakeFs::default());

    manager(&registry, &git, &fs)
        .delete_repo(&Repo::new("doil"))
        .expect("delete");

    assert!(fs.removed.borrow().is_empty());
    assert!(registry.repos.borrow().is_empty());
}
