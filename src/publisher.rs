//! Clones the site repository, writes the changelog post into it and pushes
//! the commit.
//!
//! git authenticates through whatever the environment provides (ssh-agent or
//! a credential helper). Nothing here sets that up or checks for it.

use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use spdlog::{debug, info};

use crate::command::{check_run, CommandRunner, ShellCommand};
use crate::config::{Git, PostSettings};
use crate::error::Result;
use crate::post::Post;
use crate::text_utils::{post_file_name, repo_name_from_uri};

const GENERATOR: &str = env!("CARGO_PKG_NAME");

#[derive(Clone, Debug)]
pub struct PublishRequest {
    pub version: String,
    pub githubio_repo_uri: String,
    pub changelog_gist_uri: Option<String>,
}

/// Last step completed by a publisher. A failure leaves it where it was.
/// Steps only move the state forward from the one right before them, so
/// formatting a post without a clone leaves the publisher in `Created`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PublishState {
    Created,
    Cloned,
    Formatted,
    Written,
    Staged,
    Committed,
    Pushed,
}

pub struct ChangelogPublisher<'a> {
    version: String,
    githubio_repo_uri: String,
    changelog_gist_uri: String,
    work_dir: PathBuf,
    run_time: NaiveDateTime,
    git: Git,
    post: PostSettings,
    runner: &'a dyn CommandRunner,
    state: PublishState,
}

impl<'a> ChangelogPublisher<'a> {
    /// `changelog_gist_uri` takes precedence over the one in `request`.
    pub fn new(request: PublishRequest, changelog_gist_uri: Option<String>, runner: &'a dyn CommandRunner) -> Self {
        let changelog_gist_uri = changelog_gist_uri
            .filter(|uri| !uri.is_empty())
            .or(request.changelog_gist_uri)
            .unwrap_or_default();

        ChangelogPublisher {
            version: request.version,
            githubio_repo_uri: request.githubio_repo_uri,
            changelog_gist_uri,
            work_dir: PathBuf::from("."),
            run_time: Local::now().naive_local(),
            git: Git::default(),
            post: PostSettings::default(),
            runner,
            state: PublishState::Created,
        }
    }

    /// Directory the repository gets cloned into
    pub fn with_work_dir(mut self, work_dir: PathBuf) -> Self {
        self.work_dir = work_dir;
        self
    }

    /// Time used for both the post date and its file name
    pub fn with_run_time(mut self, run_time: NaiveDateTime) -> Self {
        self.run_time = run_time;
        self
    }

    pub fn with_settings(mut self, git: Git, post: PostSettings) -> Self {
        self.git = git;
        self.post = post;
        self
    }

    pub fn state(&self) -> PublishState {
        self.state
    }

    pub fn repo_dir(&self) -> PathBuf {
        self.work_dir.join(repo_name_from_uri(&self.githubio_repo_uri))
    }

    pub fn post_file_name(&self) -> String {
        post_file_name(&self.run_time, &self.version)
    }

    /// Post location relative to the repository root
    pub fn post_rel_path(&self) -> PathBuf {
        self.post.posts_dir.join(self.post_file_name())
    }

    pub fn post_path(&self) -> PathBuf {
        self.repo_dir().join(self.post_rel_path())
    }

    fn advance(&mut self, from: PublishState, to: PublishState) {
        if self.state != from {
            debug!("Staying in {:?}, {:?} needs {:?}", self.state, to, from);
            return;
        }
        info!("{:?} -> {:?}", from, to);
        self.state = to;
    }

    fn git_cmd(&self) -> ShellCommand {
        ShellCommand::new(&self.git.program)
    }

    fn git_in_repo(&self) -> ShellCommand {
        self.git_cmd().in_dir(&self.repo_dir())
    }

    /// Clones the site repository. Fails if the target directory already exists.
    pub fn clone_repo(&mut self) -> Result<()> {
        let repo_dir = self.repo_dir();
        info!("Cloning {} into {}", self.githubio_repo_uri, repo_dir.display());

        let cmd = self.git_cmd()
            .arg("clone")
            .arg(&self.githubio_repo_uri)
            .arg(repo_dir.to_string_lossy());
        check_run(self.runner, &cmd)?;

        self.advance(PublishState::Created, PublishState::Cloned);
        Ok(())
    }

    pub fn format_post(&mut self) -> Post {
        let title = format!("{} {}", self.post.title_prefix, self.version);
        let post = Post::new(title, self.run_time, self.post.category.clone(), &self.changelog_gist_uri);

        if post.script_src.is_empty() {
            debug!("No changelog gist given, script source left empty");
        }

        self.advance(PublishState::Cloned, PublishState::Formatted);
        post
    }

    /// Writes the post into the clone then stages, commits and pushes it.
    /// Nothing is undone when a step fails.
    pub fn publish_post(&mut self, post_content: &str) -> Result<()> {
        let post_path = self.post_path();
        info!("Writing post {}", post_path.display());
        fs::write(&post_path, post_content)?;
        self.advance(PublishState::Formatted, PublishState::Written);

        let add = self.git_in_repo()
            .arg("add")
            .arg(self.post_rel_path().to_string_lossy());
        check_run(self.runner, &add)?;
        self.advance(PublishState::Written, PublishState::Staged);

        let message = format!("Changelog for version {} auto-generated by {}", self.version, GENERATOR);
        let commit = self.git_in_repo()
            .arg("commit")
            .arg("-m")
            .arg(message);
        check_run(self.runner, &commit)?;
        self.advance(PublishState::Staged, PublishState::Committed);

        let push = self.git_in_repo()
            .arg("push")
            .arg(&self.git.remote)
            .arg(&self.git.branch);
        check_run(self.runner, &push)?;
        self.advance(PublishState::Committed, PublishState::Pushed);

        Ok(())
    }

    pub fn publish_changelog(&mut self) -> Result<()> {
        self.clone_repo()?;
        let post = self.format_post();
        self.publish_post(&post.to_string())
    }
}
