use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spdlog::{error, info, warn};

use changelog_publisher::command::ShellRunner;
use changelog_publisher::error::PublishError;
use changelog_publisher::logger::configure_logger;
use changelog_publisher::publisher::{ChangelogPublisher, PublishRequest};

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "changelog-publisher.toml";

/// Creates a changelog post in a git-backed blog and pushes it.
///
/// Pushing relies on credentials already available to git, e.g. a key
/// loaded in a running ssh-agent.
#[derive(Parser, Debug)]
#[command(about, long_about, disable_version_flag = true)]
struct Args {
    /// URI of the site repository to commit the changelog post to,
    /// e.g. git@github.com:spinnaker/spinnaker.github.io.git
    #[arg(long = "githubio_repo_uri")]
    githubio_repo_uri: String,

    /// Version the changelog corresponds to
    #[arg(long)]
    version: String,

    /// URI of a gist containing the changelog
    #[arg(long = "changelog_gist_uri", default_value = "")]
    changelog_gist_uri: String,

    /// Directory the site repository is cloned into
    #[arg(long = "work_dir", default_value = ".")]
    work_dir: PathBuf,

    /// Config path
    #[arg(short, long = "config_path")]
    config_path: Option<PathBuf>,
}

/// Failing command's exit code when it fits one, 1 otherwise
fn exit_status(err: &PublishError) -> u8 {
    u8::try_from(err.exit_code()).ok()
        .filter(|code| *code != 0)
        .unwrap_or(1)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match open_config(args.config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{:#}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let request = PublishRequest {
        version: args.version,
        githubio_repo_uri: args.githubio_repo_uri,
        changelog_gist_uri: Some(args.changelog_gist_uri),
    };

    let runner = ShellRunner;
    let mut publisher = ChangelogPublisher::new(request, None, &runner)
        .with_work_dir(args.work_dir)
        .with_settings(config.git, config.post);

    match publisher.publish_changelog() {
        Ok(()) => {
            info!("Published {}", publisher.post_rel_path().display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Publishing stopped after {:?}: {}", publisher.state(), err);
            ExitCode::from(exit_status(&err))
        }
    }
}
