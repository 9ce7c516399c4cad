use anyhow::{Context, Result};
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::Write;
use std::path::PathBuf;
use upgrade_checker::areas::checker::Checker;
use upgrade_checker::areas::config::{CheckerConfig, OutputMode};
use upgrade_checker::areas::git::{DEFAULT_BASE_REVISION, GitCli};
use upgrade_checker::artifacts::core::PagerWriter;
use upgrade_checker::commands::plumbing::annotate_diff::annotate_diff;
use upgrade_checker::commands::plumbing::changed_files::changed_files;
use upgrade_checker::logging;

const VERSION: &str = "0.0.32";

#[derive(Parser)]
#[command(
    name = "git-upgrade-checker",
    version = VERSION,
    about = "Check which files changed by the last git update also exist in another project",
    long_about = "Lists the files changed by the most recent update (pull, merge, checkout) \
    of a git project and checks whether the same paths exist in a second project. \
    This is perfect for upgrading an ongoing live project: every file found in both \
    places is reported together with its line-numbered diff.",
    args_conflicts_with_subcommands = true,
    disable_version_flag = true,
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'v',
        short_alias = 'V',
        long,
        action = ArgAction::Version,
        help = "Print version"
    )]
    version: (),
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    check: CheckArgs,
}

#[derive(Args)]
struct CheckArgs {
    #[arg(short, long, help = "Directory of the original target project with git")]
    target: Option<PathBuf>,
    #[arg(
        short,
        long,
        help = "Directory of the second project, that has the updated source code"
    )]
    source: Option<PathBuf>,
    #[arg(short, long, help = "Enable verbose debug output")]
    debug: bool,
    #[arg(short, long, help = "Specify a CSV file to write the output to")]
    output: Option<PathBuf>,
    #[arg(
        long,
        env = "GIT_UPGRADE_CHECKER_REV",
        default_value = DEFAULT_BASE_REVISION,
        help = "Revision the target project is compared against"
    )]
    rev: String,
    #[arg(long, help = "Do not highlight table rows")]
    no_color: bool,
    #[arg(long, help = "Do not page terminal output")]
    no_pager: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "version",
        about = "Print the version number of git-upgrade-checker"
    )]
    Version,
    #[command(
        name = "changed-files",
        about = "List the files changed by the last update of a project",
        long_about = "This command prints the paths changed since the base revision \
        (the previous position of HEAD by default), one per line."
    )]
    ChangedFiles {
        #[arg(short, long, help = "Directory of the project with git")]
        target: PathBuf,
        #[arg(
            long,
            env = "GIT_UPGRADE_CHECKER_REV",
            default_value = DEFAULT_BASE_REVISION,
            help = "Revision the project is compared against"
        )]
        rev: String,
    },
    #[command(
        name = "annotate-diff",
        about = "Annotate a unified diff with old and new line numbers",
        long_about = "This command reads a unified diff from the given file, or from stdin \
        when no file is given, and prints it with every changed line tagged by its line number."
    )]
    AnnotateDiff {
        #[arg(index = 1, help = "The diff file to annotate")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logger();

    match cli.command {
        Some(Commands::Version) => {
            println!("git-upgrade-checker version {VERSION}");
        }
        Some(Commands::ChangedFiles { target, rev }) => {
            changed_files(&GitCli::new(rev), &target, &mut std::io::stdout().lock())?;
        }
        Some(Commands::AnnotateDiff { file }) => {
            let mut stdout = std::io::stdout().lock();
            match file {
                Some(file) => {
                    let reader = std::fs::File::open(&file)
                        .with_context(|| format!("failed to open {}", file.display()))?;
                    annotate_diff(reader, &mut stdout)?;
                }
                None => annotate_diff(std::io::stdin().lock(), &mut stdout)?,
            }
        }
        None => check(cli.check)?,
    }

    Ok(())
}

fn check(args: CheckArgs) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let mode = OutputMode::select(args.debug, args.output);
    let config = match CheckerConfig::try_new(args.target, args.source, args.rev, mode) {
        Ok(config) => config,
        Err(e) => {
            Cli::command().print_help()?;
            return Err(e.into());
        }
    };

    let pager = (!args.no_pager && should_page()).then(Pager::new);
    let writer: Box<dyn Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let git = GitCli::new(config.base_revision());
    let checker = Checker::new(config, Box::new(git), writer);
    checker.check()?;

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}

fn should_page() -> bool {
    std::env::var_os("NO_PAGER").is_none() && std::io::stdout().is_terminal()
}
