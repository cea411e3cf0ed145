//! Command-line interface implementation for the Bocadillo CLI.
//! Provides argument parsing and help text formatting using clap.

use clap::{ArgAction, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::context::ProjectName;
use crate::error::{default_error_handler, Error};

/// Command-line arguments structure.
#[derive(Parser, Debug)]
#[command(
    name = "bocadillo",
    about = "Standard development tooling for Bocadillo",
    long_about = None,
    disable_version_flag = true
)]
pub struct Args {
    /// Print the CLI version and the installed Bocadillo version
    #[arg(short = 'V', long, action = ArgAction::SetTrue)]
    pub version: bool,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a Bocadillo project
    Create(CreateArgs),
}

#[derive(ClapArgs, Debug)]
pub struct CreateArgs {
    /// Name of the project; hyphens become underscores in the package name
    #[arg(value_name = "NAME", value_parser = parse_project_name)]
    pub name: ProjectName,

    /// Directory where the project should be created.
    /// Created if it does not exist. Defaults to NAME.
    #[arg(short, long, value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Dry mode: does not write anything
    #[arg(long)]
    pub dry: bool,

    /// Never prompt; existing files are always skipped
    #[arg(long)]
    pub no_input: bool,
}

impl CreateArgs {
    /// Target location, falling back to the project name.
    pub fn location(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from(self.name.name()))
    }
}

fn parse_project_name(name: &str) -> Result<ProjectName, String> {
    ProjectName::new(name).map_err(|e| e.to_string())
}

fn print_help_and_exit() -> ! {
    let printed = Args::command()
        .help_template(
            r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
        )
        .print_help();
    if let Err(err) = printed {
        default_error_handler(Error::IoError(err));
    }
    std::process::exit(1);
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if no subcommand or version flag is given
/// * With clap's default error handling for argument errors, which show the
///   usage of the subcommand they belong to
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) if args.command.is_none() && !args.version => print_help_and_exit(),
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
