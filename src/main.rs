//! Bocadillo CLI entry point.
//! Handles command-line argument parsing and wires the writer, templates
//! and project generator together.

use bocadillo_cli::{
    cli::{get_args, Command, CreateArgs},
    context::Context,
    error::{default_error_handler, Result},
    framework::{detect_version, version_message},
    project::Project,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    style::warning,
    templates::Templates,
    writer::Writer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if args.version {
        println!("{}", version_message(detect_version().as_deref()));
        return;
    }

    let result = match args.command {
        Some(Command::Create(create)) => run_create(create),
        None => Ok(()),
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}

/// Scaffolds a new project.
///
/// # Flow
/// 1. Resolves the target location and rendering context
/// 2. Warns when running in dry mode
/// 3. Writes every manifest entry and prints the summary
fn run_create(args: CreateArgs) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();

    let location = args.location();
    let context = Context::new(&args.name);
    let templates = Templates::new(&engine, &context);
    let writer = Writer::new(&prompt, args.dry, args.no_input);

    if writer.is_dry() {
        println!("{}", warning("Warning: running in dry mode. No files will be written."));
    }

    Project::new(location, context).create(&writer, &templates)?;
    Ok(())
}
