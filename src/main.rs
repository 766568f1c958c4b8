use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command,
};
use colored::Colorize;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("project")
                .short('p')
                .long("project")
                .help("Destination directory for the new project"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    // An omitted flag behaves like an empty path and trips the library's
    // precondition check, so the diagnostic has a single source of truth.
    let project = matches
        .get_one::<String>("project")
        .map(String::as_str)
        .unwrap_or_default();

    goforge::create_project(project)?;

    println!("Project {} has been initialized", project.bold());

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
