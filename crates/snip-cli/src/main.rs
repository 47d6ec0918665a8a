//! snip CLI
//!
//! Moves named blocks of lines between source files and a snippet file.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::AppContext;
use error::{CliError, Result};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        return Err(CliError::user(
            "No command given. Run 'snip --help' for available commands.",
        ));
    };

    let cwd = std::env::current_dir()?;
    let ctx = AppContext::resolve(&cwd, cli.config.as_deref(), cli.direct)?;

    execute_command(&ctx, command)
}

fn execute_command(ctx: &AppContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Extract {
            source_file,
            start_line,
            end_line,
            new_template_name,
            snippet_file,
        } => {
            let snippet_file = ctx.snippet_file(snippet_file)?;
            commands::run_extract(
                ctx,
                &source_file,
                start_line,
                end_line,
                &new_template_name,
                &snippet_file,
            )
        }
        Commands::Insert {
            template_name,
            target_file,
            line_number,
            snippet_file,
        } => {
            let snippet_file = ctx.snippet_file(snippet_file)?;
            commands::run_insert(ctx, &template_name, &target_file, line_number, &snippet_file)
        }
        Commands::List { snippet_file } => {
            let snippet_file = ctx.snippet_file(snippet_file)?;
            commands::run_list(&snippet_file)
        }
        Commands::Show {
            template_name,
            snippet_file,
        } => {
            let snippet_file = ctx.snippet_file(snippet_file)?;
            commands::run_show(&template_name, &snippet_file)
        }
        Commands::Delete {
            template_name,
            snippet_file,
        } => {
            let snippet_file = ctx.snippet_file(snippet_file)?;
            commands::run_delete(ctx, &template_name, &snippet_file)
        }
        Commands::Rename {
            old_template_name,
            new_template_name,
            snippet_file,
        } => {
            let snippet_file = ctx.snippet_file(snippet_file)?;
            commands::run_rename(ctx, &old_template_name, &new_template_name, &snippet_file)
        }
    }
}
