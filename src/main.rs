use std::process::ExitCode;

use clap::Parser;
use date_md::constants::ENV_WORKSPACES;
use date_md::create::is_name_taken;
use date_md::{util, Cli, Command, Config, EditorPresenter, Presenter, ResolveContext};
use env_logger::Env;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref());
    let ctx = build_context(&cli, &config);
    let command = cli.command();

    let result = match &command {
        Command::New { target } => {
            let target = date_md::pick_target(target.clone(), &cli.selection);
            let presenter = if cli.no_open {
                None
            } else {
                let focus = cli.focus.or(config.focus).unwrap_or_default();
                EditorPresenter::from_env(cli.editor.as_deref().or(config.editor.as_deref()), focus)
            };
            let presenter = presenter.as_ref().map(|p| p as &dyn Presenter);
            cmd::new::run(&ctx, target.as_deref(), presenter, cli.json)
        }
        Command::Resolve { target } => {
            let target = date_md::pick_target(target.clone(), &cli.selection);
            cmd::resolve::run(&ctx, target.as_deref(), cli.json)
        }
        Command::List { target } => {
            let target = date_md::pick_target(target.clone(), &cli.selection);
            cmd::list::run(&ctx, target.as_deref(), cli.json)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let action = match &command {
                Command::New { .. } if e.is_presentation() => "Failed to open file",
                Command::New { .. } => "Failed to create file",
                Command::Resolve { .. } => "Failed to resolve note location",
                Command::List { .. } => "Failed to list notes",
            };
            eprintln!("error: {}: {}", action, e);
            if is_name_taken(&e) {
                eprintln!("  Another note took this name meanwhile; run the command again.");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Workspace roots: --workspace, then $DATE_MD_WORKSPACES, then config
fn build_context(cli: &Cli, config: &Config) -> ResolveContext {
    let workspaces = if !cli.workspaces.is_empty() {
        cli.workspaces.clone()
    } else {
        std::env::var_os(ENV_WORKSPACES)
            .map(|raw| util::split_path_list(&raw))
            .filter(|roots| !roots.is_empty())
            .unwrap_or_else(|| config.workspaces.clone())
    };

    ResolveContext::new(cli.active.as_deref(), workspaces)
}

mod cmd {
    pub mod list;
    pub mod new;
    pub mod resolve;
}
