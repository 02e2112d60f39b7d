use clap::{CommandFactory, Parser};
use renamecfd::{resolve_inputs, Cli, OutputFormatter, OutputMode, RenameCfd, RenameCfdError, UserFriendlyError};
use std::process;

fn main() {
    setup_logging();
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    if !cli.has_inputs() {
        if let Err(e) = Cli::command().print_help() {
            print_startup_error(&RenameCfdError::Io(e));
            return 1;
        }
        println!();
        return 0;
    }

    let app = match RenameCfd::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    let inputs = match resolve_inputs(&cli.files) {
        Ok(inputs) => inputs,
        Err(e) => {
            app.handle_error(&e);
            return 1;
        }
    };

    // Missing files and unreadable invoices are reported per file; they do
    // not change the exit status.
    match app.run(&inputs) {
        Ok(_) => 0,
        Err(e) => {
            app.handle_error(&e);
            1
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "renamecfd.toml".to_string());

    match RenameCfd::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  renamecfd --config {} <archivocfd.xml>", config_path);
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &RenameCfdError) {
    let formatter = OutputFormatter::new(OutputMode::Human, false, false);
    formatter.print_user_friendly_error(error);
}

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("renamecfd=warn"))
        .format_timestamp(None)
        .init();
}
