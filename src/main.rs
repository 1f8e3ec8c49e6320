use clap::Parser;
use emoji_strip::{
    logging, Cli, EmojiStrip, OutputFormatter, OutputMode, StripError, StripReport,
    UserFriendlyError,
};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();
    logging::init(cli.verbosity_level());

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let app = match EmojiStrip::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e, OutputMode::from(&cli.output_format));
            return exit_code_for_error(&e);
        }
    };

    tracing::debug!(config = ?app.config(), "starting run");

    match app.run() {
        Ok(report) => exit_code_for_report(&report),
        Err(e) => {
            app.handle_error(&e);
            exit_code_for_error(&e)
        }
    }
}

fn exit_code_for_report(report: &StripReport) -> i32 {
    if report.interrupted {
        130 // Interrupted (SIGINT)
    } else if report.failed_count() > 0 {
        2 // Finished, some files failed
    } else {
        0
    }
}

fn exit_code_for_error(error: &StripError) -> i32 {
    match error {
        StripError::Cancelled => 130,
        StripError::Config { .. }
        | StripError::InvalidEmojiSet { .. }
        | StripError::UnsupportedEncoding { .. } => 3,
        _ => 1, // Directory listing and general errors
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "emoji-strip.toml".to_string());

    match EmojiStrip::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  emoji-strip --config {}", config_path);
            println!("\nEdit the file to set target_directory and emoji_set.");
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

fn print_startup_error(error: &StripError, mode: OutputMode) {
    let formatter = OutputFormatter::new(mode, 0, false);
    formatter.print_user_friendly_error(error);
}
