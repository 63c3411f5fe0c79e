// Mon Oct 19 2026 - Alex

use super::shell::{Shell, ShellExit};
use super::theme::Theme;
use crate::commands::GOOD_BYE;
use crate::config::Config;
use anyhow::Context;
use clap::Parser;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "contact-assistant")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Interactive phone book assistant", long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = "warn", help = "Log level written to stderr")]
    pub log_level: String,

    #[arg(long, help = "Disable colored replies")]
    pub no_color: bool,
}

impl Args {
    pub fn to_config(&self) -> Config {
        let use_color = !self.no_color && atty::is(atty::Stream::Stdout);
        Config::new()
            .with_log_level(self.log_level.clone())
            .with_color(use_color)
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}

pub fn setup_logging(config: &Config) {
    env_logger::Builder::new()
        .filter_level(config.level_filter())
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn install_interrupt_handler(theme: Theme) -> anyhow::Result<()> {
    ctrlc::set_handler(move || {
        log::debug!("Interrupted");
        println!();
        println!("{}", theme.paint_farewell(GOOD_BYE));
        std::process::exit(0);
    })
    .context("failed to install Ctrl-C handler")
}

pub fn run() -> anyhow::Result<()> {
    let args = parse_args();
    let config = args.to_config();
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    setup_logging(&config);
    log::debug!("Effective config: {}", serde_json::to_string(&config)?);

    install_interrupt_handler(Theme::default().with_color(config.use_color))?;

    // Stdout stays unlocked between writes so the interrupt handler can print.
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), &config);

    let exit = shell.run().context("terminal I/O failed")?;
    if exit == ShellExit::EndOfInput {
        log::info!("Stopped at end of input");
    }
    Ok(())
}
