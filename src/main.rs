// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fs::File, sync::Mutex};

use anyhow::Context;
use clap::Parser;
use terminfo_view::{Cli, Config, load_with};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod ui;

fn log_filter(directives: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(directives).with_context(|| format!("Invalid log filter {directives:?}"))
}

// The terminal belongs to the UI, so logs only go to a file
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(log_file) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(log_file)
        .with_context(|| format!("Cannot create log file {}", log_file.display()))?;
    tracing_subscriber::registry()
        .with(log_filter(&config.log_level)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    init_logging(&config)?;

    let record = load_with(&config.path, config.layout)?;
    let exit = ui::run(&record, &config).context("Terminal UI failed")?;
    tracing::info!(?exit, "viewer closed");
    if exit == ui::Exit::Signal {
        anyhow::bail!("Terminated by signal");
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn log_filters() {
        assert!(log_filter("warn").is_ok());
        assert!(log_filter("terminfo_view=trace,info").is_ok());
        let err = log_filter("terminfo_view=loud").unwrap_err();
        assert!(err.to_string().contains("terminfo_view=loud"));
    }
}
