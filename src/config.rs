// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Command line and environment configuration of the viewer

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::load::Layout;

/// File shown when no path is given
pub const DEFAULT_PATH: &str = "/usr/share/terminfo/x/xterm";

/// Default `tracing` filter directive
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Sections without padding
    #[default]
    Packed,
    /// Numbers aligned to an even offset, as written by ncurses
    Aligned,
}

impl From<LayoutArg> for Layout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Packed => Self::Packed,
            LayoutArg::Aligned => Self::Aligned,
        }
    }
}

/// Full-screen viewer for compiled terminfo files
#[derive(Parser, Debug)]
#[command(name = "tiview", version, about, long_about = None)]
pub struct Cli {
    /// Compiled terminfo file to show
    #[arg(env = "TIVIEW_FILE", default_value = DEFAULT_PATH)]
    pub path: PathBuf,

    /// Section layout of the file
    #[arg(short, long, value_enum, default_value_t)]
    pub layout: LayoutArg,

    /// Hide capabilities the file doesn't set
    #[arg(short, long)]
    pub present_only: bool,

    /// Write log messages to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `terminfo_view=trace`
    #[arg(long, env = "TIVIEW_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

/// Resolved viewer settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub layout: Layout,
    pub present_only: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Cli {
    #[must_use]
    pub fn into_config(self) -> Config {
        Config {
            path: self.path,
            layout: self.layout.into(),
            present_only: self.present_only,
            log_file: self.log_file,
            log_level: self.log_level,
        }
    }
}
