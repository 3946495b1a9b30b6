// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Loader and viewer for compiled terminfo files

pub mod catalog;
pub mod config;
pub mod load;
pub mod view;

pub use catalog::{Class, capname_of, name_of, ordinal_of};
pub use config::{Cli, Config};
pub use load::{CapabilityRecord, Layout, LoadError, load, load_with};
pub use view::{Action, Row, Value, ViewState};
