/*
    lbachs
    https://github.com/dbalsom/lbachs

    Copyright 2024 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    crates/chstool/src/main.rs

    A command line utility for converting between LBA and CHS sector addresses.
*/

pub mod args;
pub mod demo;
pub mod formats;
pub mod to_chs;
pub mod to_lba;

use anyhow::Error;
use bpaf::Parser;

use crate::args::Command;
use args::command_parser;

fn main() -> Result<(), Error> {
    env_logger::init();

    let app_params = command_parser().run();

    let command_result = match &app_params.command {
        Command::Version => {
            println!("chstool v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Formats => formats::run(&app_params.global),
        Command::ToChs(params) => to_chs::run(&app_params.global, params),
        Command::ToLba(params) => to_lba::run(&app_params.global, params),
        Command::Demo(params) => demo::run(&app_params.global, params),
    };

    match command_result {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("{}", failure_report(&app_params.command, &e));
            std::process::exit(1);
        }
    }
}

/// Format a failed command's error and its causes for display on stderr.
pub(crate) fn failure_report(command: &Command, e: &Error) -> String {
    let mut report = format!("Command '{}' failed: {}", command, e);
    for cause in e.chain().skip(1) {
        report.push_str(&format!("\nCaused by: {}", cause));
    }
    report
}
