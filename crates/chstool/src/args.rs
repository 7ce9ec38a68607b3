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

    crates/chstool/src/args.rs

    Command line argument parsers shared by all commands.
*/

use std::{
    fmt::{Display, Formatter},
    io::Write,
};

use crate::{
    demo::args::{demo_parser, DemoParams},
    to_chs::args::{to_chs_parser, ToChsParams},
    to_lba::args::{to_lba_parser, ToLbaParams},
};
use bpaf::*;
use lbachs::prelude::*;

#[derive(Clone, Debug)]
pub(crate) enum Command {
    Version,
    Formats,
    ToChs(ToChsParams),
    ToLba(ToLbaParams),
    Demo(DemoParams),
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Version => write!(f, "version"),
            Command::Formats => write!(f, "formats"),
            Command::ToChs(_) => write!(f, "to-chs"),
            Command::ToLba(_) => write!(f, "to-lba"),
            Command::Demo(_) => write!(f, "demo"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct AppParams {
    pub global:  GlobalOptions,
    pub command: Command,
}

#[derive(Debug)]
pub struct GlobalOptions {
    pub silent: bool,
}

impl GlobalOptions {
    pub fn loud<F: FnMut()>(&self, mut f: F) {
        if !self.silent {
            f();
            let _ = std::io::stdout().flush();
        }
    }
}

/// The disk geometry a conversion command should use, either a named standard format or an
/// explicit head and sector-per-track count.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum GeometryParam {
    Standard(StandardFormatParam),
    Explicit { heads: u32, spt: u32 },
}

impl Default for GeometryParam {
    fn default() -> Self {
        GeometryParam::Standard(StandardFormat::default().into())
    }
}

impl Display for GeometryParam {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryParam::Standard(param) => write!(f, "{} ({})", param, param.0),
            GeometryParam::Explicit { heads, spt } => write!(f, "{} heads, {} sectors per track", heads, spt),
        }
    }
}

impl GeometryParam {
    pub(crate) fn geometry(&self) -> Result<DiskGeometry, ChsError> {
        match self {
            GeometryParam::Standard(param) => Ok(param.0.geometry()),
            GeometryParam::Explicit { heads, spt } => DiskGeometry::new(*heads, *spt),
        }
    }

    pub(crate) fn standard_format(&self) -> Option<StandardFormat> {
        match self {
            GeometryParam::Standard(param) => Some(param.0),
            GeometryParam::Explicit { .. } => None,
        }
    }
}

pub fn global_options_parser() -> impl Parser<GlobalOptions> {
    let silent = long("silent")
        .help("Suppress all output except required output")
        .switch(); // Switch returns a bool, true if the flag is present

    construct!(GlobalOptions { silent })
}

pub(crate) fn command_parser() -> impl Parser<AppParams> {
    let global = global_options_parser();

    let version = pure(Command::Version)
        .to_options()
        .command("version")
        .help("Display version information and exit");

    let formats = pure(Command::Formats)
        .to_options()
        .command("formats")
        .help("List the standard disk formats and their geometry");

    let to_chs = construct!(Command::ToChs(to_chs_parser()))
        .to_options()
        .command("to-chs")
        .help("Convert an LBA sector address to a CHS address");

    let to_lba = construct!(Command::ToLba(to_lba_parser()))
        .to_options()
        .command("to-lba")
        .help("Convert a CHS sector address to an LBA address");

    let demo = construct!(Command::Demo(demo_parser()))
        .to_options()
        .command("demo")
        .help("Convert a range of LBAs to CHS and back, verifying each round trip");

    let command = construct!([version, formats, to_chs, to_lba, demo]);

    construct!(AppParams { global, command })
}

pub(crate) fn standard_format_parser() -> impl Parser<StandardFormatParam> {
    let valid_formats = StandardFormatParam::list()
        .iter()
        .map(|(param_name, desc)| format!(" {}\t({})", param_name, desc))
        .collect::<Vec<String>>()
        .join("\n");

    long("disk_format")
        .help(
            format!(
                "Specify a standard disk format.\n Valid values include:\n{}",
                valid_formats
            )
            .as_str(),
        )
        .argument::<String>("STANDARD_DISK_FORMAT")
        .parse(|input| input.parse())
}

pub(crate) fn geometry_parser() -> impl Parser<GeometryParam> {
    let standard = standard_format_parser().optional();

    let heads = long("heads")
        .argument::<u32>("HEADS")
        .help("Specify the number of heads per cylinder (requires --spt)")
        .optional();
    let spt = long("spt")
        .argument::<u32>("SECTORS_PER_TRACK")
        .help("Specify the number of sectors per track (requires --heads)")
        .optional();

    // Each flag is parsed on its own so an incomplete pair reports what is missing.
    construct!(standard, heads, spt).parse(|(standard, heads, spt)| match (standard, heads, spt) {
        (None, None, None) => Ok(GeometryParam::default()),
        (Some(param), None, None) => Ok(GeometryParam::Standard(param)),
        (None, Some(heads), Some(spt)) => Ok(GeometryParam::Explicit { heads, spt }),
        (None, Some(_), None) => Err("--heads requires --spt to also be specified"),
        (None, None, Some(_)) => Err("--spt requires --heads to also be specified"),
        (Some(_), _, _) => Err("--disk_format cannot be combined with --heads or --spt"),
    })
}

pub(crate) fn cylinder_parser() -> impl Parser<u64> {
    long("cylinder")
        .short('c')
        .argument::<u64>("CYLINDER")
        .help("Specify the cylinder number (0-based)")
}

pub(crate) fn head_parser() -> impl Parser<u32> {
    long("head")
        .argument::<u32>("HEAD")
        .help("Specify the head number (0-based)")
}

pub(crate) fn sector_parser() -> impl Parser<u32> {
    long("sector")
        .short('s')
        .argument::<u32>("SECTOR")
        .help("Specify the sector id (1-based)")
}
