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

    crates/chstool/src/to_lba/args.rs

    Arguments for the to-lba command.
*/
use crate::args::*;
use bpaf::{construct, long, Parser};

#[derive(Clone, Debug)]
pub(crate) struct ToLbaParams {
    pub(crate) geometry: GeometryParam,
    pub(crate) cylinder: u64,
    pub(crate) head: u32,
    pub(crate) sector: u32,
    pub(crate) unchecked: bool,
}

fn unchecked_parser() -> impl Parser<bool> {
    long("unchecked")
        .help("Skip validation of the head and sector id. Out of range values will not round trip")
        .switch()
}

pub(crate) fn to_lba_parser() -> impl Parser<ToLbaParams> {
    let geometry = geometry_parser();
    let cylinder = cylinder_parser();
    let head = head_parser();
    let sector = sector_parser();
    let unchecked = unchecked_parser();

    construct!(ToLbaParams {
        geometry,
        cylinder,
        head,
        sector,
        unchecked
    })
}
