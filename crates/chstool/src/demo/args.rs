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

    crates/chstool/src/demo/args.rs

    Arguments for the demo command.
*/
use crate::args::*;
use bpaf::{construct, long, Parser};
use lbachs::Lba;

#[derive(Clone, Debug)]
pub(crate) struct DemoParams {
    pub(crate) geometry: GeometryParam,
    pub(crate) start: Lba,
    pub(crate) end: Lba,
}

pub(crate) fn demo_parser() -> impl Parser<DemoParams> {
    let geometry = geometry_parser();
    let start = long("start")
        .argument::<Lba>("START_LBA")
        .help("First LBA to convert")
        .fallback(1);
    let end = long("end")
        .argument::<Lba>("END_LBA")
        .help("LBA to stop at (exclusive)")
        .fallback(1000);

    construct!(DemoParams { geometry, start, end })
}
