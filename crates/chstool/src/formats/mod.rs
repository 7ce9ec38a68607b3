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

    crates/chstool/src/formats/mod.rs

    List the supported standard disk formats.
*/
use crate::args::GlobalOptions;
use anyhow::Error;
use lbachs::StandardFormatParam;

pub(crate) fn run(global: &GlobalOptions) -> Result<(), Error> {
    global.loud(|| {
        println!("{:<10} {:<16} {:>9} {:>6} {:>4} {:>8}", "name", "format", "cylinders", "heads", "spt", "sectors");
        println!("{}", "-".repeat(58));
    });

    for (name, format) in StandardFormatParam::list() {
        let geom = format.geometry();
        println!(
            "{:<10} {:<16} {:>9} {:>6} {:>4} {:>8}",
            name,
            format.to_string(),
            format.cylinders(),
            geom.h(),
            geom.s(),
            format.total_sectors()
        );
    }
    Ok(())
}
