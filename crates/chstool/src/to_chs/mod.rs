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

    crates/chstool/src/to_chs/mod.rs

    Convert an LBA sector address into a CHS address.
*/
use crate::args::GlobalOptions;
use anyhow::Error;
use lbachs::lba_to_chs;

pub mod args;

pub(crate) fn run(global: &GlobalOptions, params: &args::ToChsParams) -> Result<(), Error> {
    let geom = params.geometry.geometry()?;

    if let Some(format) = params.geometry.standard_format() {
        if !format.contains_lba(params.lba) {
            log::warn!(
                "LBA {} is beyond the last sector of a {} disk ({} sectors)",
                params.lba,
                format,
                format.total_sectors()
            );
        }
    }

    let chs = lba_to_chs(params.lba, &geom);

    global.loud(|| println!("Geometry: {}", params.geometry));
    println!("{}", chs);
    Ok(())
}
