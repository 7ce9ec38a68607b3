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

    crates/chstool/src/to_lba/mod.rs

    Convert a CHS sector address into an LBA address.
*/
use crate::args::GlobalOptions;
use anyhow::{Context, Error};
use lbachs::DiskChs;

pub mod args;

pub(crate) fn run(global: &GlobalOptions, params: &args::ToLbaParams) -> Result<(), Error> {
    let geom = params.geometry.geometry()?;
    let chs = DiskChs::new(params.cylinder, params.head, params.sector);

    let lba = if params.unchecked {
        if !geom.contains(chs) {
            log::warn!("Address {} is not normalized for geometry {}", chs, geom);
        }
        chs.to_lba_unchecked(&geom)
    }
    else {
        chs.to_lba(&geom)
            .with_context(|| format!("Converting {} with {}", chs, params.geometry))?
    };

    if let Some(format) = params.geometry.standard_format() {
        if !format.contains(chs) {
            log::warn!("Address {} is beyond the last sector of a {} disk", chs, format);
        }
    }

    global.loud(|| println!("Geometry: {}", params.geometry));
    println!("{}", lba);
    Ok(())
}
