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

    crates/chstool/src/demo/mod.rs

    Convert a range of sequential LBAs to CHS and back, printing each step.
*/
use crate::args::GlobalOptions;
use anyhow::{bail, Error};
use lbachs::{chs_to_lba, lba_to_chs};

pub mod args;

pub(crate) fn run(global: &GlobalOptions, params: &args::DemoParams) -> Result<(), Error> {
    let geom = params.geometry.geometry()?;

    if params.start > params.end {
        bail!("Start LBA {} is greater than end LBA {}", params.start, params.end);
    }

    global.loud(|| println!("Geometry: {}", params.geometry));

    // Walk the sector cursor alongside the LBA as a cross-check.
    let mut cursor = Some(lba_to_chs(params.start, &geom));
    for lba in params.start..params.end {
        let chs = lba_to_chs(lba, &geom);
        let round_trip = chs_to_lba(chs.c(), chs.h(), chs.s(), &geom)?;

        global.loud(|| println!("{:>8} -> {} -> {}", lba, chs, round_trip));

        if round_trip != lba {
            bail!("LBA {} converted to {} but back to LBA {}", lba, chs, round_trip);
        }
        if cursor != Some(chs) {
            bail!("Sequential address {:?} does not match {} for LBA {}", cursor, chs, lba);
        }
        cursor = chs.next_sector(&geom);
    }

    println!(
        "Verified {} conversions with geometry {}",
        params.end - params.start,
        geom
    );
    Ok(())
}
