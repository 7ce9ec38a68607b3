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

    tests/common/invertibility.rs

    Round-trip checks between LBA and CHS addresses.
*/

//! Conversion from LBA to CHS and back must be lossless for any valid geometry, and every CHS
//! produced must be normalized for the geometry it was produced with.

use lbachs::prelude::*;
use std::ops::Range;

pub fn test_invertibility(geom: DiskGeometry, lbas: Range<Lba>) {
    println!("Testing LBAs {:?} with geometry {}...", lbas, geom);

    let mut last_c = 0;
    for lba in lbas {
        let chs = lba_to_chs(lba, &geom);

        assert!(chs.h() < geom.h(), "head out of range: {} for {}", chs, geom);
        assert!(
            (1..=geom.s()).contains(&chs.s()),
            "sector out of range: {} for {}",
            chs,
            geom
        );
        assert!(chs.c() >= last_c, "cylinder decreased at lba {}: {}", lba, chs);
        last_c = chs.c();

        let (c, h, s) = chs.get();
        assert_eq!(chs_to_lba(c, h, s, &geom), Ok(lba), "round trip failed for {}", chs);
    }
}

/// Walk every normalized address for the first `cylinders` cylinders and check that converting it
/// to an LBA and back produces the same address.
pub fn test_inverse_consistency(geom: DiskGeometry, cylinders: u64) {
    println!("Testing {} cylinders with geometry {}...", cylinders, geom);

    let mut expected_lba = 0;
    for c in 0..cylinders {
        for h in 0..geom.h() {
            for s in 1..=geom.s() {
                let lba = chs_to_lba(c, h, s, &geom).unwrap();
                assert_eq!(lba, expected_lba);
                assert_eq!(lba_to_chs(lba, &geom), DiskChs::new(c, h, s));
                expected_lba += 1;
            }
        }
    }
}
