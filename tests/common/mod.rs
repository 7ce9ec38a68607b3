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

    tests/common/mod.rs

    Common support routines for tests
*/
#![allow(dead_code)]

pub mod invertibility;

use lbachs::prelude::*;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A selection of geometries to run property tests against: every standard floppy format plus
/// some hard-disk style and degenerate geometries.
pub fn test_geometries() -> Vec<DiskGeometry> {
    let mut geometries: Vec<DiskGeometry> = StandardFormat::list().iter().map(|f| f.geometry()).collect();

    for (h, s) in [(1, 1), (1, 63), (16, 63), (255, 63), (7, 1), (3, 13)] {
        geometries.push(DiskGeometry::new(h, s).unwrap());
    }
    geometries
}

/// Calculate an LBA the long way, by counting whole cylinders, whole tracks and sectors.
pub fn reference_lba(chs: DiskChs, geom: DiskGeometry) -> u64 {
    let cylinder_sectors = chs.c() * geom.h() as u64 * geom.s() as u64;
    let track_sectors = chs.h() as u64 * geom.s() as u64;
    cylinder_sectors + track_sectors + (chs.s() as u64 - 1)
}
