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

    tests/standard_format.rs

    Conversions over the full extent of each standard disk format.
*/

mod common;

use common::{invertibility::*, *};
use lbachs::prelude::*;

#[test]
fn test_standard_formats_full_disk() {
    init();
    for format in StandardFormat::list() {
        println!("Testing format {}...", format);
        let geom = format.geometry();
        test_invertibility(geom, 0..format.total_sectors());
        test_inverse_consistency(geom, format.cylinders() as u64);

        let last = lba_to_chs(format.total_sectors() - 1, &geom);
        assert_eq!(last, format.last_sector());
    }
}

#[test]
fn test_standard_format_capacity() {
    init();
    let format = StandardFormat::PcFloppy1440;
    assert!(format.contains_lba(2879));
    assert!(!format.contains_lba(2880));
    assert_eq!(lba_to_chs(2879, &format.geometry()), DiskChs::new(79, 1, 18));

    // Conversion itself is not bounded by media capacity.
    assert_eq!(lba_to_chs(2880, &format.geometry()), DiskChs::new(80, 0, 1));
}

#[test]
fn test_converter_from_standard_format() {
    init();
    let converter = GeometryConverter::new(StandardFormat::PcFloppy360.into());
    assert_eq!(converter.geometry(), DiskGeometry::new(2, 9).unwrap());
    assert_eq!(converter.lba_to_chs(719), DiskChs::new(39, 1, 9));
    assert_eq!(converter.chs_to_lba((39, 1, 9)), Ok(719));
}
