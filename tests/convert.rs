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

    tests/convert.rs

    Conversion tests against the default and alternate geometries.
*/

mod common;

use common::{invertibility::*, *};
use lbachs::prelude::*;

#[test]
fn test_default_geometry_cases() {
    init();
    let geom = DiskGeometry::default();
    assert_eq!(geom.s(), DEFAULT_SECTORS_PER_TRACK);
    assert_eq!(geom.h(), DEFAULT_HEADS_PER_CYLINDER);

    assert_eq!(lba_to_chs(0, &geom), DiskChs::new(0, 0, 1));
    assert_eq!(lba_to_chs(17, &geom), DiskChs::new(0, 0, 18));
    assert_eq!(lba_to_chs(18, &geom), DiskChs::new(0, 1, 1));
    assert_eq!(lba_to_chs(35, &geom), DiskChs::new(0, 1, 18));
    assert_eq!(lba_to_chs(36, &geom), DiskChs::new(1, 0, 1));
    assert_eq!(chs_to_lba(1, 0, 1, &geom), Ok(36));
}

#[test]
fn test_default_geometry_invertibility() {
    init();
    test_invertibility(DiskGeometry::default(), 0..100_000);
}

#[test]
fn test_geometry_parameterization() {
    init();
    for geom in test_geometries() {
        test_invertibility(geom, 0..100_000);
    }
}

#[test]
fn test_inverse_consistency_all_geometries() {
    init();
    for geom in test_geometries() {
        // Keep the walk around 100k addresses per geometry.
        let cylinders = (100_000 / geom.sectors_per_cylinder()).clamp(1, 100);
        test_inverse_consistency(geom, cylinders);
    }
}

#[test]
fn test_matches_reference_formula() {
    init();
    for geom in test_geometries() {
        for lba in (0..10_000_000).step_by(7919) {
            let chs = lba_to_chs(lba, &geom);
            assert_eq!(reference_lba(chs, geom), lba);
        }
    }
}

#[test]
fn test_large_lbas() {
    init();
    let geom = DiskGeometry::new(255, 63).unwrap();
    for lba in [u32::MAX as u64, u32::MAX as u64 + 1, 1 << 48, u64::MAX - 1, u64::MAX] {
        let chs = lba_to_chs(lba, &geom);
        assert!(geom.contains(chs));
        assert_eq!(chs_to_lba(chs.c(), chs.h(), chs.s(), &geom), Ok(lba));
    }
}

#[test]
fn test_invalid_addresses() {
    init();
    let geom = DiskGeometry::default();

    assert!(matches!(
        chs_to_lba(0, 2, 1, &geom),
        Err(ChsError::InvalidAddress { .. })
    ));
    assert!(matches!(
        chs_to_lba(0, 0, 0, &geom),
        Err(ChsError::InvalidAddress { .. })
    ));
    assert!(matches!(
        chs_to_lba(0, 0, 19, &geom),
        Err(ChsError::InvalidAddress { .. })
    ));
    assert!(matches!(
        chs_to_lba(u64::MAX / 2, 1, 18, &geom),
        Err(ChsError::AddressOverflow(_))
    ));
}

#[test]
fn test_unchecked_parity() {
    init();
    let geom = DiskGeometry::default();

    // Normalized addresses agree with the checked conversion.
    assert_eq!(chs_to_lba_unchecked(1, 0, 1, &geom), 36);
    // A head beyond the geometry aliases into the next cylinder.
    assert_eq!(chs_to_lba_unchecked(0, 2, 1, &geom), 36);
    assert_eq!(lba_to_chs(36, &geom), DiskChs::new(1, 0, 1));
}

#[test]
fn test_chs_iter_sequential() {
    init();
    for geom in test_geometries() {
        let mut expected = 0;
        for chs in geom.chs_iter().take(20_000) {
            assert_eq!(chs.to_lba(&geom), Ok(expected));
            expected += 1;
        }
    }
}
