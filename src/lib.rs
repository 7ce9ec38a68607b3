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

    src/lib.rs

    Crate root. Defines the error type, default geometry constants and
    re-exports the public API.
*/

//! # lbachs
//!
//! lbachs converts between the two addressing schemes used to locate a sector on a mechanical
//! disk: Logical Block Addressing (LBA), a flat 0-based sector index, and Cylinder-Head-Sector
//! (CHS), a physical coordinate with 0-based cylinder and head and a 1-based sector id.
//!
//! Conversions are pure functions parameterized by a [DiskGeometry]. The default geometry is that
//! of a standard 1.44M 3.5" floppy disk (18 sectors per track, 2 heads).
//!
//! ```
//! use lbachs::prelude::*;
//!
//! let geom = DiskGeometry::default();
//! let chs = lba_to_chs(36, &geom);
//! assert_eq!(chs, DiskChs::new(1, 0, 1));
//! assert_eq!(chs_to_lba(1, 0, 1, &geom).unwrap(), 36);
//! ```

pub mod convert;
pub mod types;

use thiserror::Error;

pub use crate::{
    convert::{chs_to_lba, chs_to_lba_unchecked, lba_to_chs, GeometryConverter},
    types::{
        chs::{DiskCh, DiskChs, DiskChsIterator},
        geometry::DiskGeometry,
        standard_format::{StandardFormat, StandardFormatParam},
    },
};

/// A logical block address. LBAs are 0-based and can never be negative.
pub type Lba = u64;

/// The default number of sectors per track, matching a 1.44M 3.5" floppy disk.
pub const DEFAULT_SECTORS_PER_TRACK: u32 = 18;
/// The default number of heads per cylinder, matching a 1.44M 3.5" floppy disk.
pub const DEFAULT_HEADS_PER_CYLINDER: u32 = 2;

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum ChsError {
    #[error("Invalid disk geometry [h:{h} s:{s}]: heads and sectors per track must be non-zero")]
    InvalidGeometry { h: u32, s: u32 },
    #[error("The address {chs} is not a valid sector for geometry {geometry}")]
    InvalidAddress { chs: DiskChs, geometry: DiskGeometry },
    #[error("The address {0} cannot be represented as an LBA")]
    AddressOverflow(DiskChs),
}

pub mod prelude {
    pub use crate::{
        convert::{chs_to_lba, chs_to_lba_unchecked, lba_to_chs, GeometryConverter},
        types::{
            chs::{DiskCh, DiskChs},
            geometry::DiskGeometry,
            standard_format::{StandardFormat, StandardFormatParam},
        },
        ChsError,
        Lba,
        DEFAULT_HEADS_PER_CYLINDER,
        DEFAULT_SECTORS_PER_TRACK,
    };
}
