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

    src/convert.rs

    LBA <-> CHS conversion functions.
*/

//! The `convert` module provides the conversion functions between logical block addresses and
//! cylinder-head-sector addresses, either as free functions taking a [DiskGeometry] or bound to
//! a single geometry with a [GeometryConverter].
//!
//! Given a geometry with `hpc` heads per cylinder and `spt` sectors per track:
//!
//! ```text
//! c   = lba / (hpc * spt)
//! h   = (lba / spt) % hpc
//! s   = (lba % spt) + 1
//! lba = (c * hpc + h) * spt + (s - 1)
//! ```

use crate::{
    types::{chs::DiskChs, geometry::DiskGeometry},
    ChsError,
    Lba,
};

/// Convert an LBA into a [DiskChs] address for the specified geometry.
/// The result is always normalized for `geom`.
pub fn lba_to_chs(lba: Lba, geom: &DiskGeometry) -> DiskChs {
    DiskChs::from_lba(lba, geom)
}

/// Convert a cylinder, head and sector id into an LBA for the specified geometry.
/// # Returns:
/// * `Err(ChsError::InvalidAddress)` if `h` or `s` is out of range for `geom`.
/// * `Err(ChsError::AddressOverflow)` if the LBA does not fit in an [Lba].
pub fn chs_to_lba(c: u64, h: u32, s: u32, geom: &DiskGeometry) -> Result<Lba, ChsError> {
    DiskChs::new(c, h, s).to_lba(geom)
}

/// Convert a cylinder, head and sector id into an LBA without validating the address.
/// See [DiskChs::to_lba_unchecked].
pub fn chs_to_lba_unchecked(c: u64, h: u32, s: u32, geom: &DiskGeometry) -> Lba {
    DiskChs::new(c, h, s).to_lba_unchecked(geom)
}

/// A converter bound to a single [DiskGeometry].
///
/// Several converters with different geometries may be used side by side.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryConverter {
    geom: DiskGeometry,
}

impl From<DiskGeometry> for GeometryConverter {
    fn from(geom: DiskGeometry) -> Self {
        Self { geom }
    }
}

impl GeometryConverter {
    pub fn new(geom: DiskGeometry) -> Self {
        Self { geom }
    }

    /// Create a converter from a head count and a sector-per-track count.
    pub fn try_new(h: u32, s: u32) -> Result<Self, ChsError> {
        Ok(Self {
            geom: DiskGeometry::new(h, s)?,
        })
    }

    #[inline]
    pub fn geometry(&self) -> DiskGeometry {
        self.geom
    }

    /// Convert an LBA into a [DiskChs] address.
    #[inline]
    pub fn lba_to_chs(&self, lba: Lba) -> DiskChs {
        DiskChs::from_lba(lba, &self.geom)
    }

    /// Convert a [DiskChs] address into an LBA, validating the head and sector id.
    #[inline]
    pub fn chs_to_lba(&self, chs: impl Into<DiskChs>) -> Result<Lba, ChsError> {
        chs.into().to_lba(&self.geom)
    }

    #[inline]
    pub fn chs_to_lba_unchecked(&self, chs: impl Into<DiskChs>) -> Lba {
        chs.into().to_lba_unchecked(&self.geom)
    }
}
