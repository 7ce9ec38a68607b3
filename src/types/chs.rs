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

    src/types/chs.rs

    Cylinder-Head-Sector address types.
*/

//! The `chs` module defines structures for working with Cylinder-Head-Sector (CHS) addresses.

use crate::{types::geometry::DiskGeometry, ChsError, Lba};
use std::fmt::Display;

/// A structure representing a physical sector address:
///  - Cylinder (c), 0-based
///  - Head (h), 0-based
///  - Sector ID (s), 1-based
///
/// A `DiskChs` produced by [DiskChs::from_lba] is always normalized for the geometry it was
/// produced with. A `DiskChs` built by hand may not be; see [DiskGeometry::contains].
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiskChs {
    pub(crate) c: u64,
    pub(crate) h: u32,
    pub(crate) s: u32,
}

impl Default for DiskChs {
    fn default() -> Self {
        Self { c: 0, h: 0, s: 1 }
    }
}

impl From<(u64, u32, u32)> for DiskChs {
    fn from((c, h, s): (u64, u32, u32)) -> Self {
        Self { c, h, s }
    }
}

impl From<DiskChs> for (u64, u32, u32) {
    fn from(chs: DiskChs) -> Self {
        (chs.c, chs.h, chs.s)
    }
}

impl From<(DiskCh, u32)> for DiskChs {
    fn from((ch, s): (DiskCh, u32)) -> Self {
        Self {
            c: ch.c(),
            h: ch.h(),
            s,
        }
    }
}

impl Display for DiskChs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[c:{:2} h:{} s:{:3}]", self.c, self.h, self.s)
    }
}

impl DiskChs {
    /// Create a new `DiskChs` structure from cylinder, head and sector id components.
    pub fn new(c: u64, h: u32, s: u32) -> Self {
        Self { c, h, s }
    }
    /// Return the cylinder, head and sector id components in a tuple.
    #[inline]
    pub fn get(&self) -> (u64, u32, u32) {
        (self.c, self.h, self.s)
    }
    /// Return the cylinder (c) field.
    #[inline]
    pub fn c(&self) -> u64 {
        self.c
    }
    /// Return the head (h) field.
    #[inline]
    pub fn h(&self) -> u32 {
        self.h
    }
    /// Return the sector id (s) field.
    #[inline]
    pub fn s(&self) -> u32 {
        self.s
    }
    /// Return a [DiskCh] structure representing the cylinder and head components of a `DiskChs`.
    #[inline]
    pub fn ch(&self) -> DiskCh {
        DiskCh::new(self.c, self.h)
    }

    /// Convert an LBA sector address into a [DiskChs].
    /// This conversion is total: every LBA maps to a normalized address. The media capacity is
    /// not checked.
    /// # Arguments:
    /// * `lba` - The LBA sector address to convert.
    /// * `geom` - A [DiskGeometry], representing the number of heads and sectors per track.
    pub fn from_lba(lba: Lba, geom: &DiskGeometry) -> DiskChs {
        let hpc = geom.h() as u64;
        let spt = geom.s() as u64;
        let c = lba / geom.sectors_per_cylinder();
        let h = (lba / spt) % hpc;
        let s = (lba % spt) + 1;

        // h < hpc and s <= spt, both of which came from u32.
        let chs = DiskChs::from((c, h as u32, s as u32));
        log::trace!("from_lba(): {} -> {} with geometry {}", lba, chs, geom);
        chs
    }

    /// Convert a [DiskChs] into an LBA sector address.
    /// # Arguments:
    /// * `geom` - A [DiskGeometry], representing the number of heads and sectors per track.
    /// # Returns:
    /// * `Ok(Lba)` representing the resulting LBA.
    /// * `Err(ChsError::InvalidAddress)` if the head or sector id is out of range for `geom`.
    /// * `Err(ChsError::AddressOverflow)` if the resulting LBA does not fit in an [Lba].
    pub fn to_lba(&self, geom: &DiskGeometry) -> Result<Lba, ChsError> {
        if !geom.contains(*self) {
            return Err(ChsError::InvalidAddress {
                chs: *self,
                geometry: *geom,
            });
        }
        let hpc = geom.h() as u64;
        let spt = geom.s() as u64;
        let lba = self
            .c
            .checked_mul(hpc)
            .and_then(|track| track.checked_add(self.h as u64))
            .and_then(|track| track.checked_mul(spt))
            .and_then(|lba| lba.checked_add(self.s as u64 - 1))
            .ok_or(ChsError::AddressOverflow(*self))?;

        log::trace!("to_lba(): {} -> {} with geometry {}", self, lba, geom);
        Ok(lba)
    }

    /// Convert a [DiskChs] into an LBA sector address without validating it.
    ///
    /// Head and sector components outside the geometry still produce an arithmetic result, but it
    /// will not convert back to the same address. A sector id of 0 is treated as 1, and the
    /// calculation wraps on overflow.
    pub fn to_lba_unchecked(&self, geom: &DiskGeometry) -> Lba {
        let hpc = geom.h() as u64;
        let spt = geom.s() as u64;
        self.c
            .wrapping_mul(hpc)
            .wrapping_add(self.h as u64)
            .wrapping_mul(spt)
            .wrapping_add(self.s.saturating_sub(1) as u64)
    }

    /// Return a new `DiskChs` that is the next sector on the disk, according to the specified
    /// geometry. This is the address of the following LBA.
    /// The cylinder is allowed to advance without bound. Returns None only if the cylinder
    /// number would overflow.
    /// # Arguments:
    /// * `geom` - A [DiskGeometry], representing the number of heads and sectors per track.
    pub fn next_sector(&self, geom: &DiskGeometry) -> Option<DiskChs> {
        if self.s < geom.s() {
            // Not at last sector, just return next sector
            Some(DiskChs::from((self.c, self.h, self.s + 1)))
        }
        else if self.h < geom.h().saturating_sub(1) {
            // At last sector, but not at last head, go to next head, same cylinder, sector 1
            Some(DiskChs::from((self.c, self.h + 1, 1)))
        }
        else {
            // At last sector and last head, go to next cylinder, head 0, sector 1
            self.c.checked_add(1).map(|c| DiskChs::from((c, 0, 1)))
        }
    }
}

/// A structure representing the cylinder and head components of a sector address.
///
/// A `DiskCh` is used as a physical track specifier.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiskCh {
    pub(crate) c: u64,
    pub(crate) h: u32,
}

impl From<(u64, u32)> for DiskCh {
    fn from((c, h): (u64, u32)) -> Self {
        Self { c, h }
    }
}

impl From<DiskChs> for DiskCh {
    fn from(chs: DiskChs) -> Self {
        Self { c: chs.c, h: chs.h }
    }
}

impl Display for DiskCh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[c:{} h:{}]", self.c, self.h)
    }
}

impl DiskCh {
    /// Create a new DiskCh structure from a Cylinder (c) and Head (h) specifier.
    pub fn new(c: u64, h: u32) -> Self {
        Self { c, h }
    }
    /// Return the cylinder (c) field.
    pub fn c(&self) -> u64 {
        self.c
    }
    /// Return the head (h) field.
    pub fn h(&self) -> u32 {
        self.h
    }

    /// Return the 0-based index of this track, counting tracks head-first as LBA ordering does.
    /// Returns None if the index overflows.
    pub fn track_index(&self, geom: &DiskGeometry) -> Option<u64> {
        self.c.checked_mul(geom.h() as u64)?.checked_add(self.h as u64)
    }
}

/// Iterates over every sector in LBA order, starting at LBA 0.
pub struct DiskChsIterator {
    geom: DiskGeometry,
    chs:  Option<DiskChs>,
}

impl DiskChsIterator {
    pub(crate) fn new(geom: DiskGeometry) -> Self {
        Self { geom, chs: None }
    }
}

impl Iterator for DiskChsIterator {
    type Item = DiskChs;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(chs) = &mut self.chs {
            *chs = chs.next_sector(&self.geom)?;
        }
        else {
            self.chs = Some(DiskChs::default());
        }
        self.chs
    }
}
