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

    src/types/geometry.rs

    Defines the DiskGeometry type, describing how sectors are laid out
    across the heads and tracks of a disk.
*/

//! The `geometry` module defines [DiskGeometry], the fixed disk geometry that parameterizes all
//! LBA <-> CHS conversions.

use crate::{
    types::chs::{DiskChs, DiskChsIterator},
    ChsError,
    DEFAULT_HEADS_PER_CYLINDER,
    DEFAULT_SECTORS_PER_TRACK,
};
use std::fmt::Display;

/// A structure representing the geometry of a disk for the purpose of sector addressing:
///  - Heads per cylinder (h)
///  - Sectors per track (s)
///
/// No cylinder count is stored. Conversions do not enforce a media capacity; use
/// [crate::StandardFormat::contains_lba] if a capacity check is needed.
///
/// Both fields are guaranteed to be non-zero, so a `DiskGeometry` can always be used as a divisor.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u32, u32)", into = "(u32, u32)"))]
pub struct DiskGeometry {
    h: u32,
    s: u32,
}

impl Default for DiskGeometry {
    /// The default geometry is that of a 1.44M 3.5" floppy disk.
    fn default() -> Self {
        Self {
            h: DEFAULT_HEADS_PER_CYLINDER,
            s: DEFAULT_SECTORS_PER_TRACK,
        }
    }
}

impl Display for DiskGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[h:{} s:{:2}]", self.h, self.s)
    }
}

impl TryFrom<(u32, u32)> for DiskGeometry {
    type Error = ChsError;

    fn try_from((h, s): (u32, u32)) -> Result<Self, Self::Error> {
        DiskGeometry::new(h, s)
    }
}

impl From<DiskGeometry> for (u32, u32) {
    fn from(geom: DiskGeometry) -> Self {
        (geom.h, geom.s)
    }
}

impl DiskGeometry {
    /// Create a new `DiskGeometry` from a head count and a sector-per-track count.
    /// # Arguments:
    /// * `h` - The number of heads per cylinder.
    /// * `s` - The number of sectors per track.
    /// # Returns:
    /// * `Ok(DiskGeometry)` if both values are non-zero.
    /// * `Err(ChsError::InvalidGeometry)` otherwise.
    pub fn new(h: u32, s: u32) -> Result<Self, ChsError> {
        if h == 0 || s == 0 {
            log::debug!("DiskGeometry::new(): Rejected geometry with h:{} s:{}", h, s);
            return Err(ChsError::InvalidGeometry { h, s });
        }
        Ok(Self { h, s })
    }
    /// Return the heads per cylinder and sectors per track in a tuple.
    #[inline]
    pub fn get(&self) -> (u32, u32) {
        (self.h, self.s)
    }
    /// Return the number of heads per cylinder (h).
    #[inline]
    pub fn h(&self) -> u32 {
        self.h
    }
    /// Return the number of sectors per track (s).
    #[inline]
    pub fn s(&self) -> u32 {
        self.s
    }
    /// Return the number of sectors in one cylinder, across all heads.
    #[inline]
    pub fn sectors_per_cylinder(&self) -> u64 {
        self.h as u64 * self.s as u64
    }

    /// Return a boolean indicating whether the specified [DiskChs] is normalized for this
    /// geometry, that is, its head is less than the head count and its sector id lies within
    /// `1..=s`. Any cylinder is accepted.
    pub fn contains(&self, chs: impl Into<DiskChs>) -> bool {
        let chs = chs.into();
        chs.h() < self.h && (1..=self.s).contains(&chs.s())
    }

    /// Return a [DiskChsIterator] yielding the CHS address of every LBA in order, starting from
    /// LBA 0. The iterator only ends when the cylinder count can no longer be represented.
    pub fn chs_iter(&self) -> DiskChsIterator {
        DiskChsIterator::new(*self)
    }
}
