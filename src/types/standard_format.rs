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

    src/types/standard_format.rs

    Represents the geometry of standard PC floppy disk formats.

    lbachs provides presets for the following formats:

        PC   160K  DD Single-Sided 5.25"
        PC   180K  DD Single-Sided 5.25"
        PC   320K  DD Double-Sided 5.25"
        PC   360K  DD Double-Sided 5.25"
        PC   720K  DD Double-Sided 3.5"
        PC   1.2M  HD Double-Sided 5.25"
        PC   1.44M HD Double-Sided 3.5"
        PC   2.88M ED Double-Sided 3.5"
*/

//! The `standard_format` module defines the [StandardFormat] enum that defines the geometry of
//! several standard PC disk formats.

use crate::{types::chs::DiskChs, DiskGeometry, Lba};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};
use strum::IntoEnumIterator;

/// A newtype for [StandardFormat] for use in parsing [StandardFormat] from user-provided strings,
/// such as command-line arguments.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct StandardFormatParam(pub StandardFormat);

impl FromStr for StandardFormatParam {
    type Err = String;
    /// Formats strings may specify a pc_ prefix, but it is not required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.strip_prefix("pc_").unwrap_or(lower.as_str()) {
            "160k" => Ok(StandardFormatParam(StandardFormat::PcFloppy160)),
            "180k" => Ok(StandardFormatParam(StandardFormat::PcFloppy180)),
            "320k" => Ok(StandardFormatParam(StandardFormat::PcFloppy320)),
            "360k" => Ok(StandardFormatParam(StandardFormat::PcFloppy360)),
            "720k" => Ok(StandardFormatParam(StandardFormat::PcFloppy720)),
            "1200k" => Ok(StandardFormatParam(StandardFormat::PcFloppy1200)),
            "1440k" => Ok(StandardFormatParam(StandardFormat::PcFloppy1440)),
            "2880k" => Ok(StandardFormatParam(StandardFormat::PcFloppy2880)),
            _ => Err(format!("Invalid format: {}", s)),
        }
    }
}

impl Display for StandardFormatParam {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.0 {
            StandardFormat::PcFloppy160 => write!(f, "pc_160k"),
            StandardFormat::PcFloppy180 => write!(f, "pc_180k"),
            StandardFormat::PcFloppy320 => write!(f, "pc_320k"),
            StandardFormat::PcFloppy360 => write!(f, "pc_360k"),
            StandardFormat::PcFloppy720 => write!(f, "pc_720k"),
            StandardFormat::PcFloppy1200 => write!(f, "pc_1200k"),
            StandardFormat::PcFloppy1440 => write!(f, "pc_1440k"),
            StandardFormat::PcFloppy2880 => write!(f, "pc_2880k"),
        }
    }
}

impl From<StandardFormat> for StandardFormatParam {
    fn from(format: StandardFormat) -> Self {
        StandardFormatParam(format)
    }
}

impl StandardFormatParam {
    /// Return a list of all supported StandardFormats and their string representations.
    /// This method can be used to generate help text for utilities that accept a StandardFormat
    /// as a command-line argument.
    pub fn list() -> Vec<(String, StandardFormat)> {
        StandardFormat::iter()
            .map(|format| (StandardFormatParam(format).to_string(), format))
            .collect()
    }
}

/// The addressing geometry of the standard PC floppy formats.
#[derive(Debug, Default, Copy, Clone, Hash, Eq, PartialEq, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StandardFormat {
    /// 40 cylinders, 1 head, 8 sectors per track.
    PcFloppy160,
    /// 40 cylinders, 1 head, 9 sectors per track.
    PcFloppy180,
    /// 40 cylinders, 2 heads, 8 sectors per track.
    PcFloppy320,
    /// 40 cylinders, 2 heads, 9 sectors per track.
    PcFloppy360,
    /// 80 cylinders, 2 heads, 9 sectors per track.
    PcFloppy720,
    /// 80 cylinders, 2 heads, 15 sectors per track.
    PcFloppy1200,
    /// 80 cylinders, 2 heads, 18 sectors per track. The default geometry.
    #[default]
    PcFloppy1440,
    /// 80 cylinders, 2 heads, 36 sectors per track.
    PcFloppy2880,
}

impl Display for StandardFormat {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            StandardFormat::PcFloppy160 => write!(f, "160K 5.25\" DD"),
            StandardFormat::PcFloppy180 => write!(f, "180K 5.25\" DD"),
            StandardFormat::PcFloppy320 => write!(f, "320K 5.25\" DD"),
            StandardFormat::PcFloppy360 => write!(f, "360K 5.25\" DD"),
            StandardFormat::PcFloppy720 => write!(f, "720K 3.5\" DD"),
            StandardFormat::PcFloppy1200 => write!(f, "1.2M 5.25\" HD"),
            StandardFormat::PcFloppy1440 => write!(f, "1.44M 3.5\" HD"),
            StandardFormat::PcFloppy2880 => write!(f, "2.88M 3.5\" ED"),
        }
    }
}

impl From<StandardFormatParam> for StandardFormat {
    fn from(param: StandardFormatParam) -> Self {
        param.0
    }
}

impl From<StandardFormat> for DiskGeometry {
    fn from(format: StandardFormat) -> Self {
        format.geometry()
    }
}

impl StandardFormat {
    /// Return a vector of all StandardFormat variants.
    pub fn list() -> Vec<StandardFormat> {
        StandardFormat::iter().collect()
    }

    /// Returns the cylinder count, head count and sectors per track of the `StandardFormat`.
    fn chs(&self) -> (u16, u32, u32) {
        match self {
            StandardFormat::PcFloppy160 => (40, 1, 8),
            StandardFormat::PcFloppy180 => (40, 1, 9),
            StandardFormat::PcFloppy320 => (40, 2, 8),
            StandardFormat::PcFloppy360 => (40, 2, 9),
            StandardFormat::PcFloppy720 => (80, 2, 9),
            StandardFormat::PcFloppy1200 => (80, 2, 15),
            StandardFormat::PcFloppy1440 => (80, 2, 18),
            StandardFormat::PcFloppy2880 => (80, 2, 36),
        }
    }

    /// Returns the [DiskGeometry] corresponding to the `StandardFormat`.
    pub fn geometry(&self) -> DiskGeometry {
        let (_, h, s) = self.chs();
        // Standard formats have non-zero heads and sectors.
        DiskGeometry::new(h, s).unwrap_or_default()
    }

    /// Return the number of cylinders on a disk of this format.
    pub fn cylinders(&self) -> u16 {
        self.chs().0
    }

    pub fn sectors_per_track(&self) -> u32 {
        self.chs().2
    }

    /// Return the total number of sectors on a disk of this format.
    pub fn total_sectors(&self) -> u64 {
        self.cylinders() as u64 * self.geometry().sectors_per_cylinder()
    }

    /// Return a boolean indicating whether the specified LBA addresses a sector on a disk of
    /// this format.
    pub fn contains_lba(&self, lba: Lba) -> bool {
        lba < self.total_sectors()
    }

    /// Return a boolean indicating whether the specified [DiskChs] addresses a sector on a disk
    /// of this format.
    pub fn contains(&self, chs: impl Into<DiskChs>) -> bool {
        let chs = chs.into();
        chs.c() < self.cylinders() as u64 && self.geometry().contains(chs)
    }

    /// Return the last addressable sector of a disk of this format.
    pub fn last_sector(&self) -> DiskChs {
        DiskChs::new(
            self.cylinders() as u64 - 1,
            self.geometry().h() - 1,
            self.sectors_per_track(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_matches_default_geometry() {
        assert_eq!(StandardFormat::default(), StandardFormat::PcFloppy1440);
        assert_eq!(StandardFormat::default().geometry(), DiskGeometry::default());
    }

    #[test]
    fn total_sectors_matches_capacity() {
        // Standard PC formats all use 512 byte sectors.
        let expected = [
            (StandardFormat::PcFloppy160, 160 * 1024u64),
            (StandardFormat::PcFloppy180, 180 * 1024),
            (StandardFormat::PcFloppy320, 320 * 1024),
            (StandardFormat::PcFloppy360, 360 * 1024),
            (StandardFormat::PcFloppy720, 720 * 1024),
            (StandardFormat::PcFloppy1200, 1200 * 1024),
            (StandardFormat::PcFloppy1440, 1440 * 1024),
            (StandardFormat::PcFloppy2880, 2880 * 1024),
        ];
        for (format, bytes) in expected {
            assert_eq!(format.total_sectors() * 512, bytes, "format: {}", format);
        }
        assert_eq!(StandardFormat::PcFloppy1440.total_sectors(), 2880);
    }

    #[test]
    fn last_sector_is_last_lba() {
        for format in StandardFormat::list() {
            let last = format.last_sector();
            assert!(format.contains(last));
            assert_eq!(last.to_lba(&format.geometry()), Ok(format.total_sectors() - 1));

            let beyond = DiskChs::from_lba(format.total_sectors(), &format.geometry());
            assert!(!format.contains(beyond));
            assert!(!format.contains_lba(format.total_sectors()));
        }
    }

    #[test]
    fn param_parses_with_and_without_prefix() {
        assert_eq!(
            "1440k".parse::<StandardFormatParam>(),
            Ok(StandardFormatParam(StandardFormat::PcFloppy1440))
        );
        assert_eq!(
            "PC_360K".parse::<StandardFormatParam>(),
            Ok(StandardFormatParam(StandardFormat::PcFloppy360))
        );
        assert!("1441k".parse::<StandardFormatParam>().is_err());
    }

    #[test]
    fn param_list_round_trips() {
        let list = StandardFormatParam::list();
        assert_eq!(list.len(), 8);
        for (name, format) in list {
            assert_eq!(name.parse::<StandardFormatParam>().map(StandardFormat::from), Ok(format));
        }
    }
}
