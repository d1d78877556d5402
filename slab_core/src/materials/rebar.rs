//! Standard Reinforcing Bar Sizes
//!
//! Soft-metric deformed bar designations (ASTM A615M) with nominal diameter and
//! cross-sectional area. The catalog is closed: a designation that is not in
//! the table is rejected as invalid input.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::materials::BarSize;
//!
//! let bar = BarSize::from_designation("#13").unwrap();
//! assert_eq!(bar.diameter_mm(), 12.7);
//! assert_eq!(bar.area_mm2(), 129.0);
//!
//! assert!(BarSize::from_designation("#99").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Standard bar size designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum BarSize {
    /// #10 (Ø9.5 mm, 71 mm²)
    No10,
    /// #13 (Ø12.7 mm, 129 mm²)
    #[default]
    No13,
    /// #16 (Ø15.9 mm, 199 mm²)
    No16,
    /// #19 (Ø19.1 mm, 284 mm²)
    No19,
    /// #22 (Ø22.2 mm, 387 mm²)
    No22,
    /// #25 (Ø25.4 mm, 510 mm²)
    No25,
    /// #29 (Ø28.7 mm, 645 mm²)
    No29,
    /// #32 (Ø32.3 mm, 819 mm²)
    No32,
    /// #36 (Ø35.8 mm, 1006 mm²)
    No36,
}

impl BarSize {
    /// All catalog sizes, smallest first (selection menu order)
    pub const ALL: [BarSize; 9] = [
        BarSize::No10,
        BarSize::No13,
        BarSize::No16,
        BarSize::No19,
        BarSize::No22,
        BarSize::No25,
        BarSize::No29,
        BarSize::No32,
        BarSize::No36,
    ];

    /// Designation string as printed on drawings (e.g. "#13")
    pub fn designation(&self) -> &'static str {
        match self {
            BarSize::No10 => "#10",
            BarSize::No13 => "#13",
            BarSize::No16 => "#16",
            BarSize::No19 => "#19",
            BarSize::No22 => "#22",
            BarSize::No25 => "#25",
            BarSize::No29 => "#29",
            BarSize::No32 => "#32",
            BarSize::No36 => "#36",
        }
    }

    /// Nominal bar diameter in mm
    pub fn diameter_mm(&self) -> f64 {
        match self {
            BarSize::No10 => 9.5,
            BarSize::No13 => 12.7,
            BarSize::No16 => 15.9,
            BarSize::No19 => 19.1,
            BarSize::No22 => 22.2,
            BarSize::No25 => 25.4,
            BarSize::No29 => 28.7,
            BarSize::No32 => 32.3,
            BarSize::No36 => 35.8,
        }
    }

    /// Nominal cross-sectional area of one bar in mm²
    pub fn area_mm2(&self) -> f64 {
        match self {
            BarSize::No10 => 71.0,
            BarSize::No13 => 129.0,
            BarSize::No16 => 199.0,
            BarSize::No19 => 284.0,
            BarSize::No22 => 387.0,
            BarSize::No25 => 510.0,
            BarSize::No29 => 645.0,
            BarSize::No32 => 819.0,
            BarSize::No36 => 1006.0,
        }
    }

    /// Look up a bar by designation.
    ///
    /// Leading/trailing whitespace is ignored; anything else must match the
    /// catalog exactly.
    pub fn from_designation(designation: &str) -> CalcResult<Self> {
        let wanted = designation.trim();
        BarSize::ALL
            .iter()
            .copied()
            .find(|bar| bar.designation() == wanted)
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "bar_size",
                    designation,
                    format!(
                        "Bar size not recognized; expected one of {}",
                        BarSize::ALL.map(|b| b.designation()).join(", ")
                    ),
                )
            })
    }

    /// Catalog entry for this size
    pub fn properties(&self) -> ReinforcingBar {
        ReinforcingBar {
            designation: self.designation(),
            diameter_mm: self.diameter_mm(),
            area_mm2: self.area_mm2(),
        }
    }
}

impl fmt::Display for BarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.designation())
    }
}

impl FromStr for BarSize {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BarSize::from_designation(s)
    }
}

impl TryFrom<String> for BarSize {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        BarSize::from_designation(&value)
    }
}

impl From<BarSize> for String {
    fn from(bar: BarSize) -> Self {
        bar.designation().to_string()
    }
}

/// One row of the bar catalog, for selection menus and listings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReinforcingBar {
    pub designation: &'static str,
    pub diameter_mm: f64,
    pub area_mm2: f64,
}

/// The full standard bar table in catalog order
pub fn bar_catalog() -> Vec<ReinforcingBar> {
    BarSize::ALL.iter().map(BarSize::properties).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_nine_sizes() {
        let catalog = bar_catalog();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog[0].designation, "#10");
        assert_eq!(catalog[8].designation, "#36");
    }

    #[test]
    fn test_areas_increase_with_size() {
        let catalog = bar_catalog();
        for pair in catalog.windows(2) {
            assert!(pair[1].area_mm2 > pair[0].area_mm2);
            assert!(pair[1].diameter_mm > pair[0].diameter_mm);
        }
    }

    #[test]
    fn test_lookup_roundtrips_every_designation() {
        for bar in BarSize::ALL {
            assert_eq!(BarSize::from_designation(bar.designation()).unwrap(), bar);
        }
        assert_eq!(BarSize::from_designation(" #25 ").unwrap(), BarSize::No25);
    }

    #[test]
    fn test_unknown_designation_is_invalid_input() {
        let err = BarSize::from_designation("#99").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        // catalog is untouched by a failed lookup
        assert_eq!(bar_catalog().len(), 9);
    }

    #[test]
    fn test_serializes_as_designation() {
        let json = serde_json::to_string(&BarSize::No16).unwrap();
        assert_eq!(json, "\"#16\"");
        let back: BarSize = serde_json::from_str("\"#16\"").unwrap();
        assert_eq!(back, BarSize::No16);
        assert!(serde_json::from_str::<BarSize>("\"#7\"").is_err());
    }
}
