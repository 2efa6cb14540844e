//! The static catalog of logo designs.
//!
//! Each design is a pre-rendered PNG in the working directory named
//! `logo_design_<N>.png`.  The catalog maps every valid `N` to a short
//! human-readable description and is the single source of truth for which
//! numbers the user may pick.
//!
//! # Validating user input
//!
//! The command line hands us a string.  [`DesignNumber`]'s `FromStr` impl
//! distinguishes the two ways that string can be wrong:
//!
//! ```text
//! "abc"  -> CatalogError::NotANumber
//! "9"    -> CatalogError::OutOfRange(9)
//! "5"    -> DesignNumber(5)
//! ```

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while turning user input into a catalog entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The input is not a decimal integer.
    #[error("'{0}' is not a valid number (choose {min}-{max})", min = DesignNumber::MIN, max = DesignNumber::MAX)]
    NotANumber(String),

    /// The input is an integer but no design carries that number.
    #[error("invalid design number: {0} (choose {min}-{max})", min = DesignNumber::MIN, max = DesignNumber::MAX)]
    OutOfRange(i128),
}

/// A validated design number.
///
/// Holding a `DesignNumber` guarantees the value is a key of
/// [`DesignCatalog::standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DesignNumber(u8);

impl DesignNumber {
    /// Smallest valid design number.
    pub const MIN: u8 = 1;
    /// Largest valid design number.
    pub const MAX: u8 = 7;

    /// Returns the raw number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Iterates every valid design number in ascending order.
    pub fn all() -> impl Iterator<Item = DesignNumber> {
        (Self::MIN..=Self::MAX).map(DesignNumber)
    }
}

impl TryFrom<i128> for DesignNumber {
    type Error = CatalogError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        if (i128::from(Self::MIN)..=i128::from(Self::MAX)).contains(&value) {
            Ok(DesignNumber(value as u8))
        } else {
            Err(CatalogError::OutOfRange(value))
        }
    }
}

impl FromStr for DesignNumber {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<i128>() {
            Ok(value) => DesignNumber::try_from(value),
            // Digits that overflow are still integers, just absurdly out of range.
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => {
                Err(CatalogError::OutOfRange(i128::MAX))
            }
            Err(e) if matches!(e.kind(), IntErrorKind::NegOverflow) => {
                Err(CatalogError::OutOfRange(i128::MIN))
            }
            Err(_) => Err(CatalogError::NotANumber(s.to_string())),
        }
    }
}

impl fmt::Display for DesignNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the design catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Design {
    pub number: DesignNumber,
    pub description: &'static str,
    /// Featured designs blend the task-list motif with the pulse motif and are
    /// highlighted in the listing.
    pub featured: bool,
}

const DESIGNS: [Design; 7] = [
    Design {
        number: DesignNumber(1),
        description: "Enhanced pulse wave - smoother curves with a blue gradient",
        featured: false,
    },
    Design {
        number: DesignNumber(2),
        description: "Circular pulse - a pulse waveform running around a circle",
        featured: false,
    },
    Design {
        number: DesignNumber(3),
        description: "Molecular pulse - tech-style design of connected nodes",
        featured: false,
    },
    Design {
        number: DesignNumber(4),
        description: "Minimal waveform - a pared-back but bold pink design",
        featured: false,
    },
    Design {
        number: DesignNumber(5),
        description: "Task pulse fusion - a checkbox merged with a pulse line",
        featured: true,
    },
    Design {
        number: DesignNumber(6),
        description: "List heartbeat - a task list drawn as a heartbeat",
        featured: true,
    },
    Design {
        number: DesignNumber(7),
        description: "Progress pulse - a progress bar shaped like a pulse waveform",
        featured: true,
    },
];

/// Read-only view over the static design table.
#[derive(Debug, Clone, Copy)]
pub struct DesignCatalog {
    designs: &'static [Design],
}

impl DesignCatalog {
    /// Returns the catalog of the seven shipped designs.
    pub fn standard() -> Self {
        Self { designs: &DESIGNS }
    }

    /// Iterates the designs in ascending number order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Design> {
        let designs: &'static [Design] = self.designs;
        designs.iter()
    }

    /// Number of designs in the catalog.
    pub fn len(&self) -> usize {
        self.designs.len()
    }

    /// Returns `true` if the catalog holds no designs.
    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }

    /// Looks up a design by number.
    pub fn get(&self, number: DesignNumber) -> Option<&'static Design> {
        self.iter().find(|d| d.number == number)
    }

    /// Parses user input and resolves it to a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotANumber`] for non-integer input and
    /// [`CatalogError::OutOfRange`] for integers that are not catalog keys.
    pub fn resolve(&self, input: &str) -> Result<&'static Design, CatalogError> {
        let number: DesignNumber = input.parse()?;
        self.get(number)
            .ok_or(CatalogError::OutOfRange(i128::from(number.get())))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
