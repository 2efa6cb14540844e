//! Asset size tables and file naming conventions.
//!
//! The iOS asset catalog expects fixed file names inside two directories:
//!
//! ```text
//! AppIcon.appiconset/   Icon-20.png, Icon-29.png, ... Icon-1024.png
//! AppLogo.imageset/     AppLogo.png, AppLogo@2x.png, AppLogo@3x.png
//! ```
//!
//! The working directory additionally holds the design sources, the
//! currently active logo, and any backups.

use super::catalog::DesignNumber;

/// Square pixel sizes required by the app icon set, in generation order.
pub const ICON_SIZES: [u32; 13] = [20, 29, 40, 58, 60, 76, 80, 87, 120, 152, 167, 180, 1024];

/// The currently active logo in the working directory.
pub const DEFAULT_LOGO_FILE: &str = "logo_no_bg.png";

/// App icon set, relative to the working directory.
pub const DEFAULT_ICON_DIR: &str = "TaskPulse/Assets.xcassets/AppIcon.appiconset";

/// In-app logo image set, relative to the working directory.
pub const DEFAULT_LOGO_DIR: &str = "TaskPulse/Assets.xcassets/AppLogo.imageset";

/// Base edge length of the in-app logo at 1x.
const LOGO_BASE_PX: u32 = 100;

/// Scale factors of the in-app logo image set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoScale {
    X1,
    X2,
    X3,
}

impl LogoScale {
    /// All scales, in generation order.
    pub const ALL: [LogoScale; 3] = [LogoScale::X1, LogoScale::X2, LogoScale::X3];

    pub fn factor(self) -> u32 {
        match self {
            LogoScale::X1 => 1,
            LogoScale::X2 => 2,
            LogoScale::X3 => 3,
        }
    }

    /// Edge length in pixels of the square output image.
    pub fn pixels(self) -> u32 {
        LOGO_BASE_PX * self.factor()
    }

    /// File name inside the logo image set.
    pub fn file_name(self) -> &'static str {
        match self {
            LogoScale::X1 => "AppLogo.png",
            LogoScale::X2 => "AppLogo@2x.png",
            LogoScale::X3 => "AppLogo@3x.png",
        }
    }
}

/// `logo_design_<N>.png`
pub fn design_file_name(number: DesignNumber) -> String {
    format!("logo_design_{number}.png")
}

/// `Icon-<size>.png`
pub fn icon_file_name(size: u32) -> String {
    format!("Icon-{size}.png")
}

/// `logo_backup_<N>.png`, keyed by the design being *applied*.
pub fn backup_file_name(number: DesignNumber) -> String {
    format!("logo_backup_{number}.png")
}
