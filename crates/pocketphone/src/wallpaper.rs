//! Wallpaper catalog, persistence and cover-fit layout
//!
//! The layout mirrors CSS `background-size: cover; background-position:
//! center`, followed by a user nudge of up to 300 px on each axis.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{PhoneError, PhoneResult};

/// Largest nudge allowed on either axis, in pixels
pub const MAX_OFFSET: f64 = 300.0;

/// Prefix marking a built-in wallpaper in the settings file
pub const BUILTIN_PREFIX: &str = "builtin:";

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Size {
    /// Create a size
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// User nudge applied after centering, clamped to ±[`MAX_OFFSET`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Offset {
    x: f64,
    y: f64,
}

impl Offset {
    /// Create an offset, clamping both axes
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_offset(x),
            y: clamp_offset(y),
        }
    }

    /// Horizontal nudge
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical nudge
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Moves by `(dx, dy)`, staying within range
    #[must_use]
    pub fn nudge(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

fn clamp_offset(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-MAX_OFFSET, MAX_OFFSET)
    }
}

/// Where a wallpaper image lands relative to the viewport's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Scaled width
    pub width: f64,
    /// Scaled height
    pub height: f64,
    /// Uniform scale factor applied to the image
    pub scale: f64,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.0}×{:.0} at ({:.0}, {:.0}), scale {:.3}",
            self.width, self.height, self.x, self.y, self.scale
        )
    }
}

/// Scales `image` to cover `viewport`, centers it, then applies `offset`.
///
/// A viewport relatively wider than the image fills the width and crops top
/// and bottom; otherwise it fills the height and crops the sides. Returns
/// `None` when either size is not positive.
#[must_use]
pub fn cover_fit(viewport: Size, image: Size, offset: Offset) -> Option<Placement> {
    if !viewport.is_positive() || !image.is_positive() {
        return None;
    }

    let scale = if viewport.aspect() > image.aspect() {
        viewport.width / image.width
    } else {
        viewport.height / image.height
    };
    let width = image.width * scale;
    let height = image.height * scale;

    Some(Placement {
        x: (viewport.width - width) / 2.0 + offset.x,
        y: (viewport.height - height) / 2.0 + offset.y,
        width,
        height,
        scale,
    })
}

/// A wallpaper that ships with the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinWallpaper {
    /// Name shown in settings
    pub name: &'static str,
    /// Image path relative to the assets directory
    pub file: &'static str,
}

impl BuiltinWallpaper {
    /// Resource path used by older settings files, e.g. `/backgrounds/boba.png`
    #[must_use]
    pub fn legacy_path(&self) -> String {
        format!("/{}", self.file)
    }
}

/// Built-in wallpapers in display order
pub static BUILTIN: [BuiltinWallpaper; 3] = [
    BuiltinWallpaper {
        name: "Tiffy",
        file: "backgrounds/tiffany.png",
    },
    BuiltinWallpaper {
        name: "Kitty",
        file: "backgrounds/boba.png",
    },
    BuiltinWallpaper {
        name: "Homies",
        file: "backgrounds/homies.png",
    },
];

/// Looks up a built-in by name, ignoring case
#[must_use]
pub fn builtin(name: &str) -> Option<&'static BuiltinWallpaper> {
    BUILTIN.iter().find(|b| b.name.eq_ignore_ascii_case(name.trim()))
}

/// The selected wallpaper
#[derive(Debug, Clone, PartialEq)]
pub enum WallpaperSource {
    /// One of [`BUILTIN`]
    Builtin(&'static BuiltinWallpaper),
    /// An image file chosen by the user
    File(PathBuf),
}

impl WallpaperSource {
    /// Parses a settings-file value.
    ///
    /// Accepts `builtin:<Name>`, a legacy `/backgrounds/…` resource path
    /// matching a built-in, or any other path as a file. Blank is `None`.
    pub fn parse(value: &str) -> PhoneResult<Option<Self>> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        if let Some(name) = value.strip_prefix(BUILTIN_PREFIX) {
            return builtin(name)
                .map(|b| Some(Self::Builtin(b)))
                .ok_or_else(|| PhoneError::unknown_wallpaper(name));
        }
        if let Some(b) = BUILTIN.iter().find(|b| b.legacy_path() == value) {
            return Ok(Some(Self::Builtin(b)));
        }
        Ok(Some(Self::File(PathBuf::from(value))))
    }

    /// Resolves a command-line choice: a built-in name or an image path
    #[must_use]
    pub fn from_name_or_path(arg: &str) -> Self {
        builtin(arg).map_or_else(|| Self::File(PathBuf::from(arg)), Self::Builtin)
    }

    /// Value written to the settings file
    #[must_use]
    pub fn to_setting(&self) -> String {
        match self {
            Self::Builtin(b) => format!("{BUILTIN_PREFIX}{}", b.name),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Image file on disk
    #[must_use]
    pub fn image_path(&self, assets_dir: &Path) -> PathBuf {
        match self {
            Self::Builtin(b) => assets_dir.join(b.file),
            Self::File(path) => path.clone(),
        }
    }
}

impl std::fmt::Display for WallpaperSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin(b) => f.write_str(b.name),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads image dimensions from the file header without decoding pixels
pub fn image_size(path: &Path) -> PhoneResult<Size> {
    let (width, height) = image::image_dimensions(path)?;
    debug!(?path, width, height, "probed wallpaper");
    Ok(Size::new(f64::from(width), f64::from(height)))
}

/// The one-line wallpaper settings file
#[derive(Debug, Clone)]
pub struct WallpaperSettings {
    path: PathBuf,
}

impl WallpaperSettings {
    /// Settings stored at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last saved wallpaper.
    ///
    /// A missing file or unreadable value means no wallpaper.
    #[must_use]
    pub fn load(&self) -> Option<WallpaperSource> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = ?self.path, error = %e, "failed to read wallpaper setting");
                return None;
            }
        };
        match WallpaperSource::parse(&text) {
            Ok(source) => source,
            Err(e) => {
                warn!(path = ?self.path, error = %e, "ignoring wallpaper setting");
                None
            }
        }
    }

    /// Persists `source`, creating the parent directory if needed
    pub fn save(&self, source: &WallpaperSource) -> PhoneResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PhoneError::io(parent, e))?;
        }
        fs::write(&self.path, source.to_setting()).map_err(|e| PhoneError::io(&self.path, e))?;
        info!(path = ?self.path, wallpaper = %source, "wallpaper saved");
        Ok(())
    }
}
