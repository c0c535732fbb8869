//! Font discovery and fallback for the guide.
//!
//! The document prefers DejaVu Sans, probing a short list of well-known
//! filesystem locations for the regular and bold faces.  A missing face is
//! never fatal: a missing bold falls back to the regular data, and a missing
//! family falls back to Liberation Sans.  Only a font file that exists but
//! cannot be parsed, or the complete absence of any candidate, surfaces as
//! an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{FontData, FontFamily};
use log::{debug, warn};

/// File name of the preferred regular face.
pub const PRIMARY_REGULAR: &str = "DejaVuSans.ttf";
/// File name of the preferred bold face.
pub const PRIMARY_BOLD: &str = "DejaVuSans-Bold.ttf";

const FALLBACK_REGULAR: &str = "LiberationSans-Regular.ttf";
const FALLBACK_BOLD: &str = "LiberationSans-Bold.ttf";

const SYSTEM_DEJAVU_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/local/share/fonts",
];

const SYSTEM_LIBERATION_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/liberation-sans",
    "/usr/local/share/fonts",
];

/// Prioritized candidate paths for the document's fonts.
///
/// The lists are plain data so callers (and tests) can substitute their own
/// candidates; nothing outside these paths is consulted.
#[derive(Clone, Debug)]
pub struct FontSearch {
    regular: Vec<PathBuf>,
    bold: Vec<PathBuf>,
    fallback_regular: Vec<PathBuf>,
    fallback_bold: Vec<PathBuf>,
}

impl FontSearch {
    /// Creates a search over explicit candidate lists, with no fallback
    /// family.
    pub fn custom(regular: Vec<PathBuf>, bold: Vec<PathBuf>) -> Self {
        Self {
            regular,
            bold,
            fallback_regular: Vec::new(),
            fallback_bold: Vec::new(),
        }
    }

    /// Returns the first existing candidate for the regular face.
    pub fn locate_regular(&self) -> Option<PathBuf> {
        first_existing(&self.regular)
    }

    /// Returns the first existing candidate for the bold face.
    pub fn locate_bold(&self) -> Option<PathBuf> {
        first_existing(&self.bold)
    }

    fn locate_fallback(&self) -> Option<(PathBuf, Option<PathBuf>)> {
        first_existing(&self.fallback_regular)
            .map(|regular| (regular, first_existing(&self.fallback_bold)))
    }
}

impl Default for FontSearch {
    fn default() -> Self {
        let mut regular: Vec<PathBuf> = SYSTEM_DEJAVU_DIRS
            .iter()
            .map(|dir| Path::new(dir).join(PRIMARY_REGULAR))
            .collect();
        let mut bold: Vec<PathBuf> = SYSTEM_DEJAVU_DIRS
            .iter()
            .map(|dir| Path::new(dir).join(PRIMARY_BOLD))
            .collect();

        let bundled = bundled_fonts_dir();
        regular.push(bundled.join(PRIMARY_REGULAR));
        bold.push(bundled.join(PRIMARY_BOLD));

        Self {
            regular,
            bold,
            fallback_regular: SYSTEM_LIBERATION_DIRS
                .iter()
                .map(|dir| Path::new(dir).join(FALLBACK_REGULAR))
                .collect(),
            fallback_bold: SYSTEM_LIBERATION_DIRS
                .iter()
                .map(|dir| Path::new(dir).join(FALLBACK_BOLD))
                .collect(),
        }
    }
}

/// Directory next to the crate manifest that may carry project-local fonts.
pub fn bundled_fonts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

/// Returns the first path in `candidates` that exists as a file.
pub fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|candidate| candidate.is_file())
        .cloned()
}

/// Indicates whether the search would resolve to any usable font file.
pub fn fonts_available(search: &FontSearch) -> bool {
    search.locate_regular().is_some() || search.locate_fallback().is_some()
}

/// Resolves the search into a complete font family.
///
/// The italic and bold-italic slots reuse the regular and bold data; the
/// document never renders italics, and reusing faces for missing variants
/// keeps the family complete for the layout engine.
pub fn resolve(search: &FontSearch) -> Result<FontFamily<FontData>, Error> {
    if let Some(regular_path) = search.locate_regular() {
        debug!("Using regular font at {}", regular_path.display());
        let regular = load_font(&regular_path, "regular")?;
        let bold = match search.locate_bold() {
            Some(bold_path) => {
                debug!("Using bold font at {}", bold_path.display());
                load_font(&bold_path, "bold")?
            }
            None => {
                warn!(
                    "Bold face {} not found near {}; reusing the regular face.",
                    PRIMARY_BOLD,
                    regular_path.display()
                );
                regular.clone()
            }
        };
        return Ok(family(regular, bold));
    }

    match search.locate_fallback() {
        Some((regular_path, bold_path)) => {
            warn!(
                "Preferred font {} not found; falling back to {}.",
                PRIMARY_REGULAR,
                regular_path.display()
            );
            let regular = load_font(&regular_path, "fallback regular")?;
            let bold = match bold_path {
                Some(path) => load_font(&path, "fallback bold")?,
                None => regular.clone(),
            };
            Ok(family(regular, bold))
        }
        None => Err(Error::new(
            "No usable font found among the configured candidates",
            io::Error::new(io::ErrorKind::NotFound, "font candidates missing"),
        )),
    }
}

fn family(regular: FontData, bold: FontData) -> FontFamily<FontData> {
    FontFamily {
        italic: regular.clone(),
        bold_italic: bold.clone(),
        regular,
        bold,
    }
}

fn load_font(path: &Path, face: &str) -> Result<FontData, Error> {
    let data = fs::read(path).map_err(|err| {
        Error::new(
            format!("Failed to read {} font at {}", face, path.display()),
            err,
        )
    })?;
    FontData::new(data, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to parse {} font at {}: {}",
                face,
                path.display(),
                err
            ),
            io::Error::new(io::ErrorKind::InvalidData, err.to_string()),
        )
    })
}
