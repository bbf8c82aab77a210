//! Content format detection for mind-map archives.
//!
//! An XMind archive is a ZIP container; which serialization it uses is
//! determined solely by which well-known entry name is present, not by
//! sniffing entry bytes.

use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::error::{Error, Result};

/// Serialization format of the content entry inside a mind-map archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentFormat {
    /// Structured JSON tree (`content.json`), used by XMind 2020+ (ZEN).
    Json,
    /// Namespaced XML tree (`content.xml`), used by XMind 8 and earlier.
    Xml,
}

impl ContentFormat {
    /// Archive entry name holding the content in this format.
    pub const fn entry_name(self) -> &'static str {
        match self {
            ContentFormat::Json => "content.json",
            ContentFormat::Xml => "content.xml",
        }
    }

    /// Pick the content format from a listing of archive entry names.
    ///
    /// `content.json` takes precedence when both entries exist; this is
    /// the defined tie-break, not an accident of iteration order.
    pub(crate) fn from_entry_names<'a, I>(names: I) -> Option<ContentFormat>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut has_xml = false;
        for name in names {
            if name == ContentFormat::Json.entry_name() {
                return Some(ContentFormat::Json);
            }
            if name == ContentFormat::Xml.entry_name() {
                has_xml = true;
            }
        }
        has_xml.then_some(ContentFormat::Xml)
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentFormat::Json => write!(f, "json"),
            ContentFormat::Xml => write!(f, "xml"),
        }
    }
}

/// Detect the content format inside an already-opened archive.
pub(crate) fn detect_in_archive<R: Read + Seek>(archive: &ZipArchive<R>) -> Result<ContentFormat> {
    ContentFormat::from_entry_names(archive.file_names()).ok_or(Error::MissingContent)
}

/// Detect the content format of a mind-map archive on disk.
///
/// # Returns
/// * `Ok(ContentFormat)` when a known content entry is present
/// * `Err(Error::ArchiveFormat)` when the file is not a valid ZIP container
/// * `Err(Error::MissingContent)` when no known content entry exists
///
/// # Example
/// ```no_run
/// use unxmind::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("map.xmind").unwrap();
/// println!("content format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<ContentFormat> {
    let file = File::open(path)?;
    let archive = ZipArchive::new(file)?;
    detect_in_archive(&archive)
}

/// Detect the content format of an in-memory mind-map archive.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<ContentFormat> {
    let archive = ZipArchive::new(Cursor::new(data))?;
    detect_in_archive(&archive)
}

/// Check if a file looks like a convertible mind-map archive.
pub fn is_xmind<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like a convertible mind-map archive.
pub fn is_xmind_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
