//! Content extraction from mind-map archives.
//!
//! The extractor opens a ZIP container, probes its entry listing for one
//! of the two well-known content entries, decodes that entry as UTF-8 and
//! parses it into a [`ContentDocument`]. It never looks at any other
//! archive entry and does not mutate the input.

mod json;
mod xml;

use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::detect::{detect_in_archive, ContentFormat};
use crate::error::{Error, Result};
use crate::model::ContentDocument;

/// Mind-map content extractor over an opened archive.
///
/// # Example
///
/// ```no_run
/// use unxmind::extract::ContentExtractor;
///
/// let mut extractor = ContentExtractor::open("map.xmind")?;
/// let doc = extractor.extract()?;
/// println!("{} sheet(s)", doc.sheet_count());
/// # Ok::<(), unxmind::Error>(())
/// ```
pub struct ContentExtractor<R> {
    archive: ZipArchive<R>,
}

impl ContentExtractor<File> {
    /// Open a mind-map archive file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            archive: ZipArchive::new(file)?,
        })
    }
}

impl<'a> ContentExtractor<Cursor<&'a [u8]>> {
    /// Open a mind-map archive held in memory.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        Ok(Self {
            archive: ZipArchive::new(Cursor::new(data))?,
        })
    }
}

impl ContentExtractor<Cursor<Vec<u8>>> {
    /// Open a mind-map archive from a reader.
    ///
    /// The reader is drained into memory first; archives need random
    /// access and conversion operates on fully materialized input.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self {
            archive: ZipArchive::new(Cursor::new(data))?,
        })
    }
}

impl<R: Read + Seek> ContentExtractor<R> {
    /// Content format the archive carries, without parsing it.
    pub fn format(&self) -> Result<ContentFormat> {
        detect_in_archive(&self.archive)
    }

    /// Extract and parse the content entry.
    pub fn extract(&mut self) -> Result<ContentDocument> {
        let format = self.format()?;
        log::debug!("extracting {} from archive", format.entry_name());

        let text = self.read_entry(format)?;
        match format {
            ContentFormat::Json => Ok(ContentDocument::JsonTree(json::parse_sheets(&text)?)),
            ContentFormat::Xml => Ok(ContentDocument::XmlTree(xml::parse_tree(&text)?)),
        }
    }

    fn read_entry(&mut self, format: ContentFormat) -> Result<String> {
        let mut entry = self.archive.by_name(format.entry_name())?;
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut bytes)?;
        String::from_utf8(bytes)
            .map_err(|e| Error::content_parse(format, format!("not valid UTF-8: {}", e)))
    }
}
