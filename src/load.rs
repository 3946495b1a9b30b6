// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Loading compiled terminfo files
//!
//! Only the legacy format with 16-bit numbers is understood. Multi-byte fields
//! are decoded as little-endian, which is how ncurses writes them on every
//! platform.

use std::{
    borrow::Cow,
    fmt,
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::catalog::{Class, MAX_BOOLEANS, MAX_NUMBERS, MAX_STRINGS};

/// Magic number of the legacy terminfo format
pub const MAGIC: u16 = 0o432;

/// Sections of a compiled terminfo file, in file order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Header,
    Names,
    Booleans,
    Numbers,
    StringOffsets,
    StringTable,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Header => "header",
            Self::Names => "names",
            Self::Booleans => "booleans",
            Self::Numbers => "numbers",
            Self::StringOffsets => "string offsets",
            Self::StringTable => "string table",
        })
    }
}

/// Placement of sections within the file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Sections follow each other without padding
    #[default]
    Packed,
    /// The numbers section starts on an even offset, as written by ncurses `tic`
    Aligned,
}

/// Errors reported when loading a terminfo file
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The file could not be opened
    #[error("Cannot open file")]
    Open(#[source] io::Error),
    /// A section is shorter than declared in the header
    #[error("Cannot read {section} section")]
    Read {
        section: Section,
        #[source]
        source: io::Error,
    },
    /// The magic number is invalid or unsupported
    #[error("Unknown magic number {0:#o}")]
    BadMagic(u16),
    /// The header declares more capabilities than there are standard names
    #[error("Too many {class} capabilities: {count}, at most {max} supported")]
    TooMany {
        class: Class,
        count: usize,
        max: usize,
    },
}

/// Broad classification of [`Error`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The data could not be read
    Io,
    /// The data is not a supported terminfo file
    Format,
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Open(_) | Self::Read { .. } => ErrorKind::Io,
            Self::BadMagic(_) | Self::TooMany { .. } => ErrorKind::Format,
        }
    }
}

/// Error loading a terminfo file from a path
#[derive(thiserror::Error, Debug)]
#[error("Failed to load {}", path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: Error,
}

impl LoadError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

/// Fixed header at the start of a terminfo file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub magic: u16,
    pub name_bytes: u16,
    pub bool_count: u16,
    pub num_count: u16,
    pub str_count: u16,
    pub string_table_bytes: u16,
}

impl Header {
    /// Size of the header on disk
    pub const SIZE: usize = 12;

    #[must_use]
    pub fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        let field = |i: usize| u16::from_le_bytes([bytes[2 * i], bytes[2 * i + 1]]);
        Self {
            magic: field(0),
            name_bytes: field(1),
            bool_count: field(2),
            num_count: field(3),
            str_count: field(4),
            string_table_bytes: field(5),
        }
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        let fields = [
            self.magic,
            self.name_bytes,
            self.bool_count,
            self.num_count,
            self.str_count,
            self.string_table_bytes,
        ];
        for (chunk, field) in bytes.chunks_exact_mut(2).zip(fields) {
            chunk.copy_from_slice(&field.to_le_bytes());
        }
        bytes
    }

    /// Check the magic number and the capability counts
    pub fn validate(&self) -> Result<(), Error> {
        if self.magic != MAGIC {
            return Err(Error::BadMagic(self.magic));
        }
        for (class, count, max) in [
            (Class::Boolean, self.bool_count, MAX_BOOLEANS),
            (Class::Number, self.num_count, MAX_NUMBERS),
            (Class::String, self.str_count, MAX_STRINGS),
        ] {
            let count = usize::from(count);
            if count > max {
                return Err(Error::TooMany { class, count, max });
            }
        }
        Ok(())
    }
}

fn read_section(reader: &mut impl Read, buffer: &mut [u8], section: Section) -> Result<(), Error> {
    reader
        .read_exact(buffer)
        .map_err(|source| Error::Read { section, source })
}

fn read_vec(reader: &mut impl Read, size: usize, section: Section) -> Result<Vec<u8>, Error> {
    let mut buffer = vec![0u8; size];
    read_section(reader, &mut buffer, section)?;
    Ok(buffer)
}

fn read_le16_vec(reader: &mut impl Read, count: u16, section: Section) -> Result<Vec<u16>, Error> {
    let buffer = read_vec(reader, 2 * usize::from(count), section)?;
    Ok(buffer
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Contents of a terminfo file
///
/// Values are indexed by ordinal, see [`crate::catalog`] for their names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapabilityRecord {
    header: Header,
    names: Vec<u8>,
    booleans: Vec<bool>,
    numbers: Vec<i16>,
    string_offsets: Vec<u16>,
    string_table: Vec<u8>,
}

impl CapabilityRecord {
    /// Read a terminfo file from `reader`
    ///
    /// The header is validated before anything else is read.
    pub fn read_from(reader: &mut impl Read, layout: Layout) -> Result<Self, Error> {
        let mut bytes = [0u8; Header::SIZE];
        read_section(reader, &mut bytes, Section::Header)?;
        let header = Header::from_bytes(bytes);
        header.validate()?;
        debug!(?header, "terminfo header");

        let names = read_vec(reader, usize::from(header.name_bytes), Section::Names)?;

        let booleans: Vec<bool> =
            read_vec(reader, usize::from(header.bool_count), Section::Booleans)?
                .into_iter()
                .map(|value| value != 0)
                .collect();

        if layout == Layout::Aligned && !(names.len() + booleans.len()).is_multiple_of(2) {
            read_section(reader, &mut [0u8; 1], Section::Numbers)?;
        }

        let numbers = read_le16_vec(reader, header.num_count, Section::Numbers)?
            .into_iter()
            .map(|value| value as i16)
            .collect();

        let string_offsets = read_le16_vec(reader, header.str_count, Section::StringOffsets)?;

        let string_table = read_vec(
            reader,
            usize::from(header.string_table_bytes),
            Section::StringTable,
        )?;

        Ok(Self {
            header,
            names,
            booleans,
            numbers,
            string_offsets,
            string_table,
        })
    }

    /// Parse a terminfo file held in memory
    pub fn parse(buffer: &[u8], layout: Layout) -> Result<Self, Error> {
        let mut reader = buffer;
        Self::read_from(&mut reader, layout)
    }

    #[must_use]
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// Raw names section, NUL terminated aliases
    #[must_use]
    pub fn names(&self) -> &[u8] {
        &self.names
    }

    #[must_use]
    pub fn booleans(&self) -> &[bool] {
        &self.booleans
    }

    #[must_use]
    pub fn numbers(&self) -> &[i16] {
        &self.numbers
    }

    #[must_use]
    pub fn string_offsets(&self) -> &[u16] {
        &self.string_offsets
    }

    #[must_use]
    pub fn string_table(&self) -> &[u8] {
        &self.string_table
    }

    /// Number of values present in the file for the class
    #[must_use]
    pub fn count(&self, class: Class) -> usize {
        match class {
            Class::Boolean => self.booleans.len(),
            Class::Number => self.numbers.len(),
            Class::String => self.string_offsets.len(),
        }
    }

    /// Terminal names, split on NUL and `|`
    pub fn aliases(&self) -> impl Iterator<Item = &[u8]> {
        self.names
            .split(|c| *c == b'\0' || *c == b'|')
            .filter(|alias| !alias.is_empty())
    }

    /// Primary terminal name
    #[must_use]
    pub fn terminal_name(&self) -> Cow<'_, str> {
        self.aliases()
            .next()
            .map_or(Cow::Borrowed(""), String::from_utf8_lossy)
    }

    /// Long description, the last alias if there is more than one
    #[must_use]
    pub fn description(&self) -> Option<Cow<'_, str>> {
        let mut aliases = self.aliases();
        aliases.next()?;
        aliases.last().map(String::from_utf8_lossy)
    }

    /// Boolean capability, false if absent
    #[must_use]
    pub fn boolean(&self, ordinal: usize) -> bool {
        self.booleans.get(ordinal).copied().unwrap_or(false)
    }

    /// Numeric capability, `None` if absent or cancelled
    #[must_use]
    pub fn number(&self, ordinal: usize) -> Option<i16> {
        self.numbers
            .get(ordinal)
            .copied()
            .filter(|value| *value >= 0)
    }

    /// String capability without the final NUL, `None` if absent or cancelled
    ///
    /// A string missing its NUL extends to the end of the string table.
    #[must_use]
    pub fn string(&self, ordinal: usize) -> Option<&[u8]> {
        let offset = usize::from(*self.string_offsets.get(ordinal)?);
        if offset >= self.string_table.len() {
            return None;
        }
        let tail = &self.string_table[offset..];
        let length = tail.iter().position(|c| *c == b'\0').unwrap_or(tail.len());
        Some(&tail[..length])
    }
}

/// Load a terminfo file with the packed layout
pub fn load(path: impl AsRef<Path>) -> Result<CapabilityRecord, LoadError> {
    load_with(path, Layout::Packed)
}

/// Load a terminfo file with the given layout
pub fn load_with(path: impl AsRef<Path>, layout: Layout) -> Result<CapabilityRecord, LoadError> {
    let path = path.as_ref();
    let wrap = |source| LoadError {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(|err| wrap(Error::Open(err)))?;
    let record = CapabilityRecord::read_from(&mut BufReader::new(file), layout).map_err(wrap)?;
    debug!(
        path = %path.display(),
        name = %record.terminal_name(),
        booleans = record.booleans.len(),
        numbers = record.numbers.len(),
        strings = record.string_offsets.len(),
        "loaded terminfo"
    );
    Ok(record)
}
