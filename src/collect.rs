// izondrame: randomizer for a list of distinct entries (input collection)
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use crate::config::Config;
use anyhow::{Context, Error, Result};
use indexmap::IndexSet;
use log::{debug, info, warn};
use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

/// Marker ending input collection, matched case-insensitively on either source.
pub const SENTINEL: &str = "/end";

/// An entry which was already collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry(pub String);

impl fmt::Display for DuplicateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Already entered {}, please try another entry.", self.0)
    }
}

/// Insertion-ordered set of distinct entries.
#[derive(Debug, Default, Clone)]
pub struct EntryCollection {
    entries: IndexSet<String>,
}

impl EntryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry and return its 1-based position, or reject an exact duplicate.
    pub fn insert(&mut self, entry: String) -> Result<usize, DuplicateEntry> {
        if self.entries.contains(&entry) {
            return Err(DuplicateEntry(entry));
        }
        self.entries.insert(entry);
        Ok(self.entries.len())
    }

    /// Most recently accepted entry.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    /// Freeze the collection into its entries in first-seen order.
    pub fn into_entries(self) -> Vec<String> {
        self.entries.into_iter().collect()
    }
}

pub fn is_sentinel(line: &str) -> bool {
    line.eq_ignore_ascii_case(SENTINEL)
}

/// Line-oriented entry source read before live input.
pub struct EntryFile<R> {
    pub path: PathBuf,
    pub reader: R,
}

// where the next line comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    ReadingFile,
    ReadingInteractive,
}

// read one line without its line ending, None at end of stream
fn read_trimmed<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    line.truncate(line.trim_end_matches(['\n', '\r']).len());
    Ok(Some(line))
}

/// Collect distinct entries from an optional file source followed by interactive input.
///
/// File lines are echoed to `out` as they are read. A blank file line or the end of the file
/// switches to interactive input. Every accepted entry is acknowledged as `index: value`, and
/// duplicates are reported without advancing the index. Collection stops at the first
/// [`SENTINEL`] from either source, or when interactive input runs out.
pub fn collect_entries<F, I, W>(
    file: Option<EntryFile<F>>,
    mut interactive: I,
    out: &mut W,
) -> Result<Vec<String>, Error>
where
    F: BufRead,
    I: BufRead,
    W: Write,
{
    let mut file = file;
    let mut mode = if file.is_some() {
        Mode::ReadingFile
    } else {
        Mode::ReadingInteractive
    };
    let mut collection = EntryCollection::new();

    loop {
        let current = match mode {
            Mode::ReadingFile => {
                let line = match file.as_mut() {
                    Some(entry_file) => read_trimmed(&mut entry_file.reader)
                        .with_context(|| {
                            format!("Failed to read {}", entry_file.path.to_string_lossy())
                        })?
                        .unwrap_or_default(),
                    None => String::new(),
                };
                if line.is_empty() {
                    // blank line or end of file: the rest comes from live input
                    debug!("entry file exhausted, switching to interactive input");
                    file = None;
                    mode = Mode::ReadingInteractive;
                    continue;
                }
                writeln!(out, "{line}")?;
                line
            }
            Mode::ReadingInteractive => match read_trimmed(&mut interactive)
                .context("Failed to read live input")?
            {
                Some(line) if line.is_empty() => continue,
                Some(line) => line,
                None => {
                    warn!("interactive input ended without {SENTINEL}");
                    break;
                }
            },
        };

        if is_sentinel(&current) {
            debug!("sentinel seen while {mode:?}");
            break;
        }
        match collection.insert(current) {
            Ok(idx) => writeln!(out, "{idx}: {}", collection.last().unwrap_or_default())?,
            Err(duplicate) => writeln!(out, "{duplicate}")?,
        }
    }

    info!("collected {} entries", collection.len());
    Ok(collection.into_entries())
}

// print the instructions for entering data
fn print_inputs_message<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "--> To begin, we will read in data from the file, and then your live inputs until you end.\n\
         --> To end, just key in '{SENTINEL}' and hit enter, or include it in the entry file."
    )
}

// open the entry file if there is one
fn open_entry_file(path: &Path) -> Result<Option<EntryFile<BufReader<File>>>, Error> {
    if !path.is_file() {
        info!("no entry file at {}, reading live input only", path.display());
        return Ok(None);
    }
    let infile = File::open(path)
        .with_context(|| format!("Failed to open {}", path.to_string_lossy()))?;
    info!("reading entries from {}", path.display());
    Ok(Some(EntryFile {
        path: path.to_path_buf(),
        reader: BufReader::new(infile),
    }))
}

/// Collect entries from the configured entry file and standard input.
pub fn obtain_input(config: &Config) -> Result<Vec<String>, Error> {
    let mut stdout = io::stdout().lock();
    print_inputs_message(&mut stdout)?;
    let file = open_entry_file(&config.input_path)?;
    collect_entries(file, io::stdin().lock(), &mut stdout)
}
