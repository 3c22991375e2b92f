use crate::domain::ports::LineSource;
use crate::utils::error::{CatalogError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FileLineSource {
    type Lines = FileLines<BufReader<File>>;

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> Result<Self::Lines> {
        let file = File::open(&self.path).map_err(|source| CatalogError::FileOpen {
            path: self.describe(),
            source,
        })?;
        tracing::debug!("Opened input file: {}", self.path.display());
        Ok(FileLines::new(BufReader::new(file)))
    }
}

/// One-pass line iterator. `\n` and `\r\n` are stripped and invalid UTF-8 is
/// replaced, so only real read failures surface as errors.
pub struct FileLines<R> {
    reader: R,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> FileLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for FileLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => {
                self.done = true;
                Some(Err(CatalogError::Io(e)))
            }
        }
    }
}
