use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

/// A document that can be read from the start any number of times.
pub trait LineSource {
    /// Display name, usually the path the document came from.
    fn name(&self) -> &str;

    /// All lines from the start of the document, terminators removed.
    fn lines(&mut self) -> io::Result<Vec<String>>;
}

/// A document backed by an open file. Every read seeks back to offset 0.
pub struct FileSource {
    name: String,
    reader: BufReader<File>,
}

impl FileSource {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self::from_file(path.display().to_string(), file))
    }

    pub fn from_file(name: impl Into<String>, file: File) -> Self {
        Self { name: name.into(), reader: BufReader::new(file) }
    }
}

impl LineSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn lines(&mut self) -> io::Result<Vec<String>> {
        self.reader.seek(SeekFrom::Start(0))?;
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let decoded = String::from_utf8_lossy(&buf);
            let line = decoded.strip_suffix('\n').unwrap_or(&decoded);
            let line = line.strip_suffix('\r').unwrap_or(line);
            lines.push(line.to_string());
        }
        Ok(lines)
    }
}

/// A document held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    text: String,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(), text: text.into() }
    }
}

impl LineSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn lines(&mut self) -> io::Result<Vec<String>> {
        Ok(self.text.lines().map(str::to_string).collect())
    }
}
