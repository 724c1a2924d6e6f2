use std::io;

/// Errors raised by the ranking pipeline.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No query terms were supplied.
    #[error("no query terms supplied")]
    NoQueries,
    /// No readable documents were supplied.
    #[error("no readable documents supplied")]
    NoDocuments,
    /// Engine configuration was out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// A document produced no tokens, so its term frequencies cannot be normalized.
    #[error("document {name} contains no words")]
    DegenerateDocument { name: String },
    /// A document could not be re-read for answer extraction.
    #[error("failed to read document {name}: {source}")]
    Resource {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// True for errors caused by the inputs or settings rather than by the documents.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::NoQueries | Error::NoDocuments | Error::InvalidConfig(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_family() {
        assert!(Error::NoQueries.is_configuration());
        assert!(Error::NoDocuments.is_configuration());
        assert!(Error::InvalidConfig("x").is_configuration());
        assert!(!Error::DegenerateDocument { name: "a".into() }.is_configuration());
    }
}
