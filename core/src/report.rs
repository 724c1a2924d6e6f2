use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::answer::{Answer, DocumentAnswer};
use crate::config::EngineConfig;
use crate::pipeline::Pipeline;

pub const SUMMARY_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub word_count: u32,
    pub average_tfidf: f64,
}

/// Machine-readable record of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub num_docs: u32,
    pub num_queries: u32,
    pub created_at: String,
    pub version: u32,
    pub config: EngineConfig,
    pub queries: Vec<String>,
    pub ranking: Vec<RankedEntry>,
    pub degenerate: Vec<String>,
    /// Empty when no document cleared the relevance threshold.
    pub answers: Vec<AnswerEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerEntry {
    pub name: String,
    pub tokens: Vec<String>,
    pub unreadable: bool,
}

impl From<&DocumentAnswer> for AnswerEntry {
    fn from(a: &DocumentAnswer) -> Self {
        Self { name: a.name.clone(), tokens: a.tokens.iter().map(|t| t.text.clone()).collect(), unreadable: a.unreadable }
    }
}

impl RunSummary {
    pub fn new(pipeline: &Pipeline, answer: &Answer, created_at: String) -> Self {
        Self {
            num_docs: pipeline.documents().len() as u32,
            num_queries: pipeline.terms().len() as u32,
            created_at,
            version: SUMMARY_VERSION,
            config: pipeline.config().clone(),
            queries: pipeline.terms().iter().map(|t| t.text.clone()).collect(),
            ranking: pipeline
                .documents()
                .iter()
                .map(|d| RankedEntry { name: d.name.clone(), word_count: d.word_count, average_tfidf: d.average_tfidf })
                .collect(),
            degenerate: pipeline.degenerate_documents().to_vec(),
            answers: answer.documents().iter().map(AnswerEntry::from).collect(),
        }
    }
}

/// Where the run logs go.
pub struct LogPaths {
    pub root: PathBuf,
}

impl LogPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    pub fn word_counts(&self) -> PathBuf { self.root.join("wc.log") }
    pub fn term_frequencies(&self) -> PathBuf { self.root.join("tf.log") }
    pub fn document_frequencies(&self) -> PathBuf { self.root.join("df.log") }
    pub fn average_tfidf(&self) -> PathBuf { self.root.join("avg_tfidf.log") }
    pub fn summary(&self) -> PathBuf { self.root.join("summary.json") }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(dir) = path.parent() {
        create_dir_all(dir)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}

pub fn save_word_counts(paths: &LogPaths, pipeline: &Pipeline) -> Result<()> {
    let mut f = create(&paths.word_counts())?;
    for (name, wc) in pipeline.word_counts() {
        writeln!(f, "{name}: {wc:4}")?;
    }
    f.flush()?;
    Ok(())
}

pub fn save_term_frequencies(paths: &LogPaths, pipeline: &Pipeline) -> Result<()> {
    let mut f = create(&paths.term_frequencies())?;
    for (name, row) in pipeline.term_frequencies() {
        write!(f, " {name}: ")?;
        for (term, tf) in row {
            write!(f, "({term}:{tf:4}), ")?;
        }
        writeln!(f)?;
    }
    f.flush()?;
    Ok(())
}

pub fn save_document_frequencies(paths: &LogPaths, pipeline: &Pipeline) -> Result<()> {
    let mut f = create(&paths.document_frequencies())?;
    for (term, df) in pipeline.document_frequencies() {
        writeln!(f, "{term}: {df:3}")?;
    }
    f.flush()?;
    Ok(())
}

pub fn save_average_tfidf(paths: &LogPaths, pipeline: &Pipeline) -> Result<()> {
    let mut f = create(&paths.average_tfidf())?;
    for (name, score) in pipeline.average_tfidf() {
        writeln!(f, "{name}: {score:7.4}")?;
    }
    f.flush()?;
    Ok(())
}

pub fn save_summary(paths: &LogPaths, summary: &RunSummary) -> Result<()> {
    let mut f = create(&paths.summary())?;
    let json = serde_json::to_string_pretty(summary)?;
    f.write_all(json.as_bytes())?;
    f.flush()?;
    Ok(())
}

pub fn load_summary(paths: &LogPaths) -> Result<RunSummary> {
    let mut f = File::open(paths.summary())?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    let summary: RunSummary = serde_json::from_str(&buf)?;
    Ok(summary)
}

/// Write all four statistics logs.
pub fn save_logs(paths: &LogPaths, pipeline: &Pipeline) -> Result<()> {
    save_word_counts(paths, pipeline)?;
    save_term_frequencies(paths, pipeline)?;
    save_document_frequencies(paths, pipeline)?;
    save_average_tfidf(paths, pipeline)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{LineSource, MemorySource};
    use std::fs;

    fn cat_pipeline() -> (Pipeline, Answer) {
        let mut sources: Vec<Box<dyn LineSource>> = vec![
            Box::new(MemorySource::new("b.txt", "dog dog dog")) as Box<dyn LineSource>,
            Box::new(MemorySource::new("a.txt", "cat cat dog in 1999")) as Box<dyn LineSource>,
        ];
        Pipeline::run(["cat"], &mut sources, EngineConfig::default()).unwrap()
    }

    #[test]
    fn writes_the_four_logs_in_rank_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths = LogPaths::new(dir.path());
        let (p, _) = cat_pipeline();
        save_logs(&paths, &p).unwrap();

        assert_eq!(fs::read_to_string(paths.word_counts()).unwrap(), "a.txt:    5\nb.txt:    3\n");
        assert_eq!(
            fs::read_to_string(paths.term_frequencies()).unwrap(),
            " a.txt: (CAT:   2), \n b.txt: (CAT:   0), \n"
        );
        assert_eq!(fs::read_to_string(paths.document_frequencies()).unwrap(), "CAT:   1\n");
        let avg = fs::read_to_string(paths.average_tfidf()).unwrap();
        assert_eq!(avg, "a.txt:  0.6773\nb.txt:  0.0000\n");
    }

    #[test]
    fn summary_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let paths = LogPaths::new(dir.path().join("nested"));
        let (p, answer) = cat_pipeline();
        let summary = RunSummary::new(&p, &answer, "2024-01-01T00:00:00Z".into());
        save_summary(&paths, &summary).unwrap();
        let back = load_summary(&paths).unwrap();
        assert_eq!(back.num_docs, 2);
        assert_eq!(back.queries, vec!["CAT".to_string()]);
        assert_eq!(back.ranking[0].name, "a.txt");
        assert_eq!(back.answers.len(), 1);
        assert_eq!(back.answers[0].tokens, vec!["1999".to_string()]);
    }
}
