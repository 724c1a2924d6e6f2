use anyhow::Result;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use whenqa_core::config::{DEFAULT_MAX_SEARCH_DOCUMENTS, DEFAULT_RELEVANCE_THRESHOLD};
use whenqa_core::report::{save_logs, save_summary, LogPaths, RunSummary};
use whenqa_core::{Answer, EngineConfig, FileSource, LineSource, Pipeline};

#[derive(Parser, Debug, Clone)]
#[command(name = "when")]
#[command(about = "Answer \"when\" questions from text files ranked by TF-IDF")]
pub struct Cli {
    /// Query words and document paths, in any order. Anything that is not a
    /// readable file is a query word.
    #[arg(required = true)]
    pub inputs: Vec<String>,
    /// Ignore document frequency (IDF fixed at 1.0)
    #[arg(long, default_value_t = false)]
    pub disable_df: bool,
    /// How many top-ranked documents to scan for dates
    #[arg(long, default_value_t = DEFAULT_MAX_SEARCH_DOCUMENTS)]
    pub max_docs: usize,
    /// Minimum average TF-IDF for a document to count as relevant
    #[arg(long, default_value_t = DEFAULT_RELEVANCE_THRESHOLD)]
    pub threshold: f64,
    /// Keep repeated query words, weighting them once per repeat
    #[arg(long, default_value_t = false)]
    pub keep_duplicate_queries: bool,
    /// Directory for wc.log, tf.log, df.log, avg_tfidf.log and summary.json
    #[arg(long, default_value = ".")]
    pub log_dir: PathBuf,
    /// Do not write log files
    #[arg(long, default_value_t = false)]
    pub no_logs: bool,
    /// Print the run summary as JSON instead of the answer lines
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            disable_df: self.disable_df,
            max_search_documents: self.max_docs,
            relevance_threshold: self.threshold,
            dedupe_queries: !self.keep_duplicate_queries,
        }
    }
}

/// Inputs split into query words and documents, both in argument order.
pub struct Inputs {
    pub queries: Vec<String>,
    pub documents: Vec<Box<dyn LineSource>>,
}

/// An argument is a document when it opens as a regular file, otherwise a query word.
pub fn resolve_inputs(args: &[String]) -> Inputs {
    let mut queries = Vec::new();
    let mut documents: Vec<Box<dyn LineSource>> = Vec::new();
    for arg in args {
        match File::open(arg) {
            Ok(file) if file.metadata().map(|m| m.is_file()).unwrap_or(false) => {
                documents.push(Box::new(FileSource::from_file(arg.clone(), file)));
            }
            _ => queries.push(arg.clone()),
        }
    }
    tracing::debug!(queries = queries.len(), documents = documents.len(), "resolved inputs");
    Inputs { queries, documents }
}

pub struct RunOutput {
    pub answer: Answer,
    pub summary: RunSummary,
}

impl RunOutput {
    /// What goes to stdout.
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            Ok(serde_json::to_string_pretty(&self.summary)? + "\n")
        } else {
            Ok(self.answer.to_string())
        }
    }
}

pub fn run(cli: &Cli) -> Result<RunOutput> {
    let Inputs { queries, mut documents } = resolve_inputs(&cli.inputs);
    let (pipeline, answer) = Pipeline::run(&queries, &mut documents, cli.engine_config())?;

    let created_at = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)?;
    let summary = RunSummary::new(&pipeline, &answer, created_at);

    if !cli.no_logs {
        let paths = LogPaths::new(&cli.log_dir);
        save_logs(&paths, &pipeline)?;
        save_summary(&paths, &summary)?;
        tracing::info!(dir = %cli.log_dir.display(), "wrote logs");
    }
    Ok(RunOutput { answer, summary })
}
