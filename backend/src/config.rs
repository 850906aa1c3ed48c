use clap::Parser;
use std::path::PathBuf;

/// Command line and environment configuration of the signature service.
#[derive(Parser, Debug, Clone)]
#[command(name = "mailsig", version, about = "Email signature builder service")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "MAILSIG_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "MAILSIG_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite file holding saved templates
    #[arg(long, env = "MAILSIG_DATABASE", default_value = "mailsig.sqlite")]
    pub database: PathBuf,

    /// Maximum accepted JSON body, in bytes
    #[arg(long, env = "MAILSIG_JSON_LIMIT", default_value_t = 10 * 1024 * 1024)]
    pub json_limit: usize,

    /// Records rendered between two progress reports of a merge job
    #[arg(long = "merge-chunk-size", env = "MAILSIG_MERGE_CHUNK", default_value_t = 250)]
    pub merge_chunk_size: usize,

    /// Completed merges whose documents are kept; older ones are forgotten
    #[arg(long = "merge-results-kept", env = "MAILSIG_MERGE_RESULTS", default_value_t = 50)]
    pub merge_results_kept: usize,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, env = "MAILSIG_LOG", default_value = "info")]
    pub log_level: String,
}
