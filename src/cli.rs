use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use nvd_query::application::dto::OutputFormat;
use nvd_query::nvd::domain::{CpeSearchQuery, CveSearchQuery};

/// Query the NIST NVD API v2 for CVEs and CPEs
#[derive(Parser, Debug)]
#[command(name = "nvd")]
#[command(version)]
#[command(
    about = "Query the NIST NVD API v2 for CVEs and CPEs",
    long_about = "Query the NIST NVD API v2 for CVEs and CPEs.\n\n\
                  Results larger than one page (2000 records) are fetched page by page \
                  and merged into a single document."
)]
pub struct Args {
    /// NVD API key (falls back to NVD_API_KEY, then the config file)
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Delay between page requests in seconds (requires --api-key, minimum 0.6)
    #[arg(long, global = true, value_name = "SECS")]
    pub delay: Option<f64>,

    /// HTTP proxy URL
    #[arg(long, global = true, value_name = "URL")]
    pub proxy: Option<String>,

    /// Output format: json or jsonl
    #[arg(long, global = true, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Pretty-print json output
    #[arg(long, global = true, value_name = "BOOL")]
    pub pretty: Option<bool>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to a config file (defaults to ./nvd.config.yml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(long, global = true, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// CVE (vulnerability) queries
    Cve {
        #[command(subcommand)]
        command: CveCommand,
    },
    /// CPE (platform dictionary) queries
    Cpe {
        #[command(subcommand)]
        command: CpeCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum CveCommand {
    /// Fetch a single CVE by identifier
    Get {
        /// CVE identifier, e.g. CVE-2021-26855
        #[arg(long)]
        id: String,
    },
    /// Search CVEs
    Search(CveSearchArgs),
}

#[derive(Subcommand, Debug)]
pub enum CpeCommand {
    /// Search the CPE dictionary
    Search(CpeSearchArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct CveSearchArgs {
    /// Exact CVE identifier
    #[arg(long)]
    pub cve_id: Option<String>,

    /// Keyword search over descriptions
    #[arg(long)]
    pub keyword: Option<String>,

    /// Match the keyword as an exact phrase (requires --keyword)
    #[arg(long)]
    pub keyword_exact: bool,

    /// CVSS v3 severity: LOW, MEDIUM, HIGH or CRITICAL
    #[arg(long, value_name = "SEVERITY")]
    pub cvss_v3_severity: Option<String>,

    /// CVSS v2 severity: LOW, MEDIUM or HIGH
    #[arg(long, value_name = "SEVERITY")]
    pub cvss_v2_severity: Option<String>,

    /// CPE name the CVEs apply to
    #[arg(long)]
    pub cpe_name: Option<String>,

    /// Only CVEs where the CPE is vulnerable (requires --cpe-name)
    #[arg(long)]
    pub is_vulnerable: bool,

    /// Exclude rejected CVEs
    #[arg(long)]
    pub no_rejected: bool,

    /// Published on or after (RFC3339 or "YYYY-MM-DD HH:MM" UTC)
    #[arg(long, value_name = "DATE")]
    pub pub_start: Option<String>,

    /// Published on or before (use with --pub-start)
    #[arg(long, value_name = "DATE")]
    pub pub_end: Option<String>,

    /// Last modified on or after (RFC3339 or "YYYY-MM-DD HH:MM" UTC)
    #[arg(long, value_name = "DATE")]
    pub mod_start: Option<String>,

    /// Last modified on or before (use with --mod-start)
    #[arg(long, value_name = "DATE")]
    pub mod_end: Option<String>,

    /// Total records to fetch across pages (0 = one page)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub limit: i64,
}

impl From<CveSearchArgs> for CveSearchQuery {
    fn from(args: CveSearchArgs) -> Self {
        CveSearchQuery {
            cpe_name: args.cpe_name,
            cve_id: args.cve_id,
            cvss_v2_severity: args.cvss_v2_severity,
            cvss_v3_severity: args.cvss_v3_severity,
            is_vulnerable: args.is_vulnerable,
            keyword_exact_match: args.keyword_exact,
            keyword_search: args.keyword,
            no_rejected: args.no_rejected,
            pub_start_date: args.pub_start,
            pub_end_date: args.pub_end,
            last_mod_start_date: args.mod_start,
            last_mod_end_date: args.mod_end,
            limit: args.limit,
        }
    }
}

#[derive(ClapArgs, Debug, Default)]
pub struct CpeSearchArgs {
    /// CPE name UUID
    #[arg(long)]
    pub cpe_name_id: Option<String>,

    /// Partial CPE name to match
    #[arg(long)]
    pub cpe_match: Option<String>,

    /// Keyword search over titles
    #[arg(long)]
    pub keyword: Option<String>,

    /// Match the keyword as an exact phrase (requires --keyword)
    #[arg(long)]
    pub keyword_exact: bool,

    /// Last modified on or after (RFC3339 or "YYYY-MM-DD HH:MM" UTC)
    #[arg(long, value_name = "DATE")]
    pub mod_start: Option<String>,

    /// Last modified on or before (use with --mod-start)
    #[arg(long, value_name = "DATE")]
    pub mod_end: Option<String>,

    /// Match criteria UUID
    #[arg(long)]
    pub match_criteria_id: Option<String>,

    /// Total records to fetch across pages (0 = one page)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub limit: i64,
}

impl From<CpeSearchArgs> for CpeSearchQuery {
    fn from(args: CpeSearchArgs) -> Self {
        CpeSearchQuery {
            cpe_name_id: args.cpe_name_id,
            cpe_match_string: args.cpe_match,
            keyword_exact_match: args.keyword_exact,
            keyword_search: args.keyword,
            last_mod_start_date: args.mod_start,
            last_mod_end_date: args.mod_end,
            match_criteria_id: args.match_criteria_id,
            limit: args.limit,
        }
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
