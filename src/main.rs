mod cli;

use cli::{Args, Command, CpeCommand, CveCommand};
use env_logger::Env;
use nvd_query::adapters::outbound::console::StderrProgressReporter;
use nvd_query::adapters::outbound::network::NvdHttpClient;
use nvd_query::adapters::outbound::timing::ThreadSleepPacer;
use nvd_query::application::dto::{ClientOptions, OutputFormat};
use nvd_query::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use nvd_query::application::use_cases::SearchNvdUseCase;
use nvd_query::config::{self, ConfigFile};
use nvd_query::nvd::domain::{CpeSearchQuery, CveSearchQuery, PaginatedSearch};
use nvd_query::ports::inbound::NvdSearchPort;
use nvd_query::shared::error::{ExitCode, NvdError};
use nvd_query::shared::Result;
use std::process;

const API_KEY_ENV: &str = "NVD_API_KEY";

fn main() {
    let args = Args::parse_args();
    init_logging(args.debug);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug {
        "warn,nvd_query=debug,nvd=debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Effective settings after merging flags, environment and config file
#[derive(Debug, PartialEq)]
struct Settings {
    options: ClientOptions,
    output: OutputFormat,
    pretty: bool,
}

/// Flags win over the environment, which wins over the config file
fn resolve_settings(args: &Args, env_api_key: Option<String>, config: ConfigFile) -> Result<Settings> {
    let api_key = args
        .api_key
        .clone()
        .filter(|k| !k.is_empty())
        .or(env_api_key.filter(|k| !k.is_empty()))
        .or(config.api_key);
    let delay = args.delay.or(config.delay);
    let proxy = args.proxy.clone().or(config.proxy);

    let options = ClientOptions::new(api_key, delay, proxy)?;

    let output = match (args.output, config.output.as_deref()) {
        (Some(format), _) => format,
        (None, Some(raw)) => raw.parse().map_err(|message| NvdError::Configuration {
            message,
            hint: "Set `output` to json or jsonl.".to_string(),
        })?,
        (None, None) => OutputFormat::default(),
    };

    Ok(Settings {
        options,
        output,
        pretty: args.pretty.or(config.pretty).unwrap_or(true),
    })
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = args.config.as_deref() {
        return config::load_config_from_path(path);
    }
    let cwd = std::env::current_dir()?;
    Ok(config::discover_config(&cwd)?.unwrap_or_default())
}

/// The search a command asks for
#[derive(Debug)]
enum Request {
    GetCve(String),
    Cves(CveSearchQuery),
    Cpes(CpeSearchQuery),
}

impl Request {
    fn from_command(command: Command) -> Self {
        match command {
            Command::Cve {
                command: CveCommand::Get { id },
            } => Request::GetCve(id),
            Command::Cve {
                command: CveCommand::Search(search),
            } => Request::Cves(search.into()),
            Command::Cpe {
                command: CpeCommand::Search(search),
            } => Request::Cpes(search.into()),
        }
    }

    /// Query errors are reported before any client is built
    fn validate(&self) -> Result<()> {
        match self {
            Request::GetCve(id) if id.trim().is_empty() => {
                return Err(NvdError::validation("--id is required").into())
            }
            Request::GetCve(id) => CveSearchQuery::by_id(id.trim()).validate()?,
            Request::Cves(query) => query.validate()?,
            Request::Cpes(query) => query.validate()?,
        }
        Ok(())
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = resolve_settings(&args, std::env::var(API_KEY_ENV).ok(), config)?;

    log::debug!(
        "delay={:?} api_key={} proxy={} output={}",
        settings.options.delay,
        settings.options.api_key.is_some(),
        settings.options.proxy.is_some(),
        settings.output
    );

    let request = Request::from_command(args.command);
    request.validate()?;

    // Create adapters (Dependency Injection)
    let transport = NvdHttpClient::new(&settings.options)?;
    let use_case = SearchNvdUseCase::new(
        transport,
        ThreadSleepPacer::new(),
        StderrProgressReporter::new(),
        &settings.options,
    );

    let response = match &request {
        Request::GetCve(id) => use_case.get_cve(id)?,
        Request::Cves(query) => use_case.search_cves(query)?,
        Request::Cpes(query) => use_case.search_cpes(query)?,
    };

    log::debug!(
        "{} records from {} page(s)",
        response.record_count,
        response.pages_fetched
    );

    let formatter = FormatterFactory::create(settings.output, settings.pretty);
    let formatted_output = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output_file(args.output_file));
    presenter.present(&formatted_output)?;

    Ok(())
}
