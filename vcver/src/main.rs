use std::path::PathBuf;
use std::{fs, io, process};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use strum::{Display, EnumString};
use tracing::{debug, trace, Level};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use vcver::config::TOOL_NAME;
use vcver::{ModuleFormat, Options, Version};


#[derive(Parser, Debug)]
#[command(
    name="vcver",
    version=vcver::config::VERSION,
    about="Derive a version number from `git describe`, with a version.txt fallback",
)]
struct Cli {
    /// Turn verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not print any logging messages.
    ///
    /// The resolved version and the error diagnostics are still printed on stdout.
    #[arg(short, long)]
    quiet: bool,

    /// JSON file containing the options. Command-line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The directory of the project root. Accepts the `{pwd}` placeholder
    #[arg(short, long)]
    root: Option<String>,

    /// File caching the raw describe output. Accepts the `{pwd}` and `{root}` placeholders
    #[arg(short = 'f', long)]
    version_file: Option<String>,

    /// Neither read nor write a version file
    #[arg(long, conflicts_with = "version_file")]
    no_version_file: bool,

    /// Do not append a `.devN` suffix when there are commits after the tag
    #[arg(long)]
    no_dev_version: bool,

    /// Generate a module containing the version at this path (repeatable)
    #[arg(short, long = "module")]
    modules: Vec<PathBuf>,

    /// Language of the generated modules: `python` (default) or `rust`
    #[arg(long)]
    module_format: Option<ModuleFormat>,

    /// What to print once the version is resolved
    #[arg(short, long, default_value_t = Print::Version)]
    print: Print,

    /// The command to run instead of `git describe`, given after `--`
    #[arg(last = true)]
    command: Vec<String>,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
enum Print {
    Version,
    Commits,
    Sha,
    Json,
}

impl Print {
    fn render(&self, version: &Version) -> Result<String> {
        Ok(match self {
            Print::Version => version.version().to_string(),
            Print::Commits => version.commits().to_string(),
            Print::Sha => version.sha().to_string(),
            Print::Json => serde_json::to_string(version)?,
        })
    }
}


fn init_tracing(verbose_level: u8) {
    // use an env filter with default level of INFO
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let tracing = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter);

    // flags given on the command-line override those from the environment
    match verbose_level {
        0 => tracing.init(),
        1 => tracing.with_max_level(Level::DEBUG).init(),
        _ => tracing.with_max_level(Level::TRACE).init(),
    };
}

/// Build the options from the config file (if any), then apply the flags on top.
fn load_options(cli: &Cli) -> Result<Options> {
    let mut options = match &cli.config {
        Some(path) => {
            debug!("Loading options from: {}", path.display());
            let contents = fs::read_to_string(path)
                .wrap_err_with(|| format!("cannot read config file {}", path.display()))?;
            Options::from_json(&contents)
                .wrap_err_with(|| format!("invalid config file {}", path.display()))?
        },
        None => Options::default(),
    };

    if let Some(root) = &cli.root {
        options = options.root(root);
    }
    if let Some(version_file) = &cli.version_file {
        options = options.version_file(Some(version_file));
    }
    if cli.no_version_file {
        options = options.no_version_file();
    }
    if cli.no_dev_version {
        options = options.include_dev_version(false);
    }
    if let Some(format) = cli.module_format {
        options = options.module_format(format);
    }
    for path in &cli.modules {
        options = options.module_path(path);
    }
    if !cli.command.is_empty() {
        options = options.command(&cli.command);
    }

    Ok(options)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if !cli.quiet {
        init_tracing(cli.verbose);
        trace!("{:?}", cli);
    }

    let options = match load_options(&cli) {
        Ok(options) => options,
        Err(e) => {
            println!("{TOOL_NAME}: {e:#}");
            process::exit(2);
        },
    };

    match vcver::resolve(&options) {
        Ok(version) => {
            println!("{}", cli.print.render(&version)?);
        },
        Err(e) => {
            e.report(&mut io::stdout())?;
            process::exit(2);
        },
    }

    Ok(())
}
