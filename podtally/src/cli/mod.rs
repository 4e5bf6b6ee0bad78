//! The `podtally` command line: run the HTTP service or query a namespace
//! once from the terminal.
//!
//! # Examples
//!
//! ```bash
//! # Serve /count, /list and /metrics for the `default` namespace
//! podtally serve
//!
//! # Serve another namespace on another port
//! podtally --namespace okteto serve --listen 127.0.0.1:9090
//!
//! # Print the pods of a namespace, most restarted first
//! podtally --namespace okteto list --sort restarts --order desc
//! ```

mod count;
pub mod error;
mod list;
mod serve;

use std::{io::Write, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use snafu::ResultExt;

pub use self::error::Error;
use self::{list::ListCommand, serve::ServeCommand};
use crate::config::Config;

/// Entry point of the `podtally` command line.
#[derive(Parser)]
#[command(
    name = podtally_base::CLI_PROGRAM_NAME,
    author,
    version,
    about = "Podtally: pod counts, pod listings and a pod-count gauge for one Kubernetes \
             namespace.",
    color = clap::ColorChoice::Always
)]
pub struct Cli {
    /// The subcommand to execute; without one the help text is printed.
    #[clap(subcommand)]
    commands: Option<Commands>,

    /// Path to the configuration file.
    ///
    /// Defaults to `~/.config/podtally/config.yaml`. A missing default file
    /// means built-in defaults; a missing explicit file is an error.
    #[clap(
        long = "config",
        short = 'c',
        env = "PODTALLY_CONFIG_FILE_PATH",
        help = "Specify a configuration file. Defaults to ~/.config/podtally/config.yaml or \
                PODTALLY_CONFIG_FILE_PATH env var."
    )]
    config_file: Option<PathBuf>,

    /// Overrides `log.level` of the configuration file.
    ///
    /// Accepts `trace`, `debug`, `info`, `warn` and `error`.
    #[clap(
        long = "log-level",
        env = "PODTALLY_LOG_LEVEL",
        help = "Set the logging level (e.g., info, debug, trace)."
    )]
    log_level: Option<tracing::Level>,

    /// Overrides `namespace` of the configuration file.
    ///
    /// Every command reports on this one namespace only.
    #[clap(
        long = "namespace",
        short = 'n',
        env = "PODTALLY_NAMESPACE",
        help = "Kubernetes namespace to report on. Defaults to the configured namespace \
                (\"default\")."
    )]
    namespace: Option<String>,
}

/// The subcommands of the `podtally` command line.
#[derive(Clone, Subcommand)]
pub enum Commands {
    /// Prints the client version and, unless `--client` is given, the version
    /// of the Kubernetes API server.
    #[command(about = "Display client and server version information")]
    Version {
        /// Skips the API server query.
        #[clap(long = "client", help = "If true, shows client version only (no server required).")]
        client: bool,
    },

    /// Writes a completion script for `shell` to standard output.
    #[command(about = "Generate shell completion script for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    /// Writes the built-in configuration as YAML to standard output.
    #[command(about = "Output the default configuration in YAML format")]
    DefaultConfig,

    /// Runs the HTTP server with the `/count`, `/list` and `/metrics`
    /// endpoints until interrupted.
    #[command(alias = "s", about = "Serve the count, list and metrics HTTP endpoints")]
    Serve(ServeCommand),

    /// Prints the number of pods once and exits.
    #[command(alias = "c", about = "Print the number of pods in the namespace")]
    Count,

    /// Prints a table of the pods once and exits, optionally sorted.
    #[command(alias = "l", about = "List the pods of the namespace with age and restarts")]
    List(ListCommand),
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    /// Loads the configuration and applies command line overrides on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    fn load_config(&self) -> Result<Config, Error> {
        let mut config = match self.config_file {
            Some(ref path) => Config::load(path)?,
            None => Config::load_or_default()?,
        };

        if let Some(log_level) = self.log_level {
            config.log.level = log_level;
        }
        if let Some(ref namespace) = self.namespace {
            config.namespace.clone_from(namespace);
        }

        Ok(config)
    }

    /// Runs the selected command and returns the process exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, the Kubernetes
    /// client cannot be configured, or the command itself fails.
    pub fn run(self) -> Result<i32, Error> {
        let client_version = podtally_base::PROJECT_VERSION;
        match self.commands {
            Some(Commands::Version { client }) if client => {
                write_stdout(&format!("Client Version: {client_version}\n"))?;
                return Ok(0);
            }
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                return Ok(0);
            }
            Some(Commands::DefaultConfig) => {
                write_stdout(&Config::template_basic()?)?;
                return Ok(0);
            }
            None => {
                let help = Self::command().render_long_help().ansi().to_string();
                std::io::stderr().write_all(help.as_bytes()).context(error::WriteStdoutSnafu)?;
                return Ok(-1);
            }
            _ => {}
        }

        let config = self.load_config()?;
        config.log.registry();
        tracing::debug!(
            "Reporting on namespace {}, listening on {}",
            config.namespace,
            config.listen_address
        );

        let fut = async move {
            let kube_client = kube::Client::try_default().await.context(error::KubeConfigSnafu)?;
            match self.commands {
                Some(Commands::Version { .. }) => {
                    let server_version = kube_client.apiserver_version().await.map_or_else(
                        |_| "unknown".to_string(),
                        |info| format!("{}.{}", info.major, info.minor),
                    );
                    write_stdout(&format!(
                        "Client Version: {client_version}\nServer Version: {server_version}\n",
                    ))?;
                }
                Some(Commands::Serve(cmd)) => cmd.run(kube_client, config).await?,
                Some(Commands::Count) => count::run(kube_client, config).await?,
                Some(Commands::List(cmd)) => cmd.run(kube_client, config).await?,
                Some(Commands::Completions { .. } | Commands::DefaultConfig) | None => {}
            }

            Ok(0)
        };

        actix_web::rt::System::new().block_on(fut)
    }
}

fn write_stdout(content: &str) -> Result<(), Error> {
    std::io::stdout().write_all(content.as_bytes()).context(error::WriteStdoutSnafu)
}
