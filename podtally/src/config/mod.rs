mod error;

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use podtally_base::consts;
use podtally_cli::config::LogConfig;
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::error::Error;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// The only namespace the service reports on.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_listen_address")]
    pub listen_address: SocketAddr,

    #[serde(default = "LogConfig::default")]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            listen_address: default_listen_address(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    pub fn search_config_file_path() -> PathBuf {
        let paths = vec![Self::default_path()]
            .into_iter()
            .chain(podtally_base::fallback_project_config_directories().into_iter().map(
                |mut path| {
                    path.push(podtally_base::CLI_CONFIG_NAME);
                    path
                },
            ))
            .collect::<Vec<_>>();
        for path in paths {
            let Ok(exists) = path.try_exists() else {
                continue;
            };
            if exists {
                return path;
            }
        }
        Self::default_path()
    }

    #[inline]
    pub fn default_path() -> PathBuf {
        [
            podtally_base::PROJECT_CONFIG_DIR.to_path_buf(),
            PathBuf::from(podtally_base::CLI_CONFIG_NAME),
        ]
        .into_iter()
        .collect()
    }

    /// Loads the configuration found by [`Config::search_config_file_path`],
    /// falling back to the built-in defaults when no file exists.
    pub fn load_or_default() -> Result<Self, Error> {
        Self::load_if_exists(&Self::search_config_file_path())
    }

    fn load_if_exists(path: &Path) -> Result<Self, Error> {
        if path.try_exists().unwrap_or(false) { Self::load(path) } else { Ok(Self::default()) }
    }

    #[inline]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut config: Self = {
            let path =
                path.as_ref().try_resolve().map(|path| path.to_path_buf()).with_context(|_| {
                    error::ResolveFilePathSnafu { file_path: path.as_ref().to_path_buf() }
                })?;
            let data =
                std::fs::read(&path).context(error::OpenConfigSnafu { filename: path.clone() })?;
            serde_yaml::from_slice(&data).context(error::ParseConfigSnafu { filename: path })?
        };

        config.log.file_path = match config.log.file_path.map(|path| {
            path.try_resolve()
                .map(|path| path.to_path_buf())
                .with_context(|_| error::ResolveFilePathSnafu { file_path: path.clone() })
        }) {
            Some(Ok(path)) => Some(path),
            Some(Err(err)) => return Err(err),
            None => None,
        };

        Ok(config)
    }

    /// The default configuration rendered as YAML.
    pub fn template_basic() -> Result<String, Error> {
        serde_yaml::to_string(&Self::default()).context(error::SerializeConfigSnafu)
    }
}

fn default_namespace() -> String { consts::DEFAULT_NAMESPACE.to_string() }

const fn default_listen_address() -> SocketAddr { consts::DEFAULT_LISTEN_ADDRESS }
