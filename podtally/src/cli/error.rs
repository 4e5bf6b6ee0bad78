use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Configuration { source: crate::config::Error },

    #[snafu(display("{source}"))]
    Server { source: crate::server::Error },

    #[snafu(display("{source}"))]
    Inventory { source: podtally_inventory::Error },

    #[snafu(display("Failed to write to stdout, error: {source}"))]
    WriteStdout { source: std::io::Error },

    #[snafu(display("Failed to initialize Kubernetes client configuration, error: {source}"))]
    KubeConfig {
        #[snafu(source(from(kube::Error, Box::new)))]
        source: Box<kube::Error>,
    },
}

impl From<crate::config::Error> for Error {
    fn from(source: crate::config::Error) -> Self { Self::Configuration { source } }
}

impl From<crate::server::Error> for Error {
    fn from(source: crate::server::Error) -> Self { Self::Server { source } }
}

impl From<podtally_inventory::Error> for Error {
    fn from(source: podtally_inventory::Error) -> Self { Self::Inventory { source } }
}
