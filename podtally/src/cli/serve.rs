use std::net::SocketAddr;

use clap::Args;

use crate::{cli::Error, config::Config, server};

#[derive(Args, Clone)]
pub struct ServeCommand {
    #[arg(
        short,
        long = "listen",
        env = "PODTALLY_LISTEN_ADDRESS",
        help = "Socket address the HTTP server listens on. Defaults to the configured \
                listenAddress (0.0.0.0:8080)."
    )]
    pub listen_address: Option<SocketAddr>,
}

impl ServeCommand {
    pub async fn run(self, kube_client: kube::Client, config: Config) -> Result<(), Error> {
        let Config { namespace, listen_address, .. } = config;
        let listen_address = self.listen_address.unwrap_or(listen_address);

        server::serve(kube_client, namespace, listen_address).await?;
        Ok(())
    }
}
