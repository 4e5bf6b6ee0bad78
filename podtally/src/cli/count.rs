use podtally_inventory::PodQueryService;
use snafu::ResultExt;
use tokio::io::AsyncWriteExt;

use crate::{
    cli::error::{self, Error},
    config::Config,
};

/// Prints the number of pods in the configured namespace.
pub async fn run(kube_client: kube::Client, config: Config) -> Result<(), Error> {
    let count = PodQueryService::new(kube_client).count(&config.namespace).await?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{count}\n").as_bytes()).await.context(error::WriteStdoutSnafu)
}
