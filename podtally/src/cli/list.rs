use clap::Args;
use podtally_inventory::{Clock, PodQueryService, SortDirection, SortKey, SystemClock, sort_pods};
use snafu::ResultExt;
use tokio::io::AsyncWriteExt;

use crate::{
    cli::error::{self, Error},
    config::Config,
    ui::table::PodSummaryListExt,
};

#[derive(Args, Clone)]
pub struct ListCommand {
    #[arg(short, long, help = "Sort pods by \"name\", \"age\" or \"restarts\".")]
    pub sort: Option<SortKey>,

    #[arg(short, long, help = "Sort direction, \"asc\" or \"desc\". Ignored without --sort.")]
    pub order: Option<SortDirection>,
}

impl ListCommand {
    pub async fn run(self, kube_client: kube::Client, config: Config) -> Result<(), Error> {
        let Self { sort, order } = self;

        let mut pods = PodQueryService::new(kube_client).list(&config.namespace).await?;
        if let Some(key) = sort {
            sort_pods(&mut pods, key, order.unwrap_or_default(), SystemClock.now());
        }

        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(pods.render_table(&SystemClock).as_bytes())
            .await
            .context(error::WriteStdoutSnafu)?;
        stdout.write_u8(b'\n').await.context(error::WriteStdoutSnafu)
    }
}
