use actix_web::{HttpResponse, http::header::ContentType, web};
use podtally_inventory::{PodCatalog, sort_pods};
use snafu::ResultExt;

use crate::server::{
    ApiState,
    error::{self, ApiError},
    query::ListQuery,
};

/// `GET /count`: the number of pods as a plain-text integer.
pub async fn count<C>(state: web::Data<ApiState<C>>) -> Result<HttpResponse, ApiError>
where
    C: PodCatalog + 'static,
{
    let count = state.service.count(&state.namespace).await.context(error::CountPodsSnafu)?;
    Ok(HttpResponse::Ok().content_type(ContentType::plaintext()).body(count.to_string()))
}

/// `GET /list`: the pod summaries as a JSON array, optionally sorted.
///
/// The query is validated before the cluster is contacted. Repeated `sort`
/// or `order` keys keep their first value.
pub async fn list<C>(
    state: web::Data<ApiState<C>>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ApiError>
where
    C: PodCatalog + 'static,
{
    let ordering = ListQuery::from_pairs(query.into_inner()).ordering()?;
    let mut pods = state.service.list(&state.namespace).await.context(error::ListPodsSnafu)?;
    if let Some((key, direction)) = ordering {
        sort_pods(&mut pods, key, direction, state.clock.now());
    }
    Ok(HttpResponse::Ok().json(pods))
}

/// `GET /metrics`: samples the pod count and renders the registry.
///
/// A failed count never fails the scrape; the gauge reports `-1` instead.
pub async fn metrics<C>(state: web::Data<ApiState<C>>) -> Result<HttpResponse, ApiError>
where
    C: PodCatalog + 'static,
{
    let sample = async {
        state
            .service
            .count(&state.namespace)
            .await
            .inspect_err(|err| tracing::warn!("Failed to sample pod count, error: {err}"))
            .ok()
    };
    let body = state.metrics.scrape(sample).await.context(error::EncodeMetricsSnafu)?;
    Ok(HttpResponse::Ok().content_type(prometheus::TEXT_FORMAT).body(body))
}
