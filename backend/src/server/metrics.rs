//! Optional Prometheus request metrics.
//!
//! The app type must not change with the exporter's availability, so both
//! the instrumented and the pass-through pipelines are boxed to the same
//! service type.

use std::fmt::Display;
use std::sync::Arc;

use actix_service::boxed::{self, BoxService};
use actix_service::{Service, ServiceExt as _, Transform};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use futures_util::future::{LocalBoxFuture, ready};
use tracing::{info, warn};

/// Prefix of every exported metric name.
pub(crate) const METRICS_NAMESPACE: &str = "invitation";
/// Path the exporter answers on.
pub(crate) const METRICS_ENDPOINT: &str = "/metrics";

/// Build the request exporter. Failure disables metrics rather than
/// aborting startup.
pub(crate) fn build_request_metrics() -> Option<PrometheusMetrics> {
    exporter_or_none(
        PrometheusMetricsBuilder::new(METRICS_NAMESPACE)
            .endpoint(METRICS_ENDPOINT)
            .build(),
    )
}

fn exporter_or_none<E: Display>(built: Result<PrometheusMetrics, E>) -> Option<PrometheusMetrics> {
    match built {
        Ok(exporter) => {
            info!(endpoint = METRICS_ENDPOINT, "prometheus metrics enabled");
            Some(exporter)
        }
        Err(error) => {
            warn!(%error, "prometheus metrics disabled");
            None
        }
    }
}

/// Middleware recording request metrics when an exporter is present.
#[derive(Clone, Default)]
pub(crate) struct RequestMetrics {
    exporter: Option<Arc<PrometheusMetrics>>,
}

impl RequestMetrics {
    pub(crate) fn new(exporter: Option<PrometheusMetrics>) -> Self {
        Self {
            exporter: exporter.map(Arc::new),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let Some(exporter) = self.exporter.clone() else {
            let passthrough = service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
            return Box::pin(ready(Ok(boxed::service(passthrough))));
        };
        let pending = Compat::new((*exporter).clone()).new_transform(service);
        Box::pin(async move {
            let instrumented = pending.await?;
            Ok(boxed::service(instrumented))
        })
    }
}
