//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Request log layer used by the router.
pub type RequestTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
>;

/// Creates the request logging layer.
///
/// Observes requests and responses without altering them. Each request gets
/// an `INFO` span with method, URI and version. Arrival is logged at `DEBUG`;
/// the finished response (status, latency in ms) at `INFO`. 5xx responses
/// are additionally reported at `ERROR`.
///
/// Redirect hits (`302`) and misses (`404`) both log at `INFO`, so the access
/// log shows every short code lookup.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/shorten version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// INFO request{method=GET uri=/q0U version=HTTP/1.1}: finished processing request latency=1 ms status=302
/// ```
pub fn layer() -> RequestTraceLayer {
    let span = DefaultMakeSpan::new().level(Level::INFO);
    let on_request = DefaultOnRequest::new().level(Level::DEBUG);
    let on_response = DefaultOnResponse::new()
        .level(Level::INFO)
        .latency_unit(LatencyUnit::Millis);
    let on_failure = DefaultOnFailure::new()
        .level(Level::ERROR)
        .latency_unit(LatencyUnit::Millis);

    TraceLayer::new_for_http()
        .make_span_with(span)
        .on_request(on_request)
        .on_response(on_response)
        .on_failure(on_failure)
}
