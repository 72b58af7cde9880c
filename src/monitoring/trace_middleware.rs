use crate::monitoring::metrics::REQUEST_LATENCY_MS;
use actix_service::{Service, Transform};
use actix_web::{
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::task::{Context, Poll};
use std::time::Instant;
use tracing::{info_span, Instrument};

/// Header echoed on every response so clients can correlate log lines
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Route label for requests no resource pattern matched
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Request id of the current request, stored in the request extensions so
/// handlers and error handlers report the same id as the response header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Wraps each request in an `http_request` span and records its latency.
pub struct TraceMiddleware;

impl TraceMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TraceMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for TraceMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddlewareService { service }))
    }
}

pub struct TraceMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let method = req.method().to_string();
        let path = req.path().to_string();
        let user_agent = req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let request_id = uuid::Uuid::new_v4().to_string();
        let client_ip = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();

        let span = info_span!(
            "http_request",
            method = %method,
            path = %path,
            client_ip = %client_ip,
            request_id = %request_id,
            user_agent = %user_agent
        );

        req.extensions_mut().insert(RequestId(request_id.clone()));

        let start = Instant::now();
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.instrument(span).await?;

            let status = res.status().as_u16();
            let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
            let status_class = format!("{}xx", status / 100);
            // every unmatched path shares one label
            let route_label = res
                .request()
                .match_pattern()
                .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());

            REQUEST_LATENCY_MS
                .with_label_values(&[&method, &route_label, &status_class])
                .observe(duration_ms);

            if let Ok(value) = header::HeaderValue::from_str(&request_id) {
                res.headers_mut()
                    .insert(header::HeaderName::from_static(REQUEST_ID_HEADER), value);
            }

            if status >= 500 {
                tracing::error!(
                    method = %method,
                    route = %route_label,
                    status = status,
                    duration_ms = duration_ms,
                    request_id = %request_id,
                    "request failed"
                );
            } else {
                tracing::info!(
                    method = %method,
                    route = %route_label,
                    status = status,
                    duration_ms = duration_ms,
                    request_id = %request_id,
                    "request completed"
                );
            }

            Ok(res)
        })
    }
}
