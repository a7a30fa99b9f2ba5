//! Per-request tracing.
//!
//! Each request gets a fresh trace id which is
//! - stored in the request extensions as a `String`,
//! - made available to handlers through [`trace_ctx::trace_id`],
//! - attached to a `request` span wrapping the downstream service,
//! - echoed in the `x-request-id` response header.
//!
//! Completion is logged once per request, at a level chosen by status class.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::trace_ctx;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Copy, Debug, Default)]
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let trace_id = Uuid::new_v4().to_string();
        let method = req.method().to_string();
        let path = req.path().to_string();

        req.extensions_mut().insert(trace_id.clone());

        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %method,
            path = %path
        );
        let fut = trace_ctx::with_trace_id(trace_id.clone(), self.service.call(req));

        Box::pin(
            async move {
                let result = fut.await;

                let status = match &result {
                    Ok(res) => res.status(),
                    Err(err) => err.as_response_error().status_code(),
                };
                let duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
                let status_code = status.as_u16();

                if status.is_server_error() {
                    error!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, message = "request_completed");
                } else if status.is_client_error() {
                    warn!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, message = "request_completed");
                } else {
                    info!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, message = "request_completed");
                }

                let mut res = result?;
                res.headers_mut().insert(
                    HeaderName::from_static(REQUEST_ID_HEADER),
                    HeaderValue::from_str(&trace_id)
                        .unwrap_or_else(|_| HeaderValue::from_static("invalid-uuid")),
                );
                Ok(res)
            }
            .instrument(span),
        )
    }
}
