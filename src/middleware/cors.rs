//! Cross-origin resource sharing.
//!
//! Only an explicit list of origins is allowed, and credentialed requests are
//! permitted for them. There is no wildcard mode: with credentials enabled
//! browsers reject `access-control-allow-origin: *` anyway.

use tracing::debug;

use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The cross-origin policy applied by the router.
#[derive(Clone, Debug)]
pub struct CorsPolicy {
    origins: Vec<String>,
    methods: Vec<Method>,
    headers: Vec<String>,
    allow_credentials: bool,
}

impl CorsPolicy {
    /// A policy admitting `origins`, with the methods and request headers the
    /// blog API front-end uses and credentials allowed.
    pub fn new<I, O>(origins: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        Self {
            origins: origins.into_iter().map(Into::into).collect(),
            methods: vec![
                Method::Get,
                Method::Post,
                Method::Put,
                Method::Delete,
                Method::Patch,
                Method::Options,
            ],
            headers: vec![
                "Content-Type".to_owned(),
                "Authorization".to_owned(),
                "Access-Control-Allow-Credentials".to_owned(),
            ],
            allow_credentials: true,
        }
    }

    pub fn allow_credentials(mut self, allow: bool) -> Self {
        self.allow_credentials = allow;
        self
    }

    /// Exact, case-sensitive match on the serialised origin.
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.origins.iter().any(|o| o == origin)
    }

    /// Answers a CORS preflight (`OPTIONS` carrying
    /// `access-control-request-method`). Returns `None` for every other
    /// request so it flows on to the router.
    ///
    /// Preflights from unknown origins, or asking for a method outside the
    /// policy, still get a `204` but without any `access-control-*` headers,
    /// which the browser treats as a refusal.
    pub fn preflight(&self, req: &Request) -> Option<Response> {
        if req.method() != Method::Options {
            return None;
        }
        let requested = req.header("access-control-request-method")?;

        let mut response = Response::status(Status::NoContent);
        let origin = match req.header("origin") {
            Some(origin) if self.allows_origin(origin) => origin,
            origin => {
                debug!(?origin, "preflight from disallowed origin");
                return Some(response);
            }
        };
        let method_allowed = requested
            .parse::<Method>()
            .map(|m| self.methods.contains(&m))
            .unwrap_or(false);
        if !method_allowed {
            debug!(origin, requested, "preflight for disallowed method");
            return Some(response);
        }

        self.stamp(origin, &mut response);
        response.set_header("access-control-allow-methods", self.methods_header());
        response.set_header("access-control-allow-headers", self.headers.join(", "));
        Some(response)
    }

    /// Adds the `access-control-*` headers to an actual (non-preflight)
    /// response when the request came from an allowed origin.
    pub fn apply(&self, origin: Option<&str>, response: &mut Response) {
        if let Some(origin) = origin.filter(|o| self.allows_origin(o)) {
            self.stamp(origin, response);
        }
    }

    fn stamp(&self, origin: &str, response: &mut Response) {
        response.set_header("access-control-allow-origin", origin);
        if self.allow_credentials {
            response.set_header("access-control-allow-credentials", "true");
        }
        response.set_header("vary", "Origin");
    }

    fn methods_header(&self) -> String {
        self.methods.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ")
    }
}
