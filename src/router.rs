//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. The router owns the
//! application state and the CORS policy, and [`Router::handle`] is the whole
//! request pipeline short of the socket: preflight, route, run the handler,
//! stamp cross-origin headers.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;
use serde_json::json;
use tracing::error;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::CorsPolicy;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup with the shared state and pass it to
/// [`Server::serve`](crate::Server::serve). Each registration returns `self`
/// so calls chain naturally.
pub struct Router<S> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    state: Arc<S>,
    cors: Option<CorsPolicy>,
}

/// Outcome of a route lookup.
pub(crate) enum Route<S> {
    Found(BoxedHandler<S>, HashMap<String, String>),
    /// The path exists, but not for this method.
    MethodNotAllowed,
    NotFound,
}

impl<S: Send + Sync + 'static> Router<S> {
    pub fn new(state: S) -> Self {
        Self::with_shared_state(Arc::new(state))
    }

    pub fn with_shared_state(state: Arc<S>) -> Self {
        Self { routes: HashMap::new(), state, cors: None }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    /// Static segments win over parameters, so `/api/blogs/favorites` and
    /// `/api/blogs/{id}` can both be registered.
    ///
    /// # Panics
    ///
    /// Panics on a malformed or conflicting route. Routes are fixed at
    /// startup, so this is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::Post, path, handler)
    }

    pub fn put(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::Put, path, handler)
    }

    pub fn patch(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::Patch, path, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::Delete, path, handler)
    }

    /// Installs a cross-origin policy for every route.
    pub fn cors(mut self, policy: CorsPolicy) -> Self {
        self.cors = Some(policy);
        self
    }

    /// Finds the handler for `method` and `path`. `HEAD` falls back to the
    /// `GET` route when no `HEAD` route is registered.
    pub(crate) fn lookup(&self, method: Method, path: &str) -> Route<S> {
        let direct = self.find(method, path);
        let found = match (direct, method) {
            (None, Method::Head) => self.find(Method::Get, path),
            (direct, _) => direct,
        };
        if let Some(route) = found {
            return route;
        }
        let elsewhere = self.routes.iter()
            .any(|(m, tree)| *m != method && tree.at(path).is_ok());
        if elsewhere { Route::MethodNotAllowed } else { Route::NotFound }
    }

    fn find(&self, method: Method, path: &str) -> Option<Route<S>> {
        let matched = self.routes.get(&method)?.at(path).ok()?;
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some(Route::Found(Arc::clone(matched.value), params))
    }

    /// Runs one request through the pipeline and produces its response.
    ///
    /// Never fails: unmatched paths become `404`, wrong methods `405`, and a
    /// handler that panics becomes `500` without taking the process down.
    /// `HEAD` answers carry the headers of the matching `GET` and no body.
    pub async fn handle(&self, mut req: Request) -> Response {
        let head = req.method() == Method::Head;
        if let Some(preflight) = self.cors.as_ref().and_then(|cors| cors.preflight(&req)) {
            return preflight;
        }
        let origin = req.header("origin").map(str::to_owned);

        let mut response = match self.lookup(req.method(), req.path()) {
            Route::Found(handler, params) => {
                req.set_params(params);
                self.call(handler, req).await
            }
            Route::MethodNotAllowed => method_not_allowed(),
            Route::NotFound => endpoint_not_found(),
        };

        if let Some(cors) = &self.cors {
            cors.apply(origin.as_deref(), &mut response);
        }
        if head {
            response.clear_body();
        }
        response
    }

    /// Runs the handler on its own task so a panic is contained to this request.
    async fn call(&self, handler: BoxedHandler<S>, req: Request) -> Response {
        let fut = handler.call(Arc::clone(&self.state), req);
        match tokio::spawn(fut).await {
            Ok(response) => response,
            Err(e) => {
                error!("handler task failed: {e}");
                internal_server_error()
            }
        }
    }
}

/// `404` for a path no route matches.
pub fn endpoint_not_found() -> Response {
    Response::to_json(Status::NotFound, &json!({ "error": "Endpoint not found" }))
}

fn method_not_allowed() -> Response {
    Response::to_json(Status::MethodNotAllowed, &json!({ "error": "Method not allowed" }))
}

fn internal_server_error() -> Response {
    Response::to_json(Status::InternalServerError, &json!({ "error": "Internal server error" }))
}
