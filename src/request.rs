//! Incoming HTTP request type.

use std::borrow::Cow;
use std::collections::HashMap;

use bytes::Bytes;
use http::HeaderMap;

use crate::method::Method;

/// An incoming HTTP request with its body already collected.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    /// Builds a request from its parts. `target` is the request-target as it
    /// appears on the wire: a path, optionally followed by `?query`.
    pub fn new(method: Method, target: &str, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_owned(), Some(query.to_owned())),
            None => (target.to_owned(), None),
        };
        Self {
            method,
            path,
            query,
            headers,
            body: body.into(),
            params: HashMap::new(),
        }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Header lookup. Names are case-insensitive; values that are not visible
    /// ASCII read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter, percent-decoded.
    ///
    /// For a route `/api/blogs/author/{author}`, `req.param("author")` on
    /// `/api/blogs/author/Nicole%20Fenn` returns `Some("Nicole Fenn")`.
    pub fn param(&self, key: &str) -> Option<Cow<'_, str>> {
        let raw = self.params.get(key)?;
        Some(urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw.as_str())))
    }

    /// Returns the first query-string value for `key`, percent-decoded with
    /// `+` read as a space.
    pub fn query(&self, key: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        query.split('&').find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            if k != key {
                return None;
            }
            let v = v.replace('+', " ");
            Some(urlencoding::decode(&v).map(Cow::into_owned).unwrap_or(v))
        })
    }

    pub(crate) fn set_params(&mut self, params: HashMap<String, String>) {
        self.params = params;
    }
}
