use super::request::{parse_request, ParsedRequest};
use super::response::{write_html, write_javascript, write_json_error};
use crate::asset;
use crate::config::{ApiReferenceOptions, ReferenceConfiguration, SpecProvider};
use crate::html::{html_document, BROWSER_SCRIPT_ROUTE};
use arc_swap::ArcSwap;
use http::Method;
use may_minihttp::{HttpService, Request, Response};
use std::io;
use std::sync::Arc;
use tracing::{debug, warn};

/// A route registered by the plugin.
///
/// `hide` marks the route for exclusion from generated specification
/// documents; a companion generator that lists the host's routes reads it
/// through [`ApiReference::routes`] and leaves these endpoints out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMeta {
    pub method: Method,
    pub path: String,
    pub hide: bool,
}

/// The registered API reference plugin.
///
/// Construction via [`ApiReference::register`] is the single
/// unregistered-to-registered transition: when neither a specification source
/// nor a provider exists, the plugin stays empty for the process lifetime and
/// every request falls through to the host. There is no retry.
pub struct ApiReference {
    route_prefix: String,
    configuration: ArcSwap<ReferenceConfiguration>,
    provider: Option<Arc<dyn SpecProvider>>,
    routes: Vec<RouteMeta>,
    script: &'static str,
}

impl ApiReference {
    /// Register the plugin routes.
    ///
    /// Skips registration entirely and logs a warning when the configuration
    /// carries neither `spec.content` nor `spec.url` and no provider is
    /// given. Registration proceeds when any of the three exists; the
    /// specification source itself is re-checked on every request, so a
    /// provider registered here may defer its work until render time.
    pub fn register(
        options: ApiReferenceOptions,
        provider: Option<Arc<dyn SpecProvider>>,
    ) -> Self {
        let ApiReferenceOptions {
            route_prefix,
            configuration,
        } = options;
        let configuration = configuration.unwrap_or_default();

        let mut routes = Vec::new();
        if !configuration.has_spec_source() && provider.is_none() {
            warn!(
                route_prefix = %route_prefix,
                "no spec.content or spec.url was provided and no specification provider \
                 is registered; skipping API reference route registration. \
                 Please provide one of these options."
            );
        } else {
            routes.push(RouteMeta {
                method: Method::GET,
                path: route_prefix.clone(),
                hide: true,
            });
            routes.push(RouteMeta {
                method: Method::GET,
                path: BROWSER_SCRIPT_ROUTE.to_string(),
                hide: true,
            });
            debug!(route_prefix = %route_prefix, "API reference routes registered");
        }

        Self {
            route_prefix,
            configuration: ArcSwap::from_pointee(configuration),
            provider,
            routes,
            script: asset::browser_script(),
        }
    }

    /// Routes the plugin registered; empty when registration was skipped.
    pub fn routes(&self) -> &[RouteMeta] {
        &self.routes
    }

    fn is_registered(&self) -> bool {
        !self.routes.is_empty()
    }

    /// Latest configuration snapshot with fallbacks applied.
    ///
    /// Read-then-conditionally-replace on a single-slot cell: the fallback
    /// fill runs once in practice, and a concurrent fill writes the same
    /// value, so the race is benign.
    fn effective_configuration(&self) -> Arc<ReferenceConfiguration> {
        let current = self.configuration.load_full();
        if !current.needs_fallback() {
            return current;
        }
        self.configuration
            .rcu(|current| current.with_fallbacks(self.provider.as_ref()));
        self.configuration.load_full()
    }

    /// `GET {route_prefix}`: render the reference HTML document.
    pub fn reference_endpoint(&self, res: &mut Response) -> io::Result<()> {
        let configuration = self.effective_configuration();
        write_html(res, html_document(&configuration));
        Ok(())
    }

    /// `GET /@scalar/fastify-api-reference/browser.js`: serve the client
    /// bundle verbatim.
    pub fn browser_script_endpoint(&self, res: &mut Response) -> io::Result<()> {
        write_javascript(res, self.script);
        Ok(())
    }

    /// Dispatch a request against the plugin routes.
    ///
    /// Returns `None` when the request targets no plugin route (or when
    /// registration was skipped), letting the host's own routing and
    /// not-found handling take over.
    pub fn handle(&self, method: &str, path: &str, res: &mut Response) -> Option<io::Result<()>> {
        if !self.is_registered() || method != Method::GET {
            return None;
        }
        if path == self.route_prefix {
            return Some(self.reference_endpoint(res));
        }
        if path == BROWSER_SCRIPT_ROUTE {
            return Some(self.browser_script_endpoint(res));
        }
        None
    }
}

/// Standalone `may_minihttp` service serving only the plugin routes.
///
/// Hosts with their own routing embed [`ApiReference`] directly instead and
/// call [`ApiReference::handle`] ahead of their dispatch.
#[derive(Clone)]
pub struct ApiReferenceService {
    plugin: Arc<ApiReference>,
}

impl ApiReferenceService {
    pub fn new(plugin: ApiReference) -> Self {
        Self {
            plugin: Arc::new(plugin),
        }
    }

    pub fn plugin(&self) -> &ApiReference {
        &self.plugin
    }
}

impl HttpService for ApiReferenceService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let ParsedRequest { method, path } = parse_request(req);

        if let Some(result) = self.plugin.handle(&method, &path, res) {
            return result;
        }

        debug!(method = %method, path = %path, "no plugin route matched");
        write_json_error(
            res,
            404,
            serde_json::json!({ "error": "Not Found", "method": method, "path": path }),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SpecContent, SpecSource};
    use serde_json::json;

    fn options_with_url(prefix: &str, url: &str) -> ApiReferenceOptions {
        ApiReferenceOptions {
            route_prefix: prefix.to_string(),
            configuration: Some(ReferenceConfiguration {
                spec: Some(SpecSource {
                    url: Some(url.to_string()),
                    ..SpecSource::default()
                }),
                ..ReferenceConfiguration::default()
            }),
        }
    }

    #[test]
    fn test_registration_with_url() {
        let plugin = ApiReference::register(options_with_url("/docs", "https://x/openapi.json"), None);
        let paths: Vec<&str> = plugin.routes().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/docs", BROWSER_SCRIPT_ROUTE]);
        assert!(plugin.routes().iter().all(|r| r.hide));
        assert!(plugin.routes().iter().all(|r| r.method == Method::GET));
    }

    #[test]
    fn test_registration_skipped_without_source_or_provider() {
        let plugin = ApiReference::register(ApiReferenceOptions::default(), None);
        assert!(plugin.routes().is_empty());
    }

    #[test]
    fn test_registration_with_inline_content() {
        let options = ApiReferenceOptions {
            route_prefix: "/".to_string(),
            configuration: Some(ReferenceConfiguration {
                spec: Some(SpecSource {
                    content: Some(SpecContent::Inline(json!({ "openapi": "3.1.0" }))),
                    url: None,
                }),
                ..ReferenceConfiguration::default()
            }),
        };
        let plugin = ApiReference::register(options, None);
        assert_eq!(plugin.routes().len(), 2);
    }

    #[test]
    fn test_effective_configuration_fills_once() {
        let plugin = ApiReference::register(options_with_url("/docs", "https://x/openapi.json"), None);
        let first = plugin.effective_configuration();
        let second = plugin.effective_configuration();
        // The snapshot is patched in place; later reads see the same cell.
        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.custom_css.is_some());
    }
}
