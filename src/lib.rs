//! # Scalar API Reference
//!
//! A plugin for [`may_minihttp`] services that serves the
//! [Scalar API Reference](https://github.com/scalar/scalar) — an interactive
//! documentation viewer for OpenAPI/Swagger documents — from a configurable
//! route.
//!
//! ## Overview
//!
//! The plugin registers two `GET` routes against the host service:
//!
//! - `GET {route_prefix}` — renders an HTML document that embeds the
//!   serialized [`ReferenceConfiguration`] and boots the browser client
//! - `GET /@scalar/fastify-api-reference/browser.js` — serves the pre-built
//!   browser client verbatim
//!
//! The specification to render can be supplied inline, referenced by URL, or
//! produced on demand by a [`SpecProvider`] — typically a companion plugin
//! that generates an OpenAPI document from the routes it knows about. When no
//! source is available at all, the plugin logs a warning and registers
//! nothing, leaving the host's own not-found handling in place.
//!
//! ## Architecture
//!
//! The library is organized into a handful of small modules:
//!
//! - **[`config`]** - Plugin options, the reference configuration payload, and
//!   the fallback rules that complete a partial configuration
//! - **[`html`]** - The HTML template that carries the configuration to the
//!   browser client
//! - **[`theme`]** - The default stylesheet injected when the caller supplies
//!   neither `custom_css` nor `theme`
//! - **[`asset`]** - The embedded browser client bundle
//! - **[`server`]** - Route registration, request dispatch, and a standalone
//!   `may_minihttp` service wrapper
//! - **[`runtime_config`]** - Environment-driven coroutine runtime settings
//!
//! ## Quick Start
//!
//! ```no_run
//! use scalar_api_reference::server::HttpServer;
//! use scalar_api_reference::{
//!     ApiReference, ApiReferenceOptions, ApiReferenceService, ReferenceConfiguration, SpecSource,
//! };
//!
//! let options = ApiReferenceOptions {
//!     route_prefix: "/reference".to_string(),
//!     configuration: Some(ReferenceConfiguration {
//!         spec: Some(SpecSource {
//!             url: Some("https://petstore3.swagger.io/api/v3/openapi.json".to_string()),
//!             ..SpecSource::default()
//!         }),
//!         ..ReferenceConfiguration::default()
//!     }),
//! };
//!
//! let plugin = ApiReference::register(options, None);
//! let handle = HttpServer(ApiReferenceService::new(plugin))
//!     .start("0.0.0.0:8080")
//!     .expect("failed to start server");
//! handle.join().expect("server thread panicked");
//! ```
//!
//! ## Embedding into an existing service
//!
//! Host services that already implement `may_minihttp::HttpService` mount the
//! plugin ahead of their own routing and fall through when
//! [`ApiReference::handle`] returns `None`:
//!
//! ```rust,ignore
//! fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
//!     let parsed = parse_request(req);
//!     if let Some(result) = self.api_reference.handle(&parsed.method, &parsed.path, res) {
//!         return result;
//!     }
//!     // ... the host's own routing ...
//! }
//! ```
//!
//! Both plugin routes carry a `hide` marker (see [`server::RouteMeta`]) so a
//! specification-generating companion can exclude them from its output.
//!
//! ## Runtime Considerations
//!
//! The plugin runs on the `may` coroutine runtime and contributes no
//! concurrency primitives of its own; each handler runs to completion inside
//! the host's coroutine. Coroutine stack size is configurable via the
//! `APIREF_STACK_SIZE` environment variable, see [`runtime_config`].

pub mod asset;
pub mod config;
pub mod html;
pub mod runtime_config;
pub mod server;
pub mod theme;

pub use config::{
    ApiReferenceOptions, ReferenceConfiguration, SpecContent, SpecProvider, SpecSource,
};
pub use html::{configuration_script, html_document, BROWSER_SCRIPT_ROUTE};
pub use server::{ApiReference, ApiReferenceService, RouteMeta};
pub use theme::DEFAULT_CSS;
