//! HTML template carrying the configuration to the browser client.
//!
//! The client boots from a single `<script type="application/json">` element:
//! its `data-configuration` attribute holds the serialized
//! [`ReferenceConfiguration`], its body holds the specification document when
//! one is available inline or through a provider.

use crate::config::ReferenceConfiguration;

/// Route the browser client bundle is served from. The HTML document
/// references it with a plain `<script src>` tag.
pub const BROWSER_SCRIPT_ROUTE: &str = "/@scalar/fastify-api-reference/browser.js";

/// Render the script elements that boot the browser client.
///
/// The configuration is JSON-serialized and embedded as a double-quoted HTML
/// attribute, so every `"` is replaced with `&quot;`. No other escaping is
/// performed; configuration values containing a literal `&quot;` are not
/// supported. Deferred spec content is resolved here, once per render.
pub fn configuration_script(configuration: &ReferenceConfiguration) -> String {
    let attribute = serde_json::to_string(configuration)
        .expect("configuration serializes to JSON")
        .replace('"', "&quot;");
    let content = configuration
        .spec
        .as_ref()
        .and_then(|spec| spec.content.as_ref())
        .map(|content| {
            serde_json::to_string(&content.resolve()).expect("spec content serializes to JSON")
        })
        .unwrap_or_default();
    format!(
        r#"
    <script
      id="api-reference"
      type="application/json"
      data-configuration="{attribute}">{content}</script>
      <script src="{BROWSER_SCRIPT_ROUTE}"></script>
  "#
    )
}

/// Render the full HTML document for the reference viewer.
///
/// Pure aside from resolving deferred spec content.
pub fn html_document(configuration: &ReferenceConfiguration) -> String {
    format!(
        r#"
<!DOCTYPE html>
<html>
  <head>
    <title>API Reference</title>
    <meta charset="utf-8" />
    <meta
      name="viewport"
      content="width=device-width, initial-scale=1" />
    <style>
      body {{
        margin: 0;
      }}
    </style>
  </head>
  <body>
    {script}
  </body>
</html>
"#,
        script = configuration_script(configuration)
    )
}
