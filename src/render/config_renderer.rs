use std::fmt::Write as _;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ChartSpec, MountPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::{Renderer, SurfaceRegistry};

/// Renderer that hands charts to a browser-side Chart.js instance.
///
/// Each mounted spec is kept as a Chart.js configuration object; the host
/// page embeds [`ConfigRenderer::init_script`] next to its canvases.
#[derive(Debug, Default)]
pub struct ConfigRenderer {
    surfaces: SurfaceRegistry,
    configs: IndexMap<MountPoint, serde_json::Value>,
}

impl ConfigRenderer {
    #[must_use]
    pub fn with_surfaces<I, M>(ids: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<MountPoint>,
    {
        Self {
            surfaces: SurfaceRegistry::with_surfaces(ids),
            configs: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn config(&self, mount: &MountPoint) -> Option<&serde_json::Value> {
        self.configs.get(mount)
    }

    pub fn config_json_pretty(&self, mount: &MountPoint) -> ChartResult<String> {
        let config = self
            .configs
            .get(mount)
            .ok_or_else(|| ChartError::NotMounted(mount.to_string()))?;
        serde_json::to_string_pretty(config)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    /// One `new Chart(...)` statement per mounted surface, in mount order.
    ///
    /// Charts are stored on `window.charts` keyed by mount id so page code
    /// can reach them again. `<`, `>` and `&` inside ids and configs are
    /// emitted as JSON unicode escapes, so the script is safe to inline in a
    /// `<script>` element.
    pub fn init_script(&self) -> ChartResult<String> {
        let mut script = String::from("window.charts = window.charts || {};\n");
        for (mount, config) in &self.configs {
            let id = serde_json::to_string(mount.as_str()).map_err(|e| {
                ChartError::InvalidData(format!("failed to encode mount id: {e}"))
            })?;
            let config = serde_json::to_string(config).map_err(|e| {
                ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
            })?;
            let (id, config) = (escape_for_script(&id), escape_for_script(&config));
            let _ = writeln!(
                script,
                "window.charts[{id}] = new Chart(document.getElementById({id}), {config});"
            );
        }
        Ok(script)
    }

    fn store(&mut self, mount: &MountPoint, spec: &ChartSpec) -> ChartResult<()> {
        spec.validate()?;
        let config = serde_json::to_value(spec)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart spec: {e}")))?;
        debug!(mount = %mount, "stored chart config");
        self.configs.insert(mount.clone(), config);
        Ok(())
    }
}

/// Escapes HTML-sensitive characters of serialized JSON. Only valid on JSON
/// text, where these characters can appear only inside string literals.
fn escape_for_script(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Renderer for ConfigRenderer {
    fn check_mount(&self, mount: &MountPoint) -> ChartResult<()> {
        self.surfaces.check_bindable(mount)
    }

    fn mount(&mut self, mount: &MountPoint, spec: &ChartSpec) -> ChartResult<()> {
        spec.validate()?;
        self.surfaces.bind(mount)?;
        self.store(mount, spec)
    }

    fn redraw(&mut self, mount: &MountPoint, spec: &ChartSpec) -> ChartResult<()> {
        self.surfaces.ensure_bound(mount)?;
        self.store(mount, spec)
    }
}
