//! TOML scene files.
//!
//! A scene bundles one zone's options with a static page (viewport plus
//! element geometry), so a zone can be evaluated outside a browser:
//!
//! ```toml
//! body = "body"
//!
//! [zone]
//! node = "#progress"
//! mode = "finish_line"
//! # ...
//!
//! [page.viewport]
//! width = 1280.0
//! scroll_top = 0.0
//!
//! [[page.elements]]
//! selector = "#intro"
//! top = 500.0
//! height = 20.0
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::SceneError;
use crate::page::{ElementId, SharedClassList, StaticPage, Viewport};
use crate::zone::{FinishLineOptions, ScrollZone, ZoneConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Name of the page-level class list.
    #[serde(default = "default_body")]
    pub body: String,
    pub zone: ZoneConfig,
    pub page: StaticPage,
}

fn default_body() -> String {
    "body".into()
}

impl Scene {
    /// The start/finish example: start line at 500 (20 tall), finish line at
    /// 1000 (50 tall), no offsets.
    pub fn example() -> Self {
        let page = StaticPage::new(Viewport::new(1280.0, 0.0))
            .with_element("#progress", 0.0, 40.0)
            .with_element("#intro", 500.0, 20.0)
            .with_element("#footer", 1000.0, 50.0);
        Self {
            body: default_body(),
            zone: ZoneConfig::finish_line(
                "#progress",
                FinishLineOptions::new(
                    "progress--running",
                    "progress--finished",
                    "has-progress",
                    "#intro",
                    "#footer",
                ),
            ),
            page,
        }
    }

    /// Parse and validate.
    pub fn from_toml_str(content: &str) -> Result<Self, SceneError> {
        let scene: Scene = toml::from_str(content)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn to_toml_string(&self) -> Result<String, SceneError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a scene file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// scene does not validate.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Persist to disk.
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Zone options must validate, every selector must be unique and every
    /// element needs a finite top and a finite, non-negative height.
    pub fn validate(&self) -> Result<(), SceneError> {
        self.zone.validate()?;
        let mut seen = HashSet::new();
        for element in self.page.elements() {
            if !seen.insert(element.selector.as_str()) {
                return Err(SceneError::DuplicateElement(element.selector.clone()));
            }
            let invalid = |message: &str| SceneError::InvalidGeometry {
                selector: element.selector.clone(),
                message: message.to_string(),
            };
            if !element.top.is_finite() {
                return Err(invalid("top must be a finite number"));
            }
            if !element.height.is_finite() || element.height < 0.0 {
                return Err(invalid("height must be a finite, non-negative number"));
            }
        }
        Ok(())
    }

    /// A fresh page and a zone bound to it.
    pub fn instantiate(&self) -> Result<(StaticPage, ScrollZone<ElementId>), SceneError> {
        let page = self.page.clone();
        let zone = ScrollZone::try_new(self.zone.clone(), &page, SharedClassList::named(&self.body))?;
        Ok((page, zone))
    }
}
