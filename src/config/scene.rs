use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::device::{DeviceProfile, DeviceSpec};
use crate::foundation::core::{ElementId, Viewport};
use crate::foundation::error::{ScrollFxError, ScrollFxResult};
use crate::geometry::{ElementBox, StaticLayout};
use crate::mapping::progress::ProgressMapper;
use crate::widgets::magnetic::DEFAULT_STRENGTH;

/// Cursor text shown while hovering `element`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CursorLabel {
    pub element: ElementId,
    pub text: String,
}

/// One widget to mount, with the element ids it binds to.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetSpec {
    DesignCanvas {
        section: ElementId,
        /// Overrides the widget's scroll-linked mapping shape.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mapper: Option<ProgressMapper>,
    },
    Manifesto {
        section: ElementId,
        #[serde(default)]
        principles: Vec<ElementId>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mapper: Option<ProgressMapper>,
    },
    Principle {
        item: ElementId,
        glyphs: usize,
        #[serde(default)]
        words: usize,
        #[serde(default)]
        jitter_seed: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mapper: Option<ProgressMapper>,
    },
    ProcessTrack {
        section: ElementId,
        track: ElementId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mapper: Option<ProgressMapper>,
    },
    Header {
        #[serde(default)]
        sections: Vec<ElementId>,
    },
    CustomCursor {
        #[serde(default)]
        magnetic: Vec<ElementId>,
        #[serde(default)]
        clickable: Vec<ElementId>,
        #[serde(default)]
        labels: Vec<CursorLabel>,
    },
    ScrollProgress,
    Magnetic {
        element: ElementId,
        #[serde(default = "default_strength")]
        strength: f64,
    },
    HeroTilt {
        container: ElementId,
    },
    TextReveal {
        block: ElementId,
        words: usize,
        #[serde(default)]
        delay_ms: f64,
    },
}

fn default_strength() -> f64 {
    DEFAULT_STRENGTH
}

impl WidgetSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DesignCanvas { .. } => "design_canvas",
            Self::Manifesto { .. } => "manifesto",
            Self::Principle { .. } => "principle",
            Self::ProcessTrack { .. } => "process_track",
            Self::Header { .. } => "header",
            Self::CustomCursor { .. } => "custom_cursor",
            Self::ScrollProgress => "scroll_progress",
            Self::Magnetic { .. } => "magnetic",
            Self::HeroTilt { .. } => "hero_tilt",
            Self::TextReveal { .. } => "text_reveal",
        }
    }

    /// Every element id this widget refers to.
    pub fn elements(&self) -> Vec<ElementId> {
        match self {
            Self::DesignCanvas { section, .. } => vec![*section],
            Self::Manifesto {
                section,
                principles,
                ..
            } => std::iter::once(*section)
                .chain(principles.iter().copied())
                .collect(),
            Self::Principle { item, .. } => vec![*item],
            Self::ProcessTrack { section, track, .. } => vec![*section, *track],
            Self::Header { sections } => sections.clone(),
            Self::CustomCursor {
                magnetic,
                clickable,
                labels,
            } => magnetic
                .iter()
                .chain(clickable)
                .copied()
                .chain(labels.iter().map(|l| l.element))
                .collect(),
            Self::ScrollProgress => Vec::new(),
            Self::Magnetic { element, .. } => vec![*element],
            Self::HeroTilt { container } => vec![*container],
            Self::TextReveal { block, .. } => vec![*block],
        }
    }

    /// Mapping override for scroll-linked widgets.
    pub fn mapper(&self) -> Option<ProgressMapper> {
        match *self {
            Self::DesignCanvas { mapper, .. }
            | Self::Manifesto { mapper, .. }
            | Self::Principle { mapper, .. }
            | Self::ProcessTrack { mapper, .. } => mapper,
            _ => None,
        }
    }

    fn validate(&self) -> ScrollFxResult<()> {
        if let Some(mapper) = self.mapper() {
            mapper.validate()?;
        }
        match *self {
            Self::Magnetic { strength, .. } if !strength.is_finite() => Err(
                ScrollFxError::validation("magnetic strength must be finite"),
            ),
            Self::TextReveal { delay_ms, .. } if !(delay_ms.is_finite() && delay_ms >= 0.0) => {
                Err(ScrollFxError::validation(
                    "text_reveal delay_ms must be finite and >= 0",
                ))
            }
            _ => Ok(()),
        }
    }
}

/// A page to replay: geometry, device facts and the widgets mounted on it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    pub viewport: Viewport,
    pub document_height: f64,
    #[serde(default)]
    pub device: DeviceSpec,
    #[serde(default)]
    pub elements: BTreeMap<ElementId, ElementBox>,
    #[serde(default)]
    pub widgets: Vec<WidgetSpec>,
}

impl SceneConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollFxResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScrollFxError::serde(format!("parse scene JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ScrollFxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollFxError::config(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> ScrollFxResult<()> {
        self.layout().validate()?;
        if !(self.device.breakpoint.is_finite() && self.device.breakpoint >= 0.0) {
            return Err(ScrollFxError::validation(
                "device breakpoint must be finite and >= 0",
            ));
        }

        let known: BTreeSet<ElementId> = self.elements.keys().copied().collect();
        for (i, w) in self.widgets.iter().enumerate() {
            w.validate()
                .map_err(|e| ScrollFxError::config(format!("widgets[{i}] ({}): {e}", w.kind())))?;
            if let Some(missing) = w.elements().into_iter().find(|id| !known.contains(id)) {
                return Err(ScrollFxError::config(format!(
                    "widgets[{i}] ({}) references unknown element {missing}",
                    w.kind()
                )));
            }
        }
        Ok(())
    }

    /// Initial geometry, scrolled to the top.
    pub fn layout(&self) -> StaticLayout {
        StaticLayout {
            viewport: self.viewport,
            document_height: self.document_height,
            scroll_y: 0.0,
            elements: self.elements.clone(),
        }
    }

    pub fn device_profile(&self) -> DeviceProfile {
        self.device.profile(self.viewport.width)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/scene.rs"]
mod tests;
