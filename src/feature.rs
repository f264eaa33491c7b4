use std::collections::BTreeMap;

use crate::math::Point2;

/// Property key of the free-text label.
pub const TEXT_PROPERTY: &str = "t";

/// A map feature as handed over by the caller.
///
/// Coordinates are in the caller's output frame (see [`crate::frame`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    sidc: String,
    coordinates: Vec<Point2>,
    properties: BTreeMap<String, String>,
}

impl Feature {
    /// Creates a feature without properties.
    #[must_use]
    pub fn new(sidc: impl Into<String>, coordinates: Vec<Point2>) -> Self {
        Self {
            sidc: sidc.into(),
            coordinates,
            properties: BTreeMap::new(),
        }
    }

    /// Adds a property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Returns the raw SIDC.
    #[must_use]
    pub fn sidc(&self) -> &str {
        &self.sidc
    }

    /// Returns the anchor coordinates.
    #[must_use]
    pub fn coordinates(&self) -> &[Point2] {
        &self.coordinates
    }

    /// Returns a property value.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Returns the free-text label, if present and non-empty.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.property(TEXT_PROPERTY).filter(|t| !t.is_empty())
    }
}
