//! Line metadata.

use mg_core::LineId;

/// A named subway route. The ordered segment chain itself lives in
/// [`crate::LineTopology`]; this record carries only the identity and
/// display attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub color: String,
}

impl Line {
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }

    /// Replace the display attributes, keeping the identity.
    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }
}
