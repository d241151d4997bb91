//! Sorting criteria and rendering metadata.

/// Which ordering heuristics are enabled.
///
/// All criteria are off by default, which seats guests in input order
/// (exclusion-bearing guests first, fillers last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortCriteria {
    /// Cluster guests by family name and prefer a family's first table.
    pub by_family: bool,
    /// Youngest first among otherwise tied guests.
    pub by_age: bool,
    /// Honorees, witnesses and attendants before regular guests.
    pub by_role: bool,
    /// Shuffle each non-honor table once placement is final.
    pub randomize: bool,
}

impl SortCriteria {
    pub fn with_by_family(mut self, on: bool) -> Self {
        self.by_family = on;
        self
    }

    pub fn with_by_age(mut self, on: bool) -> Self {
        self.by_age = on;
        self
    }

    pub fn with_by_role(mut self, on: bool) -> Self {
        self.by_role = on;
        self
    }

    pub fn with_randomize(mut self, on: bool) -> Self {
        self.randomize = on;
        self
    }
}

/// Table shape. Carried for renderers; placement ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TableShape {
    #[default]
    Round,
    Rectangular,
    Square,
}
