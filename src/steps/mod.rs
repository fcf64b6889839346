//! Algorithm snapshots
//!
//! A [`Step`] is one frozen picture of the Two Sum scan: the array with its
//! highlights, every hash-map entry inserted so far, the variables in scope and
//! the canonical source line being executed. [`generate_steps`] produces the
//! whole sequence up front; consumers only ever index into it.
//!
//! The rendering directives ([`Pointer`], [`Arrow`], [`Annotation`],
//! [`Calculation`]) carry no algorithmic state. A step simply leaves them empty
//! when it has nothing to draw.

mod generator;
mod recorder;

pub use generator::{generate_steps, result_from_steps};

use serde::Serialize;

/// Presentational role of a highlight, pointer or arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tone {
    /// Element under the loop cursor
    Current,
    /// Matched complement or part of the answer
    Found,
    /// Element about to be stored in the map
    Pending,
}

/// One binding of the simulated `value -> index` map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashMapEntry {
    pub key: i64,
    pub value: usize,
    /// Emphasized in this step (freshly inserted, or the entry being looked up)
    pub is_new: bool,
}

/// Display state of one input element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayElementState {
    pub index: usize,
    pub value: i64,
    pub is_highlighted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<Tone>,
}

/// A named binding shown next to a line of the reference listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableState {
    pub name: String,
    pub value: String,
    /// Canonical line the binding belongs to
    pub line: usize,
}

impl VariableState {
    pub fn new(name: &str, value: impl ToString, line: usize) -> Self {
        VariableState {
            name: name.to_string(),
            value: value.to_string(),
            line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnnotationPosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl AnnotationPosition {
    /// Arrow glyph pointing from the label toward its cell
    pub fn symbol(self) -> &'static str {
        match self {
            AnnotationPosition::Top => "↓",
            AnnotationPosition::Bottom => "↑",
            AnnotationPosition::Left => "→",
            AnnotationPosition::Right => "←",
        }
    }
}

/// Free-floating label attached to an array cell, listed by the array pane.
///
/// The Two Sum scan itself never attaches one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub target_index: usize,
    pub text: String,
    pub position: AnnotationPosition,
}

/// Marker drawn under an array cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pointer {
    pub target_index: usize,
    pub label: String,
    pub tone: Tone,
}

impl Pointer {
    pub fn new(target_index: usize, label: impl Into<String>, tone: Tone) -> Self {
        Pointer {
            target_index,
            label: label.into(),
            tone,
        }
    }
}

/// One end of an [`Arrow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "index")]
pub enum Endpoint {
    /// Array cell by element index
    Array(usize),
    /// Hash-map entry by position in [`Step::hash_map_state`]
    HashMap(usize),
}

/// Connector between an array cell and a hash-map entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrow {
    pub from: Endpoint,
    pub to: Endpoint,
    pub label: String,
    pub tone: Tone,
}

/// Expression and its evaluated result, e.g. `complement = target - nums[0]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub expression: String,
    pub result: String,
}

impl Calculation {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Calculation {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

/// Snapshot of the scan at one micro-operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Position in the sequence (dense, 0-based)
    pub index: usize,
    pub description: String,
    pub action_label: String,
    /// Canonical line of [`crate::listing::REFERENCE_LISTING`] (1-based)
    pub current_line: usize,
    pub variables: Vec<VariableState>,
    pub array_state: Vec<ArrayElementState>,
    pub hash_map_state: Vec<HashMapEntry>,
    pub highlighted_indices: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pointers: Vec<Pointer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arrows: Vec<Arrow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculation: Option<Calculation>,
}

impl Step {
    /// Variables bound to the given canonical line
    pub fn variables_on_line(&self, line: usize) -> impl Iterator<Item = &VariableState> {
        self.variables.iter().filter(move |v| v.line == line)
    }
}
