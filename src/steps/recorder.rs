//! Draft steps and the recorder that freezes them into [`Step`]s

use super::{
    result_from_steps, ArrayElementState, Arrow, Calculation, HashMapEntry, Pointer, Step, Tone,
    VariableState,
};

/// Everything a step needs apart from the array snapshot and its index
#[derive(Default)]
pub(super) struct Draft {
    pub(super) description: String,
    pub(super) action_label: String,
    pub(super) line: usize,
    pub(super) variables: Vec<VariableState>,
    pub(super) hash_map: Vec<HashMapEntry>,
    pub(super) highlighted: Vec<usize>,
    /// Overrides the tone derived from the highlight count
    pub(super) tone: Option<Tone>,
    pub(super) pointers: Vec<Pointer>,
    pub(super) arrows: Vec<Arrow>,
    pub(super) calculation: Option<Calculation>,
}

impl Draft {
    pub(super) fn new(
        line: usize,
        description: impl Into<String>,
        action_label: impl Into<String>,
    ) -> Self {
        Draft {
            line,
            description: description.into(),
            action_label: action_label.into(),
            ..Draft::default()
        }
    }
}

/// Accumulates steps for one generator run
pub(super) struct Recorder<'a> {
    nums: &'a [i64],
    steps: Vec<Step>,
}

impl<'a> Recorder<'a> {
    pub(super) fn new(nums: &'a [i64]) -> Self {
        Recorder {
            nums,
            // Roughly seven steps per element plus setup and result
            steps: Vec::with_capacity(nums.len() * 7 + 4),
        }
    }

    pub(super) fn emit(&mut self, draft: Draft) {
        let tone = draft.tone.unwrap_or(if draft.highlighted.len() == 2 {
            Tone::Found
        } else {
            Tone::Current
        });

        let array_state = self
            .nums
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let is_highlighted = draft.highlighted.contains(&index);
                ArrayElementState {
                    index,
                    value,
                    is_highlighted,
                    highlight_color: is_highlighted.then_some(tone),
                }
            })
            .collect();

        self.steps.push(Step {
            index: self.steps.len(),
            description: draft.description,
            action_label: draft.action_label,
            current_line: draft.line,
            variables: draft.variables,
            array_state,
            hash_map_state: draft.hash_map,
            highlighted_indices: draft.highlighted,
            annotations: Vec::new(),
            pointers: draft.pointers,
            arrows: draft.arrows,
            calculation: draft.calculation,
        });
    }

    pub(super) fn finish(self, target: i64) -> Vec<Step> {
        let result = result_from_steps(&self.steps);
        tracing::debug!(
            len = self.nums.len(),
            target,
            steps = self.steps.len(),
            result = ?result,
            "generated two-sum steps"
        );
        self.steps
    }
}

/// Copy of the working map with entries keyed `key` emphasized
pub(super) fn spotlight(entries: &[HashMapEntry], key: i64) -> Vec<HashMapEntry> {
    entries
        .iter()
        .map(|entry| HashMapEntry {
            is_new: entry.key == key,
            ..entry.clone()
        })
        .collect()
}
