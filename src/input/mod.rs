//! Input data, validation and parsing
//!
//! The step generator trusts its caller. Everything typed by the user, passed
//! on the command line or produced by [`random`] goes through
//! [`validate_input`] first.

pub mod random;

use rustc_hash::FxHashSet;
use serde::Serialize;
use thiserror::Error;

pub const MIN_LENGTH: usize = 2;
pub const MAX_LENGTH: usize = 10_000;
pub const MIN_VALUE: i64 = -1_000_000_000;
pub const MAX_VALUE: i64 = 1_000_000_000;

/// The array and target handed to the step generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputData {
    pub nums: Vec<i64>,
    pub target: i64,
}

impl InputData {
    pub fn new(nums: Vec<i64>, target: i64) -> Self {
        InputData { nums, target }
    }
}

impl Default for InputData {
    fn default() -> Self {
        PRESETS[0].input()
    }
}

/// A canned example offered by the UI
#[derive(Debug)]
pub struct Preset {
    pub label: &'static str,
    pub nums: &'static [i64],
    pub target: i64,
}

impl Preset {
    pub fn input(&self) -> InputData {
        InputData::new(self.nums.to_vec(), self.target)
    }
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        label: "Example 1: [2,7,11,15], 9",
        nums: &[2, 7, 11, 15],
        target: 9,
    },
    Preset {
        label: "Example 2: [3,2,4], 6",
        nums: &[3, 2, 4],
        target: 6,
    },
    Preset {
        label: "Example 3: [3,3], 6",
        nums: &[3, 3],
        target: 6,
    },
    Preset {
        label: "Longer array",
        nums: &[1, 5, 3, 7, 2, 8, 4, 6],
        target: 10,
    },
];

/// Why an input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("array must contain at least 2 elements (got {len})")]
    TooShort { len: usize },
    #[error("array must not contain more than 10000 elements (got {len})")]
    TooLong { len: usize },
    #[error("nums[{index}] = {value} is outside [-10^9, 10^9]")]
    ValueOutOfRange { index: usize, value: i64 },
    #[error("no two elements add up to the target")]
    NoSolution,
    #[error("invalid array, expected a list like [2,7,11,15]: {0}")]
    InvalidArray(String),
    #[error("invalid target, expected an integer: {0}")]
    InvalidTarget(String),
}

/// Check length bounds, value bounds and that a solution exists
pub fn validate_input(data: &InputData) -> Result<(), InputError> {
    let len = data.nums.len();
    if len < MIN_LENGTH {
        return Err(InputError::TooShort { len });
    }
    if len > MAX_LENGTH {
        return Err(InputError::TooLong { len });
    }

    if let Some((index, &value)) = data
        .nums
        .iter()
        .enumerate()
        .find(|(_, v)| !(MIN_VALUE..=MAX_VALUE).contains(*v))
    {
        return Err(InputError::ValueOutOfRange { index, value });
    }

    if !has_solution(&data.nums, data.target) {
        return Err(InputError::NoSolution);
    }

    Ok(())
}

/// Whether two distinct indices sum to `target`
pub fn has_solution(nums: &[i64], target: i64) -> bool {
    let mut seen = FxHashSet::default();
    for &n in nums {
        if seen.contains(&target.wrapping_sub(n)) {
            return true;
        }
        seen.insert(n);
    }
    false
}

/// Parse an array written as `[1,2,3]` or `1,2,3`
pub fn parse_array(text: &str) -> Result<Vec<i64>, InputError> {
    let trimmed = text.trim();
    let normalized = if trimmed.starts_with('[') {
        trimmed.to_string()
    } else {
        format!("[{}]", trimmed)
    };
    serde_json::from_str::<Vec<i64>>(&normalized)
        .map_err(|e| InputError::InvalidArray(e.to_string()))
}

pub fn parse_target(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::InvalidTarget(trimmed.to_string()))
}

/// Parse the edit-box syntax `<array>; <target>`, e.g. `[2,7,11,15]; 9`
pub fn parse_input_line(line: &str) -> Result<InputData, InputError> {
    let (nums, target) = line
        .rsplit_once(';')
        .ok_or_else(|| InputError::InvalidTarget("missing ';' before target".to_string()))?;
    Ok(InputData::new(parse_array(nums)?, parse_target(target)?))
}

/// Render `data` in the syntax accepted by [`parse_input_line`]
pub fn format_input_line(data: &InputData) -> String {
    let nums: Vec<String> = data.nums.iter().map(|n| n.to_string()).collect();
    format!("[{}]; {}", nums.join(","), data.target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for preset in &PRESETS {
            assert_eq!(validate_input(&preset.input()), Ok(()), "{}", preset.label);
        }
    }

    #[test]
    fn test_length_bounds() {
        let short = InputData::new(vec![1], 2);
        assert_eq!(validate_input(&short), Err(InputError::TooShort { len: 1 }));

        let mut nums = vec![0; MAX_LENGTH + 1];
        nums[0] = 1;
        let long = InputData::new(nums, 1);
        assert_eq!(
            validate_input(&long),
            Err(InputError::TooLong {
                len: MAX_LENGTH + 1
            })
        );
    }

    #[test]
    fn test_value_bounds() {
        let data = InputData::new(vec![1, 2_000_000_000, 3], 4);
        assert_eq!(
            validate_input(&data),
            Err(InputError::ValueOutOfRange {
                index: 1,
                value: 2_000_000_000
            })
        );
    }

    #[test]
    fn test_no_solution_rejected() {
        let data = InputData::new(vec![1, 1], 5);
        assert_eq!(validate_input(&data), Err(InputError::NoSolution));
    }

    #[test]
    fn test_single_element_cannot_pair_with_itself() {
        assert!(!has_solution(&[3, 1], 6));
        assert!(has_solution(&[3, 3], 6));
    }

    #[test]
    fn test_parse_array_forms() {
        assert_eq!(parse_array("[2,7,11,15]"), Ok(vec![2, 7, 11, 15]));
        assert_eq!(parse_array(" 3, -2 ,4 "), Ok(vec![3, -2, 4]));
        assert_eq!(parse_array("[]"), Ok(vec![]));
        assert!(matches!(parse_array("[1, a]"), Err(InputError::InvalidArray(_))));
        assert!(matches!(parse_array("[1.5]"), Err(InputError::InvalidArray(_))));
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(" -9 "), Ok(-9));
        assert_eq!(
            parse_target("nine"),
            Err(InputError::InvalidTarget("nine".to_string()))
        );
    }

    #[test]
    fn test_input_line_roundtrip() {
        let data = InputData::new(vec![3, 2, 4], 6);
        let line = format_input_line(&data);
        assert_eq!(line, "[3,2,4]; 6");
        assert_eq!(parse_input_line(&line), Ok(data));
        assert!(parse_input_line("[3,2,4]").is_err());
    }
}
