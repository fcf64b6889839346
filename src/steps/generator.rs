//! Step generation for the hash-map Two Sum scan
//!
//! The scan mirrors the reference listing line by line. Each micro-operation
//! (loop entry, read, complement, lookup, hit/miss, insert) becomes one
//! [`Step`]. The working map is private to a single call and every step gets
//! its own copy of it, so nothing emitted earlier can change afterwards.

use super::recorder::{spotlight, Draft, Recorder};
use super::{Arrow, Calculation, Endpoint, HashMapEntry, Pointer, Step, Tone, VariableState};
use crate::listing::lines;
use rustc_hash::FxHashMap;

/// Simulate the single-pass hash-map scan and record every intermediate state.
///
/// The sequence always ends in exactly one terminal state: a result step
/// highlighting `[j, i]` with `nums[j] + nums[i] == target`, or a no-solution
/// step with no highlights. The first match wins (lowest `i`, then the first
/// occurrence of the complement). Inputs are not validated; an unsolvable
/// input simply runs to the no-solution step.
pub fn generate_steps(nums: &[i64], target: i64) -> Vec<Step> {
    let mut rec = Recorder::new(nums);

    // Ordered for display; `first_seen` resolves a key to its first entry
    let mut entries: Vec<HashMapEntry> = Vec::new();
    let mut first_seen: FxHashMap<i64, usize> = FxHashMap::default();

    rec.emit(Draft::new(
        lines::FUNCTION_START,
        "Start the Two Sum scan",
        format!("Goal: find two numbers that sum to {}", target),
    ));
    rec.emit(Draft::new(
        lines::CREATE_MAP,
        "Create an empty HashMap",
        "Create HashMap<value, index>",
    ));

    for (i, &current) in nums.iter().enumerate() {
        let complement = target.wrapping_sub(current);
        let loop_vars = vec![VariableState::new("i", i, lines::FOR_LOOP)];
        let complement_vars = vec![
            VariableState::new("i", i, lines::FOR_LOOP),
            VariableState::new("complement", complement, lines::CALC_COMPLEMENT),
        ];

        // Steps that focus on index i against the current map
        let at_i = |line, description: String, action_label: String| Draft {
            hash_map: entries.clone(),
            highlighted: vec![i],
            ..Draft::new(line, description, action_label)
        };

        rec.emit(Draft {
            variables: loop_vars.clone(),
            hash_map: entries.clone(),
            pointers: vec![Pointer::new(i, format!("i = {}", i), Tone::Current)],
            ..Draft::new(
                lines::FOR_LOOP,
                format!("Loop: i = {}", i),
                format!("Enter loop with i = {}", i),
            )
        });

        rec.emit(Draft {
            variables: loop_vars.clone(),
            pointers: vec![Pointer::new(i, format!("value: {}", current), Tone::Current)],
            ..at_i(
                lines::CALC_COMPLEMENT,
                format!("Read nums[{}]", i),
                format!("Read nums[{}] = {}", i, current),
            )
        });

        rec.emit(Draft {
            variables: complement_vars.clone(),
            pointers: vec![Pointer::new(i, format!("current: {}", current), Tone::Current)],
            calculation: Some(Calculation::new(
                format!("complement = target - nums[{}]", i),
                format!("{} - {} = {}", target, current, complement),
            )),
            ..at_i(
                lines::CALC_COMPLEMENT,
                "Compute the complement".to_string(),
                "Compute complement".to_string(),
            )
        });

        // Lookup happens before insertion, so index i never pairs with itself
        let hit = first_seen.get(&complement).copied();

        rec.emit(Draft {
            variables: complement_vars.clone(),
            hash_map: spotlight(&entries, complement),
            pointers: vec![Pointer::new(i, "current", Tone::Current)],
            calculation: Some(Calculation::new(
                format!("map.containsKey({})", complement),
                if hit.is_some() { "true" } else { "false" },
            )),
            ..at_i(
                lines::CHECK_MAP,
                format!("Look up complement {}", complement),
                format!("Search the HashMap for {}", complement),
            )
        });

        if let Some(position) = hit {
            let j = entries[position].value;
            let partner = nums[j];
            let mut result_vars = complement_vars.clone();
            result_vars.push(VariableState::new(
                "result",
                format!("[{}, {}]", j, i),
                lines::RETURN_RESULT,
            ));

            // Found, verify and result share the pair highlight
            let pair = |line, description: &str, action_label: String| Draft {
                hash_map: spotlight(&entries, complement),
                highlighted: vec![j, i],
                ..Draft::new(line, description, action_label)
            };

            rec.emit(Draft {
                variables: complement_vars,
                pointers: vec![
                    Pointer::new(j, "complement", Tone::Found),
                    Pointer::new(i, "current", Tone::Current),
                ],
                arrows: vec![Arrow {
                    from: Endpoint::HashMap(position),
                    to: Endpoint::Array(j),
                    label: format!("map[{}] -> {}", complement, j),
                    tone: Tone::Found,
                }],
                ..pair(
                    lines::CHECK_MAP,
                    "Complement found",
                    format!("Complement {} is at index {}", complement, j),
                )
            });

            rec.emit(Draft {
                variables: result_vars.clone(),
                pointers: vec![
                    Pointer::new(j, partner.to_string(), Tone::Found),
                    Pointer::new(i, current.to_string(), Tone::Found),
                ],
                calculation: Some(Calculation::new(
                    format!("nums[{}] + nums[{}]", j, i),
                    format!("{} + {} = {}", partner, current, target),
                )),
                ..pair(
                    lines::RETURN_RESULT,
                    "Verify the pair",
                    format!("Check: {} + {} = ?", partner, current),
                )
            });

            rec.emit(Draft {
                variables: result_vars,
                pointers: vec![
                    Pointer::new(j, "answer[0]", Tone::Found),
                    Pointer::new(i, "answer[1]", Tone::Found),
                ],
                ..pair(
                    lines::RETURN_RESULT,
                    "Return the answer",
                    format!("Answer: [{}, {}]", j, i),
                )
            });

            return rec.finish(target);
        }

        rec.emit(Draft {
            variables: complement_vars.clone(),
            pointers: vec![Pointer::new(i, "current", Tone::Current)],
            ..at_i(
                lines::CHECK_MAP,
                "Complement not found".to_string(),
                format!("{} is not in the HashMap", complement),
            )
        });

        rec.emit(Draft {
            variables: complement_vars.clone(),
            tone: Some(Tone::Pending),
            pointers: vec![Pointer::new(i, "to store", Tone::Pending)],
            calculation: Some(Calculation::new(
                format!("map.put(nums[{}], {})", i, i),
                format!("map.put({}, {})", current, i),
            )),
            ..at_i(
                lines::PUT_MAP,
                "Prepare to store in the HashMap".to_string(),
                format!("Next: map.put({}, {})", current, i),
            )
        });

        let position = entries.len();
        entries.push(HashMapEntry {
            key: current,
            value: i,
            is_new: true,
        });
        // A repeated value keeps resolving to its first index
        first_seen.entry(current).or_insert(position);

        rec.emit(Draft {
            variables: complement_vars,
            hash_map: entries.clone(),
            highlighted: vec![i],
            pointers: vec![Pointer::new(i, "stored", Tone::Found)],
            arrows: vec![Arrow {
                from: Endpoint::Array(i),
                to: Endpoint::HashMap(position),
                label: format!("{} -> {}", current, i),
                tone: Tone::Pending,
            }],
            ..Draft::new(
                lines::PUT_MAP,
                "Stored",
                format!("Stored map[{}] = {}", current, i),
            )
        });

        entries[position].is_new = false;

        if i + 1 < nums.len() {
            rec.emit(Draft {
                variables: loop_vars,
                hash_map: entries.clone(),
                ..Draft::new(lines::FOR_LOOP, "Next iteration", "i++, continue the loop")
            });
        }
    }

    rec.emit(Draft {
        hash_map: entries,
        ..Draft::new(
            lines::RETURN_EMPTY,
            "No result found",
            "Scan finished without a solution",
        )
    });

    rec.finish(target)
}

/// Extract the answer pair from a finished run.
///
/// Only the last step is consulted; it must highlight exactly two indices.
pub fn result_from_steps(steps: &[Step]) -> Option<(usize, usize)> {
    match steps.last()?.highlighted_indices.as_slice() {
        [first, second] => Some((*first, *second)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_reaches_no_solution() {
        let steps = generate_steps(&[], 0);

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2].current_line, lines::RETURN_EMPTY);
        assert!(steps[2].highlighted_indices.is_empty());
        assert_eq!(result_from_steps(&steps), None);
    }

    #[test]
    fn test_single_pass_step_shape() {
        // i = 0 misses (8 steps incl. continue), i = 1 hits (4 + 3 steps)
        let steps = generate_steps(&[2, 7], 9);

        assert_eq!(steps.len(), 2 + 8 + 7);
        let lines_seen: Vec<usize> = steps.iter().map(|s| s.current_line).collect();
        assert_eq!(
            lines_seen,
            vec![1, 2, 3, 4, 4, 5, 5, 8, 8, 3, 3, 4, 4, 5, 5, 6, 6]
        );
    }

    #[test]
    fn test_inserted_flag_is_cleared_for_later_steps() {
        let steps = generate_steps(&[1, 2, 3], 100);

        let stored = steps
            .iter()
            .find(|s| s.description == "Stored")
            .expect("stored step");
        assert!(stored.hash_map_state[0].is_new);

        let next = &steps[stored.index + 1];
        assert_eq!(next.description, "Next iteration");
        assert!(!next.hash_map_state[0].is_new);
    }

    #[test]
    fn test_lookup_spotlights_matching_entry() {
        let steps = generate_steps(&[4, 5], 9);

        let found = steps
            .iter()
            .find(|s| s.description == "Complement found")
            .expect("found step");
        assert_eq!(found.hash_map_state.len(), 1);
        assert!(found.hash_map_state[0].is_new);
        assert_eq!(
            found.arrows[0].from,
            Endpoint::HashMap(0),
            "arrow should start at the matched entry"
        );
        assert_eq!(found.arrows[0].to, Endpoint::Array(0));
    }

    #[test]
    fn test_pending_insert_uses_pending_tone() {
        let steps = generate_steps(&[1, 2], 10);

        let pending = steps
            .iter()
            .find(|s| s.description == "Prepare to store in the HashMap")
            .expect("pending step");
        assert_eq!(pending.array_state[0].highlight_color, Some(Tone::Pending));
        assert_eq!(pending.array_state[1].highlight_color, None);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let steps = generate_steps(&[i64::MIN, i64::MAX], i64::MAX);
        assert!(!steps.is_empty());
    }
}
