// Integration tests for the Two Sum step generator

use twosum_tty::listing::{self, lines};
use twosum_tty::steps::{generate_steps, result_from_steps, Endpoint, Step, Tone};

fn last(steps: &[Step]) -> &Step {
    steps.last().expect("generator never returns an empty sequence")
}

#[test]
fn test_first_example() {
    let steps = generate_steps(&[2, 7, 11, 15], 9);

    assert_eq!(result_from_steps(&steps), Some((0, 1)));
    assert_eq!(last(&steps).action_label, "Answer: [0, 1]");
    assert_eq!(last(&steps).current_line, lines::RETURN_RESULT);
}

#[test]
fn test_no_false_early_termination() {
    // 3 + 3 would need index 0 twice; the answer is values 2 and 4
    let steps = generate_steps(&[3, 2, 4], 6);

    assert_eq!(result_from_steps(&steps), Some((1, 2)));
}

#[test]
fn test_duplicate_values() {
    let steps = generate_steps(&[3, 3], 6);

    assert_eq!(result_from_steps(&steps), Some((0, 1)));
}

#[test]
fn test_first_match_wins() {
    // Pairs (0,3) and (1,2) both sum to 5; i = 2 is reached before i = 3
    let steps = generate_steps(&[1, 2, 3, 4], 5);

    assert_eq!(result_from_steps(&steps), Some((1, 2)));
}

#[test]
fn test_duplicate_complement_resolves_to_first_index() {
    // Both 3s are stored; the match for 4 must point at the first one
    let steps = generate_steps(&[3, 3, 4], 7);

    assert_eq!(result_from_steps(&steps), Some((0, 2)));
    let final_map = &last(&steps).hash_map_state;
    assert_eq!(final_map.len(), 2);
    assert_eq!((final_map[0].key, final_map[0].value), (3, 0));
    assert_eq!((final_map[1].key, final_map[1].value), (3, 1));
}

#[test]
fn test_no_solution_path() {
    let steps = generate_steps(&[1, 1], 5);

    assert!(!steps.is_empty());
    let end = last(&steps);
    assert!(end.highlighted_indices.is_empty());
    assert_eq!(end.current_line, lines::RETURN_EMPTY);
    assert_eq!(end.hash_map_state.len(), 2, "map holds every element");
    assert_eq!(result_from_steps(&steps), None);
}

#[test]
fn test_self_pairing_is_impossible() {
    // 3 + 3 = 6 but there is only one 3
    let steps = generate_steps(&[3, 1], 6);

    assert_eq!(result_from_steps(&steps), None);
}

#[test]
fn test_steps_stop_at_the_match() {
    let steps = generate_steps(&[2, 7, 11, 15], 9);

    // Nothing after the match may touch index 2 or 3
    assert!(steps
        .iter()
        .all(|s| s.pointers.iter().all(|p| p.target_index < 2)));
    assert!(steps.iter().all(|s| s.hash_map_state.len() <= 1));
}

#[test]
fn test_highlight_shapes() {
    let steps = generate_steps(&[2, 7, 11, 15], 9);

    assert!(steps[0].highlighted_indices.is_empty());
    assert!(steps[1].highlighted_indices.is_empty());

    let loop_entries: Vec<&Step> = steps
        .iter()
        .filter(|s| s.description.starts_with("Loop: "))
        .collect();
    assert_eq!(loop_entries.len(), 2);
    assert!(loop_entries.iter().all(|s| s.highlighted_indices.is_empty()));

    let pair_steps: Vec<&Step> = steps
        .iter()
        .filter(|s| s.highlighted_indices.len() == 2)
        .collect();
    assert_eq!(pair_steps.len(), 3, "found, verify and result");
    for step in pair_steps {
        assert_eq!(step.highlighted_indices, vec![0, 1]);
        assert!(step
            .array_state
            .iter()
            .filter(|c| c.is_highlighted)
            .all(|c| c.highlight_color == Some(Tone::Found)));
    }
}

#[test]
fn test_found_step_arrow_points_from_map_to_array() {
    let steps = generate_steps(&[3, 2, 4], 6);

    let found = steps
        .iter()
        .find(|s| s.description == "Complement found")
        .expect("found step");
    assert_eq!(found.arrows.len(), 1);
    assert_eq!(found.arrows[0].from, Endpoint::HashMap(1));
    assert_eq!(found.arrows[0].to, Endpoint::Array(1));
    assert_eq!(found.arrows[0].label, "map[2] -> 1");
}

#[test]
fn test_calculations() {
    let steps = generate_steps(&[2, 7, 11, 15], 9);

    let complement = steps
        .iter()
        .find(|s| s.description == "Compute the complement")
        .and_then(|s| s.calculation.as_ref())
        .expect("complement calculation");
    assert_eq!(complement.expression, "complement = target - nums[0]");
    assert_eq!(complement.result, "9 - 2 = 7");

    let verify = steps
        .iter()
        .find(|s| s.description == "Verify the pair")
        .and_then(|s| s.calculation.as_ref())
        .expect("verify calculation");
    assert_eq!(verify.expression, "nums[0] + nums[1]");
    assert_eq!(verify.result, "2 + 7 = 9");
}

#[test]
fn test_variables_track_the_loop() {
    let steps = generate_steps(&[2, 7, 11, 15], 9);
    let end = last(&steps);

    let names: Vec<&str> = end.variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["i", "complement", "result"]);
    assert_eq!(end.variables[0].value, "1");
    assert_eq!(end.variables[1].value, "2");
    assert_eq!(end.variables[2].value, "[0, 1]");
    assert_eq!(end.variables_on_line(lines::RETURN_RESULT).count(), 1);
}

#[test]
fn test_lines_within_reference_listing() {
    let total = listing::total_lines();
    for nums in [vec![2, 7, 11, 15], vec![1, 1], vec![5, -5, 0, 10]] {
        for step in generate_steps(&nums, 5) {
            assert!((1..=total).contains(&step.current_line));
        }
    }
}

#[test]
fn test_json_field_names() {
    let steps = generate_steps(&[3, 3], 6);
    let json = serde_json::to_value(&steps[steps.len() - 1]).unwrap();

    assert_eq!(json["currentLine"], 6);
    assert_eq!(json["highlightedIndices"], serde_json::json!([0, 1]));
    assert_eq!(json["arrayState"][0]["isHighlighted"], true);
    assert!(json.get("calculation").is_none(), "omitted when absent");
}
