// TUI tests using ratatui's TestBackend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use twosum_tty::input::InputData;
use twosum_tty::listing::Language;
use twosum_tty::playback::PlaybackRate;
use twosum_tty::prefs::Preferences;
use twosum_tty::steps::{generate_steps, Annotation, AnnotationPosition};
use twosum_tty::ui::app::{App, FocusedPane, Mode};
use twosum_tty::ui::panes::render_array_pane;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Convert a buffer to a string, one line per row
fn buffer_to_string(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(app: &mut App) -> String {
    let backend = TestBackend::new(140, 40);
    let mut terminal = Terminal::new(backend).expect("Failed to create test terminal");
    terminal.draw(|f| app.render(f)).expect("draw failed");
    buffer_to_string(terminal.backend().buffer())
}

fn default_app() -> App {
    App::new(InputData::default(), Preferences::default())
}

#[test]
fn test_initial_render() {
    let mut app = default_app();
    let screen = render(&mut app);

    assert!(screen.contains("Source Code (Java)"));
    assert!(screen.contains("public int[] twoSum"));
    assert!(screen.contains("nums (4 elements)"));
    assert!(screen.contains("HashMap<value, index> (0)"));
    assert!(screen.contains("Start the Two Sum scan"));
    assert!(screen.contains(&format!("Step 1/{}", app.steps.len())));
}

#[test]
fn test_end_shows_answer() {
    let mut app = default_app();
    press(&mut app, KeyCode::Enter);

    assert!(app.player.is_at_end());
    let screen = render(&mut app);
    assert!(screen.contains("Answer: [0, 1]"));
    assert!(screen.contains("complement = 2"));
}

#[test]
fn test_stepping_keys() {
    let mut app = default_app();

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.player.current_step_index(), 2);

    press(&mut app, KeyCode::Left);
    assert_eq!(app.player.current_step_index(), 1);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.player.current_step_index(), 4);

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.player.current_step_index(), 0);

    press(&mut app, KeyCode::Left);
    assert_eq!(app.status_message, "Already at the first step");
}

#[test]
fn test_play_advances_on_tick() {
    let mut app = default_app();

    press(&mut app, KeyCode::Char(' '));
    assert!(app.player.is_playing());

    app.on_tick();
    assert_eq!(app.player.current_step_index(), 1);
}

#[test]
fn test_rate_and_language_feed_preferences() {
    let mut app = default_app();

    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('l'));

    let prefs = app.preferences();
    assert_eq!(prefs.playback_rate, PlaybackRate::OneAndQuarter);
    assert_eq!(prefs.language, Language::Go);

    let screen = render(&mut app);
    assert!(screen.contains("Source Code (Go)"));
    assert!(screen.contains("func twoSum"));
}

#[test]
fn test_python_listing_maps_lines() {
    let prefs = Preferences {
        playback_rate: PlaybackRate::Normal,
        language: Language::Python,
    };
    let mut app = App::new(InputData::new(vec![1, 1], 2), prefs);
    press(&mut app, KeyCode::Enter);

    let screen = render(&mut app);
    // Canonical line 6 is the return in every listing
    let marked = screen
        .lines()
        .find(|l| l.contains('▶'))
        .expect("current line marker");
    assert!(marked.contains("return [hash_map[complement], i]"));
}

#[test]
fn test_preset_cycles_and_resets_player() {
    let mut app = default_app();
    press(&mut app, KeyCode::Char('5'));

    press(&mut app, KeyCode::Char('p'));
    press(&mut app, KeyCode::Char('p'));

    assert_eq!(app.input, InputData::new(vec![3, 2, 4], 6));
    assert_eq!(app.player.current_step_index(), 0);
    assert_eq!(app.player.total_steps(), app.steps.len());
}

#[test]
fn test_edit_input() {
    let mut app = default_app();

    press(&mut app, KeyCode::Char('e'));
    match &app.mode {
        Mode::Editing { buffer, .. } => assert_eq!(buffer, "[2,7,11,15]; 9"),
        Mode::Normal => panic!("expected edit mode"),
    }

    for _ in 0.."[2,7,11,15]; 9".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "[3,3]; 6");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.input, InputData::new(vec![3, 3], 6));
    assert_eq!(app.status_message, "Input applied");
}

#[test]
fn test_edit_rejects_unsolvable_input() {
    let mut app = default_app();
    let steps_before = app.steps.clone();

    press(&mut app, KeyCode::Char('e'));
    for _ in 0..20 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "1,1; 5");
    press(&mut app, KeyCode::Enter);

    match &app.mode {
        Mode::Editing { error, .. } => {
            assert_eq!(
                error.as_deref(),
                Some("no two elements add up to the target")
            );
        }
        Mode::Normal => panic!("invalid input must keep the editor open"),
    }
    assert_eq!(app.steps, steps_before);

    let screen = render(&mut app);
    assert!(screen.contains("no two elements add up to the target"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, Mode::Normal);
}

#[test]
fn test_long_array_is_windowed() {
    let mut nums: Vec<i64> = (0..200).map(|n| n * 10).collect();
    nums.push(-1);
    let len = nums.len();
    // Only the last element completes a pair (0 + -1)
    let mut app = App::new(InputData::new(nums, -1), Preferences::default());
    press(&mut app, KeyCode::Enter);

    let screen = render(&mut app);
    assert!(screen.contains(&format!("nums ({} elements)", len)));
    assert!(screen.contains("showing 0.."));
    assert!(screen.contains("Answer: [0, 200]"));
}

#[test]
fn test_hashmap_scroll_survives_redraw() {
    // No pair exists, so the second to last step stores the 60th entry
    let nums: Vec<i64> = (0..60).map(|n| n * 10).collect();
    let mut app = App::new(InputData::new(nums, -1), Preferences::default());
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.current_step().map(|s| s.description.as_str()), Some("Stored"));

    render(&mut app);
    let followed = app.hashmap_scroll.offset;
    assert!(followed > 5, "stored entry should pull the list down");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused_pane, FocusedPane::HashMap);
    for _ in 0..5 {
        press(&mut app, KeyCode::Up);
    }
    render(&mut app);
    render(&mut app);
    assert_eq!(app.hashmap_scroll.offset, followed - 5);

    // Returning to the step follows its marked entry again
    press(&mut app, KeyCode::Left);
    render(&mut app);
    press(&mut app, KeyCode::Right);
    render(&mut app);
    assert_eq!(app.hashmap_scroll.offset, followed);
}

#[test]
fn test_array_pane_lists_annotations() {
    let mut step = generate_steps(&[2, 7, 11, 15], 9)[0].clone();
    step.annotations.push(Annotation {
        target_index: 2,
        text: "too large".to_string(),
        position: AnnotationPosition::Bottom,
    });

    let backend = TestBackend::new(60, 16);
    let mut terminal = Terminal::new(backend).expect("Failed to create test terminal");
    terminal
        .draw(|f| {
            let area = f.area();
            render_array_pane(f, area, &step, 9, false)
        })
        .expect("draw failed");
    let screen = buffer_to_string(terminal.backend().buffer());

    assert!(screen.contains("[2] ↑ too large"));
}
