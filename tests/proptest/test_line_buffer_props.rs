//! Property-based tests for the line buffer and session

#[path = "../test_utils/mod.rs"]
mod test_utils;

use proptest::prelude::*;
use termo::terminal::{DisplaySink, KeyInput, LineBuffer, Session, TextSurface};
use test_utils::{MockRunner, RecordingWindow};

#[derive(Debug, Clone)]
enum Edit {
    Type(char),
    Backspace,
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        3 => "[a-zA-Z0-9 ./|$\"'\\\\-]".prop_map(|s| Edit::Type(s.chars().next().unwrap())),
        1 => Just(Edit::Backspace),
    ]
}

proptest! {
    #[test]
    fn test_buffer_matches_reference_model(edits in prop::collection::vec(edit_strategy(), 0..200)) {
        let mut buffer = LineBuffer::new();
        let mut surface = TextSurface::new();
        let mut model: Vec<char> = Vec::new();

        for edit in &edits {
            match edit {
                Edit::Type(ch) => {
                    buffer.append(*ch, &mut surface);
                    model.push(*ch);
                }
                Edit::Backspace => {
                    buffer.backspace(&mut surface);
                    model.pop();
                }
            }
        }

        let expected: String = model.into_iter().collect();
        prop_assert_eq!(buffer.as_str(), expected.as_str());
        prop_assert_eq!(surface.content(), expected.as_str());
    }

    #[test]
    fn test_surface_suffix_tracks_buffer(
        prefix in "[a-z\n]{0,40}",
        edits in prop::collection::vec(edit_strategy(), 0..100),
    ) {
        let mut buffer = LineBuffer::new();
        let mut surface = TextSurface::with_content(prefix.clone());

        for edit in &edits {
            match edit {
                Edit::Type(ch) => { buffer.append(*ch, &mut surface); }
                Edit::Backspace => { buffer.backspace(&mut surface); }
            }
            prop_assert_eq!(surface.content(), format!("{}{}", prefix, buffer.as_str()));
        }
    }

    #[test]
    fn test_any_char_never_desyncs(chars in prop::collection::vec(any::<char>(), 0..64)) {
        let mut buffer = LineBuffer::new();
        let mut surface = TextSurface::new();

        for ch in chars {
            buffer.append(ch, &mut surface);
        }

        prop_assert_eq!(surface.content(), buffer.as_str());
    }

    #[test]
    fn test_buffer_empty_after_every_submit(lines in prop::collection::vec("[a-z ]{0,12}", 1..8)) {
        let mut session = Session::new(MockRunner::with_output("ok\n"));
        let mut surface = TextSurface::new();
        let mut window = RecordingWindow::default();

        for line in &lines {
            for ch in line.chars() {
                session.handle_key(KeyInput::Char(ch), &mut surface, &mut window);
            }
            session.handle_key(KeyInput::Submit, &mut surface, &mut window);
            prop_assert_eq!(session.pending(), "");
        }

        let shell_lines: Vec<String> = lines
            .iter()
            .filter(|l| l.as_str() != "exit" && l.as_str() != "clear")
            .cloned()
            .collect();
        prop_assert_eq!(&session.runner().calls, &shell_lines);
    }
}
