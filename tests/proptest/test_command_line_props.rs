//! Property-based tests for command line escaping and classification

use proptest::prelude::*;
use std::path::PathBuf;
use termo::commands::Command;
use termo::execution::command_line::{escape, render, split};

proptest! {
    #[test]
    fn test_split_recovers_printable_text(text in "[\\u{20}-\\u{7E}]{0,120}") {
        let line = render(&PathBuf::from("/bin/sh"), "-c", &text);
        let args = split(&line).unwrap();
        prop_assert_eq!(args, vec!["/bin/sh".to_string(), "-c".to_string(), text]);
    }

    #[test]
    fn test_split_recovers_unicode_text(text in "\\PC{0,60}") {
        let line = render(&PathBuf::from("/usr/bin/zsh"), "-c", &text);
        let args = split(&line).unwrap();
        prop_assert_eq!(args.len(), 3);
        prop_assert_eq!(&args[2], &text);
    }

    #[test]
    fn test_escape_never_leaves_bare_quote(text in "[a-z\"\\\\ ]{0,50}") {
        let escaped = escape(&text);
        let mut backslashes = 0usize;
        for ch in escaped.chars() {
            if ch == '"' {
                prop_assert!(backslashes % 2 == 1, "unescaped quote in {:?}", escaped);
            }
            backslashes = if ch == '\\' { backslashes + 1 } else { 0 };
        }
    }

    #[test]
    fn test_split_doesnt_panic(s in "\\PC*") {
        let _ = split(&s);
    }

    #[test]
    fn test_only_builtins_are_builtin(s in "\\PC{0,20}") {
        let cmd = Command::classify(&s);
        prop_assert_eq!(cmd.is_builtin(), s == "exit" || s == "clear");
    }
}
