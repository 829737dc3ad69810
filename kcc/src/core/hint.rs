//! Hint directive scanning.
//!
//! Test scripts may embed lines of the form
//! `# @KCC hint <exit_code> <message...>`; when a test fails with that
//! exit code the message is surfaced under its report line.

/// Scan script text for the first hint directive matching `exit_code`.
///
/// A directive line splits on whitespace into more than four tokens whose
/// first four equal `#`, `@kcc`, `hint` (markers compared
/// ASCII-case-insensitively), and the exit code's decimal string form.
/// Returns the remaining tokens joined by single spaces; scanning stops at
/// the first match. No match anywhere yields an empty string.
pub fn find_hint(text: &str, exit_code: i32) -> String {
    let code = exit_code.to_string();
    for line in text.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() <= 4 {
            continue;
        }
        if tokens[0] == "#"
            && tokens[1].eq_ignore_ascii_case("@kcc")
            && tokens[2].eq_ignore_ascii_case("hint")
            && tokens[3] == code
        {
            return tokens[4..].join(" ");
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_hint_for_matching_exit_code() {
        let text = "#!/bin/sh\n# @KCC hint 2 Check network cable\nexit 2\n";
        assert_eq!(find_hint(text, 2), "Check network cable");
    }

    #[test]
    fn markers_match_case_insensitively() {
        let text = "# @kcc HINT 3 replug the drive\n";
        assert_eq!(find_hint(text, 3), "replug the drive");
    }

    #[test]
    fn exit_code_must_match_as_string() {
        let text = "# @KCC hint 2 Check network cable\n";
        assert_eq!(find_hint(text, 3), "");
    }

    #[test]
    fn first_matching_line_wins() {
        let text = "# @KCC hint 2 first hint\n# @KCC hint 2 second hint\n";
        assert_eq!(find_hint(text, 2), "first hint");
    }

    #[test]
    fn requires_more_than_four_tokens() {
        // A directive with no message text is not a hint.
        let text = "# @KCC hint 2\n";
        assert_eq!(find_hint(text, 2), "");
    }

    #[test]
    fn joins_message_tokens_with_single_spaces() {
        let text = "# @KCC hint 5 run   fsck   on /dev/sda1\n";
        assert_eq!(find_hint(text, 5), "run fsck on /dev/sda1");
    }

    #[test]
    fn no_hint_yields_empty_string() {
        assert_eq!(find_hint("#!/bin/sh\nexit 1\n", 1), "");
    }
}
