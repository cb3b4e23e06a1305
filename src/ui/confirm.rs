use super::colorize::colorize;
use dialoguer::Input;

/// Ask the user a yes/no question. Only a literal `y` (any case, surrounding
/// whitespace ignored) counts as yes. Without an interactive stdin the answer
/// is always no.
pub fn confirm(prompt: &str, plain_text: bool) -> bool {
    if is_non_interactive() {
        return false;
    }

    Input::<String>::new()
        .with_prompt(colorize(prompt, plain_text))
        .allow_empty(true)
        .interact_text()
        .map(|answer| is_affirmative(&answer))
        .unwrap_or(false)
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

fn is_non_interactive() -> bool {
    std::env::var("GITRID_NON_INTERACTIVE").is_ok() || !atty::is(atty::Stream::Stdin)
}
