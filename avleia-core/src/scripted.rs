/// Canned keyword responder, the offline stand-in for the chat backend.
/// Case-insensitive substring match, first keyword wins.
pub fn scripted_reply(user_message: &str) -> &'static str {
    let lower = user_message.to_lowercase();

    if lower.contains("book") {
        "Sure, let’s book your tickets now!"
    } else if lower.contains("hello") {
        "Hello! How can I help you today?"
    } else if lower.contains("bye") {
        "Goodbye! Hope to see you soon."
    } else {
        "I'm sorry, I didn't understand. Could you try again?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert_eq!(scripted_reply("BOOK two seats"), "Sure, let’s book your tickets now!");
        assert_eq!(scripted_reply("Hello there"), "Hello! How can I help you today?");
        assert_eq!(scripted_reply("ok bye"), "Goodbye! Hope to see you soon.");
    }

    #[test]
    fn unknown_input_gets_the_fallback_line() {
        assert_eq!(
            scripted_reply("what time is it"),
            "I'm sorry, I didn't understand. Could you try again?"
        );
    }

    #[test]
    fn first_keyword_wins() {
        // "book" is checked before "hello".
        assert_eq!(scripted_reply("hello, book me in"), "Sure, let’s book your tickets now!");
    }
}
