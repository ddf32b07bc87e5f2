// Chat relay prompt templates.

pub fn build_astrologer_prompt(name: &str, message: &str) -> String {
    format!("You are an Astrology expert for {name}. User's question: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_name_and_message() {
        assert_eq!(
            build_astrologer_prompt("Asha", "Will Saturn affect my career?"),
            "You are an Astrology expert for Asha. User's question: Will Saturn affect my career?"
        );
    }

    #[test]
    fn test_braces_in_input_are_kept_literally() {
        assert_eq!(
            build_astrologer_prompt("{message}", "hi"),
            "You are an Astrology expert for {message}. User's question: hi"
        );
    }
}
