//! Prompt construction for the two conversation states.

use crate::session::Turn;

/// Prompt for the opening turn: the message is treated as a topic to be
/// explained, not as a question over prior context.
pub fn opening(topic: &str) -> String {
    format!(
        "Explain the following in **maximum 10 short lines**.\n\
         Only highlight key terms using **bold**.\n\
         Do not use bullet points or stars.\n\
         \n\
         Topic: {topic}"
    )
}

/// Prompt for a follow-up turn: replays the base question and the full
/// ordered history so the model can answer in context, with the same
/// brevity and emphasis constraints as the opening turn.
pub fn follow_up(base_question: &str, history: &[Turn], text: &str) -> String {
    let history_json =
        serde_json::to_string_pretty(history).expect("turn history serializes to JSON");
    format!(
        "Base Question: {base_question}\n\
         \n\
         Conversation History:\n\
         {history_json}\n\
         \n\
         User asks: {text}\n\
         \n\
         Respond in **maximum 10 short lines**.\n\
         Keep explanation clear and concise.\n\
         Use **bold** only for important terms. Do not use '*' anywhere else."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_prompt_embeds_topic_only() {
        let p = opening("recursion");
        assert!(p.contains("Topic: recursion"));
        assert!(!p.contains("Conversation History"));
    }

    #[test]
    fn follow_up_prompt_serializes_history_with_role_keys() {
        let history = vec![Turn::bot("Recursion is..."), Turn::user("an example?")];
        let p = follow_up("explain recursion", &history, "in Rust please");
        assert!(p.contains("Base Question: explain recursion"));
        assert!(p.contains("\"bot\": \"Recursion is...\""));
        assert!(p.contains("\"user\": \"an example?\""));
        assert!(p.contains("User asks: in Rust please"));
    }
}
