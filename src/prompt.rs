//! Prompt assembly - turns the seven form parameters into a model instruction

use crate::models::PromptRequest;

/// Persona the model adopts for every generation.
pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert prompt engineer. From the requirements you are given, you \
craft a single intellectual, thought-provoking prompt ready to be pasted into \
another AI assistant. Respond with the prompt text alone: no preamble, no \
commentary, no markdown fences.";

/// Build the user message listing the requirements.
///
/// Blank special instructions are omitted entirely; an empty tone selection
/// leaves the tone up to the model.
pub fn assemble(request: &PromptRequest) -> String {
    let mut message = String::from("Craft one prompt that satisfies every requirement below.\n\n");

    message.push_str(&format!("Role the prompt speaks as: {}\n", request.role));
    message.push_str(&format!("Topic to explore: {}\n", request.topic));
    message.push_str(&format!("Language to write in: {}\n", request.language));
    message.push_str(&format!("Intended audience: {}\n", request.audience));

    if request.tones.is_empty() {
        message.push_str("Tone: whatever best fits the topic and audience\n");
    } else {
        message.push_str(&format!("Tone: {}\n", request.tones.join(", ")));
    }

    message.push_str(&format!("Length: {}\n", request.length.guidance()));

    let special = request.special_instructions.trim();
    if !special.is_empty() {
        message.push_str(&format!("Special instructions: {}\n", special));
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PromptLength;

    fn full_request() -> PromptRequest {
        PromptRequest {
            role: "teacher".into(),
            topic: "gravity".into(),
            language: "English".into(),
            audience: "kids".into(),
            tones: vec!["Friendly".into(), "Playful".into()],
            length: PromptLength::Short,
            special_instructions: "avoid equations".into(),
        }
    }

    #[test]
    fn test_all_parameters_appear() {
        let message = assemble(&full_request());
        assert!(message.contains("teacher"));
        assert!(message.contains("gravity"));
        assert!(message.contains("English"));
        assert!(message.contains("kids"));
        assert!(message.contains("Friendly, Playful"));
        assert!(message.contains(PromptLength::Short.guidance()));
        assert!(message.contains("avoid equations"));
    }

    #[test]
    fn test_blank_special_instructions_omitted() {
        let mut request = full_request();
        request.special_instructions = "   ".into();
        let message = assemble(&request);
        assert!(!message.contains("Special instructions"));
    }

    #[test]
    fn test_empty_tones_leave_choice_to_model() {
        let mut request = full_request();
        request.tones.clear();
        let message = assemble(&request);
        assert!(message.contains("Tone: whatever best fits"));
    }
}
