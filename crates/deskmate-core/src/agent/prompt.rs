//! Prompt templates for routing, persona turns, and farewell translation.
//!
//! The model only ever sees order facts as embedded prose, so each persona's
//! instruction is built by its own function here and can be tested without a
//! network call.

use deskmate_types::language::Language;
use deskmate_types::order::OrderRecord;
use deskmate_types::persona::{Persona, RoutedPersona};

/// Instruction used for an uncatalogued persona label.
pub const FALLBACK_INSTRUCTION: &str = "You are a helpful assistant.";

/// Classification prompt sent to the Completion Service as a single user message.
pub fn routing_prompt(query: &str, language: Language) -> String {
    let options: String = Persona::ALL
        .iter()
        .map(|p| format!("- {}\n", p.label()))
        .collect();

    format!(
        "You are a routing assistant. Detect the correct agent from the following:\n\
         \n\
         {options}\
         \n\
         User prompt (in {language}): {query}\n\
         \n\
         Reply with the agent name only."
    )
}

pub fn order_tracking_instruction(order: &OrderRecord) -> String {
    format!(
        "You are an order tracking assistant. Use this order info: {}",
        order.to_prompt_text()
    )
}

pub fn refund_instruction(order: &OrderRecord) -> String {
    format!(
        "You are a refund assistant. Use this order info: {}",
        order.to_prompt_text()
    )
}

pub fn return_instruction(order: &OrderRecord) -> String {
    format!(
        "You are a return assistant. Use this order info: {}",
        order.to_prompt_text()
    )
}

pub fn general_support_instruction() -> String {
    "You are a general support assistant. Help the user with their request.".to_string()
}

/// Directive appended for any non-default language.
pub fn language_directive(language: Language) -> Option<String> {
    if language.is_default() {
        return None;
    }
    Some(format!(
        " Respond in {language} using its native writing script. Do not translate the \
         user's query; instead, give a helpful response in that language."
    ))
}

/// Full system instruction for a persona turn.
///
/// `order` is only embedded for personas that work from order facts.
pub fn system_instruction(
    persona: &RoutedPersona,
    order: &OrderRecord,
    language: Language,
) -> String {
    let mut instruction = match persona {
        RoutedPersona::Known(Persona::OrderTracking) => order_tracking_instruction(order),
        RoutedPersona::Known(Persona::Refund) => refund_instruction(order),
        RoutedPersona::Known(Persona::Return) => return_instruction(order),
        RoutedPersona::Known(Persona::GeneralSupport) => general_support_instruction(),
        RoutedPersona::Unrecognized(_) => FALLBACK_INSTRUCTION.to_string(),
    };

    if let Some(directive) = language_directive(language) {
        instruction.push_str(&directive);
    }
    instruction
}

/// Translation request for a static farewell sentence.
pub fn translation_prompt(sentence: &str, language: Language) -> String {
    format!("Translate this message into {language} using its native script:\n\n\"{sentence}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::john_record;

    #[test]
    fn test_routing_prompt_lists_all_personas() {
        let prompt = routing_prompt("Where is my parcel?", Language::Telugu);
        for persona in Persona::ALL {
            assert!(prompt.contains(&format!("- {}", persona.label())));
        }
        assert!(prompt.contains("User prompt (in Telugu): Where is my parcel?"));
        assert!(prompt.starts_with("You are a routing assistant."));
    }

    #[test]
    fn test_order_personas_embed_record() {
        let order = john_record();
        for persona in [Persona::OrderTracking, Persona::Refund, Persona::Return] {
            let text = system_instruction(&persona.into(), &order, Language::English);
            assert!(text.contains("Use this order info: {"));
            assert!(text.contains("ORD12345"));
        }
        assert!(order_tracking_instruction(&order).starts_with("You are an order tracking assistant."));
        assert!(refund_instruction(&order).starts_with("You are a refund assistant."));
        assert!(return_instruction(&order).starts_with("You are a return assistant."));
    }

    #[test]
    fn test_empty_record_embeds_braces() {
        let text = order_tracking_instruction(&OrderRecord::default());
        assert_eq!(
            text,
            "You are an order tracking assistant. Use this order info: {}"
        );
    }

    #[test]
    fn test_general_support_ignores_order() {
        let text = system_instruction(
            &Persona::GeneralSupport.into(),
            &john_record(),
            Language::English,
        );
        assert_eq!(
            text,
            "You are a general support assistant. Help the user with their request."
        );
    }

    #[test]
    fn test_unrecognized_persona_gets_fallback() {
        let persona = RoutedPersona::Unrecognized("Billing Agent".to_string());
        let text = system_instruction(&persona, &john_record(), Language::English);
        assert_eq!(text, FALLBACK_INSTRUCTION);
    }

    #[test]
    fn test_language_directive_only_for_non_default() {
        assert!(language_directive(Language::English).is_none());

        let text = system_instruction(
            &Persona::Refund.into(),
            &OrderRecord::default(),
            Language::Hindi,
        );
        assert!(text.ends_with(
            " Respond in Hindi using its native writing script. Do not translate the \
             user's query; instead, give a helpful response in that language."
        ));
    }

    #[test]
    fn test_translation_prompt_quotes_sentence() {
        let prompt = translation_prompt("Hope we made your return process easier!", Language::Telugu);
        assert_eq!(
            prompt,
            "Translate this message into Telugu using its native script:\n\n\"Hope we made your return process easier!\""
        );
    }
}
