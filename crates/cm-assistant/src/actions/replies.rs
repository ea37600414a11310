//! Fixed replies: help text and small talk.

use crate::command::ChitchatKind;
use crate::response::Response;

pub const HELP_TEXT: &str = "I can help with: \n\
- \"show hybrid suvs under 30k\"\n\
- \"compare camry and corolla\"\n\
- \"recommend me hybrid sedans\"\n\
- \"add corolla to my garage\"";

pub fn help() -> Response {
    Response::text(HELP_TEXT)
}

/// Salutation for a local hour (0-23).
pub fn salutation(hour: u32) -> &'static str {
    match hour {
        0..12 => "Good morning",
        12..18 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn chitchat(kind: ChitchatKind, hour: u32) -> Response {
    let message = match kind {
        ChitchatKind::Greeting => format!(
            "{}! I can help you find cars. Try \"hybrid suv under 30k\" or tell me your budget and region.",
            salutation(hour)
        ),
        ChitchatKind::Thanks => {
            "You're welcome! Want me to save a car to your garage or compare any models?".into()
        }
        ChitchatKind::Farewell => "Bye! Happy driving. Ping me anytime.".into(),
        ChitchatKind::Affirmation => {
            "Great! Do you have a price range or location I should focus on?".into()
        }
        ChitchatKind::Negative => {
            "No worries. Tell me what body type or price you have in mind when you're ready.".into()
        }
        ChitchatKind::HowAreYou => {
            "I'm doing great and ready to help. What kind of car are you considering?".into()
        }
        ChitchatKind::WhoAreYou => "I'm Carmate, your offline car assistant. I can search, \
             compare, recommend, and add cars to your garage."
            .into(),
        ChitchatKind::Generic => "Hi there! You can ask me to search, compare, or recommend \
             cars. For example, \"electric sedan for 2025\" or \"compare camry and corolla\"."
            .into(),
    };
    Response::text(message)
}
