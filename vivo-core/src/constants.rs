//! Interface copy shared by every front-end

pub const TITLE: &str = "AI Health Chatbot";
pub const SUBTITLE: &str =
    "Get instant answers to your medical questions with AI-powered assistance";
pub const CHAT_TITLE: &str = "Chat with AI Assistant";
pub const CHAT_DESCRIPTION: &str =
    "Ask questions about your health, lab results, medications, or general wellness";
pub const INPUT_PLACEHOLDER: &str = "Type your question here...";
pub const DISCLAIMER: &str = "This AI assistant is for informational purposes only and does not replace professional medical advice.";

/// Static information panels shown beside the quick questions.
pub const INFO_PANELS: [(&str, &str); 2] = [
    (
        "Health Tips",
        "Get personalized health recommendations based on your lab results and medical history.",
    ),
    (
        "Medical Information",
        "Ask about medications, symptoms, conditions, and general health topics.",
    ),
];
