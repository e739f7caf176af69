//! Canned questions offered next to the thread

/// A suggestion that pre-fills the input without sending it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub text: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        label: "Lab results",
        text: "What do my lab results mean?",
    },
    QuickAction {
        label: "Cholesterol",
        text: "Explain my cholesterol levels",
    },
    QuickAction {
        label: "Blood pressure",
        text: "What is a normal blood pressure?",
    },
];

/// Look up a quick action by its 1-based position.
pub fn quick_action(number: usize) -> Option<&'static QuickAction> {
    number.checked_sub(1).and_then(|index| QUICK_ACTIONS.get(index))
}
