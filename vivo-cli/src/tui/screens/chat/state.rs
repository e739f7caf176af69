//! Screen-local state that is not part of the conversation

/// Scroll position, spinner frame and transient notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatScreenState {
    /// Scroll offset for messages; `u16::MAX` means "stick to the bottom"
    pub scroll_offset: u16,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Status message shown in the header
    pub status_message: Option<String>,
    /// Whether the command help overlay is shown in the sidebar
    pub show_help: bool,
    /// Set when something changed and the frame must be redrawn
    pub dirty: bool,
}

impl Default for ChatScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatScreenState {
    pub fn new() -> Self {
        Self {
            scroll_offset: u16::MAX,
            loading_frame: 0,
            status_message: None,
            show_help: false,
            dirty: true,
        }
    }

    pub fn scroll_up(&mut self, visible_max: u16) {
        let current = self.scroll_offset.min(visible_max);
        self.scroll_offset = current.saturating_sub(1);
        self.dirty = true;
    }

    pub fn scroll_down(&mut self, visible_max: u16) {
        if self.scroll_offset < visible_max {
            self.scroll_offset += 1;
        }
        self.dirty = true;
    }

    pub fn scroll_top(&mut self) {
        self.scroll_offset = 0;
        self.dirty = true;
    }

    /// Scroll to bottom of messages
    pub fn scroll_to_bottom(&mut self) {
        // Resolved during render against the content height
        self.scroll_offset = u16::MAX;
        self.dirty = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.dirty = true;
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        self.loading_frame = (self.loading_frame + 1) % SPINNER.len();
        self.dirty = true;
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.loading_frame % SPINNER.len()]
    }
}

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
