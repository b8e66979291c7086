use std::collections::VecDeque;

pub const APOLOGY: &str =
    "I apologize, but I am currently unable to process your request. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub const fn class(self) -> &'static str {
        match self {
            Self::User => "message user-message",
            Self::Bot => "message bot-message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub content: String,
}

///The floating chat window. Messages live only as long as the process does.
#[derive(Debug, Clone, Default)]
pub struct ChatPanel {
    open: bool,
    messages: Vec<ChatMessage>,
    unanswered: VecDeque<String>,
}

impl ChatPanel {
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub const fn close(&mut self) {
        self.open = false;
    }

    pub fn push(&mut self, sender: Sender, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            sender,
            content: content.into(),
        });
    }

    ///Shows the operator's message and queues it for the bot.
    pub fn ask(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.push(Sender::User, message.clone());
        self.unanswered.push_back(message);
    }

    pub fn next_unanswered(&mut self) -> Option<String> {
        self.unanswered.pop_front()
    }

    pub fn is_waiting(&self) -> bool {
        !self.unanswered.is_empty()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
