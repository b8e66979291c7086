use crate::chat::ChatPanel;
use maud::{Markup, html};

pub fn chat_widget(panel: &ChatPanel) -> Markup {
    let visibility = if panel.is_open() { "active" } else { "hidden" };

    html! {
        div class="chatbot fixed bottom-6 right-6 flex flex-col items-end" {
            div id="chatbotWindow" class={"chatbot-window w-80 bg-gray-800 rounded shadow-lg mb-4 " (visibility)} {
                div class="chatbot-header flex flex-row justify-between items-center p-3 bg-gray-700 rounded-t" {
                    h4 class="font-semibold" {"Hostel Assistant"}
                    button id="chatbotClose" hx-post="/chat/close" class="text-gray-300 hover:text-white" {
                        i class="fas fa-times" {}
                    }
                }
                div id="chatbotBody" class="chatbot-body p-3 h-64 overflow-y-auto space-y-2" {
                    @for message in panel.messages() {
                        div class=(message.sender.class()) {
                            div class="message-content" {(message.content)}
                        }
                    }
                    @if panel.is_waiting() {
                        div id="chatbotTyping" class="message bot-message" hx-post="/chat/reply" hx-trigger="load" {
                            div class="message-content" { i class="fas fa-ellipsis-h" {} }
                        }
                    }
                }
                form hx-post="/chat" class="chatbot-input flex flex-row p-3 space-x-2" {
                    input id="chatbotInput" name="message" type="text" autocomplete="off" placeholder="Type your message..." class="flex-1 rounded py-1 px-2 bg-gray-700 border border-gray-600" {}
                    button id="chatbotSend" type="submit" class="bg-blue-600 hover:bg-blue-800 py-1 px-3 rounded" {
                        i class="fas fa-paper-plane" {}
                    }
                }
            }
            button id="chatbotToggle" hx-post="/chat/toggle" class="bg-blue-600 hover:bg-blue-800 rounded-full w-14 h-14 shadow-lg" {
                i class="fas fa-robot text-xl" {}
            }
        }
    }
}
