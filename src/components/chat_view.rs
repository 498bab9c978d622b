use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent};

use crate::constants::PROCESSING_MESSAGE;
use crate::dom_utils;
use crate::messages::Message;
use crate::render::escape_html;
use crate::state::{dispatch_global_message, AppState};
use crate::transcript::Transcript;
use crate::views::View;

const CHAT_TITLE: &str = "chat-db-name";
const CHAT_KIND: &str = "chat-db-kind";
const MESSAGES: &str = "chat-messages";
const INPUT: &str = "chat-input";

/// Build the chat page skeleton once.  Message rendering happens in [`render`].
pub fn mount(document: &Document, parent: &Element) -> Result<(), JsValue> {
    if document.get_element_by_id(View::Chat.element_id()).is_some() {
        return Ok(());
    }

    let page = document.create_element("section")?;
    page.set_id(View::Chat.element_id());
    page.set_class_name("page chat-page");
    dom_utils::hide(&page);

    // Header with back button and database label
    let header = document.create_element("div")?;
    header.set_class_name("chat-header");

    let back_button = document.create_element("button")?;
    back_button.set_class_name("back-button btn btn-secondary");
    back_button.set_text_content(Some("← Back"));
    let back_handler = Closure::wrap(Box::new(move |_: Event| {
        dispatch_global_message(Message::LeaveToList);
    }) as Box<dyn FnMut(_)>);
    back_button.add_event_listener_with_callback("click", back_handler.as_ref().unchecked_ref())?;
    back_handler.forget();

    let title = document.create_element("h2")?;
    title.set_id(CHAT_TITLE);
    let kind = document.create_element("span")?;
    kind.set_id(CHAT_KIND);
    kind.set_class_name("chat-db-kind");

    header.append_child(&back_button)?;
    header.append_child(&title)?;
    header.append_child(&kind)?;
    page.append_child(&header)?;

    let messages = document.create_element("div")?;
    messages.set_id(MESSAGES);
    messages.set_class_name("messages-container");
    page.append_child(&messages)?;

    // Input row
    let input_row = document.create_element("div")?;
    input_row.set_class_name("chat-input-area");

    let input = document.create_element("input")?;
    input.set_id(INPUT);
    input.set_class_name("chat-input");
    input.set_attribute("type", "text")?;
    input.set_attribute("placeholder", "Ask a question about your data...")?;

    let send_button = document.create_element("button")?;
    send_button.set_class_name("send-button btn btn-primary");
    send_button.set_text_content(Some("Send"));

    let document_clone = document.clone();
    let send_handler = Closure::wrap(Box::new(move |_: Event| {
        submit_input(&document_clone);
    }) as Box<dyn FnMut(_)>);
    send_button.add_event_listener_with_callback("click", send_handler.as_ref().unchecked_ref())?;
    send_handler.forget();

    let document_clone = document.clone();
    let keypress_handler = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            submit_input(&document_clone);
        }
    }) as Box<dyn FnMut(_)>);
    input.add_event_listener_with_callback("keypress", keypress_handler.as_ref().unchecked_ref())?;
    keypress_handler.forget();

    input_row.append_child(&input)?;
    input_row.append_child(&send_button)?;
    page.append_child(&input_row)?;

    parent.append_child(&page)?;
    Ok(())
}

/// Hand the typed question to the update loop and empty the field.
fn submit_input(document: &Document) {
    let Ok(input) = dom_utils::html_input(document, INPUT) else {
        return;
    };
    let question = input.value();
    if question.trim().is_empty() {
        return;
    }
    input.set_value("");
    dispatch_global_message(Message::SubmitQuestion(question));
}

/// Markup for every bubble of `transcript`, plus a processing bubble while a
/// query is outstanding.
pub fn transcript_html(transcript: &Transcript, pending: bool) -> String {
    let mut html = String::new();
    for message in transcript.messages() {
        html.push_str(&format!(
            "<div class=\"{}\" data-message-id=\"{}\"><div class=\"message-content\">{}</div></div>",
            message.sender.css_class(),
            message.id,
            message.rendered()
        ));
    }
    if pending {
        html.push_str(&format!(
            "<div class=\"message bot-message processing\"><div class=\"message-content\">{}</div></div>",
            escape_html(PROCESSING_MESSAGE)
        ));
    }
    html
}

pub fn render(document: &Document, state: &AppState) -> Result<(), JsValue> {
    let Some(active) = state.transcripts.active() else {
        return Ok(());
    };

    dom_utils::set_text(document, CHAT_TITLE, &active.name);
    dom_utils::set_text(document, CHAT_KIND, active.kind.label());

    let container = dom_utils::by_id(document, MESSAGES)?;
    let html = state
        .transcripts
        .current()
        .map(|t| transcript_html(t, state.active_query_pending()))
        .unwrap_or_default();
    container.set_inner_html(&html);
    container.set_scroll_top(container.scroll_height());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::{ChatMessage, MessageBody};

    #[test]
    fn greeting_renders_as_bot_bubble() {
        let html = transcript_html(&Transcript::greeting(), false);
        assert!(html.starts_with("<div class=\"message bot-message\""));
        assert!(html.contains("Ask me anything about your database."));
        assert!(!html.contains(PROCESSING_MESSAGE));
    }

    #[test]
    fn user_text_is_escaped_and_processing_is_last() {
        let mut t = Transcript::greeting();
        t.push(ChatMessage::user("<img src=x onerror=alert(1)>"));
        let html = transcript_html(&t, true);
        assert!(html.contains("message user-message"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("<img"));
        assert!(html.ends_with("Processing...</div></div>"));
    }

    #[test]
    fn error_bubble_has_prefix() {
        let mut t = Transcript::default();
        t.push(ChatMessage::assistant(MessageBody::Error { detail: "boom".into() }));
        assert!(transcript_html(&t, false).contains("<strong>Error:</strong> boom"));
    }
}
