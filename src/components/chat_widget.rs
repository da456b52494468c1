//! Floating career-assistant chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `RwSignal<ChatState>` from context. Sending goes through
//! `controllers::chat`, which snapshots the analysis page at send time. The
//! widget also follows `AnalysisEvents` so the context is current even
//! before the next message.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::controllers::chat::{quick_question, send_message};
use crate::net::api::HttpBackend;
use crate::state::analysis::AnalysisState;
use crate::state::chat::{Author, ChatState, QUICK_QUESTIONS};
use crate::state::events::AnalysisEvents;
use crate::util::markdown::render_reply_html;

/// Maximum height the message box grows to, in pixels.
pub const MAX_INPUT_HEIGHT: i32 = 120;

/// Height for the message box given its content height.
pub fn textarea_height(scroll_height: i32) -> i32 {
    scroll_height.clamp(0, MAX_INPUT_HEIGHT)
}

/// Height for the message box holding `input`, or `None` to leave it at
/// `auto` (its single-row height) once the input has been cleared.
pub fn input_height(input: &str, scroll_height: i32) -> Option<i32> {
    (!input.is_empty()).then(|| textarea_height(scroll_height))
}

/// Enter sends; Shift+Enter inserts a newline.
pub fn is_send_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let events = expect_context::<RwSignal<AnalysisEvents>>();
    let backend = StoredValue::new(expect_context::<HttpBackend>());

    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    Effect::new(move || {
        let seq = events.with(AnalysisEvents::seq);
        if seq == 0 {
            return;
        }
        if let Some(event) = events.with_untracked(|channel| channel.latest().cloned()) {
            log::debug!("chat context updated from analysis #{seq}");
            chat.update(|state| state.apply_analysis(&event));
        }
    });

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    // Follows every input change, including the clear done by a send or a
    // quick question.
    Effect::new(move || {
        #[cfg(not(feature = "csr"))]
        chat.track();

        #[cfg(feature = "csr")]
        {
            let input = chat.with(|state| state.input.clone());
            if let Some(el) = input_ref.get() {
                let style = el.style();
                let resized = style.set_property("height", "auto").and_then(|()| {
                    match input_height(&input, el.scroll_height()) {
                        Some(px) => style.set_property("height", &format!("{px}px")),
                        None => Ok(()),
                    }
                });
                if let Err(err) = resized {
                    log::debug!("chat input resize failed: {err:?}");
                }
            }
        }
    });

    let do_send = move || {
        let backend = backend.get_value();
        leptos::task::spawn_local(async move {
            let exchange = send_message(&backend, &chat, &analysis).await;
            log::debug!("chat exchange finished: {exchange:?}");
        });
    };

    let ask = move |question: &'static str| {
        let backend = backend.get_value();
        leptos::task::spawn_local(async move {
            let exchange = quick_question(&backend, &chat, &analysis, question).await;
            log::debug!("quick question finished: {exchange:?}");
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_send_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let is_open = move || chat.with(|state| state.open);
    let can_send = move || chat.with(|state| !state.typing && !state.input.trim().is_empty());

    view! {
        <div class="chat-widget" class:chat-widget--open=is_open>
            <button
                class="chat-widget__toggle"
                aria-label="Open career assistant"
                on:click=move |_| chat.update(ChatState::toggle_open)
            >
                "💬"
            </button>

            <Show when=is_open>
                <div class="chat-widget__panel">
                    <div class="chat-widget__header">
                        <span class="chat-widget__title">"Career Assistant"</span>
                        <button
                            class="chat-widget__close"
                            aria-label="Close chat"
                            on:click=move |_| chat.update(ChatState::close)
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="chat-widget__messages" node_ref=messages_ref>
                        {move || {
                            let transcript = chat.with(|state| state.transcript.clone());
                            if transcript.is_empty() {
                                return view! {
                                    <div class="chat-widget__empty">
                                        "Hi! Ask me about your match score or how to close skill gaps."
                                    </div>
                                }
                                    .into_any();
                            }
                            transcript
                                .into_iter()
                                .map(|entry| {
                                    let is_bot = entry.author == Author::Bot;
                                    let body = if is_bot {
                                        view! {
                                            <div
                                                class="chat-widget__markdown"
                                                inner_html=render_reply_html(&entry.content)
                                            ></div>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span>{entry.content}</span> }.into_any()
                                    };
                                    view! {
                                        <div
                                            class="chat-widget__message"
                                            class:chat-widget__message--bot=is_bot
                                            class:chat-widget__message--user=!is_bot
                                            data-id=entry.id
                                        >
                                            <div class="chat-widget__bubble">{body}</div>
                                            <span class="chat-widget__time">{entry.time_label}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}

                        {move || {
                            chat.with(|state| state.typing)
                                .then(|| {
                                    view! {
                                        <div class="chat-widget__typing" aria-label="Assistant is typing">
                                            <span></span>
                                            <span></span>
                                            <span></span>
                                        </div>
                                    }
                                })
                        }}
                    </div>

                    <div class="chat-widget__quick">
                        {QUICK_QUESTIONS
                            .into_iter()
                            .map(|question| {
                                view! {
                                    <button
                                        class="chat-widget__quick-btn"
                                        disabled=move || chat.with(|state| state.typing)
                                        on:click=move |_| ask(question)
                                    >
                                        {question}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="chat-widget__input-row">
                        <textarea
                            class="chat-widget__input"
                            rows="1"
                            placeholder="Ask about your results..."
                            node_ref=input_ref
                            prop:value=move || chat.with(|state| state.input.clone())
                            on:input=move |ev| chat.update(|state| state.input = event_target_value(&ev))
                            on:keydown=on_keydown
                        ></textarea>
                        <button
                            class="btn btn--primary chat-widget__send"
                            on:click=move |_| do_send()
                            disabled=move || !can_send()
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
