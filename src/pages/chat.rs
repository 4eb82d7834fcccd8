//! Chat page: conversation list and the selected message thread.

use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::components::guard::RequireRole;
use crate::net::api::Api;
use crate::net::types::Conversation;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <RequireRole>
            <ChatContent/>
        </RequireRole>
    }
}

#[component]
fn ChatContent() -> impl IntoView {
    let api = expect_context::<Api>();

    let selected = RwSignal::new(None::<Conversation>);

    let conversations = LocalResource::new({
        let api = api.clone();
        move || {
            let chat = api.chat.clone();
            async move { chat.conversations().await }
        }
    });

    view! {
        <div class="chat-page">
            <aside class="chat-page__list">
                <h2>"Conversations"</h2>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        conversations
                            .get()
                            .map(|outcome| match outcome {
                                Ok(list) if list.is_empty() => {
                                    view! { <p>"No conversations yet."</p> }.into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <ul>
                                            {list
                                                .into_iter()
                                                .map(|conversation| {
                                                    let entry = conversation.clone();
                                                    let is_active = {
                                                        let id = conversation.id.clone();
                                                        move || {
                                                            selected.read().as_ref().map(|c| c.id.as_str())
                                                                == Some(id.as_str())
                                                        }
                                                    };
                                                    view! {
                                                        <li>
                                                            <button
                                                                class="chat-page__conversation"
                                                                class=("chat-page__conversation--active", is_active)
                                                                on:click=move |_| selected.set(Some(entry.clone()))
                                                            >
                                                                <span class="chat-page__peer">
                                                                    {conversation.peer_name.clone()}
                                                                </span>
                                                                {conversation
                                                                    .last_message
                                                                    .clone()
                                                                    .map(|preview| {
                                                                        view! {
                                                                            <span class="chat-page__preview">{preview}</span>
                                                                        }
                                                                    })}
                                                            </button>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <ErrorPanel
                                            message=err.to_string()
                                            on_retry=Callback::new(move |()| conversations.refetch())
                                        />
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </aside>

            <section class="chat-page__thread">
                {move || match selected.get() {
                    None => view! { <p class="chat-page__hint">"Pick a conversation."</p> }.into_any(),
                    Some(conversation) => {
                        view! { <MessageThread conversation_id=conversation.id/> }.into_any()
                    }
                }}
            </section>
        </div>
    }
}

#[component]
fn MessageThread(conversation_id: String) -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let input = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let messages = LocalResource::new({
        let api = api.clone();
        let conversation_id = conversation_id.clone();
        move || {
            let chat = api.chat.clone();
            let conversation_id = conversation_id.clone();
            async move { chat.messages(&conversation_id, None, None).await }
        }
    });

    // Pin the scroll position to the newest message.
    Effect::new(move || {
        let _ = messages.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() || busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let conversation_id = conversation_id.clone();
            leptos::task::spawn_local(async move {
                match api.chat.send(&conversation_id, &text).await {
                    Ok(_) => {
                        input.set(String::new());
                        messages.refetch();
                    }
                    Err(err) => {
                        toasts.update(|t| {
                            t.push_error(&format!("Could not send the message: {err}"));
                        });
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &conversation_id, toasts);
            busy.set(false);
        }
    };

    let on_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let my_id = move || auth.get().actor.map(|actor| actor.id().to_owned()).unwrap_or_default();

    view! {
        <div class="thread">
            <div class="thread__messages" node_ref=messages_ref>
                <Suspense fallback=move || view! { <p>"Loading messages..."</p> }>
                    {move || {
                        messages
                            .get()
                            .map(|outcome| match outcome {
                                Ok(list) if list.is_empty() => {
                                    view! { <p class="thread__empty">"No messages yet"</p> }.into_any()
                                }
                                Ok(list) => {
                                    let mine = my_id();
                                    list.into_iter()
                                        .map(|message| {
                                            let own = message.sender_id == mine;
                                            view! {
                                                <div
                                                    class="thread__message"
                                                    class=("thread__message--own", move || own)
                                                >
                                                    <span class="thread__author">{message.sender_name}</span>
                                                    <span class="thread__text">{message.content}</span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <ErrorPanel
                                            message=err.to_string()
                                            on_retry=Callback::new(move |()| messages.refetch())
                                        />
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            <div class="thread__input-row">
                <input
                    class="thread__input"
                    type="text"
                    placeholder="Write a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary"
                    on:click=on_click
                    disabled=move || busy.get() || input.read().trim().is_empty()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
