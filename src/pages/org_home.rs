//! Org home: the org's own events, collaboration inbox, and document upload.

use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::components::event_card::EventCard;
use crate::components::guard::RequireRole;
use crate::net::api::Api;
#[cfg(feature = "hydrate")]
use crate::net::api::orgs::OrgProfileDraft;
use crate::net::types::{RequestStatus, Role};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

#[component]
pub fn OrgHomePage() -> impl IntoView {
    view! {
        <RequireRole allow=&[Role::Org]>
            <OrgHomeContent/>
        </RequireRole>
    }
}

#[component]
fn OrgHomeContent() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let events = LocalResource::new({
        let api = api.clone();
        move || {
            let client = api.events.clone();
            // The guard guarantees an org actor is present here.
            let org_id = auth.get().actor.map(|actor| actor.id().to_owned()).unwrap_or_default();
            async move { client.by_org(&org_id).await }
        }
    });

    view! {
        <div class="org-home">
            <section class="org-home__events">
                <h2>"Our events"</h2>
                <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                    {move || {
                        events
                            .get()
                            .map(|outcome| match outcome {
                                Ok(list) if list.is_empty() => {
                                    view! { <p>"No events yet. Create one from the dashboard."</p> }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <div class="org-home__cards">
                                            {list
                                                .into_iter()
                                                .map(|event| view! { <EventCard event=event/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <ErrorPanel
                                            message=err.to_string()
                                            on_retry=Callback::new(move |()| events.refetch())
                                        />
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <CollabInbox/>
            <DocumentUpload/>
        </div>
    }
}

/// Incoming collaboration requests with accept/reject actions.
#[component]
fn CollabInbox() -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let inbox = LocalResource::new({
        let api = api.clone();
        move || {
            let collab = api.collab.clone();
            async move { collab.incoming().await }
        }
    });

    let decide = move |request_id: String, accept: bool| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = if accept {
                    api.collab.accept(&request_id).await
                } else {
                    api.collab.reject(&request_id).await
                };
                match result {
                    Ok(()) => inbox.refetch(),
                    Err(err) => {
                        toasts.update(|t| {
                            t.push_error(&format!("Could not update the request: {err}"));
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request_id, accept, &api, toasts);
        }
    };

    view! {
        <section class="org-home__collab">
            <h2>"Collaboration requests"</h2>
            <Suspense fallback=move || view! { <p>"Loading requests..."</p> }>
                {move || {
                    inbox
                        .get()
                        .map(|outcome| match outcome {
                            Ok(requests) => {
                                let pending: Vec<_> = requests
                                    .into_iter()
                                    .filter(|r| r.status == RequestStatus::Pending)
                                    .collect();
                                if pending.is_empty() {
                                    return view! { <p>"No pending requests."</p> }.into_any();
                                }
                                view! {
                                    <ul class="org-home__requests">
                                        {pending
                                            .into_iter()
                                            .map(|request| {
                                                let accept_id = request.id.clone();
                                                let reject_id = request.id.clone();
                                                let decide_accept = decide.clone();
                                                let decide_reject = decide.clone();
                                                view! {
                                                    <li class="org-home__request">
                                                        <span>{request.org_name}</span>
                                                        {request.message.map(|m| view! { <p>{m}</p> })}
                                                        <button
                                                            class="btn btn--primary"
                                                            on:click=move |_| decide_accept(accept_id.clone(), true)
                                                        >
                                                            "Accept"
                                                        </button>
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| decide_reject(reject_id.clone(), false)
                                                        >
                                                            "Reject"
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
                                        on_retry=Callback::new(move |()| inbox.refetch())
                                    />
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

/// Verification document upload feeding the admin review queue.
#[component]
fn DocumentUpload() -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let busy = RwSignal::new(false);

    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get() else {
                return;
            };
            let files = input.files();
            let documents: Vec<web_sys::File> = files
                .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                .unwrap_or_default();
            if documents.is_empty() {
                toasts.update(|t| {
                    t.push_error("Choose at least one document first.");
                });
                return;
            }
            busy.set(true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.orgs.update_profile(OrgProfileDraft::default(), None, documents).await {
                    Ok(_) => {
                        toasts.update(|t| {
                            t.push_success("Documents submitted for verification.");
                        });
                    }
                    Err(err) => {
                        toasts.update(|t| {
                            t.push_error(&format!("Upload failed: {err}"));
                        });
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, toasts);
        }
    };

    view! {
        <section class="org-home__docs">
            <h2>"Verification documents"</h2>
            <form class="org-home__docs-form" on:submit=on_upload>
                <input type="file" multiple node_ref=file_input/>
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Upload"
                </button>
            </form>
        </section>
    }
}
