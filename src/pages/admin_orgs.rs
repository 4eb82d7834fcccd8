//! Admin org-verification queue: pending orgs, their documents, decisions.

use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::components::guard::RequireRole;
use crate::net::api::Api;
use crate::net::types::Role;
use crate::state::toast::ToastState;

#[component]
pub fn AdminOrgsPage() -> impl IntoView {
    view! {
        <RequireRole allow=&[Role::Admin]>
            <AdminOrgsContent/>
        </RequireRole>
    }
}

#[component]
fn AdminOrgsContent() -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let selected = RwSignal::new(None::<String>);

    let queue = LocalResource::new({
        let api = api.clone();
        move || {
            let admin = api.admin.clone();
            async move { admin.unverified_orgs().await }
        }
    });

    let decide = move |org_id: String, approved: bool| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.admin.set_verification(&org_id, approved).await {
                    Ok(_) => {
                        selected.set(None);
                        queue.refetch();
                    }
                    Err(err) => {
                        toasts.update(|t| {
                            t.push_error(&format!("Could not record the decision: {err}"));
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (org_id, approved, &api, toasts);
        }
    };

    view! {
        <div class="admin-orgs">
            <h1>"Organizations awaiting verification"</h1>
            <Suspense fallback=move || view! { <p>"Loading queue..."</p> }>
                {move || {
                    queue
                        .get()
                        .map(|outcome| match outcome {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"The queue is empty."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="admin-orgs__list">
                                        {list
                                            .into_iter()
                                            .map(|org| {
                                                let org_id = org.id.clone();
                                                let is_open = {
                                                    let id = org.id.clone();
                                                    move || selected.read().as_deref() == Some(id.as_str())
                                                };
                                                let toggle_id = org.id.clone();
                                                let approve_id = org.id.clone();
                                                let reject_id = org.id.clone();
                                                let decide_approve = decide.clone();
                                                let decide_reject = decide.clone();
                                                view! {
                                                    <li class="admin-orgs__entry">
                                                        <button
                                                            class="admin-orgs__name"
                                                            on:click=move |_| {
                                                                let next = if selected.read().as_deref()
                                                                    == Some(toggle_id.as_str())
                                                                {
                                                                    None
                                                                } else {
                                                                    Some(toggle_id.clone())
                                                                };
                                                                selected.set(next);
                                                            }
                                                        >
                                                            {org.name.clone()}
                                                        </button>
                                                        <button
                                                            class="btn btn--primary"
                                                            on:click=move |_| decide_approve(approve_id.clone(), true)
                                                        >
                                                            "Approve"
                                                        </button>
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| decide_reject(reject_id.clone(), false)
                                                        >
                                                            "Reject"
                                                        </button>
                                                        <Show when=is_open>
                                                            <DocList org_id=org_id.clone()/>
                                                        </Show>
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
                                        on_retry=Callback::new(move |()| queue.refetch())
                                    />
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Documents one org uploaded for review.
#[component]
fn DocList(org_id: String) -> impl IntoView {
    let api = expect_context::<Api>();

    let docs = LocalResource::new(move || {
        let admin = api.admin.clone();
        let org_id = org_id.clone();
        async move { admin.org_docs(&org_id).await }
    });

    view! {
        <div class="doc-list">
            <Suspense fallback=move || view! { <p>"Loading documents..."</p> }>
                {move || {
                    docs.get()
                        .map(|outcome| match outcome {
                            Ok(loaded) if loaded.files.is_empty() => {
                                view! { <p>"No documents uploaded."</p> }.into_any()
                            }
                            Ok(loaded) => {
                                view! {
                                    <ul>
                                        {loaded
                                            .files
                                            .into_iter()
                                            .map(|file| {
                                                view! {
                                                    <li>
                                                        <a href=file.url target="_blank" rel="noopener">
                                                            {file.name}
                                                        </a>
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
                                        on_retry=Callback::new(move |()| docs.refetch())
                                    />
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
