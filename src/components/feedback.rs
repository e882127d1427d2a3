//! 反馈与建议页面：两个独立表单
//!
//! 反馈走远程 `/feedback`（或本地集合）；建议仅存在于本地集合，
//! 远程 API 没有对应端点。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::notice::Notice;
use crate::data::use_data;
use crate::models::{Feedback, FeedbackRequest, SuggestionRequest};

#[component]
pub fn FeedbackPage() -> impl IntoView {
    view! {
        <div class="py-12 px-4 max-w-4xl mx-auto">
            <h1 class="text-3xl font-bold text-center mb-8">"Feedback & Suggestions"</h1>
            <div class="grid md:grid-cols-2 gap-8">
                <FeedbackForm />
                <SuggestionForm />
            </div>
            <RecentFeedback />
        </div>
    }
}

/// 已收到的反馈列表（远程或本地集合）
#[component]
fn RecentFeedback() -> impl IntoView {
    let data = use_data();

    let (remote_feedbacks, set_remote_feedbacks) = signal(Vec::<Feedback>::new());
    if api::is_configured() {
        Effect::new(move |_| {
            spawn_local(async move {
                if let Ok(list) = api::feedback::list().await {
                    set_remote_feedbacks.set(list);
                }
            });
        });
    }

    let feedbacks = move || {
        if api::is_configured() {
            remote_feedbacks.get()
        } else {
            data.with(|d| d.feedbacks.clone())
        }
    };

    view! {
        <Show when=move || !feedbacks().is_empty()>
            <h2 class="text-xl font-bold mt-12 mb-4">"Ils nous ont fait confiance"</h2>
            <div class="space-y-2">
                {move || feedbacks()
                    .into_iter()
                    .map(|f| view! {
                        <div class="card bg-base-100 shadow-sm">
                            <div class="card-body py-3">
                                <div class="flex justify-between">
                                    <span class="font-semibold">{f.base.name}</span>
                                    {f.base.rating.map(|r| view! {
                                        <span class="text-sm text-base-content/60">
                                            {format!("{}/5", r)}
                                        </span>
                                    })}
                                </div>
                                <p class="text-sm text-base-content/80">{f.base.message}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}

#[component]
fn FeedbackForm() -> impl IntoView {
    let data = use_data();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (rating, set_rating) = signal("5".to_string());
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = FeedbackRequest {
            name: name.get(),
            email: email.get(),
            message: message.get(),
            rating: rating.get().parse().ok(),
        };

        if api::is_configured() {
            spawn_local(async move {
                match api::feedback::create(&req).await {
                    Ok(_) => set_notice.set(Some(("Merci pour votre retour !".to_string(), false))),
                    Err(e) => set_notice.set(Some((e.to_string(), true))),
                }
            });
        } else {
            data.update(|d| d.add_feedback(req));
            set_notice.set(Some(("Merci pour votre retour !".to_string(), false)));
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body gap-3" on:submit=on_submit>
                <h2 class="card-title">"Votre avis"</h2>
                <Notice notice=notice />
                <input
                    type="text"
                    placeholder="Nom"
                    class="input input-bordered"
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    prop:value=name
                    required
                />
                <input
                    type="email"
                    placeholder="E-mail"
                    class="input input-bordered"
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    prop:value=email
                    required
                />
                <select
                    class="select select-bordered"
                    on:change=move |ev| set_rating.set(event_target_value(&ev))
                    prop:value=rating
                >
                    <option value="5">"5 - Excellent"</option>
                    <option value="4">"4 - Très bien"</option>
                    <option value="3">"3 - Bien"</option>
                    <option value="2">"2 - Moyen"</option>
                    <option value="1">"1 - Décevant"</option>
                </select>
                <textarea
                    class="textarea textarea-bordered"
                    placeholder="Votre message"
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                    prop:value=message
                    required
                ></textarea>
                <button class="btn btn-primary">"Envoyer"</button>
            </form>
        </div>
    }
}

#[component]
fn SuggestionForm() -> impl IntoView {
    let data = use_data();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        data.update(|d| {
            d.add_suggestion(SuggestionRequest {
                name: name.get(),
                email: email.get(),
                message: message.get(),
            })
        });
        set_notice.set(Some(("Suggestion bien notée, merci !".to_string(), false)));
        set_message.set(String::new());
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body gap-3" on:submit=on_submit>
                <h2 class="card-title">"Une suggestion ?"</h2>
                <Notice notice=notice />
                <input
                    type="text"
                    placeholder="Nom"
                    class="input input-bordered"
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    prop:value=name
                />
                <input
                    type="email"
                    placeholder="E-mail"
                    class="input input-bordered"
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    prop:value=email
                />
                <textarea
                    class="textarea textarea-bordered"
                    placeholder="Votre idée pour l'association"
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                    prop:value=message
                    required
                ></textarea>
                <button class="btn btn-secondary">"Proposer"</button>
            </form>
        </div>
    }
}
