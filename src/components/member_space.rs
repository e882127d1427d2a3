//! 会员空间：查看被指派的活动及其评论

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::data::use_data;
use crate::models::{Event, EventComment};
use crate::session::use_session;

#[component]
pub fn MemberSpacePage() -> impl IntoView {
    let data = use_data();
    let session_ctx = use_session();

    let (remote_events, set_remote_events) = signal(Vec::<Event>::new());
    let (load_error, set_load_error) = signal(Option::<String>::None);
    if api::is_configured() {
        Effect::new(move |_| {
            spawn_local(async move {
                match api::events::list().await {
                    Ok(list) => set_remote_events.set(list),
                    Err(e) => set_load_error.set(Some(e.to_string())),
                }
            });
        });
    }

    // 本地模式下按指派关系过滤；远程模式由服务端按身份过滤
    let my_events = move || {
        if api::is_configured() {
            remote_events.get()
        } else {
            let member_id = session_ctx.session.get().map(|s| s.id);
            data.with(|d| {
                let assigned: Vec<i64> = d
                    .event_assignments
                    .iter()
                    .filter(|a| Some(a.member_id) == member_id)
                    .map(|a| a.event_id)
                    .collect();
                d.events
                    .iter()
                    .filter(|e| assigned.contains(&e.id))
                    .cloned()
                    .collect::<Vec<_>>()
            })
        }
    };

    let comments_for = move |event_id: i64| -> Vec<EventComment> {
        data.with(|d| {
            d.event_comments
                .iter()
                .filter(|c| c.event_id == event_id)
                .cloned()
                .collect()
        })
    };

    let greeting = move || {
        session_ctx
            .session
            .get()
            .map(|s| format!("Bonjour, {}", s.name))
            .unwrap_or_default()
    };

    view! {
        <div class="py-8 px-4 max-w-4xl mx-auto">
            <h1 class="text-3xl font-bold mb-2">"Espace membre"</h1>
            <p class="text-base-content/70 mb-6">{greeting}</p>
            {move || load_error.get().map(|message| view! {
                <div role="alert" class="alert alert-error text-sm py-2 mb-3"><span>{message}</span></div>
            })}

            <h2 class="text-xl font-bold mb-3">"Mes événements"</h2>
            <Show
                when=move || !my_events().is_empty()
                fallback=|| view! {
                    <p class="text-base-content/60">"Aucun événement ne vous est affecté pour le moment."</p>
                }
            >
                <div class="space-y-3">
                    {move || my_events()
                        .into_iter()
                        .map(|e| {
                            let comments = comments_for(e.id);
                            view! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body py-4">
                                        <div class="flex justify-between">
                                            <span class="font-semibold">{e.base.title}</span>
                                            <span class="text-sm text-base-content/60">{e.base.event_date}</span>
                                        </div>
                                        <p class="text-sm text-base-content/70">{e.base.description}</p>
                                        <p class="text-sm text-base-content/60">{e.base.location}</p>
                                        <Show when={
                                            let has = !comments.is_empty();
                                            move || has
                                        }>
                                            <div class="mt-2 border-t border-base-300 pt-2 space-y-1">
                                                {comments
                                                    .clone()
                                                    .into_iter()
                                                    .map(|c| view! {
                                                        <p class="text-sm">
                                                            <span class="font-medium">{c.user_name}" : "</span>
                                                            {c.comment}
                                                        </p>
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </Show>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
