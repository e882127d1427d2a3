//! 活动管理：创建活动、指派会员、添加评论

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::notice::Notice;
use crate::data::use_data;
use crate::models::{Event, EventRequest, Member};
use crate::session::use_session;

#[component]
pub fn AdminEvents() -> impl IntoView {
    let data = use_data();
    let session_ctx = use_session();

    let (remote_events, set_remote_events) = signal(Vec::<Event>::new());
    let (remote_members, set_remote_members) = signal(Vec::<Member>::new());
    let (refresh, set_refresh) = signal(0u32);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);

    if api::is_configured() {
        Effect::new(move |_| {
            refresh.get();
            spawn_local(async move {
                if let Ok(list) = api::events::list().await {
                    set_remote_events.set(list);
                }
                if let Ok(list) = api::members::list().await {
                    set_remote_members.set(list);
                }
            });
        });
    }

    let events = move || {
        if api::is_configured() {
            remote_events.get()
        } else {
            data.with(|d| d.events.clone())
        }
    };
    let members = move || {
        if api::is_configured() {
            remote_members.get()
        } else {
            data.with(|d| d.members.clone())
        }
    };

    // --- 创建活动 ---
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (event_date, set_event_date) = signal(String::new());
    let (location, set_location) = signal(String::new());

    let on_create = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = EventRequest {
            title: title.get(),
            description: description.get(),
            event_date: event_date.get(),
            location: location.get(),
        };
        if api::is_configured() {
            spawn_local(async move {
                match api::events::create(&req).await {
                    Ok(_) => set_refresh.update(|n| *n += 1),
                    Err(e) => set_notice.set(Some((e.to_string(), true))),
                }
            });
        } else {
            data.update(|d| d.add_event(req));
        }
        set_title.set(String::new());
        set_event_date.set(String::new());
    };

    // --- 指派会员 ---
    let (assign_event, set_assign_event) = signal(String::new());
    let (assign_member, set_assign_member) = signal(String::new());

    let on_assign = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let (Ok(event_id), Ok(member_id)) =
            (assign_event.get().parse::<i64>(), assign_member.get().parse::<i64>())
        else {
            set_notice.set(Some((
                "Choisissez un événement et un membre.".to_string(),
                true,
            )));
            return;
        };
        if api::is_configured() {
            spawn_local(async move {
                match api::events::assign_member(event_id, member_id).await {
                    Ok(_) => set_notice.set(Some(("Membre affecté.".to_string(), false))),
                    Err(e) => set_notice.set(Some((e.to_string(), true))),
                }
            });
        } else {
            data.update(|d| d.assign_member_to_event(event_id, member_id));
            set_notice.set(Some(("Membre affecté.".to_string(), false)));
        }
    };

    // --- 评论 ---
    let (comment_event, set_comment_event) = signal(String::new());
    let (comment_text, set_comment_text) = signal(String::new());

    let on_comment = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Ok(event_id) = comment_event.get().parse::<i64>() else {
            set_notice.set(Some(("Choisissez un événement.".to_string(), true)));
            return;
        };
        let text = comment_text.get();
        if api::is_configured() {
            spawn_local(async move {
                match api::events::add_comment(event_id, &text).await {
                    Ok(_) => set_notice.set(Some(("Commentaire ajouté.".to_string(), false))),
                    Err(e) => set_notice.set(Some((e.to_string(), true))),
                }
            });
        } else {
            let (user_id, user_name) = session_ctx
                .session
                .get_untracked()
                .map(|s| (Some(s.id), s.name))
                .unwrap_or((None, "Anonyme".to_string()));
            data.update(|d| d.add_event_comment(event_id, text, user_id, user_name));
            set_notice.set(Some(("Commentaire ajouté.".to_string(), false)));
        }
        set_comment_text.set(String::new());
    };

    let event_options = move || {
        events()
            .into_iter()
            .map(|e| view! { <option value=e.id.to_string()>{e.base.title}</option> })
            .collect_view()
    };

    view! {
        <div class="py-8 px-4 max-w-4xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">"Gestion des événements"</h1>
            <Notice notice=notice />

            <div class="card bg-base-100 shadow mb-8">
                <form class="card-body gap-3" on:submit=on_create>
                    <h2 class="card-title">"Nouvel événement"</h2>
                    <input
                        type="text"
                        placeholder="Titre"
                        class="input input-bordered"
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        prop:value=title
                        required
                    />
                    <textarea
                        class="textarea textarea-bordered"
                        placeholder="Description"
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        prop:value=description
                    ></textarea>
                    <div class="flex gap-2">
                        <input
                            type="date"
                            class="input input-bordered flex-1"
                            on:input=move |ev| set_event_date.set(event_target_value(&ev))
                            prop:value=event_date
                            required
                        />
                        <input
                            type="text"
                            placeholder="Lieu"
                            class="input input-bordered flex-1"
                            on:input=move |ev| set_location.set(event_target_value(&ev))
                            prop:value=location
                        />
                    </div>
                    <button class="btn btn-primary">"Créer"</button>
                </form>
            </div>

            <div class="grid md:grid-cols-2 gap-6 mb-8">
                <form class="card bg-base-100 shadow card-body gap-3" on:submit=on_assign>
                    <h2 class="card-title text-base">"Affecter un membre"</h2>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| set_assign_event.set(event_target_value(&ev))
                    >
                        <option value="">"-- Événement --"</option>
                        {event_options}
                    </select>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| set_assign_member.set(event_target_value(&ev))
                    >
                        <option value="">"-- Membre --"</option>
                        {move || members()
                            .into_iter()
                            .map(|m| view! { <option value=m.id.to_string()>{m.base.name}</option> })
                            .collect_view()}
                    </select>
                    <button class="btn btn-secondary btn-sm">"Affecter"</button>
                </form>

                <form class="card bg-base-100 shadow card-body gap-3" on:submit=on_comment>
                    <h2 class="card-title text-base">"Commenter"</h2>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| set_comment_event.set(event_target_value(&ev))
                    >
                        <option value="">"-- Événement --"</option>
                        {event_options}
                    </select>
                    <textarea
                        class="textarea textarea-bordered"
                        placeholder="Commentaire"
                        on:input=move |ev| set_comment_text.set(event_target_value(&ev))
                        prop:value=comment_text
                        required
                    ></textarea>
                    <button class="btn btn-secondary btn-sm">"Ajouter"</button>
                </form>
            </div>

            <h2 class="text-xl font-bold mb-3">"Événements"</h2>
            <div class="space-y-2">
                {move || events()
                    .into_iter()
                    .map(|e| view! {
                        <div class="card bg-base-100 shadow-sm">
                            <div class="card-body py-3">
                                <div class="flex justify-between">
                                    <span class="font-semibold">{e.base.title}</span>
                                    <span class="text-sm text-base-content/60">{e.base.event_date}</span>
                                </div>
                                <p class="text-sm text-base-content/70">{e.base.description}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
