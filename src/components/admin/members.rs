//! 会员管理：列表、创建（密码默认值由存储侧生成）、删除

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::notice::Notice;
use crate::data::use_data;
use crate::models::{Member, MemberRequest};

#[component]
pub fn AdminMembers() -> impl IntoView {
    let data = use_data();

    let (remote_members, set_remote_members) = signal(Vec::<Member>::new());
    let (refresh, set_refresh) = signal(0u32);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);

    if api::is_configured() {
        Effect::new(move |_| {
            refresh.get();
            spawn_local(async move {
                if let Ok(list) = api::members::list().await {
                    set_remote_members.set(list);
                }
            });
        });
    }

    let members = move || {
        if api::is_configured() {
            remote_members.get()
        } else {
            data.with(|d| d.members.clone())
        }
    };

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (username, set_username) = signal(String::new());

    let on_create = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = MemberRequest {
            name: name.get(),
            email: email.get(),
            // pseudo 缺省时沿用邮箱
            username: if username.get().is_empty() {
                email.get()
            } else {
                username.get()
            },
        };

        if api::is_configured() {
            spawn_local(async move {
                match api::members::create(&req).await {
                    Ok(_) => set_refresh.update(|n| *n += 1),
                    Err(e) => set_notice.set(Some((e.to_string(), true))),
                }
            });
        } else {
            data.update(|d| d.add_member(req, None));
        }
        set_name.set(String::new());
        set_email.set(String::new());
        set_username.set(String::new());
    };

    let on_delete = move |id: i64| {
        if api::is_configured() {
            spawn_local(async move {
                match api::members::delete(id).await {
                    Ok(_) => set_refresh.update(|n| *n += 1),
                    Err(e) => set_notice.set(Some((e.to_string(), true))),
                }
            });
        } else {
            data.update(|d| d.remove_member(id));
        }
    };

    view! {
        <div class="py-8 px-4 max-w-4xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">"Gestion des membres"</h1>
            <Notice notice=notice />

            <form class="flex flex-wrap gap-2 mb-6" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Nom"
                    class="input input-bordered input-sm flex-1"
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    prop:value=name
                    required
                />
                <input
                    type="email"
                    placeholder="E-mail"
                    class="input input-bordered input-sm flex-1"
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    prop:value=email
                    required
                />
                <input
                    type="text"
                    placeholder="Pseudo (optionnel)"
                    class="input input-bordered input-sm flex-1"
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    prop:value=username
                />
                <button class="btn btn-primary btn-sm">"Ajouter"</button>
            </form>

            <table class="table bg-base-100 shadow">
                <thead>
                    <tr>
                        <th>"Nom"</th>
                        <th>"E-mail"</th>
                        <th>"Pseudo"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || members()
                        .into_iter()
                        .map(|m| {
                            let id = m.id;
                            view! {
                                <tr>
                                    <td>{m.base.name}</td>
                                    <td>{m.base.email}</td>
                                    <td>{m.base.username}</td>
                                    <td class="text-right">
                                        <button
                                            class="btn btn-error btn-xs"
                                            on:click=move |_| on_delete(id)
                                        >
                                            "Supprimer"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
