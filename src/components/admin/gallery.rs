//! 画廊管理：添加与删除条目

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::notice::Notice;
use crate::data::use_data;
use crate::models::{GalleryItem, GalleryRequest};

#[component]
pub fn AdminGallery() -> impl IntoView {
    let data = use_data();

    let (remote_items, set_remote_items) = signal(Vec::<GalleryItem>::new());
    let (refresh, set_refresh) = signal(0u32);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);

    if api::is_configured() {
        Effect::new(move |_| {
            refresh.get();
            spawn_local(async move {
                if let Ok(list) = api::gallery::list().await {
                    set_remote_items.set(list);
                }
            });
        });
    }

    let items = move || {
        if api::is_configured() {
            remote_items.get()
        } else {
            data.with(|d| d.gallery.clone())
        }
    };

    let (title, set_title) = signal(String::new());
    let (image_url, set_image_url) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_create = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = GalleryRequest {
            title: title.get(),
            image_url: image_url.get(),
            description: description.get(),
        };
        if api::is_configured() {
            spawn_local(async move {
                match api::gallery::create(&req).await {
                    Ok(_) => set_refresh.update(|n| *n += 1),
                    Err(e) => set_notice.set(Some((e.to_string(), true))),
                }
            });
        } else {
            data.update(|d| d.add_gallery_item(req));
        }
        set_title.set(String::new());
        set_image_url.set(String::new());
        set_description.set(String::new());
    };

    let on_delete = move |id: i64| {
        if api::is_configured() {
            spawn_local(async move {
                match api::gallery::delete(id).await {
                    Ok(_) => set_refresh.update(|n| *n += 1),
                    Err(e) => set_notice.set(Some((e.to_string(), true))),
                }
            });
        } else {
            data.update(|d| d.remove_gallery_item(id));
        }
    };

    view! {
        <div class="py-8 px-4 max-w-4xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">"Galerie"</h1>
            <Notice notice=notice />

            <form class="flex flex-wrap gap-2 mb-6" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Titre"
                    class="input input-bordered input-sm flex-1"
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    prop:value=title
                    required
                />
                <input
                    type="text"
                    placeholder="URL de l'image"
                    class="input input-bordered input-sm flex-1"
                    on:input=move |ev| set_image_url.set(event_target_value(&ev))
                    prop:value=image_url
                    required
                />
                <input
                    type="text"
                    placeholder="Description"
                    class="input input-bordered input-sm flex-1"
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    prop:value=description
                />
                <button class="btn btn-primary btn-sm">"Ajouter"</button>
            </form>

            <div class="grid md:grid-cols-3 gap-4">
                {move || items()
                    .into_iter()
                    .map(|item| {
                        let id = item.id;
                        view! {
                            <div class="card bg-base-100 shadow">
                                <figure>
                                    <img src=item.base.image_url alt=item.base.title.clone() />
                                </figure>
                                <div class="card-body py-3">
                                    <h2 class="card-title text-base">{item.base.title}</h2>
                                    <button
                                        class="btn btn-error btn-xs self-end"
                                        on:click=move |_| on_delete(id)
                                    >
                                        "Supprimer"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
