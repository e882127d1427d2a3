//! 公开画廊：远程列表（无需认证）或本地种子数据

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::data::use_data;
use crate::models::GalleryItem;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let data = use_data();

    let (remote_items, set_remote_items) = signal(Vec::<GalleryItem>::new());
    let (load_error, set_load_error) = signal(Option::<String>::None);
    if api::is_configured() {
        Effect::new(move |_| {
            spawn_local(async move {
                match api::gallery::list().await {
                    Ok(list) => set_remote_items.set(list),
                    Err(e) => set_load_error.set(Some(e.to_string())),
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

    view! {
        <div class="py-12 px-4 max-w-5xl mx-auto">
            <h1 class="text-3xl font-bold text-center mb-8">"Galerie"</h1>
            {move || load_error.get().map(|message| view! {
                <div role="alert" class="alert alert-error mb-4"><span>{message}</span></div>
            })}
            <div class="grid md:grid-cols-3 gap-6">
                {move || items()
                    .into_iter()
                    .map(|item| view! {
                        <div class="card bg-base-100 shadow">
                            <figure>
                                <img src=item.base.image_url alt=item.base.title.clone() />
                            </figure>
                            <div class="card-body">
                                <h2 class="card-title text-base">{item.base.title}</h2>
                                <p class="text-sm text-base-content/70">{item.base.description}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
