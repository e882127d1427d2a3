//! 公共用户账户页：展示当前身份，远程模式下从 /me 刷新资料

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::session::use_session;
use crate::web::console;

#[component]
pub fn AccountPage() -> impl IntoView {
    let session_ctx = use_session();

    let (profile, set_profile) = signal(Option::<serde_json::Value>::None);
    if api::is_configured() {
        Effect::new(move |_| {
            spawn_local(async move {
                match api::auth_api::me().await {
                    Ok(data) => set_profile.set(Some(data)),
                    Err(err) => console::warn(&format!("[Account] Profile refresh failed: {}", err)),
                }
            });
        });
    }

    let field = move |key: &'static str| {
        // 远程资料优先，缺失时回退到本地会话
        profile
            .get()
            .and_then(|p| {
                let user = p.get("user").cloned().unwrap_or(p);
                user.get(key).and_then(|v| v.as_str().map(str::to_string))
            })
            .or_else(|| {
                session_ctx.session.get().map(|s| match key {
                    "name" => s.name,
                    "email" => s.email,
                    _ => s.username,
                })
            })
            .unwrap_or_default()
    };

    view! {
        <div class="py-8 px-4 max-w-md mx-auto">
            <h1 class="text-3xl font-bold mb-6">"Mon compte"</h1>
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-2">
                    <p>
                        <span class="font-semibold">"Nom : "</span>
                        {move || field("name")}
                    </p>
                    <p>
                        <span class="font-semibold">"E-mail : "</span>
                        {move || field("email")}
                    </p>
                    <p>
                        <span class="font-semibold">"Pseudo : "</span>
                        {move || field("username")}
                    </p>
                </div>
            </div>
        </div>
    }
}
