//! 顶部导航栏
//!
//! 会话感知：访客看到登录入口，已登录用户看到自己的空间入口与登出。
//! 主题切换按钮直接驱动 [`crate::theme::ThemeContext`]。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Role;
use crate::session::{logout_via_api, use_session};
use crate::theme::use_theme;
use crate::web::router::Link;

#[component]
pub fn Navbar() -> impl IntoView {
    let session_ctx = use_session();
    let theme = use_theme();

    let dashboard_path = move || {
        session_ctx.session.get().map(|s| match s.role {
            Role::Admin => "/admin",
            Role::Member => "/member",
            _ => "/account",
        })
    };

    let on_logout = move |_| {
        spawn_local(async move {
            logout_via_api(&session_ctx).await;
        });
    };

    view! {
        <div class="navbar bg-base-100 shadow-md sticky top-0 z-10">
            <div class="navbar-start">
                <Link to="/" class="btn btn-ghost text-xl text-primary">"RONKA"</Link>
            </div>
            <div class="navbar-center hidden lg:flex">
                <ul class="menu menu-horizontal px-1">
                    <li><Link to="/services">"Services"</Link></li>
                    <li><Link to="/booking">"Réserver"</Link></li>
                    <li><Link to="/donate">"Faire un don"</Link></li>
                    <li><Link to="/partenaires">"Partenaires"</Link></li>
                    <li><Link to="/feedback">"Feedback"</Link></li>
                    <li><Link to="/galerie">"Galerie"</Link></li>
                </ul>
            </div>
            <div class="navbar-end gap-2">
                <button
                    class="btn btn-ghost btn-circle"
                    title="Changer de thème"
                    on:click=move |_| theme.toggle()
                >
                    {move || if theme.is_light.get() { "🌙" } else { "☀️" }}
                </button>
                <Show
                    when=move || session_ctx.is_authenticated()
                    fallback=|| view! {
                        <Link to="/auth/login" class="btn btn-primary btn-sm">"Connexion"</Link>
                    }
                >
                    {move || dashboard_path().map(|path| view! {
                        <Link to=path class="btn btn-ghost btn-sm">"Mon espace"</Link>
                    })}
                    <button class="btn btn-outline btn-sm" on:click=on_logout>
                        "Déconnexion"
                    </button>
                </Show>
            </div>
        </div>
    }
}
