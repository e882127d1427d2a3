//! 登录页面
//!
//! 远程模式走 `/login`；演示模式校验内置管理员与本地会员名单。
//! 成功后优先回到 `redirect` 指向的原目标，否则进入角色主页。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::data::{LocalData, use_data};
use crate::models::{Role, Session};
use crate::session::{login_via_api, use_session};
use crate::web::router::{Link, query_param, use_router};

/// 演示模式登录：内置管理员 + 本地会员名单
fn demo_login(data: &LocalData, identifier: &str, password: &str) -> Option<Session> {
    if identifier == "admin@ronka.com" && password == "admin123" {
        return Some(Session {
            id: 0,
            name: "Administrateur".to_string(),
            email: "admin@ronka.com".to_string(),
            username: "admin".to_string(),
            role: Role::Admin,
            token: None,
        });
    }
    data.members
        .iter()
        .find(|m| {
            (m.base.email == identifier || m.base.username == identifier)
                && m.password == password
        })
        .map(|m| Session {
            id: m.id,
            name: m.base.name.clone(),
            email: m.base.email.clone(),
            username: m.base.username.clone(),
            role: Role::Member,
            token: None,
        })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session_ctx = use_session();
    let data = use_data();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let after_login = move |session: &Session| {
        match query_param("redirect") {
            Some(path) if !path.is_empty() => router.navigate(&path),
            _ => router.navigate(match session.role {
                Role::Admin => "/admin",
                Role::Member => "/member",
                _ => "/account",
            }),
        }
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Veuillez remplir tous les champs.".to_string()));
            return;
        }
        set_error_msg.set(None);

        if api::is_configured() {
            set_is_submitting.set(true);
            spawn_local(async move {
                let result =
                    login_via_api(&session_ctx, &email.get_untracked(), &password.get_untracked())
                        .await;
                match result {
                    Some(session) => after_login(&session),
                    // 远程登录失败不区分原因，统一提示
                    None => set_error_msg.set(Some(
                        "Connexion impossible. Vérifiez vos identifiants.".to_string(),
                    )),
                }
                set_is_submitting.set(false);
            });
        } else {
            let session = data.with(|d| demo_login(d, &email.get(), &password.get()));
            match session {
                Some(session) => {
                    session_ctx.login(session.clone());
                    after_login(&session);
                }
                None => set_error_msg.set(Some("Identifiants invalides.".to_string())),
            }
        }
    };

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Connexion"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Adresse e-mail"</span>
                            </label>
                            <input
                                id="email"
                                type="text"
                                placeholder="vous@exemple.com"
                                class="input input-bordered"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Mot de passe"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                class="input input-bordered"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "Connexion..." } else { "Se connecter" }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "Pas encore de compte ? "
                            <Link to="/auth/register" class="link link-primary">"S'inscrire"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
