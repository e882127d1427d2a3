//! 注册页面：远程注册后直接登录；演示模式创建 public 角色会话

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, auth_api};
use crate::models::{RegisterRequest, Role, Session};
use crate::session::{login_via_api, use_session};
use crate::web::router::{Link, use_router};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session_ctx = use_session();
    let router = use_router();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if password.get() != confirmation.get() {
            set_error_msg.set(Some("Les mots de passe ne correspondent pas.".to_string()));
            return;
        }
        set_error_msg.set(None);

        if api::is_configured() {
            set_is_submitting.set(true);
            spawn_local(async move {
                let req = RegisterRequest {
                    name: name.get_untracked(),
                    email: email.get_untracked(),
                    password: password.get_untracked(),
                    password_confirmation: confirmation.get_untracked(),
                };
                match auth_api::register(&req).await {
                    Ok(_) => {
                        // 注册成功后直接建立会话
                        if login_via_api(&session_ctx, &req.email, &req.password)
                            .await
                            .is_some()
                        {
                            router.navigate("/account");
                        } else {
                            router.navigate("/auth/login");
                        }
                    }
                    Err(e) => set_error_msg.set(Some(e.to_string())),
                }
                set_is_submitting.set(false);
            });
        } else {
            let session = Session {
                id: Utc::now().timestamp_millis(),
                name: name.get(),
                email: email.get(),
                username: email.get(),
                role: Role::Public,
                token: None,
            };
            session_ctx.login(session);
            router.navigate("/account");
        }
    };

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Inscription"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body gap-3" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <input
                            type="text"
                            placeholder="Nom complet"
                            class="input input-bordered"
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=name
                            required
                        />
                        <input
                            type="email"
                            placeholder="Adresse e-mail"
                            class="input input-bordered"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                            required
                        />
                        <input
                            type="password"
                            placeholder="Mot de passe"
                            class="input input-bordered"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            required
                        />
                        <input
                            type="password"
                            placeholder="Confirmer le mot de passe"
                            class="input input-bordered"
                            on:input=move |ev| set_confirmation.set(event_target_value(&ev))
                            prop:value=confirmation
                            required
                        />
                        <button class="btn btn-primary mt-2" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() { "Création..." } else { "Créer mon compte" }}
                        </button>
                        <p class="text-sm text-center mt-2">
                            "Déjà inscrit ? "
                            <Link to="/auth/login" class="link link-primary">"Se connecter"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
