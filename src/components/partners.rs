//! 合作伙伴页面：已批准伙伴的公开列表 + 申请表单

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::notice::Notice;
use crate::data::use_data;
use crate::models::{Partner, PartnerRequest, PartnerStatus};

#[component]
pub fn PartnersPage() -> impl IntoView {
    let data = use_data();

    let (remote_partners, set_remote_partners) = signal(Vec::<Partner>::new());
    if api::is_configured() {
        Effect::new(move |_| {
            spawn_local(async move {
                if let Ok(list) = api::partners::list().await {
                    set_remote_partners.set(list);
                }
            });
        });
    }

    let approved = move || {
        let all = if api::is_configured() {
            remote_partners.get()
        } else {
            data.with(|d| d.partners.clone())
        };
        all.into_iter()
            .filter(|p| p.status == PartnerStatus::Approved)
            .collect::<Vec<_>>()
    };

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = PartnerRequest {
            name: name.get(),
            email: email.get(),
            company: company.get(),
            message: message.get(),
        };

        if api::is_configured() {
            spawn_local(async move {
                match api::partners::create(&req).await {
                    Ok(_) => set_notice.set(Some((
                        "Demande envoyée, nous reviendrons vers vous.".to_string(),
                        false,
                    ))),
                    Err(e) => set_notice.set(Some((e.to_string(), true))),
                }
            });
        } else {
            data.update(|d| d.add_partner(req));
            set_notice.set(Some((
                "Demande enregistrée, en attente d'approbation.".to_string(),
                false,
            )));
        }
    };

    view! {
        <div class="py-12 px-4 max-w-4xl mx-auto">
            <h1 class="text-3xl font-bold text-center mb-8">"Nos Partenaires"</h1>
            <div class="grid md:grid-cols-2 gap-4 mb-12">
                <Show
                    when=move || !approved().is_empty()
                    fallback=|| view! {
                        <p class="text-base-content/60 col-span-2 text-center">
                            "Aucun partenaire approuvé pour le moment."
                        </p>
                    }
                >
                    {move || approved()
                        .into_iter()
                        .map(|p| view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <h2 class="card-title">{p.base.company}</h2>
                                    <p class="text-base-content/70">{p.base.name}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </Show>
            </div>

            <h2 class="text-2xl font-bold text-center mb-4">"Devenir partenaire"</h2>
            <div class="card bg-base-100 shadow-xl max-w-lg mx-auto">
                <form class="card-body gap-3" on:submit=on_submit>
                    <Notice notice=notice />
                    <input
                        type="text"
                        placeholder="Nom du contact"
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
                        type="text"
                        placeholder="Entreprise / Organisation"
                        class="input input-bordered"
                        on:input=move |ev| set_company.set(event_target_value(&ev))
                        prop:value=company
                        required
                    />
                    <textarea
                        class="textarea textarea-bordered"
                        placeholder="Votre proposition"
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                        prop:value=message
                    ></textarea>
                    <button class="btn btn-primary mt-2">"Envoyer la demande"</button>
                </form>
            </div>
        </div>
    }
}
