//! 预订页面
//!
//! 配置了远程 API 时提交到 `/bookings`，否则写入本地演示数据。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::notice::Notice;
use crate::data::use_data;
use crate::models::BookingRequest;

#[component]
pub fn BookingPage() -> impl IntoView {
    let data = use_data();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (event_type, set_event_type) = signal("mariage".to_string());
    let (event_date, set_event_date) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = BookingRequest {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            event_type: event_type.get(),
            event_date: event_date.get(),
            message: message.get(),
        };
        if req.name.is_empty() || req.email.is_empty() || req.event_date.is_empty() {
            set_notice.set(Some(("Veuillez remplir les champs requis.".to_string(), true)));
            return;
        }

        if api::is_configured() {
            set_is_submitting.set(true);
            set_notice.set(None);
            spawn_local(async move {
                match api::bookings::create(&req).await {
                    Ok(_) => set_notice.set(Some((
                        "Votre réservation a bien été envoyée !".to_string(),
                        false,
                    ))),
                    Err(e) => set_notice.set(Some((e.to_string(), true))),
                }
                set_is_submitting.set(false);
            });
        } else {
            data.update(|d| d.add_booking(req));
            set_notice.set(Some((
                "Réservation enregistrée (mode démonstration).".to_string(),
                false,
            )));
        }
    };

    view! {
        <div class="py-12 px-4 max-w-lg mx-auto">
            <h1 class="text-3xl font-bold text-center mb-8">"Réserver un événement"</h1>
            <div class="card bg-base-100 shadow-xl">
                <form class="card-body gap-3" on:submit=on_submit>
                    <Notice notice=notice />
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
                        type="tel"
                        placeholder="Téléphone"
                        class="input input-bordered"
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                        prop:value=phone
                    />
                    <select
                        class="select select-bordered"
                        on:change=move |ev| set_event_type.set(event_target_value(&ev))
                        prop:value=event_type
                    >
                        <option value="mariage">"Mariage"</option>
                        <option value="anniversaire">"Anniversaire"</option>
                        <option value="conference">"Conférence"</option>
                        <option value="autre">"Autre"</option>
                    </select>
                    <input
                        type="date"
                        class="input input-bordered"
                        on:input=move |ev| set_event_date.set(event_target_value(&ev))
                        prop:value=event_date
                        required
                    />
                    <textarea
                        class="textarea textarea-bordered"
                        placeholder="Précisions sur votre événement"
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                        prop:value=message
                    ></textarea>
                    <button class="btn btn-primary mt-2" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() { "Envoi..." } else { "Envoyer la demande" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
