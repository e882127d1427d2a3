use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::notice::Notice;
use crate::data::use_data;
use crate::models::DonationRequest;

#[component]
pub fn DonatePage() -> impl IntoView {
    let data = use_data();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (payment_method, set_payment_method) = signal("mobile-money".to_string());
    let (payment_details, set_payment_details) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Ok(parsed_amount) = amount.get().replace(',', ".").parse::<f64>() else {
            set_notice.set(Some(("Montant invalide.".to_string(), true)));
            return;
        };
        let req = DonationRequest {
            name: name.get(),
            email: email.get(),
            amount: parsed_amount,
            payment_method: payment_method.get(),
            payment_details: payment_details.get(),
        };

        if api::is_configured() {
            set_is_submitting.set(true);
            set_notice.set(None);
            spawn_local(async move {
                match api::donations::create(&req).await {
                    Ok(_) => set_notice.set(Some((
                        "Merci pour votre don !".to_string(),
                        false,
                    ))),
                    Err(e) => set_notice.set(Some((e.to_string(), true))),
                }
                set_is_submitting.set(false);
            });
        } else {
            data.update(|d| d.add_donation(req));
            set_notice.set(Some(("Don enregistré (mode démonstration).".to_string(), false)));
        }
    };

    view! {
        <div class="py-12 px-4 max-w-lg mx-auto">
            <h1 class="text-3xl font-bold text-center mb-2">"Faire un Don"</h1>
            <p class="text-center text-base-content/70 mb-8">
                "Chaque contribution finance nos actions communautaires."
            </p>
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
                        type="text"
                        placeholder="Montant (FCFA)"
                        class="input input-bordered"
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                        prop:value=amount
                        required
                    />
                    <select
                        class="select select-bordered"
                        on:change=move |ev| set_payment_method.set(event_target_value(&ev))
                        prop:value=payment_method
                    >
                        <option value="mobile-money">"Mobile Money"</option>
                        <option value="carte">"Carte bancaire"</option>
                        <option value="virement">"Virement"</option>
                    </select>
                    <input
                        type="text"
                        placeholder="Référence de paiement"
                        class="input input-bordered"
                        on:input=move |ev| set_payment_details.set(event_target_value(&ev))
                        prop:value=payment_details
                    />
                    <button class="btn btn-primary mt-2" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() { "Envoi..." } else { "Faire le don" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
