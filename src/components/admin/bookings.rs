//! 预订一览（只读）

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::data::use_data;
use crate::models::Booking;

#[component]
pub fn AdminBookings() -> impl IntoView {
    let data = use_data();

    let (remote_bookings, set_remote_bookings) = signal(Vec::<Booking>::new());
    let (load_error, set_load_error) = signal(Option::<String>::None);
    if api::is_configured() {
        Effect::new(move |_| {
            spawn_local(async move {
                match api::bookings::list().await {
                    Ok(list) => set_remote_bookings.set(list),
                    Err(e) => set_load_error.set(Some(e.to_string())),
                }
            });
        });
    }

    let bookings = move || {
        if api::is_configured() {
            remote_bookings.get()
        } else {
            data.with(|d| d.bookings.clone())
        }
    };

    view! {
        <div class="py-8 px-4 max-w-4xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">"Réservations"</h1>
            {move || load_error.get().map(|message| view! {
                <div role="alert" class="alert alert-error text-sm py-2 mb-3"><span>{message}</span></div>
            })}
            <Show
                when=move || !bookings().is_empty()
                fallback=|| view! { <p class="text-base-content/60">"Aucune réservation."</p> }
            >
                <table class="table bg-base-100 shadow">
                    <thead>
                        <tr>
                            <th>"Nom"</th>
                            <th>"Type"</th>
                            <th>"Date"</th>
                            <th>"Contact"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || bookings()
                            .into_iter()
                            .map(|b| view! {
                                <tr>
                                    <td>{b.base.name}</td>
                                    <td>{b.base.event_type}</td>
                                    <td>{b.base.event_date}</td>
                                    <td class="text-sm">{b.base.email}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
