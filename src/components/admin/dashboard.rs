//! 管理员总览：统计卡片 + 待审批的合作伙伴申请

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::data::use_data;
use crate::models::{Booking, Donation, Event, Member, Partner, PartnerStatus};
use crate::web::router::Link;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let data = use_data();

    let (remote_partners, set_remote_partners) = signal(Vec::<Partner>::new());
    let (remote_bookings, set_remote_bookings) = signal(Vec::<Booking>::new());
    let (remote_members, set_remote_members) = signal(Vec::<Member>::new());
    let (remote_events, set_remote_events) = signal(Vec::<Event>::new());
    let (remote_donations, set_remote_donations) = signal(Vec::<Donation>::new());
    let (refresh, set_refresh) = signal(0u32);
    let (notice, set_notice) = signal(Option::<String>::None);

    if api::is_configured() {
        Effect::new(move |_| {
            refresh.get();
            spawn_local(async move {
                if let Ok(list) = api::partners::list().await {
                    set_remote_partners.set(list);
                }
                if let Ok(list) = api::bookings::list().await {
                    set_remote_bookings.set(list);
                }
                if let Ok(list) = api::members::list().await {
                    set_remote_members.set(list);
                }
                if let Ok(list) = api::events::list().await {
                    set_remote_events.set(list);
                }
                if let Ok(list) = api::donations::list().await {
                    set_remote_donations.set(list);
                }
            });
        });
    }

    let counts = move || {
        if api::is_configured() {
            (
                remote_bookings.get().len(),
                remote_members.get().len(),
                remote_events.get().len(),
                remote_donations.get().len(),
            )
        } else {
            data.with(|d| {
                (
                    d.bookings.len(),
                    d.members.len(),
                    d.events.len(),
                    d.donations.len(),
                )
            })
        }
    };

    let pending_partners = move || {
        let all = if api::is_configured() {
            remote_partners.get()
        } else {
            data.with(|d| d.partners.clone())
        };
        all.into_iter()
            .filter(|p| p.status == PartnerStatus::Pending)
            .collect::<Vec<_>>()
    };

    let approve = move |id: i64| {
        if api::is_configured() {
            spawn_local(async move {
                match api::partners::approve(id).await {
                    Ok(_) => set_refresh.update(|n| *n += 1),
                    Err(e) => set_notice.set(Some(e.to_string())),
                }
            });
        } else {
            data.update(|d| d.approve_partner(id));
        }
    };

    view! {
        <div class="py-8 px-4 max-w-5xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">"Tableau de bord Admin"</h1>

            <div class="stats shadow w-full mb-8">
                <div class="stat">
                    <div class="stat-title">"Réservations"</div>
                    <div class="stat-value">{move || counts().0}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Membres"</div>
                    <div class="stat-value">{move || counts().1}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Événements"</div>
                    <div class="stat-value">{move || counts().2}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Dons"</div>
                    <div class="stat-value">{move || counts().3}</div>
                </div>
            </div>

            <div class="flex flex-wrap gap-2 mb-8">
                <Link to="/admin/members" class="btn btn-outline btn-sm">"Membres"</Link>
                <Link to="/admin/events" class="btn btn-outline btn-sm">"Événements"</Link>
                <Link to="/admin/bookings" class="btn btn-outline btn-sm">"Réservations"</Link>
                <Link to="/admin/galerie" class="btn btn-outline btn-sm">"Galerie"</Link>
            </div>

            <h2 class="text-xl font-bold mb-3">"Demandes de partenariat en attente"</h2>
            {move || notice.get().map(|message| view! {
                <div role="alert" class="alert alert-error text-sm py-2 mb-3"><span>{message}</span></div>
            })}
            <Show
                when=move || !pending_partners().is_empty()
                fallback=|| view! { <p class="text-base-content/60">"Aucune demande en attente."</p> }
            >
                <div class="space-y-2">
                    {move || pending_partners()
                        .into_iter()
                        .map(|p| {
                            let id = p.id;
                            view! {
                                <div class="card bg-base-100 shadow-sm">
                                    <div class="card-body py-3 flex-row items-center justify-between">
                                        <div>
                                            <span class="font-semibold">{p.base.company}</span>
                                            <span class="text-sm text-base-content/60 ml-2">{p.base.email}</span>
                                        </div>
                                        <button class="btn btn-success btn-sm" on:click=move |_| approve(id)>
                                            "Approuver"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
