use leptos::prelude::*;

use crate::web::router::Link;

const SERVICES: &[(&str, &str)] = &[
    ("Mariages", "Décoration, animation, traiteur et coordination du jour J."),
    ("Anniversaires", "Fêtes privées clés en main, pour petits et grands."),
    ("Conférences", "Logistique, accueil et sonorisation professionnelle."),
    ("Sonorisation", "Location et installation de matériel audio."),
    ("Décoration", "Scénographie sur mesure pour vos espaces."),
    ("Galas & concerts", "Production complète d'événements publics."),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="py-12 px-4 max-w-5xl mx-auto">
            <h1 class="text-3xl font-bold text-center mb-8">"Nos Services"</h1>
            <div class="grid md:grid-cols-3 gap-6">
                {SERVICES
                    .iter()
                    .map(|(title, description)| view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{*title}</h2>
                                <p class="text-base-content/80">{*description}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="text-center mt-10">
                <Link to="/booking" class="btn btn-primary">"Demander une réservation"</Link>
            </div>
        </div>
    }
}
