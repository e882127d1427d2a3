use leptos::prelude::*;

use crate::web::router::Link;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="hero min-h-[60vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-xl">
                    <h1 class="text-5xl font-bold">"RONKA Event Multi Service"</h1>
                    <p class="py-6 text-base-content/80">
                        "Organisation d'événements, sonorisation, décoration et plus encore. "
                        "Une association au service de vos moments inoubliables."
                    </p>
                    <div class="flex justify-center gap-4">
                        <Link to="/booking" class="btn btn-primary">"Réserver un événement"</Link>
                        <Link to="/donate" class="btn btn-outline">"Soutenir l'association"</Link>
                    </div>
                </div>
            </div>
        </div>
        <div class="py-12 px-4 max-w-5xl mx-auto grid md:grid-cols-3 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"Événements"</h2>
                    <p>"Mariages, anniversaires, conférences : nous gérons tout de A à Z."</p>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"Partenaires"</h2>
                    <p>"Un réseau de prestataires approuvés pour chaque besoin."</p>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"Communauté"</h2>
                    <p>"Devenez membre et participez à la vie de l'association."</p>
                </div>
            </div>
        </div>
    }
}
