use super::*;
use serde_json::json;

// =========================================================
// 配置错误
// =========================================================

#[test]
fn test_unconfigured_base_fails_before_any_network_machinery() {
    if api_base().is_some() {
        // 构建时注入了 RONKA_API_URL，本用例不适用
        return;
    }
    assert!(!is_configured());
    let err = ensure_configured().unwrap_err();
    assert_eq!(err, ApiError::NotConfigured);
    assert_eq!(err.to_string(), "API non configurée");
}

// =========================================================
// 错误文案推导
// =========================================================

#[test]
fn test_server_message_field_wins() {
    let data = json!({ "message": "Ce créneau est déjà réservé." });
    assert_eq!(
        parse_error_message(&data, 422),
        "Ce créneau est déjà réservé."
    );
}

#[test]
fn test_first_entry_of_errors_map() {
    // preserve_order 保证 email 是第一条
    let data = json!({
        "errors": {
            "email": ["L'adresse e-mail est invalide."],
            "name": ["Le nom est requis."]
        }
    });
    assert_eq!(
        parse_error_message(&data, 422),
        "L'adresse e-mail est invalide."
    );
}

#[test]
fn test_errors_entry_may_be_plain_string() {
    let data = json!({ "errors": { "amount": "Montant invalide." } });
    assert_eq!(parse_error_message(&data, 422), "Montant invalide.");
}

#[test]
fn test_status_fallbacks() {
    let empty = json!({});
    assert_eq!(
        parse_error_message(&empty, 401),
        "Session expirée. Veuillez vous reconnecter."
    );
    assert_eq!(parse_error_message(&empty, 403), "Accès refusé.");
    assert_eq!(parse_error_message(&empty, 404), "Ressource introuvable.");
    assert_eq!(
        parse_error_message(&empty, 500),
        "Erreur serveur. Réessayez plus tard."
    );
    assert_eq!(
        parse_error_message(&empty, 503),
        "Erreur serveur. Réessayez plus tard."
    );
    assert_eq!(parse_error_message(&empty, 418), "Erreur 418");
}

#[test]
fn test_message_beats_status_fallback() {
    let data = json!({ "message": "Introuvable, désolé." });
    assert_eq!(parse_error_message(&data, 404), "Introuvable, désolé.");
}

// =========================================================
// 错误值展示
// =========================================================

#[test]
fn test_network_error_has_fixed_guidance() {
    assert_eq!(
        ApiError::Network.to_string(),
        "Impossible de joindre le backend. Vérifiez que le serveur API tourne (php artisan serve)."
    );
}

#[test]
fn test_server_error_displays_derived_message() {
    let err = ApiError::Server {
        status: 404,
        message: parse_error_message(&json!({}), 404),
    };
    assert_eq!(err.to_string(), "Ressource introuvable.");
}
