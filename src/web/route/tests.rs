use super::*;

// =========================================================
// path 解析
// =========================================================

#[test]
fn test_from_path_known_routes() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
    assert_eq!(AppRoute::from_path("/booking"), AppRoute::Booking);
    assert_eq!(AppRoute::from_path("/partenaires"), AppRoute::Partners);
    assert_eq!(AppRoute::from_path("/galerie"), AppRoute::Gallery);
    assert_eq!(AppRoute::from_path("/auth/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/admin/galerie"), AppRoute::AdminGallery);
    assert_eq!(AppRoute::from_path("/member"), AppRoute::MemberDashboard);
    assert_eq!(AppRoute::from_path("/account"), AppRoute::Account);
}

#[test]
fn test_from_path_ignores_query_and_trailing_slash() {
    assert_eq!(
        AppRoute::from_path("/auth/login?redirect=/admin"),
        AppRoute::Login
    );
    assert_eq!(AppRoute::from_path("/services/"), AppRoute::Services);
    assert_eq!(AppRoute::from_path("/galerie#haut"), AppRoute::Gallery);
}

#[test]
fn test_from_path_unknown_is_not_found() {
    assert_eq!(AppRoute::from_path("/nimporte/quoi"), AppRoute::NotFound);
}

#[test]
fn test_to_path_round_trip() {
    for route in [
        AppRoute::Home,
        AppRoute::Booking,
        AppRoute::Partners,
        AppRoute::Login,
        AppRoute::AdminMembers,
        AppRoute::MemberDashboard,
        AppRoute::Account,
    ] {
        assert_eq!(AppRoute::from_path(route.to_path()), route);
    }
}

// =========================================================
// 路由元数据
// =========================================================

#[test]
fn test_auth_requirements() {
    assert!(!AppRoute::Home.requires_auth());
    assert!(!AppRoute::Gallery.requires_auth());
    assert!(AppRoute::AdminDashboard.requires_auth());
    assert!(AppRoute::MemberDashboard.requires_auth());
    assert!(AppRoute::Account.requires_auth());
}

#[test]
fn test_required_roles() {
    assert_eq!(AppRoute::AdminBookings.required_role(), Some(Role::Admin));
    assert_eq!(
        AppRoute::MemberDashboard.required_role(),
        Some(Role::Member)
    );
    assert_eq!(AppRoute::Account.required_role(), Some(Role::Public));
    assert_eq!(AppRoute::Booking.required_role(), None);
}

#[test]
fn test_guest_only_routes() {
    assert!(AppRoute::Login.is_guest_only());
    assert!(AppRoute::Register.is_guest_only());
    assert!(!AppRoute::Home.is_guest_only());
}

#[test]
fn test_document_title() {
    assert_eq!(
        AppRoute::Booking.document_title(),
        "Réserver | RONKA Event Multi Service"
    );
    assert_eq!(
        AppRoute::NotFound.document_title(),
        "RONKA Event Multi Service"
    );
}
