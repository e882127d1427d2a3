use super::*;
use crate::models::{Role, Session};

fn session_with_role(role: Role) -> Session {
    Session {
        id: 7,
        name: "Awa Kone".to_string(),
        email: "awa@ronka.com".to_string(),
        username: "awa@ronka.com".to_string(),
        role,
        token: Some("jeton".to_string()),
    }
}

// =========================================================
// 守卫裁决：认证
// =========================================================

#[test]
fn test_protected_route_anonymous_redirects_to_login_with_redirect_query() {
    let decision = check_route(&AppRoute::AdminDashboard, "/admin", None);
    assert_eq!(
        decision,
        NavDecision::Redirect("/auth/login?redirect=/admin".to_string())
    );
}

#[test]
fn test_redirect_query_preserves_full_target_path() {
    let decision = check_route(&AppRoute::AdminMembers, "/admin/members", None);
    assert_eq!(
        decision,
        NavDecision::Redirect("/auth/login?redirect=/admin/members".to_string())
    );
}

// =========================================================
// 守卫裁决：角色
// =========================================================

#[test]
fn test_admin_route_with_member_session_goes_to_member_home() {
    let session = session_with_role(Role::Member);
    let decision = check_route(&AppRoute::AdminDashboard, "/admin", Some(&session));
    assert_eq!(decision, NavDecision::Redirect("/member".to_string()));
}

#[test]
fn test_member_route_with_public_session_goes_to_account() {
    let session = session_with_role(Role::Public);
    let decision = check_route(&AppRoute::MemberDashboard, "/member", Some(&session));
    assert_eq!(decision, NavDecision::Redirect("/account".to_string()));
}

#[test]
fn test_unrecognized_role_goes_to_public_home() {
    let session = session_with_role(Role::Unknown);
    let decision = check_route(&AppRoute::AdminDashboard, "/admin", Some(&session));
    assert_eq!(decision, NavDecision::Redirect("/".to_string()));
}

#[test]
fn test_matching_role_is_allowed() {
    let session = session_with_role(Role::Admin);
    let decision = check_route(&AppRoute::AdminEvents, "/admin/events", Some(&session));
    assert_eq!(decision, NavDecision::Allow);
}

// =========================================================
// 守卫裁决：仅访客页面
// =========================================================

#[test]
fn test_guest_only_with_admin_session_goes_to_admin_home() {
    let session = session_with_role(Role::Admin);
    let decision = check_route(&AppRoute::Login, "/auth/login", Some(&session));
    assert_eq!(decision, NavDecision::Redirect("/admin".to_string()));
}

#[test]
fn test_guest_only_with_public_session_goes_to_account() {
    let session = session_with_role(Role::Public);
    let decision = check_route(&AppRoute::Register, "/auth/register", Some(&session));
    assert_eq!(decision, NavDecision::Redirect("/account".to_string()));
}

#[test]
fn test_guest_only_anonymous_is_allowed() {
    let decision = check_route(&AppRoute::Login, "/auth/login", None);
    assert_eq!(decision, NavDecision::Allow);
}

// =========================================================
// 放行
// =========================================================

#[test]
fn test_public_pages_always_allowed() {
    let session = session_with_role(Role::Member);
    assert_eq!(check_route(&AppRoute::Home, "/", None), NavDecision::Allow);
    assert_eq!(
        check_route(&AppRoute::Booking, "/booking", Some(&session)),
        NavDecision::Allow
    );
    assert_eq!(
        check_route(&AppRoute::Gallery, "/galerie", None),
        NavDecision::Allow
    );
}
