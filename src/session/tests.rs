use super::*;
use serde_json::json;

// =========================================================
// 持久化数据解析
// =========================================================

#[test]
fn test_parse_session_round_trip() {
    let session = Session {
        id: 3,
        name: "Membre Test".to_string(),
        email: "membre@ronka.com".to_string(),
        username: "membre@ronka.com".to_string(),
        role: Role::Member,
        token: None,
    };
    let raw = serde_json::to_string(&session).unwrap();
    assert_eq!(parse_session(&raw), Some(session));
}

#[test]
fn test_parse_session_corrupt_blob_is_none() {
    assert_eq!(parse_session("{pas du json"), None);
    assert_eq!(parse_session(""), None);
    assert_eq!(parse_session("42"), None);
}

#[test]
fn test_parse_session_unknown_role_is_tolerated() {
    let raw = r#"{"id":1,"name":"X","email":"x@ronka.com","username":"x","role":"superviseur"}"#;
    let session = parse_session(raw).unwrap();
    assert_eq!(session.role, Role::Unknown);
    assert_eq!(session.token, None);
}

// =========================================================
// 登录响应映射
// =========================================================

#[test]
fn test_map_login_response_nested_user() {
    let data = json!({
        "user": {
            "id": 12,
            "name": "Awa Kone",
            "email": "awa@ronka.com",
            "username": "awa",
            "role": "admin"
        },
        "token": "abc123"
    });
    let session = map_login_response(&data).unwrap();
    assert_eq!(session.id, 12);
    assert_eq!(session.username, "awa");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.token.as_deref(), Some("abc123"));
}

#[test]
fn test_map_login_response_username_falls_back_to_email() {
    let data = json!({
        "user": { "id": 5, "name": "Sans Pseudo", "email": "sp@ronka.com", "role": "member" },
        "token": "t"
    });
    let session = map_login_response(&data).unwrap();
    assert_eq!(session.username, "sp@ronka.com");
}

#[test]
fn test_map_login_response_missing_role_defaults_to_public() {
    let data = json!({
        "user": { "id": 5, "name": "N", "email": "n@ronka.com" }
    });
    let session = map_login_response(&data).unwrap();
    assert_eq!(session.role, Role::Public);
    assert_eq!(session.token, None);
}

#[test]
fn test_map_login_response_incomplete_identity_is_none() {
    assert!(map_login_response(&json!({ "token": "t" })).is_none());
    assert!(map_login_response(&json!({ "user": { "name": "sans id" } })).is_none());
}

// =========================================================
// 存储恢复
// =========================================================

#[test]
fn test_init_from_storage_restores_session() {
    let ctx = SessionContext::new();
    ctx.login(Session {
        id: 9,
        name: "Persistée".to_string(),
        email: "p@ronka.com".to_string(),
        username: "p".to_string(),
        role: Role::Public,
        token: Some("t".to_string()),
    });

    // 模拟进程重启：新上下文从存储恢复
    let restored = SessionContext::new();
    restored.init_from_storage();
    assert!(restored.is_public_user());
    LocalStorage::delete(STORAGE_SESSION_KEY);
}

#[test]
fn test_init_from_storage_corrupt_blob_resets_to_anonymous() {
    LocalStorage::set(STORAGE_SESSION_KEY, "{corrompu");
    let ctx = SessionContext::new();
    ctx.init_from_storage();
    assert!(!ctx.is_authenticated());
    // 脏数据被清理，不会传播解析错误
    assert_eq!(LocalStorage::get(STORAGE_SESSION_KEY), None);
}

// =========================================================
// 角色谓词
// =========================================================

#[test]
fn test_predicates_follow_session_role() {
    let ctx = SessionContext::new();
    assert!(!ctx.is_authenticated());
    assert!(!ctx.is_admin());

    ctx.login(Session {
        id: 1,
        name: "Admin".to_string(),
        email: "admin@ronka.com".to_string(),
        username: "admin".to_string(),
        role: Role::Admin,
        token: Some("t".to_string()),
    });
    assert!(ctx.is_authenticated());
    assert!(ctx.is_admin());
    assert!(!ctx.is_member());
    assert!(!ctx.is_public_user());

    ctx.logout();
    assert!(!ctx.is_authenticated());
}
