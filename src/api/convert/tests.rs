use super::*;
use serde_json::json;

// =========================================================
// 单键转换
// =========================================================

#[test]
fn test_camel_to_snake_basic() {
    assert_eq!(camel_to_snake("eventType"), "event_type");
    assert_eq!(camel_to_snake("paymentDetails"), "payment_details");
    assert_eq!(camel_to_snake("name"), "name");
}

#[test]
fn test_camel_to_snake_leading_uppercase() {
    // 首字母大写不应产生前导下划线
    assert_eq!(camel_to_snake("Name"), "name");
}

#[test]
fn test_snake_to_camel_basic() {
    assert_eq!(snake_to_camel("event_type"), "eventType");
    assert_eq!(snake_to_camel("created_at"), "createdAt");
    assert_eq!(snake_to_camel("name"), "name");
}

#[test]
fn test_snake_to_camel_keeps_odd_underscores() {
    // 下划线后不是小写字母时原样保留
    assert_eq!(snake_to_camel("trailing_"), "trailing_");
    assert_eq!(snake_to_camel("a__b"), "a_B");
}

// =========================================================
// 值转换
// =========================================================

#[test]
fn test_to_snake_is_one_level_deep() {
    let out = to_snake(json!({
        "eventType": "mariage",
        "contactInfo": { "phoneNumber": "97000000" }
    }));
    // 第一层键被转换，嵌套对象的键保持调用方给定的形态
    assert_eq!(
        out,
        json!({
            "event_type": "mariage",
            "contact_info": { "phoneNumber": "97000000" }
        })
    );
}

#[test]
fn test_to_snake_passes_non_objects_through() {
    assert_eq!(to_snake(json!([1, 2])), json!([1, 2]));
    assert_eq!(to_snake(json!("texte")), json!("texte"));
    assert_eq!(to_snake(Value::Null), Value::Null);
}

#[test]
fn test_from_snake_is_recursive() {
    let out = from_snake(json!({
        "created_at": "2026-01-01",
        "event_list": [ { "event_date": "2026-02-01" } ],
        "user_info": { "user_name": "Awa" }
    }));
    assert_eq!(
        out,
        json!({
            "createdAt": "2026-01-01",
            "eventList": [ { "eventDate": "2026-02-01" } ],
            "userInfo": { "userName": "Awa" }
        })
    );
}

#[test]
fn test_round_trip_restores_key_names() {
    let original = json!({
        "name": "Ronka",
        "eventType": "anniversaire",
        "paymentMethod": "momo"
    });
    let round_tripped = from_snake(to_snake(original.clone()));
    assert_eq!(round_tripped, original);
}
