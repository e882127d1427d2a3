//! LocalStorage 封装模块
//!
//! 对 `web_sys::Storage` 的轻量封装：字符串进、字符串出，
//! 序列化格式由调用方决定（会话为 JSON，主题为裸字符串）。
//!
//! 非 wasm 目标（原生单元测试）退化为线程本地的内存表，
//! 行为与浏览器存储一致。

/// 本地存储操作封装
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 读取指定键，键不存在或存储不可用时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 写入键值对，返回是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除指定键，返回是否成功
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LocalStorage {
    fn with_store<R>(f: impl FnOnce(&mut std::collections::HashMap<String, String>) -> R) -> R {
        use std::cell::RefCell;
        use std::collections::HashMap;

        thread_local! {
            static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
        }
        STORE.with(|store| f(&mut store.borrow_mut()))
    }

    pub fn get(key: &str) -> Option<String> {
        Self::with_store(|store| store.get(key).cloned())
    }

    pub fn set(key: &str, value: &str) -> bool {
        Self::with_store(|store| {
            store.insert(key.to_string(), value.to_string());
        });
        true
    }

    pub fn delete(key: &str) -> bool {
        Self::with_store(|store| store.remove(key)).is_some()
    }
}
