//! 主题模块
//!
//! 单个亮/暗偏好：从 LocalStorage 初始化，每次变化（包括初始化）
//! 同步写回存储并更新文档根元素的 `data-theme` 属性（daisyUI 主题）。

use leptos::prelude::*;

use crate::web::LocalStorage;

pub const STORAGE_THEME_KEY: &str = "ronka_theme";

/// 偏好的存储值：`light` 或 `dark`
pub fn theme_name(is_light: bool) -> &'static str {
    if is_light { "light" } else { "dark" }
}

/// 主题上下文
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub is_light: ReadSignal<bool>,
    set_is_light: WriteSignal<bool>,
}

impl ThemeContext {
    /// 从持久化偏好初始化；缺失或任何其它值都视为暗色
    pub fn new() -> Self {
        let initial = LocalStorage::get(STORAGE_THEME_KEY).as_deref() == Some("light");
        let (is_light, set_is_light) = signal(initial);
        Self {
            is_light,
            set_is_light,
        }
    }

    pub fn toggle(&self) {
        self.set_is_light.update(|v| *v = !*v);
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 注册镜像副作用：偏好 -> 存储 + `data-theme`
pub fn init_theme(ctx: &ThemeContext) {
    let is_light = ctx.is_light;
    Effect::new(move |_| {
        let name = theme_name(is_light.get());
        LocalStorage::set(STORAGE_THEME_KEY, name);
        apply_document_theme(name);
    });
}

#[cfg(target_arch = "wasm32")]
fn apply_document_theme(name: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", name);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_document_theme(_name: &str) {}

/// 从 Context 获取主题上下文
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name_mapping() {
        assert_eq!(theme_name(true), "light");
        assert_eq!(theme_name(false), "dark");
    }

    #[test]
    fn test_missing_preference_defaults_to_dark() {
        LocalStorage::delete(STORAGE_THEME_KEY);
        let ctx = ThemeContext::new();
        assert!(!ctx.is_light.get_untracked());
    }

    #[test]
    fn test_light_preference_is_restored() {
        LocalStorage::set(STORAGE_THEME_KEY, "light");
        let ctx = ThemeContext::new();
        assert!(ctx.is_light.get_untracked());
        LocalStorage::delete(STORAGE_THEME_KEY);
    }

    #[test]
    fn test_toggle_flips_preference() {
        LocalStorage::delete(STORAGE_THEME_KEY);
        let ctx = ThemeContext::new();
        ctx.toggle();
        assert!(ctx.is_light.get_untracked());
        ctx.toggle();
        assert!(!ctx.is_light.get_untracked());
    }
}
