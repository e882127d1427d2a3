use leptos::prelude::*;

/// 表单反馈条：`(文案, 是否错误)`
#[component]
pub fn Notice(notice: ReadSignal<Option<(String, bool)>>) -> impl IntoView {
    move || {
        notice.get().map(|(message, is_error)| {
            let class = if is_error {
                "alert alert-error text-sm py-2"
            } else {
                "alert alert-success text-sm py-2"
            };
            view! {
                <div role="alert" class=class>
                    <span>{message}</span>
                </div>
            }
        })
    }
}
