use crate::constants::TOAST_DURATION;
use leptos::{component, leptos_dom::helpers::set_timeout_with_handle, view, IntoView, ReadSignal, SignalGet, SignalUpdate, WriteSignal};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
}

impl Toast {
    #[must_use]
    pub fn new(message: String) -> Self {
        Self {
            message,
            kind: ToastKind::Info,
            visible: true,
        }
    }

    #[must_use]
    pub fn error(message: String) -> Self {
        Self {
            message,
            kind: ToastKind::Error,
            visible: true,
        }
    }
}

/// Show `toast` and hide it again after [`TOAST_DURATION`]
pub fn show_toast(set_toast: WriteSignal<Toast>, toast: Toast) {
    let message = toast.message.clone();
    set_toast.update(|t| *t = toast);
    let _ = set_timeout_with_handle(
        move || {
            // A newer toast keeps its own timer
            set_toast.update(|t| {
                if t.message == message {
                    t.visible = false;
                }
            });
        },
        TOAST_DURATION,
    );
}

#[component]
#[must_use]
pub fn ToastNotification(toast: ReadSignal<Toast>) -> impl IntoView {
    view! {
        {move || {
            let t = toast.get();
            if t.visible {
                let class = match t.kind {
                    ToastKind::Info => "toast toast-visible",
                    ToastKind::Error => "toast toast-visible toast-error",
                };
                view! {
                    <div class=class role="status">
                        {t.message}
                    </div>
                }.into_view()
            } else {
                view! { <div class="toast"></div> }.into_view()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toast_is_hidden() {
        let toast = Toast::default();
        assert!(!toast.visible);
        assert_eq!(toast.kind, ToastKind::Info);
    }

    #[test]
    fn test_error_toast() {
        let toast = Toast::error("Train schedule 3 not saved".to_string());
        assert!(toast.visible);
        assert_eq!(toast.kind, ToastKind::Error);
    }
}
