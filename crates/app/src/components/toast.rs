use dioxus::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastTone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: Uuid,
    message: String,
    tone: ToastTone,
}

/// Transient notification queue, provided once at the root.
#[derive(Clone, Copy)]
pub struct ToastState {
    toasts: Signal<Vec<Toast>>,
}

impl ToastState {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastTone::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastTone::Error, message.into());
    }

    fn push(&mut self, tone: ToastTone, message: String) {
        self.toasts.write().push(Toast {
            id: Uuid::new_v4(),
            message,
            tone,
        });
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

/// Hook to reach the toast queue from any page.
pub fn use_toast() -> ToastState {
    use_context::<ToastState>()
}

/// Provides the queue and renders the stack. Toasts dismiss on click.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let state = use_context_provider(|| ToastState {
        toasts: Signal::new(Vec::new()),
    });

    rsx! {
        {children}
        div { class: "toast-stack",
            for toast in (state.toasts)() {
                div {
                    key: "{toast.id}",
                    class: match toast.tone {
                        ToastTone::Success => "toast toast-success",
                        ToastTone::Error => "toast toast-error",
                    },
                    onclick: {
                        let mut state = state;
                        let id = toast.id;
                        move |_| state.dismiss(id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
