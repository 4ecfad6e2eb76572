use dioxus::core::{current_scope_id, Runtime};
use dioxus::prelude::*;
use std::time::Duration;

/// Notices disappear on their own after this long unless dismissed first.
const TOAST_LIFETIME: Duration = Duration::from_secs(8);

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
}

#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
    /// Scope of the provider. Dismiss timers run here so they outlive the caller.
    owner: ScopeId,
}

impl Toasts {
    pub fn error(&self, title: String, body: Option<String>) -> u64 {
        let mut next_id = self.next_id;
        let id = (next_id)();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.push(Toast { id, title, body }));

        let this = *self;
        Runtime::current().spawn(self.owner, async move {
            gloo_timers::future::sleep(TOAST_LIFETIME).await;
            this.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.retain(|toast| toast.id != id));
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    let ctx = use_context_provider(|| Toasts {
        toasts,
        next_id,
        owner: current_scope_id(),
    });

    rsx! {
        {children}
        ToastViewport { toasts: ctx }
    }
}

#[component]
fn ToastViewport(toasts: Toasts) -> Element {
    let lang = crate::use_lang();
    let items = (toasts.toasts)();
    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items.into_iter() {
                div { key: "{toast.id}", class: "toast toast_error", role: "alert",
                    div { class: "toast_content",
                        div { class: "toast_title", "{toast.title}" }
                        if let Some(body) = &toast.body {
                            div { class: "toast_body", "{body}" }
                        }
                    }
                    button {
                        class: "toast_close",
                        r#type: "button",
                        onclick: move |_| toasts.dismiss(toast.id),
                        {crate::t(lang, "common.dismiss")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static SEEN: RefCell<Option<(Toasts, ScopeId)>> = const { RefCell::new(None) };
    }

    #[component]
    fn Caller() -> Element {
        let toasts = use_toasts();
        let scope = current_scope_id();
        use_hook(|| SEEN.with(|seen| *seen.borrow_mut() = Some((toasts, scope))));
        rsx! {}
    }

    #[component]
    fn Page() -> Element {
        rsx! {
            ToastProvider { Caller {} }
        }
    }

    #[test]
    fn dismiss_timers_belong_to_the_provider() {
        let mut dom = VirtualDom::new(Page);
        dom.rebuild_in_place();

        let (toasts, caller) = SEEN.with(|seen| seen.borrow_mut().take()).expect("caller rendered");
        assert_ne!(toasts.owner, caller);
        assert_ne!(toasts.owner, ScopeId::ROOT);
    }
}
