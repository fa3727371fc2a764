use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: AttrValue,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToastAction {
    Push { kind: ToastKind, message: AttrValue },
    Dismiss(u64),
}

impl ToastAction {
    pub fn success(message: impl Into<AttrValue>) -> Self {
        Self::Push { kind: ToastKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<AttrValue>) -> Self {
        Self::Push { kind: ToastKind::Error, message: message.into() }
    }
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push { kind, message } => {
                let mut next = (*self).clone();
                next.toasts.push(Toast { id: next.next_id, kind, message });
                next.next_id += 1;
                Rc::new(next)
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                let mut next = (*self).clone();
                next.toasts.retain(|t| t.id != id);
                Rc::new(next)
            }
        }
    }
}

pub type ToastContext = UseReducerHandle<ToastQueue>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the toast queue for everything below it and renders the stack.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    html! {
        <ContextProvider<ToastContext> context={queue.clone()}>
            { for props.children.iter() }
            <Toaster />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(Toaster)]
fn toaster() -> Html {
    let queue = use_context::<ToastContext>();
    let Some(queue) = queue else {
        return html! {};
    };

    html! {
        <div class="toaster" aria-live="polite">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 60;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        max-width: 380px;
                    }
                    .toast {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: #fff;
                        color: #001F3F;
                        box-shadow: 0 12px 32px rgba(0, 31, 63, 0.18);
                        border-left: 4px solid #2E7D32;
                        animation: toastIn 0.3s ease-out;
                        font-size: 0.95rem;
                        line-height: 1.4;
                    }
                    .toast.error {
                        border-left-color: #B3261E;
                    }
                    .toast svg {
                        flex-shrink: 0;
                        color: #2E7D32;
                    }
                    .toast.error svg {
                        color: #B3261E;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            { for queue.toasts().iter().map(|toast| html! {
                <ToastView key={toast.id} toast={toast.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    let queue = use_context::<ToastContext>();

    {
        let id = props.toast.id;
        use_effect_with_deps(
            move |_| {
                let timeout = queue.map(|queue| {
                    Timeout::new(config::TOAST_LIFETIME_MS, move || {
                        queue.dispatch(ToastAction::Dismiss(id));
                    })
                });
                // Dropping the handle cancels the dismissal if the toast
                // goes away first.
                move || drop(timeout)
            },
            id,
        );
    }

    let (class, icon) = match props.toast.kind {
        ToastKind::Success => ("toast success", IconKind::CheckCircle),
        ToastKind::Error => ("toast error", IconKind::X),
    };

    html! {
        <div class={class} role="status">
            <Icon kind={icon} size={20} />
            <span>{ props.toast.message.clone() }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn push_assigns_increasing_ids() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::success("one"))
            .reduce(ToastAction::error("two"));
        let ids: Vec<u64> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(queue.toasts()[1].kind, ToastKind::Error);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::success("one"))
            .reduce(ToastAction::success("two"))
            .reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, AttrValue::from("two"));
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let queue = Rc::new(ToastQueue::default()).reduce(ToastAction::success("one"));
        let after = queue.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &after));
    }

    #[tokio::test]
    async fn toaster_without_provider_renders_nothing() {
        let html = yew::ServerRenderer::<Toaster>::new()
            .hydratable(false)
            .render()
            .await;
        assert_eq!(html, "");
    }
}
