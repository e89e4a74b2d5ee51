use yew::prelude::*;
use gloo_timers::callback::Timeout;

/// How long a toast stays up before dismissing itself.
pub const TOAST_MS: u32 = 6000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |toast: &Option<Toast>| {
                let timeout = toast
                    .as_ref()
                    .map(|_| Timeout::new(TOAST_MS, move || on_dismiss.emit(())));
                move || drop(timeout) // Cancels a pending dismiss
            },
            props.toast.clone(),
        );
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    let kind_class = match toast.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status">
            <style>
                {r#"
                    @keyframes slideIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        position: fixed;
                        right: 2rem;
                        bottom: 2rem;
                        max-width: 360px;
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        background: rgba(26, 26, 26, 0.95);
                        backdrop-filter: blur(10px);
                        border-radius: 12px;
                        padding: 1rem 1.2rem;
                        box-shadow: 0 16px 32px rgba(0,0,0,0.3);
                        animation: slideIn 0.4s ease-out forwards;
                        z-index: 1100;
                        color: #fff;
                    }
                    .toast-success { border: 1px solid rgba(46, 204, 113, 0.5); }
                    .toast-error { border: 1px solid rgba(231, 76, 60, 0.5); }
                    .toast button {
                        background: none;
                        border: none;
                        color: #999;
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    @media (max-width: 600px) {
                        .toast { left: 1rem; right: 1rem; bottom: 1rem; }
                    }
                "#}
            </style>
            <span class="toast-message">{toast.message.clone()}</span>
            <button {onclick} aria-label="Dismiss">{"✕"}</button>
        </div>
    }
}
