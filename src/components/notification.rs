use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays up before dismissing itself.
const TOAST_DISMISS_MS: u32 = 6_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), severity: Severity::Success }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), severity: Severity::Error }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Toast,
    pub on_dismiss: Callback<()>,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    // Re-arm the dismiss timer whenever a different toast comes in; dropping
    // the handle on cleanup cancels the pending timer.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(TOAST_DISMISS_MS, move || on_dismiss.emit(()));
                move || drop(timeout)
            },
            props.toast.clone(),
        );
    }

    let severity_class = match props.toast.severity {
        Severity::Success => "toast toast-success",
        Severity::Error => "toast toast-error",
    };

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={severity_class}>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 100;
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        max-width: 380px;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        backdrop-filter: blur(10px);
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                        color: #fff;
                    }
                    .toast-success {
                        background: rgba(22, 101, 52, 0.92);
                        border: 1px solid rgba(134, 239, 172, 0.4);
                    }
                    .toast-error {
                        background: rgba(127, 29, 29, 0.92);
                        border: 1px solid rgba(252, 165, 165, 0.4);
                    }
                    .toast-title {
                        display: block;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        margin: 0;
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.85);
                    }
                    .toast-close {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.7);
                        cursor: pointer;
                        font-size: 1rem;
                        line-height: 1;
                        padding: 0;
                    }
                    .toast-close:hover {
                        color: #fff;
                    }
                "#}
            </style>
            <div>
                <strong class="toast-title">{ &props.toast.title }</strong>
                <p class="toast-description">{ &props.toast.description }</p>
            </div>
            <button class="toast-close" onclick={dismiss}>{"✕"}</button>
        </div>
    }
}
