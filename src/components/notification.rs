//! Transient toast notifications: fire-and-forget, auto-dismissed.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "!",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast-success",
            NotificationKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NotificationKind,
    pub message: &'static str,
}

impl Notice {
    pub fn success(message: &'static str) -> Self {
        Self {
            kind: NotificationKind::Success,
            message,
        }
    }

    pub fn error(message: &'static str) -> Self {
        Self {
            kind: NotificationKind::Error,
            message,
        }
    }
}

/// Publish a notice and schedule its dismissal. The timer is deliberately
/// forgotten: notices outlive any single render and never block anything.
pub fn show(handle: &UseStateHandle<Option<Notice>>, notice: Notice) {
    handle.set(Some(notice));
    let handle = handle.clone();
    Timeout::new(DISMISS_MS, move || handle.set(None)).forget();
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub notice: Option<Notice>,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let notice = match props.notice {
        Some(notice) => notice,
        None => return html! {},
    };

    html! {
        <div class={notice.kind.class()}>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        top: 24px;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        align-items: center;
                        gap: 10px;
                        padding: 12px 20px;
                        background: white;
                        border: 1px solid #e5e7eb;
                        border-radius: 12px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                        font-size: 0.9rem;
                        color: #1f2937;
                        z-index: 1000;
                        animation: toast-in 0.3s ease-out;
                    }
                    @keyframes toast-in {
                        from { transform: translate(-50%, -16px); opacity: 0; }
                        to { transform: translate(-50%, 0); opacity: 1; }
                    }
                    .toast-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 22px;
                        height: 22px;
                        border-radius: 50%;
                        color: white;
                        font-size: 0.8rem;
                        font-weight: 700;
                        flex-shrink: 0;
                    }
                    .toast-success .toast-icon { background: #22c55e; }
                    .toast-error .toast-icon { background: #ef4444; }
                "#}
            </style>
            <span class="toast-icon">{notice.kind.icon()}</span>
            <span>{notice.message}</span>
        </div>
    }
}
