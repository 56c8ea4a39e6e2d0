//! Transient notification stack.
//!
//! Notices live in app state and are dropped again after a fixed delay; the
//! component itself only renders what it is given.

use yew::prelude::*;

/// How long a notice stays on screen before it is dropped.
pub const NOTICE_DISMISS_MS: i32 = 3000;

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// One notification on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub level: NoticeLevel,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub notices: Vec<Notice>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    html! {
        <div class="notifications" role="status" aria-live="polite">
            { for props.notices.iter().map(|notice| html! {
                <div key={notice.id.to_string()} class={classes!("notification", notice.level.css_class())}>
                    { notice.message.clone() }
                </div>
            }) }
        </div>
    }
}
