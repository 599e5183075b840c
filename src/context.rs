//! Application Context
//!
//! Toast plumbing provided via the Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays up before auto-dismissing
const TOAST_MS: u32 = 2200;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current toast message, if any - read
    pub toast: ReadSignal<Option<String>>,
    /// Current toast message - write
    set_toast: WriteSignal<Option<String>>,
    /// Sequence number of the latest toast - read
    toast_seq: ReadSignal<u32>,
    /// Sequence number of the latest toast - write
    set_toast_seq: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        toast: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        toast_seq: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            toast: toast.0,
            set_toast: toast.1,
            toast_seq: toast_seq.0,
            set_toast_seq: toast_seq.1,
        }
    }

    /// Show a transient toast.
    ///
    /// At most one toast is visible; a newer toast supersedes the current one
    /// and restarts the dismissal timer. The sequence number decides whether
    /// a given timer still owns the toast when it fires.
    pub fn notify(&self, message: impl Into<String>) {
        let seq = self.toast_seq.get_untracked() + 1;
        self.set_toast_seq.set(seq);
        self.set_toast.set(Some(message.into()));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            if ctx.toast_seq.get_untracked() == seq {
                ctx.set_toast.set(None);
            }
        });
    }
}
