//! Manage view
//!
//! Grants search attempts to a user by Telegram ID. The outcome is shown in
//! [`NoticeDialog`]; on success the inputs are cleared and the dashboard
//! reloads.

use leptos::*;

use super::icons::{ErrorIcon, SuccessIcon};
use super::primitives::Modal;
use crate::state::{Action, DashboardState, NoticeKind};

#[component]
pub fn ManageView() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let granting = state.select(|s| s.granting);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.grant_attempts();
    };

    view! {
        <div class="view active" role="tabpanel" id="panel-manage" aria-labelledby="tab-manage">
            <div class="table-card" role="region" aria-label="Give attempts">
                <div class="table-header">
                    <div class="table-title">"Give Attempts"</div>
                </div>
                <div class="card-body">
                    <form class="manage-form" on:submit=on_submit>
                        <label class="form-field">
                            <span class="form-label">"User ID (Telegram)"</span>
                            <input
                                type="text"
                                inputmode="numeric"
                                class="form-input mono"
                                placeholder="123456789"
                                prop:value=move || state.view.with(|s| s.grant_user_id.clone())
                                on:input=move |ev| {
                                    state.dispatch(Action::SetGrantUserId(event_target_value(&ev)));
                                }
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-label">"Attempts"</span>
                            <input
                                type="text"
                                inputmode="numeric"
                                class="form-input mono"
                                placeholder="5"
                                prop:value=move || state.view.with(|s| s.grant_attempts.clone())
                                on:input=move |ev| {
                                    state.dispatch(Action::SetGrantAttempts(event_target_value(&ev)));
                                }
                            />
                        </label>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || granting.get()
                        >
                            {move || if granting.get() { "Giving..." } else { "Give Attempts" }}
                        </button>
                    </form>
                    <p class="info-text">
                        "The user is notified in Telegram by the bot."
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Modal for the current notice, if any
#[component]
pub fn NoticeDialog() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let notice = state.select(|s| s.notice.clone());
    let dismiss = Callback::new(move |_| state.dispatch(Action::DismissNotice));

    move || {
        notice.get().map(|notice| {
            let (title, tone, icon) = match notice.kind {
                NoticeKind::Success => ("Done", "modal-success", view! { <SuccessIcon/> }.into_view()),
                NoticeKind::Error => ("Something went wrong", "modal-error", view! { <ErrorIcon/> }.into_view()),
            };
            view! {
                <Modal title=title on_close=dismiss tone=tone>
                    <div class="modal-icon">{icon}</div>
                    <p class="modal-message">{notice.message}</p>
                </Modal>
            }
        })
    }
}
