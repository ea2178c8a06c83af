//! Lead-capture form. One component covers both shipped configurations:
//! the baseline submit-only form embedded on the home page and the strict
//! live-feedback variant on the standalone page.

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::notification::{self, Notice, Notification};
use crate::config;
use crate::state::lead_form::{ClassLevel, FeedbackMode, Field, FormConfig, FormController};

/// Shown between the success panel and the redirect in live mode.
const SUCCESS_PANEL_MS: u32 = 1_000;

#[derive(Properties, PartialEq)]
pub struct LeadCaptureFormProps {
    #[prop_or_else(FormConfig::baseline)]
    pub config: FormConfig,
}

#[function_component(LeadCaptureForm)]
pub fn lead_capture_form(props: &LeadCaptureFormProps) -> Html {
    let config = props.config;
    let controller = use_state(move || FormController::new(config));
    let notice = use_state(|| None::<Notice>);
    let succeeded = use_state(|| false);

    let live = config.feedback == FeedbackMode::Live;

    let on_input = |field: Field| {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*controller).clone();
            next.set_field(field, input.value());
            controller.set(next);
        })
    };

    let on_country_change = {
        let controller = controller.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*controller).clone();
            next.set_country_code(select.value());
            controller.set(next);
        })
    };

    let on_toggle_class = |level: ClassLevel| {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*controller).clone();
            next.toggle_class(level);
            controller.set(next);
        })
    };

    let onsubmit = {
        let controller = controller.clone();
        let notice = notice.clone();
        let succeeded = succeeded.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*controller).clone();
            if !next.validate() {
                controller.set(next);
                notification::show(&notice, Notice::error("Please fix the errors in the form"));
                return;
            }

            // Validation passed, so a class level is set and a destination
            // exists; anything else must never navigate.
            let url = match next.redirect_url() {
                Some(url) => url,
                None => return,
            };

            next.submitting = true;
            controller.set(next);
            notification::show(
                &notice,
                Notice::success("Form submitted successfully! Redirecting..."),
            );
            log!("lead form: submission accepted, redirecting to", url);

            let succeeded = succeeded.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                if live {
                    succeeded.set(true);
                    TimeoutFuture::new(SUCCESS_PANEL_MS).await;
                }
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(url);
                }
            });
        })
    };

    let live_mark = |field: Field| -> Html {
        if !live {
            return html! {};
        }
        match controller.live_status(field) {
            Some(true) => html! { <span class="live-mark ok">{"✓"}</span> },
            Some(false) => html! { <span class="live-mark bad">{"✗"}</span> },
            None => html! {},
        }
    };

    let field_error = |field: Field| -> Html {
        match controller.errors.get(field) {
            Some(message) => html! { <p class="field-message">{"⚠ "}{message}</p> },
            None => html! {},
        }
    };

    let input_class = |field: Field| -> Classes {
        classes!(
            "form-input",
            controller.errors.get(field).map(|_| "invalid"),
            (live && controller.live_status(field) == Some(true)).then_some("valid")
        )
    };

    let styles = html! {
        <style>
            {r#"
                .form-card {
                    width: 100%;
                    max-width: 440px;
                    margin: 0 auto;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(8px);
                    border: 1px solid rgba(255, 255, 255, 0.5);
                    border-radius: 16px;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.1);
                    padding: 32px;
                }
                .form-field { margin-bottom: 24px; }
                .form-label {
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    font-size: 0.9rem;
                    color: #374151;
                    margin-bottom: 8px;
                }
                .input-wrap { position: relative; flex: 1; }
                .form-input {
                    width: 100%;
                    padding: 10px 14px;
                    border: 2px solid #e2e8f0;
                    border-radius: 8px;
                    font-size: 0.95rem;
                    background: rgba(255, 255, 255, 0.8);
                    transition: border-color 0.2s ease;
                    outline: none;
                }
                .form-input:focus { border-color: #60a5fa; }
                .form-input.invalid { border-color: #f87171; }
                .form-input.invalid:focus { border-color: #ef4444; }
                .form-input.valid { border-color: #4ade80; }
                .live-mark {
                    position: absolute;
                    right: 12px;
                    top: 50%;
                    transform: translateY(-50%);
                    font-weight: 700;
                }
                .live-mark.ok { color: #22c55e; }
                .live-mark.bad { color: #f97316; }
                .field-message {
                    margin-top: 6px;
                    font-size: 0.82rem;
                    color: #ef4444;
                }
                .phone-row { display: flex; gap: 8px; }
                .country-select {
                    width: 108px;
                    padding: 10px 8px;
                    border: 2px solid #e2e8f0;
                    border-radius: 8px;
                    background: rgba(255, 255, 255, 0.8);
                    font-size: 0.9rem;
                    outline: none;
                }
                .class-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
                .class-option {
                    padding: 16px;
                    border: 2px solid #e2e8f0;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.5);
                    text-align: left;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 8px;
                    transition: all 0.2s ease;
                }
                .class-option:hover { border-color: #93c5fd; background: rgba(239, 246, 255, 0.3); }
                .class-option.selected {
                    border-color: #60a5fa;
                    background: rgba(239, 246, 255, 0.8);
                    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.08);
                }
                .class-option-title { color: #1f2937; font-weight: 500; }
                .class-option-hint { font-size: 0.78rem; color: #6b7280; }
                .class-check {
                    flex-shrink: 0;
                    width: 24px;
                    height: 24px;
                    border: 2px solid #cbd5e1;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: white;
                    font-size: 0.7rem;
                    transition: all 0.2s ease;
                }
                .class-option.selected .class-check { border-color: #3b82f6; background: #3b82f6; }
                .submit-button {
                    width: 100%;
                    height: 48px;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(90deg, #3b82f6, #4f46e5);
                    color: white;
                    font-size: 1rem;
                    font-weight: 500;
                    box-shadow: 0 8px 16px rgba(59, 130, 246, 0.25);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 8px;
                    transition: all 0.3s ease;
                }
                .submit-button:hover:enabled { background: linear-gradient(90deg, #2563eb, #4338ca); }
                .submit-button:disabled { opacity: 0.5; cursor: not-allowed; }
                .submit-spinner {
                    width: 20px;
                    height: 20px;
                    border: 2px solid white;
                    border-top-color: transparent;
                    border-radius: 50%;
                    animation: spinner-turn 1s linear infinite;
                }
                @keyframes spinner-turn { to { transform: rotate(360deg); } }
                .success-panel { text-align: center; padding: 48px 0; }
                .success-orb {
                    width: 80px;
                    height: 80px;
                    margin: 0 auto 24px;
                    border-radius: 50%;
                    background: linear-gradient(90deg, #4ade80, #10b981);
                    color: white;
                    font-size: 2.2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: success-pop 0.4s ease-out;
                }
                @keyframes success-pop {
                    from { transform: scale(0); }
                    to { transform: scale(1); }
                }
                .success-panel h3 { font-size: 1.3rem; font-weight: 600; color: #1f2937; margin-bottom: 8px; }
                .success-panel p { color: #4b5563; }
            "#}
        </style>
    };

    if *succeeded {
        return html! {
            <div class="form-card">
                {styles}
                <Notification notice={*notice} />
                <div class="success-panel">
                    <div class="success-orb">{"✓"}</div>
                    <h3>{"Success!"}</h3>
                    <p>{"Your profile has been created. Redirecting..."}</p>
                </div>
            </div>
        };
    }

    html! {
        <div class="form-card">
            {styles}
            <Notification notice={*notice} />
            <form onsubmit={onsubmit}>
                <div class="form-field">
                    <label class="form-label">{"👤 Name"}</label>
                    <div class="input-wrap">
                        <input
                            type="text"
                            class={input_class(Field::Name)}
                            placeholder="Enter your full name"
                            value={controller.form.name.clone()}
                            oninput={on_input(Field::Name)}
                        />
                        {live_mark(Field::Name)}
                    </div>
                    {field_error(Field::Name)}
                </div>

                <div class="form-field">
                    <label class="form-label">{"📧 Email"}</label>
                    <div class="input-wrap">
                        <input
                            type="email"
                            class={input_class(Field::Email)}
                            placeholder="Enter your email address"
                            value={controller.form.email.clone()}
                            oninput={on_input(Field::Email)}
                        />
                        {live_mark(Field::Email)}
                    </div>
                    {field_error(Field::Email)}
                </div>

                <div class="form-field">
                    <label class="form-label">{"📞 Phone Number"}</label>
                    <div class="phone-row">
                        <select
                            class="country-select"
                            onchange={on_country_change}
                            value={controller.form.country_code.clone()}
                        >
                            {
                                config::COUNTRY_CODES.iter().map(|country| html! {
                                    <option
                                        value={country.code}
                                        selected={controller.form.country_code == country.code}
                                    >
                                        {format!("{} {}", country.flag, country.code)}
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                        <div class="input-wrap">
                            <input
                                type="tel"
                                class={input_class(Field::Phone)}
                                placeholder="Enter your phone number"
                                value={controller.form.phone_number.clone()}
                                oninput={on_input(Field::Phone)}
                            />
                            {live_mark(Field::Phone)}
                        </div>
                    </div>
                    {field_error(Field::Phone)}
                </div>

                <div class="form-field">
                    <label class="form-label">{"🎓 Highest Completed Class"}</label>
                    <div class="class-grid">
                        {
                            [ClassLevel::Tenth, ClassLevel::Twelfth].iter().map(|level| {
                                let selected = controller.form.completed_class == Some(*level);
                                html! {
                                    <button
                                        type="button"
                                        class={classes!("class-option", selected.then_some("selected"))}
                                        onclick={on_toggle_class(*level)}
                                    >
                                        <span>
                                            <div class="class-option-title">
                                                {format!("{} Grade", level.label())}
                                            </div>
                                            <div class="class-option-hint">{level.hint()}</div>
                                        </span>
                                        <span class="class-check">
                                            { if selected { "✓" } else { "" } }
                                        </span>
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    {field_error(Field::CompletedClass)}
                </div>

                <button type="submit" class="submit-button" disabled={controller.submitting}>
                    {
                        if controller.submitting {
                            html! {
                                <>
                                    <span class="submit-spinner"></span>
                                    <span>{"Processing..."}</span>
                                </>
                            }
                        } else {
                            html! { {"Start Your Journey"} }
                        }
                    }
                </button>
            </form>
        </div>
    }
}
