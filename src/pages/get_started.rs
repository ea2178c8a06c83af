//! Standalone signup page: the strict, live-feedback form configuration.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::lead_form::LeadCaptureForm;
use crate::state::lead_form::FormConfig;
use crate::Route;

#[function_component(GetStarted)]
pub fn get_started() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="get-started-page">
            <style>
                {r#"
                    .get-started-page {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 48px 24px;
                        background: linear-gradient(135deg, #f8fafc, rgba(239, 246, 255, 0.5) 50%, #eef2ff);
                        position: relative;
                        overflow: hidden;
                    }
                    .page-blob {
                        position: absolute;
                        width: 320px;
                        height: 320px;
                        border-radius: 50%;
                        filter: blur(60px);
                        pointer-events: none;
                    }
                    .page-blob-1 {
                        top: -160px;
                        right: -160px;
                        background: linear-gradient(135deg, rgba(96, 165, 250, 0.2), rgba(129, 140, 248, 0.2));
                        animation: page-breathe 8s ease-in-out infinite;
                    }
                    .page-blob-2 {
                        bottom: -160px;
                        left: -160px;
                        background: linear-gradient(45deg, rgba(45, 212, 191, 0.2), rgba(96, 165, 250, 0.2));
                        animation: page-breathe 10s ease-in-out 2s infinite;
                    }
                    @keyframes page-breathe {
                        0%, 100% { transform: scale(1); opacity: 0.3; }
                        50% { transform: scale(1.15); opacity: 0.5; }
                    }
                    .get-started-header {
                        text-align: center;
                        margin-bottom: 32px;
                        position: relative;
                        z-index: 1;
                    }
                    .get-started-header h1 {
                        font-size: 1.6rem;
                        font-weight: 600;
                        color: #1e293b;
                        margin-bottom: 8px;
                    }
                    .get-started-header p { color: #475569; }
                    .get-started-body { position: relative; z-index: 1; width: 100%; }
                    .get-started-footer {
                        margin-top: 24px;
                        text-align: center;
                        font-size: 0.85rem;
                        color: #64748b;
                        position: relative;
                        z-index: 1;
                    }
                    .back-home {
                        display: inline-block;
                        margin-top: 12px;
                        color: #4A90E2;
                        font-size: 0.85rem;
                    }
                    .back-home:hover { text-decoration: underline; }
                "#}
            </style>
            <div class="page-blob page-blob-1"></div>
            <div class="page-blob page-blob-2"></div>
            <div class="get-started-header">
                <h1>{"Tell Us About Yourself"}</h1>
                <p>{"Fill in your details to get started"}</p>
            </div>
            <div class="get-started-body">
                <LeadCaptureForm config={FormConfig::strict()} />
            </div>
            <div class="get-started-footer">
                <p>{"🔒 Your information is secure and encrypted"}</p>
                <Link<Route> to={Route::Home} classes="back-home">
                    {"← Back to home"}
                </Link<Route>>
            </div>
        </div>
    }
}
