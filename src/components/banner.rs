//! Hero banner: headline, call-to-action pair and floating icon bubbles.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

fn scroll_to_demo() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(section) = document.get_element_by_id("demo-section") {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(WelcomeBanner)]
pub fn welcome_banner() -> Html {
    let on_start_exploring = Callback::from(|_| scroll_to_demo());

    html! {
        <section class="welcome-banner">
            <style>
                {r#"
                    .welcome-banner {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 48px 24px;
                        position: relative;
                        overflow: hidden;
                    }
                    .banner-bubble {
                        position: absolute;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #4A90E2, #F5A623);
                        color: white;
                        pointer-events: none;
                    }
                    .banner-bubble-1 {
                        top: 80px;
                        left: 40px;
                        width: 64px;
                        height: 64px;
                        font-size: 1.8rem;
                        animation: bubble-float-1 4s ease-in-out infinite;
                    }
                    .banner-bubble-2 {
                        top: 128px;
                        right: 80px;
                        width: 48px;
                        height: 48px;
                        font-size: 1.3rem;
                        background: linear-gradient(135deg, #F5A623, #4A90E2);
                        animation: bubble-float-2 3s ease-in-out 1s infinite;
                    }
                    .banner-bubble-3 {
                        bottom: 160px;
                        left: 80px;
                        width: 56px;
                        height: 56px;
                        font-size: 1.5rem;
                        opacity: 0.85;
                        animation: bubble-float-1 5s ease-in-out 2s infinite;
                    }
                    @keyframes bubble-float-1 {
                        0%, 100% { transform: translateY(0) rotate(0deg); }
                        33% { transform: translateY(-20px) rotate(5deg); }
                        66% { transform: translateY(-8px) rotate(-5deg); }
                    }
                    @keyframes bubble-float-2 {
                        0%, 100% { transform: translate(0, 0); }
                        50% { transform: translate(-10px, 15px); }
                    }
                    .banner-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 48px;
                        align-items: center;
                        position: relative;
                        z-index: 1;
                    }
                    @media (max-width: 950px) {
                        .banner-grid { grid-template-columns: 1fr; text-align: center; }
                    }
                    .banner-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                        padding: 8px 16px;
                        background: linear-gradient(90deg, rgba(74, 144, 226, 0.1), rgba(245, 166, 35, 0.1));
                        border: 1px solid rgba(74, 144, 226, 0.2);
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        color: #374151;
                        margin-bottom: 24px;
                    }
                    .banner-title {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        margin-bottom: 24px;
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .banner-subtitle {
                        font-size: 1.25rem;
                        color: #4b5563;
                        line-height: 1.6;
                        margin-bottom: 32px;
                    }
                    .banner-cta-row {
                        display: flex;
                        gap: 16px;
                        flex-wrap: wrap;
                    }
                    @media (max-width: 950px) {
                        .banner-cta-row { justify-content: center; }
                    }
                    .banner-cta {
                        padding: 12px 32px;
                        border: none;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        color: white;
                        font-size: 1rem;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .banner-cta:hover {
                        transform: scale(1.05);
                        box-shadow: 0 8px 24px rgba(74, 144, 226, 0.3);
                    }
                    .banner-cta-secondary {
                        display: inline-block;
                        padding: 12px 32px;
                        border: 2px solid #4A90E2;
                        border-radius: 9999px;
                        background: transparent;
                        color: #4A90E2;
                        font-size: 1rem;
                        transition: all 0.3s ease;
                    }
                    .banner-cta-secondary:hover {
                        background: #4A90E2;
                        color: white;
                    }
                    .banner-visual {
                        position: relative;
                        height: 420px;
                        border-radius: 24px;
                        overflow: hidden;
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.18);
                        background:
                            linear-gradient(45deg, rgba(74, 144, 226, 0.3), transparent 50%, rgba(245, 166, 35, 0.3)),
                            linear-gradient(135deg, #dbeafe, #fef3c7);
                    }
                    .banner-card {
                        position: absolute;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(6px);
                        border-radius: 16px;
                        padding: 16px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                        display: flex;
                        align-items: center;
                        gap: 8px;
                    }
                    .banner-card-live {
                        top: 32px;
                        right: 32px;
                        animation: bubble-float-2 3s ease-in-out infinite;
                    }
                    .banner-card-rate {
                        bottom: 32px;
                        left: 32px;
                        animation: bubble-float-2 4s ease-in-out 1s infinite;
                    }
                    .live-dot {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        background: #4ade80;
                        animation: live-pulse 2s ease-in-out infinite;
                    }
                    @keyframes live-pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.4; }
                    }
                    .rate-label { font-size: 0.8rem; color: #6b7280; }
                    .rate-value { font-size: 1.15rem; font-weight: 600; color: #4A90E2; }
                "#}
            </style>

            <div class="banner-bubble banner-bubble-1">{"👥"}</div>
            <div class="banner-bubble banner-bubble-2">{"🎯"}</div>
            <div class="banner-bubble banner-bubble-3">{"✨"}</div>

            <div class="banner-grid">
                <div>
                    <div class="banner-badge">
                        <span>{"✨"}</span>
                        <span>{"Your journey begins here!"}</span>
                    </div>
                    <h1 class="banner-title">{"Explore Your Future with EduAdvisor"}</h1>
                    <p class="banner-subtitle">
                        {"See how we guide students like you toward the right path."}
                    </p>
                    <div class="banner-cta-row">
                        <button class="banner-cta" onclick={on_start_exploring}>
                            {"Start Exploring →"}
                        </button>
                        <Link<Route> to={Route::GetStarted} classes="banner-cta-secondary">
                            {"Get Started"}
                        </Link<Route>>
                    </div>
                </div>
                <div class="banner-visual">
                    <div class="banner-card banner-card-live">
                        <span class="live-dot"></span>
                        <span style="font-size: 0.85rem; color: #374151;">{"Live Guidance"}</span>
                    </div>
                    <div class="banner-card banner-card-rate">
                        <span style="font-size: 1.5rem;">{"🎯"}</span>
                        <div>
                            <div class="rate-label">{"Success Rate"}</div>
                            <div class="rate-value">{"98%"}</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
