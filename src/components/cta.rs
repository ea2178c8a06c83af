//! Closing call-to-action: stats row and the final push to the form.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const STATS: [(&str, &str, &str); 4] = [
    ("👥", "10,000+", "Students Guided"),
    ("🏆", "95%", "Success Rate"),
    ("🎯", "500+", "Career Paths"),
    ("✨", "50+", "Top Colleges"),
];

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="cta-section">
            <style>
                {r#"
                    .cta-section {
                        padding: 80px 24px;
                        background: linear-gradient(135deg, rgba(74, 144, 226, 0.1), #ffffff 50%, rgba(245, 166, 35, 0.1));
                        position: relative;
                        overflow: hidden;
                    }
                    .cta-blob {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(40px);
                        pointer-events: none;
                    }
                    .cta-blob-1 {
                        top: 80px;
                        right: 40px;
                        width: 128px;
                        height: 128px;
                        background: rgba(74, 144, 226, 0.05);
                        animation: cta-breathe 4s ease-in-out infinite;
                    }
                    .cta-blob-2 {
                        bottom: 80px;
                        left: 40px;
                        width: 160px;
                        height: 160px;
                        background: rgba(245, 166, 35, 0.05);
                        animation: cta-breathe 5s ease-in-out 1s infinite;
                    }
                    @keyframes cta-breathe {
                        0%, 100% { transform: scale(1); opacity: 0.4; }
                        50% { transform: scale(1.25); opacity: 0.7; }
                    }
                    .cta-inner { max-width: 1200px; margin: 0 auto; position: relative; z-index: 1; }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                        gap: 32px;
                        margin-bottom: 80px;
                    }
                    .stat { text-align: center; }
                    .stat-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 64px;
                        height: 64px;
                        font-size: 1.8rem;
                        background: linear-gradient(135deg, rgba(74, 144, 226, 0.1), rgba(245, 166, 35, 0.1));
                        border: 1px solid rgba(74, 144, 226, 0.2);
                        border-radius: 16px;
                        margin-bottom: 16px;
                    }
                    .stat-value {
                        font-size: 1.8rem;
                        font-weight: 700;
                        margin-bottom: 8px;
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .stat-label { color: #4b5563; }
                    .cta-closing { text-align: center; max-width: 720px; margin: 0 auto; }
                    .cta-badge {
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
                    .cta-closing h2 {
                        font-size: clamp(2rem, 5vw, 3.5rem);
                        font-weight: 700;
                        line-height: 1.15;
                        margin-bottom: 24px;
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .cta-closing p { font-size: 1.2rem; color: #4b5563; line-height: 1.6; margin-bottom: 32px; }
                    .cta-primary {
                        display: inline-block;
                        padding: 14px 40px;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        color: white;
                        font-size: 1.05rem;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .cta-primary:hover {
                        transform: scale(1.05);
                        box-shadow: 0 12px 32px rgba(74, 144, 226, 0.3);
                    }
                "#}
            </style>
            <div class="cta-blob cta-blob-1"></div>
            <div class="cta-blob cta-blob-2"></div>
            <div class="cta-inner">
                <div class="stats-grid">
                    {
                        STATS.iter().map(|(icon, value, label)| html! {
                            <div class="stat">
                                <div class="stat-icon">{*icon}</div>
                                <div class="stat-value">{*value}</div>
                                <p class="stat-label">{*label}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="cta-closing">
                    <div class="cta-badge">
                        <span>{"✨"}</span>
                        <span>{"Ready to begin?"}</span>
                    </div>
                    <h2>{"Start Your Journey Today"}</h2>
                    <p>{"Join thousands of students who found their direction with personalized career guidance."}</p>
                    <Link<Route> to={Route::GetStarted} classes="cta-primary">
                        {"Get Started →"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}
