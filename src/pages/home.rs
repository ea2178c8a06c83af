//! Landing page: every marketing section plus the embedded baseline form.

use yew::prelude::*;

use crate::components::background::AnimatedBackground;
use crate::components::banner::WelcomeBanner;
use crate::components::career_map::InteractiveCareerMap;
use crate::components::cta::CallToAction;
use crate::components::demo_player::DemoVideoSection;
use crate::components::lead_form::LeadCaptureForm;
use crate::components::profiles::StudentProfilePreview;
use crate::components::testimonials::TestimonialsCarousel;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
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
        <div class="home-page">
            <style>
                {r#"
                    .signup-section {
                        padding: 80px 24px;
                        background: linear-gradient(135deg, rgba(74, 144, 226, 0.05), rgba(245, 166, 35, 0.05));
                    }
                    .signup-heading { text-align: center; margin-bottom: 48px; }
                    .signup-heading h2 {
                        font-size: clamp(2rem, 4vw, 3rem);
                        font-weight: 600;
                        margin-bottom: 16px;
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .signup-heading p { font-size: 1.15rem; color: #4b5563; max-width: 640px; margin: 0 auto; }
                "#}
            </style>
            <AnimatedBackground />
            <WelcomeBanner />
            <StudentProfilePreview />
            <DemoVideoSection />
            <InteractiveCareerMap />
            <TestimonialsCarousel />
            <section class="signup-section" id="signup">
                <div class="signup-heading">
                    <h2>{"Begin Your Journey"}</h2>
                    <p>{"Tell us where you are and we'll point you to the right track"}</p>
                </div>
                <LeadCaptureForm />
            </section>
            <CallToAction />
        </div>
    }
}
