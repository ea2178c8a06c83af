//! Testimonial carousel: timed auto-advance with manual override.

use gloo_timers::callback::Interval;
use yew::prelude::*;

const AUTO_ADVANCE_MS: u32 = 4_000;

struct Testimonial {
    name: &'static str,
    class_label: &'static str,
    avatar: &'static str,
    rating: usize,
    text: &'static str,
    achievement: &'static str,
    card_bg: &'static str,
    avatar_bg: &'static str,
}

const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Rahul Verma",
        class_label: "12th Graduate",
        avatar: "RV",
        rating: 5,
        text: "EduAdvisor helped me discover my passion for engineering. I'm now at IIT Delhi pursuing Computer Science!",
        achievement: "IIT Delhi - CSE",
        card_bg: "linear-gradient(135deg, #eff6ff, #eef2ff)",
        avatar_bg: "linear-gradient(135deg, #4A90E2, #2563eb)",
    },
    Testimonial {
        name: "Ananya Singh",
        class_label: "10th Graduate",
        avatar: "AS",
        rating: 5,
        text: "The career guidance was spot-on! I chose Science stream and now I'm preparing for NEET with confidence.",
        achievement: "NEET Aspirant",
        card_bg: "linear-gradient(135deg, #f0fdf4, #ecfdf5)",
        avatar_bg: "linear-gradient(135deg, #F5A623, #ea580c)",
    },
    Testimonial {
        name: "Vikram Reddy",
        class_label: "12th Graduate",
        avatar: "VR",
        rating: 5,
        text: "I was confused about my career path. EduAdvisor's personalized recommendations led me to pursue CA.",
        achievement: "CA Intermediate",
        card_bg: "linear-gradient(135deg, #faf5ff, #f5f3ff)",
        avatar_bg: "linear-gradient(135deg, #a855f7, #7c3aed)",
    },
    Testimonial {
        name: "Priya Iyer",
        class_label: "10th Graduate",
        avatar: "PI",
        rating: 5,
        text: "The platform made choosing my stream so much easier. Now I'm excelling in Commerce and planning for MBA.",
        achievement: "Commerce Topper",
        card_bg: "linear-gradient(135deg, #fff1f2, #fdf2f8)",
        avatar_bg: "linear-gradient(135deg, #f43f5e, #db2777)",
    },
    Testimonial {
        name: "Arjun Malhotra",
        class_label: "12th Graduate",
        avatar: "AM",
        rating: 5,
        text: "EduAdvisor's career map showed me possibilities I never knew existed. Now I'm at AIIMS pursuing medicine!",
        achievement: "AIIMS Delhi - MBBS",
        card_bg: "linear-gradient(135deg, #f0fdfa, #ecfeff)",
        avatar_bg: "linear-gradient(135deg, #14b8a6, #0891b2)",
    },
];

#[function_component(TestimonialsCarousel)]
pub fn testimonials_carousel() -> Html {
    let current = use_state(|| 0usize);
    let auto_play = use_state(|| true);

    // Re-armed whenever the slide or the auto-play flag changes, so the
    // callback always advances from the slide it was armed on. Dropped on
    // unmount via the cleanup closure.
    {
        let current_for_effect = current.clone();
        use_effect_with_deps(
            move |deps: &(bool, usize)| {
                let (playing, index) = *deps;
                let interval = playing.then(|| {
                    Interval::new(AUTO_ADVANCE_MS, move || {
                        current_for_effect.set((index + 1) % TESTIMONIALS.len());
                    })
                });
                move || drop(interval)
            },
            (*auto_play, *current),
        );
    }

    let go_to = |index: usize| {
        let current = current.clone();
        let auto_play = auto_play.clone();
        Callback::from(move |_: MouseEvent| {
            current.set(index);
            auto_play.set(false);
        })
    };

    let on_previous = {
        let current = current.clone();
        let auto_play = auto_play.clone();
        Callback::from(move |_: MouseEvent| {
            let previous = if *current == 0 {
                TESTIMONIALS.len() - 1
            } else {
                *current - 1
            };
            current.set(previous);
            auto_play.set(false);
        })
    };

    let on_next = {
        let current = current.clone();
        let auto_play = auto_play.clone();
        Callback::from(move |_: MouseEvent| {
            current.set((*current + 1) % TESTIMONIALS.len());
            auto_play.set(false);
        })
    };

    let toggle_auto_play = {
        let auto_play = auto_play.clone();
        Callback::from(move |_: MouseEvent| auto_play.set(!*auto_play))
    };

    html! {
        <section class="testimonials">
            <style>
                {r#"
                    .testimonials {
                        padding: 80px 24px;
                        background: linear-gradient(135deg, #ffffff, #f9fafb);
                    }
                    .testimonials-inner { max-width: 1000px; margin: 0 auto; }
                    .testimonials-heading { text-align: center; margin-bottom: 48px; }
                    .testimonials-heading h2 {
                        font-size: clamp(2rem, 4vw, 3rem);
                        font-weight: 600;
                        margin-bottom: 16px;
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .testimonials-heading p { font-size: 1.15rem; color: #4b5563; max-width: 640px; margin: 0 auto; }
                    .carousel { position: relative; max-width: 860px; margin: 0 auto; }
                    .carousel-window { overflow: hidden; border-radius: 24px; }
                    .carousel-strip {
                        display: flex;
                        transition: transform 0.5s ease-in-out;
                    }
                    .slide { width: 100%; flex-shrink: 0; }
                    .slide-card {
                        margin: 0 16px;
                        border-radius: 24px;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.1);
                        padding: 48px;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .quote-mark { font-size: 3rem; color: rgba(74, 144, 226, 0.3); line-height: 1; margin-bottom: 24px; }
                    .slide-text {
                        font-size: 1.3rem;
                        color: #374151;
                        font-style: italic;
                        line-height: 1.6;
                        margin-bottom: 32px;
                    }
                    .slide-avatar {
                        width: 64px;
                        height: 64px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: white;
                        font-weight: 600;
                        box-shadow: 0 0 0 4px white, 0 8px 16px rgba(0, 0, 0, 0.15);
                        margin-bottom: 16px;
                    }
                    .slide-name { font-size: 1.2rem; font-weight: 600; color: #1f2937; margin-bottom: 4px; }
                    .slide-class { color: #4b5563; margin-bottom: 8px; }
                    .slide-stars { color: #facc15; font-size: 1.1rem; letter-spacing: 2px; margin-bottom: 12px; }
                    .slide-achievement {
                        padding: 8px 16px;
                        background: rgba(255, 255, 255, 0.6);
                        backdrop-filter: blur(4px);
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        color: #4A90E2;
                        font-weight: 500;
                    }
                    .carousel-nav {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 48px;
                        height: 48px;
                        border: none;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.85);
                        backdrop-filter: blur(4px);
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.12);
                        color: #4A90E2;
                        font-size: 1.3rem;
                        z-index: 10;
                        transition: background 0.3s ease;
                    }
                    .carousel-nav:hover { background: white; }
                    .carousel-nav.prev { left: 16px; }
                    .carousel-nav.next { right: 16px; }
                    .carousel-dots { display: flex; justify-content: center; gap: 8px; margin-top: 32px; }
                    .carousel-dot {
                        width: 12px;
                        height: 12px;
                        border: none;
                        border-radius: 50%;
                        background: #d1d5db;
                        transition: all 0.3s ease;
                        padding: 0;
                    }
                    .carousel-dot:hover { background: #9ca3af; }
                    .carousel-dot.current {
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        transform: scale(1.25);
                    }
                    .auto-play-toggle {
                        display: block;
                        margin: 16px auto 0;
                        border: none;
                        background: none;
                        font-size: 0.85rem;
                        color: #6b7280;
                        transition: color 0.2s ease;
                    }
                    .auto-play-toggle:hover { color: #374151; }
                "#}
            </style>
            <div class="testimonials-inner">
                <div class="testimonials-heading">
                    <h2>{"Success Stories"}</h2>
                    <p>{"Hear from students who found their perfect career path with EduAdvisor"}</p>
                </div>

                <div class="carousel">
                    <div class="carousel-window">
                        <div
                            class="carousel-strip"
                            style={format!("transform: translateX(-{}%);", *current * 100)}
                        >
                            {
                                TESTIMONIALS.iter().map(|testimonial| {
                                    let stars = "★".repeat(testimonial.rating);
                                    html! {
                                    <div class="slide">
                                        <div class="slide-card" style={format!("background: {};", testimonial.card_bg)}>
                                            <div class="quote-mark">{"“"}</div>
                                            <p class="slide-text">{format!("\"{}\"", testimonial.text)}</p>
                                            <div
                                                class="slide-avatar"
                                                style={format!("background: {};", testimonial.avatar_bg)}
                                            >
                                                {testimonial.avatar}
                                            </div>
                                            <h4 class="slide-name">{testimonial.name}</h4>
                                            <p class="slide-class">{testimonial.class_label}</p>
                                            <div class="slide-stars">{stars}</div>
                                            <div class="slide-achievement">{testimonial.achievement}</div>
                                        </div>
                                    </div>
                                }
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <button class="carousel-nav prev" onclick={on_previous}>{"‹"}</button>
                    <button class="carousel-nav next" onclick={on_next}>{"›"}</button>

                    <div class="carousel-dots">
                        {
                            (0..TESTIMONIALS.len()).map(|index| html! {
                                <button
                                    class={classes!("carousel-dot", (*current == index).then_some("current"))}
                                    onclick={go_to(index)}
                                ></button>
                            }).collect::<Html>()
                        }
                    </div>

                    <button class="auto-play-toggle" onclick={toggle_auto_play}>
                        {
                            if *auto_play {
                                "Auto-playing • Click to pause"
                            } else {
                                "Paused • Click to resume"
                            }
                        }
                    </button>
                </div>
            </div>
        </section>
    }
}
