//! Interactive career-path explorer: two fixed tracks of steps with
//! expand/collapse and first-visit completion tracking.

use yew::prelude::*;

use crate::state::lead_form::ClassLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerStep {
    pub id: u32,
    pub title: &'static str,
    pub icon: &'static str,
    pub options: &'static [&'static str],
    pub color: &'static str,
    pub has_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerTrack {
    pub title: &'static str,
    pub steps: &'static [CareerStep],
}

const TENTH_TRACK: CareerTrack = CareerTrack {
    title: "After 10th Grade",
    steps: &[
        CareerStep {
            id: 1,
            title: "Choose Stream",
            icon: "📖",
            options: &["Science", "Commerce", "Arts"],
            color: "linear-gradient(90deg, #3b82f6, #06b6d4)",
            has_next: true,
        },
        CareerStep {
            id: 2,
            title: "Science Path",
            icon: "🏅",
            options: &["JEE Preparation", "NEET Preparation", "State Boards"],
            color: "linear-gradient(90deg, #22c55e, #10b981)",
            has_next: true,
        },
        CareerStep {
            id: 3,
            title: "Commerce Path",
            icon: "🏛",
            options: &["CA Foundation", "CS Foundation", "12th Focus"],
            color: "linear-gradient(90deg, #a855f7, #8b5cf6)",
            has_next: true,
        },
        CareerStep {
            id: 4,
            title: "Arts Path",
            icon: "🚀",
            options: &["Design Prep", "Literature", "Social Sciences"],
            color: "linear-gradient(90deg, #ec4899, #f43f5e)",
            has_next: true,
        },
        CareerStep {
            id: 5,
            title: "Engineering/Medical",
            icon: "🏅",
            options: &["IIT/NIT", "Medical Colleges", "Research"],
            color: "linear-gradient(90deg, #6366f1, #2563eb)",
            has_next: false,
        },
        CareerStep {
            id: 6,
            title: "Business/Finance",
            icon: "🏛",
            options: &["IIM", "CA", "Investment Banking"],
            color: "linear-gradient(90deg, #f59e0b, #f97316)",
            has_next: false,
        },
        CareerStep {
            id: 7,
            title: "Creative/Humanities",
            icon: "🚀",
            options: &["Design Schools", "Media", "Civil Services"],
            color: "linear-gradient(90deg, #14b8a6, #0891b2)",
            has_next: false,
        },
    ],
};

const TWELFTH_TRACK: CareerTrack = CareerTrack {
    title: "After 12th Grade",
    steps: &[
        CareerStep {
            id: 1,
            title: "Entrance Exams",
            icon: "📖",
            options: &["JEE Main/Advanced", "NEET", "CLAT", "CAT"],
            color: "linear-gradient(90deg, #4A90E2, #F5A623)",
            has_next: true,
        },
        CareerStep {
            id: 2,
            title: "Engineering",
            icon: "🏅",
            options: &["IITs", "NITs", "Private Colleges"],
            color: "linear-gradient(90deg, #2563eb, #4f46e5)",
            has_next: true,
        },
        CareerStep {
            id: 3,
            title: "Medical",
            icon: "🏛",
            options: &["AIIMS", "Government Medical", "Private Medical"],
            color: "linear-gradient(90deg, #ef4444, #ec4899)",
            has_next: true,
        },
        CareerStep {
            id: 4,
            title: "Management",
            icon: "🚀",
            options: &["IIMs", "Top B-Schools", "Specializations"],
            color: "linear-gradient(90deg, #22c55e, #14b8a6)",
            has_next: true,
        },
        CareerStep {
            id: 5,
            title: "Tech Careers",
            icon: "🏅",
            options: &["Software Developer", "AI/ML Engineer", "Product Manager"],
            color: "linear-gradient(90deg, #a855f7, #6366f1)",
            has_next: false,
        },
        CareerStep {
            id: 6,
            title: "Healthcare Careers",
            icon: "🏛",
            options: &["Doctor", "Surgeon", "Medical Research"],
            color: "linear-gradient(90deg, #f43f5e, #ef4444)",
            has_next: false,
        },
        CareerStep {
            id: 7,
            title: "Business Careers",
            icon: "🚀",
            options: &["CEO/Founder", "Consultant", "Investment Banker"],
            color: "linear-gradient(90deg, #10b981, #22c55e)",
            has_next: false,
        },
    ],
};

pub fn track(level: ClassLevel) -> &'static CareerTrack {
    match level {
        ClassLevel::Tenth => &TENTH_TRACK,
        ClassLevel::Twelfth => &TWELFTH_TRACK,
    }
}

/// Expand/collapse plus completion tracking. A step counts as explored the
/// first time it is expanded; switching tracks starts over.
#[derive(Debug, Clone, PartialEq)]
struct CareerMapState {
    selected_track: ClassLevel,
    active_step: Option<u32>,
    completed: Vec<u32>,
}

impl CareerMapState {
    fn new() -> Self {
        Self {
            selected_track: ClassLevel::Twelfth,
            active_step: None,
            completed: Vec::new(),
        }
    }

    fn select_track(&mut self, level: ClassLevel) {
        self.selected_track = level;
        self.active_step = None;
        self.completed.clear();
    }

    fn toggle_step(&mut self, id: u32) {
        if self.active_step == Some(id) {
            self.active_step = None;
        } else {
            self.active_step = Some(id);
            if !self.completed.contains(&id) {
                self.completed.push(id);
            }
        }
    }

    fn is_completed(&self, id: u32) -> bool {
        self.completed.contains(&id)
    }
}

#[function_component(InteractiveCareerMap)]
pub fn interactive_career_map() -> Html {
    let map = use_state(CareerMapState::new);

    let select_track = |level: ClassLevel| {
        let map = map.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*map).clone();
            next.select_track(level);
            map.set(next);
        })
    };

    let toggle_step = |id: u32| {
        let map = map.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*map).clone();
            next.toggle_step(id);
            map.set(next);
        })
    };

    let current = track(map.selected_track);

    html! {
        <section class="career-map">
            <style>
                {r#"
                    .career-map {
                        padding: 80px 24px;
                        background: linear-gradient(135deg, rgba(74, 144, 226, 0.05), rgba(245, 166, 35, 0.05));
                    }
                    .career-inner { max-width: 1200px; margin: 0 auto; }
                    .career-heading { text-align: center; margin-bottom: 48px; }
                    .career-heading h2 {
                        font-size: clamp(2rem, 4vw, 3rem);
                        font-weight: 600;
                        margin-bottom: 16px;
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .career-heading p { font-size: 1.15rem; color: #4b5563; max-width: 640px; margin: 0 auto 32px; }
                    .track-selector { display: flex; justify-content: center; gap: 16px; }
                    .track-button {
                        padding: 12px 24px;
                        border-radius: 9999px;
                        border: 2px solid rgba(74, 144, 226, 0.2);
                        background: white;
                        color: #374151;
                        font-size: 0.95rem;
                        transition: all 0.3s ease;
                    }
                    .track-button:hover { border-color: rgba(74, 144, 226, 0.4); transform: scale(1.05); }
                    .track-button.selected {
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        border-color: transparent;
                        color: white;
                        box-shadow: 0 8px 24px rgba(74, 144, 226, 0.25);
                    }
                    .track-title {
                        text-align: center;
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #1f2937;
                        margin-bottom: 32px;
                    }
                    .career-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                        gap: 24px;
                    }
                    .career-card {
                        background: white;
                        border: 2px solid #e5e7eb;
                        border-radius: 12px;
                        padding: 24px;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .career-card:hover { border-color: rgba(74, 144, 226, 0.4); box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08); }
                    .career-card.active {
                        border-color: #4A90E2;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.12);
                        transform: scale(1.03);
                    }
                    .career-card.explored { border-color: #4ade80; }
                    .career-card-top {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 16px;
                    }
                    .career-icon {
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.3rem;
                    }
                    .explored-badge {
                        width: 24px;
                        height: 24px;
                        border-radius: 50%;
                        background: #4ade80;
                        color: white;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.7rem;
                    }
                    .career-card h4 { font-size: 1.1rem; font-weight: 600; color: #1f2937; margin-bottom: 12px; }
                    .option-badge {
                        display: inline-block;
                        background: #f3f4f6;
                        color: #374151;
                        font-size: 0.78rem;
                        padding: 4px 10px;
                        border-radius: 6px;
                        margin: 0 8px 8px 0;
                    }
                    .more-hint { font-size: 0.75rem; color: #6b7280; }
                    .next-hint {
                        display: flex;
                        align-items: center;
                        margin-top: 16px;
                        font-size: 0.85rem;
                        color: #4A90E2;
                    }
                    .explore-hint {
                        text-align: center;
                        margin-top: 48px;
                    }
                    .explore-hint span {
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                        padding: 8px 16px;
                        background: rgba(255, 255, 255, 0.6);
                        backdrop-filter: blur(4px);
                        border: 1px solid rgba(74, 144, 226, 0.2);
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        color: #374151;
                    }
                    .pulse-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: #4A90E2;
                        animation: hint-pulse 2s ease-in-out infinite;
                    }
                    @keyframes hint-pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.3; }
                    }
                "#}
            </style>
            <div class="career-inner">
                <div class="career-heading">
                    <h2>{"Interactive Career Map"}</h2>
                    <p>{"Explore different career paths based on your academic level"}</p>
                    <div class="track-selector">
                        {
                            [ClassLevel::Tenth, ClassLevel::Twelfth].iter().map(|level| {
                                let selected = map.selected_track == *level;
                                html! {
                                    <button
                                        class={classes!("track-button", selected.then_some("selected"))}
                                        onclick={select_track(*level)}
                                    >
                                        {format!("After {} Grade", level.label())}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <h3 class="track-title">{current.title}</h3>

                <div class="career-grid">
                    {
                        current.steps.iter().map(|step| {
                            let active = map.active_step == Some(step.id);
                            let explored = map.is_completed(step.id);
                            let shown = if active { step.options.len() } else { 2 };
                            html! {
                                <div
                                    key={step.id}
                                    class={classes!(
                                        "career-card",
                                        active.then_some("active"),
                                        (!active && explored).then_some("explored")
                                    )}
                                    onclick={toggle_step(step.id)}
                                >
                                    <div class="career-card-top">
                                        <div class="career-icon" style={format!("background: {};", step.color)}>
                                            {step.icon}
                                        </div>
                                        {
                                            if explored {
                                                html! { <div class="explored-badge">{"▶"}</div> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                    <h4>{step.title}</h4>
                                    <div>
                                        {
                                            step.options.iter().take(shown).map(|option| html! {
                                                <span class="option-badge">{*option}</span>
                                            }).collect::<Html>()
                                        }
                                        {
                                            if !active && step.options.len() > 2 {
                                                html! {
                                                    <p class="more-hint">
                                                        {format!("+{} more", step.options.len() - 2)}
                                                    </p>
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                    {
                                        if step.has_next {
                                            html! { <div class="next-hint">{"Next Steps ›"}</div> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="explore-hint">
                    <span>
                        <span class="pulse-dot"></span>
                        {"Click on any step to explore options"}
                    </span>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_on_the_twelfth_track_with_nothing_explored() {
        let map = CareerMapState::new();
        assert_eq!(map.selected_track, ClassLevel::Twelfth);
        assert_eq!(map.active_step, None);
        assert!(map.completed.is_empty());
    }

    #[test]
    fn expanding_marks_a_step_explored_once() {
        let mut map = CareerMapState::new();
        map.toggle_step(3);
        assert_eq!(map.active_step, Some(3));
        assert!(map.is_completed(3));

        // Collapse and re-expand: still recorded exactly once.
        map.toggle_step(3);
        assert_eq!(map.active_step, None);
        map.toggle_step(3);
        assert_eq!(map.completed, vec![3]);
    }

    #[test]
    fn expanding_another_step_moves_the_focus() {
        let mut map = CareerMapState::new();
        map.toggle_step(1);
        map.toggle_step(2);
        assert_eq!(map.active_step, Some(2));
        assert!(map.is_completed(1));
        assert!(map.is_completed(2));
    }

    #[test]
    fn switching_tracks_resets_exploration() {
        let mut map = CareerMapState::new();
        map.toggle_step(1);
        map.toggle_step(4);
        map.select_track(ClassLevel::Tenth);
        assert_eq!(map.selected_track, ClassLevel::Tenth);
        assert_eq!(map.active_step, None);
        assert!(map.completed.is_empty());
    }

    #[test]
    fn both_tracks_have_seven_steps_with_options() {
        for level in [ClassLevel::Tenth, ClassLevel::Twelfth] {
            let track = track(level);
            assert_eq!(track.steps.len(), 7);
            for step in track.steps {
                assert!(!step.options.is_empty());
            }
        }
    }
}
