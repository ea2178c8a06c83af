//! Static student-profile preview cards.

use yew::prelude::*;

struct StudentProfile {
    name: &'static str,
    class_label: &'static str,
    avatar: &'static str,
    interests: &'static [&'static str],
    career_paths: &'static [&'static str],
    match_score: u32,
    card_bg: &'static str,
    border_color: &'static str,
}

const STUDENT_PROFILES: [StudentProfile; 3] = [
    StudentProfile {
        name: "Priya Sharma",
        class_label: "12th",
        avatar: "PS",
        interests: &["Science", "Research", "Medicine"],
        career_paths: &["MBBS", "B.Tech Biomedical", "B.Sc Biology"],
        match_score: 95,
        card_bg: "linear-gradient(135deg, rgba(74, 144, 226, 0.1), rgba(245, 166, 35, 0.1))",
        border_color: "rgba(74, 144, 226, 0.3)",
    },
    StudentProfile {
        name: "Arjun Patel",
        class_label: "10th",
        avatar: "AP",
        interests: &["Technology", "Coding", "Innovation"],
        career_paths: &["Computer Science", "Engineering", "Data Science"],
        match_score: 88,
        card_bg: "linear-gradient(135deg, rgba(245, 166, 35, 0.1), rgba(74, 144, 226, 0.1))",
        border_color: "rgba(245, 166, 35, 0.3)",
    },
    StudentProfile {
        name: "Sneha Kumar",
        class_label: "12th",
        avatar: "SK",
        interests: &["Arts", "Design", "Communication"],
        career_paths: &["Graphic Design", "Mass Communication", "Fine Arts"],
        match_score: 92,
        card_bg: "linear-gradient(135deg, #f3e8ff, #fce7f3)",
        border_color: "#d8b4fe",
    },
];

#[function_component(StudentProfilePreview)]
pub fn student_profile_preview() -> Html {
    html! {
        <section class="profiles-section" id="demo-section">
            <style>
                {r#"
                    .profiles-section {
                        padding: 80px 24px;
                        background: linear-gradient(135deg, #f9fafb, #ffffff);
                    }
                    .profiles-inner { max-width: 1200px; margin: 0 auto; }
                    .profiles-heading { text-align: center; margin-bottom: 48px; }
                    .profiles-heading h2 {
                        font-size: clamp(2rem, 4vw, 3rem);
                        font-weight: 600;
                        margin-bottom: 16px;
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .profiles-heading p { font-size: 1.15rem; color: #4b5563; max-width: 640px; margin: 0 auto; }
                    .profiles-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 32px;
                    }
                    .profile-card {
                        border-radius: 12px;
                        border: 2px solid;
                        padding: 24px;
                        transition: all 0.3s ease;
                    }
                    .profile-card:hover {
                        transform: translateY(-10px);
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.12);
                    }
                    .profile-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 24px;
                    }
                    .profile-identity { display: flex; align-items: center; gap: 12px; }
                    .profile-avatar {
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #4A90E2, #F5A623);
                        color: white;
                        font-weight: 600;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        box-shadow: 0 0 0 2px white, 0 4px 8px rgba(0, 0, 0, 0.12);
                    }
                    .profile-name { font-size: 1.1rem; font-weight: 600; color: #1f2937; }
                    .profile-class { font-size: 0.85rem; color: #4b5563; }
                    .match-score {
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        background: rgba(255, 255, 255, 0.6);
                        padding: 4px 10px;
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        font-weight: 600;
                        color: #374151;
                    }
                    .profile-group { margin-bottom: 16px; }
                    .profile-group-label {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        font-size: 0.85rem;
                        color: #374151;
                        margin-bottom: 8px;
                    }
                    .profile-tag {
                        display: inline-block;
                        background: rgba(255, 255, 255, 0.7);
                        color: #374151;
                        font-size: 0.78rem;
                        padding: 4px 10px;
                        border-radius: 6px;
                        margin: 0 8px 8px 0;
                    }
                "#}
            </style>
            <div class="profiles-inner">
                <div class="profiles-heading">
                    <h2>{"Meet Our Success Stories"}</h2>
                    <p>{"See how EduAdvisor creates personalized profiles and career recommendations for each student"}</p>
                </div>
                <div class="profiles-grid">
                    {
                        STUDENT_PROFILES.iter().map(|student| html! {
                            <div
                                class="profile-card"
                                style={format!(
                                    "background: {}; border-color: {};",
                                    student.card_bg, student.border_color
                                )}
                            >
                                <div class="profile-header">
                                    <div class="profile-identity">
                                        <div class="profile-avatar">{student.avatar}</div>
                                        <div>
                                            <div class="profile-name">{student.name}</div>
                                            <div class="profile-class">{format!("🎓 Class {}", student.class_label)}</div>
                                        </div>
                                    </div>
                                    <div class="match-score">
                                        <span>{"⭐"}</span>
                                        <span>{format!("{}%", student.match_score)}</span>
                                    </div>
                                </div>
                                <div class="profile-group">
                                    <div class="profile-group-label">{"🧠 Interests"}</div>
                                    {
                                        student.interests.iter().map(|interest| html! {
                                            <span class="profile-tag">{*interest}</span>
                                        }).collect::<Html>()
                                    }
                                </div>
                                <div class="profile-group">
                                    <div class="profile-group-label">{"💼 Recommended Paths"}</div>
                                    {
                                        student.career_paths.iter().map(|path| html! {
                                            <span class="profile-tag">{*path}</span>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
