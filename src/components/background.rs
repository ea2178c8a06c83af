//! Fixed decorative background: drifting gradient blobs and floating
//! glyphs, all driven by CSS keyframes so there is nothing to tear down.

use yew::prelude::*;

#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    html! {
        <div class="animated-background">
            <style>
                {r#"
                    .animated-background {
                        position: fixed;
                        inset: 0;
                        z-index: -10;
                        overflow: hidden;
                        background: linear-gradient(135deg, rgba(74, 144, 226, 0.2), #ffffff 50%, rgba(245, 166, 35, 0.2));
                        pointer-events: none;
                    }
                    .bg-blob {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(24px);
                    }
                    .bg-blob-1 {
                        top: 80px;
                        left: 40px;
                        width: 128px;
                        height: 128px;
                        background: rgba(74, 144, 226, 0.1);
                        animation: blob-drift-1 8s ease-in-out infinite;
                    }
                    .bg-blob-2 {
                        top: 160px;
                        right: 80px;
                        width: 96px;
                        height: 96px;
                        background: rgba(245, 166, 35, 0.15);
                        animation: blob-drift-2 6s ease-in-out 1s infinite;
                    }
                    .bg-blob-3 {
                        bottom: 128px;
                        left: 25%;
                        width: 160px;
                        height: 160px;
                        background: rgba(74, 144, 226, 0.08);
                        filter: blur(40px);
                        animation: blob-drift-3 12s ease-in-out 2s infinite;
                    }
                    .bg-blob-4 {
                        bottom: 80px;
                        right: 40px;
                        width: 112px;
                        height: 112px;
                        background: rgba(245, 166, 35, 0.12);
                        animation: blob-drift-1 7s ease-in-out 0.5s infinite;
                    }
                    .bg-glyph {
                        position: absolute;
                        font-size: 2rem;
                        opacity: 0.2;
                        animation: glyph-bob 4s ease-in-out infinite;
                    }
                    .bg-glyph-book { top: 25%; left: 33%; }
                    .bg-glyph-cap { top: 60%; right: 25%; animation-delay: 1.5s; }
                    .bg-glyph-star { top: 40%; right: 10%; animation-delay: 0.7s; }
                    @keyframes blob-drift-1 {
                        0%, 100% { transform: translate(0, 0) scale(1); }
                        50% { transform: translate(50px, -30px) scale(1.2); }
                    }
                    @keyframes blob-drift-2 {
                        0%, 100% { transform: translate(0, 0) scale(1); }
                        50% { transform: translate(-40px, 40px) scale(0.8); }
                    }
                    @keyframes blob-drift-3 {
                        0%, 100% { transform: translate(0, 0) rotate(0deg); }
                        50% { transform: translate(60px, -50px) rotate(180deg); }
                    }
                    @keyframes glyph-bob {
                        0%, 100% { transform: translateY(0) rotate(0deg); }
                        25% { transform: translateY(-20px) rotate(5deg); }
                        75% { transform: translateY(-10px) rotate(-5deg); }
                    }
                "#}
            </style>
            <div class="bg-blob bg-blob-1"></div>
            <div class="bg-blob bg-blob-2"></div>
            <div class="bg-blob bg-blob-3"></div>
            <div class="bg-blob bg-blob-4"></div>
            <div class="bg-glyph bg-glyph-book">{"📚"}</div>
            <div class="bg-glyph bg-glyph-cap">{"🎓"}</div>
            <div class="bg-glyph bg-glyph-star">{"⭐"}</div>
        </div>
    }
}
