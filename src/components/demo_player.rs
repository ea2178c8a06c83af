//! Scripted product-demo player. Rendering and the async driver loop live
//! here; the step transitions come from `state::demo`.

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::state::demo::{DemoState, Tick, DEMO_STEPS, STEP_HOLD_MS, TICK_MS};

/// Pure display-layout state; no effect on sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Device {
    Desktop,
    Tablet,
    Mobile,
}

impl Device {
    const ALL: [Device; 3] = [Device::Desktop, Device::Tablet, Device::Mobile];

    fn label(&self) -> &'static str {
        match self {
            Device::Desktop => "Desktop",
            Device::Tablet => "Tablet",
            Device::Mobile => "Mobile",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Device::Desktop => "🖥",
            Device::Tablet => "📟",
            Device::Mobile => "📱",
        }
    }

    fn frame_class(&self) -> &'static str {
        match self {
            Device::Desktop => "demo-frame demo-frame-desktop",
            Device::Tablet => "demo-frame demo-frame-tablet",
            Device::Mobile => "demo-frame demo-frame-mobile",
        }
    }
}

#[function_component(DemoVideoSection)]
pub fn demo_video_section() -> Html {
    let state = use_state(DemoState::new);
    let device = use_state(|| Device::Desktop);
    // Bumped by start/pause/reset; the driver loop exits as soon as its
    // captured generation no longer matches.
    let run_token = use_mut_ref(|| 0u64);

    let on_start = {
        let state = state.clone();
        let run_token = run_token.clone();
        Callback::from(move |_: MouseEvent| {
            *run_token.borrow_mut() += 1;
            let token = *run_token.borrow();
            let state = state.clone();
            let run_token = run_token.clone();
            log!("demo: starting walkthrough");
            spawn_local(async move {
                let mut seq = DemoState::new();
                seq.start();
                state.set(seq);
                loop {
                    TimeoutFuture::new(TICK_MS).await;
                    if *run_token.borrow() != token {
                        return;
                    }
                    match seq.tick(TICK_MS) {
                        Tick::Idle => return,
                        Tick::Running => state.set(seq),
                        Tick::StepDone => {
                            state.set(seq);
                            TimeoutFuture::new(STEP_HOLD_MS).await;
                            if *run_token.borrow() != token {
                                return;
                            }
                            seq.advance();
                            state.set(seq);
                        }
                        Tick::Finished => {
                            log!("demo: walkthrough finished");
                            state.set(seq);
                            return;
                        }
                    }
                }
            });
        })
    };

    let on_pause = {
        let state = state.clone();
        let run_token = run_token.clone();
        Callback::from(move |_: MouseEvent| {
            *run_token.borrow_mut() += 1;
            let mut frozen = *state;
            frozen.pause();
            state.set(frozen);
        })
    };

    let on_reset = {
        let state = state.clone();
        let run_token = run_token.clone();
        Callback::from(move |_: MouseEvent| {
            *run_token.borrow_mut() += 1;
            let mut cleared = *state;
            cleared.reset();
            state.set(cleared);
        })
    };

    let select_device = |target: Device| {
        let device = device.clone();
        Callback::from(move |_: MouseEvent| device.set(target))
    };

    let seq = *state;
    let current = seq.step();

    html! {
        <section class="demo-section" id="demo-player">
            <style>
                {r#"
                    .demo-section {
                        padding: 80px 24px;
                        background: linear-gradient(135deg, #111827, rgba(74, 144, 226, 0.12) 50%, #111827);
                    }
                    .demo-inner { max-width: 1200px; margin: 0 auto; }
                    .demo-heading {
                        text-align: center;
                        margin-bottom: 48px;
                    }
                    .demo-heading h2 {
                        font-size: clamp(2rem, 4vw, 3rem);
                        font-weight: 600;
                        margin-bottom: 16px;
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .demo-heading p { font-size: 1.15rem; color: #9ca3af; max-width: 640px; margin: 0 auto 32px; }
                    .device-selector { display: flex; justify-content: center; gap: 16px; }
                    .device-button {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        padding: 8px 16px;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        color: #9ca3af;
                        font-size: 0.85rem;
                        transition: all 0.3s ease;
                    }
                    .device-button:hover { background: rgba(255, 255, 255, 0.2); }
                    .device-button.selected {
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        color: white;
                    }
                    .demo-columns { display: flex; gap: 48px; align-items: flex-start; }
                    @media (max-width: 950px) { .demo-columns { flex-direction: column; align-items: center; } }
                    .demo-stage { flex: 1; display: flex; justify-content: center; width: 100%; }
                    .demo-frame {
                        background: linear-gradient(135deg, #ffffff, #f9fafb);
                        border: 2px solid #e5e7eb;
                        border-radius: 16px;
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.3);
                        overflow: hidden;
                        width: 100%;
                    }
                    .demo-frame-desktop { max-width: 720px; aspect-ratio: 16 / 9; }
                    .demo-frame-tablet { max-width: 480px; aspect-ratio: 4 / 3; }
                    .demo-frame-mobile { max-width: 280px; aspect-ratio: 9 / 16; }
                    .browser-chrome {
                        height: 32px;
                        background: #f3f4f6;
                        border-bottom: 1px solid #e5e7eb;
                        display: flex;
                        align-items: center;
                        padding: 0 16px;
                        gap: 8px;
                    }
                    .browser-dot { width: 12px; height: 12px; border-radius: 50%; }
                    .browser-url {
                        flex: 1;
                        text-align: center;
                        font-size: 0.7rem;
                        color: #6b7280;
                    }
                    .browser-url span {
                        background: white;
                        border-radius: 4px;
                        padding: 2px 12px;
                    }
                    .demo-canvas {
                        height: calc(100% - 32px);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 32px;
                        text-align: center;
                        background: linear-gradient(135deg, rgba(74, 144, 226, 0.05), rgba(245, 166, 35, 0.05));
                    }
                    .demo-frame-tablet .demo-canvas, .demo-frame-mobile .demo-canvas { height: 100%; }
                    .step-orb {
                        width: 96px;
                        height: 96px;
                        margin-bottom: 24px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: white;
                        font-size: 1.8rem;
                        animation: orb-in 0.5s ease-out;
                    }
                    @keyframes orb-in {
                        from { transform: scale(0.8); opacity: 0; }
                        to { transform: scale(1); opacity: 1; }
                    }
                    .demo-canvas h3 { font-size: 1.4rem; font-weight: 600; color: #1f2937; margin-bottom: 12px; }
                    .demo-canvas p { color: #6b7280; margin-bottom: 24px; }
                    .progress-track {
                        width: 100%;
                        max-width: 320px;
                        height: 8px;
                        border-radius: 9999px;
                        background: #e5e7eb;
                        overflow: hidden;
                    }
                    .progress-fill {
                        height: 100%;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                    }
                    .idle-orb {
                        width: 128px;
                        height: 128px;
                        margin-bottom: 24px;
                        border-radius: 50%;
                        background: linear-gradient(135deg, rgba(74, 144, 226, 0.2), rgba(245, 166, 35, 0.2));
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.5rem;
                    }
                    .demo-side { flex: 1; max-width: 420px; width: 100%; }
                    .demo-controls { display: flex; gap: 12px; margin-bottom: 32px; }
                    .control-button {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        padding: 10px 24px;
                        border-radius: 8px;
                        border: none;
                        font-size: 0.95rem;
                        background: linear-gradient(90deg, #4A90E2, #F5A623);
                        color: white;
                        transition: opacity 0.3s ease;
                    }
                    .control-button:hover { opacity: 0.9; }
                    .control-button.outline {
                        background: transparent;
                        border: 1px solid #4A90E2;
                        color: #4A90E2;
                    }
                    .control-button.outline:hover { background: #4A90E2; color: white; }
                    .walkthrough-title { font-size: 1.15rem; font-weight: 600; color: #e5e7eb; margin-bottom: 16px; }
                    .walkthrough-step {
                        display: flex;
                        align-items: flex-start;
                        gap: 12px;
                        padding: 12px;
                        border-radius: 8px;
                        border: 1px solid transparent;
                        transition: all 0.3s ease;
                        margin-bottom: 8px;
                    }
                    .walkthrough-step.active {
                        background: linear-gradient(90deg, rgba(74, 144, 226, 0.12), rgba(245, 166, 35, 0.12));
                        border-color: rgba(74, 144, 226, 0.3);
                    }
                    .step-marker {
                        flex-shrink: 0;
                        width: 32px;
                        height: 32px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.85rem;
                        background: #374151;
                        color: #9ca3af;
                        transition: all 0.3s ease;
                    }
                    .step-marker.done { background: #4ade80; color: white; }
                    .step-marker.active { color: white; }
                    .walkthrough-step h5 { font-size: 0.9rem; color: #e5e7eb; margin-bottom: 4px; }
                    .walkthrough-step p { font-size: 0.78rem; color: #9ca3af; }
                    .demo-highlights {
                        margin-top: 32px;
                        padding: 24px;
                        border-radius: 16px;
                        background: linear-gradient(135deg, rgba(74, 144, 226, 0.08), rgba(245, 166, 35, 0.08));
                        border: 1px solid rgba(74, 144, 226, 0.15);
                    }
                    .demo-highlights h5 { font-size: 0.9rem; color: #e5e7eb; margin-bottom: 12px; }
                    .demo-highlights li {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        font-size: 0.85rem;
                        color: #9ca3af;
                        margin-bottom: 8px;
                        list-style: none;
                    }
                    .highlight-dot { width: 8px; height: 8px; border-radius: 50%; flex-shrink: 0; }
                "#}
            </style>
            <div class="demo-inner">
                <div class="demo-heading">
                    <h2>{"See EduAdvisor in Action"}</h2>
                    <p>{"Watch how our platform guides students through their career discovery journey"}</p>
                    <div class="device-selector">
                        {
                            Device::ALL.iter().map(|d| {
                                let selected = *device == *d;
                                html! {
                                    <button
                                        class={classes!("device-button", selected.then_some("selected"))}
                                        onclick={select_device(*d)}
                                    >
                                        <span>{d.icon()}</span>
                                        <span>{d.label()}</span>
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="demo-columns">
                    <div class="demo-stage">
                        <div class={device.frame_class()}>
                            {
                                if *device == Device::Desktop {
                                    html! {
                                        <div class="browser-chrome">
                                            <div class="browser-dot" style="background: #f87171;"></div>
                                            <div class="browser-dot" style="background: #facc15;"></div>
                                            <div class="browser-dot" style="background: #4ade80;"></div>
                                            <div class="browser-url"><span>{"eduadvisor.com/dashboard"}</span></div>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                            <div class="demo-canvas">
                                {
                                    if seq.playing {
                                        html! {
                                            <>
                                                <div
                                                    key={current.id}
                                                    class="step-orb"
                                                    style={format!("background: {};", current.color)}
                                                >
                                                    {seq.current_step + 1}
                                                </div>
                                                <h3>{current.title}</h3>
                                                <p>{current.description}</p>
                                                <div class="progress-track">
                                                    <div
                                                        class="progress-fill"
                                                        style={format!("width: {}%;", seq.progress)}
                                                    ></div>
                                                </div>
                                            </>
                                        }
                                    } else {
                                        html! {
                                            <>
                                                <div class="idle-orb">{"▶"}</div>
                                                <h3>{"Interactive Demo"}</h3>
                                                <p>{"Experience how EduAdvisor creates your personalized career journey"}</p>
                                                {
                                                    if seq.finished() {
                                                        html! {
                                                            <div class="progress-track">
                                                                <div class="progress-fill" style="width: 100%;"></div>
                                                            </div>
                                                        }
                                                    } else {
                                                        html! {}
                                                    }
                                                }
                                            </>
                                        }
                                    }
                                }
                            </div>
                        </div>
                    </div>

                    <div class="demo-side">
                        <div class="demo-controls">
                            {
                                if seq.playing {
                                    html! {
                                        <button class="control-button" onclick={on_pause}>
                                            {"⏸ Pause"}
                                        </button>
                                    }
                                } else {
                                    html! {
                                        <button class="control-button" onclick={on_start}>
                                            {"▶ Start Demo"}
                                        </button>
                                    }
                                }
                            }
                            <button class="control-button outline" onclick={on_reset}>
                                {"↺ Reset"}
                            </button>
                        </div>

                        <h4 class="walkthrough-title">{"Demo Walkthrough"}</h4>
                        {
                            DEMO_STEPS.iter().enumerate().map(|(index, step)| {
                                let active = seq.playing && seq.current_step == index;
                                let done = seq.current_step > index
                                    || (seq.finished() && index == DEMO_STEPS.len() - 1);
                                let marker_style = active
                                    .then(|| format!("background: {};", step.color));
                                html! {
                                    <div class={classes!("walkthrough-step", active.then_some("active"))}>
                                        <div
                                            class={classes!(
                                                "step-marker",
                                                active.then_some("active"),
                                                done.then_some("done")
                                            )}
                                            style={marker_style}
                                        >
                                            { if done { html!{"✓"} } else { html!{ {index + 1} } } }
                                        </div>
                                        <div>
                                            <h5>{step.title}</h5>
                                            <p>{step.description}</p>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()
                        }

                        <div class="demo-highlights">
                            <h5>{"What makes us different?"}</h5>
                            <ul>
                                <li><span class="highlight-dot" style="background: #4A90E2;"></span>{"AI-powered career matching"}</li>
                                <li><span class="highlight-dot" style="background: #F5A623;"></span>{"Real-time progress tracking"}</li>
                                <li><span class="highlight-dot" style="background: #22c55e;"></span>{"Expert mentor guidance"}</li>
                                <li><span class="highlight-dot" style="background: #a855f7;"></span>{"College admission support"}</li>
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
