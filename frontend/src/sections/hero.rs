use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::content::sections;
use crate::hooks::{scroll_to_section, use_scroll_y};

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1556157382-97ede2916cd3?w=1920&q=80&auto=format&fit=crop";

pub const HEADLINE: &str = "Expert Legal Solutions";
pub const HEADLINE_HIGHLIGHT: &str = "for Africa's Future";
/// Section the primary call-to-action scrolls to.
pub const PRIMARY_CTA_TARGET: &str = sections::CONTACT;

/// Decorative hexagon outlines drifting over the hero background.
/// (class, animation delay in seconds)
const FLOATING_SHAPES: &[(&str, f32)] = &[
    ("shape-a", 0.0),
    ("shape-b", 1.0),
    ("shape-c", 2.0),
    ("shape-d", 1.5),
];

fn scroll_link(section: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(section);
    })
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let scroll_y = use_scroll_y();
    let background_style = format!(
        "background-image: url('{}'); transform: translateY({}px);",
        HERO_IMAGE,
        scroll_y * config::HERO_PARALLAX_FACTOR
    );

    html! {
        <section id={sections::HERO} class="hero">
            <div class="hero-background" style={background_style}></div>
            <div class="hero-overlay"></div>
            <svg class="hero-pattern" aria-hidden="true">
                <pattern id="adinkra" patternUnits="userSpaceOnUse" width="30" height="30">
                    <circle cx="15" cy="15" r="10" fill="none" stroke="#C9A96E" stroke-width="0.5" />
                    <circle cx="15" cy="15" r="5" fill="none" stroke="#C9A96E" stroke-width="0.5" />
                    <line x1="15" y1="0" x2="15" y2="30" stroke="#C9A96E" stroke-width="0.3" />
                    <line x1="0" y1="15" x2="30" y2="15" stroke="#C9A96E" stroke-width="0.3" />
                </pattern>
                <rect width="100%" height="100%" fill="url(#adinkra)" />
            </svg>

            { for FLOATING_SHAPES.iter().map(|(class, delay)| html! {
                <div class={classes!("floating-shape", *class)} style={format!("animation-delay: {}s;", delay)}>
                    <svg viewBox="0 0 100 100">
                        <path d="M50 0 L100 25 L100 75 L50 100 L0 75 L0 25 Z" fill="none" stroke="#C9A96E" stroke-width="1" opacity="0.4" />
                    </svg>
                </div>
            }) }

            <div class="hero-content">
                <div class="hero-badge">
                    <span class="pulse-dot"></span>
                    <span>{"Pan-African Legal Excellence"}</span>
                </div>

                <h1>
                    { HEADLINE }
                    <br />
                    <span class="gold">{ HEADLINE_HIGHLIGHT }</span>
                </h1>

                <p class="hero-subtitle">
                    {"Trusted counsel in business law, family law, real estate, and dispute resolution across the continent. Protecting your rights with integrity and excellence."}
                </p>

                <div class="hero-cta-group">
                    <a href={format!("#{}", PRIMARY_CTA_TARGET)} class="hero-cta" onclick={scroll_link(PRIMARY_CTA_TARGET)}>
                        {"Schedule a Free Consultation"}
                    </a>
                    <a href={format!("#{}", sections::ABOUT)} class="hero-secondary" onclick={scroll_link(sections::ABOUT)}>
                        {"Learn More"}
                    </a>
                </div>
            </div>

            <a href={format!("#{}", sections::ABOUT)} class="scroll-indicator" onclick={scroll_link(sections::ABOUT)}>
                <span>{"Scroll"}</span>
                <Icon kind={IconKind::ChevronDown} />
            </a>

            <div class="hero-gold-line"></div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        background-repeat: no-repeat;
                        will-change: transform;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, rgba(0, 31, 63, 0.95), rgba(0, 31, 63, 0.85), rgba(0, 31, 63, 0.75));
                    }
                    .hero-pattern {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        opacity: 0.1;
                    }
                    .floating-shape {
                        position: absolute;
                        animation: float 6s ease-in-out infinite;
                        opacity: 0.3;
                    }
                    .floating-shape svg {
                        width: 100%;
                        height: 100%;
                    }
                    .shape-a { width: 8rem; height: 8rem; top: 5rem; left: 2.5rem; }
                    .shape-b { width: 6rem; height: 6rem; top: 10rem; right: 2.5rem; }
                    .shape-c { width: 5rem; height: 5rem; bottom: 8rem; left: 25%; }
                    .shape-d { width: 7rem; height: 7rem; bottom: 5rem; right: 5rem; display: none; }
                    @media (min-width: 768px) {
                        .shape-a { left: 5rem; }
                        .shape-b { right: 8rem; }
                        .shape-d { display: block; }
                    }
                    @keyframes float {
                        0%, 100% { opacity: 0.3; transform: translateY(0) rotate(0deg); }
                        50% { opacity: 0.6; transform: translateY(-20px) rotate(5deg); }
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        text-align: center;
                        animation: heroIn 0.8s ease-out;
                    }
                    @keyframes heroIn {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        border: 1px solid rgba(201, 169, 110, 0.3);
                        background: rgba(201, 169, 110, 0.1);
                        color: #C9A96E;
                        font-size: 0.875rem;
                        font-weight: 500;
                        letter-spacing: 0.025em;
                        margin-bottom: 2rem;
                    }
                    .pulse-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #C9A96E;
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        font-weight: 700;
                        color: #fff;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #d1d5db;
                        max-width: 48rem;
                        margin: 0 auto 2.5rem;
                        line-height: 1.7;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        justify-content: center;
                        align-items: center;
                    }
                    @media (min-width: 640px) {
                        .hero-cta-group { flex-direction: row; }
                    }
                    .hero-cta,
                    .hero-secondary {
                        padding: 1.25rem 2rem;
                        font-size: 1.125rem;
                        border-radius: 999px;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    .hero-cta {
                        background: #C9A96E;
                        color: #001F3F;
                        font-weight: 600;
                    }
                    .hero-cta:hover {
                        background: #B8956B;
                        box-shadow: 0 0 30px rgba(201, 169, 110, 0.4);
                        transform: scale(1.05);
                    }
                    .hero-secondary {
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        color: #fff;
                    }
                    .hero-secondary:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        color: rgba(255, 255, 255, 0.6);
                        text-decoration: none;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        animation: bob 2s infinite;
                    }
                    .scroll-indicator:hover { color: #fff; }
                    @keyframes bob {
                        0%, 100% { margin-bottom: 0; }
                        50% { margin-bottom: -10px; }
                    }
                    .hero-gold-line {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        height: 4px;
                        background: linear-gradient(90deg, transparent, #C9A96E, transparent);
                    }
                "#}
            </style>
        </section>
    }
}
