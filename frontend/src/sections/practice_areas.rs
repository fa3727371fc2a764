use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::section_header::SectionHeader;
use crate::content::{sections, PracticeArea, PRACTICE_AREAS};
use crate::hooks::{use_reveal, REVEAL_MARGIN};

#[derive(Properties, PartialEq)]
struct PracticeCardProps {
    area: PracticeArea,
    index: usize,
}

#[function_component(PracticeCard)]
fn practice_card(props: &PracticeCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), REVEAL_MARGIN);
    let area = &props.area;

    html! {
        <div
            ref={node}
            class={classes!("practice-card", "reveal", "fade-up", revealed.then(|| "revealed"))}
            style={format!("transition-delay: {}ms;", props.index * 100)}
        >
            <div class="practice-card-hover"></div>
            <div class="practice-card-body">
                // 15 is the hex alpha suffix (~8%) for the accent tint
                <div class="practice-icon" style={format!("background-color: {}15;", area.accent)}>
                    <Icon kind={area.icon} size={28} color={area.accent} />
                </div>
                <h3>{ area.title }</h3>
                <p>{ area.description }</p>
                <div class="practice-more">
                    <span>{"Learn More"}</span>
                    <Icon kind={IconKind::ArrowRight} size={16} />
                </div>
            </div>
            <div class="practice-corner"></div>
        </div>
    }
}

#[function_component(PracticeAreasSection)]
pub fn practice_areas_section() -> Html {
    html! {
        <section id={sections::PRACTICE} class="practice">
            <svg class="practice-grid-bg" aria-hidden="true">
                <pattern id="grid" width="60" height="60" patternUnits="userSpaceOnUse">
                    <path d="M 60 0 L 0 0 0 60" fill="none" stroke="#001F3F" stroke-width="1" />
                </pattern>
                <rect width="100%" height="100%" fill="url(#grid)" />
            </svg>

            <div class="container">
                <SectionHeader
                    eyebrow="What We Do"
                    title="Our Practice Areas"
                    description="Comprehensive legal expertise across key practice areas, serving clients throughout Africa with dedication and excellence."
                >
                    <div class="dot-divider">
                        <span class="line"></span>
                        <span class="dot"></span>
                        <span class="line"></span>
                    </div>
                </SectionHeader>

                <div class="practice-grid">
                    { for PRACTICE_AREAS.iter().enumerate().map(|(index, area)| html! {
                        <PracticeCard key={area.title} area={area.clone()} {index} />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .practice {
                        padding: 6rem 0;
                        background: #f9fafb;
                        position: relative;
                        overflow: hidden;
                    }
                    .practice-grid-bg {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        opacity: 0.05;
                    }
                    .dot-divider {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 2rem;
                    }
                    .dot-divider .line {
                        height: 1px;
                        width: 3rem;
                        background: #C9A96E;
                    }
                    .dot-divider .dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #C9A96E;
                    }
                    .practice-grid {
                        display: grid;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .practice-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .practice-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .practice-card {
                        position: relative;
                        height: 100%;
                        background: #fff;
                        border-radius: 1rem;
                        padding: 2rem;
                        border: 1px solid #f3f4f6;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        overflow: hidden;
                        transition: box-shadow 0.5s ease, opacity 0.5s ease, transform 0.5s ease;
                    }
                    .practice-card:hover {
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    }
                    .practice-card-hover {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, #001F3F, #003366);
                        border: 2px solid #C9A96E;
                        border-radius: 1rem;
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }
                    .practice-card:hover .practice-card-hover { opacity: 1; }
                    .practice-card-body {
                        position: relative;
                        z-index: 1;
                    }
                    .practice-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 0.75rem;
                        margin-bottom: 1.5rem;
                    }
                    .practice-card:hover .practice-icon svg { color: #C9A96E !important; }
                    .practice-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #001F3F;
                        margin-bottom: 1rem;
                        transition: color 0.5s ease;
                    }
                    .practice-card p {
                        color: #4b5563;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                        transition: color 0.5s ease;
                    }
                    .practice-card:hover h3 { color: #fff; }
                    .practice-card:hover p { color: #d1d5db; }
                    .practice-more {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #C9A96E;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .practice-more svg { transition: transform 0.3s ease; }
                    .practice-more:hover svg { transform: translateX(4px); }
                    .practice-corner {
                        position: absolute;
                        bottom: -2rem;
                        right: -2rem;
                        width: 6rem;
                        height: 6rem;
                        border-radius: 50%;
                        border: 1px solid rgba(201, 169, 110, 0.2);
                    }
                "#}
            </style>
        </section>
    }
}
