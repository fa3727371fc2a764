use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::icons::{Icon, IconKind};
use crate::components::section_header::SectionHeader;
use crate::content::{sections, Benefit, BENEFITS, STATS, TRUST_BADGES};
use crate::hooks::{use_reveal, REVEAL_MARGIN};

#[derive(Properties, PartialEq)]
struct BenefitCardProps {
    benefit: Benefit,
    index: usize,
}

#[function_component(BenefitCard)]
fn benefit_card(props: &BenefitCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), REVEAL_MARGIN);
    // Even cards slide in from the left, odd ones from the right.
    let side = if props.index % 2 == 0 { "from-left" } else { "from-right" };

    html! {
        <div
            ref={node}
            class={classes!("benefit-card", "reveal", side, revealed.then(|| "revealed"))}
            style={format!("transition-delay: {}ms;", props.index * 100)}
        >
            <div class="benefit-icon">
                <Icon kind={props.benefit.icon} size={28} />
            </div>
            <div>
                <h3>{ props.benefit.title }</h3>
                <p>{ props.benefit.description }</p>
            </div>
        </div>
    }
}

#[function_component(WhyChooseUsSection)]
pub fn why_choose_us_section() -> Html {
    let stats_node = use_node_ref();
    let stats_revealed = use_reveal(stats_node.clone(), "0px");
    let badges_node = use_node_ref();
    let badges_revealed = use_reveal(badges_node.clone(), "0px");

    html! {
        <section id={sections::WHY_US} class="why-us">
            <div class="why-us-bg" aria-hidden="true">
                <svg class="why-us-dots">
                    <defs>
                        <pattern id="dots" x="0" y="0" width="30" height="30" patternUnits="userSpaceOnUse">
                            <circle cx="2" cy="2" r="1" fill="#C9A96E" />
                        </pattern>
                    </defs>
                    <rect width="100%" height="100%" fill="url(#dots)" />
                </svg>
                <div class="orb gold"></div>
                <div class="orb green"></div>
            </div>

            <div class="container">
                <SectionHeader
                    eyebrow="Why Choose Us"
                    title="Why Clients Across Africa"
                    highlight={AttrValue::from("Choose Us")}
                    description="Our commitment to excellence, integrity, and client success has made us the trusted legal partner for thousands across the continent."
                    dark=true
                />

                <div ref={stats_node} class="stats-row">
                    { for STATS.iter().enumerate().map(|(i, stat)| html! {
                        <div
                            key={stat.label}
                            class={classes!("stat-card", "reveal", "fade-up", stats_revealed.then(|| "revealed"))}
                            style={format!("transition-delay: {}ms;", 200 + i * 100)}
                        >
                            <Counter value={stat.value} suffix={stat.suffix} />
                            <p>{ stat.label }</p>
                        </div>
                    }) }
                </div>

                <div class="benefits-grid">
                    { for BENEFITS.iter().enumerate().map(|(index, benefit)| html! {
                        <BenefitCard key={benefit.title} benefit={benefit.clone()} {index} />
                    }) }
                </div>

                <div
                    ref={badges_node}
                    class={classes!("trust-indicators", "reveal", "fade-up", badges_revealed.then(|| "revealed"))}
                    style="transition-delay: 800ms;"
                >
                    { for TRUST_BADGES.iter().map(|badge| html! {
                        <div key={*badge} class="trust-indicator">
                            <Icon kind={IconKind::CheckCircle} size={20} />
                            <span>{ *badge }</span>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .why-us {
                        padding: 6rem 0;
                        background: #001F3F;
                        position: relative;
                        overflow: hidden;
                    }
                    .why-us-bg {
                        position: absolute;
                        inset: 0;
                    }
                    .why-us-dots {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        opacity: 0.05;
                    }
                    .orb {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 50%;
                        filter: blur(64px);
                    }
                    .orb.gold { top: 0; left: 0; background: rgba(201, 169, 110, 0.1); }
                    .orb.green { bottom: 0; right: 0; background: rgba(46, 125, 50, 0.1); }
                    .why-us .container { position: relative; }
                    .stats-row {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                        margin-bottom: 5rem;
                    }
                    @media (min-width: 768px) {
                        .stats-row { grid-template-columns: repeat(4, 1fr); }
                    }
                    .stat-card {
                        text-align: center;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .stat-card:hover { border-color: rgba(201, 169, 110, 0.3); }
                    .stat-card p { color: #9ca3af; margin-top: 0.5rem; }
                    .counter-value {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                        font-weight: 700;
                        color: #C9A96E;
                    }
                    .benefits-grid {
                        display: grid;
                        gap: 2.5rem 4rem;
                    }
                    @media (min-width: 768px) {
                        .benefits-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    .benefit-card {
                        display: flex;
                        gap: 1.25rem;
                    }
                    .benefit-icon {
                        flex-shrink: 0;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 0.75rem;
                        background: rgba(201, 169, 110, 0.1);
                        color: #C9A96E;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: background 0.3s ease;
                    }
                    .benefit-card:hover .benefit-icon { background: rgba(201, 169, 110, 0.2); }
                    .benefit-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #fff;
                        margin-bottom: 0.5rem;
                        transition: color 0.3s ease;
                    }
                    .benefit-card:hover h3 { color: #C9A96E; }
                    .benefit-card p { color: #9ca3af; line-height: 1.7; }
                    .trust-indicators {
                        margin-top: 4rem;
                        padding-top: 4rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 2rem;
                    }
                    .trust-indicator {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #9ca3af;
                    }
                    .trust-indicator svg { color: #2E7D32; }
                "#}
            </style>
        </section>
    }
}
