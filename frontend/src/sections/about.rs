use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{sections, BadgeStat, ABOUT_BADGES, ABOUT_STATS};
use crate::hooks::use_reveal;

const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1573497019940-1c28c88b4f3e?w=800&q=80&auto=format&fit=crop";

#[derive(Properties, PartialEq)]
struct StatItemProps {
    stat: BadgeStat,
}

#[function_component(StatItem)]
fn stat_item(props: &StatItemProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), "0px");

    html! {
        <div ref={node} class={classes!("stat-item", "reveal", "fade-up", revealed.then(|| "revealed"))}>
            <div class="stat-icon">
                <Icon kind={props.stat.icon} />
            </div>
            <div class="stat-value">{ props.stat.value }</div>
            <div class="stat-label">{ props.stat.label }</div>
        </div>
    }
}

#[function_component(PatternDivider)]
fn pattern_divider() -> Html {
    html! {
        <div class="pattern-divider">
            <div class="divider-line left"></div>
            <svg viewBox="0 0 40 40" width="32" height="32">
                <path d="M20 0 L40 20 L20 40 L0 20 Z" fill="none" stroke="currentColor" stroke-width="1.5" />
                <circle cx="20" cy="20" r="6" fill="none" stroke="currentColor" stroke-width="1.5" />
            </svg>
            <div class="divider-line right"></div>
        </div>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), "-100px");
    let revealed_class = revealed.then(|| "revealed");

    html! {
        <section id={sections::ABOUT} class="about">
            <svg class="about-kente" viewBox="0 0 200 200" aria-hidden="true">
                <pattern id="kente" patternUnits="userSpaceOnUse" width="40" height="40">
                    <rect width="20" height="20" fill="#C9A96E" />
                    <rect x="20" y="20" width="20" height="20" fill="#C9A96E" />
                </pattern>
                <circle cx="100" cy="100" r="100" fill="url(#kente)" />
            </svg>

            <div ref={node} class="container about-grid">
                <div class={classes!("about-image-column", "reveal", "from-left", revealed_class)}>
                    <div class="about-image-frame">
                        <img src={ABOUT_IMAGE} alt="Professional African lawyer in modern office" loading="lazy" />
                        <div class="about-stats">
                            { for ABOUT_STATS.iter().map(|stat| html! {
                                <StatItem key={stat.label} stat={stat.clone()} />
                            }) }
                        </div>
                    </div>
                    <div class="about-deco outline"></div>
                    <div class="about-deco block"></div>
                </div>

                <div class={classes!("about-copy", "reveal", "from-right", revealed_class)} style="transition-delay: 200ms;">
                    <div class="about-eyebrow">
                        <Icon kind={IconKind::Globe} size={20} />
                        <span>{"About Our Firm"}</span>
                    </div>

                    <h2>
                        {"Your Trusted Legal"}
                        <br />
                        <span class="gold">{"Partner in Africa"}</span>
                    </h2>

                    <PatternDivider />

                    <div class="about-text">
                        <p>
                            {"For over two decades, "}<strong>{"Adinkra & Associates"}</strong>
                            {" has stood at the forefront of legal excellence across the African continent. Founded with a vision to provide world-class legal services rooted in African values, we have grown to become one of the most respected law firms serving clients from Lagos to Nairobi, Accra to Johannesburg."}
                        </p>
                        <p>
                            {"Our pan-African approach combines deep local knowledge with international best practices. We understand the unique legal landscapes of different African nations and navigate them with precision and cultural sensitivity. Our team of distinguished lawyers brings together diverse expertise spanning commercial law, family matters, real estate, and complex litigation."}
                        </p>
                        <p>
                            {"What sets us apart is our unwavering commitment to justice and client success. We believe in building lasting relationships based on trust, transparency, and results. Every case we take on receives the dedicated attention of our experienced legal professionals who treat your matters as their own."}
                        </p>
                        <p>
                            {"As Africa continues to rise on the global stage, we are proud to be the legal partners of choice for individuals, families, and businesses shaping the continent's future."}
                        </p>
                    </div>

                    <div class="trust-badges">
                        { for ABOUT_BADGES.iter().map(|badge| html! {
                            <div key={*badge} class="trust-badge">
                                <span class="green-dot"></span>
                                <span>{ *badge }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .about {
                        padding: 6rem 0;
                        background: #fff;
                        position: relative;
                        overflow: hidden;
                    }
                    .about-kente {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 24rem;
                        height: 24rem;
                        opacity: 0.05;
                    }
                    .about-grid {
                        display: grid;
                        gap: 4rem;
                        align-items: center;
                    }
                    @media (min-width: 1024px) {
                        .about-grid { grid-template-columns: 1fr 1fr; }
                    }
                    .about-image-column {
                        position: relative;
                    }
                    .about-image-frame {
                        position: relative;
                        z-index: 1;
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .about-image-frame img {
                        width: 100%;
                        height: 500px;
                        object-fit: cover;
                        display: block;
                    }
                    .about-stats {
                        position: absolute;
                        bottom: 1.5rem;
                        left: 1.5rem;
                        right: 1.5rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(4px);
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                    }
                    .stat-item { text-align: center; }
                    .stat-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: rgba(201, 169, 110, 0.1);
                        color: #C9A96E;
                        margin-bottom: 0.75rem;
                    }
                    .stat-value {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #001F3F;
                    }
                    .stat-label {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .about-deco {
                        position: absolute;
                        border-radius: 1rem;
                        z-index: 0;
                    }
                    .about-deco.outline {
                        top: -1.5rem;
                        left: -1.5rem;
                        width: 8rem;
                        height: 8rem;
                        border: 2px solid #C9A96E;
                    }
                    .about-deco.block {
                        bottom: -1.5rem;
                        right: -1.5rem;
                        width: 12rem;
                        height: 12rem;
                        background: rgba(0, 31, 63, 0.05);
                    }
                    .about-eyebrow {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #C9A96E;
                        font-weight: 500;
                        font-size: 0.875rem;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                        margin-bottom: 1rem;
                    }
                    .about-copy h2 {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                        font-weight: 700;
                        color: #001F3F;
                        line-height: 1.2;
                        margin-bottom: 1.5rem;
                    }
                    .pattern-divider {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        margin: 1.5rem 0;
                        color: #C9A96E;
                    }
                    .divider-line {
                        height: 1px;
                        width: 4rem;
                    }
                    .divider-line.left { background: linear-gradient(90deg, transparent, #C9A96E); }
                    .divider-line.right { background: linear-gradient(270deg, transparent, #C9A96E); }
                    .about-text p {
                        color: #4b5563;
                        line-height: 1.7;
                        margin-bottom: 1rem;
                    }
                    .about-text strong { color: #001F3F; }
                    .trust-badges {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .trust-badge {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        background: rgba(0, 31, 63, 0.05);
                        border-radius: 999px;
                        font-size: 0.875rem;
                        color: #001F3F;
                    }
                    .green-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #2E7D32;
                    }
                "#}
            </style>
        </section>
    }
}
