use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::image::{AvatarPalette, FallbackImage};
use crate::components::section_header::SectionHeader;
use crate::content::{sections, TeamMember, TEAM};
use crate::hooks::{use_reveal, REVEAL_MARGIN};

#[derive(Properties, PartialEq)]
struct TeamCardProps {
    member: TeamMember,
    index: usize,
}

#[function_component(TeamCard)]
fn team_card(props: &TeamCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), REVEAL_MARGIN);
    let member = &props.member;

    html! {
        <div
            ref={node}
            class={classes!("team-card", "reveal", "fade-up", revealed.then(|| "revealed"))}
            style={format!("transition-delay: {}ms;", props.index * 150)}
        >
            <div class="team-photo">
                <FallbackImage
                    src={member.image}
                    alt={member.name}
                    name={member.name}
                    palette={AvatarPalette::TEAM}
                />
                <div class="team-photo-shade"></div>
                <div class="team-socials">
                    <a href={member.linkedin} class="team-social" aria-label={format!("{} on LinkedIn", member.name)}>
                        <Icon kind={IconKind::Linkedin} size={18} />
                    </a>
                    <a href={format!("mailto:{}", member.email())} class="team-social" aria-label={format!("Email {}", member.name)}>
                        <Icon kind={IconKind::Mail} size={18} />
                    </a>
                </div>
                <span class="team-badge">{ member.specialization }</span>
            </div>
            <div class="team-info">
                <h3>{ member.name }</h3>
                <p class="team-title">{ member.title }</p>
                <p class="team-bio">{ member.bio }</p>
            </div>
        </div>
    }
}

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    html! {
        <section id={sections::TEAM} class="team">
            <div class="container">
                <SectionHeader
                    eyebrow="Our Team"
                    title="Meet Our Legal"
                    highlight={AttrValue::from("Experts")}
                    description="Distinguished lawyers with decades of combined experience, bringing world-class expertise and deep African insight to every case."
                />

                <div class="team-grid">
                    { for TEAM.iter().enumerate().map(|(index, member)| html! {
                        <TeamCard key={member.name} member={member.clone()} {index} />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .team {
                        padding: 6rem 0;
                        background: #fff;
                    }
                    .team-grid {
                        display: grid;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .team-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .team-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    .team-card {
                        background: #fff;
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
                        transition: box-shadow 0.5s ease, opacity 0.5s ease, transform 0.5s ease;
                    }
                    .team-card:hover { box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15); }
                    .team-photo {
                        position: relative;
                        height: 20rem;
                        overflow: hidden;
                    }
                    .team-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s ease;
                    }
                    .team-card:hover .team-photo img { transform: scale(1.1); }
                    .team-photo-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(0deg, rgba(0, 31, 63, 0.9), rgba(0, 31, 63, 0.2), transparent);
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }
                    .team-card:hover .team-photo-shade { opacity: 1; }
                    .team-socials {
                        position: absolute;
                        bottom: 1rem;
                        left: 0;
                        right: 0;
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                        opacity: 0;
                        transform: translateY(1rem);
                        transition: all 0.5s ease;
                    }
                    .team-card:hover .team-socials {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .team-social {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: #fff;
                        color: #001F3F;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: background 0.3s ease;
                    }
                    .team-social:hover { background: #C9A96E; }
                    .team-badge {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        background: rgba(201, 169, 110, 0.9);
                        color: #001F3F;
                        font-size: 0.75rem;
                        font-weight: 500;
                    }
                    .team-info { padding: 1.5rem; }
                    .team-info h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #001F3F;
                        margin-bottom: 0.25rem;
                        transition: color 0.3s ease;
                    }
                    .team-card:hover .team-info h3 { color: #C9A96E; }
                    .team-title {
                        color: #C9A96E;
                        font-weight: 500;
                        margin-bottom: 0.75rem;
                    }
                    .team-bio {
                        color: #4b5563;
                        font-size: 0.875rem;
                        line-height: 1.7;
                    }
                "#}
            </style>
        </section>
    }
}
