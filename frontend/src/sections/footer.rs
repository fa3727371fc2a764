use chrono::{Datelike, Utc};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::content::{sections, FOOTER_LEGAL_LINKS, FOOTER_QUICK_LINKS, OFFICE_CITIES, SOCIAL_LINKS};
use crate::hooks::{scroll_to_section, scroll_to_top};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    let link_to = |section: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(section);
        })
    };

    let back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="site-footer">
            <div class="footer-gold-line"></div>

            <div class="container footer-grid">
                <div class="footer-brand">
                    <a href={format!("#{}", sections::HERO)} class="footer-logo" onclick={link_to(sections::HERO)}>
                        <span class="logo-mark">
                            <Icon kind={IconKind::Scale} />
                        </span>
                        <span>
                            <span class="logo-name">{"Adinkra"}</span>
                            <span class="logo-sub">{"& Associates"}</span>
                        </span>
                    </a>
                    <p>
                        {"Pan-African legal excellence. Protecting your rights and interests across the continent with integrity, expertise, and dedication."}
                    </p>
                    <div class="social-row">
                        { for SOCIAL_LINKS.iter().map(|(icon, label)| html! {
                            <a key={*label} href="#" class="social-link" aria-label={*label}>
                                <Icon kind={*icon} size={18} />
                            </a>
                        }) }
                    </div>
                </div>

                <div class="footer-column">
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for FOOTER_QUICK_LINKS.iter().map(|link| html! {
                            <li key={link.label}>
                                <a href={format!("#{}", link.section)} onclick={link_to(link.section)}>
                                    { link.label }
                                </a>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"Legal"}</h4>
                    <ul>
                        { for FOOTER_LEGAL_LINKS.iter().map(|label| html! {
                            <li key={*label}><a href="#">{ *label }</a></li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"Contact"}</h4>
                    <ul class="footer-contact">
                        <li>
                            <Icon kind={IconKind::MapPin} size={18} />
                            <span>{"Victoria Island, Lagos, Nigeria"}</span>
                        </li>
                        <li>
                            <Icon kind={IconKind::Phone} size={18} />
                            <a href={format!("tel:{}", config::FIRM_PHONE_TEL)}>{ config::FIRM_PHONE_DISPLAY }</a>
                        </li>
                        <li>
                            <Icon kind={IconKind::Mail} size={18} />
                            <a href={format!("mailto:info@{}", config::FIRM_EMAIL_DOMAIN)}>
                                { format!("info@{}", config::FIRM_EMAIL_DOMAIN) }
                            </a>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="container footer-bottom-row">
                    <p>{ format!("© {} {}. All rights reserved.", year, config::FIRM_NAME) }</p>
                    <p class="office-cities">{ OFFICE_CITIES.join(" • ") }</p>
                </div>
            </div>

            <button class="back-to-top" aria-label="Back to top" onclick={back_to_top}>
                <Icon kind={IconKind::ArrowUp} size={20} />
            </button>

            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        background: #001F3F;
                        color: #fff;
                        padding-top: 4rem;
                    }
                    .footer-gold-line {
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 4px;
                        background: linear-gradient(90deg, transparent, #C9A96E, transparent);
                    }
                    .footer-grid {
                        display: grid;
                        gap: 3rem;
                        padding-bottom: 3rem;
                    }
                    @media (min-width: 768px) {
                        .footer-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .footer-grid { grid-template-columns: 2fr 1fr 1fr 1.5fr; }
                    }
                    .footer-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                        margin-bottom: 1.5rem;
                    }
                    .footer-logo .logo-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        background: #C9A96E;
                        color: #001F3F;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .footer-logo .logo-name {
                        display: block;
                        font-weight: 700;
                        font-size: 1.125rem;
                        color: #fff;
                    }
                    .footer-logo .logo-sub {
                        display: block;
                        font-size: 0.875rem;
                        color: #C9A96E;
                    }
                    .footer-brand p {
                        color: #9ca3af;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }
                    .footer-column h4 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 1.5rem;
                    }
                    .footer-column ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .footer-column a {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .footer-column a:hover { color: #C9A96E; }
                    .footer-contact li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        color: #9ca3af;
                    }
                    .footer-contact svg {
                        flex-shrink: 0;
                        color: #C9A96E;
                    }
                    .footer-bottom {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 1.5rem 0;
                    }
                    .footer-bottom-row {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    @media (min-width: 768px) {
                        .footer-bottom-row { flex-direction: row; }
                    }
                    .back-to-top {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 40;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        border: none;
                        background: #C9A96E;
                        color: #001F3F;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                        transition: all 0.3s ease;
                    }
                    .back-to-top:hover {
                        background: #B8956B;
                        transform: translateY(-4px);
                    }
                "#}
            </style>
        </footer>
    }
}
