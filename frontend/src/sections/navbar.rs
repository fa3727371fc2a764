use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::content::{sections, NAV_LINKS};
use crate::hooks::{scroll_to_section, use_scroll_y};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let scroll_y = use_scroll_y();
    let is_scrolled = scroll_y > config::NAV_SCROLL_THRESHOLD;

    // Every nav target closes the mobile menu after scrolling.
    let go_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |section: &'static str| {
            scroll_to_section(section);
            menu_open.set(false);
        })
    };

    let link_to = |section: &'static str| {
        let go_to = go_to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            go_to.emit(section);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <>
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href={format!("#{}", sections::HERO)} class="nav-logo" onclick={link_to(sections::HERO)}>
                    <span class="logo-mark">
                        <Icon kind={IconKind::Scale} />
                    </span>
                    <span class="logo-text">
                        <span class="logo-name">{"Adinkra"}</span>
                        <span class="logo-sub">{"& Associates"}</span>
                    </span>
                </a>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={format!("#{}", link.section)} class="nav-link" onclick={link_to(link.section)}>
                            { link.label }
                        </a>
                    }) }
                </div>

                <div class="nav-actions">
                    <a href={format!("tel:{}", config::FIRM_PHONE_TEL)} class="nav-phone">
                        <Icon kind={IconKind::Phone} size={16} />
                        { config::FIRM_PHONE_DISPLAY }
                    </a>
                    <a href={format!("#{}", sections::CONTACT)} class="nav-cta" onclick={link_to(sections::CONTACT)}>
                        {"Free Consultation"}
                    </a>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <Icon kind={if *menu_open { IconKind::X } else { IconKind::Menu }} />
                </button>
            </div>
        </nav>

        if *menu_open {
            <div class="mobile-menu">
                <div class="mobile-backdrop" onclick={close_menu}></div>
                <div class="mobile-panel">
                    { for NAV_LINKS.iter().enumerate().map(|(i, link)| html! {
                        <a
                            key={link.label}
                            href={format!("#{}", link.section)}
                            class="mobile-link"
                            style={format!("animation-delay: {}ms;", i * 50)}
                            onclick={link_to(link.section)}
                        >
                            { link.label }
                        </a>
                    }) }
                    <a href={format!("#{}", sections::CONTACT)} class="nav-cta mobile-cta" onclick={link_to(sections::CONTACT)}>
                        {"Free Consultation"}
                    </a>
                </div>
            </div>
        }

        <style>
            {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                    animation: navDrop 0.5s ease-out;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 30px rgba(0, 31, 63, 0.12);
                }
                @keyframes navDrop {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                }
                .logo-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #C9A96E;
                    color: #001F3F;
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .top-nav.scrolled .logo-mark {
                    background: #001F3F;
                    color: #C9A96E;
                }
                .logo-name {
                    display: block;
                    font-weight: 700;
                    font-size: 1.125rem;
                    color: #fff;
                    transition: color 0.3s ease;
                }
                .logo-sub {
                    display: block;
                    margin-top: -0.25rem;
                    font-size: 0.875rem;
                    color: #C9A96E;
                }
                .nav-links {
                    display: none;
                    gap: 2rem;
                }
                .nav-link,
                .nav-phone {
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #C9A96E;
                }
                .top-nav.scrolled .logo-name,
                .top-nav.scrolled .nav-link,
                .top-nav.scrolled .nav-phone,
                .top-nav.scrolled .burger-menu {
                    color: #001F3F;
                }
                .nav-actions {
                    display: none;
                    align-items: center;
                    gap: 1rem;
                }
                .nav-phone {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .nav-cta {
                    background: #C9A96E;
                    color: #001F3F;
                    font-weight: 500;
                    padding: 0.6rem 1.5rem;
                    border-radius: 999px;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }
                .nav-cta:hover {
                    background: #B8956B;
                }
                .burger-menu {
                    background: none;
                    border: none;
                    color: #fff;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    animation: menuIn 0.2s ease-out;
                }
                .mobile-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(4px);
                }
                .mobile-panel {
                    position: absolute;
                    top: 5rem;
                    left: 1rem;
                    right: 1rem;
                    background: #fff;
                    border-radius: 1rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    padding: 1.5rem;
                }
                .mobile-link {
                    display: block;
                    padding: 0.75rem 0;
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #001F3F;
                    text-decoration: none;
                    border-bottom: 1px solid #f3f4f6;
                    animation: linkIn 0.3s ease-out both;
                }
                .mobile-link:hover {
                    color: #C9A96E;
                }
                .mobile-cta {
                    display: block;
                    margin-top: 1rem;
                    text-align: center;
                    padding: 1rem;
                }
                @keyframes menuIn {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes linkIn {
                    from { opacity: 0; transform: translateX(-20px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @media (min-width: 1024px) {
                    .nav-links,
                    .nav-actions {
                        display: flex;
                    }
                    .burger-menu,
                    .mobile-menu {
                        display: none;
                    }
                }
            "#}
        </style>
        </>
    }
}
