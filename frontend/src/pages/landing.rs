use yew::prelude::*;

use crate::components::notification::ToastProvider;
use crate::hooks::use_smooth_scrolling;
use crate::sections::{
    about::AboutSection, contact::ContactSection, footer::Footer, hero::HeroSection,
    navbar::Navbar, practice_areas::PracticeAreasSection, team::TeamSection,
    testimonials::TestimonialsSection, why_choose_us::WhyChooseUsSection,
};

/// The whole site: fixed navbar, the seven sections in page order, footer
/// and the toast stack.
#[function_component(Landing)]
pub fn landing() -> Html {
    use_smooth_scrolling();

    html! {
        <ToastProvider>
            <div class="landing-page">
                <Navbar />
                <main>
                    <HeroSection />
                    <AboutSection />
                    <PracticeAreasSection />
                    <WhyChooseUsSection />
                    <TestimonialsSection />
                    <TeamSection />
                    <ContactSection />
                </main>
                <Footer />
            </div>

            <style>
                {r#"
                    *, *::before, *::after {
                        box-sizing: border-box;
                    }
                    body {
                        margin: 0;
                        font-family: 'Inter', system-ui, -apple-system, sans-serif;
                        color: #1f2937;
                        -webkit-font-smoothing: antialiased;
                    }
                    h1, h2, h3, h4, p {
                        margin: 0;
                    }
                    .landing-page {
                        overflow-x: hidden;
                    }
                    .container {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .gold {
                        color: #C9A96E;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .eyebrow {
                        display: inline-block;
                        color: #C9A96E;
                        font-weight: 500;
                        font-size: 0.875rem;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                        margin-bottom: 1rem;
                    }
                    .section-header h2 {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                        font-weight: 700;
                        color: #001F3F;
                        line-height: 1.2;
                        margin-bottom: 1.5rem;
                    }
                    .section-header p {
                        font-size: 1.125rem;
                        color: #4b5563;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .section-header.dark h2 { color: #fff; }
                    .section-header.dark p { color: #9ca3af; }

                    .reveal {
                        opacity: 0;
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .reveal.fade-up { transform: translateY(30px); }
                    .reveal.from-left { transform: translateX(-50px); }
                    .reveal.from-right { transform: translateX(50px); }
                    .reveal.revealed {
                        opacity: 1;
                        transform: none;
                    }

                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.4; }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .reveal {
                            opacity: 1;
                            transform: none;
                            transition: none;
                        }
                    }
                "#}
            </style>
        </ToastProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::content::{sections, TESTIMONIALS};
    use crate::sections::hero::{HEADLINE, HEADLINE_HIGHLIGHT, PRIMARY_CTA_TARGET};

    async fn render() -> String {
        yew::ServerRenderer::<Landing>::new()
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn hero_headline_is_rendered() {
        let html = render().await;
        assert!(html.contains(HEADLINE));
        assert!(HEADLINE_HIGHLIGHT.contains("Africa"));
        assert!(html.contains("for Africa"));
        assert!(html.contains("Schedule a Free Consultation"));
    }

    #[tokio::test]
    async fn every_section_is_present_in_order() {
        let html = render().await;
        let positions: Vec<usize> = sections::ALL
            .iter()
            .map(|id| {
                html.find(&format!("id=\"{}\"", id))
                    .unwrap_or_else(|| panic!("missing section #{}", id))
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[tokio::test]
    async fn consultation_links_target_contact_section() {
        let html = render().await;
        assert_eq!(PRIMARY_CTA_TARGET, sections::CONTACT);

        let class_at = html.find("class=\"hero-cta\"").expect("hero cta rendered");
        let start = html[..class_at].rfind("<a").expect("hero cta is an anchor");
        let end = class_at + html[class_at..].find('>').expect("anchor tag closes");
        let tag = &html[start..end];
        assert!(tag.contains("href=\"#contact\""), "hero cta tag: {}", tag);
        assert!(html.contains("id=\"contact\""));
    }

    #[tokio::test]
    async fn navbar_starts_unscrolled() {
        let html = render().await;
        assert!(html.contains("class=\"top-nav\""));
        assert!(!html.contains("top-nav scrolled"));
    }

    #[tokio::test]
    async fn carousel_starts_on_first_testimonials() {
        let html = render().await;
        for testimonial in &TESTIMONIALS[..3] {
            assert!(html.contains(testimonial.name), "missing {}", testimonial.name);
        }
    }

    #[tokio::test]
    async fn contact_form_starts_idle() {
        let html = render().await;
        assert!(html.contains("Request Consultation"));
        assert!(!html.contains("Sending..."));
    }
}
