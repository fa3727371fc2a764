use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::carousel::{CarouselAction, CarouselState};
use crate::components::icons::{Icon, IconKind};
use crate::components::image::{AvatarPalette, FallbackImage};
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::content::{sections, Testimonial, TESTIMONIALS};

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
    #[prop_or_default]
    active: bool,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;

    html! {
        <div class={classes!("testimonial-card", props.active.then(|| "active"))}>
            <div class="quote-mark">
                <Icon kind={IconKind::Quote} size={24} />
            </div>
            <div class="stars" aria-label={format!("{} out of 5 stars", t.rating)}>
                { for (0..t.rating).map(|_| html! {
                    <Icon kind={IconKind::Star} size={20} filled=true />
                }) }
            </div>
            <p class="testimonial-quote">{ format!("\"{}\"", t.quote) }</p>
            <div class="testimonial-author">
                <FallbackImage
                    src={t.image}
                    alt={t.name}
                    name={t.name}
                    palette={AvatarPalette::TESTIMONIAL}
                    class={classes!("author-photo")}
                />
                <div>
                    <h4>{ t.name }</h4>
                    <p class="author-company">{ t.company }</p>
                    <p class="author-location">{ t.location }</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let carousel = use_reducer(|| CarouselState::new(TESTIMONIALS.len()));

    {
        let carousel = carousel.clone();
        // An interval of 0 stops the timer while the region is hovered.
        let period = if carousel.is_paused() { 0 } else { config::CAROUSEL_INTERVAL_MS };
        use_interval(move || carousel.dispatch(CarouselAction::Tick), period);
    }

    let send = |action: CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action))
    };

    let wide = carousel.window(TESTIMONIALS, config::CAROUSEL_WIDE_WINDOW);
    let current = &TESTIMONIALS[carousel.index()];

    html! {
        <section id={sections::TESTIMONIALS} class="testimonials">
            <div class="testimonials-bg" aria-hidden="true">
                <div class="blob gold"></div>
                <div class="blob navy"></div>
            </div>

            <div class="container">
                <SectionHeader
                    eyebrow="Client Testimonials"
                    title="What Our Clients Say"
                    description="Hear from businesses and individuals across Africa who have trusted us with their most important legal matters."
                />

                <div
                    class="carousel"
                    onmouseenter={send(CarouselAction::Pause)}
                    onmouseleave={send(CarouselAction::Resume)}
                >
                    <div class="carousel-wide">
                        { for wide.into_iter().enumerate().map(|(slot, t)| html! {
                            <TestimonialCard key={t.id} testimonial={t.clone()} active={slot == 1} />
                        }) }
                    </div>

                    <div class="carousel-narrow">
                        <TestimonialCard key={current.id} testimonial={current.clone()} active=true />
                    </div>

                    <div class="carousel-controls">
                        <button class="carousel-arrow" aria-label="Previous testimonial" onclick={send(CarouselAction::Prev)}>
                            <Icon kind={IconKind::ChevronLeft} />
                        </button>

                        <div class="carousel-dots">
                            { for (0..TESTIMONIALS.len()).map(|i| html! {
                                <button
                                    key={i}
                                    class={classes!("carousel-dot", (i == carousel.index()).then(|| "active"))}
                                    aria-label={format!("Go to testimonial {}", i + 1)}
                                    onclick={send(CarouselAction::Select(i))}
                                />
                            }) }
                        </div>

                        <button class="carousel-arrow" aria-label="Next testimonial" onclick={send(CarouselAction::Next)}>
                            <Icon kind={IconKind::ChevronRight} />
                        </button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .testimonials {
                        padding: 6rem 0;
                        background: linear-gradient(180deg, #fff, #f9fafb);
                        position: relative;
                        overflow: hidden;
                    }
                    .testimonials-bg {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }
                    .blob {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(64px);
                    }
                    .blob.gold {
                        top: 5rem;
                        left: 2.5rem;
                        width: 16rem;
                        height: 16rem;
                        background: rgba(201, 169, 110, 0.05);
                    }
                    .blob.navy {
                        bottom: 5rem;
                        right: 2.5rem;
                        width: 20rem;
                        height: 20rem;
                        background: rgba(0, 31, 63, 0.05);
                    }
                    .testimonials .container { position: relative; }
                    .carousel-wide {
                        display: none;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .carousel-narrow { display: block; }
                    @media (min-width: 1024px) {
                        .carousel-wide { display: grid; }
                        .carousel-narrow { display: none; }
                    }
                    .testimonial-card {
                        position: relative;
                        height: 100%;
                        background: #fff;
                        border-radius: 1rem;
                        padding: 2rem;
                        border: 1px solid #f3f4f6;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
                        animation: cardIn 0.5s ease-out;
                        transition: transform 0.5s ease, box-shadow 0.5s ease;
                    }
                    .carousel-wide .testimonial-card.active {
                        transform: scale(1.05);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                        border-color: rgba(201, 169, 110, 0.3);
                    }
                    @keyframes cardIn {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .quote-mark {
                        position: absolute;
                        top: -1rem;
                        left: 2rem;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: #C9A96E;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .stars {
                        display: flex;
                        gap: 0.25rem;
                        margin: 1rem 0 1.5rem;
                        color: #C9A96E;
                    }
                    .testimonial-quote {
                        color: #4b5563;
                        line-height: 1.7;
                        margin-bottom: 2rem;
                        font-style: italic;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .author-photo {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        object-fit: cover;
                        border: 2px solid #C9A96E;
                    }
                    .testimonial-author h4 {
                        font-weight: 600;
                        color: #001F3F;
                    }
                    .author-company {
                        font-size: 0.875rem;
                        color: #C9A96E;
                    }
                    .author-location {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .carousel-controls {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 3rem;
                    }
                    .carousel-arrow {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        border: 1px solid #001F3F;
                        background: transparent;
                        color: #001F3F;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .carousel-arrow:hover {
                        background: #001F3F;
                        color: #fff;
                    }
                    .carousel-dots {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .carousel-dot {
                        width: 0.625rem;
                        height: 0.625rem;
                        border-radius: 999px;
                        border: none;
                        padding: 0;
                        background: #d1d5db;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .carousel-dot:hover { background: #9ca3af; }
                    .carousel-dot.active {
                        width: 2rem;
                        background: #C9A96E;
                    }
                "#}
            </style>
        </section>
    }
}
