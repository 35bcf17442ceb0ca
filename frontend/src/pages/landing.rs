use crate::mount::LandingPage;
use yew::prelude::*;

const BRAND: &str = "Atelier Nami";

struct Section {
    id: &'static str,
    label: &'static str,
}

const SECTIONS: [Section; 4] = [
    Section { id: "concept", label: "Concept" },
    Section { id: "service", label: "Service" },
    Section { id: "access", label: "Access" },
    Section { id: "contact", label: "Contact" },
];

struct ConceptSlide {
    image: &'static str,
    title: &'static str,
    body: &'static str,
}

const SLIDES: [ConceptSlide; 3] = [
    ConceptSlide {
        image: "/assets/concept-1.jpg",
        title: "Made by hand",
        body: "Every piece starts on our workbench and leaves it only when it is right.",
    },
    ConceptSlide {
        image: "/assets/concept-2.jpg",
        title: "Local materials",
        body: "Wood, clay and linen sourced within a day's drive of the studio.",
    },
    ConceptSlide {
        image: "/assets/concept-3.jpg",
        title: "Built to last",
        body: "Repairs are free for as long as we are open.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Interactions attach once the markup below is in the document
    {
        use_effect_with_deps(
            move |_| {
                let page = match LandingPage::mount() {
                    Ok(page) => Some(page),
                    Err(e) => {
                        log::error!("Landing interactions unavailable: {}", e);
                        None
                    }
                };
                move || drop(page)
            },
            (),
        );
    }

    let landing_css = r#"
        body { margin: 0; opacity: 0; transition: opacity 0.8s ease; }
        body.is-loaded { opacity: 1; }
        .header {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 30;
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 1rem 2rem;
            transition: background-color 0.4s ease;
        }
        .header.is-scrolled { background-color: rgba(255, 255, 255, 0.92); }
        .header__nav ul { display: flex; gap: 2rem; list-style: none; }
        .menu-btn { display: none; }
        .nav-overlay, .nav { display: none; }
        .fv { position: relative; height: 100vh; overflow: hidden; }
        .fv__bg {
            position: absolute;
            inset: -20% 0 0 0;
            background: url("/assets/fv.jpg") center / cover no-repeat;
            will-change: transform;
        }
        .fv__logo { position: relative; display: block; margin: 40vh auto 0; width: 240px; }
        .concept { position: relative; height: 80vh; }
        .concept__slide { position: absolute; inset: 0; opacity: 0; transition: opacity 1.2s ease; }
        .concept__slide.active { opacity: 1; }
        .concept__text { opacity: 0; transition: opacity 1.2s ease; }
        .concept__slide.is-text-visible .concept__text { opacity: 1; }
        .concept__dots { position: absolute; bottom: 2rem; width: 100%; text-align: center; }
        .concept__dot { width: 10px; height: 10px; border-radius: 50%; border: 1px solid #fff; background: none; }
        .concept__dot.active { background: #fff; }
        .contact { position: relative; overflow: hidden; min-height: 70vh; }
        .contact__bg {
            position: absolute;
            inset: -30% 0 0 0;
            background: url("/assets/contact.jpg") center / cover no-repeat;
        }
        @keyframes nav-items-in {
            from { opacity: 0; transform: translateX(24px); }
            to { opacity: 1; transform: none; }
        }
        @media (max-width: 768px) {
            .header__nav { display: none; }
            .menu-btn { display: block; }
            .nav {
                display: block;
                position: fixed;
                top: 0;
                right: 0;
                bottom: 0;
                width: 80%;
                z-index: 40;
                transform: translateX(100%);
                transition: transform 0.4s ease;
            }
            .nav.is-open { transform: none; }
            .nav.is-open .nav__list { animation: nav-items-in 0.6s ease both; }
            .nav-overlay { position: fixed; inset: 0; z-index: 35; background: rgba(0, 0, 0, 0.4); }
            .nav.is-open ~ .nav-overlay, .nav-overlay.is-open { display: block; }
        }
    "#;

    html! {
        <div class="landing">
            <style>{landing_css}</style>
            <header class="header">
                <a href="#" class="header__logo-wrapper">
                    <span class="header__logo">{BRAND}</span>
                </a>
                <nav class="header__nav">
                    <ul>
                        { for SECTIONS.iter().map(|section| html! {
                            <li>
                                <a class="header__nav-link" href={format!("#{}", section.id)}>{section.label}</a>
                            </li>
                        }) }
                    </ul>
                </nav>
                <button id="menuBtn" class="menu-btn" type="button" aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </header>

            <nav id="nav" class="nav">
                <ul class="nav__list">
                    { for SECTIONS.iter().map(|section| html! {
                        <li>
                            <a class="nav__link" href={format!("#{}", section.id)}>{section.label}</a>
                        </li>
                    }) }
                </ul>
            </nav>
            <div id="navOverlay" class="nav-overlay"></div>

            <section class="fv">
                <div class="fv__bg"></div>
                <img id="fvLogo" class="fv__logo" src="/assets/logo.svg" alt={BRAND} />
            </section>

            <section id="concept" class="concept">
                { for SLIDES.iter().map(|slide| html! {
                    <div class="concept__slide">
                        <img class="concept__image" src={slide.image} alt={slide.title} />
                        <div class="concept__text">
                            <h2>{slide.title}</h2>
                            <p>{slide.body}</p>
                        </div>
                    </div>
                }) }
                <div class="concept__dots">
                    { for (0..SLIDES.len()).map(|index| html! {
                        <button
                            class="concept__dot"
                            type="button"
                            aria-label={format!("Show slide {}", index + 1)}
                        ></button>
                    }) }
                </div>
            </section>

            <section id="service" class="service">
                <h2>{"Service"}</h2>
                <p>{"Commissions, restoration and small-batch runs for shops and homes."}</p>
            </section>

            <section id="access" class="access">
                <h2>{"Access"}</h2>
                <p>{"Open Thursday to Sunday, 11:00 to 18:00. Five minutes from the station."}</p>
            </section>

            <section id="contact" class="contact">
                <div class="contact__bg"></div>
                <div class="contact__inner">
                    <h2>{"Contact"}</h2>
                    <p>{"Write to hello@ateliernami.example and we will reply within two days."}</p>
                </div>
            </section>

            <footer class="footer">
                <small>{format!("© {}", BRAND)}</small>
            </footer>
        </div>
    }
}
