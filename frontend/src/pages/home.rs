use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::contact::form::ContactForm;
use crate::dom;
use crate::motion::hooks::{use_reveal, use_reveal_group};
use crate::motion::reveal::{AnimationKind, RevealOptions};
use crate::Route;

const CARD_STAGGER_MS: u32 = 120;

struct Service {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: &[Service] = &[
    Service { icon: "💻", title: "Web Development", blurb: "Fast, accessible sites and web apps built on modern stacks and tuned for search." },
    Service { icon: "📱", title: "Mobile Apps", blurb: "Native-feeling iOS and Android apps from a single, maintainable codebase." },
    Service { icon: "🎨", title: "UI/UX Design", blurb: "Research-led interfaces, design systems and prototypes you can click through." },
    Service { icon: "📈", title: "Digital Marketing", blurb: "Campaigns, analytics and content that turn visitors into customers." },
    Service { icon: "🔍", title: "SEO Optimization", blurb: "Technical audits and content strategy that move you up the results page." },
    Service { icon: "☁️", title: "Cloud Hosting & Maintenance", blurb: "Monitored hosting, backups and updates so your site never goes stale." },
];

struct Project {
    title: &'static str,
    kind: &'static str,
    image: &'static str,
}

const PROJECTS: &[Project] = &[
    Project { title: "Nordic Outdoor Store", kind: "E-commerce", image: "/assets/portfolio/outdoor-store.svg" },
    Project { title: "Clinic Booking App", kind: "Mobile App", image: "/assets/portfolio/clinic-app.svg" },
    Project { title: "Fintech Dashboard", kind: "Web App", image: "/assets/portfolio/fintech-dashboard.svg" },
    Project { title: "Coffee Roastery Rebrand", kind: "Branding", image: "/assets/portfolio/roastery.svg" },
    Project { title: "City Marathon Portal", kind: "Website", image: "/assets/portfolio/marathon.svg" },
    Project { title: "Language Tutor Platform", kind: "Web App", image: "/assets/portfolio/tutor.svg" },
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They rebuilt our store in six weeks and our conversion rate nearly doubled. Communication was excellent the whole way.",
        author: "Maria Lindqvist",
        role: "Founder, Nordic Outdoor",
    },
    Testimonial {
        quote: "The booking app just works. Patients stopped calling to reschedule and our front desk finally has time to breathe.",
        author: "Dr. Samuel Okafor",
        role: "Director, Riverside Clinic",
    },
    Testimonial {
        quote: "A small team that behaves like a big one. Clear estimates, no surprises, and a product our customers love.",
        author: "Jonas Weber",
        role: "CTO, Ledgerly",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    use_title("Brightforge Studio | Web, Mobile & Design Agency".to_string());

    // Jump to the requested section on mount, otherwise start at the top
    use_effect_with_deps(
        move |_| {
            let jumped = dom::current_hash().map_or(false, |id| dom::scroll_to_anchor(&id));
            if !jumped {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>{HOME_CSS}</style>
            <Hero />
            <About />
            <Services />
            <Portfolio />
            <Testimonials />
            <ContactSection />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let content = use_node_ref();
    use_reveal(content.clone(), RevealOptions::animated(AnimationKind::FadeUp));

    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_anchor("contact");
    });

    html! {
        <header id="home" class="hero">
            <div class="hero-background"></div>
            <div ref={content} class="hero-content reveal">
                <h1>{"We build digital products people love to use"}</h1>
                <p class="hero-subtitle">
                    {"Brightforge is a small studio for websites, apps and brands. Strategy, design and engineering under one roof."}
                </p>
                <div class="hero-cta-group">
                    <a href="#contact" onclick={to_contact}>
                        <button class="hero-cta">{"Start a Project"}</button>
                    </a>
                    <a href="#portfolio" class="faq-link">{"See our work"}</a>
                </div>
            </div>
        </header>
    }
}

#[function_component(About)]
fn about() -> Html {
    let text = use_node_ref();
    let stats = use_node_ref();
    use_reveal(text.clone(), RevealOptions::animated(AnimationKind::FadeRight));
    use_reveal_group(stats.clone(), CARD_STAGGER_MS, RevealOptions::animated(AnimationKind::Zoom));

    html! {
        <section id="about" class="about-section">
            <div ref={text} class="section-header reveal">
                <h2>{"About Us"}</h2>
                <p>{"We started Brightforge in 2016 to give growing businesses the kind of craft usually reserved for big budgets. Every project gets a senior designer and a senior engineer from the first call to launch day."}</p>
                <h3>{"Our Process"}</h3>
                <p>{"Discover, design, build, launch, improve. Short cycles, weekly demos and a shared board you can check any time."}</p>
            </div>
            <div ref={stats} class="stats-grid">
                <div class="stat reveal-item"><span class="stat-number">{"120+"}</span><span>{"Projects shipped"}</span></div>
                <div class="stat reveal-item"><span class="stat-number">{"9"}</span><span>{"Years in business"}</span></div>
                <div class="stat reveal-item"><span class="stat-number">{"98%"}</span><span>{"Clients who return"}</span></div>
                <div class="stat reveal-item"><span class="stat-number">{"14"}</span><span>{"Countries served"}</span></div>
            </div>
            <div class="section-intro">
                <Link<Route> to={Route::Team} classes="forward-link">{"Meet the team →"}</Link<Route>>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    let grid = use_node_ref();
    use_reveal_group(grid.clone(), CARD_STAGGER_MS, RevealOptions::animated(AnimationKind::FadeUp));

    html! {
        <section id="services" class="services-section">
            <h2>{"Services"}</h2>
            <div ref={grid} class="card-grid">
                {
                    SERVICES.iter().map(|service| html! {
                        <div class="card reveal-item" key={service.title}>
                            <div class="card-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.blurb}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(Portfolio)]
fn portfolio() -> Html {
    let grid = use_node_ref();
    use_reveal_group(grid.clone(), CARD_STAGGER_MS, RevealOptions::animated(AnimationKind::Zoom));

    html! {
        <section id="portfolio" class="portfolio-section">
            <h2>{"Portfolio"}</h2>
            <p>{"A few recent projects. Ask us for case studies with numbers."}</p>
            <div ref={grid} class="card-grid">
                {
                    PROJECTS.iter().map(|project| html! {
                        <figure class="project-card reveal-item" key={project.title}>
                            <LazyImage src={project.image} alt={project.title} />
                            <figcaption>
                                <span class="project-kind">{project.kind}</span>
                                <h3>{project.title}</h3>
                            </figcaption>
                        </figure>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let list = use_node_ref();
    use_reveal_group(list.clone(), CARD_STAGGER_MS * 2, RevealOptions::animated(AnimationKind::FadeLeft));

    html! {
        <section id="testimonials" class="testimonials-section">
            <h2>{"What Clients Say"}</h2>
            <div ref={list} class="card-grid">
                {
                    TESTIMONIALS.iter().map(|t| html! {
                        <blockquote class="card testimonial reveal-item" key={t.author}>
                            <p>{format!("“{}”", t.quote)}</p>
                            <footer>
                                <strong>{t.author}</strong>
                                <span>{t.role}</span>
                            </footer>
                        </blockquote>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let intro = use_node_ref();
    use_reveal(intro.clone(), RevealOptions::animated(AnimationKind::FadeUp));

    html! {
        <section id="contact" class="contact-section">
            <div ref={intro} class="section-header reveal">
                <h2>{"Contact Us"}</h2>
                <p>{"Tell us about your project. We reply within one business day."}</p>
            </div>
            <ContactForm />
        </section>
    }
}

const HOME_CSS: &str = r#"
    .landing-page {
        background: #1a1a1a;
        color: #fff;
    }
    .landing-page section,
    .hero {
        padding: 6rem 2rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .landing-page h2 {
        font-size: 2.5rem;
        margin-bottom: 1.5rem;
        background: linear-gradient(45deg, #fff, #7EB2FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        text-align: center;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        position: relative;
        text-align: center;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        background: radial-gradient(circle at 30% 20%, rgba(30, 144, 255, 0.25), transparent 60%),
                    radial-gradient(circle at 70% 80%, rgba(126, 178, 255, 0.15), transparent 50%);
        z-index: 0;
        pointer-events: none;
    }
    .hero-content {
        position: relative;
        z-index: 1;
        max-width: 760px;
    }
    .hero-content h1 {
        font-size: 3.5rem;
        line-height: 1.1;
        margin-bottom: 1.5rem;
    }
    .hero-subtitle {
        font-size: 1.3rem;
        color: #bbb;
        margin-bottom: 2.5rem;
    }
    .hero-cta-group {
        display: flex;
        gap: 1.5rem;
        justify-content: center;
        align-items: center;
    }
    .hero-cta {
        background: linear-gradient(45deg, #1E90FF, #4169E1);
        color: #fff;
        border: none;
        border-radius: 8px;
        padding: 1rem 2rem;
        font-size: 1.1rem;
        cursor: pointer;
        transition: transform 0.2s ease, box-shadow 0.2s ease;
    }
    .hero-cta:hover {
        transform: translateY(-2px);
        box-shadow: 0 8px 24px rgba(30, 144, 255, 0.3);
    }
    .hero-cta:disabled {
        opacity: 0.6;
        cursor: wait;
    }
    .faq-link,
    .forward-link {
        color: #7EB2FF;
        text-decoration: none;
    }
    .section-header {
        max-width: 760px;
        margin: 0 auto 3rem;
        text-align: center;
        color: #bbb;
        line-height: 1.7;
    }
    .section-intro {
        text-align: center;
        margin-top: 2rem;
    }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
        gap: 1.5rem;
    }
    .stat {
        display: flex;
        flex-direction: column;
        align-items: center;
        color: #999;
    }
    .stat-number {
        font-size: 2.5rem;
        font-weight: bold;
        color: #7EB2FF;
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 2rem;
    }
    .card,
    .project-card {
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(30, 144, 255, 0.1);
        border-radius: 16px;
        padding: 2rem;
        margin: 0;
        color: #bbb;
        transition: border-color 0.3s ease;
    }
    .card:hover,
    .project-card:hover {
        border-color: rgba(30, 144, 255, 0.4);
    }
    .card h3,
    .project-card h3 {
        color: #fff;
    }
    .card-icon {
        font-size: 2.5rem;
        margin-bottom: 1rem;
    }
    .project-card {
        padding: 0;
        overflow: hidden;
    }
    .project-card figcaption {
        padding: 1.5rem;
    }
    .project-kind {
        color: #7EB2FF;
        font-size: 0.85rem;
        text-transform: uppercase;
        letter-spacing: 0.08em;
    }
    .lazy-image {
        width: 100%;
        aspect-ratio: 16 / 10;
        object-fit: cover;
        background: rgba(255, 255, 255, 0.04);
        opacity: 0;
        transition: opacity 0.6s ease;
    }
    .lazy-image.loaded {
        opacity: 1;
    }
    .testimonial p {
        font-style: italic;
        line-height: 1.7;
    }
    .testimonial footer {
        display: flex;
        flex-direction: column;
        margin-top: 1rem;
    }
    .testimonial footer span {
        color: #777;
        font-size: 0.9rem;
    }
    .contact-form {
        max-width: 760px;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        gap: 1.2rem;
    }
    .form-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.2rem;
    }
    .form-field {
        display: flex;
        flex-direction: column;
        gap: 0.4rem;
        color: #bbb;
    }
    .form-field input,
    .form-field select,
    .form-field textarea {
        background: rgba(0, 0, 0, 0.3);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 8px;
        padding: 0.8rem 1rem;
        color: #fff;
        font-size: 1rem;
        font-family: inherit;
    }
    .form-field.invalid input,
    .form-field.invalid select,
    .form-field.invalid textarea {
        border-color: rgba(231, 76, 60, 0.7);
    }
    .field-error {
        color: #e74c3c;
        font-size: 0.85rem;
    }
    .loading-spinner {
        display: inline-block;
        width: 16px;
        height: 16px;
        border: 3px solid rgba(255,255,255,.3);
        border-radius: 50%;
        border-top-color: #fff;
        animation: spin 1s ease-in-out infinite;
        vertical-align: middle;
    }
    @keyframes spin { to { transform: rotate(360deg); } }

    .reveal,
    .reveal-item {
        opacity: 0;
    }
    .reveal.revealed,
    .reveal-item.revealed {
        animation: fadeIn 0.7s ease forwards;
    }
    .revealed.fade-up { animation-name: fadeUp; }
    .revealed.fade-left { animation-name: fadeLeft; }
    .revealed.fade-right { animation-name: fadeRight; }
    .revealed.zoom { animation-name: zoomIn; }
    @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
    @keyframes fadeUp { from { opacity: 0; transform: translateY(32px); } to { opacity: 1; transform: none; } }
    @keyframes fadeLeft { from { opacity: 0; transform: translateX(32px); } to { opacity: 1; transform: none; } }
    @keyframes fadeRight { from { opacity: 0; transform: translateX(-32px); } to { opacity: 1; transform: none; } }
    @keyframes zoomIn { from { opacity: 0; transform: scale(0.92); } to { opacity: 1; transform: none; } }
    @media (prefers-reduced-motion: reduce) {
        .reveal.revealed, .reveal-item.revealed { animation: none; opacity: 1; }
    }
    @media (max-width: 768px) {
        .hero-content h1 { font-size: 2.4rem; }
        .landing-page h2 { font-size: 2rem; }
        .form-row { grid-template-columns: 1fr; }
        .hero-cta-group { flex-direction: column; }
    }
"#;
