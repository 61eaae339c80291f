use yew::prelude::*;

use crate::components::{
    back_to_top::BackToTop,
    contact::{ContactForm, NewsletterForm},
    counter::StatCounter,
    hero_slider::{HeroSlide, HeroSlider},
    nav::NavLink,
    reveal::Reveal,
    testimonials::{Testimonial, Testimonials},
};
use crate::config::{self, SiteConfig};

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { id: "home", label: "Home" },
        NavLink { id: "about", label: "About" },
        NavLink { id: "testimonials", label: "Clients" },
        NavLink { id: "contact", label: "Contact" },
    ]
}

pub fn service_links() -> Vec<NavLink> {
    vec![
        NavLink { id: "web-development", label: "Web Development" },
        NavLink { id: "mobile-apps", label: "Mobile Apps" },
        NavLink { id: "cloud-solutions", label: "Cloud Solutions" },
    ]
}

fn hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            title: "Build Digital Experiences".into(),
            subtitle: "Modern websites and applications crafted for speed and scale.".into(),
            image: "/assets/slide-1.jpg".into(),
            cta_label: "Get Started".into(),
            cta_href: "#contact".into(),
        },
        HeroSlide {
            title: "Apps Your Users Love".into(),
            subtitle: "Native and cross-platform mobile apps with polished interfaces.".into(),
            image: "/assets/slide-2.jpg".into(),
            cta_label: "Our Services".into(),
            cta_href: "#services".into(),
        },
        HeroSlide {
            title: "Scale With the Cloud".into(),
            subtitle: "Infrastructure that grows with your business.".into(),
            image: "/assets/slide-3.jpg".into(),
            cta_label: "Learn More".into(),
            cta_href: "#about".into(),
        },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "They rebuilt our storefront in six weeks and conversions doubled.".into(),
            author: "Maria Lopez".into(),
            role: "CEO, Brightcart".into(),
        },
        Testimonial {
            quote: "Clear communication from kickoff to launch. Would hire again.".into(),
            author: "James Okafor".into(),
            role: "CTO, Fieldline".into(),
        },
        Testimonial {
            quote: "Our mobile app finally feels as good as our product.".into(),
            author: "Sofia Berg".into(),
            role: "Product Lead, Nordpay".into(),
        },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    let site = use_context::<SiteConfig>().unwrap_or_default();

    html! {
        <main id="home">
            <HeroSlider slides={hero_slides()} options={site.hero.clone()} />

            <section id="about" class="about">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"About Us"}</h2>
                        <p>{"A small studio shipping fast, accessible software for growing teams."}</p>
                    </Reveal>
                    <div class="stats">
                        <StatCounter target={250} label="Projects Delivered" suffix="+" />
                        <StatCounter target={120} label="Happy Clients" suffix="+" />
                        <StatCounter target={15} label="Years Experience" />
                        <StatCounter target={98} label="Satisfaction" suffix="%" />
                    </div>
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"Services"}</h2>
                    </Reveal>
                    <div class="services-grid">
                        <Reveal animation="fade-up" delay_ms={0} class="service-card">
                            <div id="web-development">
                                <h3>{"Web Development"}</h3>
                                <p>{"Responsive sites and web apps built on modern stacks."}</p>
                            </div>
                        </Reveal>
                        <Reveal animation="fade-up" delay_ms={100} class="service-card">
                            <div id="mobile-apps">
                                <h3>{"Mobile Apps"}</h3>
                                <p>{"iOS and Android apps from prototype to store release."}</p>
                            </div>
                        </Reveal>
                        <Reveal animation="fade-up" delay_ms={200} class="service-card">
                            <div id="cloud-solutions">
                                <h3>{"Cloud Solutions"}</h3>
                                <p>{"Hosting, pipelines and monitoring that stay out of your way."}</p>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"What Our Clients Say"}</h2>
                    </Reveal>
                    <Testimonials items={testimonials()} options={site.testimonials.clone()} />
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"Get In Touch"}</h2>
                    </Reveal>
                    <Reveal animation="fade-left">
                        <ContactForm />
                    </Reveal>
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <div class="footer-newsletter">
                        <h4>{"Newsletter"}</h4>
                        <NewsletterForm />
                    </div>
                    <p class="copyright">{ format!("© {}. All rights reserved.", config::SITE_NAME) }</p>
                </div>
            </footer>

            <BackToTop />
        </main>
    }
}
