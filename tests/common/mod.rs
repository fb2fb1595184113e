#![allow(dead_code)] // each test binary uses a different slice of the fixture

use net::MockTransport;
use pagelift::{
    Document, DocumentBuilder, EnhanceConfig, Engine, NodeId, Viewport, enhance_page_with,
};
use std::sync::Arc;

pub const VIEWPORT_WIDTH: f32 = 1200.0;
pub const VIEWPORT_HEIGHT: f32 = 800.0;
pub const CONTENT_HEIGHT: f32 = 3600.0;

/// The full portfolio page wired to a scripted transport, with handles to
/// every element the behaviors touch.
pub struct Portfolio {
    pub engine: Engine,
    pub transport: Arc<MockTransport>,
    pub toggle: NodeId,
    pub menu: NodeId,
    pub header: NodeId,
    pub scroll_top: NodeId,
    /// `[data-animation]` copy inside the hero, on screen at install.
    pub hero_copy: NodeId,
    /// `[data-animation]` copy inside the about section, below the fold.
    pub about_copy: NodeId,
    pub cards: Vec<NodeId>,
    pub form: NodeId,
    pub success: NodeId,
    pub error: NodeId,
    pub button: NodeId,
    pub footer: NodeId,
}

/// Markup and rects for a four-section portfolio page: fixed header with the
/// mobile nav, hero/about/work/contact sections, reveal targets, tilt cards,
/// the contact form, and the footer. Rects are document-space.
pub fn portfolio_document() -> Document {
    let mut b = DocumentBuilder::new();

    b.open("header").attr("id", "header").rect(0.0, 0.0, 1200.0, 70.0);
    b.open("nav").class("nav");
    b.open("button").attr("id", "nav-toggle").rect(1140.0, 11.0, 48.0, 48.0);
    b.leaf("span").class("nav__toggle-icon");
    b.close();
    b.open("div").attr("id", "nav-menu").rect(0.0, 70.0, 1200.0, 240.0);
    b.leaf("a").class("nav__link").attr("href", "#home");
    b.leaf("a").class("nav__link").attr("href", "#about");
    b.leaf("a").class("nav__link").attr("href", "#work");
    b.leaf("a").class("nav__link").attr("href", "#contact");
    b.close();
    b.close();
    b.close();

    b.open("section").class("section").attr("id", "home");
    b.rect(0.0, 0.0, 1200.0, 900.0);
    b.leaf("div").attr("data-animation", "fade-up").rect(100.0, 200.0, 1000.0, 300.0);
    b.close();

    b.open("section").class("section").attr("id", "about");
    b.rect(0.0, 900.0, 1200.0, 900.0);
    b.leaf("div").attr("data-animation", "fade-up").rect(100.0, 1000.0, 1000.0, 300.0);
    b.close();

    b.open("section").class("section").attr("id", "work");
    b.rect(0.0, 1800.0, 1200.0, 900.0);
    b.open("article").class("card").attr("data-animation", "fade-up");
    b.rect(100.0, 1900.0, 500.0, 300.0);
    b.close();
    b.open("article").class("card").attr("data-animation", "fade-up");
    b.rect(700.0, 1900.0, 500.0, 300.0);
    b.close();
    b.close();

    b.open("section").class("section").attr("id", "contact");
    b.rect(0.0, 2700.0, 1200.0, 900.0);
    b.open("form").class("contact__form").attr("action", "https://formspree.io/f/demo");
    b.rect(200.0, 2800.0, 800.0, 500.0);
    b.leaf("input").attr("name", "name").value("");
    b.leaf("input").attr("name", "email").value("");
    b.leaf("textarea").attr("name", "message").value("");
    b.leaf("p").class("form__success").text("Thanks! Your message was sent.");
    b.leaf("p").class("form__error").text("Something went wrong. Please try again.");
    b.leaf("button").class("form__button").text("Send Message");
    b.close();
    b.close();

    b.open("footer").class("footer").rect(0.0, 3540.0, 1200.0, 60.0);
    b.leaf("p").class("footer__text").text("placeholder");
    b.close();
    b.leaf("button").attr("id", "scroll-top").rect(1140.0, 3480.0, 48.0, 48.0);

    b.build()
}

pub fn portfolio() -> Portfolio {
    portfolio_with(EnhanceConfig {
        copyright_owner: Some("Jordan Example".into()),
    })
}

pub fn portfolio_with(config: EnhanceConfig) -> Portfolio {
    let doc = portfolio_document();
    let transport = Arc::new(MockTransport::new());
    let engine = enhance_page_with(
        doc,
        Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT, CONTENT_HEIGHT),
        config,
        transport.clone(),
    );

    let doc = &engine.page.document;
    let toggle = doc.by_html_id("nav-toggle").expect("fixture toggle");
    let menu = doc.by_html_id("nav-menu").expect("fixture menu");
    let header = doc.by_html_id("header").expect("fixture header");
    let scroll_top = doc.by_html_id("scroll-top").expect("fixture scroll-top");
    let animated = doc.with_attr("data-animation");
    let (hero_copy, about_copy) = (animated[0], animated[1]);
    let cards = doc.by_class("card");
    let form = doc.by_class("contact__form")[0];
    let success = doc.by_class("form__success")[0];
    let error = doc.by_class("form__error")[0];
    let button = doc.by_class("form__button")[0];
    let footer = doc.by_class("footer__text")[0];

    Portfolio {
        engine,
        transport,
        toggle,
        menu,
        header,
        scroll_top,
        hero_copy,
        about_copy,
        cards,
        form,
        success,
        error,
        button,
        footer,
    }
}

pub fn has_class(engine: &Engine, node: NodeId, class: &str) -> bool {
    engine.page.document.element(node).classes.contains(class)
}

pub fn style_of(engine: &Engine, node: NodeId, prop: &str) -> Option<String> {
    engine
        .page
        .document
        .element(node)
        .style
        .get(prop)
        .map(str::to_string)
}

/// The hrefs of the nav links currently marked `active`.
pub fn active_hrefs(engine: &Engine) -> Vec<String> {
    engine
        .page
        .document
        .by_class("nav__link")
        .into_iter()
        .filter(|&link| has_class(engine, link, "active"))
        .map(|link| {
            engine
                .page
                .document
                .element(link)
                .attr("href")
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

/// Run frames until the smooth scroll finishes, plus one to flush the frame
/// callbacks the final step queued.
pub fn settle_animation(engine: &mut Engine) {
    let mut frames = 0;
    while engine.page.viewport.is_animating() {
        engine.run_frame();
        frames += 1;
        assert!(frames <= 30, "smooth scroll must settle within its duration");
    }
    engine.run_frame();
}
