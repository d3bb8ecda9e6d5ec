use crate::constants::{CLASS_PARTICLE, CLASS_PARTICLES, ID_HERO};
use crate::core::constants::PARTICLE_COUNT;
use crate::core::particles::{generate, ParticleSpec};
use crate::dom::{self, js_err};
use web_sys as web;

/// Fills the hero section with randomly sized and placed particles. The
/// stylesheet animates them; nothing here touches them after insertion.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(hero) = document.get_element_by_id(ID_HERO) else {
        log::debug!("[particles] no #{} section", ID_HERO);
        return Ok(());
    };

    let container = document.create_element("div").map_err(js_err)?;
    container.set_class_name(CLASS_PARTICLES);

    let specs = generate(&mut rand::thread_rng(), PARTICLE_COUNT);
    for spec in &specs {
        container
            .append_child(&particle_element(document, spec)?)
            .map_err(js_err)?;
    }
    // one insertion into the hero
    hero.append_child(&container).map_err(js_err)?;
    log::debug!("[particles] inserted {}", specs.len());
    Ok(())
}

fn particle_element(document: &web::Document, spec: &ParticleSpec) -> anyhow::Result<web::Element> {
    let el = document.create_element("div").map_err(js_err)?;
    el.set_class_name(CLASS_PARTICLE);
    let html = dom::html_element(&el).ok_or_else(|| anyhow::anyhow!("div is not an HtmlElement"))?;
    let style = html.style();
    for (name, value) in spec.style_properties() {
        style.set_property(name, &value).map_err(js_err)?;
    }
    Ok(el)
}
