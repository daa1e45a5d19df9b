use crate::dom;
use folio_core::constants::PARTICLE_CLASS;
use folio_core::{particle_count, FloatKeyframes, ParticleStyle, Selectors};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use web_sys as web;

pub fn init(window: &web::Window, document: &web::Document, sel: &Selectors) -> anyhow::Result<()> {
    let container = dom::by_id(document, sel.particles_container)?;
    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let mut rng = StdRng::from_entropy();
    let count = spawn(document, &container, particle_count(viewport_width), &mut rng)?;
    dom::append_style(document, &FloatKeyframes::sample(&mut rng).css())?;
    log::info!("[particles] spawned {} (viewport {}px)", count, viewport_width);
    Ok(())
}

/// Append `count` particles to `container`.
pub fn spawn<R: Rng + ?Sized>(
    document: &web::Document,
    container: &web::HtmlElement,
    count: usize,
    rng: &mut R,
) -> anyhow::Result<usize> {
    for _ in 0..count {
        let particle = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = particle.class_list().add_1(PARTICLE_CLASS);
        _ = particle.set_attribute("style", &ParticleStyle::sample(rng).css_text());
        container
            .append_child(&particle)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(count)
}
