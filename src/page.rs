// Builds the static landing page into the DOM: hero, problem cards, solution,
// benefits grid, call to action and footer, with the particle canvas behind it

use crate::background::ParticleBackground;
use crate::config::FieldConfig;
use crate::content::{self, Card, LinkColumn};
use crate::error::{PageError, PageResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlInputElement, Node};

pub const CANVAS_ID: &str = "particle-background";

/// Render the page into the element with id `root_id` and start the particle
/// background. Returns the background handle, or `undefined` when the canvas
/// has no 2d context.
///
/// The animation lives exactly as long as the returned handle: once the host
/// frees it (or lets it be collected) the background stops and the canvas is
/// left as last painted.
#[wasm_bindgen]
pub fn mount_page(root_id: &str) -> Result<Option<ParticleBackground>, JsValue> {
    let document = document()?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| PageError::ElementNotFound(root_id.to_owned()))?;
    Ok(render(&document, &root)?)
}

pub fn render(document: &Document, root: &Element) -> PageResult<Option<ParticleBackground>> {
    let page = element(document, "div", "min-h-screen bg-black text-white")?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| PageError::NotACanvas(CANVAS_ID.to_owned()))?;
    canvas.set_id(CANVAS_ID);
    canvas.set_class_name("fixed inset-0 -z-10");
    append(&page, &canvas)?;

    append(&page, &hero(document)?)?;
    append(&page, &problems(document)?)?;
    append(&page, &solution(document)?)?;
    append(&page, &benefits(document)?)?;
    append(&page, &call_to_action(document)?)?;
    append(&page, &footer(document)?)?;
    append(root, &page)?;

    ParticleBackground::mount_with(canvas, &FieldConfig::default())
}

fn document() -> PageResult<Document> {
    web_sys::window()
        .ok_or(PageError::NoWindow)?
        .document()
        .ok_or(PageError::NoDocument)
}

// Generic over the node types so `&helper(..)?` is inferred from the helper
// instead of being coerced towards `Node` through the `?`
fn append<P: AsRef<Node>, C: AsRef<Node>>(parent: &P, child: &C) -> PageResult<()> {
    parent.as_ref().append_child(child.as_ref())?;
    Ok(())
}

fn element(document: &Document, tag: &str, class: &str) -> PageResult<Element> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

fn text(document: &Document, tag: &str, class: &str, text: &str) -> PageResult<Element> {
    let el = element(document, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

fn section(
    document: &Document,
    class: &str,
    width: &str,
    heading: &str,
) -> PageResult<(Element, Element)> {
    let section = element(document, "section", class)?;
    let inner = element(document, "div", width)?;
    let h2 = text(document, "h2", "text-4xl font-bold mb-12 text-center", heading)?;
    append(&inner, &h2)?;
    append(&section, &inner)?;
    Ok((section, inner))
}

fn hero(document: &Document) -> PageResult<Element> {
    let section = element(
        document,
        "section",
        "relative h-screen flex items-center justify-center text-center px-4",
    )?;
    let inner = element(document, "div", "max-w-4xl mx-auto")?;
    let h1 = text(
        document,
        "h1",
        "text-5xl md:text-7xl font-bold mb-6",
        content::HERO_TITLE,
    )?;
    append(&inner, &h1)?;
    append(&section, &inner)?;
    Ok(section)
}

fn card(document: &Document, card: &Card, centered: bool) -> PageResult<Element> {
    let outer = element(document, "div", "rounded-lg border bg-black/50 border-white/10")?;
    let body = element(
        document,
        "div",
        if centered {
            "p-6 flex flex-col items-center text-center"
        } else {
            "p-6"
        },
    )?;
    if let Some(icon) = card.icon {
        let class = format!("w-12 h-12 mb-4 text-5xl {}", card.accent);
        append(&body, &text(document, "span", &class, icon)?)?;
    }
    append(&body, &text(document, "h3", "text-xl font-semibold mb-2", card.title)?)?;
    append(&body, &text(document, "p", "text-gray-400", card.description)?)?;
    append(&outer, &body)?;
    Ok(outer)
}

fn problems(document: &Document) -> PageResult<Element> {
    let (section, inner) = section(
        document,
        "py-20 px-4",
        "max-w-6xl mx-auto",
        content::PROBLEM_HEADING,
    )?;
    let grid = element(document, "div", "grid md:grid-cols-3 gap-8")?;
    for problem in content::PROBLEMS.iter() {
        append(&grid, &card(document, problem, true)?)?;
    }
    append(&inner, &grid)?;
    Ok(section)
}

fn solution(document: &Document) -> PageResult<Element> {
    let (section, inner) = section(
        document,
        "py-20 px-4 bg-gradient-to-b from-blue-900/20 to-transparent",
        "max-w-6xl mx-auto",
        content::SOLUTION_HEADING,
    )?;
    let grid = element(document, "div", "grid md:grid-cols-2 gap-12")?;

    let copy = element(document, "div", "")?;
    let title = text(document, "h3", "text-2xl font-semibold mb-4", "How It Works")?;
    append(&copy, &title)?;
    let body = text(document, "p", "text-gray-400 mb-6", content::HOW_IT_WORKS)?;
    append(&copy, &body)?;
    let list = element(document, "ul", "space-y-4")?;
    for feature in content::FEATURES.iter() {
        let item = element(document, "li", "flex items-center gap-3")?;
        append(&item, &element(document, "div", "w-2 h-2 rounded-full bg-blue-400")?)?;
        append(&item, &text(document, "span", "", feature)?)?;
        append(&list, &item)?;
    }
    append(&copy, &list)?;
    append(&grid, &copy)?;

    // Placeholder for the 3D visualization
    let visual = element(document, "div", "relative")?;
    let frame = element(
        document,
        "div",
        "aspect-square rounded-lg bg-black/50 border border-white/10",
    )?;
    append(&visual, &frame)?;
    append(&grid, &visual)?;

    append(&inner, &grid)?;
    Ok(section)
}

fn benefits(document: &Document) -> PageResult<Element> {
    let (section, inner) = section(
        document,
        "py-20 px-4",
        "max-w-6xl mx-auto",
        content::BENEFITS_HEADING,
    )?;
    let grid = element(document, "div", "grid md:grid-cols-2 lg:grid-cols-4 gap-8")?;
    for benefit in content::BENEFITS.iter() {
        append(&grid, &card(document, benefit, false)?)?;
    }
    append(&inner, &grid)?;
    Ok(section)
}

fn call_to_action(document: &Document) -> PageResult<Element> {
    let section = element(
        document,
        "section",
        "py-20 px-4 bg-gradient-to-b from-blue-900/20 to-transparent",
    )?;
    let inner = element(document, "div", "max-w-3xl mx-auto text-center")?;
    let heading = text(document, "h2", "text-4xl font-bold mb-6", content::CTA_HEADING)?;
    append(&inner, &heading)?;
    let body = text(document, "p", "text-gray-400 mb-8", content::CTA_BODY)?;
    append(&inner, &body)?;
    let button = text(
        document,
        "button",
        "rounded-md px-8 py-3 bg-white text-black hover:bg-white/90",
        content::CTA_BUTTON,
    )?;
    button.set_attribute("type", "button")?;
    append(&inner, &button)?;
    append(&section, &inner)?;
    Ok(section)
}

fn link_column(document: &Document, column: &LinkColumn) -> PageResult<Element> {
    let div = element(document, "div", "")?;
    append(&div, &text(document, "h3", "font-semibold mb-4", column.title)?)?;
    let list = element(document, "ul", "space-y-2 text-gray-400")?;
    for label in column.links {
        let item = element(document, "li", "")?;
        let link = text(document, "a", "", label)?;
        link.set_attribute("href", "#")?;
        append(&item, &link)?;
        append(&list, &item)?;
    }
    append(&div, &list)?;
    Ok(div)
}

fn footer(document: &Document) -> PageResult<Element> {
    let footer = element(document, "footer", "py-12 px-4 border-t border-white/10")?;
    let grid = element(document, "div", "max-w-6xl mx-auto grid md:grid-cols-4 gap-8")?;
    for column in content::FOOTER_COLUMNS.iter() {
        append(&grid, &link_column(document, column)?)?;
    }

    // Email field is display only; nothing listens for submission
    let newsletter = element(document, "div", "")?;
    let title = text(document, "h3", "font-semibold mb-4", content::NEWSLETTER_TITLE)?;
    append(&newsletter, &title)?;
    let body = text(document, "p", "text-gray-400 mb-4", content::NEWSLETTER_BODY)?;
    append(&newsletter, &body)?;
    let input = document
        .create_element("input")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| PageError::Js("<input> is not an HtmlInputElement".to_owned()))?;
    input.set_type("email");
    input.set_placeholder(content::NEWSLETTER_PLACEHOLDER);
    input.set_class_name(
        "w-full px-4 py-2 rounded bg-white/10 border border-white/20 \
         focus:outline-none focus:border-white/40",
    );
    append(&newsletter, &input)?;
    append(&grid, &newsletter)?;

    append(&footer, &grid)?;
    Ok(footer)
}
