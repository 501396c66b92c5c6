use log::debug;
use scraper::{ElementRef, Html, Selector};

use super::model::{Button, Carousel, ExtractionResult, Heading, Input, Select, SelectOption};

/// Compiled selectors for every extraction pass.
///
/// Build once, run against any number of documents.
pub struct ContentProcessor {
    title: Selector,
    headings: Selector,
    buttons: Selector,
    inputs: Selector,
    carousels: Selector,
    selects: Selector,
    options: Selector,
}

// Only ever called with the literals below.
fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad built-in selector {:?}: {:?}", css, e))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn attr_of(element: ElementRef<'_>, name: &str) -> Option<String> {
    element.value().attr(name).map(String::from)
}

/// Matches in document order, root element included.
///
/// `Html::select` walks the node arena, which diverges from tree order once
/// the parser has moved nodes (foster parenting out of tables, for one).
fn select_in_order<'a>(
    document: &'a Html,
    selector: &'a Selector,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    let root = document.root_element();
    std::iter::once(root)
        .filter(move |element| selector.matches(element))
        .chain(root.select(selector))
}

impl ContentProcessor {
    pub fn new() -> Self {
        Self {
            title: selector("title"),
            headings: selector("h1, h2, h3, h4, h5, h6"),
            buttons: selector("button"),
            inputs: selector("input"),
            carousels: selector(".carousel"),
            selects: selector("select"),
            options: selector("option"),
        }
    }

    /// Parse `html` and run every pass over it. Never fails: the parser
    /// recovers from malformed markup the way a browser does.
    pub fn extract(&self, html: &str) -> ExtractionResult {
        let document = Html::parse_document(html);
        self.extract_document(&document)
    }

    fn extract_document(&self, document: &Html) -> ExtractionResult {
        let result = ExtractionResult {
            title: self.extract_title(document),
            headings: self.extract_headings(document),
            buttons: self.extract_buttons(document),
            inputs: self.extract_inputs(document),
            carousels: self.extract_carousels(document),
            selects: self.extract_selects(document),
        };

        debug!(
            "Extracted {} headings, {} buttons, {} inputs, {} carousels, {} selects",
            result.headings.len(),
            result.buttons.len(),
            result.inputs.len(),
            result.carousels.len(),
            result.selects.len()
        );

        result
    }

    /// Text of the first `title`, or the empty string.
    fn extract_title(&self, document: &Html) -> String {
        select_in_order(document, &self.title)
            .next()
            .map(text_of)
            .unwrap_or_default()
    }

    fn extract_headings(&self, document: &Html) -> Vec<Heading> {
        select_in_order(document, &self.headings)
            .map(|element| Heading {
                tag: element.value().name().to_ascii_lowercase(),
                text: text_of(element),
            })
            .collect()
    }

    fn extract_buttons(&self, document: &Html) -> Vec<Button> {
        select_in_order(document, &self.buttons)
            .map(|element| Button {
                text: text_of(element),
                html: element.inner_html(),
            })
            .collect()
    }

    /// Every `input` except those whose `type` is exactly `hidden`.
    fn extract_inputs(&self, document: &Html) -> Vec<Input> {
        select_in_order(document, &self.inputs)
            .filter(|element| element.value().attr("type") != Some("hidden"))
            .map(|element| Input {
                kind: attr_of(element, "type"),
                name: attr_of(element, "name"),
                value: attr_of(element, "value"),
                placeholder: attr_of(element, "placeholder"),
            })
            .collect()
    }

    fn extract_carousels(&self, document: &Html) -> Vec<Carousel> {
        select_in_order(document, &self.carousels)
            .map(|element| Carousel {
                html: element.inner_html(),
            })
            .collect()
    }

    fn extract_selects(&self, document: &Html) -> Vec<Select> {
        select_in_order(document, &self.selects)
            .map(|element| Select {
                name: attr_of(element, "name"),
                options: element
                    .select(&self.options)
                    .map(|option| SelectOption {
                        value: attr_of(option, "value"),
                        text: text_of(option),
                    })
                    .collect(),
            })
            .collect()
    }
}

impl Default for ContentProcessor {
    fn default() -> Self {
        Self::new()
    }
}
