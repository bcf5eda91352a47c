use super::text_content;
use scraper::{ElementRef, Html, Selector};

/// An attribute-based annotation vocabulary: which attribute marks the recipe
/// container and which attribute names each field inside it.
pub(super) struct Vocabulary {
    container: Selector,
    properties: Selector,
    property_attr: &'static str,
}

impl Vocabulary {
    /// `type_attr` is matched by substring against "Recipe"; fields are looked
    /// up by exact value of `property_attr`.
    pub(super) fn new(type_attr: &'static str, property_attr: &'static str) -> Self {
        Self {
            container: Selector::parse(&format!("[{type_attr}*='Recipe']"))
                .expect("valid container selector"),
            properties: Selector::parse(&format!("[{property_attr}]"))
                .expect("valid property selector"),
            property_attr,
        }
    }

    pub(super) fn find_container<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document.select(&self.container).next()
    }

    fn tagged<'a>(
        &'a self,
        root: ElementRef<'a>,
        prop: &'a str,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        root.select(&self.properties)
            .filter(move |el| el.value().attr(self.property_attr) == Some(prop))
    }

    /// Text of the first descendant tagged `prop`. Empty elements such as
    /// `<meta content="...">` or `<time datetime="...">` fall back to those
    /// attributes.
    pub(super) fn first(&self, root: ElementRef, prop: &str) -> Option<String> {
        let el = self.tagged(root, prop).next()?;
        let text = text_content(el);
        let value = if text.is_empty() {
            el.value()
                .attr("content")
                .or_else(|| el.value().attr("datetime"))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        } else {
            text
        };
        Some(value).filter(|v| !v.is_empty())
    }

    /// Text of every descendant tagged `prop`, in document order, blanks dropped.
    pub(super) fn all(&self, root: ElementRef, prop: &str) -> Vec<String> {
        self.tagged(root, prop)
            .map(text_content)
            .filter(|text| !text.is_empty())
            .collect()
    }
}
