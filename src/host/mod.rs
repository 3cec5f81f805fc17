// SPDX-License-Identifier: MPL-2.0
//! The host document the application attaches to.
//!
//! The host page is plain (X)HTML. Only element ids matter here: mounting
//! resolves an `#id` selector against them and claims the element, so a
//! page can carry one application per attachment point.

mod selector;

pub use selector::Selector;

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use rust_embed::RustEmbed;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/host/"]
struct Page;

const DEFAULT_PAGE: &str = "index.html";

/// An element of the host document that carries an `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub tag: String,
}

/// A claimed element, returned by [`HostDocument::attach`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPoint {
    pub selector: Selector,
    pub element: Element,
}

#[derive(Debug)]
pub struct HostDocument {
    name: String,
    elements: Vec<Element>,
    mounted: HashSet<String>,
}

impl HostDocument {
    /// The page shipped inside the binary (it contains `<div id="app">`).
    pub fn embedded() -> Result<Self> {
        let file = Page::get(DEFAULT_PAGE)
            .ok_or_else(|| Error::Document(format!("{} is not embedded", DEFAULT_PAGE)))?;
        let markup = String::from_utf8_lossy(file.data.as_ref());
        Self::parse(DEFAULT_PAGE, &markup)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let markup = fs::read_to_string(path)?;
        Self::parse(&path.display().to_string(), &markup)
    }

    /// Collects every element id of `markup`.
    ///
    /// End tags are not matched against start tags, so HTML void elements
    /// (`<meta>`, `<br>`) may stay unclosed. Attribute values are unescaped
    /// with XML rules only: HTML named entities such as `&nbsp;` are a
    /// [`Error::Document`] error.
    pub fn parse(name: &str, markup: &str) -> Result<Self> {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().check_end_names = false;

        let mut elements: Vec<Element> = Vec::new();
        loop {
            match reader.read_event()? {
                Event::Start(start) | Event::Empty(start) => {
                    for attr in start.html_attributes() {
                        let attr = attr.map_err(|err| Error::Document(err.to_string()))?;
                        if attr.key.as_ref() != b"id" {
                            continue;
                        }
                        let id = attr
                            .unescape_value()
                            .map_err(|err| Error::Document(err.to_string()))?
                            .into_owned();
                        if elements.iter().any(|element| element.id == id) {
                            tracing::warn!(document = name, id = %id, "duplicate element id, keeping the first");
                            continue;
                        }
                        let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                        elements.push(Element { id, tag });
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        tracing::debug!(document = name, ids = elements.len(), "parsed host document");
        Ok(Self {
            name: name.to_string(),
            elements,
            mounted: HashSet::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn find(&self, selector: &Selector) -> Option<&Element> {
        self.elements
            .iter()
            .find(|element| element.id == selector.id())
    }

    pub fn is_mounted(&self, selector: &Selector) -> bool {
        self.mounted.contains(selector.id())
    }

    /// Claims the element named by `selector`.
    ///
    /// Fails with [`Error::MountTargetNotFound`] when no element matches and
    /// with [`Error::AlreadyMounted`] when the element was claimed before.
    pub fn attach(&mut self, selector: &Selector) -> Result<AttachmentPoint> {
        let element = self
            .find(selector)
            .cloned()
            .ok_or_else(|| Error::MountTargetNotFound {
                selector: selector.to_string(),
            })?;

        if !self.mounted.insert(element.id.clone()) {
            return Err(Error::AlreadyMounted {
                selector: selector.to_string(),
            });
        }

        Ok(AttachmentPoint {
            selector: selector.clone(),
            element,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Selector {
        "#app".parse().unwrap()
    }

    #[test]
    fn embedded_page_has_app_element() {
        let document = HostDocument::embedded().expect("embedded page");
        let element = document.find(&app()).expect("#app present");
        assert_eq!(element.tag, "div");
    }

    #[test]
    fn html_void_elements_and_bare_attributes_are_accepted() {
        let markup = r#"<!DOCTYPE html>
            <html><head><meta charset="utf-8"><link rel=stylesheet href=main.css></head>
            <body><input id="search" disabled><main id="app"></main></body></html>"#;
        let document = HostDocument::parse("inline", markup).expect("parse");
        assert_eq!(document.find(&app()).map(|e| e.tag.as_str()), Some("main"));
        assert!(document.find(&"#search".parse().unwrap()).is_some());
    }

    #[test]
    fn attach_missing_target_fails() {
        let mut document =
            HostDocument::parse("inline", "<html><body><div id=\"root\"></div></body></html>")
                .expect("parse");
        let err = document.attach(&app()).unwrap_err();
        assert_eq!(
            err,
            Error::MountTargetNotFound {
                selector: "#app".into()
            }
        );
    }

    #[test]
    fn second_attach_on_same_target_fails() {
        let mut document = HostDocument::embedded().expect("embedded page");
        let point = document.attach(&app()).expect("first mount");
        assert_eq!(point.element.id, "app");
        assert!(document.is_mounted(&app()));

        let err = document.attach(&app()).unwrap_err();
        assert!(matches!(err, Error::AlreadyMounted { .. }));
    }

    #[test]
    fn duplicate_ids_keep_first_element() {
        let document = HostDocument::parse(
            "inline",
            "<body><section id=\"app\"></section><div id=\"app\"></div></body>",
        )
        .expect("parse");
        assert_eq!(document.find(&app()).map(|e| e.tag.as_str()), Some("section"));
    }

    #[test]
    fn unterminated_tag_is_document_error() {
        let result = HostDocument::parse("inline", "<body><div id=\"app\"");
        assert!(matches!(result, Err(Error::Document(_))));
    }

    #[test]
    fn xml_entities_in_ids_are_unescaped() {
        let document =
            HostDocument::parse("inline", "<body><div id=\"a&amp;b\"></div></body>").expect("parse");
        assert!(document.find(&"#a&b".parse().unwrap()).is_some());
    }

    #[test]
    fn html_named_entity_in_id_is_document_error() {
        let result = HostDocument::parse("inline", "<body><div id=\"a&nbsp;b\"></div></body>");
        assert!(matches!(result, Err(Error::Document(_))));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("page.html");
        fs::write(&path, "<body><div id=\"app\"/></body>").expect("write page");

        let document = HostDocument::from_path(&path).expect("load page");
        assert!(document.find(&app()).is_some());
        assert!(document.name().ends_with("page.html"));
    }
}
