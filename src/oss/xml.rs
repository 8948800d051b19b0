// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Minimal XML tree abstractions used by the inventory mapping layer.
//!
//! Reading goes through the [`XmlTree`] trait so the decoders only ever see
//! "named node with text and child elements"; [`xmltree::Element`] is the one
//! concrete parser adapted here. Writing goes through [`XmlNode`], a small
//! builder emitted with the `xml-rs` event writer (which takes care of
//! escaping).

use std::borrow::Cow;

use ::xml::reader::{EventReader, XmlEvent as ReaderEvent};
use ::xml::writer::{EmitterConfig, EventWriter, XmlEvent};

use crate::oss::error::{Error, Result};

/// Deepest element nesting accepted by [`parse_document`]. Inventory
/// documents nest about five levels.
pub const MAX_DOCUMENT_DEPTH: usize = 64;

/// A tree of named nodes, as seen by the field extractor.
pub trait XmlTree {
    /// Tag name of this node as written, including any `prefix:`. No
    /// namespace resolution is performed.
    fn name(&self) -> Cow<'_, str>;

    /// Concatenated text content of this node, if any.
    fn text(&self) -> Option<Cow<'_, str>>;

    /// Child elements in document order.
    fn child_elements(&self) -> impl Iterator<Item = &Self>;
}

impl XmlTree for xmltree::Element {
    fn name(&self) -> Cow<'_, str> {
        match &self.prefix {
            Some(prefix) => Cow::Owned(format!("{prefix}:{}", self.name)),
            None => Cow::Borrowed(self.name.as_str()),
        }
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        self.get_text()
    }

    fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|c| c.as_element())
    }
}

/// Parses a byte buffer into an [`xmltree::Element`] tree.
///
/// The tree builder recurses per element, so nesting is checked with a
/// streaming pass first and documents deeper than [`MAX_DOCUMENT_DEPTH`] are
/// rejected.
pub fn parse_document(body: &[u8]) -> Result<xmltree::Element> {
    check_depth(body)?;
    Ok(xmltree::Element::parse(body)?)
}

fn check_depth(body: &[u8]) -> Result<()> {
    let mut depth = 0usize;
    for event in EventReader::new(body) {
        match event {
            Ok(ReaderEvent::StartElement { .. }) => {
                depth += 1;
                if depth > MAX_DOCUMENT_DEPTH {
                    return Err(Error::XmlTooDeep {
                        limit: MAX_DOCUMENT_DEPTH,
                    });
                }
            }
            Ok(ReaderEvent::EndElement { .. }) => depth = depth.saturating_sub(1),
            Ok(_) => {}
            // syntax errors are reported by the tree builder
            Err(_) => break,
        }
    }
    Ok(())
}

/// Returns true if XML 1.0 allows `c` in character data.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Element node for the XML writer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    text: Option<String>,
    children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: &str) -> XmlNode {
        XmlNode {
            name: name.to_string(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn text(mut self, value: &str) -> XmlNode {
        self.text = Some(value.to_string());
        self
    }

    pub fn child(mut self, kid: XmlNode) -> XmlNode {
        self.children.push(kid);
        self
    }

    pub fn children(mut self, kids: Vec<XmlNode>) -> XmlNode {
        self.children.extend(kids);
        self
    }

    /// Shorthand for `<name>value</name>`.
    pub fn leaf(name: &str, value: &str) -> XmlNode {
        XmlNode::new(name).text(value)
    }

    fn serialize_rec<W>(&self, xml_writer: &mut EventWriter<W>) -> ::xml::writer::Result<()>
    where
        W: std::io::Write,
    {
        xml_writer.write(XmlEvent::start_element(self.name.as_str()))?;

        // A node carries either text or child nodes.
        match &self.text {
            Some(content) => {
                xml_writer.write(XmlEvent::characters(content.as_str()))?;
            }
            None => {
                for child in &self.children {
                    child.serialize_rec(xml_writer)?;
                }
            }
        }

        let end_elem: XmlEvent = XmlEvent::end_element().name(self.name.as_str()).into();
        xml_writer.write(end_elem)?;

        Ok(())
    }

    pub fn serialize<W>(&self, writer: W) -> ::xml::writer::Result<()>
    where
        W: std::io::Write,
    {
        let mut xml_writer = EmitterConfig::new()
            .perform_indent(false)
            .write_document_declaration(true)
            .create_writer(writer);
        self.serialize_rec(&mut xml_writer)
    }

    fn check_text(&self) -> Result<()> {
        if let Some(text) = &self.text {
            if let Some(c) = text.chars().find(|c| !is_xml_char(*c)) {
                return Err(Error::InvalidConfig(format!(
                    "text of <{}> contains character {:?} which XML does not allow",
                    self.name, c
                )));
            }
        }
        self.children.iter().try_for_each(|c| c.check_text())
    }

    /// Serializes this node into a UTF-8 document string.
    ///
    /// Fails with [`Error::InvalidConfig`] if any text holds a character that
    /// cannot appear in an XML document, such as most ASCII control codes.
    pub fn to_xml_string(&self) -> Result<String> {
        self.check_text()?;
        let mut buf = Vec::new();
        self.serialize(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}
