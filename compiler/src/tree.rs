//! The attributed declaration tree handed over by a markup parser, and the
//! closed set of typed views the schema reader works with.
//!
//! The external parser only needs to produce [`Element`] values (directly or
//! as JSON). Everything past [`DialectNode::from_element`] matches on tagged
//! variants instead of comparing tag names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MappingsError;

/// A generic markup element: tag name, attributes, text content and
/// children in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub name:       String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub text:       Option<String>,
    #[serde(default)]
    pub children:   Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element { name: name.into(), ..Default::default() }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn required_attr(&self, name: &str) -> Result<&str, MappingsError> {
        self.attr(name).ok_or_else(|| MappingsError::MissingAttribute {
            element:   self.name.clone(),
            attribute: name.to_string(),
        })
    }

    fn flag(&self, name: &str) -> bool {
        self.attr(name) == Some("true")
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }
}

/// `<deprecated since=".." replaced_by="..">note</deprecated>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeprecatedNode<'a> {
    pub since:       Option<&'a str>,
    pub replaced_by: Option<&'a str>,
    pub note:        Option<&'a str>,
}

impl<'a> DeprecatedNode<'a> {
    fn from_element(el: &'a Element) -> Self {
        DeprecatedNode {
            since:       el.attr("since"),
            replaced_by: el.attr("replaced_by"),
            note:        el.text(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectNode<'a> {
    pub includes: Vec<&'a str>,
    pub version:  Option<&'a str>,
    pub dialect:  Option<&'a str>,
    pub enums:    Vec<EnumNode<'a>>,
    pub messages: Vec<MessageNode<'a>>,
}

impl<'a> DialectNode<'a> {
    pub fn from_element(root: &'a Element) -> Result<Self, MappingsError> {
        if root.name != "mavlink" {
            return Err(MappingsError::UnexpectedRoot(root.name.clone()));
        }

        let mut node = DialectNode {
            includes: Vec::new(),
            version:  None,
            dialect:  None,
            enums:    Vec::new(),
            messages: Vec::new(),
        };

        for child in &root.children {
            match child.name.as_str() {
                "include" => node.includes.extend(child.text().map(str::trim)),
                "version" => node.version = child.text().map(str::trim),
                "dialect" => node.dialect = child.text().map(str::trim),
                "enums" => {
                    for el in child.children_named("enum") {
                        node.enums.push(EnumNode::from_element(el)?);
                    }
                }
                "messages" => {
                    for el in child.children_named("message") {
                        node.messages.push(MessageNode::from_element(el)?);
                    }
                }
                _ => {}
            }
        }

        Ok(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumNode<'a> {
    pub name:        &'a str,
    pub description: Option<&'a str>,
    pub entries:     Vec<EntryNode<'a>>,
}

impl<'a> EnumNode<'a> {
    fn from_element(el: &'a Element) -> Result<Self, MappingsError> {
        let mut description = None;
        let mut entries = Vec::new();
        for child in &el.children {
            match child.name.as_str() {
                "description" => description = child.text(),
                "entry" => entries.push(EntryNode::from_element(child)?),
                _ => {}
            }
        }
        Ok(EnumNode { name: el.required_attr("name")?, description, entries })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryNode<'a> {
    pub name:           &'a str,
    pub value:          Option<&'a str>,
    pub has_location:   bool,
    pub is_destination: bool,
    pub description:    Option<&'a str>,
    pub params:         Vec<ParamNode<'a>>,
    pub wip:            bool,
    pub deprecated:     Option<DeprecatedNode<'a>>,
}

impl<'a> EntryNode<'a> {
    fn from_element(el: &'a Element) -> Result<Self, MappingsError> {
        let mut entry = EntryNode {
            name:           el.required_attr("name")?,
            value:          el.attr("value"),
            has_location:   el.flag("hasLocation"),
            is_destination: el.flag("isDestination"),
            description:    None,
            params:         Vec::new(),
            wip:            false,
            deprecated:     None,
        };
        for child in &el.children {
            match child.name.as_str() {
                "description" => entry.description = child.text(),
                "param" => entry.params.push(ParamNode::from_element(child)),
                "wip" => entry.wip = true,
                "deprecated" => entry.deprecated = Some(DeprecatedNode::from_element(child)),
                _ => {}
            }
        }
        Ok(entry)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamNode<'a> {
    pub index:       Option<&'a str>,
    pub label:       Option<&'a str>,
    pub units:       Option<&'a str>,
    pub min_value:   Option<&'a str>,
    pub max_value:   Option<&'a str>,
    pub increment:   Option<&'a str>,
    pub enum_name:   Option<&'a str>,
    pub reserved:    bool,
    pub description: Option<&'a str>,
}

impl<'a> ParamNode<'a> {
    fn from_element(el: &'a Element) -> Self {
        ParamNode {
            index:       el.attr("index"),
            label:       el.attr("label"),
            units:       el.attr("units"),
            min_value:   el.attr("minValue"),
            max_value:   el.attr("maxValue"),
            increment:   el.attr("increment"),
            enum_name:   el.attr("enum"),
            reserved:    el.flag("reserved"),
            description: el.text(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldNode<'a> {
    pub name:        &'a str,
    pub type_name:   &'a str,
    pub enum_name:   Option<&'a str>,
    pub units:       Option<&'a str>,
    pub description: Option<&'a str>,
}

/// One child of `<message>`, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageItem<'a> {
    Field(FieldNode<'a>),
    /// Every field after this marker is an extension field.
    Extensions,
    /// Work-in-progress marker; the whole message is dropped.
    Wip,
    Description(&'a str),
    Deprecated(DeprecatedNode<'a>),
    Other(&'a str),
}

impl<'a> MessageItem<'a> {
    pub fn from_element(el: &'a Element) -> Result<Self, MappingsError> {
        Ok(match el.name.as_str() {
            "field" => MessageItem::Field(FieldNode {
                name:        el.required_attr("name")?,
                type_name:   el.required_attr("type")?,
                enum_name:   el.attr("enum"),
                units:       el.attr("units"),
                description: el.text(),
            }),
            "extensions" => MessageItem::Extensions,
            "wip" => MessageItem::Wip,
            "description" => MessageItem::Description(el.text().unwrap_or("")),
            "deprecated" => MessageItem::Deprecated(DeprecatedNode::from_element(el)),
            other => MessageItem::Other(other),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageNode<'a> {
    pub id:    &'a str,
    pub name:  &'a str,
    pub items: Vec<MessageItem<'a>>,
}

impl<'a> MessageNode<'a> {
    fn from_element(el: &'a Element) -> Result<Self, MappingsError> {
        let items = el
            .children
            .iter()
            .map(MessageItem::from_element)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MessageNode {
            id: el.required_attr("id")?,
            name: el.required_attr("name")?,
            items,
        })
    }

    pub fn is_work_in_progress(&self) -> bool {
        self.items.iter().any(|item| matches!(item, MessageItem::Wip))
    }
}
