//! Rich-text note serializer.
//!
//! The downstream case-management editor ingests a Lexical-style node tree.
//! Node shapes are an external contract: text nodes carry exactly
//! `detail/format/mode/style/text/type/version`, element nodes carry
//! `children/direction/format/indent/type/version` plus the list attributes
//! when the node is a list. Renaming or dropping a key breaks the editor.

use serde::Serialize;

use super::{NoteOutline, OutlineField};

/// Title text marking notes created by the migration. Callers check for it
/// before creating a note so reruns do not duplicate.
pub const MIGRATED_FROM_PROOFER_TEXT: &str = "Migrated from Proofer";

/// Divider paragraph text placed after every section.
const DIVIDER: &str = "==============================================";

const BOLD: u8 = 1;
const PLAIN: u8 = 0;

/// One node of the editor tree.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Node {
    Text(TextNode),
    LineBreak(LineBreakNode),
    Element(ElementNode),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TextNode {
    pub detail: u8,
    pub format: u8,
    pub mode: &'static str,
    pub style: &'static str,
    pub text: String,
    #[serde(rename = "type")]
    pub node_type: &'static str,
    pub version: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LineBreakNode {
    #[serde(rename = "type")]
    pub node_type: &'static str,
    pub version: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ElementNode {
    pub children: Vec<Node>,
    pub direction: &'static str,
    pub format: &'static str,
    pub indent: u8,
    #[serde(rename = "type")]
    pub node_type: &'static str,
    pub version: u8,
    #[serde(rename = "listType", skip_serializing_if = "Option::is_none")]
    pub list_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
}

/// The complete note document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InternalNote {
    pub root: ElementNode,
}

fn text_node(text: impl Into<String>, format: u8) -> Node {
    Node::Text(TextNode {
        detail: 0,
        format,
        mode: "normal",
        style: "",
        text: text.into(),
        node_type: "text",
        version: 1,
    })
}

fn linebreak() -> Node {
    Node::LineBreak(LineBreakNode {
        node_type: "linebreak",
        version: 1,
    })
}

fn element(node_type: &'static str, children: Vec<Node>) -> ElementNode {
    ElementNode {
        children,
        direction: "ltr",
        format: "",
        indent: 0,
        node_type,
        version: 1,
        list_type: None,
        start: None,
        tag: None,
        value: None,
    }
}

fn paragraph(children: Vec<Node>) -> Node {
    Node::Element(element("paragraph", children))
}

fn bullet_list(items: Vec<Node>) -> Node {
    let mut list = element("list", items);
    list.list_type = Some("bullet");
    list.start = Some(1);
    list.tag = Some("ul");
    Node::Element(list)
}

fn list_item(children: Vec<Node>, value: u32) -> Node {
    let mut item = element("listitem", children);
    item.value = Some(value);
    Node::Element(item)
}

/// Value lines interleaved with linebreak nodes.
fn value_nodes(lines: &[String]) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(lines.len() * 2);
    for (position, line) in lines.iter().enumerate() {
        if position > 0 {
            nodes.push(linebreak());
        }
        nodes.push(text_node(line.clone(), PLAIN));
    }
    nodes
}

fn field_item(field: &OutlineField, value: u32) -> Node {
    let mut children = Vec::new();
    if let Some(label) = field.label {
        children.push(text_node(label, BOLD));
        children.push(linebreak());
    }
    children.extend(value_nodes(&field.lines));
    list_item(children, value)
}

/// Serializes the outline into the editor tree: bold title, one empty
/// paragraph, then per section a bold heading paragraph, a bullet list of
/// its fields, and a divider paragraph.
#[must_use]
pub fn build_internal_note(outline: &NoteOutline) -> InternalNote {
    let mut children = vec![
        paragraph(vec![text_node(MIGRATED_FROM_PROOFER_TEXT, BOLD)]),
        paragraph(Vec::new()),
    ];

    for section in &outline.sections {
        children.push(paragraph(vec![text_node(section.heading, BOLD)]));
        children.push(bullet_list(
            section
                .fields
                .iter()
                .enumerate()
                .map(|(position, field)| field_item(field, position as u32 + 1))
                .collect(),
        ));
        children.push(paragraph(vec![text_node(DIVIDER, PLAIN)]));
    }

    InternalNote {
        root: element("root", children),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{FieldAnswer, FieldLookup};
    use crate::note::build_outline;

    fn note_for(pairs: &[(&str, &str)]) -> InternalNote {
        let answers: Vec<FieldAnswer> = pairs
            .iter()
            .map(|&(name, value)| FieldAnswer {
                field_name: name.to_string(),
                field_value: Some(value.to_string()),
            })
            .collect();
        build_internal_note(&build_outline(&FieldLookup::from_answers(&answers)))
    }

    #[test]
    fn test_note_shape_title_sections_dividers() {
        let note = note_for(&[]);
        // Title + spacer + 16 x (heading, list, divider).
        assert_eq!(note.root.children.len(), 2 + 16 * 3);
        assert_eq!(note.root.node_type, "root");

        let Node::Element(title) = &note.root.children[0] else {
            panic!("title paragraph expected");
        };
        let Node::Text(text) = &title.children[0] else {
            panic!("title text expected");
        };
        assert_eq!(text.text, MIGRATED_FROM_PROOFER_TEXT);
        assert_eq!(text.format, BOLD);
    }

    #[test]
    fn test_labeled_field_is_label_linebreak_value() {
        let note = note_for(&[("Contact_Name", "Jane Doe")]);
        // Sections start at child 2; Address & Contact Information is the
        // third section, its list follows its heading paragraph.
        let Node::Element(list) = &note.root.children[2 + 2 * 3 + 1] else {
            panic!("list expected");
        };
        assert_eq!(list.list_type, Some("bullet"));
        let Node::Element(item) = &list.children[0] else {
            panic!("listitem expected");
        };
        assert_eq!(item.value, Some(1));
        assert_eq!(item.children.len(), 3);
        let Node::Text(label) = &item.children[0] else {
            panic!("label expected");
        };
        assert_eq!(label.text, "Contact Name:");
        assert_eq!(label.format, BOLD);
        assert!(matches!(item.children[1], Node::LineBreak(_)));
        let Node::Text(value) = &item.children[2] else {
            panic!("value expected");
        };
        assert_eq!(value.text, "Jane Doe");
        assert_eq!(value.format, PLAIN);
    }

    #[test]
    fn test_unlabeled_multiline_interleaves_linebreaks() {
        let note = note_for(&[(
            "applicant_information_internal_note_LT",
            "Line1\n====\nLine2",
        )]);
        let Node::Element(list) = &note.root.children[3] else {
            panic!("list expected");
        };
        let Node::Element(item) = &list.children[0] else {
            panic!("listitem expected");
        };
        // No label node, dividers stripped: text, linebreak, text.
        assert_eq!(item.children.len(), 3);
        let Node::Text(first) = &item.children[0] else {
            panic!("text expected");
        };
        assert_eq!(first.text, "Line1");
        assert!(matches!(item.children[1], Node::LineBreak(_)));
    }

    #[test]
    fn test_serializes_with_external_key_names() {
        let json = serde_json::to_value(&note_for(&[])).unwrap();
        let list = &json["root"]["children"][3];
        assert_eq!(list["type"], "list");
        assert_eq!(list["listType"], "bullet");
        assert_eq!(list["tag"], "ul");
        // Paragraphs must not carry list attributes.
        let title = &json["root"]["children"][0];
        assert!(title.get("listType").is_none());
        assert_eq!(title["children"][0]["detail"], 0);
        assert_eq!(title["children"][0]["mode"], "normal");
    }
}
