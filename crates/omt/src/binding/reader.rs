// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! roxmltree-backed OMT document reader.

use std::collections::BTreeMap;

use roxmltree::{Document, Node};

use crate::error::DocumentError;
use crate::mim;
use crate::model::{
    Alternative, Annotations, ArrayData, Attribute, BasicData, DataTypes, Element, EnumeratedData, Enumerator,
    Field, FixedRecordData, InteractionClass, Module, Namespace, ObjectClass, Parameter,
    SimpleData, Transportation, VariantRecordData,
};

const XML_NS_PREFIX: &str = "xml";

type ReadResult<T> = Result<T, DocumentError>;

pub(super) fn read_module(text: &str) -> ReadResult<Module> {
    let doc = Document::parse(text)?;
    let root = doc.root_element();

    if root.tag_name().name() != mim::OBJECT_MODEL {
        return Err(DocumentError::Structure(format!(
            "expected <{}> root element, found <{}>",
            mim::OBJECT_MODEL,
            root.tag_name().name()
        )));
    }

    let mut module = Module {
        namespaces: root
            .namespaces()
            .filter(|ns| ns.name() != Some(XML_NS_PREFIX))
            .map(|ns| Namespace {
                prefix: ns.name().map(str::to_string),
                uri: ns.uri().to_string(),
            })
            .collect(),
        attributes: read_attributes(root),
        ..Module::default()
    };

    for section in elements(root) {
        let tag = section.tag_name().name();
        if matches!(tag, "objects" | "interactions" | "transportations") {
            let attributes = read_attributes(section);
            if attributes.is_empty() {
                module.section_attributes.remove(tag);
            } else {
                module.section_attributes.insert(tag.to_string(), attributes);
            }
        }

        match tag {
            "objects" => {
                module.objects = child(section, "objectClass")
                    .map(read_object_class)
                    .transpose()?;
            }
            "interactions" => {
                module.interactions = child(section, "interactionClass")
                    .map(read_interaction_class)
                    .transpose()?;
            }
            "transportations" => {
                module.transportations = Some(
                    children(section, "transportation")
                        .map(read_transportation)
                        .collect::<ReadResult<_>>()?,
                );
            }
            "dataTypes" => module.data_types = Some(read_data_types(section)?),
            _ => module.sections.push(read_element(section)),
        }
    }

    log::debug!(
        "[omt] parsed module {} ({} preserved sections)",
        module.model_name().unwrap_or("<unnamed>"),
        module.sections.len()
    );
    Ok(module)
}

// ---------------------------------------------------------------------------
// Node helpers
// ---------------------------------------------------------------------------

fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

fn children<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    elements(node).filter(move |n| n.tag_name().name() == name)
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    elements(node).find(|n| n.tag_name().name() == name)
}

/// All text children joined; a comment or processing instruction splits the
/// text into several nodes.
fn text_of(node: Node<'_, '_>) -> Option<String> {
    let text: String = node
        .children()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    child(node, name).and_then(text_of)
}

fn child_texts(node: Node<'_, '_>, name: &'static str) -> Vec<String> {
    children(node, name).filter_map(text_of).collect()
}

/// `<dimensions><dimension>..</dimension>*</dimensions>`
fn dimensions(node: Node<'_, '_>) -> Vec<String> {
    child(node, "dimensions")
        .map(|d| child_texts(d, "dimension"))
        .unwrap_or_default()
}

fn required_name(node: Node<'_, '_>) -> ReadResult<String> {
    child_text(node, "name").ok_or_else(|| {
        DocumentError::Structure(format!("<{}> without a name", node.tag_name().name()))
    })
}

fn qualified_name(node: Node<'_, '_>, local: &str, namespace: Option<&str>) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) => format!("{}:{}", prefix, local),
        None => local.to_string(),
    }
}

fn read_attributes(node: Node<'_, '_>) -> Vec<(String, String)> {
    node.attributes()
        .map(|a| (qualified_name(node, a.name(), a.namespace()), a.value().to_string()))
        .collect()
}

/// Attributes of `node` and of the first occurrence of each of its `leaves`,
/// the occurrence read into the model.
fn annotations(node: Node<'_, '_>, leaves: &[&str]) -> Annotations {
    let mut annotations = Annotations {
        element: read_attributes(node),
        leaves: BTreeMap::new(),
    };
    for &tag in leaves {
        if let Some(leaf) = child(node, tag) {
            insert_leaf(&mut annotations, tag, 0, leaf);
        }
    }
    annotations
}

/// Repeated leaves, indexed like the non-empty values read from them.
fn repeated_leaves(annotations: &mut Annotations, parent: Node<'_, '_>, tag: &'static str) {
    let kept = children(parent, tag).filter(|n| text_of(*n).is_some());
    for (index, leaf) in kept.enumerate() {
        insert_leaf(annotations, tag, index, leaf);
    }
}

fn dimension_leaves(annotations: &mut Annotations, node: Node<'_, '_>) {
    if let Some(dimensions) = child(node, "dimensions") {
        insert_leaf(annotations, "dimensions", 0, dimensions);
        repeated_leaves(annotations, dimensions, "dimension");
    }
}

fn insert_leaf(annotations: &mut Annotations, tag: &str, index: usize, leaf: Node<'_, '_>) {
    let attributes = read_attributes(leaf);
    if !attributes.is_empty() {
        annotations.leaves.insert((tag.to_string(), index), attributes);
    }
}

fn read_element(node: Node<'_, '_>) -> Element {
    let children: Vec<Element> = elements(node).map(read_element).collect();
    Element {
        name: qualified_name(node, node.tag_name().name(), node.tag_name().namespace()),
        attributes: read_attributes(node),
        text: text_of(node),
        children,
    }
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

fn read_object_class(node: Node<'_, '_>) -> ReadResult<ObjectClass> {
    Ok(ObjectClass {
        name: required_name(node)?,
        sharing: child_text(node, "sharing"),
        semantics: child_text(node, "semantics"),
        attributes: children(node, "attribute")
            .map(read_attribute)
            .collect::<ReadResult<_>>()?,
        children: children(node, "objectClass")
            .map(read_object_class)
            .collect::<ReadResult<_>>()?,
        annotations: annotations(node, &["name", "sharing", "semantics"]),
    })
}

fn read_attribute(node: Node<'_, '_>) -> ReadResult<Attribute> {
    Ok(Attribute {
        name: required_name(node)?,
        data_type: child_text(node, "dataType"),
        update_type: child_text(node, "updateType"),
        update_condition: child_text(node, "updateCondition"),
        ownership: child_text(node, "ownership"),
        sharing: child_text(node, "sharing"),
        dimensions: dimensions(node),
        transportation: child_text(node, "transportation"),
        order: child_text(node, "order"),
        semantics: child_text(node, "semantics"),
        annotations: {
            let mut ann = annotations(
                node,
                &[
                    "name",
                    "dataType",
                    "updateType",
                    "updateCondition",
                    "ownership",
                    "sharing",
                    "transportation",
                    "order",
                    "semantics",
                ],
            );
            dimension_leaves(&mut ann, node);
            ann
        },
    })
}

fn read_interaction_class(node: Node<'_, '_>) -> ReadResult<InteractionClass> {
    Ok(InteractionClass {
        name: required_name(node)?,
        sharing: child_text(node, "sharing"),
        dimensions: dimensions(node),
        transportation: child_text(node, "transportation"),
        order: child_text(node, "order"),
        semantics: child_text(node, "semantics"),
        parameters: children(node, "parameter")
            .map(read_parameter)
            .collect::<ReadResult<_>>()?,
        children: children(node, "interactionClass")
            .map(read_interaction_class)
            .collect::<ReadResult<_>>()?,
        annotations: {
            let mut ann =
                annotations(node, &["name", "sharing", "transportation", "order", "semantics"]);
            dimension_leaves(&mut ann, node);
            ann
        },
    })
}

fn read_parameter(node: Node<'_, '_>) -> ReadResult<Parameter> {
    Ok(Parameter {
        name: required_name(node)?,
        data_type: child_text(node, "dataType"),
        semantics: child_text(node, "semantics"),
        annotations: annotations(node, &["name", "dataType", "semantics"]),
    })
}

fn read_transportation(node: Node<'_, '_>) -> ReadResult<Transportation> {
    Ok(Transportation {
        name: required_name(node)?,
        reliable: child_text(node, "reliable"),
        semantics: child_text(node, "semantics"),
        annotations: annotations(node, &["name", "reliable", "semantics"]),
    })
}

// ---------------------------------------------------------------------------
// Datatypes
// ---------------------------------------------------------------------------

fn read_group<T>(
    node: Node<'_, '_>,
    group: &str,
    item: &'static str,
    read: fn(Node<'_, '_>) -> ReadResult<T>,
) -> ReadResult<Vec<T>> {
    match child(node, group) {
        Some(group) => children(group, item).map(read).collect(),
        None => Ok(Vec::new()),
    }
}

const DATATYPE_GROUPS: [&str; 6] = [
    "basicDataRepresentations",
    "simpleDataTypes",
    "enumeratedDataTypes",
    "arrayDataTypes",
    "fixedRecordDataTypes",
    "variantRecordDataTypes",
];

fn read_data_types(node: Node<'_, '_>) -> ReadResult<DataTypes> {
    Ok(DataTypes {
        basic_data_representations: read_group(node, "basicDataRepresentations", "basicData", read_basic)?,
        simple_data_types: read_group(node, "simpleDataTypes", "simpleData", read_simple)?,
        enumerated_data_types: read_group(node, "enumeratedDataTypes", "enumeratedData", read_enumerated)?,
        array_data_types: read_group(node, "arrayDataTypes", "arrayData", read_array)?,
        fixed_record_data_types: read_group(node, "fixedRecordDataTypes", "fixedRecordData", read_fixed_record)?,
        variant_record_data_types: read_group(node, "variantRecordDataTypes", "variantRecordData", read_variant_record)?,
        annotations: annotations(node, &DATATYPE_GROUPS),
    })
}

fn read_basic(node: Node<'_, '_>) -> ReadResult<BasicData> {
    Ok(BasicData {
        name: required_name(node)?,
        size: child_text(node, "size"),
        interpretation: child_text(node, "interpretation"),
        endian: child_text(node, "endian"),
        encoding: child_text(node, "encoding"),
        annotations: annotations(node, &["name", "size", "interpretation", "endian", "encoding"]),
    })
}

fn read_simple(node: Node<'_, '_>) -> ReadResult<SimpleData> {
    Ok(SimpleData {
        name: required_name(node)?,
        representation: child_text(node, "representation").unwrap_or_default(),
        units: child_text(node, "units"),
        resolution: child_text(node, "resolution"),
        accuracy: child_text(node, "accuracy"),
        semantics: child_text(node, "semantics"),
        annotations: annotations(
            node,
            &["name", "representation", "units", "resolution", "accuracy", "semantics"],
        ),
    })
}

fn read_enumerated(node: Node<'_, '_>) -> ReadResult<EnumeratedData> {
    Ok(EnumeratedData {
        name: required_name(node)?,
        representation: child_text(node, "representation").unwrap_or_default(),
        semantics: child_text(node, "semantics"),
        enumerators: children(node, "enumerator")
            .map(|e| -> ReadResult<Enumerator> {
                Ok(Enumerator {
                    name: required_name(e)?,
                    values: child_texts(e, "value"),
                    annotations: {
                        let mut ann = annotations(e, &["name"]);
                        repeated_leaves(&mut ann, e, "value");
                        ann
                    },
                })
            })
            .collect::<ReadResult<_>>()?,
        annotations: annotations(node, &["name", "representation", "semantics"]),
    })
}

fn read_array(node: Node<'_, '_>) -> ReadResult<ArrayData> {
    Ok(ArrayData {
        name: required_name(node)?,
        data_type: child_text(node, "dataType").unwrap_or_default(),
        cardinality: child_text(node, "cardinality").unwrap_or_default(),
        encoding: child_text(node, "encoding").unwrap_or_default(),
        semantics: child_text(node, "semantics"),
        annotations: annotations(node, &["name", "dataType", "cardinality", "encoding", "semantics"]),
    })
}

fn read_fixed_record(node: Node<'_, '_>) -> ReadResult<FixedRecordData> {
    Ok(FixedRecordData {
        name: required_name(node)?,
        encoding: child_text(node, "encoding"),
        semantics: child_text(node, "semantics"),
        fields: children(node, "field")
            .map(|f| -> ReadResult<Field> {
                Ok(Field {
                    name: required_name(f)?,
                    data_type: child_text(f, "dataType").unwrap_or_default(),
                    semantics: child_text(f, "semantics"),
                    annotations: annotations(f, &["name", "dataType", "semantics"]),
                })
            })
            .collect::<ReadResult<_>>()?,
        annotations: annotations(node, &["name", "encoding", "semantics"]),
    })
}

fn read_variant_record(node: Node<'_, '_>) -> ReadResult<VariantRecordData> {
    Ok(VariantRecordData {
        name: required_name(node)?,
        discriminant: child_text(node, "discriminant").unwrap_or_default(),
        data_type: child_text(node, "dataType").unwrap_or_default(),
        alternatives: children(node, "alternative")
            .map(|a| -> ReadResult<Alternative> {
                Ok(Alternative {
                    enumerator: child_text(a, "enumerator").unwrap_or_default(),
                    name: required_name(a)?,
                    data_type: child_text(a, "dataType"),
                    semantics: child_text(a, "semantics"),
                    annotations: annotations(a, &["enumerator", "name", "dataType", "semantics"]),
                })
            })
            .collect::<ReadResult<_>>()?,
        encoding: child_text(node, "encoding"),
        semantics: child_text(node, "semantics"),
        annotations: annotations(
            node,
            &["name", "discriminant", "dataType", "encoding", "semantics"],
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_foreign_root() {
        let err = read_module("<dds><profiles/></dds>").unwrap_err();
        assert!(matches!(err, DocumentError::Structure(msg) if msg.contains("<dds>")));
    }

    #[test]
    fn test_rejects_unnamed_class() {
        let xml = r#"<objectModel xmlns="http://standards.ieee.org/IEEE1516-2010">
            <objects><objectClass><sharing>Neither</sharing></objectClass></objects>
        </objectModel>"#;
        let err = read_module(xml).unwrap_err();
        assert!(matches!(err, DocumentError::Structure(msg) if msg.contains("objectClass")));
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(read_module("<objectModel>"), Err(DocumentError::Xml(_))));
    }

    #[test]
    fn test_namespaces_and_root_attributes() {
        let xml = r#"<objectModel xmlns="http://standards.ieee.org/IEEE1516-2010"
                xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                xsi:schemaLocation="http://standards.ieee.org/IEEE1516-2010 IEEE1516-DIF-2010.xsd">
            <modelIdentification><name>Sample</name></modelIdentification>
        </objectModel>"#;
        let module = read_module(xml).unwrap();

        assert_eq!(module.namespaces.len(), 2);
        assert!(module
            .namespaces
            .iter()
            .any(|ns| ns.prefix.is_none() && ns.uri == mim::OMT_2010_NAMESPACE));
        assert!(module.namespaces.iter().any(|ns| ns.prefix.as_deref() == Some("xsi")));
        assert_eq!(module.attributes[0].0, "xsi:schemaLocation");
        assert_eq!(module.model_name(), Some("Sample"));
    }

    #[test]
    fn test_reads_class_members_and_dimensions() {
        let xml = r#"<objectModel xmlns="http://standards.ieee.org/IEEE1516-2010">
            <objects>
                <objectClass>
                    <name>HLAobjectRoot</name>
                    <attribute>
                        <name>HLAprivilegeToDeleteObject</name>
                        <dataType>HLAtoken</dataType>
                        <dimensions><dimension>D1</dimension><dimension>D2</dimension></dimensions>
                        <transportation>HLAreliable</transportation>
                    </attribute>
                    <objectClass><name>BaseEntity</name><sharing>PublishSubscribe</sharing></objectClass>
                </objectClass>
            </objects>
        </objectModel>"#;
        let module = read_module(xml).unwrap();
        let root = module.objects.as_ref().unwrap();

        assert_eq!(root.attributes[0].dimensions, ["D1", "D2"]);
        assert_eq!(root.attributes[0].transportation.as_deref(), Some(mim::HLA_RELIABLE));
        assert_eq!(root.children[0].sharing.as_deref(), Some("PublishSubscribe"));
        assert!(module.interactions.is_none());
    }

    #[test]
    fn test_text_split_by_comments_is_joined() {
        let xml = r#"<objectModel xmlns="http://standards.ieee.org/IEEE1516-2010">
            <objects>
                <objectClass>
                    <name>HLAobject<!-- split -->Root</name>
                    <semantics>first <!-- c --> second</semantics>
                    <attribute><name>Token</name><dataType>HLA<!--x-->token</dataType></attribute>
                </objectClass>
            </objects>
            <notes><note><semantics>a<?pi data?>b</semantics></note></notes>
        </objectModel>"#;
        let module = read_module(xml).unwrap();
        let root = module.objects.as_ref().unwrap();

        assert_eq!(root.name, mim::HLA_OBJECT_ROOT);
        assert_eq!(root.semantics.as_deref(), Some("first  second"));
        assert_eq!(root.attributes[0].data_type.as_deref(), Some(mim::HLA_TOKEN));

        let note = module.sections[0].children[0].child("semantics").unwrap();
        assert_eq!(note.text.as_deref(), Some("ab"));
    }

    #[test]
    fn test_reads_element_and_leaf_attributes() {
        let xml = r#"<objectModel xmlns="http://standards.ieee.org/IEEE1516-2010">
            <objects notes="RPRnoteBase0">
                <objectClass notes="RPRnoteBase1">
                    <name idtag="root" notes="RPRnoteBase2">HLAobjectRoot</name>
                    <attribute notes="RPRnoteBase3">
                        <name>Spatial</name>
                        <dimensions notes="RPRnoteBase4">
                            <dimension>D1</dimension>
                            <dimension notes="RPRnoteBase5">D2</dimension>
                        </dimensions>
                    </attribute>
                </objectClass>
            </objects>
            <dataTypes>
                <simpleDataTypes notes="RPRnoteBase6">
                    <simpleData notes="RPRnoteBase7">
                        <name>Octet</name>
                        <representation notes="RPRnoteBase8">HLAoctet</representation>
                    </simpleData>
                </simpleDataTypes>
            </dataTypes>
        </objectModel>"#;
        let module = read_module(xml).unwrap();

        assert_eq!(module.section_attributes["objects"][0].1, "RPRnoteBase0");
        let root = module.objects.as_ref().unwrap();
        assert_eq!(root.annotations.notes(), Some("RPRnoteBase1"));
        assert_eq!(
            root.annotations.leaf("name", 0),
            [
                ("idtag".to_string(), "root".to_string()),
                ("notes".to_string(), "RPRnoteBase2".to_string()),
            ]
        );
        // Attribute notes stay on the attribute, not on its class.
        assert!(root.annotations.leaf("attribute", 0).is_empty());

        let spatial = &root.attributes[0].annotations;
        assert_eq!(spatial.notes(), Some("RPRnoteBase3"));
        assert_eq!(spatial.leaf("dimensions", 0)[0].1, "RPRnoteBase4");
        assert!(spatial.leaf("dimension", 0).is_empty());
        assert_eq!(spatial.leaf("dimension", 1)[0].1, "RPRnoteBase5");

        let data_types = module.data_types.as_ref().unwrap();
        assert_eq!(data_types.annotations.leaf("simpleDataTypes", 0)[0].1, "RPRnoteBase6");
        let octet = &data_types.simple_data_types[0].annotations;
        assert_eq!(octet.notes(), Some("RPRnoteBase7"));
        assert_eq!(octet.leaf("representation", 0)[0].1, "RPRnoteBase8");
    }
}
