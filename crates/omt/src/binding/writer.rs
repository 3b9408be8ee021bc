// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! OMT document writer.
//!
//! Sections and the elements inside each node are emitted in IEEE 1516-2010
//! schema order so the output validates and re-parses to the same tree.

use crate::model::{
    Annotations, Attribute, DataTypes, Element, InteractionClass, Module, ObjectClass, Parameter,
    Transportation,
};
use crate::mim;

/// Top-level section order of an `objectModel`.
const SECTION_ORDER: [&str; 13] = [
    "modelIdentification",
    "serviceUtilization",
    "objects",
    "interactions",
    "dimensions",
    "time",
    "tags",
    "synchronizations",
    "transportations",
    "switches",
    "updateRates",
    "dataTypes",
    "notes",
];

pub(super) fn write_module(module: &Module, pretty: bool, indent: usize) -> String {
    let mut w = XmlWriter::new(pretty, indent);
    w.declaration();

    let mut root_attrs: Vec<(String, String)> = module
        .namespaces
        .iter()
        .map(|ns| match &ns.prefix {
            Some(prefix) => (format!("xmlns:{}", prefix), ns.uri.clone()),
            None => ("xmlns".to_string(), ns.uri.clone()),
        })
        .collect();
    root_attrs.extend(module.attributes.iter().cloned());
    w.open(mim::OBJECT_MODEL, &borrowed(&root_attrs));

    for section in SECTION_ORDER {
        let section_attrs = module
            .section_attributes
            .get(section)
            .map_or(&[][..], Vec::as_slice);
        match section {
            "objects" => {
                if module.objects.is_some() || !section_attrs.is_empty() {
                    w.open("objects", &borrowed(section_attrs));
                    if let Some(root) = &module.objects {
                        write_object_class(&mut w, root);
                    }
                    w.close("objects");
                }
            }
            "interactions" => {
                if module.interactions.is_some() || !section_attrs.is_empty() {
                    w.open("interactions", &borrowed(section_attrs));
                    if let Some(root) = &module.interactions {
                        write_interaction_class(&mut w, root);
                    }
                    w.close("interactions");
                }
            }
            "transportations" => {
                if let Some(list) = &module.transportations {
                    w.open("transportations", &borrowed(section_attrs));
                    list.iter().for_each(|t| write_transportation(&mut w, t));
                    w.close("transportations");
                }
            }
            "dataTypes" => {
                if let Some(data_types) = &module.data_types {
                    write_data_types(&mut w, data_types);
                }
            }
            name => module
                .sections
                .iter()
                .filter(|s| s.name == name)
                .for_each(|s| w.element(s)),
        }
    }

    // Sections from other schema revisions keep their relative order at the end.
    module
        .sections
        .iter()
        .filter(|s| !SECTION_ORDER.contains(&s.name.as_str()))
        .for_each(|s| w.element(s));

    w.close(mim::OBJECT_MODEL);
    w.finish()
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

fn write_object_class(w: &mut XmlWriter, class: &ObjectClass) {
    let ann = &class.annotations;
    w.open_node("objectClass", ann);
    w.leaf(ann, "name", &class.name);
    w.opt_leaf(ann, "sharing", class.sharing.as_deref());
    w.opt_leaf(ann, "semantics", class.semantics.as_deref());
    class.attributes.iter().for_each(|a| write_attribute(w, a));
    class.children.iter().for_each(|c| write_object_class(w, c));
    w.close("objectClass");
}

fn write_attribute(w: &mut XmlWriter, attr: &Attribute) {
    let ann = &attr.annotations;
    w.open_node("attribute", ann);
    w.leaf(ann, "name", &attr.name);
    w.opt_leaf(ann, "dataType", attr.data_type.as_deref());
    w.opt_leaf(ann, "updateType", attr.update_type.as_deref());
    w.opt_leaf(ann, "updateCondition", attr.update_condition.as_deref());
    w.opt_leaf(ann, "ownership", attr.ownership.as_deref());
    w.opt_leaf(ann, "sharing", attr.sharing.as_deref());
    write_dimensions(w, ann, &attr.dimensions);
    w.opt_leaf(ann, "transportation", attr.transportation.as_deref());
    w.opt_leaf(ann, "order", attr.order.as_deref());
    w.opt_leaf(ann, "semantics", attr.semantics.as_deref());
    w.close("attribute");
}

fn write_interaction_class(w: &mut XmlWriter, class: &InteractionClass) {
    let ann = &class.annotations;
    w.open_node("interactionClass", ann);
    w.leaf(ann, "name", &class.name);
    w.opt_leaf(ann, "sharing", class.sharing.as_deref());
    write_dimensions(w, ann, &class.dimensions);
    w.opt_leaf(ann, "transportation", class.transportation.as_deref());
    w.opt_leaf(ann, "order", class.order.as_deref());
    w.opt_leaf(ann, "semantics", class.semantics.as_deref());
    class.parameters.iter().for_each(|p| write_parameter(w, p));
    class.children.iter().for_each(|c| write_interaction_class(w, c));
    w.close("interactionClass");
}

fn write_parameter(w: &mut XmlWriter, param: &Parameter) {
    let ann = &param.annotations;
    w.open_node("parameter", ann);
    w.leaf(ann, "name", &param.name);
    w.opt_leaf(ann, "dataType", param.data_type.as_deref());
    w.opt_leaf(ann, "semantics", param.semantics.as_deref());
    w.close("parameter");
}

fn write_dimensions(w: &mut XmlWriter, ann: &Annotations, dimensions: &[String]) {
    let attrs = ann.leaf("dimensions", 0);
    if dimensions.is_empty() && attrs.is_empty() {
        return;
    }
    w.open("dimensions", &borrowed(attrs));
    for (index, dimension) in dimensions.iter().enumerate() {
        w.leaf_at(ann, "dimension", index, dimension);
    }
    w.close("dimensions");
}

fn write_transportation(w: &mut XmlWriter, t: &Transportation) {
    let ann = &t.annotations;
    w.open_node("transportation", ann);
    w.leaf(ann, "name", &t.name);
    w.opt_leaf(ann, "reliable", t.reliable.as_deref());
    w.opt_leaf(ann, "semantics", t.semantics.as_deref());
    w.close("transportation");
}

// ---------------------------------------------------------------------------
// Datatypes
// ---------------------------------------------------------------------------

fn write_group<T>(
    w: &mut XmlWriter,
    dt: &DataTypes,
    group: &str,
    items: &[T],
    write: impl Fn(&mut XmlWriter, &T),
) {
    let attrs = dt.annotations.leaf(group, 0);
    if items.is_empty() && attrs.is_empty() {
        return;
    }
    w.open(group, &borrowed(attrs));
    items.iter().for_each(|item| write(w, item));
    w.close(group);
}

fn write_data_types(w: &mut XmlWriter, dt: &DataTypes) {
    w.open("dataTypes", &borrowed(&dt.annotations.element));

    write_group(w, dt, "basicDataRepresentations", &dt.basic_data_representations, |w, b| {
        let ann = &b.annotations;
        w.open_node("basicData", ann);
        w.leaf(ann, "name", &b.name);
        w.opt_leaf(ann, "size", b.size.as_deref());
        w.opt_leaf(ann, "interpretation", b.interpretation.as_deref());
        w.opt_leaf(ann, "endian", b.endian.as_deref());
        w.opt_leaf(ann, "encoding", b.encoding.as_deref());
        w.close("basicData");
    });

    write_group(w, dt, "simpleDataTypes", &dt.simple_data_types, |w, s| {
        let ann = &s.annotations;
        w.open_node("simpleData", ann);
        w.leaf(ann, "name", &s.name);
        w.str_leaf(ann, "representation", &s.representation);
        w.opt_leaf(ann, "units", s.units.as_deref());
        w.opt_leaf(ann, "resolution", s.resolution.as_deref());
        w.opt_leaf(ann, "accuracy", s.accuracy.as_deref());
        w.opt_leaf(ann, "semantics", s.semantics.as_deref());
        w.close("simpleData");
    });

    write_group(w, dt, "enumeratedDataTypes", &dt.enumerated_data_types, |w, e| {
        let ann = &e.annotations;
        w.open_node("enumeratedData", ann);
        w.leaf(ann, "name", &e.name);
        w.str_leaf(ann, "representation", &e.representation);
        w.opt_leaf(ann, "semantics", e.semantics.as_deref());
        for enumerator in &e.enumerators {
            let ann = &enumerator.annotations;
            w.open_node("enumerator", ann);
            w.leaf(ann, "name", &enumerator.name);
            for (index, value) in enumerator.values.iter().enumerate() {
                w.leaf_at(ann, "value", index, value);
            }
            w.close("enumerator");
        }
        w.close("enumeratedData");
    });

    write_group(w, dt, "arrayDataTypes", &dt.array_data_types, |w, a| {
        let ann = &a.annotations;
        w.open_node("arrayData", ann);
        w.leaf(ann, "name", &a.name);
        w.str_leaf(ann, "dataType", &a.data_type);
        w.str_leaf(ann, "cardinality", &a.cardinality);
        w.str_leaf(ann, "encoding", &a.encoding);
        w.opt_leaf(ann, "semantics", a.semantics.as_deref());
        w.close("arrayData");
    });

    write_group(w, dt, "fixedRecordDataTypes", &dt.fixed_record_data_types, |w, r| {
        let ann = &r.annotations;
        w.open_node("fixedRecordData", ann);
        w.leaf(ann, "name", &r.name);
        w.opt_leaf(ann, "encoding", r.encoding.as_deref());
        w.opt_leaf(ann, "semantics", r.semantics.as_deref());
        for field in &r.fields {
            let ann = &field.annotations;
            w.open_node("field", ann);
            w.leaf(ann, "name", &field.name);
            w.str_leaf(ann, "dataType", &field.data_type);
            w.opt_leaf(ann, "semantics", field.semantics.as_deref());
            w.close("field");
        }
        w.close("fixedRecordData");
    });

    write_group(w, dt, "variantRecordDataTypes", &dt.variant_record_data_types, |w, v| {
        let ann = &v.annotations;
        w.open_node("variantRecordData", ann);
        w.leaf(ann, "name", &v.name);
        w.str_leaf(ann, "discriminant", &v.discriminant);
        w.str_leaf(ann, "dataType", &v.data_type);
        for alt in &v.alternatives {
            let ann = &alt.annotations;
            w.open_node("alternative", ann);
            w.str_leaf(ann, "enumerator", &alt.enumerator);
            w.leaf(ann, "name", &alt.name);
            w.opt_leaf(ann, "dataType", alt.data_type.as_deref());
            w.opt_leaf(ann, "semantics", alt.semantics.as_deref());
            w.close("alternative");
        }
        w.opt_leaf(ann, "encoding", v.encoding.as_deref());
        w.opt_leaf(ann, "semantics", v.semantics.as_deref());
        w.close("variantRecordData");
    });

    w.close("dataTypes");
}

// ---------------------------------------------------------------------------
// Low level writer
// ---------------------------------------------------------------------------

struct XmlWriter {
    out: String,
    pretty: bool,
    indent: usize,
    depth: usize,
}

impl XmlWriter {
    fn new(pretty: bool, indent: usize) -> Self {
        Self {
            out: String::with_capacity(16 * 1024),
            pretty,
            indent,
            depth: 0,
        }
    }

    fn declaration(&mut self) {
        self.out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    }

    fn line_start(&mut self) {
        if self.pretty {
            self.out.push('\n');
            self.out.extend(std::iter::repeat(' ').take(self.depth * self.indent));
        }
    }

    fn start_tag(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.line_start();
        self.out.push('<');
        self.out.push_str(name);
        for (key, value) in attrs {
            self.out.push(' ');
            self.out.push_str(key);
            self.out.push_str("=\"");
            escape_attr_into(&mut self.out, value);
            self.out.push('"');
        }
        self.out.push('>');
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.start_tag(name, attrs);
        self.depth += 1;
    }

    fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line_start();
        self.push_end_tag(name);
    }

    fn push_end_tag(&mut self, name: &str) {
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }

    /// Start tag carrying a modeled node's own attributes.
    fn open_node(&mut self, name: &str, ann: &Annotations) {
        self.open(name, &borrowed(&ann.element));
    }

    fn leaf(&mut self, ann: &Annotations, name: &str, text: &str) {
        self.leaf_at(ann, name, 0, text);
    }

    fn leaf_at(&mut self, ann: &Annotations, name: &str, index: usize, text: &str) {
        self.start_tag(name, &borrowed(ann.leaf(name, index)));
        escape_into(&mut self.out, text);
        self.push_end_tag(name);
    }

    /// Optional field; an absent value still gets an empty element when the
    /// leaf carries attributes.
    fn opt_leaf(&mut self, ann: &Annotations, name: &str, text: Option<&str>) {
        match text {
            Some(text) => self.leaf(ann, name, text),
            None if !ann.leaf(name, 0).is_empty() => self.leaf(ann, name, ""),
            None => {}
        }
    }

    /// Required-by-schema text field; an empty value is left out unless the
    /// leaf carries attributes.
    fn str_leaf(&mut self, ann: &Annotations, name: &str, text: &str) {
        if !text.is_empty() || !ann.leaf(name, 0).is_empty() {
            self.leaf(ann, name, text);
        }
    }

    fn element(&mut self, element: &Element) {
        if element.children.is_empty() {
            self.start_tag(&element.name, &borrowed(&element.attributes));
            if let Some(text) = &element.text {
                escape_into(&mut self.out, text);
            }
            self.push_end_tag(&element.name);
            return;
        }

        self.open(&element.name, &borrowed(&element.attributes));
        if let Some(text) = &element.text {
            self.line_start();
            escape_into(&mut self.out, text);
        }
        element.children.iter().for_each(|c| self.element(c));
        self.close(&element.name);
    }

    fn finish(mut self) -> String {
        if self.pretty {
            self.out.push('\n');
        }
        self.out
    }
}

fn borrowed(attrs: &[(String, String)]) -> Vec<(&str, &str)> {
    attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // Parsers fold a raw CR into LF.
            '\r' => out.push_str("&#13;"),
            c => out.push(c),
        }
    }
}

/// Attribute values also need whitespace kept out of value normalization.
fn escape_attr_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '\n' => out.push_str("&#10;"),
            '\t' => out.push_str("&#9;"),
            c => escape_into(out, c.encode_utf8(&mut [0; 4])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Namespace, SimpleData};

    #[test]
    fn test_escaping() {
        let mut out = String::new();
        escape_into(&mut out, r#"a<b & "c" 'd'>"#);
        assert_eq!(out, "a&lt;b &amp; &quot;c&quot; &apos;d&apos;&gt;");

        let mut out = String::new();
        escape_attr_into(&mut out, "a\tb\nc\r&");
        assert_eq!(out, "a&#9;b&#10;c&#13;&amp;");
    }

    #[test]
    fn test_compact_output() {
        let module = Module {
            namespaces: vec![Namespace::default_ns(mim::OMT_2010_NAMESPACE)],
            ..Module::default()
        }
        .with_objects(ObjectClass::new(mim::HLA_OBJECT_ROOT).with_semantics("root"));

        let xml = write_module(&module, false, 2);
        assert_eq!(
            xml,
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                r#"<objectModel xmlns="http://standards.ieee.org/IEEE1516-2010">"#,
                "<objects><objectClass><name>HLAobjectRoot</name><semantics>root</semantics></objectClass></objects>",
                "</objectModel>"
            )
        );
    }

    #[test]
    fn test_pretty_indentation_and_section_order() {
        let mut module = Module::new().with_data_types(DataTypes {
            simple_data_types: vec![SimpleData::new(mim::HLA_COUNT, mim::HLA_INTEGER32_BE)],
            ..DataTypes::default()
        });
        module.sections.push(Element::new("notes"));
        module
            .sections
            .push(Element::new("modelIdentification").with_child(Element::new("name").with_text("M")));

        let xml = write_module(&module, true, 2);
        assert!(xml.contains("\n  <modelIdentification>\n    <name>M</name>\n  </modelIdentification>"));
        assert!(xml.contains("\n    <simpleDataTypes>\n      <simpleData>"));

        let ident = xml.find("<modelIdentification>").unwrap();
        let data = xml.find("<dataTypes>").unwrap();
        let notes = xml.find("<notes>").unwrap();
        assert!(ident < data && data < notes);
        // Empty groups are skipped.
        assert!(!xml.contains("arrayDataTypes"));
    }

    #[test]
    fn test_annotations_are_written() {
        let mut root = ObjectClass::new(mim::HLA_OBJECT_ROOT);
        root.annotations = Annotations::default()
            .with_attribute("notes", "RPRnoteBase1")
            .with_leaf_attribute("name", 0, "idtag", "root")
            .with_leaf_attribute("semantics", 0, "notes", "RPRnoteBase2");
        let mut module = Module::default().with_objects(root);
        module
            .section_attributes
            .insert("objects".to_string(), vec![("notes".to_string(), "RPRnoteBase0".to_string())]);

        let xml = write_module(&module, false, 2);
        assert!(xml.contains(concat!(
            r#"<objects notes="RPRnoteBase0"><objectClass notes="RPRnoteBase1">"#,
            r#"<name idtag="root">HLAobjectRoot</name>"#,
            r#"<semantics notes="RPRnoteBase2"></semantics>"#,
        )));
    }

    #[test]
    fn test_annotated_empty_group_and_dimensions_are_kept() {
        let mut data_types = DataTypes::default();
        data_types.annotations =
            Annotations::default().with_leaf_attribute("arrayDataTypes", 0, "notes", "n1");
        let mut attribute = Attribute::new("Spatial", "SpatialStruct");
        attribute.dimensions = vec!["D1".to_string(), "D2".to_string()];
        attribute.annotations = Annotations::default().with_leaf_attribute("dimension", 1, "notes", "n2");
        let module = Module::default()
            .with_objects(ObjectClass::new(mim::HLA_OBJECT_ROOT).with_attribute(attribute))
            .with_data_types(data_types);

        let xml = write_module(&module, false, 2);
        assert!(xml.contains(r#"<arrayDataTypes notes="n1"></arrayDataTypes>"#));
        assert!(xml.contains(r#"<dimension>D1</dimension><dimension notes="n2">D2</dimension>"#));
        assert!(!xml.contains("simpleDataTypes"));
    }
}
