//! Schema → declaration nodes.
//!
//! One pass, schema order preserved: enums first, then types, then the
//! package aggregate. The only mutable state is the per-call [`Context`]
//! (statement list + namespace→import map); inputs are never touched.
//!
//! Design notes:
//! - Qualified names are split exactly once, at the boundary, into a
//!   two-field [`QName`]; nothing downstream re-splits strings.
//! - Import dedup is the `IndexMap` key: one import per namespace no matter
//!   how many distinct types reference it, insertion order preserved.
//! - No schema validation. A dangling local reference prints as a dangling
//!   reference; a malformed qualified name resolves best-effort.

use indexmap::IndexMap;

use crate::ast::{Decl, Member, TypeNode};
use crate::error::Error;
use crate::printer;
use crate::schema::{Enumeration, Schema, TypeDescriptor};

// ————————————————————————————————————————————————————————————————————————————
// TYPE REFERENCES
// ————————————————————————————————————————————————————————————————————————————

/// A namespaced reference, split on the FIRST separator. `a:b:c` becomes
/// namespace `a`, local `b:c`; the qualified form round-trips the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QName {
    pub namespace: String,
    pub local: String,
}

impl QName {
    pub fn parse(raw: &str) -> QName {
        let (namespace, local) = raw.split_once(':').unwrap_or((raw, ""));
        QName {
            namespace: namespace.to_string(),
            local: local.to_string(),
        }
    }

    /// The fully qualified original string, used as the lookup key into the
    /// referenced package's aggregate type.
    pub fn qualified(&self) -> String {
        format!("{}:{}", self.namespace, self.local)
    }
}

/// Classification of a property or inheritance type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// One of the four recognized scalar keywords.
    Scalar(TypeNode),
    /// Reference into another package, via import + indexed access.
    External(QName),
    /// Reference to a type declared in the same output.
    Local(String),
}

impl TypeRef {
    pub fn parse(raw: &str) -> TypeRef {
        match raw {
            "Boolean" => TypeRef::Scalar(TypeNode::Boolean),
            "String" => TypeRef::Scalar(TypeNode::String),
            // both numeric kinds collapse; no distinct int/float output
            "Integer" | "Real" => TypeRef::Scalar(TypeNode::Number),
            _ if raw.contains(':') => TypeRef::External(QName::parse(raw)),
            _ => TypeRef::Local(raw.to_string()),
        }
    }
}

/// Pure resolution, no import side effect. Used by the simple-type alias
/// path, where an external-looking name stays a plain reference.
fn type_node_pure(raw: &str) -> TypeNode {
    match TypeRef::parse(raw) {
        TypeRef::Scalar(node) => node,
        _ => TypeNode::Ref(raw.to_string()),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// COMPILE CONTEXT
// ————————————————————————————————————————————————————————————————————————————

/// Output accumulator for a single compilation call.
#[derive(Debug, Default)]
struct Context {
    /// namespace short-name → import declaration (keyed for dedup)
    imports: IndexMap<String, Decl>,
    statements: Vec<Decl>,
}

impl Context {
    /// Resolve a reference to its type node, registering an import when the
    /// reference crosses a package boundary.
    fn resolve(&mut self, r: &TypeRef) -> Result<TypeNode, Error> {
        match r {
            TypeRef::Scalar(node) => Ok(node.clone()),
            TypeRef::Local(name) => Ok(TypeNode::Ref(name.clone())),
            TypeRef::External(qname) => {
                self.ensure_import(qname)?;
                Ok(TypeNode::IndexedAccess {
                    object: qname.namespace.to_uppercase(),
                    key: qname.qualified(),
                })
            }
        }
    }

    /// One type-only import per namespace, under the uppercased short-name.
    fn ensure_import(&mut self, qname: &QName) -> Result<(), Error> {
        if !self.imports.contains_key(&qname.namespace) {
            let decl = Decl::import(
                qname.namespace.to_uppercase(),
                format!("./{}.d.ts", qname.namespace),
            )?;
            self.imports.insert(qname.namespace.clone(), decl);
        }
        Ok(())
    }

    fn add_enum(&mut self, enumeration: &Enumeration) -> Result<(), Error> {
        let members = enumeration
            .literal_values
            .iter()
            .map(|lit| lit.name.clone())
            .collect();
        self.statements
            .push(Decl::enum_decl(&enumeration.name, members, true)?);
        Ok(())
    }

    fn add_type(
        &mut self,
        ty: &TypeDescriptor,
        is_simple: &impl Fn(&str) -> bool,
    ) -> Result<(), Error> {
        // simple types render as a scalar alias over their own name
        if is_simple(&ty.name) {
            self.statements
                .push(Decl::type_alias(&ty.name, type_node_pure(&ty.name), false)?);
            return Ok(());
        }

        // a redirect name overrides the emitted identifier (local part when
        // namespaced); the aggregate still keys by the original name
        let name = match ty.redirect_names.first() {
            Some(redirect) => match TypeRef::parse(redirect) {
                TypeRef::External(qname) => qname.local,
                _ => redirect.clone(),
            },
            None => ty.name.clone(),
        };

        // only the first super type is meaningful
        let extends = match ty.super_types.first() {
            Some(parent) => Some(self.resolve(&TypeRef::parse(parent))?),
            None => None,
        };

        let mut members = Vec::with_capacity(ty.properties.len());
        for property in &ty.properties {
            let mut node = self.resolve(&TypeRef::parse(&property.ty))?;
            if property.is_many {
                node = TypeNode::Array(Box::new(node));
            }
            members.push(Member {
                name: property.name.clone(),
                ty: node,
            });
        }

        self.statements
            .push(Decl::interface(name, extends, members, true)?);
        Ok(())
    }

    /// The package's public surface: every qualified type key mapped to its
    /// local declaration, over the FULL original types list.
    fn add_package(&mut self, schema: &Schema) -> Result<(), Error> {
        let members = schema
            .types
            .iter()
            .map(|ty| Member {
                name: format!("{}:{}", schema.prefix, ty.name),
                ty: TypeNode::Ref(ty.name.clone()),
            })
            .collect();
        self.statements.push(Decl::type_alias(
            &schema.name,
            TypeNode::TypeLiteral(members),
            true,
        )?);
        Ok(())
    }

    fn into_decls(self) -> Vec<Decl> {
        let mut decls: Vec<Decl> = self.imports.into_values().collect();
        decls.extend(self.statements);
        decls
    }
}

// ————————————————————————————————————————————————————————————————————————————
// ENTRY POINTS
// ————————————————————————————————————————————————————————————————————————————

/// Build the ordered declaration list for one schema document.
pub fn build(schema: &Schema, is_simple: impl Fn(&str) -> bool) -> Result<Vec<Decl>, Error> {
    let mut cx = Context::default();
    for enumeration in &schema.enumerations {
        cx.add_enum(enumeration)?;
    }
    for ty in &schema.types {
        cx.add_type(ty, &is_simple)?;
    }
    cx.add_package(schema)?;
    Ok(cx.into_decls())
}

/// Build and render: one schema document in, one `.d.ts` body out.
pub fn compile(schema: &Schema, is_simple: impl Fn(&str) -> bool) -> Result<String, Error> {
    Ok(printer::print_decls(&build(schema, is_simple)?))
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moddle::is_simple_type;
    use crate::schema::{Schema, from_str_with_path};

    fn parse(src: serde_json::Value) -> Schema {
        from_str_with_path(&src.to_string()).unwrap()
    }

    #[test]
    fn scalar_keywords_collapse_to_three_node_kinds() {
        let nodes: Vec<TypeNode> = ["Boolean", "String", "Integer", "Real"]
            .iter()
            .map(|kw| match TypeRef::parse(kw) {
                TypeRef::Scalar(node) => node,
                other => panic!("{kw} classified as {other:?}"),
            })
            .collect();
        assert_eq!(nodes[0], TypeNode::Boolean);
        assert_eq!(nodes[1], TypeNode::String);
        assert_eq!(nodes[2], TypeNode::Number);
        assert_eq!(nodes[3], TypeNode::Number);
    }

    #[test]
    fn qualified_names_split_on_first_separator_only() {
        let q = QName::parse("di:waypoint:extra");
        assert_eq!(q.namespace, "di");
        assert_eq!(q.local, "waypoint:extra");
        assert_eq!(q.qualified(), "di:waypoint:extra");
    }

    #[test]
    fn empty_schema_emits_only_the_aggregate() {
        let schema = parse(serde_json::json!({
            "name": "Empty", "prefix": "e", "types": [], "enumerations": []
        }));
        let decls = build(&schema, is_simple_type).unwrap();
        assert_eq!(decls.len(), 1);
        assert_eq!(
            decls[0],
            Decl::TypeAlias {
                name: "Empty".into(),
                ty: TypeNode::TypeLiteral(Vec::new()),
                exported: true,
            }
        );
    }

    #[test]
    fn is_many_wraps_the_exact_single_node() {
        let single = parse(serde_json::json!({
            "name": "P", "prefix": "p",
            "types": [ { "name": "T", "properties": [ { "name": "x", "type": "other:Element" } ] } ]
        }));
        let many = parse(serde_json::json!({
            "name": "P", "prefix": "p",
            "types": [ { "name": "T", "properties": [ { "name": "x", "type": "other:Element", "isMany": true } ] } ]
        }));

        let member_ty = |schema: &Schema| -> TypeNode {
            let decls = build(schema, is_simple_type).unwrap();
            match &decls[1] {
                Decl::Interface { members, .. } => members[0].ty.clone(),
                other => panic!("expected interface, got {other:?}"),
            }
        };

        let inner = member_ty(&single);
        assert_eq!(member_ty(&many), TypeNode::Array(Box::new(inner)));
    }

    #[test]
    fn one_import_per_namespace() {
        let schema = parse(serde_json::json!({
            "name": "Di", "prefix": "di",
            "types": [
                { "name": "Edge", "superClass": ["dc:Element"], "properties": [
                    { "name": "waypoint", "type": "dc:Point", "isMany": true }
                ] },
                { "name": "Shape", "properties": [
                    { "name": "bounds", "type": "dc:Bounds" }
                ] }
            ]
        }));
        let decls = build(&schema, is_simple_type).unwrap();
        let imports: Vec<_> = decls
            .iter()
            .filter(|d| matches!(d, Decl::Import { .. }))
            .collect();
        assert_eq!(imports.len(), 1);
        assert_eq!(
            *imports[0],
            Decl::Import {
                ident: "DC".into(),
                path: "./dc.d.ts".into(),
            }
        );
    }

    #[test]
    fn compile_is_deterministic() {
        let schema = parse(serde_json::json!({
            "name": "Bpmn", "prefix": "bpmn",
            "enumerations": [
                { "name": "Direction", "literalValues": [ { "name": "None" }, { "name": "Both" } ] }
            ],
            "types": [
                { "name": "Task", "superClass": ["bpmndi:Node"], "properties": [
                    { "name": "id", "type": "String" },
                    { "name": "outgoing", "type": "SequenceFlow", "isMany": true }
                ] }
            ]
        }));
        let first = compile(&schema, is_simple_type).unwrap();
        let second = compile(&schema, is_simple_type).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn end_to_end_basic_interface_and_aggregate() {
        let schema = parse(serde_json::json!({
            "name": "Bpmn", "prefix": "bpmn",
            "types": [ { "name": "Task", "properties": [ { "name": "id", "type": "String" } ] } ]
        }));
        let out = compile(&schema, is_simple_type).unwrap();
        assert_eq!(
            out,
            "\n\
             declare interface Task {\n    \"id\": string;\n}\n\
             export type Bpmn = {\n    \"bpmn:Task\": Task;\n};\n"
        );
    }

    #[test]
    fn simple_type_becomes_alias_not_interface() {
        // scalar-named type with the default predicate
        let schema = parse(serde_json::json!({
            "name": "Core", "prefix": "core",
            "types": [ { "name": "String" } ]
        }));
        let decls = build(&schema, is_simple_type).unwrap();
        assert_eq!(
            decls[0],
            Decl::TypeAlias {
                name: "String".into(),
                ty: TypeNode::String,
                exported: false,
            }
        );

        // a predicate may also classify a namespaced name as simple; the
        // alias then targets the plain reference for that name, no import
        let schema = parse(serde_json::json!({
            "name": "Bpmn", "prefix": "bpmn",
            "types": [ { "name": "Bpmn:Expression" } ]
        }));
        let simple = |name: &str| name == "Bpmn:Expression" || is_simple_type(name);
        let decls = build(&schema, simple).unwrap();
        assert!(!decls.iter().any(|d| matches!(d, Decl::Import { .. })));
        assert_eq!(
            decls[0],
            Decl::TypeAlias {
                name: "Bpmn:Expression".into(),
                ty: TypeNode::Ref("Bpmn:Expression".into()),
                exported: false,
            }
        );
    }

    #[test]
    fn end_to_end_external_many_property() {
        let schema = parse(serde_json::json!({
            "name": "Di", "prefix": "di",
            "types": [ { "name": "Edge", "properties": [
                { "name": "waypoint", "type": "other:Element", "isMany": true }
            ] } ]
        }));
        let out = compile(&schema, is_simple_type).unwrap();
        assert_eq!(
            out,
            "import type OTHER from \"./other.d.ts\";\n\
             \n\
             declare interface Edge {\n    \"waypoint\": OTHER[\"other:Element\"][];\n}\n\
             export type Di = {\n    \"di:Edge\": Edge;\n};\n"
        );
    }

    #[test]
    fn external_parent_extends_the_indexed_access() {
        let schema = parse(serde_json::json!({
            "name": "Di", "prefix": "di",
            "types": [ { "name": "Shape", "superClass": ["dc:Node"] } ]
        }));
        let decls = build(&schema, is_simple_type).unwrap();
        match &decls[1] {
            Decl::Interface { extends, .. } => assert_eq!(
                extends,
                &Some(TypeNode::IndexedAccess {
                    object: "DC".into(),
                    key: "dc:Node".into(),
                })
            ),
            other => panic!("expected interface, got {other:?}"),
        }
    }

    #[test]
    fn redirect_name_overrides_emitted_identifier_but_not_aggregate_key() {
        let schema = parse(serde_json::json!({
            "name": "Custom", "prefix": "c",
            "types": [ { "name": "TaskLike", "extends": ["bpmn:Task"] } ]
        }));
        let decls = build(&schema, is_simple_type).unwrap();
        match &decls[0] {
            Decl::Interface { name, .. } => assert_eq!(name, "Task"),
            other => panic!("expected interface, got {other:?}"),
        }
        match &decls[1] {
            Decl::TypeAlias { ty: TypeNode::TypeLiteral(members), .. } => {
                assert_eq!(members[0].name, "c:TaskLike");
                assert_eq!(members[0].ty, TypeNode::Ref("TaskLike".into()));
            }
            other => panic!("expected aggregate, got {other:?}"),
        }
    }

    #[test]
    fn enums_come_before_types_in_output_order() {
        let schema = parse(serde_json::json!({
            "name": "Bpmn", "prefix": "bpmn",
            "enumerations": [ { "name": "Direction", "literalValues": [ { "name": "None" } ] } ],
            "types": [ { "name": "Task" } ]
        }));
        let decls = build(&schema, is_simple_type).unwrap();
        assert!(matches!(decls[0], Decl::Enum { .. }));
        assert!(matches!(decls[1], Decl::Interface { .. }));
        assert!(matches!(decls[2], Decl::TypeAlias { .. }));
    }
}
