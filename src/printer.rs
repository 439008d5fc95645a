//! Declaration nodes → formatted `.d.ts` text.
//!
//! Deterministic by construction: statement order is the input order, indent
//! is four spaces, line endings are `\n`, output ends with a newline. The
//! import block is followed by one blank separator line, emitted even when
//! there are no imports (parity with the reference printer).

use crate::ast::{Decl, Member, TypeNode};

const INDENT: &str = "    ";

// ————————————————————————————————————————————————————————————————————————————
// ENTRY POINT
// ————————————————————————————————————————————————————————————————————————————

/// Render an ordered declaration list (imports first) to one file body.
pub fn print_decls(decls: &[Decl]) -> String {
    let mut p = Printer::default();

    let body_start = decls
        .iter()
        .position(|d| !matches!(d, Decl::Import { .. }))
        .unwrap_or(decls.len());

    for decl in &decls[..body_start] {
        p.decl(decl);
    }
    p.out.push('\n');
    for decl in &decls[body_start..] {
        p.decl(decl);
    }

    p.into_string()
}

// ————————————————————————————————————————————————————————————————————————————
// PRINTER
// ————————————————————————————————————————————————————————————————————————————

#[derive(Default)]
struct Printer {
    out: String,
}

impl Printer {
    fn into_string(self) -> String {
        self.out
    }

    fn decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Import { ident, path } => {
                self.line(format!("import type {ident} from \"{path}\";"));
            }
            Decl::Enum {
                name,
                members,
                ambient,
            } => {
                let declare = if *ambient { "declare " } else { "" };
                self.line(format!("{declare}enum {name} {{"));
                for (i, member) in members.iter().enumerate() {
                    let comma = if i + 1 < members.len() { "," } else { "" };
                    self.line(format!("{INDENT}{member}{comma}"));
                }
                self.line("}");
            }
            Decl::Interface {
                name,
                extends,
                members,
                ambient,
            } => {
                let declare = if *ambient { "declare " } else { "" };
                let heritage = match extends {
                    Some(parent) => format!(" extends {}", type_node(parent)),
                    None => String::new(),
                };
                self.line(format!("{declare}interface {name}{heritage} {{"));
                for member in members {
                    self.member(member);
                }
                self.line("}");
            }
            Decl::TypeAlias { name, ty, exported } => {
                let export = if *exported { "export " } else { "" };
                match ty {
                    // the aggregate body spans lines; scalar aliases do not
                    TypeNode::TypeLiteral(members) if !members.is_empty() => {
                        self.line(format!("{export}type {name} = {{"));
                        for member in members {
                            self.member(member);
                        }
                        self.line("};");
                    }
                    _ => self.line(format!("{export}type {name} = {};", type_node(ty))),
                }
            }
        }
    }

    fn member(&mut self, member: &Member) {
        self.line(format!(
            "{INDENT}\"{}\": {};",
            member.name,
            type_node(&member.ty)
        ));
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }
}

fn type_node(node: &TypeNode) -> String {
    match node {
        TypeNode::Boolean => "boolean".to_string(),
        TypeNode::String => "string".to_string(),
        TypeNode::Number => "number".to_string(),
        TypeNode::Ref(name) => name.clone(),
        TypeNode::IndexedAccess { object, key } => format!("{object}[\"{key}\"]"),
        TypeNode::Array(inner) => format!("{}[]", type_node(inner)),
        TypeNode::TypeLiteral(members) if members.is_empty() => "{}".to_string(),
        TypeNode::TypeLiteral(members) => {
            // inline fallback; the aggregate path above handles the
            // multi-line layout
            let body = members
                .iter()
                .map(|m| format!("\"{}\": {}", m.name, type_node(&m.ty)))
                .collect::<Vec<_>>()
                .join("; ");
            format!("{{ {body} }}")
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
