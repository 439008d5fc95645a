// Strongly-typed declaration nodes for printing. No serde_json::Value here.

use crate::error::Error;

/// A TypeScript type expression, restricted to what the compiler emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    Boolean,
    String,
    /// `Integer` and `Real` both collapse here; no distinct int/float shape.
    Number,
    /// Direct reference to a declaration in the same file.
    Ref(String),
    /// `OBJECT["key"]` — lookup into an imported package's aggregate type.
    IndexedAccess { object: String, key: String },
    /// Ordered sequence of the inner shape.
    Array(Box<TypeNode>),
    /// `{ "k": T; ... }` — the package aggregate body.
    TypeLiteral(Vec<Member>),
}

/// One member of an interface body or type literal. The name is printed as a
/// quoted string literal, so characters illegal in a bare identifier are fine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub ty: TypeNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// `import type IDENT from "path";`
    Import { ident: String, path: String },
    /// `ambient` controls the `declare` keyword.
    Enum {
        name: String,
        members: Vec<String>,
        ambient: bool,
    },
    Interface {
        name: String,
        extends: Option<TypeNode>,
        members: Vec<Member>,
        ambient: bool,
    },
    TypeAlias {
        name: String,
        ty: TypeNode,
        exported: bool,
    },
}

// Builders reject empty identifiers; everything else is taken verbatim.
impl Decl {
    pub fn import(ident: impl Into<String>, path: impl Into<String>) -> Result<Decl, Error> {
        Ok(Decl::Import {
            ident: named("import", ident.into())?,
            path: path.into(),
        })
    }

    pub fn enum_decl(
        name: impl Into<String>,
        members: Vec<String>,
        ambient: bool,
    ) -> Result<Decl, Error> {
        Ok(Decl::Enum {
            name: named("enum", name.into())?,
            members,
            ambient,
        })
    }

    pub fn interface(
        name: impl Into<String>,
        extends: Option<TypeNode>,
        members: Vec<Member>,
        ambient: bool,
    ) -> Result<Decl, Error> {
        Ok(Decl::Interface {
            name: named("interface", name.into())?,
            extends,
            members,
            ambient,
        })
    }

    pub fn type_alias(
        name: impl Into<String>,
        ty: TypeNode,
        exported: bool,
    ) -> Result<Decl, Error> {
        Ok(Decl::TypeAlias {
            name: named("type alias", name.into())?,
            ty,
            exported,
        })
    }
}

fn named(what: &'static str, name: String) -> Result<String, Error> {
    if name.is_empty() {
        return Err(Error::EmptyIdentifier { what });
    }
    Ok(name)
}

// ------------------------------- Tests ------------------------------------ //
