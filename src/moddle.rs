//! Simple-type predicate, mirroring the moddle metamodel library's built-in
//! type table. The compiler treats whatever predicate it is handed as
//! authoritative and opaque; this is only the default the CLI wires in.

const BUILTIN_SIMPLE_TYPES: [&str; 4] = ["String", "Boolean", "Integer", "Real"];

/// Does `name` denote a simple type (scalar alias) rather than a structured
/// record?
pub fn is_simple_type(name: &str) -> bool {
    BUILTIN_SIMPLE_TYPES.contains(&name)
}
