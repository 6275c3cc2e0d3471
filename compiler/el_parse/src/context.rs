//! Parse-time collaborators: type resolution for `T(Name)` and constant
//! snapshots for identifiers.

use el_ir::Literal;
use rustc_hash::{FxHashMap, FxHashSet};

/// Package searched after the explicit imports.
pub const DEFAULT_PACKAGE: &str = "el.lang";

/// Types every [`DefaultParseContext`] knows about.
pub const BUILTIN_TYPES: &[&str] = &[
    "el.lang.Object",
    "el.lang.String",
    "el.lang.Boolean",
    "el.lang.Character",
    "el.lang.Byte",
    "el.lang.Short",
    "el.lang.Integer",
    "el.lang.Long",
    "el.lang.Float",
    "el.lang.Double",
    "el.lang.BigInteger",
    "el.lang.BigDecimal",
    "el.lang.Number",
    "el.lang.List",
    "el.lang.Map",
];

/// What the parser asks its host while building the tree.
pub trait ParseContext {
    /// Resolve a simple or dotted type name to its qualified name.
    fn resolve_type(&self, name: &str) -> Option<String>;

    /// Value to snapshot into an identifier node at parse time.
    fn constant(&self, name: &str) -> Option<Literal> {
        let _ = name;
        None
    }
}

/// Registry-backed context.
///
/// Type names resolve in this order: the name as written (already
/// qualified), explicit imports with the most recent first, then the default
/// packages in declaration order.
#[derive(Clone, Debug)]
pub struct DefaultParseContext {
    types: FxHashSet<String>,
    /// Packages (`com.acme`) or single types (`com.acme.User`).
    imports: Vec<String>,
    default_packages: Vec<String>,
    constants: FxHashMap<String, Literal>,
}

impl DefaultParseContext {
    /// A context with the builtin types and the `el.lang` default package.
    pub fn new() -> Self {
        let mut ctx = Self::empty();
        for ty in BUILTIN_TYPES {
            ctx.register_type(*ty);
        }
        ctx.add_default_package(DEFAULT_PACKAGE);
        ctx
    }

    /// A context that resolves nothing.
    pub fn empty() -> Self {
        DefaultParseContext {
            types: FxHashSet::default(),
            imports: Vec::new(),
            default_packages: Vec::new(),
            constants: FxHashMap::default(),
        }
    }

    pub fn register_type(&mut self, qualified: impl Into<String>) {
        self.types.insert(qualified.into());
    }

    pub fn import(&mut self, package_or_type: impl Into<String>) {
        self.imports.push(package_or_type.into());
    }

    pub fn add_default_package(&mut self, package: impl Into<String>) {
        self.default_packages.push(package.into());
    }

    pub fn set_constant(&mut self, name: impl Into<String>, value: Literal) {
        self.constants.insert(name.into(), value);
    }

    pub fn has_type(&self, qualified: &str) -> bool {
        self.types.contains(qualified)
    }

    fn in_package(&self, package: &str, name: &str) -> Option<String> {
        let candidate = format!("{package}.{name}");
        self.types.contains(&candidate).then_some(candidate)
    }
}

impl Default for DefaultParseContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseContext for DefaultParseContext {
    fn resolve_type(&self, name: &str) -> Option<String> {
        if self.types.contains(name) {
            return Some(name.to_owned());
        }
        for import in self.imports.iter().rev() {
            // A single-type import matches on its last segment.
            if import.rsplit('.').next() == Some(name) && self.types.contains(import) {
                return Some(import.clone());
            }
            if let Some(found) = self.in_package(import, name) {
                return Some(found);
            }
        }
        self.default_packages
            .iter()
            .find_map(|package| self.in_package(package, name))
    }

    fn constant(&self, name: &str) -> Option<Literal> {
        self.constants.get(name).cloned()
    }
}

#[cfg(test)]
mod tests;
