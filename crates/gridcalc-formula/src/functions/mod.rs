//! Built-in functions
//!
//! The catalog a formula tree can name. Binary functions combine the values
//! of two operands; interval functions fold the values of a run of cells.

pub mod math;
pub mod text;

use crate::error::{FormulaError, FormulaResult};
use ahash::AHashMap;
use gridcalc_core::Literal;
use std::sync::OnceLock;

/// Binary function implementation signature
pub type BinaryImpl = fn(&Literal, &Literal) -> FormulaResult<Literal>;

/// Interval function implementation signature
///
/// Receives the values of every cell in the range, first to last.
pub type IntervalImpl = fn(&[Literal]) -> FormulaResult<Literal>;

/// Shape of a function's arguments, with its implementation
#[derive(Clone, Copy)]
pub enum FunctionKind {
    /// Two operand contents
    Binary(BinaryImpl),
    /// One cell range
    Interval(IntervalImpl),
}

/// Function definition
pub struct FunctionDef {
    /// Function name (uppercase)
    pub name: &'static str,
    /// Implementation
    pub kind: FunctionKind,
}

/// Function registry
pub struct FunctionRegistry {
    functions: AHashMap<String, FunctionDef>,
}

/// Global function registry (lazily initialized)
static FUNCTION_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

/// Get the built-in function registry
pub fn registry() -> &'static FunctionRegistry {
    FUNCTION_REGISTRY.get_or_init(FunctionRegistry::new)
}

impl FunctionRegistry {
    /// Create a new registry with all built-in functions
    pub fn new() -> Self {
        let mut registry = Self {
            functions: AHashMap::new(),
        };

        registry.register_binary_functions();
        registry.register_interval_functions();

        registry
    }

    /// Look up a function by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(&name.trim().to_uppercase())
    }

    /// Register a function
    pub fn register(&mut self, def: FunctionDef) {
        self.functions.insert(def.name.to_uppercase(), def);
    }

    /// Names of every registered function, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.values().map(|def| def.name).collect();
        names.sort_unstable();
        names
    }

    /// Look up a binary function, returning its canonical name and implementation
    pub fn binary(&self, name: &str) -> FormulaResult<(&'static str, BinaryImpl)> {
        match self.lookup(name)? {
            FunctionDef {
                name,
                kind: FunctionKind::Binary(implementation),
            } => Ok((*name, *implementation)),
            FunctionDef { name, .. } => Err(FormulaError::ArgumentCount {
                function: name.to_string(),
                expected: "1 range".into(),
                actual: 2,
            }),
        }
    }

    /// Look up an interval function, returning its canonical name and implementation
    pub fn interval(&self, name: &str) -> FormulaResult<(&'static str, IntervalImpl)> {
        match self.lookup(name)? {
            FunctionDef {
                name,
                kind: FunctionKind::Interval(implementation),
            } => Ok((*name, *implementation)),
            FunctionDef { name, .. } => Err(FormulaError::ArgumentCount {
                function: name.to_string(),
                expected: "2".into(),
                actual: 1,
            }),
        }
    }

    fn lookup(&self, name: &str) -> FormulaResult<&FunctionDef> {
        log::debug!("looking up function {}", name);
        self.get(name)
            .ok_or_else(|| FormulaError::UnknownFunction(name.to_string()))
    }

    fn register_binary_functions(&mut self) {
        self.register(FunctionDef {
            name: "ADD",
            kind: FunctionKind::Binary(math::fn_add),
        });

        self.register(FunctionDef {
            name: "SUB",
            kind: FunctionKind::Binary(math::fn_sub),
        });

        self.register(FunctionDef {
            name: "MUL",
            kind: FunctionKind::Binary(math::fn_mul),
        });

        self.register(FunctionDef {
            name: "DIV",
            kind: FunctionKind::Binary(math::fn_div),
        });
    }

    fn register_interval_functions(&mut self) {
        self.register(FunctionDef {
            name: "AVERAGE",
            kind: FunctionKind::Interval(math::fn_average),
        });

        self.register(FunctionDef {
            name: "PRODUCT",
            kind: FunctionKind::Interval(math::fn_product),
        });

        self.register(FunctionDef {
            name: "CONCAT",
            kind: FunctionKind::Interval(text::fn_concat),
        });

        self.register(FunctionDef {
            name: "COALESCE",
            kind: FunctionKind::Interval(text::fn_coalesce),
        });
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_registry_names() {
        assert_eq!(
            registry().names(),
            vec!["ADD", "AVERAGE", "COALESCE", "CONCAT", "DIV", "MUL", "PRODUCT", "SUB"]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let (name, _) = registry().binary("add").unwrap();
        assert_eq!(name, "ADD");

        let (name, _) = registry().interval(" Average ").unwrap();
        assert_eq!(name, "AVERAGE");
    }

    #[test]
    fn test_unknown_function() {
        assert!(matches!(
            registry().binary("POW"),
            Err(FormulaError::UnknownFunction(name)) if name == "POW"
        ));
    }

    #[test]
    fn test_wrong_kind() {
        assert!(matches!(
            registry().binary("CONCAT"),
            Err(FormulaError::ArgumentCount { .. })
        ));
        assert!(matches!(
            registry().interval("MUL"),
            Err(FormulaError::ArgumentCount { .. })
        ));
    }
}
