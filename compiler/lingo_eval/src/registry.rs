//! Function registry.

use rustc_hash::FxHashMap;

use lingo_ir::{Name, SymbolTable};

use crate::{Function, RegistryError};

/// Functions keyed by the interned label of their symbol.
///
/// Registering a function also hooks its symbol in the [`SymbolTable`], so
/// the parser recognizes the label as a node kind from then on.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<Name, Box<dyn Function>>,
    order: Vec<Name>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        function: Box<dyn Function>,
        symbols: &mut SymbolTable,
    ) -> Result<Name, RegistryError> {
        let label = function.symbol();
        if symbols
            .name(label)
            .is_some_and(|name| self.functions.contains_key(&name))
        {
            return Err(RegistryError::DuplicateFunction(label.to_owned()));
        }
        let name = symbols.hook(label)?;
        tracing::debug!(symbol = label, "registered function");
        self.functions.insert(name, function);
        self.order.push(name);
        Ok(name)
    }

    pub fn get(&self, name: Name) -> Option<&dyn Function> {
        self.functions.get(&name).map(Box::as_ref)
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.functions.contains_key(&name)
    }

    /// Look a function up by its label text.
    pub fn by_label(&self, label: &str, symbols: &SymbolTable) -> Option<&dyn Function> {
        symbols.name(label).and_then(|name| self.get(name))
    }

    /// Functions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Function> {
        self.order
            .iter()
            .filter_map(|name| self.functions.get(name).map(Box::as_ref))
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
