use lingo_ir::SymbolError;
use thiserror::Error;

/// Macro translation or registration failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacroError {
    #[error("threading macro not applicable to atomic expressions")]
    AtomicThreadTarget,

    #[error("threading macro translation failed")]
    ThreadTranslation,

    #[error("quote macro translation failed")]
    QuoteTranslation,

    /// The pass found nothing to rewrite.
    #[error("macro '{0}' not applicable")]
    NotApplicable(String),

    #[error("macro with id {0} already registered")]
    Duplicate(String),

    #[error(transparent)]
    Symbol(#[from] SymbolError),
}
