//! Built-in functions.
//!
//! Furnishing functions (`string`, `int`, `keyword`, `identifier`) turn the
//! raw literal of an atom into a typed value. The structural ones (`root`,
//! `dict`, `pair`, `vec`, `;`) give meaning to the nodes the parser builds.
//! The rest are what users call.

mod arith;
mod binding;
mod furnish;
mod meta;
mod quoting;
mod structure;
mod text;

use crate::Function;

/// Every built-in, in the order `desc` lists them.
pub(crate) fn defaults() -> Vec<Box<dyn Function>> {
    vec![
        Box::new(meta::Root),
        Box::new(meta::Comment),
        Box::new(text::Concat),
        Box::new(meta::Desc),
        Box::new(binding::Def),
        Box::new(binding::Bindings),
        Box::new(binding::Resolve),
        Box::new(binding::Tidy),
        Box::new(structure::Pair),
        Box::new(structure::Dict),
        Box::new(structure::Vector),
        Box::new(arith::Add),
        Box::new(furnish::Identifier),
        Box::new(furnish::Str),
        Box::new(furnish::Int),
        Box::new(furnish::Keyword),
        Box::new(quoting::Quote),
        Box::new(quoting::Eval),
    ]
}
