//! Textual renderings of expression trees.
//!
//! Both forms are compared byte for byte in tests, so spacing here is part
//! of the contract:
//!
//! ```text
//! render_tree                       render_values
//! (root:                            (root (concat "a" "b" ) )
//!  (concat:
//!   (string "a")
//!   (string "b")
//!  )
//! )
//! ```

use std::fmt::Write;

use lingo_stack::ensure_sufficient_stack;

use super::SExpr;
use crate::{labels, StringLookup};

impl SExpr {
    /// Multi-line indented debug form.
    pub fn render_tree<L: StringLookup + ?Sized>(&self, lookup: &L) -> String {
        let mut out = String::new();
        self.write_tree(lookup, 0, &mut out);
        out
    }

    /// Single-line form: atoms render as bare (or quoted) literals.
    pub fn render_values<L: StringLookup + ?Sized>(&self, lookup: &L) -> String {
        let mut out = String::new();
        self.write_values(lookup, &mut out);
        out
    }

    fn is_string<L: StringLookup + ?Sized>(&self, lookup: &L) -> bool {
        lookup.lookup(self.kind) == labels::STRING
    }

    fn write_tree<L: StringLookup + ?Sized>(&self, lookup: &L, level: usize, out: &mut String) {
        ensure_sufficient_stack(|| {
            let kind = lookup.lookup(self.kind);
            let indent = " ".repeat(level);
            if self.is_atomic() {
                if self.is_string(lookup) {
                    let _ = writeln!(out, "{indent}({kind} \"{}\")", self.literal);
                } else {
                    let _ = writeln!(out, "{indent}({kind} {})", self.literal);
                }
                return;
            }

            let _ = writeln!(out, "{indent}({kind}:{}", self.literal);
            for child in &self.children {
                child.write_tree(lookup, level + 1, out);
            }
            let _ = writeln!(out, "{indent})");
        });
    }

    fn write_values<L: StringLookup + ?Sized>(&self, lookup: &L, out: &mut String) {
        ensure_sufficient_stack(|| {
            if self.is_atomic() {
                if self.is_string(lookup) {
                    let _ = write!(out, "\"{}\" ", self.literal);
                } else {
                    let _ = write!(out, "{} ", self.literal);
                }
                return;
            }

            let _ = write!(out, "({} {}", lookup.lookup(self.kind), self.literal);
            for child in &self.children {
                child.write_values(lookup, out);
            }
            out.push_str(") ");
        });
    }
}
