//! Evaluation frames.
//!
//! A [`Frame`] is both a LIFO work area and the argument list of one call:
//! children push their results onto it left to right, `validate` reads it by
//! index and `evaluate` pops it. The [`EvalStack`] keeps one root frame plus
//! a frame per call in progress.

use lingo_value::Value;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    items: Vec<Value>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(items: Vec<Value>) -> Self {
        Frame { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Most recently pushed value.
    pub fn peek(&self) -> Option<&Value> {
        self.items.last()
    }

    /// Argument at 0-based `index`, counted from the first push.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Arguments in push order.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Take every item, in push order, leaving the frame empty.
    pub fn drain(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.items)
    }

    /// Move every item of `other` to the top of this frame, keeping order.
    pub fn append(&mut self, other: Frame) {
        self.items.extend(other.items);
    }
}

/// Root frame plus one frame per open call.
#[derive(Debug, Default)]
pub struct EvalStack {
    root: Frame,
    calls: Vec<Frame>,
}

impl EvalStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a frame for a call.
    pub fn push_frame(&mut self) {
        self.calls.push(Frame::new());
    }

    /// Close the innermost call frame. The root frame is never popped.
    pub fn pop_frame(&mut self) -> Option<Frame> {
        self.calls.pop()
    }

    pub fn current(&self) -> &Frame {
        self.calls.last().unwrap_or(&self.root)
    }

    pub fn current_mut(&mut self) -> &mut Frame {
        self.calls.last_mut().unwrap_or(&mut self.root)
    }

    /// Number of open call frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.calls.len()
    }

    /// True once every call frame has been closed.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.calls.is_empty()
    }
}

#[cfg(test)]
mod tests;
