use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_frame_is_lifo_and_indexable() {
    let mut frame = Frame::new();
    frame.push(Value::int(1));
    frame.push(Value::string("two"));

    assert_eq!(frame.len(), 2);
    assert_eq!(frame.get(0), Some(&Value::int(1)));
    assert_eq!(frame.peek(), Some(&Value::string("two")));
    assert_eq!(frame.pop(), Some(Value::string("two")));
    assert_eq!(frame.pop(), Some(Value::int(1)));
    assert_eq!(frame.pop(), None);
    assert!(frame.is_empty());
}

#[test]
fn test_append_keeps_order() {
    let mut parent = Frame::from_values(vec![Value::int(1)]);
    parent.append(Frame::from_values(vec![Value::int(2), Value::int(3)]));
    assert_eq!(
        parent.items(),
        &[Value::int(1), Value::int(2), Value::int(3)]
    );
}

#[test]
fn test_stack_falls_back_to_root() {
    let mut stack = EvalStack::new();
    stack.current_mut().push(Value::int(0));
    assert!(stack.is_balanced());

    stack.push_frame();
    stack.current_mut().push(Value::int(1));
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.current().items(), &[Value::int(1)]);

    let call = stack.pop_frame();
    assert_eq!(call.map(|frame| frame.len()), Some(1));
    assert_eq!(stack.current().items(), &[Value::int(0)]);
    assert_eq!(stack.pop_frame(), None);
    assert!(stack.is_balanced());
}
