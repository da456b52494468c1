use super::*;

#[test]
fn refcell_store_modify_returns_closure_result() {
    let store = RefCell::new(vec![1, 2]);
    let len = store.modify(|v| {
        v.push(3);
        v.len()
    });
    assert_eq!(len, Some(3));
    assert_eq!(store.inspect(|v| v.clone()), Some(vec![1, 2, 3]));
}

#[test]
fn refcell_store_inspect_does_not_mutate() {
    let store = RefCell::new(String::from("resume"));
    assert_eq!(store.inspect(String::len), Some(6));
    assert_eq!(store.into_inner(), "resume");
}
