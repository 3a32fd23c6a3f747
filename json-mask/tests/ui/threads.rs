//! Writers are `Send` and policies can be shared across threads.

use std::{sync::Arc, thread};

use json_mask::{MaskPolicy, MaskWriter};

fn assert_send<T: Send>() {}
fn assert_sync<T: Sync>() {}

fn main() {
    assert_send::<MaskWriter<Vec<u8>>>();
    assert_sync::<MaskPolicy>();

    let policy = Arc::new(MaskPolicy::new(["ssn"], "******"));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let policy = Arc::clone(&policy);
            thread::spawn(move || {
                let doc = format!(r#"{{"id":{i},"ssn":"000-00-000{i}"}}"#);
                policy.mask_slice(doc.as_bytes()).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let out = handle.join().unwrap();
        assert_eq!(out, format!(r#"{{"id":{i},"ssn":"******"}}"#).into_bytes());
    }
}
