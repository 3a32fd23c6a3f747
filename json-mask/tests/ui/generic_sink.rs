//! A `MaskWriter` can stand in wherever a generic `io::Write` is expected.

use std::io::{self, Write};

use json_mask::MaskWriter;

fn emit<W: Write>(mut sink: W, payload: &[u8]) -> io::Result<W> {
    sink.write_all(payload)?;
    sink.flush()?;
    Ok(sink)
}

fn main() {
    let writer = MaskWriter::new(Vec::new(), ["token"], "******");
    let writer = emit(writer, br#"{"token":"abc"}"#).unwrap();
    assert_eq!(writer.into_inner(), br#"{"token":"******"}"#);

    // nested decorators
    let inner = MaskWriter::new(Vec::new(), ["a"], "x");
    let mut outer = MaskWriter::new(inner, ["b"], "y");
    outer.write_all(br#"{"a":1,"b":2}"#).unwrap();
    assert_eq!(outer.into_inner().into_inner(), br#"{"a":"x","b":"y"}"#);

    let boxed: Box<dyn Write> = Box::new(MaskWriter::new(io::sink(), ["a"], "x"));
    emit(boxed, br#"{"a":1}"#).unwrap();
}
