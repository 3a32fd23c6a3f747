//! The caller keeps ownership of a borrowed sink.

use std::io::Write;

use json_mask::MaskWriter;

fn main() {
    let mut log = Vec::new();

    let mut writer = MaskWriter::new(&mut log, ["password"], "******");
    writer.write_all(br#"{"password":"pw"}"#).unwrap();
    drop(writer);

    log.extend_from_slice(b"\n");
    assert_eq!(log, b"{\"password\":\"******\"}\n");
}
