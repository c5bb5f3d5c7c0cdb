#[macro_use]
extern crate afl;

use ubx_timepulse::{validate_frame, write_frame, SliceWriter};

fn check(data: &[u8]) {
    // validate_frame must report, never panic
    if let Ok(frame) = validate_frame(data) {
        assert_eq!(frame.payload.len() + 8, data.len());

        // A frame that validates must re-encode to the same bytes
        let mut buf = vec![0; data.len()];
        let mut out = SliceWriter::new(&mut buf);
        write_frame(frame.class, frame.id, frame.payload, &mut out).unwrap();
        assert_eq!(out.written(), data);
    }

    // Treat the input as a payload as well, the result must always validate
    if data.len() > 2 {
        let (class, id, payload) = (data[0], data[1], &data[2..]);
        let mut buf = vec![0; payload.len() + 8];
        let mut out = SliceWriter::new(&mut buf);
        if write_frame(class, id, payload, &mut out).is_ok() {
            let frame = validate_frame(out.written()).unwrap();
            assert_eq!(frame.payload, payload);
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        check(data);
    });
}
