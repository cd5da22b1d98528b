//! Buffer contract tests exercised through the public API only.

use recbuf::{BufferError, Field, StructuredBuffer, RECORD_SIZE};

#[test]
fn record_stride_is_sixteen_bytes() {
    assert_eq!(RECORD_SIZE, 16);
    assert_eq!(Field::Real.offset(), 0);
    assert_eq!(Field::Image.offset(), 8);
}

#[test]
fn create_then_read_returns_zero_for_every_in_range_index() {
    for count in [1usize, 2, 7, 128] {
        let buf = StructuredBuffer::create(count).unwrap();
        assert_eq!(buf.element_count(), count);
        for i in 0..count as i64 {
            assert_eq!(buf.image(i).unwrap(), 0);
        }
    }
}

#[test]
fn set_image_then_get_round_trips_exactly() {
    let mut buf = StructuredBuffer::create(10).unwrap();
    for (i, v) in [(0, i64::MIN), (5, -1), (9, i64::MAX)] {
        buf.set_image(i, v).unwrap();
        assert_eq!(buf.image(i).unwrap(), v);
    }
}

#[test]
fn generic_field_access_matches_named_accessors() {
    let mut buf = StructuredBuffer::create(3).unwrap();
    buf.write_field(1, Field::Real, 11).unwrap();
    buf.write_field(1, Field::Image, 22).unwrap();
    assert_eq!(buf.real(1).unwrap(), 11);
    assert_eq!(buf.image(1).unwrap(), 22);
    assert_eq!(buf.read_field(1, Field::Real).unwrap(), 11);
}

#[test]
fn index_minus_one_and_element_count_both_rejected() {
    for count in [0usize, 1, 8, 128] {
        let buf = StructuredBuffer::create(count).unwrap();
        assert_eq!(
            buf.image(-1),
            Err(BufferError::IndexOutOfRange {
                index: -1,
                element_count: count
            })
        );
        assert_eq!(
            buf.image(count as i64),
            Err(BufferError::IndexOutOfRange {
                index: count as i64,
                element_count: count
            })
        );
    }
}

#[test]
fn every_accessor_fails_after_release() {
    let mut buf = StructuredBuffer::create(4).unwrap();
    buf.set_image(0, 9).unwrap();
    buf.release().unwrap();

    assert_eq!(buf.image(0), Err(BufferError::UseAfterRelease));
    assert_eq!(buf.real(0), Err(BufferError::UseAfterRelease));
    assert_eq!(buf.set_image(0, 1), Err(BufferError::UseAfterRelease));
    assert_eq!(buf.set_real(0, 1), Err(BufferError::UseAfterRelease));
    assert_eq!(buf.release(), Err(BufferError::UseAfterRelease));
}

#[test]
fn allocation_error_carries_the_requested_count() {
    let err = StructuredBuffer::create(usize::MAX).unwrap_err();
    assert_eq!(
        err,
        BufferError::Allocation {
            element_count: usize::MAX
        }
    );
}

#[test]
fn error_messages_name_the_violation() {
    let buf = StructuredBuffer::create(4).unwrap();
    let msg = buf.image(4).unwrap_err().to_string();
    assert!(msg.contains("index 4"), "got: {}", msg);
    assert!(msg.contains("[0, 4)"), "got: {}", msg);

    let mut buf = buf;
    buf.release().unwrap();
    let msg = buf.image(0).unwrap_err().to_string();
    assert!(msg.contains("released"), "got: {}", msg);
}
