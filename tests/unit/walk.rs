//! Increment walk tests over the demo-sized buffer.

use recbuf::{increment_images, StructuredBuffer, DEMO_ELEMENT_COUNT};

#[test]
fn demo_count_matches_the_original_program() {
    assert_eq!(DEMO_ELEMENT_COUNT, 128);
}

#[test]
fn two_passes_leave_every_image_at_original_plus_two() {
    let mut buf = StructuredBuffer::create(DEMO_ELEMENT_COUNT).unwrap();

    // Seed a few records so "original + 2" is visible beyond zero.
    buf.set_image(0, 100).unwrap();
    buf.set_image(63, -50).unwrap();
    buf.set_image(127, 7).unwrap();

    increment_images(&mut buf).unwrap();
    increment_images(&mut buf).unwrap();

    for i in 0..DEMO_ELEMENT_COUNT as i64 {
        let expected = match i {
            0 => 102,
            63 => -48,
            127 => 9,
            _ => 2,
        };
        assert_eq!(buf.image(i).unwrap(), expected, "index {}", i);
    }
}

#[test]
fn walk_order_is_strictly_ascending_and_reproducible() {
    // Two independent buffers walked identically must agree field by field.
    let mut a = StructuredBuffer::create(DEMO_ELEMENT_COUNT).unwrap();
    let mut b = StructuredBuffer::create(DEMO_ELEMENT_COUNT).unwrap();
    increment_images(&mut a).unwrap();
    increment_images(&mut b).unwrap();
    for i in 0..DEMO_ELEMENT_COUNT as i64 {
        assert_eq!(a.image(i).unwrap(), b.image(i).unwrap());
    }
}

#[test]
fn real_fields_stay_zero_through_the_walk() {
    let mut buf = StructuredBuffer::create(DEMO_ELEMENT_COUNT).unwrap();
    increment_images(&mut buf).unwrap();
    increment_images(&mut buf).unwrap();
    for i in 0..DEMO_ELEMENT_COUNT as i64 {
        assert_eq!(buf.real(i).unwrap(), 0);
    }
}

#[test]
fn buffer_releases_cleanly_after_the_walk() {
    let mut buf = StructuredBuffer::create(DEMO_ELEMENT_COUNT).unwrap();
    increment_images(&mut buf).unwrap();
    buf.release().unwrap();
    assert!(buf.is_released());
}
