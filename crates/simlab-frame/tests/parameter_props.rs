use proptest::prelude::*;
use simlab_catalog::ParameterKey;
use simlab_frame::{Frame, ParameterValue};

fn any_key() -> impl Strategy<Value = ParameterKey> {
    (0..ParameterKey::ALL.len()).prop_map(|i| ParameterKey::ALL[i])
}

fn any_value() -> impl Strategy<Value = Option<ParameterValue>> {
    prop_oneof![
        Just(None::<ParameterValue>),
        (0.0f64..300.0).prop_map(|n| Some(ParameterValue::Number(n))),
        "[a-z]{1,8}".prop_map(|s| Some(ParameterValue::Text(s))),
    ]
}

#[test]
fn fresh_frame_is_incomplete() {
    let frame = Frame::new("1", "Frame 1", 5);
    assert!(!frame.is_complete());
}

proptest! {
    #[test]
    fn prop_any_write_marks_frame_complete(
        writes in prop::collection::vec((any_key(), any_value()), 1..20)
    ) {
        let mut frame = Frame::new("1", "Frame 1", 5);
        for (key, value) in writes {
            frame = frame.with_parameter(key, value);
        }
        prop_assert!(frame.is_complete());
    }

    #[test]
    fn prop_last_write_wins(
        writes in prop::collection::vec((any_key(), any_value()), 1..20)
    ) {
        let mut frame = Frame::new("1", "Frame 1", 5);
        for (key, value) in &writes {
            frame = frame.with_parameter(*key, value.clone());
        }

        let set = frame.parameter_set().unwrap();
        for key in ParameterKey::ALL {
            let expected = writes.iter().rev().find(|(k, _)| *k == key).and_then(|(_, v)| v.as_ref());
            prop_assert_eq!(set.get(key), expected);
        }
    }

    #[test]
    fn prop_writes_never_touch_identity(
        key in any_key(),
        value in any_value()
    ) {
        let frame = Frame::new("3", "Frame 3", 5);
        let next = frame.with_parameter(key, value);
        prop_assert_eq!(next.id(), frame.id());
        prop_assert_eq!(next.frame_identifier(), "3");
        prop_assert!(next.updated_at() >= frame.updated_at());
    }
}
