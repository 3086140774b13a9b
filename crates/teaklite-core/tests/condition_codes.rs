//! Condition-code evaluation against the flag state.

use log as _;
use proptest::prelude::*;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use teaklite_core::{Condition, ConditionError, RegisterState};
use thiserror as _;

#[derive(Debug, Clone, Copy, Default)]
struct Flags {
    z: u16,
    m: u16,
    n: u16,
    v: u16,
    e: u16,
    c: u16,
    l: [u16; 2],
    r: u16,
    iu: [u16; 2],
}

fn state_with(flags: Flags) -> RegisterState {
    let mut state = RegisterState::default();
    state.fz = flags.z;
    state.fm = flags.m;
    state.fn_ = flags.n;
    state.fv = flags.v;
    state.fe = flags.e;
    state.fc = flags.c;
    state.fl = flags.l;
    state.fr = flags.r;
    state.iu = flags.iu;
    state
}

#[rstest]
#[case(Condition::True, Flags::default(), true)]
#[case(Condition::Eq, Flags { z: 1, ..Flags::default() }, true)]
#[case(Condition::Eq, Flags::default(), false)]
#[case(Condition::Neq, Flags::default(), true)]
#[case(Condition::Gt, Flags::default(), true)]
#[case(Condition::Gt, Flags { m: 1, ..Flags::default() }, false)]
#[case(Condition::Gt, Flags { z: 1, ..Flags::default() }, false)]
#[case(Condition::Ge, Flags { z: 1, ..Flags::default() }, true)]
#[case(Condition::Ge, Flags { m: 1, ..Flags::default() }, false)]
#[case(Condition::Lt, Flags { m: 1, ..Flags::default() }, true)]
#[case(Condition::Lt, Flags { z: 1, ..Flags::default() }, false)]
#[case(Condition::Le, Flags { z: 1, ..Flags::default() }, true)]
#[case(Condition::Le, Flags { m: 1, ..Flags::default() }, true)]
#[case(Condition::Le, Flags::default(), false)]
#[case(Condition::Nn, Flags::default(), true)]
#[case(Condition::Nn, Flags { n: 1, ..Flags::default() }, false)]
#[case(Condition::C, Flags { c: 1, ..Flags::default() }, true)]
#[case(Condition::C, Flags::default(), false)]
#[case(Condition::V, Flags { v: 1, ..Flags::default() }, true)]
#[case(Condition::E, Flags { e: 1, ..Flags::default() }, true)]
#[case(Condition::E, Flags::default(), false)]
#[case(Condition::L, Flags { l: [0, 1], ..Flags::default() }, true)]
#[case(Condition::L, Flags::default(), false)]
#[case(Condition::Nr, Flags::default(), true)]
#[case(Condition::Nr, Flags { r: 1, ..Flags::default() }, false)]
#[case(Condition::Niu0, Flags::default(), true)]
#[case(Condition::Niu0, Flags { iu: [1, 0], ..Flags::default() }, false)]
#[case(Condition::Iu0, Flags { iu: [1, 0], ..Flags::default() }, true)]
#[case(Condition::Iu1, Flags { iu: [1, 0], ..Flags::default() }, false)]
#[case(Condition::Iu1, Flags { iu: [0, 1], ..Flags::default() }, true)]
fn condition_table(#[case] cond: Condition, #[case] flags: Flags, #[case] expected: bool) {
    assert_eq!(state_with(flags).condition_pass(cond), expected);
}

#[test]
fn zero_without_minus_matches_comparison_predicates() {
    let state = state_with(Flags {
        z: 1,
        m: 0,
        ..Flags::default()
    });

    assert!(state.condition_pass(Condition::Eq));
    assert!(!state.condition_pass(Condition::Neq));
    assert!(!state.condition_pass(Condition::Gt));
    assert!(state.condition_pass(Condition::Ge));
}

#[test]
fn out_of_range_condition_codes_are_rejected() {
    for code in 0x10_u8..=0xFF {
        assert_eq!(Condition::from_u4(code), None);
        assert_eq!(
            Condition::try_from(code),
            Err(ConditionError::InvalidCode(code))
        );
    }
}

#[test]
#[should_panic(expected = "decoder and condition table are out of sync")]
fn encoded_condition_outside_table_is_fatal() {
    let _ = RegisterState::default().condition_pass_encoded(0x20);
}

proptest! {
    #[test]
    fn property_complementary_conditions_disagree(
        z in 0_u16..=1,
        m in 0_u16..=1,
        iu0 in 0_u16..=1,
    ) {
        let state = state_with(Flags { z, m, iu: [iu0, 0], ..Flags::default() });

        prop_assert_ne!(state.condition_pass(Condition::Eq), state.condition_pass(Condition::Neq));
        prop_assert_ne!(state.condition_pass(Condition::Ge), state.condition_pass(Condition::Lt));
        prop_assert_ne!(state.condition_pass(Condition::Gt), state.condition_pass(Condition::Le));
        prop_assert_ne!(state.condition_pass(Condition::Iu0), state.condition_pass(Condition::Niu0));
    }
}
