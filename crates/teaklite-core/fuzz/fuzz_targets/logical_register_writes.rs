#![no_main]

use libfuzzer_sys::fuzz_target;
use teaklite_core::{Condition, LogicalRegister, RegisterState};

fuzz_target!(|data: &[u8]| {
    let mut state = RegisterState::default();

    for chunk in data.chunks_exact(3) {
        let reg = LogicalRegister::ALL[usize::from(chunk[0]) % LogicalRegister::ALL.len()];
        let value = u16::from_be_bytes([chunk[1], chunk[2]]);

        let before = state.read_logical(reg);
        state.write_logical(reg, value);
        let after = state.read_logical(reg);

        let layout = reg.layout();
        assert_eq!(after & layout.writable_mask(), value & layout.writable_mask());
        assert_eq!(after & layout.read_only_mask(), before & layout.read_only_mask());
        assert_eq!(after & !layout.bound_mask(), 0);

        for acc in state.a.iter().chain(state.b.iter()) {
            assert!(acc.is_sign_extended());
        }
    }

    for cond in Condition::ALL {
        let _ = state.condition_pass(cond);
    }
});
