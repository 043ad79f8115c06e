// SPDX-License-Identifier: Apache-2.0

use cir_gate_model::AcceptanceCriterion;
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn text_items_count_is_description_plus_steps(
        pre in vec("[a-z ]{0,12}", 0..6),
        trig in vec("[a-z ]{0,12}", 0..6),
        out in vec("[a-z ]{0,12}", 0..6)
    ) {
        let ac = AcceptanceCriterion::new("AC-1", "desc")
            .with_preconditions(pre.clone())
            .with_triggers(trig.clone())
            .with_expected_outcome(out.clone());
        prop_assert_eq!(ac.step_count(), pre.len() + trig.len() + out.len());
        prop_assert_eq!(ac.text_items().count(), 1 + ac.step_count());
    }
}
