//! Property tests for `prometheus_deployment.cluster_mode` validation.

use proptest::prelude::*;
use serde_yaml_ng::Value;

use promstack::config::topology_mode;
use promstack::TopologyMode;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every integer other than 0 and 1 is rejected.
    #[test]
    fn property_other_integers_rejected(code in any::<i64>().prop_filter("not 0 or 1", |c| *c != 0 && *c != 1)) {
        prop_assert!(topology_mode(Some(&Value::from(code))).is_err());
    }

    /// PROPERTY: Floats are rejected, even integral ones.
    #[test]
    fn property_floats_rejected(code in -4.0f64..4.0) {
        prop_assert!(topology_mode(Some(&Value::from(code))).is_err());
    }

    /// PROPERTY: Strings are rejected, even "0" and "1".
    #[test]
    fn property_strings_rejected(text in "[0-9a-z]{0,4}") {
        prop_assert!(topology_mode(Some(&Value::from(text))).is_err());
    }
}

#[test]
fn zero_and_one_are_the_only_valid_codes() {
    assert_eq!(
        topology_mode(Some(&Value::from(0))).unwrap(),
        TopologyMode::Single
    );
    assert_eq!(
        topology_mode(Some(&Value::from(1))).unwrap(),
        TopologyMode::Cluster
    );
    assert!(topology_mode(None).is_err());
    assert!(topology_mode(Some(&Value::Null)).is_err());
    assert!(topology_mode(Some(&Value::Bool(true))).is_err());
}
