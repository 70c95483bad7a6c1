//! Scenario: a credential whose ip matches no configured host
//!
//! The merge itself succeeds; validation then reports the agent host that
//! never received a password.

use promstack::config::load;
use promstack::PromstackError;

use crate::common::*;

#[test]
fn scenario_unmatched_agent_credential_fails_validation() {
    let env = TestEnv::new();
    env.write_config(&config_yaml(env.root.path(), 0));
    env.write_secrets(&SECRETS_YAML.replace(
        "    - ip: 10.0.0.3\n      ssh_password: agent-pw\n",
        "    - ip: 10.0.0.30\n      ssh_password: agent-pw\n",
    ));

    let err = load(&env.path("config.yml")).unwrap_err();
    match err {
        PromstackError::Validation(message) => {
            assert_eq!(
                message,
                "node_exporter_servers[0] (host 10.0.0.3) is missing ssh_password"
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}
