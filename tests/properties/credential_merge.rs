//! Property tests for merging secrets into the configuration document.

use proptest::prelude::*;

use promstack::config::{
    ConfigDocument, CredentialEntry, Credentials, OneOrMany, ServerEntry, TargetServersDocument,
};

fn ip() -> impl Strategy<Value = String> {
    (0u8..6).prop_map(|last| format!("10.0.0.{}", last))
}

fn server_entry() -> impl Strategy<Value = ServerEntry> {
    (ip(), proptest::option::of("[a-z]{1,8}")).prop_map(|(ip, ssh_password)| ServerEntry {
        ip: Some(ip),
        ssh_user: Some("root".to_string()),
        ssh_password,
    })
}

fn credential() -> impl Strategy<Value = CredentialEntry> {
    (ip(), "[a-z]{1,8}").prop_map(|(ip, password)| CredentialEntry::new(ip, password))
}

fn document(agents: Vec<ServerEntry>) -> ConfigDocument {
    ConfigDocument {
        target_servers: Some(TargetServersDocument {
            node_exporter_servers: OneOrMany::from(agents),
            ..TargetServersDocument::default()
        }),
        ..ConfigDocument::default()
    }
}

fn credentials(agents: Vec<CredentialEntry>) -> Credentials {
    Credentials {
        node_exporter: OneOrMany::from(agents),
        ..Credentials::default()
    }
}

fn agents(doc: &ConfigDocument) -> Vec<ServerEntry> {
    doc.target_servers
        .as_ref()
        .map(|targets| targets.node_exporter_servers.as_slice().to_vec())
        .unwrap_or_default()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Merging the same credentials twice equals merging once.
    #[test]
    fn property_merge_is_idempotent(
        servers in proptest::collection::vec(server_entry(), 0..=6),
        creds in proptest::collection::vec(credential(), 0..=6),
    ) {
        let doc = document(servers);
        let creds = credentials(creds);

        let once = doc.with_credentials(&creds);
        let twice = once.with_credentials(&creds);

        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Descriptors with no matching credential come out unchanged.
    #[test]
    fn property_unmatched_descriptors_untouched(
        servers in proptest::collection::vec(server_entry(), 0..=6),
        creds in proptest::collection::vec(credential(), 0..=6),
    ) {
        let doc = document(servers.clone());
        let creds = credentials(creds);

        let merged = agents(&doc.with_credentials(&creds));

        prop_assert_eq!(merged.len(), servers.len());
        for (before, after) in servers.iter().zip(&merged) {
            let matched = creds
                .node_exporter
                .as_slice()
                .iter()
                .any(|c| Some(c.ip.as_str()) == before.ip.as_deref());
            if matched {
                prop_assert!(after.ssh_password.is_some());
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }

    /// PROPERTY: A matched descriptor takes the last credential listed for its ip.
    #[test]
    fn property_last_matching_credential_wins(
        servers in proptest::collection::vec(server_entry(), 1..=6),
        creds in proptest::collection::vec(credential(), 1..=6),
    ) {
        let doc = document(servers);
        let creds = credentials(creds);

        for after in agents(&doc.with_credentials(&creds)) {
            let last = creds
                .node_exporter
                .as_slice()
                .iter()
                .rev()
                .find(|c| Some(c.ip.as_str()) == after.ip.as_deref());
            if let Some(credential) = last {
                prop_assert_eq!(after.ssh_password.as_deref(), Some(credential.ssh_password.as_str()));
            }
        }
    }
}
