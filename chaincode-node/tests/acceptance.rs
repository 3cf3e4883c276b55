//! Acceptance tests for chaincode-node.
//!
//! These tests drive the host the way the binary does:
//! 1. CLI arguments are parsed into a `HostConfig` and a `Command`
//! 2. The command runs against the configured state backend
//! 3. The response envelope reports the outcome

use clap::Parser;
use serde_json::Value;

use chaincode_node::cli::{Cli, Command};
use chaincode_node::config::HostConfig;
use chaincode_node::host::Host;
use chaincode_state::{QueryResponse, STATUS_ERROR, STATUS_OK};

fn run(host: &mut Host, argv: &[&str]) -> Value {
    let cli = Cli::parse_from(std::iter::once("chaincode-node").chain(argv.iter().copied()));
    let response = host.execute(&cli.command);
    serde_json::to_value(&response).unwrap()
}

#[test]
fn test_in_memory_session() {
    let cli = Cli::parse_from(["chaincode-node", "--in-memory", "init", "a", "100", "b", "200"]);
    let mut host = Host::open(HostConfig::from_cli(&cli)).unwrap();

    let response = host.execute(&cli.command);
    assert_eq!(response.status, STATUS_OK);

    let response = run(&mut host, &["invoke", "invoke", "a", "b", "10"]);
    assert_eq!(response["status"], 200);
    assert_eq!(response["payload"], "210");
    assert!(response.get("code").is_none());

    let response = run(&mut host, &["invoke", "query", "b"]);
    let payload = response["payload"].as_str().unwrap();
    let query = QueryResponse::from_payload(payload.as_bytes()).unwrap();
    assert_eq!(query, QueryResponse::new("b", "210"));
}

#[test]
fn test_failure_envelope() {
    let mut host = Host::open(HostConfig::default()).unwrap();

    let response = run(&mut host, &["invoke", "invoke", "a", "b", "10"]);
    assert_eq!(response["status"], 500);
    assert_eq!(response["code"], "ENTITY_NOT_FOUND");
    assert_eq!(response["payload"], "");

    let response = run(&mut host, &["init", "a", "100", "b"]);
    assert_eq!(response["code"], "WRONG_ARGUMENT_COUNT");

    let response = run(&mut host, &["invoke", "transfer", "a", "b", "1"]);
    assert_eq!(response["code"], "UNKNOWN_OPERATION");
}

#[test]
fn test_negative_amount_reaches_chaincode() {
    let mut host = Host::open(HostConfig::default()).unwrap();
    run(&mut host, &["init", "a", "100", "b", "200"]);

    let response = run(&mut host, &["invoke", "invoke", "a", "b", "-50"]);
    assert_eq!(response["payload"], "150");
}

#[cfg(feature = "rocksdb")]
#[test]
fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().to_str().unwrap();

    let open = |argv: &[&str]| {
        let mut full = vec!["chaincode-node", "--data-dir", data_dir];
        full.extend_from_slice(argv);
        let cli = Cli::parse_from(full);
        (Host::open(HostConfig::from_cli(&cli)).unwrap(), cli.command)
    };

    {
        let (mut host, command) = open(&["init", "a", "100", "b", "200"]);
        assert!(host.execute(&command).is_success());
        let transfer = ["b", "a", "75"].map(String::from);
        assert!(host.invoke("invoke", &transfer).is_success());
        host.flush().unwrap();
    }

    assert!(dir.path().join("state.db").exists());

    {
        let (mut host, command) = open(&["invoke", "query", "a"]);
        let response = host.execute(&command);
        assert_eq!(response.status, STATUS_OK);
        assert_eq!(
            QueryResponse::from_payload(response.payload.as_bytes()).unwrap().amount,
            "175"
        );

        let response = host.execute(&Command::Invoke {
            function: "delete".to_string(),
            args: vec!["b".to_string()],
        });
        assert!(response.is_success());

        let response = host.invoke("query", &["b".to_string()]);
        assert_eq!(response.status, STATUS_ERROR);
        assert_eq!(response.code.as_deref(), Some("INVALID_NUMERIC_ARGUMENT"));
    }
}
