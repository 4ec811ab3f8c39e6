//! `leetmetric lookup` end to end: real binary, local mock API.

use leetmetric_testing::{MockReply, MockStatsServer, TestWorld, fixtures};
use predicates::prelude::*;

fn world_with_server() -> (TestWorld, MockStatsServer) {
    let server = MockStatsServer::start().expect("mock server");
    let world = TestWorld::new().with_endpoint(server.base_url());
    (world, server)
}

#[test]
fn test_lookup_prints_stats() {
    let (world, server) = world_with_server();
    server.route("busy_user", MockReply::ok(fixtures::profile_json(12, 8, 1)));

    let result = world.run(&["lookup", "busy_user"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let stdout = result.stdout();
    assert!(predicate::str::contains("Looked up 1 username(s)").eval(stdout));
    assert!(predicate::str::contains("Successfully fetched data for busy_user!").eval(stdout));
    assert!(predicate::str::contains("Total Solved").eval(stdout));
    assert!(predicate::str::contains("57.1%").eval(stdout));
    assert!(predicate::str::contains("38.1%").eval(stdout));
    assert!(predicate::str::contains("4.8%").eval(stdout));
    assert_eq!(server.hits(), 1);
}

#[test]
fn test_lookup_json_envelope() {
    let (world, server) = world_with_server();
    server.route("ranked", MockReply::ok(fixtures::full_profile_json()));

    let result = world.run(&["lookup", "ranked", "--format", "json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    let entry = &json["content"]["results"][0];
    assert_eq!(entry["input"], "ranked");
    assert_eq!(entry["source"], "network");
    assert_eq!(entry["notice"]["outcome"], "fetched");
    assert_eq!(entry["stats"]["total_solved"], 21);
    assert_eq!(entry["stats"]["acceptance_label"], "61.25%");
    assert_eq!(entry["stats"]["ranking_label"], "#1,234,567");
    assert!(entry["retrieved_at"].is_string());
}

#[test]
fn test_quiet_lookup_prints_totals_only() {
    let (world, server) = world_with_server();
    server.route("abc", MockReply::ok(fixtures::profile_json(3, 2, 1)));

    let result = world.run(&["lookup", "abc", "--quiet"]).unwrap();

    assert!(result.success());
    assert_eq!(result.stdout(), "abc 6\n");
}

#[test]
fn test_compact_lookup_is_one_line() {
    let (world, server) = world_with_server();
    server.route("abc", MockReply::ok(fixtures::profile_json(12, 8, 1)));

    let result = world.run(&["lookup", "abc", "--compact"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("abc  21 solved  E 12 · M 8 · H 1"));
}

#[test]
fn test_failed_lookup_exits_nonzero() {
    let (world, server) = world_with_server();

    // no route, so the mock answers 404
    let result = world.run(&["lookup", "ghost_user"]).unwrap();

    assert!(!result.success());
    assert!(
        result
            .stdout()
            .contains("User not found. Please check the username and try again.")
    );
    assert!(result.stderr().contains("Error: 1 of 1 lookup(s) failed"));
    assert_eq!(server.hits(), 1);
}

#[test]
fn test_partial_failure_reports_both() {
    let (world, server) = world_with_server();
    server.route("abc", MockReply::ok(fixtures::profile_json(1, 1, 1)));
    server.route("limited", MockReply::status(429));

    let result = world.run(&["lookup", "abc", "limited"]).unwrap();

    assert!(!result.success());
    assert!(result.stdout().contains("1 of 2 lookup(s) failed"));
    assert!(result.stdout().contains("Too many requests."));
    assert!(result.stderr().contains("Error: 1 of 2 lookup(s) failed"));
}

#[test]
fn test_repeated_username_is_not_fetched_twice() {
    let (world, server) = world_with_server();
    server.route("abc", MockReply::ok(fixtures::profile_json(1, 0, 0)));

    let result = world.run(&["lookup", "abc", "abc"]).unwrap();

    // duplicates are warnings, not failures
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("You're already viewing this user's data!"));
    assert_eq!(server.hits(), 1);
}

#[test]
fn test_invalid_username_never_hits_network() {
    let (world, server) = world_with_server();

    let result = world.run(&["lookup", "a!"]).unwrap();

    assert!(!result.success());
    assert!(result.stdout().contains("Please enter a valid LeetCode username"));
    assert_eq!(server.hits(), 0);
}

#[test]
fn test_zero_timeout_is_rejected() {
    let (world, server) = world_with_server();

    let result = world
        .run(&["lookup", "abc", "--timeout-secs", "0"])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("timeout_secs must be greater than zero"));
    assert_eq!(server.hits(), 0);
}

#[test]
fn test_endpoint_from_config_file() {
    let server = MockStatsServer::start().unwrap();
    server.route("abc", MockReply::ok(fixtures::profile_json(2, 0, 0)));

    // no --endpoint flag this time
    let world = TestWorld::new();
    world
        .write_config(&format!("endpoint = \"{}\"\n", server.base_url()))
        .unwrap();

    let result = world.run(&["lookup", "abc", "--quiet"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.stdout(), "abc 2\n");
}

#[test]
fn test_tui_requires_terminal() {
    let world = TestWorld::new();

    let result = world.run(&["tui"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("interactive terminal"));
}

#[test]
fn test_rust_log_overrides_log_level() {
    let server = MockStatsServer::start().unwrap();
    server.route("abc", MockReply::ok(fixtures::profile_json(1, 0, 0)));

    let quiet = TestWorld::new().with_endpoint(server.base_url());
    let result = quiet.run(&["lookup", "abc", "--quiet"]).unwrap();
    assert!(result.success());
    assert!(!result.stderr().contains("starting lookups"));

    let traced = TestWorld::new()
        .with_endpoint(server.base_url())
        .with_env("RUST_LOG", "info");
    let result = traced.run(&["lookup", "abc", "--quiet"]).unwrap();
    assert!(result.success());
    assert!(result.stderr().contains("starting lookups"));
    // logs never leak into the payload
    assert_eq!(result.stdout(), "abc 1\n");
}
