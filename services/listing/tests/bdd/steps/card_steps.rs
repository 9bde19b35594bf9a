//! BDD step definitions for listing card rendering

use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use serde_json::Value;

use crate::world::ListingWorld;

#[given("the backend lists:")]
fn backend_lists(world: &mut ListingWorld, step: &Step) {
    let json = step.docstring.as_ref().expect("listing docstring missing");
    let entries: Vec<Value> = serde_json::from_str(json).expect("listing is not a JSON array");
    *world.backend.listing.lock().unwrap() = entries;
}

#[given("the backend lists no entries")]
fn backend_lists_nothing(world: &mut ListingWorld) {
    world.backend.listing.lock().unwrap().clear();
}

#[when("the listing is rendered")]
async fn render_listing(world: &mut ListingWorld) {
    let result = world.service().list().await;
    world.output = Some(result);
}

#[then(expr = "the output should contain {string}")]
fn output_contains(world: &mut ListingWorld, expected: String) {
    let output = match world.output.as_ref().expect("no command was run") {
        Ok(output) => output,
        Err(e) => panic!("expected output, command failed: {}", e),
    };
    assert!(
        output.contains(&expected),
        "Expected output to contain '{}', but it didn't.\nOutput:\n{}",
        expected,
        output
    );
}

#[then(expr = "the output should not contain {string}")]
fn output_does_not_contain(world: &mut ListingWorld, unexpected: String) {
    let output = match world.output.as_ref().expect("no command was run") {
        Ok(output) => output,
        Err(e) => panic!("expected output, command failed: {}", e),
    };
    assert!(
        !output.contains(&unexpected),
        "Expected output not to contain '{}'.\nOutput:\n{}",
        unexpected,
        output
    );
}

#[then(expr = "the command should fail with {string}")]
fn command_fails_with(world: &mut ListingWorld, expected: String) {
    let error = world.last_error().expect("expected the command to fail");
    assert!(
        error.contains(&expected),
        "Expected error containing '{}', got '{}'",
        expected,
        error
    );
}

#[given(expr = "the backend lists a {word} entry {string} in status {string}")]
fn backend_lists_one(world: &mut ListingWorld, entry_type: String, id: String, status: String) {
    let entry = serde_json::json!({"id": id, "type": entry_type, "status": status});
    *world.backend.listing.lock().unwrap() = vec![entry];
}
