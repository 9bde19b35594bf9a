//! BDD step definitions for opening an entry's detail screen

use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use listing_core::EntryType;
use serde_json::Value;

use crate::world::ListingWorld;

fn parse_type(s: &str) -> EntryType {
    s.parse()
        .unwrap_or_else(|_| panic!("Unknown entry type: {}", s))
}

#[given(expr = "the stock count detail for {string} is:")]
fn stock_count_detail(world: &mut ListingWorld, id: String, step: &Step) {
    let json = step.docstring.as_ref().expect("detail docstring missing");
    let detail: Value = serde_json::from_str(json).expect("detail is not JSON");
    world.backend.sc_details.lock().unwrap().insert(id, detail);
}

#[when(expr = "the {word} entry {string} is opened")]
async fn open_entry(world: &mut ListingWorld, entry_type: String, id: String) {
    let result = world.service().open(parse_type(&entry_type), &id).await;
    world.navigation = Some(result);
}

#[then(expr = "the card should open {string}")]
fn card_opens(world: &mut ListingWorld, expected: String) {
    match world.navigation.as_ref().expect("no entry was opened") {
        Ok((screen, _)) => assert_eq!(screen.name(), expected),
        Err(e) => panic!("expected navigation to '{}', got error: {}", expected, e),
    }
}

#[then(expr = "the forwarded entry item should have {string} equal to {string}")]
fn forwarded_field(world: &mut ListingWorld, field: String, expected: String) {
    let params = match world.navigation.as_ref().expect("no entry was opened") {
        Ok((_, params)) => params,
        Err(e) => panic!("expected navigation, got error: {}", e),
    };
    let value = serde_json::to_value(params).expect("params serialize");
    let actual = match &value["entryItem"][&field] {
        Value::String(s) => s.clone(),
        Value::Null => panic!("entry item has no '{}' field: {}", field, value),
        other => other.to_string(),
    };
    assert_eq!(actual, expected);
}

#[then(expr = "no screen should be opened")]
fn nothing_opened(world: &mut ListingWorld) {
    let navigation = world.navigation.as_ref().expect("no entry was opened");
    assert!(navigation.is_err(), "unexpected navigation: {:?}", navigation);
}

#[then(expr = "the backend should have served {int} stock count request(s)")]
fn stock_count_requests(world: &mut ListingWorld, count: usize) {
    assert_eq!(world.backend.sc_requests.lock().unwrap().len(), count);
}
