//! BDD step definitions for deleting an entry from its card

use cucumber::{given, then, when};
use listing_core::EntryType;

use crate::world::ListingWorld;

#[given("the backend rejects deletes")]
fn backend_rejects_deletes(world: &mut ListingWorld) {
    *world.backend.reject_deletes.lock().unwrap() = true;
}

#[when(expr = "the {word} entry {string} is deleted")]
async fn delete_entry(world: &mut ListingWorld, entry_type: String, id: String) {
    let entry_type: EntryType = entry_type
        .parse()
        .unwrap_or_else(|_| panic!("Unknown entry type: {}", entry_type));
    let result = world.service().delete(entry_type, &id).await;
    world.output = Some(result);
}

#[then(expr = "the backend should have received {int} delete request(s)")]
fn delete_requests(world: &mut ListingWorld, count: usize) {
    assert_eq!(world.backend.delete_requests.lock().unwrap().len(), count);
}

#[then(expr = "the last delete request should target {string}")]
fn last_delete_target(world: &mut ListingWorld, path: String) {
    let requests = world.backend.delete_requests.lock().unwrap();
    assert_eq!(requests.last().map(String::as_str), Some(path.as_str()));
}
