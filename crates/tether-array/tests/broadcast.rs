use tether_array::{ManagedArray, RefHandle};
use tether_test_utils::{RefLedger, Signal};

#[test]
fn broadcast_visits_every_slot_in_order() {
    let ledger = RefLedger::new();
    let hs = ledger.spawn_many("n", 3);
    let mut array = ManagedArray::with_capacity(4);
    for h in [&hs[2], &hs[0], &hs[2], &hs[1]] {
        array.append(h);
    }

    array.broadcast(&Signal("on_enter"));
    assert_eq!(hs[0].object().received(), vec!["on_enter"]);
    assert_eq!(hs[1].object().received(), vec!["on_enter"]);
    assert_eq!(hs[2].object().received(), vec!["on_enter", "on_enter"]);

    let mut order = Vec::new();
    array.for_each_invoke(|obj| order.push(obj.name().to_string()));
    assert_eq!(order, vec!["n2", "n0", "n2", "n1"]);
}

#[test]
fn broadcast_does_not_touch_reference_counts() {
    let ledger = RefLedger::new();
    let h = ledger.spawn("n");
    let mut array = ManagedArray::with_capacity(1);
    array.append(&h);
    let before = ledger.tally_of(&h);
    array.broadcast(&Signal("cleanup"));
    array.for_each_invoke(|_| {});
    assert_eq!(ledger.tally_of(&h), before);
}

#[test]
fn broadcast_on_empty_array_is_silent() {
    let ledger = RefLedger::new();
    let h = ledger.spawn("idle");
    let mut array = ManagedArray::with_capacity(1);
    array.append(&h);
    array.clear();
    array.broadcast(&Signal("on_exit"));
    assert!(h.object().received().is_empty());
}
