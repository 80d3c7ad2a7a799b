use fivereel_core::{EngineParams, ProvablyFairRng, SlotMachine};

fn main() {
    // Example end-to-end: startup result, then one provably-fair spin
    let mut rng = ProvablyFairRng::new("example-server-seed", "example-client-seed", 1);
    let mut machine = SlotMachine::new(EngineParams::default());
    println!("startup total={} wins={:?}", machine.outcome().total, machine.outcome().wins);

    let outcome = machine.spin(&mut rng);
    println!(
        "server_seed_hash={} positions={:?} total={} grid={:?}",
        rng.server_seed_hash_hex(),
        outcome.positions.0,
        outcome.total,
        outcome.grid.symbol_indices()
    );
}
