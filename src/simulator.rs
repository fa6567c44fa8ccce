//! Balance simulator: plays optimally-greedy and prints pacing reports.
//! Run with: cargo test simulate_optimal -- --nocapture
