#![no_main]

use libfuzzer_sys::fuzz_target;
use ticket_fee::{Amount, ATOMS_PER_COIN};

// Fuzz coin to atom conversion
fuzz_target!(|data: [u8; 8]| {
    let coins = f64::from_le_bytes(data);

    match Amount::from_coins(coins) {
        Ok(amount) => {
            assert!(coins.is_finite());
            // Within half an atom of the input, up to float precision
            let error = (amount.to_coins() - coins).abs() * ATOMS_PER_COIN as f64;
            assert!(error <= 0.5 + coins.abs() * 1e-6);
        }
        Err(_) => {
            assert!(!coins.is_finite() || (coins * ATOMS_PER_COIN as f64).abs() >= 9.2e18);
        }
    }

    if let Ok(fee) = Amount::fee_from_coins(coins) {
        assert!(fee.atoms() >= 0);
    }
});
