#![no_main]

use libfuzzer_sys::fuzz_target;
use ticket_fee::{BlockHeader, TicketFeeInfo};

// Fuzz ticketfeeinfo / getblockheader response parsing
fuzz_target!(|data: &[u8]| {
    if let Ok(info) = serde_json::from_slice::<TicketFeeInfo>(data) {
        for block in &info.fee_info_blocks {
            for use_median in [false, true] {
                if let Ok(fee) = block.selected_fee(use_median) {
                    assert!(fee.atoms() >= 0);
                }
            }
        }

        for window in &info.fee_info_windows {
            assert!(window.span() <= window.end_height);
            for use_median in [false, true] {
                if let Ok(fee) = window.selected_fee(use_median) {
                    assert!(fee.atoms() >= 0);
                }
            }
        }
    }

    if let Ok(header) = serde_json::from_slice::<BlockHeader>(data) {
        assert_eq!(header.stake_difficulty().atoms(), header.sbits);
    }
});
