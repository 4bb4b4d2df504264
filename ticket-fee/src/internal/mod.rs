/// Internal modules for the ticket-fee library.
/// These are implementation details and should not be used directly by library consumers.
pub(crate) mod window_ranking;

// Re-export for internal use only
pub(crate) use window_ranking::WindowRanking;
