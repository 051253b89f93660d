/// Session-oriented pipeline entry points.
pub mod dual_session;
/// Pipeline options.
pub mod opts;
