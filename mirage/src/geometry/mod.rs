pub(crate) mod resample;
pub(crate) mod resolve;
