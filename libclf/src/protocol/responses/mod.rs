// libclf/src/protocol/responses/mod.rs

//! Per-family response handling: validation of what a sensed peer sends
//! back, and construction of what an emulated target answers.

pub mod tta;
pub mod ttb;
pub mod ttf;

pub use tta::{SensRes, decode_rid_res, decode_sdd_res, decode_sel_res, decode_sens_res};
pub use ttb::decode_sensb_res;
pub use ttf::{decode_sensf_res, encode_sensf_res};
