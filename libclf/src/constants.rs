// libclf/src/constants.rs
//! Common protocol constants used across the crate

/// NFC-A SENS_REQ (REQA), short frame
pub const SENS_REQ: u8 = 0x26;
/// NFC-A ALL_REQ (WUPA), short frame
pub const ALL_REQ: u8 = 0x52;

/// SEL_CMD of cascade level 1
pub const SEL_CL1: u8 = 0x93;
/// SEL_CMD of cascade level 2
pub const SEL_CL2: u8 = 0x95;
/// SEL_CMD of cascade level 3
pub const SEL_CL3: u8 = 0x97;

/// NVB of an SDD_REQ (anticollision, no UID bits known)
pub const NVB_SDD: u8 = 0x20;
/// NVB of a SEL_REQ (all 40 UID/BCC bits present)
pub const NVB_SEL: u8 = 0x70;

/// Cascade tag prefixing non-final UID fragments
pub const CASCADE_TAG: u8 = 0x88;
/// SAK bit signalling that the UID is not complete
pub const SAK_CASCADE_BIT: u8 = 0x04;

/// Type 1 tag RID command code (followed by 6 zero bytes)
pub const RID_CMD: u8 = 0x78;
/// RID_RES length: HR0 HR1 UID0..UID3
pub const RID_RES_LEN: usize = 6;

/// NFC-B SENSB_REQ: APf, AFI (all families), PARAM (N=1)
pub const SENSB_REQ: [u8; 3] = [0x05, 0x00, 0x10];
/// NFC-B APf, first byte of SENSB_REQ/ALLB_REQ
pub const SENSB_REQ_CMD: u8 = 0x05;
/// SENSB_RES first byte
pub const SENSB_RES_CODE: u8 = 0x50;
/// SENSB_RES length
pub const SENSB_RES_LEN: usize = 12;

/// NFC-F SENSF_REQ command code
pub const SENSF_REQ_CMD: u8 = 0x00;
/// SENSF_RES response code
pub const SENSF_RES_CODE: u8 = 0x01;
/// Default SENSF_REQ body: command, wildcard system code, request code 1, TSN 0
pub const SENSF_REQ_DEFAULT_BODY: [u8; 5] = [0x00, 0xFF, 0xFF, 0x01, 0x00];
/// Longest SENSF_REQ body whose length byte (body + 1) still fits in a u8
pub const SENSF_REQ_MAX_BODY: usize = 254;
/// Length byte + response code + IDm(8) + PMm(8)
pub const SENSF_RES_MIN_LEN: usize = 18;

/// Type 4 RATS command code
pub const RATS_CMD: u8 = 0xE0;

/// DEP ATR_REQ command: CMD0 (D4) and CMD1 (00)
pub const DEP_REQ_CMD0: u8 = 0xD4;
/// ATR_REQ second command byte
pub const ATR_REQ_CMD1: u8 = 0x00;
/// NFC-A DEP start byte preceding the length byte
pub const DEP_SB: u8 = 0xF0;
