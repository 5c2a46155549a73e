use std::io;
use std::time::Duration;

use libclf::prelude::*;

use crate::common::fixtures::tta_identity;
use crate::common::{device_with, h, sent, tokens};

const TIMEOUT: Duration = Duration::from_secs(1);

fn listen(identity: &LocalTarget, commands: &[&str]) -> (Option<LocalTarget>, Vec<String>) {
    let mut dev = device_with(BitrateType::A106, commands);
    let activated = dev.listen_tta(identity, TIMEOUT).unwrap();
    assert!(dev.link().bound);
    (activated, sent(&dev))
}

#[test]
fn tt2_uid4_activated() {
    let identity = tta_identity([0x04, 0x00], "31323334");
    let (activated, sent) = listen(&identity, &["26", "9320", "93703132333404", "3000"]);
    let target = activated.unwrap();
    assert_eq!(target.brty(), BitrateType::A106);
    assert_eq!(target.tt2_cmd(), Some(&h("3000")[..]));
    assert_eq!(sent, tokens("106A", &["0400", "3132333404", "00"]));
}

#[test]
fn tt2_uid7_activated() {
    let identity = tta_identity([0x44, 0x00], "31323334353637");
    let (activated, sent) = listen(
        &identity,
        &["26", "9320", "937088313233b8", "9520", "95703435363700", "3000"],
    );
    assert_eq!(activated.unwrap().tt2_cmd(), Some(&h("3000")[..]));
    assert_eq!(
        sent,
        tokens("106A", &["4400", "88313233b8", "04", "3435363700", "00"])
    );
}

#[test]
fn tt2_uid10_activated() {
    let identity = tta_identity([0x44, 0x00], "31323334353637383930");
    let (activated, sent) = listen(
        &identity,
        &[
            "26",
            "9320",
            "937088313233b8",
            "9520",
            "957088343536bf",
            "9720",
            // the select code is not checked against the level
            "95703738393006",
            "3000",
        ],
    );
    assert_eq!(activated.unwrap().tt2_cmd(), Some(&h("3000")[..]));
    assert_eq!(
        sent,
        tokens(
            "106A",
            &["4400", "88313233b8", "04", "88343536bf", "04", "3738393006", "00"]
        )
    );
}

#[test]
fn tt4_activated() {
    let identity = tta_identity([0x04, 0x00], "31323334");
    let (activated, sent) = listen(&identity, &["26", "9320", "93703132333404", "E000"]);
    let target = activated.unwrap();
    assert_eq!(target.tt4_cmd(), Some(&h("E000")[..]));
    assert_eq!(target.tt2_cmd(), None);
    assert_eq!(sent.len(), 3);
}

#[test]
fn dep_activated() {
    let atr_req_frame = "F0 13 D400 30313233343536373839 00000002 aabb";
    let identity = tta_identity([0x44, 0x00], "31323334");
    let (activated, sent) = listen(&identity, &["26", "9320", "93703132333404", atr_req_frame]);
    let target = activated.unwrap();
    assert_eq!(target.atr_req(), Some(&h(atr_req_frame)[2..]));
    assert_eq!(sent, tokens("106A", &["4400", "3132333404", "00"]));
}

#[test]
fn wupa_and_unexpected_frames() {
    let identity = tta_identity([0x44, 0x00], "31323334");
    let (activated, sent) = listen(
        &identity,
        &["3000", "52", "9520", "9320", "93700000000000", "93703132333404", "26", "", "3000"],
    );
    assert_eq!(activated.unwrap().tt2_cmd(), Some(&h("3000")[..]));
    assert_eq!(sent, tokens("106A", &["4400", "3132333404", "00"]));
}

#[test]
fn sel_res_cascade_bit_is_cleared() {
    let identity = LocalTarget::type_a(
        [0x44, 0x00],
        crate::common::fixtures::uid("31323334"),
        0x24,
    );
    let (_, sent) = listen(&identity, &["26", "9320", "93703132333404", "3000"]);
    assert_eq!(sent.last().unwrap(), "106A 20");
}

#[test]
fn timeout_error() {
    let identity = tta_identity([0x44, 0x00], "31323334");
    let (activated, sent) = listen(&identity, &[]);
    assert!(activated.is_none());
    assert!(sent.is_empty());
}

#[test]
fn timeout_mid_cascade() {
    let identity = tta_identity([0x44, 0x00], "31323334353637");
    let (activated, sent) = listen(&identity, &["26", "9320", "937088313233b8"]);
    assert!(activated.is_none());
    assert_eq!(sent.len(), 3);
}

#[test]
fn communication_error() {
    let mut dev = device_with(BitrateType::A106, &["26"]);
    dev.link_mut().push_communication_error("connection refused");
    dev.link_mut().push_frame(BitrateType::A106, h("9320"));
    let identity = tta_identity([0x44, 0x00], "31323334");
    assert!(dev.listen_tta(&identity, TIMEOUT).unwrap().is_none());
    assert_eq!(sent(&dev), tokens("106A", &["4400"]));
}

#[test]
fn socket_bind_error() {
    let mut dev = device_with(BitrateType::A106, &["26"]);
    dev.link_mut().set_bind_error(io::ErrorKind::AddrInUse);
    let identity = tta_identity([0x44, 0x00], "31323334");
    assert!(dev.listen_tta(&identity, TIMEOUT).unwrap().is_none());
    assert!(sent(&dev).is_empty());
    assert!(dev.link().receive_timeouts.is_empty());
}

#[test]
fn receive_is_bounded_by_the_deadline() {
    let identity = tta_identity([0x44, 0x00], "31323334");
    let mut dev = device_with(BitrateType::A106, &["26"]);
    dev.listen_tta(&identity, TIMEOUT).unwrap();
    assert!(dev.link().receive_timeouts.iter().all(|t| *t <= TIMEOUT));
}
