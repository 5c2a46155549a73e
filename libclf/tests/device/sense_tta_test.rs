use libclf::prelude::*;

use crate::common::fixtures::uid;
use crate::common::{device_with, h, sent, tokens};

fn sense(replies: &[&str]) -> (Option<RemoteTarget>, Vec<String>) {
    let mut dev = device_with(BitrateType::A106, replies);
    let found = dev.sense_tta(&RemoteTarget::new(BitrateType::A106)).unwrap();
    (found, sent(&dev))
}

#[test]
fn no_target_found() {
    let (found, sent) = sense(&[]);
    assert!(found.is_none());
    assert_eq!(sent, tokens("106A", &["26"]));
}

#[test]
fn tt1_target_found() {
    let (found, sent) = sense(&["000C", "110001020304"]);
    let target = found.unwrap();
    assert_eq!(target.brty(), BitrateType::A106);
    assert_eq!(target.rid_res(), Some(&h("110001020304")[..]));
    assert_eq!(sent, tokens("106A", &["26", "78000000000000"]));
}

#[test]
fn proprietary_target() {
    let (found, sent) = sense(&["0000"]);
    let target = found.unwrap();
    assert_eq!(target.sens_res(), Some([0x00, 0x00]));
    assert_eq!(target.rid_res(), None);
    assert_eq!(target.sdd_res(), None);
    assert_eq!(sent, tokens("106A", &["26"]));
}

#[test]
fn tt1_but_receive_error() {
    let (found, sent) = sense(&["000C", ""]);
    assert!(found.is_none());
    assert_eq!(sent, tokens("106A", &["26", "78000000000000"]));
}

#[test]
fn tt2_target_uid_4() {
    let (found, sent) = sense(&["4400", "01020304", "00"]);
    let target = found.unwrap();
    assert_eq!(target.sens_res(), Some([0x44, 0x00]));
    assert_eq!(target.sdd_res(), Some(&uid("01020304")));
    assert_eq!(target.sel_res(), Some(0x00));
    assert_eq!(sent, tokens("106A", &["26", "9320", "937001020304"]));
}

#[test]
fn tt2_target_uid_7() {
    let (found, sent) = sense(&["4400", "88010203", "04", "04050607", "00"]);
    let target = found.unwrap();
    assert_eq!(target.sdd_res(), Some(&uid("01020304050607")));
    assert_eq!(target.sel_res(), Some(0x00));
    assert_eq!(
        sent,
        tokens("106A", &["26", "9320", "937088010203", "9520", "957004050607"])
    );
}

#[test]
fn tt2_target_uid_10() {
    let (found, sent) = sense(&[
        "4400", "88010203", "04", "88040506", "04", "07080910", "00",
    ]);
    let target = found.unwrap();
    assert_eq!(target.sdd_res(), Some(&uid("01020304050607080910")));
    assert_eq!(
        sent,
        tokens(
            "106A",
            &["26", "9320", "937088010203", "9520", "957088040506", "9720", "977007080910"]
        )
    );
}

#[test]
fn sdd_res_with_bcc_is_echoed() {
    let (found, sent) = sense(&["4400", "0102030404", "08"]);
    let target = found.unwrap();
    assert_eq!(target.sdd_res(), Some(&uid("01020304")));
    assert_eq!(target.sel_res(), Some(0x08));
    assert_eq!(sent.last().unwrap(), "106A 93700102030404");
}

#[test]
fn excessive_uid() {
    let (found, sent) = sense(&[
        "4400", "88010203", "04", "88040506", "04", "07080910", "04",
    ]);
    assert!(found.is_none());
    assert_eq!(sent.len(), 7);
    assert_eq!(sent.last().unwrap(), "106A 977007080910");
}

#[test]
fn missing_cascade_tag_is_malformed() {
    let (found, sent) = sense(&["4400", "01020304", "04"]);
    assert!(found.is_none());
    assert_eq!(sent.len(), 3);
}

#[test]
fn tt2_but_receive_error() {
    let (found, sent) = sense(&["4400", ""]);
    assert!(found.is_none());
    assert_eq!(sent, tokens("106A", &["26", "9320"]));
}

#[test]
fn empty_sak_fails() {
    let (found, _) = sense(&["4400", "01020304", ""]);
    assert!(found.is_none());
}

#[test]
fn communication_error_is_absorbed() {
    let mut dev = device_with(BitrateType::A106, &["4400"]);
    dev.link_mut().push_communication_error("garbled datagram");
    let found = dev.sense_tta(&RemoteTarget::new(BitrateType::A106)).unwrap();
    assert!(found.is_none());
    assert_eq!(sent(&dev), tokens("106A", &["26", "9320"]));
}

fn sense_known(uid_hex: &str, replies: &[&str]) -> (Option<RemoteTarget>, Vec<String>) {
    let mut dev = device_with(BitrateType::A106, replies);
    let target = RemoteTarget::new(BitrateType::A106).with_sel_req(uid(uid_hex));
    let found = dev.sense_tta(&target).unwrap();
    (found, sent(&dev))
}

#[test]
fn request_uid_4() {
    let (found, sent) = sense_known("01020304", &["4400", "00"]);
    let target = found.unwrap();
    assert_eq!(target.sens_res(), Some([0x44, 0x00]));
    assert_eq!(target.sdd_res(), Some(&uid("01020304")));
    assert_eq!(target.sel_res(), Some(0x00));
    assert_eq!(sent, tokens("106A", &["26", "93700102030404"]));
}

#[test]
fn request_uid_7() {
    let (found, sent) = sense_known("01020304050607", &["4400", "04", "00"]);
    assert_eq!(found.unwrap().sdd_res(), Some(&uid("01020304050607")));
    assert_eq!(
        sent,
        tokens("106A", &["26", "93708801020388", "95700405060700"])
    );
}

#[test]
fn request_uid_10() {
    let (found, sent) = sense_known("01020304050607080910", &["4400", "04", "04", "00"]);
    assert_eq!(found.unwrap().sdd_res(), Some(&uid("01020304050607080910")));
    assert_eq!(
        sent,
        tokens(
            "106A",
            &["26", "93708801020388", "9570880405068f", "97700708091016"]
        )
    );
}

#[test]
fn invalid_target() {
    let mut dev = device_with(BitrateType::B106, &[]);
    match dev.sense_tta(&RemoteTarget::new(BitrateType::B106)) {
        Err(Error::UnsupportedTarget(msg)) => assert_eq!(msg, "unsupported bitrate 106B"),
        other => panic!("expected UnsupportedTarget, got {:?}", other),
    }
    assert!(sent(&dev).is_empty());
}

#[test]
fn sense_dep_is_not_supported() {
    let mut dev = device_with(BitrateType::A106, &[]);
    let err = dev
        .sense_dep(&RemoteTarget::new(BitrateType::A106))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "IP-Stack UDP at 127.0.0.1:54321 does not support sense for active DEP Target"
    );
    assert!(sent(&dev).is_empty());
}
