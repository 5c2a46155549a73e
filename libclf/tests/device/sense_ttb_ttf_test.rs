use libclf::prelude::*;

use crate::common::fixtures::{SENSB_RES, SENSF_RES};
use crate::common::{device_with, h, sent, tokens};

#[test]
fn ttb_no_target_found() {
    let mut dev = device_with(BitrateType::B106, &[]);
    assert!(dev.sense_ttb(&RemoteTarget::new(BitrateType::B106)).unwrap().is_none());
    assert_eq!(sent(&dev), tokens("106B", &["050010"]));
}

#[test]
fn ttb_tt4_target_found() {
    let mut dev = device_with(BitrateType::B106, &["50E8253EEC00000011008185"]);
    let target = dev
        .sense_ttb(&RemoteTarget::new(BitrateType::B106))
        .unwrap()
        .unwrap();
    assert_eq!(target.sensb_res(), Some(&h(SENSB_RES)[..]));
    assert_eq!(sent(&dev), tokens("106B", &["050010"]));
}

#[test]
fn ttb_response_errors() {
    for rsp in ["", "51E8253EEC00000011008185", "50E8253EEC000000110081"] {
        let mut dev = device_with(BitrateType::B106, &[rsp]);
        let found = dev.sense_ttb(&RemoteTarget::new(BitrateType::B106)).unwrap();
        assert!(found.is_none(), "accepted sensb_res '{}'", rsp);
        assert_eq!(sent(&dev), tokens("106B", &["050010"]));
    }
}

#[test]
fn ttb_invalid_target() {
    let mut dev = device_with(BitrateType::A106, &[]);
    let err = dev.sense_ttb(&RemoteTarget::new(BitrateType::A106)).unwrap_err();
    assert_eq!(err.to_string(), "unsupported bitrate 106A");
}

#[test]
fn ttf_no_target_found() {
    let mut dev = device_with(BitrateType::F212, &[]);
    assert!(dev.sense_ttf(&RemoteTarget::new(BitrateType::F212)).unwrap().is_none());
    assert_eq!(sent(&dev), tokens("212F", &["0600ffff0100"]));
}

#[test]
fn ttf_tt3_target_found() {
    let mut dev = device_with(BitrateType::F212, &[SENSF_RES]);
    let target = dev
        .sense_ttf(&RemoteTarget::new(BitrateType::F212))
        .unwrap()
        .unwrap();
    assert_eq!(target.brty(), BitrateType::F212);
    assert_eq!(target.sensf_res(), Some(&h(SENSF_RES)[1..]));
    assert_eq!(target.idm().unwrap().to_hex(), "01010701260cca02");
    assert_eq!(target.system_code(), Some(SystemCode::NDEF));
}

#[test]
fn ttf_with_sensf_req() {
    let cases: [(Option<&str>, &str, &str); 3] = [
        (None, "0600ffff0100", SENSF_RES),
        (Some("00ffff0100"), "0600ffff0100", SENSF_RES),
        (
            Some("00ffff0000"),
            "0600ffff0000",
            "120101010701260cca020f0d23042f7783ff",
        ),
    ];
    for (body, sensf_req, sensf_res) in cases {
        let mut target = RemoteTarget::new(BitrateType::F212);
        if let Some(body) = body {
            target = target.with_sensf_req(h(body));
        }
        let mut dev = device_with(BitrateType::F212, &[sensf_res]);
        let found = dev.sense_ttf(&target).unwrap().unwrap();
        assert_eq!(found.sensf_res(), Some(&h(sensf_res)[1..]));
        assert_eq!(sent(&dev), tokens("212F", &[sensf_req]));
    }
}

#[test]
fn ttf_with_bitrate_type() {
    for (brty, tag) in [(BitrateType::F212, "212F"), (BitrateType::F424, "424F")] {
        let mut dev = device_with(brty, &[SENSF_RES]);
        let found = dev.sense_ttf(&RemoteTarget::new(brty)).unwrap().unwrap();
        assert_eq!(found.brty(), brty);
        assert_eq!(sent(&dev), tokens(tag, &["0600ffff0100"]));
    }
}

#[test]
fn ttf_response_errors() {
    for rsp in [
        "",
        "110101010701260cca020f0d23042f7783",
        "130101010701260cca020f0d23042f7783ff12fc",
        "140201010701260cca020f0d23042f7783ff12fc",
    ] {
        let mut dev = device_with(BitrateType::F212, &[rsp]);
        let found = dev.sense_ttf(&RemoteTarget::new(BitrateType::F212)).unwrap();
        assert!(found.is_none(), "accepted sensf_res '{}'", rsp);
        assert_eq!(sent(&dev), tokens("212F", &["0600ffff0100"]));
    }
}

#[test]
fn ttf_invalid_target() {
    let mut dev = device_with(BitrateType::A106, &[]);
    let err = dev.sense_ttf(&RemoteTarget::new(BitrateType::A106)).unwrap_err();
    assert_eq!(err.to_string(), "unsupported bitrate 106A");
    assert!(sent(&dev).is_empty());
}
