use libclf::protocol::cascade::{CascadeStep, ListenAction, ListenCascade, SenseCascade};

use crate::common::fixtures::uid;
use crate::common::h;

/// Drive a sense cascade with the responses of a listen cascade.
fn select(identity_uid: &str, sel_res: u8) -> (Vec<Vec<u8>>, CascadeStep) {
    let mut listener = ListenCascade::new([0x44, 0x00], &uid(identity_uid), sel_res);
    let mut sensor = SenseCascade::new();
    let mut frames = Vec::new();

    let reply = |cmd: Vec<u8>, frames: &mut Vec<Vec<u8>>, l: &mut ListenCascade| {
        frames.push(cmd.clone());
        match l.on_command(&cmd) {
            ListenAction::Reply(rsp) => rsp,
            other => panic!("no reply to {:02x?}: {:?}", cmd, other),
        }
    };

    assert_eq!(reply(h("26"), &mut frames, &mut listener), h("4400"));
    loop {
        let sel = sensor.level().sel_cmd();
        let sdd_res = reply(vec![sel, 0x20], &mut frames, &mut listener);
        let mut sel_req = vec![sel, 0x70];
        sel_req.extend_from_slice(&sdd_res);
        let sak = reply(sel_req, &mut frames, &mut listener)[0];
        match sensor.advance(&sdd_res, sak).unwrap() {
            CascadeStep::Continue(_) => continue,
            done => {
                assert!(listener.is_active());
                return (frames, done);
            }
        }
    }
}

#[test]
fn sense_and_listen_agree_for_every_uid_size() {
    for (uid_hex, frame_count) in [
        ("31323334", 3),
        ("31323334353637", 5),
        ("31323334353637383930", 7),
    ] {
        let (frames, done) = select(uid_hex, 0x20);
        // REQA plus two frames per cascade level
        assert_eq!(frames.len(), frame_count);
        assert_eq!(
            done,
            CascadeStep::Complete {
                uid: uid(uid_hex),
                sak: 0x20
            }
        );
    }
}

#[test]
fn listener_captures_first_command_after_activation() {
    let mut listener = ListenCascade::new([0x44, 0x00], &uid("31323334"), 0x00);
    for cmd in ["26", "9320", "93703132333404"] {
        assert!(matches!(listener.on_command(&h(cmd)), ListenAction::Reply(_)));
    }
    assert_eq!(listener.on_command(&h("26")), ListenAction::Ignore);
    assert_eq!(
        listener.on_command(&h("3000")),
        ListenAction::Capture(h("3000"))
    );
}
