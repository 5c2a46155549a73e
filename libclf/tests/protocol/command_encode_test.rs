use libclf::protocol::cascade::{CascadeLevel, with_bcc};
use libclf::protocol::codec::command_frame;
use libclf::protocol::commands::{Command, is_sensb_req, parse_sensf_req};
use libclf::types::{BitrateType, SystemCode};

use crate::common::h;

#[test]
fn initiator_commands_on_the_wire() {
    let cases = [
        (BitrateType::A106, Command::SensReq, "106A 26"),
        (BitrateType::A106, Command::RidCmd, "106A 78000000000000"),
        (
            BitrateType::A106,
            Command::SddReq {
                level: CascadeLevel::One,
            },
            "106A 9320",
        ),
        (
            BitrateType::A106,
            Command::SelReq {
                level: CascadeLevel::Two,
                uid_cln: with_bcc(&[0x04, 0x05, 0x06, 0x07]).to_vec(),
            },
            "106A 95700405060700",
        ),
        (BitrateType::B106, Command::SensbReq, "106B 050010"),
        (
            BitrateType::F424,
            Command::SensfReq {
                body: h("0012fc0103"),
            },
            "424F 060012fc0103",
        ),
    ];
    for (brty, cmd, wire) in cases {
        assert_eq!(command_frame(brty, &cmd).to_string(), wire, "{}", cmd.name());
    }
}

#[test]
fn custom_sensf_body_gets_length_byte() {
    let encoded = Command::SensfReq {
        body: h("00ffff0000"),
    }
    .encode();
    assert_eq!(encoded[0], 6);
    assert_eq!(encoded.len(), 6);
}

#[test]
fn listener_side_request_parsing() {
    assert!(is_sensb_req(&h("050010")));
    assert!(is_sensb_req(&h("050008")));
    assert!(!is_sensb_req(&h("000000")));

    let sensf = parse_sensf_req(&h("0600ffff0200")).unwrap();
    assert_eq!(sensf.system_code, SystemCode::ANY);
    assert_eq!(sensf.request_code, 2);
    assert!(parse_sensf_req(&h("030000")).is_none());
}
