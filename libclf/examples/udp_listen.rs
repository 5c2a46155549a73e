// Emulate an NFC-A, NFC-B or NFC-F card on a UDP port until activated.
//
// Usage: cargo run --example udp_listen -- [a|b|f] [port]

use libclf::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let family = args.next().unwrap_or_else(|| "a".to_string());
    let port = args
        .next()
        .and_then(|p| p.parse().ok())
        .unwrap_or(54321u16);

    let link = UdpLink::new("127.0.0.1", port)?;
    let mut device = DeviceBuilder::new().with_link(link).build()?;
    let timeout = ms(10_000);

    let activated = match family.as_str() {
        "b" => {
            let target = LocalTarget::type_b(parse_hex("50e8253eec00000011008185").map_err(Error::MalformedFrame)?)?;
            device.listen_ttb(&target, timeout)?
        }
        "f" => {
            let sensf_res = parse_hex("0101010701260cca020f0d23042f7783ff12fc").map_err(Error::MalformedFrame)?;
            let target = LocalTarget::type_f(BitrateType::F212, sensf_res)?;
            device.listen_ttf(&target, timeout)?
        }
        _ => {
            let uid = Uid::try_from(parse_hex("31323334").map_err(Error::MalformedFrame)?)?;
            let target = LocalTarget::type_a([0x44, 0x00], uid, 0x00);
            device.listen_tta(&target, timeout)?
        }
    };

    match activated.as_ref().and_then(|t| t.captured()) {
        Some(cmd) => println!("Activated, {} = {}", cmd.name(), bytes_to_hex(cmd.as_bytes())),
        None => println!("No activation within {:?}", timeout),
    }

    device.close()?;
    Ok(())
}
