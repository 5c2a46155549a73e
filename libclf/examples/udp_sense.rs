// Poll a UDP peer for NFC-A, NFC-B and NFC-F targets.
//
// Usage: cargo run --example udp_sense -- [host] [port]
// Set RUST_LOG=debug to watch each exchange.

use libclf::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "localhost".to_string());
    let port = args
        .next()
        .and_then(|p| p.parse().ok())
        .unwrap_or(54321u16);

    println!("Sensing via udp:{}:{}", host, port);
    let link = UdpLink::new(&host, port)?;
    let mut device = DeviceBuilder::new().with_link(link).build()?;

    match device.sense_tta(&RemoteTarget::new(BitrateType::A106))? {
        Some(t) => {
            if let Some(uid) = t.sdd_res() {
                println!("106A target: UID = {}", uid.to_hex());
            } else if let Some(rid) = t.rid_res() {
                println!("106A type 1 target: RID = {}", bytes_to_hex(rid));
            } else {
                println!("106A proprietary target");
            }
        }
        None => println!("No 106A target"),
    }

    match device.sense_ttb(&RemoteTarget::new(BitrateType::B106))? {
        Some(t) => println!("106B target: ATQB = {}", bytes_to_hex(t.sensb_res().unwrap_or_default())),
        None => println!("No 106B target"),
    }

    for brty in [BitrateType::F212, BitrateType::F424] {
        match device.sense_ttf(&RemoteTarget::new(brty))? {
            Some(t) => {
                if let Some(idm) = t.idm() {
                    println!("{} target: IDm = {}", brty, idm.to_hex());
                }
                if let Some(sc) = t.system_code() {
                    println!("           SystemCode = {:04X}", sc.as_u16());
                }
            }
            None => println!("No {} target", brty),
        }
    }

    device.close()?;
    Ok(())
}
