//! Convert a WKT geometry to WKB and GML and back, printing every step.

use anyhow::{bail, Context, Result};
use clap::Parser;
use geocodec::io::wkb::{from_wkb, to_wkb_with_options, wkb_size, Endianness, WkbWriteOptions};
use geocodec::io::{gml, wkt};
use itertools::Itertools;
use log::{debug, error, info, LevelFilter};
use simple_logger::SimpleLogger;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[arg(long, default_value = "Warn")]
    log_level: LevelFilter,

    /// Encode WKB in big-endian byte order instead of little-endian
    #[arg(long)]
    big_endian: bool,

    /// The geometry to convert, e.g. "POINT(47.0 19.2)"
    wkt: String,
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).join("-")
}

fn run(args: &Cli) -> Result<()> {
    let geom = wkt::parse_wkt(&args.wkt).context("parsing WKT")?;
    debug!("parsed {:?} with {} coordinates", geom.geometry_type(), geom.num_coords());

    let byte_order = if args.big_endian {
        Endianness::BigEndian
    } else {
        Endianness::LittleEndian
    };
    let bytes = to_wkb_with_options(&geom, &WkbWriteOptions::new(byte_order))?;
    let expected = wkb_size(&geom);
    if bytes.len() != expected {
        bail!("WKB is {} bytes, expected {expected}", bytes.len());
    }
    info!("encoded {} WKB bytes ({byte_order:?})", bytes.len());
    println!("wkt-->wkb: {}", hex(&bytes));

    let (decoded, consumed) = from_wkb(&bytes).context("decoding WKB")?;
    if consumed != bytes.len() {
        bail!("decoded {consumed} of {} WKB bytes", bytes.len());
    }
    println!("wkb->wkt: {decoded}");

    let text = gml::to_gml(&geom)?;
    println!("wkt->gml: {text}");

    let from_gml = gml::from_gml(&text).context("decoding GML")?;
    println!("gml->wkt: {from_gml}");
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    SimpleLogger::new().with_level(args.log_level).init()?;

    if let Err(err) = run(&args) {
        error!("{err:#}");
        return Err(err);
    }
    Ok(())
}
