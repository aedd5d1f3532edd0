//! Encode a telemetry record into a fixed-capacity buffer and dump the
//! wire image.
//!
//! Run with: `cargo run --example sensor_record`

use upack::{MAX_SCALAR_BYTES, PackBuffer};

fn main() -> Result<(), upack::Error> {
    // {"node": 17, "temp": 21.5, "rssi": -73, "tags": ["boot", nil], "ok": true}
    //
    // Capacity estimate: five keys (longest 4 bytes + 1 header byte), five
    // scalar values, one array header, two array elements. MAX_SCALAR_BYTES
    // per scalar over-reserves, which is the point: the encode below can
    // never overflow.
    let capacity = 5 * (4 + 1) + 8 * MAX_SCALAR_BYTES + 5;
    let mut buf = PackBuffer::alloc(capacity)?;

    buf.pack_map_header(5)?;
    buf.pack_str("node")?;
    buf.pack_u16(17)?;
    buf.pack_str("temp")?;
    buf.pack_f32(21.5)?;
    buf.pack_str("rssi")?;
    buf.pack_i32(-73)?;
    buf.pack_str("tags")?;
    buf.pack_array_header(2)?;
    buf.pack_str("boot")?;
    buf.pack_nil()?;
    buf.pack_str("ok")?;
    buf.pack_bool(true)?;

    println!("capacity {capacity}, encoded {} bytes", buf.len());
    println!("wire: {:02x?}", buf.as_slice());

    let wire = buf.freeze();
    println!("frozen handle holds {} bytes", wire.len());

    Ok(())
}
