use num_bigint::BigInt;
use tracing::{info, instrument, warn};
use tracing_subscriber::fmt;

use bilinear::{CurveId, Error, GroupKind, Pairing, Parameters};

#[instrument(level = "info", skip_all, fields(curve = %params.curve(), backend = %params.backend()))]
fn walkthrough(params: &Parameters) -> Result<(), Error> {
    let pairing = Pairing::new(params)?;

    let a = pairing.random(GroupKind::Fr);
    let b = pairing.random(GroupKind::Fr);
    let p = pairing.from_hash(GroupKind::G1, b"alice")?;
    let q = pairing.from_hash(GroupKind::G2, b"bob")?;

    let lhs = pairing.apply(&p.pow(&a)?, &q.pow(&b)?)?;
    let rhs = pairing.apply(&p, &q)?.pow(&a.mul(&b)?)?;
    info!(bilinear = lhs.equals(&rhs)?, "e(aP, bQ) = e(P, Q)^(ab)");

    let compressed = p.to_bytes_compressed()?;
    let back = pairing.from_bytes_compressed(GroupKind::G1, &compressed)?;
    info!(bytes = compressed.len(), round_trip = back.equals(&p)?, "compressed G1 encoding");

    let x = pairing.from_int(&BigInt::from(-1))?;
    info!(value = %x, "-1 in Zr");

    match p.add(&q) {
        Err(err) => info!(%err, "mixing G1 and G2 is rejected"),
        Ok(_) => warn!("G1 + G2 unexpectedly succeeded"),
    }

    let other = Pairing::new(params)?;
    if let Err(err) = p.add(&other.from_hash(GroupKind::G1, b"alice")?) {
        info!(%err, "elements of another context are rejected");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_span_events(fmt::format::FmtSpan::ENTER | fmt::format::FmtSpan::CLOSE)
        .with_target(false)
        .with_ansi(false)
        .init();

    let description = "type bls12\n# any compiled-in backend will do\ncurve bls12_381";
    for params in [
        description.parse::<Parameters>(),
        Parameters::for_curve(CurveId::Bn254),
    ] {
        match params {
            Ok(params) => walkthrough(&params)?,
            Err(err) => warn!(%err, "skipping curve"),
        }
    }
    Ok(())
}
