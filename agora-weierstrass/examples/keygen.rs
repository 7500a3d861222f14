use agora_weierstrass::parse::parse_scalar;
use agora_weierstrass::{BigUint, Curve, CurveParameters, KeyPair, Point};
use rand_core::OsRng;
use structopt::StructOpt;

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, help = "private key as decimal or 0x-prefixed hex, random if omitted")]
    private_key: Option<String>,
    #[structopt(long, help = "json file with curve parameters, secp256k1 if omitted")]
    curve: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();
    let opt = Opt::from_args();

    let curve = match opt.curve {
        Some(path) => {
            let parameters: CurveParameters = serde_json::from_reader(File::open(path)?)?;
            Curve::new(parameters)?
        }
        None => Curve::secp256k1(),
    };

    let generator = Point::from(curve.generator());
    for k in [2u8, 20] {
        let multiple = curve.scalar_mul(&BigUint::from(k), &generator)?;
        println!("{}G: {}valid: {}", k, multiple, curve.is_valid(&multiple));
    }

    let scalar = opt.private_key.as_deref().map(parse_scalar).transpose()?;
    let keypair = KeyPair::generate(&curve, scalar, &mut OsRng)?;
    println!("{}", serde_json::to_string_pretty(&keypair.to_hex())?);
    Ok(())
}
