use agora_weierstrass::parse::parse_int;
use agora_weierstrass::{BigInt, BigUint, Curve, Error, InputError, KeyPair, Point};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn point(x: &str, y: &str) -> Point {
    Point::new(parse_int(x).unwrap(), parse_int(y).unwrap())
}

fn generator(curve: &Curve) -> Point {
    Point::from(curve.generator())
}

#[test]
fn doubling_known_answer() {
    let curve = Curve::secp256k1();
    let g = generator(&curve);
    let g2 = point(
        "0xc6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
        "0x1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
    );
    assert_eq!(curve.add(&g, &g).unwrap(), g2);
    assert_eq!(curve.double(&g).unwrap(), g2);
    assert_eq!(curve.mul_generator(&BigUint::from(2u8)).unwrap(), g2);
    assert!(curve.is_valid(&g2));

    let g3 = point(
        "0xf9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
        "0x388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
    );
    assert_eq!(curve.add(&g2, &g).unwrap(), g3);
}

#[test]
fn scalar_mul_matches_repeated_addition() {
    let curve = Curve::secp256k1();
    let g = generator(&curve);
    for k in 1..=20u64 {
        let fast = curve.mul_generator(&BigUint::from(k)).unwrap();
        let slow = curve.repeated_add(&g, k).unwrap();
        assert_eq!(fast, slow, "k = {}", k);
        assert!(curve.is_valid(&fast));
    }

    assert_eq!(
        curve.mul_generator(&BigUint::from(20u8)).unwrap(),
        point(
            "0x4ce119c96e2fa357200b559b2f7dd5a5f02d5290aff74b03f3e471b273211c97",
            "0x12ba26dcb10ec1625da61fa10a844c676162948271d96967450288ee9233dc3a",
        )
    );
}

#[test]
fn zero_and_order_multiples() {
    let curve = Curve::secp256k1();
    let g = generator(&curve);
    assert_eq!(curve.mul_generator(&BigUint::from(0u8)).unwrap(), Point::Identity);
    assert_eq!(curve.mul_generator(curve.order()).unwrap(), Point::Identity);

    let order_minus_one = curve.order() - BigUint::from(1u8);
    assert_eq!(
        curve.mul_generator(&order_minus_one).unwrap(),
        curve.negate(&g)
    );
}

#[test]
fn closure_under_addition() {
    let curve = Curve::secp256k1();
    let mut rng = StdRng::seed_from_u64(2022);
    let points: Vec<Point> = (0..6)
        .map(|_| {
            Point::from(
                KeyPair::random(&curve, &mut rng)
                    .unwrap()
                    .public_point()
                    .clone(),
            )
        })
        .collect();

    for p in &points {
        for q in &points {
            let sum = curve.add(p, q).unwrap();
            assert!(curve.is_valid(&sum));
            assert_eq!(sum, curve.add(q, p).unwrap());
        }
    }
}

#[test]
fn perturbed_point_is_invalid() {
    let curve = Curve::secp256k1();
    let g2 = curve.mul_generator(&BigUint::from(2u8)).unwrap();
    let affine = g2.as_affine().unwrap();
    let perturbed = Point::new(affine.x().clone(), affine.y() + BigInt::from(1));
    assert!(curve.is_valid(&g2));
    assert!(!curve.is_valid(&perturbed));
}

#[test]
fn inverse_points_sum_to_identity() {
    let curve = Curve::secp256k1();
    let g = generator(&curve);
    let p = curve.mul_generator(&BigUint::from(12345u32)).unwrap();
    assert_eq!(curve.add(&p, &curve.negate(&p)).unwrap(), Point::Identity);
    assert_eq!(curve.add(&curve.negate(&g), &g).unwrap(), Point::Identity);

    // a point sharing x with G but not on the curve has no slope
    let fake = Point::new(curve.generator().x().clone(), BigInt::from(1));
    assert!(matches!(curve.add(&g, &fake), Err(Error::NoInverse { .. })));
}

#[test]
fn deterministic_key_derivation() {
    let curve = Curve::secp256k1();
    let scalar = "0xb8eaf6de4d59fb7afb0de727ec6dd5c386abfc43052e4792cf05b265658a26a9";

    let first = KeyPair::from_text(&curve, scalar).unwrap();
    let second = KeyPair::from_text(&curve, scalar).unwrap();
    assert_eq!(first, second);
    assert!(curve.is_valid_affine(first.public_point()));

    let hex = first.to_hex();
    assert_eq!(hex.private_key_hex, scalar);
    assert_eq!(
        hex.public_key_hex,
        [
            "0x7558a91ea259ceb1a0ee4d501c2ea63a06fd0fc7738502acb5ae8752d85cc371".to_string(),
            "0x0681a0015cb2447a9592c9c4a62ee6d042c54332b6d8217b6ceca40cf2502ab7".to_string(),
        ]
    );
}

#[test]
fn generated_keys_are_valid() {
    let curve = Curve::secp256k1();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..4 {
        let keypair = KeyPair::generate(&curve, None, &mut rng).unwrap();
        assert!(curve.is_valid_affine(keypair.public_point()));
        assert!(keypair.private_scalar() < curve.order());
    }

    let mut os_rng = rand_core::OsRng;
    let keypair = KeyPair::generate(&curve, None, &mut os_rng).unwrap();
    assert!(curve.is_valid_affine(keypair.public_point()));

    assert!(matches!(
        KeyPair::generate(&curve, Some(curve.order().clone()), &mut rng),
        Err(Error::InvalidInput(InputError::ScalarOutOfRange))
    ));
}

#[test]
fn curve_is_shareable_across_threads() {
    let curve = std::sync::Arc::new(Curve::secp256k1());
    let handles: Vec<_> = (1..=4u32)
        .map(|k| {
            let curve = std::sync::Arc::clone(&curve);
            std::thread::spawn(move || curve.mul_generator(&BigUint::from(k)).unwrap())
        })
        .collect();

    for (k, handle) in (1..=4u64).zip(handles) {
        let g = generator(&curve);
        assert_eq!(handle.join().unwrap(), curve.repeated_add(&g, k).unwrap());
    }
}
