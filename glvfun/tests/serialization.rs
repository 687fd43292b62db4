#![cfg(feature = "serde")]
use glvfun::{
    Curve, CurveParams, Decomposition, Error, Point,
    decompose::decompose,
    field::PrimeField,
    num_bigint::{BigInt, BigUint},
};

#[test]
fn curve_params_round_trip() {
    let params = CurveParams::bn254().unwrap();
    let json = serde_json::to_string(&params).unwrap();
    let decoded: CurveParams = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, params);
}

#[test]
fn tampered_params_are_rejected() {
    let params = CurveParams::bn254().unwrap();
    let mut value = serde_json::to_value(&params).unwrap();
    value["omega"] = serde_json::to_value(BigUint::from(1u32)).unwrap();
    let err = serde_json::from_value::<CurveParams>(value).unwrap_err();
    assert!(
        err.to_string().contains(
            &Error::InvalidParameters("omega is not a non-trivial cube root of unity modulo p")
                .to_string()
        ),
        "{}",
        err
    );
}

#[test]
fn field_modulus_is_checked_on_deserialize() {
    let params = CurveParams::bn254().unwrap();
    let json = serde_json::to_string(params.order()).unwrap();
    assert_eq!(
        &serde_json::from_str::<PrimeField>(&json).unwrap(),
        params.order()
    );

    assert!(serde_json::from_str::<PrimeField>("[]").is_err());
    assert!(serde_json::from_str::<PrimeField>("[4]").is_err());
    assert!(serde_json::from_str::<PrimeField>("[1]").is_err());
    assert_eq!(
        serde_json::from_str::<PrimeField>("[13]").unwrap(),
        PrimeField::new(BigUint::from(13u32)).unwrap()
    );
}

#[test]
fn curve_is_checked_on_deserialize() {
    let params = CurveParams::bn254().unwrap();
    let json = serde_json::to_string(params.curve()).unwrap();
    assert_eq!(&serde_json::from_str::<Curve>(&json).unwrap(), params.curve());

    assert!(serde_json::from_str::<Curve>(r#"{"field":[],"b":[3]}"#).is_err());
    // b is reduced like Curve::new does
    let curve = serde_json::from_str::<Curve>(r#"{"field":[13],"b":[16]}"#).unwrap();
    assert_eq!(curve.b(), &BigUint::from(3u32));
}

#[test]
fn deserialized_points_are_not_checked() {
    let params = CurveParams::bn254().unwrap();
    let json = serde_json::to_string(&Point::from_coordinates_unchecked(
        BigUint::from(1u32),
        BigUint::from(3u32),
    ))
    .unwrap();
    let point = serde_json::from_str::<Point>(&json).unwrap();
    assert!(!point.is_on_curve(params.curve()));

    // but a generator that is off the curve still fails CurveParams
    let mut value = serde_json::to_value(&params).unwrap();
    value["generator"] = serde_json::from_str(&json).unwrap();
    assert!(serde_json::from_value::<CurveParams>(value).is_err());
}

#[test]
fn points_and_decompositions_round_trip() {
    let params = CurveParams::bn254().unwrap();
    for point in [Point::zero(), params.generator().clone()] {
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), point);
    }

    let d = decompose(
        &BigInt::from(-123456789),
        params.order().modulus(),
        params.lambda(),
    );
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(serde_json::from_str::<Decomposition>(&json).unwrap(), d);
}
