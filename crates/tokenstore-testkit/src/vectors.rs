//! Reference vectors for template matching and mechanism queries.
//!
//! Each vector is a small self-contained scenario with its expected outcome.
//! Any implementation of the token store must agree on all of them.

use serde::Serialize;

use tokenstore_core::{AttrType, Attribute, MechType, Mechanism, TokenError};
use tokenstore_mech::{Mgf, OaepParams};

use crate::fixtures::TokenFixture;

/// A template-matching vector: one record, one template.
#[derive(Debug, Clone, Serialize)]
pub struct MatchVector {
    pub name: &'static str,
    pub record: Vec<Attribute>,
    pub template: Vec<Attribute>,
    pub expected: bool,
}

/// Expected outcome of a mechanism query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Supported,
    ParamInvalid,
    Invalid,
}

impl Outcome {
    fn of(result: &Result<(), TokenError>) -> Option<Self> {
        match result {
            Ok(()) => Some(Outcome::Supported),
            Err(TokenError::MechanismParamInvalid(_)) => Some(Outcome::ParamInvalid),
            Err(TokenError::MechanismInvalid(_)) => Some(Outcome::Invalid),
            Err(_) => None,
        }
    }
}

/// A mechanism-query vector: the object's mechanism list and one request.
#[derive(Debug, Clone, Serialize)]
pub struct MechanismVector {
    pub name: &'static str,
    pub stored: Vec<Mechanism>,
    pub request: Mechanism,
    pub expected: Outcome,
}

fn label(value: &str) -> Attribute {
    Attribute::new(AttrType::LABEL, value.as_bytes().to_vec())
}

fn class(value: &str) -> Attribute {
    Attribute::new(AttrType::CLASS, value.as_bytes().to_vec())
}

/// All template-matching vectors.
pub fn match_vectors() -> Vec<MatchVector> {
    let key = vec![class("KEY"), label("k1")];
    vec![
        MatchVector {
            name: "class subset matches",
            record: key.clone(),
            template: vec![class("KEY")],
            expected: true,
        },
        MatchVector {
            name: "different class value",
            record: key.clone(),
            template: vec![class("CERT")],
            expected: false,
        },
        MatchVector {
            name: "empty template matches anything",
            record: key.clone(),
            template: vec![],
            expected: true,
        },
        MatchVector {
            name: "all template entries required",
            record: key.clone(),
            template: vec![class("KEY"), label("k2")],
            expected: false,
        },
        MatchVector {
            name: "length differs",
            record: key,
            template: vec![label("k")],
            expected: false,
        },
        MatchVector {
            name: "empty values of equal type",
            record: vec![Attribute::empty(AttrType::ID)],
            template: vec![Attribute::empty(AttrType::ID)],
            expected: true,
        },
    ]
}

/// All mechanism-query vectors.
pub fn mechanism_vectors() -> Vec<MechanismVector> {
    let oaep_sha256 = OaepParams::new(MechType::SHA256, Mgf::MGF1_SHA256).into_mechanism();
    let cbc = Mechanism::with_parameter(MechType::AES_CBC, vec![0u8; 16]);

    vec![
        MechanismVector {
            name: "identical oaep parameters",
            stored: vec![oaep_sha256.clone()],
            request: OaepParams::new(MechType::SHA256, Mgf::MGF1_SHA256)
                .with_label(b"ignored".to_vec())
                .into_mechanism(),
            expected: Outcome::Supported,
        },
        MechanismVector {
            name: "oaep with a different hash",
            stored: vec![oaep_sha256.clone()],
            request: OaepParams::new(MechType::SHA_1, Mgf::MGF1_SHA256).into_mechanism(),
            expected: Outcome::ParamInvalid,
        },
        MechanismVector {
            name: "unlisted mechanism",
            stored: vec![oaep_sha256],
            request: Mechanism::new(MechType::ECDSA),
            expected: Outcome::Invalid,
        },
        MechanismVector {
            name: "cbc with a full block iv",
            stored: vec![cbc.clone()],
            request: Mechanism::with_parameter(MechType::AES_CBC, vec![0x5a; 16]),
            expected: Outcome::Supported,
        },
        MechanismVector {
            name: "cbc with a short iv",
            stored: vec![cbc],
            request: Mechanism::with_parameter(MechType::AES_CBC, vec![0x5a; 12]),
            expected: Outcome::ParamInvalid,
        },
        MechanismVector {
            name: "raw rsa ignores parameters",
            stored: vec![Mechanism::new(MechType::RSA_X_509)],
            request: Mechanism::with_parameter(MechType::RSA_X_509, vec![1, 2, 3]),
            expected: Outcome::Supported,
        },
    ]
}

/// Run every vector against a fresh token.
///
/// Returns `(name, passed)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    let mut results = Vec::new();

    for v in match_vectors() {
        let mut fixture = TokenFixture::new();
        let id = fixture.add(&v.record, &[]);
        let found = fixture.find_all(&v.template, 4);
        let matched = found == vec![id];
        results.push((v.name.to_string(), matched == v.expected));
    }

    for v in mechanism_vectors() {
        let mut fixture = TokenFixture::new();
        let id = fixture.add(&[], &v.stored);
        let outcome = Outcome::of(&fixture.token.is_mech_supported(id, &v.request));
        results.push((v.name.to_string(), outcome == Some(v.expected)));
    }

    results
}
