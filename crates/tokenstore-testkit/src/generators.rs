//! Proptest generators for property-based testing.

use proptest::prelude::*;

use tokenstore_core::{AttrType, Attribute, MechType, Mechanism};
use tokenstore_mech::{Mgf, OaepParams};

/// Generate an attribute type from a small pool so collisions are common.
pub fn attr_type() -> impl Strategy<Value = AttrType> {
    prop_oneof![
        Just(AttrType::CLASS),
        Just(AttrType::LABEL),
        Just(AttrType::ID),
        Just(AttrType::SIGN),
        Just(AttrType::KEY_TYPE),
        Just(AttrType::VALUE),
    ]
}

/// Generate value bytes of specified max length, zero length included.
pub fn value(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate an attribute with a short value from a two-letter alphabet.
pub fn attribute() -> impl Strategy<Value = Attribute> {
    (attr_type(), prop::collection::vec(0u8..2, 0..=2)).prop_map(|(t, v)| Attribute::new(t, v))
}

/// Generate an attribute list for one record.
pub fn attributes(max: usize) -> impl Strategy<Value = Vec<Attribute>> {
    prop::collection::vec(attribute(), 0..=max)
}

/// Generate a hash mechanism usable in OAEP parameters.
pub fn hash_alg() -> impl Strategy<Value = MechType> {
    prop_oneof![
        Just(MechType::SHA_1),
        Just(MechType::SHA256),
        Just(MechType::SHA384),
        Just(MechType::SHA512),
    ]
}

/// Generate an MGF identifier.
pub fn mgf() -> impl Strategy<Value = Mgf> {
    prop_oneof![
        Just(Mgf::MGF1_SHA1),
        Just(Mgf::MGF1_SHA256),
        Just(Mgf::MGF1_SHA384),
        Just(Mgf::MGF1_SHA512),
    ]
}

/// Generate OAEP parameters with an arbitrary label.
pub fn oaep_params() -> impl Strategy<Value = OaepParams> {
    (hash_alg(), mgf(), value(16))
        .prop_map(|(hash, mgf, label)| OaepParams::new(hash, mgf).with_label(label))
}

/// Generate a mechanism descriptor, malformed parameter buffers included.
pub fn mechanism() -> impl Strategy<Value = Mechanism> {
    prop_oneof![
        Just(Mechanism::new(MechType::RSA_X_509)),
        oaep_params().prop_map(OaepParams::into_mechanism),
        value(30).prop_map(|p| Mechanism::with_parameter(MechType::RSA_PKCS_OAEP, p)),
        value(20).prop_map(|iv| Mechanism::with_parameter(MechType::AES_CBC, iv)),
        value(4).prop_map(|p| Mechanism::with_parameter(MechType::RSA_PKCS_PSS, p)),
    ]
}

/// Parameters for generating a token's contents.
#[derive(Debug, Clone)]
pub struct StoreParams {
    pub objects: Vec<Vec<Attribute>>,
}

impl Arbitrary for StoreParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::collection::vec(attributes(6), 0..24)
            .prop_map(|objects| StoreParams { objects })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TokenFixture;
    use tokenstore_core::{ObjectId, TokenError};

    proptest! {
        #[test]
        fn test_find_returns_exactly_the_matches(
            params: StoreParams,
            template in attributes(2),
            page in 1usize..5,
        ) {
            let mut fixture = TokenFixture::new();
            let ids: Vec<ObjectId> = params
                .objects
                .iter()
                .map(|attrs| fixture.add(attrs, &[]))
                .collect();

            let expected: Vec<ObjectId> = params
                .objects
                .iter()
                .zip(&ids)
                .filter(|(attrs, _)| template.iter().all(|t| attrs.contains(t)))
                .map(|(_, id)| *id)
                .collect();

            prop_assert_eq!(fixture.find_all(&template, page), expected);
        }

        #[test]
        fn test_identical_oaep_is_supported(params in oaep_params(), label in value(8)) {
            let mut fixture = TokenFixture::new();
            let id = fixture.add(&[], &[params.clone().into_mechanism()]);

            // The label never takes part in the comparison.
            let request = params.with_label(label).into_mechanism();
            prop_assert!(fixture.token.is_mech_supported(id, &request).is_ok());
        }

        #[test]
        fn test_mechanism_check_is_total(
            stored in prop::collection::vec(mechanism(), 0..6),
            request in mechanism(),
        ) {
            let mut fixture = TokenFixture::new();
            let id = fixture.add(&[], &stored);
            let tag = request.mechanism();
            let listed = stored.iter().any(|m| m.mechanism() == tag);

            match fixture.token.is_mech_supported(id, &request) {
                Ok(()) => prop_assert!(listed),
                Err(TokenError::MechanismInvalid(t)) => {
                    prop_assert_eq!(t, tag);
                    prop_assert!(!listed);
                }
                Err(TokenError::MechanismParamInvalid(t)) => {
                    prop_assert_eq!(t, tag);
                    prop_assert!(listed);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }
}
