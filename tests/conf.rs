#![cfg(feature = "serde")]

use ens_attributes::attr::{self, Field};
use ens_attributes::base::Name;
use ens_attributes::conf::{ConfError, HandlerConf};
use ens_attributes::resolv::MemoryBackend;
use rstest::rstest;

#[test]
fn deserialize() {
    let conf: HandlerConf = serde_json::from_str(
        r#"{
            "eth_rpc_endpoint": "https://rpc.example.net",
            "domain": "vitalik.eth",
            "attributes": ["address", "contenthash"]
        }"#,
    )
    .unwrap();
    assert_eq!(conf.endpoint.as_deref(), Some("https://rpc.example.net"));
    assert_eq!(conf.domain, "vitalik.eth");
    assert_eq!(conf.attributes, ["address", "contenthash"]);
    assert_eq!(conf.validate(), Ok(()));
}

#[rstest]
#[case(r#"{"domain": "vitalik.eth"}"#, true)]
#[case(r#"{"domain": "vitalik.eth", "attributes": []}"#, true)]
#[case(r#"{"attributes": ["address"]}"#, false)]
#[case(r#"{"domain": "vitalik.eth", "attribute": ["address"]}"#, false)]
#[case(r#"{"domain": "vitalik.eth", "endpoint": "x"}"#, false)]
fn shape(#[case] json: &str, #[case] ok: bool) {
    assert_eq!(serde_json::from_str::<HandlerConf>(json).is_ok(), ok);
}

#[test]
fn validate_unknown() {
    let conf: HandlerConf = serde_json::from_str(
        r#"{"domain": "vitalik.eth", "attributes": ["address", "avatar"]}"#,
    )
    .unwrap();
    assert_eq!(
        conf.validate(),
        Err(ConfError::UnknownAttribute("avatar".into()))
    );
}

#[test]
fn serialize() {
    let conf = HandlerConf::new("vitalik.eth", ["address"]);
    assert_eq!(
        serde_json::to_string(&conf).unwrap(),
        r#"{"domain":"vitalik.eth","attributes":["address"]}"#
    );
}

#[tokio::test]
async fn serialize_result() {
    let mut backend = MemoryBackend::new();
    backend.insert(
        &Name::new("vitalik.eth").unwrap(),
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb".parse().unwrap(),
    );
    let res = attr::resolve(&backend, "vitalik.eth", ["resolver_address"])
        .await
        .unwrap();
    assert_eq!(
        res.get(Field::ResolverAddress),
        Some("0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb")
    );
    assert_eq!(
        serde_json::to_string(&res).unwrap(),
        r#"{"Resolver-Address":"0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb"}"#
    );
}
