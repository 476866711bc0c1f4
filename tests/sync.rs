#![cfg(feature = "resolv-sync")]

use ens_attributes::attr::{resolve_blocking, Field};
use ens_attributes::base::{Address, Name};
use ens_attributes::resolv::MemoryBackend;
use ens_attributes::ErrorKind;

#[test]
fn blocking() {
    let mut backend = MemoryBackend::new();
    backend
        .insert(
            &Name::new("sync.eth").unwrap(),
            Address::from_octets([0x42; 20]),
        )
        .set_addr(
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB".parse().unwrap(),
        );

    let res = resolve_blocking(&backend, "sync.eth", ["address"]).unwrap();
    assert_eq!(
        res.get(Field::Address),
        Some("0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB")
    );

    let err =
        resolve_blocking(&backend, "other.eth", ["address"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResolutionUnavailable);
}
