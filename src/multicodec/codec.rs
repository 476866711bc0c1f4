//! The multicodec registry.

//------------ Codec ---------------------------------------------------------

varint_enum! {
    /// A multicodec.
    ///
    /// A multicodec is an integer identifying how a piece of binary data is
    /// to be interpreted. It is prefixed to the data as an unsigned varint.
    ///
    /// The registered values are maintained in the public [multicodec
    /// table]. Namespace codecs keep the `-ns` names under which they were
    /// first registered since that is how content pointers report them.
    /// Values missing here will be rejected as unknown by the decoder, so
    /// this table needs to follow the public one.
    ///
    /// [multicodec table]: https://github.com/multiformats/multicodec/blob/master/table.csv
    =>
    Codec;

    /// Raw binary, the multihash identity function.
    (IDENTITY => 0x00, "identity")
    (CIDV1 => 0x01, "cidv1")
    (CIDV2 => 0x02, "cidv2")
    (CIDV3 => 0x03, "cidv3")
    (IP4 => 0x04, "ip4")
    (TCP => 0x06, "tcp")
    (SHA1 => 0x11, "sha1")

    /// The SHA-256 multihash.
    (SHA2_256 => 0x12, "sha2-256")
    (SHA2_512 => 0x13, "sha2-512")
    (SHA3_512 => 0x14, "sha3-512")
    (SHA3_384 => 0x15, "sha3-384")
    (SHA3_256 => 0x16, "sha3-256")
    (SHA3_224 => 0x17, "sha3-224")
    (SHAKE_128 => 0x18, "shake-128")
    (SHAKE_256 => 0x19, "shake-256")
    (KECCAK_224 => 0x1a, "keccak-224")
    (KECCAK_256 => 0x1b, "keccak-256")
    (KECCAK_384 => 0x1c, "keccak-384")
    (KECCAK_512 => 0x1d, "keccak-512")
    (BLAKE3 => 0x1e, "blake3")
    (SHA2_384 => 0x20, "sha2-384")
    (DCCP => 0x21, "dccp")
    (MURMUR3_X64_64 => 0x22, "murmur3-x64-64")
    (MURMUR3_32 => 0x23, "murmur3-32")
    (IP6 => 0x29, "ip6")
    (IP6ZONE => 0x2a, "ip6zone")
    (IPCIDR => 0x2b, "ipcidr")
    (PATH => 0x2f, "path")
    (MULTICODEC => 0x30, "multicodec")
    (MULTIHASH => 0x31, "multihash")
    (MULTIADDR => 0x32, "multiaddr")
    (MULTIBASE => 0x33, "multibase")
    (VARSIG => 0x34, "varsig")
    (DNS => 0x35, "dns")
    (DNS4 => 0x36, "dns4")
    (DNS6 => 0x37, "dns6")
    (DNSADDR => 0x38, "dnsaddr")
    (PROTOBUF => 0x50, "protobuf")
    (CBOR => 0x51, "cbor")

    /// Raw binary IPLD data.
    (RAW => 0x55, "raw")
    (DBL_SHA2_256 => 0x56, "dbl-sha2-256")
    (RLP => 0x60, "rlp")
    (BENCODE => 0x63, "bencode")

    /// MerkleDAG protobuf, the codec of all version 0 content identifiers.
    (DAG_PB => 0x70, "dag-pb")
    (DAG_CBOR => 0x71, "dag-cbor")

    /// A libp2p public key, used by content identifiers of IPNS names.
    (LIBP2P_KEY => 0x72, "libp2p-key")
    (GIT_RAW => 0x78, "git-raw")
    (TORRENT_INFO => 0x7b, "torrent-info")
    (TORRENT_FILE => 0x7c, "torrent-file")
    (LEOFCOIN_BLOCK => 0x81, "leofcoin-block")
    (LEOFCOIN_TX => 0x82, "leofcoin-tx")
    (LEOFCOIN_PR => 0x83, "leofcoin-pr")
    (SCTP => 0x84, "sctp")
    (DAG_JOSE => 0x85, "dag-jose")
    (DAG_COSE => 0x86, "dag-cose")

    /// LBRY namespace.
    (LBRY => 0x8c, "lbry")
    (ETH_BLOCK => 0x90, "eth-block")
    (ETH_BLOCK_LIST => 0x91, "eth-block-list")
    (ETH_TX_TRIE => 0x92, "eth-tx-trie")
    (ETH_TX => 0x93, "eth-tx")
    (ETH_TX_RECEIPT_TRIE => 0x94, "eth-tx-receipt-trie")
    (ETH_TX_RECEIPT => 0x95, "eth-tx-receipt")
    (ETH_STATE_TRIE => 0x96, "eth-state-trie")
    (ETH_ACCOUNT_SNAPSHOT => 0x97, "eth-account-snapshot")
    (ETH_STORAGE_TRIE => 0x98, "eth-storage-trie")
    (ETH_RECEIPT_LOG_TRIE => 0x99, "eth-receipt-log-trie")
    (ETH_RECEIPT_LOG => 0x9a, "eth-receipt-log")
    (AES_128 => 0xa0, "aes-128")
    (AES_192 => 0xa1, "aes-192")
    (AES_256 => 0xa2, "aes-256")
    (CHACHA_128 => 0xa3, "chacha-128")
    (CHACHA_256 => 0xa4, "chacha-256")
    (BITCOIN_BLOCK => 0xb0, "bitcoin-block")
    (BITCOIN_TX => 0xb1, "bitcoin-tx")
    (BITCOIN_WITNESS_COMMITMENT => 0xb2, "bitcoin-witness-commitment")
    (ZCASH_BLOCK => 0xc0, "zcash-block")
    (ZCASH_TX => 0xc1, "zcash-tx")
    (CAIP_50 => 0xca, "caip-50")

    /// Ceramic stream identifier.
    (STREAMID => 0xce, "streamid")
    (STELLAR_BLOCK => 0xd0, "stellar-block")
    (STELLAR_TX => 0xd1, "stellar-tx")
    (MD4 => 0xd4, "md4")
    (MD5 => 0xd5, "md5")
    (DECRED_BLOCK => 0xe0, "decred-block")
    (DECRED_TX => 0xe1, "decred-tx")

    /// IPLD path namespace.
    (IPLD_NS => 0xe2, "ipld-ns")

    /// IPFS path namespace.
    ///
    /// The payload is a content identifier.
    (IPFS_NS => 0xe3, "ipfs-ns")

    /// Swarm path namespace.
    (SWARM_NS => 0xe4, "swarm-ns")

    /// IPNS path namespace.
    ///
    /// The payload is a content identifier.
    (IPNS_NS => 0xe5, "ipns-ns")
    (ZERONET => 0xe6, "zeronet")
    (SECP256K1_PUB => 0xe7, "secp256k1-pub")

    /// DNSLink path.
    (DNSLINK => 0xe8, "dnslink")
    (BLS12_381_G1_PUB => 0xea, "bls12_381-g1-pub")
    (BLS12_381_G2_PUB => 0xeb, "bls12_381-g2-pub")
    (X25519_PUB => 0xec, "x25519-pub")
    (ED25519_PUB => 0xed, "ed25519-pub")
    (BLS12_381_G1G2_PUB => 0xee, "bls12_381-g1g2-pub")
    (SR25519_PUB => 0xef, "sr25519-pub")
    (DASH_BLOCK => 0xf0, "dash-block")
    (DASH_TX => 0xf1, "dash-tx")
    (SWARM_MANIFEST => 0xfa, "swarm-manifest")
    (SWARM_FEED => 0xfb, "swarm-feed")
    (UDP => 0x0111, "udp")
    (P2P_WEBRTC_STAR => 0x0113, "p2p-webrtc-star")
    (P2P_WEBRTC_DIRECT => 0x0114, "p2p-webrtc-direct")
    (P2P_STARDUST => 0x0115, "p2p-stardust")
    (WEBRTC_DIRECT => 0x0118, "webrtc-direct")
    (WEBRTC => 0x0119, "webrtc")
    (P2P_CIRCUIT => 0x0122, "p2p-circuit")
    (DAG_JSON => 0x0129, "dag-json")
    (UDT => 0x012d, "udt")
    (UTP => 0x012e, "utp")
    (UNIX => 0x0190, "unix")
    (P2P => 0x01a5, "p2p")
    (HTTPS => 0x01bb, "https")

    /// Tor onion service, version 2.
    (ONION => 0x01bc, "onion")

    /// Tor onion service, version 3.
    (ONION3 => 0x01bd, "onion3")
    (GARLIC64 => 0x01be, "garlic64")
    (GARLIC32 => 0x01bf, "garlic32")
    (TLS => 0x01c0, "tls")
    (SNI => 0x01c1, "sni")
    (NOISE => 0x01c6, "noise")
    (SHS => 0x01c8, "shs")
    (QUIC => 0x01cc, "quic")
    (QUIC_V1 => 0x01cd, "quic-v1")
    (WEBTRANSPORT => 0x01d1, "webtransport")
    (CERTHASH => 0x01d2, "certhash")
    (WS => 0x01dd, "ws")
    (WSS => 0x01de, "wss")
    (P2P_WEBSOCKET_STAR => 0x01df, "p2p-websocket-star")
    (HTTP => 0x01e0, "http")
    (JSON => 0x0200, "json")
    (MESSAGEPACK => 0x0201, "messagepack")
    (CAR => 0x0202, "car")
    (IPNS_RECORD => 0x0300, "ipns-record")
    (LIBP2P_PEER_RECORD => 0x0301, "libp2p-peer-record")
    (LIBP2P_RELAY_RSVP => 0x0302, "libp2p-relay-rsvp")
    (MEMORYTRANSPORT => 0x0309, "memorytransport")
    (CAR_INDEX_SORTED => 0x0400, "car-index-sorted")
    (CAR_MULTIHASH_INDEX_SORTED => 0x0401, "car-multihash-index-sorted")
    (TRANSPORT_BITSWAP => 0x0900, "transport-bitswap")
    (TRANSPORT_GRAPHSYNC_FILECOINV1 => 0x0910, "transport-graphsync-filecoinv1")
    (TRANSPORT_IPFS_GATEWAY_HTTP => 0x0920, "transport-ipfs-gateway-http")
    (MULTIDID => 0x0d1d, "multidid")
    (SHA2_256_TRUNC254_PADDED => 0x1012, "sha2-256-trunc254-padded")
    (SHA2_224 => 0x1013, "sha2-224")
    (SHA2_512_224 => 0x1014, "sha2-512-224")
    (SHA2_512_256 => 0x1015, "sha2-512-256")
    (MURMUR3_X64_128 => 0x1022, "murmur3-x64-128")
    (RIPEMD_128 => 0x1052, "ripemd-128")
    (RIPEMD_160 => 0x1053, "ripemd-160")
    (RIPEMD_256 => 0x1054, "ripemd-256")
    (RIPEMD_320 => 0x1055, "ripemd-320")
    (X11 => 0x1100, "x11")
    (P256_PUB => 0x1200, "p256-pub")
    (P384_PUB => 0x1201, "p384-pub")
    (P521_PUB => 0x1202, "p521-pub")
    (ED448_PUB => 0x1203, "ed448-pub")
    (X448_PUB => 0x1204, "x448-pub")
    (RSA_PUB => 0x1205, "rsa-pub")
    (SM2_PUB => 0x1206, "sm2-pub")
    (ED25519_PRIV => 0x1300, "ed25519-priv")
    (SECP256K1_PRIV => 0x1301, "secp256k1-priv")
    (X25519_PRIV => 0x1302, "x25519-priv")
    (SR25519_PRIV => 0x1303, "sr25519-priv")
    (RSA_PRIV => 0x1305, "rsa-priv")
    (P256_PRIV => 0x1306, "p256-priv")
    (P384_PRIV => 0x1307, "p384-priv")
    (P521_PRIV => 0x1308, "p521-priv")
    (KANGAROOTWELVE => 0x1d01, "kangarootwelve")
    (SILVERPINE => 0x3f42, "silverpine")
    (SM3_256 => 0x534d, "sm3-256")

    /// BLAKE2b with digests of 8 to 512 bits in steps of 8.
    (BLAKE2B_8 => 0xb201, "blake2b-8")
    (BLAKE2B_16 => 0xb202, "blake2b-16")
    (BLAKE2B_24 => 0xb203, "blake2b-24")
    (BLAKE2B_32 => 0xb204, "blake2b-32")
    (BLAKE2B_40 => 0xb205, "blake2b-40")
    (BLAKE2B_48 => 0xb206, "blake2b-48")
    (BLAKE2B_56 => 0xb207, "blake2b-56")
    (BLAKE2B_64 => 0xb208, "blake2b-64")
    (BLAKE2B_72 => 0xb209, "blake2b-72")
    (BLAKE2B_80 => 0xb20a, "blake2b-80")
    (BLAKE2B_88 => 0xb20b, "blake2b-88")
    (BLAKE2B_96 => 0xb20c, "blake2b-96")
    (BLAKE2B_104 => 0xb20d, "blake2b-104")
    (BLAKE2B_112 => 0xb20e, "blake2b-112")
    (BLAKE2B_120 => 0xb20f, "blake2b-120")
    (BLAKE2B_128 => 0xb210, "blake2b-128")
    (BLAKE2B_136 => 0xb211, "blake2b-136")
    (BLAKE2B_144 => 0xb212, "blake2b-144")
    (BLAKE2B_152 => 0xb213, "blake2b-152")
    (BLAKE2B_160 => 0xb214, "blake2b-160")
    (BLAKE2B_168 => 0xb215, "blake2b-168")
    (BLAKE2B_176 => 0xb216, "blake2b-176")
    (BLAKE2B_184 => 0xb217, "blake2b-184")
    (BLAKE2B_192 => 0xb218, "blake2b-192")
    (BLAKE2B_200 => 0xb219, "blake2b-200")
    (BLAKE2B_208 => 0xb21a, "blake2b-208")
    (BLAKE2B_216 => 0xb21b, "blake2b-216")
    (BLAKE2B_224 => 0xb21c, "blake2b-224")
    (BLAKE2B_232 => 0xb21d, "blake2b-232")
    (BLAKE2B_240 => 0xb21e, "blake2b-240")
    (BLAKE2B_248 => 0xb21f, "blake2b-248")
    (BLAKE2B_256 => 0xb220, "blake2b-256")
    (BLAKE2B_264 => 0xb221, "blake2b-264")
    (BLAKE2B_272 => 0xb222, "blake2b-272")
    (BLAKE2B_280 => 0xb223, "blake2b-280")
    (BLAKE2B_288 => 0xb224, "blake2b-288")
    (BLAKE2B_296 => 0xb225, "blake2b-296")
    (BLAKE2B_304 => 0xb226, "blake2b-304")
    (BLAKE2B_312 => 0xb227, "blake2b-312")
    (BLAKE2B_320 => 0xb228, "blake2b-320")
    (BLAKE2B_328 => 0xb229, "blake2b-328")
    (BLAKE2B_336 => 0xb22a, "blake2b-336")
    (BLAKE2B_344 => 0xb22b, "blake2b-344")
    (BLAKE2B_352 => 0xb22c, "blake2b-352")
    (BLAKE2B_360 => 0xb22d, "blake2b-360")
    (BLAKE2B_368 => 0xb22e, "blake2b-368")
    (BLAKE2B_376 => 0xb22f, "blake2b-376")
    (BLAKE2B_384 => 0xb230, "blake2b-384")
    (BLAKE2B_392 => 0xb231, "blake2b-392")
    (BLAKE2B_400 => 0xb232, "blake2b-400")
    (BLAKE2B_408 => 0xb233, "blake2b-408")
    (BLAKE2B_416 => 0xb234, "blake2b-416")
    (BLAKE2B_424 => 0xb235, "blake2b-424")
    (BLAKE2B_432 => 0xb236, "blake2b-432")
    (BLAKE2B_440 => 0xb237, "blake2b-440")
    (BLAKE2B_448 => 0xb238, "blake2b-448")
    (BLAKE2B_456 => 0xb239, "blake2b-456")
    (BLAKE2B_464 => 0xb23a, "blake2b-464")
    (BLAKE2B_472 => 0xb23b, "blake2b-472")
    (BLAKE2B_480 => 0xb23c, "blake2b-480")
    (BLAKE2B_488 => 0xb23d, "blake2b-488")
    (BLAKE2B_496 => 0xb23e, "blake2b-496")
    (BLAKE2B_504 => 0xb23f, "blake2b-504")
    (BLAKE2B_512 => 0xb240, "blake2b-512")

    /// BLAKE2s with digests of 8 to 256 bits in steps of 8.
    (BLAKE2S_8 => 0xb241, "blake2s-8")
    (BLAKE2S_16 => 0xb242, "blake2s-16")
    (BLAKE2S_24 => 0xb243, "blake2s-24")
    (BLAKE2S_32 => 0xb244, "blake2s-32")
    (BLAKE2S_40 => 0xb245, "blake2s-40")
    (BLAKE2S_48 => 0xb246, "blake2s-48")
    (BLAKE2S_56 => 0xb247, "blake2s-56")
    (BLAKE2S_64 => 0xb248, "blake2s-64")
    (BLAKE2S_72 => 0xb249, "blake2s-72")
    (BLAKE2S_80 => 0xb24a, "blake2s-80")
    (BLAKE2S_88 => 0xb24b, "blake2s-88")
    (BLAKE2S_96 => 0xb24c, "blake2s-96")
    (BLAKE2S_104 => 0xb24d, "blake2s-104")
    (BLAKE2S_112 => 0xb24e, "blake2s-112")
    (BLAKE2S_120 => 0xb24f, "blake2s-120")
    (BLAKE2S_128 => 0xb250, "blake2s-128")
    (BLAKE2S_136 => 0xb251, "blake2s-136")
    (BLAKE2S_144 => 0xb252, "blake2s-144")
    (BLAKE2S_152 => 0xb253, "blake2s-152")
    (BLAKE2S_160 => 0xb254, "blake2s-160")
    (BLAKE2S_168 => 0xb255, "blake2s-168")
    (BLAKE2S_176 => 0xb256, "blake2s-176")
    (BLAKE2S_184 => 0xb257, "blake2s-184")
    (BLAKE2S_192 => 0xb258, "blake2s-192")
    (BLAKE2S_200 => 0xb259, "blake2s-200")
    (BLAKE2S_208 => 0xb25a, "blake2s-208")
    (BLAKE2S_216 => 0xb25b, "blake2s-216")
    (BLAKE2S_224 => 0xb25c, "blake2s-224")
    (BLAKE2S_232 => 0xb25d, "blake2s-232")
    (BLAKE2S_240 => 0xb25e, "blake2s-240")
    (BLAKE2S_248 => 0xb25f, "blake2s-248")
    (BLAKE2S_256 => 0xb260, "blake2s-256")

    /// Skein-256 with digests of 8 to 256 bits in steps of 8.
    (SKEIN256_8 => 0xb301, "skein256-8")
    (SKEIN256_16 => 0xb302, "skein256-16")
    (SKEIN256_24 => 0xb303, "skein256-24")
    (SKEIN256_32 => 0xb304, "skein256-32")
    (SKEIN256_40 => 0xb305, "skein256-40")
    (SKEIN256_48 => 0xb306, "skein256-48")
    (SKEIN256_56 => 0xb307, "skein256-56")
    (SKEIN256_64 => 0xb308, "skein256-64")
    (SKEIN256_72 => 0xb309, "skein256-72")
    (SKEIN256_80 => 0xb30a, "skein256-80")
    (SKEIN256_88 => 0xb30b, "skein256-88")
    (SKEIN256_96 => 0xb30c, "skein256-96")
    (SKEIN256_104 => 0xb30d, "skein256-104")
    (SKEIN256_112 => 0xb30e, "skein256-112")
    (SKEIN256_120 => 0xb30f, "skein256-120")
    (SKEIN256_128 => 0xb310, "skein256-128")
    (SKEIN256_136 => 0xb311, "skein256-136")
    (SKEIN256_144 => 0xb312, "skein256-144")
    (SKEIN256_152 => 0xb313, "skein256-152")
    (SKEIN256_160 => 0xb314, "skein256-160")
    (SKEIN256_168 => 0xb315, "skein256-168")
    (SKEIN256_176 => 0xb316, "skein256-176")
    (SKEIN256_184 => 0xb317, "skein256-184")
    (SKEIN256_192 => 0xb318, "skein256-192")
    (SKEIN256_200 => 0xb319, "skein256-200")
    (SKEIN256_208 => 0xb31a, "skein256-208")
    (SKEIN256_216 => 0xb31b, "skein256-216")
    (SKEIN256_224 => 0xb31c, "skein256-224")
    (SKEIN256_232 => 0xb31d, "skein256-232")
    (SKEIN256_240 => 0xb31e, "skein256-240")
    (SKEIN256_248 => 0xb31f, "skein256-248")
    (SKEIN256_256 => 0xb320, "skein256-256")

    /// Skein-512 with digests of 8 to 512 bits in steps of 8.
    (SKEIN512_8 => 0xb321, "skein512-8")
    (SKEIN512_16 => 0xb322, "skein512-16")
    (SKEIN512_24 => 0xb323, "skein512-24")
    (SKEIN512_32 => 0xb324, "skein512-32")
    (SKEIN512_40 => 0xb325, "skein512-40")
    (SKEIN512_48 => 0xb326, "skein512-48")
    (SKEIN512_56 => 0xb327, "skein512-56")
    (SKEIN512_64 => 0xb328, "skein512-64")
    (SKEIN512_72 => 0xb329, "skein512-72")
    (SKEIN512_80 => 0xb32a, "skein512-80")
    (SKEIN512_88 => 0xb32b, "skein512-88")
    (SKEIN512_96 => 0xb32c, "skein512-96")
    (SKEIN512_104 => 0xb32d, "skein512-104")
    (SKEIN512_112 => 0xb32e, "skein512-112")
    (SKEIN512_120 => 0xb32f, "skein512-120")
    (SKEIN512_128 => 0xb330, "skein512-128")
    (SKEIN512_136 => 0xb331, "skein512-136")
    (SKEIN512_144 => 0xb332, "skein512-144")
    (SKEIN512_152 => 0xb333, "skein512-152")
    (SKEIN512_160 => 0xb334, "skein512-160")
    (SKEIN512_168 => 0xb335, "skein512-168")
    (SKEIN512_176 => 0xb336, "skein512-176")
    (SKEIN512_184 => 0xb337, "skein512-184")
    (SKEIN512_192 => 0xb338, "skein512-192")
    (SKEIN512_200 => 0xb339, "skein512-200")
    (SKEIN512_208 => 0xb33a, "skein512-208")
    (SKEIN512_216 => 0xb33b, "skein512-216")
    (SKEIN512_224 => 0xb33c, "skein512-224")
    (SKEIN512_232 => 0xb33d, "skein512-232")
    (SKEIN512_240 => 0xb33e, "skein512-240")
    (SKEIN512_248 => 0xb33f, "skein512-248")
    (SKEIN512_256 => 0xb340, "skein512-256")
    (SKEIN512_264 => 0xb341, "skein512-264")
    (SKEIN512_272 => 0xb342, "skein512-272")
    (SKEIN512_280 => 0xb343, "skein512-280")
    (SKEIN512_288 => 0xb344, "skein512-288")
    (SKEIN512_296 => 0xb345, "skein512-296")
    (SKEIN512_304 => 0xb346, "skein512-304")
    (SKEIN512_312 => 0xb347, "skein512-312")
    (SKEIN512_320 => 0xb348, "skein512-320")
    (SKEIN512_328 => 0xb349, "skein512-328")
    (SKEIN512_336 => 0xb34a, "skein512-336")
    (SKEIN512_344 => 0xb34b, "skein512-344")
    (SKEIN512_352 => 0xb34c, "skein512-352")
    (SKEIN512_360 => 0xb34d, "skein512-360")
    (SKEIN512_368 => 0xb34e, "skein512-368")
    (SKEIN512_376 => 0xb34f, "skein512-376")
    (SKEIN512_384 => 0xb350, "skein512-384")
    (SKEIN512_392 => 0xb351, "skein512-392")
    (SKEIN512_400 => 0xb352, "skein512-400")
    (SKEIN512_408 => 0xb353, "skein512-408")
    (SKEIN512_416 => 0xb354, "skein512-416")
    (SKEIN512_424 => 0xb355, "skein512-424")
    (SKEIN512_432 => 0xb356, "skein512-432")
    (SKEIN512_440 => 0xb357, "skein512-440")
    (SKEIN512_448 => 0xb358, "skein512-448")
    (SKEIN512_456 => 0xb359, "skein512-456")
    (SKEIN512_464 => 0xb35a, "skein512-464")
    (SKEIN512_472 => 0xb35b, "skein512-472")
    (SKEIN512_480 => 0xb35c, "skein512-480")
    (SKEIN512_488 => 0xb35d, "skein512-488")
    (SKEIN512_496 => 0xb35e, "skein512-496")
    (SKEIN512_504 => 0xb35f, "skein512-504")
    (SKEIN512_512 => 0xb360, "skein512-512")

    /// Skein-1024 with digests of 8 to 1024 bits in steps of 8.
    (SKEIN1024_8 => 0xb361, "skein1024-8")
    (SKEIN1024_16 => 0xb362, "skein1024-16")
    (SKEIN1024_24 => 0xb363, "skein1024-24")
    (SKEIN1024_32 => 0xb364, "skein1024-32")
    (SKEIN1024_40 => 0xb365, "skein1024-40")
    (SKEIN1024_48 => 0xb366, "skein1024-48")
    (SKEIN1024_56 => 0xb367, "skein1024-56")
    (SKEIN1024_64 => 0xb368, "skein1024-64")
    (SKEIN1024_72 => 0xb369, "skein1024-72")
    (SKEIN1024_80 => 0xb36a, "skein1024-80")
    (SKEIN1024_88 => 0xb36b, "skein1024-88")
    (SKEIN1024_96 => 0xb36c, "skein1024-96")
    (SKEIN1024_104 => 0xb36d, "skein1024-104")
    (SKEIN1024_112 => 0xb36e, "skein1024-112")
    (SKEIN1024_120 => 0xb36f, "skein1024-120")
    (SKEIN1024_128 => 0xb370, "skein1024-128")
    (SKEIN1024_136 => 0xb371, "skein1024-136")
    (SKEIN1024_144 => 0xb372, "skein1024-144")
    (SKEIN1024_152 => 0xb373, "skein1024-152")
    (SKEIN1024_160 => 0xb374, "skein1024-160")
    (SKEIN1024_168 => 0xb375, "skein1024-168")
    (SKEIN1024_176 => 0xb376, "skein1024-176")
    (SKEIN1024_184 => 0xb377, "skein1024-184")
    (SKEIN1024_192 => 0xb378, "skein1024-192")
    (SKEIN1024_200 => 0xb379, "skein1024-200")
    (SKEIN1024_208 => 0xb37a, "skein1024-208")
    (SKEIN1024_216 => 0xb37b, "skein1024-216")
    (SKEIN1024_224 => 0xb37c, "skein1024-224")
    (SKEIN1024_232 => 0xb37d, "skein1024-232")
    (SKEIN1024_240 => 0xb37e, "skein1024-240")
    (SKEIN1024_248 => 0xb37f, "skein1024-248")
    (SKEIN1024_256 => 0xb380, "skein1024-256")
    (SKEIN1024_264 => 0xb381, "skein1024-264")
    (SKEIN1024_272 => 0xb382, "skein1024-272")
    (SKEIN1024_280 => 0xb383, "skein1024-280")
    (SKEIN1024_288 => 0xb384, "skein1024-288")
    (SKEIN1024_296 => 0xb385, "skein1024-296")
    (SKEIN1024_304 => 0xb386, "skein1024-304")
    (SKEIN1024_312 => 0xb387, "skein1024-312")
    (SKEIN1024_320 => 0xb388, "skein1024-320")
    (SKEIN1024_328 => 0xb389, "skein1024-328")
    (SKEIN1024_336 => 0xb38a, "skein1024-336")
    (SKEIN1024_344 => 0xb38b, "skein1024-344")
    (SKEIN1024_352 => 0xb38c, "skein1024-352")
    (SKEIN1024_360 => 0xb38d, "skein1024-360")
    (SKEIN1024_368 => 0xb38e, "skein1024-368")
    (SKEIN1024_376 => 0xb38f, "skein1024-376")
    (SKEIN1024_384 => 0xb390, "skein1024-384")
    (SKEIN1024_392 => 0xb391, "skein1024-392")
    (SKEIN1024_400 => 0xb392, "skein1024-400")
    (SKEIN1024_408 => 0xb393, "skein1024-408")
    (SKEIN1024_416 => 0xb394, "skein1024-416")
    (SKEIN1024_424 => 0xb395, "skein1024-424")
    (SKEIN1024_432 => 0xb396, "skein1024-432")
    (SKEIN1024_440 => 0xb397, "skein1024-440")
    (SKEIN1024_448 => 0xb398, "skein1024-448")
    (SKEIN1024_456 => 0xb399, "skein1024-456")
    (SKEIN1024_464 => 0xb39a, "skein1024-464")
    (SKEIN1024_472 => 0xb39b, "skein1024-472")
    (SKEIN1024_480 => 0xb39c, "skein1024-480")
    (SKEIN1024_488 => 0xb39d, "skein1024-488")
    (SKEIN1024_496 => 0xb39e, "skein1024-496")
    (SKEIN1024_504 => 0xb39f, "skein1024-504")
    (SKEIN1024_512 => 0xb3a0, "skein1024-512")
    (SKEIN1024_520 => 0xb3a1, "skein1024-520")
    (SKEIN1024_528 => 0xb3a2, "skein1024-528")
    (SKEIN1024_536 => 0xb3a3, "skein1024-536")
    (SKEIN1024_544 => 0xb3a4, "skein1024-544")
    (SKEIN1024_552 => 0xb3a5, "skein1024-552")
    (SKEIN1024_560 => 0xb3a6, "skein1024-560")
    (SKEIN1024_568 => 0xb3a7, "skein1024-568")
    (SKEIN1024_576 => 0xb3a8, "skein1024-576")
    (SKEIN1024_584 => 0xb3a9, "skein1024-584")
    (SKEIN1024_592 => 0xb3aa, "skein1024-592")
    (SKEIN1024_600 => 0xb3ab, "skein1024-600")
    (SKEIN1024_608 => 0xb3ac, "skein1024-608")
    (SKEIN1024_616 => 0xb3ad, "skein1024-616")
    (SKEIN1024_624 => 0xb3ae, "skein1024-624")
    (SKEIN1024_632 => 0xb3af, "skein1024-632")
    (SKEIN1024_640 => 0xb3b0, "skein1024-640")
    (SKEIN1024_648 => 0xb3b1, "skein1024-648")
    (SKEIN1024_656 => 0xb3b2, "skein1024-656")
    (SKEIN1024_664 => 0xb3b3, "skein1024-664")
    (SKEIN1024_672 => 0xb3b4, "skein1024-672")
    (SKEIN1024_680 => 0xb3b5, "skein1024-680")
    (SKEIN1024_688 => 0xb3b6, "skein1024-688")
    (SKEIN1024_696 => 0xb3b7, "skein1024-696")
    (SKEIN1024_704 => 0xb3b8, "skein1024-704")
    (SKEIN1024_712 => 0xb3b9, "skein1024-712")
    (SKEIN1024_720 => 0xb3ba, "skein1024-720")
    (SKEIN1024_728 => 0xb3bb, "skein1024-728")
    (SKEIN1024_736 => 0xb3bc, "skein1024-736")
    (SKEIN1024_744 => 0xb3bd, "skein1024-744")
    (SKEIN1024_752 => 0xb3be, "skein1024-752")
    (SKEIN1024_760 => 0xb3bf, "skein1024-760")
    (SKEIN1024_768 => 0xb3c0, "skein1024-768")
    (SKEIN1024_776 => 0xb3c1, "skein1024-776")
    (SKEIN1024_784 => 0xb3c2, "skein1024-784")
    (SKEIN1024_792 => 0xb3c3, "skein1024-792")
    (SKEIN1024_800 => 0xb3c4, "skein1024-800")
    (SKEIN1024_808 => 0xb3c5, "skein1024-808")
    (SKEIN1024_816 => 0xb3c6, "skein1024-816")
    (SKEIN1024_824 => 0xb3c7, "skein1024-824")
    (SKEIN1024_832 => 0xb3c8, "skein1024-832")
    (SKEIN1024_840 => 0xb3c9, "skein1024-840")
    (SKEIN1024_848 => 0xb3ca, "skein1024-848")
    (SKEIN1024_856 => 0xb3cb, "skein1024-856")
    (SKEIN1024_864 => 0xb3cc, "skein1024-864")
    (SKEIN1024_872 => 0xb3cd, "skein1024-872")
    (SKEIN1024_880 => 0xb3ce, "skein1024-880")
    (SKEIN1024_888 => 0xb3cf, "skein1024-888")
    (SKEIN1024_896 => 0xb3d0, "skein1024-896")
    (SKEIN1024_904 => 0xb3d1, "skein1024-904")
    (SKEIN1024_912 => 0xb3d2, "skein1024-912")
    (SKEIN1024_920 => 0xb3d3, "skein1024-920")
    (SKEIN1024_928 => 0xb3d4, "skein1024-928")
    (SKEIN1024_936 => 0xb3d5, "skein1024-936")
    (SKEIN1024_944 => 0xb3d6, "skein1024-944")
    (SKEIN1024_952 => 0xb3d7, "skein1024-952")
    (SKEIN1024_960 => 0xb3d8, "skein1024-960")
    (SKEIN1024_968 => 0xb3d9, "skein1024-968")
    (SKEIN1024_976 => 0xb3da, "skein1024-976")
    (SKEIN1024_984 => 0xb3db, "skein1024-984")
    (SKEIN1024_992 => 0xb3dc, "skein1024-992")
    (SKEIN1024_1000 => 0xb3dd, "skein1024-1000")
    (SKEIN1024_1008 => 0xb3de, "skein1024-1008")
    (SKEIN1024_1016 => 0xb3df, "skein1024-1016")
    (SKEIN1024_1024 => 0xb3e0, "skein1024-1024")
    (XXH_32 => 0xb3e1, "xxh-32")
    (XXH_64 => 0xb3e2, "xxh-64")
    (XXH3_64 => 0xb3e3, "xxh3-64")
    (XXH3_128 => 0xb3e4, "xxh3-128")
    (POSEIDON_BLS12_381_A2_FC1 => 0xb401, "poseidon-bls12_381-a2-fc1")
    (POSEIDON_BLS12_381_A2_FC1_SC => 0xb402, "poseidon-bls12_381-a2-fc1-sc")
    (ZEROXCERT_IMPRINT_256 => 0xce11, "zeroxcert-imprint-256")
    (NONSTANDARD_SIG => 0xd000, "nonstandard-sig")
    (ES256K => 0xd0e7, "es256k")
    (BLS12_381_G1_SIG => 0xd0ea, "bls12_381-g1-sig")
    (BLS12_381_G2_SIG => 0xd0eb, "bls12_381-g2-sig")
    (EDDSA => 0xd0ed, "eddsa")
    (EIP_191 => 0xd191, "eip-191")
    (JWK_JCS_PUB => 0xeb51, "jwk_jcs-pub")
    (FIL_COMMITMENT_UNSEALED => 0xf101, "fil-commitment-unsealed")
    (FIL_COMMITMENT_SEALED => 0xf102, "fil-commitment-sealed")
    (PLAINTEXTV2 => 0x706c61, "plaintextv2")
    (HOLOCHAIN_ADR_V0 => 0x807124, "holochain-adr-v0")
    (HOLOCHAIN_ADR_V1 => 0x817124, "holochain-adr-v1")
    (HOLOCHAIN_KEY_V0 => 0x947124, "holochain-key-v0")
    (HOLOCHAIN_KEY_V1 => 0x957124, "holochain-key-v1")
    (HOLOCHAIN_SIG_V0 => 0xa27124, "holochain-sig-v0")
    (HOLOCHAIN_SIG_V1 => 0xa37124, "holochain-sig-v1")

    /// Skynet namespace.
    (SKYNET_NS => 0xb19910, "skynet-ns")

    /// Arweave namespace.
    (ARWEAVE_NS => 0xb29910, "arweave-ns")
    (SUBSPACE_NS => 0xb39910, "subspace-ns")
    (KUMANDRA_NS => 0xb49910, "kumandra-ns")
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::parse::Parser;
    use std::string::ToString;
    use std::vec::Vec;

    #[test]
    fn names() {
        assert_eq!(Codec::IPFS_NS.to_name(), Some("ipfs-ns"));
        assert_eq!(Codec::from_int(0xe5).to_name(), Some("ipns-ns"));
        assert_eq!(Codec::from_name("SWARM-NS"), Some(Codec::SWARM_NS));
        assert_eq!(Codec::from_name("no-such-codec"), None);
        assert!(!Codec::from_int(0x7ff0).is_registered());
    }

    #[test]
    fn namespaces() {
        for (code, name) in [
            (0x2f, "path"),
            (0x8c, "lbry"),
            (0xce, "streamid"),
            (0xe2, "ipld-ns"),
            (0xe3, "ipfs-ns"),
            (0xe4, "swarm-ns"),
            (0xe5, "ipns-ns"),
            (0xe6, "zeronet"),
            (0xe8, "dnslink"),
            (0xb19910, "skynet-ns"),
            (0xb29910, "arweave-ns"),
            (0xb39910, "subspace-ns"),
            (0xb49910, "kumandra-ns"),
        ] {
            let codec = Codec::from_int(code);
            assert_eq!(codec.to_name(), Some(name));
            assert_eq!(Codec::from_name(name), Some(codec));
        }
    }

    #[test]
    fn hash_families() {
        assert_eq!(Codec::MURMUR3_X64_64.to_name(), Some("murmur3-x64-64"));
        assert_eq!(Codec::from_int(0xb201).to_name(), Some("blake2b-8"));
        assert_eq!(Codec::from_int(0xb220).to_name(), Some("blake2b-256"));
        assert_eq!(Codec::from_int(0xb240).to_name(), Some("blake2b-512"));
        assert_eq!(Codec::from_int(0xb241).to_name(), Some("blake2s-8"));
        assert_eq!(Codec::from_int(0xb260).to_name(), Some("blake2s-256"));
        assert_eq!(Codec::from_int(0xb301).to_name(), Some("skein256-8"));
        assert_eq!(Codec::from_int(0xb360).to_name(), Some("skein512-512"));
        assert_eq!(Codec::from_int(0xb3e0).to_name(), Some("skein1024-1024"));
    }

    #[test]
    fn registry_order() {
        assert!(Codec::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(Codec::ALL.iter().all(|codec| codec.is_registered()));
    }

    #[test]
    fn display() {
        assert_eq!(Codec::ARWEAVE_NS.to_string(), "arweave-ns");
        assert_eq!(Codec::from_int(0x7ff0).to_string(), "0x7ff0");
        assert_eq!(format!("{:?}", Codec::DAG_PB), "Codec::dag-pb");
    }

    #[test]
    fn wire_format() {
        let mut buf = Vec::new();
        Codec::SKYNET_NS.compose(&mut buf).unwrap();
        assert_eq!(buf, b"\x90\xb2\xc6\x05");
        assert_eq!(Codec::SKYNET_NS.compose_len(), 4);

        let mut parser = Parser::from_ref(buf.as_slice());
        assert_eq!(Codec::parse(&mut parser).unwrap(), Codec::SKYNET_NS);
        assert_eq!(parser.remaining(), 0);
    }
}
