//! Static registry of supported namespace/method pairs.
//!
//! Each method carries the ordered list of positional argument kinds
//! it expects. The table is completion guidance only: execution never
//! enforces arity or kinds, because the remote endpoint is the
//! authority on argument validity.

/// Completion-time classification of an expected positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Open-ended 0x-prefixed value (address, hash, quantity).
    Hex,
    /// "true" | "false"
    Bool,
    /// "earliest" | "latest" | "pending"
    BlockNum,
    /// Anything; no suggestions offered.
    Free,
}

impl ArgKind {
    /// The fixed literal set to suggest for this kind. Open-ended
    /// kinds have no literals.
    pub fn literals(self) -> &'static [&'static str] {
        match self {
            ArgKind::Bool => &["true", "false"],
            ArgKind::BlockNum => &["earliest", "latest", "pending"],
            ArgKind::Hex | ArgKind::Free => &[],
        }
    }
}

#[derive(Debug)]
pub struct MethodSpec {
    pub name: &'static str,
    pub args: &'static [ArgKind],
}

#[derive(Debug)]
pub struct Namespace {
    pub name: &'static str,
    pub methods: &'static [MethodSpec],
}

const fn m(name: &'static str, args: &'static [ArgKind]) -> MethodSpec {
    MethodSpec { name, args }
}

use ArgKind::{BlockNum, Bool, Hex};

// getLogs, signTransaction and sendTransaction take named-field
// objects rather than positional tokens, so they carry no positional
// contract and completion stops at the method name.
static ETH_METHODS: &[MethodSpec] = &[
    m("accounts", &[]),
    m("blockNumber", &[]),
    m("call", &[]),
    m("coinbase", &[]),
    m("compileLLL", &[]),
    m("compileSerpent", &[]),
    m("compileSolidity", &[]),
    m("estimateGas", &[]),
    m("gasPrice", &[]),
    m("getBalance", &[Hex, BlockNum]),
    m("getBlockByHash", &[Hex, Bool]),
    m("getBlockByNumber", &[BlockNum, Bool]),
    m("getBlockTransactionCountByHash", &[Hex]),
    m("getBlockTransactionCountByNumber", &[BlockNum]),
    m("getCode", &[Hex, BlockNum]),
    m("getCompilers", &[]),
    m("getFilterChanges", &[Hex]),
    m("getFilterLogs", &[]),
    m("getLogs", &[]),
    m("getStorageAt", &[Hex, Hex, BlockNum]),
    m("getTransactionCount", &[Hex, BlockNum]),
    m("getTransactionReceipt", &[Hex]),
    m("getTransactionsByBlockHashAndIndex", &[Hex, Hex]),
    m("getTransactionsByBlockNumberAndIndex", &[BlockNum, Hex]),
    m("getTransactionsByHash", &[Hex]),
    m("getUncleByBlockHashAndIndex", &[Hex, Hex]),
    m("getUncleByBlockNumberAndIndex", &[BlockNum, Hex]),
    m("getUncleCountByBlockHash", &[Hex]),
    m("getUncleCountByBlockNumber", &[BlockNum]),
    m("getWork", &[Hex, Hex, Hex]),
    m("hashrate", &[]),
    m("mining", &[]),
    m("newBlockFilter", &[]),
    m("newFilter", &[]),
    m("newPendingTransactionFilter", &[]),
    m("protocolVersion", &[]),
    m("sendRawTransaction", &[Hex]),
    m("sendTransaction", &[]),
    m("sign", &[Hex, Hex]),
    m("signTransaction", &[]),
    m("submitHashrate", &[Hex, Hex]),
    m("submitWork", &[Hex, Hex, Hex]),
    m("syncing", &[]),
    m("uninstallFilter", &[]),
];

static NET_METHODS: &[MethodSpec] = &[
    m("listening", &[]),
    m("peerCount", &[]),
    m("version", &[]),
];

static WEB3_METHODS: &[MethodSpec] = &[m("clientVersion", &[]), m("sha3", &[])];

pub static NAMESPACES: &[Namespace] = &[
    Namespace {
        name: "eth",
        methods: ETH_METHODS,
    },
    Namespace {
        name: "net",
        methods: NET_METHODS,
    },
    Namespace {
        name: "web3",
        methods: WEB3_METHODS,
    },
];

/// Looks up a namespace by name.
pub fn namespace(name: &str) -> Option<&'static Namespace> {
    NAMESPACES.iter().find(|ns| ns.name == name)
}

/// Looks up a method within a namespace.
pub fn lookup(ns: &str, method: &str) -> Option<&'static MethodSpec> {
    namespace(ns)?.methods.iter().find(|m| m.name == method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_lookup() {
        assert!(namespace("eth").is_some());
        assert!(namespace("net").is_some());
        assert!(namespace("web3").is_some());
        assert!(namespace("ipfs").is_none());
    }

    #[test]
    fn test_method_lookup() {
        let spec = lookup("eth", "getBalance").unwrap();
        assert_eq!(spec.args, &[ArgKind::Hex, ArgKind::BlockNum]);

        let spec = lookup("eth", "getBlockByNumber").unwrap();
        assert_eq!(spec.args, &[ArgKind::BlockNum, ArgKind::Bool]);

        assert!(lookup("eth", "getRichQuick").is_none());
        assert!(lookup("net", "getBalance").is_none());
    }

    #[test]
    fn test_no_arg_namespaces() {
        for ns in ["net", "web3"] {
            for spec in namespace(ns).unwrap().methods {
                assert!(spec.args.is_empty(), "{ns}_{} should take no args", spec.name);
            }
        }
    }

    #[test]
    fn test_complex_methods_have_no_positional_contract() {
        for name in ["getLogs", "signTransaction", "sendTransaction"] {
            assert!(lookup("eth", name).unwrap().args.is_empty());
        }
    }

    #[test]
    fn test_literals() {
        assert_eq!(ArgKind::Bool.literals(), &["true", "false"]);
        assert_eq!(
            ArgKind::BlockNum.literals(),
            &["earliest", "latest", "pending"]
        );
        assert!(ArgKind::Hex.literals().is_empty());
        assert!(ArgKind::Free.literals().is_empty());
    }
}
