//! Settled transactions and their ledger mutation records, in the JSON shape
//! the ledger network emits: PascalCase transaction and ledger-entry fields,
//! lowercase bookkeeping fields, and externally tagged mutation records.

use {
    crate::amount::LedgerAmount,
    serde::{Deserialize, Serialize},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum LedgerEntryType {
    Offer,
    AccountRoot,
    DirectoryNode,
    RippleState,
    #[serde(other)]
    Other,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum TransactionType {
    OfferCreate,
    OfferCancel,
    Payment,
    #[serde(other)]
    Other,
}

/// Fields of a ledger entry as captured in a mutation record.
///
/// Only the fields this core reads are mapped; everything else the entry
/// carries is ignored. All fields are optional because the same struct covers
/// partial `PreviousFields` snapshots and non-Offer entry types.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NodeFields {
    pub account: Option<String>,
    pub sequence: Option<u32>,
    pub flags: Option<u32>,
    pub taker_gets: Option<LedgerAmount>,
    pub taker_pays: Option<LedgerAmount>,
    pub book_directory: Option<String>,
    pub expiration: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedNode {
    pub ledger_entry_type: LedgerEntryType,
    #[serde(default)]
    pub new_fields: NodeFields,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangedNode {
    pub ledger_entry_type: LedgerEntryType,
    #[serde(default)]
    pub final_fields: NodeFields,
    #[serde(default)]
    pub previous_fields: Option<NodeFields>,
}

/// One mutation record: a before/after snapshot of a single ledger entry
/// touched by a transaction.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum AffectedNode {
    CreatedNode(CreatedNode),
    ModifiedNode(ChangedNode),
    DeletedNode(ChangedNode),
}

impl AffectedNode {
    pub fn ledger_entry_type(&self) -> LedgerEntryType {
        match self {
            Self::CreatedNode(node) => node.ledger_entry_type,
            Self::ModifiedNode(node) | Self::DeletedNode(node) => node.ledger_entry_type,
        }
    }

    /// The entry's state after the transaction: new fields for created
    /// entries, final fields otherwise.
    pub fn fields(&self) -> &NodeFields {
        match self {
            Self::CreatedNode(node) => &node.new_fields,
            Self::ModifiedNode(node) | Self::DeletedNode(node) => &node.final_fields,
        }
    }

    /// The entry's state before the transaction, where the record has one.
    /// Only the fields that actually changed are present.
    pub fn previous_fields(&self) -> Option<&NodeFields> {
        match self {
            Self::CreatedNode(_) => None,
            Self::ModifiedNode(node) | Self::DeletedNode(node) => node.previous_fields.as_ref(),
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::DeletedNode(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TransactionMeta {
    #[serde(rename = "AffectedNodes", default)]
    pub affected_nodes: Vec<AffectedNode>,
}

/// A settled transaction together with its mutation records.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Transaction {
    pub account: Option<String>,
    pub transaction_type: Option<TransactionType>,
    pub flags: u32,
    pub sequence: Option<u32>,
    pub taker_gets: Option<LedgerAmount>,
    pub taker_pays: Option<LedgerAmount>,
    #[serde(rename = "ledger_index")]
    pub ledger_index: Option<u64>,
    #[serde(rename = "hash")]
    pub hash: Option<String>,
    #[serde(rename = "meta")]
    pub meta: TransactionMeta,
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn deserializes_mutation_records() {
        let tx: Transaction = serde_json::from_value(json!({
            "Account": "rKXCummUHnenhYudNb9UoJ4mGBR75vFcgz",
            "TransactionType": "OfferCreate",
            "Flags": 0x0002_0000,
            "Sequence": 218,
            "TakerGets": "10000000",
            "TakerPays": {
                "value": "0.1",
                "currency": "FAK",
                "issuer": "rLpq5RcRzA8FU1yUqEPW4xfsdwon7casuM",
            },
            "ledger_index": 5997476u64,
            "hash": "78B09A606C0CE5D1E2C3C889410CB8E8A5D20C62B2A0D487DFFBECE82A791822",
            "meta": {
                "AffectedNodes": [
                    {
                        "ModifiedNode": {
                            "LedgerEntryType": "Offer",
                            "FinalFields": {
                                "Account": "rNw4ozCG514KEjPs5cDrqEcdsi31Jtfm5r",
                                "Sequence": 127,
                                "Flags": 131072,
                                "TakerGets": {
                                    "value": "0.9",
                                    "currency": "FAK",
                                    "issuer": "rLpq5RcRzA8FU1yUqEPW4xfsdwon7casuM",
                                },
                                "TakerPays": "90000000",
                                "BookDirectory": "3314E812CD309A7DE88E3BEDED6127FCB050AAC661A0719E5D038D7EA4C68000",
                            },
                            "PreviousFields": {
                                "TakerGets": {
                                    "value": "1",
                                    "currency": "FAK",
                                    "issuer": "rLpq5RcRzA8FU1yUqEPW4xfsdwon7casuM",
                                },
                                "TakerPays": "100000000",
                            },
                        },
                    },
                    {
                        "ModifiedNode": {
                            "LedgerEntryType": "AccountRoot",
                            "FinalFields": {
                                "Account": "rKXCummUHnenhYudNb9UoJ4mGBR75vFcgz",
                                "Balance": "262268074",
                                "Sequence": 219,
                            },
                            "PreviousFields": {"Balance": "272268086", "Sequence": 218},
                        },
                    },
                    {
                        "CreatedNode": {
                            "LedgerEntryType": "RippleState",
                            "NewFields": {
                                "Balance": {
                                    "value": "0.1",
                                    "currency": "FAK",
                                    "issuer": "rrrrrrrrrrrrrrrrrrrrBZbvji",
                                },
                                "Flags": 65536,
                            },
                        },
                    },
                ],
            },
        }))
        .unwrap();

        assert_eq!(tx.transaction_type, Some(TransactionType::OfferCreate));
        assert_eq!(tx.flags, 0x0002_0000);
        assert_eq!(tx.meta.affected_nodes.len(), 3);

        let offer = &tx.meta.affected_nodes[0];
        assert_eq!(offer.ledger_entry_type(), LedgerEntryType::Offer);
        assert!(!offer.is_deleted());
        assert_eq!(
            offer.fields().account.as_deref(),
            Some("rNw4ozCG514KEjPs5cDrqEcdsi31Jtfm5r")
        );
        assert_eq!(offer.fields().sequence, Some(127));
        assert!(
            offer
                .previous_fields()
                .is_some_and(|previous| previous.taker_pays.is_some())
        );

        let account_root = &tx.meta.affected_nodes[1];
        assert_eq!(
            account_root.ledger_entry_type(),
            LedgerEntryType::AccountRoot
        );
        assert!(account_root.fields().taker_gets.is_none());

        let trust_line = &tx.meta.affected_nodes[2];
        assert_eq!(trust_line.ledger_entry_type(), LedgerEntryType::RippleState);
        assert_eq!(trust_line.previous_fields(), None);
    }

    #[test]
    fn unknown_entry_and_transaction_types_fold_to_other() {
        let tx: Transaction = serde_json::from_value(json!({
            "TransactionType": "TrustSet",
            "meta": {
                "AffectedNodes": [
                    {"ModifiedNode": {"LedgerEntryType": "Amendments", "FinalFields": {}}},
                ],
            },
        }))
        .unwrap();
        assert_eq!(tx.transaction_type, Some(TransactionType::Other));
        assert_eq!(
            tx.meta.affected_nodes[0].ledger_entry_type(),
            LedgerEntryType::Other
        );
    }
}
