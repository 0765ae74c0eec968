//! Canned-response table
//!
//! An immutable mapping from normalized trigger phrases to fixed replies,
//! plus one designated default reply used when no trigger matches. A table
//! without a default is rejected at construction, so lookup is total.

use std::collections::BTreeMap;
use thiserror::Error;

/// Entry key that designates the default reply
const DEFAULT_KEY: &str = "default";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FallbackTableError {
    #[error("fallback table has no '{DEFAULT_KEY}' entry")]
    MissingDefault,
}

/// Immutable trigger-phrase table with an enforced default entry
#[derive(Debug, Clone)]
pub struct FallbackTable {
    entries: BTreeMap<String, String>,
    default_reply: String,
}

impl FallbackTable {
    /// Build a table from `(trigger, reply)` pairs. The pairs must include a
    /// `"default"` entry; it is extracted here rather than looked up per
    /// request.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, FallbackTableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let default_reply = entries
            .remove(DEFAULT_KEY)
            .ok_or(FallbackTableError::MissingDefault)?;

        Ok(Self {
            entries,
            default_reply,
        })
    }

    /// The built-in Vexus replies
    pub fn vexus() -> Self {
        Self::from_entries([
            ("oi", "Olá! Eu sou o Vexus. Como posso ajudar?"),
            ("olá", "Olá! Eu sou o Vexus. Como posso ajudar?"),
            (
                "como você está",
                "Estou funcionando perfeitamente! Pronto para ajudar.",
            ),
            ("quem é você", "Sou o Vexus, seu assistente pessoal inteligente."),
            ("obrigado", "De nada! Estou aqui para ajudar."),
            (
                DEFAULT_KEY,
                "Entendi! No momento estou em modo básico. Em breve terei respostas mais avançadas!",
            ),
        ])
        .expect("built-in table has a default entry")
    }

    /// Look up a normalized message. Total: unmatched input yields the
    /// default reply.
    pub fn lookup(&self, normalized: &str) -> &str {
        self.entries
            .get(normalized)
            .unwrap_or(&self.default_reply)
    }

    pub fn default_reply(&self) -> &str {
        &self.default_reply
    }
}
